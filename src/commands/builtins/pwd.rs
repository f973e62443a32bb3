use crate::commands::registry::BuiltinCommand;
use crate::errors::{ShellError, ShellResult};
use crate::session::{Session, MAX_PATH_LEN};
use std::env;

pub struct PwdCommand;

impl BuiltinCommand for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn description(&self) -> &'static str {
        "Print the current working directory"
    }

    fn execute(&self, _session: &mut Session, _args: &[String]) -> ShellResult<()> {
        let current_dir = env::current_dir().map_err(ShellError::IoError)?;
        if current_dir.as_os_str().len() > MAX_PATH_LEN {
            return Err(ShellError::LimitExceeded(
                "path name exceeds set length".to_string(),
            ));
        }
        println!("{}", current_dir.display());
        Ok(())
    }
}
