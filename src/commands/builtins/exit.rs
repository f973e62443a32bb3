use crate::commands::registry::BuiltinCommand;
use crate::errors::ShellResult;
use crate::session::Session;

pub struct ExitCommand;

impl BuiltinCommand for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn description(&self) -> &'static str {
        "Exit the shell"
    }

    fn execute(&self, _session: &mut Session, _args: &[String]) -> ShellResult<()> {
        // Termination is handled through exit_code(); nothing to do here.
        Ok(())
    }

    fn exit_code(&self, _args: &[String]) -> Option<i32> {
        Some(0)
    }
}
