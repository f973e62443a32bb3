use crate::commands::registry::BuiltinCommand;
use crate::errors::{ShellError, ShellResult};
use crate::session::Session;
use std::env;

pub struct WalkCommand;

impl BuiltinCommand for WalkCommand {
    fn name(&self) -> &'static str {
        "walk"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["cd"]
    }

    fn description(&self) -> &'static str {
        "Change the current working directory"
    }

    fn execute(&self, _session: &mut Session, args: &[String]) -> ShellResult<()> {
        let name = args.first().map(String::as_str).unwrap_or("walk");
        // The no-argument form walks to the filesystem root.
        let target = args.get(1).map(String::as_str).unwrap_or("/");
        env::set_current_dir(target).map_err(|_| {
            ShellError::InvalidDirectory(format!("{}: {}: No such file or directory", name, target))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn walks_into_a_directory_and_back_to_root() {
        let saved = env::current_dir().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new();

        WalkCommand
            .execute(
                &mut session,
                &args(&["walk", &dir.path().display().to_string()]),
            )
            .unwrap();
        assert_eq!(
            env::current_dir().unwrap().canonicalize().unwrap(),
            dir.path().canonicalize().unwrap()
        );

        // No argument walks to the filesystem root.
        WalkCommand.execute(&mut session, &args(&["walk"])).unwrap();
        assert_eq!(env::current_dir().unwrap(), std::path::Path::new("/"));

        env::set_current_dir(saved).unwrap();
    }

    #[test]
    fn missing_directory_is_reported() {
        let mut session = Session::new();
        let result = WalkCommand.execute(
            &mut session,
            &args(&["walk", "/nonexistent-walksh-test"]),
        );
        assert!(matches!(result, Err(ShellError::InvalidDirectory(_))));
    }
}
