use crate::errors::{ShellError, ShellResult};
use crate::reaper;
use crate::redirection;
use crate::segment::{Separator, Stage};
use std::io;
use std::process::Command;

/// Map a spawn failure onto the shell's error taxonomy.
pub fn spawn_error(name: &str, err: io::Error) -> ShellError {
    if err.kind() == io::ErrorKind::NotFound {
        ShellError::CommandNotFound(format!("{}: command not found", name))
    } else {
        ShellError::ExecutionError(format!("Failed to execute {}: {}", name, err))
    }
}

/// Execute one non-piped stage.
///
/// The parent blocks until the child terminates unless the stage's
/// separator is `&`, in which case the child is left to the reaper.
pub fn run_stage(stage: &Stage) -> ShellResult<()> {
    let Some(program) = stage.argv.first() else {
        return Err(ShellError::MissingArgument(
            "no command before separator".to_string(),
        ));
    };

    let mut cmd = Command::new(program);
    cmd.args(&stage.argv[1..]);
    redirection::apply(&mut cmd, stage)?;

    let mut child = cmd.spawn().map_err(|e| spawn_error(program, e))?;
    if stage.separator == Separator::Background {
        reaper::watch(child);
    } else {
        let _ = child.wait();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::{segment, tokenize};
    use std::fs;

    #[test]
    fn runs_a_stage_with_output_redirection() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.txt");

        let line = format!("echo one two > {}", out.display());
        let stages = segment(tokenize(&line)).unwrap();
        run_stage(&stages[0]).unwrap();

        assert_eq!(fs::read_to_string(&out).unwrap(), "one two\n");
    }

    #[test]
    fn unknown_program_maps_to_command_not_found() {
        let stages = segment(tokenize("definitely-not-a-walksh-program")).unwrap();
        assert!(matches!(
            run_stage(&stages[0]),
            Err(ShellError::CommandNotFound(_))
        ));
    }

    #[test]
    fn stage_without_a_command_is_rejected() {
        // A stage of redirection tokens only has an empty argv.
        let stages = segment(tokenize("> out.txt ;")).unwrap();
        assert!(matches!(
            run_stage(&stages[0]),
            Err(ShellError::MissingArgument(_))
        ));
    }

    #[test]
    fn background_stage_returns_without_waiting() {
        let stages = segment(tokenize("sleep 0.2 &")).unwrap();
        let started = std::time::Instant::now();
        run_stage(&stages[0]).unwrap();
        assert!(started.elapsed() < std::time::Duration::from_millis(150));
    }
}
