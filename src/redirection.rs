use crate::errors::{ShellError, ShellResult};
use crate::segment::Stage;
use std::fs::{File, OpenOptions};
use std::process::{Command, Stdio};

/// Bind a stage's resolved redirection files onto the child's stdio.
///
/// Called after any pipe wiring, so an explicit file replaces the pipe
/// endpoint for the same direction. An open failure is fatal only to the
/// stage being prepared; the caller reports it and skips that one child.
pub fn apply(cmd: &mut Command, stage: &Stage) -> ShellResult<()> {
    if let Some(path) = &stage.output_file {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| {
                ShellError::RedirectionError(format!("Failed to open '{}': {}", path, e))
            })?;
        cmd.stdout(Stdio::from(file));
    }

    if let Some(path) = &stage.input_file {
        let file = File::open(path).map_err(|e| {
            ShellError::RedirectionError(format!("Failed to open '{}': {}", path, e))
        })?;
        cmd.stdin(Stdio::from(file));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::{segment, tokenize};
    use std::fs;

    #[test]
    fn output_redirection_creates_and_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.txt");
        fs::write(&out, "stale contents").unwrap();

        let line = format!("echo fresh > {}", out.display());
        let stages = segment(tokenize(&line)).unwrap();

        let mut cmd = Command::new(&stages[0].argv[0]);
        cmd.args(&stages[0].argv[1..]);
        apply(&mut cmd, &stages[0]).unwrap();
        assert!(cmd.status().unwrap().success());

        assert_eq!(fs::read_to_string(&out).unwrap(), "fresh\n");
    }

    #[test]
    fn input_redirection_feeds_stdin() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let out = dir.path().join("out.txt");
        fs::write(&input, "line one\n").unwrap();

        let line = format!("cat < {} > {}", input.display(), out.display());
        let stages = segment(tokenize(&line)).unwrap();

        let mut cmd = Command::new(&stages[0].argv[0]);
        apply(&mut cmd, &stages[0]).unwrap();
        assert!(cmd.status().unwrap().success());

        assert_eq!(fs::read_to_string(&out).unwrap(), "line one\n");
    }

    #[test]
    fn missing_input_file_is_a_redirection_error() {
        let stages = segment(tokenize("cat < /nonexistent-walksh-test/in.txt")).unwrap();
        let mut cmd = Command::new("cat");
        assert!(matches!(
            apply(&mut cmd, &stages[0]),
            Err(ShellError::RedirectionError(_))
        ));
    }
}
