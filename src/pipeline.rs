use crate::commands::external::spawn_error;
use crate::reaper;
use crate::redirection;
use crate::segment::{Separator, Stage};
use crate::wildcard;
use os_pipe::{PipeReader, PipeWriter};
use std::process::{Child, Command, Stdio};

/// Number of consecutive pipe-separated stages at the head of `stages`.
fn run_length(stages: &[Stage]) -> usize {
    stages
        .iter()
        .take_while(|stage| stage.separator == Separator::Pipe)
        .count()
}

/// Execute the pipe run starting at `stages[0]` as one set of concurrent
/// processes.
///
/// Returns the number of stages consumed beyond the first so the caller can
/// advance its cursor past the whole run.
pub fn execute_pipeline(stages: &mut [Stage]) -> usize {
    let pipe_count = run_length(stages);
    debug_assert!(pipe_count > 0, "caller dispatched a non-pipe stage");

    // Every pipe is allocated before any child is spawned. A failed
    // allocation degrades the run: the stages around the missing pipe fall
    // back to inherited stdio instead of aborting the line.
    let mut readers: Vec<Option<PipeReader>> = Vec::with_capacity(pipe_count);
    let mut writers: Vec<Option<PipeWriter>> = Vec::with_capacity(pipe_count);
    for _ in 0..pipe_count {
        match os_pipe::pipe() {
            Ok((reader, writer)) => {
                readers.push(Some(reader));
                writers.push(Some(writer));
            }
            Err(e) => {
                eprintln!("Error: Failed to create pipe: {}", e);
                readers.push(None);
                writers.push(None);
            }
        }
    }

    let mut children: Vec<Child> = Vec::new();
    for position in 0..=pipe_count {
        let Some(stage) = stages.get_mut(position) else {
            eprintln!("Error: No command argument present following pipe operator");
            continue;
        };
        wildcard::expand(&mut stage.argv);
        if stage.argv.is_empty() {
            eprintln!("Error: No command argument present following pipe operator");
            continue;
        }

        let mut cmd = Command::new(&stage.argv[0]);
        cmd.args(&stage.argv[1..]);
        if position > 0 {
            if let Some(reader) = readers[position - 1].take() {
                cmd.stdin(Stdio::from(reader));
            }
        }
        if position < pipe_count {
            if let Some(writer) = writers[position].take() {
                cmd.stdout(Stdio::from(writer));
            }
        }
        // File redirection wins over the pipe endpoint for the same
        // direction; the displaced pipe end is dropped with the builder.
        if let Err(e) = redirection::apply(&mut cmd, stage) {
            eprintln!("{}", e);
            continue;
        }

        match cmd.spawn() {
            Ok(child) => {
                log::debug!("pipeline stage {} spawned pid {}", position, child.id());
                children.push(child);
            }
            Err(e) => eprintln!("{}", spawn_error(&stage.argv[0], e)),
        }
    }

    // Every pipe end still held here is closed now that all children have
    // inherited what they need; a leaked end would block EOF delivery down
    // the chain.
    drop(readers);
    drop(writers);

    let consumed = pipe_count.min(stages.len().saturating_sub(1));
    let background = stages[consumed].separator == Separator::Background;
    if background {
        for child in children {
            reaper::watch(child);
        }
    } else {
        for mut child in children {
            let _ = child.wait();
        }
    }
    consumed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::{segment, tokenize};
    use std::fs;

    #[test]
    fn output_flows_down_the_pipe() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.txt");

        let line = format!("echo hello | cat > {}", out.display());
        let mut stages = segment(tokenize(&line)).unwrap();
        let consumed = execute_pipeline(&mut stages);

        assert_eq!(consumed, 1);
        assert_eq!(fs::read_to_string(&out).unwrap(), "hello\n");
    }

    #[test]
    fn three_stage_run_is_consumed_whole() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.txt");

        let line = format!("echo abc | cat | cat > {}", out.display());
        let mut stages = segment(tokenize(&line)).unwrap();
        let consumed = execute_pipeline(&mut stages);

        assert_eq!(consumed, 2);
        assert_eq!(fs::read_to_string(&out).unwrap(), "abc\n");
    }

    #[test]
    fn file_redirection_overrides_the_pipe_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let mid = dir.path().join("mid.txt");
        let out = dir.path().join("out.txt");

        // The middle stage's stdout goes to the file, so the final stage
        // sees immediate EOF and writes nothing.
        let line = format!(
            "echo hi | cat > {} | cat > {}",
            mid.display(),
            out.display()
        );
        let mut stages = segment(tokenize(&line)).unwrap();
        let consumed = execute_pipeline(&mut stages);

        assert_eq!(consumed, 2);
        assert_eq!(fs::read_to_string(&mid).unwrap(), "hi\n");
        assert_eq!(fs::read_to_string(&out).unwrap(), "");
    }

    #[test]
    fn trailing_pipe_reports_missing_operand_without_hanging() {
        let mut stages = segment(tokenize("echo hi |")).unwrap();
        assert_eq!(stages.len(), 1);
        let consumed = execute_pipeline(&mut stages);
        assert_eq!(consumed, 0);
    }

    #[test]
    fn unknown_program_leaves_a_gap_not_a_hang() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.txt");

        let line = format!(
            "definitely-not-a-walksh-program | cat > {}",
            out.display()
        );
        let mut stages = segment(tokenize(&line)).unwrap();
        let consumed = execute_pipeline(&mut stages);

        // The sink still runs; the missing upstream writer is closed in the
        // parent, so it terminates on EOF with empty output.
        assert_eq!(consumed, 1);
        assert_eq!(fs::read_to_string(&out).unwrap(), "");
    }
}
