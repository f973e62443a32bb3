pub mod builtins;
pub mod external;
pub mod registry;

use crate::errors::ShellResult;
use crate::pipeline;
use crate::segment::{Separator, Stage};
use crate::session::Session;
use crate::wildcard;

pub use registry::{BuiltinCommand, BuiltinRegistry, BUILTINS};

/// Run every stage of one segmented input line, in stage order.
///
/// Returns Some(code) when an `exit` builtin asks the shell to terminate;
/// per-stage failures are reported here and do not stop later stages.
pub fn dispatch_line(session: &mut Session, stages: &mut [Stage]) -> ShellResult<Option<i32>> {
    let mut cursor = 0;
    while cursor < stages.len() {
        let stage = &stages[cursor];

        // Builtins never participate in pipelines: a stage inside a pipe
        // run always reaches the executors, even when its name matches.
        if stage.separator != Separator::Pipe {
            if let Some(name) = stage.argv.first() {
                if BUILTINS.is_builtin(name) {
                    if let Some(code) = BUILTINS.check_exit(name, &stage.argv) {
                        return Ok(Some(code));
                    }
                    if let Some(Err(e)) = BUILTINS.execute(name, session, &stage.argv) {
                        eprintln!("{}", e);
                    }
                    cursor += 1;
                    continue;
                }
            }
        }

        if stage.separator == Separator::Pipe {
            let consumed = pipeline::execute_pipeline(&mut stages[cursor..]);
            cursor += consumed + 1;
        } else {
            wildcard::expand(&mut stages[cursor].argv);
            if let Err(e) = external::run_stage(&stages[cursor]) {
                eprintln!("{}", e);
            }
            cursor += 1;
        }
    }
    Ok(None)
}
