pub mod cli;
pub mod commands;
pub mod completion;
pub mod errors;
pub mod pipeline;
pub mod reaper;
pub mod redirection;
pub mod repl;
pub mod segment;
pub mod session;
pub mod wildcard;

use errors::{ShellError, ShellResult};
use session::Session;

/// Main entry point for the shell REPL.
///
/// Returns the exit status the process should terminate with.
pub fn run_shell(session: &mut Session) -> ShellResult<i32> {
    let mut rl = repl::make_editor()?;
    loop {
        let prompt = session.render_prompt();
        match repl::read_input(&mut rl, &prompt) {
            Ok(input) => match repl::handle_command_input(session, &input) {
                Ok(Some(code)) => return Ok(code),
                Ok(None) => {}
                Err(e) => match e {
                    ShellError::CommandNotFound(msg) => eprintln!("{}", msg),
                    ShellError::InvalidDirectory(msg) => eprintln!("{}", msg),
                    ShellError::ExecutionError(msg) => eprintln!("{}", msg),
                    ShellError::RedirectionError(msg) => eprintln!("{}", msg),
                    other => eprintln!("{}", other),
                },
            },
            Err(ShellError::Interrupted) => {
                // Ctrl-D pressed, exit gracefully
                return Ok(0);
            }
            Err(e) => {
                eprintln!("Input error: {}", e);
            }
        }
    }
}
