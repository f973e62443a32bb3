use crate::commands;
use crate::completion::ShellCompleter;
use crate::errors::{ShellError, ShellResult};
use crate::segment;
use crate::session::Session;
use rustyline::config::Configurer;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{ColorMode, CompletionType, Config, Editor};

/// Build the line editor used for the interactive session.
pub fn make_editor() -> ShellResult<Editor<ShellCompleter, DefaultHistory>> {
    let config = Config::builder()
        .color_mode(ColorMode::Enabled)
        .auto_add_history(true)
        .build();

    let mut rl: Editor<ShellCompleter, DefaultHistory> = Editor::with_config(config)
        .map_err(|e| ShellError::InputError(format!("Failed to create readline editor: {}", e)))?;
    rl.set_helper(Some(ShellCompleter));
    rl.set_completion_type(CompletionType::List);
    Ok(rl)
}

/// Read one non-empty input line.
pub fn read_input(
    rl: &mut Editor<ShellCompleter, DefaultHistory>,
    prompt: &str,
) -> ShellResult<String> {
    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    return Ok(trimmed.to_string());
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C pressed, discard the line and keep reading
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D pressed, end the session
                return Err(ShellError::Interrupted);
            }
            Err(e) => {
                return Err(ShellError::InputError(format!("Readline error: {}", e)));
            }
        }
    }
}

/// Handle one raw input line: tokenize, segment, dispatch.
///
/// Returns Some(code) when the line asked the shell to exit.
pub fn handle_command_input(session: &mut Session, input: &str) -> ShellResult<Option<i32>> {
    let tokens = segment::tokenize(input);
    let mut stages = segment::segment(tokens)?;
    commands::dispatch_line(session, &mut stages)
}
