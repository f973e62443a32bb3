use crate::commands::registry::BuiltinCommand;
use crate::errors::{ShellError, ShellResult};
use crate::session::{Session, MAX_PROMPT_LEN};

pub struct PromptCommand;

impl BuiltinCommand for PromptCommand {
    fn name(&self) -> &'static str {
        "prompt"
    }

    fn description(&self) -> &'static str {
        "Set the interactive prompt text"
    }

    fn execute(&self, session: &mut Session, args: &[String]) -> ShellResult<()> {
        let text = args.get(1).ok_or_else(|| {
            ShellError::MissingArgument("Missing first argument".to_string())
        })?;
        if text.len() >= MAX_PROMPT_LEN {
            return Err(ShellError::LimitExceeded(
                "first argument exceeded set length".to_string(),
            ));
        }
        session.prompt = text.clone();
        Ok(())
    }
}
