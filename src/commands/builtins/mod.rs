mod exit;
mod prompt;
mod pwd;
mod walk;

pub use exit::ExitCommand;
pub use prompt::PromptCommand;
pub use pwd::PwdCommand;
pub use walk::WalkCommand;
