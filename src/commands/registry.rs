use crate::errors::ShellResult;
use crate::session::Session;
use once_cell::sync::Lazy;

/// Trait that all builtin commands must implement
pub trait BuiltinCommand: Send + Sync {
    /// The primary command name (e.g. "walk", "pwd")
    fn name(&self) -> &'static str;

    /// Alternate names the command also answers to
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Help text / description for the command
    fn description(&self) -> &'static str;

    /// Execute the command with the given arguments.
    /// args[0] is the command name itself.
    fn execute(&self, session: &mut Session, args: &[String]) -> ShellResult<()>;

    /// Whether this command should cause the shell to exit.
    /// Returns Some(exit_code) if the shell should exit, None otherwise.
    fn exit_code(&self, _args: &[String]) -> Option<i32> {
        None
    }
}

/// Central registry for all builtin commands
pub struct BuiltinRegistry {
    commands: Vec<Box<dyn BuiltinCommand>>,
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn register<C: BuiltinCommand + 'static>(&mut self, cmd: C) {
        self.commands.push(Box::new(cmd));
    }

    fn find(&self, name: &str) -> Option<&dyn BuiltinCommand> {
        self.commands
            .iter()
            .find(|c| c.name() == name || c.aliases().contains(&name))
            .map(|c| c.as_ref())
    }

    /// Check if a command name is a builtin
    pub fn is_builtin(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// All builtin names and aliases (for tab completion)
    pub fn builtin_names(&self) -> Vec<&'static str> {
        self.commands
            .iter()
            .flat_map(|c| std::iter::once(c.name()).chain(c.aliases().iter().copied()))
            .collect()
    }

    /// Execute a builtin command by name
    pub fn execute(
        &self,
        name: &str,
        session: &mut Session,
        args: &[String],
    ) -> Option<ShellResult<()>> {
        self.find(name).map(|c| c.execute(session, args))
    }

    /// Check if command should exit the shell
    pub fn check_exit(&self, name: &str, args: &[String]) -> Option<i32> {
        self.find(name).and_then(|c| c.exit_code(args))
    }
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Global registry instance
pub static BUILTINS: Lazy<BuiltinRegistry> = Lazy::new(|| {
    let mut registry = BuiltinRegistry::new();

    // Register all builtins here - SINGLE POINT OF REGISTRATION
    registry.register(super::builtins::PromptCommand);
    registry.register(super::builtins::WalkCommand);
    registry.register(super::builtins::PwdCommand);
    registry.register(super::builtins::ExitCommand);

    registry
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_answers_to_its_cd_alias() {
        assert!(BUILTINS.is_builtin("walk"));
        assert!(BUILTINS.is_builtin("cd"));
    }

    #[test]
    fn unknown_names_are_not_builtins() {
        assert!(!BUILTINS.is_builtin("echo"));
        assert!(!BUILTINS.is_builtin("ls"));
    }

    #[test]
    fn exit_is_the_only_terminating_builtin() {
        assert_eq!(BUILTINS.check_exit("exit", &["exit".to_string()]), Some(0));
        assert_eq!(BUILTINS.check_exit("pwd", &["pwd".to_string()]), None);
    }

    #[test]
    fn names_cover_every_registration() {
        let names = BUILTINS.builtin_names();
        for expected in ["prompt", "walk", "cd", "pwd", "exit"] {
            assert!(names.contains(&expected), "missing builtin {}", expected);
        }
    }
}
