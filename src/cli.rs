use clap::Parser;

/// Shell command line arguments
#[derive(Parser, Debug)]
#[command(name = "walksh")]
#[command(about = "A small interactive shell", long_about = None)]
pub struct ShellArgs {
    /// Execute a single command line and exit
    #[arg(short = 'c', value_name = "LINE")]
    pub command: Option<String>,

    /// Initial prompt text
    #[arg(long, value_name = "TEXT")]
    pub prompt: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_line_is_captured() {
        let args = ShellArgs::parse_from(["walksh", "-c", "echo hi"]);
        assert_eq!(args.command.as_deref(), Some("echo hi"));
        assert_eq!(args.prompt, None);
    }

    #[test]
    fn prompt_flag_is_captured() {
        let args = ShellArgs::parse_from(["walksh", "--prompt", "lab"]);
        assert_eq!(args.prompt.as_deref(), Some("lab"));
    }
}
