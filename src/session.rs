/// Longest prompt text the `prompt` builtin accepts.
pub const MAX_PROMPT_LEN: usize = 128;

/// Longest working-directory path `pwd` will print.
pub const MAX_PATH_LEN: usize = 256;

/// Per-session interpreter state.
///
/// Mutated only by the single control flow between input lines; the working
/// directory itself stays process-wide state owned by the OS.
#[derive(Debug)]
pub struct Session {
    pub prompt: String,
}

impl Session {
    pub fn new() -> Self {
        Session {
            prompt: String::new(),
        }
    }

    /// The string rendered before each input line.
    pub fn render_prompt(&self) -> String {
        format!("{}$ ", self.prompt)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
