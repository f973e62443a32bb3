use crate::errors::{ShellError, ShellResult};

/// Hard cap on the number of stages one input line may produce.
pub const MAX_STAGES: usize = 100;

/// Control operator that terminates a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// `|` chains this stage's stdout into the next stage's stdin.
    Pipe,
    /// `;` runs the next stage only after this one has been waited on.
    Sequence,
    /// `&` leaves this stage running without waiting.
    Background,
}

impl Separator {
    pub fn from_token(token: &str) -> Option<Separator> {
        match token {
            "|" => Some(Separator::Pipe),
            ";" => Some(Separator::Sequence),
            "&" => Some(Separator::Background),
            _ => None,
        }
    }
}

fn is_redirection(token: &str) -> bool {
    token == "<" || token == ">"
}

/// One executable unit between separators.
#[derive(Debug)]
pub struct Stage {
    /// First token of the stage's span.
    pub first: usize,
    /// Index of the separator token that terminated the stage.
    pub last: usize,
    pub separator: Separator,
    pub input_file: Option<String>,
    pub output_file: Option<String>,
    /// Program name and arguments, redirection pairs removed.
    pub argv: Vec<String>,
}

/// Split an input line into whitespace-delimited tokens.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

/// Partition a token sequence into command stages.
///
/// Consumes the tokens: a line that does not end in a separator gets a
/// synthetic `;` appended before scanning.
pub fn segment(mut tokens: Vec<String>) -> ShellResult<Vec<Stage>> {
    if tokens.is_empty() {
        return Err(ShellError::EmptyInput);
    }
    if Separator::from_token(&tokens[0]).is_some() {
        return Err(ShellError::LeadingSeparator);
    }
    if let Some(last) = tokens.last() {
        if Separator::from_token(last).is_none() {
            tokens.push(";".to_string());
        }
    }

    let mut stages = Vec::new();
    let mut first = 0;
    for i in 0..tokens.len() {
        let Some(separator) = Separator::from_token(&tokens[i]) else {
            continue;
        };
        if first == i {
            return Err(ShellError::ConsecutiveSeparators);
        }
        if stages.len() == MAX_STAGES {
            return Err(ShellError::TooManyStages);
        }
        stages.push(build_stage(&tokens, first, i, separator));
        first = i + 1;
    }
    log::debug!("segmented {} stage(s)", stages.len());
    Ok(stages)
}

/// Resolve redirection and build argv for the token span `[first, last)`.
fn build_stage(tokens: &[String], first: usize, last: usize, separator: Separator) -> Stage {
    let mut input_file = None;
    let mut output_file = None;
    let mut i = first;
    while i < last {
        if is_redirection(&tokens[i]) && i + 1 < last {
            // The last occurrence of each direction wins.
            if tokens[i] == "<" {
                input_file = Some(tokens[i + 1].clone());
            } else {
                output_file = Some(tokens[i + 1].clone());
            }
            i += 2;
        } else {
            i += 1;
        }
    }

    let mut argv = Vec::with_capacity(last - first);
    let mut i = first;
    while i < last {
        if is_redirection(&tokens[i]) {
            // Skip the operator together with the filename that follows it.
            i += 2;
        } else {
            argv.push(tokens[i].clone());
            i += 1;
        }
    }

    Stage {
        first,
        last,
        separator,
        input_file,
        output_file,
        argv,
    }
}
