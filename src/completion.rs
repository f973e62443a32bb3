use crate::commands::BUILTINS;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use std::env;
use std::fs;
use std::os::unix::fs::PermissionsExt;

/// Tab completion over builtin names and PATH executables.
#[derive(Clone)]
pub struct ShellCompleter;

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let input = &line[..pos];
        let parts: Vec<&str> = input.split_whitespace().collect();

        // Only complete the first word (command name)
        if parts.len() > 1 || input.ends_with(' ') {
            return Ok((pos, vec![]));
        }
        let prefix = parts.first().copied().unwrap_or("");
        let mut candidates = Vec::new();

        for builtin in BUILTINS.builtin_names() {
            if builtin.starts_with(prefix) {
                candidates.push(Pair {
                    display: builtin.to_string(),
                    replacement: builtin.to_string(),
                });
            }
        }

        if let Ok(path_var) = env::var("PATH") {
            for path_dir in path_var.split(':') {
                let Ok(entries) = fs::read_dir(path_dir) else {
                    continue;
                };
                for entry in entries.flatten() {
                    let Ok(file_name) = entry.file_name().into_string() else {
                        continue;
                    };
                    if !file_name.starts_with(prefix) {
                        continue;
                    }
                    let Ok(metadata) = entry.metadata() else {
                        continue;
                    };
                    let is_executable = metadata.permissions().mode() & 0o111 != 0;
                    if metadata.is_file() && is_executable {
                        candidates.push(Pair {
                            display: file_name.clone(),
                            replacement: file_name,
                        });
                    }
                }
            }
        }

        candidates.sort_by(|a, b| a.display.cmp(&b.display));
        candidates.dedup_by(|a, b| a.display == b.display);

        // If there's exactly one match, add a trailing space
        if candidates.len() == 1 {
            candidates[0].replacement.push(' ');
        }

        Ok((pos - prefix.len(), candidates))
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> std::borrow::Cow<'l, str> {
        std::borrow::Cow::Borrowed(line)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        _default: bool,
    ) -> std::borrow::Cow<'b, str> {
        std::borrow::Cow::Borrowed(prompt)
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> std::borrow::Cow<'h, str> {
        std::borrow::Cow::Borrowed(hint)
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: CmdKind) -> bool {
        false
    }
}

impl Validator for ShellCompleter {}

impl Helper for ShellCompleter {}
