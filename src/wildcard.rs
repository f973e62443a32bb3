use glob::glob;

fn has_wildcard(arg: &str) -> bool {
    arg.contains('*') || arg.contains('?')
}

/// Expand glob-pattern arguments in place.
///
/// Each argument containing `*` or `?` is replaced by its alphabetically
/// sorted filesystem matches, spliced in at the pattern's position. A
/// pattern with no matches is dropped with a diagnostic and the remaining
/// arguments keep their relative order. Spliced-in paths are literal and
/// are never re-scanned as patterns.
pub fn expand(argv: &mut Vec<String>) {
    let mut i = 0;
    while i < argv.len() {
        if !has_wildcard(&argv[i]) {
            i += 1;
            continue;
        }
        let pattern = argv.remove(i);
        let matches = match_pattern(&pattern);
        if matches.is_empty() {
            eprintln!("Cannot access '{}': No such file or directory", pattern);
        } else {
            let count = matches.len();
            argv.splice(i..i, matches);
            i += count;
        }
    }
}

/// Collect the sorted matches for one pattern, relative to the working
/// directory. An unparsable pattern behaves like one with no matches.
fn match_pattern(pattern: &str) -> Vec<String> {
    match glob(pattern) {
        Ok(paths) => paths
            .filter_map(Result::ok)
            .map(|path| path.display().to_string())
            .collect(),
        Err(_) => Vec::new(),
    }
}
