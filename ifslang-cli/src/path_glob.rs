use std::collections::HashSet;
use std::path::PathBuf;

use globset::{GlobBuilder, GlobMatcher};
use ignore::WalkBuilder;
use rayon::prelude::*;

fn has_glob_meta(s: &str) -> bool {
    s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
}

/// Deepest directory of `pattern` that contains no glob metacharacter.
fn walk_root(pattern: &str) -> PathBuf {
    let end = pattern
        .find(['*', '?', '[', '{'])
        .unwrap_or(pattern.len());
    let prefix = &pattern[..end];
    match prefix.rfind('/') {
        Some(0) => PathBuf::from("/"),
        Some(i) => PathBuf::from(&prefix[..i]),
        None => PathBuf::from("."),
    }
}

/// Strips a leading `./` so walker output and patterns compare alike.
fn normalize(path: &str) -> &str {
    path.strip_prefix("./").unwrap_or(path)
}

fn matching_files(pattern: &str) -> Result<Vec<String>, String> {
    let matcher: GlobMatcher = GlobBuilder::new(normalize(pattern))
        .literal_separator(true)
        .build()
        .map_err(|e| format!("Invalid glob pattern '{}': {}", pattern, e))?
        .compile_matcher();

    let mut out = Vec::new();
    let walker = WalkBuilder::new(walk_root(pattern))
        .hidden(false)
        .git_ignore(true)
        .parents(true)
        .build();
    for entry in walker.flatten() {
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.path().to_string_lossy();
        if matcher.is_match(normalize(&path)) {
            out.push(path.into_owned());
        }
    }
    out.sort();
    Ok(out)
}

/// Expands glob patterns among `inputs` into the files they match.
///
/// Literal paths are kept as given, even when missing, so the validator can
/// report them. Patterns are walked in parallel with `.gitignore` rules
/// applied. The result keeps input order and holds no duplicates.
pub fn expand_input_globs(inputs: &[String]) -> Result<Vec<String>, String> {
    let expanded: Vec<Vec<String>> = inputs
        .par_iter()
        .map(|input| {
            if !has_glob_meta(input) {
                return Ok(vec![input.clone()]);
            }
            let files = matching_files(input)?;
            if files.is_empty() {
                return Err(format!("No files match pattern '{}'", input));
            }
            Ok(files)
        })
        .collect::<Result<_, String>>()?;

    let mut seen = HashSet::new();
    Ok(expanded
        .into_iter()
        .flatten()
        .filter(|f| seen.insert(f.clone()))
        .collect())
}
