use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Resolve a candidate list from either a literal value or a word-list file.
///
/// The CLI groups guarantee exactly one of the two is present; anything else
/// is a configuration error.
pub fn resolve(literal: Option<String>, list: Option<PathBuf>) -> Result<Vec<String>> {
    match (literal, list) {
        (Some(value), None) => Ok(vec![value]),
        (None, Some(path)) => load(&path),
        _ => bail!("exactly one of a literal value or a list file must be given"),
    }
}

/// Load a newline-delimited word list.
///
/// Each line is trimmed of surrounding whitespace (this also strips `\r` from
/// CRLF files). A single trailing blank entry, as produced by a final newline,
/// is dropped; any further blank lines are kept as empty candidates.
fn load(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list '{}'", path.display()))?;
    let mut entries: Vec<String> = content.split('\n').map(|l| l.trim().to_string()).collect();
    if entries.last().is_some_and(|l| l.is_empty()) {
        entries.pop();
    }
    if entries.is_empty() {
        bail!("word list '{}' is empty", path.display());
    }
    Ok(entries)
}
