//! Where selectors come from: files or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};

/// Read selectors from `path`, one per non-blank line. `-` reads stdin.
pub fn read_selectors(path: &Path) -> Result<Vec<String>> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        let _ = io::stdin()
            .read_to_string(&mut text)
            .context("failed to read selectors from stdin")?;
        text
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read selectors from '{}'", path.display()))?
    };
    Ok(selector_lines(&text))
}

fn selector_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
