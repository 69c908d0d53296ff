//! Categorize-and-print loop shared by one-shot and interactive modes.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use selcat_common::warning::{clear_warnings, warn_once};
use selcat_core::{DuplicatePolicy, categorize_with};

use crate::render::Renderer;

/// Settings that stay fixed for one run of the binary.
pub struct Session {
    pub policy: DuplicatePolicy,
    pub renderer: Renderer,
    pub quiet: bool,
}

impl Session {
    /// Categorize one selector and write its rendering followed by a newline.
    pub fn show(&self, selector: &str, out: &mut impl Write) -> Result<()> {
        let result = categorize_with(selector, self.policy);
        if result.is_empty() && !self.quiet {
            warn_once("Selector", &format!("no lexemes found in `{selector}`"));
        }
        writeln!(out, "{}", self.renderer.render(selector, &result)?)?;
        Ok(())
    }

    /// Re-render after every input line, like a live selector field.
    ///
    /// Each line is a fresh input, so warnings from earlier lines may repeat.
    pub fn interactive(&self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read selector from stdin")?;
            clear_warnings();
            self.show(line.trim(), out)?;
            out.flush()?;
        }
        Ok(())
    }
}
