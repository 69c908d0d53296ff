//! Rendering of a [`CategorizedResult`] for the terminal.

use std::fmt::Write as _;

use anyhow::Result;
use clap::ValueEnum;
use owo_colors::OwoColorize;
use selcat_core::{CategorizedResult, Lexeme, TokenKind};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Pretty-printed JSON, two-space indent
    Json,
    /// Indented listing, one category per heading
    Text,
}

/// Turns results into printable text.
#[derive(Debug, Clone)]
pub struct Renderer {
    format: Format,
    /// Categories to show; empty means all
    only: Vec<TokenKind>,
    color: bool,
}

impl Renderer {
    pub const fn new(format: Format, only: Vec<TokenKind>, color: bool) -> Self {
        Self {
            format,
            only,
            color,
        }
    }

    pub fn render(&self, selector: &str, result: &CategorizedResult) -> Result<String> {
        match self.format {
            Format::Json => Ok(serde_json::to_string_pretty(&Selection {
                result,
                renderer: self,
            })?),
            Format::Text => Ok(self.render_text(selector, result)),
        }
    }

    fn shows(&self, kind: TokenKind) -> bool {
        self.only.is_empty() || self.only.contains(&kind)
    }

    fn render_text(&self, selector: &str, result: &CategorizedResult) -> String {
        let mut text = String::new();
        let _ = writeln!(text, "{}", self.paint_selector(selector));

        let mut shown = 0;
        for (kind, lexemes) in result.iter().filter(|(kind, _)| self.shows(*kind)) {
            if lexemes.is_empty() {
                continue;
            }
            shown += 1;
            let _ = writeln!(text, "  {}", self.paint_category(kind));
            for lexeme in lexemes {
                let _ = writeln!(text, "    {}", describe(lexeme));
            }
        }
        if shown == 0 {
            text.push_str("  (no lexemes)\n");
        }

        // Trailing newline is added by the caller.
        let _ = text.pop();
        text
    }

    fn paint_selector(&self, selector: &str) -> String {
        if self.color {
            selector.bold().to_string()
        } else {
            selector.to_string()
        }
    }

    fn paint_category(&self, kind: TokenKind) -> String {
        if self.color {
            kind.cyan().to_string()
        } else {
            kind.to_string()
        }
    }
}

fn describe(lexeme: &Lexeme) -> String {
    match lexeme {
        Lexeme::Text(text) => text.clone(),
        Lexeme::Attribute(pair) if pair.is_shorthand() => pair.key().to_string(),
        Lexeme::Attribute(pair) => format!("{} = {}", pair.key(), pair.value()),
    }
}

/// The categories a renderer shows, serialized in kind order.
struct Selection<'a> {
    result: &'a CategorizedResult,
    renderer: &'a Renderer,
}

impl Serialize for Selection<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.renderer.only.is_empty() {
            return self.result.serialize(serializer);
        }
        let mut map = serializer.serialize_map(None)?;
        for (kind, lexemes) in self.result.iter() {
            if self.renderer.shows(kind) {
                map.serialize_entry(&kind.to_string(), lexemes)?;
            }
        }
        map.end()
    }
}
