//! selcat CLI
//!
//! Prints the elements, classes, ids, pseudo-classes, pseudo-elements and
//! attributes found in CSS selectors.

mod input;
mod render;
mod session;

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{ColorChoice, Parser};
use selcat_core::{DuplicatePolicy, TokenKind};
use strum::IntoEnumIterator;

use crate::render::{Format, Renderer};
use crate::session::Session;

#[derive(Parser, Debug)]
#[command(name = "selcat")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Categorize a selector
    selcat 'div.menu#nav > a:hover'

    # Several selectors, as an indented listing
    selcat --format text 'li:nth-child(2n+1)' 'input[type=checkbox]'

    # Only classes and ids, duplicates removed
    selcat --unique --only classes --only ids '.a .b .a#x'

    # One selector per line from a file (or - for stdin)
    selcat --file selectors.txt

    # Re-categorize every line typed on stdin
    selcat --interactive"#)]
struct Cli {
    /// Selectors to categorize
    #[arg(value_name = "SELECTOR")]
    selectors: Vec<String>,

    /// Read selectors from a file, one per line (`-` for stdin)
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Read selectors from stdin and print a result after every line
    #[arg(short, long, conflicts_with_all = ["selectors", "file"])]
    interactive: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Drop repeated lexemes within a category
    #[arg(long)]
    unique: bool,

    /// Only show these categories (repeatable)
    #[arg(long, value_name = "CATEGORY", value_parser = parse_kind)]
    only: Vec<TokenKind>,

    /// When to color text output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Suppress warnings
    #[arg(short, long)]
    quiet: bool,
}

fn parse_kind(name: &str) -> Result<TokenKind, String> {
    name.parse().map_err(|_| {
        let known: Vec<String> = TokenKind::iter().map(|kind| kind.to_string()).collect();
        format!("unknown category '{name}' (expected one of: {})", known.join(", "))
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let stdout = io::stdout();
    let color = match cli.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => stdout.is_terminal(),
    };
    let session = Session {
        policy: if cli.unique {
            DuplicatePolicy::Collapse
        } else {
            DuplicatePolicy::Keep
        },
        renderer: Renderer::new(cli.format, cli.only, color),
        quiet: cli.quiet,
    };
    let mut out = stdout.lock();

    if cli.interactive {
        return session.interactive(io::stdin().lock(), &mut out);
    }

    let mut selectors = cli.selectors;
    if let Some(path) = &cli.file {
        selectors.extend(input::read_selectors(path)?);
    }
    if selectors.is_empty() {
        bail!(
            "no selector given\n\nUsage: selcat <SELECTOR>...\n       selcat --file <FILE>\n       selcat --interactive"
        );
    }

    for selector in &selectors {
        session.show(selector, &mut out)?;
    }
    out.flush()?;
    Ok(())
}
