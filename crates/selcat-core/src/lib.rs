//! Selector lexer for selcat.
//!
//! Sorts a CSS selector into its lexical constituents:
//!
//! - **Elements** - `div`, `li`, `input`
//! - **Classes** - `.menu` → `menu`
//! - **Ids** - `#nav` → `nav`
//! - **Pseudo-elements** - `::before` → `before`
//! - **Pseudo-classes** - `:hover` → `hover`, `:nth-child(2n+1)` → `nth-child`
//! - **Attributes** - `[type=checkbox]` → `type` / `checkbox`
//!
//! This is a lexer, not a selector parser. Combinators (` `, `>`, `~`, `+`)
//! and commas only separate lexemes; no selector tree is built and nothing is
//! validated. Malformed input never fails, it just yields fewer lexemes.
//!
//! ```
//! use selcat_core::{TokenKind, categorize};
//!
//! let result = categorize("div.menu#nav > a:hover");
//! assert_eq!(result.texts(TokenKind::Element).collect::<Vec<_>>(), ["div", "a"]);
//! assert_eq!(result.texts(TokenKind::PseudoClass).collect::<Vec<_>>(), ["hover"]);
//! ```

/// Grouping of scanned tokens into per-kind buckets.
pub mod categorized;
/// The single-pass selector scanner.
pub mod scanner;
/// Token, lexeme and kind types.
pub mod token;

pub use categorized::{CategorizedResult, DuplicatePolicy};
pub use scanner::Scanner;
pub use token::{AttributePair, Lexeme, Token, TokenKind};

/// Categorize a selector, keeping repeated lexemes.
///
/// Blank input gives a result where every category is present and empty.
#[must_use]
pub fn categorize(selector: &str) -> CategorizedResult {
    categorize_with(selector, DuplicatePolicy::Keep)
}

/// Categorize a selector with an explicit [`DuplicatePolicy`].
#[must_use]
pub fn categorize_with(selector: &str, policy: DuplicatePolicy) -> CategorizedResult {
    let mut scanner = Scanner::new(selector);
    scanner.run();
    CategorizedResult::from_tokens(scanner.into_tokens(), policy)
}
