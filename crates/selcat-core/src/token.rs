//! Token types produced by the selector [`Scanner`](crate::Scanner).
//!
//! A selector like `a.btn:hover[type=submit]` scans into four tokens: an
//! element (`a`), a class (`btn`), a pseudo-class (`hover`), and an attribute
//! pair (`type` / `submit`). Each token carries its [`TokenKind`] and the
//! [`Lexeme`] that was lifted out of the source text.

use serde::Serialize;
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// The closed set of constructs the scanner recognizes.
///
/// Declaration order is significant: it is the order categories appear in a
/// [`CategorizedResult`](crate::CategorizedResult) and in its serialized form.
///
/// The `Display` form is the category name (`pseudoClasses`). Parsing accepts
/// either the category name or the singular form, ignoring ASCII case.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, EnumCount,
)]
#[strum(ascii_case_insensitive)]
pub enum TokenKind {
    /// Type selector, e.g. `div`
    #[strum(to_string = "elements", serialize = "element")]
    Element,
    /// Class selector, e.g. `.menu` (lexeme `menu`)
    #[strum(to_string = "classes", serialize = "class")]
    Class,
    /// ID selector, e.g. `#nav` (lexeme `nav`)
    #[strum(to_string = "ids", serialize = "id")]
    Id,
    /// Double-colon pseudo, e.g. `::before` (lexeme `before`)
    #[strum(to_string = "pseudoElements", serialize = "pseudoElement")]
    PseudoElement,
    /// Single-colon pseudo, e.g. `:hover` (lexeme `hover`)
    #[strum(to_string = "pseudoClasses", serialize = "pseudoClass")]
    PseudoClass,
    /// Bracketed attribute selector, e.g. `[type=checkbox]`
    #[strum(to_string = "attributes", serialize = "attribute")]
    Attribute,
}

impl TokenKind {
    /// Position of this kind in declaration order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Key/value payload of an attribute selector.
///
/// Both halves are trimmed and guaranteed non-empty. A valueless selector
/// such as `[disabled]` is stored with the same text in both halves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AttributePair {
    key: String,
    value: String,
}

impl AttributePair {
    /// Build a pair from raw bracket content.
    ///
    /// Returns `None` if either half is empty after trimming.
    #[must_use]
    pub fn new(key: &str, value: &str) -> Option<Self> {
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() || value.is_empty() {
            return None;
        }
        Some(Self {
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    /// The attribute name (text before `=`), e.g. `type`.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The attribute value (text after `=`), e.g. `checkbox`.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// True when key and value are equal.
    ///
    /// Holds for the `[disabled]` shorthand, and also for an explicit
    /// `[a=a]`; the two are indistinguishable once scanned.
    #[must_use]
    pub fn is_shorthand(&self) -> bool {
        self.key == self.value
    }
}

/// The text lifted out of the selector for one token.
///
/// Serializes untagged: text as a JSON string, attribute pairs as
/// `{"key": .., "value": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Lexeme {
    /// Name of an element, class, id, pseudo-element or pseudo-class.
    Text(String),
    /// Key/value pair of an attribute selector.
    Attribute(AttributePair),
}

impl Lexeme {
    /// Text payload, or `None` for attribute pairs.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Attribute(_) => None,
        }
    }

    /// Attribute payload, or `None` for text lexemes.
    #[must_use]
    pub const fn as_attribute(&self) -> Option<&AttributePair> {
        match self {
            Self::Text(_) => None,
            Self::Attribute(pair) => Some(pair),
        }
    }
}

/// One recognized construct: its kind and the lexeme extracted for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    lexeme: Lexeme,
}

impl Token {
    /// Token for a named construct. Empty names produce no token.
    pub(crate) fn text(kind: TokenKind, text: &str) -> Option<Self> {
        debug_assert_ne!(kind, TokenKind::Attribute);
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            kind,
            lexeme: Lexeme::Text(text.to_string()),
        })
    }

    /// Token for an attribute selector. Degenerate pairs produce no token.
    pub(crate) fn attribute(key: &str, value: &str) -> Option<Self> {
        AttributePair::new(key, value).map(|pair| Self {
            kind: TokenKind::Attribute,
            lexeme: Lexeme::Attribute(pair),
        })
    }

    /// The construct this token was recognized as.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The extracted payload.
    #[must_use]
    pub const fn lexeme(&self) -> &Lexeme {
        &self.lexeme
    }

    /// Split into kind and lexeme.
    #[must_use]
    pub fn into_parts(self) -> (TokenKind, Lexeme) {
        (self.kind, self.lexeme)
    }
}
