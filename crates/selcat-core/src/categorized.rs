use std::collections::HashSet;

use serde::ser::{Serialize, SerializeMap, Serializer};
use strum::{EnumCount, IntoEnumIterator};

use crate::token::{Lexeme, Token, TokenKind};

/// How repeated lexemes within one category are treated when grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Keep every occurrence, in source order.
    #[default]
    Keep,
    /// Keep only the first occurrence of each lexeme per category.
    Collapse,
}

/// Lexemes of one scan, bucketed by [`TokenKind`].
///
/// Every kind has a bucket, empty or not. Within a bucket lexemes keep the
/// order their constructs appeared in the selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategorizedResult {
    buckets: [Vec<Lexeme>; TokenKind::COUNT],
}

impl CategorizedResult {
    /// Group a token stream by kind.
    #[must_use]
    pub fn from_tokens(tokens: impl IntoIterator<Item = Token>, policy: DuplicatePolicy) -> Self {
        let mut result = Self::default();
        let mut seen: [HashSet<Lexeme>; TokenKind::COUNT] = Default::default();
        for token in tokens {
            let (kind, lexeme) = token.into_parts();
            if policy == DuplicatePolicy::Collapse && !seen[kind.index()].insert(lexeme.clone()) {
                continue;
            }
            result.buckets[kind.index()].push(lexeme);
        }
        result
    }

    /// Lexemes of the given kind.
    #[must_use]
    pub fn get(&self, kind: TokenKind) -> &[Lexeme] {
        &self.buckets[kind.index()]
    }

    /// Text lexemes of the given kind. Empty for [`TokenKind::Attribute`].
    pub fn texts(&self, kind: TokenKind) -> impl Iterator<Item = &str> {
        self.get(kind).iter().filter_map(Lexeme::as_text)
    }

    /// Every category with its lexemes, in [`TokenKind`] order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenKind, &[Lexeme])> {
        TokenKind::iter().map(|kind| (kind, self.get(kind)))
    }

    /// Total number of lexemes across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// True when the selector produced no lexemes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}

/// Serializes as a map keyed by category name (`elements`, `classes`, ...),
/// always containing all six keys in [`TokenKind`] order.
impl Serialize for CategorizedResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(TokenKind::COUNT))?;
        for (kind, lexemes) in self.iter() {
            map.serialize_entry(&kind.to_string(), lexemes)?;
        }
        map.end()
    }
}
