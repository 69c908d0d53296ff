use crate::token::{Token, TokenKind};

/// Single-pass selector scanner.
///
/// Walks the input once, left to right, with one code point of lookahead.
/// The current character picks the construct to consume; anything that
/// cannot start a construct (whitespace, combinators, commas, parentheses)
/// is skipped as a separator. Nothing here can fail: a construct cut off by
/// end of input is emitted from whatever was consumed.
pub struct Scanner {
    /// The input being scanned
    input: Vec<char>,
    /// Current position in the input
    position: usize,
    /// Collected tokens, in source order
    tokens: Vec<Token>,
}

impl Scanner {
    /// Create a scanner over the given selector text.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into().chars().collect(),
            position: 0,
            tokens: Vec::new(),
        }
    }

    /// Scan the whole input, collecting tokens.
    pub fn run(&mut self) {
        while let Some(c) = self.consume() {
            match c {
                '.' => {
                    let name = self.consume_name();
                    self.emit(Token::text(TokenKind::Class, &name));
                }
                '#' => {
                    let name = self.consume_name();
                    self.emit(Token::text(TokenKind::Id, &name));
                }
                ':' => self.consume_pseudo(),
                '[' => self.consume_attribute(),
                c if is_name_code_point(c) => {
                    self.reconsume();
                    let name = self.consume_name();
                    self.emit(Token::text(TokenKind::Element, &name));
                }
                // Whitespace, `,`, `>`, `~`, `+`, `(`, `)` and anything else
                // only separate constructs.
                _ => {}
            }
        }
    }

    /// Return the collected tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Return a reference to the collected tokens.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// `:name` or `::name`, with the leading colon already consumed.
    fn consume_pseudo(&mut self) {
        let kind = if self.peek() == Some(':') {
            let _ = self.consume();
            TokenKind::PseudoElement
        } else {
            TokenKind::PseudoClass
        };

        let name = self.consume_name();

        // `:nth-child(7n+5)`, `:nth-last-of-type(odd)` etc: the argument is
        // not a selector and must not leak into any category.
        if kind == TokenKind::PseudoClass && self.peek() == Some('(') && starts_with_nth(&name) {
            self.skip_arguments();
        }

        self.emit(Token::text(kind, &name));
    }

    /// `[key=value]` or `[key]`, with the `[` already consumed.
    ///
    /// Only the first `=` splits; later ones belong to the value. An
    /// unterminated bracket runs to end of input.
    fn consume_attribute(&mut self) {
        let mut key: Option<String> = None;
        let mut buffer = String::new();

        while let Some(c) = self.consume() {
            match c {
                ']' => break,
                '=' if key.is_none() => key = Some(std::mem::take(&mut buffer)),
                c => buffer.push(c),
            }
        }

        // No `=`: boolean shorthand, the content is both key and value.
        let token = match key {
            Some(key) => Token::attribute(&key, &buffer),
            None => Token::attribute(&buffer, &buffer),
        };
        self.emit(token);
    }

    /// Skip a parenthesized argument list starting at the next `(`,
    /// including any nested parentheses, up to the matching `)` or EOF.
    fn skip_arguments(&mut self) {
        let mut depth = 0usize;
        while let Some(c) = self.consume() {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        break;
                    }
                }
                _ => {}
            }
        }
    }

    /// Consume the longest run of name code points.
    fn consume_name(&mut self) -> String {
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if !is_name_code_point(c) {
                break;
            }
            name.push(c);
            let _ = self.consume();
        }
        name
    }

    fn emit(&mut self, token: Option<Token>) {
        if let Some(token) = token {
            self.tokens.push(token);
        }
    }

    /// Consume the next character.
    fn consume(&mut self) -> Option<char> {
        let c = self.input.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    /// Put back the last consumed character.
    const fn reconsume(&mut self) {
        if self.position > 0 {
            self.position -= 1;
        }
    }

    /// Peek at the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }
}

/// ASCII letters, digits, hyphen and underscore.
const fn is_name_code_point(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn starts_with_nth(name: &str) -> bool {
    name.get(..3).is_some_and(|prefix| prefix.eq_ignore_ascii_case("nth"))
}
