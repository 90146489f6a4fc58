use serde::Serialize;

use super::{Comment, Cookware, Ingredient, Note, Timer};

/// Byte offsets of a token inside its paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// What a token stands for
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum TokenKind {
    Text,
    Ingredient(Ingredient),
    Cookware(Cookware),
    Timer(Timer),
    Comment(Comment),
    Note(Note),
}

/// A slice of a step: the verbatim source text, where it came from, and
/// what it was recognised as.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub span: Span,
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(span: Span, text: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            span,
            text: text.into(),
            kind,
        }
    }

    pub fn plain(span: Span, text: impl Into<String>) -> Self {
        Self::new(span, text, TokenKind::Text)
    }

    pub fn is_comment(&self) -> bool {
        matches!(self.kind, TokenKind::Comment(_))
    }
}
