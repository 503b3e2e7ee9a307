//! Logos-based lexer for documentation markup.
//!
//! Fast tokenization using the logos crate. Anything that is not a recognised
//! tag (including malformed or unknown bracket groups) lexes as text.

use logos::Logos;
use text_size::{TextRange, TextSize};

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: MarkupToken,
    pub text: &'a str,
    pub range: TextRange,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, MarkupToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: MarkupToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let span = self.inner.span();
        let range = TextRange::new(
            TextSize::new(span.start as u32),
            TextSize::new(span.end as u32),
        );

        // Error spans are bracket groups that started like a tag but did not
        // finish as one; they stay in the output untouched.
        let kind = logos_token.unwrap_or(MarkupToken::Text);

        Some(Token {
            kind,
            text: self.inner.slice(),
            range,
        })
    }
}

/// Tokenize an entire line into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum for the documentation markup
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkupToken {
    // =========================================================================
    // REFERENCES
    // =========================================================================
    #[regex(r"\[param \w+\]")]
    Param,

    #[regex(r"\[constant \w+\]")]
    Constant,

    #[regex(r"\[method [\w.@/]+\]")]
    Method,

    #[regex(r"\[member [\w.@/]+\]")]
    Member,

    #[regex(r"\[enum [\w.@/]+\]")]
    Enum,

    /// `[Node]`: a bracketed name starting with an uppercase letter.
    #[regex(r"\[[A-Z]\w+\]")]
    TypeName,

    // =========================================================================
    // FORMATTING
    // =========================================================================
    #[token("[b]")]
    BoldOpen,

    #[token("[/b]")]
    BoldClose,

    #[token("[code]")]
    CodeOpen,

    #[token("[/code]")]
    CodeClose,

    #[token("[int]")]
    #[token("[float]")]
    Keyword,

    // =========================================================================
    // TEXT
    // =========================================================================
    #[regex(r"[^\[]+")]
    #[token("[")]
    Text,
}

impl MarkupToken {
    pub fn is_text(self) -> bool {
        self == MarkupToken::Text
    }
}
