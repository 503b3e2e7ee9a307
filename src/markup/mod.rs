//! Markup scanning: one documentation line in, a sequence of segments out.
//!
//! The lexer recognises the fixed tag grammar; [`segments`] folds its tokens
//! into `{literal text | tag}` segments so that rewriting only ever looks at
//! tags and never re-scans text it has already produced.

mod lexer;

pub use lexer::{Lexer, MarkupToken, Token, tokenize};

use text_size::TextRange;

/// What a bracketed tag means.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// `[param x]`
    Param,
    /// `[constant X]`
    Constant,
    /// `[method x]` / `[method Type.x]`
    Method,
    /// `[member x]` / `[member Type.x]`
    Member,
    /// `[enum X]`
    Enum,
    /// `[TypeName]`
    TypeReference,
    BoldOpen,
    BoldClose,
    CodeOpen,
    CodeClose,
    /// `[b]Note:[/b]`
    Note,
    /// `[b]Warning:[/b]`
    Warning,
    /// `[int]` / `[float]`
    LiteralKeyword,
}

impl TagKind {
    /// Tags whose payload is an identifier that needs resolving.
    pub fn is_reference(self) -> bool {
        matches!(
            self,
            TagKind::Param
                | TagKind::Constant
                | TagKind::Method
                | TagKind::Member
                | TagKind::Enum
                | TagKind::TypeReference
        )
    }

    /// Fixed replacement text for formatting tags.
    pub fn literal_replacement(self, payload: &str) -> Option<&'static str> {
        match self {
            TagKind::Note => Some("> Note:"),
            TagKind::Warning => Some("> Warning:"),
            TagKind::BoldOpen | TagKind::BoldClose => Some("**"),
            TagKind::CodeOpen | TagKind::CodeClose => Some("`"),
            TagKind::LiteralKeyword => match payload {
                "int" => Some("integer"),
                "float" => Some("float"),
                _ => None,
            },
            _ => None,
        }
    }
}

/// One occurrence of a recognised tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken<'a> {
    pub kind: TagKind,
    /// The identifier inside the tag (`add_child` for `[method add_child]`).
    /// Empty for pure formatting tags.
    pub payload: &'a str,
    /// The whole tag as written in the source.
    pub source: &'a str,
    pub range: TextRange,
}

/// A piece of a scanned line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Tag(RawToken<'a>),
}

/// Split a line into literal text and tags, left to right, non-overlapping.
///
/// Adjacent text tokens are merged so every [`Segment::Text`] is a maximal run.
pub fn segments(line: &str) -> Vec<Segment<'_>> {
    let tokens = tokenize(line);
    let mut out: Vec<Segment<'_>> = Vec::with_capacity(tokens.len());
    let mut text_start: Option<usize> = None;
    let mut i = 0;

    while i < tokens.len() {
        let token = &tokens[i];

        let (tag, consumed) = match callout_at(&tokens[i..]) {
            Some(kind) => {
                let end = tokens[i + 2].range.end();
                let range = TextRange::new(token.range.start(), end);
                let source = &line[range];
                (Some(raw(kind, "", source, range)), 3)
            }
            None => (tag_for(token), 1),
        };

        match tag {
            Some(tag) => {
                if let Some(start) = text_start.take() {
                    out.push(Segment::Text(&line[start..token.range.start().into()]));
                }
                out.push(Segment::Tag(tag));
            }
            None => {
                text_start.get_or_insert(token.range.start().into());
            }
        }
        i += consumed;
    }

    if let Some(start) = text_start {
        out.push(Segment::Text(&line[start..]));
    }

    out
}

/// Recognise `[b]Note:[/b]` and `[b]Warning:[/b]` at the head of `tokens`.
fn callout_at(tokens: &[Token<'_>]) -> Option<TagKind> {
    match tokens {
        [open, body, close, ..]
            if open.kind == MarkupToken::BoldOpen && close.kind == MarkupToken::BoldClose =>
        {
            match body.text {
                "Note:" => Some(TagKind::Note),
                "Warning:" => Some(TagKind::Warning),
                _ => None,
            }
        }
        _ => None,
    }
}

fn tag_for<'a>(token: &Token<'a>) -> Option<RawToken<'a>> {
    let kind = match token.kind {
        MarkupToken::Text => return None,
        MarkupToken::Param => TagKind::Param,
        MarkupToken::Constant => TagKind::Constant,
        MarkupToken::Method => TagKind::Method,
        MarkupToken::Member => TagKind::Member,
        MarkupToken::Enum => TagKind::Enum,
        MarkupToken::TypeName => TagKind::TypeReference,
        MarkupToken::BoldOpen => TagKind::BoldOpen,
        MarkupToken::BoldClose => TagKind::BoldClose,
        MarkupToken::CodeOpen => TagKind::CodeOpen,
        MarkupToken::CodeClose => TagKind::CodeClose,
        MarkupToken::Keyword => TagKind::LiteralKeyword,
    };

    // The lexer patterns guarantee a `[...]` shape.
    let payload = payload_of(token.text);
    debug_assert!(payload.is_some(), "tag token without payload: {:?}", token.text);
    let Some(payload) = payload else {
        tracing::error!("[MARKUP] Tag token without payload: {:?}", token.text);
        return None;
    };

    Some(raw(kind, payload, token.text, token.range))
}

/// `[method foo]` → `foo`, `[Node]` → `Node`, `[b]` → `b`.
fn payload_of(tag: &str) -> Option<&str> {
    let inner = tag.strip_prefix('[')?.strip_suffix(']')?;
    Some(match inner.split_once(' ') {
        Some((_, payload)) => payload,
        None => inner,
    })
}

fn raw<'a>(kind: TagKind, payload: &'a str, source: &'a str, range: TextRange) -> RawToken<'a> {
    let payload = if kind.is_reference() || kind == TagKind::LiteralKeyword {
        payload
    } else {
        ""
    };
    RawToken {
        kind,
        payload,
        source,
        range,
    }
}
