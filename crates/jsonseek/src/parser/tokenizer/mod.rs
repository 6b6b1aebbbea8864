//! Tokenizer: splits a byte buffer into punctuators, strings, and bare runs.
//!
//! The tokenizer is stateless apart from its read position. It never decodes
//! anything: a token is a class plus a [`Span`] into the buffer, and the
//! builder decides what the bytes mean.
//!
//! - ASCII whitespace outside a string is skipped before a token starts.
//! - `{ } [ ] : ,` are single-byte punctuators.
//! - `"` starts a string which ends at the next quote preceded by an even
//!   number of backslashes. The span includes both quotes.
//! - Anything else is a bare run ending at the next separator, quote, or
//!   whitespace byte. Classification into `null`/`true`/`false`/number
//!   happens in the builder.
//!
//! Every scan moves strictly forward and stops at the buffer end, so
//! tokenizing any input terminates.

use crate::{
    Span,
    parser::{ParseError, SyntaxError},
};


const QUOTE: u8 = b'"';
const BACKSLASH: u8 = b'\\';

/// Single-byte structural tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Punct {
    ObjectOpen,
    ObjectClose,
    ArrayOpen,
    ArrayClose,
    Colon,
    Comma,
}

impl Punct {
    #[inline]
    pub(crate) fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'{' => Some(Punct::ObjectOpen),
            b'}' => Some(Punct::ObjectClose),
            b'[' => Some(Punct::ArrayOpen),
            b']' => Some(Punct::ArrayClose),
            b':' => Some(Punct::Colon),
            b',' => Some(Punct::Comma),
            _ => None,
        }
    }

    pub(crate) fn as_char(self) -> char {
        match self {
            Punct::ObjectOpen => '{',
            Punct::ObjectClose => '}',
            Punct::ArrayOpen => '[',
            Punct::ArrayClose => ']',
            Punct::Colon => ':',
            Punct::Comma => ',',
        }
    }
}

#[inline]
fn is_separator(b: u8) -> bool {
    Punct::from_byte(b).is_some()
}

#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

#[inline]
fn ends_bare_run(b: u8) -> bool {
    is_separator(b) || is_whitespace(b) || b == QUOTE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    Punctuator(Punct),
    /// A quoted string; the span includes both quotes.
    String,
    /// A run of bytes between separators: a number or a keyword literal.
    Bare,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub(crate) fn bytes<'src>(&self, source: &'src [u8]) -> &'src [u8] {
        &source[self.span.range()]
    }

    /// The string token without its surrounding quotes.
    pub(crate) fn unquoted(&self) -> Span {
        debug_assert_eq!(self.kind, TokenKind::String);
        Span::new(self.span.offset + 1, self.span.limit - 1)
    }
}

/// Reads the token starting at or after `offset`.
///
/// Returns `Ok(None)` once only whitespace remains.
pub(crate) fn next_token(
    source: &[u8],
    offset: usize,
    allow_unterminated_scalar: bool,
) -> Result<Option<Token>, ParseError> {
    let Some(start) = source
        .iter()
        .skip(offset)
        .position(|&b| !is_whitespace(b))
        .map(|n| offset + n)
    else {
        return Ok(None);
    };

    let first = source[start];
    if let Some(punct) = Punct::from_byte(first) {
        return Ok(Some(Token {
            kind: TokenKind::Punctuator(punct),
            span: Span::new(start, start + 1),
        }));
    }

    if first == QUOTE {
        let mut escaped = false;
        for (i, &b) in source.iter().enumerate().skip(start + 1) {
            if escaped {
                escaped = false;
            } else if b == BACKSLASH {
                escaped = true;
            } else if b == QUOTE {
                return Ok(Some(Token {
                    kind: TokenKind::String,
                    span: Span::new(start, i + 1),
                }));
            }
        }
        return Err(ParseError::new(SyntaxError::UnterminatedString, start));
    }

    let limit = match source[start..].iter().position(|&b| ends_bare_run(b)) {
        Some(len) => start + len,
        None if allow_unterminated_scalar => source.len(),
        None => return Err(ParseError::new(SyntaxError::UnterminatedScalar, start)),
    };
    Ok(Some(Token {
        kind: TokenKind::Bare,
        span: Span::new(start, limit),
    }))
}

/// Cursor over the tokens of one buffer.
///
/// After the first error the tokenizer is exhausted.
#[derive(Debug, Clone)]
pub(crate) struct Tokenizer<'src> {
    source: &'src [u8],
    pos: usize,
    allow_unterminated_scalar: bool,
}

impl<'src> Tokenizer<'src> {
    pub(crate) fn new(source: &'src [u8], allow_unterminated_scalar: bool) -> Self {
        Self {
            source,
            pos: 0,
            allow_unterminated_scalar,
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        match next_token(self.source, self.pos, self.allow_unterminated_scalar) {
            Ok(Some(token)) => {
                self.pos = token.span.limit;
                Some(Ok(token))
            }
            Ok(None) => {
                self.pos = self.source.len();
                None
            }
            Err(err) => {
                self.pos = self.source.len();
                Some(Err(err))
            }
        }
    }
}
