//! Stack-driven tree builder.
//!
//! One pass over the token stream. The builder keeps an explicit cursor on
//! the innermost open container, the object key waiting for its value, and a
//! stack of the opening brackets still unmatched. Every node is attached to
//! its parent the moment it is created, so keys and array indices are
//! assigned in source order.

use alloc::{borrow::Cow, string::ToString, sync::Arc, vec::Vec};

use tracing::{debug, trace};

use super::{
    ParseError, ParserOptions, SyntaxError,
    tokenizer::{Punct, Token, TokenKind, Tokenizer},
};
use crate::{
    Span,
    tree::{Children, Document, Kind, Node, NodeId},
};

const NULL: &[u8] = b"null";
const TRUE: &[u8] = b"true";
const FALSE: &[u8] = b"false";

/// The previous structural step, used to validate where `,` and `:` may
/// appear and where a value may start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Last {
    /// Nothing read yet.
    Start,
    /// An opening bracket.
    Open,
    /// A complete value: a scalar or a closed container.
    Value,
    /// A `,` inside a container.
    Comma,
    /// An object key.
    Key,
    /// The `:` after an object key.
    Colon,
}

/// Builds a [`Document`] from a byte buffer in a single pass.
///
/// A builder is single-use and holds all state of one parse, so independent
/// parses never share anything.
///
/// # Examples
///
/// ```rust
/// use jsonseek::{Kind, ParserOptions, TreeBuilder};
///
/// let doc = TreeBuilder::new(ParserOptions::default())
///     .build(&br#"[1,"two",null]"#[..])
///     .unwrap();
/// let kinds: Vec<Kind> = doc.root().children().map(|e| e.kind()).collect();
/// assert_eq!(kinds, [Kind::Number, Kind::String, Kind::Null]);
/// ```
#[derive(Debug)]
pub struct TreeBuilder {
    options: ParserOptions,
    nodes: Vec<Node>,
    root: Option<NodeId>,
    /// Innermost open container.
    current: Option<NodeId>,
    /// Object key read but not yet attached to a value.
    pending_key: Option<Arc<[u8]>>,
    /// Opening brackets not yet closed.
    bracket_stack: Vec<Punct>,
    last: Last,
}

impl TreeBuilder {
    /// Creates a builder with the given options.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self {
            options,
            nodes: Vec::new(),
            root: None,
            current: None,
            pending_key: None,
            bracket_stack: Vec::new(),
            last: Last::Start,
        }
    }

    /// Parses `source` into a [`Document`].
    ///
    /// Accepts a borrowed slice or an owned `Vec<u8>`; either way the
    /// document keeps the buffer and no content is copied.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered. No partial tree is
    /// produced.
    pub fn build<'src>(
        mut self,
        source: impl Into<Cow<'src, [u8]>>,
    ) -> Result<Document<'src>, ParseError> {
        let source = source.into();
        match self.run(&source) {
            Ok(root) => {
                debug!(
                    bytes = source.len(),
                    nodes = self.nodes.len(),
                    "parsed document"
                );
                Ok(Document::from_parts(source, self.nodes, root))
            }
            Err(err) => {
                debug!(%err, "parse failed");
                #[cfg(any(test, feature = "fuzzing"))]
                if self.options.panic_on_error {
                    panic!("{err}");
                }
                Err(err)
            }
        }
    }

    fn run(&mut self, source: &[u8]) -> Result<NodeId, ParseError> {
        let mut tokens = Tokenizer::new(source, self.options.allow_unterminated_scalar);
        loop {
            if self.root_complete() && self.options.allow_trailing_data {
                break;
            }
            let Some(token) = tokens.next().transpose()? else {
                break;
            };
            if self.root_complete() {
                return Err(ParseError::new(SyntaxError::TrailingData, token.span.offset));
            }
            self.step(source, token)
                .map_err(|kind| ParseError::new(kind, token.span.offset))?;
        }

        if !self.bracket_stack.is_empty() {
            let err = ParseError::new(SyntaxError::UnterminatedContainer, source.len());
            return Err(err);
        }
        self.root
            .ok_or(ParseError::new(SyntaxError::EmptyInput, source.len()))
    }

    fn root_complete(&self) -> bool {
        self.root.is_some() && self.bracket_stack.is_empty()
    }

    fn step(&mut self, source: &[u8], token: Token) -> Result<(), SyntaxError> {
        trace!(kind = ?token.kind, offset = token.span.offset, "token");
        match token.kind {
            TokenKind::Punctuator(p @ (Punct::ObjectOpen | Punct::ArrayOpen)) => {
                self.open(p, token.span.offset)
            }
            TokenKind::Punctuator(p @ (Punct::ObjectClose | Punct::ArrayClose)) => {
                self.close(p, token.span.offset)
            }
            TokenKind::Punctuator(Punct::Comma) => self.comma(),
            TokenKind::Punctuator(Punct::Colon) => self.colon(),
            TokenKind::String => self.string(source, token),
            TokenKind::Bare => {
                let kind = match token.bytes(source) {
                    NULL => Kind::Null,
                    TRUE | FALSE => Kind::Bool,
                    _ => Kind::Number,
                };
                self.attach(kind, token.span).map(drop)
            }
        }
    }

    fn current_kind(&self) -> Option<Kind> {
        self.current.map(|id| self.nodes[id.index()].kind)
    }

    fn open(&mut self, bracket: Punct, offset: usize) -> Result<(), SyntaxError> {
        let depth = self.bracket_stack.len();
        if let Some(max) = self.options.max_depth.filter(|&max| depth >= max) {
            return Err(SyntaxError::DepthLimitExceeded(max));
        }
        let kind = if bracket == Punct::ObjectOpen {
            Kind::Object
        } else {
            Kind::Array
        };
        let id = self.attach(kind, Span::empty(offset))?;
        self.bracket_stack.push(bracket);
        self.current = Some(id);
        self.last = Last::Open;
        Ok(())
    }

    fn close(&mut self, bracket: Punct, offset: usize) -> Result<(), SyntaxError> {
        let (Some(&open), Some(id)) = (self.bracket_stack.last(), self.current) else {
            return Err(SyntaxError::UnbalancedBracket(bracket.as_char()));
        };
        let expected = if open == Punct::ObjectOpen {
            Punct::ObjectClose
        } else {
            Punct::ArrayClose
        };
        if bracket != expected {
            return Err(SyntaxError::MismatchedBracket {
                expected: expected.as_char(),
                found: bracket.as_char(),
            });
        }
        match self.last {
            Last::Start | Last::Open | Last::Value => {}
            Last::Comma => return Err(SyntaxError::TrailingComma(bracket.as_char())),
            Last::Key | Last::Colon => return Err(SyntaxError::DanglingKey),
        }

        self.bracket_stack.pop();
        let node = &mut self.nodes[id.index()];
        node.span.limit = offset + 1;
        self.current = node.parent;
        self.last = Last::Value;
        trace!(offset, depth = self.bracket_stack.len(), "closed container");
        Ok(())
    }

    fn comma(&mut self) -> Result<(), SyntaxError> {
        if self.current.is_none() || self.last != Last::Value {
            return Err(SyntaxError::UnexpectedSeparator(Punct::Comma.as_char()));
        }
        self.last = Last::Comma;
        Ok(())
    }

    fn colon(&mut self) -> Result<(), SyntaxError> {
        if self.current_kind() != Some(Kind::Object) || self.last != Last::Key {
            return Err(SyntaxError::UnexpectedSeparator(Punct::Colon.as_char()));
        }
        self.last = Last::Colon;
        Ok(())
    }

    fn string(&mut self, source: &[u8], token: Token) -> Result<(), SyntaxError> {
        let content = token.unquoted();
        if self.current_kind() == Some(Kind::Object) && self.pending_key.is_none() {
            if !matches!(self.last, Last::Open | Last::Comma) {
                return Err(SyntaxError::MissingComma);
            }
            self.pending_key = Some(Arc::from(&source[content.range()]));
            self.last = Last::Key;
            return Ok(());
        }
        self.attach(Kind::String, content).map(drop)
    }

    /// Creates a node and appends it to the current container, or makes it
    /// the root.
    fn attach(&mut self, kind: Kind, span: Span) -> Result<NodeId, SyntaxError> {
        let id = NodeId(self.nodes.len());
        let (parent, key) = match self.current {
            None if self.root.is_none() => (None, Arc::from(&b""[..])),
            None => return Err(SyntaxError::TrailingData),
            Some(parent) => {
                let key = match (self.nodes[parent.index()].kind, self.last) {
                    (Kind::Object, Last::Colon) => self
                        .pending_key
                        .take()
                        .ok_or(SyntaxError::MissingKey)?,
                    (Kind::Object, Last::Key) => return Err(SyntaxError::MissingColon),
                    (Kind::Object, _) => return Err(SyntaxError::MissingKey),
                    (_, Last::Open | Last::Comma) => {
                        let index = self.nodes[parent.index()].children.len().to_string();
                        Arc::from(index.as_bytes())
                    }
                    (_, _) => return Err(SyntaxError::MissingComma),
                };
                (Some(parent), key)
            }
        };

        self.nodes.push(Node {
            kind,
            key: key.clone(),
            parent,
            children: Children::default(),
            span,
        });
        match parent {
            Some(parent) => {
                if let Some(displaced) = self.nodes[parent.index()].children.insert(key, id) {
                    trace!(?displaced, "repeated key replaced earlier value");
                }
            }
            None => self.root = Some(id),
        }
        if kind.is_scalar() {
            self.last = Last::Value;
        }
        trace!(?kind, ?id, "created node");
        Ok(id)
    }
}
