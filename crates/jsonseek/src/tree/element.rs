use alloc::{borrow::Cow, collections::BTreeMap, vec::Vec};
use core::fmt;

use bstr::{BStr, ByteSlice};

use super::{
    Document, Kind, Node, NodeId, TypeError,
    numbers::{self, NumberForm},
};
use crate::{FindError, Span, selector};

/// A read-only handle to one element of a [`Document`].
///
/// Handles are `Copy` and borrow the document; every accessor reads through
/// to the source buffer on each call and nothing is cached.
#[derive(Clone, Copy)]
pub struct Element<'a> {
    doc: &'a Document<'a>,
    id: NodeId,
}

impl<'a> Element<'a> {
    pub(crate) fn new(doc: &'a Document<'a>, id: NodeId) -> Self {
        Self { doc, id }
    }

    fn node(&self) -> &'a Node {
        self.doc.node(self.id)
    }

    fn element(&self, id: NodeId) -> Element<'a> {
        Element::new(self.doc, id)
    }

    /// Arena index of this element within its document.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The document this element belongs to.
    #[must_use]
    pub fn document(&self) -> &'a Document<'a> {
        self.doc
    }

    /// The JSON type of this element.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.node().kind
    }

    /// The lowercase type name, see [`Kind::type_name`].
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.kind().type_name()
    }

    /// Returns `true` for arrays and objects.
    #[must_use]
    pub fn is_container(&self) -> bool {
        self.kind().is_container()
    }

    /// Returns `true` for numbers, strings, booleans, and null.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        self.kind().is_scalar()
    }

    /// The key under which this element is stored in its parent, decoded as
    /// text.
    ///
    /// Array members carry their decimal index (`"0"`, `"1"`, ...). The root
    /// has an empty key. Object keys are the raw text between the quotes;
    /// escape sequences are not decoded and invalid UTF-8 is replaced with
    /// U+FFFD. See [`key_bytes`](Self::key_bytes) for the exact bytes.
    #[must_use]
    pub fn key(&self) -> Cow<'a, str> {
        self.key_bytes().to_str_lossy()
    }

    /// The key exactly as written in the source.
    ///
    /// Children are indexed by these bytes, so two keys that decode to the
    /// same lossy text remain distinct.
    #[must_use]
    pub fn key_bytes(&self) -> &'a BStr {
        self.node().key.as_bstr()
    }

    /// The containing element, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Element<'a>> {
        self.node().parent.map(|id| self.element(id))
    }

    /// Byte range of this element in the source buffer.
    #[must_use]
    pub fn span(&self) -> Span {
        self.node().span
    }

    /// The raw bytes of this element.
    ///
    /// Strings exclude their quotes; containers include their brackets.
    #[must_use]
    pub fn content(&self) -> &'a BStr {
        self.raw().as_bstr()
    }

    fn raw(&self) -> &'a [u8] {
        &self.doc.source_bytes()[self.span().range()]
    }

    /// The content decoded as text.
    ///
    /// For strings this is the text between the quotes, with escape
    /// sequences left as written. For every other kind it is the literal
    /// source text. Invalid UTF-8 is replaced with U+FFFD.
    #[must_use]
    pub fn as_str(&self) -> Cow<'a, str> {
        self.raw().to_str_lossy()
    }

    fn number(&self) -> Result<(&'a str, NumberForm), TypeError> {
        if self.kind() != Kind::Number {
            return Err(TypeError::mismatch(Kind::Number.type_name(), self.kind()));
        }
        let raw = self.raw();
        match (numbers::classify(raw), core::str::from_utf8(raw)) {
            (Some(form), Ok(text)) => Ok((text, form)),
            _ => Err(TypeError::InvalidNumber(self.as_str().into_owned())),
        }
    }

    /// Parses a number element as a signed 64-bit integer.
    ///
    /// # Errors
    ///
    /// Fails if the element is not a number, its text is not a valid JSON
    /// number, it has a fraction or exponent, or it does not fit in `i64`.
    pub fn as_i64(&self) -> Result<i64, TypeError> {
        let (text, form) = self.number()?;
        if form != NumberForm::Integer {
            return Err(TypeError::NotAnInteger(text.into()));
        }
        text.parse().map_err(|_| TypeError::OutOfRange(text.into()))
    }

    /// Parses a number element as a 64-bit float.
    ///
    /// # Errors
    ///
    /// Fails if the element is not a number, its text is not a valid JSON
    /// number, or its magnitude overflows to infinity.
    pub fn as_f64(&self) -> Result<f64, TypeError> {
        let (text, _) = self.number()?;
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(TypeError::OutOfRange(text.into())),
        }
    }

    /// Reads a boolean element.
    ///
    /// # Errors
    ///
    /// Fails unless the element is `true` or `false`.
    pub fn as_bool(&self) -> Result<bool, TypeError> {
        match (self.kind(), self.raw()) {
            (Kind::Bool, b"true") => Ok(true),
            (Kind::Bool, b"false") => Ok(false),
            (kind, _) => Err(TypeError::mismatch(Kind::Bool.type_name(), kind)),
        }
    }

    /// The [`as_str`](Self::as_str) text of each child, in source order.
    ///
    /// # Errors
    ///
    /// Fails unless the element is an array or an object.
    pub fn as_ordered_values(&self) -> Result<Vec<Cow<'a, str>>, TypeError> {
        if !self.is_container() {
            return Err(TypeError::mismatch("array or object", self.kind()));
        }
        Ok(self.children().map(|child| child.as_str()).collect())
    }

    /// Maps each raw key of an object to its child's
    /// [`as_str`](Self::as_str) text, one level deep.
    ///
    /// # Errors
    ///
    /// Fails unless the element is an object.
    pub fn as_map(&self) -> Result<BTreeMap<&'a BStr, Cow<'a, str>>, TypeError> {
        if self.kind() != Kind::Object {
            return Err(TypeError::mismatch(Kind::Object.type_name(), self.kind()));
        }
        Ok(self
            .children()
            .map(|child| (child.key_bytes(), child.as_str()))
            .collect())
    }

    /// Number of children; zero for scalars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.node().children.len()
    }

    /// Returns `true` if the element has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The child stored under `key`, if any.
    ///
    /// Keys are compared as raw bytes. Array members are looked up by their
    /// decimal index, e.g. `"0"`.
    #[must_use]
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<Element<'a>> {
        self.node()
            .children
            .get(key.as_ref())
            .map(|id| self.element(id))
    }

    /// Iterates over the children in source order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = Element<'a>> + use<'a> {
        let doc = self.doc;
        self.node()
            .children
            .ids()
            .iter()
            .map(move |&id| Element::new(doc, id))
    }

    /// Calls `f` once per child, in source order.
    pub fn iterate_children(&self, f: impl FnMut(Element<'a>)) {
        self.children().for_each(f);
    }

    /// Resolves `path` relative to this element.
    ///
    /// # Errors
    ///
    /// See [`find`](crate::find).
    pub fn find(&self, path: &str) -> Result<Element<'a>, FindError> {
        selector::find(*self, path)
    }

    /// Resolves each of `paths` leniently, see [`select`](crate::select).
    pub fn select<I, S>(&self, paths: I) -> Vec<Cow<'a, str>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        selector::select(*self, paths)
    }
}

impl PartialEq for Element<'_> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.doc, other.doc) && self.id == other.id
    }
}

impl Eq for Element<'_> {}

impl fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("kind", &self.kind())
            .field("key", &self.key_bytes())
            .field("span", &self.span())
            .field("content", &self.content())
            .finish()
    }
}
