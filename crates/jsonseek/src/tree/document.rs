use alloc::{borrow::Cow, vec::Vec};

use bstr::{BStr, ByteSlice};

use super::{Element, Node, NodeId};
use crate::{FindError, ParseError, ParserOptions, TreeBuilder};

/// A parsed, immutable JSON tree together with the buffer it was parsed from.
///
/// The document either borrows the source (`Document<'src>`) or owns it
/// (`Document<'static>`, see [`Document::parse_owned`]). Elements only store
/// byte ranges, so no scalar content is ever copied out of the buffer.
///
/// There is no way to modify a document once built; it can be shared across
/// threads and read concurrently.
///
/// # Examples
///
/// ```rust
/// use jsonseek::Document;
///
/// let doc = Document::parse(br#"{"a":1,"b":[2,3]}"#).unwrap();
/// assert_eq!(doc.find(".b[1]").unwrap().as_i64(), Ok(3));
/// ```
#[derive(Debug, Clone)]
pub struct Document<'src> {
    source: Cow<'src, [u8]>,
    nodes: Vec<Node>,
    root: NodeId,
}

impl<'src> Document<'src> {
    pub(crate) fn from_parts(source: Cow<'src, [u8]>, nodes: Vec<Node>, root: NodeId) -> Self {
        debug_assert!(root.index() < nodes.len());
        Self {
            source,
            nodes,
            root,
        }
    }

    /// Parses `source` with the default [`ParserOptions`], borrowing it.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if `source` is not a single JSON value.
    pub fn parse(source: &'src [u8]) -> Result<Self, ParseError> {
        Self::parse_with_options(source, ParserOptions::default())
    }

    /// Parses `source` with the given options, borrowing it.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if `source` is not accepted under `options`.
    pub fn parse_with_options(
        source: &'src [u8],
        options: ParserOptions,
    ) -> Result<Self, ParseError> {
        TreeBuilder::new(options).build(source)
    }

    /// Parses `source` with the default [`ParserOptions`], taking ownership
    /// of the buffer.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if `source` is not a single JSON value.
    pub fn parse_owned(source: Vec<u8>) -> Result<Document<'static>, ParseError> {
        TreeBuilder::new(ParserOptions::default()).build(source)
    }

    /// Detaches the document from the borrowed buffer by copying it.
    #[must_use]
    pub fn into_owned(self) -> Document<'static> {
        Document {
            source: Cow::Owned(self.source.into_owned()),
            nodes: self.nodes,
            root: self.root,
        }
    }

    /// The complete source buffer.
    #[must_use]
    pub fn source(&self) -> &BStr {
        self.source.as_bstr()
    }

    pub(crate) fn source_bytes(&self) -> &[u8] {
        &self.source
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// The root element.
    #[must_use]
    pub fn root(&self) -> Element<'_> {
        Element::new(self, self.root)
    }

    /// The element with arena index `id`, if it exists.
    ///
    /// Elements displaced by a repeated object key remain addressable here
    /// even though no path from the root reaches them.
    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<Element<'_>> {
        (id.index() < self.nodes.len()).then(|| Element::new(self, id))
    }

    /// Number of nodes created while parsing, including displaced ones.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Resolves `path` from the root, see [`find`](crate::find).
    ///
    /// # Errors
    ///
    /// Returns a [`FindError`] if the path is malformed or does not resolve.
    pub fn find(&self, path: &str) -> Result<Element<'_>, FindError> {
        self.root().find(path)
    }

    /// Resolves each of `paths` from the root, see [`select`](crate::select).
    pub fn select<I, S>(&self, paths: I) -> Vec<Cow<'_, str>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.root().select(paths)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn documents_are_shareable() {
        assert_send_sync::<Document<'static>>();
        assert_send_sync::<Element<'static>>();
    }

    #[test]
    fn owned_and_borrowed_agree() {
        let text = br#"{"k":[true,"v"]}"#;
        let borrowed = Document::parse(text).unwrap();
        let owned = Document::parse_owned(text.to_vec()).unwrap();
        assert_eq!(borrowed.source(), owned.source());
        assert_eq!(
            borrowed.find(".k[1]").unwrap().span(),
            owned.find(".k[1]").unwrap().span()
        );
    }

    #[test]
    fn into_owned_outlives_the_buffer() {
        let doc = {
            let text = vec![b'[', b'1', b',', b'2', b']'];
            Document::parse(&text).unwrap().into_owned()
        };
        assert_eq!(doc.root().as_ordered_values().unwrap(), ["1", "2"]);
    }

    #[test]
    fn element_lookup_by_id() {
        let doc = Document::parse(b"[null]").unwrap();
        let child = doc.root().get("0").unwrap();
        assert_eq!(doc.element(child.id()), Some(child));
        assert_eq!(doc.element(NodeId(doc.node_count())), None);
    }
}
