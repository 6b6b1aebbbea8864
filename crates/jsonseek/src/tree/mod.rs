//! The element tree: an arena of typed nodes addressing a shared source
//! buffer.
//!
//! Nodes never own content. Each one records a [`Span`] into the
//! [`Document`]'s buffer, its key under its parent, a non-owning parent index,
//! and its children. Children are kept twice: a lookup index by key and a
//! separate sequence in source order, so iteration order never depends on the
//! index.

mod document;
mod element;
mod error;
mod numbers;

use alloc::{
    collections::{BTreeMap, btree_map::Entry},
    sync::Arc,
    vec::Vec,
};
use core::{fmt, mem};

pub use document::Document;
pub use element::Element;
pub use error::TypeError;

use crate::Span;

/// The JSON type of an element.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(any(test, feature = "serde"), serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A bare token other than a keyword literal.
    Number,
    /// A quoted string.
    String,
    /// `true` or `false`.
    Bool,
    /// `null`.
    Null,
    /// `[ ... ]`
    Array,
    /// `{ ... }`
    Object,
}

impl Kind {
    /// The lowercase type name: `"number"`, `"string"`, `"bool"`, `"null"`,
    /// `"array"`, or `"object"`.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Bool => "bool",
            Kind::Null => "null",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }

    /// Returns `true` for arrays and objects.
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(self, Kind::Array | Kind::Object)
    }

    /// Returns `true` for numbers, strings, booleans, and null.
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        !self.is_container()
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Index of a node in its document's arena.
///
/// Only meaningful together with the [`Document`] that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub(crate) const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) kind: Kind,
    /// Raw key bytes as written in the source, or the decimal index.
    pub(crate) key: Arc<[u8]>,
    /// Lookup only; the parent owns this node through the arena, not the
    /// other way around.
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Children,
    pub(crate) span: Span,
}

/// Ordered children of a container.
///
/// The index maps each key to its slot in `order`.
#[derive(Debug, Clone, Default)]
pub(crate) struct Children {
    index: BTreeMap<Arc<[u8]>, usize>,
    order: Vec<NodeId>,
}

impl Children {
    /// Inserts `id` under `key`.
    ///
    /// A repeated key takes over the earlier child's slot in the order
    /// sequence. Returns the displaced child.
    pub(crate) fn insert(&mut self, key: Arc<[u8]>, id: NodeId) -> Option<NodeId> {
        match self.index.entry(key) {
            Entry::Occupied(entry) => Some(mem::replace(&mut self.order[*entry.get()], id)),
            Entry::Vacant(entry) => {
                entry.insert(self.order.len());
                self.order.push(id);
                None
            }
        }
    }

    pub(crate) fn get(&self, key: &[u8]) -> Option<NodeId> {
        self.index.get(key).map(|&slot| self.order[slot])
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    pub(crate) fn ids(&self) -> &[NodeId] {
        &self.order
    }
}
