//! Path selectors.
//!
//! A selector is a chain of segments, each naming one child:
//!
//! ```text
//! path       := segment*
//! segment    := "." identifier | "[" index "]"
//! identifier := bytes up to the next "." or "[" or the end
//! index      := bytes up to the next "]"
//! ```
//!
//! The text of a segment is used verbatim as the child key, so `.name`
//! selects the object member `name` and `[0]` selects the first array member
//! (arrays store their members under `"0"`, `"1"`, ...). There is no quoting
//! or escaping inside a selector.

mod error;

use alloc::{borrow::Cow, vec::Vec};

pub use error::{FindError, SelectorSyntaxError};

use crate::{Document, Element, Error, NodeId};

/// One step of a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'p> {
    /// `.identifier`
    Key(&'p str),
    /// `[index]`
    Index(&'p str),
}

impl<'p> Segment<'p> {
    /// The child key this segment looks up.
    #[must_use]
    pub fn key(&self) -> &'p str {
        match *self {
            Segment::Key(key) | Segment::Index(key) => key,
        }
    }
}

/// Reads a path one segment at a time.
///
/// After a syntax error the selector is exhausted.
///
/// # Examples
///
/// ```rust
/// use jsonseek::{Segment, Selector};
///
/// let segments: Result<Vec<_>, _> = Selector::new(".items[2].name").collect();
/// assert_eq!(
///     segments.unwrap(),
///     [Segment::Key("items"), Segment::Index("2"), Segment::Key("name")]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Selector<'p> {
    path: &'p str,
    pos: usize,
}

impl<'p> Selector<'p> {
    /// Starts reading `path` from the beginning.
    #[must_use]
    pub fn new(path: &'p str) -> Self {
        Self { path, pos: 0 }
    }

    /// The part of the path not read yet.
    #[must_use]
    pub fn remainder(&self) -> &'p str {
        &self.path[self.pos..]
    }

    /// Returns `true` once the whole path has been read.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.pos >= self.path.len()
    }

    /// Checks that `path` is well formed without resolving it.
    ///
    /// # Errors
    ///
    /// Returns the first [`SelectorSyntaxError`] in `path`.
    pub fn validate(path: &str) -> Result<(), SelectorSyntaxError> {
        Selector::new(path).try_for_each(|segment| segment.map(drop))
    }
}

impl<'p> Iterator for Selector<'p> {
    type Item = Result<Segment<'p>, SelectorSyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.pos;
        let rest = self.remainder();
        let first = rest.chars().next()?;
        // Delimiters are ASCII, so every split below is a char boundary.
        let body = &rest[first.len_utf8()..];
        match first {
            '.' => {
                let len = body.find(|c: char| matches!(c, '.' | '[')).unwrap_or(body.len());
                self.pos += 1 + len;
                Some(Ok(Segment::Key(&body[..len])))
            }
            '[' => match body.find(']') {
                Some(len) => {
                    self.pos += len + 2;
                    Some(Ok(Segment::Index(&body[..len])))
                }
                None => {
                    self.pos = self.path.len();
                    Some(Err(SelectorSyntaxError::UnterminatedIndex { offset }))
                }
            },
            found => {
                self.pos = self.path.len();
                Some(Err(SelectorSyntaxError::UnexpectedChar { found, offset }))
            }
        }
    }
}

/// Resolves `path` relative to `element`.
///
/// Resolution reads one segment at a time: an empty remainder returns the
/// current element, a scalar cannot be descended into, and a container looks
/// the segment's text up among its children.
///
/// # Errors
///
/// - [`FindError::Structural`] if the path continues below a scalar.
/// - [`FindError::Lookup`] if a segment names a missing key or index.
/// - [`FindError::Syntax`] if the path is malformed at the point reached.
///
/// # Examples
///
/// ```rust
/// use jsonseek::{FindError, find, parse};
///
/// let doc = parse(br#"{"a":1,"b":[2,3]}"#).unwrap();
/// assert_eq!(find(doc.root(), ".b[1]").unwrap().as_i64(), Ok(3));
/// assert!(matches!(find(doc.root(), ".c"), Err(FindError::Lookup { .. })));
/// assert!(matches!(find(doc.root(), ".a.x"), Err(FindError::Structural { .. })));
/// ```
pub fn find<'a>(element: Element<'a>, path: &str) -> Result<Element<'a>, FindError> {
    let mut current = element;
    let mut selector = Selector::new(path);
    while !selector.is_finished() {
        if current.is_scalar() {
            return Err(FindError::Structural {
                kind: current.kind(),
                remainder: selector.remainder().into(),
            });
        }
        let Some(segment) = selector.next() else {
            break;
        };
        let key = segment?.key();
        current = current
            .get(key)
            .ok_or_else(|| FindError::Lookup { key: key.into() })?;
    }
    Ok(current)
}

/// Resolves each of `paths` relative to `element`, never failing.
///
/// Each result is the resolved element's [`Element::as_str`] text. A path
/// that fails to resolve for any reason contributes an empty string and the
/// remaining paths are still resolved. Use [`find`] to see why a path failed.
///
/// # Examples
///
/// ```rust
/// use jsonseek::{parse, select};
///
/// let doc = parse(br#"{"a":1}"#).unwrap();
/// assert_eq!(select(doc.root(), [".missing", ".a"]), ["", "1"]);
/// ```
pub fn select<'a, I, S>(element: Element<'a>, paths: I) -> Vec<Cow<'a, str>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    paths
        .into_iter()
        .map(|path| {
            find(element, path.as_ref())
                .map(|found| found.as_str())
                .unwrap_or_default()
        })
        .collect()
}

/// A document together with the element a [`get`] call resolved.
#[derive(Debug, Clone)]
pub struct Found<'src> {
    document: Document<'src>,
    id: NodeId,
}

impl<'src> Found<'src> {
    /// The resolved element.
    #[must_use]
    pub fn element(&self) -> Element<'_> {
        Element::new(&self.document, self.id)
    }

    /// The whole parsed document.
    #[must_use]
    pub fn document(&self) -> &Document<'src> {
        &self.document
    }

    /// Gives up the resolved element and keeps the document.
    #[must_use]
    pub fn into_document(self) -> Document<'src> {
        self.document
    }
}

/// Parses `source` and resolves `path` from its root in one call.
///
/// # Errors
///
/// Returns [`Error::Parse`] if `source` does not parse and [`Error::Find`]
/// if `path` does not resolve.
///
/// # Examples
///
/// ```rust
/// let found = jsonseek::get(br#"{"user":{"id":7}}"#, ".user.id").unwrap();
/// assert_eq!(found.element().as_i64(), Ok(7));
/// ```
pub fn get<'src>(source: &'src [u8], path: &str) -> Result<Found<'src>, Error> {
    let document = Document::parse(source)?;
    let id = document.find(path)?.id();
    Ok(Found { document, id })
}
