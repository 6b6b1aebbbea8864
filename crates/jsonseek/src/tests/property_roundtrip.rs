use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::fmt::Write;

use quickcheck::QuickCheck;
use serde_json::Value;

use super::arbitrary::JsonValue;
use crate::{Element, Kind, NodeId, ParserOptions, parse, parse_with_options};

fn test_count() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// The raw text `serde_json` writes between the quotes of `s`.
fn escaped(s: &str) -> String {
    let quoted = serde_json::to_string(s).unwrap();
    quoted[1..quoted.len() - 1].into()
}

fn same_shape(element: Element<'_>, expected: &Value) -> bool {
    let is_child = |child: Element<'_>| child.parent().is_some_and(|p| p == element);
    match expected {
        Value::Null => element.kind() == Kind::Null,
        Value::Bool(b) => element.as_bool() == Ok(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => element.as_i64() == Ok(i),
            None => element.as_f64().ok() == n.as_f64(),
        },
        Value::String(s) => element.kind() == Kind::String && element.as_str() == escaped(s),
        Value::Array(items) => {
            element.kind() == Kind::Array
                && element.len() == items.len()
                && element
                    .children()
                    .zip(items)
                    .enumerate()
                    .all(|(i, (child, item))| {
                        is_child(child) && child.key() == i.to_string() && same_shape(child, item)
                    })
        }
        Value::Object(map) => {
            element.kind() == Kind::Object
                && element.len() == map.len()
                && element.children().zip(map).all(|(child, (key, item))| {
                    is_child(child) && child.key() == escaped(key) && same_shape(child, item)
                })
        }
    }
}

/// Checks that every element reachable from `element` is found again by the
/// selector spelling out its position.
fn reachable_by_path(element: Element<'_>, path: &mut String) -> bool {
    if element.document().find(path) != Ok(element) {
        return false;
    }
    element.children().all(|child| {
        let len = path.len();
        let key = child.key();
        if element.kind() == Kind::Array {
            write!(path, "[{key}]").unwrap();
        } else if key.contains(['.', '[']) {
            return true;
        } else {
            path.push('.');
            path.push_str(&key);
        }
        let reachable = reachable_by_path(child, path);
        path.truncate(len);
        reachable
    })
}

#[test]
fn compact_roundtrip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: JsonValue) -> bool {
        let text = serde_json::to_string(&value.0).unwrap();
        let doc = parse(text.as_bytes()).unwrap();
        doc.root().content() == text.as_str() && same_shape(doc.root(), &value.0)
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(JsonValue) -> bool);
}

#[test]
fn pretty_roundtrip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: JsonValue) -> bool {
        let text = serde_json::to_string_pretty(&value.0).unwrap();
        let doc = parse(text.as_bytes()).unwrap();
        same_shape(doc.root(), &value.0) && reachable_by_path(doc.root(), &mut String::new())
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(JsonValue) -> bool);
}

#[test]
fn arbitrary_bytes_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>, lenient: bool) -> bool {
        let options = ParserOptions {
            allow_trailing_data: lenient,
            allow_unterminated_scalar: lenient,
            ..Default::default()
        };
        let doc = match parse_with_options(&bytes, options) {
            Ok(doc) => doc,
            Err(err) => return err.offset() <= bytes.len(),
        };
        let root = doc.root();
        (0..doc.node_count()).all(|i| {
            let Some(element) = doc.element(NodeId(i)) else {
                return false;
            };
            let span = element.span();
            span.offset <= span.limit
                && span.limit <= bytes.len()
                && element.parent().map_or(element == root, |parent| {
                    parent.is_container()
                        && parent.span().offset <= span.offset
                        && span.limit <= parent.span().limit
                })
        })
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>, bool) -> bool);
}
