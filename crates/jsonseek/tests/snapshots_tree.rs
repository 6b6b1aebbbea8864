#![expect(missing_docs)]

use core::fmt::Write;

use jsonseek::{Element, parse};

fn render_element(out: &mut String, element: Element<'_>, depth: usize) {
    let span = element.span();
    if depth > 0 {
        write!(out, "{:indent$}{}: ", "", element.key(), indent = depth * 2).unwrap();
    }
    writeln!(
        out,
        "{} {}..{} {}",
        element.kind(),
        span.offset,
        span.limit,
        element.as_str()
    )
    .unwrap();
    for child in element.children() {
        render_element(out, child, depth + 1);
    }
}

fn render_tree(source: &str) -> String {
    let doc = parse(source.as_bytes()).expect("valid document");
    let mut out = String::new();
    render_element(&mut out, doc.root(), 0);
    out
}

fn render_lookups(source: &str, paths: &[&str]) -> String {
    let doc = parse(source.as_bytes()).expect("valid document");
    let mut out = String::new();
    for path in paths {
        let written = match doc.find(path) {
            Ok(found) => writeln!(out, "{path} => {} {}", found.kind(), found.as_str()),
            Err(err) => writeln!(out, "{path} => error: {err}"),
        };
        written.unwrap();
    }
    out
}

#[test]
fn snapshot_compact_tree() {
    insta::assert_snapshot!(render_tree(r#"{"a":1,"b":[2,3]}"#), @r#"
    object 0..17 {"a":1,"b":[2,3]}
      a: number 5..6 1
      b: array 11..16 [2,3]
        0: number 12..13 2
        1: number 14..15 3
    "#);
}

#[test]
fn snapshot_repeated_key_tree() {
    let source = r#"{"name": "w", "tags": ["x", "y"], "name": "v"}"#;
    insta::assert_snapshot!(render_tree(source), @r#"
    object 0..46 {"name": "w", "tags": ["x", "y"], "name": "v"}
      name: string 43..44 v
      tags: array 22..32 ["x", "y"]
        0: string 24..25 x
        1: string 29..30 y
    "#);
    assert_eq!(parse(source.as_bytes()).unwrap().node_count(), 6);
}

#[test]
fn snapshot_scalars_tree() {
    insta::assert_snapshot!(render_tree(r#"[null,true,-0.5e1,"s\"q",{}]"#), @r#"
    array 0..28 [null,true,-0.5e1,"s\"q",{}]
      0: null 1..5 null
      1: bool 6..10 true
      2: number 11..17 -0.5e1
      3: string 19..23 s\"q
      4: object 25..27 {}
    "#);
}

#[test]
fn snapshot_lookups() {
    let paths = [".b[1]", ".b", ".c", ".a.x", "b", ".b[0"];
    insta::assert_snapshot!(render_lookups(r#"{"a":1,"b":[2,3]}"#, &paths), @r#"
    .b[1] => number 3
    .b => array [2,3]
    .c => error: no element under key "c"
    .a.x => error: cannot descend into a scalar value of type number (remaining path ".x")
    b => error: unexpected 'b' at offset 0, expected '.' or '['
    .b[0 => error: unterminated index starting at offset 2
    "#);
}
