#![no_main]

use arbitrary::Arbitrary;
use jsonseek::{Document, ParserOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    source: Vec<u8>,
    allow_trailing_data: bool,
    allow_unterminated_scalar: bool,
    max_depth: Option<u8>,
    paths: Vec<String>,
}

/// Every node lies inside the buffer and inside its parent.
fn check_tree(doc: &Document<'_>, len: usize) {
    let root = doc.root();
    let mut stack = vec![root];
    while let Some(element) = stack.pop() {
        let span = element.span();
        assert!(span.offset <= span.limit && span.limit <= len, "{span:?}");
        match element.parent() {
            Some(parent) => {
                let outer = parent.span();
                assert!(parent.is_container());
                assert!(outer.offset <= span.offset && span.limit <= outer.limit);
                assert_eq!(parent.get(element.key_bytes()), Some(element));
            }
            None => assert_eq!(element, root),
        }
        stack.extend(element.children());
    }
}

fuzz_target!(|input: Input| {
    let options = ParserOptions {
        allow_trailing_data: input.allow_trailing_data,
        allow_unterminated_scalar: input.allow_unterminated_scalar,
        max_depth: input.max_depth.map(usize::from),
        ..ParserOptions::default()
    };

    let parsed = Document::parse_with_options(&input.source, options);
    let accepted_by_serde = serde_json::from_slice::<serde_json::Value>(&input.source).is_ok();

    match parsed {
        Ok(doc) => {
            check_tree(&doc, input.source.len());
            let values = doc.select(&input.paths);
            assert_eq!(values.len(), input.paths.len());
            for path in &input.paths {
                if let Ok(found) = doc.find(path) {
                    assert!(found.span().limit <= input.source.len());
                }
            }
        }
        Err(err) => {
            assert!(err.offset() <= input.source.len());
            // Strict JSON is always accepted once bare roots may end the buffer.
            // serde_json refuses nesting beyond 127 levels on its own.
            let depth_allows = options.max_depth.is_none_or(|max| max >= 128);
            assert!(
                !(accepted_by_serde && input.allow_unterminated_scalar && depth_allows),
                "rejected valid JSON: {err}"
            );
        }
    }
});
