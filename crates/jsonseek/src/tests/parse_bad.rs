use alloc::string::ToString;

use rstest::rstest;

use crate::{SyntaxError, parse};

#[rstest]
#[case::empty(b"", SyntaxError::EmptyInput, 0)]
#[case::only_whitespace(b"  \n", SyntaxError::EmptyInput, 3)]
#[case::unclosed_array(b"[1,2 ", SyntaxError::UnterminatedContainer, 5)]
#[case::unclosed_nested(b"[[]", SyntaxError::UnterminatedContainer, 3)]
#[case::unclosed_object(br#"{"a":1,"b""#, SyntaxError::UnterminatedContainer, 10)]
#[case::bare_at_end(b"[1,2", SyntaxError::UnterminatedScalar, 3)]
#[case::unclosed_string(br#""abc"#, SyntaxError::UnterminatedString, 0)]
#[case::unclosed_value_string(br#"{"a":"b"#, SyntaxError::UnterminatedString, 5)]
#[case::stray_close(b"]", SyntaxError::UnbalancedBracket(']'), 0)]
#[case::mismatched(b"[1}", SyntaxError::MismatchedBracket { expected: ']', found: '}' }, 2)]
#[case::missing_colon(br#"{"a" 1}"#, SyntaxError::MissingColon, 5)]
#[case::missing_colon_string(br#"{"a" "b"}"#, SyntaxError::MissingColon, 5)]
#[case::missing_comma_object(br#"{"a":1 "b":2}"#, SyntaxError::MissingComma, 7)]
#[case::missing_comma_array(b"[1 2]", SyntaxError::MissingComma, 3)]
#[case::missing_comma_strings(br#"["a" "b"]"#, SyntaxError::MissingComma, 5)]
#[case::trailing_comma_array(b"[1,]", SyntaxError::TrailingComma(']'), 3)]
#[case::trailing_comma_object(br#"{"a":1,}"#, SyntaxError::TrailingComma('}'), 7)]
#[case::dangling_colon(br#"{"a":}"#, SyntaxError::DanglingKey, 5)]
#[case::dangling_key(br#"{"a"}"#, SyntaxError::DanglingKey, 4)]
#[case::missing_key(b"{1}", SyntaxError::MissingKey, 1)]
#[case::leading_comma(b"[,1]", SyntaxError::UnexpectedSeparator(','), 1)]
#[case::colon_in_array(b"[1:2]", SyntaxError::UnexpectedSeparator(':'), 2)]
#[case::double_colon(br#"{"a"::1}"#, SyntaxError::UnexpectedSeparator(':'), 5)]
#[case::lone_comma(b",", SyntaxError::UnexpectedSeparator(','), 0)]
#[case::second_value(b"1 2 ", SyntaxError::TrailingData, 2)]
#[case::extra_close(b"{}}", SyntaxError::TrailingData, 2)]
fn rejects(#[case] source: &[u8], #[case] kind: SyntaxError, #[case] offset: usize) {
    let err = parse(source).unwrap_err();
    assert_eq!((err.kind(), err.offset()), (&kind, offset));
}

#[test]
fn error_display() {
    let err = parse(b"[1,]").unwrap_err();
    assert_eq!(err.to_string(), "trailing ',' before ']' at byte 3");

    let err = parse(b"[1}").unwrap_err();
    assert_eq!(err.to_string(), "expected ']' but found '}' at byte 2");
}
