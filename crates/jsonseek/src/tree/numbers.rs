/// Lexical form of a validated JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberForm {
    /// No `.` and no exponent.
    Integer,
    /// Has a fraction or an exponent.
    Float,
}

/// Checks `text` against the JSON number grammar:
///
/// ```text
/// -? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?
/// ```
pub(crate) fn classify(text: &[u8]) -> Option<NumberForm> {
    let mut rest = text.strip_prefix(b"-").unwrap_or(text);

    match rest {
        [b'0', tail @ ..] => rest = tail,
        [b'1'..=b'9', ..] => rest = skip_digits(rest),
        _ => return None,
    }

    let mut form = NumberForm::Integer;

    if let Some(tail) = rest.strip_prefix(b".") {
        rest = digits1(tail)?;
        form = NumberForm::Float;
    }

    if let [b'e' | b'E', tail @ ..] = rest {
        let tail = tail
            .strip_prefix(b"+")
            .or_else(|| tail.strip_prefix(b"-"))
            .unwrap_or(tail);
        rest = digits1(tail)?;
        form = NumberForm::Float;
    }

    rest.is_empty().then_some(form)
}

fn skip_digits(bytes: &[u8]) -> &[u8] {
    let n = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    &bytes[n..]
}

/// At least one digit, then the remainder.
fn digits1(bytes: &[u8]) -> Option<&[u8]> {
    let rest = skip_digits(bytes);
    (rest.len() < bytes.len()).then_some(rest)
}
