//! Turning raw text into a number, when there is one to find.

use log::debug;

use crate::number::UnsanitizedNumber;

/// Parses the leading portion of `input` as a base-10 integer literal.
///
/// Leading ASCII whitespace and a single `+`/`-` sign are allowed; parsing
/// stops at the first non-digit after that, so `"12abc"` yields 12. The
/// result is not range-checked in any way.
///
/// Returns `None` when no leading integer exists, or when the literal does
/// not fit in an `i64`. Rejection is the `None` signal only; this never
/// panics or errors.
///
/// # Examples
///
/// ```
/// use pick_a_number_core::parsing::parse_number;
///
/// assert_eq!(parse_number("7").map(|n| n.value()), Some(7));
/// assert_eq!(parse_number("  -3 little pigs").map(|n| n.value()), Some(-3));
/// assert!(parse_number("seven").is_none());
/// ```
#[must_use]
pub fn parse_number(input: &str) -> Option<UnsanitizedNumber> {
    let text = input.trim_start();
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);

    // ASCII digits only, so the char count is also the byte length.
    let digit_count = unsigned.chars().take_while(char::is_ascii_digit).count();
    if digit_count == 0 {
        debug!("no leading integer in {input:?}");
        return None;
    }

    let literal = &text[..text.len() - unsigned.len() + digit_count];
    match literal.parse::<i64>() {
        Ok(value) => Some(UnsanitizedNumber::new(value)),
        Err(_) => {
            debug!("leading integer {literal:?} does not fit in i64");
            None
        }
    }
}
