//! Human-readable list rendering for error messages

use std::fmt::Display;

/// The word joining the last two items of a rendered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conjunction {
    /// Alternatives: `"a", "b", or "c"`
    Or,
    /// Accumulations: `"a" and "b"`
    And,
}

impl Conjunction {
    fn as_str(self) -> &'static str {
        match self {
            Conjunction::Or => "or",
            Conjunction::And => "and",
        }
    }
}

/// Wrap a value's text form in double quotes.
///
/// ```
/// use fieldcheck::format::quote;
///
/// assert_eq!(quote("name"), "\"name\"");
/// ```
pub fn quote<D: Display + ?Sized>(value: &D) -> String {
    format!("\"{}\"", value)
}

/// Render items as a quoted, Oxford-comma list.
///
/// ```
/// use fieldcheck::format::{list, Conjunction};
///
/// assert_eq!(list(Conjunction::Or, &["a"]), r#""a""#);
/// assert_eq!(list(Conjunction::And, &["a", "b"]), r#""a" and "b""#);
/// assert_eq!(list(Conjunction::Or, &["a", "b", "c"]), r#""a", "b", or "c""#);
/// ```
///
/// An empty slice renders as a single empty quoted item, `""`.
pub fn list<D: Display>(conj: Conjunction, items: &[D]) -> String {
    match items {
        [] => quote(""),
        [only] => quote(only),
        [first, last] => format!("{} {} {}", quote(first), conj.as_str(), quote(last)),
        [rest @ .., last] => {
            let head: Vec<String> = rest.iter().map(quote).collect();
            format!("{}, {} {}", head.join(", "), conj.as_str(), quote(last))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn test_empty_list() {
        let items: [&str; 0] = [];
        assert_eq!(list(Conjunction::Or, &items), "\"\"");
    }

    #[test]
    fn test_four_items() {
        assert_eq!(
            list(Conjunction::And, &["w", "x", "y", "z"]),
            r#""w", "x", "y", and "z""#
        );
    }

    #[test]
    fn test_values_use_text_form() {
        let items = vec![Value::Int(2), Value::from("not there")];
        assert_eq!(list(Conjunction::And, &items), r#""2" and "not there""#);
    }

    #[test]
    fn test_quote_keeps_inner_quotes() {
        assert_eq!(quote("say \"hi\""), "\"say \"hi\"\"");
    }
}
