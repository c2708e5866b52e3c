//! Predicates over optional field values
//!
//! Every validator reads one field from the mapping, which may be missing, and
//! asks one yes/no question about it. The questions live here as small
//! [`Predicate`] types so they can be reused outside the stock validators.
//!
//! ```rust
//! use fieldcheck::predicate::{not_blank, Predicate};
//! use fieldcheck::Value;
//!
//! assert!(not_blank().check(&Some(&Value::from(" x "))));
//! assert!(!not_blank().check(&Some(&Value::from("\u{00a0}\t"))));
//! assert!(!not_blank().check(&None));
//! ```

use crate::Value;

/// A field lookup result: `None` when the field is absent.
pub type Field<'a> = Option<&'a Value>;

/// A composable predicate over values of type T.
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Whitespace stripped before the blank check.
///
/// `char::is_whitespace` follows the Unicode `White_Space` property, which no
/// longer lists the Mongolian vowel separator, the zero-width space or the
/// byte-order mark. Form input still carries them as padding.
pub fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{180e}' | '\u{200b}' | '\u{feff}')
}

/// Text form of a field, empty when absent.
fn text(field: Field<'_>) -> String {
    field.map(Value::to_string).unwrap_or_default()
}

/// Field has something other than whitespace in its text form.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotBlank;

impl Predicate<Field<'_>> for NotBlank {
    fn check(&self, value: &Field<'_>) -> bool {
        !text(*value).trim_matches(is_blank_char).is_empty()
    }
}

/// Create a predicate that rejects missing, null and whitespace-only values.
pub fn not_blank() -> NotBlank {
    NotBlank
}

/// Field's text form equals the text form of one of the options.
///
/// Comparing text forms means `Int(2)` matches the option `"2"`, and a missing
/// field matches the option `""`.
#[derive(Clone, Debug)]
pub struct IsIn<'o> {
    options: &'o [Value],
}

impl Predicate<Field<'_>> for IsIn<'_> {
    fn check(&self, value: &Field<'_>) -> bool {
        let needle = text(*value);
        self.options.iter().any(|option| option.to_string() == needle)
    }
}

/// Create a membership predicate over `options`.
///
/// ```rust
/// use fieldcheck::predicate::{is_in, Predicate};
/// use fieldcheck::Value;
///
/// let options = [Value::from("S"), Value::from("M")];
/// assert!(is_in(&options).check(&Some(&Value::from("M"))));
/// assert!(!is_in(&options).check(&Some(&Value::from("XL"))));
/// ```
pub fn is_in(options: &[Value]) -> IsIn<'_> {
    IsIn { options }
}

/// Field is a string or list with at least one element.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotEmpty;

impl Predicate<Field<'_>> for NotEmpty {
    fn check(&self, value: &Field<'_>) -> bool {
        matches!(value.and_then(Value::len), Some(len) if len > 0)
    }
}

/// Create a predicate that rejects missing, null, scalar and zero-length values.
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

/// Elements of a list field that are not among `options`.
///
/// Missing, null and non-list fields have no elements. Duplicates are kept and
/// the field's order is preserved. Membership is plain [`Value`] equality.
///
/// ```rust
/// use fieldcheck::predicate::difference;
/// use fieldcheck::Value;
///
/// let value = Value::from(vec![Value::from("a"), Value::Int(2)]);
/// let options = [Value::from("a"), Value::from("2")];
/// assert_eq!(difference(Some(&value), &options), vec![Value::Int(2)]);
/// ```
pub fn difference(field: Field<'_>, options: &[Value]) -> Vec<Value> {
    field
        .and_then(Value::as_list)
        .unwrap_or_default()
        .iter()
        .filter(|item| !options.contains(item))
        .cloned()
        .collect()
}

/// Field's elements all appear among the options.
#[derive(Clone, Debug)]
pub struct SubsetOf<'o> {
    options: &'o [Value],
}

impl Predicate<Field<'_>> for SubsetOf<'_> {
    fn check(&self, value: &Field<'_>) -> bool {
        difference(*value, self.options).is_empty()
    }
}

/// Create a subset predicate over `options`.
pub fn subset_of(options: &[Value]) -> SubsetOf<'_> {
    SubsetOf { options }
}
