//! Field validators
//!
//! Each validator reads one field from an [`Attrs`] mapping, applies one
//! predicate and returns either the whole mapping, untouched, or a
//! [`FieldErrors`] with a single entry for that field. Results for different
//! fields, or different rules on the same field, combine with
//! [`Validation::concat`].
//!
//! ```
//! use fieldcheck::{attrs, is_in, not_blank, subset_of, Value};
//!
//! let sizes = [Value::from("S"), Value::from("M"), Value::from("L")];
//! let form = attrs! { "name" => "", "size" => "XL", "extras" => vec!["S"] };
//!
//! let result = not_blank("name", &form)
//!     .concat(is_in(&sizes, "size", &form))
//!     .concat(subset_of(&sizes, "extras", &form));
//!
//! let errors = result.failure_value().unwrap();
//! assert_eq!(errors.messages("name"), vec![r#""name" must not be blank"#]);
//! assert_eq!(errors.messages("size"), vec![r#""size" must be one of "S", "M", or "L""#]);
//! assert!(errors.get("extras").is_none());
//! ```

use crate::predicate::{self, Predicate};
use crate::{Attrs, ErrorDetail, FieldErrors, Validation, Value};

fn fail<'a>(field: &str, detail: ErrorDetail) -> Validation<&'a Attrs> {
    #[cfg(feature = "tracing")]
    tracing::debug!(field, code = detail.code(), "field validation failed");
    Validation::failure(FieldErrors::single(field, detail))
}

/// The field must have non-whitespace content.
///
/// Whitespace covers every Unicode space plus zero-width padding characters.
/// Missing and null fields are blank; numbers and booleans never are.
///
/// # Examples
///
/// ```
/// use fieldcheck::{attrs, not_blank};
///
/// let form = attrs! { "a_field" => "\u{2003}\u{feff}" };
/// let errors = not_blank("a_field", &form).into_result().unwrap_err();
/// assert_eq!(errors["a_field"][0].code(), "blank");
/// ```
pub fn not_blank<'a>(field: &str, attrs: &'a Attrs) -> Validation<&'a Attrs> {
    if predicate::not_blank().check(&attrs.get(field)) {
        Validation::success(attrs)
    } else {
        fail(field, ErrorDetail::blank(field))
    }
}

/// The field's value must be one of `options`.
///
/// Values are compared by their text form, so the integer `2` matches the
/// option `"2"`.
///
/// # Examples
///
/// ```
/// use fieldcheck::{attrs, is_in, Value};
///
/// let colors = [Value::from("red"), Value::from("blue")];
/// let form = attrs! { "color" => "red" };
/// assert!(is_in(&colors, "color", &form).is_success());
/// ```
pub fn is_in<'a>(options: &[Value], field: &str, attrs: &'a Attrs) -> Validation<&'a Attrs> {
    if predicate::is_in(options).check(&attrs.get(field)) {
        Validation::success(attrs)
    } else {
        fail(field, ErrorDetail::not_in(field, options.to_vec()))
    }
}

/// The field must be a non-empty string or list.
///
/// # Examples
///
/// ```
/// use fieldcheck::{attrs, not_empty, Value};
///
/// let form = attrs! { "tags" => Value::Null };
/// assert!(not_empty("tags", &form).is_failure());
/// assert!(not_empty("missing", &form).is_failure());
/// ```
pub fn not_empty<'a>(field: &str, attrs: &'a Attrs) -> Validation<&'a Attrs> {
    if predicate::not_empty().check(&attrs.get(field)) {
        Validation::success(attrs)
    } else {
        fail(field, ErrorDetail::empty(field))
    }
}

/// Every element of the field's list must be one of `options`.
///
/// Missing, null and non-list fields pass. The reported `invalid` values keep
/// the field's order, duplicates included.
///
/// # Examples
///
/// ```
/// use fieldcheck::{attrs, subset_of, Value};
///
/// let options = [Value::from("a"), Value::from("b"), Value::from("c")];
/// let form = attrs! { "field" => vec![Value::from("a"), Value::Int(2), Value::from("not there")] };
///
/// let errors = subset_of(&options, "field", &form).into_result().unwrap_err();
/// assert_eq!(errors["field"][0].invalid(), Some(&[Value::Int(2), Value::from("not there")][..]));
/// assert_eq!(
///     errors["field"][0].message(),
///     r#""2" and "not there" are not valid options for "field" (valid options are "a", "b", or "c")"#
/// );
/// ```
pub fn subset_of<'a>(options: &[Value], field: &str, attrs: &'a Attrs) -> Validation<&'a Attrs> {
    let invalid = predicate::difference(attrs.get(field), options);
    if invalid.is_empty() {
        Validation::success(attrs)
    } else {
        fail(field, ErrorDetail::not_all_in(field, options.to_vec(), invalid))
    }
}
