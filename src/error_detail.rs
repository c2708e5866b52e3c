//! Structured descriptions of a single field problem
//!
//! Each variant corresponds to one machine-readable code and carries exactly
//! the context that code needs. With the `serde` feature enabled the detail
//! serializes to the flat shape consumers expect:
//!
//! ```text
//! {"code": "not_in", "message": "...", "options": ["a", "b"]}
//! ```

use crate::format::{list, quote, Conjunction};
use crate::Value;

/// One problem found with one field.
///
/// # Examples
///
/// ```
/// use fieldcheck::ErrorDetail;
///
/// let detail = ErrorDetail::blank("name");
/// assert_eq!(detail.code(), "blank");
/// assert_eq!(detail.message(), "\"name\" must not be blank");
/// assert!(detail.options().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "code", rename_all = "snake_case"))]
pub enum ErrorDetail {
    /// The value is missing or only whitespace
    Blank {
        /// Rendered message
        message: String,
    },
    /// The value is not one of the allowed options
    NotIn {
        /// Allowed values, in the order given to the validator
        options: Vec<Value>,
        /// Rendered message
        message: String,
    },
    /// The value is missing, null, or has zero length
    Empty {
        /// Rendered message
        message: String,
    },
    /// Some elements of a list value are not allowed options
    NotAllIn {
        /// Allowed values, in the order given to the validator
        options: Vec<Value>,
        /// Offending elements, in the order they appear in the value
        invalid: Vec<Value>,
        /// Rendered message
        message: String,
    },
}

impl ErrorDetail {
    /// `"<field>" must not be blank`
    pub fn blank(field: &str) -> Self {
        ErrorDetail::Blank {
            message: format!("{} must not be blank", quote(field)),
        }
    }

    /// `"<field>" must be one of <options>`
    ///
    /// ```
    /// use fieldcheck::{ErrorDetail, Value};
    ///
    /// let detail = ErrorDetail::not_in("size", vec![Value::from("S"), Value::from("M")]);
    /// assert_eq!(detail.message(), r#""size" must be one of "S" or "M""#);
    /// ```
    pub fn not_in(field: &str, options: Vec<Value>) -> Self {
        let message = format!(
            "{} must be one of {}",
            quote(field),
            list(Conjunction::Or, &options)
        );
        ErrorDetail::NotIn { options, message }
    }

    /// `"<field>" must not be empty`
    pub fn empty(field: &str) -> Self {
        ErrorDetail::Empty {
            message: format!("{} must not be empty", quote(field)),
        }
    }

    /// `<invalid> are not valid options for "<field>" (valid options are <options>)`
    pub fn not_all_in(field: &str, options: Vec<Value>, invalid: Vec<Value>) -> Self {
        let message = format!(
            "{} are not valid options for {} (valid options are {})",
            list(Conjunction::And, &invalid),
            quote(field),
            list(Conjunction::Or, &options)
        );
        ErrorDetail::NotAllIn {
            options,
            invalid,
            message,
        }
    }

    /// Machine-readable tag.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorDetail::Blank { .. } => "blank",
            ErrorDetail::NotIn { .. } => "not_in",
            ErrorDetail::Empty { .. } => "empty",
            ErrorDetail::NotAllIn { .. } => "not_all_in",
        }
    }

    /// Human-readable description.
    pub fn message(&self) -> &str {
        match self {
            ErrorDetail::Blank { message }
            | ErrorDetail::NotIn { message, .. }
            | ErrorDetail::Empty { message }
            | ErrorDetail::NotAllIn { message, .. } => message,
        }
    }

    /// Allowed values, for `not_in` and `not_all_in`.
    pub fn options(&self) -> Option<&[Value]> {
        match self {
            ErrorDetail::NotIn { options, .. } | ErrorDetail::NotAllIn { options, .. } => {
                Some(options)
            }
            _ => None,
        }
    }

    /// Offending values, for `not_all_in`.
    pub fn invalid(&self) -> Option<&[Value]> {
        match self {
            ErrorDetail::NotAllIn { invalid, .. } => Some(invalid),
            _ => None,
        }
    }
}

impl std::fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(items: &[&str]) -> Vec<Value> {
        items.iter().map(|s| Value::from(*s)).collect()
    }

    #[test]
    fn test_blank_message() {
        assert_eq!(
            ErrorDetail::blank("a_field").message(),
            r#""a_field" must not be blank"#
        );
    }

    #[test]
    fn test_empty_message() {
        let detail = ErrorDetail::empty("not there");
        assert_eq!(detail.code(), "empty");
        assert_eq!(detail.message(), r#""not there" must not be empty"#);
    }

    #[test]
    fn test_not_in_message() {
        let detail = ErrorDetail::not_in(
            "a_field",
            values(&["a value", "a good option", "some other thing"]),
        );
        assert_eq!(detail.code(), "not_in");
        assert_eq!(
            detail.message(),
            r#""a_field" must be one of "a value", "a good option", or "some other thing""#
        );
        assert_eq!(detail.options().map(<[Value]>::len), Some(3));
        assert!(detail.invalid().is_none());
    }

    #[test]
    fn test_not_all_in_message() {
        let detail = ErrorDetail::not_all_in(
            "field",
            values(&["a", "b", "c"]),
            vec![Value::Int(2), Value::from("not there")],
        );
        assert_eq!(detail.code(), "not_all_in");
        assert_eq!(
            detail.message(),
            r#""2" and "not there" are not valid options for "field" (valid options are "a", "b", or "c")"#
        );
        assert_eq!(
            detail.invalid(),
            Some(&[Value::Int(2), Value::from("not there")][..])
        );
    }

    #[test]
    fn test_display_is_message() {
        let detail = ErrorDetail::blank("x");
        assert_eq!(detail.to_string(), detail.message());
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;
        use serde_json::json;

        #[test]
        fn test_serialize_flat_shape() {
            let detail = ErrorDetail::not_all_in("f", values(&["a"]), values(&["z"]));
            let json = serde_json::to_value(&detail).unwrap();
            assert_eq!(
                json,
                json!({
                    "code": "not_all_in",
                    "options": ["a"],
                    "invalid": ["z"],
                    "message": r#""z" are not valid options for "f" (valid options are "a")"#,
                })
            );
        }

        #[test]
        fn test_deserialize_blank() {
            let detail: ErrorDetail =
                serde_json::from_str(r#"{"code":"blank","message":"\"x\" must not be blank"}"#)
                    .unwrap();
            assert_eq!(detail, ErrorDetail::blank("x"));
        }
    }
}
