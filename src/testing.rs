//! Testing utilities for code built on fieldcheck
//!
//! Assertion macros for [`Validation`](crate::Validation) outcomes and, with the
//! `proptest` feature, generators for form input.
//!
//! ```rust
//! use fieldcheck::{attrs, assert_field_codes, assert_success, not_blank, not_empty};
//!
//! let form = attrs! { "name" => "Ada" };
//! assert_success!(not_blank("name", &form));
//! assert_field_codes!(not_empty("tags", &form), "tags" => ["empty"]);
//! ```

/// Assert that a validation succeeds.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{Validation, assert_success};
///
/// let val = Validation::<_, Vec<String>>::success(42);
/// assert_success!(val);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validation fails.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{Validation, assert_failure};
///
/// let val = Validation::<i32, _>::failure(vec!["error".to_string()]);
/// assert_failure!(val);
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a validation fails with exactly the given errors.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{attrs, assert_validation_errors, not_blank, ErrorDetail, FieldErrors};
///
/// let form = attrs! {};
/// assert_validation_errors!(
///     not_blank("name", &form),
///     FieldErrors::single("name", ErrorDetail::blank("name"))
/// );
/// ```
#[macro_export]
macro_rules! assert_validation_errors {
    ($validation:expr, $expected:expr) => {
        match $validation {
            $crate::Validation::Failure(errors) => {
                assert_eq!(errors, $expected);
            }
            $crate::Validation::Success(v) => {
                panic!(
                    "Expected Failure with errors {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

/// Assert the error codes recorded per field, in order.
///
/// Only the listed fields are checked. A listed field with no errors compares
/// as an empty list.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{attrs, assert_field_codes, not_blank, not_empty};
///
/// let form = attrs! { "tags" => "" };
/// assert_field_codes!(
///     not_blank("tags", &form).concat(not_empty("tags", &form)),
///     "tags" => ["blank", "empty"],
///     "name" => [],
/// );
/// ```
#[macro_export]
macro_rules! assert_field_codes {
    ($validation:expr, $($field:expr => [$($code:expr),* $(,)?]),+ $(,)?) => {
        match $validation {
            $crate::Validation::Failure(errors) => {
                $(
                    let actual: ::std::vec::Vec<&str> = $crate::FieldErrors::get(&errors, $field)
                        .map(|details| details.iter().map($crate::ErrorDetail::code).collect())
                        .unwrap_or_default();
                    let expected: ::std::vec::Vec<&str> = ::std::vec![$($code),*];
                    assert_eq!(actual, expected, "error codes for field {:?}", $field);
                )+
            }
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

#[cfg(feature = "proptest")]
pub use self::strategies::*;

#[cfg(feature = "proptest")]
mod strategies {
    use proptest::prelude::*;

    use crate::{Attrs, Validation, Value};

    /// Strings made only of characters the blank check strips.
    pub fn blank_string() -> impl Strategy<Value = String> {
        let spaces: Vec<char> = " \u{0c}\n\r\t\u{0b}\u{a0}\u{1680}\u{180e}\u{2000}\u{2001}\u{2002}\u{2003}\u{2004}\u{2005}\u{2006}\u{2007}\u{2008}\u{2009}\u{200a}\u{2028}\u{2029}\u{202f}\u{205f}\u{3000}\u{feff}"
            .chars()
            .collect();
        prop::collection::vec(prop::sample::select(spaces), 0..16)
            .prop_map(|chars| chars.into_iter().collect())
    }

    /// Strings with at least one character the blank check keeps.
    pub fn non_blank_string() -> impl Strategy<Value = String> {
        (blank_string(), "[a-zA-Z0-9!?.]{1,8}", blank_string())
            .prop_map(|(lead, body, trail)| format!("{}{}{}", lead, body, trail))
    }

    /// Small mappings of lowercase field names to arbitrary values.
    pub fn attrs() -> impl Strategy<Value = Attrs> {
        prop::collection::vec(("[a-z_]{1,6}", any::<Value>()), 0..6)
            .prop_map(|pairs| pairs.into_iter().collect())
    }

    impl<T, E> Arbitrary for Validation<T, E>
    where
        T: Arbitrary + 'static,
        E: Arbitrary + 'static,
    {
        type Parameters = (T::Parameters, E::Parameters);
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            let (t_params, e_params) = args;
            prop_oneof![
                any_with::<T>(t_params).prop_map(Validation::success),
                any_with::<E>(e_params).prop_map(Validation::failure),
            ]
            .boxed()
        }
    }
}
