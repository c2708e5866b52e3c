//! Validation type for accumulating errors
//!
//! [`Validation`] is like `Result`, but combining two of them never throws
//! information away: when both sides failed, their errors are merged through
//! [`Semigroup::combine`]. The default error payload is
//! [`FieldErrors`](crate::FieldErrors), so merged failures keep one ordered
//! list per field.
//!
//! # Examples
//!
//! ## Concatenating validator outcomes
//!
//! ```
//! use fieldcheck::{attrs, not_blank, not_empty};
//!
//! let form = attrs! { "name" => "  ", "tags" => Vec::<&str>::new() };
//! let result = not_blank("name", &form).concat(not_empty("tags", &form));
//!
//! let errors = result.failure_value().unwrap();
//! assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["name", "tags"]);
//! ```
//!
//! ## Generic error payloads
//!
//! ```
//! use fieldcheck::Validation;
//!
//! let v1 = Validation::<i32, _>::failure(vec!["error1"]);
//! let v2 = Validation::<i32, _>::failure(vec!["error2"]);
//! assert_eq!(v1.concat(v2), Validation::Failure(vec!["error1", "error2"]));
//! ```

use crate::{FieldErrors, Semigroup};

/// A validation that either succeeds with a value or fails with accumulated errors
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error value, [`FieldErrors`] unless stated otherwise
///
/// # Examples
///
/// ```
/// use fieldcheck::Validation;
///
/// let v = Validation::<_, Vec<&str>>::success(42);
/// assert_eq!(v.into_result(), Ok(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Validation<T, E = FieldErrors> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Create a validation from a Result
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::Validation;
    ///
    /// let v = Validation::from_result(Err::<i32, _>("error".to_string()));
    /// assert_eq!(v, Validation::Failure("error".to_string()));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Convert this validation to a Result
    ///
    /// Lets callers leave the accumulating world with `?` once every check ran.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::{attrs, not_blank, FieldErrors};
    ///
    /// fn register(name: &str) -> Result<(), FieldErrors> {
    ///     let form = attrs! { "name" => name };
    ///     not_blank("name", &form).into_result()?;
    ///     Ok(())
    /// }
    ///
    /// assert!(register("Ada").is_ok());
    /// assert!(register("").is_err());
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// The success value, if any
    #[inline]
    pub fn success_value(&self) -> Option<&T> {
        match self {
            Validation::Success(value) => Some(value),
            Validation::Failure(_) => None,
        }
    }

    /// The accumulated errors, if any
    #[inline]
    pub fn failure_value(&self) -> Option<&E> {
        match self {
            Validation::Success(_) => None,
            Validation::Failure(error) => Some(error),
        }
    }

    /// Borrow both sides
    #[inline]
    pub fn as_ref(&self) -> Validation<&T, &E> {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the success value if present
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::Validation;
    ///
    /// let v = Validation::<_, String>::success(5);
    /// assert_eq!(v.map(|x| x * 2), Validation::Success(10));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the error value if present
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::Validation;
    ///
    /// let v = Validation::<i32, _>::failure(vec!["error"]);
    /// assert_eq!(v.map_err(|errors| errors.len()), Validation::Failure(1));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }

    /// Chain a dependent validation
    ///
    /// The function only runs on success, so this short-circuits. Use
    /// [`concat`](Validation::concat) for independent checks.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine two outcomes produced against the same input
    ///
    /// | self    | other   | result                         |
    /// |---------|---------|--------------------------------|
    /// | Success | Success | `other`'s value                |
    /// | Success | Failure | `other`'s errors               |
    /// | Failure | Success | `self`'s errors                |
    /// | Failure | Failure | `self.combine(other)` errors   |
    ///
    /// Failure absorbs success, and the operation is associative whenever `E`
    /// is a lawful [`Semigroup`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::Validation;
    ///
    /// let a = Validation::<_, Vec<&str>>::success(1);
    /// let b = Validation::<_, Vec<&str>>::success(2);
    /// assert_eq!(a.concat(b), Validation::Success(2));
    ///
    /// let a = Validation::<i32, _>::failure(vec!["a"]);
    /// let b = Validation::success(2);
    /// assert_eq!(a.concat(b), Validation::Failure(vec!["a"]));
    /// ```
    pub fn concat(self, other: Validation<T, E>) -> Validation<T, E> {
        match (self, other) {
            (Validation::Success(_), Validation::Success(b)) => Validation::Success(b),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), Validation::Success(_)) => Validation::Failure(e),
            (Validation::Success(_), Validation::Failure(e)) => Validation::Failure(e),
        }
    }

    /// Left fold of [`concat`](Validation::concat) over every outcome
    ///
    /// Returns `None` for an empty iterator, since there is no value to succeed
    /// with.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::Validation;
    ///
    /// let all = Validation::concat_all(vec![
    ///     Validation::<i32, _>::failure(vec!["a"]),
    ///     Validation::success(1),
    ///     Validation::failure(vec!["b"]),
    /// ]);
    /// assert_eq!(all, Some(Validation::Failure(vec!["a", "b"])));
    /// ```
    pub fn concat_all<I>(validations: I) -> Option<Validation<T, E>>
    where
        I: IntoIterator<Item = Validation<T, E>>,
    {
        validations.into_iter().reduce(Validation::concat)
    }

    /// Combine two validations, pairing their values on success
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::Validation;
    ///
    /// let v1 = Validation::<_, Vec<&str>>::success(1);
    /// let v2 = Validation::<_, Vec<&str>>::success("x");
    /// assert_eq!(v1.and(v2), Validation::Success((1, "x")));
    /// ```
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) => Validation::Failure(e),
            (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }
}

impl<T, E: Semigroup> Semigroup for Validation<T, E> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self.concat(other)
    }
}

impl<T, E> From<Result<T, E>> for Validation<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Validation::from_result(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorDetail;
    use proptest::prelude::*;

    fn failing(field: &str) -> Validation<i32> {
        Validation::failure(FieldErrors::single(field, ErrorDetail::blank(field)))
    }

    #[test]
    fn test_success() {
        let v = Validation::<_, Vec<&str>>::success(42);
        assert!(v.is_success());
        assert!(!v.is_failure());
        assert_eq!(v.success_value(), Some(&42));
        assert_eq!(v.failure_value(), None);
    }

    #[test]
    fn test_failure() {
        let v = Validation::<i32, _>::failure(vec!["error"]);
        assert!(v.is_failure());
        assert!(!v.is_success());
        assert_eq!(v.failure_value(), Some(&vec!["error"]));
        assert_eq!(v.success_value(), None);
    }

    #[test]
    fn test_from_result_ok() {
        let v: Validation<_, Vec<&str>> = Ok::<_, Vec<&str>>(42).into();
        assert_eq!(v, Validation::Success(42));
    }

    #[test]
    fn test_into_result_failure() {
        let v = Validation::<i32, _>::failure(vec!["error"]);
        assert_eq!(v.into_result(), Err(vec!["error"]));
    }

    #[test]
    fn test_as_ref() {
        let v = Validation::<_, Vec<&str>>::success(String::from("x"));
        assert_eq!(v.as_ref(), Validation::Success(&String::from("x")));
    }

    #[test]
    fn test_map_on_failure() {
        let v = Validation::<i32, _>::failure(vec!["error"]);
        assert_eq!(v.map(|x| x * 2), Validation::Failure(vec!["error"]));
    }

    #[test]
    fn test_map_err_on_success() {
        let v = Validation::<_, Vec<&str>>::success(42);
        assert_eq!(v.map_err(|errors| errors.len()), Validation::Success(42));
    }

    #[test]
    fn test_and_then_failure_skips() {
        let v = Validation::<i32, _>::failure(vec!["error"]);
        let result = v.and_then(|x| Validation::success(x * 2));
        assert_eq!(result, Validation::Failure(vec!["error"]));
    }

    #[test]
    fn test_concat_success_keeps_second() {
        let a = Validation::<_, FieldErrors>::success(1);
        let b = Validation::success(2);
        assert_eq!(a.concat(b), Validation::Success(2));
    }

    #[test]
    fn test_concat_success_then_failure() {
        let a = Validation::success(1);
        assert_eq!(a.concat(failing("x")), failing("x"));
    }

    #[test]
    fn test_concat_failure_then_success() {
        assert_eq!(failing("x").concat(Validation::success(1)), failing("x"));
    }

    #[test]
    fn test_concat_both_failures_merge() {
        let result = failing("x").concat(failing("y")).concat(failing("x"));
        let errors = result.failure_value().unwrap();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["x", "y"]);
        assert_eq!(errors["x"].len(), 2);
        assert_eq!(errors["y"].len(), 1);
    }

    #[test]
    fn test_concat_all_empty() {
        let none: Vec<Validation<i32>> = vec![];
        assert_eq!(Validation::concat_all(none), None);
    }

    #[test]
    fn test_and_both_failure() {
        let v1 = Validation::<i32, _>::failure(vec!["error1"]);
        let v2 = Validation::<i32, _>::failure(vec!["error2"]);
        assert_eq!(v1.and(v2), Validation::Failure(vec!["error1", "error2"]));
    }

    #[test]
    fn test_and_second_failure() {
        let v1 = Validation::<_, Vec<&str>>::success(1);
        let v2 = Validation::<i32, _>::failure(vec!["error"]);
        assert_eq!(v1.and(v2), Validation::Failure(vec!["error"]));
    }

    #[test]
    fn test_semigroup_delegates_to_concat() {
        let combined = failing("a").combine(failing("b"));
        assert_eq!(combined, failing("a").concat(failing("b")));
    }

    fn arb_validation() -> impl Strategy<Value = Validation<i32, Vec<u8>>> {
        prop_oneof![
            any::<i32>().prop_map(Validation::success),
            prop::collection::vec(any::<u8>(), 1..4).prop_map(Validation::failure),
        ]
    }

    proptest! {
        #[test]
        fn prop_concat_associative(
            a in arb_validation(),
            b in arb_validation(),
            c in arb_validation(),
        ) {
            let left = a.clone().concat(b.clone()).concat(c.clone());
            let right = a.concat(b.concat(c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn prop_success_and_failure_complementary(v in arb_validation()) {
            prop_assert_ne!(v.is_success(), v.is_failure());
        }

        #[test]
        fn prop_failure_absorbs(v in arb_validation(), errs in prop::collection::vec(any::<u8>(), 1..4)) {
            let failure = Validation::<i32, _>::failure(errs);
            prop_assert!(v.clone().concat(failure.clone()).is_failure());
            prop_assert!(failure.concat(v).is_failure());
        }
    }
}
