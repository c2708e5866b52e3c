//! Semigroup trait for associative combination
//!
//! Error accumulation rests on one operation: take two error payloads produced
//! against the same input and combine them without losing either side. That
//! operation must be associative so that the grouping of `concat` calls never
//! changes the final error list:
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use fieldcheck::Semigroup;
//!
//! let v1 = vec!["too short"];
//! let v2 = vec!["missing digit"];
//! assert_eq!(v1.combine(v2), vec!["too short", "missing digit"]);
//! ```
//!
//! [`FieldErrors`](crate::FieldErrors) implements this trait by concatenating
//! the per-field lists.

/// A type that supports an associative binary operation
///
/// # Laws
///
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// `combine` takes both sides by value. Clone first if the originals are still
/// needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::Semigroup;
    ///
    /// let s = "must not ".to_string().combine("be blank".to_string());
    /// assert_eq!(s, "must not be blank");
    /// ```
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}
