//! # fieldcheck
//!
//! Validate a flat mapping of submitted fields and report **every** problem,
//! grouped by field, instead of stopping at the first one.
//!
//! ## Building blocks
//!
//! - [`Validation`]: `Success(value)` or `Failure(errors)`, combined with
//!   [`Validation::concat`], where failures accumulate and never short-circuit.
//! - [`FieldErrors`]: the failure payload, an ordered map from field name to
//!   the [`ErrorDetail`]s found for it.
//! - Validators ([`not_blank`], [`is_in`], [`not_empty`], [`subset_of`]): pure
//!   functions from a field name and an [`Attrs`] mapping to a `Validation`.
//! - [`RuleSet`]: the same validators declared once and applied to many inputs.
//!
//! ## Quick Example
//!
//! ```rust
//! use fieldcheck::{attrs, is_in, not_blank, not_empty, Value};
//!
//! let plans = [Value::from("free"), Value::from("pro"), Value::from("team")];
//! let form = attrs! { "email" => "  ", "plan" => "enterprise", "seats" => Value::Null };
//!
//! let result = not_blank("email", &form)
//!     .concat(is_in(&plans, "plan", &form))
//!     .concat(not_empty("seats", &form));
//!
//! match result.into_result() {
//!     Ok(attrs) => println!("valid: {:?}", attrs),
//!     Err(errors) => {
//!         assert_eq!(errors.messages("plan"), vec![
//!             r#""plan" must be one of "free", "pro", or "team""#,
//!         ]);
//!         assert_eq!(errors.len(), 3);
//!     }
//! }
//! ```
//!
//! ## Features
//!
//! - `tracing`: debug events for failed checks
//! - `serde`: (de)serialization of values, errors and rule sets
//! - `parallel`: [`RuleSet::validate_parallel`] on the rayon pool
//! - `proptest`: `Arbitrary` impls and form-input strategies in [`testing`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error_detail;
pub mod field_errors;
pub mod format;
pub mod predicate;
pub mod rules;
pub mod semigroup;
pub mod testing;
pub mod validation;
pub mod validators;
pub mod value;

// Re-exports
pub use error_detail::ErrorDetail;
pub use field_errors::FieldErrors;
pub use rules::{FieldRule, RuleSet};
pub use semigroup::Semigroup;
pub use validation::Validation;
pub use validators::{is_in, not_blank, not_empty, subset_of};
pub use value::{Attrs, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error_detail::ErrorDetail;
    pub use crate::field_errors::FieldErrors;
    pub use crate::rules::{FieldRule, RuleSet};
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::Validation;
    pub use crate::validators::{is_in, not_blank, not_empty, subset_of};
    pub use crate::value::{Attrs, Value};
}
