//! Ordered per-field error lists
//!
//! [`FieldErrors`] is the failure payload of a [`Validation`](crate::Validation).
//! It maps a field name to the ordered list of problems found with that field.
//! Merging two collections appends lists for shared fields and adds new fields
//! after the existing ones, so the result reads in the order validators ran.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::{ErrorDetail, FieldErrors, Semigroup};
//!
//! let name = FieldErrors::single("name", ErrorDetail::blank("name"));
//! let tags = FieldErrors::single("tags", ErrorDetail::empty("tags"));
//! let again = FieldErrors::single("name", ErrorDetail::empty("name"));
//!
//! let all = name.combine(tags).combine(again);
//! assert_eq!(all.fields().collect::<Vec<_>>(), vec!["name", "tags"]);
//! assert_eq!(all.messages("name"), vec![
//!     "\"name\" must not be blank",
//!     "\"name\" must not be empty",
//! ]);
//! ```

use indexmap::IndexMap;
use std::fmt;
use std::ops::Index;

use crate::{ErrorDetail, Semigroup};

/// Field name → ordered error details, in first-seen field order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FieldErrors {
    errors: IndexMap<String, Vec<ErrorDetail>>,
}

impl FieldErrors {
    /// An empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// A collection holding one detail for one field.
    pub fn single(field: impl Into<String>, detail: ErrorDetail) -> Self {
        let mut errors = IndexMap::with_capacity(1);
        errors.insert(field.into(), vec![detail]);
        Self { errors }
    }

    /// Append a detail to a field's list, registering the field if unseen.
    pub fn push(&mut self, field: impl Into<String>, detail: ErrorDetail) {
        self.errors.entry(field.into()).or_default().push(detail);
    }

    /// Merge two collections without modifying either.
    ///
    /// Same as [`Semigroup::combine`] on clones.
    pub fn merge(a: &FieldErrors, b: &FieldErrors) -> FieldErrors {
        a.clone().combine(b.clone())
    }

    /// Errors recorded for `field`, or `None` if the field has none.
    pub fn get(&self, field: &str) -> Option<&[ErrorDetail]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    /// Whether any error was recorded for `field`.
    pub fn contains_field(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Rendered messages for `field`, empty if the field has none.
    pub fn messages(&self, field: &str) -> Vec<&str> {
        self.get(field)
            .map(|details| details.iter().map(ErrorDetail::message).collect())
            .unwrap_or_default()
    }

    /// Field names in first-seen order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    /// `(field, details)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ErrorDetail])> {
        self.errors
            .iter()
            .map(|(field, details)| (field.as_str(), details.as_slice()))
    }

    /// Number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when no field has errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of details across all fields.
    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }
}

impl Semigroup for FieldErrors {
    fn combine(mut self, other: Self) -> Self {
        for (field, details) in other.errors {
            self.errors.entry(field).or_default().extend(details);
        }
        self
    }
}

impl Index<&str> for FieldErrors {
    type Output = [ErrorDetail];

    /// # Panics
    ///
    /// Panics if `field` has no errors. Use [`FieldErrors::get`] otherwise.
    fn index(&self, field: &str) -> &Self::Output {
        &self.errors[field]
    }
}

impl<F: Into<String>> FromIterator<(F, ErrorDetail)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (F, ErrorDetail)>>(iter: I) -> Self {
        let mut errors = FieldErrors::new();
        for (field, detail) in iter {
            errors.push(field, detail);
        }
        errors
    }
}

impl IntoIterator for FieldErrors {
    type Item = (String, Vec<ErrorDetail>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<ErrorDetail>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

/// One line per message, in field then insertion order.
impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for details in self.errors.values() {
            for detail in details {
                if !first {
                    writeln!(f)?;
                }
                f.write_str(detail.message())?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}
