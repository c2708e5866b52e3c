//! Declarative rule sets
//!
//! A [`RuleSet`] names the checks a form needs once and runs them against any
//! number of submissions. Rules run in declaration order and every outcome is
//! concatenated, so the resulting [`FieldErrors`](crate::FieldErrors) lists
//! problems in the order the rules were declared.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::{attrs, RuleSet, Value};
//!
//! let rules = RuleSet::new()
//!     .not_blank("name")
//!     .is_in(vec![Value::from("S"), Value::from("M")], "size")
//!     .not_empty("toppings")
//!     .subset_of(vec![Value::from("ham"), Value::from("olive")], "toppings");
//!
//! let good = attrs! { "name" => "Ada", "size" => "M", "toppings" => vec!["olive"] };
//! assert!(rules.validate(&good).is_success());
//!
//! let bad = attrs! { "name" => " ", "size" => "M", "toppings" => vec!["kale"] };
//! let errors = rules.validate(&bad).into_result().unwrap_err();
//! assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["name", "toppings"]);
//! ```

use crate::{validators, Attrs, Validation, Value};

/// One check against one field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "rule", rename_all = "snake_case"))]
pub enum FieldRule {
    /// See [`validators::not_blank`]
    NotBlank {
        /// Field under test
        field: String,
    },
    /// See [`validators::is_in`]
    IsIn {
        /// Field under test
        field: String,
        /// Allowed values
        options: Vec<Value>,
    },
    /// See [`validators::not_empty`]
    NotEmpty {
        /// Field under test
        field: String,
    },
    /// See [`validators::subset_of`]
    SubsetOf {
        /// Field under test
        field: String,
        /// Allowed values
        options: Vec<Value>,
    },
}

impl FieldRule {
    /// The field this rule reads.
    pub fn field(&self) -> &str {
        match self {
            FieldRule::NotBlank { field }
            | FieldRule::IsIn { field, .. }
            | FieldRule::NotEmpty { field }
            | FieldRule::SubsetOf { field, .. } => field,
        }
    }

    /// Run the matching validator.
    pub fn apply<'a>(&self, attrs: &'a Attrs) -> Validation<&'a Attrs> {
        match self {
            FieldRule::NotBlank { field } => validators::not_blank(field, attrs),
            FieldRule::IsIn { field, options } => validators::is_in(options, field, attrs),
            FieldRule::NotEmpty { field } => validators::not_empty(field, attrs),
            FieldRule::SubsetOf { field, options } => {
                validators::subset_of(options, field, attrs)
            }
        }
    }
}

/// An ordered list of [`FieldRule`]s.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RuleSet {
    rules: Vec<FieldRule>,
}

impl RuleSet {
    /// An empty rule set; validates everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an arbitrary rule.
    pub fn rule(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append a [`FieldRule::NotBlank`].
    pub fn not_blank(self, field: impl Into<String>) -> Self {
        self.rule(FieldRule::NotBlank {
            field: field.into(),
        })
    }

    /// Append a [`FieldRule::IsIn`].
    pub fn is_in(self, options: Vec<Value>, field: impl Into<String>) -> Self {
        self.rule(FieldRule::IsIn {
            field: field.into(),
            options,
        })
    }

    /// Append a [`FieldRule::NotEmpty`].
    pub fn not_empty(self, field: impl Into<String>) -> Self {
        self.rule(FieldRule::NotEmpty {
            field: field.into(),
        })
    }

    /// Append a [`FieldRule::SubsetOf`].
    pub fn subset_of(self, options: Vec<Value>, field: impl Into<String>) -> Self {
        self.rule(FieldRule::SubsetOf {
            field: field.into(),
            options,
        })
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldRule> {
        self.rules.iter()
    }

    /// Run every rule in order and concatenate the outcomes.
    pub fn validate<'a>(&self, attrs: &'a Attrs) -> Validation<&'a Attrs> {
        let result = self
            .rules
            .iter()
            .fold(Validation::success(attrs), |acc, rule| {
                acc.concat(rule.apply(attrs))
            });
        #[cfg(feature = "tracing")]
        tracing::trace!(
            rules = self.rules.len(),
            errors = result.failure_value().map_or(0, |e| e.error_count()),
            "rule set applied"
        );
        result
    }

    /// Run the rules on the rayon pool.
    ///
    /// Output is identical to [`RuleSet::validate`]: outcomes are reduced in
    /// declaration order.
    #[cfg(feature = "parallel")]
    pub fn validate_parallel<'a>(&self, attrs: &'a Attrs) -> Validation<&'a Attrs> {
        use rayon::prelude::*;

        self.rules
            .par_iter()
            .map(|rule| rule.apply(attrs))
            .reduce_with(Validation::concat)
            .unwrap_or(Validation::Success(attrs))
    }
}

impl FromIterator<FieldRule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = FieldRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<'r> IntoIterator for &'r RuleSet {
    type Item = &'r FieldRule;
    type IntoIter = std::slice::Iter<'r, FieldRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
