//! Dynamic field values and the attribute mapping
//!
//! Submitted input is a flat, ordered mapping from field name to [`Value`].
//! The value type is closed: validators know exactly which shapes they can
//! meet and never inspect types at runtime beyond a `match`.

use indexmap::IndexMap;
use std::fmt;

/// An ordered mapping from field name to value.
///
/// Validators only ever borrow it; a successful validation hands back the very
/// same reference.
pub type Attrs = IndexMap<String, Value>;

/// A single submitted value.
///
/// # Examples
///
/// ```
/// use fieldcheck::Value;
///
/// assert_eq!(Value::from("red").to_string(), "red");
/// assert_eq!(Value::from(vec![Value::from("a"), Value::from(2)]).to_string(), "a,2");
/// assert_eq!(Value::Null.to_string(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// Explicitly empty value
    #[default]
    Null,
    /// Boolean flag
    Bool(bool),
    /// Integer
    Int(i64),
    /// Text
    Str(String),
    /// Ordered list of values, e.g. a multi-select
    List(Vec<Value>),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The string slice if this is [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The elements if this is [`Value::List`].
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Length of a string (in chars) or list; `None` for every other shape.
    ///
    /// ```
    /// use fieldcheck::Value;
    ///
    /// assert_eq!(Value::from("héllo").len(), Some(5));
    /// assert_eq!(Value::List(vec![]).len(), Some(0));
    /// assert_eq!(Value::Int(42).len(), None);
    /// ```
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Str(s) => Some(s.chars().count()),
            Value::List(items) => Some(items.len()),
            _ => None,
        }
    }
}

/// Text form of a value.
///
/// `Null` renders empty and lists join their elements with `,`. This is the
/// form membership checks and error messages work with.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

/// Build an [`Attrs`] mapping in insertion order.
///
/// ```
/// use fieldcheck::{attrs, Value};
///
/// let form = attrs! { "name" => "Ada", "tags" => vec!["a", "b"] };
/// assert_eq!(form["name"], Value::from("Ada"));
/// assert_eq!(form.get_index(1).map(|(k, _)| k.as_str()), Some("tags"));
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::Attrs::new()
    };
    ($($field:expr => $value:expr),+ $(,)?) => {{
        let mut attrs = $crate::Attrs::new();
        $(
            attrs.insert(::std::string::String::from($field), $crate::Value::from($value));
        )+
        attrs
    }};
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::Int),
            ".{0,12}".prop_map(Value::Str),
        ];
        leaf.prop_recursive(2, 16, 4, |inner| {
            prop::collection::vec(inner, 0..4).prop_map(Value::List)
        })
        .boxed()
    }
}
