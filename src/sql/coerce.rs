//! Value Coercion
//!
//! Maps raw row values to native scalars before binding. Every raw value is
//! first rendered as text, then matched against a fixed, ordered set of
//! literal patterns.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::types::Value;

static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("integer pattern compiles"));
static FLOAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+$").expect("float pattern compiles"));
static BOOLEAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(true|false)$").expect("boolean pattern compiles"));
static NULL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^null$").expect("null pattern compiles"));

/// A row value that can be rendered as literal text for coercion
pub trait RawValue {
    fn raw_text(&self) -> Cow<'_, str>;
}

impl RawValue for str {
    fn raw_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl RawValue for String {
    fn raw_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl RawValue for bool {
    fn raw_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(if *self { "true" } else { "false" })
    }
}

macro_rules! impl_raw_value_display {
    ($($t:ty),*) => {
        $(
            impl RawValue for $t {
                fn raw_text(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

impl_raw_value_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// `Debug` keeps the fractional part (`1.0`, not `1`)
impl RawValue for f32 {
    fn raw_text(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{:?}", self))
    }
}

impl RawValue for f64 {
    fn raw_text(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{:?}", self))
    }
}

impl<T: RawValue> RawValue for Option<T> {
    fn raw_text(&self) -> Cow<'_, str> {
        match self {
            Some(value) => value.raw_text(),
            None => Cow::Borrowed("null"),
        }
    }
}

impl<T: RawValue + ?Sized> RawValue for &T {
    fn raw_text(&self) -> Cow<'_, str> {
        (**self).raw_text()
    }
}

impl RawValue for serde_json::Value {
    fn raw_text(&self) -> Cow<'_, str> {
        match self {
            serde_json::Value::String(s) => Cow::Borrowed(s.as_str()),
            serde_json::Value::Null => Cow::Borrowed("null"),
            other => Cow::Owned(other.to_string()),
        }
    }
}

/// Coerce a raw value to its best-guess native type
///
/// Patterns are tried in order: integer, float, boolean, null. Anything else
/// is kept as text. Negative numbers and exponents are not recognized.
///
/// The boolean branch treats any non-empty literal as truthy, so both `true`
/// and `false` coerce to `Value::Bool(true)`.
///
/// # Example
/// ```
/// use mysql_table_creator::sql::coerce;
/// use mysql_table_creator::Value;
///
/// assert_eq!(coerce("42"), Value::Integer(42));
/// assert_eq!(coerce("false"), Value::Bool(true));
/// assert_eq!(coerce("hello"), Value::Text("hello".to_string()));
/// ```
pub fn coerce<T: RawValue + ?Sized>(value: &T) -> Value {
    let text = value.raw_text();
    if INTEGER.is_match(&text) {
        // Digits beyond the i64 range stay text
        if let Ok(i) = text.parse::<i64>() {
            debug!("Value {} converted to integer", text);
            return Value::Integer(i);
        }
    } else if FLOAT.is_match(&text) {
        if let Ok(x) = text.parse::<f64>() {
            debug!("Value {} converted to float", text);
            return Value::Float(x);
        }
    } else if BOOLEAN.is_match(&text) {
        debug!("Value {} converted to boolean", text);
        return Value::Bool(!text.is_empty());
    } else if NULL.is_match(&text) {
        debug!("Value {} converted to null", text);
        return Value::Null;
    }
    debug!("Value {} not converted", text);
    Value::Text(text.into_owned())
}
