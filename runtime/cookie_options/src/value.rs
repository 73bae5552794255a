use std::fmt;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// The value of a single cookie option.
///
/// An option that was never set is represented as `None` by the APIs that
/// return a [`CookieOptionValue`], there is no dedicated "undefined" variant.
pub enum CookieOptionValue {
    /// A boolean flag, e.g. `httpOnly`.
    Boolean(bool),
    /// An integer, e.g. `maxAge`.
    Integer(i64),
    /// A non-integral number.
    Float(f64),
    /// A string, e.g. `sameSite` or `path`.
    String(String),
}

impl CookieOptionValue {
    /// The name of the value's type, as reported in error messages.
    pub fn kind(&self) -> ValueKind {
        match self {
            CookieOptionValue::Boolean(_) => ValueKind::Boolean,
            CookieOptionValue::Integer(_) => ValueKind::Integer,
            CookieOptionValue::Float(_) => ValueKind::Float,
            CookieOptionValue::String(_) => ValueKind::String,
        }
    }

    /// Returns the boolean, if this is a [`CookieOptionValue::Boolean`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CookieOptionValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer, if this is a [`CookieOptionValue::Integer`].
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CookieOptionValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the string, if this is a [`CookieOptionValue::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CookieOptionValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for CookieOptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CookieOptionValue::Boolean(b) => write!(f, "{b}"),
            CookieOptionValue::Integer(i) => write!(f, "{i}"),
            CookieOptionValue::Float(n) => write!(f, "{n}"),
            CookieOptionValue::String(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The type of a [`CookieOptionValue`].
pub enum ValueKind {
    /// `true` or `false`.
    Boolean,
    /// A whole number.
    Integer,
    /// A number with a fractional part.
    Float,
    /// A string.
    String,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ValueKind::Boolean => "a boolean",
            ValueKind::Integer => "an integer",
            ValueKind::Float => "a number",
            ValueKind::String => "a string",
        };
        f.write_str(s)
    }
}

impl From<bool> for CookieOptionValue {
    fn from(value: bool) -> Self {
        CookieOptionValue::Boolean(value)
    }
}

impl From<i64> for CookieOptionValue {
    fn from(value: i64) -> Self {
        CookieOptionValue::Integer(value)
    }
}

impl From<i32> for CookieOptionValue {
    fn from(value: i32) -> Self {
        CookieOptionValue::Integer(value.into())
    }
}

impl From<f64> for CookieOptionValue {
    fn from(value: f64) -> Self {
        CookieOptionValue::Float(value)
    }
}

impl From<String> for CookieOptionValue {
    fn from(value: String) -> Self {
        CookieOptionValue::String(value)
    }
}

impl From<&str> for CookieOptionValue {
    fn from(value: &str) -> Self {
        CookieOptionValue::String(value.to_owned())
    }
}
