//! Owned JSON value snapshots.
//!
//! [`Value`] is the decoded form of the accumulated fragment buffer that gets
//! pushed through the node tree on every update. Objects preserve key
//! insertion order: the order keys arrive in the underlying JSON text is what
//! drives field-completion inference, so a sorted map would erase the one
//! signal the tree depends on.

/// An ordered JSON object: key/value pairs in arrival order.
pub type Map = Vec<(String, Value)>;
/// A JSON array.
pub type Array = Vec<Value>;

/// A decoded JSON value as seen at one point in the fragment stream.
///
/// # Examples
///
/// ```
/// use jsonweave::Value;
///
/// let v = Value::Object(vec![("key".to_string(), Value::String("value".into()))]);
/// assert_eq!(v.to_string(), r#"{"key":"value"}"#);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The JSON `null` literal.
    Null,
    /// A JSON boolean.
    Boolean(bool),
    /// A JSON number. Integers wider than an `f64` mantissa lose precision.
    Number(f64),
    /// A JSON string, possibly the best-effort prefix of a still-open literal.
    String(String),
    /// A JSON array.
    Array(Array),
    /// A JSON object, keys in arrival order.
    Object(Map),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl Value {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the string slice if the value is a JSON string.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonweave::Value;
    ///
    /// assert_eq!(Value::String("foo".into()).as_str(), Some("foo"));
    /// assert_eq!(Value::Null.as_str(), None);
    /// ```
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements if the value is a JSON array.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the ordered key/value pairs if the value is a JSON object.
    #[must_use]
    pub fn as_object(&self) -> Option<&[(String, Value)]> {
        match self {
            Self::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Looks up `key` in an object value.
    ///
    /// Returns `None` for non-objects and for absent keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonweave::Value;
    ///
    /// let v = Value::Object(vec![("name".to_string(), Value::from("ada"))]);
    /// assert_eq!(v.get("name"), Some(&Value::from("ada")));
    /// assert_eq!(v.get("missing"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Object(fields) => fields.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

/// Escapes a string for inclusion in a JSON string literal.
///
/// Quotes, backslashes, and control characters are replaced with their JSON
/// escape sequences; everything else passes through untouched.
fn write_escaped_string<W: core::fmt::Write>(src: &str, f: &mut W) -> core::fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_ascii_control() => {
                write!(f, "\\u{:04X}", c as u32)?;
            }
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => {
                f.write_str("\"")?;
                write_escaped_string(s, f)?;
                f.write_str("\"")
            }
            Value::Array(items) => {
                f.write_str("[")?;
                let mut first = true;
                for v in items {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
            Value::Object(fields) => {
                f.write_str("{")?;
                let mut first = true;
                for (k, v) in fields {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    f.write_str("\"")?;
                    write_escaped_string(k, f)?;
                    write!(f, "\":{v}")?;
                }
                f.write_str("}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn display_renders_compact_json() {
        let v = Value::Object(vec![
            ("name".to_string(), Value::from("line\nbreak")),
            ("tags".to_string(), Value::Array(vec![Value::from("a"), Value::Null])),
            ("n".to_string(), Value::Number(1.5)),
            ("ok".to_string(), Value::Boolean(true)),
        ]);
        assert_eq!(
            v.to_string(),
            r#"{"name":"line\nbreak","tags":["a",null],"n":1.5,"ok":true}"#
        );
    }

    #[test]
    fn object_lookup_respects_first_match() {
        let v = Value::Object(vec![
            ("k".to_string(), Value::from("first")),
            ("k".to_string(), Value::from("second")),
        ]);
        assert_eq!(v.get("k"), Some(&Value::from("first")));
    }
}
