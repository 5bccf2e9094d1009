//! Addressing values inside a [`Value`] tree.

use std::{fmt, ops};

use crate::Value;

/// One step into a container: a field of an object or a position in an array.
///
/// `&str`, `&String` and `usize` convert into a `Key`, so they can be passed
/// straight to [`Value::get`] or used inside square brackets.
///
/// ```
/// # use json_cursor::{Key, Value};
/// let data = json_cursor::parse(r#"{ "inner": [1, 2, 3] }"#).unwrap();
///
/// assert_eq!(data["inner"][0], Value::Int(1));
/// assert_eq!(data.get(Key::Field("inner")), data.get("inner"));
/// assert_eq!(Key::from(2).to_string(), "[2]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'k> {
    Field(&'k str),
    Position(usize),
}

impl<'k> From<&'k str> for Key<'k> {
    fn from(field: &'k str) -> Self {
        Self::Field(field)
    }
}

impl<'k> From<&'k String> for Key<'k> {
    fn from(field: &'k String) -> Self {
        Self::Field(field)
    }
}

impl From<usize> for Key<'_> {
    fn from(position: usize) -> Self {
        Self::Position(position)
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(field) => write!(f, "{field:?}"),
            Self::Position(position) => write!(f, "[{position}]"),
        }
    }
}

impl Key<'_> {
    pub(crate) fn find(self, value: &Value) -> Option<&Value> {
        match (self, value) {
            (Self::Field(field), Value::Object(map)) => map.get(field),
            (Self::Position(position), Value::Array(items)) => items.get(position),
            _ => None,
        }
    }

    pub(crate) fn find_mut(self, value: &mut Value) -> Option<&mut Value> {
        match (self, value) {
            (Self::Field(field), Value::Object(map)) => map.get_mut(field),
            (Self::Position(position), Value::Array(items)) => items.get_mut(position),
            _ => None,
        }
    }
}

/// Splits an RFC 6901 pointer into its unescaped reference tokens.
///
/// Returns `None` for a non-empty pointer that does not start with `/`.
pub(crate) fn pointer_tokens(pointer: &str) -> Option<impl Iterator<Item = String> + '_> {
    let rest = match pointer.strip_prefix('/') {
        Some(rest) => Some(rest),
        None if pointer.is_empty() => None,
        None => return None,
    };
    let tokens = rest.into_iter().flat_map(|rest| rest.split('/')).map(|token| {
        if token.contains('~') {
            token.replace("~1", "/").replace("~0", "~")
        } else {
            token.to_owned()
        }
    });
    Some(tokens)
}

/// Array positions in a pointer are plain decimal with no leading zeros.
pub(crate) fn pointer_position(token: &str) -> Option<usize> {
    let digits_only = !token.is_empty() && token.bytes().all(|byte| byte.is_ascii_digit());
    if !digits_only || (token.len() > 1 && token.starts_with('0')) {
        return None;
    }
    token.parse().ok()
}

impl<'k, K> ops::Index<K> for Value
where
    K: Into<Key<'k>>,
{
    type Output = Self;

    /// Reads `value["field"]` or `value[3]`. A missing entry, or a key of the
    /// wrong kind for the container, reads as `Value::Null`.
    ///
    /// ```
    /// # use json_cursor::Value;
    /// let data = json_cursor::parse(r#"{ "x": { "y": ["z", "zz"] } }"#).unwrap();
    ///
    /// assert_eq!(data["x"]["y"][1], Value::String("zz".into()));
    /// assert_eq!(data["a"]["b"], Value::Null);
    /// assert_eq!(data[0], Value::Null);
    /// ```
    fn index(&self, key: K) -> &Self {
        static NULL: Value = Value::Null;
        key.into().find(self).unwrap_or(&NULL)
    }
}

impl<'k, K> ops::IndexMut<K> for Value
where
    K: Into<Key<'k>>,
{
    /// Writes through `value["field"]` or `value[3]`.
    ///
    /// A field missing from an object is created as `Null`. Array positions
    /// must already exist. Any other combination panics.
    ///
    /// ```
    /// # use json_cursor::Value;
    /// let mut data = json_cursor::parse(r#"{ "x": 0, "y": [false] }"#).unwrap();
    ///
    /// data["x"] = Value::Int(1);
    /// data["y"][0] = Value::Bool(true);
    /// data["z"] = Value::Float(1.5);
    ///
    /// assert_eq!(data["y"], Value::Array(vec![Value::Bool(true)]));
    /// assert_eq!(data["z"].as_f64(), Some(1.5));
    /// ```
    fn index_mut(&mut self, key: K) -> &mut Self {
        let key = key.into();
        let found = self.value_type();
        match (key, self) {
            (Key::Field(field), Value::Object(map)) => map.entry(field.to_owned()).or_default(),
            (Key::Position(position), Value::Array(items)) => {
                let len = items.len();
                match items.get_mut(position) {
                    Some(item) => item,
                    None => {
                        panic!("position {position} is out of range for a JSON array of {len}")
                    }
                }
            }
            _ => panic!("cannot write {key} into a JSON {found}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_lookup() {
        let value = crate::parse(r#"[{"k": [true]}]"#).unwrap();
        let field = String::from("k");

        assert_eq!(value[0]["k"][0], Value::Bool(true));
        assert_eq!(value[0][&field][0], Value::Bool(true));
        assert_eq!(value.get(Key::Position(0)), value.get(0));
        assert_eq!(value[1], Value::Null);
        assert_eq!(value["k"], Value::Null);
        assert_eq!(value[0].get(0), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Key::Field("a b").to_string(), "\"a b\"");
        assert_eq!(Key::Position(7).to_string(), "[7]");
    }

    #[test]
    fn test_write_through_index() {
        let mut value = crate::parse(r#"{"list": [0, 0]}"#).unwrap();
        value["list"][1] = Value::Int(5);
        value["new"] = Value::Bool(true);

        assert_eq!(value["list"], Value::Array(vec![Value::Int(0), Value::Int(5)]));
        assert_eq!(value["new"], Value::Bool(true));
    }

    #[test]
    #[should_panic(expected = "position 2 is out of range for a JSON array of 2")]
    fn test_write_past_end() {
        let mut value = crate::parse("[1, 2]").unwrap();
        value[2] = Value::Null;
    }

    #[test]
    #[should_panic(expected = "cannot write \"k\" into a JSON null")]
    fn test_write_into_null() {
        let mut value = Value::Null;
        value["k"] = Value::Int(1);
    }

    #[test]
    #[should_panic(expected = "cannot write [0] into a JSON object")]
    fn test_write_position_into_object() {
        let mut value = crate::parse("{}").unwrap();
        value[0] = Value::Int(1);
    }

    #[test]
    fn test_pointer_tokens() {
        let tokens = |pointer: &'static str| {
            pointer_tokens(pointer).map(|tokens| tokens.collect::<Vec<_>>())
        };

        assert_eq!(tokens(""), Some(vec![]));
        assert_eq!(tokens("/"), Some(vec![String::new()]));
        assert_eq!(
            tokens("/a~1b/~0k/0"),
            Some(vec!["a/b".to_owned(), "~k".to_owned(), "0".to_owned()])
        );
        assert_eq!(tokens("a/b"), None);
    }

    #[test]
    fn test_pointer_position() {
        assert_eq!(pointer_position("0"), Some(0));
        assert_eq!(pointer_position("12"), Some(12));
        assert_eq!(pointer_position("01"), None);
        assert_eq!(pointer_position("+1"), None);
        assert_eq!(pointer_position(""), None);
        assert_eq!(pointer_position("-"), None);
    }
}
