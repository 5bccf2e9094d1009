#[cfg(feature = "serde")]
mod serde;

use std::{collections::HashMap, mem, str::FromStr};

use crate::{
    deserialize,
    error::{ParseError, Result},
    key::{self, Key},
};

/// Represents any value a JSON document can hold.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Object(HashMap<String, Value>),
}

impl FromStr for Value {
    type Err = ParseError;

    /// Parse a [`Value`] from a JSON string. Same as [`crate::parse`].
    ///
    /// # Example
    ///
    /// ```
    /// # use json_cursor::Value;
    /// # use std::str::FromStr;
    /// #
    /// let data = Value::from_str("[1.5, true, null]").unwrap();
    /// assert_eq!(data, Value::Array(vec![Value::Float(1.5), Value::Bool(true), Value::Null]))
    /// ```
    ///
    /// # Errors
    ///
    /// This function fails if the first value in the string is not valid JSON.
    fn from_str(string: &str) -> Result<Self> {
        deserialize::parse_document(string)
    }
}

impl Value {
    /// Parse a [`Value`] from a slice of JSON bytes.
    ///
    /// # Example
    ///
    /// ```
    /// # use json_cursor::{ParseError, Value};
    /// #
    /// let data = Value::from_slice(b"[1, 2]").unwrap();
    /// assert_eq!(data, Value::Array(vec![Value::Int(1), Value::Int(2)]));
    ///
    /// let err = Value::from_slice(b"[\"\xff\"]").unwrap_err();
    /// assert_eq!(err, ParseError::InvalidUtf8 { offset: 2 });
    /// ```
    ///
    /// # Errors
    ///
    /// This function fails if the bytes are not UTF-8, or if the first value
    /// is not valid JSON.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let input = std::str::from_utf8(bytes).map_err(|err| ParseError::InvalidUtf8 {
            offset: err.valid_up_to(),
        })?;
        deserialize::parse_document(input)
    }

    /// Return a string description of the `Value`.
    ///
    /// ```
    /// # use json_cursor::Value;
    /// # use std::str::FromStr;
    /// #
    /// let value = Value::from_str(r#"{"a": 2, "b": false, "c": 0.5}"#).unwrap();
    /// assert_eq!(value.value_type(), "object");
    /// assert_eq!(value["a"].value_type(), "integer");
    /// assert_eq!(value["b"].value_type(), "boolean");
    /// assert_eq!(value["c"].value_type(), "float");
    /// ```
    pub fn value_type(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Look up a field of an object or a position in an array.
    ///
    /// Returns `None` when the entry does not exist, or when the key does not
    /// fit the container (a field on an array, a position on an object, or
    /// any key on a scalar).
    ///
    /// ```
    /// # use json_cursor::Value;
    /// # use std::str::FromStr;
    /// #
    /// let object = Value::from_str(r#"{ "A": 65, "B": 66, "C": 67 }"#).unwrap();
    /// assert_eq!(object.get("A"), Some(&Value::Int(65)));
    ///
    /// let array = Value::from_str(r#"[ "A", "B", "C" ]"#).unwrap();
    /// assert_eq!(array.get(2), Some(&Value::String("C".into())));
    /// assert_eq!(array.get("A"), None);
    /// ```
    ///
    /// Square brackets read the same entries, with `Value::Null` standing in
    /// for a missing one.
    ///
    /// ```
    /// # use json_cursor::Value;
    /// # use std::str::FromStr;
    /// #
    /// let object = Value::from_str(r#"{ "A": ["a", "á"], "B": ["b"] }"#).unwrap();
    /// assert_eq!(object["B"][0], Value::String("b".into()));
    /// assert_eq!(object["D"][0], Value::Null);
    /// ```
    pub fn get<'k>(&self, key: impl Into<Key<'k>>) -> Option<&Self> {
        key.into().find(self)
    }

    /// Mutable counterpart of [`Value::get`].
    ///
    /// ```
    /// # use json_cursor::Value;
    /// # use std::str::FromStr;
    /// #
    /// let mut object = Value::from_str(r#"{ "A": 65, "B": 66 }"#).unwrap();
    /// *object.get_mut("A").unwrap() = Value::Int(69);
    /// assert_eq!(object["A"], Value::Int(69));
    /// ```
    pub fn get_mut<'k>(&mut self, key: impl Into<Key<'k>>) -> Option<&mut Self> {
        key.into().find_mut(self)
    }

    /// Follow an RFC 6901 JSON Pointer such as `/a/0/b` from this value.
    ///
    /// The empty pointer names the value itself. In a token, `~1` stands for
    /// `/` and `~0` for `~`. Tokens address arrays only when they are plain
    /// decimal numbers without leading zeros.
    ///
    /// ```
    /// # use json_cursor::Value;
    /// # use std::str::FromStr;
    /// #
    /// let data = Value::from_str(r#"{ "a/b": [10, { "c": true }] }"#).unwrap();
    /// assert_eq!(data.pointer("/a~1b/1/c"), Some(&Value::Bool(true)));
    /// assert_eq!(data.pointer(""), Some(&data));
    /// assert_eq!(data.pointer("/a~1b/01"), None);
    /// assert_eq!(data.pointer("a~1b"), None);
    /// ```
    pub fn pointer(&self, pointer: &str) -> Option<&Self> {
        key::pointer_tokens(pointer)?.try_fold(self, |target, token| match target {
            Self::Object(map) => map.get(&token),
            Self::Array(items) => items.get(key::pointer_position(&token)?),
            _ => None,
        })
    }

    /// Mutable counterpart of [`Value::pointer`].
    ///
    /// ```
    /// # use json_cursor::Value;
    /// # use std::str::FromStr;
    /// #
    /// let mut data = Value::from_str(r#"{ "list": [1, 2] }"#).unwrap();
    /// *data.pointer_mut("/list/0").unwrap() = Value::Int(7);
    /// assert_eq!(data["list"][0], Value::Int(7));
    /// ```
    pub fn pointer_mut(&mut self, pointer: &str) -> Option<&mut Self> {
        key::pointer_tokens(pointer)?.try_fold(self, |target, token| match target {
            Self::Object(map) => map.get_mut(&token),
            Self::Array(items) => items.get_mut(key::pointer_position(&token)?),
            _ => None,
        })
    }

    pub fn is_object(&self) -> bool {
        self.as_object().is_some()
    }

    /// If the `Value` is an Object, returns the associated map. Returns None
    /// otherwise.
    ///
    /// ```
    /// # use json_cursor::Value;
    /// # use std::str::FromStr;
    /// #
    /// let v = Value::from_str(r#"{ "a": { "nested": true }, "b": ["an", "array"] }"#).unwrap();
    ///
    /// assert_eq!(v["a"].as_object().unwrap().len(), 1);
    /// assert_eq!(v["b"].as_object(), None);
    /// ```
    pub fn as_object(&self) -> Option<&HashMap<String, Self>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut HashMap<String, Self>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_array(&self) -> bool {
        self.as_array().is_some()
    }

    /// If the `Value` is an Array, returns the associated vector. Returns None
    /// otherwise.
    ///
    /// ```
    /// # use json_cursor::Value;
    /// # use std::str::FromStr;
    /// #
    /// let mut v = Value::from_str(r#"{ "a": ["an", "array"] }"#).unwrap();
    /// assert_eq!(v["a"].as_array().unwrap().len(), 2);
    ///
    /// v["a"].as_array_mut().unwrap().clear();
    /// assert_eq!(v, Value::from_str(r#"{ "a": [] }"#).unwrap());
    /// ```
    pub fn as_array(&self) -> Option<&Vec<Self>> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Self>> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn is_string(&self) -> bool {
        self.as_str().is_some()
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true for both integers and floats.
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    /// If the `Value` is an integer, returns it. Floats are not converted.
    ///
    /// ```
    /// # use json_cursor::Value;
    /// # use std::str::FromStr;
    /// #
    /// let v = Value::from_str(r#"{ "a": 1, "b": 1.0, "c": "1" }"#).unwrap();
    ///
    /// assert_eq!(v["a"].as_i64(), Some(1));
    /// assert_eq!(v["b"].as_i64(), None);
    /// assert_eq!(v["c"].as_i64(), None);
    /// ```
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Int(number) => Some(number),
            _ => None,
        }
    }

    /// If the `Value` is a number, returns it as an `f64`. Integers are
    /// widened, which may lose precision above 2^53.
    ///
    /// ```
    /// # use json_cursor::Value;
    /// # use std::str::FromStr;
    /// #
    /// let v = Value::from_str(r#"{ "a": 1, "b": 2.5, "c": "2" }"#).unwrap();
    ///
    /// assert_eq!(v["a"].as_f64(), Some(1.0));
    /// assert_eq!(v["b"].as_f64(), Some(2.5));
    /// assert_eq!(v["c"].as_f64(), None);
    /// ```
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Int(number) => Some(number as f64),
            Self::Float(number) => Some(number),
            _ => None,
        }
    }

    pub fn is_boolean(&self) -> bool {
        self.as_bool().is_some()
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Self::Bool(b) => Some(b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        self.as_null().is_some()
    }

    pub fn as_null(&self) -> Option<()> {
        match *self {
            Self::Null => Some(()),
            _ => None,
        }
    }

    /// Takes the value out of the `Value`, leaving a `Null` in its place.
    ///
    /// ```
    /// # use json_cursor::Value;
    /// # use std::str::FromStr;
    /// #
    /// let mut v = Value::from_str(r#"{ "x": "y" }"#).unwrap();
    /// assert_eq!(v["x"].take(), Value::String("y".into()));
    /// assert_eq!(v, Value::from_str(r#"{ "x": null }"#).unwrap());
    /// ```
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let value = Value::from_str(r#"{"s": "str", "i": -4, "f": 0.5, "b": true, "n": null, "a": [], "o": {}}"#)
            .unwrap();

        assert!(value.is_object());
        assert!(value["a"].is_array());
        assert!(value["s"].is_string());
        assert!(value["i"].is_number());
        assert!(value["f"].is_number());
        assert!(value["b"].is_boolean());
        assert!(value["n"].is_null());
        assert!(value["o"].is_object());
        assert!(!value["s"].is_number());

        assert_eq!(value["s"].as_str(), Some("str"));
        assert_eq!(value["i"].as_i64(), Some(-4));
        assert_eq!(value["f"].as_f64(), Some(0.5));
        assert_eq!(value["b"].as_bool(), Some(true));
        assert_eq!(value["n"].as_null(), Some(()));
        assert_eq!(value["missing"].as_null(), Some(()));
        assert_eq!(value.as_object().unwrap().len(), 7);
    }

    #[test]
    fn test_from_slice() {
        assert_eq!(Value::from_slice(b" null").unwrap(), Value::Null);
        assert_eq!(
            Value::from_slice(b"\x80"),
            Err(ParseError::InvalidUtf8 { offset: 0 })
        );
    }

    #[test]
    fn test_pointer() {
        let mut value = Value::from_str(r#"{"a": [{"b": 1}, 2.5], "": {"~": null}}"#).unwrap();

        assert_eq!(value.pointer("/a/0/b"), Some(&Value::Int(1)));
        assert_eq!(value.pointer("/a/1"), Some(&Value::Float(2.5)));
        assert_eq!(value.pointer("//~0"), Some(&Value::Null));
        assert_eq!(value.pointer("/a/2"), None);
        assert_eq!(value.pointer("/a/b"), None);
        assert_eq!(value.pointer("/a/1/x"), None);

        value.pointer_mut("/a/0/b").unwrap().take();
        assert_eq!(value["a"][0]["b"], Value::Null);
        assert!(value.pointer_mut("/missing").is_none());
    }

    #[test]
    fn test_default() {
        assert_eq!(Value::default(), Value::Null);
        let mut value = Value::Int(3);
        assert_eq!(value.take(), Value::Int(3));
        assert!(value.is_null());
    }
}
