/*!
 * Variant
 * Tagged attribute value returned by generic property queries
 */

use crate::core::errors::AdsiError;
use serde::{Deserialize, Serialize};

/// Attribute value as returned by [`get`](crate::adsi::Object::get)
///
/// Multi-valued attributes come back as `List`. Single-valued attributes and
/// multi-valued attributes holding one value both come back as the bare value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Variant {
    /// No value was produced (`VT_EMPTY`)
    #[default]
    Empty,
    /// Explicit null (`VT_NULL`)
    Null,
    Bool(bool),
    Int(i64),
    String(String),
    List(Vec<Variant>),
}

impl Variant {
    pub fn type_name(&self) -> &'static str {
        match self {
            Variant::Empty => "empty",
            Variant::Null => "null",
            Variant::Bool(_) => "bool",
            Variant::Int(_) => "int",
            Variant::String(_) => "string",
            Variant::List(_) => "list",
        }
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Variant::Empty | Variant::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Variant::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Variant::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Variant::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Variant]> {
        match self {
            Variant::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn into_string(self) -> Option<String> {
        match self {
            Variant::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Variant {
    fn from(value: bool) -> Self {
        Variant::Bool(value)
    }
}

impl From<i64> for Variant {
    fn from(value: i64) -> Self {
        Variant::Int(value)
    }
}

impl From<i32> for Variant {
    fn from(value: i32) -> Self {
        Variant::Int(i64::from(value))
    }
}

impl From<String> for Variant {
    fn from(value: String) -> Self {
        Variant::String(value)
    }
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Variant::String(value.to_string())
    }
}

impl<T: Into<Variant>> From<Vec<T>> for Variant {
    fn from(values: Vec<T>) -> Self {
        Variant::List(values.into_iter().map(Into::into).collect())
    }
}

impl TryFrom<Variant> for String {
    type Error = AdsiError;

    fn try_from(value: Variant) -> Result<Self, Self::Error> {
        match value {
            Variant::String(s) => Ok(s),
            other => Err(AdsiError::type_mismatch("string", other.type_name())),
        }
    }
}

impl TryFrom<Variant> for bool {
    type Error = AdsiError;

    fn try_from(value: Variant) -> Result<Self, Self::Error> {
        match value {
            Variant::Bool(b) => Ok(b),
            other => Err(AdsiError::type_mismatch("bool", other.type_name())),
        }
    }
}

impl TryFrom<Variant> for i64 {
    type Error = AdsiError;

    fn try_from(value: Variant) -> Result<Self, Self::Error> {
        match value {
            Variant::Int(i) => Ok(i),
            other => Err(AdsiError::type_mismatch("int", other.type_name())),
        }
    }
}

impl TryFrom<Variant> for Vec<String> {
    type Error = AdsiError;

    /// Accepts a list of strings, a single string, or nothing at all
    fn try_from(value: Variant) -> Result<Self, Self::Error> {
        match value {
            Variant::Empty | Variant::Null => Ok(Vec::new()),
            Variant::String(s) => Ok(vec![s]),
            Variant::List(items) => items.into_iter().map(String::try_from).collect(),
            other => Err(AdsiError::type_mismatch("list", other.type_name())),
        }
    }
}
