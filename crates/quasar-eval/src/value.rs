use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{EvalError, Result};

/// Static kind of a field, used to type check rule expressions at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Integer,
    String,
    Boolean,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Integer => write!(f, "integer"),
            FieldType::String => write!(f, "string"),
            FieldType::Boolean => write!(f, "boolean"),
        }
    }
}

/// Dynamically typed field value.
///
/// Scalar fields read and write the scalar variants. Iterator-scoped fields are
/// read back as a list holding one value per element, in iteration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    String(String),
    Bool(bool),
    IntList(Vec<i64>),
    StringList(Vec<String>),
    BoolList(Vec<bool>),
}

impl FieldValue {
    /// Parse a rule literal into a value of the given kind.
    pub fn parse(kind: FieldType, literal: &str) -> Result<Self> {
        let parse_error = || EvalError::FieldValueParseError(literal.to_string());

        match kind {
            FieldType::Integer => i64::from_str(literal)
                .map(FieldValue::Int)
                .map_err(|_| parse_error()),
            FieldType::String => Ok(FieldValue::String(literal.to_string())),
            FieldType::Boolean => bool::from_str(literal)
                .map(FieldValue::Bool)
                .map_err(|_| parse_error()),
        }
    }

    /// Kind of the value, or of its elements for lists.
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::Int(_) | FieldValue::IntList(_) => FieldType::Integer,
            FieldValue::String(_) | FieldValue::StringList(_) => FieldType::String,
            FieldValue::Bool(_) | FieldValue::BoolList(_) => FieldType::Boolean,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(
            self,
            FieldValue::IntList(_) | FieldValue::StringList(_) | FieldValue::BoolList(_)
        )
    }

    /// Convert into the native integer type of the attribute being written.
    ///
    /// `attribute` is the struct path of the target, reported on mismatch. Values
    /// not representable in `T` are a mismatch too.
    pub fn into_int<T: Integer>(self, attribute: &[&str]) -> Result<T> {
        match self {
            FieldValue::Int(value) => T::from_int(value).ok_or_else(|| mismatch(attribute)),
            _ => Err(mismatch(attribute)),
        }
    }

    pub fn into_string(self, attribute: &[&str]) -> Result<String> {
        match self {
            FieldValue::String(value) => Ok(value),
            _ => Err(mismatch(attribute)),
        }
    }

    pub fn into_bool(self, attribute: &[&str]) -> Result<bool> {
        match self {
            FieldValue::Bool(value) => Ok(value),
            _ => Err(mismatch(attribute)),
        }
    }
}

fn mismatch(attribute: &[&str]) -> EvalError {
    EvalError::ValueTypeMismatch(attribute.join("."))
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(value) => write!(f, "{value}"),
            FieldValue::String(value) => write!(f, "{value}"),
            FieldValue::Bool(value) => write!(f, "{value}"),
            FieldValue::IntList(values) => print_list(f, values),
            FieldValue::StringList(values) => print_list(f, values),
            FieldValue::BoolList(values) => print_list(f, values),
        }
    }
}

fn print_list(f: &mut fmt::Formatter<'_>, values: &[impl fmt::Display]) -> fmt::Result {
    write!(f, "[ ")?;

    for (index, value) in values.iter().enumerate() {
        if index != 0 {
            write!(f, ", ")?;
        }
        write!(f, "{value}")?;
    }

    write!(f, " ]")
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(value.into())
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Int(value.into())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<Vec<i64>> for FieldValue {
    fn from(values: Vec<i64>) -> Self {
        FieldValue::IntList(values)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        FieldValue::StringList(values)
    }
}

impl From<Vec<bool>> for FieldValue {
    fn from(values: Vec<bool>) -> Self {
        FieldValue::BoolList(values)
    }
}

/// Native integer attribute exposed as an `integer` field.
pub trait Integer: Copy {
    fn to_int(self) -> i64;

    /// Returns `None` when `value` doesn't fit the native type.
    fn from_int(value: i64) -> Option<Self>;
}

macro_rules! impl_integer {
    ( $( $x:ty ),* ) => {
            $(
                impl $crate::Integer for $x {
                    fn to_int(self) -> i64 {
                        i64::from(self)
                    }

                    fn from_int(value: i64) -> Option<Self> {
                        <$x>::try_from(value).ok()
                    }
                }
            )*
    };
}

impl_integer![i8, i16, i32, i64];
impl_integer![u8, u16, u32];

// 64 bit masks (capabilities) and inodes are carried bit for bit.
impl Integer for u64 {
    fn to_int(self) -> i64 {
        self as i64
    }

    fn from_int(value: i64) -> Option<Self> {
        Some(value as u64)
    }
}
