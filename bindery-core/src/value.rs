use rust_decimal::Decimal;
use std::fmt::{self, Display};
use time::{Date, PrimitiveDateTime};
use uuid::Uuid;

/// Dynamically typed parameter value.
///
/// Every variant but [`Value::Null`] carries its type even when empty, so
/// `Value::Int64(None)` is a NULL the driver can still bind as an integer.
#[derive(Default, Debug, Clone, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Boolean(Option<bool>),
    Int64(Option<i64>),
    Float64(Option<f64>),
    Decimal(Option<Decimal>),
    Varchar(Option<String>),
    Blob(Option<Box<[u8]>>),
    Date(Option<Date>),
    Timestamp(Option<PrimitiveDateTime>),
    Uuid(Option<Uuid>),
}

impl Value {
    pub fn same_type(&self, other: &Self) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }

    pub fn is_null(&self) -> bool {
        match self {
            Value::Null
            | Value::Boolean(None)
            | Value::Int64(None)
            | Value::Float64(None)
            | Value::Decimal(None)
            | Value::Varchar(None)
            | Value::Blob(None)
            | Value::Date(None)
            | Value::Timestamp(None)
            | Value::Uuid(None) => true,
            _ => false,
        }
    }

    /// Textual form sent to backends that bind everything as strings.
    ///
    /// `None` for nulls and for blobs that are not valid UTF-8.
    pub fn to_text(&self) -> Option<String> {
        Some(match self {
            Value::Null => return None,
            Value::Boolean(v) => (if (*v)? { "1" } else { "0" }).to_owned(),
            Value::Int64(v) => (*v)?.to_string(),
            Value::Float64(v) => (*v)?.to_string(),
            Value::Decimal(v) => (*v)?.to_string(),
            Value::Varchar(v) => v.clone()?,
            Value::Blob(v) => String::from_utf8(v.as_deref()?.to_vec()).ok()?,
            Value::Date(v) => (*v)?.to_string(),
            Value::Timestamp(v) => (*v)?.to_string(),
            Value::Uuid(v) => (*v)?.to_string(),
        })
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_text() {
            Some(v) if matches!(self, Value::Varchar(..) | Value::Date(..) | Value::Timestamp(..) | Value::Uuid(..)) => {
                write!(f, "'{}'", v.replace('\'', "''"))
            }
            Some(v) => f.write_str(&v),
            None if matches!(self, Value::Blob(Some(..))) => f.write_str("<blob>"),
            None => f.write_str("NULL"),
        }
    }
}

/// Type tag attached to a bound value, drivers map it to their native binding type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParameterType {
    Boolean,
    Integer,
    LargeObject,
    Null,
    String,
}

impl ParameterType {
    /// Tag used when the caller does not provide one.
    pub fn infer(value: &Value) -> Self {
        match value {
            Value::Null => ParameterType::Null,
            Value::Boolean(..) => ParameterType::Boolean,
            Value::Int64(..) => ParameterType::Integer,
            Value::Blob(..) => ParameterType::LargeObject,
            _ => ParameterType::String,
        }
    }
}

impl Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParameterType::Boolean => "boolean",
            ParameterType::Integer => "integer",
            ParameterType::LargeObject => "large_object",
            ParameterType::Null => "null",
            ParameterType::String => "string",
        })
    }
}
