use crate::{Error, Result, Value};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use std::{any, borrow::Cow};
use time::{Date, PrimitiveDateTime};
use uuid::Uuid;

/// Conversion between native Rust types and [`Value`].
///
/// Bindings accept anything implementing this trait, and drivers use
/// `try_from_value` to read a value back in the type they need.
///
/// # Examples
/// ```rust
/// use bindery_core::{AsValue, Value};
/// let v = 42i32.as_value();
/// assert_eq!(v, Value::Int64(Some(42)));
/// let n: i32 = AsValue::try_from_value(v).unwrap();
/// assert_eq!(n, 42);
/// ```
pub trait AsValue {
    /// The NULL of this type.
    fn as_empty_value() -> Value;
    fn as_value(self) -> Value;
    fn try_from_value(value: Value) -> Result<Self>
    where
        Self: Sized;
}

fn mismatch<T>(value: &Value) -> Error {
    Error::msg(format!(
        "Cannot convert {:?} into {}",
        value,
        any::type_name::<T>()
    ))
}

impl AsValue for Value {
    fn as_empty_value() -> Value {
        Value::Null
    }
    fn as_value(self) -> Value {
        self
    }
    fn try_from_value(value: Value) -> Result<Self> {
        Ok(value)
    }
}

macro_rules! impl_as_value {
    ($source:ty, $destination:path, $value:ident $(, $pat_rest:pat => $expr_rest:expr)* $(,)?) => {
        impl AsValue for $source {
            fn as_empty_value() -> Value {
                $destination(None)
            }
            fn as_value(self) -> Value {
                $destination(Some(self.into()))
            }
            fn try_from_value($value: Value) -> Result<Self> {
                match $value {
                    $destination(Some(v)) => v.try_into().map_err(|_| {
                        Error::msg(format!("Value is out of range for {}", any::type_name::<Self>()))
                    }),
                    $($pat_rest => $expr_rest,)*
                    #[allow(unreachable_patterns)]
                    _ => Err(mismatch::<Self>(&$value)),
                }
            }
        }
        impl From<$source> for Value {
            fn from(value: $source) -> Self {
                value.as_value()
            }
        }
    };
}

impl_as_value!(
    bool,
    Value::Boolean,
    value,
    Value::Int64(Some(v)) => Ok(v != 0),
);
impl_as_value!(
    i8,
    Value::Int64,
    value,
    Value::Boolean(Some(v)) => Ok(v as _),
);
impl_as_value!(
    i16,
    Value::Int64,
    value,
    Value::Boolean(Some(v)) => Ok(v as _),
);
impl_as_value!(
    i32,
    Value::Int64,
    value,
    Value::Boolean(Some(v)) => Ok(v as _),
);
impl_as_value!(
    i64,
    Value::Int64,
    value,
    Value::Boolean(Some(v)) => Ok(v as _),
    Value::Varchar(Some(ref v)) => v
        .trim()
        .parse()
        .map_err(|_| mismatch::<Self>(&value)),
);
impl_as_value!(
    u8,
    Value::Int64,
    value,
    Value::Boolean(Some(v)) => Ok(v as _),
);
impl_as_value!(
    u16,
    Value::Int64,
    value,
    Value::Boolean(Some(v)) => Ok(v as _),
);
impl_as_value!(
    u32,
    Value::Int64,
    value,
    Value::Boolean(Some(v)) => Ok(v as _),
);
impl_as_value!(
    f64,
    Value::Float64,
    value,
    Value::Int64(Some(v)) => Ok(v as _),
    Value::Decimal(Some(v)) => v.to_f64().ok_or_else(|| mismatch::<Self>(&value)),
);
impl_as_value!(
    String,
    Value::Varchar,
    value,
    Value::Int64(Some(v)) => Ok(v.to_string()),
    Value::Decimal(Some(v)) => Ok(v.to_string()),
    Value::Uuid(Some(v)) => Ok(v.to_string()),
    Value::Blob(Some(ref v)) => String::from_utf8(v.to_vec())
        .map_err(|_| mismatch::<Self>(&value)),
);
impl_as_value!(
    Box<[u8]>,
    Value::Blob,
    value,
    Value::Varchar(Some(v)) => Ok(v.into_bytes().into_boxed_slice()),
);
impl_as_value!(
    Decimal,
    Value::Decimal,
    value,
    Value::Int64(Some(v)) => Ok(v.into()),
    Value::Varchar(Some(ref v)) => v.parse().map_err(|_| mismatch::<Self>(&value)),
);
impl_as_value!(Date, Value::Date, value);
impl_as_value!(PrimitiveDateTime, Value::Timestamp, value);
impl_as_value!(
    Uuid,
    Value::Uuid,
    value,
    Value::Varchar(Some(ref v)) => Uuid::parse_str(v).map_err(|_| mismatch::<Self>(&value)),
);

impl AsValue for f32 {
    fn as_empty_value() -> Value {
        Value::Float64(None)
    }
    fn as_value(self) -> Value {
        Value::Float64(Some(self.into()))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        f64::try_from_value(value).map(|v| v as f32)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        value.as_value()
    }
}

impl AsValue for Vec<u8> {
    fn as_empty_value() -> Value {
        Value::Blob(None)
    }
    fn as_value(self) -> Value {
        Value::Blob(Some(self.into_boxed_slice()))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        Box::<[u8]>::try_from_value(value).map(Into::into)
    }
}

impl AsValue for &str {
    fn as_empty_value() -> Value {
        Value::Varchar(None)
    }
    fn as_value(self) -> Value {
        Value::Varchar(Some(self.into()))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        Err(mismatch::<Self>(&value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        value.as_value()
    }
}

impl<'a> AsValue for Cow<'a, str> {
    fn as_empty_value() -> Value {
        Value::Varchar(None)
    }
    fn as_value(self) -> Value {
        Value::Varchar(Some(self.into_owned()))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        String::try_from_value(value).map(Cow::Owned)
    }
}

impl<T: AsValue> AsValue for Option<T> {
    fn as_empty_value() -> Value {
        T::as_empty_value()
    }
    fn as_value(self) -> Value {
        match self {
            Some(v) => v.as_value(),
            None => T::as_empty_value(),
        }
    }
    fn try_from_value(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            T::try_from_value(value).map(Some)
        }
    }
}
