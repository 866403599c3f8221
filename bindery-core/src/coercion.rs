use crate::{BoundValue, ParameterType, Value};
use std::collections::HashMap;

/// Conversion applied to a bound value before it reaches the driver.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coercion {
    /// Pass the value as it is.
    #[default]
    Keep,
    /// Booleans become `0`/`1`, numeric strings become integers.
    Integer,
    /// Scalars become their textual form.
    Text,
    /// Strings become their UTF-8 bytes.
    Bytes,
    /// Always bind NULL.
    Null,
}

impl Coercion {
    /// Values the rule does not apply to pass through unchanged.
    pub fn apply(&self, value: Value) -> Value {
        match (self, value) {
            (Coercion::Keep, value) => value,
            (Coercion::Integer, Value::Boolean(v)) => Value::Int64(v.map(i64::from)),
            (Coercion::Integer, Value::Varchar(Some(v))) => match v.trim().parse::<i64>() {
                Ok(parsed) => Value::Int64(Some(parsed)),
                Err(..) => Value::Varchar(Some(v)),
            },
            (Coercion::Integer, Value::Varchar(None)) => Value::Int64(None),
            (Coercion::Text, Value::Null) => Value::Null,
            (Coercion::Text, Value::Blob(v)) => Value::Blob(v),
            (Coercion::Text, value) => Value::Varchar(value.to_text()),
            (Coercion::Bytes, Value::Varchar(v)) => {
                Value::Blob(v.map(|v| v.into_bytes().into_boxed_slice()))
            }
            (Coercion::Null, ..) => Value::Null,
            (.., value) => value,
        }
    }
}

/// Per backend table of [`Coercion`] rules, keyed by the bound value type tag.
///
/// Types without a rule are left untouched.
///
/// ```rust
/// use bindery_core::{BoundValue, Coercion, CoercionTable, ParameterType, Value};
/// let table = CoercionTable::default().with(ParameterType::Boolean, Coercion::Integer);
/// let coerced = table.apply(BoundValue::new(true));
/// assert_eq!(coerced.value, Value::Int64(Some(1)));
/// assert_eq!(coerced.ty, ParameterType::Boolean);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CoercionTable {
    rules: HashMap<ParameterType, Coercion>,
}

impl CoercionTable {
    pub fn with(mut self, ty: ParameterType, coercion: Coercion) -> Self {
        self.rules.insert(ty, coercion);
        self
    }
    pub fn get(&self, ty: ParameterType) -> Coercion {
        self.rules.get(&ty).copied().unwrap_or_default()
    }
    pub fn apply(&self, bound: BoundValue) -> BoundValue {
        BoundValue {
            value: self.get(bound.ty).apply(bound.value),
            ty: bound.ty,
        }
    }
}
