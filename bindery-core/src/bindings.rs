use crate::{AsValue, ParameterType, Value};
use std::collections::HashMap;

/// A value bound to a named parameter together with its type tag.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundValue {
    pub value: Value,
    pub ty: ParameterType,
}

impl BoundValue {
    /// Binds `value` with the tag inferred from its type.
    pub fn new(value: impl AsValue) -> Self {
        let value = value.as_value();
        Self {
            ty: ParameterType::infer(&value),
            value,
        }
    }
    pub fn typed(value: impl AsValue, ty: ParameterType) -> Self {
        Self {
            value: value.as_value(),
            ty,
        }
    }
}

/// Current values of the named parameters of a statement.
///
/// Names are matched exactly, sigil included. Binding a name again replaces
/// the previous value.
#[derive(Debug, Clone)]
pub struct Bindings {
    values: HashMap<String, BoundValue>,
    sigil: char,
    arrays: usize,
}

impl Default for Bindings {
    fn default() -> Self {
        Self::with_sigil(':')
    }
}

impl Bindings {
    pub fn new() -> Self {
        Default::default()
    }
    /// Bindings whose generated array names start with `sigil`.
    pub fn with_sigil(sigil: char) -> Self {
        Self {
            values: HashMap::new(),
            sigil,
            arrays: 0,
        }
    }
    pub fn sigil(&self) -> char {
        self.sigil
    }
    pub fn bind(&mut self, name: impl Into<String>, value: impl AsValue) -> &mut Self {
        self.insert(name, BoundValue::new(value))
    }
    pub fn bind_typed(
        &mut self,
        name: impl Into<String>,
        value: impl AsValue,
        ty: ParameterType,
    ) -> &mut Self {
        self.insert(name, BoundValue::typed(value, ty))
    }
    pub fn insert(&mut self, name: impl Into<String>, value: BoundValue) -> &mut Self {
        self.values.insert(name.into(), value);
        self
    }
    /// Binds every value under a fresh generated name and returns the names in
    /// order, ready to be joined into an `IN (...)` list. Names start with the
    /// sigil of these bindings.
    ///
    /// ```rust
    /// use bindery_core::Bindings;
    /// let mut bindings = Bindings::new();
    /// let names = bindings.bind_array([3, 5], None);
    /// assert_eq!(names, [":preparedArray1", ":preparedArray2"]);
    /// assert_eq!(bindings.len(), 2);
    /// ```
    pub fn bind_array<V: AsValue>(
        &mut self,
        values: impl IntoIterator<Item = V>,
        ty: Option<ParameterType>,
    ) -> Vec<String> {
        values
            .into_iter()
            .map(|value| {
                self.arrays += 1;
                let name = format!("{}preparedArray{}", self.sigil, self.arrays);
                let bound = match ty {
                    Some(ty) => BoundValue::typed(value, ty),
                    None => BoundValue::new(value),
                };
                self.values.insert(name.clone(), bound);
                name
            })
            .collect()
    }
    pub fn get(&self, name: &str) -> Option<&BoundValue> {
        self.values.get(name)
    }
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
    pub fn remove(&mut self, name: &str) -> Option<BoundValue> {
        self.values.remove(name)
    }
    pub fn clear(&mut self) {
        self.values.clear();
        self.arrays = 0;
    }
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BoundValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}
