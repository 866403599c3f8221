use crate::{
    AsValue, Bindings, BoundValue, CoercionTable, Dialect, MappedStatement, MappingCache,
    ParameterError, ParameterKeyMapping, ParameterType, Result, map_parameters_checked, resolve,
    truncate_long,
};
use std::{
    fmt::{self, Display},
    sync::Arc,
};

/// A statement with named parameters and their current values.
///
/// The mapping is computed when the statement is prepared and never changes
/// until [`NamedStatement::prepare`] is called again. Bindings can change
/// between executions: [`NamedStatement::resolve`] reads them fresh each time.
///
/// ```rust
/// use bindery_core::{CoercionTable, Dialect, NamedStatement, ParameterPositions};
/// let mut statement = NamedStatement::new(
///     &Dialect::default(),
///     "SELECT * FROM dbtest WHERE title LIKE :search OR description LIKE :search",
/// )
/// .unwrap();
/// assert_eq!(
///     statement.mapping().get(":search"),
///     Some(&ParameterPositions::Multiple(vec![0, 1]))
/// );
/// statement.bind("search", "test");
/// let values = statement.resolve(&CoercionTable::default()).unwrap();
/// assert_eq!(values.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct NamedStatement {
    sql: String,
    mapped: Arc<MappedStatement>,
    bindings: Bindings,
    sigil: char,
}

impl NamedStatement {
    pub fn new(dialect: &Dialect, sql: impl Into<String>) -> Result<Self> {
        let sql = sql.into();
        let mapped = Arc::new(map_parameters_checked(dialect, &sql)?);
        Ok(Self {
            sql,
            mapped,
            bindings: Bindings::with_sigil(dialect.sigil),
            sigil: dialect.sigil,
        })
    }

    /// Same as [`NamedStatement::new`], sharing the mapping through `cache`.
    pub fn cached(cache: &MappingCache, sql: impl Into<String>) -> Result<Self> {
        let sql = sql.into();
        let mapped = cache.get_or_map(&sql)?;
        Ok(Self {
            sql,
            mapped,
            bindings: Bindings::with_sigil(cache.dialect().sigil),
            sigil: cache.dialect().sigil,
        })
    }

    /// Replaces the statement text, all bindings are dropped.
    pub fn prepare(&mut self, dialect: &Dialect, sql: impl Into<String>) -> Result<&mut Self> {
        *self = Self::new(dialect, sql)?;
        Ok(self)
    }

    /// Text as given, with the named parameters.
    pub fn sql(&self) -> &str {
        &self.sql
    }
    /// Text to hand to the backend, with positional placeholders.
    pub fn rewritten(&self) -> &str {
        &self.mapped.rewritten
    }
    pub fn mapping(&self) -> &ParameterKeyMapping {
        &self.mapped.mapping
    }
    pub fn mapped(&self) -> &Arc<MappedStatement> {
        &self.mapped
    }
    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    fn key(&self, name: &str) -> String {
        if name.starts_with(self.sigil) {
            name.to_owned()
        } else {
            format!("{}{}", self.sigil, name)
        }
    }

    /// Binds `value` to `name`, the sigil is optional.
    pub fn bind(&mut self, name: &str, value: impl AsValue) -> &mut Self {
        let key = self.key(name);
        self.bindings.insert(key, BoundValue::new(value));
        self
    }
    pub fn bind_typed(&mut self, name: &str, value: impl AsValue, ty: ParameterType) -> &mut Self {
        let key = self.key(name);
        self.bindings.insert(key, BoundValue::typed(value, ty));
        self
    }
    /// Binds each value under a generated name, see [`Bindings::bind_array`].
    pub fn bind_array<V: AsValue>(
        &mut self,
        values: impl IntoIterator<Item = V>,
        ty: Option<ParameterType>,
    ) -> Vec<String> {
        self.bindings.bind_array(values, ty)
    }
    pub fn unbind(&mut self, name: &str) -> Option<BoundValue> {
        let key = self.key(name);
        self.bindings.remove(&key)
    }
    pub fn clear_bindings(&mut self) -> &mut Self {
        self.bindings.clear();
        self
    }

    /// Positional values for the current bindings.
    pub fn resolve(&self, coercions: &CoercionTable) -> Result<Vec<BoundValue>, ParameterError> {
        resolve(self.mapping(), &self.bindings, coercions)
    }
}

impl Display for NamedStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", truncate_long!(self.rewritten()))
    }
}
