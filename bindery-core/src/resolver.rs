use crate::{Bindings, BoundValue, CoercionTable, ParameterError, ParameterKeyMapping};

/// Expands the named bindings into one value per placeholder.
///
/// A parameter used several times gets the same value at each of its
/// positions. Bindings whose name is not in the mapping are ignored. Values go
/// through `coercions` once, before being copied into their slots.
///
/// ```rust
/// use bindery_core::{Bindings, CoercionTable, Dialect, Value, map_parameters, resolve};
/// let mapped = map_parameters(&Dialect::default(), "SELECT :search, :search");
/// let mut bindings = Bindings::new();
/// bindings.bind(":search", "test");
/// let values = resolve(&mapped.mapping, &bindings, &CoercionTable::default()).unwrap();
/// assert_eq!(values.len(), 2);
/// assert!(values.iter().all(|v| v.value == Value::Varchar(Some("test".into()))));
/// ```
pub fn resolve(
    mapping: &ParameterKeyMapping,
    bindings: &Bindings,
    coercions: &CoercionTable,
) -> Result<Vec<BoundValue>, ParameterError> {
    let mut slots: Vec<Option<BoundValue>> = vec![None; mapping.positions()];
    for (name, positions) in mapping.iter_ordered() {
        let Some(bound) = bindings.get(name) else {
            return Err(ParameterError::MissingBinding(name.to_owned()));
        };
        let bound = coercions.apply(bound.clone());
        for &position in positions.as_slice() {
            if let Some(slot) = slots.get_mut(position) {
                *slot = Some(bound.clone());
            }
        }
    }
    Ok(slots.into_iter().flatten().collect())
}
