use crate::{Dialect, MappedStatement, Result, map_parameters_checked};
use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

/// Maps each distinct statement text once and shares the result.
///
/// Mapping happens under the write lock, concurrent callers asking for the same
/// text wait for it and receive the same [`Arc`].
///
/// Entries are never evicted: the cache holds one entry per distinct text until
/// [`MappingCache::clear`] is called. Keep it for a bounded set of statements
/// (the ones an application prepares), not for text built from user input.
#[derive(Debug)]
pub struct MappingCache {
    dialect: Dialect,
    entries: RwLock<HashMap<String, Arc<MappedStatement>>>,
}

impl MappingCache {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            entries: Default::default(),
        }
    }
    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }
    pub fn get(&self, sql: &str) -> Option<Arc<MappedStatement>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(sql)
            .cloned()
    }
    pub fn get_or_map(&self, sql: &str) -> Result<Arc<MappedStatement>> {
        if let Some(mapped) = self.get(sql) {
            return Ok(mapped);
        }
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(mapped) = entries.get(sql) {
            return Ok(mapped.clone());
        }
        let mapped = Arc::new(map_parameters_checked(&self.dialect, sql)?);
        entries.insert(sql.to_owned(), mapped.clone());
        Ok(mapped)
    }
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
