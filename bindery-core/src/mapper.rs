use crate::{Dialect, Result, Scanner, SpanKind, scanner::validate, truncate_long};
use std::{
    collections::BTreeMap,
    fmt::{self, Display},
    slice,
};

/// Positions taken by one named parameter in the rewritten statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterPositions {
    /// The parameter appears exactly once.
    Single(usize),
    /// The parameter appears more than once, positions are strictly increasing.
    Multiple(Vec<usize>),
}

impl ParameterPositions {
    pub fn as_slice(&self) -> &[usize] {
        match self {
            ParameterPositions::Single(v) => slice::from_ref(v),
            ParameterPositions::Multiple(v) => v,
        }
    }
    pub fn first(&self) -> usize {
        match self {
            ParameterPositions::Single(v) => *v,
            ParameterPositions::Multiple(v) => v.first().copied().unwrap_or_default(),
        }
    }
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl From<Vec<usize>> for ParameterPositions {
    fn from(mut value: Vec<usize>) -> Self {
        if value.len() == 1 {
            ParameterPositions::Single(value.remove(0))
        } else {
            ParameterPositions::Multiple(value)
        }
    }
}

/// Names of the parameters (sigil included) and the positions they occupy.
///
/// Only [`map_parameters`] builds one, so every position from `0` to
/// [`ParameterKeyMapping::positions`] (excluded) belongs to exactly one name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterKeyMapping {
    entries: BTreeMap<String, ParameterPositions>,
    positions: usize,
}

impl ParameterKeyMapping {
    pub fn get(&self, name: &str) -> Option<&ParameterPositions> {
        self.entries.get(name)
    }
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    /// Number of placeholders in the rewritten statement.
    pub fn positions(&self) -> usize {
        self.positions
    }
    /// Entries sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterPositions)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
    /// Entries in the order their first occurrence appears in the statement.
    pub fn iter_ordered(&self) -> impl Iterator<Item = (&str, &ParameterPositions)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by_key(|(_, v)| v.first());
        entries.into_iter()
    }
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.iter_ordered().map(|(k, _)| k)
    }
    /// Name bound to the placeholder at `position`.
    pub fn name_at(&self, position: usize) -> Option<&str> {
        self.iter()
            .find(|(_, v)| v.as_slice().contains(&position))
            .map(|(k, _)| k)
    }
}

/// A statement rewritten with positional placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappedStatement {
    pub rewritten: String,
    pub mapping: ParameterKeyMapping,
}

impl MappedStatement {
    pub fn rewritten(&self) -> &str {
        &self.rewritten
    }
    pub fn mapping(&self) -> &ParameterKeyMapping {
        &self.mapping
    }
}

impl Display for MappedStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", truncate_long!(self.rewritten))
    }
}

/// Replaces every named parameter of `sql` with the dialect placeholder.
///
/// A parameter is the sigil followed by at least one ASCII letter, digit or
/// underscore, found in plain SQL. Quoted text and comments are copied
/// verbatim, and so is a sigil not followed by a name.
///
/// ```rust
/// use bindery_core::{Dialect, ParameterPositions, map_parameters};
/// let mapped = map_parameters(
///     &Dialect::default(),
///     "SELECT * FROM t WHERE a = :v OR b = :v AND c = ':v'",
/// );
/// assert_eq!(mapped.rewritten, "SELECT * FROM t WHERE a = ? OR b = ? AND c = ':v'");
/// assert_eq!(
///     mapped.mapping.get(":v"),
///     Some(&ParameterPositions::Multiple(vec![0, 1]))
/// );
/// ```
pub fn map_parameters(dialect: &Dialect, sql: &str) -> MappedStatement {
    let mut buffer = [0; 4];
    let sigil = dialect.sigil.encode_utf8(&mut buffer).as_bytes();
    let mut rewritten = String::with_capacity(sql.len());
    let mut occurrences: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    let mut position = 0;
    for span in Scanner::new(dialect, sql) {
        let text = span.as_str(sql);
        if span.kind != SpanKind::Plain {
            rewritten.push_str(text);
            continue;
        }
        let bytes = text.as_bytes();
        let mut copied = 0;
        let mut i = 0;
        while i < bytes.len() {
            if !bytes[i..].starts_with(sigil) {
                i += 1;
                continue;
            }
            let name_start = i + sigil.len();
            let name_end = name_start
                + bytes[name_start..]
                    .iter()
                    .take_while(|c| Dialect::is_identifier_byte(**c))
                    .count();
            if name_end > name_start {
                rewritten.push_str(&text[copied..i]);
                rewritten.push_str(&dialect.placeholder);
                occurrences
                    .entry(text[i..name_end].to_owned())
                    .or_default()
                    .push(position);
                position += 1;
                copied = name_end;
            }
            i = name_end;
        }
        rewritten.push_str(&text[copied..]);
    }
    log::debug!(
        "Mapped {} named parameters over {} positions",
        occurrences.len(),
        position
    );
    MappedStatement {
        rewritten,
        mapping: ParameterKeyMapping {
            entries: occurrences
                .into_iter()
                .map(|(k, v)| (k, v.into()))
                .collect(),
            positions: position,
        },
    }
}

/// Like [`map_parameters`], rejecting unterminated quotes and comments when the
/// dialect is strict.
pub fn map_parameters_checked(dialect: &Dialect, sql: &str) -> Result<MappedStatement> {
    if dialect.strict {
        validate(dialect, sql).map_err(|e| {
            let error = anyhow::Error::new(e).context(format!(
                "Cannot map the parameters of query:\n{}",
                truncate_long!(sql)
            ));
            log::error!("{:#}", error);
            error
        })?;
    }
    Ok(map_parameters(dialect, sql))
}
