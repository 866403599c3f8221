use bindery::{
    AsValue, BoundValue, Driver, Error, Executor, Prepared, Result, RowsAffected, Scanner,
    SpanKind, truncate_long,
};
use std::fmt::{self, Display, Formatter};

/// One run of a prepared statement as seen by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Execution {
    pub sql: String,
    pub values: Vec<BoundValue>,
}

/// Prepared handle of [`MemoryConnection`], it knows only positional parameters.
#[derive(Debug)]
pub struct MemoryPrepared {
    pub(crate) sql: String,
    pub(crate) params: Vec<Option<BoundValue>>,
    pub(crate) index: u64,
}

impl MemoryPrepared {
    pub fn sql(&self) -> &str {
        &self.sql
    }
    pub fn num_params(&self) -> usize {
        self.params.len()
    }
}

impl Prepared for MemoryPrepared {
    fn clear_bindings(&mut self) -> Result<&mut Self> {
        self.params.iter_mut().for_each(|v| *v = None);
        self.index = 0;
        Ok(self)
    }
    fn bind(&mut self, value: impl AsValue) -> Result<&mut Self> {
        self.bind_index(BoundValue::new(value), self.index)
    }
    fn bind_index(&mut self, value: BoundValue, index: u64) -> Result<&mut Self> {
        let len = self.params.len();
        let target = self.params.get_mut(index as usize).ok_or(Error::msg(format!(
            "Index {index} cannot be bound, the query has only {len} parameters"
        )))?;
        *target = Some(value);
        self.index = index + 1;
        Ok(self)
    }
}

impl Display for MemoryPrepared {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", truncate_long!(self.sql))
    }
}

/// A connection that records what a real backend would receive.
///
/// Preparing counts the placeholders of the SQL independently from the mapper,
/// running fails if any of them is left unbound.
pub struct MemoryConnection<D: Driver> {
    driver: D,
    /// Text of every prepared statement.
    pub prepared: Vec<String>,
    /// Every prepared statement run, with its values.
    pub executed: Vec<Execution>,
    /// Every statement run without parameters.
    pub unprepared: Vec<String>,
    /// Unprepared statements containing this text fail.
    pub fail_on: Option<String>,
}

impl<D: Driver> MemoryConnection<D> {
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            prepared: Vec::new(),
            executed: Vec::new(),
            unprepared: Vec::new(),
            fail_on: None,
        }
    }

    pub fn count_placeholders(&self, sql: &str) -> usize {
        let placeholder = self.driver.dialect().placeholder.as_str();
        Scanner::new(self.driver.dialect(), sql)
            .filter(|span| span.kind == SpanKind::Plain)
            .map(|span| span.as_str(sql).matches(placeholder).count())
            .sum()
    }

    pub fn last_execution(&self) -> Option<&Execution> {
        self.executed.last()
    }
}

impl<D: Driver> Executor for MemoryConnection<D> {
    type Driver = D;
    type Prepared = MemoryPrepared;

    fn driver(&self) -> &Self::Driver {
        &self.driver
    }

    async fn prepare(&mut self, sql: String) -> Result<Self::Prepared> {
        let count = self.count_placeholders(&sql);
        log::debug!("Preparing {} parameters:\n{}", count, truncate_long!(sql));
        self.prepared.push(sql.clone());
        Ok(MemoryPrepared {
            sql,
            params: vec![None; count],
            index: 0,
        })
    }

    async fn run(&mut self, prepared: &mut Self::Prepared) -> Result<RowsAffected> {
        let values = prepared
            .params
            .iter()
            .enumerate()
            .map(|(i, v)| {
                v.clone().ok_or_else(|| {
                    Error::msg(format!("Parameter {i} was not bound")).context(format!(
                        "While running the query:\n{}",
                        truncate_long!(prepared.sql)
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        self.executed.push(Execution {
            sql: prepared.sql.clone(),
            values,
        });
        Ok(RowsAffected {
            rows_affected: 1,
            last_affected_id: Some(self.executed.len() as i64),
        })
    }

    async fn run_unprepared(&mut self, sql: String) -> Result<RowsAffected> {
        if let Some(fail) = &self.fail_on {
            if sql.contains(fail.as_str()) {
                let error = Error::msg(format!("Statement rejected: {}", truncate_long!(sql)));
                log::error!("{:#}", error);
                return Err(error);
            }
        }
        self.unprepared.push(sql);
        Ok(RowsAffected {
            rows_affected: 1,
            last_affected_id: None,
        })
    }
}
