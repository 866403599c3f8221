use crate::{
    Driver, Error, NamedStatement, Prepared, Result, split_script,
    stream::{Stream, TryStreamExt},
    truncate_long,
};
use async_stream::try_stream;
use std::future::Future;

/// Metadata about modify operations (INSERT/UPDATE/DELETE).
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowsAffected {
    /// Total number of rows impacted.
    pub rows_affected: u64,
    /// Backend-specific last inserted / affected identifier when available.
    pub last_affected_id: Option<i64>,
}

impl Extend<RowsAffected> for RowsAffected {
    fn extend<T: IntoIterator<Item = RowsAffected>>(&mut self, iter: T) {
        for elem in iter {
            self.rows_affected += elem.rows_affected;
            if elem.last_affected_id.is_some() {
                self.last_affected_id = elem.last_affected_id;
            }
        }
    }
}

/// The connection side of a backend.
///
/// Implementors provide the native calls: preparing positional SQL, running a
/// prepared handle and running raw SQL. Named parameters and scripts are built
/// on top of those by the provided methods.
pub trait Executor: Send + Sized {
    type Driver: Driver;
    type Prepared: Prepared;

    fn driver(&self) -> &Self::Driver;

    /// Prepare SQL that uses positional placeholders only.
    fn prepare(&mut self, sql: String) -> impl Future<Output = Result<Self::Prepared>> + Send;

    /// Run a prepared statement with the values currently bound to it.
    fn run(
        &mut self,
        prepared: &mut Self::Prepared,
    ) -> impl Future<Output = Result<RowsAffected>> + Send;

    /// Run a single statement without parameters.
    fn run_unprepared(&mut self, sql: String) -> impl Future<Output = Result<RowsAffected>> + Send;

    /// Resolve the bindings of `statement`, prepare its rewritten text and run it.
    fn execute(
        &mut self,
        statement: &NamedStatement,
    ) -> impl Future<Output = Result<RowsAffected>> + Send {
        async move {
            let values = statement
                .resolve(self.driver().coercions())
                .map_err(|e| {
                    let error = Error::new(e).context(format!(
                        "Cannot bind the parameters of query:\n{}",
                        truncate_long!(statement.sql())
                    ));
                    log::error!("{:#}", error);
                    error
                })?;
            let mut prepared = self.prepare(statement.rewritten().to_owned()).await?;
            prepared.clear_bindings()?;
            for (index, value) in values.into_iter().enumerate() {
                prepared.bind_index(value, index as u64)?;
            }
            self.run(&mut prepared).await
        }
    }

    /// Split `script` and run its statements in order, one result per statement.
    ///
    /// The stream stops at the first failing statement.
    fn run_script<'s>(
        &'s mut self,
        script: &'s str,
    ) -> impl Stream<Item = Result<RowsAffected>> + Send + 's {
        try_stream! {
            let dialect = self.driver().dialect().clone();
            for sql in split_script(&dialect, script) {
                let affected = self.run_unprepared(sql.to_owned()).await.map_err(|e| {
                    let error = e.context(format!(
                        "While running the script statement:\n{}",
                        truncate_long!(sql)
                    ));
                    log::error!("{:#}", error);
                    error
                })?;
                yield affected;
            }
        }
    }

    /// Run every statement of `script`, returns the aggregated rows affected.
    fn execute_script<'s>(
        &'s mut self,
        script: &'s str,
    ) -> impl Future<Output = Result<RowsAffected>> + Send + 's {
        self.run_script(script).try_collect()
    }
}
