use crate::{
    CoercionTable, Dialect, NamedStatement, Result, Statements, split_script, write_escaped,
};

/// A backend, described by its SQL lexical rules and the way it wants values.
pub trait Driver: Send + Sync {
    const NAME: &'static str;

    fn dialect(&self) -> &Dialect;
    fn coercions(&self) -> &CoercionTable;

    /// Map a statement using this backend's dialect.
    fn statement(&self, sql: impl Into<String>) -> Result<NamedStatement> {
        NamedStatement::new(self.dialect(), sql)
    }

    /// Quote identifiers ("name") doubling inner quotes.
    fn write_identifier_quoted(&self, out: &mut String, value: &str) {
        out.push('"');
        write_escaped(out, value, '"', "\"\"");
        out.push('"');
    }

    fn split_script<'s>(&self, script: &'s str) -> Statements<'_, 's> {
        split_script(self.dialect(), script)
    }
}
