use bindery_core::{
    Coercion, CoercionTable, Dialect, Driver, ParameterType, Quote, write_escaped,
};
use std::sync::LazyLock;

static DIALECT: LazyLock<Dialect> = LazyLock::new(|| {
    Dialect::default()
        .with_quotes([Quote::Single, Quote::Double, Quote::Bracket])
        .with_line_comments(["--"])
});

// The native driver sends everything but integers and binary streams as strings.
static COERCIONS: LazyLock<CoercionTable> = LazyLock::new(|| {
    CoercionTable::default()
        .with(ParameterType::Boolean, Coercion::Integer)
        .with(ParameterType::Integer, Coercion::Integer)
        .with(ParameterType::LargeObject, Coercion::Bytes)
        .with(ParameterType::Null, Coercion::Null)
        .with(ParameterType::String, Coercion::Text)
});

#[derive(Clone, Copy, Default)]
pub struct SqlServerDriver;
impl SqlServerDriver {
    pub const fn new() -> Self {
        Self
    }
}

impl Driver for SqlServerDriver {
    const NAME: &'static str = "sqlsrv";

    fn dialect(&self) -> &Dialect {
        &DIALECT
    }

    fn coercions(&self) -> &CoercionTable {
        &COERCIONS
    }

    /// Quote identifiers as `[name]`, doubling inner `]` the way SQL Server reads them.
    ///
    /// The scanner closes a bracket span at the first `]`, so a name containing
    /// one scans as a shorter identifier followed by plain text.
    fn write_identifier_quoted(&self, out: &mut String, value: &str) {
        out.push('[');
        write_escaped(out, value, ']', "]]");
        out.push(']');
    }
}
