use bindery_core::{
    Coercion, CoercionTable, Dialect, Driver, ParameterType, Quote, write_escaped,
};
use std::sync::LazyLock;

static DIALECT: LazyLock<Dialect> = LazyLock::new(|| {
    Dialect::default()
        .with_quotes([Quote::Single, Quote::Double, Quote::Backtick])
        .with_backslash_escapes(true)
        .with_executable_comments(true)
});

// mysqli binds booleans and integers as "i", large objects as "b".
static COERCIONS: LazyLock<CoercionTable> = LazyLock::new(|| {
    CoercionTable::default()
        .with(ParameterType::Boolean, Coercion::Integer)
        .with(ParameterType::Integer, Coercion::Integer)
        .with(ParameterType::LargeObject, Coercion::Bytes)
        .with(ParameterType::Null, Coercion::Null)
});

#[derive(Clone, Copy, Default)]
pub struct MySQLDriver;
impl MySQLDriver {
    pub const fn new() -> Self {
        Self
    }
}

impl Driver for MySQLDriver {
    const NAME: &'static str = "mysql";

    fn dialect(&self) -> &Dialect {
        &DIALECT
    }

    fn coercions(&self) -> &CoercionTable {
        &COERCIONS
    }

    fn write_identifier_quoted(&self, out: &mut String, value: &str) {
        out.push('`');
        write_escaped(out, value, '`', "``");
        out.push('`');
    }
}
