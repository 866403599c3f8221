use bindery_core::{Coercion, CoercionTable, Dialect, Driver, ParameterType};
use std::sync::LazyLock;

static DIALECT: LazyLock<Dialect> =
    LazyLock::new(|| Dialect::default().with_line_comments(["--"]));

static COERCIONS: LazyLock<CoercionTable> = LazyLock::new(|| {
    CoercionTable::default()
        .with(ParameterType::Boolean, Coercion::Integer)
        .with(ParameterType::LargeObject, Coercion::Bytes)
        .with(ParameterType::Null, Coercion::Null)
});

#[derive(Clone, Copy, Default)]
pub struct SQLiteDriver;
impl SQLiteDriver {
    pub const fn new() -> Self {
        Self
    }
}

impl Driver for SQLiteDriver {
    const NAME: &'static str = "sqlite";

    fn dialect(&self) -> &Dialect {
        &DIALECT
    }

    fn coercions(&self) -> &CoercionTable {
        &COERCIONS
    }
}
