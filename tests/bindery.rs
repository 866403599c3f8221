#[cfg(test)]
mod tests {
    use bindery::{
        AsValue, BoundValue, Coercion, CoercionTable, Dialect, Driver, Error, Executor,
        ParameterType, Prepared, Quote, Result, RowsAffected, Value, truncate_long,
    };
    use indoc::indoc;
    use rust_decimal::Decimal;
    use std::{
        fmt::{self, Display, Formatter},
        sync::LazyLock,
    };
    use time::macros::{date, datetime};
    use uuid::Uuid;

    static DIALECT: LazyLock<Dialect> = LazyLock::new(|| {
        Dialect::default()
            .with_quotes([Quote::Single, Quote::Double])
            .with_line_comments(["--"])
            .with_placeholder("$?")
    });
    static COERCIONS: LazyLock<CoercionTable> = LazyLock::new(|| {
        CoercionTable::default()
            .with(ParameterType::String, Coercion::Text)
            .with(ParameterType::Boolean, Coercion::Text)
    });

    /// Backend that accepts only text parameters.
    #[derive(Clone, Copy)]
    struct TextDriver;

    impl Driver for TextDriver {
        const NAME: &'static str = "text";

        fn dialect(&self) -> &Dialect {
            &DIALECT
        }
        fn coercions(&self) -> &CoercionTable {
            &COERCIONS
        }
    }

    struct TextPrepared {
        sql: String,
        values: Vec<Option<String>>,
    }

    impl Prepared for TextPrepared {
        fn clear_bindings(&mut self) -> Result<&mut Self> {
            self.values.clear();
            Ok(self)
        }
        fn bind(&mut self, value: impl AsValue) -> Result<&mut Self> {
            let index = self.values.len() as u64;
            self.bind_index(BoundValue::new(value), index)
        }
        fn bind_index(&mut self, value: BoundValue, index: u64) -> Result<&mut Self> {
            let index = index as usize;
            if self.values.len() <= index {
                self.values.resize(index + 1, None);
            }
            self.values[index] = value.value.to_text();
            Ok(self)
        }
    }

    impl Display for TextPrepared {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            write!(f, "{}", truncate_long!(self.sql))
        }
    }

    #[derive(Default)]
    struct TextConnection {
        log: Vec<(String, Vec<Option<String>>)>,
    }

    impl Executor for TextConnection {
        type Driver = TextDriver;
        type Prepared = TextPrepared;

        fn driver(&self) -> &Self::Driver {
            &TextDriver
        }

        async fn prepare(&mut self, sql: String) -> Result<Self::Prepared> {
            Ok(TextPrepared {
                sql,
                values: Vec::new(),
            })
        }

        async fn run(&mut self, prepared: &mut Self::Prepared) -> Result<RowsAffected> {
            self.log
                .push((prepared.sql.clone(), prepared.values.clone()));
            Ok(RowsAffected {
                rows_affected: 1,
                last_affected_id: None,
            })
        }

        async fn run_unprepared(&mut self, sql: String) -> Result<RowsAffected> {
            if sql.is_empty() {
                return Err(Error::msg("Empty statement"));
            }
            self.log.push((sql, Vec::new()));
            Ok(RowsAffected {
                rows_affected: 2,
                last_affected_id: Some(7),
            })
        }
    }

    #[tokio::test]
    async fn every_value_as_text() {
        let mut connection = TextConnection::default();
        let mut statement = TextDriver
            .statement(indoc! {"
                INSERT INTO trade (id, price, day, at, ok, note, missing)
                VALUES (:id, :price, :day, :at, :ok, :note, :missing) -- :ignored
            "})
            .expect("Could not map the statement");
        statement
            .bind(
                "id",
                Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap(),
            )
            .bind("price", Decimal::new(1999, 2))
            .bind("day", date!(2025-01-17))
            .bind("at", datetime!(2025-01-17 12:30:00))
            .bind("ok", true)
            .bind("note", "it's")
            .bind("missing", Option::<i64>::None);
        let result = connection
            .execute(&statement)
            .await
            .expect("Could not execute");
        assert_eq!(result.rows_affected, 1);
        let (sql, values) = &connection.log[0];
        assert_eq!(
            sql,
            indoc! {"
                INSERT INTO trade (id, price, day, at, ok, note, missing)
                VALUES ($?, $?, $?, $?, $?, $?, $?) -- :ignored
            "}
        );
        assert_eq!(
            values,
            &[
                Some("67e55044-10b1-426f-9247-bb680e5fe0c8".to_owned()),
                Some("19.99".to_owned()),
                Some("2025-01-17".to_owned()),
                Some("2025-01-17 12:30:00.0".to_owned()),
                Some("1".to_owned()),
                Some("it's".to_owned()),
                None,
            ]
        );
    }

    #[tokio::test]
    async fn missing_value_is_reported() {
        let mut connection = TextConnection::default();
        let mut statement = TextDriver
            .statement("UPDATE t SET a = :a WHERE b = :b")
            .unwrap();
        statement.bind("b", 1);
        let error = connection.execute(&statement).await.unwrap_err();
        let message = format!("{error:#}");
        assert!(message.contains("Cannot bind the parameters of query"));
        assert!(message.contains("`:a`"));
        assert!(connection.log.is_empty());
    }

    #[tokio::test]
    async fn script_totals() {
        let mut connection = TextConnection::default();
        let total = connection
            .execute_script("CREATE TABLE a (x INT); -- a\n INSERT INTO a VALUES (1);")
            .await
            .unwrap();
        assert_eq!(
            total,
            RowsAffected {
                rows_affected: 4,
                last_affected_id: Some(7),
            }
        );
        assert_eq!(connection.log.len(), 2);
    }

    #[test]
    fn value_conversions_through_the_facade() {
        let value: Value = datetime!(2025-01-17 12:30:00).into();
        assert_eq!(ParameterType::infer(&value), ParameterType::String);
        assert_eq!(
            COERCIONS.apply(BoundValue::new(false)).value,
            Value::Varchar(Some("0".into()))
        );
    }
}
