#[cfg(test)]
mod tests {
    use bindery_core::{Driver, ParameterPositions};
    use bindery_sqlite::SQLiteDriver;
    use bindery_tests::{execute_tests, init_logs};
    use indoc::indoc;

    #[tokio::test]
    async fn sqlite() {
        init_logs();
        execute_tests(SQLiteDriver::new()).await;
    }

    #[test]
    fn hash_is_not_a_comment() {
        let driver = SQLiteDriver::new();
        let statement = driver.statement("SELECT :a # :b").unwrap();
        assert_eq!(
            statement.mapping().get(":b"),
            Some(&ParameterPositions::Single(1))
        );
    }

    #[test]
    fn every_identifier_quote() {
        let driver = SQLiteDriver::new();
        let statements: Vec<_> = driver
            .split_script(indoc! {r#"
                CREATE TABLE "a;b" ([c;d] TEXT, `e;f` TEXT);
                INSERT INTO "a;b" VALUES (':x;', ':y');
            "#})
            .collect();
        assert_eq!(
            statements,
            [
                r#"CREATE TABLE "a;b" ([c;d] TEXT, `e;f` TEXT)"#,
                r#"INSERT INTO "a;b" VALUES (':x;', ':y')"#,
            ]
        );
        assert!(driver.statement(statements[1]).unwrap().mapping().is_empty());
    }

    #[test]
    fn identifiers() {
        let mut out = String::new();
        SQLiteDriver::new().write_identifier_quoted(&mut out, "odd\"name");
        assert_eq!(out, "\"odd\"\"name\"");
    }
}
