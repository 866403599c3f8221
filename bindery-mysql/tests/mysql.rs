#[cfg(test)]
mod tests {
    use bindery_core::{Driver, ParameterPositions, SpanKind, Scanner};
    use bindery_mysql::MySQLDriver;
    use bindery_tests::{execute_tests, init_logs};

    #[tokio::test]
    async fn mysql() {
        init_logs();
        execute_tests(MySQLDriver::new()).await;
    }

    #[test]
    fn executable_comments_are_sql() {
        let driver = MySQLDriver::new();
        let statements: Vec<_> = driver
            .split_script("/*!40101 SET NAMES utf8 */;\n/* plain comment */;\nSELECT /*+ BKA(t) */ 1;")
            .collect();
        assert_eq!(
            statements,
            ["/*!40101 SET NAMES utf8 */", "SELECT /*+ BKA(t) */ 1"]
        );
        let statement = driver
            .statement("SELECT /*+ MAX_EXECUTION_TIME(:ms) */ * FROM t /* :no */")
            .unwrap();
        assert_eq!(
            statement.mapping().get(":ms"),
            Some(&ParameterPositions::Single(0))
        );
        assert!(!statement.mapping().contains(":no"));
    }

    #[test]
    fn backslash_runs() {
        let driver = MySQLDriver::new();
        let sql = r"SELECT 'a\\', :b, 'c\\\'d'";
        let kinds: Vec<_> = Scanner::new(driver.dialect(), sql)
            .map(|span| (span.kind, span.as_str(sql)))
            .collect();
        assert_eq!(
            kinds,
            [
                (SpanKind::Plain, "SELECT "),
                (SpanKind::SingleQuoted, r"'a\\'"),
                (SpanKind::Plain, ", :b, "),
                (SpanKind::SingleQuoted, r"'c\\\'d'"),
            ]
        );
    }

    #[test]
    fn identifiers() {
        let mut out = String::new();
        MySQLDriver::new().write_identifier_quoted(&mut out, "odd`name");
        assert_eq!(out, "`odd``name`");
    }
}
