use crate::MemoryConnection;
use bindery::{Driver, Executor, ParameterPositions, Quote};

fn names<D: Driver>(driver: &D, sql: &str) -> Vec<String> {
    driver
        .statement(sql)
        .expect("Could not map the statement")
        .mapping()
        .names()
        .map(ToOwned::to_owned)
        .collect()
}

pub async fn quoting<D: Driver>(connection: &mut MemoryConnection<D>) {
    let driver = connection.driver();

    assert!(names(driver, "SELECT * FROM t WHERE col = ':notparam'").is_empty());
    assert!(names(driver, "SELECT \":notparam\" FROM t").is_empty());
    assert!(names(driver, "SELECT 1 -- :notparam").is_empty());
    assert!(names(driver, "SELECT /* :notparam */ 1").is_empty());
    assert!(names(driver, "SELECT 'it''s :notparam' FROM t").is_empty());
    assert!(names(driver, "SELECT ':' || col FROM t WHERE a = : AND b = ':x").is_empty());
    assert_eq!(
        names(driver, "SELECT ':a', :b, ':c', :d /* :e */ -- :f\n, :g"),
        [":b", ":d", ":g"]
    );
    let dialect = driver.dialect();
    if dialect.quotes.contains(&Quote::Backtick) {
        assert_eq!(names(driver, "SELECT `:a`, :b FROM t"), [":b"]);
    } else {
        assert_eq!(names(driver, "SELECT `a`, :b FROM t"), [":b"]);
    }
    if dialect.quotes.contains(&Quote::Bracket) {
        assert_eq!(names(driver, "SELECT [:a], :b FROM t"), [":b"]);
    }
    if dialect.line_comments.iter().any(|v| v == "#") {
        assert_eq!(names(driver, "SELECT :a # :b\nFROM #__t"), [":a"]);
    } else {
        assert_eq!(names(driver, "SELECT :a # :b\nFROM #__t"), [":a", ":b"]);
    }
    if dialect.backslash_escapes {
        assert_eq!(names(driver, r"SELECT 'it\'s :a', :b FROM t"), [":b"]);
    } else {
        assert_eq!(names(driver, r"SELECT 'C:\', :b FROM t"), [":b"]);
    }

    let statement = driver
        .statement("SELECT :Case, :case, :case")
        .expect("Could not map the statement");
    assert_eq!(
        statement.mapping().get(":Case"),
        Some(&ParameterPositions::Single(0))
    );
    assert_eq!(
        statement.mapping().get(":case"),
        Some(&ParameterPositions::Multiple(vec![1, 2]))
    );
}
