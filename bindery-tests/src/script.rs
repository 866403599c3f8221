use crate::MemoryConnection;
use bindery::{Driver, Executor, Quote, stream::StreamExt};
use indoc::indoc;
use std::pin::pin;

const SCHEMA: &str = indoc! {"
    -- Schema for the named parameter tests
    DROP TABLE IF EXISTS dbtest;

    CREATE TABLE dbtest (
      id INTEGER PRIMARY KEY,
      title VARCHAR(50) NOT NULL, -- shown in lists
      start_date TIMESTAMP NOT NULL,
      description TEXT NOT NULL
    );
    /* seed data; one row per test */
    INSERT INTO dbtest VALUES (1, 'Testing1', '2019-10-26 00:00:00', 'one; two');
    INSERT INTO dbtest VALUES (2, 'Testing2', '2019-10-26 00:00:00', 'it''s -- not a comment');
    ;;
    -- trailing comment
"};

pub async fn script<D: Driver>(connection: &mut MemoryConnection<D>) {
    let result = connection
        .execute_script(SCHEMA)
        .await
        .expect("Could not load the schema");
    assert_eq!(result.rows_affected, 4);
    assert_eq!(
        connection.unprepared,
        [
            "DROP TABLE IF EXISTS dbtest",
            indoc! {"
                CREATE TABLE dbtest (
                  id INTEGER PRIMARY KEY,
                  title VARCHAR(50) NOT NULL, -- shown in lists
                  start_date TIMESTAMP NOT NULL,
                  description TEXT NOT NULL
                )"},
            "INSERT INTO dbtest VALUES (1, 'Testing1', '2019-10-26 00:00:00', 'one; two')",
            "INSERT INTO dbtest VALUES (2, 'Testing2', '2019-10-26 00:00:00', 'it''s -- not a comment')",
        ]
    );

    let statements: Vec<_> = connection
        .driver()
        .split_script("-- only\n/* comments */\n  ;\n\t")
        .collect();
    assert!(statements.is_empty());

    let statements: Vec<_> = connection
        .driver()
        .split_script("INSERT INTO t VALUES (1); -- comment\nINSERT INTO t VALUES (2);\n")
        .collect();
    assert_eq!(
        statements,
        ["INSERT INTO t VALUES (1)", "INSERT INTO t VALUES (2)"]
    );

    let statements: Vec<_> = connection
        .driver()
        .split_script("SELECT 1;SELECT 'unterminated; still the same")
        .collect();
    assert_eq!(
        statements,
        ["SELECT 1", "SELECT 'unterminated; still the same"]
    );

    let dialect = connection.driver().dialect();
    if dialect.line_comments.iter().any(|v| v == "#") {
        let statements: Vec<_> = connection
            .driver()
            .split_script("# header; ignored\nSELECT * FROM #__users;\n# footer")
            .collect();
        assert_eq!(statements, ["SELECT * FROM #__users"]);
    }
    if dialect.quotes.contains(&Quote::Backtick) {
        let statements: Vec<_> = connection
            .driver()
            .split_script("SELECT `a;b` FROM t; SELECT 2")
            .collect();
        assert_eq!(statements, ["SELECT `a;b` FROM t", "SELECT 2"]);
    }
    if dialect.quotes.contains(&Quote::Bracket) {
        let statements: Vec<_> = connection
            .driver()
            .split_script("SELECT [a;b] FROM t; SELECT 2")
            .collect();
        assert_eq!(statements, ["SELECT [a;b] FROM t", "SELECT 2"]);
    }
    if dialect.backslash_escapes {
        let statements: Vec<_> = connection
            .driver()
            .split_script(r"INSERT INTO t VALUES ('a\';b'); SELECT 2")
            .collect();
        assert_eq!(statements, [r"INSERT INTO t VALUES ('a\';b')", "SELECT 2"]);
    }
}

/// A failing statement stops the script, the previous ones already ran.
pub async fn script_failure<D: Driver>(connection: &mut MemoryConnection<D>) {
    connection.fail_on = Some("broken".into());
    let script = "CREATE TABLE a (id INTEGER); INSERT INTO broken VALUES (1); DROP TABLE a;";
    {
        let mut results = pin!(connection.run_script(script));
        assert!(matches!(results.next().await, Some(Ok(..))));
        assert!(matches!(results.next().await, Some(Err(..))));
        assert!(results.next().await.is_none());
    }
    assert_eq!(connection.unprepared, ["CREATE TABLE a (id INTEGER)"]);

    let error = connection
        .execute_script(script)
        .await
        .expect_err("The script should fail");
    assert!(format!("{error:#}").contains("INSERT INTO broken VALUES (1)"));
}
