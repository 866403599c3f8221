use crate::{MemoryConnection, quote_name};
use bindery::{Driver, Executor, ParameterPositions, Value};

fn dbtest_query<D: Driver>(driver: &D, first: &str, second: &str) -> String {
    format!(
        "SELECT * FROM {} WHERE {} LIKE {} OR {} LIKE {}",
        quote_name(driver, "dbtest"),
        quote_name(driver, "title"),
        first,
        quote_name(driver, "description"),
        second,
    )
}

/// Named parameters appearing more than once bind one value to every occurrence.
pub async fn duplicate_key<D: Driver>(connection: &mut MemoryConnection<D>) {
    let sql = dbtest_query(connection.driver(), ":search", ":search");
    let mut statement = connection
        .driver()
        .statement(sql)
        .expect("Could not map the statement");
    assert_eq!(
        statement.mapping().get(":search"),
        Some(&ParameterPositions::Multiple(vec![0, 1]))
    );
    assert_eq!(statement.mapping().len(), 1);
    assert_eq!(statement.mapping().positions(), 2);
    assert_eq!(
        statement.rewritten(),
        dbtest_query(connection.driver(), "?", "?")
    );

    statement.bind(":search", "test");
    let result = connection
        .execute(&statement)
        .await
        .expect("Could not execute the statement");
    assert_eq!(result.rows_affected, 1);

    let execution = connection.last_execution().expect("Nothing was executed");
    assert_eq!(execution.sql, statement.rewritten());
    assert_eq!(execution.values.len(), 2);
    for bound in &execution.values {
        assert_eq!(bound.value, Value::Varchar(Some("test".into())));
    }
}

/// Regression: named parameters appearing once still map to a single position.
pub async fn single_key<D: Driver>(connection: &mut MemoryConnection<D>) {
    let sql = dbtest_query(connection.driver(), ":search", ":search2");
    let mut statement = connection
        .driver()
        .statement(sql)
        .expect("Could not map the statement");
    assert_eq!(
        statement.mapping().get(":search"),
        Some(&ParameterPositions::Single(0))
    );
    assert_eq!(
        statement.mapping().get(":search2"),
        Some(&ParameterPositions::Single(1))
    );
    assert!(statement.rewritten().ends_with("LIKE ?"));

    statement.bind(":search", "first").bind(":search2", "second");
    connection
        .execute(&statement)
        .await
        .expect("Could not execute the statement");

    let execution = connection.last_execution().expect("Nothing was executed");
    assert_eq!(
        execution
            .values
            .iter()
            .map(|v| v.value.clone())
            .collect::<Vec<_>>(),
        [
            Value::Varchar(Some("first".into())),
            Value::Varchar(Some("second".into())),
        ]
    );
}
