use crate::MemoryConnection;
use bindery::{Driver, Executor, ParameterError, Value};

pub async fn rebind<D: Driver>(connection: &mut MemoryConnection<D>) {
    let mut statement = connection
        .driver()
        .statement("UPDATE dbtest SET title = :title, description = :title WHERE id = :id")
        .expect("Could not map the statement");

    // Nothing bound yet
    let error = connection
        .execute(&statement)
        .await
        .expect_err("Executing without bindings should fail");
    assert_eq!(
        error.downcast_ref::<ParameterError>(),
        Some(&ParameterError::MissingBinding(":title".into()))
    );
    assert!(connection.prepared.is_empty());

    statement
        .bind("title", "first")
        .bind(":id", 1)
        .bind(":unused", "ignored");
    connection
        .execute(&statement)
        .await
        .expect("Could not execute the statement");
    statement.bind(":title", "second").bind(":id", 2);
    connection
        .execute(&statement)
        .await
        .expect("Could not execute the statement");

    assert_eq!(connection.executed.len(), 2);
    let values = |i: usize| {
        connection.executed[i]
            .values
            .iter()
            .map(|v| v.value.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(
        values(0),
        [
            Value::Varchar(Some("first".into())),
            Value::Varchar(Some("first".into())),
            Value::Int64(Some(1)),
        ]
    );
    assert_eq!(
        values(1),
        [
            Value::Varchar(Some("second".into())),
            Value::Varchar(Some("second".into())),
            Value::Int64(Some(2)),
        ]
    );

    statement.unbind("id");
    let error = connection
        .execute(&statement)
        .await
        .expect_err("Executing after unbinding should fail");
    assert!(format!("{error:#}").contains("no value bound to parameter `:id`"));

    // A new text drops the previous bindings
    let dialect = connection.driver().dialect().clone();
    statement
        .prepare(&dialect, "DELETE FROM dbtest WHERE id = :id")
        .expect("Could not map the statement");
    assert!(statement.bindings().is_empty());
    assert_eq!(statement.rewritten(), "DELETE FROM dbtest WHERE id = ?");
    statement.bind(":id", 3);
    connection
        .execute(&statement)
        .await
        .expect("Could not execute the statement");
    assert_eq!(
        connection.last_execution().map(|v| v.values[0].value.clone()),
        Some(Value::Int64(Some(3)))
    );
}
