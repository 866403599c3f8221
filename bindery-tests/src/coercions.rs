use crate::MemoryConnection;
use bindery::{Driver, Executor, ParameterType, Value};

pub async fn coercions<D: Driver>(connection: &mut MemoryConnection<D>) {
    let mut statement = connection
        .driver()
        .statement("INSERT INTO flags (active, note, payload) VALUES (:active, :note, :payload)")
        .expect("Could not map the statement");
    statement
        .bind(":active", true)
        .bind_typed(":note", "anything", ParameterType::Null)
        .bind_typed(":payload", "bytes", ParameterType::LargeObject);
    connection
        .execute(&statement)
        .await
        .expect("Could not execute the statement");
    let execution = connection.last_execution().expect("Nothing was executed");
    assert_eq!(execution.values[0].value, Value::Int64(Some(1)));
    assert_eq!(execution.values[0].ty, ParameterType::Boolean);
    assert_eq!(execution.values[1].value, Value::Null);
    assert_eq!(
        execution.values[2].value,
        Value::Blob(Some(b"bytes".to_vec().into_boxed_slice()))
    );

    // Rebinding the boolean changes it at every position
    let mut statement = connection
        .driver()
        .statement("SELECT * FROM flags WHERE active = :active OR :active IS NULL")
        .expect("Could not map the statement");
    statement.bind(":active", false);
    connection
        .execute(&statement)
        .await
        .expect("Could not execute the statement");
    let values: Vec<_> = connection
        .last_execution()
        .expect("Nothing was executed")
        .values
        .iter()
        .map(|v| v.value.clone())
        .collect();
    assert_eq!(values, [Value::Int64(Some(0)), Value::Int64(Some(0))]);
}
