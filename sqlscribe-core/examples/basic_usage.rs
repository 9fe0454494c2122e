use sqlscribe_core::{
    build_delete, build_insert, build_update, delete, op, to_xml_capable_query, BuilderConfig,
    ColumnType, InsertStrategy, LineEnding, QueryBuilder, SqlBuilder, StatementRequest,
};

fn main() -> sqlscribe_core::Result<()> {
    // INSERT, one VALUES line per row
    let insert_sql = build_insert(
        "users",
        &["id", "name", "created_at"],
        &[ColumnType::Int32, ColumnType::String, ColumnType::DateTime],
        &[["1", "John Doe", "2024-01-15"], ["2", "Jane Roe", "2024-02-01"]],
        InsertStrategy::ValuesList,
    )?;
    println!("INSERT SQL:\n{insert_sql}");

    // INSERT ... SELECT ... UNION ... for the same rows
    let union_sql = build_insert(
        "users",
        &["id", "name"],
        &[ColumnType::Int32, ColumnType::String],
        &[["3", "Ann"], ["4", "Bob"], ["5", "Cy"]],
        InsertStrategy::SelectUnion,
    )?;
    println!("INSERT/UNION SQL:\n{union_sql}");

    // UPDATE with a predicate chain; the last operator is never rendered
    let update_sql = build_update(
        "users",
        &["email"],
        &["newemail@example.com"],
        &[ColumnType::String],
        &["id", "deleted_at"],
        &["123", "IS NULL"],
        &[ColumnType::Int32, ColumnType::DateTime],
        &[op::AND, op::AND],
    )?;
    println!("UPDATE SQL:\n{update_sql}");

    // DELETE with OR
    let delete_sql = build_delete(
        "sessions",
        &["user_id", "expired"],
        &["13", "true"],
        &[ColumnType::Int32, ColumnType::Boolean],
        &[op::OR, op::AND],
    )?;
    println!("DELETE SQL:\n{delete_sql}");

    // Fluent builder form
    let fluent = delete("audit")
        .where_(&["id"], &["9"], &[ColumnType::Int64])
        .join_operators(&[op::AND])
        .to_sql()?;
    println!("Fluent DELETE SQL:\n{fluent}");

    // Rejected input never produces text
    match build_delete(
        "users",
        &["name"],
        &["x'; DROP TABLE users; --"],
        &[ColumnType::String],
        &[op::AND],
    ) {
        Ok(sql) => println!("unexpected: {sql}"),
        Err(err) => println!("Rejected: {err}"),
    }

    // XML wrapper
    println!("{}", to_xml_capable_query("SELECT id, name FROM users FOR XML AUTO")?);

    // Windows line endings and a JSON request
    let builder = SqlBuilder::new(BuilderConfig::default().with_line_ending(LineEnding::CrLf));
    let request = StatementRequest::from_json(
        r#"{"operation":"delete","table":"users","columns":["id"],"values":["7"],"types":["int"],"join_operators":["AND"]}"#,
    )?;
    print!("{}", builder.build_request(&request)?);

    Ok(())
}
