//! Then steps for column management BDD scenarios.

use super::world::ColumnWorld;
use rstest_bdd_macros::then;

#[then("the board has {count:usize} columns")]
fn board_has_columns(world: &ColumnWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.session.board().columns().len();
    if actual != count {
        return Err(eyre::eyre!("expected {count} columns, found {actual}"));
    }
    Ok(())
}

#[then(r#"the column orders are "{orders}""#)]
fn column_orders_are(world: &ColumnWorld, orders: String) -> Result<(), eyre::Report> {
    let actual = world
        .session
        .board()
        .columns()
        .iter()
        .map(|column| column.order().to_string())
        .collect::<Vec<_>>()
        .join(",");
    if actual != orders {
        return Err(eyre::eyre!("expected orders {orders}, found {actual}"));
    }
    Ok(())
}

#[then(r#"the operation fails with "{message}""#)]
fn operation_fails_with(world: &ColumnWorld, message: String) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;

    match result {
        Err(err) if err.to_string() == message => Ok(()),
        other => Err(eyre::eyre!("expected failure \"{message}\", got {other:?}")),
    }
}

#[then(r#"the task "{title}" has status "{status}""#)]
fn task_has_status(world: &ColumnWorld, title: String, status: String) -> Result<(), eyre::Report> {
    let task = world
        .session
        .board()
        .tasks()
        .iter()
        .find(|task| task.title() == title)
        .ok_or_else(|| eyre::eyre!("missing task {title}"))?;

    if task.status().as_str() != status {
        return Err(eyre::eyre!(
            "expected status {status}, found {}",
            task.status()
        ));
    }
    Ok(())
}
