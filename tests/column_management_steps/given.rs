//! Given steps for column management BDD scenarios.

use super::world::ColumnWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::board::domain::{ColumnDraft, TaskDraft};

#[given("a new board")]
fn new_board(world: &mut ColumnWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.session.board().columns().len() == 3,
        "fresh board should hold the default columns"
    );
    Ok(())
}

#[given(r#"a column titled "{title}" has been added"#)]
fn column_added(world: &mut ColumnWorld, title: String) -> Result<(), eyre::Report> {
    world
        .session
        .add_column(&ColumnDraft::new(title))
        .wrap_err("add column in scenario setup")
}

#[given(r#"a task titled "{title}" in status "{status}""#)]
fn task_in_status(world: &mut ColumnWorld, title: String, status: String) -> Result<(), eyre::Report> {
    world
        .session
        .add_task(TaskDraft::new(title).with_status(status.as_str()))
        .ok_or_else(|| eyre::eyre!("task was not added"))?;
    Ok(())
}

#[given("{count:usize} extra columns have been added")]
fn extra_columns(world: &mut ColumnWorld, count: usize) -> Result<(), eyre::Report> {
    for index in 0..count {
        world
            .session
            .add_column(&ColumnDraft::new(format!("Extra {index}")))
            .wrap_err("add extra column in scenario setup")?;
    }
    Ok(())
}
