//! When steps for column management BDD scenarios.

use super::world::ColumnWorld;
use rstest_bdd_macros::when;
use taskboard::board::domain::ColumnDraft;

#[when(r#"a column titled "{title}" is added"#)]
fn add_column(world: &mut ColumnWorld, title: String) {
    let result = world.session.add_column(&ColumnDraft::new(title));
    world.last_result = Some(result);
}

#[when(r#"the column with status "{status}" is deleted"#)]
fn delete_column(world: &mut ColumnWorld, status: String) -> Result<(), eyre::Report> {
    let id = world.column_id(&status)?;
    let result = world.session.delete_column(&id, None);
    world.last_result = Some(result);
    Ok(())
}

#[when(r#"the column with status "{status}" is deleted into status "{target}""#)]
fn delete_column_into(
    world: &mut ColumnWorld,
    status: String,
    target: String,
) -> Result<(), eyre::Report> {
    let id = world.column_id(&status)?;
    let target_id = world.column_id(&target)?;
    let result = world.session.delete_column(&id, Some(&target_id));
    world.last_result = Some(result);
    Ok(())
}
