//! In-memory integration tests for board session workflows.

use super::helpers::{column_id_for, open_session, store};
use rstest::rstest;
use taskboard::board::{
    adapters::InMemoryKeyValueStore,
    domain::{BoardOperationError, ColumnDraft, StatusKey, TaskDraft, TaskPriority},
    registry::tasks,
    services::SeedMode,
};

#[rstest]
fn custom_column_workflow_survives_reopening(
    store: InMemoryKeyValueStore,
) -> Result<(), eyre::Report> {
    let mut session = open_session(&store, SeedMode::Blank);
    session.add_column(&ColumnDraft::new("Review").with_color("#8b5cf6"))?;
    let review = column_id_for(&session, "review")?;
    let task_id = session
        .add_task(TaskDraft::new("Check PR").with_status("review"))
        .ok_or_else(|| eyre::eyre!("task was not added"))?
        .id()
        .clone();

    session.delete_column(&review, None)?;

    let reopened = open_session(&store, SeedMode::Blank);
    let board = reopened.board();
    eyre::ensure!(board.columns().len() == 3, "review column removed");
    let orders: Vec<usize> = board.columns().iter().map(|col| col.order()).collect();
    eyre::ensure!(orders == [0, 1, 2], "orders renumbered: {orders:?}");
    let task = board
        .task(&task_id)
        .ok_or_else(|| eyre::eyre!("task survived column deletion"))?;
    eyre::ensure!(task.status().as_str() == "todo", "task moved to first column");
    Ok(())
}

#[rstest]
fn duplicate_review_column_is_rejected(store: InMemoryKeyValueStore) -> Result<(), eyre::Report> {
    let mut session = open_session(&store, SeedMode::Blank);
    session.add_column(&ColumnDraft::new("Review"))?;

    let result = session.add_column(&ColumnDraft::new("review"));

    let Err(err) = result else {
        return Err(eyre::eyre!("duplicate title accepted"));
    };
    eyre::ensure!(
        err.to_string() == "A column with this title already exists",
        "unexpected message: {err}"
    );
    Ok(())
}

#[rstest]
fn tenth_column_is_the_last(store: InMemoryKeyValueStore) -> Result<(), eyre::Report> {
    let mut session = open_session(&store, SeedMode::Blank);
    for stage in ["Backlog", "Design", "Build", "Review", "Test", "Stage", "Release"] {
        session.add_column(&ColumnDraft::new(stage))?;
    }

    let result = session.add_column(&ColumnDraft::new("Archive"));

    eyre::ensure!(
        result == Err(BoardOperationError::CapacityExceeded { max: 10 }),
        "expected capacity error, got {result:?}"
    );
    Ok(())
}

#[rstest]
fn demo_board_queries(store: InMemoryKeyValueStore) -> Result<(), eyre::Report> {
    let session = open_session(&store, SeedMode::Demo);
    let board = session.board();

    let urgent = tasks::filter_by_priority(board.tasks(), TaskPriority::Urgent);
    eyre::ensure!(urgent.len() == 1, "one urgent demo task");

    let sorted = tasks::sort_by_priority(board.tasks());
    let first = sorted
        .first()
        .ok_or_else(|| eyre::eyre!("demo board has tasks"))?;
    eyre::ensure!(first.priority() == TaskPriority::Urgent, "urgent sorts first");

    let hits = tasks::search(board.tasks(), "DATABASE");
    eyre::ensure!(hits.len() == 2, "title and description matches: {}", hits.len());

    let done = board.tasks_in(&StatusKey::new("done"));
    eyre::ensure!(
        done.iter().all(|task| !board.is_overdue(task, chrono::Utc::now())),
        "completed tasks are never overdue"
    );
    Ok(())
}
