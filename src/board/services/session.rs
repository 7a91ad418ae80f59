//! Board session: the single owner of the current board snapshot.
//!
//! A session loads or seeds a board when opened, applies each operation
//! through the board aggregate, and writes the resulting snapshot through the
//! persistence gateway. Persistence is best-effort: failed writes are logged
//! and never fail the operation.

use crate::board::{
    domain::{
        Board, BoardResult, ColumnChanges, ColumnDraft, ColumnId, StatusKey, Task, TaskChanges,
        TaskDraft, TaskId, demo_board,
    },
    ports::PersistenceGateway,
    registry::tasks::TaskStatistics,
};
use mockable::Clock;
use std::sync::Arc;

/// How a session seeds a board when storage holds none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedMode {
    /// Start from an empty board with the default columns.
    #[default]
    Blank,
    /// Start from the demo board when storage has never been written.
    Demo,
}

/// Application service holding the current board and writing it through.
#[derive(Debug)]
pub struct BoardSession<G, C>
where
    G: PersistenceGateway,
    C: Clock + Send + Sync,
{
    gateway: Arc<G>,
    clock: Arc<C>,
    board: Board,
}

impl<G, C> BoardSession<G, C>
where
    G: PersistenceGateway,
    C: Clock + Send + Sync,
{
    /// Opens a session over `gateway`.
    ///
    /// A saved board is restored, preferring the separately saved task and
    /// column lists when they are non-empty, and then reconciled; a repaired
    /// snapshot is written back. Without a saved board a new one is created,
    /// the demo board when `seed` is [`SeedMode::Demo`] and storage is
    /// pristine, and persisted immediately.
    #[must_use]
    pub fn open(gateway: Arc<G>, clock: Arc<C>, seed: SeedMode) -> Self {
        let (board, dirty) = match gateway.load_board() {
            Some(saved) => {
                let merged = with_saved_lists(saved, &*gateway);
                let restored = merged.clone().reconciled(&*clock);
                let dirty = restored != merged;
                (restored, dirty)
            }
            None => {
                let seeded = if seed == SeedMode::Demo && gateway.is_pristine() {
                    tracing::info!("seeding demo board");
                    demo_board(&*clock)
                } else {
                    Board::new(&*clock)
                };
                (seeded, true)
            }
        };

        let session = Self {
            gateway,
            clock,
            board,
        };
        if dirty {
            session.persist();
        }
        session
    }

    /// Returns the current board snapshot.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Computes statistics for the current board at the session clock's time.
    #[must_use]
    pub fn statistics(&self) -> TaskStatistics {
        self.board.statistics(self.clock.utc())
    }

    /// Adds a task and returns it.
    pub fn add_task(&mut self, draft: TaskDraft) -> Option<&Task> {
        let next = self.board.add_task(draft, &*self.clock);
        self.commit(next);
        self.board.tasks().last()
    }

    /// Applies `changes` to the task with `id`; unknown ids are ignored.
    pub fn update_task(&mut self, id: &TaskId, changes: TaskChanges) {
        let next = self.board.update_task(id, changes, &*self.clock);
        self.commit(next);
    }

    /// Deletes the task with `id`; unknown ids are ignored.
    pub fn delete_task(&mut self, id: &TaskId) {
        let next = self.board.delete_task(id, &*self.clock);
        self.commit(next);
    }

    /// Moves the task with `id` to the column owning `status`.
    pub fn move_task(&mut self, id: &TaskId, status: impl Into<StatusKey>) {
        let next = self.board.move_task(id, status.into(), &*self.clock);
        self.commit(next);
    }

    /// Adds a custom column.
    ///
    /// # Errors
    ///
    /// Returns [`crate::board::domain::BoardOperationError`] when the board
    /// refuses the column; the snapshot is left unchanged and nothing is
    /// written.
    pub fn add_column(&mut self, draft: &ColumnDraft) -> BoardResult<()> {
        let next = self.board.add_column(draft, &*self.clock)?;
        self.commit(next);
        Ok(())
    }

    /// Edits the column with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::board::domain::BoardOperationError`] when validation
    /// fails; the snapshot is left unchanged and nothing is written.
    pub fn update_column(&mut self, id: &ColumnId, changes: &ColumnChanges) -> BoardResult<()> {
        let next = self.board.update_column(id, changes, &*self.clock)?;
        self.commit(next);
        Ok(())
    }

    /// Deletes the column with `id`, moving its tasks to `target` or to the
    /// first remaining column.
    ///
    /// # Errors
    ///
    /// Returns [`crate::board::domain::BoardOperationError`] when deletion is
    /// refused; the snapshot is left unchanged and nothing is written.
    pub fn delete_column(&mut self, id: &ColumnId, target: Option<&ColumnId>) -> BoardResult<()> {
        let next = self.board.delete_column(id, target, &*self.clock)?;
        self.commit(next);
        Ok(())
    }

    /// Moves the column at `from_index` to `to_index`.
    pub fn reorder_columns(&mut self, from_index: usize, to_index: usize) {
        let next = self.board.reorder_columns(from_index, to_index, &*self.clock);
        self.commit(next);
    }

    fn commit(&mut self, next: Board) {
        if next == self.board {
            return;
        }
        self.board = next;
        self.persist();
    }

    fn persist(&self) {
        let board_saved = self.gateway.save_board(&self.board);
        let tasks_saved = self.gateway.save_tasks(self.board.tasks());
        let columns_saved = self.gateway.save_columns(self.board.columns());
        if !(board_saved && tasks_saved && columns_saved) {
            tracing::warn!(
                board_id = %self.board.id(),
                board_saved,
                tasks_saved,
                columns_saved,
                "board snapshot only partially persisted"
            );
        }
    }
}

fn with_saved_lists(saved: Board, gateway: &impl PersistenceGateway) -> Board {
    let saved_tasks = gateway.load_tasks();
    let saved_columns = gateway.load_columns();
    let tasks = if saved_tasks.is_empty() {
        saved.tasks().to_vec()
    } else {
        saved_tasks
    };
    let columns = if saved_columns.is_empty() {
        saved.columns().to_vec()
    } else {
        saved_columns
    };
    saved.with_contents(columns, tasks)
}
