//! Typed persistence contract for boards, tasks, and columns.

use crate::board::domain::{Board, Column, Task};

/// Load and save operations for the three persisted board values.
///
/// Implementations never fail loudly: a value that cannot be read or decoded
/// is reported as absent, and a failed write returns `false`. Callers treat
/// persistence as best-effort.
pub trait PersistenceGateway: Send + Sync {
    /// Loads the saved board snapshot, if any.
    fn load_board(&self) -> Option<Board>;

    /// Saves the board snapshot. Returns `true` on success.
    fn save_board(&self, board: &Board) -> bool;

    /// Loads the saved task list; empty when absent or unreadable.
    fn load_tasks(&self) -> Vec<Task>;

    /// Saves the task list. Returns `true` on success.
    fn save_tasks(&self, tasks: &[Task]) -> bool;

    /// Loads the saved column list; empty when absent or unreadable.
    fn load_columns(&self) -> Vec<Column>;

    /// Saves the column list. Returns `true` on success.
    fn save_columns(&self, columns: &[Column]) -> bool;

    /// Removes every persisted value. Returns `true` when all removals
    /// succeeded.
    fn clear_all(&self) -> bool;

    /// Returns `true` when the backing store accepts reads and writes.
    fn is_available(&self) -> bool;

    /// Returns `true` when neither a board nor a task list has been saved.
    fn is_pristine(&self) -> bool;
}
