//! Domain model for boards, columns, and tasks.
//!
//! The board domain models a single kanban workspace: an ordered set of
//! columns, each owning a status key, and the tasks placed in them. Values
//! are immutable snapshots; operations return new values and never touch
//! storage.

mod board;
mod column;
mod demo;
mod error;
mod ids;
mod palette;
mod priority;
mod settings;
mod status;
mod task;

pub use board::{Board, DEFAULT_BOARD_TITLE};
pub(crate) use column::NewColumn;
pub use column::{Column, ColumnChanges, ColumnDraft, ColumnInput, default_columns};
pub use demo::{DEMO_BOARD_TITLE, demo_board};
pub use error::{
    BoardOperationError, BoardResult, ColumnDeletionError, ColumnField, ColumnValidationError,
    DeleteRefusal, ParseTaskPriorityError, TaskInputError,
};
pub use ids::{BoardId, ColumnId, TaskId, generate_id};
pub use palette::{COLUMN_PALETTE, ColumnColor, is_palette_color};
pub use priority::TaskPriority;
pub use settings::{BoardSettings, DEFAULT_MAX_COLUMNS};
pub use status::{DONE_STATUS, IN_PROGRESS_STATUS, StatusKey, TODO_STATUS};
pub use task::{PersistedTaskData, Task, TaskChanges, TaskDraft};
