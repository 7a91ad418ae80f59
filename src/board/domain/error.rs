//! Error types for board, column, and task operations.
//!
//! Column validation failures are returned as data and carry the field they
//! refer to. Board-level column operations surface a single
//! [`BoardOperationError`] whose `Display` output is the message shown to
//! the user.

use super::{ColumnId, StatusKey};
use thiserror::Error;

/// Column field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnField {
    /// The column title.
    Title,
    /// The column colour.
    Color,
    /// The column status key.
    Status,
}

/// Field-tagged column validation failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ColumnValidationError {
    /// The title is empty after trimming.
    #[error("Column title is required")]
    TitleRequired,

    /// The trimmed title is shorter than two characters.
    #[error("Column title must be at least 2 characters")]
    TitleTooShort,

    /// The trimmed title is longer than thirty characters.
    #[error("Column title must be 30 characters or fewer")]
    TitleTooLong,

    /// Another column already uses this title, ignoring case.
    #[error("A column with this title already exists")]
    DuplicateTitle,

    /// The colour is not part of the palette.
    #[error("Invalid color selected")]
    InvalidColor(String),

    /// Another column already uses this status key.
    #[error("A column with this status already exists")]
    DuplicateStatus(StatusKey),

    /// The column to update does not exist.
    #[error("Column not found")]
    NotFound(ColumnId),
}

impl ColumnValidationError {
    /// Returns the field this error is attached to.
    ///
    /// A missing column is reported against the title so that form-based
    /// callers can show it next to the title input.
    #[must_use]
    pub const fn field(&self) -> ColumnField {
        match self {
            Self::TitleRequired
            | Self::TitleTooShort
            | Self::TitleTooLong
            | Self::DuplicateTitle
            | Self::NotFound(_) => ColumnField::Title,
            Self::InvalidColor(_) => ColumnField::Color,
            Self::DuplicateStatus(_) => ColumnField::Status,
        }
    }
}

/// Reason a column may not be deleted.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DeleteRefusal {
    /// Seeded default columns are protected.
    #[error("Default columns cannot be deleted")]
    DefaultColumn,

    /// A board must keep at least one column.
    #[error("Cannot delete the last column")]
    LastColumn,
}

/// Errors returned while deleting a column.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ColumnDeletionError {
    /// The column does not exist.
    #[error("Column not found")]
    NotFound(ColumnId),

    /// The deletion policy refused the request.
    #[error(transparent)]
    Refused(#[from] DeleteRefusal),

    /// No other column can receive the deleted column's tasks.
    #[error("No target column available")]
    NoTargetColumn,
}

/// Errors returned by board-level column operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardOperationError {
    /// The board already holds its maximum number of columns.
    #[error("Maximum {max} columns allowed")]
    CapacityExceeded {
        /// Configured column limit.
        max: usize,
    },

    /// The board settings forbid adding custom columns.
    #[error("Custom columns are disabled for this board")]
    CustomColumnsDisabled,

    /// The first validation failure reported for the column.
    #[error(transparent)]
    Validation(#[from] ColumnValidationError),

    /// Column deletion failed.
    #[error(transparent)]
    Deletion(#[from] ColumnDeletionError),

    /// The registry rejected the column without naming a reason.
    #[error("Failed to apply column changes")]
    ColumnRejected,
}

impl BoardOperationError {
    /// Picks the first validation failure, as displayed to the user.
    pub(crate) fn first_of(errors: Vec<ColumnValidationError>) -> Self {
        errors
            .into_iter()
            .next()
            .map_or(Self::ColumnRejected, Self::Validation)
    }
}

/// Result type for board-level column operations.
pub type BoardResult<T> = Result<T, BoardOperationError>;

/// Edge validation failure for task form input.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TaskInputError {
    /// The title is empty after trimming.
    #[error("Title is required")]
    TitleRequired,

    /// The trimmed title is shorter than three characters.
    #[error("Title must be at least 3 characters")]
    TitleTooShort,

    /// The trimmed title is longer than one hundred characters.
    #[error("Title must be 100 characters or fewer")]
    TitleTooLong,

    /// The trimmed description is longer than five hundred characters.
    #[error("Description must be 500 characters or fewer")]
    DescriptionTooLong,
}

/// Error returned while parsing a task priority.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);
