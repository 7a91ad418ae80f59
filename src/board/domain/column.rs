//! Column entity and the request types used to create and edit columns.

use super::{ColumnColor, ColumnId, DONE_STATUS, IN_PROGRESS_STATUS, StatusKey, TODO_STATUS};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A workflow stage on the board.
///
/// Every column owns a unique [`StatusKey`]; tasks are placed in a column by
/// carrying the same key. `order` is the zero-based display position and is
/// kept dense by every operation that adds, removes, or moves columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    id: ColumnId,
    title: String,
    status: StatusKey,
    order: usize,
    #[serde(default = "ColumnColor::first")]
    color: ColumnColor,
    #[serde(default)]
    is_default: bool,
    #[serde(default)]
    is_custom: bool,
    #[serde(default)]
    is_initial: bool,
    #[serde(default)]
    is_terminal: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

/// Parameter object for a newly created custom column.
pub(crate) struct NewColumn {
    pub(crate) title: String,
    pub(crate) status: StatusKey,
    pub(crate) order: usize,
    pub(crate) color: ColumnColor,
    pub(crate) is_terminal: bool,
}

impl Column {
    fn seeded(title: &str, status: &str, order: usize, color: &str) -> Self {
        Self {
            id: ColumnId::from_string(status),
            title: title.to_owned(),
            status: StatusKey::new(status),
            order,
            color: ColumnColor::unchecked(color),
            is_default: true,
            is_custom: false,
            is_initial: false,
            is_terminal: false,
            created_at: None,
            updated_at: None,
        }
    }

    pub(crate) fn custom(id: ColumnId, params: NewColumn, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: params.title,
            status: params.status,
            order: params.order,
            color: params.color,
            is_default: false,
            is_custom: true,
            is_initial: false,
            is_terminal: params.is_terminal,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> &ColumnId {
        &self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the status key tasks use to join this column.
    #[must_use]
    pub const fn status(&self) -> &StatusKey {
        &self.status
    }

    /// Returns the zero-based display position.
    #[must_use]
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Returns the palette colour.
    #[must_use]
    pub const fn color(&self) -> &ColumnColor {
        &self.color
    }

    /// Returns `true` for the seeded columns, which cannot be deleted.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        self.is_default
    }

    /// Returns `true` for user-created columns.
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        self.is_custom
    }

    /// Returns `true` for the column new tasks land in by default.
    #[must_use]
    pub const fn is_initial(&self) -> bool {
        self.is_initial
    }

    /// Returns `true` when tasks in this column count as completed.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Returns the creation timestamp, absent for seeded columns.
    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Returns the last edit timestamp, absent for untouched seeded columns.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub(crate) const fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    pub(crate) const fn with_initial(mut self, is_initial: bool) -> Self {
        self.is_initial = is_initial;
        self
    }

    pub(crate) const fn with_terminal(mut self, is_terminal: bool) -> Self {
        self.is_terminal = is_terminal;
        self
    }

    /// Merges validated changes and restamps `updated_at`.
    pub(crate) fn with_changes(&self, changes: &ColumnChanges, now: DateTime<Utc>) -> Self {
        let mut updated = self.clone();
        if let Some(title) = changes.title.as_deref() {
            title.trim().clone_into(&mut updated.title);
        }
        if let Some(color) = changes.color.as_deref() {
            updated.color = ColumnColor::unchecked(color);
        }
        if let Some(is_terminal) = changes.is_terminal {
            updated.is_terminal = is_terminal;
        }
        updated.updated_at = Some(now);
        updated
    }
}

/// Returns the three seeded columns: "To Do", "In Progress", and "Done".
///
/// "To Do" is the initial column and "Done" the terminal one.
///
/// # Examples
///
/// ```
/// use taskboard::board::domain::default_columns;
///
/// let columns = default_columns();
/// let statuses: Vec<_> = columns.iter().map(|c| c.status().as_str()).collect();
/// assert_eq!(statuses, ["todo", "in-progress", "done"]);
/// assert!(columns.iter().all(|c| c.is_default()));
/// ```
#[must_use]
pub fn default_columns() -> Vec<Column> {
    vec![
        Column::seeded("To Do", TODO_STATUS, 0, "#ef4444").with_initial(true),
        Column::seeded("In Progress", IN_PROGRESS_STATUS, 1, "#f59e0b"),
        Column::seeded("Done", DONE_STATUS, 2, "#10b981").with_terminal(true),
    ]
}

/// Borrowed view of the fields column validation inspects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnInput<'a> {
    /// Proposed title, when being set.
    pub title: Option<&'a str>,
    /// Proposed colour, when being set.
    pub color: Option<&'a str>,
    /// Proposed status key, when being set.
    pub status: Option<&'a str>,
}

/// Request to create a custom column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDraft {
    title: String,
    color: Option<String>,
    status: Option<String>,
    is_terminal: bool,
}

impl ColumnDraft {
    /// Creates a draft with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            color: None,
            status: None,
            is_terminal: false,
        }
    }

    /// Sets the palette colour.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets an explicit status key instead of deriving one from the title.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Marks the column as terminal: its tasks count as completed.
    #[must_use]
    pub const fn terminal(mut self) -> Self {
        self.is_terminal = true;
        self
    }

    /// Returns the requested title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the requested colour, if any.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Returns the explicit status key, if any.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns whether the column will be terminal.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Returns the validation view of this draft.
    #[must_use]
    pub fn as_input(&self) -> ColumnInput<'_> {
        ColumnInput {
            title: Some(&self.title),
            color: self.color.as_deref(),
            status: self.status.as_deref(),
        }
    }
}

/// Partial update for an existing column.
///
/// Display order is deliberately absent: positions change only through
/// reordering, which keeps them dense.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnChanges {
    title: Option<String>,
    color: Option<String>,
    is_terminal: Option<bool>,
}

impl ColumnChanges {
    /// Creates an empty change set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a new title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a new palette colour.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets whether tasks in the column count as completed.
    #[must_use]
    pub const fn with_terminal(mut self, is_terminal: bool) -> Self {
        self.is_terminal = Some(is_terminal);
        self
    }

    /// Returns the validation view of these changes.
    #[must_use]
    pub fn as_input(&self) -> ColumnInput<'_> {
        ColumnInput {
            title: self.title.as_deref(),
            color: self.color.as_deref(),
            status: None,
        }
    }
}
