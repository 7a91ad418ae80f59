//! Board aggregate root.
//!
//! A [`Board`] owns its columns and tasks by value. Every mutating operation
//! borrows the current board and returns a new snapshot, leaving the input
//! untouched; callers persist whichever snapshot they keep.

use super::{
    BoardId, BoardOperationError, BoardResult, BoardSettings, Column, ColumnChanges,
    ColumnDraft, ColumnId, DONE_STATUS, StatusKey, TODO_STATUS, Task, TaskChanges, TaskDraft,
    TaskId, default_columns,
};
use crate::board::registry::{
    columns,
    tasks::{self, CompletionStatuses, TaskStatistics},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Title given to boards created without one.
pub const DEFAULT_BOARD_TITLE: &str = "My Kanban Board";

/// Aggregate root owning all columns and tasks of one workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    id: BoardId,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default)]
    columns: Vec<Column>,
    #[serde(default)]
    tasks: Vec<Task>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default)]
    settings: BoardSettings,
}

impl Board {
    /// Creates a board titled [`DEFAULT_BOARD_TITLE`] with the default
    /// columns, no tasks, and default settings.
    #[must_use]
    pub fn new(clock: &impl Clock) -> Self {
        Self::titled(DEFAULT_BOARD_TITLE, clock)
    }

    /// Creates a board with the given title, the default columns, no tasks,
    /// and default settings.
    #[must_use]
    pub fn titled(title: impl Into<String>, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: BoardId::new(),
            title: title.into(),
            description: None,
            columns: default_columns(),
            tasks: Vec::new(),
            created_at: timestamp,
            updated_at: timestamp,
            settings: BoardSettings::default(),
        }
    }

    /// Sets the description of a freshly created board.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the settings of a freshly created board.
    #[must_use]
    pub fn with_settings(mut self, settings: BoardSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Returns the board identifier.
    #[must_use]
    pub const fn id(&self) -> &BoardId {
        &self.id
    }

    /// Returns the board title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the columns in list order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns all tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the timestamp of the latest change.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the board settings.
    #[must_use]
    pub const fn settings(&self) -> &BoardSettings {
        &self.settings
    }

    /// Finds a column by id.
    #[must_use]
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|col| col.id() == id)
    }

    /// Finds the column owning `status`.
    #[must_use]
    pub fn column_for_status(&self, status: &StatusKey) -> Option<&Column> {
        self.columns.iter().find(|col| col.status() == status)
    }

    /// Finds a task by id.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the tasks in the column owning `status`.
    #[must_use]
    pub fn tasks_in(&self, status: &StatusKey) -> Vec<&Task> {
        tasks::by_status(&self.tasks, status)
    }

    /// Returns the column new tasks land in: the one flagged initial, or the
    /// first by order when none is.
    #[must_use]
    pub fn initial_column(&self) -> Option<&Column> {
        self.columns
            .iter()
            .find(|col| col.is_initial())
            .or_else(|| self.columns.iter().min_by_key(|col| col.order()))
    }

    /// Returns the statuses of the terminal columns.
    #[must_use]
    pub fn completion_statuses(&self) -> CompletionStatuses {
        CompletionStatuses::from_columns(&self.columns)
    }

    /// Returns `true` when `task` is past due and not in a terminal column.
    #[must_use]
    pub fn is_overdue(&self, task: &Task, now: DateTime<Utc>) -> bool {
        tasks::is_overdue(task, now, &self.completion_statuses())
    }

    /// Computes task statistics for this board.
    #[must_use]
    pub fn statistics(&self, now: DateTime<Utc>) -> TaskStatistics {
        tasks::statistics(&self.tasks, &self.columns, now)
    }

    /// Adds a task built from `draft`.
    ///
    /// Without a status the task lands in the initial column. A status no
    /// column owns is replaced by the initial column's status.
    #[must_use]
    pub fn add_task(&self, draft: TaskDraft, clock: &impl Clock) -> Self {
        let fallback = self.initial_status();
        let placed = match draft.status() {
            Some(status) if self.has_status(status) => draft,
            Some(status) => {
                tracing::warn!(status = %status, fallback = %fallback, "unknown task status, using initial column");
                draft.with_status(fallback)
            }
            None => draft.with_status(fallback),
        };

        let mut next = self.touched(clock);
        next.tasks.push(Task::new(placed, clock));
        next
    }

    /// Applies `changes` to the task with `id`.
    ///
    /// An unknown id returns the board unchanged. A status change towards a
    /// status no column owns is dropped; the remaining changes still apply.
    #[must_use]
    pub fn update_task(&self, id: &TaskId, changes: TaskChanges, clock: &impl Clock) -> Self {
        let Some(position) = self.tasks.iter().position(|task| task.id() == id) else {
            tracing::debug!(task_id = %id, "update ignored for unknown task");
            return self.clone();
        };

        let accepted = match changes.status() {
            Some(status) if !self.has_status(status) => {
                tracing::warn!(task_id = %id, status = %status, "ignoring move to unknown status");
                changes.drop_status()
            }
            _ => changes,
        };

        let mut next = self.touched(clock);
        if let Some(slot) = next.tasks.get_mut(position) {
            *slot = slot.apply(accepted, clock);
        }
        next
    }

    /// Removes the task with `id`; an unknown id returns the board unchanged.
    #[must_use]
    pub fn delete_task(&self, id: &TaskId, clock: &impl Clock) -> Self {
        if self.task(id).is_none() {
            tracing::debug!(task_id = %id, "delete ignored for unknown task");
            return self.clone();
        }
        let mut next = self.touched(clock);
        next.tasks.retain(|task| task.id() != id);
        next
    }

    /// Moves the task with `id` to the column owning `status`.
    ///
    /// Returns the board unchanged when the task is missing, already has
    /// `status`, or no column owns `status`.
    #[must_use]
    pub fn move_task(&self, id: &TaskId, status: StatusKey, clock: &impl Clock) -> Self {
        let Some(task) = self.task(id) else {
            tracing::debug!(task_id = %id, "move ignored for unknown task");
            return self.clone();
        };
        if task.status() == &status {
            return self.clone();
        }
        if !self.has_status(&status) {
            tracing::warn!(task_id = %id, status = %status, "move ignored for unknown status");
            return self.clone();
        }
        self.update_task(id, TaskChanges::new().with_status(status), clock)
    }

    /// Appends a custom column built from `draft`.
    ///
    /// Drafts without a colour take the first palette entry.
    ///
    /// # Errors
    ///
    /// Returns [`BoardOperationError::CapacityExceeded`] when the board holds
    /// `max_columns` columns, [`BoardOperationError::CustomColumnsDisabled`]
    /// when the settings forbid custom columns, or the first validation
    /// failure.
    pub fn add_column(&self, draft: &ColumnDraft, clock: &impl Clock) -> BoardResult<Self> {
        let max = self.settings.max_columns;
        if self.columns.len() >= max {
            return Err(BoardOperationError::CapacityExceeded { max });
        }
        if !self.settings.allow_custom_columns {
            return Err(BoardOperationError::CustomColumnsDisabled);
        }

        let column = columns::create(draft, &self.columns, clock)
            .map_err(BoardOperationError::first_of)?;
        let mut next = self.touched(clock);
        next.columns.push(column);
        Ok(next)
    }

    /// Applies `changes` to the column with `id`.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure, including
    /// [`super::ColumnValidationError::NotFound`] for an unknown id.
    pub fn update_column(
        &self,
        id: &ColumnId,
        changes: &ColumnChanges,
        clock: &impl Clock,
    ) -> BoardResult<Self> {
        let updated = columns::update(id, changes, &self.columns, clock)
            .map_err(BoardOperationError::first_of)?;
        let mut next = self.touched(clock);
        next.columns = self
            .columns
            .iter()
            .map(|col| {
                if col.id() == id {
                    updated.clone()
                } else {
                    col.clone()
                }
            })
            .collect();
        Ok(next)
    }

    /// Deletes the column with `id`, moving its tasks to `target` or to the
    /// first remaining column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardOperationError::Deletion`] when the column is missing,
    /// protected, or the last one.
    pub fn delete_column(
        &self,
        id: &ColumnId,
        target: Option<&ColumnId>,
        clock: &impl Clock,
    ) -> BoardResult<Self> {
        let removal = columns::delete(id, &self.columns, &self.tasks, target, clock)?;
        let mut next = self.touched(clock);
        next.columns = removal.columns;
        next.tasks = removal.tasks;
        Ok(next)
    }

    /// Moves the column at `from_index` to `to_index`.
    ///
    /// Out-of-range indices return the board unchanged.
    #[must_use]
    pub fn reorder_columns(&self, from_index: usize, to_index: usize, clock: &impl Clock) -> Self {
        let len = self.columns.len();
        if from_index >= len || to_index >= len {
            tracing::debug!(from_index, to_index, len, "reorder ignored for out-of-range index");
            return self.clone();
        }
        let mut next = self.touched(clock);
        next.columns = columns::reorder(&self.columns, from_index, to_index);
        next
    }

    /// Restores board invariants on a snapshot read from storage.
    ///
    /// An empty column list is replaced by the default columns, columns are
    /// sorted by their stored order and renumbered, missing initial and
    /// terminal flags are backfilled from the seeded `todo` and `done`
    /// statuses, and tasks whose status no column owns move to the initial
    /// column.
    #[must_use]
    pub fn reconciled(mut self, clock: &impl Clock) -> Self {
        if self.columns.is_empty() {
            tracing::warn!(board_id = %self.id, "board has no columns, restoring defaults");
            self.columns = default_columns();
        }

        let mut sorted = std::mem::take(&mut self.columns);
        sorted.sort_by_key(Column::order);
        self.columns = backfill_flags(columns::renumbered(sorted));

        let fallback = self.initial_status();
        let mut orphans = 0_usize;
        let known: Vec<StatusKey> = self.columns.iter().map(|col| col.status().clone()).collect();
        self.tasks = std::mem::take(&mut self.tasks)
            .into_iter()
            .map(|task| {
                if known.contains(task.status()) {
                    task
                } else {
                    orphans = orphans.saturating_add(1);
                    task.moved_to(fallback.clone(), clock)
                }
            })
            .collect();
        if orphans > 0 {
            tracing::warn!(board_id = %self.id, orphans, target = %fallback, "reassigned orphan tasks");
        }
        self
    }

    pub(crate) fn with_contents(mut self, columns: Vec<Column>, tasks: Vec<Task>) -> Self {
        self.columns = columns;
        self.with_tasks(tasks)
    }

    pub(crate) fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    fn has_status(&self, status: &StatusKey) -> bool {
        self.column_for_status(status).is_some()
    }

    fn initial_status(&self) -> StatusKey {
        self.initial_column()
            .map_or_else(StatusKey::todo, |col| col.status().clone())
    }

    fn touched(&self, clock: &impl Clock) -> Self {
        let mut next = self.clone();
        next.updated_at = clock.utc();
        next
    }
}

fn backfill_flags(columns: Vec<Column>) -> Vec<Column> {
    let needs_initial = !columns.iter().any(Column::is_initial);
    let needs_terminal = !columns.iter().any(Column::is_terminal);
    let initial_status = columns
        .iter()
        .find(|col| col.status().as_str() == TODO_STATUS)
        .or_else(|| columns.first())
        .map(|col| col.status().clone());

    columns
        .into_iter()
        .map(|col| {
            let is_initial = needs_initial && initial_status.as_ref() == Some(col.status());
            let is_terminal = needs_terminal && col.status().as_str() == DONE_STATUS;
            let initial = is_initial || col.is_initial();
            let terminal = is_terminal || col.is_terminal();
            col.with_initial(initial).with_terminal(terminal)
        })
        .collect()
}
