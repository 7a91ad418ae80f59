//! Task entity and its lifecycle operations.
//!
//! Lifecycle operations never validate their input: title and description
//! limits belong to the input edge (see
//! [`crate::board::registry::tasks::validate_input`]). Every operation returns
//! a new value and leaves the receiver untouched.

use super::{StatusKey, TaskId, TaskPriority};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A unit of work placed in exactly one column through its status key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default)]
    priority: TaskPriority,
    status: StatusKey,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    due_date: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted status key.
    pub status: StatusKey,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest edit timestamp.
    pub updated_at: DateTime<Utc>,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a task from a draft, stamping a fresh id and both timestamps.
    ///
    /// Without an explicit status the task lands in `todo`.
    #[must_use]
    pub fn new(draft: TaskDraft, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            status: draft.status.unwrap_or_else(StatusKey::todo),
            created_at: timestamp,
            updated_at: timestamp,
            due_date: draft.due_date,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            priority: data.priority,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
            due_date: data.due_date,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the status key of the column holding the task.
    #[must_use]
    pub const fn status(&self) -> &StatusKey {
        &self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest edit timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Shallow-merges `changes` into a copy of the task.
    ///
    /// `updated_at` is restamped even when the change set is empty.
    #[must_use]
    pub fn apply(&self, changes: TaskChanges, clock: &impl Clock) -> Self {
        let mut updated = self.clone();
        if let Some(title) = changes.title {
            updated.title = title;
        }
        if let Some(description) = changes.description {
            updated.description = description;
        }
        if let Some(priority) = changes.priority {
            updated.priority = priority;
        }
        if let Some(status) = changes.status {
            updated.status = status;
        }
        if let Some(due_date) = changes.due_date {
            updated.due_date = due_date;
        }
        updated.updated_at = clock.utc();
        updated
    }

    /// Returns a copy of the task placed in the column owning `status`.
    #[must_use]
    pub fn moved_to(&self, status: StatusKey, clock: &impl Clock) -> Self {
        self.apply(TaskChanges::new().with_status(status), clock)
    }
}

/// Request to create a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: Option<String>,
    priority: TaskPriority,
    status: Option<StatusKey>,
    due_date: Option<DateTime<Utc>>,
}

impl TaskDraft {
    /// Creates a medium-priority draft with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: TaskPriority::default(),
            status: None,
            due_date: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Places the task in the column owning `status`.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<StatusKey>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns the requested status, if any.
    #[must_use]
    pub const fn status(&self) -> Option<&StatusKey> {
        self.status.as_ref()
    }
}

/// Partial update for a task.
///
/// Optional fields use a nested `Option` so that callers can distinguish
/// "leave unchanged" from "clear".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    title: Option<String>,
    description: Option<Option<String>>,
    priority: Option<TaskPriority>,
    status: Option<StatusKey>,
    due_date: Option<Option<DateTime<Utc>>>,
}

impl TaskChanges {
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

    /// Sets a new description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Clears the description.
    #[must_use]
    pub fn without_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// Sets a new priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Moves the task to the column owning `status`.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<StatusKey>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets a new due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(Some(due_date));
        self
    }

    /// Clears the due date.
    #[must_use]
    pub const fn without_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    /// Returns the requested status, if any.
    #[must_use]
    pub const fn status(&self) -> Option<&StatusKey> {
        self.status.as_ref()
    }

    pub(crate) fn drop_status(mut self) -> Self {
        self.status = None;
        self
    }
}
