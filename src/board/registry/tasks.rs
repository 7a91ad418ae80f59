//! Task registry queries: filtering, searching, sorting, due-date checks,
//! and board statistics.
//!
//! Queries borrow the task list and return references in input order unless
//! stated otherwise. Completion is decided by [`CompletionStatuses`], built
//! from the columns flagged as terminal, rather than by a fixed status name.

use crate::board::domain::{Column, StatusKey, Task, TaskInputError, TaskPriority};
use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

/// Default look-ahead window for [`due_soon`], in days.
pub const DUE_SOON_DAYS: u32 = 3;

/// Shortest accepted task title at the input edge.
pub const MIN_TASK_TITLE_CHARS: usize = 3;

/// Longest accepted task title at the input edge.
pub const MAX_TASK_TITLE_CHARS: usize = 100;

/// Longest accepted task description at the input edge.
pub const MAX_TASK_DESCRIPTION_CHARS: usize = 500;

/// Status keys whose tasks count as completed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionStatuses(Vec<StatusKey>);

impl CompletionStatuses {
    /// Collects the statuses of every terminal column.
    #[must_use]
    pub fn from_columns(columns: &[Column]) -> Self {
        Self(
            columns
                .iter()
                .filter(|col| col.is_terminal())
                .map(|col| col.status().clone())
                .collect(),
        )
    }

    /// Builds the set from explicit status keys.
    #[must_use]
    pub fn new(statuses: impl IntoIterator<Item = StatusKey>) -> Self {
        Self(statuses.into_iter().collect())
    }

    /// Returns `true` when tasks with `status` are completed.
    #[must_use]
    pub fn contains(&self, status: &StatusKey) -> bool {
        self.0.contains(status)
    }
}

/// Returns the tasks whose status equals `status`.
#[must_use]
pub fn by_status<'a>(tasks: &'a [Task], status: &StatusKey) -> Vec<&'a Task> {
    tasks.iter().filter(|task| task.status() == status).collect()
}

/// Returns the tasks with the given priority.
#[must_use]
pub fn filter_by_priority(tasks: &[Task], priority: TaskPriority) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| task.priority() == priority)
        .collect()
}

/// Sorts tasks from urgent to low priority.
///
/// The sort is stable: tasks sharing a priority keep their relative order.
#[must_use]
pub fn sort_by_priority(tasks: &[Task]) -> Vec<&Task> {
    let mut sorted: Vec<&Task> = tasks.iter().collect();
    sorted.sort_by_key(|task| task.priority().rank());
    sorted
}

/// Case-insensitive substring search over titles and descriptions.
///
/// A blank query matches every task.
#[must_use]
pub fn search<'a>(tasks: &'a [Task], query: &str) -> Vec<&'a Task> {
    if query.trim().is_empty() {
        return tasks.iter().collect();
    }
    let needle = query.to_lowercase();
    tasks
        .iter()
        .filter(|task| {
            task.title().to_lowercase().contains(&needle)
                || task
                    .description()
                    .is_some_and(|description| description.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Returns `true` when the task has a due date in the past and is not
/// completed.
#[must_use]
pub fn is_overdue(task: &Task, now: DateTime<Utc>, completion: &CompletionStatuses) -> bool {
    task.due_date().is_some_and(|due| now > due) && !completion.contains(task.status())
}

/// Returns the overdue tasks.
#[must_use]
pub fn overdue<'a>(
    tasks: &'a [Task],
    now: DateTime<Utc>,
    completion: &CompletionStatuses,
) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| is_overdue(task, now, completion))
        .collect()
}

/// Returns incomplete tasks due after `now` and at most `days` days ahead.
#[must_use]
pub fn due_soon<'a>(
    tasks: &'a [Task],
    now: DateTime<Utc>,
    days: u32,
    completion: &CompletionStatuses,
) -> Vec<&'a Task> {
    let horizon =
        TimeDelta::try_days(i64::from(days)).and_then(|span| now.checked_add_signed(span));
    tasks
        .iter()
        .filter(|task| {
            task.due_date()
                .is_some_and(|due| due > now && horizon.is_none_or(|limit| due <= limit))
                && !completion.contains(task.status())
        })
        .collect()
}

/// Task counts per priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityCounts {
    /// Urgent tasks.
    pub urgent: usize,
    /// High-priority tasks.
    pub high: usize,
    /// Medium-priority tasks.
    pub medium: usize,
    /// Low-priority tasks.
    pub low: usize,
}

/// Task count for one column status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    /// Column status key.
    pub status: StatusKey,
    /// Number of tasks carrying it.
    pub count: usize,
}

/// Summary figures for a board's tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatistics {
    /// Number of tasks.
    pub total: usize,
    /// Tasks sitting in a terminal column.
    pub completed: usize,
    /// Incomplete tasks past their due date.
    pub overdue: usize,
    /// Incomplete tasks due within [`DUE_SOON_DAYS`].
    pub due_soon: usize,
    /// Completed share of all tasks as a rounded percentage; zero when empty.
    pub completion_rate: usize,
    /// Counts per priority.
    pub by_priority: PriorityCounts,
    /// Counts per column status, in column order.
    pub by_status: Vec<StatusCount>,
}

/// Computes statistics for `tasks` laid out over `columns`.
#[must_use]
pub fn statistics(tasks: &[Task], columns: &[Column], now: DateTime<Utc>) -> TaskStatistics {
    let completion = CompletionStatuses::from_columns(columns);
    let completed = tasks
        .iter()
        .filter(|task| completion.contains(task.status()))
        .count();

    let mut by_priority = PriorityCounts::default();
    for task in tasks {
        let slot = match task.priority() {
            TaskPriority::Urgent => &mut by_priority.urgent,
            TaskPriority::High => &mut by_priority.high,
            TaskPriority::Medium => &mut by_priority.medium,
            TaskPriority::Low => &mut by_priority.low,
        };
        *slot = slot.saturating_add(1);
    }

    let mut ordered: Vec<&Column> = columns.iter().collect();
    ordered.sort_by_key(|col| col.order());
    let status_counts = ordered
        .into_iter()
        .map(|col| StatusCount {
            status: col.status().clone(),
            count: by_status(tasks, col.status()).len(),
        })
        .collect();

    TaskStatistics {
        total: tasks.len(),
        completed,
        overdue: overdue(tasks, now, &completion).len(),
        due_soon: due_soon(tasks, now, DUE_SOON_DAYS, &completion).len(),
        completion_rate: rounded_percent(completed, tasks.len()),
        by_priority,
        by_status: status_counts,
    }
}

#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "half-up rounding of a percentage is exact in integer arithmetic"
)]
fn rounded_percent(part: usize, whole: usize) -> usize {
    if whole == 0 {
        return 0;
    }
    part.saturating_mul(200).saturating_add(whole) / whole.saturating_mul(2)
}

/// Checks task form input before it reaches [`Task::new`] or [`Task::apply`].
///
/// The task lifecycle accepts any title and description; these limits apply
/// only where user input enters the system.
///
/// # Examples
///
/// ```
/// use taskboard::board::domain::TaskInputError;
/// use taskboard::board::registry::tasks::validate_input;
///
/// assert!(validate_input("Write release notes", None).is_empty());
/// assert_eq!(validate_input("ab", None), vec![TaskInputError::TitleTooShort]);
/// ```
#[must_use]
pub fn validate_input(title: &str, description: Option<&str>) -> Vec<TaskInputError> {
    let mut errors = Vec::new();
    let trimmed = title.trim();
    let length = trimmed.chars().count();
    if trimmed.is_empty() {
        errors.push(TaskInputError::TitleRequired);
    } else if length < MIN_TASK_TITLE_CHARS {
        errors.push(TaskInputError::TitleTooShort);
    } else if length > MAX_TASK_TITLE_CHARS {
        errors.push(TaskInputError::TitleTooLong);
    }

    if description.is_some_and(|text| text.trim().chars().count() > MAX_TASK_DESCRIPTION_CHARS) {
        errors.push(TaskInputError::DescriptionTooLong);
    }
    errors
}
