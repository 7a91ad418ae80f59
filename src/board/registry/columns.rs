//! Column registry: validation, creation, editing, deletion, and reordering.
//!
//! Every function works over a borrowed column list and returns new values,
//! so callers can compare the previous and next snapshot freely. Orders are
//! renumbered by position after each structural change, keeping them a dense
//! `0..n` sequence.

use crate::board::domain::{
    Column, ColumnChanges, ColumnColor, ColumnDeletionError, ColumnDraft, ColumnId, ColumnInput,
    ColumnValidationError, DeleteRefusal, NewColumn, StatusKey, Task, is_palette_color,
};
use mockable::Clock;

/// Shortest accepted column title, in characters after trimming.
pub const MIN_TITLE_CHARS: usize = 2;

/// Longest accepted column title, in characters after trimming.
pub const MAX_TITLE_CHARS: usize = 30;

/// Validates proposed column fields against the sibling columns.
///
/// Columns whose id equals `exclude` are ignored by the uniqueness checks, so
/// an edit does not collide with the column being edited. All failures are
/// collected; an empty list means the input is valid.
///
/// # Examples
///
/// ```
/// use taskboard::board::domain::{ColumnDraft, ColumnValidationError, default_columns};
/// use taskboard::board::registry::columns;
///
/// let existing = default_columns();
/// let errors = columns::validate(ColumnDraft::new("done").as_input(), &existing, None);
/// assert_eq!(errors, vec![ColumnValidationError::DuplicateTitle]);
/// ```
#[must_use]
pub fn validate(
    input: ColumnInput<'_>,
    existing: &[Column],
    exclude: Option<&ColumnId>,
) -> Vec<ColumnValidationError> {
    let mut errors = Vec::new();
    let siblings = || existing.iter().filter(move |col| Some(col.id()) != exclude);

    if let Some(title) = input.title
        && let Some(error) = check_title(title, siblings())
    {
        errors.push(error);
    }

    if let Some(color) = input.color
        && !is_palette_color(color)
    {
        errors.push(ColumnValidationError::InvalidColor(color.to_owned()));
    }

    if let Some(status) = input.status
        && siblings().any(|col| col.status().as_str() == status)
    {
        errors.push(ColumnValidationError::DuplicateStatus(StatusKey::new(status)));
    }

    errors
}

fn check_title<'a>(
    title: &str,
    mut siblings: impl Iterator<Item = &'a Column>,
) -> Option<ColumnValidationError> {
    let trimmed = title.trim();
    let length = trimmed.chars().count();
    if trimmed.is_empty() {
        return Some(ColumnValidationError::TitleRequired);
    }
    if length < MIN_TITLE_CHARS {
        return Some(ColumnValidationError::TitleTooShort);
    }
    if length > MAX_TITLE_CHARS {
        return Some(ColumnValidationError::TitleTooLong);
    }
    let lowered = trimmed.to_lowercase();
    siblings
        .any(|col| col.title().to_lowercase() == lowered)
        .then_some(ColumnValidationError::DuplicateTitle)
}

/// Creates a custom column appended after the existing ones.
///
/// Without an explicit status the key is derived from the title; a derived
/// key must be unique as well. When the title yields no usable characters the
/// new column's id doubles as its status.
///
/// # Errors
///
/// Returns every [`ColumnValidationError`] found for the draft.
pub fn create(
    draft: &ColumnDraft,
    existing: &[Column],
    clock: &impl Clock,
) -> Result<Column, Vec<ColumnValidationError>> {
    let mut errors = validate(draft.as_input(), existing, None);

    let explicit = draft.status().filter(|status| !status.trim().is_empty());
    let derived = explicit.is_none().then(|| StatusKey::from_title(draft.title()));
    if let Some(status) = derived.as_ref()
        && !status.is_empty()
        && existing.iter().any(|col| col.status() == status)
    {
        errors.push(ColumnValidationError::DuplicateStatus(status.clone()));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let id = ColumnId::new();
    let status = explicit
        .map(StatusKey::new)
        .or(derived)
        .filter(|key| !key.is_empty())
        .unwrap_or_else(|| StatusKey::new(id.as_str()));
    let order = existing
        .iter()
        .map(Column::order)
        .max()
        .map_or(0, |max| max.saturating_add(1));
    let color = draft
        .color()
        .and_then(ColumnColor::from_palette)
        .unwrap_or_else(ColumnColor::first);

    let params = NewColumn {
        title: draft.title().trim().to_owned(),
        status,
        order,
        color,
        is_terminal: draft.is_terminal(),
    };
    Ok(Column::custom(id, params, clock.utc()))
}

/// Applies `changes` to the column with `id`.
///
/// Default columns may be edited; doing so is logged as a warning.
///
/// # Errors
///
/// Returns [`ColumnValidationError::NotFound`] when no column has `id`, or
/// every validation failure found for the changes.
pub fn update(
    id: &ColumnId,
    changes: &ColumnChanges,
    existing: &[Column],
    clock: &impl Clock,
) -> Result<Column, Vec<ColumnValidationError>> {
    let Some(column) = existing.iter().find(|col| col.id() == id) else {
        return Err(vec![ColumnValidationError::NotFound(id.clone())]);
    };

    let errors = validate(changes.as_input(), existing, Some(id));
    if !errors.is_empty() {
        return Err(errors);
    }

    if column.is_default() {
        tracing::warn!(column_id = %id, "editing a default column");
    }
    Ok(column.with_changes(changes, clock.utc()))
}

/// Checks whether `column` may be removed from `all_columns`.
///
/// # Errors
///
/// Returns [`DeleteRefusal::DefaultColumn`] for seeded columns and
/// [`DeleteRefusal::LastColumn`] when at most one column remains.
pub const fn can_delete(column: &Column, all_columns: &[Column]) -> Result<(), DeleteRefusal> {
    if column.is_default() {
        return Err(DeleteRefusal::DefaultColumn);
    }
    if all_columns.len() <= 1 {
        return Err(DeleteRefusal::LastColumn);
    }
    Ok(())
}

/// Column and task lists produced by a successful deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRemoval {
    /// Remaining columns, renumbered by position.
    pub columns: Vec<Column>,
    /// All tasks, with those from the deleted column reassigned.
    pub tasks: Vec<Task>,
    /// Status key the orphaned tasks moved to.
    pub target_status: StatusKey,
}

/// Removes the column with `id` and reassigns its tasks.
///
/// Tasks move to `preferred_target` when it names another existing column,
/// otherwise to the first column that is not being deleted. Reassigned tasks
/// have `updated_at` restamped. Remaining columns keep their list positions
/// and are renumbered from zero.
///
/// # Errors
///
/// Returns [`ColumnDeletionError::NotFound`] for an unknown id,
/// [`ColumnDeletionError::Refused`] when [`can_delete`] refuses, and
/// [`ColumnDeletionError::NoTargetColumn`] when no other column exists.
pub fn delete(
    id: &ColumnId,
    columns: &[Column],
    tasks: &[Task],
    preferred_target: Option<&ColumnId>,
    clock: &impl Clock,
) -> Result<ColumnRemoval, ColumnDeletionError> {
    let column = columns
        .iter()
        .find(|col| col.id() == id)
        .ok_or_else(|| ColumnDeletionError::NotFound(id.clone()))?;
    can_delete(column, columns)?;

    let target = preferred_target
        .filter(|target_id| *target_id != id)
        .and_then(|target_id| columns.iter().find(|col| col.id() == target_id))
        .or_else(|| columns.iter().find(|col| col.id() != id))
        .ok_or(ColumnDeletionError::NoTargetColumn)?;

    let deleted_status = column.status();
    let target_status = target.status().clone();
    let updated_tasks: Vec<Task> = tasks
        .iter()
        .map(|task| {
            if task.status() == deleted_status {
                task.moved_to(target_status.clone(), clock)
            } else {
                task.clone()
            }
        })
        .collect();

    tracing::debug!(
        column_id = %id,
        target = %target_status,
        reassigned = tasks.iter().filter(|task| task.status() == deleted_status).count(),
        "deleted column"
    );

    Ok(ColumnRemoval {
        columns: renumbered(columns.iter().filter(|col| col.id() != id).cloned()),
        tasks: updated_tasks,
        target_status,
    })
}

/// Moves the column at `from_index` to `to_index` and renumbers orders.
///
/// Both indices must be below `columns.len()`; out-of-range indices leave the
/// list as it was.
///
/// # Examples
///
/// ```
/// use taskboard::board::domain::default_columns;
/// use taskboard::board::registry::columns;
///
/// let reordered = columns::reorder(&default_columns(), 2, 0);
/// let statuses: Vec<_> = reordered.iter().map(|c| c.status().as_str()).collect();
/// assert_eq!(statuses, ["done", "todo", "in-progress"]);
/// assert!(reordered.iter().enumerate().all(|(i, c)| c.order() == i));
/// ```
#[must_use]
pub fn reorder(columns: &[Column], from_index: usize, to_index: usize) -> Vec<Column> {
    let mut result = columns.to_vec();
    if from_index >= result.len() || to_index >= result.len() {
        return result;
    }
    let moved = result.remove(from_index);
    result.insert(to_index, moved);
    renumbered(result)
}

/// Assigns each column its position as `order`.
pub(crate) fn renumbered(columns: impl IntoIterator<Item = Column>) -> Vec<Column> {
    columns
        .into_iter()
        .enumerate()
        .map(|(position, column)| column.with_order(position))
        .collect()
}
