//! Status keys linking tasks to columns.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status key of the seeded "To Do" column.
pub const TODO_STATUS: &str = "todo";

/// Status key of the seeded "In Progress" column.
pub const IN_PROGRESS_STATUS: &str = "in-progress";

/// Status key of the seeded "Done" column.
pub const DONE_STATUS: &str = "done";

/// Free-form key shared by exactly one column and any number of tasks.
///
/// Status keys are compared exactly; they are the sole link between a task
/// and the column it sits in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusKey(String);

impl StatusKey {
    /// Wraps a status key verbatim.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the status of the seeded "To Do" column, used when a task is
    /// created without an explicit status.
    #[must_use]
    pub fn todo() -> Self {
        Self::new(TODO_STATUS)
    }

    /// Derives a status key from a column title.
    ///
    /// The title is trimmed and lowercased, every character outside
    /// `[a-z0-9]` and whitespace is dropped, and whitespace runs become a
    /// single hyphen. The result may be empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard::board::domain::StatusKey;
    ///
    /// assert_eq!(StatusKey::from_title("  Code Review! ").as_str(), "code-review");
    /// assert_eq!(StatusKey::from_title("QA   2").as_str(), "qa-2");
    /// ```
    #[must_use]
    pub fn from_title(title: &str) -> Self {
        let filtered: String = title
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
            .collect();
        Self(filtered.split_whitespace().collect::<Vec<_>>().join("-"))
    }

    /// Returns the key as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when the key is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for StatusKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for StatusKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for StatusKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
