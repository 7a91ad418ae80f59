//! Per-board configuration.

use super::ColumnColor;
use serde::{Deserialize, Serialize};

/// Default upper bound on the number of columns per board.
pub const DEFAULT_MAX_COLUMNS: usize = 10;

/// Board configuration, fixed when the board is created.
///
/// # Examples
///
/// ```
/// use taskboard::board::domain::BoardSettings;
///
/// let settings = BoardSettings::default();
/// assert!(settings.allow_custom_columns);
/// assert_eq!(settings.max_columns, 10);
///
/// let locked = BoardSettings::locked();
/// assert!(!locked.allow_custom_columns);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoardSettings {
    /// Whether users may add their own columns.
    pub allow_custom_columns: bool,
    /// Maximum number of columns, seeded ones included.
    pub max_columns: usize,
    /// Colour offered first when a user picks one for a new column.
    pub default_column_color: ColumnColor,
}

impl BoardSettings {
    /// Settings that keep the board at its seeded columns.
    #[must_use]
    pub fn locked() -> Self {
        Self {
            allow_custom_columns: false,
            ..Self::default()
        }
    }

    /// Returns these settings with a different column limit.
    #[must_use]
    pub const fn with_max_columns(mut self, max_columns: usize) -> Self {
        self.max_columns = max_columns;
        self
    }
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            allow_custom_columns: true,
            max_columns: DEFAULT_MAX_COLUMNS,
            default_column_color: ColumnColor::unchecked("#3b82f6"),
        }
    }
}
