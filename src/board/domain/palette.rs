//! Fixed colour palette for columns.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Colours a column may use, in presentation order.
pub const COLUMN_PALETTE: [&str; 10] = [
    "#ef4444", // red
    "#f59e0b", // amber
    "#10b981", // emerald
    "#3b82f6", // blue
    "#8b5cf6", // violet
    "#ec4899", // pink
    "#06b6d4", // cyan
    "#84cc16", // lime
    "#f97316", // orange
    "#6366f1", // indigo
];

/// Hex colour drawn from [`COLUMN_PALETTE`].
///
/// Deserialization is lenient so that snapshots written by older versions
/// still load; [`ColumnColor::from_palette`] is the validating constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnColor(String);

impl ColumnColor {
    /// Returns the colour when it is a palette member.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard::board::domain::ColumnColor;
    ///
    /// assert!(ColumnColor::from_palette("#3b82f6").is_some());
    /// assert!(ColumnColor::from_palette("#000000").is_none());
    /// ```
    #[must_use]
    pub fn from_palette(value: &str) -> Option<Self> {
        is_palette_color(value).then(|| Self(value.to_owned()))
    }

    /// First palette entry, assigned when a column is created without a
    /// colour.
    #[must_use]
    pub fn first() -> Self {
        Self(COLUMN_PALETTE[0].to_owned())
    }

    pub(crate) fn unchecked(value: &str) -> Self {
        Self(value.to_owned())
    }

    /// Returns the hex string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns `true` when `value` is one of the palette colours.
#[must_use]
pub fn is_palette_color(value: &str) -> bool {
    COLUMN_PALETTE.contains(&value)
}
