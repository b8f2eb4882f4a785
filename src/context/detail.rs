//! Detail level of a table or list.

use serde::{Deserialize, Serialize};

/// How much of each row a table shows.
///
/// Local to one table instance and never persisted. Column descriptors
/// declare the lowest level at which they appear, so higher levels show a
/// superset of the columns of lower ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DetailLevel {
    /// Key columns only.
    #[default]
    Summary,
    /// Adds operational columns.
    Drilldown,
    /// Every column.
    DeepDive,
}

impl DetailLevel {
    /// Every level, lowest first.
    pub const ALL: [Self; 3] = [Self::Summary, Self::Drilldown, Self::DeepDive];

    /// Cycle to the next level.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Summary => Self::Drilldown,
            Self::Drilldown => Self::DeepDive,
            Self::DeepDive => Self::Summary,
        }
    }

    /// Cycle to the previous level.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Summary => Self::DeepDive,
            Self::Drilldown => Self::Summary,
            Self::DeepDive => Self::Drilldown,
        }
    }

    /// Text for the detail-level control.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Summary => "Summary",
            Self::Drilldown => "Drilldown",
            Self::DeepDive => "Deep Dive",
        }
    }
}
