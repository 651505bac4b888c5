//! The four storage partitions a material can occupy.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Storage partition holding a material row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialPartition {
    /// Materials planned for purchase.
    Planning,
    /// Materials bought and in stock.
    Purchased,
    /// History of planning records moved to Purchased.
    PlanningArchive,
    /// Purchased materials retired from stock.
    PurchasedArchive,
}

impl MaterialPartition {
    /// All partitions, in lifecycle order.
    pub const ALL: [MaterialPartition; 4] = [
        Self::Planning,
        Self::Purchased,
        Self::PlanningArchive,
        Self::PurchasedArchive,
    ];

    /// Backing table name.
    pub fn table(self) -> &'static str {
        match self {
            Self::Planning => "planning_materials",
            Self::Purchased => "purchased_materials",
            Self::PlanningArchive => "planning_materials_archive",
            Self::PurchasedArchive => "purchased_materials_archive",
        }
    }

    /// Whether inserting without an `item_id` makes the store mint one.
    pub fn mints_item_id(self) -> bool {
        matches!(self, Self::Purchased)
    }

    /// Whether the partition only holds history.
    pub fn is_archive(self) -> bool {
        matches!(self, Self::PlanningArchive | Self::PurchasedArchive)
    }
}

impl fmt::Display for MaterialPartition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Planning => write!(f, "planning"),
            Self::Purchased => write!(f, "purchased"),
            Self::PlanningArchive => write!(f, "planning archive"),
            Self::PurchasedArchive => write!(f, "purchased archive"),
        }
    }
}
