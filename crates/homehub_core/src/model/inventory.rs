//! Inventory item record schema.
//!
//! # Invariants
//! - `quantity` is unsigned; adjustments clamp at zero instead of failing.

use crate::model::label::ClosedSet;
use crate::model::record::{require_text, DraftError, Record, RecordId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryCategory {
    Supplies,
    Cleaning,
    Food,
    Maintenance,
    Other,
}

impl ClosedSet for InventoryCategory {
    const ALL: &'static [Self] = &[
        Self::Supplies,
        Self::Cleaning,
        Self::Food,
        Self::Maintenance,
        Self::Other,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Supplies => "supplies",
            Self::Cleaning => "cleaning",
            Self::Food => "food",
            Self::Maintenance => "maintenance",
            Self::Other => "other",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Supplies => "Supplies",
            Self::Cleaning => "Cleaning",
            Self::Food => "Food",
            Self::Maintenance => "Maintenance",
            Self::Other => "Other",
        }
    }
}

/// Room where an item is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageLocation {
    Kitchen,
    Bathroom,
    Bedroom,
    Garage,
    Laundry,
    Other,
}

impl ClosedSet for StorageLocation {
    const ALL: &'static [Self] = &[
        Self::Kitchen,
        Self::Bathroom,
        Self::Bedroom,
        Self::Garage,
        Self::Laundry,
        Self::Other,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Kitchen => "kitchen",
            Self::Bathroom => "bathroom",
            Self::Bedroom => "bedroom",
            Self::Garage => "garage",
            Self::Laundry => "laundry",
            Self::Other => "other",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Kitchen => "Kitchen",
            Self::Bathroom => "Bathroom",
            Self::Bedroom => "Bedroom",
            Self::Garage => "Garage",
            Self::Laundry => "Laundry Room",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: RecordId,
    pub name: String,
    pub quantity: u32,
    pub category: InventoryCategory,
    pub location: StorageLocation,
}

impl InventoryItem {
    /// Applies `delta` and clamps the result to `0..=u32::MAX`.
    pub fn apply_delta(&mut self, delta: i64) -> u32 {
        let next = i64::from(self.quantity).saturating_add(delta);
        self.quantity = u32::try_from(next.max(0)).unwrap_or(u32::MAX);
        self.quantity
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryDraft {
    pub name: String,
    pub quantity: i64,
    pub category: InventoryCategory,
    pub location: StorageLocation,
}

impl InventoryDraft {
    /// Draft with the form defaults: one unit of supplies in the kitchen.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: 1,
            category: InventoryCategory::Supplies,
            location: StorageLocation::Kitchen,
        }
    }
}

impl Record for InventoryItem {
    type Draft = InventoryDraft;
    const KIND: &'static str = "inventory";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: InventoryDraft) -> Result<Self, DraftError> {
        let name = require_text("name", draft.name)?;
        if draft.quantity < 0 {
            return Err(DraftError::NegativeQuantity(draft.quantity));
        }
        Ok(Self {
            id,
            name,
            quantity: u32::try_from(draft.quantity).unwrap_or(u32::MAX),
            category: draft.category,
            location: draft.location,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{InventoryCategory, InventoryItem, StorageLocation};
    use uuid::Uuid;

    fn item(quantity: u32) -> InventoryItem {
        InventoryItem {
            id: Uuid::new_v4(),
            name: "Light Bulbs".to_string(),
            quantity,
            category: InventoryCategory::Maintenance,
            location: StorageLocation::Garage,
        }
    }

    #[test]
    fn apply_delta_clamps_both_ends() {
        assert_eq!(item(1).apply_delta(-5), 0);
        assert_eq!(item(3).apply_delta(i64::MIN), 0);
        assert_eq!(item(u32::MAX - 1).apply_delta(10), u32::MAX);
        assert_eq!(item(4).apply_delta(2), 6);
    }
}
