//! Inventory panel service.
//!
//! # Invariants
//! - Visible items satisfy both the category filter and the name search.
//! - Quantities never go below zero.

use crate::model::inventory::{InventoryCategory, InventoryDraft, InventoryItem, StorageLocation};
use crate::model::label::ClosedSet;
use crate::model::record::RecordId;
use crate::repo::collection::RecordCollection;
use crate::repo::derive::contains_ignore_case;

pub const EMPTY_PLACEHOLDER: &str = "No items found";

/// Category half of the composite inventory filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(InventoryCategory),
}

impl CategoryFilter {
    /// Parses `all` or an inventory category key.
    pub fn from_key(raw: &str) -> Option<Self> {
        match raw {
            "all" => Some(Self::All),
            other => InventoryCategory::from_key(other).map(Self::Only),
        }
    }

    pub fn matches(self, category: InventoryCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == category,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InventoryService {
    items: RecordCollection<InventoryItem>,
    category_filter: CategoryFilter,
    search: String,
}

impl InventoryService {
    pub fn new(items: RecordCollection<InventoryItem>) -> Self {
        Self {
            items,
            category_filter: CategoryFilter::All,
            search: String::new(),
        }
    }

    pub fn seeded() -> Self {
        Self::new(RecordCollection::from_drafts([
            InventoryDraft {
                name: "Paper Towels".to_string(),
                quantity: 4,
                category: InventoryCategory::Supplies,
                location: StorageLocation::Kitchen,
            },
            InventoryDraft {
                name: "Laundry Detergent".to_string(),
                quantity: 1,
                category: InventoryCategory::Cleaning,
                location: StorageLocation::Laundry,
            },
            InventoryDraft {
                name: "Light Bulbs".to_string(),
                quantity: 6,
                category: InventoryCategory::Maintenance,
                location: StorageLocation::Garage,
            },
        ]))
    }

    pub fn items(&self) -> &RecordCollection<InventoryItem> {
        &self.items
    }

    pub fn add_item(&mut self, draft: InventoryDraft) -> Option<RecordId> {
        self.items.add(draft)
    }

    pub fn delete_item(&mut self, id: RecordId) -> bool {
        self.items.remove(id)
    }

    /// Sets `quantity = max(0, quantity + delta)`; returns the new quantity.
    pub fn adjust_quantity(&mut self, id: RecordId, delta: i64) -> Option<u32> {
        self.items.update(id, |item| item.apply_delta(delta))
    }

    /// Whether the decrement control is enabled for `id`.
    pub fn can_decrement(&self, id: RecordId) -> bool {
        self.items.get(id).is_some_and(|item| item.quantity > 0)
    }

    pub fn category_filter(&self) -> CategoryFilter {
        self.category_filter
    }

    pub fn set_category_filter(&mut self, filter: CategoryFilter) {
        self.category_filter = filter;
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Items matching category filter AND case-insensitive name search.
    pub fn visible(&self) -> Vec<&InventoryItem> {
        let filter = self.category_filter;
        let term = self.search.as_str();
        self.items
            .filter(move |item| filter.matches(item.category) && contains_ignore_case(&item.name, term))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{CategoryFilter, InventoryService};
    use crate::model::inventory::InventoryCategory;

    #[test]
    fn category_filter_parses_all_and_categories() {
        assert_eq!(CategoryFilter::from_key("all"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::from_key("food"),
            Some(CategoryFilter::Only(InventoryCategory::Food))
        );
        assert_eq!(CategoryFilter::from_key("toys"), None);
    }

    #[test]
    fn decrement_is_disabled_at_zero() {
        let mut service = InventoryService::seeded();
        let detergent = service.items().records()[1].id;
        assert!(service.can_decrement(detergent));
        assert_eq!(service.adjust_quantity(detergent, -1), Some(0));
        assert!(!service.can_decrement(detergent));
    }
}
