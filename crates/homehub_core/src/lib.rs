//! Core domain logic for the HomeHub household dashboard.
//! This crate is the single source of truth for panel invariants.

pub mod config;
pub mod dashboard;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, DashboardConfig, WeekStart};
pub use dashboard::{Dashboard, Intent, IntentOutcome, Tab};
pub use logging::{default_log_level, init_from_config, init_logging, logging_status, LoggingError};
pub use model::device::Device;
pub use model::event::{Event, EventDraft};
pub use model::expense::{Expense, ExpenseCategory, ExpenseDraft};
pub use model::inventory::{InventoryCategory, InventoryDraft, InventoryItem, StorageLocation};
pub use model::label::{label_for_key, title_case, ClosedSet};
pub use model::meal::{Meal, MealDraft, MealType, PlanDay};
pub use model::money::Cents;
pub use model::record::{DraftError, Record, RecordId};
pub use model::todo::{Todo, TodoCategory, TodoDraft};
pub use repo::collection::RecordCollection;
pub use service::calendar_service::CalendarService;
pub use service::expense_service::{ExpensePeriod, ExpenseService, ExpenseSummary};
pub use service::inventory_service::{CategoryFilter, InventoryService};
pub use service::meal_service::{DayPlan, MealService};
pub use service::smart_home_service::SmartHomeService;
pub use service::todo_service::{TodoFilter, TodoService};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
