//! Per-panel use-case services.
//!
//! # Responsibility
//! - Own one `RecordCollection` (or device map) per panel.
//! - Implement panel-specific derivations over the shared collection manager.
//! - Provide the fixed sample seeds each panel starts with.
//!
//! # Invariants
//! - Derivations take "today" as a parameter and never read the clock.
//! - Panels are independent; no service references another.

pub mod calendar_service;
pub mod expense_service;
pub mod inventory_service;
pub mod meal_service;
pub mod smart_home_service;
pub mod todo_service;
