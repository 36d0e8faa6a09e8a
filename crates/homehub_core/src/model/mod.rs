//! Record schemas for every dashboard panel.
//!
//! # Responsibility
//! - Define the record shapes owned by each panel collection.
//! - Keep closed enum tables and their display labels in one place.
//!
//! # Invariants
//! - Every stored record is identified by a stable `RecordId`.
//! - Enum fields only hold values from their fixed closed set; label lookup
//!   over raw keys is total and falls back to title-casing.

pub mod device;
pub mod event;
pub mod expense;
pub mod inventory;
pub mod label;
pub mod meal;
pub mod money;
pub mod record;
pub mod todo;
