//! In-memory record storage shared by every panel.
//!
//! # Responsibility
//! - Provide one generic collection manager instead of six hand-rolled lists.
//! - Keep derivations (filter, group, aggregate) read-only over storage.
//!
//! # Invariants
//! - Record ids are unique within a collection for its lifetime.
//! - Insertion order is preserved; derivations never reorder storage.
//! - Invalid submissions and unknown ids are silent no-ops, not errors.

pub mod collection;
pub mod derive;
