//! Flutter-facing bindings for the HomeHub core.

pub mod api;
