//! Shared record contract used by the generic collection manager.
//!
//! # Responsibility
//! - Describe how a panel record is built from user-submitted draft input.
//! - Provide the validation error taxonomy for rejected drafts.
//!
//! # Invariants
//! - `from_draft` never produces a record whose required text is blank.
//! - Identifiers are generated outside the record and never reused.

use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every record held by a panel collection.
pub type RecordId = Uuid;

/// Reason a draft was not accepted into a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// Required text field is empty after trimming.
    BlankField(&'static str),
    /// Amount text is not a non-negative decimal number.
    InvalidAmount(String),
    /// Initial quantity is below zero.
    NegativeQuantity(i64),
}

impl DraftError {
    /// Stable metadata-only code used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BlankField(_) => "blank_field",
            Self::InvalidAmount(_) => "invalid_amount",
            Self::NegativeQuantity(_) => "negative_quantity",
        }
    }
}

impl Display for DraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField(field) => write!(f, "`{field}` must not be blank"),
            Self::InvalidAmount(raw) => write!(f, "invalid amount: `{raw}`"),
            Self::NegativeQuantity(value) => {
                write!(f, "quantity must be >= 0, got {value}")
            }
        }
    }
}

impl Error for DraftError {}

/// A record that can live inside a `RecordCollection`.
pub trait Record: Clone {
    /// Unvalidated user input for creating one record.
    type Draft;

    /// Short panel name used in diagnostics (`todo`, `expense`, ...).
    const KIND: &'static str;

    fn id(&self) -> RecordId;

    /// Validates `draft` and builds a record carrying `id`.
    fn from_draft(id: RecordId, draft: Self::Draft) -> Result<Self, DraftError>;
}

/// Trims `value` and rejects it when nothing is left.
pub(crate) fn require_text(field: &'static str, value: String) -> Result<String, DraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DraftError::BlankField(field));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{require_text, DraftError};

    #[test]
    fn require_text_trims_and_rejects_blank() {
        assert_eq!(require_text("name", "  soap ".to_string()).unwrap(), "soap");
        assert_eq!(
            require_text("name", " \t\n".to_string()).unwrap_err(),
            DraftError::BlankField("name")
        );
    }
}
