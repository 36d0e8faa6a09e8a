//! Expense record schema.

use crate::model::label::ClosedSet;
use crate::model::money::Cents;
use crate::model::record::{require_text, DraftError, Record, RecordId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Household spending category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Groceries,
    Utilities,
    Rent,
    Entertainment,
    Home,
    Other,
}

impl ClosedSet for ExpenseCategory {
    const ALL: &'static [Self] = &[
        Self::Groceries,
        Self::Utilities,
        Self::Rent,
        Self::Entertainment,
        Self::Home,
        Self::Other,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Groceries => "groceries",
            Self::Utilities => "utilities",
            Self::Rent => "rent",
            Self::Entertainment => "entertainment",
            Self::Home => "home",
            Self::Other => "other",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Groceries => "Groceries",
            Self::Utilities => "Utilities",
            Self::Rent => "Rent/Mortgage",
            Self::Entertainment => "Entertainment",
            Self::Home => "Home",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: RecordId,
    pub amount: Cents,
    pub description: String,
    pub category: ExpenseCategory,
    pub date: NaiveDate,
}

/// User input for a new expense.
///
/// `amount` is raw form text; it is parsed into `Cents` when the draft is
/// accepted. `date` is supplied by the caller (normally today).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub amount: String,
    pub description: String,
    pub category: ExpenseCategory,
    pub date: NaiveDate,
}

impl Record for Expense {
    type Draft = ExpenseDraft;
    const KIND: &'static str = "expense";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: ExpenseDraft) -> Result<Self, DraftError> {
        let amount_text = require_text("amount", draft.amount)?;
        let description = require_text("description", draft.description)?;
        let amount =
            Cents::parse(amount_text.as_str()).ok_or(DraftError::InvalidAmount(amount_text))?;
        Ok(Self {
            id,
            amount,
            description,
            category: draft.category,
            date: draft.date,
        })
    }
}
