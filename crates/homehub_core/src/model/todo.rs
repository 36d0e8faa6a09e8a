//! Todo record schema.

use crate::model::label::ClosedSet;
use crate::model::record::{require_text, DraftError, Record, RecordId};
use serde::{Deserialize, Serialize};

/// Todo grouping category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoCategory {
    Home,
    Finance,
    Shopping,
}

impl ClosedSet for TodoCategory {
    const ALL: &'static [Self] = &[Self::Home, Self::Finance, Self::Shopping];

    fn key(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Finance => "finance",
            Self::Shopping => "shopping",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Finance => "Finance",
            Self::Shopping => "Shopping",
        }
    }
}

/// One task in the household todo list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: RecordId,
    pub text: String,
    pub completed: bool,
    pub category: TodoCategory,
}

/// User input for a new todo. New todos always start active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    pub text: String,
    pub category: TodoCategory,
}

impl TodoDraft {
    pub fn new(text: impl Into<String>, category: TodoCategory) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }
}

impl Record for Todo {
    type Draft = TodoDraft;
    const KIND: &'static str = "todo";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: TodoDraft) -> Result<Self, DraftError> {
        Ok(Self {
            id,
            text: require_text("text", draft.text)?,
            completed: false,
            category: draft.category,
        })
    }
}
