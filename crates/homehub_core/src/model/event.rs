//! Calendar event record schema.

use crate::model::record::{require_text, DraftError, Record, RecordId};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One scheduled household event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    /// Local wall-clock start; only its calendar day is used for grouping.
    pub starts_at: NaiveDateTime,
}

impl Event {
    /// Calendar day of the event, ignoring time-of-day.
    pub fn day(&self) -> NaiveDate {
        self.starts_at.date()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub starts_at: NaiveDateTime,
}

impl Record for Event {
    type Draft = EventDraft;
    const KIND: &'static str = "event";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: EventDraft) -> Result<Self, DraftError> {
        Ok(Self {
            id,
            title: require_text("title", draft.title)?,
            description: draft.description.trim().to_string(),
            starts_at: draft.starts_at,
        })
    }
}
