//! Calendar panel service.

use crate::model::event::{Event, EventDraft};
use crate::model::record::RecordId;
use crate::repo::collection::RecordCollection;
use chrono::{NaiveDate, NaiveDateTime};

pub const EMPTY_PLACEHOLDER: &str = "No events";

#[derive(Debug, Clone)]
pub struct CalendarService {
    events: RecordCollection<Event>,
    selected_date: NaiveDate,
}

impl CalendarService {
    pub fn new(events: RecordCollection<Event>, selected_date: NaiveDate) -> Self {
        Self {
            events,
            selected_date,
        }
    }

    /// Sample schedule with `today` selected.
    pub fn seeded(today: NaiveDate) -> Self {
        let events = RecordCollection::from_drafts([
            EventDraft {
                title: "Family Dinner".to_string(),
                description: "Weekly family dinner at home".to_string(),
                starts_at: at(2025, 3, 15, 18),
            },
            EventDraft {
                title: "Home Maintenance".to_string(),
                description: "Check smoke detectors and replace filters".to_string(),
                starts_at: at(2025, 3, 20, 10),
            },
        ]);
        Self::new(events, today)
    }

    pub fn events(&self) -> &RecordCollection<Event> {
        &self.events
    }

    pub fn add_event(&mut self, draft: EventDraft) -> Option<RecordId> {
        self.events.add(draft)
    }

    pub fn delete_event(&mut self, id: RecordId) -> bool {
        self.events.remove(id)
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    /// Events whose calendar day equals `date`; time-of-day is ignored.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.events.filter(move |event| event.day() == date).collect()
    }

    pub fn events_for_selected_day(&self) -> Vec<&Event> {
        self.events_on(self.selected_date)
    }

    pub fn day_summary(&self) -> String {
        match self.events_for_selected_day().len() {
            0 => "No events scheduled for this day".to_string(),
            count => format!("{count} event(s) scheduled"),
        }
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .unwrap_or(NaiveDateTime::MIN)
}
