//! Meal plan record schema.

use crate::model::label::ClosedSet;
use crate::model::record::{require_text, DraftError, Record, RecordId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl ClosedSet for MealType {
    const ALL: &'static [Self] = &[Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    fn key(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
        }
    }
}

/// Day slot of the weekly meal plan, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlanDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl ClosedSet for PlanDay {
    const ALL: &'static [Self] = &[
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    // Day keys are the capitalized names used by the planner form.
    fn key(self) -> &'static str {
        self.label()
    }

    fn label(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub id: RecordId,
    pub name: String,
    /// Free-form ingredient list as typed by the user.
    pub ingredients: String,
    pub meal_type: MealType,
    pub day: PlanDay,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealDraft {
    pub name: String,
    pub ingredients: String,
    pub meal_type: MealType,
    pub day: PlanDay,
}

impl MealDraft {
    /// Draft with the planner defaults: dinner on Monday.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: String::new(),
            meal_type: MealType::Dinner,
            day: PlanDay::Monday,
        }
    }
}

impl Record for Meal {
    type Draft = MealDraft;
    const KIND: &'static str = "meal";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: MealDraft) -> Result<Self, DraftError> {
        Ok(Self {
            id,
            name: require_text("name", draft.name)?,
            ingredients: draft.ingredients.trim().to_string(),
            meal_type: draft.meal_type,
            day: draft.day,
        })
    }
}
