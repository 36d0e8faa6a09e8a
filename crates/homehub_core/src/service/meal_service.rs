//! Meal planner service.
//!
//! # Invariants
//! - The weekly plan always has seven groups, Monday through Sunday, even
//!   when a day has no meals.

use crate::model::label::ClosedSet;
use crate::model::meal::{Meal, MealDraft, MealType, PlanDay};
use crate::model::record::RecordId;
use crate::repo::collection::RecordCollection;
use crate::repo::derive;

pub const EMPTY_DAY_PLACEHOLDER: &str = "No meals planned";

/// Meals planned for one day, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPlan<'a> {
    pub day: PlanDay,
    pub meals: Vec<&'a Meal>,
}

impl DayPlan<'_> {
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MealService {
    meals: RecordCollection<Meal>,
}

impl MealService {
    pub fn new(meals: RecordCollection<Meal>) -> Self {
        Self { meals }
    }

    pub fn seeded() -> Self {
        Self::new(RecordCollection::from_drafts([
            MealDraft {
                name: "Spaghetti Bolognese".to_string(),
                ingredients: "Ground beef, tomatoes, pasta, onions, garlic".to_string(),
                meal_type: MealType::Dinner,
                day: PlanDay::Monday,
            },
            MealDraft {
                name: "Chicken Salad".to_string(),
                ingredients: "Chicken breast, lettuce, tomatoes, cucumber, olive oil".to_string(),
                meal_type: MealType::Lunch,
                day: PlanDay::Tuesday,
            },
        ]))
    }

    pub fn meals(&self) -> &RecordCollection<Meal> {
        &self.meals
    }

    pub fn add_meal(&mut self, draft: MealDraft) -> Option<RecordId> {
        self.meals.add(draft)
    }

    pub fn delete_meal(&mut self, id: RecordId) -> bool {
        self.meals.remove(id)
    }

    pub fn meals_on(&self, day: PlanDay) -> Vec<&Meal> {
        self.meals.filter(move |meal| meal.day == day).collect()
    }

    /// Seven-day plan, Monday first.
    pub fn weekly_plan(&self) -> Vec<DayPlan<'_>> {
        derive::group_by_with_keys(PlanDay::ALL.to_vec(), self.meals.iter(), |meal| meal.day)
            .into_iter()
            .map(|(day, meals)| DayPlan { day, meals })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::MealService;
    use crate::model::meal::PlanDay;

    #[test]
    fn seeded_plan_places_samples_on_their_days() {
        let service = MealService::seeded();
        let plan = service.weekly_plan();
        assert_eq!(plan.len(), 7);
        assert_eq!(plan[0].day, PlanDay::Monday);
        assert_eq!(plan[0].meals[0].name, "Spaghetti Bolognese");
        assert_eq!(plan[1].meals[0].name, "Chicken Salad");
        assert!(plan[2..].iter().all(|day| day.is_empty()));
    }
}
