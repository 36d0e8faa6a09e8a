//! Todo panel service.
//!
//! # Invariants
//! - Status and category filters are mutually exclusive: exactly one
//!   `TodoFilter` is active at a time.
//! - The "items left" count ignores the active filter.

use crate::model::label::{title_case, ClosedSet};
use crate::model::record::RecordId;
use crate::model::todo::{Todo, TodoCategory, TodoDraft};
use crate::repo::collection::RecordCollection;

pub const EMPTY_PLACEHOLDER: &str = "No tasks";

/// Single-select list filter for the todo panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TodoFilter {
    #[default]
    All,
    Active,
    Completed,
    Category(TodoCategory),
}

impl TodoFilter {
    /// Parses `all|active|completed|<category key>`.
    pub fn from_key(raw: &str) -> Option<Self> {
        match raw {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            other => TodoCategory::from_key(other).map(Self::Category),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Category(category) => category.key(),
        }
    }

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Active => !todo.completed,
            Self::Completed => todo.completed,
            Self::Category(category) => todo.category == category,
        }
    }

    /// Heading shown above the filtered list.
    pub fn caption(self) -> String {
        match self {
            Self::All => "All tasks".to_string(),
            Self::Active => "Active tasks".to_string(),
            Self::Completed => "Completed tasks".to_string(),
            Self::Category(category) => format!("{} tasks", title_case(category.key())),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TodoService {
    todos: RecordCollection<Todo>,
    filter: TodoFilter,
}

impl TodoService {
    pub fn new(todos: RecordCollection<Todo>) -> Self {
        Self {
            todos,
            filter: TodoFilter::All,
        }
    }

    /// Panel with the sample tasks shown on first launch.
    pub fn seeded() -> Self {
        let mut todos = RecordCollection::<Todo>::from_drafts([
            TodoDraft::new("Clean kitchen", TodoCategory::Home),
            TodoDraft::new("Pay utility bills", TodoCategory::Finance),
            TodoDraft::new("Buy groceries", TodoCategory::Shopping),
        ]);
        if let Some(id) = todos.records().get(1).map(|todo| todo.id) {
            todos.toggle(id, |todo| &mut todo.completed);
        }
        Self::new(todos)
    }

    pub fn todos(&self) -> &RecordCollection<Todo> {
        &self.todos
    }

    pub fn add_todo(&mut self, draft: TodoDraft) -> Option<RecordId> {
        self.todos.add(draft)
    }

    pub fn delete_todo(&mut self, id: RecordId) -> bool {
        self.todos.remove(id)
    }

    /// Flips completion; returns the new state or `None` for unknown ids.
    pub fn toggle_todo(&mut self, id: RecordId) -> Option<bool> {
        self.todos.toggle(id, |todo| &mut todo.completed)
    }

    pub fn filter(&self) -> TodoFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: TodoFilter) {
        self.filter = filter;
    }

    /// Todos matching the active filter, in insertion order.
    pub fn visible(&self) -> Vec<&Todo> {
        let filter = self.filter;
        self.todos.filter(move |todo| filter.matches(todo)).collect()
    }

    /// Number of todos not yet completed.
    pub fn items_left(&self) -> usize {
        self.todos.filter(|todo| !todo.completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::{TodoFilter, TodoService};
    use crate::model::todo::TodoCategory;

    #[test]
    fn seeded_panel_has_one_completed_task() {
        let service = TodoService::seeded();
        assert_eq!(service.todos().len(), 3);
        assert_eq!(service.items_left(), 2);
        assert!(service.todos().records()[1].completed);
    }

    #[test]
    fn filter_keys_round_trip_and_reject_unknown() {
        for key in ["all", "active", "completed", "home", "finance", "shopping"] {
            assert_eq!(TodoFilter::from_key(key).map(TodoFilter::key), Some(key));
        }
        assert_eq!(TodoFilter::from_key("garden"), None);
    }

    #[test]
    fn captions_follow_filter() {
        assert_eq!(TodoFilter::All.caption(), "All tasks");
        assert_eq!(TodoFilter::Completed.caption(), "Completed tasks");
        assert_eq!(
            TodoFilter::Category(TodoCategory::Shopping).caption(),
            "Shopping tasks"
        );
    }
}
