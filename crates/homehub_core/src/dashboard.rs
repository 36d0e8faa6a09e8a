//! Dashboard shell composing the six panels.
//!
//! # Responsibility
//! - Own one service per panel plus the active tab.
//! - Route user intents to the owning panel.
//!
//! # Invariants
//! - Intents run to completion before the next one is applied.
//! - An intent only ever touches the panel it names.
//! - Invalid or stale intents resolve to `IntentOutcome::Ignored`.

use crate::config::DashboardConfig;
use crate::model::device::Device;
use crate::model::event::EventDraft;
use crate::model::expense::ExpenseDraft;
use crate::model::inventory::InventoryDraft;
use crate::model::meal::MealDraft;
use crate::model::record::RecordId;
use crate::model::todo::TodoDraft;
use crate::service::calendar_service::CalendarService;
use crate::service::expense_service::{ExpensePeriod, ExpenseService};
use crate::service::inventory_service::{CategoryFilter, InventoryService};
use crate::service::meal_service::MealService;
use crate::service::smart_home_service::SmartHomeService;
use crate::service::todo_service::{TodoFilter, TodoService};
use chrono::NaiveDate;
use log::{debug, info};

pub const APP_TITLE: &str = "HomeHub";
pub const GREETING: &str = "Good Morning";

/// Navigation tab; one per panel, in display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    SmartHome,
    Calendar,
    Todo,
    Expenses,
    Meals,
    Inventory,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::SmartHome,
        Tab::Calendar,
        Tab::Todo,
        Tab::Expenses,
        Tab::Meals,
        Tab::Inventory,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::SmartHome => "smart-home",
            Self::Calendar => "calendar",
            Self::Todo => "todo",
            Self::Expenses => "expenses",
            Self::Meals => "meals",
            Self::Inventory => "inventory",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::SmartHome => "Smart Home",
            Self::Calendar => "Calendar",
            Self::Todo => "Todo",
            Self::Expenses => "Expenses",
            Self::Meals => "Meals",
            Self::Inventory => "Inventory",
        }
    }

    pub fn from_key(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.key() == raw)
    }
}

/// User intent dispatched from the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    AddEvent(EventDraft),
    AddTodo(TodoDraft),
    AddExpense(ExpenseDraft),
    AddMeal(MealDraft),
    AddItem(InventoryDraft),
    Delete { tab: Tab, id: RecordId },
    ToggleTodo(RecordId),
    ToggleDevice(Device),
    AdjustQuantity { id: RecordId, delta: i64 },
    AdjustTemperature(i32),
    SetTodoFilter(TodoFilter),
    SetPeriod(ExpensePeriod),
    SetInventoryFilter(CategoryFilter),
    SetSearch(String),
    SelectDate(NaiveDate),
    SelectTab(Tab),
}

impl Intent {
    fn name(&self) -> &'static str {
        match self {
            Self::AddEvent(_) => "add_event",
            Self::AddTodo(_) => "add_todo",
            Self::AddExpense(_) => "add_expense",
            Self::AddMeal(_) => "add_meal",
            Self::AddItem(_) => "add_item",
            Self::Delete { .. } => "delete",
            Self::ToggleTodo(_) => "toggle_todo",
            Self::ToggleDevice(_) => "toggle_device",
            Self::AdjustQuantity { .. } => "adjust_quantity",
            Self::AdjustTemperature(_) => "adjust_temperature",
            Self::SetTodoFilter(_) => "set_todo_filter",
            Self::SetPeriod(_) => "set_period",
            Self::SetInventoryFilter(_) => "set_inventory_filter",
            Self::SetSearch(_) => "set_search",
            Self::SelectDate(_) => "select_date",
            Self::SelectTab(_) => "select_tab",
        }
    }
}

/// Result of applying one intent. `Ignored` is the silent no-op, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentOutcome {
    Added(RecordId),
    Applied,
    Ignored,
}

impl IntentOutcome {
    fn from_flag(applied: bool) -> Self {
        if applied {
            Self::Applied
        } else {
            Self::Ignored
        }
    }
}

/// All panel state for one process.
#[derive(Debug, Clone)]
pub struct Dashboard {
    active_tab: Tab,
    pub smart_home: SmartHomeService,
    pub calendar: CalendarService,
    pub todo: TodoService,
    pub expenses: ExpenseService,
    pub meals: MealService,
    pub inventory: InventoryService,
}

impl Dashboard {
    /// Dashboard with every panel re-seeded from its sample records.
    pub fn seeded(today: NaiveDate, config: &DashboardConfig) -> Self {
        info!(
            "event=dashboard_seeded module=dashboard status=ok week_start={}",
            config.week_start.as_str()
        );
        Self {
            active_tab: Tab::default(),
            smart_home: SmartHomeService::seeded(),
            calendar: CalendarService::seeded(today),
            todo: TodoService::seeded(),
            expenses: ExpenseService::seeded(config.week_start),
            meals: MealService::seeded(),
            inventory: InventoryService::seeded(),
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Applies `intent` to the panel it targets.
    pub fn dispatch(&mut self, intent: Intent) -> IntentOutcome {
        let name = intent.name();
        let outcome = match intent {
            Intent::AddEvent(draft) => added(self.calendar.add_event(draft)),
            Intent::AddTodo(draft) => added(self.todo.add_todo(draft)),
            Intent::AddExpense(draft) => added(self.expenses.add_expense(draft)),
            Intent::AddMeal(draft) => added(self.meals.add_meal(draft)),
            Intent::AddItem(draft) => added(self.inventory.add_item(draft)),
            Intent::Delete { tab, id } => IntentOutcome::from_flag(self.delete(tab, id)),
            Intent::ToggleTodo(id) => IntentOutcome::from_flag(self.todo.toggle_todo(id).is_some()),
            Intent::ToggleDevice(device) => {
                self.smart_home.toggle(device);
                IntentOutcome::Applied
            }
            Intent::AdjustQuantity { id, delta } => {
                IntentOutcome::from_flag(self.inventory.adjust_quantity(id, delta).is_some())
            }
            Intent::AdjustTemperature(steps) => {
                self.smart_home.adjust_target(steps);
                IntentOutcome::Applied
            }
            Intent::SetTodoFilter(filter) => {
                self.todo.set_filter(filter);
                IntentOutcome::Applied
            }
            Intent::SetPeriod(period) => {
                self.expenses.set_period(period);
                IntentOutcome::Applied
            }
            Intent::SetInventoryFilter(filter) => {
                self.inventory.set_category_filter(filter);
                IntentOutcome::Applied
            }
            Intent::SetSearch(term) => {
                self.inventory.set_search(term);
                IntentOutcome::Applied
            }
            Intent::SelectDate(date) => {
                self.calendar.select_date(date);
                IntentOutcome::Applied
            }
            Intent::SelectTab(tab) => {
                self.active_tab = tab;
                IntentOutcome::Applied
            }
        };
        debug!(
            "event=intent_dispatched module=dashboard intent={} outcome={:?}",
            name,
            outcome
        );
        outcome
    }

    fn delete(&mut self, tab: Tab, id: RecordId) -> bool {
        match tab {
            Tab::Calendar => self.calendar.delete_event(id),
            Tab::Todo => self.todo.delete_todo(id),
            Tab::Expenses => self.expenses.delete_expense(id),
            Tab::Meals => self.meals.delete_meal(id),
            Tab::Inventory => self.inventory.delete_item(id),
            Tab::SmartHome => false,
        }
    }
}

fn added(id: Option<RecordId>) -> IntentOutcome {
    id.map_or(IntentOutcome::Ignored, IntentOutcome::Added)
}
