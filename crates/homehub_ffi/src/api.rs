//! FFI use-case API for the dashboard view layer.
//!
//! # Responsibility
//! - Expose panel intents and derived views to Dart via FRB.
//! - Translate string keys from the UI into typed core values.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Rejected input returns `ok = false`; state is left untouched.
//! - One dashboard instance per process, seeded on first use.

use chrono::{Local, NaiveDate, NaiveDateTime};
use homehub_core::{
    core_version as core_version_inner, label_for_key, ping as ping_inner, service, CategoryFilter,
    ClosedSet, Dashboard, DashboardConfig, Device, EventDraft, ExpenseCategory, ExpenseDraft,
    ExpensePeriod, Intent, IntentOutcome, InventoryCategory, InventoryDraft, MealDraft, MealType,
    PlanDay, RecordId, StorageLocation, Tab, TodoCategory, TodoDraft, TodoFilter, WeekStart,
};
use log::warn;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, OnceLock};
use uuid::Uuid;

static DASHBOARD: OnceLock<Mutex<Dashboard>> = OnceLock::new();

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn lock_dashboard() -> MutexGuard<'static, Dashboard> {
    let cell = DASHBOARD
        .get_or_init(|| Mutex::new(Dashboard::seeded(today(), &DashboardConfig::default())));
    // A poisoned lock still holds consistent data: every intent is applied
    // in a single step.
    cell.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Returns an empty string on success and the error message otherwise.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match homehub_core::init_logging(level.as_str(), Path::new(log_dir.trim())) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Re-seeds every panel with sample data using `week_start`.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_reset(week_start: String) -> ActionResponse {
    let week_start = match week_start.parse::<WeekStart>() {
        Ok(value) => value,
        Err(err) => return ActionResponse::failure(err.to_string()),
    };
    let config = DashboardConfig {
        week_start,
        ..DashboardConfig::default()
    };
    *lock_dashboard() = Dashboard::seeded(today(), &config);
    ActionResponse::applied("dashboard reset")
}

/// Generic envelope for mutating calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the intent changed dashboard state.
    pub ok: bool,
    /// Created record id for add intents.
    pub record_id: Option<String>,
    /// Human-readable message for diagnostics.
    pub message: String,
}

impl ActionResponse {
    fn applied(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            record_id: None,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            record_id: None,
            message: message.into(),
        }
    }

    fn from_outcome(outcome: IntentOutcome, what: &str) -> Self {
        match outcome {
            IntentOutcome::Added(id) => Self {
                ok: true,
                record_id: Some(id.to_string()),
                message: format!("{what} added"),
            },
            IntentOutcome::Applied => Self::applied(format!("{what} updated")),
            IntentOutcome::Ignored => Self::failure(format!("{what} ignored")),
        }
    }
}

fn dispatch(intent: Intent, what: &str) -> ActionResponse {
    ActionResponse::from_outcome(lock_dashboard().dispatch(intent), what)
}

fn parse_id(raw: &str) -> Result<RecordId, ActionResponse> {
    Uuid::parse_str(raw.trim()).map_err(|_| ActionResponse::failure("invalid record id"))
}

fn parse_key<T: ClosedSet>(raw: &str, field: &str) -> Result<T, ActionResponse> {
    T::from_key(raw.trim()).ok_or_else(|| ActionResponse::failure(format!("unknown {field}")))
}

fn delete(tab: Tab, id: String) -> ActionResponse {
    match parse_id(&id) {
        Ok(id) => dispatch(Intent::Delete { tab, id }, tab.key()),
        Err(response) => response,
    }
}

// ---- Todo ----

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItemView {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub category: String,
    pub category_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListResponse {
    pub items: Vec<TodoItemView>,
    pub caption: String,
    pub items_left: u32,
    /// Present when `items` is empty.
    pub empty_placeholder: Option<String>,
}

#[flutter_rust_bridge::frb(sync)]
pub fn todo_add(text: String, category: String) -> ActionResponse {
    match parse_key::<TodoCategory>(&category, "todo category") {
        Ok(category) => dispatch(Intent::AddTodo(TodoDraft::new(text, category)), "todo"),
        Err(response) => response,
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn todo_toggle(id: String) -> ActionResponse {
    match parse_id(&id) {
        Ok(id) => dispatch(Intent::ToggleTodo(id), "todo"),
        Err(response) => response,
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn todo_delete(id: String) -> ActionResponse {
    delete(Tab::Todo, id)
}

/// Applies `filter` (`all|active|completed|<category>`) and lists todos.
///
/// Unknown filter keys keep the previous filter.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_list(filter: String) -> TodoListResponse {
    let mut dashboard = lock_dashboard();
    match TodoFilter::from_key(filter.trim()) {
        Some(filter) => {
            dashboard.dispatch(Intent::SetTodoFilter(filter));
        }
        None => warn!("event=todo_list module=ffi status=ignored reason=unknown_filter"),
    }
    let todo = &dashboard.todo;
    let items: Vec<TodoItemView> = todo
        .visible()
        .into_iter()
        .map(|item| TodoItemView {
            id: item.id.to_string(),
            text: item.text.clone(),
            completed: item.completed,
            category: item.category.key().to_string(),
            category_label: item.category.label().to_string(),
        })
        .collect();
    TodoListResponse {
        empty_placeholder: items
            .is_empty()
            .then(|| service::todo_service::EMPTY_PLACEHOLDER.to_string()),
        items,
        caption: todo.filter().caption(),
        items_left: u32::try_from(todo.items_left()).unwrap_or(u32::MAX),
    }
}

// ---- Expenses ----

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseView {
    pub id: String,
    pub description: String,
    pub amount_cents: i64,
    pub amount: String,
    pub category_label: String,
    /// `YYYY-MM-DD`.
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotalView {
    pub category: String,
    pub label: String,
    pub total: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseSummaryResponse {
    pub caption: String,
    pub total: String,
    pub by_category: Vec<CategoryTotalView>,
    pub recent: Vec<ExpenseView>,
    pub empty_placeholder: Option<String>,
}

#[flutter_rust_bridge::frb(sync)]
pub fn expense_add(amount: String, description: String, category: String) -> ActionResponse {
    match parse_key::<ExpenseCategory>(&category, "expense category") {
        Ok(category) => dispatch(
            Intent::AddExpense(ExpenseDraft {
                amount,
                description,
                category,
                date: today(),
            }),
            "expense",
        ),
        Err(response) => response,
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn expense_delete(id: String) -> ActionResponse {
    delete(Tab::Expenses, id)
}

/// Applies `period` (`week|month|all`) and returns the summary card data.
#[flutter_rust_bridge::frb(sync)]
pub fn expense_summary(period: String) -> ExpenseSummaryResponse {
    let today = today();
    let mut dashboard = lock_dashboard();
    match ExpensePeriod::from_key(period.trim()) {
        Some(period) => {
            dashboard.dispatch(Intent::SetPeriod(period));
        }
        None => warn!("event=expense_summary module=ffi status=ignored reason=unknown_period"),
    }
    let expenses = &dashboard.expenses;
    let summary = expenses.summary(today);
    let recent: Vec<ExpenseView> = expenses
        .recent(today)
        .into_iter()
        .map(|expense| ExpenseView {
            id: expense.id.to_string(),
            description: expense.description.clone(),
            amount_cents: expense.amount.as_i64(),
            amount: expense.amount.to_string(),
            category_label: expense.category.label().to_string(),
            date: expense.date.format("%Y-%m-%d").to_string(),
        })
        .collect();
    ExpenseSummaryResponse {
        caption: summary.period.caption().to_string(),
        total: summary.total.to_string(),
        by_category: summary
            .by_category
            .iter()
            .map(|(category, total)| CategoryTotalView {
                category: category.key().to_string(),
                label: label_for_key::<ExpenseCategory>(category.key()),
                total: total.to_string(),
            })
            .collect(),
        empty_placeholder: recent
            .is_empty()
            .then(|| service::expense_service::EMPTY_PLACEHOLDER.to_string()),
        recent,
    }
}

// ---- Inventory ----

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryItemView {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub category_label: String,
    pub location_label: String,
    pub can_decrement: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryListResponse {
    pub items: Vec<InventoryItemView>,
    pub empty_placeholder: Option<String>,
}

#[flutter_rust_bridge::frb(sync)]
pub fn inventory_add(
    name: String,
    quantity: i64,
    category: String,
    location: String,
) -> ActionResponse {
    let category = match parse_key::<InventoryCategory>(&category, "inventory category") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let location = match parse_key::<StorageLocation>(&location, "location") {
        Ok(value) => value,
        Err(response) => return response,
    };
    dispatch(
        Intent::AddItem(InventoryDraft {
            name,
            quantity,
            category,
            location,
        }),
        "inventory item",
    )
}

#[flutter_rust_bridge::frb(sync)]
pub fn inventory_adjust(id: String, delta: i64) -> ActionResponse {
    match parse_id(&id) {
        Ok(id) => dispatch(Intent::AdjustQuantity { id, delta }, "inventory item"),
        Err(response) => response,
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn inventory_delete(id: String) -> ActionResponse {
    delete(Tab::Inventory, id)
}

/// Applies the search term and category filter (`all` or a category key).
#[flutter_rust_bridge::frb(sync)]
pub fn inventory_list(search: String, category: String) -> InventoryListResponse {
    let mut dashboard = lock_dashboard();
    dashboard.dispatch(Intent::SetSearch(search));
    match CategoryFilter::from_key(category.trim()) {
        Some(filter) => {
            dashboard.dispatch(Intent::SetInventoryFilter(filter));
        }
        None => warn!("event=inventory_list module=ffi status=ignored reason=unknown_category"),
    }
    let inventory = &dashboard.inventory;
    let items: Vec<InventoryItemView> = inventory
        .visible()
        .into_iter()
        .map(|item| InventoryItemView {
            id: item.id.to_string(),
            name: item.name.clone(),
            quantity: item.quantity,
            category_label: item.category.label().to_string(),
            location_label: item.location.label().to_string(),
            can_decrement: inventory.can_decrement(item.id),
        })
        .collect();
    InventoryListResponse {
        empty_placeholder: items
            .is_empty()
            .then(|| service::inventory_service::EMPTY_PLACEHOLDER.to_string()),
        items,
    }
}

// ---- Meals ----

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealView {
    pub id: String,
    pub name: String,
    pub ingredients: String,
    pub meal_type_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPlanView {
    pub day: String,
    pub meals: Vec<MealView>,
    pub empty_placeholder: Option<String>,
}

#[flutter_rust_bridge::frb(sync)]
pub fn meal_add(name: String, ingredients: String, meal_type: String, day: String) -> ActionResponse {
    let meal_type = match parse_key::<MealType>(&meal_type, "meal type") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let day = match parse_key::<PlanDay>(&day, "day") {
        Ok(value) => value,
        Err(response) => return response,
    };
    dispatch(
        Intent::AddMeal(MealDraft {
            name,
            ingredients,
            meal_type,
            day,
        }),
        "meal",
    )
}

#[flutter_rust_bridge::frb(sync)]
pub fn meal_delete(id: String) -> ActionResponse {
    delete(Tab::Meals, id)
}

/// Seven-day plan, Monday first; empty days are included.
#[flutter_rust_bridge::frb(sync)]
pub fn meal_week() -> Vec<DayPlanView> {
    let dashboard = lock_dashboard();
    dashboard
        .meals
        .weekly_plan()
        .into_iter()
        .map(|plan| DayPlanView {
            day: plan.day.label().to_string(),
            empty_placeholder: plan
                .is_empty()
                .then(|| service::meal_service::EMPTY_DAY_PLACEHOLDER.to_string()),
            meals: plan
                .meals
                .iter()
                .map(|meal| MealView {
                    id: meal.id.to_string(),
                    name: meal.name.clone(),
                    ingredients: meal.ingredients.clone(),
                    meal_type_label: meal.meal_type.label().to_string(),
                })
                .collect(),
        })
        .collect()
}

// ---- Calendar ----

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventView {
    pub id: String,
    pub title: String,
    pub description: String,
    /// `HH:MM` local time.
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDayResponse {
    /// `YYYY-MM-DD`.
    pub date: String,
    pub summary: String,
    pub events: Vec<EventView>,
    pub empty_placeholder: Option<String>,
}

/// Adds an event; `starts_at` is local time as `YYYY-MM-DDTHH:MM`.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_add(title: String, description: String, starts_at: String) -> ActionResponse {
    match NaiveDateTime::parse_from_str(starts_at.trim(), "%Y-%m-%dT%H:%M") {
        Ok(starts_at) => dispatch(
            Intent::AddEvent(EventDraft {
                title,
                description,
                starts_at,
            }),
            "event",
        ),
        Err(_) => ActionResponse::failure("invalid event start"),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn calendar_delete(id: String) -> ActionResponse {
    delete(Tab::Calendar, id)
}

/// Selects `date` (`YYYY-MM-DD`) and lists its events. Invalid dates keep
/// the current selection.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_day(date: String) -> CalendarDayResponse {
    let mut dashboard = lock_dashboard();
    if let Ok(date) = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
        dashboard.dispatch(Intent::SelectDate(date));
    }
    let calendar = &dashboard.calendar;
    let events: Vec<EventView> = calendar
        .events_for_selected_day()
        .into_iter()
        .map(|event| EventView {
            id: event.id.to_string(),
            title: event.title.clone(),
            description: event.description.clone(),
            time: event.starts_at.format("%H:%M").to_string(),
        })
        .collect();
    CalendarDayResponse {
        date: calendar.selected_date().format("%Y-%m-%d").to_string(),
        summary: calendar.day_summary(),
        empty_placeholder: events
            .is_empty()
            .then(|| service::calendar_service::EMPTY_PLACEHOLDER.to_string()),
        events,
    }
}

// ---- Smart home ----

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceView {
    pub key: String,
    pub label: String,
    pub on: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmartHomeResponse {
    pub devices: Vec<DeviceView>,
    pub target_celsius: i32,
    pub readings: Vec<(String, String)>,
    /// Outdoor `(condition, temperature)` card.
    pub weather: (String, String),
}

#[flutter_rust_bridge::frb(sync)]
pub fn device_toggle(key: String) -> ActionResponse {
    match parse_key::<Device>(&key, "device") {
        Ok(device) => dispatch(Intent::ToggleDevice(device), "device"),
        Err(response) => response,
    }
}

/// Moves the AC target by `steps` degrees; returns the clamped target.
#[flutter_rust_bridge::frb(sync)]
pub fn temperature_adjust(steps: i32) -> i32 {
    let mut dashboard = lock_dashboard();
    dashboard.dispatch(Intent::AdjustTemperature(steps));
    dashboard.smart_home.target_celsius()
}

#[flutter_rust_bridge::frb(sync)]
pub fn smart_home_state() -> SmartHomeResponse {
    let dashboard = lock_dashboard();
    let smart_home = &dashboard.smart_home;
    SmartHomeResponse {
        devices: smart_home
            .devices()
            .map(|(device, on)| DeviceView {
                key: device.key().to_string(),
                label: device.label().to_string(),
                on,
            })
            .collect(),
        target_celsius: smart_home.target_celsius(),
        readings: smart_home
            .readings()
            .iter()
            .map(|reading| (reading.title.to_string(), reading.value.to_string()))
            .collect(),
        weather: {
            let weather = smart_home.weather();
            (weather.title.to_string(), weather.value.to_string())
        },
    }
}
