use chrono::NaiveDate;
use homehub_core::{
    Dashboard, DashboardConfig, Device, EventDraft, ExpensePeriod, Intent, IntentOutcome,
    InventoryDraft, Tab, TodoCategory, TodoDraft, TodoFilter,
};
use uuid::Uuid;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
}

fn dashboard() -> Dashboard {
    Dashboard::seeded(today(), &DashboardConfig::default())
}

#[test]
fn seeded_dashboard_starts_on_smart_home() {
    let dashboard = dashboard();
    assert_eq!(dashboard.active_tab(), Tab::SmartHome);
    assert_eq!(dashboard.calendar.selected_date(), today());
    assert_eq!(dashboard.calendar.events_for_selected_day().len(), 1);
    assert_eq!(dashboard.todo.todos().len(), 3);
    assert_eq!(dashboard.expenses.expenses().len(), 3);
    assert_eq!(dashboard.meals.meals().len(), 2);
    assert_eq!(dashboard.inventory.items().len(), 3);
}

#[test]
fn add_intents_report_new_ids_or_ignore_blank_input() {
    let mut dashboard = dashboard();

    let outcome = dashboard.dispatch(Intent::AddTodo(TodoDraft::new(
        "Water plants",
        TodoCategory::Home,
    )));
    let IntentOutcome::Added(id) = outcome else {
        panic!("expected Added, got {outcome:?}");
    };
    assert!(dashboard.todo.todos().contains(id));

    let ignored = dashboard.dispatch(Intent::AddEvent(EventDraft {
        title: "   ".to_string(),
        description: String::new(),
        starts_at: today().and_hms_opt(9, 0, 0).unwrap(),
    }));
    assert_eq!(ignored, IntentOutcome::Ignored);
    assert_eq!(dashboard.calendar.events().len(), 2);
}

#[test]
fn delete_targets_only_named_panel() {
    let mut dashboard = dashboard();
    let todo_id = dashboard.todo.todos().records()[0].id;

    assert_eq!(
        dashboard.dispatch(Intent::Delete {
            tab: Tab::Inventory,
            id: todo_id
        }),
        IntentOutcome::Ignored
    );
    assert_eq!(dashboard.todo.todos().len(), 3);

    assert_eq!(
        dashboard.dispatch(Intent::Delete {
            tab: Tab::Todo,
            id: todo_id
        }),
        IntentOutcome::Applied
    );
    assert_eq!(dashboard.todo.todos().len(), 2);

    assert_eq!(
        dashboard.dispatch(Intent::Delete {
            tab: Tab::SmartHome,
            id: Uuid::new_v4()
        }),
        IntentOutcome::Ignored
    );
}

#[test]
fn view_state_intents_update_panels() {
    let mut dashboard = dashboard();

    dashboard.dispatch(Intent::SelectTab(Tab::Expenses));
    dashboard.dispatch(Intent::SetPeriod(ExpensePeriod::All));
    dashboard.dispatch(Intent::SetTodoFilter(TodoFilter::Active));
    dashboard.dispatch(Intent::SetSearch("towel".to_string()));
    dashboard.dispatch(Intent::SelectDate(NaiveDate::from_ymd_opt(2025, 3, 20).unwrap()));

    assert_eq!(dashboard.active_tab(), Tab::Expenses);
    assert_eq!(dashboard.expenses.period(), ExpensePeriod::All);
    assert_eq!(dashboard.todo.visible().len(), 2);
    assert_eq!(dashboard.inventory.visible().len(), 1);
    assert_eq!(
        dashboard.calendar.events_for_selected_day()[0].title,
        "Home Maintenance"
    );
}

#[test]
fn device_quantity_and_temperature_intents() {
    let mut dashboard = dashboard();

    assert!(!dashboard.smart_home.is_on(Device::Tv));
    dashboard.dispatch(Intent::ToggleDevice(Device::Tv));
    assert!(dashboard.smart_home.is_on(Device::Tv));

    dashboard.dispatch(Intent::AdjustTemperature(50));
    assert_eq!(dashboard.smart_home.target_celsius(), 30);

    let id = dashboard
        .inventory
        .add_item(InventoryDraft::named("Batteries"))
        .unwrap();
    assert_eq!(
        dashboard.dispatch(Intent::AdjustQuantity { id, delta: -10 }),
        IntentOutcome::Applied
    );
    assert_eq!(dashboard.inventory.items().get(id).unwrap().quantity, 0);
    assert_eq!(
        dashboard.dispatch(Intent::AdjustQuantity {
            id: Uuid::new_v4(),
            delta: 1
        }),
        IntentOutcome::Ignored
    );
}
