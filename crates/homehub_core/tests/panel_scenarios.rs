use chrono::NaiveDate;
use homehub_core::{
    Cents, ExpenseCategory, ExpenseDraft, ExpensePeriod, ExpenseService, InventoryDraft,
    InventoryService, MealDraft, MealService, PlanDay, RecordCollection, TodoCategory, TodoDraft,
    TodoFilter, TodoService, WeekStart,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn expense(amount: &str, category: ExpenseCategory, day: NaiveDate) -> ExpenseDraft {
    ExpenseDraft {
        amount: amount.to_string(),
        description: "sample".to_string(),
        category,
        date: day,
    }
}

#[test]
fn month_period_totals_current_month() {
    let expenses = RecordCollection::from_drafts([
        expense("120.50", ExpenseCategory::Groceries, date(2025, 3, 10)),
        expense("45.00", ExpenseCategory::Utilities, date(2025, 3, 5)),
    ]);
    let mut service = ExpenseService::new(expenses, WeekStart::Monday);
    service.set_period(ExpensePeriod::Month);

    let total = service.total(date(2025, 3, 28));
    assert_eq!(total, Cents(16550));
    assert_eq!(total.to_string(), "$165.50");
}

#[test]
fn week_period_uses_configured_week_start() {
    let expenses = RecordCollection::from_drafts([
        expense("10", ExpenseCategory::Home, date(2025, 3, 9)),
        expense("20", ExpenseCategory::Home, date(2025, 3, 10)),
        expense("40", ExpenseCategory::Home, date(2025, 3, 12)),
    ]);
    // 2025-03-12 is a Wednesday.
    let today = date(2025, 3, 12);

    let mut monday = ExpenseService::new(expenses.clone(), WeekStart::Monday);
    monday.set_period(ExpensePeriod::Week);
    assert_eq!(monday.total(today), Cents(6000));

    let mut sunday = ExpenseService::new(expenses, WeekStart::Sunday);
    sunday.set_period(ExpensePeriod::Week);
    assert_eq!(sunday.total(today), Cents(7000));
}

#[test]
fn all_period_is_identity_and_categories_keep_first_seen_order() {
    let expenses = RecordCollection::from_drafts([
        expense("1.10", ExpenseCategory::Utilities, date(2024, 1, 1)),
        expense("2.20", ExpenseCategory::Groceries, date(2025, 3, 1)),
        expense("3.30", ExpenseCategory::Utilities, date(2025, 3, 2)),
    ]);
    let mut service = ExpenseService::new(expenses, WeekStart::Monday);
    service.set_period(ExpensePeriod::All);

    let summary = service.summary(date(2025, 3, 2));
    assert_eq!(summary.count, 3);
    assert_eq!(summary.total, Cents(660));
    assert_eq!(
        summary.by_category,
        vec![
            (ExpenseCategory::Utilities, Cents(440)),
            (ExpenseCategory::Groceries, Cents(220)),
        ]
    );
}

#[test]
fn recent_list_is_capped_at_five() {
    let mut service = ExpenseService::new(RecordCollection::new(), WeekStart::Monday);
    service.set_period(ExpensePeriod::All);
    for day in 1..=7 {
        service.add_expense(expense("1", ExpenseCategory::Other, date(2025, 3, day)));
    }
    let recent = service.recent(date(2025, 3, 7));
    assert_eq!(recent.len(), 5);
    assert_eq!(recent[0].date, date(2025, 3, 1));
}

#[test]
fn unparsable_amount_is_ignored() {
    let mut service = ExpenseService::seeded(WeekStart::Monday);
    let before = service.expenses().len();
    assert_eq!(
        service.add_expense(expense("twelve", ExpenseCategory::Home, date(2025, 3, 1))),
        None
    );
    assert_eq!(
        service.add_expense(ExpenseDraft {
            description: "  ".to_string(),
            ..expense("5", ExpenseCategory::Home, date(2025, 3, 1))
        }),
        None
    );
    assert_eq!(service.expenses().len(), before);
}

#[test]
fn completed_filter_follows_toggle() {
    let mut service = TodoService::new(RecordCollection::from_drafts([TodoDraft::new(
        "Clean kitchen",
        TodoCategory::Home,
    )]));
    let id = service.todos().records()[0].id;

    service.set_filter(TodoFilter::Completed);
    assert!(service.visible().is_empty());

    service.toggle_todo(id);
    assert_eq!(service.visible().len(), 1);
    assert_eq!(service.visible()[0].id, id);
}

#[test]
fn category_filter_replaces_status_filter() {
    let mut service = TodoService::seeded();

    service.set_filter(TodoFilter::Active);
    assert_eq!(service.visible().len(), 2);

    service.set_filter(TodoFilter::Category(TodoCategory::Finance));
    let visible = service.visible();
    assert_eq!(visible.len(), 1);
    assert!(visible[0].completed);
    assert_eq!(service.items_left(), 2);
}

#[test]
fn quantity_never_goes_negative() {
    let mut service = InventoryService::new(RecordCollection::from_drafts([InventoryDraft {
        quantity: 1,
        ..InventoryDraft::named("Laundry Detergent")
    }]));
    let id = service.items().records()[0].id;

    assert_eq!(service.adjust_quantity(id, -5), Some(0));
    assert_eq!(service.items().get(id).unwrap().quantity, 0);
    assert_eq!(service.adjust_quantity(id, -1), Some(0));
    assert_eq!(service.adjust_quantity(id, 3), Some(3));
}

#[test]
fn negative_initial_quantity_is_rejected() {
    let mut service = InventoryService::seeded();
    let draft = InventoryDraft {
        quantity: -2,
        ..InventoryDraft::named("Batteries")
    };
    assert_eq!(service.add_item(draft), None);
    assert_eq!(service.items().len(), 3);
}

#[test]
fn inventory_filter_requires_category_and_search() {
    let mut service = InventoryService::seeded();

    service.set_search("LIGHT");
    let names: Vec<_> = service.visible().iter().map(|item| item.name.clone()).collect();
    assert_eq!(names, ["Light Bulbs"]);

    service.set_category_filter(homehub_core::CategoryFilter::Only(
        homehub_core::InventoryCategory::Cleaning,
    ));
    assert!(service.visible().is_empty());

    service.set_search("");
    assert_eq!(service.visible().len(), 1);
    assert_eq!(service.visible()[0].name, "Laundry Detergent");
}

#[test]
fn weekly_plan_keeps_empty_days() {
    let mut service = MealService::new(RecordCollection::new());
    service.add_meal(MealDraft {
        day: PlanDay::Friday,
        ..MealDraft::named("Pizza night")
    });

    let plan = service.weekly_plan();
    let days: Vec<_> = plan.iter().map(|entry| entry.day).collect();
    assert_eq!(
        days,
        [
            PlanDay::Monday,
            PlanDay::Tuesday,
            PlanDay::Wednesday,
            PlanDay::Thursday,
            PlanDay::Friday,
            PlanDay::Saturday,
            PlanDay::Sunday,
        ]
    );
    assert!(plan[2].is_empty());
    assert_eq!(plan[4].meals.len(), 1);
    assert!(service.meals_on(PlanDay::Wednesday).is_empty());
}
