use chrono::NaiveDate;
use homehub_core::{Cents, Expense, ExpenseCategory, Meal, MealType, PlanDay, Todo, TodoCategory};
use uuid::Uuid;

#[test]
fn expense_serializes_cents_and_snake_case_category() {
    let expense = Expense {
        id: Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap(),
        amount: Cents(12050),
        description: "Grocery shopping".to_string(),
        category: ExpenseCategory::Groceries,
        date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
    };

    let json = serde_json::to_value(&expense).unwrap();
    assert_eq!(json["amount"], 12050);
    assert_eq!(json["category"], "groceries");
    assert_eq!(json["date"], "2025-03-10");

    let decoded: Expense = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, expense);
}

#[test]
fn meal_and_todo_use_expected_field_names() {
    let meal = Meal {
        id: Uuid::new_v4(),
        name: "Chicken Salad".to_string(),
        ingredients: "Chicken breast, lettuce".to_string(),
        meal_type: MealType::Lunch,
        day: PlanDay::Tuesday,
    };
    let json = serde_json::to_value(&meal).unwrap();
    assert_eq!(json["meal_type"], "lunch");
    assert_eq!(json["day"], "Tuesday");

    let todo = Todo {
        id: Uuid::new_v4(),
        text: "Pay utility bills".to_string(),
        completed: true,
        category: TodoCategory::Finance,
    };
    let json = serde_json::to_value(&todo).unwrap();
    assert_eq!(json["completed"], true);
    assert_eq!(json["category"], "finance");
}

#[test]
fn unknown_category_is_rejected_on_decode() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "text": "Mow lawn",
        "completed": false,
        "category": "garden"
    });
    assert!(serde_json::from_value::<Todo>(value).is_err());
}
