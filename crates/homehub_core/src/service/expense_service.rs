//! Expense panel service.
//!
//! # Responsibility
//! - Filter expenses by rolling week/month/all period relative to `today`.
//! - Derive the period total, per-category totals and the recent list.
//!
//! # Invariants
//! - Period boundaries are whole dates: a record is in the period when
//!   `record.date >= boundary`.
//! - Category totals list categories in first-seen order of the filtered view.

use crate::config::WeekStart;
use crate::model::expense::{Expense, ExpenseCategory, ExpenseDraft};
use crate::model::money::Cents;
use crate::model::record::RecordId;
use crate::repo::collection::RecordCollection;
use crate::repo::derive;
use chrono::{Datelike, NaiveDate};

pub const EMPTY_PLACEHOLDER: &str = "No expenses recorded";
/// Rows shown in the "recent expenses" list.
pub const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExpensePeriod {
    Week,
    #[default]
    Month,
    All,
}

impl ExpensePeriod {
    pub fn from_key(raw: &str) -> Option<Self> {
        match raw {
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::All => "all",
        }
    }

    pub fn caption(self) -> &'static str {
        match self {
            Self::Week => "This week's expenses",
            Self::Month => "This month's expenses",
            Self::All => "All expenses",
        }
    }

    /// First date inside the period, or `None` for `All`.
    pub fn boundary(self, today: NaiveDate, week_start: WeekStart) -> Option<NaiveDate> {
        match self {
            Self::Week => Some(week_start.start_of_week(today)),
            Self::Month => Some(today.with_day(1).unwrap_or(today)),
            Self::All => None,
        }
    }
}

/// Derived numbers for the summary card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseSummary {
    pub period: ExpensePeriod,
    pub total: Cents,
    pub by_category: Vec<(ExpenseCategory, Cents)>,
    pub count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ExpenseService {
    expenses: RecordCollection<Expense>,
    period: ExpensePeriod,
    week_start: WeekStart,
}

impl ExpenseService {
    pub fn new(expenses: RecordCollection<Expense>, week_start: WeekStart) -> Self {
        Self {
            expenses,
            period: ExpensePeriod::Month,
            week_start,
        }
    }

    pub fn seeded(week_start: WeekStart) -> Self {
        let expenses = RecordCollection::from_drafts([
            seed("120.50", "Grocery shopping", ExpenseCategory::Groceries, 10),
            seed("45.00", "Electricity bill", ExpenseCategory::Utilities, 5),
            seed("25.99", "Household supplies", ExpenseCategory::Home, 8),
        ]);
        Self::new(expenses, week_start)
    }

    pub fn expenses(&self) -> &RecordCollection<Expense> {
        &self.expenses
    }

    pub fn add_expense(&mut self, draft: ExpenseDraft) -> Option<RecordId> {
        self.expenses.add(draft)
    }

    pub fn delete_expense(&mut self, id: RecordId) -> bool {
        self.expenses.remove(id)
    }

    pub fn period(&self) -> ExpensePeriod {
        self.period
    }

    pub fn set_period(&mut self, period: ExpensePeriod) {
        self.period = period;
    }

    /// Expenses inside the active period, in insertion order.
    pub fn filtered(&self, today: NaiveDate) -> Vec<&Expense> {
        match self.period.boundary(today, self.week_start) {
            Some(boundary) => self
                .expenses
                .filter(move |expense| expense.date >= boundary)
                .collect(),
            None => self.expenses.iter().collect(),
        }
    }

    pub fn total(&self, today: NaiveDate) -> Cents {
        derive::total(self.filtered(today), |expense| expense.amount)
    }

    pub fn summary(&self, today: NaiveDate) -> ExpenseSummary {
        let filtered = self.filtered(today);
        ExpenseSummary {
            period: self.period,
            total: self.total(today),
            by_category: derive::aggregate(
                filtered.iter(),
                |expense| expense.amount,
                |expense| expense.category,
            ),
            count: filtered.len(),
        }
    }

    /// First `RECENT_LIMIT` expenses of the filtered view.
    pub fn recent(&self, today: NaiveDate) -> Vec<&Expense> {
        let mut filtered = self.filtered(today);
        filtered.truncate(RECENT_LIMIT);
        filtered
    }
}

fn seed(amount: &str, description: &str, category: ExpenseCategory, day: u32) -> ExpenseDraft {
    ExpenseDraft {
        amount: amount.to_string(),
        description: description.to_string(),
        category,
        date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap_or(NaiveDate::MIN),
    }
}

#[cfg(test)]
mod tests {
    use super::{ExpensePeriod, ExpenseService};
    use crate::config::WeekStart;
    use crate::model::money::Cents;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_boundary_is_first_of_month() {
        assert_eq!(
            ExpensePeriod::Month.boundary(date(2025, 3, 31), WeekStart::Monday),
            Some(date(2025, 3, 1))
        );
        assert_eq!(
            ExpensePeriod::All.boundary(date(2025, 3, 31), WeekStart::Monday),
            None
        );
    }

    #[test]
    fn seeded_month_total_covers_all_samples() {
        let service = ExpenseService::seeded(WeekStart::Monday);
        assert_eq!(service.period(), ExpensePeriod::Month);
        assert_eq!(service.total(date(2025, 3, 20)), Cents(19149));
        assert_eq!(service.total(date(2025, 4, 2)), Cents::ZERO);
    }

    #[test]
    fn period_keys_parse() {
        for key in ["week", "month", "all"] {
            assert_eq!(ExpensePeriod::from_key(key).map(ExpensePeriod::key), Some(key));
        }
        assert_eq!(ExpensePeriod::from_key("year"), None);
    }
}
