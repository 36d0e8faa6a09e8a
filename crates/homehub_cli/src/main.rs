//! Text snapshot of every dashboard panel.
//!
//! # Responsibility
//! - Provide a small executable to verify `homehub_core` wiring.
//! - Print seeded panel derivations deterministically for a given date.

use chrono::{Local, NaiveDate};
use clap::Parser;
use homehub_core::{
    ClosedSet, Dashboard, DashboardConfig, ExpensePeriod, Intent, Tab, TodoFilter, WeekStart,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "homehub", version, about = "Household dashboard snapshot")]
struct Cli {
    /// Log level: trace|debug|info|warn|error.
    #[arg(long, env = "HOMEHUB_LOG_LEVEL", default_value = homehub_core::default_log_level())]
    log_level: String,

    /// Absolute directory for rolling log files.
    #[arg(long, env = "HOMEHUB_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// First day of the week for the expense "week" period.
    #[arg(long, env = "HOMEHUB_WEEK_START", default_value = "monday")]
    week_start: WeekStart,

    /// Date treated as today (YYYY-MM-DD); defaults to the local date.
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Expense period: week|month|all.
    #[arg(long, default_value = "month")]
    period: String,

    /// Only print this tab (smart-home, calendar, todo, expenses, meals, inventory).
    #[arg(long)]
    tab: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = DashboardConfig {
        log_level: cli.log_level.clone(),
        log_dir: cli.log_dir.clone(),
        week_start: cli.week_start,
    };
    if let Err(err) = homehub_core::init_from_config(&config) {
        eprintln!("homehub: {err}");
        return ExitCode::FAILURE;
    }

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let mut dashboard = Dashboard::seeded(today, &config);

    let Some(period) = ExpensePeriod::from_key(cli.period.as_str()) else {
        eprintln!("homehub: unsupported period `{}`; expected week|month|all", cli.period);
        return ExitCode::FAILURE;
    };
    dashboard.dispatch(Intent::SetPeriod(period));

    let tabs = match cli.tab.as_deref() {
        Some(key) => match Tab::from_key(key) {
            Some(tab) => vec![tab],
            None => {
                eprintln!("homehub: unknown tab `{key}`");
                return ExitCode::FAILURE;
            }
        },
        None => Tab::ALL.to_vec(),
    };

    println!(
        "{} · {} (core {})",
        homehub_core::dashboard::GREETING,
        homehub_core::dashboard::APP_TITLE,
        homehub_core::core_version()
    );
    for tab in tabs {
        println!();
        println!("== {} ==", tab.label());
        print_tab(&dashboard, tab, today);
    }
    ExitCode::SUCCESS
}

fn print_tab(dashboard: &Dashboard, tab: Tab, today: NaiveDate) {
    match tab {
        Tab::SmartHome => {
            let smart_home = &dashboard.smart_home;
            for (device, on) in smart_home.devices() {
                println!("  [{}] {}", if on { "on " } else { "off" }, device.label());
            }
            println!("  AC target: {} °C", smart_home.target_celsius());
            for reading in smart_home.readings() {
                println!("  {}: {}", reading.title, reading.value);
            }
            let weather = smart_home.weather();
            println!("  Outdoor: {} ({})", weather.value, weather.title);
        }
        Tab::Calendar => {
            let calendar = &dashboard.calendar;
            println!("  {}: {}", calendar.selected_date(), calendar.day_summary());
            for event in calendar.events().iter() {
                println!("  {} {}", event.starts_at.format("%Y-%m-%d %H:%M"), event.title);
            }
        }
        Tab::Todo => {
            let todo = &dashboard.todo;
            println!("  {} ({} items left)", TodoFilter::All.caption(), todo.items_left());
            for item in todo.todos().iter() {
                println!(
                    "  [{}] {} ({})",
                    if item.completed { "x" } else { " " },
                    item.text,
                    item.category.label()
                );
            }
        }
        Tab::Expenses => {
            let expenses = &dashboard.expenses;
            let summary = expenses.summary(today);
            println!("  {}: {}", summary.period.caption(), summary.total);
            for (category, total) in &summary.by_category {
                println!("    {}: {}", category.label(), total);
            }
            let recent = expenses.recent(today);
            if recent.is_empty() {
                println!("  {}", homehub_core::service::expense_service::EMPTY_PLACEHOLDER);
            }
            for expense in recent {
                println!(
                    "  {} {} {} ({})",
                    expense.date,
                    expense.amount,
                    expense.description,
                    expense.category.label()
                );
            }
        }
        Tab::Meals => {
            for plan in dashboard.meals.weekly_plan() {
                println!("  {}", plan.day.label());
                if plan.is_empty() {
                    println!("    {}", homehub_core::service::meal_service::EMPTY_DAY_PLACEHOLDER);
                }
                for meal in plan.meals {
                    println!("    {}: {}", meal.meal_type.label(), meal.name);
                }
            }
        }
        Tab::Inventory => {
            let inventory = &dashboard.inventory;
            for item in inventory.visible() {
                println!(
                    "  {} x{} ({}, {})",
                    item.name,
                    item.quantity,
                    item.category.label(),
                    item.location.label()
                );
            }
        }
    }
}
