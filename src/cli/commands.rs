use std::{thread, time::Duration};

use chrono::NaiveDate;

use crate::cli::output;
use crate::cli::shell::CliMode;
use crate::config::ConfigManager;
use crate::currency::{CurrencyFormatter, SymbolFormatter};
use crate::domain::{ExpenseCategory, GoalIcon, GoalStatus};
use crate::finance::PieChartData;
use crate::session::FinanceSession;

/// Whether the shell keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// All first-word commands, for help text and completion.
pub const COMMAND_NAMES: [&str; 13] = [
    "help",
    "version",
    "summary",
    "breakdown",
    "income",
    "expenses",
    "expense",
    "goals",
    "goal",
    "earnings",
    "earn",
    "reset",
    "exit",
];

/// Duration of the mock payment-gateway pause before a deposit lands.
/// Cosmetic only; skipped in script mode so tests stay fast.
const PAYMENT_DELAY: Duration = Duration::from_millis(1500);

/// Shared CLI runtime state: the owned session plus display preferences.
pub struct ShellContext {
    session: FinanceSession,
    formatter: SymbolFormatter,
    mode: CliMode,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Self {
        let formatter = match ConfigManager::new().and_then(|manager| manager.load()) {
            Ok(config) => SymbolFormatter::new(config.currency_symbol, config.grouping),
            Err(err) => {
                output::warning(format!("Using default display config: {err}"));
                SymbolFormatter::rupees()
            }
        };
        Self {
            session: FinanceSession::demo(),
            formatter,
            mode,
        }
    }

    pub fn dispatch(&mut self, command: &str, args: &[&str]) -> LoopControl {
        match command {
            "help" => self.cmd_help(),
            "version" => output::info(format!("Finance Core v{}", env!("CARGO_PKG_VERSION"))),
            "summary" => self.cmd_summary(),
            "breakdown" => self.cmd_breakdown(),
            "income" => self.cmd_income(args),
            "expenses" => self.cmd_expenses(),
            "expense" => self.cmd_expense(args),
            "goals" => self.cmd_goals(),
            "goal" => self.cmd_goal(args),
            "earnings" => self.cmd_earnings(),
            "earn" => self.cmd_earn(args),
            "reset" => self.cmd_reset(args),
            "exit" | "quit" => return LoopControl::Exit,
            other => output::warning(format!("Unknown command `{other}`. Try `help`.")),
        }
        LoopControl::Continue
    }

    fn fmt(&self, amount: f64) -> String {
        self.formatter.format_amount(amount)
    }

    fn cmd_help(&self) {
        output::section("Available commands");
        output::info("help                                   Show this overview");
        output::info("version                                Print version info");
        output::info("summary                                Monthly financial summary");
        output::info("breakdown                              Expenses vs savings pie data");
        output::info("income <amount>                        Set monthly income");
        output::info("expenses                               List expense rows");
        output::info("expense set <category> <amount>        Set a category amount");
        output::info("expense adjust <category> <delta>      Add/subtract from a category");
        output::info("goals                                  List savings goals");
        output::info("goal add <name> <target> <icon> [description]");
        output::info("goal deposit <number> <amount>         Add money to a goal");
        output::info("goal withdraw <number> <amount>        Take money out of a goal");
        output::info("earnings                               Daily income grouped by month");
        output::info("earn <YYYY-MM-DD|today> <amount>       Log a day's earnings");
        output::info("reset [demo]                           Start over (empty or demo data)");
        output::info("exit                                   Leave the shell");
    }

    fn cmd_summary(&self) {
        let snapshot = self.session.snapshot();
        output::section("Financial summary");
        output::info(format!("Monthly income:       {}", self.fmt(snapshot.monthly_income)));
        output::info(format!("Total expenses:       {}", self.fmt(snapshot.total_expenses)));
        output::info(format!("Monthly savings:      {}", self.fmt(snapshot.savings)));
        output::info(format!(
            "Suggested investment: {}",
            self.fmt(snapshot.suggested_investment)
        ));
        output::info(format!(
            "Daily saving goal:    {}/day",
            self.fmt(snapshot.daily_saving_goal.round())
        ));
        output::info(format!(
            "Saved in goals:       {}",
            self.fmt(self.session.goals.total_saved())
        ));
    }

    fn cmd_breakdown(&self) {
        output::section("Breakdown");
        match self.session.snapshot().pie_chart() {
            PieChartData::NoData => output::info("No data"),
            PieChartData::Segments(segments) => {
                for segment in segments {
                    output::info(format!(
                        "{:<8} {:>12}  {:6.1}° – {:6.1}°",
                        segment.label,
                        self.fmt(segment.value),
                        segment.sector.start_angle,
                        segment.sector.end_angle
                    ));
                }
            }
        }
    }

    fn cmd_income(&mut self, args: &[&str]) {
        let Some(amount) = args.first().and_then(|raw| parse_amount(raw)) else {
            output::warning("Usage: income <amount>");
            return;
        };
        self.session.set_monthly_income(amount);
        output::success(format!(
            "Monthly income set to {}",
            self.fmt(self.session.monthly_income())
        ));
    }

    fn cmd_expenses(&self) {
        output::section("Monthly expenses");
        for expense in self.session.expenses.expenses() {
            output::info(format!(
                "{:<10} {:<26} {}",
                expense.category.to_string(),
                expense.display_name,
                self.fmt(expense.amount)
            ));
        }
        output::info(format!("Total: {}", self.fmt(self.session.expenses.total())));
    }

    fn cmd_expense(&mut self, args: &[&str]) {
        let (action, rest) = match args.split_first() {
            Some(split) => split,
            None => {
                output::warning("Usage: expense <set|adjust> <category> <amount>");
                return;
            }
        };
        let (Some(category), Some(amount)) = (
            rest.first().and_then(|raw| ExpenseCategory::parse(raw)),
            rest.get(1).and_then(|raw| parse_amount(raw)),
        ) else {
            output::warning("Usage: expense <set|adjust> <category> <amount>");
            return;
        };
        let Some(id) = self
            .session
            .expenses
            .find_by_category(category)
            .map(|expense| expense.id)
        else {
            output::warning(format!("No expense row for category `{category}`"));
            return;
        };

        match *action {
            "set" => self.session.expenses.set_amount(id, amount),
            "adjust" => self.session.expenses.adjust(id, amount),
            other => {
                output::warning(format!("Unknown expense action `{other}`"));
                return;
            }
        }
        let current = self
            .session
            .expenses
            .find(id)
            .map(|expense| expense.amount)
            .unwrap_or_default();
        output::success(format!("{category} is now {}", self.fmt(current)));
    }

    fn cmd_goals(&self) {
        output::section("My savings goals");
        if self.session.goals.goals().is_empty() {
            output::info("No goals yet. Try `goal add`.");
            return;
        }
        for (index, goal) in self.session.goals.goals().iter().enumerate() {
            let status = match goal.status() {
                GoalStatus::Empty => "empty",
                GoalStatus::Partial => "in progress",
                GoalStatus::Complete => "complete",
            };
            output::info(format!(
                "{}. {} [{}] — saved {} of {} ({:.0}%, {})",
                index + 1,
                goal.name,
                goal.icon,
                self.fmt(goal.current_amount),
                self.fmt(goal.target_amount),
                goal.progress_percent(),
                status
            ));
        }
        output::info(format!(
            "Total saved in goals: {}",
            self.fmt(self.session.goals.total_saved())
        ));
    }

    fn cmd_goal(&mut self, args: &[&str]) {
        match args.split_first() {
            Some((&"add", rest)) => self.cmd_goal_add(rest),
            Some((&"deposit", rest)) => self.cmd_goal_transaction(rest, 1.0),
            Some((&"withdraw", rest)) => self.cmd_goal_transaction(rest, -1.0),
            _ => output::warning("Usage: goal <add|deposit|withdraw> ..."),
        }
    }

    fn cmd_goal_add(&mut self, args: &[&str]) {
        let (Some(name), Some(target)) = (args.first(), args.get(1).and_then(|raw| parse_amount(raw)))
        else {
            output::warning("Usage: goal add <name> <target> <icon> [description]");
            return;
        };
        let icon = args
            .get(2)
            .and_then(|raw| GoalIcon::parse(raw))
            .unwrap_or(GoalIcon::Gift);
        let description = if args.len() > 3 {
            Some(args[3..].join(" "))
        } else {
            None
        };

        match self.session.goals.create_goal(*name, target, description, icon) {
            Ok(_) => output::success(format!("Goal `{name}` created")),
            Err(err) => output::warning(format!("Goal rejected: {err}")),
        }
    }

    fn cmd_goal_transaction(&mut self, args: &[&str], sign: f64) {
        let (Some(index), Some(amount)) = (
            args.first().and_then(|raw| raw.parse::<usize>().ok()),
            args.get(1).and_then(|raw| parse_amount(raw)),
        ) else {
            output::warning("Usage: goal <deposit|withdraw> <number> <amount>");
            return;
        };
        if amount <= 0.0 {
            output::warning("Amount must be positive");
            return;
        }
        let Some(goal) = index
            .checked_sub(1)
            .and_then(|i| self.session.goals.goals().get(i))
        else {
            output::warning(format!("No goal numbered {index}. See `goals`."));
            return;
        };
        let (id, name) = (goal.id, goal.name.clone());

        if sign > 0.0 && self.mode == CliMode::Interactive {
            // Mock payment-gateway round trip before the deposit lands.
            output::info("Processing payment...");
            thread::sleep(PAYMENT_DELAY);
            output::success("Payment successful");
        }

        self.session.goals.apply_transaction(id, sign * amount);
        let current = self
            .session
            .goals
            .find(id)
            .map(|goal| goal.current_amount)
            .unwrap_or_default();
        output::success(format!("`{name}` now holds {}", self.fmt(current)));
    }

    fn cmd_earnings(&self) {
        output::section("Daily income tracker");
        let groups = self.session.earnings.group_by_month();
        if groups.is_empty() {
            output::info("No earnings logged yet. Try `earn today <amount>`.");
            return;
        }
        for key in self.session.earnings.month_order() {
            let bucket = &groups[&key];
            output::info(format!("{} — {}", key, self.fmt(bucket.total)));
            for entry in bucket.entries_by_date_desc() {
                output::info(format!(
                    "  {}  {}",
                    entry.date.format("%d %b"),
                    self.fmt(entry.amount)
                ));
            }
        }
    }

    fn cmd_earn(&mut self, args: &[&str]) {
        let (Some(raw_date), Some(amount)) = (args.first(), args.get(1).and_then(|raw| parse_amount(raw)))
        else {
            output::warning("Usage: earn <YYYY-MM-DD|today> <amount>");
            return;
        };
        let date = if raw_date.eq_ignore_ascii_case("today") {
            chrono::Local::now().date_naive()
        } else {
            match NaiveDate::parse_from_str(raw_date, "%Y-%m-%d") {
                Ok(date) => date,
                Err(_) => {
                    output::warning(format!("Could not parse date `{raw_date}` (expected YYYY-MM-DD)"));
                    return;
                }
            }
        };

        match self.session.earnings.log(date, amount) {
            Ok(_) => output::success(format!("Logged {} for {}", self.fmt(amount), date)),
            Err(err) => output::warning(format!("Earning rejected: {err}")),
        }
    }

    fn cmd_reset(&mut self, args: &[&str]) {
        if args.first().map(|raw| *raw == "demo").unwrap_or(false) {
            self.session = FinanceSession::demo();
            output::success("Session reset to demo data");
        } else {
            self.session = FinanceSession::new();
            output::success("Session reset");
        }
    }
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}
