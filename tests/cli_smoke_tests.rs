use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

const BIN_NAME: &str = "finance_core_cli";

fn script_command() -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("FINANCE_CORE_CLI_SCRIPT", "1");
    cmd
}

#[test]
fn cli_help_command_prints_overview() {
    script_command()
        .write_stdin("help\nexit\n")
        .assert()
        .success()
        .stdout(contains("Available commands"));
}

#[test]
fn cli_version_command_prints_version_info() {
    script_command()
        .write_stdin("version\nexit\n")
        .assert()
        .success()
        .stdout(contains("Finance Core"));
}

#[test]
fn cli_summary_reflects_income_and_expenses() {
    script_command()
        .write_stdin("reset\nincome 35000\nexpense set rent 20000\nsummary\nexit\n")
        .assert()
        .success()
        .stdout(contains("Monthly savings:      ₹15,000"))
        .stdout(contains("Suggested investment: ₹4,500"))
        .stdout(contains("Daily saving goal:    ₹350/day"));
}

#[test]
fn cli_goal_deposit_clamps_at_target() {
    script_command()
        .write_stdin(
            "reset\ngoal add Phone 1000 phone\ngoal deposit 1 5000\ngoals\nexit\n",
        )
        .assert()
        .success()
        .stdout(contains("saved ₹1,000 of ₹1,000"))
        .stdout(contains("complete"));
}

#[test]
fn cli_rejects_invalid_goal() {
    script_command()
        .write_stdin("reset\ngoal add Bike 0 bike\ngoals\nexit\n")
        .assert()
        .success()
        .stdout(contains("Goal rejected").or(contains("rejected")))
        .stdout(contains("No goals yet"));
}

#[test]
fn cli_earnings_group_by_month() {
    script_command()
        .write_stdin(
            "reset\nearn 2025-09-01 1200\nearn 2025-09-02 1450\nearn 2025-08-15 1150\nearnings\nexit\n",
        )
        .assert()
        .success()
        .stdout(contains("September 2025 — ₹2,650"))
        .stdout(contains("August 2025 — ₹1,150"));
}

#[test]
fn cli_breakdown_reports_no_data_for_empty_session() {
    script_command()
        .write_stdin("reset\nbreakdown\nexit\n")
        .assert()
        .success()
        .stdout(contains("No data"));
}

#[test]
fn cli_unknown_command_warns_and_continues() {
    script_command()
        .write_stdin("frobnicate\nversion\nexit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command").and(contains("Finance Core")));
}
