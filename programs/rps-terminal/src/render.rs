//! Terminal rendering of the presenter's view

use colored::*;
use rps_logic::{Banner, Move, Outcome, RoundReport, View, INTRO};

const RULE: usize = 50;

fn header() -> String {
    format!(
        "{}\n{}\n{}",
        "=".repeat(RULE),
        "  Rock-Paper-Scissors".bright_cyan().bold(),
        "=".repeat(RULE)
    )
}

pub fn intro() -> String {
    format!("{}\n\n  {}\n", header(), INTRO)
}

fn moves(history: &[Move]) -> String {
    if history.is_empty() {
        return "-".dimmed().to_string();
    }
    history
        .iter()
        .map(|m| m.icon())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn setup(view: &View) -> String {
    format!(
        "\n  Player: {}\n  Rounds: {}\n",
        view.player_name.as_deref().unwrap_or("-").bright_blue().bold(),
        view.round.to_string().bold(),
    )
}

pub fn scoreboard(view: &View) -> String {
    format!(
        "  {:<10}{:>4}   last: {}\n  {:<10}{:>4}   last: {}\n  Rounds left: {}",
        view.player_name.as_deref().unwrap_or("You"),
        view.player_score.to_string().bright_blue().bold(),
        moves(&view.player_moves),
        "Computer",
        view.computer_score.to_string().bright_magenta().bold(),
        moves(&view.computer_moves),
        view.round,
    )
}

fn banner(banner: &Banner, outcome: Outcome) -> String {
    let headline = match outcome {
        Outcome::Win => banner.headline.bright_green().bold(),
        Outcome::Lose => banner.headline.red().bold(),
        Outcome::Tie => banner.headline.yellow().bold(),
    };
    format!("  {}\n  {}", headline, banner.subtext)
}

/// One resolved round: the moves, the result and the updated scoreboard
pub fn round(report: &RoundReport, view: &View) -> String {
    let mut out = format!(
        "\n  Round {}: {} vs {}\n",
        report.round_number,
        report.player_move.to_string().bright_blue(),
        report.computer_move.to_string().bright_magenta(),
    );
    out.push_str(&banner(&Banner::from(&report.verdict), report.verdict.outcome));
    out.push('\n');
    out.push_str(&scoreboard(view));
    out.push('\n');
    if let Some(summary) = &report.summary {
        out.push_str(&format!("\n{}\n", "=".repeat(RULE)));
        out.push_str(&banner(&Banner::from(summary), summary.outcome));
        out.push_str(&format!("\n{}\n", "=".repeat(RULE)));
    }
    out
}

pub fn error(e: &dyn std::fmt::Display) -> String {
    format!("  {}", e.to_string().red())
}
