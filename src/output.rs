//! Colored branch table and cleanup summary formatting.

use crate::branch::Branch;
use crate::cleanup::{CleanupOutcome, CleanupResult, DeleteState};
use crate::config::Config;
use crate::constants::{DEAD_LABEL, LOCAL_LABEL, UPSTREAM_ARROW};
use crate::filter::{self, Filter};
use colored::{ColoredString, Colorize};

const COLUMN_PADDING: usize = 2;

/// Disables ANSI colors for everything printed afterwards.
pub fn set_color(enabled: bool) {
    if !enabled {
        colored::control::set_override(false);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Plain,
    Local,
    Remote,
    Committer,
}

/// One table cell: the text and the color it is painted with.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Cell {
    text: String,
    style: Style,
}

impl Cell {
    fn new(text: &str, style: Style) -> Self {
        Self {
            text: text.replace('\t', "_"),
            style,
        }
    }

    fn paint(&self) -> ColoredString {
        let text = self.text.as_str();
        match self.style {
            Style::Plain => text.normal(),
            Style::Local => text.blue(),
            Style::Remote => text.red(),
            Style::Committer => text.green(),
        }
    }
}

fn format_upstream(branch: &Branch) -> String {
    if !branch.has_upstream() {
        String::new()
    } else if branch.living {
        format!("{} {}", UPSTREAM_ARROW, branch.upstream)
    } else {
        DEAD_LABEL.to_string()
    }
}

fn branch_row(branch: &Branch) -> [Cell; 4] {
    let remote = if branch.remote.is_empty() {
        Cell::new(LOCAL_LABEL, Style::Local)
    } else {
        Cell::new(&branch.remote, Style::Remote)
    };
    [
        remote,
        Cell::new(&branch.name, Style::Plain),
        Cell::new(&branch.committer, Style::Committer),
        Cell::new(&format_upstream(branch), Style::Plain),
    ]
}

fn column_widths(rows: &[[Cell; 4]]) -> [usize; 4] {
    let mut widths = [0usize; 4];
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.text.chars().count());
        }
    }
    widths
}

/// Joins painted cells, padding outside the paint so colors never carry
/// whitespace. Nothing follows the last non-empty cell.
fn render_row<P>(row: &[Cell; 4], widths: &[usize; 4], paint: P) -> String
where
    P: Fn(&Cell) -> String,
{
    let Some(last) = row.iter().rposition(|cell| !cell.text.is_empty()) else {
        return String::new();
    };

    let mut line = String::new();
    for (i, cell) in row.iter().enumerate().take(last + 1) {
        line.push_str(&paint(cell));
        if i < last {
            let used = cell.text.chars().count();
            line.push_str(&" ".repeat(widths[i] - used + COLUMN_PADDING));
        }
    }
    line
}

/// Renders rows as aligned columns. Widths come from the uncolored text.
fn render_table(rows: &[[Cell; 4]]) -> Vec<String> {
    let widths = column_widths(rows);
    rows.iter()
        .map(|row| render_row(row, &widths, |cell| cell.paint().to_string()))
        .collect()
}

/// Formats the branches passing all filters, one line each.
#[must_use]
pub fn format_branches(branches: &[Branch], filters: &[Filter]) -> Vec<String> {
    let rows: Vec<[Cell; 4]> = branches
        .iter()
        .filter(|b| filter::matches_all(filters, b))
        .map(branch_row)
        .collect();
    render_table(&rows)
}

pub fn print_branches(branches: &[Branch], filters: &[Filter]) {
    for line in format_branches(branches, filters) {
        println!("{}", line);
    }
}

fn format_step(config: &Config, branch: &str, state: &DeleteState) -> Option<String> {
    config
        .is_verbose()
        .then(|| format!("  {} {}", branch.white().bold(), state.to_string().dimmed()))
}

/// Prints a cleanup state transition in verbose mode.
pub fn print_step(config: &Config, branch: &str, state: &DeleteState) {
    if let Some(line) = format_step(config, branch, state) {
        eprintln!("{}", line);
    }
}

fn format_result(result: &CleanupResult) -> String {
    let label = match result.outcome {
        CleanupOutcome::Deleted => "deleted".green(),
        CleanupOutcome::ForceDeleted => "force deleted".yellow(),
        CleanupOutcome::Kept => "kept".dimmed(),
    };
    format!("{} {}", label, result.branch)
}

/// Summary lines for a cleanup run; empty in quiet mode.
fn format_cleanup_summary(results: &[CleanupResult], config: &Config) -> Vec<String> {
    if config.is_quiet() {
        return Vec::new();
    }
    if results.is_empty() {
        return vec!["No dead branches".yellow().bold().to_string()];
    }
    results.iter().map(format_result).collect()
}

pub fn print_cleanup_summary(results: &[CleanupResult], config: &Config) {
    for line in format_cleanup_summary(results, config) {
        println!("{}", line);
    }
}
