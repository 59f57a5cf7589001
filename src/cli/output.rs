//! Output formatting utilities

use crate::application::ProgressReport;
use crate::domain::{Difficulty, DifficultyCounts, GoalProgress, JournalEntry, Pattern};
use chrono::Local;

const BAR_WIDTH: usize = 20;

fn bullet_item(line: &str) -> Option<&str> {
    line.strip_prefix("- ").or_else(|| line.strip_prefix("* "))
}

/// Render free text for the terminal, each line indented by two spaces.
///
/// If any line is a bullet (`- ` or `* `), bullets become `•` items, other
/// non-blank lines are kept as indented continuation lines and blank lines
/// are dropped. Text without bullets is printed line by line.
pub fn format_markup(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let has_bullets = lines.iter().any(|line| bullet_item(line.trim()).is_some());

    let rendered: Vec<String> = if has_bullets {
        lines
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(|line| match bullet_item(line) {
                Some(item) => format!("  • {}", item),
                None => format!("    {}", line),
            })
            .collect()
    } else {
        lines.iter().map(|line| format!("  {}", line)).collect()
    };

    rendered.join("\n")
}

fn difficulty_label(difficulty: Option<Difficulty>) -> &'static str {
    difficulty.map(|d| d.label()).unwrap_or("-")
}

/// Format a list of patterns for display
pub fn format_pattern_list(patterns: &[&Pattern]) -> String {
    if patterns.is_empty() {
        return "No patterns found".to_string();
    }

    let mut output = String::new();
    for pattern in patterns {
        output.push_str(&format!(
            "{}  {:<6}  {}\n",
            pattern.id,
            difficulty_label(pattern.difficulty),
            pattern.title
        ));
    }
    output
}

/// Format one pattern with its description and code
pub fn format_pattern(pattern: &Pattern) -> String {
    let mut output = format!(
        "{} [{}]\nid: {}\n",
        pattern.title,
        difficulty_label(pattern.difficulty),
        pattern.id
    );
    if !pattern.description.is_empty() {
        output.push_str(&format!("\n{}\n", format_markup(&pattern.description)));
    }
    if !pattern.code.is_empty() {
        output.push_str(&format!("\nCode:\n{}\n", pattern.code));
    }
    output
}

/// Format a list of journal entries for display
pub fn format_entry_list(entries: &[&JournalEntry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        let mut line = format!(
            "{}  {}  {:<6}  {}",
            entry.date.with_timezone(&Local).format("%d-%m-%Y"),
            entry.id,
            difficulty_label(entry.difficulty),
            entry.title
        );
        if !entry.platform.is_empty() {
            line.push_str(&format!(" ({})", entry.platform));
        }
        if let Some(rating) = entry.rating {
            line.push_str(&format!("  {}", rating));
        }
        output.push_str(&line);
        output.push('\n');
    }
    output
}

/// Format one journal entry with all of its fields
pub fn format_entry(entry: &JournalEntry) -> String {
    let mut output = format!(
        "{} [{}]\nid: {}\ndate: {}\n",
        entry.title,
        difficulty_label(entry.difficulty),
        entry.id,
        entry.date.with_timezone(&Local).format("%d-%m-%Y %H:%M")
    );

    let mut field = |name: &str, value: String| {
        if !value.is_empty() {
            output.push_str(&format!("{}: {}\n", name, value));
        }
    };
    field("platform", entry.platform.clone());
    field("topic", entry.topic.clone());
    field("time", entry.time.map(|t| format!("{} min", t)).unwrap_or_default());
    field("attempts", entry.attempts.map(|a| a.to_string()).unwrap_or_default());
    field("rating", entry.rating.map(|r| r.to_string()).unwrap_or_default());

    if !entry.notes.is_empty() {
        output.push_str(&format!("\nNotes:\n{}\n", format_markup(&entry.notes)));
    }
    if !entry.code.is_empty() {
        output.push_str(&format!("\nCode:\n{}\n", entry.code));
    }
    output
}

fn format_counts(counts: &DifficultyCounts) -> String {
    Difficulty::ALL
        .iter()
        .map(|&difficulty| format!("{} {}", difficulty, counts.get(difficulty)))
        .collect::<Vec<_>>()
        .join("  ")
}

fn format_goal(label: &str, goal: &GoalProgress) -> String {
    let filled = goal.bar_percent() as usize * BAR_WIDTH / 100;
    let mut line = format!(
        "{:<13} {:>3} / {:<3} [{}{}] {}% complete",
        label,
        goal.done,
        goal.target,
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        goal.percent
    );
    if goal.is_met() {
        line.push_str(" (goal met)");
    }
    line
}

fn plural_days(n: u32) -> &'static str {
    if n == 1 {
        "day"
    } else {
        "days"
    }
}

/// Format the goals & streaks report
pub fn format_report(report: &ProgressReport) -> String {
    let progress = &report.progress;
    let mut output = String::new();

    output.push_str(&format!(
        "Current streak: {} {}\n",
        progress.current_streak,
        plural_days(progress.current_streak)
    ));
    output.push_str(&format!(
        "Best streak:    {} {}\n\n",
        progress.best_streak,
        plural_days(progress.best_streak)
    ));

    output.push_str(&format_goal("Weekly goal", &report.weekly_goal));
    output.push('\n');
    output.push_str(&format_goal("Monthly goal", &report.monthly_goal));
    output.push_str("\n\nThis week:\n");

    for slot in &progress.weekly_activity {
        let mark = if slot.is_active {
            format!("{} {}", "■".repeat(slot.count.min(BAR_WIDTH)), slot.count)
        } else {
            "·".to_string()
        };
        output.push_str(&format!("  {}  {}\n", slot.day, mark));
    }

    output.push_str(&format!(
        "\nProblems: {}\n",
        format_counts(&progress.difficulty_counts)
    ));
    output.push_str(&format!(
        "Patterns: {}\n",
        format_counts(&report.pattern_counts)
    ));
    output
}
