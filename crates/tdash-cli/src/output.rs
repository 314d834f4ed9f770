//! Terminal output formatting.

use chrono::NaiveDate;
use colored::{ColoredString, Colorize};
use tdash_core::context::{Theme, TimezonePolicy};
use tdash_core::model::{
    ChatMessage, Event, InboxMessage, Notification, SettingValue, SettingsSection, Task, TeamMember,
};
use tdash_core::page::{CalendarCell, StatusProgress, TaskStats};
use tdash_core::presentation::{badge, ColorToken, Tagged};
use unicode_width::UnicodeWidthStr;

/// Color `text` for a token under `theme`.
pub fn paint(text: &str, token: ColorToken, theme: Theme) -> ColoredString {
    match (token, theme) {
        (ColorToken::Primary, Theme::Dark) => text.cyan(),
        (ColorToken::Primary, Theme::Light) => text.blue(),
        (ColorToken::Success, _) => text.green(),
        (ColorToken::Warning, _) => text.yellow(),
        (ColorToken::Error, _) => text.red(),
        (ColorToken::Info, _) => text.magenta(),
        (ColorToken::Muted, _) => text.dimmed(),
    }
}

/// A tag rendered in its badge color, padded to `width`.
fn tag_cell(tag: impl Into<Tagged>, text: &str, width: usize, theme: Theme) -> ColoredString {
    paint(&pad_right(text, width), badge(tag).color, theme)
}

pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print tasks as a table.
pub fn print_tasks_table(tasks: &[&Task], total: usize, theme: Theme) {
    if tasks.is_empty() {
        println!("{}", "No tasks found.".dimmed());
        return;
    }

    let title_w = term_width().saturating_sub(4 + 13 + 9 + 11 + 4).clamp(16, 48);
    println!(
        "{:<4} {} {:<13} {:<9} {:<11}",
        "ID",
        pad_right("Title", title_w),
        "Status",
        "Priority",
        "Due"
    );
    println!("{}", "─".repeat(4 + title_w + 13 + 9 + 11 + 4));

    for task in tasks {
        let due = task
            .due_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<4} {} {} {} {:<11}",
            task.id,
            pad_right(&truncate_visual(&task.title, title_w), title_w),
            tag_cell(task.status, task.status.label(), 13, theme),
            tag_cell(task.priority, task.priority.as_str(), 9, theme),
            due
        );
    }

    println!();
    println!("{} of {} task(s)", tasks.len(), total);
}

/// Print the notification feed with relative times.
pub fn print_notifications(rows: &[(&Notification, String)], unread: usize, theme: Theme) {
    println!("{} {}", "Notifications".bold(), format!("({} unread)", unread).dimmed());
    println!();

    if rows.is_empty() {
        println!("{}", "No notifications.".dimmed());
        return;
    }

    let width = term_width().saturating_sub(8).clamp(20, 100);
    for (n, ago) in rows {
        let marker = if n.unread { "●".cyan() } else { " ".normal() };
        let title = if n.unread { n.title.as_str().bold() } else { n.title.as_str().normal() };
        println!(
            "{} {} {} {}",
            marker,
            tag_cell(n.kind, n.kind.as_str(), 8, theme),
            title,
            format!("#{} · {}", n.id, ago).dimmed()
        );
        println!("    {}", truncate_visual(&n.message, width));
        if !n.actions.is_empty() {
            println!("    {}", format!("[{}]", n.actions.join("] [")).dimmed());
        }
    }
}

/// Print inbox messages.
pub fn print_inbox(messages: &[&InboxMessage], theme: Theme) {
    if messages.is_empty() {
        println!("{}", "No messages.".dimmed());
        return;
    }

    let width = term_width().saturating_sub(30).clamp(20, 80);
    for m in messages {
        let star = if m.is_starred { "★".yellow() } else { "☆".dimmed() };
        let clip = if m.has_attachment { "📎" } else { "  " };
        println!(
            "{} {} {:<3} {} {} {}",
            star,
            clip,
            tdash_core::model::initials(&m.sender),
            m.sender.bold(),
            tag_cell(m.category, m.category.as_str(), 8, theme),
            m.time.dimmed()
        );
        println!("         {}", m.subject);
        println!("         {}", truncate_visual(&m.preview, width).dimmed());
    }
}

/// Print the team roster.
pub fn print_team(members: &[&TeamMember], online: usize, theme: Theme) {
    println!("{} {}", "Team".bold(), format!("({} online)", online).dimmed());
    println!();

    if members.is_empty() {
        println!("{}", "No team members found.".dimmed());
        return;
    }

    for m in members {
        let projects: Vec<&str> = m.projects.iter().map(|p| p.name.as_str()).collect();
        println!(
            "{:<3} {:<3} {} {} {}",
            m.id,
            m.initials(),
            pad_right(&m.name, 18).bold(),
            tag_cell(m.status, m.status.as_str(), 8, theme),
            m.role.dimmed()
        );
        println!(
            "        {} projects · {} tasks · {}% completed · {}",
            m.stats.projects,
            m.stats.tasks,
            m.stats.completed_pct,
            projects.join(", ").dimmed()
        );
    }
}

/// Print a chat transcript.
pub fn print_chat(recipient: &str, messages: &[ChatMessage], theme: Theme) {
    println!("{} {}", "Chat with".bold(), paint(recipient, ColorToken::Primary, theme));
    println!();
    let width = term_width().saturating_sub(12).clamp(20, 70);
    for m in messages {
        let text = truncate_visual(&m.content, width);
        if m.is_sent {
            println!("{:>w$} {}", text, m.time.dimmed(), w = width);
        } else {
            println!("{} {}", paint(&text, ColorToken::Primary, theme), m.time.dimmed());
        }
    }
}

/// Print a month grid, Sunday first.
pub fn print_month(month: NaiveDate, weeks: &[Vec<CalendarCell>]) {
    println!("{}", month.format("%B %Y").to_string().bold());
    println!(" Su  Mo  Tu  We  Th  Fr  Sa");
    for week in weeks {
        let line: Vec<String> = week
            .iter()
            .map(|cell| {
                let mark = if cell.event_count > 0 { "•" } else { " " };
                let day = format!("{:>2}{}", cell.date.format("%-d"), mark);
                let styled = if !cell.in_month {
                    day.dimmed()
                } else if cell.is_selected {
                    day.reversed()
                } else if cell.is_today {
                    day.cyan().bold()
                } else {
                    day.normal()
                };
                format!(" {}", styled)
            })
            .collect();
        println!("{}", line.concat());
    }
}

/// Print events with their start time in `tz`.
pub fn print_events(heading: &str, events: &[&Event], tz: TimezonePolicy, theme: Theme) {
    println!();
    println!("{}", heading.bold());
    if events.is_empty() {
        println!("  {}", "No events.".dimmed());
        return;
    }
    for e in events {
        println!(
            "  {} {} {} {}",
            tz.clock_label(e.starts_at).dimmed(),
            tag_cell(e.category, e.category.as_str(), 9, theme),
            e.title,
            format!("{} min · {}", e.duration_minutes, e.location).dimmed()
        );
    }
}

/// Print the stats cards and status progress bars.
pub fn print_stats(stats: &TaskStats, progress: &[StatusProgress], theme: Theme) {
    println!(
        " {} {} total {} {} in progress {} {} completed {} {} overdue",
        "■".cyan(),
        stats.total.to_string().bold(),
        "·".dimmed(),
        stats.in_progress.to_string().yellow(),
        "·".dimmed(),
        stats.completed.to_string().green(),
        "·".dimmed(),
        stats.overdue.to_string().red()
    );
    println!();

    let bar_w = term_width().saturating_sub(30).clamp(10, 40);
    for p in progress {
        let filled = bar_w * usize::from(p.percent) / 100;
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(bar_w - filled));
        println!(
            " {} {} {:>3}% ({})",
            pad_right(p.status.label(), 12),
            paint(&bar, badge(p.status).color, theme),
            p.percent,
            p.count
        );
    }
}

/// Print a settings section.
pub fn print_settings(section: SettingsSection, entries: &[(&str, &SettingValue)]) {
    println!("{}", section.label().bold());
    println!();
    if entries.is_empty() {
        println!("{}", "No settings.".dimmed());
        return;
    }
    for (key, value) in entries {
        let shown = match value {
            SettingValue::Bool(true) => "on".green(),
            SettingValue::Bool(false) => "off".dimmed(),
            SettingValue::Choice { selected, .. } => selected.as_str().cyan(),
        };
        match value.options() {
            Some(options) if options.len() > 1 => {
                let options = format!("({})", options.join(" | "));
                println!("  {} {} {}", pad_right(key, 22), shown, options.dimmed());
            }
            _ => println!("  {} {}", pad_right(key, 22), shown),
        }
    }
}

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Pad a plain string to a given visual width (right-padded).
pub fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Truncate a string respecting visual width.
pub fn truncate_visual(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width - 2 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("..");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_and_truncate() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_right("abcdef", 4), "abcdef");
        assert_eq!(truncate_visual("Quarterly report", 8), "Quarte..");
        assert_eq!(truncate_visual("short", 8), "short");
    }
}
