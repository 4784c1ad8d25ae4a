//! Formatting helper functions for the terminal view
//!
//! `render` draws the whole interactive screen for an [`AppState`] snapshot;
//! `format_tasks` produces the plain listing printed by one-shot commands.

use crate::todo::{AppState, Filter, Priority, Task, Theme};
use colored::{Color, ColoredString, Colorize};

/// Colours used for one theme
struct Palette {
    text: Color,
    muted: Color,
    accent: Color,
    danger: Color,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            text: Color::Black,
            muted: Color::BrightBlack,
            accent: Color::Blue,
            danger: Color::Red,
        },
        Theme::Dark => Palette {
            text: Color::BrightWhite,
            muted: Color::White,
            accent: Color::BrightBlue,
            danger: Color::BrightRed,
        },
    }
}

fn priority_label(priority: Priority, colors: &Palette) -> ColoredString {
    let label = format!("({})", priority);
    match priority {
        Priority::High => label.color(colors.danger).bold(),
        Priority::Medium => label.yellow(),
        Priority::Low => label.green(),
    }
}

fn checkbox(task: &Task) -> &'static str {
    if task.completed { "[x]" } else { "[ ]" }
}

/// Render the full view for the interactive shell
pub fn render(state: &AppState) -> String {
    let colors = palette(state.theme());
    let mut out = String::new();

    // The toggle names the theme it switches to
    let toggle = if state.theme().is_dark() { "WHITE" } else { "DARK" };
    out.push_str(&format!(
        "{}  [{}]\n",
        "📝 To-Do List".color(colors.text).bold(),
        toggle.color(colors.accent)
    ));

    let filters = [Filter::All, Filter::Active, Filter::Completed]
        .iter()
        .map(|f| {
            let label = f.as_str().to_uppercase();
            if *f == state.filter() {
                format!("[{}]", label).color(colors.accent).bold().to_string()
            } else {
                format!(" {} ", label).color(colors.muted).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    out.push_str(&format!("{}\n", filters));

    let input = if state.input().is_empty() {
        "Enter a task...".color(colors.muted).italic()
    } else {
        state.input().color(colors.text)
    };
    out.push_str(&format!(
        "> {} {}\n",
        input,
        priority_label(state.selected_priority(), &colors)
    ));
    out.push('\n');

    let visible = state.visible();
    if visible.is_empty() {
        out.push_str(&format!("  {}\n", "No tasks".color(colors.muted)));
    }
    for task in visible {
        match state.edit() {
            Some(edit) if edit.id == task.id => {
                out.push_str(&format!(
                    "  {} {} {} {}  {}\n",
                    checkbox(task),
                    task.id.to_string().color(colors.muted),
                    "✎".color(colors.accent),
                    edit.draft.color(colors.text).underline(),
                    "(save | cancel)".color(colors.muted)
                ));
            }
            _ => {
                let text = if task.completed {
                    task.text.color(colors.muted).strikethrough()
                } else {
                    task.text.color(colors.text)
                };
                out.push_str(&format!(
                    "  {} {} {} {}\n",
                    checkbox(task),
                    task.id.to_string().color(colors.muted),
                    priority_label(task.priority, &colors),
                    text
                ));
            }
        }
    }

    out.push('\n');
    let list = state.tasks();
    out.push_str(&format!(
        "{}\n",
        format_summary(list.active_count(), list.completed_count()).color(colors.muted)
    ));
    out
}

pub fn format_summary(active: usize, completed: usize) -> String {
    format!("{} active, {} completed", active, completed)
}

/// Format tasks into a plain display string
///
/// # Arguments
/// * `tasks` - Tasks to format, in display order
/// * `show_dates` - Whether to include created/updated dates
pub fn format_tasks(tasks: &[&Task], show_dates: bool) -> String {
    if tasks.is_empty() {
        return "No tasks found".to_string();
    }

    let mut result = format!("Found {} task(s):\n\n", tasks.len());
    for task in tasks {
        result.push_str(&format!(
            "- {} {} {} (priority: {})\n",
            checkbox(task),
            task.id,
            task.text,
            task.priority
        ));
        if show_dates {
            result.push_str(&format!("  Created: {}\n", task.created_at));
            result.push_str(&format!("  Updated: {}\n", task.updated_at));
        }
    }

    result
}
