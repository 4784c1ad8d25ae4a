//! User intents emitted by the view
//!
//! The interactive shell reads one command per line; [`Intent`]'s `FromStr`
//! implementation is that command language.

use crate::todo::{Filter, Priority, TaskId, Theme};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Add a task; `None` text means "use the input buffer", `None`
    /// priority means "use the priority selector"
    Add {
        text: Option<String>,
        priority: Option<Priority>,
    },
    SetInput(String),
    ToggleComplete(TaskId),
    Delete(TaskId),
    StartEdit(TaskId),
    SetDraft(String),
    SaveEdit,
    CancelEdit,
    SetFilter(Filter),
    ToggleFilter(Filter),
    SetTheme(Theme),
    ToggleTheme,
    SelectPriority(Priority),
    SetPriority(TaskId, Priority),
    ClearAll,
}

pub const COMMAND_HELP: &str = "\
Commands:
  add [text]                  add a task (uses the input buffer when text is omitted)
  add! <low|medium|high> <text>
                              add a task with an explicit priority
  input <text>                set the input buffer
  toggle <id> | done <id>     flip a task between active and completed
  delete <id> | rm <id>       delete a task
  edit <id>                   start editing a task
  draft <text>                replace the text being edited
  save                        save the edit
  cancel                      discard the edit
  filter <all|active|completed>
                              show a subset (repeat to go back to all)
  theme [light|dark]          switch display mode
  priority <low|medium|high>  priority for the next add
  prio <id> <low|medium|high> change a task's priority
  clear                       delete every task";

/// Split a line into its first word and the trimmed remainder
fn split_command(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    }
}

fn require<'a>(rest: &'a str, usage: &str) -> Result<&'a str, String> {
    if rest.is_empty() {
        Err(format!("Missing argument. Usage: {}", usage))
    } else {
        Ok(rest)
    }
}

impl FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (command, rest) = split_command(s);
        match command.to_lowercase().as_str() {
            "" => Err("Empty command. Type 'help' for a list of commands".to_string()),
            "add" => Ok(Intent::Add {
                text: (!rest.is_empty()).then(|| rest.to_string()),
                priority: None,
            }),
            "add!" => {
                let (priority, text) = split_command(require(rest, "add! <priority> <text>")?);
                Ok(Intent::Add {
                    text: Some(require(text, "add! <priority> <text>")?.to_string()),
                    priority: Some(priority.parse()?),
                })
            }
            "input" => Ok(Intent::SetInput(rest.to_string())),
            "toggle" | "done" => Ok(Intent::ToggleComplete(
                require(rest, "toggle <id>")?.parse()?,
            )),
            "delete" | "rm" => Ok(Intent::Delete(require(rest, "delete <id>")?.parse()?)),
            "edit" => Ok(Intent::StartEdit(require(rest, "edit <id>")?.parse()?)),
            "draft" => Ok(Intent::SetDraft(rest.to_string())),
            "save" => Ok(Intent::SaveEdit),
            "cancel" => Ok(Intent::CancelEdit),
            "filter" => Ok(Intent::ToggleFilter(
                require(rest, "filter <all|active|completed>")?.parse()?,
            )),
            "theme" if rest.is_empty() => Ok(Intent::ToggleTheme),
            "theme" => Ok(Intent::SetTheme(rest.parse()?)),
            "priority" => Ok(Intent::SelectPriority(
                require(rest, "priority <low|medium|high>")?.parse()?,
            )),
            "prio" => {
                let (id, priority) = split_command(require(rest, "prio <id> <priority>")?);
                Ok(Intent::SetPriority(
                    id.parse()?,
                    require(priority, "prio <id> <priority>")?.parse()?,
                ))
            }
            "clear" => Ok(Intent::ClearAll),
            other => Err(format!(
                "Unknown command '{}'. Type 'help' for a list of commands",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        assert_eq!(
            "add buy  milk ".parse::<Intent>(),
            Ok(Intent::Add {
                text: Some("buy  milk".to_string()),
                priority: None
            })
        );
        assert_eq!(
            "add".parse::<Intent>(),
            Ok(Intent::Add {
                text: None,
                priority: None
            })
        );
    }

    #[test]
    fn test_parse_add_with_priority() {
        assert_eq!(
            "add! high file taxes".parse::<Intent>(),
            Ok(Intent::Add {
                text: Some("file taxes".to_string()),
                priority: Some(Priority::High)
            })
        );
        assert!("add! urgent file taxes".parse::<Intent>().is_err());
        assert!("add! high".parse::<Intent>().is_err());
    }

    #[test]
    fn test_parse_id_commands() {
        assert_eq!(
            "toggle 3".parse::<Intent>(),
            Ok(Intent::ToggleComplete(TaskId(3)))
        );
        assert_eq!(
            "done #3".parse::<Intent>(),
            Ok(Intent::ToggleComplete(TaskId(3)))
        );
        assert_eq!("rm 2".parse::<Intent>(), Ok(Intent::Delete(TaskId(2))));
        assert_eq!("edit 1".parse::<Intent>(), Ok(Intent::StartEdit(TaskId(1))));
        assert!("toggle".parse::<Intent>().is_err());
        assert!("delete x".parse::<Intent>().is_err());
    }

    #[test]
    fn test_parse_edit_flow() {
        assert_eq!(
            "draft new text".parse::<Intent>(),
            Ok(Intent::SetDraft("new text".to_string()))
        );
        assert_eq!("save".parse::<Intent>(), Ok(Intent::SaveEdit));
        assert_eq!("CANCEL".parse::<Intent>(), Ok(Intent::CancelEdit));
    }

    #[test]
    fn test_parse_view_commands() {
        assert_eq!(
            "filter active".parse::<Intent>(),
            Ok(Intent::ToggleFilter(Filter::Active))
        );
        assert_eq!("theme".parse::<Intent>(), Ok(Intent::ToggleTheme));
        assert_eq!(
            "theme dark".parse::<Intent>(),
            Ok(Intent::SetTheme(Theme::Dark))
        );
        assert_eq!(
            "priority low".parse::<Intent>(),
            Ok(Intent::SelectPriority(Priority::Low))
        );
        assert_eq!(
            "prio 4 high".parse::<Intent>(),
            Ok(Intent::SetPriority(TaskId(4), Priority::High))
        );
        assert!("prio 4".parse::<Intent>().is_err());
        assert_eq!("clear".parse::<Intent>(), Ok(Intent::ClearAll));
    }

    #[test]
    fn test_parse_errors() {
        assert!("".parse::<Intent>().unwrap_err().contains("Empty command"));
        let err = "frobnicate".parse::<Intent>().unwrap_err();
        assert!(err.contains("Unknown command 'frobnicate'"));
    }
}
