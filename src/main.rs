//! To-Do List - Main Entry Point
//!
//! Command-line front end for the `todo_list` library. One-shot subcommands
//! apply a single change and print the list; `shell` (the default) runs an
//! interactive session that re-renders after every command.

use anyhow::{Result, bail};
use clap::{CommandFactory, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use todo_list::formatting::{format_tasks, render};
use todo_list::intent::COMMAND_HELP;
use todo_list::validation::format_unknown_task_error;
use todo_list::{
    FileStore, Filter, Intent, PersistenceStore, Priority, TaskId, TaskListController, Theme,
    Transition,
};
use tracing_subscriber::EnvFilter;

/// Personal to-do list with local file persistence
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the task list file (.toml, or .json for the browser layout)
    #[arg(env = "TODO_LIST_FILE")]
    file: PathBuf,

    /// Display mode
    #[arg(long, default_value = "light")]
    theme: Theme,

    /// Show only active or completed tasks
    #[arg(long)]
    filter: Option<Filter>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a task
    Add {
        /// Priority of the new task (low, medium, high)
        #[arg(long, short)]
        priority: Option<Priority>,
        /// Task text
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Mark a task completed, or active again
    Toggle { id: TaskId },
    /// Delete a task
    Delete { id: TaskId },
    /// Replace the text of a task
    Edit {
        id: TaskId,
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Change the priority of a task
    Priority { id: TaskId, priority: Priority },
    /// List tasks
    List {
        /// Include created and updated dates
        #[arg(long)]
        dates: bool,
    },
    /// Delete every task and the storage file
    Clear,
    /// Interactive session (default)
    Shell,
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("TODO_LIST_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 && std::env::var_os("TODO_LIST_FILE").is_none() {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();
    init_logging();

    let mut todo = TaskListController::new(FileStore::new(&args.file));
    todo.set_theme(args.theme);
    if let Some(filter) = args.filter {
        todo.set_filter(filter);
    }

    match args.command.unwrap_or(Command::Shell) {
        Command::Shell => run_shell(&mut todo),
        command => run_command(&mut todo, command),
    }
}

fn ensure_task_exists<S: PersistenceStore>(todo: &TaskListController<S>, id: TaskId) -> Result<()> {
    let tasks = todo.state().tasks();
    if tasks.find_by_id(id).is_none() {
        bail!("{}", format_unknown_task_error(id, tasks));
    }
    Ok(())
}

/// Apply one subcommand and print the resulting list
fn run_command<S: PersistenceStore>(todo: &mut TaskListController<S>, command: Command) -> Result<()> {
    let mut show_dates = false;
    match command {
        Command::Add { priority, text } => {
            if todo.add(&text.join(" "), priority) == Transition::Unchanged {
                bail!("Task text is empty");
            }
        }
        Command::Toggle { id } => {
            ensure_task_exists(todo, id)?;
            todo.toggle_complete(id);
        }
        Command::Delete { id } => {
            ensure_task_exists(todo, id)?;
            todo.delete(id);
        }
        Command::Edit { id, text } => {
            ensure_task_exists(todo, id)?;
            todo.start_edit(id);
            todo.set_draft(text.join(" "));
            if todo.save_edit() == Transition::Unchanged {
                bail!("Task text is empty");
            }
        }
        Command::Priority { id, priority } => {
            ensure_task_exists(todo, id)?;
            todo.set_priority(id, priority);
        }
        Command::List { dates } => show_dates = dates,
        Command::Clear => {
            todo.clear_all();
        }
        Command::Shell => return run_shell(todo),
    }

    println!("{}", format_tasks(&todo.visible(), show_dates));
    Ok(())
}

/// Read commands from stdin until EOF or `quit`
fn run_shell<S: PersistenceStore>(todo: &mut TaskListController<S>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print!("{}", render(todo.state()));

    loop {
        write!(stdout, "todo> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "" => continue,
            "quit" | "exit" | "q" => break,
            "help" | "?" => {
                println!("{}", COMMAND_HELP);
                println!("  list                        redraw the list");
                println!("  quit                        leave the shell");
                continue;
            }
            "list" => {}
            command => match command.parse::<Intent>() {
                Ok(intent) => {
                    todo.dispatch(intent);
                }
                Err(e) => {
                    eprintln!("{}", e);
                    continue;
                }
            },
        }

        print!("{}", render(todo.state()));
    }

    println!();
    Ok(())
}
