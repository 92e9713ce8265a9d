use clap::{CommandFactory, Parser};
use std::io::{self, BufRead};

mod cli;
mod style;

use board_core::error::AppError;
use board_core::model::{Task, TaskOverrides, TaskPriority, TaskStatus, create_task};
use board_core::prefs::{self, ThemePreference};
use board_core::query::{decode_filters, encode_filters};
use board_core::storage::{FileSlot, tasks_slot, theme_slot};
use board_core::store::{TaskPatch, TaskStore};
use board_core::view::{BoardFilters, SortField, SortOrder, GroupedTasks, group_tasks};
use cli::{Cli, Command};
use style::{Palette, palette_for_theme};
use tabled::{Table, Tabled};
use time::format_description::well_known::Rfc3339;

#[derive(Tabled)]
struct BoardRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Pri")]
    priority: &'static str,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Assignee")]
    assignee: String,
    #[tabled(rename = "Tags")]
    tags: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

impl BoardRow {
    fn from_task(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            priority: task.priority.as_str(),
            title: task.title.clone(),
            assignee: if task.assignee.is_empty() {
                "-".to_string()
            } else {
                task.assignee.clone()
            },
            tags: task.tags.join(", "),
            updated: format_instant(task.updated_at),
        }
    }
}

fn format_instant(instant: time::OffsetDateTime) -> String {
    instant.format(&Rfc3339).unwrap_or_else(|_| "-".to_string())
}

fn open_store() -> Result<TaskStore<FileSlot>, AppError> {
    let slot = tasks_slot()?;
    let mut store = TaskStore::new(slot);
    store.hydrate();
    Ok(store)
}

fn require_task(store: &TaskStore<FileSlot>, id: &str) -> Result<Task, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_input("id is required"));
    }
    store
        .get(trimmed)
        .cloned()
        .ok_or_else(|| AppError::invalid_input("task not found"))
}

fn parse_priority_arg(raw: &str) -> Result<TaskPriority, AppError> {
    TaskPriority::parse(raw)
        .ok_or_else(|| AppError::invalid_input(format!("unknown priority '{raw}'")))
}

fn parse_status_arg(raw: &str) -> Result<TaskStatus, AppError> {
    TaskStatus::parse(raw).ok_or_else(|| AppError::invalid_input(format!("unknown status '{raw}'")))
}

fn resolve_board_filters(
    search: Option<String>,
    priority: Option<String>,
    sort: Option<String>,
    order: Option<String>,
    query: Option<String>,
) -> Result<BoardFilters, AppError> {
    // A shared view string is the starting point; explicit flags win.
    let mut filters = match query {
        Some(raw) => decode_filters(&cli::split_query_pairs(&raw)),
        None => BoardFilters::default(),
    };

    if let Some(search) = search {
        filters.search_text = search;
    }
    if let Some(priority) = priority {
        filters.priority = Some(parse_priority_arg(&priority)?);
    }
    if let Some(sort) = sort {
        filters.sort_field = match sort.trim() {
            "createdAt" | "created" => SortField::CreatedAt,
            "priority" => SortField::Priority,
            other => {
                return Err(AppError::invalid_input(format!(
                    "unknown sort field '{other}'"
                )));
            }
        };
    }
    if let Some(order) = order {
        filters.sort_order = match order.trim() {
            "asc" => SortOrder::Ascending,
            "desc" => SortOrder::Descending,
            other => {
                return Err(AppError::invalid_input(format!(
                    "unknown sort order '{other}'"
                )));
            }
        };
    }

    Ok(filters)
}

fn print_board_plain(grouped: &GroupedTasks, filters: &BoardFilters, palette: &Palette) {
    for status in TaskStatus::ALL {
        let column = grouped.column(status);
        let header = format!("{} ({})", status.as_str(), column.len());
        println!("{}", palette.accentize(&header));

        if column.is_empty() {
            println!("{}", palette.mutedize("  (no tasks)"));
        } else {
            let rows: Vec<BoardRow> = column.iter().map(BoardRow::from_task).collect();
            println!("{}", Table::new(rows));
        }
        println!();
    }

    let view = cli::join_query_pairs(&encode_filters(filters));
    println!("{}", palette.mutedize(&format!("view: {view}")));
}

fn print_board_json(grouped: &GroupedTasks) {
    let json = serde_json::json!({
        "Backlog": grouped.backlog,
        "In Progress": grouped.in_progress,
        "Done": grouped.done,
    });
    println!("{json}");
}

fn print_task_json(task: &Task) {
    match serde_json::to_value(task) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("failed to render task as JSON: {err}"),
    }
}

fn print_task_plain(task: &Task) {
    println!("id:          {}", task.id);
    println!("title:       {}", task.title);
    println!("description: {}", task.description);
    println!("status:      {}", task.status.as_str());
    println!("priority:    {}", task.priority.as_str());
    println!("assignee:    {}", task.assignee);
    println!("tags:        {}", task.tags.join(", "));
    println!("created:     {}", format_instant(task.created_at));
    println!("updated:     {}", format_instant(task.updated_at));
}

fn run_command(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Command::Board {
            search,
            priority,
            sort,
            order,
            query,
        } => {
            let filters = resolve_board_filters(search, priority, sort, order, query)?;
            let store = open_store()?;
            let grouped = group_tasks(store.tasks(), &filters);

            if cli.json {
                print_board_json(&grouped);
            } else {
                let theme = prefs::load_theme(&theme_slot()?);
                print_board_plain(&grouped, &filters, &palette_for_theme(theme));
            }
        }
        Command::Add {
            title,
            description,
            priority,
            status,
            assignee,
            tags,
        } => {
            let trimmed = title.trim();
            if trimmed.is_empty() {
                return Err(AppError::invalid_input("title is required"));
            }

            let task = create_task(TaskOverrides {
                title: Some(trimmed.to_string()),
                description,
                status: status.as_deref().map(parse_status_arg).transpose()?,
                priority: priority.as_deref().map(parse_priority_arg).transpose()?,
                assignee,
                tags: tags.as_deref().map(cli::parse_tags_input),
            });

            let mut store = open_store()?;
            store.add_task(task.clone());

            if cli.json {
                print_task_json(&task);
            } else {
                println!("Added task: {} ({})", task.title, task.id);
            }
        }
        Command::Edit {
            id,
            title,
            description,
            priority,
            assignee,
            tags,
        } => {
            let patch = TaskPatch {
                title: title
                    .map(|value| {
                        let trimmed = value.trim().to_string();
                        if trimmed.is_empty() {
                            Err(AppError::invalid_input("title cannot be empty"))
                        } else {
                            Ok(trimmed)
                        }
                    })
                    .transpose()?,
                description,
                status: None,
                priority: priority.as_deref().map(parse_priority_arg).transpose()?,
                assignee,
                tags: tags.as_deref().map(cli::parse_tags_input),
            };

            if patch.title.is_none()
                && patch.description.is_none()
                && patch.priority.is_none()
                && patch.assignee.is_none()
                && patch.tags.is_none()
            {
                return Err(AppError::invalid_input("nothing to change"));
            }

            let mut store = open_store()?;
            let existing = require_task(&store, &id)?;
            store.update_task(&existing.id, patch);

            let updated = require_task(&store, &existing.id)?;
            if cli.json {
                print_task_json(&updated);
            } else {
                println!("Updated task: {} ({})", updated.title, updated.id);
            }
        }
        Command::Move { id, status } => {
            let status = parse_status_arg(&status)?;
            let mut store = open_store()?;
            let existing = require_task(&store, &id)?;
            store.move_task(&existing.id, status);

            let moved = require_task(&store, &existing.id)?;
            if cli.json {
                print_task_json(&moved);
            } else {
                println!(
                    "Moved task: {} ({}) to {}",
                    moved.title,
                    moved.id,
                    moved.status.as_str()
                );
            }
        }
        Command::Delete { id } => {
            let mut store = open_store()?;
            let existing = require_task(&store, &id)?;
            store.delete_task(&existing.id);

            if cli.json {
                print_task_json(&existing);
            } else {
                println!("Deleted task: {} ({})", existing.title, existing.id);
            }
        }
        Command::Show { id } => {
            let store = open_store()?;
            let task = require_task(&store, &id)?;
            if cli.json {
                print_task_json(&task);
            } else {
                print_task_plain(&task);
            }
        }
        Command::Theme { value } => {
            let slot = theme_slot()?;
            match value {
                Some(raw) => {
                    let theme = ThemePreference::parse(&raw)
                        .ok_or_else(|| AppError::invalid_input(format!("unknown theme '{raw}'")))?;
                    prefs::save_theme(&slot, theme);
                    if cli.json {
                        println!("{}", serde_json::json!({ "theme": theme.as_str() }));
                    } else {
                        println!("Theme set to {}", theme.as_str());
                    }
                }
                None => {
                    let theme = prefs::load_theme(&slot);
                    if cli.json {
                        println!("{}", serde_json::json!({ "theme": theme.as_str() }));
                    } else {
                        println!("{}", theme.as_str());
                    }
                }
            }
        }
    }

    Ok(())
}

fn normalize_parse_error(err: clap::Error) -> AppError {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or("invalid command").trim();
    let message = first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string();
    AppError::invalid_input(message)
}

fn split_command_line(line: &str) -> Result<Vec<String>, AppError> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut escape = false;

    for ch in line.chars() {
        if escape {
            if ch != '"' && ch != '\\' {
                current.push('\\');
            }
            current.push(ch);
            escape = false;
            continue;
        }

        if in_quotes && ch == '\\' {
            escape = true;
            continue;
        }

        if ch == '"' {
            in_quotes = !in_quotes;
            continue;
        }

        if ch.is_whitespace() && !in_quotes {
            if !current.is_empty() {
                args.push(current.clone());
                current.clear();
            }
            continue;
        }

        current.push(ch);
    }

    if in_quotes {
        return Err(AppError::invalid_input("unterminated quote in command"));
    }

    if !current.is_empty() {
        args.push(current);
    }

    Ok(args)
}

fn print_help() {
    let mut cmd = Cli::command();
    let help = cmd.render_help();
    println!("{help}");
}

fn run_interactive() -> Result<(), AppError> {
    let mut input = String::new();
    let stdin = io::stdin();
    let mut stdin_lock = stdin.lock();

    loop {
        input.clear();
        let bytes = stdin_lock
            .read_line(&mut input)
            .map_err(|err| AppError::io(err.to_string()))?;

        if bytes == 0 {
            break;
        }

        let line = input.trim();
        if line.is_empty() {
            continue;
        }

        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            break;
        }

        if line == "help" || line == "?" {
            print_help();
            continue;
        }

        let args = match split_command_line(line) {
            Ok(args) => args,
            Err(err) => {
                eprintln!("ERROR: {}", err);
                continue;
            }
        };

        if args.is_empty() {
            continue;
        }

        let mut argv = Vec::with_capacity(args.len() + 1);
        argv.push("taskboard".to_string());
        argv.extend(args);

        let cli = match Cli::try_parse_from(argv) {
            Ok(cli) => cli,
            Err(err) => {
                eprintln!("ERROR: {}", normalize_parse_error(err));
                continue;
            }
        };

        if let Err(err) = run_command(cli) {
            eprintln!("ERROR: {}", err);
        }
    }

    Ok(())
}

fn main() {
    let mut args = std::env::args_os();
    args.next();
    if args.next().is_none() {
        if let Err(err) = run_interactive() {
            eprintln!("ERROR: {}", err);
            std::process::exit(1);
        }
        return;
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("ERROR: {}", normalize_parse_error(err));
            std::process::exit(1);
        }
    };

    if let Err(err) = run_command(cli) {
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}
