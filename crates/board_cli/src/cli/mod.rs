use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the board, grouped into Backlog / In Progress / Done
    ///
    /// Example: taskboard board
    /// Example: taskboard board --search bug --order asc
    /// Example: taskboard board --query "priority=High&sortField=priority&sortOrder=desc"
    Board {
        /// Case-insensitive substring match on title, description,
        /// assignee, and tags
        #[arg(long)]
        search: Option<String>,
        /// Only show tasks with this priority (Low|Medium|High)
        #[arg(long)]
        priority: Option<String>,
        /// Sort field (createdAt|priority)
        #[arg(long)]
        sort: Option<String>,
        /// Sort order (asc|desc)
        #[arg(long)]
        order: Option<String>,
        /// A shared view string, as printed under the board
        #[arg(long)]
        query: Option<String>,
    },
    /// Add a new task
    ///
    /// Example: taskboard add "Fix login" --priority High --tags bug,auth
    Add {
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// Low|Medium|High (default Medium)
        #[arg(long)]
        priority: Option<String>,
        /// Backlog|"In Progress"|Done (default Backlog)
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        assignee: Option<String>,
        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,
    },
    /// Edit fields of an existing task
    ///
    /// Example: taskboard edit task-17 --title "Fix login flow"
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        assignee: Option<String>,
        /// Comma-separated tags (replaces the existing list)
        #[arg(long)]
        tags: Option<String>,
    },
    /// Move a task to another column
    ///
    /// Example: taskboard move task-17 done
    Move { id: String, status: String },
    /// Delete a task
    ///
    /// Example: taskboard delete task-17
    Delete { id: String },
    /// Show details of a task
    ///
    /// Example: taskboard show task-17
    Show { id: String },
    /// Get or set the theme preference
    ///
    /// Example: taskboard theme
    /// Example: taskboard theme dark
    Theme { value: Option<String> },
}

/// Split a comma-separated tag field into trimmed, non-empty tags.
/// Order is kept and duplicates are not collapsed.
pub fn parse_tags_input(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a `k=v&k=v` view string into pairs. A part without `=` becomes
/// a key with an empty value; empty parts are skipped.
pub fn split_query_pairs(raw: &str) -> Vec<(String, String)> {
    raw.trim()
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
        .map(|part| match part.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (part.to_string(), String::new()),
        })
        .collect()
}

/// Join pairs back into the printable view string.
pub fn join_query_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}
