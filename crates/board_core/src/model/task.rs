use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;

/// Board column a task currently sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Backlog,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [Self::Backlog, Self::InProgress, Self::Done];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "backlog" => Some(Self::Backlog),
            "in progress" | "in-progress" | "in_progress" | "inprogress" => Some(Self::InProgress),
            "done" => Some(Self::Done),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    /// Total order used as a sort key: High > Medium > Low.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// A unit of work tracked on the board.
///
/// Field names on the wire are the ones the board has always persisted
/// (`createdAt`, `"In Progress"`, ...), so a slot written by an earlier
/// session loads unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub assignee: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Caller-supplied fields for [`create_task`]; anything left `None`
/// takes the default.
#[derive(Debug, Clone, Default)]
pub struct TaskOverrides {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub assignee: Option<String>,
    pub tags: Option<Vec<String>>,
}

static ID_SEQ: AtomicU64 = AtomicU64::new(0);

fn next_task_id(now: OffsetDateTime) -> String {
    // Nanosecond stamp alone can collide on a coarse clock; the counter
    // keeps ids unique within a process.
    let seq = ID_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("task-{}-{}", now.unix_timestamp_nanos(), seq)
}

/// Build a fully-formed task from partial input.
///
/// Defaults: Backlog, Medium priority, empty text fields, no tags.
/// `created_at` and `updated_at` start equal. No business validation
/// happens here; an empty title is the form's problem, not the model's.
pub fn create_task(overrides: TaskOverrides) -> Task {
    let now = OffsetDateTime::now_utc();
    Task {
        id: next_task_id(now),
        title: overrides.title.unwrap_or_default(),
        description: overrides.description.unwrap_or_default(),
        status: overrides.status.unwrap_or(TaskStatus::Backlog),
        priority: overrides.priority.unwrap_or(TaskPriority::Medium),
        assignee: overrides.assignee.unwrap_or_default(),
        tags: overrides.tags.unwrap_or_default(),
        created_at: now,
        updated_at: now,
    }
}
