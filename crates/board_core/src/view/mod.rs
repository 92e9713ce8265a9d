//! Derives board view state from the raw collection: filter by search
//! text and priority, sort, then partition into the three columns.
//! Pure functions only; the store never calls in here.

use crate::model::{Task, TaskPriority, TaskStatus};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    Priority,
}

impl SortField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => "createdAt",
            Self::Priority => "priority",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Transient view parameters. Never persisted to the task slot; the
/// [`query`](crate::query) codec mirrors them into a shareable
/// key-value form instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardFilters {
    pub search_text: String,
    pub priority: Option<TaskPriority>,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
}

impl Default for BoardFilters {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            priority: None,
            sort_field: SortField::CreatedAt,
            sort_order: SortOrder::Descending,
        }
    }
}

/// Tasks partitioned by column, each in filtered-and-sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedTasks {
    pub backlog: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub done: Vec<Task>,
}

impl GroupedTasks {
    pub fn column(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Backlog => &self.backlog,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }

    pub fn total(&self) -> usize {
        self.backlog.len() + self.in_progress.len() + self.done.len()
    }
}

fn matches_search(task: &Task, query: &str) -> bool {
    task.title.to_lowercase().contains(query)
        || task.description.to_lowercase().contains(query)
        || task.assignee.to_lowercase().contains(query)
        || task.tags.iter().any(|tag| tag.to_lowercase().contains(query))
}

fn compare(a: &Task, b: &Task, filters: &BoardFilters) -> Ordering {
    let ordering = match filters.sort_field {
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::Priority => a.priority.rank().cmp(&b.priority.rank()),
    };
    match filters.sort_order {
        SortOrder::Ascending => ordering,
        SortOrder::Descending => ordering.reverse(),
    }
}

/// Apply `filters` to `tasks` and partition the result by status.
///
/// The sort is stable: tasks with equal keys keep their relative
/// collection order, in both directions.
pub fn group_tasks(tasks: &[Task], filters: &BoardFilters) -> GroupedTasks {
    let query = filters.search_text.trim().to_lowercase();

    let mut list: Vec<&Task> = tasks
        .iter()
        .filter(|task| query.is_empty() || matches_search(task, &query))
        .filter(|task| filters.priority.is_none_or(|priority| task.priority == priority))
        .collect();

    list.sort_by(|a, b| compare(a, b, filters));

    let mut grouped = GroupedTasks::default();
    for task in list {
        match task.status {
            TaskStatus::Backlog => grouped.backlog.push(task.clone()),
            TaskStatus::InProgress => grouped.in_progress.push(task.clone()),
            TaskStatus::Done => grouped.done.push(task.clone()),
        }
    }
    grouped
}
