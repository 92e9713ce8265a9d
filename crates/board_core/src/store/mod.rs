//! The authoritative in-memory task collection for a session.
//!
//! Every mutation applies in memory first, then persists the whole
//! collection through the gateway, then notifies subscribers. A failed
//! persist is logged by the gateway and never rolls the mutation back;
//! durability is best-effort, memory is authoritative.

mod seed;

pub use seed::seed_tasks;

use crate::model::{Task, TaskPriority, TaskStatus};
use crate::storage::{Slot, gateway};
use time::OffsetDateTime;

/// Observer called synchronously after each mutation with the new
/// collection.
pub type Listener = Box<dyn FnMut(&[Task])>;

/// Partial update for [`TaskStore::update_task`]. There is deliberately
/// no way to patch `id` or `created_at`.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub assignee: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl TaskPatch {
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

pub struct TaskStore<S: Slot> {
    slot: S,
    tasks: Vec<Task>,
    listeners: Vec<Listener>,
}

impl<S: Slot> TaskStore<S> {
    pub fn new(slot: S) -> Self {
        Self {
            slot,
            tasks: Vec::new(),
            listeners: Vec::new(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    /// Populate the collection from the slot. An empty or unreadable
    /// slot seeds the fixed default dataset and persists it right away,
    /// so the next hydrate sees stable data. Safe to call repeatedly.
    pub fn hydrate(&mut self) {
        let stored: Vec<Task> = gateway::load_or(&self.slot, Vec::new());
        if stored.is_empty() {
            self.tasks = seed_tasks();
            gateway::save(&self.slot, &self.tasks);
        } else {
            self.tasks = stored;
        }
        self.notify();
    }

    /// Append a fully-formed task at the end of the collection.
    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
        self.persist_and_notify();
    }

    /// Merge `patch` into the task with the given id, refreshing
    /// `updated_at`. Unknown id is a silent no-op.
    pub fn update_task(&mut self, id: &str, patch: TaskPatch) {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return;
        };

        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(assignee) = patch.assignee {
            task.assignee = assignee;
        }
        if let Some(tags) = patch.tags {
            task.tags = tags;
        }
        task.updated_at = OffsetDateTime::now_utc();

        self.persist_and_notify();
    }

    /// Remove the task with the given id. Unknown id is a silent no-op.
    pub fn delete_task(&mut self, id: &str) {
        let Some(index) = self.tasks.iter().position(|task| task.id == id) else {
            return;
        };
        self.tasks.remove(index);
        self.persist_and_notify();
    }

    /// Move a task to another column. Routes through [`update_task`],
    /// so a move refreshes `updated_at` like any other edit.
    pub fn move_task(&mut self, id: &str, status: TaskStatus) {
        self.update_task(id, TaskPatch::status(status));
    }

    fn persist_and_notify(&mut self) {
        gateway::save(&self.slot, &self.tasks);
        self.notify();
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.tasks);
        }
    }
}
