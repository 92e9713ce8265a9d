mod task;

pub use task::{Task, TaskOverrides, TaskPriority, TaskStatus, create_task};
