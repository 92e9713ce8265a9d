use crate::model::{Task, TaskOverrides, TaskPriority, TaskStatus, create_task};

/// The fixed dataset a fresh board starts with. Only used when the task
/// slot is empty on hydrate; after that it lives in the slot like any
/// other data.
pub fn seed_tasks() -> Vec<Task> {
    vec![
        create_task(TaskOverrides {
            title: Some("Set up project structure".to_string()),
            description: Some("Initialize repo, ESLint, Tailwind, and folder structure.".to_string()),
            status: Some(TaskStatus::Done),
            priority: Some(TaskPriority::High),
            assignee: Some("Alice".to_string()),
            tags: Some(vec!["setup".to_string(), "devops".to_string()]),
        }),
        create_task(TaskOverrides {
            title: Some("Implement task board UI".to_string()),
            description: Some("Three columns: Backlog, In Progress, Done.".to_string()),
            status: Some(TaskStatus::InProgress),
            priority: Some(TaskPriority::High),
            assignee: Some("Bob".to_string()),
            tags: Some(vec!["frontend".to_string(), "ui".to_string()]),
        }),
        create_task(TaskOverrides {
            title: Some("Add localStorage persistence".to_string()),
            description: Some("Save and load tasks from localStorage.".to_string()),
            status: Some(TaskStatus::InProgress),
            priority: Some(TaskPriority::Medium),
            assignee: Some("Alice".to_string()),
            tags: Some(vec!["storage".to_string()]),
        }),
        create_task(TaskOverrides {
            title: Some("Task form validation".to_string()),
            description: Some("Required fields and error messages.".to_string()),
            status: Some(TaskStatus::Backlog),
            priority: Some(TaskPriority::Medium),
            assignee: Some("Charlie".to_string()),
            tags: Some(vec!["forms".to_string(), "validation".to_string()]),
        }),
        create_task(TaskOverrides {
            title: Some("Filter and sort tasks".to_string()),
            description: Some("By priority, search text, and date.".to_string()),
            status: Some(TaskStatus::Backlog),
            priority: Some(TaskPriority::Low),
            assignee: Some("Bob".to_string()),
            tags: Some(vec!["ux".to_string()]),
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::seed_tasks;
    use std::collections::HashSet;

    #[test]
    fn seed_has_five_tasks_with_unique_ids() {
        let tasks = seed_tasks();
        assert_eq!(tasks.len(), 5);

        let ids: HashSet<&str> = tasks.iter().map(|task| task.id.as_str()).collect();
        assert_eq!(ids.len(), tasks.len());
    }
}
