use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_path(file_name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("taskboard-{nanos}-{file_name}"))
}

fn write_store(path: &PathBuf, tasks: serde_json::Value) {
    std::fs::write(path, serde_json::to_string_pretty(&tasks).unwrap()).unwrap();
}

fn store_with_one_task() -> serde_json::Value {
    serde_json::json!([
        {
            "id": "task-1",
            "title": "old",
            "description": "original text",
            "status": "Backlog",
            "priority": "Medium",
            "assignee": "Bob",
            "tags": ["ui"],
            "createdAt": "2025-06-01T08:00:00Z",
            "updatedAt": "2025-06-01T08:00:00Z"
        }
    ])
}

#[test]
fn edit_command_updates_title_and_refreshes_updated_at() {
    let exe = env!("CARGO_BIN_EXE_taskboard");
    let store_path = temp_path("cli-edit.json");
    write_store(&store_path, store_with_one_task());

    let output = Command::new(exe)
        .args(["edit", "task-1", "--title", "new title"])
        .env("TASKBOARD_STORE_PATH", &store_path)
        .output()
        .expect("failed to run edit command");

    assert!(output.status.success());

    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&store_path).unwrap()).unwrap();
    std::fs::remove_file(&store_path).ok();

    let task = &stored[0];
    assert_eq!(task["title"], "new title");
    // Edits never touch creation metadata, only the update stamp.
    assert_eq!(task["id"], "task-1");
    assert_eq!(task["createdAt"], "2025-06-01T08:00:00Z");
    assert_ne!(task["updatedAt"], "2025-06-01T08:00:00Z");
    // Unpatched fields survive.
    assert_eq!(task["description"], "original text");
    assert_eq!(task["assignee"], "Bob");
}

#[test]
fn edit_command_replaces_tags() {
    let exe = env!("CARGO_BIN_EXE_taskboard");
    let store_path = temp_path("cli-edit-tags.json");
    write_store(&store_path, store_with_one_task());

    let output = Command::new(exe)
        .args(["edit", "task-1", "--tags", "backend, api"])
        .env("TASKBOARD_STORE_PATH", &store_path)
        .output()
        .expect("failed to run edit command");

    assert!(output.status.success());

    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&store_path).unwrap()).unwrap();
    std::fs::remove_file(&store_path).ok();

    assert_eq!(stored[0]["tags"], serde_json::json!(["backend", "api"]));
}

#[test]
fn edit_command_with_no_field_flags_is_rejected() {
    let exe = env!("CARGO_BIN_EXE_taskboard");
    let store_path = temp_path("cli-edit-noop.json");
    write_store(&store_path, store_with_one_task());

    let output = Command::new(exe)
        .args(["edit", "task-1"])
        .env("TASKBOARD_STORE_PATH", &store_path)
        .output()
        .expect("failed to run edit command");

    std::fs::remove_file(&store_path).ok();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nothing to change"));
}

#[test]
fn edit_command_reports_missing_id() {
    let exe = env!("CARGO_BIN_EXE_taskboard");
    let store_path = temp_path("cli-edit-missing.json");
    write_store(&store_path, store_with_one_task());

    let output = Command::new(exe)
        .args(["edit", "task-404", "--title", "new title"])
        .env("TASKBOARD_STORE_PATH", &store_path)
        .output()
        .expect("failed to run edit command");

    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&store_path).unwrap()).unwrap();
    std::fs::remove_file(&store_path).ok();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: invalid_input"));
    // Collection untouched.
    assert_eq!(stored[0]["title"], "old");
}

#[test]
fn delete_command_removes_the_task() {
    let exe = env!("CARGO_BIN_EXE_taskboard");
    let store_path = temp_path("cli-delete.json");
    write_store(&store_path, store_with_one_task());

    let output = Command::new(exe)
        .args(["delete", "task-1"])
        .env("TASKBOARD_STORE_PATH", &store_path)
        .output()
        .expect("failed to run delete command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Deleted task: old (task-1)"));

    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&store_path).unwrap()).unwrap();
    std::fs::remove_file(&store_path).ok();

    assert!(stored.as_array().unwrap().is_empty());
}

#[test]
fn delete_command_reports_missing_id() {
    let exe = env!("CARGO_BIN_EXE_taskboard");
    let store_path = temp_path("cli-delete-missing.json");
    write_store(&store_path, store_with_one_task());

    let output = Command::new(exe)
        .args(["delete", "task-404"])
        .env("TASKBOARD_STORE_PATH", &store_path)
        .output()
        .expect("failed to run delete command");

    std::fs::remove_file(&store_path).ok();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: invalid_input"));
}

#[test]
fn show_command_json_includes_fields() {
    let exe = env!("CARGO_BIN_EXE_taskboard");
    let store_path = temp_path("cli-show-json.json");
    write_store(&store_path, store_with_one_task());

    let output = Command::new(exe)
        .args(["--json", "show", "task-1"])
        .env("TASKBOARD_STORE_PATH", &store_path)
        .output()
        .expect("failed to run show command");

    std::fs::remove_file(&store_path).ok();
    assert!(output.status.success());

    let parsed: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).expect("json output");
    assert_eq!(parsed["id"], "task-1");
    assert_eq!(parsed["title"], "old");
    assert_eq!(parsed["status"], "Backlog");
    assert_eq!(parsed["tags"], serde_json::json!(["ui"]));
    assert_eq!(parsed["createdAt"], "2025-06-01T08:00:00Z");
}
