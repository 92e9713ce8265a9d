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

fn task_json(id: &str, title: &str, status: &str, priority: &str, created_at: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "description": "",
        "status": status,
        "priority": priority,
        "assignee": "",
        "tags": [],
        "createdAt": created_at,
        "updatedAt": created_at
    })
}

fn run_board(store_path: &PathBuf, args: &[&str]) -> std::process::Output {
    let exe = env!("CARGO_BIN_EXE_taskboard");
    Command::new(exe)
        .args(args)
        .env("TASKBOARD_STORE_PATH", store_path)
        .env("TASKBOARD_THEME_PATH", temp_path("board-theme.txt"))
        .output()
        .expect("failed to run taskboard")
}

#[test]
fn first_run_seeds_the_board_and_persists_the_seed() {
    let store_path = temp_path("board-first-run.json");

    let output = run_board(&store_path, &["board"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Backlog"));
    assert!(stdout.contains("Implement task board UI"));

    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&store_path).unwrap()).unwrap();
    std::fs::remove_file(&store_path).ok();

    assert_eq!(stored.as_array().unwrap().len(), 5);
}

#[test]
fn board_json_groups_by_column() {
    let store_path = temp_path("board-json.json");
    write_store(
        &store_path,
        serde_json::json!([
            task_json("task-1", "a", "Backlog", "Low", "2025-06-01T08:00:00Z"),
            task_json("task-2", "b", "In Progress", "Medium", "2025-06-01T09:00:00Z"),
            task_json("task-3", "c", "Done", "High", "2025-06-01T10:00:00Z"),
        ]),
    );

    let output = run_board(&store_path, &["--json", "board"]);
    std::fs::remove_file(&store_path).ok();

    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).expect("json output");

    assert_eq!(parsed["Backlog"][0]["id"], "task-1");
    assert_eq!(parsed["In Progress"][0]["id"], "task-2");
    assert_eq!(parsed["Done"][0]["id"], "task-3");
}

#[test]
fn shared_query_string_sorts_by_priority_descending() {
    let store_path = temp_path("board-query.json");
    write_store(
        &store_path,
        serde_json::json!([
            task_json("task-1", "A", "Backlog", "Low", "2025-06-01T08:00:00Z"),
            task_json("task-2", "B", "Backlog", "High", "2025-06-01T09:00:00Z"),
        ]),
    );

    let output = run_board(
        &store_path,
        &["--json", "board", "--query", "sortField=priority&sortOrder=desc"],
    );
    std::fs::remove_file(&store_path).ok();

    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).expect("json output");

    assert_eq!(parsed["Backlog"][0]["title"], "B");
    assert_eq!(parsed["Backlog"][1]["title"], "A");
}

#[test]
fn search_matches_substring_inside_a_tag() {
    let store_path = temp_path("board-search-tag.json");
    let mut tagged = task_json("task-1", "Deploy", "Done", "High", "2025-06-01T08:00:00Z");
    tagged["tags"] = serde_json::json!(["bug-fix"]);
    write_store(
        &store_path,
        serde_json::json!([
            tagged,
            task_json("task-2", "Deploy", "Done", "High", "2025-06-01T09:00:00Z"),
        ]),
    );

    let output = run_board(&store_path, &["--json", "board", "--search", "bug"]);
    std::fs::remove_file(&store_path).ok();

    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).expect("json output");

    let done = parsed["Done"].as_array().unwrap();
    assert_eq!(done.len(), 1);
    assert_eq!(done[0]["id"], "task-1");
    assert!(parsed["Backlog"].as_array().unwrap().is_empty());
}

#[test]
fn board_prints_the_shareable_view_string() {
    let store_path = temp_path("board-view-string.json");
    write_store(
        &store_path,
        serde_json::json!([task_json(
            "task-1",
            "a",
            "Backlog",
            "Low",
            "2025-06-01T08:00:00Z"
        )]),
    );

    let output = run_board(&store_path, &["board", "--search", "a", "--order", "asc"]);
    std::fs::remove_file(&store_path).ok();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("view: q=a&sortField=createdAt&sortOrder=asc"));
}

#[test]
fn board_rejects_unknown_priority_flag() {
    let store_path = temp_path("board-bad-priority.json");
    write_store(
        &store_path,
        serde_json::json!([task_json(
            "task-1",
            "a",
            "Backlog",
            "Low",
            "2025-06-01T08:00:00Z"
        )]),
    );

    let output = run_board(&store_path, &["board", "--priority", "urgent"]);
    std::fs::remove_file(&store_path).ok();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: invalid_input"));
}
