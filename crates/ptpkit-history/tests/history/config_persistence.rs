use ptpkit_core::{shared, Shared};
use ptpkit_history::{ConfigCommand, UndoRedoManager};
use ptpkit_project::{ProjectManager, CONFIG_FILE};
use ptpkit_settings::{MemorySettingsStore, ProjectConfig};
use serde_json::Value;
use std::cell::Cell;
use std::rc::Rc;
use tempfile::TempDir;

fn open_project() -> (TempDir, Shared<ProjectManager>) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut manager = ProjectManager::new(Box::new(MemorySettingsStore::new()));
    manager.set_project_dir(dir.path());
    (dir, shared(manager))
}

fn robot_length_on_disk(dir: &TempDir) -> f64 {
    let content = std::fs::read_to_string(dir.path().join(CONFIG_FILE)).expect("read config");
    let value: Value = serde_json::from_str(&content).expect("parse config");
    value["robot_length_meters"].as_f64().expect("numeric robot length")
}

fn with_robot_length(config: ProjectConfig, robot_length_meters: f64) -> ProjectConfig {
    ProjectConfig {
        robot_length_meters,
        ..config
    }
}

#[test]
fn test_config_edit_is_persisted_on_execute_and_undo() {
    let (dir, project) = open_project();
    let old = *project.borrow().config();
    let new = with_robot_length(old, 0.75);

    let mut history = UndoRedoManager::default();
    history.execute_command(ConfigCommand::new(project.clone(), old, new, "Robot length"));
    assert_eq!(project.borrow().config().robot_length_meters, 0.75);
    assert_eq!(robot_length_on_disk(&dir), 0.75);

    history.undo();
    assert_eq!(project.borrow().config().robot_length_meters, 0.5);
    assert_eq!(robot_length_on_disk(&dir), 0.5);

    history.redo();
    assert_eq!(*project.borrow().config(), new);
    assert_eq!(robot_length_on_disk(&dir), 0.75);
}

#[test]
fn test_config_command_notifies_after_saving() {
    let (dir, project) = open_project();
    let old = *project.borrow().config();
    let new = with_robot_length(old, 1.1);

    let seen_on_disk = Rc::new(Cell::new(0.0));
    let seen = Rc::clone(&seen_on_disk);
    let config_file = dir.path().join(CONFIG_FILE);
    let on_change = Rc::new(move || {
        let content = std::fs::read_to_string(&config_file).unwrap_or_default();
        let value: Value = serde_json::from_str(&content).unwrap_or(Value::Null);
        seen.set(value["robot_length_meters"].as_f64().unwrap_or(f64::NAN));
    });

    let mut history = UndoRedoManager::default();
    history.execute_command(
        ConfigCommand::new(project.clone(), old, new, "Robot length").with_callback(on_change),
    );
    assert_eq!(seen_on_disk.get(), 1.1);
}

#[test]
fn test_config_snapshots_are_independent() {
    let (_dir, project) = open_project();
    let old = *project.borrow().config();
    let new = with_robot_length(old, 0.9);

    let mut history = UndoRedoManager::default();
    history.execute_command(ConfigCommand::new(project.clone(), old, new, "Robot length"));

    let mut patch = serde_json::Map::new();
    patch.insert("robot_width_meters".to_string(), serde_json::json!(2.0));
    project.borrow_mut().save_config(Some(&patch));

    history.undo();
    assert_eq!(*project.borrow().config(), old);
}
