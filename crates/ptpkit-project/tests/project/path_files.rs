use ptpkit_core::{Path, RotationTarget, TranslationTarget};
use ptpkit_project::{ProjectError, ProjectManager, DEFAULT_PATH_FILE, PATHS_DIR};
use ptpkit_settings::{keys, MemorySettingsStore};
use std::fs;
use tempfile::TempDir;

fn open_project() -> (TempDir, ProjectManager) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut manager = ProjectManager::new(Box::new(MemorySettingsStore::new()));
    manager.set_project_dir(dir.path());
    (dir, manager)
}

fn sample_path() -> Path {
    Path::from_elements([
        TranslationTarget::new(0.0, 0.0).with_handoff_radius(0.3).into(),
        RotationTarget::new(1.0, 0.25).into(),
        TranslationTarget::new(2.0, 1.0).with_handoff_radius(0.4).into(),
    ])
}

#[test]
fn test_save_then_load_round_trips() {
    let (_dir, mut manager) = open_project();
    let path = sample_path();

    let name = manager
        .save_path(&path, Some("unit_test.json"))
        .expect("save path");
    assert_eq!(name, "unit_test.json");
    assert!(manager.list_paths().contains(&name));

    let loaded = manager.load_path("unit_test.json").expect("load path");
    assert_eq!(loaded, path);
    assert_eq!(manager.current_path_file(), Some("unit_test.json"));
    assert_eq!(
        manager.settings().get(keys::LAST_PATH_FILE).as_deref(),
        Some("unit_test.json")
    );
}

#[test]
fn test_missing_handoff_radius_uses_project_default() {
    let (dir, mut manager) = open_project();
    fs::write(
        dir.path().join(PATHS_DIR).join("bare.json"),
        r#"{"path_elements": [{"type": "translation", "x_meters": 1.0, "y_meters": 2.0}]}"#,
    )
    .expect("write path file");

    let loaded = manager.load_path("bare.json").expect("load path");
    let expected = Path::from_elements([TranslationTarget::new(1.0, 2.0)
        .with_handoff_radius(0.2)
        .into()]);
    assert_eq!(loaded, expected);
}

#[test]
fn test_save_without_name_uses_current_then_default() {
    let (_dir, mut manager) = open_project();
    let path = sample_path();

    manager.load_path("example.json").expect("load example");
    let name = manager.save_path(&path, None).expect("save over current");
    assert_eq!(name, "example.json");
    assert_eq!(manager.load_path("example.json").expect("reload"), path);

    manager.delete_path("example.json").expect("delete current");
    let name = manager.save_path(&path, None).expect("save with default name");
    assert_eq!(name, DEFAULT_PATH_FILE);
}

#[test]
fn test_list_paths_filters_and_sorts() {
    let (dir, manager) = open_project();
    let paths = dir.path().join(PATHS_DIR);
    fs::write(paths.join("b.json"), "{}").expect("write b");
    fs::write(paths.join("A.JSON"), "{}").expect("write A");
    fs::write(paths.join("readme.txt"), "").expect("write txt");
    fs::create_dir(paths.join("folder.json")).expect("create dir");

    assert_eq!(
        manager.list_paths(),
        vec!["A.JSON".to_string(), "b.json".to_string(), "example.json".to_string()]
    );
}

#[test]
fn test_failed_load_keeps_current_file() {
    let (dir, mut manager) = open_project();
    manager.load_path("example.json").expect("load example");
    fs::write(dir.path().join(PATHS_DIR).join("broken.json"), "{ nope").expect("write broken");

    assert!(matches!(
        manager.load_path("missing.json"),
        Err(ProjectError::PathNotFound(_))
    ));
    assert!(matches!(
        manager.load_path("broken.json"),
        Err(ProjectError::JsonError(_))
    ));
    assert_eq!(manager.current_path_file(), Some("example.json"));
}

#[test]
fn test_unknown_element_type_is_rejected() {
    let (dir, mut manager) = open_project();
    fs::write(
        dir.path().join(PATHS_DIR).join("odd.json"),
        r#"{"path_elements": [{"type": "spline"}]}"#,
    )
    .expect("write path file");

    assert!(matches!(
        manager.load_path("odd.json"),
        Err(ProjectError::Codec(_))
    ));
}

#[test]
fn test_file_names_must_stay_in_paths_dir() {
    let (_dir, mut manager) = open_project();
    let path = sample_path();

    for name in ["", "../escape.json", "nested/a.json", ".."] {
        assert!(
            matches!(
                manager.save_path(&path, Some(name)),
                Err(ProjectError::InvalidFileName(_))
            ),
            "{name}"
        );
    }
}

#[test]
fn test_delete_current_file_clears_tracker() {
    let (_dir, mut manager) = open_project();
    manager.load_path("example.json").expect("load example");

    manager.delete_path("example.json").expect("delete");

    assert!(manager.current_path_file().is_none());
    assert!(manager.settings().get(keys::LAST_PATH_FILE).is_none());
    assert!(manager.list_paths().is_empty());
    assert!(matches!(
        manager.delete_path("example.json"),
        Err(ProjectError::PathNotFound(_))
    ));
}

#[test]
fn test_delete_other_file_keeps_tracker() {
    let (_dir, mut manager) = open_project();
    manager
        .save_path(&sample_path(), Some("other.json"))
        .expect("save other");
    manager.load_path("example.json").expect("load example");

    manager.delete_path("other.json").expect("delete other");
    assert_eq!(manager.current_path_file(), Some("example.json"));
}

#[test]
fn test_path_operations_without_project() {
    let mut manager = ProjectManager::new(Box::new(MemorySettingsStore::new()));
    assert!(matches!(
        manager.load_path("a.json"),
        Err(ProjectError::NoProject)
    ));
    assert!(matches!(
        manager.save_path(&Path::new(), None),
        Err(ProjectError::NoProject)
    ));
}

#[test]
fn test_startup_prefers_last_opened_path() {
    let (_dir, mut manager) = open_project();
    let path = sample_path();
    manager.save_path(&path, Some("last.json")).expect("save last");

    let (loaded, name) = manager.load_last_or_first_or_create();
    assert_eq!(name, "last.json");
    assert_eq!(loaded, path);
}

#[test]
fn test_startup_falls_back_to_first_path() {
    let (_dir, mut manager) = open_project();

    let (loaded, name) = manager.load_last_or_first_or_create();
    assert_eq!(name, "example.json");
    assert_eq!(loaded.len(), 4);
}

#[test]
fn test_startup_creates_untitled_when_empty() {
    let (dir, mut manager) = open_project();
    manager.delete_path("example.json").expect("delete example");

    let (loaded, name) = manager.load_last_or_first_or_create();

    assert_eq!(name, DEFAULT_PATH_FILE);
    assert!(loaded.is_empty());
    assert_eq!(manager.list_paths(), vec![DEFAULT_PATH_FILE.to_string()]);
    assert!(dir.path().join(PATHS_DIR).join(DEFAULT_PATH_FILE).is_file());
    assert_eq!(manager.current_path_file(), Some(DEFAULT_PATH_FILE));
}

#[test]
fn test_startup_skips_stale_last_path() {
    let (dir, mut manager) = open_project();
    manager.save_path(&sample_path(), Some("zz.json")).expect("save zz");
    fs::remove_file(dir.path().join(PATHS_DIR).join("zz.json")).expect("remove zz");

    let (loaded, name) = manager.load_last_or_first_or_create();

    assert_eq!(name, "example.json");
    assert_eq!(loaded.len(), 4);
    assert_eq!(
        manager.settings().get(keys::LAST_PATH_FILE).as_deref(),
        Some("example.json")
    );
}

#[test]
fn test_project_dir_that_is_a_file_stays_usable() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let file = dir.path().join("not_a_dir");
    fs::write(&file, "plain file").expect("write file");

    let mut manager = ProjectManager::new(Box::new(MemorySettingsStore::new()));
    manager.set_project_dir(&file);
    assert!(!manager.has_valid_project());
    assert!(manager.list_paths().is_empty());
    assert!(manager.recent_projects().is_empty());

    let (loaded, name) = manager.load_last_or_first_or_create();
    assert!(loaded.is_empty());
    assert_eq!(name, DEFAULT_PATH_FILE);
    assert_eq!(fs::read_to_string(&file).expect("read file"), "plain file");
}

#[test]
fn test_non_finite_path_is_not_saved() {
    let (dir, mut manager) = open_project();
    manager.save_path(&sample_path(), Some("good.json")).expect("save good");

    let broken = Path::from_elements([TranslationTarget::new(f64::NAN, 1.0).into()]);
    let result = manager.save_path(&broken, Some("broken.json"));

    assert!(matches!(result, Err(ProjectError::Codec(_))));
    assert!(!dir.path().join(PATHS_DIR).join("broken.json").exists());
    assert_eq!(manager.current_path_file(), Some("good.json"));
}
