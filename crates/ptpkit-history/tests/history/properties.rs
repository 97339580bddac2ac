use proptest::prelude::*;
use ptpkit_core::{shared, Path, RotationTarget, Shared, TranslationTarget};
use ptpkit_history::{ConfigCommand, EditCommand, PathCommand, UndoRedoManager};
use ptpkit_project::ProjectManager;
use ptpkit_settings::{MemorySettingsStore, ProjectConfig};

#[derive(Debug, Clone)]
enum Edit {
    AddWaypoint(f64, f64),
    AddRotation(f64, f64),
    RemoveFirst,
    RobotLength(f64),
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (-10.0..10.0f64, -10.0..10.0f64).prop_map(|(x, y)| Edit::AddWaypoint(x, y)),
        (-3.0..3.0f64, 0.0..1.0f64).prop_map(|(r, t)| Edit::AddRotation(r, t)),
        Just(Edit::RemoveFirst),
        (0.1..2.0f64).prop_map(Edit::RobotLength),
    ]
}

fn record(edit: &Edit, path: &Shared<Path>, project: &Shared<ProjectManager>) -> EditCommand {
    match edit {
        Edit::RobotLength(length) => {
            let old = *project.borrow().config();
            let new = ProjectConfig {
                robot_length_meters: *length,
                ..old
            };
            ConfigCommand::new(project.clone(), old, new, "Robot length").into()
        }
        _ => {
            let before = path.borrow().clone();
            let mut after = before.clone();
            match edit {
                Edit::AddWaypoint(x, y) => after.push(TranslationTarget::new(*x, *y)),
                Edit::AddRotation(r, t) => after.push(RotationTarget::new(*r, *t)),
                Edit::RemoveFirst => {
                    if !after.path_elements.is_empty() {
                        after.path_elements.remove(0);
                    }
                }
                Edit::RobotLength(_) => {}
            }
            PathCommand::new(path.clone(), &before, &after, "Edit path").into()
        }
    }
}

proptest! {
    #[test]
    fn undoing_everything_restores_initial_state(
        edits in prop::collection::vec(edit_strategy(), 1..30)
    ) {
        let path = shared(Path::from_elements([TranslationTarget::new(0.0, 0.0).into()]));
        let project = shared(ProjectManager::new(Box::new(MemorySettingsStore::new())));
        let initial_path = path.borrow().clone();
        let initial_config = *project.borrow().config();

        let mut history = UndoRedoManager::new(edits.len());
        for edit in &edits {
            let cmd = record(edit, &path, &project);
            history.execute_command(cmd);
        }
        let final_path = path.borrow().clone();
        let final_config = *project.borrow().config();

        for _ in 0..edits.len() {
            prop_assert!(history.undo().is_some());
        }
        prop_assert!(!history.can_undo());
        prop_assert_eq!(&*path.borrow(), &initial_path);
        prop_assert_eq!(*project.borrow().config(), initial_config);

        while history.redo().is_some() {}
        prop_assert_eq!(&*path.borrow(), &final_path);
        prop_assert_eq!(*project.borrow().config(), final_config);
    }

    #[test]
    fn undo_stack_never_exceeds_bound(
        bound in 1usize..8,
        count in 0usize..20
    ) {
        let path = shared(Path::new());
        let mut history = UndoRedoManager::new(bound);
        for i in 0..count {
            let before = path.borrow().clone();
            let mut after = before.clone();
            after.push(TranslationTarget::new(i as f64, 0.0));
            history.execute_command(PathCommand::new(path.clone(), &before, &after, "Add"));
            prop_assert!(history.history_size().0 <= bound);
        }
        prop_assert_eq!(history.history_size().0, count.min(bound));
    }
}
