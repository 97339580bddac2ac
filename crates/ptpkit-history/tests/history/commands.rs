use ptpkit_core::{
    shared, ChangeCallback, ConstraintKind, Path, RangedConstraint, RotationTarget,
    TranslationTarget,
};
use ptpkit_history::{Command, CompoundCommand, EditCommand, PathCommand, UndoRedoManager};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn recorder(log: &Rc<RefCell<Vec<&'static str>>>, name: &'static str) -> ChangeCallback {
    let log = Rc::clone(log);
    Rc::new(move || log.borrow_mut().push(name))
}

#[test]
fn test_compound_undoes_in_reverse_order() {
    let live = shared(Path::new());
    let log = Rc::new(RefCell::new(Vec::new()));
    let empty = Path::new();

    let commands: Vec<EditCommand> = ["A", "B", "C"]
        .into_iter()
        .map(|name| {
            EditCommand::from(
                PathCommand::new(live.clone(), &empty, &empty, name)
                    .with_callback(recorder(&log, name)),
            )
        })
        .collect();
    let mut compound = CompoundCommand::new(commands, "Batch edit");
    assert_eq!(compound.len(), 3);

    compound.execute();
    assert_eq!(*log.borrow(), vec!["A", "B", "C"]);

    log.borrow_mut().clear();
    compound.undo();
    assert_eq!(*log.borrow(), vec!["C", "B", "A"]);
    assert_eq!(compound.description(), "Batch edit");
}

#[test]
fn test_compound_is_one_history_entry() {
    let live = shared(Path::new());
    let start = Path::new();
    let mut middle = start.clone();
    middle.push(TranslationTarget::new(1.0, 1.0));
    let mut end = middle.clone();
    end.push(RotationTarget::new(0.5, 1.0));

    let compound = CompoundCommand::new(
        vec![
            PathCommand::new(live.clone(), &start, &middle, "Add waypoint").into(),
            PathCommand::new(live.clone(), &middle, &end, "Add rotation").into(),
        ],
        "Insert pair",
    );
    let mut history = UndoRedoManager::default();
    history.execute_command(compound);

    assert_eq!(*live.borrow(), end);
    assert_eq!(history.history_size(), (1, 0));

    history.undo();
    assert_eq!(*live.borrow(), start);
    assert_eq!(history.get_redo_description(), Some("Insert pair"));
}

#[test]
fn test_path_command_restores_all_collections() {
    let live = shared(Path::new());
    let before = Path::new();
    let mut after = Path::from_elements([
        TranslationTarget::new(0.0, 0.0).into(),
        TranslationTarget::new(2.0, 0.0).into(),
    ]);
    after
        .constraints
        .set(ConstraintKind::MaxVelocityMetersPerSec, Some(2.5));
    after
        .ranged_constraints
        .push(RangedConstraint::new(ConstraintKind::MaxVelocityMetersPerSec, 1.0, 0, 1));

    let mut cmd = PathCommand::new(live.clone(), &before, &after, "Limit speed");
    cmd.execute();
    assert_eq!(*live.borrow(), after);

    cmd.undo();
    assert_eq!(*live.borrow(), before);
}

#[test]
fn test_suppressed_first_callback_through_history() {
    let live = shared(Path::new());
    let calls = Rc::new(Cell::new(0));
    let seen = Rc::clone(&calls);
    let on_change: ChangeCallback = Rc::new(move || seen.set(seen.get() + 1));

    // The editor has already applied the edit when it records it.
    let before = live.borrow().clone();
    live.borrow_mut().push(TranslationTarget::new(1.0, 2.0));
    let after = live.borrow().clone();

    let mut history = UndoRedoManager::default();
    history.execute_command(
        PathCommand::new(live.clone(), &before, &after, "Drag waypoint")
            .with_callback(Rc::clone(&on_change))
            .suppress_first_callback(),
    );
    assert_eq!(calls.get(), 0);

    history.undo();
    history.redo();
    history.undo();
    assert_eq!(calls.get(), 3);
}

#[test]
fn test_unsuppressed_command_notifies_on_first_execute() {
    let live = shared(Path::new());
    let calls = Rc::new(Cell::new(0));
    let seen = Rc::clone(&calls);
    let after = Path::from_elements([TranslationTarget::new(1.0, 2.0).into()]);

    let mut history = UndoRedoManager::default();
    history.execute_command(
        PathCommand::new(live.clone(), &Path::new(), &after, "Add waypoint")
            .with_callback(Rc::new(move || seen.set(seen.get() + 1))),
    );
    assert_eq!(calls.get(), 1);
}
