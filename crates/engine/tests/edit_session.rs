//! End-to-end editing scenarios: load a task, edit the output through the
//! engine, copy/paste with the clipboard, and walk the history.

use taskgrid_config::EditorSettings;
use taskgrid_engine::*;

fn grid(rows: &[&[Symbol]]) -> Grid {
    Grid::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
}

const TASK: &str = r#"{
    "train": [{"input": [[1]], "output": [[2]]}],
    "test": [{"input": [[1, 1, 2], [1, 2, 2], [2, 2, 2]], "output": [[5, 5, 2], [5, 2, 2], [2, 2, 2]]}]
}"#;

#[test]
fn solve_task_by_copy_and_fill() {
    let mut session = TaskSession::default();
    session.load_json(TASK).unwrap();

    session.copy_from_input();
    session.engine_mut().flood_fill_at(0, 0, 5).unwrap();
    assert_eq!(session.engine().grid(), &grid(&[&[5, 5, 2], &[5, 2, 2], &[2, 2, 2]]));
    assert_eq!(session.check_solution(), SolutionCheck::Correct);
    assert_eq!(session.engine().grid().get(2, 0), Ok(2));

    assert_eq!(session.engine_mut().undo(), Ok(Some(ChangeKind::CellEdit)));
    assert_eq!(session.engine().grid(), session.input());
    assert_eq!(session.engine_mut().undo(), Ok(Some(ChangeKind::CopyFromSource)));
    assert_eq!(session.engine().grid(), &Grid::new(3, 3).unwrap());
}

#[test]
fn copy_paste_between_input_and_output() {
    let mut session = TaskSession::default();
    session.load_json(TASK).unwrap();

    // Copy the 2x2 bottom-right block of the input.
    let mut selection = Selection::new(1, 1);
    selection.extend_to(2, 2);
    let mut clipboard = Clipboard::new();
    assert_eq!(clipboard.copy(session.input(), &selection), Ok(4));

    // Paste at (2, 2): only the top-left fragment lands on the 3x3 output.
    let engine = session.engine_mut();
    assert_eq!(engine.paste_selection(&clipboard, &Selection::new(2, 2)), Ok(true));
    assert_eq!(engine.grid(), &grid(&[&[0, 0, 0], &[0, 0, 0], &[0, 0, 2]]));

    match engine.history().peek_undo() {
        Some(ChangeRecord::Paste(diff)) => assert_eq!(diff.len(), 1),
        other => panic!("expected paste record, got {:?}", other),
    }

    assert_eq!(engine.undo(), Ok(Some(ChangeKind::Paste)));
    assert_eq!(engine.grid(), &Grid::new(3, 3).unwrap());
}

#[test]
fn resize_crop_extend_and_history() {
    let mut engine = GridEditEngine::with_grid(grid(&[&[1, 2], &[3, 4]]));
    let size: GridSize = "3x3".parse().unwrap();

    engine.resize(size.height, size.width).unwrap();
    assert_eq!(engine.grid(), &grid(&[&[1, 2, 0], &[3, 4, 0], &[0, 0, 0]]));
    engine.resize(2, 2).unwrap();
    assert_eq!(engine.grid(), &grid(&[&[1, 2], &[3, 4]]));

    let undo: Vec<String> = engine.history().undo_descriptions().collect();
    assert_eq!(undo, vec!["resize to 2x2", "resize to 3x3"]);
}

#[test]
fn branch_cut_after_undo() {
    let mut engine = GridEditEngine::new();
    engine.paint_cell(0, 0, 1).unwrap();
    engine.paint_cell(0, 1, 2).unwrap();
    engine.paint_cell(0, 2, 3).unwrap();

    engine.undo().unwrap();
    engine.undo().unwrap();
    assert!(engine.can_redo());

    engine.paint_cell(2, 2, 9).unwrap();
    assert!(!engine.can_redo());
    assert_eq!(engine.redo(), Ok(None));
    assert_eq!(engine.grid(), &grid(&[&[1, 0, 0], &[0, 0, 0], &[0, 0, 9]]));
    assert_eq!(engine.history().len(), 2);
}

#[test]
fn loading_a_task_clears_history() {
    let settings = EditorSettings::from_toml("default_height = 2\ndefault_width = 2\n").unwrap();
    let mut session = TaskSession::new(&settings);
    session.engine_mut().paint_cell(1, 1, 4).unwrap();
    session.engine_mut().reset();
    assert_eq!(session.engine().history().len(), 2);

    session.load_json(TASK).unwrap();
    assert!(session.engine().history().is_empty());
    assert_eq!(session.engine().grid(), &Grid::new(2, 2).unwrap());
}
