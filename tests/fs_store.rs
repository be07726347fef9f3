use repz::commands;
use repz::error::RepzError;
use repz::model::Dataset;
use repz::store::fs::FileStore;
use repz::store::DataStore;
use std::fs;
use tempfile::TempDir;

const HEADER_LINE: &str = "Exercise,Reps,Weight,Date\n";

fn store(dir: &TempDir) -> FileStore {
    FileStore::new(dir.path().to_path_buf())
}

fn args(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

#[test]
fn test_create_writes_exactly_the_header() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store(&dir);

    store.create_dataset("data").unwrap();

    let content = fs::read_to_string(dir.path().join("data.csv")).unwrap();
    assert_eq!(content, HEADER_LINE);
}

#[test]
fn test_create_does_not_clobber_an_existing_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store(&dir);
    store.create_dataset("data").unwrap();

    let mut dataset = Dataset::new("data");
    commands::add::run(
        &mut store,
        &mut dataset,
        &args(&["Squat", "5", "225", "2025-05-19"]),
    )
    .unwrap();

    store.create_dataset("data").unwrap();
    assert_eq!(store.load_entries("data").unwrap().len(), 1);
}

#[test]
fn test_rows_survive_a_fresh_store() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store(&dir);
    store.create_dataset("data").unwrap();

    let mut dataset = Dataset::new("data");
    commands::add::run(
        &mut store,
        &mut dataset,
        &args(&["Bench Press", "8", "135.5", "2025-05-19"]),
    )
    .unwrap();

    // A separate instance, as a new process would see it
    let reopened = FileStore::new(dir.path().to_path_buf());
    let entries = reopened.load_entries("data").unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].exercise, "Bench Press");
    assert_eq!(entries[0].weight, 135.5);
}

#[test]
fn test_saves_leave_no_temp_files_behind() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store(&dir);
    store.create_dataset("data").unwrap();

    let mut dataset = Dataset::new("data");
    for i in 1..=5 {
        commands::add::run(
            &mut store,
            &mut dataset,
            &args(&["Squat", &i.to_string(), "225", "2025-05-19"]),
        )
        .unwrap();
    }

    let leftovers: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "temp files left behind: {:?}", leftovers);
}

#[test]
fn test_listing_ignores_foreign_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store(&dir);
    store.create_dataset("data").unwrap();
    store.create_dataset("cutting").unwrap();

    fs::write(dir.path().join("config.json"), "{}").unwrap();
    fs::write(dir.path().join("notes.txt"), "not a dataset").unwrap();
    fs::write(dir.path().join(".hidden.csv"), HEADER_LINE).unwrap();

    assert_eq!(
        store.list_dataset_names().unwrap(),
        vec!["cutting", "data"]
    );
}

#[test]
fn test_comma_in_exercise_survives_the_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store(&dir);
    store.create_dataset("data").unwrap();

    let mut dataset = Dataset::new("data");
    commands::add::run(
        &mut store,
        &mut dataset,
        &args(&["Clean, Jerk", "3", "185", "2025-05-19"]),
    )
    .unwrap();

    // The csv writer must quote the embedded comma
    let raw = fs::read_to_string(dir.path().join("data.csv")).unwrap();
    assert!(raw.contains("\"Clean, Jerk\""));

    let reopened = FileStore::new(dir.path().to_path_buf());
    let entries = reopened.load_entries("data").unwrap();
    assert_eq!(entries[0].exercise, "Clean, Jerk");
}

#[test]
fn test_loading_a_missing_dataset_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = store(&dir);

    let err = store.load_entries("missing").unwrap_err();
    assert!(matches!(err, RepzError::NotFound(name) if name == "missing"));
}

#[test]
fn test_foreign_header_is_a_schema_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let store = store(&dir);
    fs::write(
        dir.path().join("data.csv"),
        "Movement,Sets,Load,Day\nSquat,5,225,2025-05-19\n",
    )
    .unwrap();

    let err = store.load_entries("data").unwrap_err();
    match err {
        RepzError::SchemaMismatch { expected, found } => {
            assert_eq!(expected, "Exercise,Reps,Weight,Date");
            assert_eq!(found, "Movement,Sets,Load,Day");
        }
        other => panic!("Expected SchemaMismatch, got {:?}", other),
    }
}

#[test]
fn test_failed_add_leaves_the_file_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store(&dir);
    store.create_dataset("data").unwrap();

    let mut dataset = Dataset::new("data");
    commands::add::run(
        &mut store,
        &mut dataset,
        &args(&["Squat", "5", "225", "2025-05-19"]),
    )
    .unwrap();
    let before = fs::read(dir.path().join("data.csv")).unwrap();

    let err = commands::add::run(&mut store, &mut dataset, &args(&["Squat", "five", "225"]));
    assert!(err.is_err());

    let after = fs::read(dir.path().join("data.csv")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_file_ext_is_normalized_and_used() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path().to_path_buf()).with_file_ext("tsv");
    assert_eq!(store.file_ext(), ".tsv");

    store.create_dataset("data").unwrap();
    assert!(dir.path().join("data.tsv").is_file());
    assert!(store.dataset_exists("data"));
}

#[test]
fn test_names_that_escape_the_root_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store(&dir);

    assert!(matches!(
        store.create_dataset("../evil"),
        Err(RepzError::Store(_))
    ));
    assert!(matches!(store.create_dataset(""), Err(RepzError::Store(_))));
}
