use pastebox::model::{PasteDraft, PasteUpdate};
use pastebox::store::fs_backend::FsBackend;
use pastebox::store::{KvBackend, PasteStore, Persistence};
use std::fs;
use tempfile::TempDir;

fn open(dir: &TempDir) -> PasteStore<FsBackend> {
    PasteStore::open(FsBackend::new(dir.path()))
}

#[test]
fn test_reload_yields_equal_collection() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    for (title, content) in [("one", "1"), ("two", "2"), ("three", "3")] {
        let _ = store.create(PasteDraft::new(title, content)).unwrap();
    }
    let second_id = store.list()[1].id.clone();
    let _ = store.update(PasteUpdate::new(&second_id, "two!", "2!"));
    let snapshot = store.list().to_vec();
    drop(store);

    let reopened = open(&dir);
    assert_eq!(reopened.list(), snapshot.as_slice());
}

#[test]
fn test_slot_file_uses_wire_field_names() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    let _ = store
        .create(PasteDraft::new("A", "hello").with_id("x1"))
        .unwrap();

    let raw = fs::read_to_string(dir.path().join("pastes.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let record = &value.as_array().unwrap()[0];
    assert_eq!(record["id"], "x1");
    assert_eq!(record["title"], "A");
    assert_eq!(record["content"], "hello");
    assert!(record["createdAt"].is_string());
}

#[test]
fn test_reset_removes_file() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    let _ = store.create(PasteDraft::new("A", "a")).unwrap();
    let slot_file = dir.path().join("pastes.json");
    assert!(slot_file.exists());

    let reset = store.reset();
    assert!(matches!(reset.persistence, Persistence::Removed));
    assert!(!slot_file.exists());
    assert!(open(&dir).is_empty());
}

#[test]
fn test_corrupt_file_opens_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pastes.json"), "not json at all").unwrap();

    let mut store = open(&dir);
    assert!(store.is_empty());
    assert!(store.take_load_warning().is_some());
}

#[test]
fn test_no_tmp_files_left_behind() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    let _ = store.create(PasteDraft::new("A", "a")).unwrap();
    let _ = store.create(PasteDraft::new("B", "b")).unwrap();

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_backend_remove_of_absent_key_is_ok() {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path());
    backend.remove("pastes").unwrap();
    assert_eq!(backend.read("pastes").unwrap(), None);
}
