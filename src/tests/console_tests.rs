use super::*;
use crate::storage::AttrValue;
use tempfile::{tempdir, TempDir};

fn storage_for_test() -> (TempDir, FileStorage) {
    let dir = tempdir().expect("temp dir");
    let storage = FileStorage::with_path(dir.path().join("file.json"));
    (dir, storage)
}

#[test]
fn test_create_persists_new_instance() {
    let (dir, mut storage) = storage_for_test();
    let id = Console::open(&mut storage).unwrap().create("Place").unwrap();

    let mut fresh = FileStorage::with_path(dir.path().join("file.json"));
    fresh.reload().unwrap();
    assert!(fresh.validate_id("Place", &id));
}

#[test]
fn test_create_unknown_class() {
    let (_dir, mut storage) = storage_for_test();
    let mut console = Console::open(&mut storage).unwrap();
    let err = console.create("MyModel").unwrap_err();
    assert!(matches!(err, ConsoleError::UnknownClass(_)));
    assert_eq!(err.to_string(), "** class doesn't exist **");
}

#[test]
fn test_open_keeps_earlier_objects() {
    let (dir, mut storage) = storage_for_test();
    let first = Console::open(&mut storage).unwrap().create("User").unwrap();

    let mut second_run = FileStorage::with_path(dir.path().join("file.json"));
    let second = Console::open(&mut second_run)
        .unwrap()
        .create("User")
        .unwrap();

    assert!(second_run.validate_id("User", &first));
    assert!(second_run.validate_id("User", &second));
}

#[test]
fn test_show_renders_instance() {
    let (_dir, mut storage) = storage_for_test();
    let mut console = Console::open(&mut storage).unwrap();
    let id = console.create("State").unwrap();

    let shown = console.show("State", &id).unwrap();
    assert!(shown.starts_with(&format!("[State] ({}) ", id)), "got: {}", shown);
    assert!(matches!(
        console.show("State", "nope"),
        Err(ConsoleError::NoInstance)
    ));
}

#[test]
fn test_destroy_maps_missing_instance() {
    let (_dir, mut storage) = storage_for_test();
    let mut console = Console::open(&mut storage).unwrap();
    let id = console.create("City").unwrap();

    console.destroy("City", &id).unwrap();
    let err = console.destroy("City", &id).unwrap_err();
    assert_eq!(err.to_string(), "** no instance found **");
}

#[test]
fn test_all_filters_by_class() {
    let (_dir, mut storage) = storage_for_test();
    let mut console = Console::open(&mut storage).unwrap();
    console.create("Place").unwrap();
    console.create("Place").unwrap();
    console.create("Review").unwrap();

    assert_eq!(console.all(None).unwrap().len(), 3);
    let places = console.all(Some("Place")).unwrap();
    assert_eq!(places.len(), 2);
    assert!(places.iter().all(|line| line.starts_with("[Place] (")));
    assert_eq!(console.count("Review").unwrap(), 1);
}

#[test]
fn test_update_parses_numbers_and_keeps_strings() {
    let (_dir, mut storage) = storage_for_test();
    let mut console = Console::open(&mut storage).unwrap();
    let id = console.create("Place").unwrap();

    console.update("Place", &id, "max_guest", "4").unwrap();
    console.update("Place", &id, "name", "My House").unwrap();
    drop(console);

    let attrs = storage.get("Place", &id).unwrap();
    assert_eq!(attrs.get("max_guest"), Some(&AttrValue::Json(serde_json::json!(4))));
    assert_eq!(attrs.get("name").and_then(AttrValue::as_str), Some("My House"));
}

#[test]
fn test_update_rejects_mistyped_value() {
    let (_dir, mut storage) = storage_for_test();
    let mut console = Console::open(&mut storage).unwrap();
    let id = console.create("Place").unwrap();

    let err = console
        .update("Place", &id, "number_rooms", "many")
        .unwrap_err();
    assert!(matches!(err, ConsoleError::InvalidValue(ref name) if name == "number_rooms"));
    assert_eq!(
        err.to_string(),
        "** value doesn't fit attribute 'number_rooms' **"
    );

    let shown = console.show("Place", &id).unwrap();
    assert!(shown.contains(r#""number_rooms":0"#), "got: {}", shown);
}

#[test]
fn test_update_refuses_identity_fields() {
    let (_dir, mut storage) = storage_for_test();
    let mut console = Console::open(&mut storage).unwrap();
    let id = console.create("Amenity").unwrap();

    assert!(matches!(
        console.update("Amenity", &id, "id", "other"),
        Err(ConsoleError::ReadOnlyAttribute(_))
    ));
    assert!(matches!(
        console.update("Amenity", "missing", "name", "Wifi"),
        Err(ConsoleError::NoInstance)
    ));
}

#[test]
fn test_parse_value() {
    assert_eq!(parse_value("3"), serde_json::json!(3));
    assert_eq!(parse_value("2.5"), serde_json::json!(2.5));
    assert_eq!(parse_value("true"), serde_json::json!(true));
    assert_eq!(parse_value("\"quoted\""), serde_json::json!("\"quoted\""));
    assert_eq!(parse_value("hello"), serde_json::json!("hello"));
}
