use super::*;
use crate::storage::StoreKey;
use tempfile::tempdir;

#[test]
fn test_store_key_uses_type_and_id() {
    let review = Review::new();
    assert_eq!(
        review.store_key(),
        StoreKey::new("Review", review.base.id.clone())
    );
}

#[test]
fn test_save_refreshes_updated_at_and_persists() {
    let dir = tempdir().unwrap();
    let mut storage = FileStorage::with_path(dir.path().join("file.json"));

    let mut model = BaseModel::new();
    let created_at = model.created_at;
    std::thread::sleep(std::time::Duration::from_millis(2));
    model.save(&mut storage).unwrap();

    assert_eq!(model.created_at, created_at);
    assert!(model.updated_at > created_at);
    assert!(storage.validate_id("BaseModel", &model.id));

    let mut fresh = FileStorage::with_path(dir.path().join("file.json"));
    fresh.reload().unwrap();
    assert_eq!(fresh.get("BaseModel", &model.id), Some(&model.attributes()));
}

#[test]
fn test_save_through_trait_object() {
    let dir = tempdir().unwrap();
    let mut storage = FileStorage::with_path(dir.path().join("file.json"));

    let mut entity = Entity::new(EntityKind::Review);
    let model: &mut dyn Model = &mut entity;
    model.save(&mut storage).unwrap();

    assert!(storage.validate_id("Review", &entity.base().id));
}
