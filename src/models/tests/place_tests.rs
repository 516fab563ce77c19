use super::*;
use crate::models::{Amenity, City, Review, State, User};
use crate::storage::{AttrValue, CLASS_FIELD};
use serde_json::json;

#[test]
fn test_place_defaults() {
    let place = Place::new();
    assert_eq!(place.city_id, "");
    assert_eq!(place.user_id, "");
    assert_eq!(place.name, "");
    assert_eq!(place.description, "");
    assert_eq!(place.number_rooms, 0);
    assert_eq!(place.number_bathrooms, 0);
    assert_eq!(place.max_guest, 0);
    assert_eq!(place.price_by_night, 0);
    assert_eq!(place.latitude, 0.0);
    assert_eq!(place.longitude, 0.0);
    assert!(place.amenity_ids.is_empty());
}

#[test]
fn test_place_attributes_carry_every_field() {
    let mut place = Place::new();
    place.name = "Loft".to_string();
    place.max_guest = 4;
    place.latitude = 37.77;
    place.amenity_ids = vec!["a1".to_string()];

    let attrs = place.attributes();
    for field in [
        "id",
        "created_at",
        "updated_at",
        "city_id",
        "user_id",
        "name",
        "description",
        "number_rooms",
        "number_bathrooms",
        "max_guest",
        "price_by_night",
        "latitude",
        "longitude",
        "amenity_ids",
    ] {
        assert!(attrs.contains(field), "missing {}", field);
    }
    assert_eq!(attrs.get("name").and_then(AttrValue::as_str), Some("Loft"));
    assert_eq!(attrs.get("max_guest"), Some(&AttrValue::Json(json!(4))));
    assert_eq!(
        attrs.get("amenity_ids"),
        Some(&AttrValue::Json(json!(["a1"])))
    );
}

#[test]
fn test_place_set_type_checks_fixed_fields() {
    let mut place = Place::new();
    place.set("number_rooms", json!(3)).unwrap();
    assert_eq!(place.number_rooms, 3);
    assert!(place.set("number_rooms", json!("three")).is_err());
    assert_eq!(place.number_rooms, 3);
}

#[test]
fn test_place_set_unknown_attribute_goes_to_extras() {
    let mut place = Place::new();
    place.set("pool", json!(true)).unwrap();
    assert_eq!(place.base.extra.get("pool"), Some(&json!(true)));
    assert_eq!(place.attributes().get("pool"), Some(&AttrValue::Json(json!(true))));
}

#[test]
fn test_subtypes_report_their_own_type_name() {
    assert_eq!(Place::new().type_name(), "Place");
    assert_eq!(Review::new().type_name(), "Review");
    assert_eq!(State::new().type_name(), "State");
    assert_eq!(City::new().type_name(), "City");
    assert_eq!(Amenity::new().type_name(), "Amenity");
    assert_eq!(User::new().type_name(), "User");
    assert_eq!(Place::new().to_dict()[CLASS_FIELD], json!("Place"));
}

#[test]
fn test_review_and_state_defaults() {
    let review = Review::new();
    assert_eq!(review.place_id, "");
    assert_eq!(review.user_id, "");
    assert_eq!(review.text, "");
    assert_eq!(State::new().name, "");
    assert_eq!(review.base.created_at, review.base.updated_at);
}

#[test]
fn test_subtype_display_format() {
    let state = State::new();
    let expected = format!("[State] ({}) {}", state.base.id, state.attributes());
    assert_eq!(state.to_string(), expected);
}
