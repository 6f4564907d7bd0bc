use hotelinv_core::{
    EntityKind, HotelDraft, InventoryConfig, InventoryService, RepoError, RoomDraft,
    ValidationError,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

fn setup_with_hotel() -> (TempDir, InventoryService, u64) {
    let dir = tempfile::tempdir().unwrap();
    let mut service = InventoryService::open(&InventoryConfig::new(dir.path())).unwrap();
    let hotel_id = service
        .add_hotel(&HotelDraft::new("Grand", "Paris", "1 Rue X", 5, true))
        .unwrap();
    (dir, service, hotel_id)
}

#[test]
fn add_room_assigns_ids_and_defaults_to_available() {
    let (_dir, mut service, hotel_id) = setup_with_hotel();

    let first = service
        .add_room(&RoomDraft::new(hotel_id, " 101 ", " Suite ", 200.0))
        .unwrap();
    let second = service
        .add_room(&RoomDraft::new(hotel_id, "102", "Standard", 80.0).available(false))
        .unwrap();
    assert_eq!((first, second), (1, 2));

    let room = service.room(first).unwrap();
    assert_eq!(room.room_number, "101");
    assert_eq!(room.room_type, "Suite");
    assert!(room.is_available);
    assert!(!service.room(second).unwrap().is_available);
    assert_eq!(service.rooms().last().unwrap().id, second);
}

#[test]
fn blank_fields_and_bad_prices_are_rejected() {
    let (_dir, mut service, hotel_id) = setup_with_hotel();

    let err = service
        .add_room(&RoomDraft::new(hotel_id, "  ", "Suite", 10.0))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::EmptyField("room_number"))
    ));

    let err = service
        .add_room(&RoomDraft::new(hotel_id, "101", "", 10.0))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::EmptyField("room_type"))
    ));

    for price in [0.0, -5.0, f64::NAN] {
        let err = service
            .add_room(&RoomDraft::new(hotel_id, "101", "Suite", price))
            .unwrap_err();
        assert!(matches!(
            err,
            RepoError::Validation(ValidationError::NonPositivePrice(_))
        ));
    }
    assert!(service.rooms().is_empty());
}

#[test]
fn add_room_requires_existing_hotel() {
    let (_dir, mut service, _hotel_id) = setup_with_hotel();

    let err = service
        .add_room(&RoomDraft::new(77, "101", "Suite", 200.0))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::HotelNotFound(77))
    ));
    assert_eq!(err.to_string(), "hotel not found: 77");
    assert!(service.rooms().is_empty());
}

#[test]
fn room_number_is_unique_per_hotel() {
    let (_dir, mut service, hotel_id) = setup_with_hotel();
    let other_hotel = service
        .add_hotel(&HotelDraft::new("Ritz", "Paris", "15 Place Vendome", 5, true))
        .unwrap();
    service
        .add_room(&RoomDraft::new(hotel_id, "101", "Suite", 200.0))
        .unwrap();

    let err = service
        .add_room(&RoomDraft::new(hotel_id, " 101", "Standard", 90.0))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::DuplicateRoom { .. })
    ));

    service
        .add_room(&RoomDraft::new(other_hotel, "101", "Suite", 300.0))
        .unwrap();
    assert_eq!(service.rooms().len(), 2);
}

#[test]
fn update_room_with_negative_price_leaves_room_unchanged() {
    let (_dir, mut service, hotel_id) = setup_with_hotel();
    let id = service
        .add_room(&RoomDraft::new(hotel_id, "101", "Suite", 200.0))
        .unwrap();
    let before = service.room(id).unwrap().clone();

    let err = service
        .update_room(id, &RoomDraft::new(hotel_id, "101", "Suite", -5.0))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::NonPositivePrice(_))
    ));
    assert_eq!(service.room(id).unwrap(), &before);
}

#[test]
fn update_room_can_move_to_another_existing_hotel() {
    let (_dir, mut service, hotel_id) = setup_with_hotel();
    let other_hotel = service
        .add_hotel(&HotelDraft::new("Ritz", "Paris", "15 Place Vendome", 5, true))
        .unwrap();
    let id = service
        .add_room(&RoomDraft::new(hotel_id, "101", "Suite", 200.0))
        .unwrap();

    service
        .update_room(
            id,
            &RoomDraft::new(other_hotel, "101", "Premium", 250.0).available(false),
        )
        .unwrap();
    let room = service.room(id).unwrap();
    assert_eq!(room.hotel_id, other_hotel);
    assert_eq!(room.room_type, "Premium");
    assert!(!room.is_available);

    let err = service
        .update_room(id, &RoomDraft::new(999, "101", "Suite", 200.0))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::HotelNotFound(999))
    ));
}

#[test]
fn update_excludes_self_but_rejects_collision_with_sibling() {
    let (_dir, mut service, hotel_id) = setup_with_hotel();
    let a = service
        .add_room(&RoomDraft::new(hotel_id, "101", "Suite", 200.0))
        .unwrap();
    let b = service
        .add_room(&RoomDraft::new(hotel_id, "102", "Suite", 200.0))
        .unwrap();

    service
        .update_room(a, &RoomDraft::new(hotel_id, "101", "Family", 180.0))
        .unwrap();

    let err = service
        .update_room(b, &RoomDraft::new(hotel_id, "101", "Suite", 200.0))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::DuplicateRoom { .. })
    ));
    assert_eq!(service.room(b).unwrap().room_number, "102");
}

#[test]
fn missing_room_ids_return_not_found() {
    let (_dir, mut service, hotel_id) = setup_with_hotel();

    let err = service
        .update_room(5, &RoomDraft::new(hotel_id, "101", "Suite", 200.0))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound { entity: EntityKind::Room, id: 5 }
    ));
    let err = service.delete_room(5).unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound { entity: EntityKind::Room, id: 5 }
    ));
}

#[test]
fn room_listener_is_independent_from_hotel_listener() {
    let (_dir, mut service, hotel_id) = setup_with_hotel();
    let hotel_calls = Arc::new(AtomicUsize::new(0));
    let room_calls = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&hotel_calls);
    service.on_hotels_changed(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let counter = Arc::clone(&room_calls);
    service.on_rooms_changed(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let id = service
        .add_room(&RoomDraft::new(hotel_id, "101", "Suite", 200.0))
        .unwrap();
    let _ = service
        .add_room(&RoomDraft::new(hotel_id, "101", "Suite", 200.0))
        .unwrap_err();
    service.delete_room(id).unwrap();

    assert_eq!(room_calls.load(Ordering::SeqCst), 2);
    assert_eq!(hotel_calls.load(Ordering::SeqCst), 0);
}
