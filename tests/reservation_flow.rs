//! End-to-end walk through the public API: register the property, search,
//! reserve, and watch the calendar close up.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use innkeep::engine::Engine;
use innkeep::model::{AmenitySelection, User};
use innkeep::notify::NotifyHub;
use innkeep::EngineError;

const YEAR: i32 = 2100;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_yo_opt(YEAR, day).unwrap()
}

fn build_property() -> Engine {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let engine = Engine::new("Harborview", Arc::new(NotifyHub::new()));
    engine.add_floor(1, true, vec![]).unwrap();
    engine.add_room(101, 1, 1).unwrap();
    engine.add_room(102, 1, 2).unwrap();
    engine
}

#[tokio::test]
async fn full_reservation_flow() {
    let engine = build_property();
    assert_eq!(engine.name(), "Harborview");

    let pet = engine.register_amenity("pet", 2, dec!(20)).unwrap();
    engine.add_floor(2, false, vec![pet.clone()]).unwrap();
    engine.add_room(201, 2, 2).unwrap();

    let wifi = engine.register_amenity("wifi", 3, dec!(5)).unwrap();

    // two candidate two-bed rooms, one per floor
    let accessible = engine
        .find_available_rooms(date(10), 3, 2, true, &[])
        .await
        .unwrap();
    assert_eq!(accessible.len(), 1);
    assert_eq!(accessible[0].number, 102);

    // reserve 102 for days 10..=13 with wifi
    let stay = vec![AmenitySelection::new(wifi, 1).unwrap()];
    let guest = User::new("Grace", "Hopper");
    let booking = engine
        .reserve(102, date(10), 3, stay, guest)
        .await
        .unwrap();
    assert_eq!(booking.total_cost, dec!(240)); // (75 + 5) * 3
    assert_eq!(engine.booking(&booking.id).unwrap().room, 102);

    // the booked range is gone from search results
    let during = engine
        .find_available_rooms(date(11), 1, 2, true, &[])
        .await
        .unwrap();
    assert!(during.is_empty());

    // later in the year the room is back
    let later = engine
        .find_available_rooms(date(30), 1, 2, true, &[])
        .await
        .unwrap();
    assert_eq!(later.len(), 1);

    // a pet booking on the restricted floor never lands
    let pets = vec![AmenitySelection::new(engine.amenity("pet").unwrap(), 1).unwrap()];
    let refused = engine
        .reserve(201, date(50), 2, pets, User::new("Alan", "Turing"))
        .await;
    assert!(matches!(refused, Err(EngineError::RestrictionViolation { .. })));
    assert_eq!(engine.booking_count(), 1);
    assert_eq!(engine.free_days(201, YEAR).await.unwrap(), 365);
}
