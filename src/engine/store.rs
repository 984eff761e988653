use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

use crate::model::{Amenity, Booking, Floor};

use super::SharedRoomState;

/// Owned registries of the property: floors, rooms, amenity catalog,
/// bookings. The engine is the sole mutator; iteration order is map order
/// and carries no meaning.
pub struct Directory {
    floors: DashMap<u32, Arc<Floor>>,
    rooms: DashMap<u32, SharedRoomState>,
    amenities: DashMap<String, Amenity>,
    bookings: DashMap<Uuid, Booking>,
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

impl Directory {
    pub fn new() -> Self {
        Self {
            floors: DashMap::new(),
            rooms: DashMap::new(),
            amenities: DashMap::new(),
            bookings: DashMap::new(),
        }
    }

    // ── Floors ───────────────────────────────────────────────

    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    pub fn contains_floor(&self, number: u32) -> bool {
        self.floors.contains_key(&number)
    }

    pub fn get_floor(&self, number: u32) -> Option<Arc<Floor>> {
        self.floors.get(&number).map(|e| e.value().clone())
    }

    pub fn insert_floor(&self, floor: Arc<Floor>) {
        self.floors.insert(floor.number, floor);
    }

    pub fn floor_list(&self) -> Vec<Arc<Floor>> {
        self.floors.iter().map(|e| e.value().clone()).collect()
    }

    // ── Rooms ────────────────────────────────────────────────

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn contains_room(&self, number: u32) -> bool {
        self.rooms.contains_key(&number)
    }

    pub fn get_room(&self, number: u32) -> Option<SharedRoomState> {
        self.rooms.get(&number).map(|e| e.value().clone())
    }

    pub fn insert_room(&self, number: u32, state: SharedRoomState) {
        self.rooms.insert(number, state);
    }

    /// Snapshot of all room handles — taken before any lock is awaited so
    /// no map shard stays held across an await point.
    pub fn room_list(&self) -> Vec<SharedRoomState> {
        self.rooms.iter().map(|e| e.value().clone()).collect()
    }

    // ── Amenity catalog ──────────────────────────────────────

    pub fn amenity_count(&self) -> usize {
        self.amenities.len()
    }

    pub fn get_amenity(&self, name: &str) -> Option<Amenity> {
        self.amenities.get(name).map(|e| e.value().clone())
    }

    pub fn insert_amenity(&self, amenity: Amenity) {
        self.amenities.insert(amenity.name.clone(), amenity);
    }

    // ── Bookings ─────────────────────────────────────────────

    pub fn booking_count(&self) -> usize {
        self.bookings.len()
    }

    pub fn get_booking(&self, id: &Uuid) -> Option<Booking> {
        self.bookings.get(id).map(|e| e.value().clone())
    }

    pub fn insert_booking(&self, booking: Booking) {
        self.bookings.insert(booking.id, booking);
    }

    pub fn bookings_for_room(&self, room: u32) -> Vec<Booking> {
        self.bookings
            .iter()
            .filter(|e| e.value().room == room)
            .map(|e| e.value().clone())
            .collect()
    }
}
