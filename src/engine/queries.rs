use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::model::{Amenity, Booking, Floor, RoomInfo, Year};
use crate::observability;

use super::availability::{room_matches, year_and_span};
use super::conflict::validate_start_date;
use super::{Engine, EngineError};

impl Engine {
    /// Linear scan over every registered room, read-locking one room at a
    /// time. Result order is registry order and carries no meaning.
    pub async fn find_available_rooms(
        &self,
        start_date: NaiveDate,
        days: u16,
        beds: u32,
        handicap_accessible: bool,
        amenities: &[Amenity],
    ) -> Result<Vec<RoomInfo>, EngineError> {
        validate_start_date(start_date)?;
        let (year, span) = year_and_span(start_date, days);

        let mut found = Vec::new();
        for room in self.dir.room_list() {
            let guard = room.read().await;
            if room_matches(&guard, year, &span, beds, handicap_accessible, amenities) {
                found.push(RoomInfo {
                    number: guard.number,
                    floor: guard.floor.number,
                    beds: guard.beds,
                    handicap_accessible: guard.handicap_accessible(),
                });
            }
        }
        metrics::counter!(observability::SEARCHES_TOTAL).increment(1);
        Ok(found)
    }

    /// Whether one room is free for the whole stay. Read-only.
    pub async fn room_is_free(
        &self,
        room_no: u32,
        start_date: NaiveDate,
        days: u16,
    ) -> Result<bool, EngineError> {
        validate_start_date(start_date)?;
        let room = self
            .dir
            .get_room(room_no)
            .ok_or(EngineError::RoomNotFound(room_no))?;
        let guard = room.read().await;
        let (year, span) = year_and_span(start_date, days);
        Ok(guard.calendar.is_free(year, &span))
    }

    /// Free days remaining in a room's year (365 for an untouched year).
    pub async fn free_days(&self, room_no: u32, year: Year) -> Result<u32, EngineError> {
        let room = self
            .dir
            .get_room(room_no)
            .ok_or(EngineError::RoomNotFound(room_no))?;
        let guard = room.read().await;
        Ok(guard.calendar.free_day_count(year))
    }

    pub fn booking(&self, id: &Uuid) -> Option<Booking> {
        self.dir.get_booking(id)
    }

    pub fn booking_count(&self) -> usize {
        self.dir.booking_count()
    }

    pub fn bookings_for_room(&self, room_no: u32) -> Vec<Booking> {
        self.dir.bookings_for_room(room_no)
    }

    pub fn amenity(&self, name: &str) -> Option<Amenity> {
        self.dir.get_amenity(name)
    }

    pub fn list_floors(&self) -> Vec<Arc<Floor>> {
        self.dir.floor_list()
    }

    pub async fn list_rooms(&self) -> Vec<RoomInfo> {
        let mut rooms = Vec::new();
        for room in self.dir.room_list() {
            let guard = room.read().await;
            rooms.push(RoomInfo {
                number: guard.number,
                floor: guard.floor.number,
                beds: guard.beds,
                handicap_accessible: guard.handicap_accessible(),
            });
        }
        rooms
    }
}
