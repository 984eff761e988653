use std::sync::Arc;
use std::time::Instant;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::limits::*;
use crate::model::{Amenity, AmenitySelection, Booking, Event, Floor, RoomState, User};
use crate::observability;

use super::availability::year_and_span;
use super::conflict::{check_restrictions, check_room_free, validate_name, validate_start_date};
use super::cost;
use super::{Engine, EngineError};

impl Engine {
    pub fn add_floor(
        &self,
        number: u32,
        handicap_accessible: bool,
        restricted: Vec<Amenity>,
    ) -> Result<(), EngineError> {
        if self.dir.floor_count() >= MAX_FLOORS {
            return Err(EngineError::LimitExceeded("too many floors"));
        }
        if self.dir.contains_floor(number) {
            return Err(EngineError::FloorAlreadyExists(number));
        }

        let floor = Arc::new(Floor::new(number, handicap_accessible, restricted));
        self.dir.insert_floor(floor);
        tracing::debug!(floor = number, "floor added");
        Ok(())
    }

    pub fn add_room(&self, number: u32, floor_no: u32, beds: u32) -> Result<(), EngineError> {
        if beds == 0 {
            return Err(EngineError::InvalidArgument("room must have at least one bed"));
        }
        if self.dir.room_count() >= MAX_ROOMS {
            return Err(EngineError::LimitExceeded("too many rooms"));
        }
        let floor = self
            .dir
            .get_floor(floor_no)
            .ok_or(EngineError::FloorNotFound(floor_no))?;
        if self.dir.contains_room(number) {
            return Err(EngineError::RoomAlreadyExists(number));
        }

        let state = RoomState::new(number, floor, beds);
        self.dir.insert_room(number, Arc::new(RwLock::new(state)));
        self.notify.send(number, &Event::RoomAdded { room: number, floor: floor_no });
        metrics::gauge!(observability::ROOMS).set(self.dir.room_count() as f64);
        tracing::debug!(room = number, floor = floor_no, beds, "room added");
        Ok(())
    }

    /// Register an amenity descriptor in the catalog. Identity is the name;
    /// re-registering a name replaces the descriptor.
    pub fn register_amenity(
        &self,
        name: &str,
        limit: u32,
        cost: Decimal,
    ) -> Result<Amenity, EngineError> {
        validate_name(name)?;
        if cost.is_sign_negative() {
            return Err(EngineError::InvalidArgument("negative amenity cost"));
        }
        if self.dir.amenity_count() >= MAX_AMENITIES {
            return Err(EngineError::LimitExceeded("too many amenities"));
        }

        let amenity = Amenity::new(name, limit, cost);
        self.dir.insert_amenity(amenity.clone());
        Ok(amenity)
    }

    /// Reserve a room: validate, check restrictions and availability, price,
    /// then commit the calendar and register the booking — all under the
    /// room's write lock. Any failure leaves every registry and calendar
    /// untouched.
    pub async fn reserve(
        &self,
        room_no: u32,
        start_date: NaiveDate,
        days: u16,
        selections: Vec<AmenitySelection>,
        user: User,
    ) -> Result<Booking, EngineError> {
        let started = Instant::now();
        let result = self
            .reserve_inner(room_no, start_date, days, selections, user)
            .await;
        match &result {
            Ok(booking) => {
                metrics::counter!(observability::RESERVATIONS_TOTAL).increment(1);
                metrics::gauge!(observability::BOOKINGS).set(self.dir.booking_count() as f64);
                tracing::info!(
                    room = room_no,
                    booking = %booking.id,
                    cost = %booking.total_cost,
                    "reservation committed"
                );
            }
            Err(e) => {
                metrics::counter!(observability::RESERVATIONS_REJECTED_TOTAL).increment(1);
                tracing::debug!(room = room_no, "reservation rejected: {e}");
            }
        }
        metrics::histogram!(observability::RESERVE_DURATION_SECONDS)
            .record(started.elapsed().as_secs_f64());
        result
    }

    async fn reserve_inner(
        &self,
        room_no: u32,
        start_date: NaiveDate,
        days: u16,
        selections: Vec<AmenitySelection>,
        user: User,
    ) -> Result<Booking, EngineError> {
        validate_start_date(start_date)?;
        if selections.len() > MAX_SELECTIONS_PER_BOOKING {
            return Err(EngineError::LimitExceeded("too many amenity selections"));
        }
        let room = self
            .dir
            .get_room(room_no)
            .ok_or(EngineError::RoomNotFound(room_no))?;
        let mut guard = room.write().await;

        // Fail-fast gates: nothing below mutates until all have passed.
        check_restrictions(&guard, &selections)?;
        let (year, span) = year_and_span(start_date, days);
        check_room_free(&guard, year, &span)?;
        let total_cost = cost::total_cost(guard.beds, &selections, days)?;

        guard.calendar.commit(year, &span);
        let booking = Booking {
            id: Uuid::new_v4(),
            room: room_no,
            user,
            start_date,
            days,
            selections,
            total_cost,
        };
        self.dir.insert_booking(booking.clone());
        self.notify.send(
            room_no,
            &Event::BookingConfirmed {
                id: booking.id,
                room: room_no,
                year,
                span,
            },
        );
        Ok(booking)
    }
}
