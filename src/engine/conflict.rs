use chrono::{NaiveDate, Utc};

use crate::limits::MAX_NAME_LEN;
use crate::model::{AmenitySelection, DaySpan, RoomState, Year};

use super::EngineError;

pub(crate) fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub(crate) fn validate_start_date(start_date: NaiveDate) -> Result<(), EngineError> {
    if start_date < today() {
        return Err(EngineError::InvalidArgument("start date is in the past"));
    }
    Ok(())
}

pub(crate) fn validate_name(name: &str) -> Result<(), EngineError> {
    if name.is_empty() {
        return Err(EngineError::InvalidArgument("empty name"));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(EngineError::LimitExceeded("name too long"));
    }
    Ok(())
}

/// Reject any selection whose amenity is restricted on the room's floor.
/// Runs before any state is touched — a violation leaves no trace.
pub(crate) fn check_restrictions(
    room: &RoomState,
    selections: &[AmenitySelection],
) -> Result<(), EngineError> {
    for selection in selections {
        let name = &selection.amenity().name;
        if room.is_restricted(name) {
            return Err(EngineError::RestrictionViolation {
                amenity: name.clone(),
                floor: room.floor.number,
            });
        }
    }
    Ok(())
}

pub(crate) fn check_room_free(
    room: &RoomState,
    year: Year,
    span: &DaySpan,
) -> Result<(), EngineError> {
    if room.calendar.is_free(year, span) {
        Ok(())
    } else {
        Err(EngineError::RoomUnavailable(room.number))
    }
}
