use chrono::{Datelike, NaiveDate};

use crate::model::{Amenity, Day, DaySpan, RoomState, Year};

// ── Availability Algorithm ────────────────────────────────────────

/// Split a start date + stay length into the calendar's (year, span) form.
///
/// Only the start date's year is consulted: a stay running past day 365
/// stays within that year's set and never reaches the next year. On leap
/// years Dec 31 maps to ordinal 366, a day no calendar tracks.
pub fn year_and_span(start_date: NaiveDate, days: u16) -> (Year, DaySpan) {
    (
        start_date.year(),
        DaySpan::new(start_date.ordinal() as Day, days),
    )
}

/// Search predicate for one room.
///
/// Requested amenities exclude a room only when *all* of them are
/// restricted on its floor; a room restricting a strict subset still
/// qualifies. The reserve path rejects each restricted amenity
/// individually.
pub fn room_matches(
    room: &RoomState,
    year: Year,
    span: &DaySpan,
    beds: u32,
    handicap_accessible: bool,
    amenities: &[Amenity],
) -> bool {
    if room.handicap_accessible() != handicap_accessible || room.beds != beds {
        return false;
    }
    if !amenities.is_empty() && amenities.iter().all(|a| room.is_restricted(&a.name)) {
        return false;
    }
    room.calendar.is_free(year, span)
}
