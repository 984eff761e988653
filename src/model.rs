use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::EngineError;

/// Day-of-year 1..=365 — the only calendar unit. Leap days are not modeled.
pub type Day = u16;

/// Calendar year, as produced by `chrono::Datelike::year`.
pub type Year = i32;

pub const DAYS_IN_YEAR: Day = 365;

/// Inclusive day-of-year range `[first, first + days]`.
///
/// A span with `days = n` covers `n + 1` calendar days: a stay starting on
/// day 10 with `days = 1` occupies days 10 and 11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySpan {
    pub first: Day,
    pub days: u16,
}

impl DaySpan {
    pub fn new(first: Day, days: u16) -> Self {
        debug_assert!(first >= 1, "day-of-year is 1-based");
        Self { first, days }
    }

    /// Last day covered, inclusive. May exceed `DAYS_IN_YEAR` — such days do
    /// not exist and are never free, never removed.
    pub fn last(&self) -> u32 {
        self.first as u32 + self.days as u32
    }

    /// Number of calendar days covered (`days + 1`).
    pub fn len(&self) -> u32 {
        self.days as u32 + 1
    }

    pub fn iter_days(&self) -> impl Iterator<Item = u32> {
        self.first as u32..=self.last()
    }
}

/// Optional add-on with a per-booking count limit and a per-day cost.
/// Identity is the name; the catalog keeps one descriptor per name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenity {
    pub name: String,
    pub limit: u32,
    pub cost: Decimal,
}

impl Amenity {
    pub fn new(name: impl Into<String>, limit: u32, cost: Decimal) -> Self {
        Self {
            name: name.into(),
            limit,
            cost,
        }
    }
}

/// An amenity chosen for a booking, with a requested count.
///
/// Construction is the only place the count limit is enforced; a selection
/// that exists is a valid selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmenitySelection {
    amenity: Amenity,
    count: u32,
}

impl AmenitySelection {
    pub fn new(amenity: Amenity, count: u32) -> Result<Self, EngineError> {
        if count > amenity.limit {
            return Err(EngineError::CapacityExceeded {
                amenity: amenity.name.clone(),
                limit: amenity.limit,
            });
        }
        Ok(Self { amenity, count })
    }

    pub fn amenity(&self) -> &Amenity {
        &self.amenity
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

/// A floor owns its restriction set; rooms on the floor inherit it.
/// Immutable after registration, shared via `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    pub number: u32,
    pub handicap_accessible: bool,
    pub restricted: Vec<Amenity>,
}

impl Floor {
    pub fn new(number: u32, handicap_accessible: bool, restricted: Vec<Amenity>) -> Self {
        Self {
            number,
            handicap_accessible,
            restricted,
        }
    }

    pub fn is_restricted(&self, amenity_name: &str) -> bool {
        self.restricted.iter().any(|a| a.name == amenity_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// Free days of one year as a 365-bit set. Bit `d - 1` is set iff day `d`
/// is free. Days outside 1..=365 are never present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeDays {
    bits: [u64; 6],
}

impl FreeDays {
    /// All 365 days free.
    pub fn full() -> Self {
        let mut bits = [u64::MAX; 6];
        // 365 - 5 * 64 = 45 bits in the last word
        bits[5] = (1u64 << 45) - 1;
        Self { bits }
    }

    fn bit(day: u32) -> Option<(usize, u64)> {
        if day == 0 || day > DAYS_IN_YEAR as u32 {
            return None;
        }
        let idx = (day - 1) as usize;
        Some((idx / 64, 1u64 << (idx % 64)))
    }

    pub fn contains(&self, day: u32) -> bool {
        Self::bit(day).is_some_and(|(word, mask)| self.bits[word] & mask != 0)
    }

    pub fn remove(&mut self, day: u32) {
        if let Some((word, mask)) = Self::bit(day) {
            self.bits[word] &= !mask;
        }
    }

    pub fn count(&self) -> u32 {
        self.bits.iter().map(|w| w.count_ones()).sum()
    }

    /// True iff every day of the span is free. Days past the year end do not
    /// exist, so any span overflowing day 365 reports busy.
    pub fn contains_span(&self, span: &DaySpan) -> bool {
        span.iter_days().all(|d| self.contains(d))
    }

    /// Remove every existing day of the span; overflow days are ignored.
    pub fn remove_span(&mut self, span: &DaySpan) {
        for day in span.iter_days() {
            self.remove(day);
        }
    }
}

/// Per-room booking calendar: year → free-day set.
///
/// Years are materialized lazily. An absent year is implicitly fully free;
/// only `commit` materializes it — queries are read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityCalendar {
    years: HashMap<Year, FreeDays>,
}

impl AvailabilityCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff every day of the span is free in `year`. A year that has
    /// never been committed against reports free for any span.
    pub fn is_free(&self, year: Year, span: &DaySpan) -> bool {
        match self.years.get(&year) {
            None => true,
            Some(free) => free.contains_span(span),
        }
    }

    /// Mark the span occupied, materializing the year's full set on first
    /// touch. Days past the year end are dropped; the next year is never
    /// affected.
    pub fn commit(&mut self, year: Year, span: &DaySpan) {
        self.years
            .entry(year)
            .or_insert_with(FreeDays::full)
            .remove_span(span);
    }

    /// Whether the year's free-day set has been materialized by a commit.
    pub fn is_materialized(&self, year: Year) -> bool {
        self.years.contains_key(&year)
    }

    /// Free days remaining in `year` (365 for an untouched year).
    pub fn free_day_count(&self, year: Year) -> u32 {
        self.years
            .get(&year)
            .map_or(DAYS_IN_YEAR as u32, FreeDays::count)
    }
}

/// Mutable per-room state guarded by the room's lock.
#[derive(Debug, Clone)]
pub struct RoomState {
    pub number: u32,
    pub floor: Arc<Floor>,
    pub beds: u32,
    pub calendar: AvailabilityCalendar,
}

impl RoomState {
    pub fn new(number: u32, floor: Arc<Floor>, beds: u32) -> Self {
        Self {
            number,
            floor,
            beds,
            calendar: AvailabilityCalendar::new(),
        }
    }

    pub fn handicap_accessible(&self) -> bool {
        self.floor.handicap_accessible
    }

    pub fn is_restricted(&self, amenity_name: &str) -> bool {
        self.floor.is_restricted(amenity_name)
    }
}

/// A committed reservation. Created only by the reserve path; immutable
/// thereafter — there is no edit or cancel operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub room: u32,
    pub user: User,
    pub start_date: NaiveDate,
    pub days: u16,
    pub selections: Vec<AmenitySelection>,
    pub total_cost: Decimal,
}

/// Notification record broadcast after a committed mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    RoomAdded {
        room: u32,
        floor: u32,
    },
    BookingConfirmed {
        id: Uuid,
        room: u32,
        year: Year,
        span: DaySpan,
    },
}

// ── Query result types ───────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomInfo {
    pub number: u32,
    pub floor: u32,
    pub beds: u32,
    pub handicap_accessible: bool,
}
