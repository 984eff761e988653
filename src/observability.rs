// ── RED metrics (request-driven) ────────────────────────────────

/// Counter: reservations committed.
pub const RESERVATIONS_TOTAL: &str = "innkeep_reservations_total";

/// Counter: reservations rejected by validation, restriction, or
/// availability.
pub const RESERVATIONS_REJECTED_TOTAL: &str = "innkeep_reservations_rejected_total";

/// Histogram: reserve latency in seconds, committed and rejected alike.
pub const RESERVE_DURATION_SECONDS: &str = "innkeep_reserve_duration_seconds";

/// Counter: availability searches served.
pub const SEARCHES_TOTAL: &str = "innkeep_searches_total";

// ── USE metrics (resource utilization) ──────────────────────────

/// Gauge: rooms currently registered.
pub const ROOMS: &str = "innkeep_rooms";

/// Gauge: bookings held in the registry.
pub const BOOKINGS: &str = "innkeep_bookings";
