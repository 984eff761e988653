//! Hard caps on registries and field sizes. Exceeding any of these fails
//! the operation with `EngineError::LimitExceeded`.

pub const MAX_FLOORS: usize = 1_000;
pub const MAX_ROOMS: usize = 50_000;
pub const MAX_AMENITIES: usize = 1_000;
pub const MAX_NAME_LEN: usize = 128;
pub const MAX_SELECTIONS_PER_BOOKING: usize = 64;
