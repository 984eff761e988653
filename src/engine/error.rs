#[derive(Debug)]
pub enum EngineError {
    InvalidArgument(&'static str),
    FloorNotFound(u32),
    RoomNotFound(u32),
    FloorAlreadyExists(u32),
    RoomAlreadyExists(u32),
    RestrictionViolation { amenity: String, floor: u32 },
    CapacityExceeded { amenity: String, limit: u32 },
    RoomUnavailable(u32),
    InvalidBedCount(u32),
    LimitExceeded(&'static str),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            EngineError::FloorNotFound(no) => write!(f, "floor not found: {no}"),
            EngineError::RoomNotFound(no) => write!(f, "room not found: {no}"),
            EngineError::FloorAlreadyExists(no) => write!(f, "floor already exists: {no}"),
            EngineError::RoomAlreadyExists(no) => write!(f, "room already exists: {no}"),
            EngineError::RestrictionViolation { amenity, floor } => {
                write!(f, "amenity {amenity} is restricted on floor {floor}")
            }
            EngineError::CapacityExceeded { amenity, limit } => {
                write!(f, "amenity {amenity} count exceeds limit {limit}")
            }
            EngineError::RoomUnavailable(no) => {
                write!(f, "room {no} is not available for the requested dates")
            }
            EngineError::InvalidBedCount(beds) => write!(f, "no rate for {beds} beds"),
            EngineError::LimitExceeded(msg) => write!(f, "limit exceeded: {msg}"),
        }
    }
}

impl std::error::Error for EngineError {}
