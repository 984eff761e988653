mod availability;
mod conflict;
mod cost;
mod error;
mod mutations;
mod queries;
mod store;

pub use availability::year_and_span;
pub use cost::{base_rate, total_cost};
pub use error::EngineError;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::model::{Floor, RoomState};
use crate::notify::NotifyHub;

use store::Directory;

pub type SharedRoomState = Arc<RwLock<RoomState>>;

/// The property: registries plus the reservation logic over them.
///
/// Each room's state sits behind its own `RwLock`, so a reservation's
/// check-then-commit runs atomically per room while other rooms proceed in
/// parallel. The critical section is pure in-memory work.
pub struct Engine {
    name: String,
    dir: Directory,
    pub notify: Arc<NotifyHub>,
}

impl Engine {
    pub fn new(name: impl Into<String>, notify: Arc<NotifyHub>) -> Self {
        Self {
            name: name.into(),
            dir: Directory::new(),
            notify,
        }
    }

    /// Display name of the property.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get_room(&self, number: u32) -> Option<SharedRoomState> {
        self.dir.get_room(number)
    }

    pub fn get_floor(&self, number: u32) -> Option<Arc<Floor>> {
        self.dir.get_floor(number)
    }
}
