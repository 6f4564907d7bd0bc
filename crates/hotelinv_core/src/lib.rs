//! Core domain logic for the hotel inventory manager.
//! This crate is the single source of truth for inventory invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod notify;
pub mod repo;
pub mod search;
pub mod service;
pub mod stats;
pub mod store;

pub use config::{ConfigError, InventoryConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::hotel::{Hotel, HotelDraft, HotelId};
pub use model::room::{Room, RoomDraft, RoomId, ROOM_TYPE_SUGGESTIONS};
pub use model::validation::ValidationError;
pub use notify::{ChangeListener, ChangeNotifier};
pub use repo::hotel_repo::HotelRepository;
pub use repo::room_repo::RoomRepository;
pub use repo::{EntityKind, HotelLookup, RepoError, RepoResult, RoomLookup};
pub use search::filter::{
    filter_hotels, filter_rooms, HotelFilter, RoomFilter, UNKNOWN_HOTEL_LABEL,
};
pub use service::inventory_service::InventoryService;
pub use stats::RoomStats;
pub use store::{JsonStore, StoreError, StoreResult, StoredEntity};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
