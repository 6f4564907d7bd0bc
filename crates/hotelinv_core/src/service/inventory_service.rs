//! Inventory use-case service.
//!
//! # Responsibility
//! - Open both collections at startup, hotels first.
//! - Expose hotel and room CRUD, change listeners, search and statistics.
//!
//! # Invariants
//! - Hotel deletion consults the live room collection.
//! - Room writes consult the live hotel collection.
//! - No global state: each service instance owns its repositories.

use std::time::Instant;

use log::{error, info};

use crate::config::InventoryConfig;
use crate::model::hotel::{Hotel, HotelDraft, HotelId};
use crate::model::room::{Room, RoomDraft, RoomId};
use crate::repo::hotel_repo::HotelRepository;
use crate::repo::room_repo::RoomRepository;
use crate::repo::RepoResult;
use crate::search::filter::{filter_hotels, filter_rooms, HotelFilter, RoomFilter};
use crate::stats::RoomStats;
use crate::store::JsonStore;

#[derive(Debug)]
pub struct InventoryService {
    hotels: HotelRepository,
    rooms: RoomRepository,
}

impl InventoryService {
    /// Loads both collections described by `config`.
    ///
    /// # Errors
    /// - `RepoError::Store` when either stored collection cannot be read or
    ///   reconstructed. Callers should abort startup.
    pub fn open(config: &InventoryConfig) -> RepoResult<Self> {
        let started_at = Instant::now();
        let store = JsonStore::new(config.data_dir.clone());

        let result = HotelRepository::load(store.clone(), config.hotels_collection.as_str())
            .and_then(|hotels| {
                RoomRepository::load(store, config.rooms_collection.as_str())
                    .map(|rooms| Self::from_repositories(hotels, rooms))
            });

        match &result {
            Ok(service) => info!(
                "event=inventory_open module=service status=ok hotels={} rooms={} duration_ms={}",
                service.hotels().len(),
                service.rooms().len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=inventory_open module=service status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }

    pub fn from_repositories(hotels: HotelRepository, rooms: RoomRepository) -> Self {
        Self { hotels, rooms }
    }

    pub fn hotel_repository(&self) -> &HotelRepository {
        &self.hotels
    }

    pub fn room_repository(&self) -> &RoomRepository {
        &self.rooms
    }

    // Hotels

    pub fn hotels(&self) -> &[Hotel] {
        self.hotels.list()
    }

    pub fn hotel(&self, id: HotelId) -> RepoResult<&Hotel> {
        self.hotels.get_by_id(id)
    }

    pub fn add_hotel(&mut self, draft: &HotelDraft) -> RepoResult<HotelId> {
        self.hotels.add(draft)
    }

    pub fn update_hotel(&mut self, id: HotelId, draft: &HotelDraft) -> RepoResult<()> {
        self.hotels.update(id, draft)
    }

    /// Deletes hotel `id`; fails while any room still references it.
    pub fn delete_hotel(&mut self, id: HotelId) -> RepoResult<()> {
        self.hotels.delete(id, &self.rooms)
    }

    pub fn on_hotels_changed(&mut self, listener: impl FnMut() + Send + 'static) {
        self.hotels.set_change_listener(listener);
    }

    /// `Name (City)` label for `id`, if the hotel exists.
    pub fn hotel_label(&self, id: HotelId) -> Option<String> {
        self.hotels.get_by_id(id).ok().map(Hotel::label)
    }

    pub fn search_hotels(&self, filter: &HotelFilter) -> Vec<&Hotel> {
        filter_hotels(self.hotels.list(), filter)
    }

    // Rooms

    pub fn rooms(&self) -> &[Room] {
        self.rooms.list()
    }

    pub fn room(&self, id: RoomId) -> RepoResult<&Room> {
        self.rooms.get_by_id(id)
    }

    /// Adds a room; its `hotel_id` must reference an existing hotel.
    pub fn add_room(&mut self, draft: &RoomDraft) -> RepoResult<RoomId> {
        self.rooms.add(draft, &self.hotels)
    }

    pub fn update_room(&mut self, id: RoomId, draft: &RoomDraft) -> RepoResult<()> {
        self.rooms.update(id, draft, &self.hotels)
    }

    pub fn delete_room(&mut self, id: RoomId) -> RepoResult<()> {
        self.rooms.delete(id)
    }

    pub fn on_rooms_changed(&mut self, listener: impl FnMut() + Send + 'static) {
        self.rooms.set_change_listener(listener);
    }

    pub fn search_rooms(&self, filter: &RoomFilter) -> Vec<&Room> {
        filter_rooms(self.rooms.list(), self.hotels.list(), filter)
    }

    pub fn room_stats(&self) -> RoomStats {
        RoomStats::from_rooms(self.rooms.list())
    }
}
