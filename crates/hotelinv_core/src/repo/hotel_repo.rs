//! Hotel repository.
//!
//! # Responsibility
//! - Own the hotel collection in insertion order.
//! - Enforce `(name, city)` uniqueness and the room delete guard.
//!
//! # Invariants
//! - A hotel referenced by any room cannot be deleted.
//! - Missing ids fail with `NotFound` on update and delete.

use log::{debug, info};

use super::{
    ensure_unique_ids, next_id, EntityKind, HotelLookup, RepoError, RepoResult, RoomLookup,
};
use crate::model::hotel::{Hotel, HotelDraft, HotelId};
use crate::model::validation::ValidationError;
use crate::notify::ChangeNotifier;
use crate::store::JsonStore;

pub struct HotelRepository {
    store: JsonStore,
    collection: String,
    hotels: Vec<Hotel>,
    notifier: ChangeNotifier,
}

impl HotelRepository {
    /// Loads the hotel collection from `store`.
    ///
    /// # Errors
    /// - `RepoError::Store` when the stored file is unreadable or malformed.
    pub fn load(store: JsonStore, collection: impl Into<String>) -> RepoResult<Self> {
        let collection = collection.into();
        let hotels: Vec<Hotel> = store.load_entities(&collection)?;
        let path = store.collection_path(&collection)?;
        ensure_unique_ids(&path, hotels.iter().map(|hotel| hotel.id))?;

        Ok(Self {
            store,
            collection,
            hotels,
            notifier: ChangeNotifier::new(),
        })
    }

    /// Live collection in insertion order.
    pub fn list(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn get_by_id(&self, id: HotelId) -> RepoResult<&Hotel> {
        self.hotels
            .iter()
            .find(|hotel| hotel.id == id)
            .ok_or(RepoError::NotFound {
                entity: EntityKind::Hotel,
                id,
            })
    }

    /// Id the next `add` will assign, `None` once ids are exhausted.
    pub fn next_id(&self) -> Option<HotelId> {
        next_id(self.hotels.iter().map(|hotel| hotel.id))
    }

    /// Registers the change listener, replacing any previous one.
    pub fn set_change_listener(&mut self, listener: impl FnMut() + Send + 'static) {
        self.notifier.set_listener(listener);
    }

    pub fn clear_change_listener(&mut self) {
        self.notifier.clear_listener();
    }

    /// Validates and appends a new hotel, returning its id.
    pub fn add(&mut self, draft: &HotelDraft) -> RepoResult<HotelId> {
        let draft = self.validate(draft, None)?;
        let id = self
            .next_id()
            .ok_or(RepoError::IdsExhausted(EntityKind::Hotel))?;

        let mut next = self.hotels.clone();
        next.push(Hotel::from_draft(id, draft));
        self.commit(next)?;

        info!("event=hotel_add module=repo status=ok hotel_id={id}");
        Ok(id)
    }

    /// Replaces all editable fields of hotel `id`.
    pub fn update(&mut self, id: HotelId, draft: &HotelDraft) -> RepoResult<()> {
        let draft = self.validate(draft, Some(id))?;
        let position = self.position(id)?;

        let mut next = self.hotels.clone();
        next[position] = Hotel::from_draft(id, draft);
        self.commit(next)?;

        info!("event=hotel_update module=repo status=ok hotel_id={id}");
        Ok(())
    }

    /// Removes hotel `id` unless `rooms` still reference it.
    pub fn delete(&mut self, id: HotelId, rooms: &dyn RoomLookup) -> RepoResult<()> {
        let position = self.position(id)?;
        let room_count = rooms.count_rooms_for_hotel(id);
        if room_count > 0 {
            debug!(
                "event=hotel_delete module=repo status=rejected hotel_id={id} error_code=has_rooms room_count={room_count}"
            );
            return Err(RepoError::ReferentialIntegrity {
                hotel_id: id,
                room_count,
            });
        }

        let mut next = self.hotels.clone();
        next.remove(position);
        self.commit(next)?;

        info!("event=hotel_delete module=repo status=ok hotel_id={id}");
        Ok(())
    }

    fn validate(&self, draft: &HotelDraft, editing: Option<HotelId>) -> RepoResult<HotelDraft> {
        let result = draft.normalize().and_then(|draft| {
            let duplicate = self.hotels.iter().any(|hotel| {
                Some(hotel.id) != editing && hotel.same_identity(&draft.name, &draft.city)
            });
            if duplicate {
                return Err(ValidationError::DuplicateHotel {
                    name: draft.name,
                    city: draft.city,
                });
            }
            Ok(draft)
        });

        result.map_err(|err| {
            debug!(
                "event=hotel_validate module=repo status=rejected error_code={}",
                err.code()
            );
            RepoError::from(err)
        })
    }

    fn position(&self, id: HotelId) -> RepoResult<usize> {
        self.hotels
            .iter()
            .position(|hotel| hotel.id == id)
            .ok_or(RepoError::NotFound {
                entity: EntityKind::Hotel,
                id,
            })
    }

    /// Persists `next`, then swaps it in and notifies.
    fn commit(&mut self, next: Vec<Hotel>) -> RepoResult<()> {
        self.store.save_entities(&self.collection, &next)?;
        self.hotels = next;
        self.notifier.notify();
        Ok(())
    }
}

impl HotelLookup for HotelRepository {
    fn contains_hotel(&self, id: HotelId) -> bool {
        self.hotels.iter().any(|hotel| hotel.id == id)
    }
}

impl std::fmt::Debug for HotelRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HotelRepository")
            .field("collection", &self.collection)
            .field("len", &self.hotels.len())
            .field("notifier", &self.notifier)
            .finish()
    }
}
