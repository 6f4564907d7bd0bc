//! Room repository.
//!
//! # Invariants
//! - Every room references a hotel that exists at write time.
//! - `(room_number, hotel_id)` is unique; room numbers compare exactly.
//! - Missing ids fail with `NotFound` on update and delete.

use log::{debug, info};

use super::{
    ensure_unique_ids, next_id, EntityKind, HotelLookup, RepoError, RepoResult, RoomLookup,
};
use crate::model::hotel::HotelId;
use crate::model::room::{Room, RoomDraft, RoomId};
use crate::model::validation::ValidationError;
use crate::notify::ChangeNotifier;
use crate::store::JsonStore;

pub struct RoomRepository {
    store: JsonStore,
    collection: String,
    rooms: Vec<Room>,
    notifier: ChangeNotifier,
}

impl RoomRepository {
    /// Loads the room collection from `store`.
    ///
    /// Stored `hotel_id` values are not cross-checked against hotels here.
    pub fn load(store: JsonStore, collection: impl Into<String>) -> RepoResult<Self> {
        let collection = collection.into();
        let rooms: Vec<Room> = store.load_entities(&collection)?;
        let path = store.collection_path(&collection)?;
        ensure_unique_ids(&path, rooms.iter().map(|room| room.id))?;

        Ok(Self {
            store,
            collection,
            rooms,
            notifier: ChangeNotifier::new(),
        })
    }

    pub fn list(&self) -> &[Room] {
        &self.rooms
    }

    pub fn get_by_id(&self, id: RoomId) -> RepoResult<&Room> {
        self.rooms
            .iter()
            .find(|room| room.id == id)
            .ok_or(RepoError::NotFound {
                entity: EntityKind::Room,
                id,
            })
    }

    /// Rooms belonging to `hotel_id`, in collection order.
    pub fn rooms_for_hotel(&self, hotel_id: HotelId) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(move |room| room.hotel_id == hotel_id)
    }

    /// Id the next `add` will assign, `None` once ids are exhausted.
    pub fn next_id(&self) -> Option<RoomId> {
        next_id(self.rooms.iter().map(|room| room.id))
    }

    pub fn set_change_listener(&mut self, listener: impl FnMut() + Send + 'static) {
        self.notifier.set_listener(listener);
    }

    pub fn clear_change_listener(&mut self) {
        self.notifier.clear_listener();
    }

    /// Validates and appends a new room, returning its id.
    ///
    /// `hotels` is consulted for the referenced hotel's existence.
    pub fn add(&mut self, draft: &RoomDraft, hotels: &dyn HotelLookup) -> RepoResult<RoomId> {
        let draft = self.validate(draft, None, hotels)?;
        let id = self
            .next_id()
            .ok_or(RepoError::IdsExhausted(EntityKind::Room))?;

        let mut next = self.rooms.clone();
        next.push(Room::from_draft(id, draft));
        self.commit(next)?;

        info!("event=room_add module=repo status=ok room_id={id}");
        Ok(id)
    }

    pub fn update(
        &mut self,
        id: RoomId,
        draft: &RoomDraft,
        hotels: &dyn HotelLookup,
    ) -> RepoResult<()> {
        let draft = self.validate(draft, Some(id), hotels)?;
        let position = self.position(id)?;

        let mut next = self.rooms.clone();
        next[position] = Room::from_draft(id, draft);
        self.commit(next)?;

        info!("event=room_update module=repo status=ok room_id={id}");
        Ok(())
    }

    pub fn delete(&mut self, id: RoomId) -> RepoResult<()> {
        let position = self.position(id)?;

        let mut next = self.rooms.clone();
        next.remove(position);
        self.commit(next)?;

        info!("event=room_delete module=repo status=ok room_id={id}");
        Ok(())
    }

    fn validate(
        &self,
        draft: &RoomDraft,
        editing: Option<RoomId>,
        hotels: &dyn HotelLookup,
    ) -> RepoResult<RoomDraft> {
        let result = draft.normalize().and_then(|draft| {
            if !hotels.contains_hotel(draft.hotel_id) {
                return Err(ValidationError::HotelNotFound(draft.hotel_id));
            }
            let duplicate = self.rooms.iter().any(|room| {
                Some(room.id) != editing
                    && room.hotel_id == draft.hotel_id
                    && room.room_number == draft.room_number
            });
            if duplicate {
                return Err(ValidationError::DuplicateRoom {
                    room_number: draft.room_number,
                    hotel_id: draft.hotel_id,
                });
            }
            Ok(draft)
        });

        result.map_err(|err| {
            debug!(
                "event=room_validate module=repo status=rejected error_code={}",
                err.code()
            );
            RepoError::from(err)
        })
    }

    fn position(&self, id: RoomId) -> RepoResult<usize> {
        self.rooms
            .iter()
            .position(|room| room.id == id)
            .ok_or(RepoError::NotFound {
                entity: EntityKind::Room,
                id,
            })
    }

    fn commit(&mut self, next: Vec<Room>) -> RepoResult<()> {
        self.store.save_entities(&self.collection, &next)?;
        self.rooms = next;
        self.notifier.notify();
        Ok(())
    }
}

impl RoomLookup for RoomRepository {
    fn count_rooms_for_hotel(&self, hotel_id: HotelId) -> usize {
        self.rooms_for_hotel(hotel_id).count()
    }
}

impl std::fmt::Debug for RoomRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoomRepository")
            .field("collection", &self.collection)
            .field("len", &self.rooms.len())
            .field("notifier", &self.notifier)
            .finish()
    }
}
