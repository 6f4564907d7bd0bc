//! Repositories owning the in-memory hotel and room collections.
//!
//! # Responsibility
//! - Enforce entity and cross-collection invariants before mutation.
//! - Persist the whole collection after each successful mutation.
//! - Fire the change listener only after persistence succeeded.
//!
//! # Invariants
//! - Validation fully precedes mutation; failures leave state untouched.
//! - A failed save leaves the in-memory collection unchanged.
//! - New ids are `max(existing ids, 0) + 1`.
//! - Cross-collection reads go through `HotelLookup` / `RoomLookup`, passed
//!   in explicitly by the caller.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

use crate::model::hotel::HotelId;
use crate::model::validation::ValidationError;
use crate::store::StoreError;

pub mod hotel_repo;
pub mod room_repo;

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Hotel,
    Room,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hotel => write!(f, "hotel"),
            Self::Room => write!(f, "room"),
        }
    }
}

#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    NotFound { entity: EntityKind, id: u64 },
    /// Hotel deletion blocked by rooms that still reference it.
    ReferentialIntegrity { hotel_id: HotelId, room_count: usize },
    /// The highest stored id leaves no room for another record.
    IdsExhausted(EntityKind),
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::ReferentialIntegrity {
                hotel_id,
                room_count,
            } => write!(
                f,
                "hotel {hotel_id} cannot be deleted while it has {room_count} room(s)"
            ),
            Self::IdsExhausted(entity) => write!(f, "no {entity} ids left to assign"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::NotFound { .. } | Self::ReferentialIntegrity { .. } | Self::IdsExhausted(_) => {
                None
            }
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Read accessor over the hotel collection.
pub trait HotelLookup {
    fn contains_hotel(&self, id: HotelId) -> bool;
}

/// Read accessor over the room collection.
pub trait RoomLookup {
    fn count_rooms_for_hotel(&self, hotel_id: HotelId) -> usize;
}

/// `max(ids, 0) + 1`, or `None` when that would overflow.
fn next_id(ids: impl Iterator<Item = u64>) -> Option<u64> {
    ids.max().unwrap_or(0).checked_add(1)
}

/// Rejects a loaded collection in which two records share an id.
fn ensure_unique_ids(path: &Path, ids: impl Iterator<Item = u64>) -> Result<(), StoreError> {
    let mut seen = std::collections::HashSet::new();
    for (index, id) in ids.enumerate() {
        if !seen.insert(id) {
            return Err(StoreError::DataFormat {
                path: path.to_path_buf(),
                index: Some(index),
                message: format!("duplicate id {id}"),
            });
        }
    }
    Ok(())
}
