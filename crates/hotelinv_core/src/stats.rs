//! Room occupancy statistics.

use std::collections::BTreeMap;

use crate::model::room::Room;

/// Aggregate counts over a room collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomStats {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
    /// Room count per room type, keyed by the stored type text.
    pub by_type: BTreeMap<String, usize>,
}

impl RoomStats {
    pub fn from_rooms(rooms: &[Room]) -> Self {
        let mut stats = Self {
            total: rooms.len(),
            ..Self::default()
        };
        for room in rooms {
            if room.is_available {
                stats.available += 1;
            }
            *stats.by_type.entry(room.room_type.clone()).or_insert(0) += 1;
        }
        stats.occupied = stats.total - stats.available;
        stats
    }
}
