//! Hotel and room filters used by list screens.
//!
//! # Responsibility
//! - Match free-text terms against the fields a user sees in a listing.
//! - Combine the text term with exact-value facet filters.
//!
//! # Invariants
//! - A blank text term matches everything.
//! - Text matching is a case-insensitive substring match.

use std::collections::HashMap;

use crate::model::hotel::{Hotel, HotelId};
use crate::model::room::Room;

/// Label shown for a room whose hotel no longer exists.
pub const UNKNOWN_HOTEL_LABEL: &str = "Unknown";

/// Filter options for hotel listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotelFilter {
    /// Matched against name, city and address.
    pub text: Option<String>,
    pub stars: Option<u8>,
    pub has_pool: Option<bool>,
}

/// Filter options for room listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomFilter {
    /// Matched against room number, room type and owning hotel label.
    pub text: Option<String>,
    pub hotel_id: Option<HotelId>,
    pub is_available: Option<bool>,
    /// Exact room type match.
    pub room_type: Option<String>,
}

/// Returns hotels matching `filter`, in collection order.
pub fn filter_hotels<'a>(hotels: &'a [Hotel], filter: &HotelFilter) -> Vec<&'a Hotel> {
    let term = normalize_term(filter.text.as_deref());

    hotels
        .iter()
        .filter(|hotel| {
            term.as_deref().map_or(true, |term| {
                contains_term(&hotel.name, term)
                    || contains_term(&hotel.city, term)
                    || contains_term(&hotel.address, term)
            })
        })
        .filter(|hotel| filter.stars.map_or(true, |stars| hotel.stars == stars))
        .filter(|hotel| filter.has_pool.map_or(true, |pool| hotel.has_pool == pool))
        .collect()
}

/// Returns rooms matching `filter`, in collection order.
///
/// `hotels` supplies owning hotel labels for text matching.
pub fn filter_rooms<'a>(rooms: &'a [Room], hotels: &[Hotel], filter: &RoomFilter) -> Vec<&'a Room> {
    let term = normalize_term(filter.text.as_deref());
    let labels: HashMap<HotelId, String> = hotels
        .iter()
        .map(|hotel| (hotel.id, hotel.label()))
        .collect();

    rooms
        .iter()
        .filter(|room| {
            term.as_deref().map_or(true, |term| {
                let label = labels
                    .get(&room.hotel_id)
                    .map(String::as_str)
                    .unwrap_or(UNKNOWN_HOTEL_LABEL);
                contains_term(&room.room_number, term)
                    || contains_term(&room.room_type, term)
                    || contains_term(label, term)
            })
        })
        .filter(|room| filter.hotel_id.map_or(true, |id| room.hotel_id == id))
        .filter(|room| {
            filter
                .is_available
                .map_or(true, |available| room.is_available == available)
        })
        .filter(|room| {
            filter
                .room_type
                .as_deref()
                .map_or(true, |room_type| room.room_type == room_type)
        })
        .collect()
}

fn normalize_term(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase)
}

fn contains_term(haystack: &str, term: &str) -> bool {
    haystack.to_lowercase().contains(term)
}

#[cfg(test)]
mod tests {
    use super::normalize_term;

    #[test]
    fn normalize_term_treats_blank_as_absent() {
        assert_eq!(normalize_term(None), None);
        assert_eq!(normalize_term(Some("   ")), None);
        assert_eq!(normalize_term(Some(" PaRis ")), Some("paris".to_string()));
    }
}
