//! Room domain model.
//!
//! # Invariants
//! - `room_number` and `room_type` are trimmed and non-empty.
//! - `price_per_night` is finite and strictly positive.
//! - `hotel_id` references an existing hotel; the room repository enforces it.

use serde::{Deserialize, Serialize};

use super::hotel::HotelId;
use super::validation::{require_text, ValidationError};
use crate::store::StoredEntity;

/// Repository-assigned room identifier. Valid ids start at 1.
pub type RoomId = u64;

/// Room types offered by input forms. `room_type` stays free text.
pub const ROOM_TYPE_SUGGESTIONS: [&str; 5] =
    ["Standard", "Business", "Luxury", "Premium", "Family"];

/// Persisted room record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub hotel_id: HotelId,
    pub room_number: String,
    pub room_type: String,
    pub price_per_night: f64,
    pub is_available: bool,
}

impl Room {
    pub(crate) fn from_draft(id: RoomId, draft: RoomDraft) -> Self {
        Self {
            id,
            hotel_id: draft.hotel_id,
            room_number: draft.room_number,
            room_type: draft.room_type,
            price_per_night: draft.price_per_night,
            is_available: draft.is_available,
        }
    }
}

/// User-entered room fields for create and update paths.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomDraft {
    pub hotel_id: HotelId,
    pub room_number: String,
    pub room_type: String,
    pub price_per_night: f64,
    pub is_available: bool,
}

impl RoomDraft {
    /// Creates a draft for an available room.
    pub fn new(
        hotel_id: HotelId,
        room_number: impl Into<String>,
        room_type: impl Into<String>,
        price_per_night: f64,
    ) -> Self {
        Self {
            hotel_id,
            room_number: room_number.into(),
            room_type: room_type.into(),
            price_per_night,
            is_available: true,
        }
    }

    pub fn available(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }

    /// Returns a trimmed copy, or the first violated field rule.
    ///
    /// Rules are checked in order: room_number, room_type, price.
    /// Hotel existence and uniqueness are repository concerns.
    pub fn normalize(&self) -> Result<Self, ValidationError> {
        let room_number = require_text("room_number", &self.room_number)?;
        let room_type = require_text("room_type", &self.room_type)?;
        if !is_positive_price(self.price_per_night) {
            return Err(ValidationError::NonPositivePrice(self.price_per_night));
        }
        Ok(Self {
            hotel_id: self.hotel_id,
            room_number,
            room_type,
            price_per_night: self.price_per_night,
            is_available: self.is_available,
        })
    }
}

fn is_positive_price(price: f64) -> bool {
    price.is_finite() && price > 0.0
}

impl StoredEntity for Room {
    fn to_stored(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "hotel_id": self.hotel_id,
            "room_number": self.room_number,
            "room_type": self.room_type,
            "price_per_night": self.price_per_night,
            "is_available": self.is_available,
        })
    }

    fn from_stored(value: serde_json::Value) -> Result<Self, String> {
        let room: Room = serde_json::from_value(value).map_err(|err| err.to_string())?;
        if room.id == 0 {
            return Err("room id must be positive".to_string());
        }
        if room.hotel_id == 0 {
            return Err(format!("room {}: hotel_id must be positive", room.id));
        }
        let draft = RoomDraft {
            hotel_id: room.hotel_id,
            room_number: room.room_number,
            room_type: room.room_type,
            price_per_night: room.price_per_night,
            is_available: room.is_available,
        }
        .normalize()
        .map_err(|err| format!("room {}: {err}", room.id))?;
        Ok(Self::from_draft(room.id, draft))
    }
}

#[cfg(test)]
mod tests {
    use super::{is_positive_price, Room, RoomDraft};
    use crate::model::validation::ValidationError;
    use crate::store::StoredEntity;

    #[test]
    fn new_draft_defaults_to_available() {
        assert!(RoomDraft::new(1, "101", "Suite", 200.0).is_available);
        assert!(!RoomDraft::new(1, "101", "Suite", 200.0).available(false).is_available);
    }

    #[test]
    fn price_must_be_finite_and_positive() {
        assert!(is_positive_price(0.01));
        assert!(!is_positive_price(0.0));
        assert!(!is_positive_price(-5.0));
        assert!(!is_positive_price(f64::NAN));
        assert!(!is_positive_price(f64::INFINITY));
    }

    #[test]
    fn normalize_trims_and_keeps_free_text_room_type() {
        let draft = RoomDraft::new(2, " 101 ", " Penthouse ", 350.0)
            .normalize()
            .unwrap();
        assert_eq!(draft.room_number, "101");
        assert_eq!(draft.room_type, "Penthouse");
    }

    #[test]
    fn from_stored_returns_trimmed_fields() {
        let value = serde_json::json!({
            "id": 9,
            "hotel_id": 1,
            "room_number": " 101 ",
            "room_type": "Suite ",
            "price_per_night": 120.0,
            "is_available": false,
        });
        let room = Room::from_stored(value).unwrap();
        assert_eq!(room.room_number, "101");
        assert_eq!(room.room_type, "Suite");
        assert!(!room.is_available);
    }

    #[test]
    fn normalize_rejects_blank_room_type() {
        let err = RoomDraft::new(2, "101", "  ", 350.0).normalize().unwrap_err();
        assert_eq!(err, ValidationError::EmptyField("room_type"));
    }
}
