//! Validation errors raised before any collection mutation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use super::hotel::HotelId;

/// A field or cross-record rule violated by user input.
///
/// Raised before mutation; the collection is left untouched when returned.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Named field is empty after trimming.
    EmptyField(&'static str),
    /// Star rating outside `1..=5`.
    StarsOutOfRange(u8),
    /// Price is zero, negative, or not a finite number.
    NonPositivePrice(f64),
    /// Another hotel already uses this `(name, city)` pair.
    DuplicateHotel { name: String, city: String },
    /// Another room of the same hotel already uses this number.
    DuplicateRoom { room_number: String, hotel_id: HotelId },
    /// Referenced hotel does not exist.
    HotelNotFound(HotelId),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "{field} must not be empty"),
            Self::StarsOutOfRange(stars) => {
                write!(f, "stars must be between 1 and 5, got {stars}")
            }
            Self::NonPositivePrice(price) => {
                write!(f, "price per night must be positive, got {price}")
            }
            Self::DuplicateHotel { name, city } => {
                write!(f, "hotel `{name}` already exists in `{city}`")
            }
            Self::DuplicateRoom {
                room_number,
                hotel_id,
            } => write!(f, "room `{room_number}` already exists in hotel {hotel_id}"),
            Self::HotelNotFound(id) => write!(f, "hotel not found: {id}"),
        }
    }
}

impl ValidationError {
    /// Stable machine-readable code, safe to log without user data.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyField(_) => "empty_field",
            Self::StarsOutOfRange(_) => "stars_out_of_range",
            Self::NonPositivePrice(_) => "non_positive_price",
            Self::DuplicateHotel { .. } => "duplicate_hotel",
            Self::DuplicateRoom { .. } => "duplicate_room",
            Self::HotelNotFound(_) => "hotel_not_found",
        }
    }
}

impl Error for ValidationError {}

/// Trims `value` and rejects it when nothing is left.
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}
