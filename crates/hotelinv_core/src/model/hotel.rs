//! Hotel domain model.
//!
//! # Responsibility
//! - Define the persisted hotel record and its wire field names.
//! - Normalize and validate user-entered hotel fields.
//!
//! # Invariants
//! - `name`, `city` and `address` are trimmed and non-empty.
//! - `stars` is within `1..=5`.
//! - `(name, city)` is unique per collection, compared case-insensitively.
//!   The uniqueness check itself lives in the hotel repository.

use serde::{Deserialize, Serialize};

use super::validation::{require_text, ValidationError};
use crate::store::StoredEntity;

/// Repository-assigned hotel identifier. Valid ids start at 1.
pub type HotelId = u64;

pub const MIN_STARS: u8 = 1;
pub const MAX_STARS: u8 = 5;

/// Persisted hotel record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    pub city: String,
    pub address: String,
    pub stars: u8,
    pub has_pool: bool,
}

impl Hotel {
    /// Builds a hotel from an already-normalized draft.
    pub(crate) fn from_draft(id: HotelId, draft: HotelDraft) -> Self {
        Self {
            id,
            name: draft.name,
            city: draft.city,
            address: draft.address,
            stars: draft.stars,
            has_pool: draft.has_pool,
        }
    }

    /// Display label used next to rooms, e.g. `Grand (Paris)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.city)
    }

    /// Returns whether this hotel has the given `(name, city)` identity.
    ///
    /// Inputs are expected to be trimmed already.
    pub fn same_identity(&self, name: &str, city: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
            && self.city.to_lowercase() == city.to_lowercase()
    }
}

/// User-entered hotel fields for create and update paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelDraft {
    pub name: String,
    pub city: String,
    pub address: String,
    pub stars: u8,
    pub has_pool: bool,
}

impl HotelDraft {
    pub fn new(
        name: impl Into<String>,
        city: impl Into<String>,
        address: impl Into<String>,
        stars: u8,
        has_pool: bool,
    ) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
            address: address.into(),
            stars,
            has_pool,
        }
    }

    /// Returns a trimmed copy, or the first violated field rule.
    ///
    /// Rules are checked in order: name, city, address, stars.
    pub fn normalize(&self) -> Result<Self, ValidationError> {
        let name = require_text("name", &self.name)?;
        let city = require_text("city", &self.city)?;
        let address = require_text("address", &self.address)?;
        if !(MIN_STARS..=MAX_STARS).contains(&self.stars) {
            return Err(ValidationError::StarsOutOfRange(self.stars));
        }
        Ok(Self {
            name,
            city,
            address,
            stars: self.stars,
            has_pool: self.has_pool,
        })
    }
}

impl StoredEntity for Hotel {
    fn to_stored(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "name": self.name,
            "city": self.city,
            "address": self.address,
            "stars": self.stars,
            "has_pool": self.has_pool,
        })
    }

    fn from_stored(value: serde_json::Value) -> Result<Self, String> {
        let hotel: Hotel = serde_json::from_value(value).map_err(|err| err.to_string())?;
        if hotel.id == 0 {
            return Err("hotel id must be positive".to_string());
        }
        let draft = HotelDraft::new(
            hotel.name.as_str(),
            hotel.city.as_str(),
            hotel.address.as_str(),
            hotel.stars,
            hotel.has_pool,
        );
        let draft = draft
            .normalize()
            .map_err(|err| format!("hotel {}: {err}", hotel.id))?;
        Ok(Self::from_draft(hotel.id, draft))
    }
}

#[cfg(test)]
mod tests {
    use super::{Hotel, HotelDraft};
    use crate::model::validation::ValidationError;
    use crate::store::StoredEntity;

    #[test]
    fn normalize_reports_first_failing_field() {
        let draft = HotelDraft::new(" ", "", "1 Rue X", 9, false);
        assert_eq!(
            draft.normalize().unwrap_err(),
            ValidationError::EmptyField("name")
        );

        let draft = HotelDraft::new("Grand", "Paris", "1 Rue X", 0, false);
        assert_eq!(
            draft.normalize().unwrap_err(),
            ValidationError::StarsOutOfRange(0)
        );
    }

    #[test]
    fn same_identity_ignores_case() {
        let hotel = Hotel::from_draft(
            1,
            HotelDraft::new("Grand", "Paris", "1 Rue X", 5, true),
        );
        assert!(hotel.same_identity("GRAND", "paris"));
        assert!(!hotel.same_identity("Grand", "Lyon"));
    }

    #[test]
    fn from_stored_rejects_out_of_range_stars() {
        let value = serde_json::json!({
            "id": 3,
            "name": "Grand",
            "city": "Paris",
            "address": "1 Rue X",
            "stars": 7,
            "has_pool": false,
        });
        let err = Hotel::from_stored(value).unwrap_err();
        assert!(err.contains("stars"));
    }

    #[test]
    fn from_stored_returns_trimmed_fields() {
        let value = serde_json::json!({
            "id": 4,
            "name": " Grand ",
            "city": "Paris\t",
            "address": "  1 Rue X",
            "stars": 5,
            "has_pool": true,
        });
        let hotel = Hotel::from_stored(value).unwrap();
        assert_eq!(hotel.name, "Grand");
        assert_eq!(hotel.city, "Paris");
        assert_eq!(hotel.address, "1 Rue X");
    }
}
