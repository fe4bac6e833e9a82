//! Venue entity - a bookable location listed by an owner.

use serde::{Deserialize, Serialize};

/// Geographic position plus human-readable address.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
    /// Street address shown in listings
    pub address: String,
}

/// A bookable venue. Owned by exactly one owner-role user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Venue kind ("banquet_hall", "restaurant", "garden", ...)
    pub kind: String,
    /// Rental price in som
    pub price: i64,
    /// Maximum head count
    pub capacity: u32,
    /// Where the venue is
    pub location: Location,
    /// Marketing description
    pub description: String,
    /// Gallery photo URLs
    pub photos: Vec<String>,
    /// Cover photo; expected to be one of `photos`, not enforced
    pub main_photo: String,
    /// Id of the owner who listed the venue
    pub owner_id: String,
    /// WhatsApp contact in `+996XXXXXXXXX` form
    pub whatsapp: String,
    /// Voice contact in `+996XXXXXXXXX` form
    pub phone: String,
}
