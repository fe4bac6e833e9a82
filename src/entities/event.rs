//! Event entity - a celebration being planned by an organizer.

use serde::{Deserialize, Serialize};

/// A planned celebration. Owned by exactly one organizer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier
    pub id: String,
    /// Display name (e.g., "Той Каныкей")
    pub name: String,
    /// Calendar date in `YYYY-MM-DD` form, as entered in the wizard
    pub date: String,
    /// Start time in `HH:MM` form
    pub time: String,
    /// Expected head count
    pub guests: u32,
    /// Budget ceiling in som. A soft target: spending past it is surfaced
    /// on the dashboard, never blocked.
    pub budget: i64,
    /// Celebration kind ("той", "wedding", "kyz-uzatu", "birthday", ...)
    pub kind: String,
    /// Venue attached from the venue detail screen, if any
    pub venue_id: Option<String>,
    /// Id of the organizer who created the event
    pub owner_id: String,
}
