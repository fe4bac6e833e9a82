//! Booking entity - links one event to one venue.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a booking. Transitions are only allowed out of
/// `Pending`; see [`crate::core::booking::update_status`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Requested by an organizer, awaiting the owner's decision
    Pending,
    /// Accepted by the owner
    Confirmed,
    /// Declined by the owner
    Cancelled,
}

/// A booking request. Event details (name, date, time, head count) are
/// copied from the event at creation time; later event edits do not
/// propagate to existing bookings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier
    pub id: String,
    /// Venue being booked
    pub venue_id: String,
    /// Event the booking is for
    pub event_id: String,
    /// Id of the requesting organizer
    pub organizer_id: String,
    /// Organizer display name, copied at creation
    pub organizer_name: String,
    /// Organizer contact phone, copied at creation
    pub organizer_phone: String,
    /// Event name, copied at creation
    pub event_name: String,
    /// Event date, copied at creation
    pub date: String,
    /// Event start time, copied at creation
    pub time: String,
    /// Expected head count, copied at creation
    pub guests_count: u32,
    /// Current lifecycle state
    pub status: BookingStatus,
    /// When the booking was requested
    pub created_at: DateTime<Utc>,
}
