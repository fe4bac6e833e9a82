//! Chat message entity - one line in a booking conversation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A chat message between organizer and owner. Messages are append-only
/// and live in one global list; per-booking scoping happens at read time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique identifier
    pub id: String,
    /// Booking conversation this message belongs to
    pub booking_id: String,
    /// Id of the sending user
    pub sender_id: String,
    /// Sender display name, copied at send time
    pub sender_name: String,
    /// Message body
    pub text: String,
    /// When the message was sent
    pub timestamp: DateTime<Utc>,
    /// Optional attached photo URL
    pub photo_url: Option<String>,
}
