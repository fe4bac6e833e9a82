//! Chat business logic - sending messages and per-booking read scoping.
//!
//! Messages live in one global append-only list; a conversation is just
//! the read-time filter on `booking_id`.

use crate::entities::{ChatMessage, User};
use chrono::Utc;

/// Appends a message from the given user to a booking conversation.
pub fn send_message(
    messages: &mut Vec<ChatMessage>,
    user: &User,
    booking_id: &str,
    text: String,
    photo_url: Option<String>,
    id: String,
) -> ChatMessage {
    let message = ChatMessage {
        id,
        booking_id: booking_id.to_string(),
        sender_id: user.id.clone(),
        sender_name: user.full_name(),
        text,
        timestamp: Utc::now(),
        photo_url,
    };
    messages.push(message.clone());
    message
}

/// All messages of one booking conversation, in insertion order.
#[must_use]
pub fn messages_for_booking<'a>(
    messages: &'a [ChatMessage],
    booking_id: &str,
) -> Vec<&'a ChatMessage> {
    messages
        .iter()
        .filter(|m| m.booking_id == booking_id)
        .collect()
}
