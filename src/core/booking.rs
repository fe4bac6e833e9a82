//! Booking business logic - creation, status transitions, and the
//! owner-side booking filter.

use crate::{
    entities::{Booking, BookingStatus, Event, User, Venue},
    errors::{Error, Result},
};
use chrono::Utc;
use tracing::info;

/// Appends a new pending booking for the given venue. Event details are
/// copied from the event at this moment; later event edits do not
/// propagate.
pub fn create_booking(
    bookings: &mut Vec<Booking>,
    event: &Event,
    user: &User,
    venue_id: &str,
    id: String,
) -> Booking {
    let booking = Booking {
        id,
        venue_id: venue_id.to_string(),
        event_id: event.id.clone(),
        organizer_id: user.id.clone(),
        organizer_name: user.full_name(),
        organizer_phone: user.phone.clone().unwrap_or_default(),
        event_name: event.name.clone(),
        date: event.date.clone(),
        time: event.time.clone(),
        guests_count: event.guests,
        status: BookingStatus::Pending,
        created_at: Utc::now(),
    };
    info!(
        booking_id = %booking.id,
        venue_id,
        event = %booking.event_name,
        "booking requested"
    );
    bookings.push(booking.clone());
    booking
}

/// Changes the status of one booking by id.
///
/// Transitions are only allowed out of `Pending`; confirming a cancelled
/// booking (or touching a decided one at all) is rejected and leaves the
/// collection unchanged.
pub fn update_status(bookings: &mut [Booking], id: &str, status: BookingStatus) -> Result<()> {
    let booking = bookings
        .iter_mut()
        .find(|b| b.id == id)
        .ok_or_else(|| Error::BookingNotFound { id: id.to_string() })?;

    if booking.status != BookingStatus::Pending {
        return Err(Error::BookingTransition {
            id: id.to_string(),
            from: booking.status,
            to: status,
        });
    }

    info!(booking_id = id, ?status, "booking status updated");
    booking.status = status;
    Ok(())
}

/// Bookings whose venue belongs to the given owner. A linear scan over
/// both collections, repeated on every render.
#[must_use]
pub fn bookings_for_owner<'a>(
    bookings: &'a [Booking],
    venues: &[Venue],
    owner_id: &str,
) -> Vec<&'a Booking> {
    bookings
        .iter()
        .filter(|b| {
            venues
                .iter()
                .any(|v| v.id == b.venue_id && v.owner_id == owner_id)
        })
        .collect()
}
