//! Core business logic - framework-agnostic operations over the entity
//! collections. Every function here takes explicit state slices so the
//! behavior is unit-testable without any rendering layer.

/// Booking creation, status transitions, and owner-side filtering
pub mod booking;
/// Budget items and the spend/overspend summary
pub mod budget;
/// Chat messages and per-booking read scoping
pub mod chat;
/// Event creation, wizard validation, and partial updates
pub mod event;
/// Guests, family auto-assignment, and WhatsApp invitations
pub mod guest;
/// Venue listing validation, search, and owner filtering
pub mod venue;
