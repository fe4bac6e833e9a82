//! Entity module - Contains the plain data model shared by every screen.
//! All entities are owned by the root application state; ids are
//! timestamp-derived strings and nothing here is persisted.

pub mod booking;
pub mod budget;
pub mod chat;
pub mod event;
pub mod family;
pub mod guest;
pub mod user;
pub mod venue;

pub use booking::{Booking, BookingStatus};
pub use budget::{BudgetCategory, BudgetItem};
pub use chat::ChatMessage;
pub use event::Event;
pub use family::Family;
pub use guest::{Guest, GuestRole, RsvpStatus};
pub use user::{Role, User};
pub use venue::{Location, Venue};
