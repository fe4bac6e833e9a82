//! User entity - the single signed-in account.
//!
//! Exactly one user is active at a time. The role is chosen on the role
//! selection screen and is immutable after registration.

use serde::{Deserialize, Serialize};

/// Which side of the marketplace the user is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// End user planning an event (guests, budget, venue).
    Organizer,
    /// End user who lists and manages bookable venues.
    Owner,
}

/// A registered user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned at registration
    pub id: String,
    /// Marketplace role, fixed at registration
    pub role: Role,
    /// Given name
    pub name: String,
    /// Family name, optional
    pub surname: Option<String>,
    /// Contact phone in `+996XXXXXXXXX` form
    pub phone: Option<String>,
    /// E-mail, present for owners registered via the Google-style flow
    pub email: Option<String>,
    /// Avatar URL
    pub photo_url: Option<String>,
}

impl User {
    /// Display name stamped onto bookings and chat messages:
    /// `"Name Surname"`, or just the name when no surname was given.
    #[must_use]
    pub fn full_name(&self) -> String {
        match &self.surname {
            Some(surname) => format!("{} {surname}", self.name),
            None => self.name.clone(),
        }
    }
}
