//! Guest entity - an invited person, optionally grouped into a family.

use serde::{Deserialize, Serialize};

/// Position of a guest within their family group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuestRole {
    /// Head of the family
    Head,
    /// Parent within the family
    Parent,
    /// Child within the family
    Child,
    /// Extended relative
    Relative,
    /// Anything else
    Other,
}

/// A guest's attendance response state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RsvpStatus {
    /// Will attend
    Confirmed,
    /// Undecided
    Maybe,
    /// Will not attend
    Declined,
    /// No response yet
    Pending,
}

/// An invited guest. Belongs to zero or one [`Family`](super::Family) via
/// `family_id`; actual family membership is always derived by filtering
/// guests on that field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    /// Unique identifier
    pub id: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Patronymic, optional
    pub middle_name: Option<String>,
    /// Contact phone for WhatsApp invitations
    pub phone: Option<String>,
    /// Family group the guest belongs to
    pub family_id: Option<String>,
    /// Position within the family
    pub role: GuestRole,
    /// Attendance response
    pub rsvp: RsvpStatus,
    /// Free-form kinship label ("мать", "отец", "брат", ...)
    pub relationship: Option<String>,
}
