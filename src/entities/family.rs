//! Family entity - a named group of guests.

use serde::{Deserialize, Serialize};

/// A family of guests, keyed by the pluralized family name
/// (e.g., "Бековы"). `member_ids` is informational; real membership is
/// derived by filtering guests on their `family_id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Family {
    /// Unique identifier (`family_<ts>` for generated families)
    pub id: String,
    /// Pluralized family name
    pub last_name: String,
    /// Guest id of the head of the family, if known
    pub head_of_family_id: Option<String>,
    /// Informational member list, not kept in sync
    pub member_ids: Vec<String>,
    /// Contact phone, usually the head's
    pub contact_phone: Option<String>,
    /// Family photo URL
    pub photo_url: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
}
