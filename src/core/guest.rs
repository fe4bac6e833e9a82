//! Guest business logic - adding guests, family auto-assignment, and
//! WhatsApp invitation links.
//!
//! Family membership is never stored on the family side: a guest's
//! `family_id` is the single source of truth, and member lists are derived
//! by filtering.

use crate::entities::{Family, Guest, GuestRole, RsvpStatus};

/// Pluralizing suffixes used to match a guest surname against a family
/// name ("Беков" -> "Бековы", "Садык" -> "Садыковы").
const FAMILY_SUFFIXES: [&str; 3] = ["ы", "евы", "овы"];

/// A guest as entered on the add-guest form, before an id or family has
/// been assigned.
#[derive(Clone, Debug)]
pub struct GuestDraft {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Patronymic
    pub middle_name: Option<String>,
    /// Contact phone
    pub phone: Option<String>,
    /// Family chosen explicitly on the form; when `None` the surname
    /// heuristic runs
    pub family_id: Option<String>,
    /// Position within the family
    pub role: GuestRole,
    /// Attendance response
    pub rsvp: RsvpStatus,
    /// Free-form kinship label
    pub relationship: Option<String>,
}

/// Tries to find an existing family whose pluralized name matches the
/// guest's surname, case-insensitively.
#[must_use]
pub fn resolve_family_id(families: &[Family], last_name: &str) -> Option<String> {
    let base = last_name.to_lowercase();
    families
        .iter()
        .find(|family| {
            let name = family.last_name.to_lowercase();
            FAMILY_SUFFIXES
                .iter()
                .any(|suffix| name == format!("{base}{suffix}"))
        })
        .map(|family| family.id.clone())
}

/// Appends a new guest. When the draft carries no family id, the surname
/// heuristic is tried first; if that also fails the guest starts a fresh
/// family under `new_family_id`.
pub fn add_guest(
    guests: &mut Vec<Guest>,
    families: &[Family],
    draft: GuestDraft,
    id: String,
    new_family_id: String,
) -> Guest {
    let family_id = draft
        .family_id
        .filter(|fid| !fid.is_empty())
        .or_else(|| resolve_family_id(families, &draft.last_name))
        .unwrap_or(new_family_id);

    let guest = Guest {
        id,
        first_name: draft.first_name,
        last_name: draft.last_name,
        middle_name: draft.middle_name,
        phone: draft.phone,
        family_id: Some(family_id),
        role: draft.role,
        rsvp: draft.rsvp,
        relationship: draft.relationship,
    };
    guests.push(guest.clone());
    guest
}

/// All guests belonging to the given family, in insertion order.
#[must_use]
pub fn family_members<'a>(guests: &'a [Guest], family_id: &str) -> Vec<&'a Guest> {
    guests
        .iter()
        .filter(|g| g.family_id.as_deref() == Some(family_id))
        .collect()
}

/// Builds the WhatsApp deep link used by the "invite" action: a `wa.me`
/// URL carrying the guest's phone digits and a pre-filled greeting.
/// Returns `None` when the guest has no phone on record.
#[must_use]
pub fn invite_link(guest: &Guest) -> Option<String> {
    let phone = guest.phone.as_deref()?;
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    let greeting = format!(
        "Здравствуйте {}! Приглашаем вас на наше мероприятие. Ждём вас!",
        guest.first_name
    );
    Some(format!(
        "https://wa.me/{digits}?text={}",
        percent_encode(&greeting)
    ))
}

/// Percent-encodes a query-string value: RFC 3986 unreserved characters
/// pass through, every other byte becomes `%XX`.
fn percent_encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
