//! Shared builders for unit tests. Fixtures use realistic Kyrgyz data so
//! assertions read like the screens they exercise.

use crate::{
    app::App,
    auth::Registration,
    config::{prefs::Prefs, seed::SeedData},
    core::{event::EventDraft, guest::GuestDraft, venue::VenueDraft},
    entities::{Event, Family, GuestRole, Role, RsvpStatus, User, Venue},
};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

static PREFS_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A throwaway preferences path so parallel tests never clobber each other.
fn scratch_prefs_path() -> PathBuf {
    let n = PREFS_COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("toiplan-test-prefs-{}-{n}.toml", std::process::id()))
}

/// A controller over the sample seed with default preferences.
pub fn test_app() -> App {
    App::new(SeedData::sample(), Prefs::default(), scratch_prefs_path())
}

/// A controller with a registered user of the given role, landed on home.
pub fn signed_in_app(role: Role) -> App {
    let mut app = test_app();
    let registration = match role {
        Role::Organizer => Registration {
            name: "Талант".to_string(),
            surname: Some("Беков".to_string()),
            phone: Some("+996555123456".to_string()),
            ..Registration::default()
        },
        Role::Owner => Registration {
            name: "Айбек".to_string(),
            surname: Some("Осмонов".to_string()),
            email: Some("aibek@example.com".to_string()),
            ..Registration::default()
        },
    };
    match role {
        Role::Organizer => app.register_organizer(registration),
        Role::Owner => app.register_owner(registration),
    }
    app
}

/// A registered user with a complete profile for the given role.
pub fn test_user(role: Role) -> User {
    match role {
        Role::Organizer => User {
            id: "user_1".to_string(),
            role,
            name: "Талант".to_string(),
            surname: Some("Беков".to_string()),
            phone: Some("+996555123456".to_string()),
            email: None,
            photo_url: None,
        },
        Role::Owner => User {
            id: "owner_1".to_string(),
            role,
            name: "Айбек".to_string(),
            surname: Some("Осмонов".to_string()),
            phone: None,
            email: Some("aibek@example.com".to_string()),
            photo_url: None,
        },
    }
}

/// An event with the sample-data head count and budget.
pub fn test_event(id: &str, name: &str) -> Event {
    Event {
        id: id.to_string(),
        name: name.to_string(),
        date: "2025-06-15".to_string(),
        time: "18:00".to_string(),
        guests: 250,
        budget: 300_000,
        kind: "той".to_string(),
        venue_id: None,
        owner_id: "user_1".to_string(),
    }
}

/// A wizard draft that passes every validation step.
pub fn test_event_draft(name: &str) -> EventDraft {
    EventDraft {
        name: name.to_string(),
        date: "2025-06-15".to_string(),
        time: "18:00".to_string(),
        guests: 250,
        budget: 300_000,
        kind: "той".to_string(),
    }
}

/// A guest form submission with the family left open, so the surname
/// heuristic decides.
pub fn test_guest_draft(first_name: &str, last_name: &str) -> GuestDraft {
    GuestDraft {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        middle_name: None,
        phone: None,
        family_id: None,
        role: GuestRole::Relative,
        rsvp: RsvpStatus::Pending,
        relationship: None,
    }
}

/// A family with only the pluralized name filled in.
pub fn test_family(id: &str, last_name: &str) -> Family {
    Family {
        id: id.to_string(),
        last_name: last_name.to_string(),
        head_of_family_id: None,
        member_ids: Vec::new(),
        contact_phone: None,
        photo_url: None,
        notes: None,
    }
}

/// A listed venue owned by `owner_id`.
pub fn test_venue(id: &str, owner_id: &str) -> Venue {
    Venue {
        id: id.to_string(),
        name: "Ала-Тоо Plaza".to_string(),
        kind: "banquet_hall".to_string(),
        price: 50_000,
        capacity: 200,
        location: crate::entities::Location {
            lat: 42.8746,
            lng: 74.5698,
            address: "Бишкек, ул. Киевская 95".to_string(),
        },
        description: "Просторный банкетный зал в центре города".to_string(),
        photos: Vec::new(),
        main_photo: String::new(),
        owner_id: owner_id.to_string(),
        whatsapp: "+996555000111".to_string(),
        phone: "+996555000111".to_string(),
    }
}

/// A venue form submission that passes all three wizard steps.
/// Phones use the display format and come out cleaned.
pub fn test_venue_draft(name: &str) -> VenueDraft {
    VenueDraft {
        name: name.to_string(),
        kind: "banquet_hall".to_string(),
        price: 50_000,
        capacity: 200,
        address: "Бишкек, ул. Киевская 95".to_string(),
        lat: 42.8746,
        lng: 74.5698,
        description: "Просторный банкетный зал в центре города".to_string(),
        photos: Vec::new(),
        main_photo: None,
        whatsapp: "+996 555 000 111".to_string(),
        phone: "+996 555 000 111".to_string(),
    }
}
