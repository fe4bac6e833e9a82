//! Seed data - the static sample records the in-memory state starts from.
//!
//! Nothing here persists: reloading the app always comes back to this
//! set. A TOML seed file can replace the built-in sample for demos.

use crate::{
    entities::{
        BudgetCategory, BudgetItem, Event, Family, Guest, GuestRole, Location, RsvpStatus, Venue,
    },
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::Path;

/// Environment variable pointing at an alternative seed file.
pub const SEED_PATH_VAR: &str = "TOIPLAN_SEED";

/// Owner id stamped on the built-in demo venues so they never collide
/// with a real owner's listings.
pub const DEMO_OWNER_ID: &str = "owner_demo";

/// Collections the application state is seeded with.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SeedData {
    /// Pre-existing events
    #[serde(default)]
    pub events: Vec<Event>,
    /// Pre-existing guests
    #[serde(default)]
    pub guests: Vec<Guest>,
    /// Pre-existing families
    #[serde(default)]
    pub families: Vec<Family>,
    /// Pre-existing budget items
    #[serde(default)]
    pub budget_items: Vec<BudgetItem>,
    /// Discoverable venues
    #[serde(default)]
    pub venues: Vec<Venue>,
}

/// Loads seed data from a TOML file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<SeedData> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read seed file {path:?}: {e}"),
    })?;
    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse seed file {path:?}: {e}"),
    })
}

#[allow(clippy::too_many_arguments)]
fn guest(
    id: &str,
    first: &str,
    last: &str,
    middle: &str,
    phone: &str,
    family_id: &str,
    role: GuestRole,
    rsvp: RsvpStatus,
    relationship: &str,
) -> Guest {
    Guest {
        id: id.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        middle_name: Some(middle.to_string()),
        phone: Some(phone.to_string()),
        family_id: Some(family_id.to_string()),
        role,
        rsvp,
        relationship: Some(relationship.to_string()),
    }
}

fn family(id: &str, last_name: &str, head: &str, members: &[&str], phone: &str) -> Family {
    Family {
        id: id.to_string(),
        last_name: last_name.to_string(),
        head_of_family_id: Some(head.to_string()),
        member_ids: members.iter().map(ToString::to_string).collect(),
        contact_phone: Some(phone.to_string()),
        photo_url: None,
        notes: None,
    }
}

#[allow(clippy::too_many_arguments)]
fn venue(
    id: &str,
    name: &str,
    kind: &str,
    price: i64,
    capacity: u32,
    lat: f64,
    lng: f64,
    address: &str,
    description: &str,
    photo: &str,
    phone: &str,
) -> Venue {
    Venue {
        id: id.to_string(),
        name: name.to_string(),
        kind: kind.to_string(),
        price,
        capacity,
        location: Location {
            lat,
            lng,
            address: address.to_string(),
        },
        description: description.to_string(),
        photos: vec![photo.to_string()],
        main_photo: photo.to_string(),
        owner_id: DEMO_OWNER_ID.to_string(),
        whatsapp: phone.to_string(),
        phone: phone.to_string(),
    }
}

impl SeedData {
    /// The built-in sample set: three events, twelve guests in five
    /// families, three budget lines, and four discoverable venues.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn sample() -> Self {
        let events = vec![
            Event {
                id: "1".to_string(),
                name: "Той Каныкей".to_string(),
                date: "2025-06-15".to_string(),
                time: "18:00".to_string(),
                guests: 250,
                budget: 300_000,
                kind: "той".to_string(),
                venue_id: None,
                owner_id: "user_1".to_string(),
            },
            Event {
                id: "2".to_string(),
                name: "День рождения Азамата".to_string(),
                date: "2025-05-20".to_string(),
                time: "19:00".to_string(),
                guests: 50,
                budget: 80_000,
                kind: "birthday".to_string(),
                venue_id: None,
                owner_id: "user_1".to_string(),
            },
            Event {
                id: "3".to_string(),
                name: "Корпоратив компании".to_string(),
                date: "2025-12-25".to_string(),
                time: "20:00".to_string(),
                guests: 150,
                budget: 200_000,
                kind: "corporate".to_string(),
                venue_id: None,
                owner_id: "user_1".to_string(),
            },
        ];

        let guests = vec![
            guest(
                "1",
                "Талант",
                "Беков",
                "Асанович",
                "+996555111222",
                "family_1",
                GuestRole::Head,
                RsvpStatus::Confirmed,
                "глава семьи",
            ),
            guest(
                "2",
                "Айжан",
                "Бекова",
                "Талантовна",
                "+996555111223",
                "family_1",
                GuestRole::Child,
                RsvpStatus::Confirmed,
                "дочь",
            ),
            guest(
                "3",
                "Гульмира",
                "Бекова",
                "Кадыровна",
                "+996555111224",
                "family_1",
                GuestRole::Parent,
                RsvpStatus::Confirmed,
                "жена",
            ),
            guest(
                "4",
                "Азамат",
                "Токтосунов",
                "Бакытович",
                "+996777333444",
                "family_2",
                GuestRole::Head,
                RsvpStatus::Maybe,
                "глава семьи",
            ),
            guest(
                "5",
                "Нурай",
                "Токтосунова",
                "Азаматовна",
                "+996777333445",
                "family_2",
                GuestRole::Child,
                RsvpStatus::Maybe,
                "дочь",
            ),
            guest(
                "6",
                "Гульнара",
                "Садыкова",
                "Маратовна",
                "+996555555666",
                "family_3",
                GuestRole::Head,
                RsvpStatus::Confirmed,
                "глава семьи",
            ),
            guest(
                "7",
                "Салтанат",
                "Садыкова",
                "Гульнаровна",
                "+996555555667",
                "family_3",
                GuestRole::Child,
                RsvpStatus::Confirmed,
                "дочь",
            ),
            guest(
                "8",
                "Жибек",
                "Садыкова",
                "Гульнаровна",
                "+996555555668",
                "family_3",
                GuestRole::Child,
                RsvpStatus::Pending,
                "дочь",
            ),
            guest(
                "9",
                "Бакыт",
                "Алымов",
                "Темирович",
                "+996777777888",
                "family_4",
                GuestRole::Head,
                RsvpStatus::Declined,
                "глава семьи",
            ),
            guest(
                "10",
                "Темирлан",
                "Касымов",
                "Эрланович",
                "+996777111222",
                "family_5",
                GuestRole::Head,
                RsvpStatus::Pending,
                "глава семьи",
            ),
            guest(
                "11",
                "Эрлан",
                "Касымов",
                "Темирланович",
                "+996777111223",
                "family_5",
                GuestRole::Child,
                RsvpStatus::Pending,
                "сын",
            ),
            guest(
                "12",
                "Максат",
                "Касымов",
                "Темирланович",
                "+996777111224",
                "family_5",
                GuestRole::Child,
                RsvpStatus::Pending,
                "сын",
            ),
        ];

        let families = vec![
            family("family_1", "Бековы", "1", &["1", "2", "3"], "+996555111222"),
            family("family_2", "Токтосуновы", "4", &["4", "5"], "+996777333444"),
            family(
                "family_3",
                "Садыковы",
                "6",
                &["6", "7", "8"],
                "+996555555666",
            ),
            family("family_4", "Алымовы", "9", &["9"], "+996777777888"),
            family(
                "family_5",
                "Касымовы",
                "10",
                &["10", "11", "12"],
                "+996777111222",
            ),
        ];

        let budget_items = vec![
            BudgetItem {
                id: "1".to_string(),
                category: BudgetCategory::Venue,
                amount: 50_000,
                description: "Аренда зала".to_string(),
                date: None,
            },
            BudgetItem {
                id: "2".to_string(),
                category: BudgetCategory::Food,
                amount: 80_000,
                description: "Банкет на 100 человек".to_string(),
                date: None,
            },
            BudgetItem {
                id: "3".to_string(),
                category: BudgetCategory::Decor,
                amount: 25_000,
                description: "Оформление зала".to_string(),
                date: None,
            },
        ];

        let venues = vec![
            venue(
                "venue_1",
                "Ала-Тоо Plaza",
                "banquet_hall",
                50_000,
                200,
                42.8746,
                74.5698,
                "Бишкек, центр",
                "Элегантный зал для торжественных мероприятий",
                "https://images.unsplash.com/photo-1761110787206-2cc164e4913c?w=1080",
                "+996555000001",
            ),
            venue(
                "venue_2",
                "Silk Road Hall",
                "banquet_hall",
                40_000,
                150,
                42.8412,
                74.5872,
                "Бишкек, Южная Магистраль",
                "Современный банкетный зал с панорамными окнами",
                "https://images.unsplash.com/photo-1762765685319-fdaf8d22085d?w=1080",
                "+996555000002",
            ),
            venue(
                "venue_3",
                "Manas Garden",
                "garden",
                70_000,
                300,
                42.9531,
                74.4821,
                "Чуйская область",
                "Открытая площадка с видом на горы",
                "https://images.unsplash.com/photo-1762216444919-043cf813e4de?w=1080",
                "+996555000003",
            ),
            venue(
                "venue_4",
                "Royal Palace",
                "banquet_hall",
                60_000,
                250,
                42.8639,
                74.6154,
                "Бишкек, Ахунбаева",
                "Роскошный банкетный зал премиум класса",
                "https://images.unsplash.com/photo-1729957385579-528ce50ffd94?w=1080",
                "+996555000004",
            ),
        ];

        Self {
            events,
            guests,
            families,
            budget_items,
            venues,
        }
    }
}
