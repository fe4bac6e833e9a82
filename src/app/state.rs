//! The application state aggregate.

use crate::{
    config::seed::SeedData,
    entities::{Booking, BudgetItem, ChatMessage, Event, Family, Guest, User, Venue},
    router::Screen,
};

/// Every piece of state behind the screens, owned in one place. Screens
/// never hold state another screen needs; they read slices of this
/// aggregate and go through the controller to change it.
#[derive(Debug, Default)]
pub struct AppState {
    /// The signed-in user, if any
    pub user: Option<User>,
    /// Screen currently shown
    pub screen: Screen,
    /// Event currently being planned. Genuinely cross-screen: the budget
    /// screen and booking creation both read it.
    pub active_event_id: Option<String>,
    /// Current onboarding page (1-based)
    pub onboarding_step: u8,
    /// All events
    pub events: Vec<Event>,
    /// All guests
    pub guests: Vec<Guest>,
    /// All families
    pub families: Vec<Family>,
    /// Budget items of the active event
    pub budget_items: Vec<BudgetItem>,
    /// All venues, both demo listings and owner-created ones
    pub venues: Vec<Venue>,
    /// All bookings
    pub bookings: Vec<Booking>,
    /// All chat messages, scoped per booking at read time
    pub chat_messages: Vec<ChatMessage>,
}

impl AppState {
    /// Builds the launch state from seed data.
    #[must_use]
    pub fn seeded(seed: SeedData) -> Self {
        Self {
            events: seed.events,
            guests: seed.guests,
            families: seed.families,
            budget_items: seed.budget_items,
            venues: seed.venues,
            ..Self::default()
        }
    }

    /// The active event, resolved against the events collection.
    #[must_use]
    pub fn active_event(&self) -> Option<&Event> {
        let id = self.active_event_id.as_deref()?;
        self.events.iter().find(|e| e.id == id)
    }
}
