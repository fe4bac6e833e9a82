//! Application controller - owns the state aggregate and exposes every
//! mutation the screens can trigger.
//!
//! Handlers are thin: they check preconditions, delegate to the
//! framework-agnostic functions in [`crate::core`], and move the screen.
//! Mutators whose precondition fails (no signed-in user, no active event)
//! log a warning and leave state untouched; that is the contract the
//! screens rely on, not an error path.

/// Timestamp-derived id generation
pub mod ids;
/// The state aggregate behind every screen
pub mod state;

pub use ids::IdGen;
pub use state::AppState;

use crate::{
    auth::Registration,
    config::{
        prefs::{self, Language, Prefs, Theme},
        seed::{self, SeedData},
    },
    core::{
        booking,
        budget::{self, BudgetItemDraft, BudgetSummary},
        chat,
        event::{self, EventDraft, EventPatch},
        guest::{self, GuestDraft},
        venue::{self, VenueDraft},
    },
    entities::{BookingStatus, Role, User},
    errors::Result,
    router::{self, Screen, ScreenView},
};
use std::path::PathBuf;
use tracing::{info, warn};

/// Partial profile update applied from the settings screen.
#[derive(Clone, Debug, Default)]
pub struct UserPatch {
    /// New given name
    pub name: Option<String>,
    /// New family name
    pub surname: Option<String>,
    /// New contact phone
    pub phone: Option<String>,
    /// New e-mail
    pub email: Option<String>,
    /// New avatar URL
    pub photo_url: Option<String>,
}

/// The top-level controller: single owner of [`AppState`], the id
/// generator, and the persisted preferences.
#[derive(Debug)]
pub struct App {
    state: AppState,
    ids: IdGen,
    prefs: Prefs,
    prefs_path: PathBuf,
}

impl App {
    /// Builds a controller from explicit seed data and preferences.
    #[must_use]
    pub fn new(seed: SeedData, prefs: Prefs, prefs_path: PathBuf) -> Self {
        Self {
            state: AppState::seeded(seed),
            ids: IdGen::new(),
            prefs,
            prefs_path,
        }
    }

    /// Builds a controller the way the binary does: preferences from the
    /// default path, seed data from `TOIPLAN_SEED` when set, the built-in
    /// sample otherwise.
    pub fn bootstrap() -> Result<Self> {
        let prefs_path = prefs::default_path();
        let prefs = Prefs::load(&prefs_path)?;
        let seed = match std::env::var(seed::SEED_PATH_VAR) {
            Ok(path) => seed::load(path)?,
            Err(_) => SeedData::sample(),
        };
        Ok(Self::new(seed, prefs, prefs_path))
    }

    /// Read access to the aggregate.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Current preference values.
    #[must_use]
    pub const fn prefs(&self) -> &Prefs {
        &self.prefs
    }

    /// Resolves the current screen to its rendered view.
    #[must_use]
    pub fn view(&self) -> ScreenView<'_> {
        router::resolve(&self.state, &self.prefs)
    }

    // --- Navigation -------------------------------------------------------

    /// Moves to the given screen. The component gallery is reachable in
    /// debug builds only; release builds ignore the shortcut.
    pub fn navigate_to(&mut self, screen: Screen) {
        if screen == Screen::DesignSystem && !router::design_system_available() {
            warn!("design system shortcut is disabled in this build");
            return;
        }
        self.state.screen = screen;
    }

    /// Follows the current screen's hardcoded back target.
    pub fn go_back(&mut self) {
        self.state.screen = self.state.screen.back_target();
    }

    /// Welcome screen "next": restart onboarding at page one.
    pub fn start_onboarding(&mut self) {
        self.state.onboarding_step = 1;
        self.state.screen = Screen::Onboarding;
    }

    /// Advances onboarding; past the last page lands on home.
    pub fn advance_onboarding(&mut self) {
        if self.state.onboarding_step < 2 {
            self.state.onboarding_step += 1;
        } else {
            self.state.screen = Screen::Home;
        }
    }

    // --- Auth -------------------------------------------------------------

    /// Role choice on the landing screen: organizers sign in by phone,
    /// owners through the Google-style flow.
    pub fn handle_role_selected(&mut self, role: Role) {
        self.state.screen = match role {
            Role::Organizer => Screen::PhoneAuth,
            Role::Owner => Screen::GoogleAuth,
        };
    }

    /// Phone flow finished: move to organizer registration with the
    /// verified number prefilled.
    pub fn phone_verified(&mut self, phone: String) {
        self.state.screen = Screen::OrganizerRegistration { phone };
    }

    /// Google-style flow finished: move to owner registration with the
    /// returned profile prefilled.
    pub fn google_authenticated(&mut self, email: String, name: String) {
        self.state.screen = Screen::OwnerRegistration { email, name };
    }

    /// Creates the organizer account and lands on home.
    pub fn register_organizer(&mut self, registration: Registration) {
        self.register(Role::Organizer, registration);
    }

    /// Creates the owner account and lands on home (which renders the
    /// owner dashboard for this role).
    pub fn register_owner(&mut self, registration: Registration) {
        self.register(Role::Owner, registration);
    }

    fn register(&mut self, role: Role, registration: Registration) {
        let user = User {
            id: self.ids.next(),
            role,
            name: registration.name,
            surname: registration.surname,
            phone: registration.phone,
            email: registration.email,
            photo_url: registration.photo_url,
        };
        info!(user_id = %user.id, ?role, "user registered");
        self.state.user = Some(user);
        self.state.screen = Screen::Home;
    }

    /// Applies a profile edit from the settings screen.
    pub fn update_user(&mut self, patch: UserPatch) {
        let Some(user) = self.state.user.as_mut() else {
            warn!("update_user without a signed-in user; ignoring");
            return;
        };
        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(surname) = patch.surname {
            user.surname = Some(surname);
        }
        if let Some(phone) = patch.phone {
            user.phone = Some(phone);
        }
        if let Some(email) = patch.email {
            user.email = Some(email);
        }
        if let Some(photo_url) = patch.photo_url {
            user.photo_url = Some(photo_url);
        }
    }

    /// Signs out and clears the collections the leaving role owns:
    /// organizers drop their planning data, owners their listings and
    /// conversations. Lands back on role selection.
    pub fn logout(&mut self) {
        match self.state.user.as_ref().map(|u| u.role) {
            Some(Role::Organizer) => {
                self.state.events.clear();
                self.state.guests.clear();
                self.state.budget_items.clear();
                self.state.active_event_id = None;
            }
            Some(Role::Owner) => {
                self.state.venues.clear();
                self.state.bookings.clear();
                self.state.chat_messages.clear();
            }
            None => {}
        }
        self.state.user = None;
        self.state.screen = Screen::RoleSelection;
    }

    // --- Events -----------------------------------------------------------

    /// Creates an event from the wizard draft, makes it active, and lands
    /// on its dashboard.
    pub fn create_event(&mut self, draft: EventDraft) -> Result<()> {
        let owner_id = self
            .state
            .user
            .as_ref()
            .map(|u| u.id.clone())
            .unwrap_or_default();
        let id = self.ids.next();
        let created = event::create_event(&mut self.state.events, draft, &owner_id, id)?;
        info!(event_id = %created.id, name = %created.name, "event created");
        self.state.active_event_id = Some(created.id);
        self.state.screen = Screen::EventDashboard;
        Ok(())
    }

    /// Merges a patch into the active event. No-op without one.
    pub fn update_event(&mut self, patch: EventPatch) {
        let Some(id) = self.state.active_event_id.clone() else {
            warn!("update_event without an active event; ignoring");
            return;
        };
        event::update_event(&mut self.state.events, &id, patch);
    }

    /// Event list selection: make the event active and open its dashboard.
    pub fn select_event(&mut self, event_id: &str) {
        if !self.state.events.iter().any(|e| e.id == event_id) {
            warn!(event_id, "select_event for unknown event; ignoring");
            return;
        }
        self.state.active_event_id = Some(event_id.to_string());
        self.state.screen = Screen::EventDashboard;
    }

    /// Venue detail "select for my event": attaches the venue to the
    /// active event (when there is one) and lands on the dashboard.
    pub fn select_venue_for_event(&mut self, venue_id: &str) {
        if self.state.active_event_id.is_some() {
            self.update_event(EventPatch {
                venue_id: Some(venue_id.to_string()),
                ..EventPatch::default()
            });
        }
        self.state.screen = Screen::EventDashboard;
    }

    // --- Guests and budget --------------------------------------------------

    /// Adds a guest, auto-assigning a family when the form left it open.
    pub fn add_guest(&mut self, draft: GuestDraft) {
        let id = self.ids.next();
        let new_family_id = self.ids.next_family();
        let added = guest::add_guest(
            &mut self.state.guests,
            &self.state.families,
            draft,
            id,
            new_family_id,
        );
        info!(guest_id = %added.id, family_id = ?added.family_id, "guest added");
    }

    /// Adds a budget line to the active event's list.
    pub fn add_budget_item(&mut self, draft: BudgetItemDraft) {
        let id = self.ids.next();
        budget::add_item(&mut self.state.budget_items, draft, id);
    }

    /// Budget progress against the active event's ceiling (0 when none).
    #[must_use]
    pub fn budget_summary(&self) -> BudgetSummary {
        BudgetSummary::compute(
            &self.state.budget_items,
            self.state.active_event().map_or(0, |e| e.budget),
        )
    }

    // --- Venues and bookings ------------------------------------------------

    /// Creates a venue listing for the signed-in owner and lands on the
    /// owner dashboard.
    pub fn add_venue(&mut self, draft: VenueDraft) -> Result<()> {
        let owner_id = self
            .state
            .user
            .as_ref()
            .map(|u| u.id.clone())
            .unwrap_or_default();
        let id = self.ids.next();
        let created = venue::add_venue(&mut self.state.venues, draft, &owner_id, id)?;
        info!(venue_id = %created.id, name = %created.name, "venue listed");
        self.state.screen = Screen::OwnerDashboard;
        Ok(())
    }

    /// Requests a booking of the given venue for the active event.
    /// Silent no-op without an active event or a signed-in user.
    pub fn create_booking(&mut self, venue_id: &str) {
        let (Some(event), Some(user)) = (
            self.state.active_event().cloned(),
            self.state.user.clone(),
        ) else {
            warn!(venue_id, "create_booking without active event or user; ignoring");
            return;
        };
        let id = self.ids.next();
        booking::create_booking(&mut self.state.bookings, &event, &user, venue_id, id);
    }

    /// Owner decision on a booking; only pending bookings can change.
    pub fn update_booking_status(&mut self, booking_id: &str, status: BookingStatus) -> Result<()> {
        booking::update_status(&mut self.state.bookings, booking_id, status)
    }

    /// Opens the chat of one booking.
    pub fn open_chat(&mut self, booking_id: String) {
        self.state.screen = Screen::Chat { booking_id };
    }

    /// Sends a chat message in a booking conversation. Silent no-op
    /// without a signed-in user.
    pub fn send_chat_message(
        &mut self,
        booking_id: &str,
        text: String,
        photo_url: Option<String>,
    ) {
        let Some(user) = self.state.user.clone() else {
            warn!(booking_id, "send_chat_message without a user; ignoring");
            return;
        };
        let id = self.ids.next();
        chat::send_message(
            &mut self.state.chat_messages,
            &user,
            booking_id,
            text,
            photo_url,
            id,
        );
    }

    // --- Preferences --------------------------------------------------------

    /// Switches the theme and persists it immediately.
    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.prefs.theme = theme;
        self.prefs.save(&self.prefs_path)
    }

    /// Flips between light and dark.
    pub fn toggle_theme(&mut self) -> Result<()> {
        let next = match self.prefs.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        self.set_theme(next)
    }

    /// Switches the interface language, persists it, and returns to the
    /// profile screen.
    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.prefs.language = language;
        self.prefs.save(&self.prefs_path)?;
        self.state.screen = Screen::Profile;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{
        signed_in_app, test_app, test_event_draft, test_guest_draft, test_venue_draft,
    };

    #[test]
    fn create_event_sets_active_and_navigates() {
        let mut app = signed_in_app(Role::Organizer);
        app.create_event(test_event_draft("Кыз узату")).unwrap();

        assert_eq!(app.state().screen, Screen::EventDashboard);
        let active = app.state().active_event().unwrap();
        assert_eq!(active.name, "Кыз узату");
        assert_eq!(
            active.owner_id,
            app.state().user.as_ref().unwrap().id
        );
    }

    #[test]
    fn guest_ids_stay_unique_through_the_controller() {
        let mut app = signed_in_app(Role::Organizer);
        let before = app.state().guests.len();

        for _ in 0..20 {
            app.add_guest(test_guest_draft("Айбек", "Жумалиев"));
        }

        assert_eq!(app.state().guests.len(), before + 20);
        let mut ids: Vec<_> = app.state().guests.iter().map(|g| g.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), before + 20);
    }

    #[test]
    fn create_booking_is_a_noop_without_preconditions() {
        // No user, no active event
        let mut app = test_app();
        app.create_booking("venue_1");
        assert!(app.state().bookings.is_empty());

        // User but no active event
        let mut app = signed_in_app(Role::Organizer);
        app.create_booking("venue_1");
        assert!(app.state().bookings.is_empty());

        // Both present: booking lands
        app.create_event(test_event_draft("Той")).unwrap();
        app.create_booking("venue_1");
        assert_eq!(app.state().bookings.len(), 1);
        assert_eq!(app.state().bookings[0].status, BookingStatus::Pending);
    }

    #[test]
    fn booking_confirmation_touches_exactly_one() {
        let mut app = signed_in_app(Role::Organizer);
        app.create_event(test_event_draft("Той")).unwrap();
        app.create_booking("venue_1");
        app.create_booking("venue_2");
        let target = app.state().bookings[0].id.clone();

        app.update_booking_status(&target, BookingStatus::Confirmed)
            .unwrap();

        assert_eq!(app.state().bookings[0].status, BookingStatus::Confirmed);
        assert_eq!(app.state().bookings[1].status, BookingStatus::Pending);
    }

    #[test]
    fn send_chat_message_requires_a_user() {
        let mut app = test_app();
        app.send_chat_message("b1", "Здравствуйте".to_string(), None);
        assert!(app.state().chat_messages.is_empty());

        let mut app = signed_in_app(Role::Owner);
        app.send_chat_message("b1", "Здравствуйте".to_string(), None);
        assert_eq!(app.state().chat_messages.len(), 1);
    }

    #[test]
    fn organizer_logout_clears_planning_data_only() {
        let mut app = signed_in_app(Role::Organizer);
        app.create_event(test_event_draft("Той")).unwrap();
        let venues_before = app.state().venues.len();

        app.logout();

        assert!(app.state().user.is_none());
        assert_eq!(app.state().screen, Screen::RoleSelection);
        assert!(app.state().events.is_empty());
        assert!(app.state().guests.is_empty());
        assert!(app.state().budget_items.is_empty());
        assert!(app.state().active_event_id.is_none());
        // Owner-side data survives an organizer logout
        assert_eq!(app.state().venues.len(), venues_before);
    }

    #[test]
    fn owner_logout_clears_listings_and_chats() {
        let mut app = signed_in_app(Role::Owner);
        app.add_venue(test_venue_draft("Ала-Тоо Plaza")).unwrap();
        app.send_chat_message("b1", "Ок".to_string(), None);
        let guests_before = app.state().guests.len();

        app.logout();

        assert!(app.state().venues.is_empty());
        assert!(app.state().bookings.is_empty());
        assert!(app.state().chat_messages.is_empty());
        // Organizer-side data survives an owner logout
        assert_eq!(app.state().guests.len(), guests_before);
    }

    #[test]
    fn add_venue_lands_on_owner_dashboard() {
        let mut app = signed_in_app(Role::Owner);
        app.navigate_to(Screen::AddVenue);
        app.add_venue(test_venue_draft("Silk Road Hall")).unwrap();

        assert_eq!(app.state().screen, Screen::OwnerDashboard);
        let owner_id = app.state().user.as_ref().unwrap().id.clone();
        assert!(
            app.state()
                .venues
                .iter()
                .any(|v| v.owner_id == owner_id && v.name == "Silk Road Hall")
        );
    }

    #[test]
    fn invalid_venue_draft_keeps_screen_and_state() {
        let mut app = signed_in_app(Role::Owner);
        app.navigate_to(Screen::AddVenue);
        let venues_before = app.state().venues.len();

        let mut draft = test_venue_draft("Silk Road Hall");
        draft.capacity = 0;
        assert!(app.add_venue(draft).is_err());

        assert_eq!(app.state().screen, Screen::AddVenue);
        assert_eq!(app.state().venues.len(), venues_before);
    }

    #[test]
    fn select_venue_attaches_to_active_event() {
        let mut app = signed_in_app(Role::Organizer);
        app.create_event(test_event_draft("Той")).unwrap();
        app.select_venue_for_event("venue_2");

        assert_eq!(
            app.state().active_event().unwrap().venue_id.as_deref(),
            Some("venue_2")
        );
        assert_eq!(app.state().screen, Screen::EventDashboard);
    }

    #[test]
    fn overspend_scenario_surfaces_without_blocking() {
        let mut app = signed_in_app(Role::Organizer);
        let mut draft = test_event_draft("Test");
        draft.budget = 100_000;
        app.create_event(draft).unwrap();
        // Seeded items are from the demo event; start clean for the math
        let seeded: i64 = app.budget_summary().total_spent;

        app.add_budget_item(BudgetItemDraft {
            category: crate::entities::BudgetCategory::Food,
            amount: 150_000,
            description: "Банкет".to_string(),
            date: None,
        });

        let summary = app.budget_summary();
        assert_eq!(summary.total_spent, seeded + 150_000);
        assert_eq!(summary.overspend(), Some(seeded + 50_000));

        // Still fully operational after overspending
        app.add_budget_item(BudgetItemDraft {
            category: crate::entities::BudgetCategory::Other,
            amount: 1_000,
            description: "Мелочи".to_string(),
            date: None,
        });
    }

    #[test]
    fn set_language_persists_and_returns_to_profile() {
        let mut app = signed_in_app(Role::Organizer);
        app.navigate_to(Screen::LanguageSelector);
        app.set_language(Language::Kg).unwrap();

        assert_eq!(app.prefs().language, Language::Kg);
        assert_eq!(app.state().screen, Screen::Profile);
    }

    #[test]
    fn toggle_theme_flips_and_persists() {
        let mut app = test_app();
        assert_eq!(app.prefs().theme, Theme::Light);
        app.toggle_theme().unwrap();
        assert_eq!(app.prefs().theme, Theme::Dark);
        app.toggle_theme().unwrap();
        assert_eq!(app.prefs().theme, Theme::Light);
    }

    #[test]
    fn role_selection_routes_to_matching_auth_flow() {
        let mut app = test_app();
        app.handle_role_selected(Role::Organizer);
        assert_eq!(app.state().screen, Screen::PhoneAuth);

        app.handle_role_selected(Role::Owner);
        assert_eq!(app.state().screen, Screen::GoogleAuth);
    }

    #[test]
    fn registration_flow_lands_on_home() {
        let mut app = test_app();
        app.handle_role_selected(Role::Organizer);
        app.phone_verified("+996555123456".to_string());
        assert!(matches!(
            app.state().screen,
            Screen::OrganizerRegistration { .. }
        ));

        app.register_organizer(Registration {
            name: "Айгуль".to_string(),
            surname: Some("Бекова".to_string()),
            phone: Some("+996555123456".to_string()),
            ..Registration::default()
        });

        assert_eq!(app.state().screen, Screen::Home);
        let user = app.state().user.as_ref().unwrap();
        assert_eq!(user.role, Role::Organizer);
        assert_eq!(user.phone.as_deref(), Some("+996555123456"));
    }

    #[test]
    fn onboarding_advances_twice_then_lands_home() {
        let mut app = test_app();
        app.navigate_to(Screen::Welcome);
        app.start_onboarding();
        assert_eq!(app.state().screen, Screen::Onboarding);
        assert_eq!(app.state().onboarding_step, 1);

        app.advance_onboarding();
        assert_eq!(app.state().onboarding_step, 2);
        assert_eq!(app.state().screen, Screen::Onboarding);

        app.advance_onboarding();
        assert_eq!(app.state().screen, Screen::Home);
    }

    #[test]
    fn update_user_merges_patch_fields() {
        let mut app = signed_in_app(Role::Organizer);
        app.update_user(UserPatch {
            surname: Some("Жумалиева".to_string()),
            ..UserPatch::default()
        });

        let user = app.state().user.as_ref().unwrap();
        assert_eq!(user.surname.as_deref(), Some("Жумалиева"));
    }
}
