//! Screen routing - the closed set of screens and the exhaustive dispatch
//! that picks exactly one view for the current state.
//!
//! Navigation payloads ride on the [`Screen`] variant itself (venue id,
//! family id, booking id, registration prefill), so a screen can never
//! render against a stale ambient selection. "Back" is a hardcoded
//! per-screen target, not a history pop.

use crate::{
    app::state::AppState,
    config::prefs::{Language, Prefs},
    core::{booking, budget::BudgetSummary, chat, guest, venue},
    entities::{Booking, BudgetItem, ChatMessage, Event, Family, Guest, User, Venue},
};

/// Every screen the app can show. The enum is closed and dispatch is an
/// exhaustive match; there is no silent string-fallback path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    /// Organizer-or-owner choice; also the landing screen
    #[default]
    RoleSelection,
    /// Phone number + code entry (organizer sign-in)
    PhoneAuth,
    /// Simulated Google sign-in (owner sign-in)
    GoogleAuth,
    /// Organizer profile form, prefilled with the verified phone
    OrganizerRegistration {
        /// Verified phone in `+996XXXXXXXXX` form
        phone: String,
    },
    /// Owner profile form, prefilled from the Google-style flow
    OwnerRegistration {
        /// E-mail from the simulated OAuth response
        email: String,
        /// Display name from the simulated OAuth response
        name: String,
    },
    /// First-launch welcome
    Welcome,
    /// Two-page onboarding; the page lives in [`AppState::onboarding_step`]
    Onboarding,
    /// Role-dependent home (organizer home or owner dashboard)
    Home,
    /// Organizer's event list
    MyEvents,
    /// Five-step event creation wizard
    CreateEvent,
    /// Venue discovery list
    VenueList,
    /// One venue's detail page
    VenueDetail {
        /// Venue to show
        venue_id: String,
    },
    /// Active event overview with budget progress
    EventDashboard,
    /// Guest and family list
    Guests,
    /// One family's member list
    FamilyDetail {
        /// Family to show
        family_id: String,
    },
    /// Budget items and totals
    Budget,
    /// Decoration theme picker
    Decoration,
    /// Profile with settings/language/support entries
    Profile,
    /// Profile editing
    Settings,
    /// Language picker
    LanguageSelector,
    /// Support/contact page
    Support,
    /// Owner's dashboard with venue and booking counts
    OwnerDashboard,
    /// Four-step venue listing wizard
    AddVenue,
    /// Owner's venue list
    MyVenues,
    /// Owner's incoming bookings
    OwnerBookings,
    /// Chat of one booking
    Chat {
        /// Booking whose conversation to show
        booking_id: String,
    },
    /// Owner-side profile (same content, owner back target)
    OwnerProfile,
    /// Component gallery, available in debug builds only
    DesignSystem,
}

impl Screen {
    /// The hardcoded back target of a screen. Screens without a back
    /// affordance return themselves.
    #[must_use]
    pub fn back_target(&self) -> Self {
        match self {
            Self::PhoneAuth | Self::GoogleAuth => Self::RoleSelection,
            Self::OrganizerRegistration { .. } => Self::PhoneAuth,
            Self::OwnerRegistration { .. } => Self::GoogleAuth,
            Self::MyEvents
            | Self::CreateEvent
            | Self::VenueList
            | Self::EventDashboard
            | Self::Profile
            | Self::DesignSystem => Self::Home,
            Self::VenueDetail { .. } => Self::VenueList,
            Self::Guests | Self::Budget | Self::Decoration => Self::EventDashboard,
            Self::FamilyDetail { .. } => Self::Guests,
            Self::Settings | Self::LanguageSelector | Self::Support => Self::Profile,
            Self::AddVenue | Self::MyVenues | Self::OwnerBookings | Self::OwnerProfile => {
                Self::OwnerDashboard
            }
            Self::Chat { .. } => Self::OwnerBookings,
            Self::RoleSelection
            | Self::Welcome
            | Self::Onboarding
            | Self::Home
            | Self::OwnerDashboard => self.clone(),
        }
    }
}

/// Whether the component-gallery shortcut is reachable. Mirrors the
/// development-build gate of the navigation shortcut.
#[must_use]
pub const fn design_system_available() -> bool {
    cfg!(debug_assertions)
}

/// One rendered screen: the state slice and derived data it needs,
/// borrowed from the aggregate.
#[derive(Debug)]
pub enum ScreenView<'a> {
    /// Role choice
    RoleSelection,
    /// Phone entry
    PhoneAuth,
    /// Simulated Google sign-in
    GoogleAuth,
    /// Organizer registration form
    OrganizerRegistration {
        /// Verified phone to prefill
        phone: &'a str,
    },
    /// Owner registration form
    OwnerRegistration {
        /// E-mail to prefill
        email: &'a str,
        /// Name to prefill
        name: &'a str,
    },
    /// Welcome page
    Welcome,
    /// Onboarding page
    Onboarding {
        /// Current page (1-based)
        step: u8,
    },
    /// Organizer home
    OrganizerHome {
        /// Signed-in user, if any
        user: Option<&'a User>,
        /// All events for the quick list
        events: &'a [Event],
    },
    /// Owner dashboard
    OwnerDashboard {
        /// Signed-in owner, if any
        user: Option<&'a User>,
        /// The owner's venues
        venues: Vec<&'a Venue>,
        /// Bookings for the owner's venues
        bookings: Vec<&'a Booking>,
    },
    /// Event list
    MyEvents {
        /// All events
        events: &'a [Event],
    },
    /// Event creation wizard
    CreateEvent,
    /// Venue discovery list
    VenueList {
        /// All discoverable venues
        venues: &'a [Venue],
    },
    /// Venue detail page
    VenueDetail {
        /// The venue, or `None` when the id no longer resolves
        venue: Option<&'a Venue>,
    },
    /// Event dashboard
    EventDashboard {
        /// Active event, if any
        event: Option<&'a Event>,
        /// All guests for the head count card
        guests: &'a [Guest],
        /// Budget progress against the event's ceiling
        summary: BudgetSummary,
    },
    /// Guest list
    Guests {
        /// All guests
        guests: &'a [Guest],
        /// All families
        families: &'a [Family],
    },
    /// Family member list
    FamilyDetail {
        /// The family (requested or first-available fallback)
        family: &'a Family,
        /// Members derived by filtering guests
        members: Vec<&'a Guest>,
    },
    /// Family lookup failed and no fallback exists
    FamilyNotFound,
    /// Budget screen
    Budget {
        /// All budget items
        items: &'a [BudgetItem],
        /// Progress against the active event's ceiling (0 when none)
        summary: BudgetSummary,
    },
    /// Decoration theme picker
    Decoration,
    /// Profile page
    Profile {
        /// Signed-in user, if any
        user: Option<&'a User>,
        /// Current interface language
        language: Language,
    },
    /// Profile editing
    Settings {
        /// The user being edited
        user: &'a User,
    },
    /// Language picker
    LanguageSelector {
        /// Current interface language
        language: Language,
    },
    /// Support page
    Support,
    /// Venue listing wizard
    AddVenue,
    /// Owner's venue list
    MyVenues {
        /// The owner's venues
        venues: Vec<&'a Venue>,
    },
    /// Owner's booking list
    OwnerBookings {
        /// Bookings for the owner's venues
        bookings: Vec<&'a Booking>,
        /// All venues, for name lookups
        venues: &'a [Venue],
    },
    /// Booking chat
    Chat {
        /// The booking the conversation belongs to
        booking: &'a Booking,
        /// Messages of this conversation
        messages: Vec<&'a ChatMessage>,
    },
    /// Chat opened for a booking that no longer exists
    BookingNotFound,
    /// Component gallery
    DesignSystem,
}

fn owner_dashboard(state: &AppState) -> ScreenView<'_> {
    let owner_id = state.user.as_ref().map_or("", |u| u.id.as_str());
    ScreenView::OwnerDashboard {
        user: state.user.as_ref(),
        venues: venue::venues_for_owner(&state.venues, owner_id),
        bookings: booking::bookings_for_owner(&state.bookings, &state.venues, owner_id),
    }
}

/// Picks exactly one view for the current state. Role-dependent
/// branching happens here: `Home` renders the owner dashboard for
/// owner-role users and the organizer home otherwise.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn resolve<'a>(state: &'a AppState, prefs: &Prefs) -> ScreenView<'a> {
    match &state.screen {
        Screen::RoleSelection => ScreenView::RoleSelection,
        Screen::PhoneAuth => ScreenView::PhoneAuth,
        Screen::GoogleAuth => ScreenView::GoogleAuth,
        Screen::OrganizerRegistration { phone } => ScreenView::OrganizerRegistration { phone },
        Screen::OwnerRegistration { email, name } => {
            ScreenView::OwnerRegistration { email, name }
        }
        Screen::Welcome => ScreenView::Welcome,
        Screen::Onboarding => ScreenView::Onboarding {
            step: state.onboarding_step,
        },
        Screen::Home => match &state.user {
            Some(user) if user.role == crate::entities::Role::Owner => owner_dashboard(state),
            _ => ScreenView::OrganizerHome {
                user: state.user.as_ref(),
                events: &state.events,
            },
        },
        Screen::MyEvents => ScreenView::MyEvents {
            events: &state.events,
        },
        Screen::CreateEvent => ScreenView::CreateEvent,
        Screen::VenueList => ScreenView::VenueList {
            venues: &state.venues,
        },
        Screen::VenueDetail { venue_id } => ScreenView::VenueDetail {
            venue: state.venues.iter().find(|v| &v.id == venue_id),
        },
        Screen::EventDashboard => {
            let event = state.active_event();
            ScreenView::EventDashboard {
                event,
                guests: &state.guests,
                summary: BudgetSummary::compute(
                    &state.budget_items,
                    event.map_or(0, |e| e.budget),
                ),
            }
        }
        Screen::Guests => ScreenView::Guests {
            guests: &state.guests,
            families: &state.families,
        },
        Screen::FamilyDetail { family_id } => {
            // Missing selection falls back to the first family, matching
            // the original behavior; only an empty collection is a
            // not-found.
            let family = state
                .families
                .iter()
                .find(|f| &f.id == family_id)
                .or_else(|| state.families.first());
            match family {
                Some(family) => ScreenView::FamilyDetail {
                    family,
                    members: guest::family_members(&state.guests, &family.id),
                },
                None => ScreenView::FamilyNotFound,
            }
        }
        Screen::Budget => ScreenView::Budget {
            items: &state.budget_items,
            summary: BudgetSummary::compute(
                &state.budget_items,
                state.active_event().map_or(0, |e| e.budget),
            ),
        },
        Screen::Decoration => ScreenView::Decoration,
        Screen::Profile | Screen::OwnerProfile => ScreenView::Profile {
            user: state.user.as_ref(),
            language: prefs.language,
        },
        Screen::Settings => match &state.user {
            Some(user) => ScreenView::Settings { user },
            // Editing a profile without a signed-in user falls back to
            // the landing screen.
            None => ScreenView::RoleSelection,
        },
        Screen::LanguageSelector => ScreenView::LanguageSelector {
            language: prefs.language,
        },
        Screen::Support => ScreenView::Support,
        Screen::OwnerDashboard => owner_dashboard(state),
        Screen::AddVenue => ScreenView::AddVenue,
        Screen::MyVenues => ScreenView::MyVenues {
            venues: venue::venues_for_owner(
                &state.venues,
                state.user.as_ref().map_or("", |u| u.id.as_str()),
            ),
        },
        Screen::OwnerBookings => ScreenView::OwnerBookings {
            bookings: booking::bookings_for_owner(
                &state.bookings,
                &state.venues,
                state.user.as_ref().map_or("", |u| u.id.as_str()),
            ),
            venues: &state.venues,
        },
        Screen::Chat { booking_id } => {
            match state.bookings.iter().find(|b| &b.id == booking_id) {
                Some(booking) => ScreenView::Chat {
                    booking,
                    messages: chat::messages_for_booking(&state.chat_messages, booking_id),
                },
                None => ScreenView::BookingNotFound,
            }
        }
        Screen::DesignSystem => ScreenView::DesignSystem,
    }
}
