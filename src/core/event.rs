//! Event business logic - creation, wizard validation, and partial updates.

use crate::{
    entities::Event,
    errors::{Error, Result},
};

/// Output of the five-step event creation wizard, before an id or owner
/// has been assigned.
#[derive(Clone, Debug)]
pub struct EventDraft {
    /// Display name (step 1)
    pub name: String,
    /// Date in `YYYY-MM-DD` form (step 2)
    pub date: String,
    /// Time in `HH:MM` form (step 2)
    pub time: String,
    /// Expected head count (step 3)
    pub guests: u32,
    /// Budget ceiling in som (step 4)
    pub budget: i64,
    /// Celebration kind (step 5)
    pub kind: String,
}

/// Partial update applied to the active event. Unset fields are left
/// unchanged.
#[derive(Clone, Debug, Default)]
pub struct EventPatch {
    /// New display name
    pub name: Option<String>,
    /// New date
    pub date: Option<String>,
    /// New time
    pub time: Option<String>,
    /// New head count
    pub guests: Option<u32>,
    /// New budget ceiling
    pub budget: Option<i64>,
    /// New celebration kind
    pub kind: Option<String>,
    /// Venue to attach
    pub venue_id: Option<String>,
}

/// Validates a wizard draft against the per-step rules: non-empty name,
/// date and time present, head count and budget positive, kind chosen.
pub fn validate_draft(draft: &EventDraft) -> Result<()> {
    if draft.name.trim().is_empty() {
        return Err(Error::Validation {
            field: "name",
            message: "Введите название мероприятия".to_string(),
        });
    }
    if draft.date.is_empty() || draft.time.is_empty() {
        return Err(Error::Validation {
            field: "date",
            message: "Укажите дату и время".to_string(),
        });
    }
    if draft.guests == 0 {
        return Err(Error::Validation {
            field: "guests",
            message: "Укажите количество гостей".to_string(),
        });
    }
    if draft.budget <= 0 {
        return Err(Error::Validation {
            field: "budget",
            message: "Укажите бюджет".to_string(),
        });
    }
    if draft.kind.is_empty() {
        return Err(Error::Validation {
            field: "kind",
            message: "Выберите тип мероприятия".to_string(),
        });
    }
    Ok(())
}

/// Validates the draft and appends a new event stamped with the given
/// owner. Returns the created event.
pub fn create_event(
    events: &mut Vec<Event>,
    draft: EventDraft,
    owner_id: &str,
    id: String,
) -> Result<Event> {
    validate_draft(&draft)?;

    let event = Event {
        id,
        name: draft.name,
        date: draft.date,
        time: draft.time,
        guests: draft.guests,
        budget: draft.budget,
        kind: draft.kind,
        venue_id: None,
        owner_id: owner_id.to_string(),
    };
    events.push(event.clone());
    Ok(event)
}

/// Merges a patch into the event with the given id and replaces the
/// matching entry in place. Returns the updated event, or `None` when no
/// event matches.
pub fn update_event(events: &mut [Event], id: &str, patch: EventPatch) -> Option<Event> {
    let event = events.iter_mut().find(|e| e.id == id)?;

    if let Some(name) = patch.name {
        event.name = name;
    }
    if let Some(date) = patch.date {
        event.date = date;
    }
    if let Some(time) = patch.time {
        event.time = time;
    }
    if let Some(guests) = patch.guests {
        event.guests = guests;
    }
    if let Some(budget) = patch.budget {
        event.budget = budget;
    }
    if let Some(kind) = patch.kind {
        event.kind = kind;
    }
    if let Some(venue_id) = patch.venue_id {
        event.venue_id = Some(venue_id);
    }
    Some(event.clone())
}
