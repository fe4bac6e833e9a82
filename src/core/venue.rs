//! Venue business logic - listing validation, search, and owner filtering.

use crate::{
    auth,
    entities::{Location, Venue},
    errors::{Error, Result},
};

/// Stock photos substituted when an owner lists a venue without
/// uploading any.
pub const SAMPLE_PHOTOS: [&str; 3] = [
    "https://images.unsplash.com/photo-1542665952-14513db15293?w=800",
    "https://images.unsplash.com/photo-1667388969250-1c7220bf3f37?w=800",
    "https://images.unsplash.com/photo-1592240419090-5d933c5a759b?w=800",
];

/// A venue listing as entered in the add-venue wizard, before an id or
/// owner has been assigned.
#[derive(Clone, Debug)]
pub struct VenueDraft {
    /// Display name (step 1)
    pub name: String,
    /// Venue kind (step 1)
    pub kind: String,
    /// Rental price in som (step 1)
    pub price: i64,
    /// Maximum head count (step 1)
    pub capacity: u32,
    /// Street address (step 2)
    pub address: String,
    /// Latitude from the map picker
    pub lat: f64,
    /// Longitude from the map picker
    pub lng: f64,
    /// Marketing description (step 2)
    pub description: String,
    /// Uploaded photo URLs; sample photos are substituted when empty
    pub photos: Vec<String>,
    /// Chosen cover photo
    pub main_photo: Option<String>,
    /// WhatsApp contact, formatted `+996 XXX XXX XXX` (step 3)
    pub whatsapp: String,
    /// Voice contact, formatted `+996 XXX XXX XXX` (step 3)
    pub phone: String,
}

/// Validates a listing draft against the wizard-step rules.
pub fn validate_draft(draft: &VenueDraft) -> Result<()> {
    if draft.name.chars().count() < 3 {
        return Err(Error::Validation {
            field: "name",
            message: "Введите название заведения (минимум 3 символа)".to_string(),
        });
    }
    if draft.kind.is_empty() {
        return Err(Error::Validation {
            field: "kind",
            message: "Выберите тип заведения".to_string(),
        });
    }
    if draft.price <= 0 {
        return Err(Error::Validation {
            field: "price",
            message: "Введите корректную цену".to_string(),
        });
    }
    if draft.capacity == 0 {
        return Err(Error::Validation {
            field: "capacity",
            message: "Введите вместимость".to_string(),
        });
    }
    if draft.address.chars().count() < 5 {
        return Err(Error::Validation {
            field: "address",
            message: "Введите адрес заведения".to_string(),
        });
    }
    if draft.description.chars().count() < 20 {
        return Err(Error::Validation {
            field: "description",
            message: "Добавьте описание (минимум 20 символов)".to_string(),
        });
    }
    if !auth::is_complete_phone(&draft.phone) {
        return Err(Error::Validation {
            field: "phone",
            message: "Введите корректный номер телефона".to_string(),
        });
    }
    if !auth::is_complete_phone(&draft.whatsapp) {
        return Err(Error::Validation {
            field: "whatsapp",
            message: "Введите корректный номер WhatsApp".to_string(),
        });
    }
    Ok(())
}

/// Validates the draft and appends a new venue owned by `owner_id`.
/// Phone numbers are stored with spacing stripped; missing photos fall
/// back to the sample gallery.
pub fn add_venue(
    venues: &mut Vec<Venue>,
    draft: VenueDraft,
    owner_id: &str,
    id: String,
) -> Result<Venue> {
    validate_draft(&draft)?;

    let photos = if draft.photos.is_empty() {
        SAMPLE_PHOTOS.iter().map(ToString::to_string).collect()
    } else {
        draft.photos
    };
    let main_photo = draft
        .main_photo
        .unwrap_or_else(|| photos[0].clone());

    let venue = Venue {
        id,
        name: draft.name,
        kind: draft.kind,
        price: draft.price,
        capacity: draft.capacity,
        location: Location {
            lat: draft.lat,
            lng: draft.lng,
            address: draft.address,
        },
        description: draft.description,
        photos,
        main_photo,
        owner_id: owner_id.to_string(),
        whatsapp: auth::clean_phone(&draft.whatsapp),
        phone: auth::clean_phone(&draft.phone),
    };
    venues.push(venue.clone());
    Ok(venue)
}

/// Venues listed by the given owner.
#[must_use]
pub fn venues_for_owner<'a>(venues: &'a [Venue], owner_id: &str) -> Vec<&'a Venue> {
    venues.iter().filter(|v| v.owner_id == owner_id).collect()
}

/// Case-insensitive substring search over venue name and address, used by
/// the discovery list. An empty query returns everything.
#[must_use]
pub fn search<'a>(venues: &'a [Venue], query: &str) -> Vec<&'a Venue> {
    let needle = query.to_lowercase();
    venues
        .iter()
        .filter(|v| {
            v.name.to_lowercase().contains(&needle)
                || v.location.address.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::test_venue_draft;

    #[test]
    fn add_venue_stores_cleaned_phones_and_owner() {
        let mut venues = Vec::new();
        let venue = add_venue(
            &mut venues,
            test_venue_draft("Ала-Тоо Plaza"),
            "owner_1",
            "v1".to_string(),
        )
        .unwrap();

        assert_eq!(venues.len(), 1);
        assert_eq!(venue.owner_id, "owner_1");
        assert_eq!(venue.phone, "+996555000111");
        assert_eq!(venue.whatsapp, "+996555000111");
    }

    #[test]
    fn missing_photos_fall_back_to_samples() {
        let mut venues = Vec::new();
        let venue = add_venue(
            &mut venues,
            test_venue_draft("Silk Road Hall"),
            "owner_1",
            "v1".to_string(),
        )
        .unwrap();

        assert_eq!(venue.photos.len(), SAMPLE_PHOTOS.len());
        assert_eq!(venue.main_photo, SAMPLE_PHOTOS[0]);
    }

    #[test]
    fn validation_rejects_each_bad_field() {
        let mut venues = Vec::new();

        let mut draft = test_venue_draft("Ok");
        let err = add_venue(&mut venues, draft, "o", "1".to_string()).unwrap_err();
        assert!(matches!(err, Error::Validation { field: "name", .. }));

        draft = test_venue_draft("Ала-Тоо Plaza");
        draft.price = 0;
        let err = add_venue(&mut venues, draft, "o", "2".to_string()).unwrap_err();
        assert!(matches!(err, Error::Validation { field: "price", .. }));

        draft = test_venue_draft("Ала-Тоо Plaza");
        draft.description = "коротко".to_string();
        let err = add_venue(&mut venues, draft, "o", "3".to_string()).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation {
                field: "description",
                ..
            }
        ));

        draft = test_venue_draft("Ала-Тоо Plaza");
        draft.whatsapp = "+996 555".to_string();
        let err = add_venue(&mut venues, draft, "o", "4".to_string()).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation {
                field: "whatsapp",
                ..
            }
        ));

        assert!(venues.is_empty());
    }

    #[test]
    fn search_matches_name_or_address() {
        let mut venues = Vec::new();
        add_venue(
            &mut venues,
            test_venue_draft("Ала-Тоо Plaza"),
            "o",
            "v1".to_string(),
        )
        .unwrap();
        let mut second = test_venue_draft("Manas Garden");
        second.address = "Чуйская область".to_string();
        add_venue(&mut venues, second, "o", "v2".to_string()).unwrap();

        assert_eq!(search(&venues, "plaza").len(), 1);
        assert_eq!(search(&venues, "чуйская").len(), 1);
        assert_eq!(search(&venues, "").len(), 2);
        assert!(search(&venues, "Ош").is_empty());
    }

    #[test]
    fn venues_for_owner_filters_exactly() {
        let mut venues = Vec::new();
        add_venue(
            &mut venues,
            test_venue_draft("Ала-Тоо Plaza"),
            "owner_1",
            "v1".to_string(),
        )
        .unwrap();
        add_venue(
            &mut venues,
            test_venue_draft("Royal Palace"),
            "owner_2",
            "v2".to_string(),
        )
        .unwrap();

        let mine = venues_for_owner(&venues, "owner_1");
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id, "v1");
        assert!(venues_for_owner(&venues, "owner_3").is_empty());
    }
}
