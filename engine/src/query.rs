//! Query engine - filtering and ordering of guest listings.
//!
//! Queries run over a fully materialized record set and never touch storage.
//! The filter is always applied before the sort.

use crate::Guest;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A guest field that listings can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Id,
    Name,
    CheckIn,
    CheckOut,
    RoomNumber,
    ContactNumber,
    PurposeOfVisit,
    IdFrontImage,
    IdBackImage,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    /// Compare two guests on this field in ascending order.
    ///
    /// Text compares lexicographically, dates chronologically. A missing
    /// optional value orders before any present one.
    pub fn compare(self, a: &Guest, b: &Guest) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Name => a.name.cmp(&b.name),
            SortField::CheckIn => a.check_in.cmp(&b.check_in),
            SortField::CheckOut => a.check_out.cmp(&b.check_out),
            SortField::RoomNumber => a.room_number.cmp(&b.room_number),
            SortField::ContactNumber => a.contact_number.cmp(&b.contact_number),
            SortField::PurposeOfVisit => a.purpose_of_visit.cmp(&b.purpose_of_visit),
            SortField::IdFrontImage => a.id_front_image.cmp(&b.id_front_image),
            SortField::IdBackImage => a.id_back_image.cmp(&b.id_back_image),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::CheckIn => "checkIn",
            SortField::CheckOut => "checkOut",
            SortField::RoomNumber => "roomNumber",
            SortField::ContactNumber => "contactNumber",
            SortField::PurposeOfVisit => "purposeOfVisit",
            SortField::IdFrontImage => "idFrontImage",
            SortField::IdBackImage => "idBackImage",
            SortField::CreatedAt => "createdAt",
            SortField::UpdatedAt => "updatedAt",
        };
        f.write_str(name)
    }
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc", alias = "ascending")]
    Ascending,
    #[serde(rename = "desc", alias = "descending")]
    Descending,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("asc"),
            SortDirection::Descending => f.write_str("desc"),
        }
    }
}

/// Caller-supplied criteria for a guest listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuestFilter {
    /// Case-insensitive text matched against name, room and purpose of visit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_text: Option<String>,
    /// Field to order by; `None` keeps retrieval order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortField>,
    pub sort_direction: SortDirection,
}

impl GuestFilter {
    /// A filter that keeps every record in retrieval order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict results to records containing `text`.
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    /// Order results by `field`.
    pub fn sort_by(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort_by = Some(field);
        self.sort_direction = direction;
        self
    }

    /// Filter, then sort, a record set.
    pub fn apply(&self, mut guests: Vec<Guest>) -> Vec<Guest> {
        if let Some(needle) = self.needle() {
            guests.retain(|g| matches_needle(g, &needle));
        }

        if let Some(field) = self.sort_by {
            // sort_by is stable; reversing the comparator keeps ties in retrieval order
            match self.sort_direction {
                SortDirection::Ascending => guests.sort_by(|a, b| field.compare(a, b)),
                SortDirection::Descending => guests.sort_by(|a, b| field.compare(b, a)),
            }
        }

        guests
    }

    fn needle(&self) -> Option<String> {
        self.search_text
            .as_deref()
            .filter(|text| !text.is_empty())
            .map(str::to_lowercase)
    }
}

fn matches_needle(guest: &Guest, needle: &str) -> bool {
    let contains = |value: &str| value.to_lowercase().contains(needle);

    contains(guest.name.as_str())
        || guest.room_number.as_deref().is_some_and(contains)
        || guest.purpose_of_visit.as_deref().is_some_and(contains)
}
