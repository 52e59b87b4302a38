//! Guest record types.

use crate::{GuestId, Timestamp};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Caller-supplied data for a new guest.
///
/// The store accepts these as given; see [`crate::validate`] for the checks
/// the UI layer runs before submitting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestFields {
    pub name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose_of_visit: Option<String>,
    /// Front of the guest's ID document, as a data URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_front_image: Option<String>,
    /// Back of the guest's ID document, as a data URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_back_image: Option<String>,
}

impl GuestFields {
    /// Create fields with only the required values set.
    pub fn new(name: impl Into<String>, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            name: name.into(),
            check_in,
            check_out,
            room_number: None,
            contact_number: None,
            purpose_of_visit: None,
            id_front_image: None,
            id_back_image: None,
        }
    }

    pub fn with_room_number(mut self, room_number: impl Into<String>) -> Self {
        self.room_number = Some(room_number.into());
        self
    }

    pub fn with_contact_number(mut self, contact_number: impl Into<String>) -> Self {
        self.contact_number = Some(contact_number.into());
        self
    }

    pub fn with_purpose_of_visit(mut self, purpose: impl Into<String>) -> Self {
        self.purpose_of_visit = Some(purpose.into());
        self
    }

    pub fn with_id_images(mut self, front: impl Into<String>, back: impl Into<String>) -> Self {
        self.id_front_image = Some(front.into());
        self.id_back_image = Some(back.into());
        self
    }
}

/// A partial update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuestPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose_of_visit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_front_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_back_image: Option<String>,
}

/// A persisted guest stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    /// Unique identifier, assigned once by the store
    pub id: GuestId,
    pub name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub room_number: Option<String>,
    pub contact_number: Option<String>,
    pub purpose_of_visit: Option<String>,
    pub id_front_image: Option<String>,
    pub id_back_image: Option<String>,
    /// When the guest was first recorded
    pub created_at: Timestamp,
    /// When the guest was last written
    pub updated_at: Timestamp,
}

impl Guest {
    /// Create a new guest record.
    pub fn new(id: impl Into<GuestId>, fields: GuestFields, now: Timestamp) -> Self {
        Self {
            id: id.into(),
            name: fields.name,
            check_in: fields.check_in,
            check_out: fields.check_out,
            room_number: fields.room_number,
            contact_number: fields.contact_number,
            purpose_of_visit: fields.purpose_of_visit,
            id_front_image: fields.id_front_image,
            id_back_image: fields.id_back_image,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a patch over this record and refresh `updated_at`.
    ///
    /// `id` and `created_at` never change. `updated_at` always moves strictly
    /// forward, even if `now` is not later than the previous write.
    pub fn apply_patch(&mut self, patch: GuestPatch, now: Timestamp) {
        overlay(&mut self.name, patch.name);
        overlay(&mut self.check_in, patch.check_in);
        overlay(&mut self.check_out, patch.check_out);
        overlay_optional(&mut self.room_number, patch.room_number);
        overlay_optional(&mut self.contact_number, patch.contact_number);
        overlay_optional(&mut self.purpose_of_visit, patch.purpose_of_visit);
        overlay_optional(&mut self.id_front_image, patch.id_front_image);
        overlay_optional(&mut self.id_back_image, patch.id_back_image);

        self.updated_at = now.max(self.updated_at + Duration::microseconds(1));
    }

    /// The caller-supplied part of this record.
    pub fn fields(&self) -> GuestFields {
        GuestFields {
            name: self.name.clone(),
            check_in: self.check_in,
            check_out: self.check_out,
            room_number: self.room_number.clone(),
            contact_number: self.contact_number.clone(),
            purpose_of_visit: self.purpose_of_visit.clone(),
            id_front_image: self.id_front_image.clone(),
            id_back_image: self.id_back_image.clone(),
        }
    }

    /// Number of nights between check-in and check-out.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

fn overlay<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn overlay_optional<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}
