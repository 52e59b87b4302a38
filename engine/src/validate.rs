//! Form-level validation of guest data.
//!
//! The store accepts whatever it is given. These checks belong to the
//! caller, which runs them before `add` and `update`.

use crate::{error::Result, Error, Guest, GuestFields, GuestPatch};
use chrono::NaiveDate;

/// Largest accepted ID image, in decoded bytes.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Media types accepted for ID images.
pub const ACCEPTED_IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/jpg", "image/png"];

/// Validate the fields of a new guest.
pub fn validate_fields(fields: &GuestFields) -> Result<()> {
    check_name(&fields.name)?;
    check_stay(fields.check_in, fields.check_out)?;
    check_image("idFrontImage", fields.id_front_image.as_deref())?;
    check_image("idBackImage", fields.id_back_image.as_deref())?;
    Ok(())
}

/// Validate the record that results from applying `patch` to `existing`.
///
/// Images already stored are not re-checked; only replacements are.
pub fn validate_patch(existing: &Guest, patch: &GuestPatch) -> Result<()> {
    check_name(patch.name.as_deref().unwrap_or(&existing.name))?;
    check_stay(
        patch.check_in.unwrap_or(existing.check_in),
        patch.check_out.unwrap_or(existing.check_out),
    )?;
    check_image("idFrontImage", patch.id_front_image.as_deref())?;
    check_image("idBackImage", patch.id_back_image.as_deref())?;
    Ok(())
}

fn check_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::EmptyName);
    }
    Ok(())
}

fn check_stay(check_in: NaiveDate, check_out: NaiveDate) -> Result<()> {
    if check_out < check_in {
        return Err(Error::InvalidStayRange {
            check_in,
            check_out,
        });
    }
    Ok(())
}

fn check_image(field: &'static str, value: Option<&str>) -> Result<()> {
    // An empty string means "no image"
    let Some(uri) = value.filter(|v| !v.is_empty()) else {
        return Ok(());
    };

    let (header, payload) = uri
        .strip_prefix("data:")
        .and_then(|rest| rest.split_once(','))
        .ok_or(Error::MalformedImage { field })?;

    let mut params = header.split(';');
    let media_type = params.next().unwrap_or_default().to_ascii_lowercase();
    if !ACCEPTED_IMAGE_TYPES.contains(&media_type.as_str()) {
        return Err(Error::UnsupportedImageType { field, media_type });
    }

    let size = if params.any(|p| p.eq_ignore_ascii_case("base64")) {
        base64_decoded_len(payload)
    } else {
        payload.len()
    };
    if size > MAX_IMAGE_BYTES {
        return Err(Error::ImageTooLarge {
            field,
            size,
            limit: MAX_IMAGE_BYTES,
        });
    }

    Ok(())
}

fn base64_decoded_len(payload: &str) -> usize {
    let padding = payload.bytes().rev().take_while(|&b| b == b'=').count();
    (payload.len() * 3 / 4).saturating_sub(padding)
}
