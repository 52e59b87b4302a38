//! Guest handlers - validate caller data, then delegate to the store.

use crate::db::{GuestStore, StoreError};
use crate::error::Result;
use chrono::{NaiveDate, Utc};
use guestbook_engine::{
    export, validate_fields, validate_patch, Guest, GuestFields, GuestFilter, GuestPatch,
};

/// A rendered CSV export ready for download.
#[derive(Debug)]
pub struct CsvExport {
    /// Suggested download name
    pub file_name: String,
    /// CSV text
    pub body: String,
}

/// List guests matching `filter`.
pub async fn handle_list(store: &GuestStore, filter: GuestFilter) -> Result<Vec<Guest>> {
    Ok(store.get_all(Some(&filter)).await?)
}

/// Fetch one guest.
pub async fn handle_get(store: &GuestStore, id: &str) -> Result<Guest> {
    store
        .get(id)
        .await?
        .ok_or_else(|| StoreError::NotFound(id.to_string()).into())
}

/// Validate and persist a new guest.
pub async fn handle_add(store: &GuestStore, fields: GuestFields) -> Result<Guest> {
    validate_fields(&fields)?;
    let guest = store.add(fields).await?;

    tracing::info!("Checked in guest {} ({})", guest.id, guest.check_in);
    Ok(guest)
}

/// Apply a patch, validating it against the guest as stored when the
/// update runs.
pub async fn handle_update(store: &GuestStore, id: &str, patch: GuestPatch) -> Result<Guest> {
    let guest = store.update_checked(id, patch, validate_patch).await?;

    tracing::info!("Updated guest {}", guest.id);
    Ok(guest)
}

/// Remove a guest. Unknown ids are not an error.
pub async fn handle_delete(store: &GuestStore, id: &str) -> Result<()> {
    store.delete(id).await?;
    tracing::info!("Removed guest {}", id);
    Ok(())
}

/// Export the full roster as of `today`.
pub async fn handle_export(store: &GuestStore, today: NaiveDate) -> Result<CsvExport> {
    let body = store.export_csv().await?;

    Ok(CsvExport {
        file_name: export::file_name(today),
        body,
    })
}

/// Today's date in UTC.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
