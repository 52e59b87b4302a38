//! GuestStore - durable CRUD over the guest collection.
//!
//! The store is opened lazily on first use and reused for the life of the
//! process. Every write runs in its own transaction and is committed before
//! the call returns; a failed write leaves nothing behind.

use super::{create_pool, guests as db, run_migrations, Pool};
use chrono::Utc;
use guestbook_engine::{export, Guest, GuestFields, GuestFilter, GuestId, GuestPatch};
use std::time::Duration;
use tokio::sync::OnceCell;
use uuid::Uuid;

/// Default time to wait for the database before failing an operation.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Failures reported by [`GuestStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[source] sqlx::Error),

    #[error("guest not found: {0}")]
    NotFound(GuestId),

    #[error("write failed: {0}")]
    WriteFailed(#[source] sqlx::Error),

    #[error("delete failed: {0}")]
    DeleteFailed(#[source] sqlx::Error),

    #[error("read failed: {0}")]
    ReadFailed(#[source] sqlx::Error),

    #[error("update rejected: {0}")]
    Rejected(#[source] guestbook_engine::Error),
}

/// Durable store of guest records.
#[derive(Debug)]
pub struct GuestStore {
    database_url: String,
    timeout: Duration,
    pool: OnceCell<Pool>,
}

impl GuestStore {
    /// Create a store for `database_url`. Nothing is opened until first use.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            timeout: DEFAULT_TIMEOUT,
            pool: OnceCell::new(),
        }
    }

    /// Bound how long an operation may wait on the database.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check whether the database has been opened.
    pub fn is_initialized(&self) -> bool {
        self.pool.initialized()
    }

    /// Open the database and apply the schema.
    ///
    /// Safe to call repeatedly and concurrently: callers racing the first
    /// initialization all wait on the same attempt. A failed attempt is not
    /// cached, so a later call retries.
    pub async fn init(&self) -> Result<(), StoreError> {
        self.pool().await.map(|_| ())
    }

    async fn pool(&self) -> Result<&Pool, StoreError> {
        self.pool
            .get_or_try_init(|| async {
                tracing::info!("Opening guest database at {}", self.database_url);

                let pool = create_pool(&self.database_url, self.timeout)
                    .await
                    .map_err(|e| {
                        tracing::error!("Failed to open guest database: {}", e);
                        StoreError::StorageUnavailable(e)
                    })?;

                if let Err(e) = run_migrations(&pool).await {
                    tracing::error!("Failed to apply guest schema: {}", e);
                    pool.close().await;
                    return Err(StoreError::StorageUnavailable(sqlx::Error::Migrate(
                        Box::new(e),
                    )));
                }

                tracing::info!("Guest database ready");
                Ok(pool)
            })
            .await
    }

    /// Persist a new guest, assigning its id and timestamps.
    pub async fn add(&self, fields: GuestFields) -> Result<Guest, StoreError> {
        let pool = self.pool().await?;
        let guest = Guest::new(Uuid::new_v4().to_string(), fields, Utc::now());

        let mut tx = pool.begin().await.map_err(StoreError::WriteFailed)?;
        db::insert_guest(&mut *tx, &guest)
            .await
            .map_err(StoreError::WriteFailed)?;
        tx.commit().await.map_err(StoreError::WriteFailed)?;

        tracing::debug!(id = %guest.id, "Guest added");
        Ok(guest)
    }

    /// Merge `patch` over an existing guest and persist the result.
    ///
    /// The read and the write share one transaction, so a concurrent update
    /// to the same guest is applied either entirely before or entirely after.
    pub async fn update(&self, id: &str, patch: GuestPatch) -> Result<Guest, StoreError> {
        self.update_checked(id, patch, |_, _| Ok(())).await
    }

    /// Like [`update`](Self::update), but runs `check` against the stored
    /// guest inside the transaction before merging. A failed check rolls
    /// back and is reported as [`StoreError::Rejected`].
    pub async fn update_checked<F>(
        &self,
        id: &str,
        patch: GuestPatch,
        check: F,
    ) -> Result<Guest, StoreError>
    where
        F: FnOnce(&Guest, &GuestPatch) -> guestbook_engine::error::Result<()>,
    {
        let pool = self.pool().await?;

        let mut tx = pool.begin().await.map_err(StoreError::WriteFailed)?;
        let Some(stored) = db::get_guest(&mut *tx, id)
            .await
            .map_err(StoreError::WriteFailed)?
        else {
            // Dropping the transaction rolls it back
            return Err(StoreError::NotFound(id.to_string()));
        };

        let mut guest = stored.into_guest();
        check(&guest, &patch).map_err(StoreError::Rejected)?;
        guest.apply_patch(patch, Utc::now());

        db::update_guest(&mut *tx, &guest)
            .await
            .map_err(StoreError::WriteFailed)?;
        tx.commit().await.map_err(StoreError::WriteFailed)?;

        tracing::debug!(id = %guest.id, "Guest updated");
        Ok(guest)
    }

    /// Permanently remove a guest. Removing an unknown id succeeds.
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let pool = self.pool().await?;

        let mut tx = pool.begin().await.map_err(StoreError::DeleteFailed)?;
        let removed = db::delete_guest(&mut *tx, id)
            .await
            .map_err(StoreError::DeleteFailed)?;
        tx.commit().await.map_err(StoreError::DeleteFailed)?;

        if removed == 0 {
            tracing::debug!(id, "Delete of unknown guest ignored");
        } else {
            tracing::debug!(id, "Guest deleted");
        }
        Ok(())
    }

    /// Get a guest by id.
    pub async fn get(&self, id: &str) -> Result<Option<Guest>, StoreError> {
        let pool = self.pool().await?;
        let mut conn = pool.acquire().await.map_err(StoreError::ReadFailed)?;

        let stored = db::get_guest(&mut *conn, id)
            .await
            .map_err(StoreError::ReadFailed)?;
        Ok(stored.map(db::StoredGuest::into_guest))
    }

    /// Get every guest, optionally filtered and sorted.
    ///
    /// Without a filter, guests come back in primary key order.
    pub async fn get_all(&self, filter: Option<&GuestFilter>) -> Result<Vec<Guest>, StoreError> {
        let pool = self.pool().await?;
        let mut conn = pool.acquire().await.map_err(StoreError::ReadFailed)?;

        let guests: Vec<Guest> = db::get_all_guests(&mut *conn)
            .await
            .map_err(StoreError::ReadFailed)?
            .into_iter()
            .map(db::StoredGuest::into_guest)
            .collect();

        Ok(match filter {
            Some(filter) => filter.apply(guests),
            None => guests,
        })
    }

    /// Number of stored guests.
    pub async fn count(&self) -> Result<usize, StoreError> {
        let pool = self.pool().await?;
        let mut conn = pool.acquire().await.map_err(StoreError::ReadFailed)?;

        let count = db::count_guests(&mut *conn)
            .await
            .map_err(StoreError::ReadFailed)?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    /// Render the full roster as CSV.
    pub async fn export_csv(&self) -> Result<String, StoreError> {
        let guests = self.get_all(None).await?;
        Ok(export::to_csv(&guests))
    }

    /// Close the database connection, if one was opened.
    pub async fn close(&self) {
        if let Some(pool) = self.pool.get() {
            pool.close().await;
            tracing::info!("Guest database closed");
        }
    }
}
