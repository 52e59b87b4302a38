//! Database operations for the guests table.
//!
//! Every function takes a bare connection so callers can run it inside a
//! transaction (`&mut *tx`) or on a pooled connection (`&mut *conn`).

use chrono::{DateTime, NaiveDate, Utc};
use guestbook_engine::Guest;
use sqlx::{Row, SqliteConnection};

/// A stored guest row from the database.
#[derive(Debug)]
pub struct StoredGuest {
    pub id: String,
    pub name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub room_number: Option<String>,
    pub contact_number: Option<String>,
    pub purpose_of_visit: Option<String>,
    pub id_front_image: Option<String>,
    pub id_back_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> for StoredGuest {
    fn from_row(row: &'r sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(StoredGuest {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            check_in: row.try_get("check_in")?,
            check_out: row.try_get("check_out")?,
            room_number: row.try_get("room_number")?,
            contact_number: row.try_get("contact_number")?,
            purpose_of_visit: row.try_get("purpose_of_visit")?,
            id_front_image: row.try_get("id_front_image")?,
            id_back_image: row.try_get("id_back_image")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl StoredGuest {
    /// Convert database row to an engine Guest.
    pub fn into_guest(self) -> Guest {
        Guest {
            id: self.id,
            name: self.name,
            check_in: self.check_in,
            check_out: self.check_out,
            room_number: self.room_number,
            contact_number: self.contact_number,
            purpose_of_visit: self.purpose_of_visit,
            id_front_image: self.id_front_image,
            id_back_image: self.id_back_image,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Insert a new guest. Fails if the id is already taken.
pub async fn insert_guest(conn: &mut SqliteConnection, guest: &Guest) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO guests (
            id, name, check_in, check_out, room_number, contact_number,
            purpose_of_visit, id_front_image, id_back_image, created_at, updated_at
        )
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
        "#,
    )
    .bind(&guest.id)
    .bind(&guest.name)
    .bind(guest.check_in)
    .bind(guest.check_out)
    .bind(&guest.room_number)
    .bind(&guest.contact_number)
    .bind(&guest.purpose_of_visit)
    .bind(&guest.id_front_image)
    .bind(&guest.id_back_image)
    .bind(guest.created_at)
    .bind(guest.updated_at)
    .execute(conn)
    .await?;

    Ok(())
}

/// Overwrite every mutable column of an existing guest.
///
/// `id` and `created_at` are never written. Returns the number of rows changed.
pub async fn update_guest(conn: &mut SqliteConnection, guest: &Guest) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE guests SET
            name = ?2,
            check_in = ?3,
            check_out = ?4,
            room_number = ?5,
            contact_number = ?6,
            purpose_of_visit = ?7,
            id_front_image = ?8,
            id_back_image = ?9,
            updated_at = ?10
        WHERE id = ?1
        "#,
    )
    .bind(&guest.id)
    .bind(&guest.name)
    .bind(guest.check_in)
    .bind(guest.check_out)
    .bind(&guest.room_number)
    .bind(&guest.contact_number)
    .bind(&guest.purpose_of_visit)
    .bind(&guest.id_front_image)
    .bind(&guest.id_back_image)
    .bind(guest.updated_at)
    .execute(conn)
    .await?;

    Ok(result.rows_affected())
}

/// Delete a guest by ID. Returns the number of rows removed.
pub async fn delete_guest(conn: &mut SqliteConnection, id: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM guests WHERE id = ?1")
        .bind(id)
        .execute(conn)
        .await?;

    Ok(result.rows_affected())
}

/// Get a guest by ID.
pub async fn get_guest(
    conn: &mut SqliteConnection,
    id: &str,
) -> Result<Option<StoredGuest>, sqlx::Error> {
    sqlx::query_as::<_, StoredGuest>(
        r#"
        SELECT id, name, check_in, check_out, room_number, contact_number,
               purpose_of_visit, id_front_image, id_back_image, created_at, updated_at
        FROM guests
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await
}

/// Get all guests in primary key order.
pub async fn get_all_guests(conn: &mut SqliteConnection) -> Result<Vec<StoredGuest>, sqlx::Error> {
    sqlx::query_as::<_, StoredGuest>(
        r#"
        SELECT id, name, check_in, check_out, room_number, contact_number,
               purpose_of_visit, id_front_image, id_back_image, created_at, updated_at
        FROM guests
        ORDER BY id ASC
        "#,
    )
    .fetch_all(conn)
    .await
}

/// Count stored guests.
pub async fn count_guests(conn: &mut SqliteConnection) -> Result<i64, sqlx::Error> {
    let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM guests")
        .fetch_one(conn)
        .await?;

    Ok(result.0)
}
