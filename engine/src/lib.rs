//! # Guestbook Engine
//!
//! The pure core of the guest registry: the guest record model, the query
//! engine used for listing, the CSV exporter and the form-level validation
//! rules.
//!
//! ## Design Principles
//!
//! - **No IO**: the engine never touches files, sockets or the clock
//! - **Deterministic**: callers pass the current time in, so the same inputs
//!   always produce the same outputs
//! - **Testable**: pure functions over plain data, no mocks needed
//!
//! Persistence lives in `guestbook-server`, which stores [`Guest`] records and
//! pipes them through [`GuestFilter`] and [`export::to_csv`].
//!
//! ## Core Concepts
//!
//! ### Records
//!
//! A [`Guest`] is one stay: who, when, which room, plus optional contact
//! details and scanned ID images stored as data URIs. New guests are built from
//! [`GuestFields`]; edits are expressed as a [`GuestPatch`] where every absent
//! field is left untouched.
//!
//! ### Queries
//!
//! A [`GuestFilter`] narrows a record set by a case-insensitive search over
//! name, room and purpose of visit, then orders it with a stable sort on any
//! [`SortField`].
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{NaiveDate, TimeZone, Utc};
//! use guestbook_engine::{export, Guest, GuestFields, GuestFilter, SortDirection, SortField};
//!
//! let now = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
//! let fields = GuestFields::new(
//!     "Jane Doe",
//!     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
//! )
//! .with_room_number("12");
//!
//! let guest = Guest::new("guest-1", fields, now);
//!
//! let filter = GuestFilter::new()
//!     .search("jane")
//!     .sort_by(SortField::CheckIn, SortDirection::Ascending);
//! let listed = filter.apply(vec![guest]);
//! assert_eq!(listed.len(), 1);
//!
//! let csv = export::to_csv(&listed);
//! assert_eq!(csv.lines().count(), 2);
//! ```

pub mod error;
pub mod export;
pub mod guest;
pub mod query;
pub mod validate;

// Re-export main types at crate root
pub use error::Error;
pub use guest::{Guest, GuestFields, GuestPatch};
pub use query::{GuestFilter, SortDirection, SortField};
pub use validate::{validate_fields, validate_patch};

/// Identifier assigned to a guest by the store.
pub type GuestId = String;
/// Wall-clock timestamp for record metadata.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
