//! Edge case tests for guestbook-engine
//!
//! These tests cover boundary conditions and unusual inputs.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use guestbook_engine::{
    export, validate_fields, Guest, GuestFields, GuestFilter, GuestPatch, SortDirection,
    SortField,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_735_722_000 + secs, 0).unwrap()
}

fn create_guest(id: &str, name: &str) -> Guest {
    Guest::new(
        id,
        GuestFields::new(name, date(2025, 1, 1), date(2025, 1, 3)),
        at(0),
    )
}

// ============================================================================
// String Edge Cases
// ============================================================================

#[test]
fn empty_name_is_accepted_by_the_model() {
    // The model stores what it is given; only validation rejects it
    let guest = create_guest("g1", "");
    assert_eq!(guest.name, "");
    assert!(validate_fields(&guest.fields()).is_err());
}

#[test]
fn unicode_names_are_searchable() {
    let names = vec![
        "日本語テスト",
        "Привет мир",
        "مرحبا بالعالم",
        "🎉🚀💯",
        "Ünïcödé Gäst",
    ];

    let guests: Vec<Guest> = names
        .iter()
        .enumerate()
        .map(|(i, name)| create_guest(&format!("g{}", i), name))
        .collect();

    let result = GuestFilter::new().search("привет").apply(guests.clone());
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Привет мир");

    let result = GuestFilter::new().search("ÜNÏ").apply(guests);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "g4");
}

#[test]
fn very_long_strings() {
    // 1MB purpose of visit
    let long_string = "x".repeat(1024 * 1024);

    let mut guest = create_guest("g1", "Jane Doe");
    guest.apply_patch(
        GuestPatch {
            purpose_of_visit: Some(long_string.clone()),
            ..Default::default()
        },
        at(10),
    );

    assert_eq!(guest.purpose_of_visit.as_ref().unwrap().len(), 1024 * 1024);
    assert_eq!(GuestFilter::new().search("xxx").apply(vec![guest]).len(), 1);
}

#[test]
fn search_text_with_regex_metacharacters_is_literal() {
    let guests = vec![
        create_guest("g1", "Room (A)"),
        create_guest("g2", "Room A"),
    ];

    let result = GuestFilter::new().search("(a)").apply(guests);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "g1");
}

// ============================================================================
// Date Edge Cases
// ============================================================================

#[test]
fn dates_sort_chronologically_not_lexically() {
    let mut guests = vec![
        create_guest("g1", "A"),
        create_guest("g2", "B"),
        create_guest("g3", "C"),
    ];
    guests[0].check_in = date(2025, 10, 1);
    guests[1].check_in = date(2025, 9, 30);
    guests[2].check_in = date(2024, 12, 31);

    let result = GuestFilter::new()
        .sort_by(SortField::CheckIn, SortDirection::Ascending)
        .apply(guests);

    let ids: Vec<_> = result.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, vec!["g3", "g2", "g1"]);
}

#[test]
fn leap_day_stay() {
    let guest = Guest::new(
        "g1",
        GuestFields::new("Jane Doe", date(2024, 2, 28), date(2024, 3, 1)),
        at(0),
    );
    assert_eq!(guest.nights(), 2);

    let csv = export::to_csv(&[guest]);
    assert!(csv.contains("2024-02-28,2024-03-01"));
}

// ============================================================================
// Update Edge Cases
// ============================================================================

#[test]
fn rapid_updates_same_record() {
    let mut guest = create_guest("g1", "Jane Doe");

    // 100 updates at the same instant
    for i in 0..100 {
        guest.apply_patch(
            GuestPatch {
                room_number: Some(format!("{}", i)),
                ..Default::default()
            },
            at(0),
        );
    }

    assert_eq!(guest.room_number.as_deref(), Some("99"));
    assert_eq!(guest.created_at, at(0));
    assert!(guest.updated_at > guest.created_at);
}

#[test]
fn full_patch_replaces_everything_but_identity() {
    let mut guest = create_guest("g1", "Jane Doe");
    let replacement = GuestFields::new("John Roe", date(2025, 2, 1), date(2025, 2, 5))
        .with_room_number("7")
        .with_contact_number("+1 555 0100")
        .with_purpose_of_visit("Conference");

    let patch = GuestPatch {
        name: Some(replacement.name.clone()),
        check_in: Some(replacement.check_in),
        check_out: Some(replacement.check_out),
        room_number: replacement.room_number.clone(),
        contact_number: replacement.contact_number.clone(),
        purpose_of_visit: replacement.purpose_of_visit.clone(),
        ..Default::default()
    };
    guest.apply_patch(patch, at(30));

    assert_eq!(guest.id, "g1");
    assert_eq!(guest.created_at, at(0));
    assert_eq!(guest.fields(), replacement);
}

// ============================================================================
// Export Edge Cases
// ============================================================================

#[test]
fn export_with_line_breaks_and_quotes() {
    let mut guest = create_guest("g1", "Jane \"JD\" Doe");
    guest.purpose_of_visit = Some("line one\r\nline two".into());

    let csv = export::to_csv(&[guest]);

    assert!(csv.contains("\"Jane \"\"JD\"\" Doe\""));
    assert!(csv.contains("\"line one\r\nline two\""));
}

#[test]
fn export_never_writes_placeholders() {
    let csv = export::to_csv(&[create_guest("g1", "Jane Doe")]);

    assert!(!csv.contains("undefined"));
    assert!(!csv.contains("null"));
    assert!(!csv.contains("None"));
}

#[test]
fn export_omits_images_and_ids() {
    let mut guest = create_guest("secret-id", "Jane Doe");
    guest.id_front_image = Some("data:image/png;base64,AAAA".into());

    let csv = export::to_csv(&[guest]);

    assert!(!csv.contains("secret-id"));
    assert!(!csv.contains("data:image"));
}
