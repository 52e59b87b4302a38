//! CSV export of the guest roster.
//!
//! Output is RFC 4180 compatible: comma separated, cells quoted only when
//! they contain a comma, quote or line break, rows joined with `\n`.

use crate::{Guest, Timestamp};
use chrono::{NaiveDate, SecondsFormat};

/// Column headers, in output order.
pub const HEADERS: [&str; 8] = [
    "Name",
    "Check-in Date",
    "Check-out Date",
    "Room Number",
    "Contact Number",
    "Purpose of Visit",
    "Created At",
    "Updated At",
];

/// Render guests as CSV text: a header row plus one row per guest.
pub fn to_csv(guests: &[Guest]) -> String {
    let mut out = String::with_capacity(64 * (guests.len() + 1));
    push_row(&mut out, HEADERS.iter().copied());

    for guest in guests {
        out.push('\n');
        let check_in = format_date(guest.check_in);
        let check_out = format_date(guest.check_out);
        let created_at = format_timestamp(guest.created_at);
        let updated_at = format_timestamp(guest.updated_at);

        push_row(
            &mut out,
            [
                guest.name.as_str(),
                check_in.as_str(),
                check_out.as_str(),
                guest.room_number.as_deref().unwrap_or_default(),
                guest.contact_number.as_deref().unwrap_or_default(),
                guest.purpose_of_visit.as_deref().unwrap_or_default(),
                created_at.as_str(),
                updated_at.as_str(),
            ],
        );
    }

    out
}

/// Download name for an export taken on `date`.
pub fn file_name(date: NaiveDate) -> String {
    format!("guests-{}.csv", format_date(date))
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn format_timestamp(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn push_row<'a>(out: &mut String, cells: impl IntoIterator<Item = &'a str>) {
    for (i, cell) in cells.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_cell(out, cell);
    }
}

fn push_cell(out: &mut String, cell: &str) {
    if !cell.contains([',', '"', '\n', '\r']) {
        out.push_str(cell);
        return;
    }

    out.push('"');
    for ch in cell.chars() {
        if ch == '"' {
            out.push('"');
        }
        out.push(ch);
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GuestFields;
    use chrono::{TimeZone, Utc};

    fn guest(name: &str) -> Guest {
        Guest::new(
            "guest-1",
            GuestFields::new(
                name,
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
            ),
            Utc.with_ymd_and_hms(2025, 1, 1, 9, 30, 0).unwrap(),
        )
    }

    #[test]
    fn header_only_for_empty_roster() {
        assert_eq!(
            to_csv(&[]),
            "Name,Check-in Date,Check-out Date,Room Number,Contact Number,Purpose of Visit,Created At,Updated At"
        );
    }

    #[test]
    fn row_layout() {
        let mut jane = guest("Jane Doe");
        jane.room_number = Some("12".into());
        jane.purpose_of_visit = Some("Business".into());

        let csv = to_csv(&[jane]);
        let row = csv.lines().nth(1).unwrap();

        assert_eq!(
            row,
            "Jane Doe,2025-01-01,2025-01-03,12,,Business,2025-01-01T09:30:00Z,2025-01-01T09:30:00Z"
        );
    }

    #[test]
    fn quotes_cells_with_delimiters() {
        let mut guest = guest("Doe, Jane");
        guest.purpose_of_visit = Some("Said \"hi\"\nthen left".into());

        let csv = to_csv(&[guest]);

        assert!(csv.contains("\"Doe, Jane\","));
        assert!(csv.contains("\"Said \"\"hi\"\"\nthen left\""));
    }

    #[test]
    fn missing_optionals_are_empty_cells() {
        let csv = to_csv(&[guest("Jane Doe")]);
        let row = csv.lines().nth(1).unwrap();

        assert_eq!(row.split(',').count(), HEADERS.len());
        assert!(row.contains(",,,,"));
    }

    #[test]
    fn export_file_name() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(file_name(date), "guests-2025-03-07.csv");
    }
}
