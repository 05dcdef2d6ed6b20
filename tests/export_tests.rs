// Host-side tests for CSV export and the cosmetic export gate.

use bubbles_core::{
    csv_field, export_file, export_filename, passphrase_accepts, tally_to_csv, Genre, Rgb,
    VoteTally, GENRES,
};
use chrono::NaiveDate;

static COMMA_CATALOG: &[Genre] = &[
    Genre {
        key: "house",
        label: "House",
        color: Rgb(0xff, 0xb3, 0x47),
    },
    Genre {
        key: "dnb",
        label: "Drum, Bass",
        color: Rgb(0x00, 0xd4, 0xa6),
    },
    Genre {
        key: "quoted",
        label: "The \"Hard\" One",
        color: Rgb(0x10, 0x20, 0x30),
    },
];

#[test]
fn header_and_rows_follow_catalog_order() {
    let mut tally = VoteTally::zeroed(GENRES);
    for _ in 0..3 {
        tally.increment("house");
    }
    let csv = tally_to_csv(GENRES, &tally);
    let rows: Vec<&str> = csv.split("\r\n").collect();

    assert_eq!(rows[0], "genre_key,genre_label,votes");
    assert_eq!(rows[1], "house,House,3");
    assert_eq!(rows[2], "trance,Trance,0");
    assert_eq!(rows.len(), GENRES.len() + 2); // trailing CRLF leaves an empty tail
    assert_eq!(rows.last(), Some(&""));
    for (row, g) in rows[1..=GENRES.len()].iter().zip(GENRES) {
        let votes = row.rsplit(',').next().unwrap();
        assert_eq!(votes, tally.count(g.key).to_string());
    }
}

#[test]
fn rows_end_with_crlf() {
    let csv = tally_to_csv(GENRES, &VoteTally::zeroed(GENRES));
    assert!(csv.ends_with("\r\n"));
    assert_eq!(csv.matches("\r\n").count(), GENRES.len() + 1);
    assert!(!csv.replace("\r\n", "").contains('\n'));
}

#[test]
fn fields_with_commas_and_quotes_are_quoted() {
    assert_eq!(csv_field("Drum, Bass"), "\"Drum, Bass\"");
    assert_eq!(csv_field("The \"Hard\" One"), "\"The \"\"Hard\"\" One\"");
    assert_eq!(csv_field("line\nbreak"), "\"line\nbreak\"");
    assert_eq!(csv_field("Drum & Bass"), "Drum & Bass");
}

#[test]
fn quoted_labels_in_export() {
    let mut tally = VoteTally::zeroed(COMMA_CATALOG);
    tally.increment("dnb");
    let csv = tally_to_csv(COMMA_CATALOG, &tally);
    assert!(csv.contains("dnb,\"Drum, Bass\",1\r\n"));
    assert!(csv.contains("quoted,\"The \"\"Hard\"\" One\",0\r\n"));
}

#[test]
fn filename_embeds_timestamp() {
    let at = NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_opt(7, 8, 9)
        .unwrap();
    assert_eq!(export_filename(at), "genre_votes_20240305_070809.csv");

    let file = export_file(GENRES, &VoteTally::zeroed(GENRES), at);
    assert_eq!(file.filename, "genre_votes_20240305_070809.csv");
    assert_eq!(file.mime, "text/csv;charset=utf-8");
    assert!(file.contents.starts_with("genre_key,genre_label,votes\r\n"));
}

#[test]
fn passphrase_gate_is_optional() {
    assert!(passphrase_accepts(None, None));
    assert!(passphrase_accepts(None, Some("anything")));
    assert!(passphrase_accepts(Some("open"), Some("open")));
    assert!(passphrase_accepts(Some("open"), Some(" open ")));
    assert!(!passphrase_accepts(Some("open"), Some("closed")));
    assert!(!passphrase_accepts(Some("open"), None));
}
