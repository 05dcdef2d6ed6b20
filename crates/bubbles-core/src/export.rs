//! CSV export of the vote tally.

use crate::catalog::Genre;
use crate::constants::{CSV_HEADER, CSV_MIME, EXPORT_FILE_PREFIX};
use crate::votes::VoteTally;
use chrono::NaiveDateTime;
use std::borrow::Cow;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub mime: &'static str,
    pub contents: String,
}

/// Quote a field when it contains a comma, quote or line break.
pub fn csv_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn push_row(out: &mut String, cells: &[&str]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&csv_field(cell));
    }
    out.push_str("\r\n");
}

pub fn tally_to_csv(catalog: &[Genre], tally: &VoteTally) -> String {
    let mut out = String::new();
    push_row(&mut out, &CSV_HEADER);
    for g in catalog {
        let votes = tally.count(g.key).to_string();
        push_row(&mut out, &[g.key, g.label, &votes]);
    }
    out
}

pub fn export_filename(at: NaiveDateTime) -> String {
    format!("{}{}.csv", EXPORT_FILE_PREFIX, at.format("%Y%m%d_%H%M%S"))
}

pub fn export_file(catalog: &[Genre], tally: &VoteTally, at: NaiveDateTime) -> ExportFile {
    ExportFile {
        filename: export_filename(at),
        mime: CSV_MIME,
        contents: tally_to_csv(catalog, tally),
    }
}

/// Cosmetic passphrase check in front of export. Not a security boundary.
///
/// With no expected passphrase every request passes; a cancelled prompt
/// (`None`) never does.
pub fn passphrase_accepts(expected: Option<&str>, entered: Option<&str>) -> bool {
    match expected {
        None => true,
        Some(want) => entered.map(str::trim) == Some(want),
    }
}
