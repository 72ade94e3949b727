use std::fmt;

use uuid::Uuid;

use crate::parser::tuple_extractor::RawRow;

/// Statuses the destination schema accepts; anything else clamps to
/// `'available'`.
pub const KNOWN_STATUSES: [&str; 3] = ["available", "rented", "maintenance"];

/// Source rows narrower than this are dropped without projection.
pub const MIN_SOURCE_FIELDS: usize = 15;

/// Minimum quote-stripped character count for a source id to be kept;
/// shorter values are replaced by a fresh random UUID literal.
const MIN_ID_LENGTH: usize = 10;

/// Whether image literals are blanked or carried through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMode {
    /// Replace every image with an empty string literal.
    Strip,
    /// Pass the source image literal through verbatim.
    Keep,
}

/// One row in `vehicles` column order, ready to serialize.
///
/// The constant columns (`company_id = 'scoots'`, `tariffs = '[]'::jsonb`)
/// are supplied by the `Display` impl rather than stored per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedRow {
    /// Vehicle identifier literal, quoted.
    pub id: String,
    /// Brand and model joined by a single space, re-quoted.
    pub name: String,
    /// Plate literal, verbatim from the source.
    pub plate: String,
    /// Image literal; `''` when stripped.
    pub image: String,
    /// Status literal, clamped to [`KNOWN_STATUSES`].
    pub status: String,
    /// Color literal, verbatim from the source.
    pub color: String,
    /// VIN literal, verbatim from the source.
    pub vin: String,
    /// Tech passport literal, verbatim from the source.
    pub tech_passport: String,
}

impl fmt::Display for ProjectedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, 'scoots', {}, {}, {}, {}, {}, {}, {}, '[]'::jsonb)",
            self.id,
            self.name,
            self.plate,
            self.image,
            self.status,
            self.color,
            self.vin,
            self.tech_passport
        )
    }
}

/// Project one extracted row onto the destination layout.
///
/// Returns `None` for rows with fewer than [`MIN_SOURCE_FIELDS`] fields;
/// callers drop those silently.
pub fn project_row(row: &RawRow, mode: ImageMode) -> Option<ProjectedRow> {
    if row.len() < MIN_SOURCE_FIELDS {
        return None;
    }

    let id = if strip_quotes(&row[0]).chars().count() < MIN_ID_LENGTH {
        format!("'{}'", Uuid::new_v4())
    } else {
        row[0].clone()
    };
    let name = format!("'{} {}'", strip_quotes(&row[1]), strip_quotes(&row[2]));
    let status = if KNOWN_STATUSES.contains(&strip_quotes(&row[5])) {
        row[5].clone()
    } else {
        "'available'".to_string()
    };
    let image = match mode {
        ImageMode::Strip => "''".to_string(),
        ImageMode::Keep => row[4].clone(),
    };

    Some(ProjectedRow {
        id,
        name,
        plate: row[3].clone(),
        image,
        status,
        color: row[10].clone(),
        vin: row[9].clone(),
        tech_passport: row[8].clone(),
    })
}

/// Project every extracted row, dropping under-width rows.
pub fn project_rows(rows: &[RawRow], mode: ImageMode) -> Vec<ProjectedRow> {
    rows.iter().filter_map(|row| project_row(row, mode)).collect()
}

/// Strip any run of `'` from both ends of a literal.
fn strip_quotes(literal: &str) -> &str {
    literal.trim_matches('\'')
}
