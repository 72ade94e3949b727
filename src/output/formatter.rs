use std::path::Path;

use crate::projector::row_projector::ProjectedRow;

/// Rows per INSERT statement in the batched artifact.
pub const BATCH_SIZE: usize = 10;

const LIGHT_HEADER: &str = "-- Light import (No images) - Works everywhere\n";
const BATCHED_HEADER: &str =
    "-- Batched import (With images) - Run these chunks one by one if too large\n";
const INSERT_PREAMBLE: &str = "INSERT INTO vehicles (id, company_id, name, plate, image, status, \
                               color, vin, tech_passport, tariffs)\nVALUES\n";

/// Render the single-statement, image-stripped artifact.
///
/// An empty row set still renders the header and preamble followed by a
/// bare `;`, matching the source tool.
pub fn render_light(rows: &[ProjectedRow]) -> String {
    let mut out = String::new();
    out.push_str(LIGHT_HEADER);
    out.push_str(INSERT_PREAMBLE);
    out.push_str(&join_rows(rows));
    out.push(';');
    out
}

/// Render the chunked artifact: one INSERT per batch of [`BATCH_SIZE`]
/// projected rows, each preceded by a 1-based `-- Batch <n>` marker and
/// followed by a blank line. An empty row set renders the header only.
pub fn render_batched(rows: &[ProjectedRow]) -> String {
    let mut out = String::new();
    out.push_str(BATCHED_HEADER);
    for (index, batch) in rows.chunks(BATCH_SIZE).enumerate() {
        out.push_str(&format!("-- Batch {}\n", index + 1));
        out.push_str(INSERT_PREAMBLE);
        out.push_str(&join_rows(batch));
        out.push_str(";\n\n");
    }
    out
}

/// Write both artifacts to their destination paths.
pub fn write_outputs(
    no_images_path: &Path,
    no_images_sql: &str,
    batched_path: &Path,
    batched_sql: &str,
) -> Result<(), String> {
    std::fs::write(no_images_path, no_images_sql)
        .map_err(|e| format!("Failed to write {}: {e}", no_images_path.display()))?;
    std::fs::write(batched_path, batched_sql)
        .map_err(|e| format!("Failed to write {}: {e}", batched_path.display()))?;
    Ok(())
}

fn join_rows(rows: &[ProjectedRow]) -> String {
    rows.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",\n")
}
