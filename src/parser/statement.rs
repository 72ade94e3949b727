use regex::Regex;

/// Locating pattern for the source statement. Table name and quoting must
/// match exactly; the value list is captured through the final `;`.
const INSERT_PATTERN: &str = r#"(?is)INSERT INTO "public"\."mopeds" \([^)]+\) VALUES\s*(.*);"#;

/// Extract the text between `VALUES` and the terminating `;` of the mopeds
/// INSERT statement.
///
/// Returns `None` when no matching statement is present; callers treat that
/// as a silent no-op and leave the output files untouched.
pub fn locate_values(sql: &str) -> Option<String> {
    let insert = Regex::new(INSERT_PATTERN).ok()?;
    let captures = insert.captures(sql)?;
    Some(captures.get(1)?.as_str().trim().to_string())
}
