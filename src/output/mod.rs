/// Renders the light and batched artifacts and writes them to disk.
pub mod formatter;
