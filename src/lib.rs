//! Re-emit a `PostgreSQL` mopeds dump as `vehicles` INSERT statements.
//!
//! Reads a single `INSERT INTO "public"."mopeds" ... VALUES ...;` statement,
//! splits its value list into row tuples, and writes two artifacts for the
//! `vehicles` table: a light variant with images stripped and a batched
//! variant that keeps images but chunks the rows into fixed-size INSERTs.
#![warn(missing_docs)]

/// SQL artifact rendering and file output.
pub mod output;
/// Statement location and value-tuple extraction.
pub mod parser;
/// Row projection onto the `vehicles` column layout.
pub mod projector;
