//! CLI entry point for `mopeds2vehicles`.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use mopeds2vehicles::output::formatter;
use mopeds2vehicles::parser::statement;
use mopeds2vehicles::parser::tuple_extractor;
use mopeds2vehicles::projector::row_projector::{self, ImageMode};

#[derive(Parser)]
#[command(
    name = "mopeds2vehicles",
    about = "Re-emit a mopeds SQL dump as vehicles INSERT statements"
)]
struct Cli {
    /// Source dump containing the mopeds INSERT statement
    #[arg(long, default_value = "mopeds_rows.sql")]
    input: PathBuf,

    /// Destination for the image-stripped variant
    #[arg(long, default_value = "all_mopeds_no_images.sql")]
    no_images_output: PathBuf,

    /// Destination for the batched variant
    #[arg(long, default_value = "all_mopeds_batched.sql")]
    batched_output: PathBuf,

    /// Print per-stage row counts to stderr
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let content = match std::fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {e}", cli.input.display());
            process::exit(2);
        }
    };

    // No matching INSERT statement: nothing to migrate, outputs stay untouched.
    let Some(values) = statement::locate_values(&content) else {
        if cli.verbose {
            eprintln!(
                "No mopeds INSERT statement found in {}",
                cli.input.display()
            );
        }
        return;
    };

    let records = tuple_extractor::extract_tuples(&values);
    if cli.verbose {
        eprintln!("Extracted {} source rows", records.len());
    }

    // Two independent projection passes; replacement ids are not shared
    // between the artifacts.
    let light_rows = row_projector::project_rows(&records, ImageMode::Strip);
    let batched_rows = row_projector::project_rows(&records, ImageMode::Keep);
    if cli.verbose {
        eprintln!(
            "Projected {} rows ({} skipped)",
            light_rows.len(),
            records.len() - light_rows.len()
        );
    }

    let light_sql = formatter::render_light(&light_rows);
    let batched_sql = formatter::render_batched(&batched_rows);

    if let Err(e) = formatter::write_outputs(
        &cli.no_images_output,
        &light_sql,
        &cli.batched_output,
        &batched_sql,
    ) {
        eprintln!("Error writing output: {e}");
        process::exit(2);
    }
}
