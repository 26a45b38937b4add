//! Enzymes command - list preferred Type IIS enzymes.

use crate::assembly::golden_gate::PREFERRED_ENZYMES;
use crate::cli::OutputFormat;

/// Execute the enzymes command
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text | OutputFormat::Tsv => {
            for enzyme in PREFERRED_ENZYMES {
                println!("{enzyme}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&PREFERRED_ENZYMES)?),
    }

    Ok(())
}
