//! Golden Gate command - fit fragments around the fixed reagent volumes.

use clap::Args;

use crate::assembly::golden_gate::{
    GoldenGateConfig, GoldenGateReaction, DEFAULT_REACTION_VOLUME_UL, GENERIC_ENZYME,
};
use crate::assembly::solver::DEFAULT_EXCESS_INSERT_RATIO;
use crate::cli::{read_fragments, OutputFormat};

/// Arguments for the golden-gate command
#[derive(Args)]
pub struct GoldenGateArgs {
    /// Fragments as [<name>,]<conc>[,<length>] separated by ':', backbone first.
    /// Omit or use '-' to enter them interactively
    pub fragments: Option<String>,

    /// Type IIS enzyme(s) to use, comma-separated
    #[arg(short, long, value_delimiter = ',', default_value = GENERIC_ENZYME)]
    pub enzymes: Vec<String>,

    /// Volume of the complete Golden Gate reaction, in µL
    #[arg(short, long, default_value_t = DEFAULT_REACTION_VOLUME_UL)]
    pub reaction_volume: f64,

    /// Combined volume of backbone and insert DNA, in µL.
    /// Defaults to everything left after enzymes and buffer
    #[arg(short, long)]
    pub dna_volume: Option<f64>,

    /// Fold-excess of each insert relative to the backbone
    #[arg(short = 'x', long, default_value_t = DEFAULT_EXCESS_INSERT_RATIO)]
    pub excess_insert: f64,
}

/// Execute the golden-gate command
///
/// # Errors
///
/// Returns an error if the fragments cannot be read or the reaction cannot be
/// planned.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: GoldenGateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = GoldenGateConfig {
        reaction_volume_ul: args.reaction_volume,
        dna_volume_ul: args.dna_volume,
        excess_insert_ratio: args.excess_insert,
        enzymes: args.enzymes.clone(),
    };

    if verbose {
        eprintln!(
            "Up to {} µL of DNA fits in a {} µL reaction with {} enzyme(s)",
            config.max_dna_volume_ul(),
            config.reaction_volume_ul,
            config.enzymes.len()
        );
    }

    let mut fragments = read_fragments(args.fragments.as_deref())?;
    let reaction = GoldenGateReaction::plan(&mut fragments, &config)?;

    match format {
        OutputFormat::Text => print_text(&reaction),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reaction)?),
        OutputFormat::Tsv => print_tsv(&reaction),
    }

    Ok(())
}

fn print_text(reaction: &GoldenGateReaction) {
    println!("Golden Gate Assembly ({} µL)", reaction.reaction_volume_ul);
    println!("{}", "=".repeat(52));

    for component in &reaction.components {
        println!(
            "  {:<24} {:>7.2} µL  {}",
            component.name,
            component.volume_ul,
            component.stock.as_deref().unwrap_or("")
        );
    }

    let total: f64 = reaction.components.iter().map(|c| c.volume_ul).sum();
    println!("{}", "-".repeat(52));
    println!("  {:<24} {:>7.2} µL", "Total", total);
}

fn print_tsv(reaction: &GoldenGateReaction) {
    println!("name\tvolume_ul\tstock");
    for component in &reaction.components {
        println!(
            "{}\t{:.4}\t{}",
            component.name,
            component.volume_ul,
            component.stock.as_deref().unwrap_or("")
        );
    }
}
