//! Gibson command - dose each fragment for an NEB Gibson assembly.

use clap::Args;

use crate::assembly::gibson::{GibsonConfig, GibsonReaction, DEFAULT_REACTION_VOLUME_UL};
use crate::cli::{read_fragments, OutputFormat};

/// Arguments for the gibson command
#[derive(Args)]
pub struct GibsonArgs {
    /// Fragments as [<name>,]<conc>[,<length>] separated by ':', backbone first.
    /// Omit or use '-' to enter them interactively
    pub fragments: Option<String>,

    /// Volume of the complete Gibson reaction, in µL
    #[arg(short, long, default_value_t = DEFAULT_REACTION_VOLUME_UL)]
    pub reaction_volume: f64,

    /// Maximum combined volume of backbone and insert DNA, in µL.
    /// Defaults to half the reaction volume
    #[arg(short, long)]
    pub dna_volume: Option<f64>,
}

/// Execute the gibson command
///
/// # Errors
///
/// Returns an error if the fragments cannot be read or the reaction cannot be
/// planned.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: GibsonArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut fragments = read_fragments(args.fragments.as_deref())?;

    let config = GibsonConfig {
        reaction_volume_ul: args.reaction_volume,
        dna_volume_ul: args.dna_volume,
    };
    let reaction = GibsonReaction::plan(&mut fragments, &config)?;

    if verbose {
        eprintln!(
            "Targeting {} pmol per fragment (minimum {} pmol)",
            reaction.recommendation.target_pmol, reaction.recommendation.min_pmol
        );
    }

    match format {
        OutputFormat::Text => print_text(&reaction),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reaction)?),
        OutputFormat::Tsv => print_tsv(&reaction),
    }

    Ok(())
}

fn print_text(reaction: &GibsonReaction) {
    println!("Gibson Assembly ({} µL)", reaction.reaction_volume_ul);
    println!("{}", "=".repeat(48));

    for dose in &reaction.doses {
        let flag = if dose.below_minimum { "  below minimum" } else { "" };
        println!(
            "  {:<28} {:>7.2} µL  ({:.3} pmol){flag}",
            dose.name, dose.volume_ul, dose.pmol
        );
    }
    if reaction.water_ul > 0.0 {
        println!("  {:<28} {:>7.2} µL", "Water", reaction.water_ul);
    }
    println!(
        "  {:<28} {:>7.2} µL",
        "Gibson master mix (NEB E2611)", reaction.master_mix_ul
    );

    println!("\nIncubation: 50°C for {}", reaction.recommendation.incubation);
}

fn print_tsv(reaction: &GibsonReaction) {
    println!("name\tconc_nm\tvolume_ul\tpmol\tbelow_minimum");
    for dose in &reaction.doses {
        println!(
            "{}\t{:.4}\t{:.4}\t{:.4}\t{}",
            dose.name, dose.conc_nm, dose.volume_ul, dose.pmol, dose.below_minimum
        );
    }
}
