//! Solve command - split a DNA volume between fragments at a molar ratio.

use clap::Args;
use serde::Serialize;

use crate::assembly::solver::{solve_volumes, DEFAULT_DNA_VOLUME_UL, DEFAULT_EXCESS_INSERT_RATIO};
use crate::cli::{read_fragments, OutputFormat};
use crate::core::fragment::Fragment;

/// Arguments for the solve command
#[derive(Args)]
pub struct SolveArgs {
    /// Fragments as [<name>,]<conc>[,<length>] separated by ':', backbone first.
    /// Omit or use '-' to enter them interactively
    pub fragments: Option<String>,

    /// Combined volume of all fragments, in µL
    #[arg(short, long, default_value_t = DEFAULT_DNA_VOLUME_UL)]
    pub dna_volume: f64,

    /// Fold-excess of each insert relative to the backbone
    #[arg(short = 'x', long, default_value_t = DEFAULT_EXCESS_INSERT_RATIO)]
    pub excess_insert: f64,
}

#[derive(Serialize)]
struct FragmentRow<'a> {
    name: &'a str,
    stock: String,
    length_bp: Option<u64>,
    conc_nm: f64,
    volume_ul: f64,
}

impl<'a> FragmentRow<'a> {
    fn new(frag: &'a Fragment) -> Self {
        Self {
            name: &frag.name,
            stock: frag.conc.to_string(),
            length_bp: frag.length_bp,
            conc_nm: frag.conc_nm(),
            volume_ul: frag.vol_ul.unwrap_or(0.0),
        }
    }
}

/// Execute the solve command
///
/// # Errors
///
/// Returns an error if the fragments cannot be read or no feasible volumes
/// exist.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: SolveArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut fragments = read_fragments(args.fragments.as_deref())?;

    if verbose {
        eprintln!(
            "Solving {} fragments: {} µL total, {}x excess insert",
            fragments.len(),
            args.dna_volume,
            args.excess_insert
        );
    }

    solve_volumes(&mut fragments, args.dna_volume, args.excess_insert)?;

    let rows: Vec<FragmentRow> = fragments.iter().map(FragmentRow::new).collect();

    match format {
        OutputFormat::Text => print_text(&rows),
        OutputFormat::Json => print_json(&args, &rows)?,
        OutputFormat::Tsv => print_tsv(&rows),
    }

    Ok(())
}

fn print_text(rows: &[FragmentRow]) {
    let name_width = rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0).max(8);

    println!(
        "{:<name_width$}  {:>12}  {:>10}  {:>10}",
        "Fragment", "Stock", "Conc (nM)", "Volume (µL)"
    );
    println!("{}", "=".repeat(name_width + 40));

    for row in rows {
        println!(
            "{:<name_width$}  {:>12}  {:>10.2}  {:>10.2}",
            row.name, row.stock, row.conc_nm, row.volume_ul
        );
    }

    let total: f64 = rows.iter().map(|r| r.volume_ul).sum();
    println!("{}", "-".repeat(name_width + 40));
    println!("{:<name_width$}  {:>12}  {:>10}  {:>10.2}", "Total", "", "", total);
}

fn print_json(args: &SolveArgs, rows: &[FragmentRow]) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "dna_volume_ul": args.dna_volume,
        "excess_insert_ratio": args.excess_insert,
        "fragments": rows,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(rows: &[FragmentRow]) {
    println!("name\tstock\tlength_bp\tconc_nm\tvolume_ul");
    for row in rows {
        println!(
            "{}\t{}\t{}\t{:.4}\t{:.4}",
            row.name,
            row.stock,
            row.length_bp.map(|l| l.to_string()).unwrap_or_default(),
            row.conc_nm,
            row.volume_ul,
        );
    }
}
