//! Command-line interface for assembly-solver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **solve**: Split a DNA volume between fragments at a backbone:insert ratio
//! - **gibson**: Volumes for a Gibson assembly with the NEB master mix
//! - **golden-gate**: Volumes for a Golden Gate assembly
//! - **enzymes**: List the preferred Type IIS enzymes for Golden Gate
//!
//! ## Usage
//!
//! ```text
//! # 70 ng/µL, 1800 bp backbone with a 34 nM insert
//! assembly-solver solve 70,1800:34nM
//!
//! # Enter fragments one field at a time
//! assembly-solver gibson -
//!
//! # JSON output for scripting
//! assembly-solver golden-gate pUC19,25nM:gfp,40nM --enzymes BsaI-HFv2 --format json
//! ```

use std::io::{self, IsTerminal};

use clap::{Parser, Subcommand};

use crate::core::fragment::Fragment;
use crate::parsing::fragments::parse_fragments;
use crate::parsing::interactive::{EditorSource, FragmentCollector, ReaderSource};

pub mod enzymes;
pub mod gibson;
pub mod golden_gate;
pub mod solve;

#[derive(Parser)]
#[command(name = "assembly-solver")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Calculate DNA fragment volumes for Gibson and Golden Gate assemblies")]
#[command(
    long_about = "assembly-solver works out how much of each DNA fragment to add to an assembly reaction.\n\nFragments are given as [<name>,]<conc>[,<length>], separated by ':'. The first fragment is the backbone. Concentrations without a unit are ng/µL and need a length in bp; 'PCR' means an unpurified PCR product at 50 ng/µL.\n\nExample: 70,1800:34nM"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a DNA volume between fragments at a fixed molar ratio
    Solve(solve::SolveArgs),

    /// Plan a Gibson assembly (NEB E2611 master mix)
    Gibson(gibson::GibsonArgs),

    /// Plan a Golden Gate assembly
    GoldenGate(golden_gate::GoldenGateArgs),

    /// List preferred Type IIS enzymes for Golden Gate assembly
    Enzymes,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Fragments from the command line, or interactively when `spec` is missing
/// or `-`.
///
/// # Errors
///
/// Returns an error if the specification is invalid or interactive entry is
/// aborted.
pub fn read_fragments(spec: Option<&str>) -> anyhow::Result<Vec<Fragment>> {
    match spec {
        Some(spec) if spec != "-" => Ok(parse_fragments(spec)?),
        _ => {
            let stderr = io::stderr();
            if io::stdin().is_terminal() {
                let mut source = EditorSource::new()?;
                Ok(FragmentCollector::new(&mut source, stderr).collect()?)
            } else {
                let mut source = ReaderSource::new(io::stdin().lock(), io::stderr());
                Ok(FragmentCollector::new(&mut source, stderr).collect()?)
            }
        }
    }
}
