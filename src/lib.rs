//! # assembly-solver
//!
//! A library for working out how much of each DNA fragment to add to an
//! assembly reaction.
//!
//! Gibson and Golden Gate assemblies need each insert at a fixed molar excess
//! over the backbone, but fragment stocks are usually measured in ng/µL or a
//! mix of molar units. `assembly-solver` parses a compact description of the
//! fragments, converts every stock to nM, and splits a DNA volume between them
//! so the molar ratio comes out right.
//!
//! ## Features
//!
//! - **Compact fragment syntax**: `70,1800:34nM` for a 70 ng/µL, 1800 bp
//!   backbone and a 34 nM insert
//! - **Unit normalization**: ng/µL (with length), mM, µM, nM, pM, fM and the
//!   `PCR` shorthand
//! - **Interactive entry**: one field at a time, with errors reported per field
//! - **Exact volume solving**: volumes sum to the budget and hit the ratio
//! - **Reaction planning**: NEB Gibson dosing and Golden Gate reagent layout
//!
//! ## Example
//!
//! ```rust
//! use assembly_solver::{parse_fragments, solve_volumes};
//!
//! let mut fragments = parse_fragments("70,1800:Gene,34nM").unwrap();
//! solve_volumes(&mut fragments, 5.0, 2.0).unwrap();
//!
//! for frag in &fragments {
//!     println!("{}: {:.2} µL", frag.name, frag.vol_ul.unwrap());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Concentrations, units and fragments
//! - [`parsing`]: Concentration and fragment parsers, and interactive entry
//! - [`assembly`]: Volume solver and reaction planning
//! - [`cli`]: Command-line interface implementation

pub mod assembly;
pub mod cli;
pub mod core;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::assembly::solver::{solve_volumes, SolveError};
pub use crate::core::concentration::{to_nanomolar, Concentration, ConcentrationUnit, ConversionError};
pub use crate::core::fragment::Fragment;
pub use crate::parsing::concentration::parse_concentration;
pub use crate::parsing::fragments::{parse_fragments, ParseError};
pub use crate::utils::validation::ValidationError;
