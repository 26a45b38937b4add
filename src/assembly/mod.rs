//! Volume calculations for DNA assembly reactions.
//!
//! - [`solver`]: splits a DNA volume between fragments to hit a backbone:insert
//!   molar ratio
//! - [`gibson`]: Gibson assembly with the NEB master mix, capping each fragment
//!   at the recommended amount
//! - [`golden_gate`]: Golden Gate assembly, fitting DNA around fixed reagent
//!   volumes
//!
//! ## Example
//!
//! ```rust
//! use assembly_solver::assembly::solver::solve_volumes;
//! use assembly_solver::parsing::fragments::parse_fragments;
//!
//! let mut fragments = parse_fragments("30nM:60nM").unwrap();
//! solve_volumes(&mut fragments, 5.0, 2.0).unwrap();
//!
//! // Twice as much insert as backbone, at twice the concentration
//! let backbone = fragments[0].vol_ul.unwrap();
//! let insert = fragments[1].vol_ul.unwrap();
//! assert!((backbone - 2.5).abs() < 1e-9);
//! assert!((insert - 2.5).abs() < 1e-9);
//! ```

pub mod gibson;
pub mod golden_gate;
pub mod solver;
