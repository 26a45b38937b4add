//! Core data types for describing DNA fragments.
//!
//! - [`Concentration`](concentration::Concentration): a stock concentration with its unit
//! - [`Fragment`](fragment::Fragment): a named fragment with a molar concentration and,
//!   once solved, a pipetting volume
//!
//! ## Units
//!
//! Everything is normalized to nM before solving:
//!
//! | Unit  | To nM |
//! |-------|-------|
//! | mM    | × 1e6 |
//! | µM    | × 1e3 |
//! | nM    | × 1   |
//! | pM    | × 1e-3 |
//! | fM    | × 1e-6 |
//! | ng/µL | × 1e6 / (650 × length in bp) |

pub mod concentration;
pub mod fragment;
