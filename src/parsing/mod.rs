//! Parsers that turn user input into [`Fragment`](crate::core::fragment::Fragment)s.
//!
//! - **Concentrations**: `"70"`, `"34nM"`, `"2 µM"`, `"PCR"`
//! - **Fragment specifications**: one string such as `"70,1800:34nM"`
//! - **Interactive entry**: one field at a time from a terminal or pipe
//!
//! ## Example
//!
//! ```rust
//! use assembly_solver::parsing::fragments::parse_fragments;
//!
//! let fragments = parse_fragments("70,1800:Gene,34nM").unwrap();
//! assert_eq!(fragments[0].name, "Backbone");
//! assert_eq!(fragments[1].name, "Gene");
//! assert_eq!(fragments[1].conc_nm(), 34.0);
//! ```
//!
//! ## Recognized units
//!
//! | Token | Meaning |
//! |-------|---------|
//! | (none), `ng/µL`, `ng/uL` | mass concentration; needs a length |
//! | `mM`, `µM`/`uM`, `nM`, `pM`, `fM` | molar concentration |
//! | `PCR` | unpurified PCR product, 50 ng/µL |
//!
//! Unit tokens are case-insensitive.

pub mod concentration;
pub mod fragments;
pub mod interactive;
