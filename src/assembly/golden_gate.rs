//! Golden Gate assembly volumes.
//!
//! Ligase, ligase buffer and the Type IIS enzymes take a fixed volume each;
//! whatever is left of the reaction is available for DNA.

use serde::Serialize;
use thiserror::Error;

use crate::assembly::solver::{solve_volumes, SolveError, DEFAULT_EXCESS_INSERT_RATIO};
use crate::core::fragment::Fragment;

/// Default volume of a complete Golden Gate reaction, in µL
pub const DEFAULT_REACTION_VOLUME_UL: f64 = 10.0;

/// Name used when no enzyme is specified
pub const GENERIC_ENZYME: &str = "Golden Gate enzyme";

/// Type IIS enzymes preferred for Golden Gate assembly
pub const PREFERRED_ENZYMES: [&str; 3] = ["BsaI-HFv2", "BbsI-HF", "Esp3I"];

pub const LIGASE_BUFFER_UL: f64 = 1.0;
pub const LIGASE_UL: f64 = 0.5;
pub const ENZYME_UL: f64 = 0.5;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GoldenGateError {
    #[error("cannot fit {dna_ul} µL of DNA in a {reaction_ul} µL reaction (at most {max_dna_ul} µL)")]
    DnaVolumeTooLarge {
        dna_ul: f64,
        reaction_ul: f64,
        max_dna_ul: f64,
    },

    #[error(transparent)]
    Solve(#[from] SolveError),
}

#[derive(Debug, Clone)]
pub struct GoldenGateConfig {
    pub reaction_volume_ul: f64,
    /// Combined DNA volume; defaults to everything not taken by reagents
    pub dna_volume_ul: Option<f64>,
    pub excess_insert_ratio: f64,
    pub enzymes: Vec<String>,
}

impl Default for GoldenGateConfig {
    fn default() -> Self {
        Self {
            reaction_volume_ul: DEFAULT_REACTION_VOLUME_UL,
            dna_volume_ul: None,
            excess_insert_ratio: DEFAULT_EXCESS_INSERT_RATIO,
            enzymes: vec![GENERIC_ENZYME.to_string()],
        }
    }
}

impl GoldenGateConfig {
    /// Largest DNA volume that fits next to the fixed reagents
    #[must_use]
    pub fn max_dna_volume_ul(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let enzyme_ul = self.enzymes.len() as f64 * ENZYME_UL;
        self.reaction_volume_ul - LIGASE_BUFFER_UL - LIGASE_UL - enzyme_ul
    }
}

/// One line of the reaction: a reagent or fragment and its volume
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    pub name: String,
    pub volume_ul: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<String>,
}

impl Component {
    fn new(name: impl Into<String>, volume_ul: f64, stock: Option<String>) -> Self {
        Self {
            name: name.into(),
            volume_ul,
            stock,
        }
    }
}

/// A Golden Gate reaction with every volume worked out
#[derive(Debug, Clone, Serialize)]
pub struct GoldenGateReaction {
    pub reaction_volume_ul: f64,
    pub dna_volume_ul: f64,
    pub components: Vec<Component>,
}

impl GoldenGateReaction {
    /// Solve fragment volumes and lay out the whole reaction.
    ///
    /// # Errors
    ///
    /// Returns `GoldenGateError::DnaVolumeTooLarge` if the requested DNA
    /// volume does not fit, or `GoldenGateError::Solve` if the volumes cannot
    /// be solved.
    pub fn plan(
        fragments: &mut [Fragment],
        config: &GoldenGateConfig,
    ) -> Result<Self, GoldenGateError> {
        let max_dna_ul = config.max_dna_volume_ul();
        let dna_volume_ul = config.dna_volume_ul.unwrap_or(max_dna_ul);

        if dna_volume_ul > max_dna_ul {
            return Err(GoldenGateError::DnaVolumeTooLarge {
                dna_ul: dna_volume_ul,
                reaction_ul: config.reaction_volume_ul,
                max_dna_ul,
            });
        }

        solve_volumes(fragments, dna_volume_ul, config.excess_insert_ratio)?;

        let mut components = Vec::new();

        let water_ul = max_dna_ul - dna_volume_ul;
        if water_ul > 0.0 {
            components.push(Component::new("Water", water_ul, None));
        }

        for frag in fragments.iter() {
            components.push(Component::new(
                frag.name.clone(),
                frag.vol_ul.unwrap_or(0.0),
                Some(frag.conc.to_string()),
            ));
        }

        components.push(Component::new(
            "T4 ligase buffer",
            LIGASE_BUFFER_UL,
            Some("10x".to_string()),
        ));
        components.push(Component::new(
            "T4 DNA ligase",
            LIGASE_UL,
            Some("400 U/µL".to_string()),
        ));
        for enzyme in &config.enzymes {
            components.push(Component::new(enzyme.clone(), ENZYME_UL, None));
        }

        Ok(Self {
            reaction_volume_ul: config.reaction_volume_ul,
            dna_volume_ul,
            components,
        })
    }
}
