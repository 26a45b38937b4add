//! Gibson assembly dosing with the NEB master mix (E2611).
//!
//! The master mix takes up half the reaction. The other half is the DNA
//! budget, which is split between fragments by the volume solver. NEB
//! recommends a fixed amount of each fragment, so every fragment is capped at
//! that amount and the rest of the budget is made up with water. Fragments too
//! dilute to reach the recommended minimum are flagged rather than rejected.

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::assembly::solver::{solve_volumes, SolveError, DEFAULT_EXCESS_INSERT_RATIO};
use crate::core::fragment::Fragment;

/// Default volume of a complete Gibson reaction, in µL
pub const DEFAULT_REACTION_VOLUME_UL: f64 = 10.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GibsonError {
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
pub struct GibsonConfig {
    /// Volume of the complete reaction
    pub reaction_volume_ul: f64,
    /// Combined DNA volume; defaults to everything not taken by master mix
    pub dna_volume_ul: Option<f64>,
}

impl Default for GibsonConfig {
    fn default() -> Self {
        Self {
            reaction_volume_ul: DEFAULT_REACTION_VOLUME_UL,
            dna_volume_ul: None,
        }
    }
}

/// NEB's recommended amount of each fragment, which depends on how many
/// fragments are being joined
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DnaRecommendation {
    pub target_pmol: f64,
    pub min_pmol: f64,
    pub incubation: &'static str,
}

impl DnaRecommendation {
    #[must_use]
    pub fn for_fragment_count(count: usize) -> Self {
        if count <= 3 {
            Self {
                target_pmol: 0.5,
                min_pmol: 0.02,
                incubation: "15 min",
            }
        } else {
            Self {
                target_pmol: 1.0,
                min_pmol: 0.2,
                incubation: "1h",
            }
        }
    }
}

/// How much of one fragment goes into the reaction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FragmentDose {
    pub name: String,
    pub conc_nm: f64,
    pub volume_ul: f64,
    pub pmol: f64,
    /// Less than the recommended minimum amount
    pub below_minimum: bool,
}

/// A fully dosed Gibson reaction
#[derive(Debug, Clone, Serialize)]
pub struct GibsonReaction {
    pub reaction_volume_ul: f64,
    pub master_mix_ul: f64,
    pub dna_volume_ul: f64,
    pub water_ul: f64,
    pub recommendation: DnaRecommendation,
    pub doses: Vec<FragmentDose>,
}

impl GibsonReaction {
    /// Solve fragment volumes and dose each fragment.
    ///
    /// Each fragment's `vol_ul` is set to its solved share of the DNA budget;
    /// the doses hold the (possibly smaller) volumes actually used.
    ///
    /// # Errors
    ///
    /// Returns `GibsonError::DnaVolumeTooLarge` if the requested DNA volume
    /// does not fit next to the master mix, or `GibsonError::Solve` if the
    /// volumes cannot be solved.
    pub fn plan(fragments: &mut [Fragment], config: &GibsonConfig) -> Result<Self, GibsonError> {
        let master_mix_ul = config.reaction_volume_ul / 2.0;
        let max_dna_ul = config.reaction_volume_ul - master_mix_ul;
        let dna_volume_ul = config.dna_volume_ul.unwrap_or(max_dna_ul);

        if dna_volume_ul > max_dna_ul {
            return Err(GibsonError::DnaVolumeTooLarge {
                dna_ul: dna_volume_ul,
                reaction_ul: config.reaction_volume_ul,
                max_dna_ul,
            });
        }

        solve_volumes(fragments, dna_volume_ul, DEFAULT_EXCESS_INSERT_RATIO)?;

        let recommendation = DnaRecommendation::for_fragment_count(fragments.len());
        let doses: Vec<FragmentDose> = fragments
            .iter()
            .map(|frag| dose(frag, &recommendation))
            .collect();

        let water_ul = max_dna_ul - doses.iter().map(|d| d.volume_ul).sum::<f64>();

        Ok(Self {
            reaction_volume_ul: config.reaction_volume_ul,
            master_mix_ul,
            dna_volume_ul,
            water_ul: water_ul.max(0.0),
            recommendation,
            doses,
        })
    }
}

/// Use the recommended amount if the solved volume holds it, otherwise as
/// much as the solved volume allows.
fn dose(frag: &Fragment, recommendation: &DnaRecommendation) -> FragmentDose {
    let solved_ul = frag.vol_ul.unwrap_or(0.0);
    let target_ul = frag.ul_for(recommendation.target_pmol);
    let volume_ul = solved_ul.min(target_ul);
    let pmol = frag.pmol_in(volume_ul);
    let below_minimum = pmol < recommendation.min_pmol;

    if below_minimum {
        warn!(
            "Using {:.3} pmol of {}, {:.3} pmol recommended.",
            pmol, frag.name, recommendation.min_pmol
        );
    }

    FragmentDose {
        name: frag.name.clone(),
        conc_nm: frag.conc_nm(),
        volume_ul,
        pmol,
        below_minimum,
    }
}
