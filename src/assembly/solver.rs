use thiserror::Error;
use tracing::debug;

use crate::core::fragment::Fragment;
use crate::utils::validation::{check_min_fragments, is_valid_volume, ValidationError};

/// Default fold-excess of each insert over the backbone
pub const DEFAULT_EXCESS_INSERT_RATIO: f64 = 2.0;

/// Default combined DNA volume, in µL
pub const DEFAULT_DNA_VOLUME_UL: f64 = 5.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("cannot reach the requested ratio: '{name}' would need {volume_ul} µL")]
    InfeasibleVolume { name: String, volume_ul: f64 },
}

/// Work out how much of each fragment to pipette.
///
/// The first fragment is the backbone; every other fragment is an insert and
/// should end up at `excess_insert_ratio` times the backbone's molar amount.
/// The volumes always add up to `total_vol_ul`.
///
/// This is the linear system
///
/// ```text
/// conc[i] * x[i] + r[i] * t = 0      for each fragment i
/// sum(x)                    = total
/// ```
///
/// with `r[0] = 1`, `r[i] = excess_insert_ratio` otherwise, and `t` an
/// auxiliary unknown. Every row but the last couples one volume to `t`, so
/// eliminating `t` gives `x[i] = total * w[i] / sum(w)` where
/// `w[i] = r[i] / conc[i]`.
///
/// # Errors
///
/// Returns `SolveError::Validation` unless there are at least two fragments,
/// or `SolveError::InfeasibleVolume` if any volume comes out negative or not
/// finite. Fragments are only updated on success.
///
/// # Panics
///
/// Panics if a fragment has a concentration that is not > 0, which
/// [`Fragment::new`] rules out.
pub fn solve_volumes(
    fragments: &mut [Fragment],
    total_vol_ul: f64,
    excess_insert_ratio: f64,
) -> Result<(), SolveError> {
    check_min_fragments(fragments.len())?;

    let weights: Vec<f64> = fragments
        .iter()
        .enumerate()
        .map(|(i, frag)| {
            let conc_nm = frag.conc_nm();
            assert!(conc_nm > 0.0, "fragment '{}' has no concentration", frag.name);

            let ratio = if i == 0 { 1.0 } else { excess_insert_ratio };
            ratio / conc_nm
        })
        .collect();

    let weight_sum: f64 = weights.iter().sum();
    let volumes: Vec<f64> = weights
        .iter()
        .map(|w| total_vol_ul * w / weight_sum)
        .collect();

    if let Some((frag, &volume_ul)) = fragments
        .iter()
        .zip(&volumes)
        .find(|(_, v)| !is_valid_volume(**v))
    {
        return Err(SolveError::InfeasibleVolume {
            name: frag.name.clone(),
            volume_ul,
        });
    }

    for (frag, volume_ul) in fragments.iter_mut().zip(volumes) {
        debug!("{}: {:.3} µL of {:.3} nM", frag.name, volume_ul, frag.conc_nm());
        frag.vol_ul = Some(volume_ul);
    }

    Ok(())
}
