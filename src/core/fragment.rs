use serde::Serialize;

use crate::core::concentration::{to_nanomolar, Concentration, ConversionError};

/// Default name for the fragment at `index`: the backbone first, then
/// numbered inserts.
#[must_use]
pub fn default_fragment_name(index: usize) -> String {
    if index == 0 {
        "Backbone".to_string()
    } else {
        format!("Insert #{index}")
    }
}

/// One DNA fragment in an assembly
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fragment {
    /// Name used when reporting volumes
    pub name: String,

    /// Stock concentration as given
    pub conc: Concentration,

    /// Length in bp, when given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_bp: Option<u64>,

    /// Molar stock concentration; always > 0
    conc_nm: f64,

    /// Volume to pipette, set by the volume solver
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vol_ul: Option<f64>,
}

impl Fragment {
    /// Build a fragment, deriving its molarity.
    ///
    /// # Errors
    ///
    /// Returns a `ConversionError` if the concentration cannot be converted to
    /// nM, or converts to a value that is not > 0.
    pub fn new(
        name: impl Into<String>,
        conc: Concentration,
        length_bp: Option<u64>,
    ) -> Result<Self, ConversionError> {
        let conc_nm = to_nanomolar(conc, length_bp)?;

        // Also rejects NaN
        if !(conc_nm > 0.0 && conc_nm.is_finite()) {
            return Err(ConversionError::NonPositive {
                fragment: conc.to_string(),
                value: conc.value,
                unit: conc.unit,
            });
        }

        Ok(Self {
            name: name.into(),
            conc,
            length_bp,
            conc_nm,
            vol_ul: None,
        })
    }

    /// Molar stock concentration in nM
    #[must_use]
    pub fn conc_nm(&self) -> f64 {
        self.conc_nm
    }

    /// Amount of fragment in the given volume, in pmol
    #[must_use]
    pub fn pmol_in(&self, vol_ul: f64) -> f64 {
        vol_ul * self.conc_nm / 1e3
    }

    /// Volume holding the given amount of fragment, in µL
    #[must_use]
    pub fn ul_for(&self, pmol: f64) -> f64 {
        1e3 * pmol / self.conc_nm
    }
}
