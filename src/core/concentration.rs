use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Grams per mole for one base pair of double-stranded DNA
pub const DSDNA_G_PER_MOL_PER_BP: f64 = 650.0;

/// Stock concentration assumed for an unpurified PCR reaction
pub const PCR_PRODUCT_NG_PER_UL: f64 = 50.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("'{fragment}' specifies a concentration in ng/µL, so the size of the fragment must also be specified (e.g. '{fragment},<size>')")]
    MissingLength { fragment: String },

    #[error("'{fragment}' has a length of 0 bp; the length must be greater than 0")]
    ZeroLength { fragment: String },

    #[error("'{fragment}' has a concentration of {value} {unit}; it must be greater than 0")]
    NonPositive {
        fragment: String,
        value: f64,
        unit: ConcentrationUnit,
    },
}

impl ConversionError {
    /// Point the error at the text the fragment was read from
    #[must_use]
    pub fn for_fragment(self, text: &str) -> Self {
        let fragment = text.to_string();
        match self {
            Self::MissingLength { .. } => Self::MissingLength { fragment },
            Self::ZeroLength { .. } => Self::ZeroLength { fragment },
            Self::NonPositive { value, unit, .. } => Self::NonPositive { fragment, value, unit },
        }
    }
}

/// Units a concentration may be given in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConcentrationUnit {
    #[serde(rename = "ng/µL")]
    NgPerUl,
    #[serde(rename = "mM")]
    Millimolar,
    #[serde(rename = "µM")]
    Micromolar,
    #[serde(rename = "nM")]
    Nanomolar,
    #[serde(rename = "pM")]
    Picomolar,
    #[serde(rename = "fM")]
    Femtomolar,
}

impl ConcentrationUnit {
    /// Parse a unit token.
    ///
    /// Matching is case-insensitive, and `u`, `µ` (micro sign) and `μ` (Greek
    /// mu) are interchangeable.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                'µ' | 'μ' | 'U' => 'u',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "ng/ul" => Some(Self::NgPerUl),
            "mm" => Some(Self::Millimolar),
            "um" => Some(Self::Micromolar),
            "nm" => Some(Self::Nanomolar),
            "pm" => Some(Self::Picomolar),
            "fm" => Some(Self::Femtomolar),
            _ => None,
        }
    }

    /// True for units that need a fragment length to become a molarity
    #[must_use]
    pub fn is_mass_based(self) -> bool {
        matches!(self, Self::NgPerUl)
    }

    /// Multiplier from this unit to nM, for molar units only
    #[must_use]
    pub fn nanomolar_multiplier(self) -> Option<f64> {
        match self {
            Self::NgPerUl => None,
            Self::Millimolar => Some(1e6),
            Self::Micromolar => Some(1e3),
            Self::Nanomolar => Some(1.0),
            Self::Picomolar => Some(1e-3),
            Self::Femtomolar => Some(1e-6),
        }
    }
}

impl std::fmt::Display for ConcentrationUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NgPerUl => write!(f, "ng/µL"),
            Self::Millimolar => write!(f, "mM"),
            Self::Micromolar => write!(f, "µM"),
            Self::Nanomolar => write!(f, "nM"),
            Self::Picomolar => write!(f, "pM"),
            Self::Femtomolar => write!(f, "fM"),
        }
    }
}

/// A stock concentration exactly as the user gave it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Concentration {
    pub value: f64,
    pub unit: ConcentrationUnit,
}

impl Concentration {
    #[must_use]
    pub fn new(value: f64, unit: ConcentrationUnit) -> Self {
        Self { value, unit }
    }

    /// The "PCR" shorthand: an unpurified PCR product
    #[must_use]
    pub fn pcr_product() -> Self {
        Self::new(PCR_PRODUCT_NG_PER_UL, ConcentrationUnit::NgPerUl)
    }
}

impl std::fmt::Display for Concentration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Convert a concentration to nM.
///
/// Molar units use fixed multipliers. For ng/µL the standard dsDNA relation
/// applies: `nM = value * 1e6 / (650 * length_bp)`.
///
/// # Errors
///
/// Returns `ConversionError::MissingLength` if the unit is mass-based and no
/// length is given, or `ConversionError::ZeroLength` if the length is 0.
pub fn to_nanomolar(conc: Concentration, length_bp: Option<u64>) -> Result<f64, ConversionError> {
    if let Some(multiplier) = conc.unit.nanomolar_multiplier() {
        return Ok(conc.value * multiplier);
    }

    match length_bp {
        None => Err(ConversionError::MissingLength {
            fragment: conc.to_string(),
        }),
        Some(0) => Err(ConversionError::ZeroLength {
            fragment: format!("{conc},0"),
        }),
        Some(bp) => {
            #[allow(clippy::cast_precision_loss)]
            let bp = bp as f64;
            Ok(conc.value * 1e6 / (DSDNA_G_PER_MOL_PER_BP * bp))
        }
    }
}
