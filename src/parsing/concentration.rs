use std::sync::LazyLock;

use regex::Regex;

use crate::core::concentration::{Concentration, ConcentrationUnit};
use crate::parsing::fragments::ParseError;

/// `<value>[<whitespace><unit>]`, anchored so trailing garbage is rejected
static CONCENTRATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([0-9.]+)\s*(ng/[uµμ]l|[muµμnpf]m)?$")
        .expect("concentration pattern is valid")
});

/// Parse a concentration such as `"70"`, `"34nM"`, `" 1  µM "` or `"PCR"`.
///
/// A bare number is taken to be ng/µL. `"PCR"` (any case) stands for an
/// unpurified PCR product at 50 ng/µL.
///
/// # Errors
///
/// Returns `ParseError::InvalidConcentration` with the original text if it is
/// not a number optionally followed by a recognized unit.
pub fn parse_concentration(text: &str) -> Result<Concentration, ParseError> {
    let trimmed = text.trim();

    if trimmed.eq_ignore_ascii_case("pcr") {
        return Ok(Concentration::pcr_product());
    }

    let invalid = || ParseError::InvalidConcentration(text.to_string());

    let captures = CONCENTRATION_PATTERN.captures(trimmed).ok_or_else(invalid)?;

    let value: f64 = captures[1].parse().map_err(|_| invalid())?;
    let unit = match captures.get(2) {
        Some(m) => ConcentrationUnit::parse(m.as_str()).ok_or_else(invalid)?,
        None => ConcentrationUnit::NgPerUl,
    };

    Ok(Concentration::new(value, unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conc(value: f64, unit: ConcentrationUnit) -> Concentration {
        Concentration::new(value, unit)
    }

    #[test]
    fn test_bare_numbers_are_mass_based() {
        assert_eq!(parse_concentration("1").unwrap(), conc(1.0, ConcentrationUnit::NgPerUl));
        assert_eq!(parse_concentration("10").unwrap(), conc(10.0, ConcentrationUnit::NgPerUl));
        assert_eq!(parse_concentration("1.0").unwrap(), conc(1.0, ConcentrationUnit::NgPerUl));
        assert_eq!(parse_concentration(".5").unwrap(), conc(0.5, ConcentrationUnit::NgPerUl));
    }

    #[test]
    fn test_units() {
        assert_eq!(parse_concentration("1 ng/uL").unwrap(), conc(1.0, ConcentrationUnit::NgPerUl));
        assert_eq!(parse_concentration("1 ng/µL").unwrap(), conc(1.0, ConcentrationUnit::NgPerUl));
        assert_eq!(parse_concentration("1 fM").unwrap(), conc(1.0, ConcentrationUnit::Femtomolar));
        assert_eq!(parse_concentration("1 pM").unwrap(), conc(1.0, ConcentrationUnit::Picomolar));
        assert_eq!(parse_concentration("1 nM").unwrap(), conc(1.0, ConcentrationUnit::Nanomolar));
        assert_eq!(parse_concentration("1 uM").unwrap(), conc(1.0, ConcentrationUnit::Micromolar));
        assert_eq!(parse_concentration("1 µM").unwrap(), conc(1.0, ConcentrationUnit::Micromolar));
        assert_eq!(parse_concentration("1 mM").unwrap(), conc(1.0, ConcentrationUnit::Millimolar));
        assert_eq!(parse_concentration("1 NM").unwrap(), conc(1.0, ConcentrationUnit::Nanomolar));
    }

    #[test]
    fn test_whitespace_is_ignored() {
        let expected = conc(1.0, ConcentrationUnit::Nanomolar);
        assert_eq!(parse_concentration("1nM").unwrap(), expected);
        assert_eq!(parse_concentration("1 nM").unwrap(), expected);
        assert_eq!(parse_concentration(" 1 nM").unwrap(), expected);
        assert_eq!(parse_concentration("1 nM ").unwrap(), expected);
        assert_eq!(parse_concentration(" 1  nM ").unwrap(), expected);
        assert_eq!(parse_concentration(" 1 ").unwrap(), conc(1.0, ConcentrationUnit::NgPerUl));
    }

    #[test]
    fn test_pcr_shorthand() {
        let expected = conc(50.0, ConcentrationUnit::NgPerUl);
        assert_eq!(parse_concentration("PCR").unwrap(), expected);
        assert_eq!(parse_concentration("pcr").unwrap(), expected);
        assert_eq!(parse_concentration(" Pcr ").unwrap(), expected);
    }

    #[test]
    fn test_invalid_concentrations() {
        for text in ["", "1 xxx", "nM", "-1nM", "1.2.3", "1 nM extra", "Gene", "1 M"] {
            match parse_concentration(text) {
                Err(ParseError::InvalidConcentration(s)) => assert_eq!(s, text),
                other => panic!("expected '{text}' to be rejected, got {other:?}"),
            }
        }
    }
}
