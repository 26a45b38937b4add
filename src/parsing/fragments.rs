//! Parser for colon/comma-delimited fragment specifications.
//!
//! Fragments are separated by `:` and fields within a fragment by `,`:
//!
//! ```text
//! [<name>,]<conc>[,<length>]:[<name>,]<conc>[,<length>]...
//! ```
//!
//! The first fragment is the backbone. A two-field fragment is ambiguous: it
//! is read as `<conc>,<length>` when that works, and as `<name>,<conc>`
//! otherwise. A name that itself parses as a concentration (e.g. `100`) is
//! therefore always read as a concentration.

use thiserror::Error;
use tracing::debug;

use crate::core::concentration::{Concentration, ConversionError};
use crate::core::fragment::{default_fragment_name, Fragment};
use crate::parsing::concentration::parse_concentration;
use crate::utils::validation::{check_fragment_count, ValidationError};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("could not interpret '{0}' as a concentration")]
    InvalidConcentration(String),

    #[error("could not interpret '{0}' as a fragment length in bp")]
    InvalidLength(String),

    #[error("cannot parse fragment '{0}': expected [<name>,]<conc>[,<length>]")]
    TooManyFields(String),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Parse a fragment length in bp
///
/// # Errors
///
/// Returns `ParseError::InvalidLength` if the text is not a non-negative integer.
pub fn parse_length(text: &str) -> Result<u64, ParseError> {
    text.trim()
        .parse()
        .map_err(|_| ParseError::InvalidLength(text.to_string()))
}

/// Parse a full fragment specification, e.g. `"70,1800:34nM"`.
///
/// # Errors
///
/// Returns `ParseError::Validation` if fewer than two fragments are given,
/// `ParseError::TooManyFields` for a fragment with more than three fields,
/// `ParseError::InvalidConcentration`/`InvalidLength` for unreadable fields,
/// or `ParseError::Conversion` if a fragment's molarity cannot be derived.
pub fn parse_fragments(text: &str) -> Result<Vec<Fragment>, ParseError> {
    let groups: Vec<&str> = text.split(':').collect();
    check_fragment_count(groups.len())?;

    let fragments = groups
        .iter()
        .enumerate()
        .map(|(i, group)| parse_fragment(i, group))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Parsed {} fragments from '{}'", fragments.len(), text);
    Ok(fragments)
}

/// Parse one `:`-delimited group into a fragment at position `index`
fn parse_fragment(index: usize, group: &str) -> Result<Fragment, ParseError> {
    let fields: Vec<&str> = group.split(',').collect();

    let (name, conc, length_bp) = match fields.as_slice() {
        [conc] => (None, parse_concentration(conc)?, None),
        [first, second] => match (parse_concentration(first), parse_length(second)) {
            (Ok(conc), Ok(length)) => (None, conc, Some(length)),
            _ => (Some(*first), parse_concentration(second)?, None),
        },
        [name, conc, length] => (
            Some(*name),
            parse_concentration(conc)?,
            Some(parse_length(length)?),
        ),
        _ => return Err(ParseError::TooManyFields(group.to_string())),
    };

    build_fragment(index, name, conc, length_bp, group)
}

/// Turn resolved fields into a fragment, applying the positional default name.
///
/// `source` is the text the fields came from, quoted back in errors.
pub(crate) fn build_fragment(
    index: usize,
    name: Option<&str>,
    conc: Concentration,
    length_bp: Option<u64>,
    source: &str,
) -> Result<Fragment, ParseError> {
    let name = match name.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => default_fragment_name(index),
    };

    Fragment::new(name, conc, length_bp)
        .map_err(|e| ParseError::Conversion(e.for_fragment(source)))
}
