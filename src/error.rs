//! Error types for particle resolution and quark-notation parsing.
//!
//! All failures are reported as typed values; nothing is coerced to a
//! default. The variants fall into four groups: catalog load failures,
//! invalid input (an identifier whose shape is unsupported), lookup
//! failures (the identifier is well-formed but unknown), and accessor or
//! parser failures.

use crate::model::types::ParticleType;
use thiserror::Error;

/// Errors produced by the catalog, the identifier resolver, the quark
/// notation parser, and the property accessors.
#[derive(Debug, Error)]
pub enum Error {
    /// The catalog TOML could not be deserialized.
    #[error("failed to parse particle catalog: {0}")]
    CatalogParse(#[from] toml::de::Error),

    /// Two catalog entries share the same canonical id.
    #[error("duplicate canonical id {0} in particle catalog")]
    DuplicateId(i32),

    /// A decimal identifier was not integer-valued.
    ///
    /// Decimal input is accepted only when it denotes an exact numeric
    /// code, e.g. `211.0`.
    #[error("decimal particle identifiers must be integer-valued, got {0}")]
    NonIntegerCode(f64),

    /// The identifier was an empty string.
    #[error("empty particle identifier")]
    EmptyIdentifier,

    /// A numeric code with no matching catalog entry.
    #[error("particle id {0} not found")]
    UnknownId(i32),

    /// A compound code (letter-digit shorthand) with no matching entry.
    #[error("particle code '{0}' not found")]
    UnknownCode(String),

    /// A textual identifier that survived the full fuzzy cascade
    /// without matching any name table.
    #[error("particle name '{0}' not found")]
    UnknownName(String),

    /// A property accessor was invoked on a particle kind for which the
    /// property is undefined, e.g. quark content on a lepton.
    #[error("{property} is not defined for {particle_type} particles")]
    NotApplicable {
        /// The requested property.
        property: &'static str,
        /// The kind of particle the property was requested on.
        particle_type: ParticleType,
    },

    /// A quark-content string matching none of the grammar forms.
    #[error("malformed quark notation '{notation}': {detail}")]
    MalformedNotation {
        /// The raw notation as stored in the catalog or passed in.
        notation: String,
        /// Description of the problem.
        detail: String,
    },
}

impl Error {
    /// Creates a [`NotApplicable`](Error::NotApplicable) error.
    pub fn not_applicable(property: &'static str, particle_type: ParticleType) -> Self {
        Self::NotApplicable {
            property,
            particle_type,
        }
    }

    /// Creates a [`MalformedNotation`](Error::MalformedNotation) error.
    pub fn malformed(notation: &str, detail: impl Into<String>) -> Self {
        Self::MalformedNotation {
            notation: notation.to_string(),
            detail: detail.into(),
        }
    }
}
