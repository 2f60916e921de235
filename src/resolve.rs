//! Identifier classification and resolution.
//!
//! Human-entered particle identifiers arrive as numeric codes, decimal
//! codes, symbols, PDG names, program names, or shorthand letters. The
//! resolver classifies the raw input into an [`Identifier`] and maps it
//! to a canonical id through a fixed cascade, ordered from the most
//! specific and cheapest checks down to the broadest fuzzy search so
//! that a bare digit string can never fall through to text matching:
//!
//! 1. Single non-digit character → single-letter alias table.
//! 2. Single letter followed by a `meson`/`boson` suffix → same table.
//! 3. All-digit string → numeric code, valid only if it exists.
//! 4. Leading letter followed by a digit → compound-code table.
//! 5. Exact PDG-name match.
//! 6. Ordered fuzzy variants probed against the merged name tables.

use crate::catalog::Catalog;
use crate::error::Error;

/// The canonical signed particle id: positive for particles, negative
/// for antiparticles, zero invalid.
pub type CanonicalId = i32;

/// A raw particle identifier, classified by shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Identifier<'a> {
    /// An integer numeric code, e.g. `211` or `-211`.
    Code(i32),
    /// A decimal code; accepted only when integer-valued, e.g. `211.0`.
    Decimal(f64),
    /// A symbolic or textual name in any supported convention.
    Name(&'a str),
}

impl<'a> From<i32> for Identifier<'a> {
    fn from(code: i32) -> Self {
        Identifier::Code(code)
    }
}

impl<'a> From<f64> for Identifier<'a> {
    fn from(value: f64) -> Self {
        Identifier::Decimal(value)
    }
}

impl<'a> From<&'a str> for Identifier<'a> {
    fn from(name: &'a str) -> Self {
        Identifier::Name(name)
    }
}

impl<'a> From<&'a String> for Identifier<'a> {
    fn from(name: &'a String) -> Self {
        Identifier::Name(name.as_str())
    }
}

impl Catalog {
    /// Resolves an identifier to its canonical id.
    ///
    /// Fails with a not-found error when no table matches after the
    /// full cascade, or an invalid-input error when the identifier's
    /// shape is unsupported (non-integer decimal, empty string).
    pub fn resolve<'a>(&self, ident: impl Into<Identifier<'a>>) -> Result<CanonicalId, Error> {
        match ident.into() {
            Identifier::Code(code) => self.known_id(code),
            Identifier::Decimal(value) => {
                if value.is_finite() && value.fract() == 0.0 {
                    self.known_id(value as i32)
                } else {
                    Err(Error::NonIntegerCode(value))
                }
            }
            Identifier::Name(name) => self.resolve_name(name),
        }
    }

    fn known_id(&self, id: i32) -> Result<CanonicalId, Error> {
        if self.contains_id(id) {
            Ok(id)
        } else {
            Err(Error::UnknownId(id))
        }
    }

    fn resolve_name(&self, name: &str) -> Result<CanonicalId, Error> {
        let first = match name.chars().next() {
            Some(c) => c,
            None => return Err(Error::EmptyIdentifier),
        };

        // 1. shorthand letter
        if name.chars().nth(1).is_none() && !first.is_ascii_digit() {
            return self
                .pdg_names
                .get(name)
                .copied()
                .ok_or_else(|| Error::UnknownName(name.to_string()));
        }

        // 2. shorthand letter spelled with its category, e.g. "Zboson"
        if let Some(id) = self.letter_with_suffix(name) {
            return Ok(id);
        }

        // 3. numeric code written as text
        if name.chars().all(|c| c.is_ascii_digit()) {
            return match name.parse::<i32>() {
                Ok(code) => self.known_id(code),
                Err(_) => Err(Error::UnknownName(name.to_string())),
            };
        }

        // 4. compound code, e.g. "S003"
        if first.is_alphabetic() && name.chars().nth(1).is_some_and(|c| c.is_ascii_digit()) {
            return self
                .codes
                .get(name)
                .copied()
                .ok_or_else(|| Error::UnknownCode(name.to_string()));
        }

        // 5. exact PDG name
        if let Some(&id) = self.pdg_names.get(name) {
            return Ok(id);
        }

        // 6. fuzzy cascade over the merged tables
        for variant in name_variants(name) {
            if let Some(&id) = self.merged.get(variant.as_str()) {
                return Ok(id);
            }
        }

        Err(Error::UnknownName(name.to_string()))
    }

    /// Matches inputs like `Zboson` or `Bmeson`: one leading alphabetic
    /// character plus a case-insensitive category suffix, looked up in
    /// the single-letter table. Unknown letters fall through to the
    /// fuzzy cascade.
    fn letter_with_suffix(&self, name: &str) -> Option<CanonicalId> {
        let lower = name.to_lowercase();
        let stem = lower
            .strip_suffix("meson")
            .or_else(|| lower.strip_suffix("boson"))?;
        if stem.chars().count() != 1 {
            return None;
        }
        let letter = name.chars().next()?;
        if !letter.is_alphabetic() {
            return None;
        }
        self.pdg_names.get(letter.to_string().as_str()).copied()
    }
}

/// The ordered variant spellings probed by the fuzzy cascade. First
/// match wins, so the order is part of the resolver's contract.
pub(crate) fn name_variants(name: &str) -> Vec<String> {
    vec![
        name.to_string(),
        name.to_lowercase(),
        name.replace('_', ""),
        name.replace(' ', ""),
        name.replace('(', "_").replace(')', ""),
        name.replace('~', "bar"),
        name.replace('~', "_bar"),
        name.replace("bar", "~"),
        name.replace("_bar", "~"),
        capitalize(name),
    ]
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
