//! Structured quark representations for composite particles.
//!
//! A composite particle's quark content is either a single ordered
//! [`QuarkTuple`] (one definite valence configuration) or a
//! [`QuarkSuperposition`] (a quantum mixture of tuples with symbolic
//! mixing coefficients). Order is physically significant — the
//! first-listed quark is conventionally the leading flavor — and is
//! preserved rather than re-sorted.

use std::fmt;

/// One of the six quark flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuarkFlavor {
    Down,
    Up,
    Strange,
    Charm,
    Bottom,
    Top,
}

impl QuarkFlavor {
    /// The flavor for a lowercase notation letter.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'd' => Some(QuarkFlavor::Down),
            'u' => Some(QuarkFlavor::Up),
            's' => Some(QuarkFlavor::Strange),
            'c' => Some(QuarkFlavor::Charm),
            'b' => Some(QuarkFlavor::Bottom),
            't' => Some(QuarkFlavor::Top),
            _ => None,
        }
    }

    /// The flavor for a canonical id, ignoring sign.
    pub fn from_id(id: i32) -> Option<Self> {
        match id.abs() {
            1 => Some(QuarkFlavor::Down),
            2 => Some(QuarkFlavor::Up),
            3 => Some(QuarkFlavor::Strange),
            4 => Some(QuarkFlavor::Charm),
            5 => Some(QuarkFlavor::Bottom),
            6 => Some(QuarkFlavor::Top),
            _ => None,
        }
    }

    /// The lowercase notation letter.
    pub fn letter(&self) -> char {
        match self {
            QuarkFlavor::Down => 'd',
            QuarkFlavor::Up => 'u',
            QuarkFlavor::Strange => 's',
            QuarkFlavor::Charm => 'c',
            QuarkFlavor::Bottom => 'b',
            QuarkFlavor::Top => 't',
        }
    }

    /// The canonical id of the quark (the antiquark is the negation).
    pub fn canonical_id(&self) -> i32 {
        match self {
            QuarkFlavor::Down => 1,
            QuarkFlavor::Up => 2,
            QuarkFlavor::Strange => 3,
            QuarkFlavor::Charm => 4,
            QuarkFlavor::Bottom => 5,
            QuarkFlavor::Top => 6,
        }
    }

    /// Electric charge of the quark in thirds of `e`.
    pub fn charge_thirds(&self) -> i32 {
        match self {
            QuarkFlavor::Up | QuarkFlavor::Charm | QuarkFlavor::Top => 2,
            QuarkFlavor::Down | QuarkFlavor::Strange | QuarkFlavor::Bottom => -1,
        }
    }
}

/// A quark or antiquark as written in composite notation.
///
/// Antiquarks are denoted by uppercase letters and carry the negated
/// charge of their particle partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuarkSymbol {
    pub flavor: QuarkFlavor,
    pub anti: bool,
}

impl QuarkSymbol {
    pub fn new(flavor: QuarkFlavor, anti: bool) -> Self {
        Self { flavor, anti }
    }

    /// Reconstructs the symbol from a signed canonical id, `None` when
    /// the id is not a quark id.
    pub fn from_id(id: i32) -> Option<Self> {
        QuarkFlavor::from_id(id).map(|flavor| Self {
            flavor,
            anti: id < 0,
        })
    }

    pub fn canonical_id(&self) -> i32 {
        if self.anti {
            -self.flavor.canonical_id()
        } else {
            self.flavor.canonical_id()
        }
    }

    pub fn charge_thirds(&self) -> i32 {
        if self.anti {
            -self.flavor.charge_thirds()
        } else {
            self.flavor.charge_thirds()
        }
    }

    /// The notation letter: lowercase for quarks, uppercase for
    /// antiquarks.
    pub fn letter(&self) -> char {
        if self.anti {
            self.flavor.letter().to_ascii_uppercase()
        } else {
            self.flavor.letter()
        }
    }

    /// Display glyph; antiquarks carry an overbar.
    pub fn glyph(&self) -> &'static str {
        match (self.flavor, self.anti) {
            (QuarkFlavor::Down, false) => "d",
            (QuarkFlavor::Up, false) => "u",
            (QuarkFlavor::Strange, false) => "s",
            (QuarkFlavor::Charm, false) => "c",
            (QuarkFlavor::Bottom, false) => "b",
            (QuarkFlavor::Top, false) => "t",
            (QuarkFlavor::Down, true) => "d\u{304}",
            (QuarkFlavor::Up, true) => "u\u{304}",
            (QuarkFlavor::Strange, true) => "s\u{304}",
            (QuarkFlavor::Charm, true) => "c\u{304}",
            (QuarkFlavor::Bottom, true) => "b\u{304}",
            (QuarkFlavor::Top, true) => "t\u{304}",
        }
    }
}

impl fmt::Display for QuarkSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// An ordered valence-quark configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuarkTuple(Vec<QuarkSymbol>);

impl QuarkTuple {
    pub fn new(symbols: Vec<QuarkSymbol>) -> Self {
        Self(symbols)
    }

    pub fn symbols(&self) -> &[QuarkSymbol] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuarkSymbol> {
        self.0.iter()
    }

    /// Summed constituent charge in thirds of `e`.
    pub fn charge_thirds(&self) -> i32 {
        self.0.iter().map(QuarkSymbol::charge_thirds).sum()
    }
}

impl<'a> IntoIterator for &'a QuarkTuple {
    type Item = &'a QuarkSymbol;
    type IntoIter = std::slice::Iter<'a, QuarkSymbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for QuarkTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            f.write_str(symbol.glyph())?;
        }
        Ok(())
    }
}

/// A signed symbolic mixing weight, not a normalized probability.
///
/// Ratio notation contributes `√2` / `-√2`; coefficient-prefixed
/// notation contributes the single-letter algebraic coefficient from the
/// source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coefficient {
    Sqrt2,
    NegSqrt2,
    Symbol(char),
}

impl Coefficient {
    pub fn is_negative(&self) -> bool {
        matches!(self, Coefficient::NegSqrt2)
    }

    /// The coefficient without its sign.
    pub fn magnitude(&self) -> Coefficient {
        match self {
            Coefficient::NegSqrt2 => Coefficient::Sqrt2,
            other => *other,
        }
    }
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coefficient::Sqrt2 => f.write_str("√2"),
            Coefficient::NegSqrt2 => f.write_str("-√2"),
            Coefficient::Symbol(letter) => write!(f, "{letter}"),
        }
    }
}

/// An ordered quantum mixture of quark tuples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuarkSuperposition {
    terms: Vec<(Coefficient, QuarkTuple)>,
}

impl QuarkSuperposition {
    pub fn new(terms: Vec<(Coefficient, QuarkTuple)>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &[(Coefficient, QuarkTuple)] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (Coefficient, QuarkTuple)> {
        self.terms.iter()
    }
}

impl fmt::Display for QuarkSuperposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (coefficient, tuple)) in self.terms.iter().enumerate() {
            if i == 0 {
                write!(f, "{coefficient}({tuple})")?;
            } else if coefficient.is_negative() {
                write!(f, " - {}({})", coefficient.magnitude(), tuple)?;
            } else {
                write!(f, " + {coefficient}({tuple})")?;
            }
        }
        Ok(())
    }
}

/// Parsed quark content: one definite configuration or a mixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuarkContent {
    Tuple(QuarkTuple),
    Superposition(QuarkSuperposition),
}

impl QuarkContent {
    pub fn as_tuple(&self) -> Option<&QuarkTuple> {
        match self {
            QuarkContent::Tuple(tuple) => Some(tuple),
            QuarkContent::Superposition(_) => None,
        }
    }

    pub fn as_superposition(&self) -> Option<&QuarkSuperposition> {
        match self {
            QuarkContent::Tuple(_) => None,
            QuarkContent::Superposition(sup) => Some(sup),
        }
    }

    /// Constituent charge in thirds of `e`: the tuple sum, or the first
    /// term's sum for a superposition (all terms of a physical mixture
    /// carry the same charge).
    pub fn charge_thirds(&self) -> Option<i32> {
        match self {
            QuarkContent::Tuple(tuple) => Some(tuple.charge_thirds()),
            QuarkContent::Superposition(sup) => {
                sup.terms().first().map(|(_, tuple)| tuple.charge_thirds())
            }
        }
    }
}

impl fmt::Display for QuarkContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuarkContent::Tuple(tuple) => tuple.fmt(f),
            QuarkContent::Superposition(sup) => sup.fmt(f),
        }
    }
}
