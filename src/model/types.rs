//! Typed classifications projected from raw catalog fields.
//!
//! The catalog stores charge as a plain numeric encoding (with thirds for
//! quarks) and spin/category tags as lowercase strings; the enums here are
//! the typed representations handed to callers. Values outside the known
//! encodings classify as `Unknown` rather than failing.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid particle type tag: '{0}'")]
pub struct ParseParticleTypeError(String);

/// Electric charge in elementary charge units, covering the integer
/// charges and the third/two-thirds fractional charges carried by quarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charge {
    Negative,
    Neutral,
    Positive,
    PlusOneThird,
    PlusTwoThirds,
    MinusOneThird,
    MinusTwoThirds,
    Unknown,
}

impl Charge {
    /// Classifies a raw numeric charge encoding.
    ///
    /// Integer charges must be exact; fractional charges are matched by
    /// range so that both `0.333` and `1.0/3.0` land on the same variant.
    /// Anything else classifies as [`Charge::Unknown`].
    pub fn from_value(value: f64) -> Self {
        if value == -1.0 {
            Charge::Negative
        } else if value == 0.0 {
            Charge::Neutral
        } else if value == 1.0 {
            Charge::Positive
        } else if value > 0.3 && value < 0.4 {
            Charge::PlusOneThird
        } else if value > 0.5 && value < 0.7 {
            Charge::PlusTwoThirds
        } else if value < -0.3 && value > -0.4 {
            Charge::MinusOneThird
        } else if value < -0.5 && value > -0.7 {
            Charge::MinusTwoThirds
        } else {
            Charge::Unknown
        }
    }

    /// The charge as an exact integer count of thirds of `e`, or `None`
    /// for [`Charge::Unknown`]. Using thirds keeps conservation sums free
    /// of floating point error.
    pub fn in_thirds(&self) -> Option<i32> {
        match self {
            Charge::Negative => Some(-3),
            Charge::Neutral => Some(0),
            Charge::Positive => Some(3),
            Charge::PlusOneThird => Some(1),
            Charge::PlusTwoThirds => Some(2),
            Charge::MinusOneThird => Some(-1),
            Charge::MinusTwoThirds => Some(-2),
            Charge::Unknown => None,
        }
    }

    /// The charge in elementary charge units, or `None` for
    /// [`Charge::Unknown`].
    pub fn value(&self) -> Option<f64> {
        self.in_thirds().map(|t| f64::from(t) / 3.0)
    }
}

impl fmt::Display for Charge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Charge::Negative => "-1e",
            Charge::Neutral => "±0e",
            Charge::Positive => "+1e",
            Charge::PlusOneThird => "+1∕3e",
            Charge::PlusTwoThirds => "+2∕3e",
            Charge::MinusOneThird => "-1∕3e",
            Charge::MinusTwoThirds => "-2∕3e",
            Charge::Unknown => "unknown charge",
        };
        f.write_str(label)
    }
}

/// Whether a particle carries integer ("full") or half-integer spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpinType {
    Full,
    Half,
    #[default]
    Unknown,
}

impl fmt::Display for SpinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SpinType::Full => "full",
            SpinType::Half => "half",
            SpinType::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// The closed set of particle categories the catalog distinguishes.
///
/// Composite categories (meson, baryon, diquark) have parseable quark
/// content, quarks report themselves, and leptons and bosons have none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleType {
    Quark,
    DiQuark,
    Baryon,
    Meson,
    Lepton,
    Boson,
    #[default]
    Unknown,
}

impl ParticleType {
    /// Whether particles of this category are bound states of quarks.
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            ParticleType::DiQuark | ParticleType::Baryon | ParticleType::Meson
        )
    }
}

impl fmt::Display for ParticleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ParticleType::Quark => "quark",
            ParticleType::DiQuark => "diquark",
            ParticleType::Baryon => "baryon",
            ParticleType::Meson => "meson",
            ParticleType::Lepton => "lepton",
            ParticleType::Boson => "boson",
            ParticleType::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

impl FromStr for ParticleType {
    type Err = ParseParticleTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quark" => Ok(ParticleType::Quark),
            "diquark" => Ok(ParticleType::DiQuark),
            "baryon" => Ok(ParticleType::Baryon),
            "meson" => Ok(ParticleType::Meson),
            "lepton" => Ok(ParticleType::Lepton),
            "boson" => Ok(ParticleType::Boson),
            "unknown" => Ok(ParticleType::Unknown),
            _ => Err(ParseParticleTypeError(s.to_string())),
        }
    }
}

/// Intrinsic parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Parity {
    Positive,
    Negative,
    #[default]
    Undefined,
}

impl Parity {
    /// Maps the catalog's optional signum encoding (`1`, `-1`, absent).
    pub fn from_signum(value: Option<i8>) -> Self {
        match value {
            Some(1) => Parity::Positive,
            Some(-1) => Parity::Negative,
            _ => Parity::Undefined,
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Parity::Positive => "+",
            Parity::Negative => "-",
            Parity::Undefined => "undefined",
        };
        f.write_str(label)
    }
}

/// Half-integer ladder from 0 to 4 used for both total angular momentum
/// and isospin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AngularMomentum {
    Zero,
    Half,
    One,
    ThreeHalves,
    Two,
    FiveHalves,
    Three,
    SevenHalves,
    Four,
    #[default]
    Unknown,
}

impl AngularMomentum {
    /// Classifies a raw numeric quantum number; values off the ladder
    /// classify as [`AngularMomentum::Unknown`].
    pub fn from_value(value: f64) -> Self {
        if value == 0.0 {
            AngularMomentum::Zero
        } else if value == 0.5 {
            AngularMomentum::Half
        } else if value == 1.0 {
            AngularMomentum::One
        } else if value == 1.5 {
            AngularMomentum::ThreeHalves
        } else if value == 2.0 {
            AngularMomentum::Two
        } else if value == 2.5 {
            AngularMomentum::FiveHalves
        } else if value == 3.0 {
            AngularMomentum::Three
        } else if value == 3.5 {
            AngularMomentum::SevenHalves
        } else if value == 4.0 {
            AngularMomentum::Four
        } else {
            AngularMomentum::Unknown
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            AngularMomentum::Zero => Some(0.0),
            AngularMomentum::Half => Some(0.5),
            AngularMomentum::One => Some(1.0),
            AngularMomentum::ThreeHalves => Some(1.5),
            AngularMomentum::Two => Some(2.0),
            AngularMomentum::FiveHalves => Some(2.5),
            AngularMomentum::Three => Some(3.0),
            AngularMomentum::SevenHalves => Some(3.5),
            AngularMomentum::Four => Some(4.0),
            AngularMomentum::Unknown => None,
        }
    }
}

impl fmt::Display for AngularMomentum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AngularMomentum::Zero => "0",
            AngularMomentum::Half => "1/2",
            AngularMomentum::One => "1",
            AngularMomentum::ThreeHalves => "3/2",
            AngularMomentum::Two => "2",
            AngularMomentum::FiveHalves => "5/2",
            AngularMomentum::Three => "3",
            AngularMomentum::SevenHalves => "7/2",
            AngularMomentum::Four => "4",
            AngularMomentum::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn charge_from_exact_integers() {
        assert_eq!(Charge::from_value(-1.0), Charge::Negative);
        assert_eq!(Charge::from_value(0.0), Charge::Neutral);
        assert_eq!(Charge::from_value(1.0), Charge::Positive);
    }

    #[test]
    fn charge_from_thirds_ranges() {
        assert_eq!(Charge::from_value(0.333), Charge::PlusOneThird);
        assert_eq!(Charge::from_value(1.0 / 3.0), Charge::PlusOneThird);
        assert_eq!(Charge::from_value(0.667), Charge::PlusTwoThirds);
        assert_eq!(Charge::from_value(2.0 / 3.0), Charge::PlusTwoThirds);
        assert_eq!(Charge::from_value(-0.333), Charge::MinusOneThird);
        assert_eq!(Charge::from_value(-0.667), Charge::MinusTwoThirds);
    }

    #[test]
    fn charge_outside_known_encodings_is_unknown() {
        assert_eq!(Charge::from_value(2.0), Charge::Unknown);
        assert_eq!(Charge::from_value(0.45), Charge::Unknown);
        assert_eq!(Charge::from_value(-0.9), Charge::Unknown);
    }

    #[test]
    fn charge_in_thirds_is_exact() {
        assert_eq!(Charge::Positive.in_thirds(), Some(3));
        assert_eq!(Charge::MinusTwoThirds.in_thirds(), Some(-2));
        assert_eq!(Charge::Unknown.in_thirds(), None);
    }

    #[test]
    fn charge_display() {
        assert_eq!(Charge::Positive.to_string(), "+1e");
        assert_eq!(Charge::Neutral.to_string(), "±0e");
        assert_eq!(Charge::MinusOneThird.to_string(), "-1∕3e");
        assert_eq!(Charge::PlusTwoThirds.to_string(), "+2∕3e");
    }

    #[test]
    fn particle_type_round_trips_through_str() {
        for pt in [
            ParticleType::Quark,
            ParticleType::DiQuark,
            ParticleType::Baryon,
            ParticleType::Meson,
            ParticleType::Lepton,
            ParticleType::Boson,
        ] {
            assert_eq!(ParticleType::from_str(&pt.to_string()).unwrap(), pt);
        }
        assert!(ParticleType::from_str("hadron").is_err());
    }

    #[test]
    fn composite_categories() {
        assert!(ParticleType::Meson.is_composite());
        assert!(ParticleType::Baryon.is_composite());
        assert!(ParticleType::DiQuark.is_composite());
        assert!(!ParticleType::Quark.is_composite());
        assert!(!ParticleType::Lepton.is_composite());
        assert!(!ParticleType::Boson.is_composite());
    }

    #[test]
    fn angular_momentum_ladder() {
        assert_eq!(AngularMomentum::from_value(0.5), AngularMomentum::Half);
        assert_eq!(
            AngularMomentum::from_value(1.5),
            AngularMomentum::ThreeHalves
        );
        assert_eq!(AngularMomentum::from_value(0.25), AngularMomentum::Unknown);
        assert_eq!(AngularMomentum::Half.to_string(), "1/2");
        assert_eq!(AngularMomentum::ThreeHalves.value(), Some(1.5));
    }

    #[test]
    fn parity_from_signum() {
        assert_eq!(Parity::from_signum(Some(1)), Parity::Positive);
        assert_eq!(Parity::from_signum(Some(-1)), Parity::Negative);
        assert_eq!(Parity::from_signum(None), Parity::Undefined);
        assert_eq!(Parity::from_signum(Some(3)), Parity::Undefined);
    }
}
