//! Catalog records and the fully typed particle view built from them.

use serde::Deserialize;
use std::fmt;

use super::measure::{DecayWidth, Mass};
use super::quark::QuarkContent;
use super::types::{AngularMomentum, Charge, Parity, ParticleType, SpinType};

/// One row of the canonical catalog, as stored in the embedded data.
///
/// Fields keep the raw encodings (numeric charge, float quantum numbers,
/// unparsed quark-content string); the typed projections live on
/// [`Particle`] and the accessor layer. Records are constructed once at
/// catalog load and never mutated.
#[derive(Debug, Clone, Deserialize)]
pub struct ParticleRecord {
    /// Canonical signed id; positive particle, negative antiparticle.
    pub id: i32,
    /// Canonical CamelCase name, e.g. `PiPlus`.
    pub name: String,
    /// PDG display name, e.g. `pi+`.
    pub pdg_name: String,
    /// ASCII symbol, e.g. `pi+` or `ubar`.
    #[serde(default)]
    pub symbol: String,
    /// Unicode glyph, e.g. `π⁺`.
    #[serde(default)]
    pub unicode: String,
    /// Single-letter alias used by the shorthand lookup, e.g. `Z`.
    #[serde(default)]
    pub letter: Option<char>,
    /// Program-style name from simulation toolkits, e.g. `PION+`.
    #[serde(default)]
    pub program_name: Option<String>,
    /// Compound letter-digit code, e.g. `S003`.
    #[serde(default)]
    pub code: Option<String>,
    /// Numeric charge encoding in elementary charge units; thirds for
    /// quarks are stored as `±0.333` / `±0.667`.
    pub charge: f64,
    #[serde(default)]
    pub spin: SpinType,
    pub particle_type: ParticleType,
    #[serde(default)]
    pub self_conjugate: bool,
    /// Raw quark-content notation; empty for elementary non-quark
    /// particles.
    #[serde(default)]
    pub quarks: String,
    #[serde(default)]
    pub angular_momentum: Option<f64>,
    #[serde(default)]
    pub iso_spin: Option<f64>,
    #[serde(default)]
    pub mass: f64,
    #[serde(default)]
    pub mass_upper: f64,
    #[serde(default)]
    pub mass_lower: f64,
    /// Mean lifetime in seconds; zero for stable particles.
    #[serde(default)]
    pub lifetime: f64,
    #[serde(default)]
    pub decay_width: f64,
    #[serde(default)]
    pub decay_width_upper: f64,
    #[serde(default)]
    pub decay_width_lower: f64,
    #[serde(default)]
    pub decay_modes: Vec<String>,
    #[serde(default)]
    pub parity: Option<i8>,
    #[serde(default)]
    pub c_parity: Option<i8>,
}

impl ParticleRecord {
    /// Canonical id of the antiparticle: the negation, unless the
    /// particle is self-conjugate.
    pub fn antiparticle_id(&self) -> i32 {
        if self.self_conjugate {
            self.id
        } else {
            -self.id
        }
    }

    pub fn charge(&self) -> Charge {
        Charge::from_value(self.charge)
    }

    pub fn mass_measured(&self) -> Mass {
        Mass::new(self.mass, self.mass_upper, self.mass_lower)
    }

    pub fn decay_width_measured(&self) -> DecayWidth {
        DecayWidth::new(
            self.decay_width,
            self.decay_width_upper,
            self.decay_width_lower,
        )
    }
}

/// A fully typed projection of one catalog record.
///
/// One concrete struct covers every catalog entry; category-based
/// dispatch goes through [`ParticleType`].
#[derive(Debug, Clone)]
pub struct Particle {
    pub id: i32,
    pub name: String,
    pub pdg_name: String,
    pub symbol: String,
    pub unicode: String,
    pub charge: Charge,
    pub spin_type: SpinType,
    pub particle_type: ParticleType,
    pub angular_momentum: AngularMomentum,
    pub isospin: AngularMomentum,
    pub mass: Mass,
    pub lifetime: f64,
    pub decay_width: DecayWidth,
    pub parity: Parity,
    pub c_parity: Parity,
    pub self_conjugate: bool,
    /// Canonical id of the antiparticle.
    pub antiparticle: i32,
    /// Structured quark content; `None` for leptons and bosons.
    pub quarks: Option<QuarkContent>,
    pub decay_modes: Vec<String>,
}

impl Particle {
    pub fn is_antiparticle(&self) -> bool {
        self.id < 0
    }

    pub fn is_elementary(&self) -> bool {
        !self.particle_type.is_composite()
    }

    pub fn is_self_conjugate(&self) -> bool {
        self.id == self.antiparticle
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.unicode, self.charge, self.mass, self.id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i32, self_conjugate: bool) -> ParticleRecord {
        toml::from_str(&format!(
            r#"
            id = {id}
            name = "Test"
            pdg_name = "t+"
            charge = 1.0
            particle_type = "meson"
            self_conjugate = {self_conjugate}
            "#
        ))
        .unwrap()
    }

    #[test]
    fn antiparticle_id_negates_unless_self_conjugate() {
        assert_eq!(record(211, false).antiparticle_id(), -211);
        assert_eq!(record(-211, false).antiparticle_id(), 211);
        assert_eq!(record(111, true).antiparticle_id(), 111);
    }

    #[test]
    fn record_deserializes_with_defaults() {
        let rec = record(211, false);
        assert_eq!(rec.charge(), Charge::Positive);
        assert_eq!(rec.spin, SpinType::Unknown);
        assert!(rec.quarks.is_empty());
        assert!(rec.decay_modes.is_empty());
        assert_eq!(rec.mass, 0.0);
    }

    #[test]
    fn full_record_deserializes() {
        let rec: ParticleRecord = toml::from_str(
            r#"
            id = 211
            name = "PiPlus"
            pdg_name = "pi+"
            symbol = "pi+"
            unicode = "π⁺"
            program_name = "PION+"
            code = "M008"
            charge = 1.0
            spin = "full"
            particle_type = "meson"
            quarks = "uD"
            angular_momentum = 0.0
            iso_spin = 1.0
            mass = 139.57039
            mass_upper = 0.00018
            mass_lower = 0.00018
            lifetime = 2.6033e-8
            parity = -1
            decay_modes = ["mu+ nu_mu"]
            "#,
        )
        .unwrap();
        assert_eq!(rec.particle_type, ParticleType::Meson);
        assert_eq!(rec.spin, SpinType::Full);
        assert_eq!(rec.mass_measured().to_string(), "(139.57039 ± 0.00018) MeV");
        assert_eq!(Parity::from_signum(rec.parity), Parity::Negative);
        assert_eq!(rec.decay_modes, vec!["mu+ nu_mu".to_string()]);
    }
}
