//! Property accessors over the catalog.
//!
//! Each accessor is a pure function: resolve the given identifier to a
//! canonical id, look up the record, and project one field into its
//! typed representation. Accessors that only apply to a subset of
//! particle kinds fail with a not-applicable error rather than
//! returning a misleading default.
//!
//! The free functions at the bottom mirror the [`Catalog`] methods over
//! the shared embedded catalog, so callers that don't manage their own
//! data can write `charge("pi+")` directly.

use crate::catalog::Catalog;
use crate::error::Error;
use crate::model::measure::{DecayWidth, Mass};
use crate::model::quark::{QuarkContent, QuarkSymbol, QuarkTuple};
use crate::model::record::Particle;
use crate::model::types::{AngularMomentum, Charge, Parity, ParticleType, SpinType};
use crate::resolve::{CanonicalId, Identifier};

impl Catalog {
    /// Returns the canonical name for any supported identifier.
    pub fn name<'a>(&self, ident: impl Into<Identifier<'a>>) -> Result<&str, Error> {
        let id = self.resolve(ident)?;
        Ok(self.record_or(id)?.name.as_str())
    }

    /// Returns the PDG display name.
    pub fn pdg_name<'a>(&self, ident: impl Into<Identifier<'a>>) -> Result<&str, Error> {
        let id = self.resolve(ident)?;
        Ok(self.record_or(id)?.pdg_name.as_str())
    }

    /// Returns the canonical id of the antiparticle: the negation,
    /// unless the particle is self-conjugate.
    pub fn antiparticle<'a>(
        &self,
        ident: impl Into<Identifier<'a>>,
    ) -> Result<CanonicalId, Error> {
        let id = self.resolve(ident)?;
        let anti = self.record_or(id)?.antiparticle_id();
        // A catalog missing the partner record is caught here rather
        // than at the next lookup.
        self.record_or(anti)?;
        Ok(anti)
    }

    /// Returns the canonical name of the antiparticle.
    pub fn antiparticle_name<'a>(
        &self,
        ident: impl Into<Identifier<'a>>,
    ) -> Result<&str, Error> {
        let anti = self.antiparticle(ident)?;
        Ok(self.record_or(anti)?.name.as_str())
    }

    /// Returns the typed electric charge.
    pub fn charge<'a>(&self, ident: impl Into<Identifier<'a>>) -> Result<Charge, Error> {
        let id = self.resolve(ident)?;
        Ok(self.record_or(id)?.charge())
    }

    /// Returns the mass with its measurement errors.
    pub fn mass<'a>(&self, ident: impl Into<Identifier<'a>>) -> Result<Mass, Error> {
        let id = self.resolve(ident)?;
        Ok(self.record_or(id)?.mass_measured())
    }

    /// Returns the mean lifetime in seconds; zero for stable particles.
    pub fn lifetime<'a>(&self, ident: impl Into<Identifier<'a>>) -> Result<f64, Error> {
        let id = self.resolve(ident)?;
        Ok(self.record_or(id)?.lifetime)
    }

    /// Returns the decay width with its measurement errors.
    pub fn decay_width<'a>(
        &self,
        ident: impl Into<Identifier<'a>>,
    ) -> Result<DecayWidth, Error> {
        let id = self.resolve(ident)?;
        Ok(self.record_or(id)?.decay_width_measured())
    }

    /// Returns the decay modes as listed in the catalog.
    pub fn decay_modes<'a>(
        &self,
        ident: impl Into<Identifier<'a>>,
    ) -> Result<&[String], Error> {
        let id = self.resolve(ident)?;
        Ok(self.record_or(id)?.decay_modes.as_slice())
    }

    /// Returns whether the particle carries integer or half-integer
    /// spin.
    pub fn spin_type<'a>(&self, ident: impl Into<Identifier<'a>>) -> Result<SpinType, Error> {
        let id = self.resolve(ident)?;
        Ok(self.record_or(id)?.spin)
    }

    /// Returns the particle category.
    pub fn particle_type<'a>(
        &self,
        ident: impl Into<Identifier<'a>>,
    ) -> Result<ParticleType, Error> {
        let id = self.resolve(ident)?;
        Ok(self.record_or(id)?.particle_type)
    }

    /// Returns the total angular momentum.
    pub fn angular_momentum<'a>(
        &self,
        ident: impl Into<Identifier<'a>>,
    ) -> Result<AngularMomentum, Error> {
        let id = self.resolve(ident)?;
        Ok(self
            .record_or(id)?
            .angular_momentum
            .map(AngularMomentum::from_value)
            .unwrap_or(AngularMomentum::Unknown))
    }

    /// Returns the isospin.
    pub fn isospin<'a>(
        &self,
        ident: impl Into<Identifier<'a>>,
    ) -> Result<AngularMomentum, Error> {
        let id = self.resolve(ident)?;
        Ok(self
            .record_or(id)?
            .iso_spin
            .map(AngularMomentum::from_value)
            .unwrap_or(AngularMomentum::Unknown))
    }

    /// Returns the intrinsic parity.
    pub fn parity<'a>(&self, ident: impl Into<Identifier<'a>>) -> Result<Parity, Error> {
        let id = self.resolve(ident)?;
        Ok(Parity::from_signum(self.record_or(id)?.parity))
    }

    /// Returns whether the particle is its own antiparticle.
    pub fn is_self_conjugate<'a>(
        &self,
        ident: impl Into<Identifier<'a>>,
    ) -> Result<bool, Error> {
        let id = self.resolve(ident)?;
        Ok(self.record_or(id)?.self_conjugate)
    }

    /// Returns the structured quark content.
    ///
    /// Leptons and bosons have none and fail with a not-applicable
    /// error; a quark reports a one-element tuple of itself; composite
    /// particles parse their stored notation.
    pub fn quark_content<'a>(
        &self,
        ident: impl Into<Identifier<'a>>,
    ) -> Result<QuarkContent, Error> {
        let id = self.resolve(ident)?;
        let record = self.record_or(id)?;
        match record.particle_type {
            ParticleType::Lepton | ParticleType::Boson | ParticleType::Unknown => {
                Err(Error::not_applicable("quark content", record.particle_type))
            }
            ParticleType::Quark => match QuarkSymbol::from_id(record.id) {
                Some(symbol) => Ok(QuarkContent::Tuple(QuarkTuple::new(vec![symbol]))),
                None => Err(Error::malformed(
                    &record.pdg_name,
                    "quark record outside the flavor id range",
                )),
            },
            _ => self.parse_quark_content(&record.quarks),
        }
    }

    /// Returns the fully typed particle view for an identifier.
    pub fn particle<'a>(&self, ident: impl Into<Identifier<'a>>) -> Result<Particle, Error> {
        let id = self.resolve(ident)?;
        let record = self.record_or(id)?;
        let quarks = match record.particle_type {
            ParticleType::Lepton | ParticleType::Boson | ParticleType::Unknown => None,
            _ => Some(self.quark_content(id)?),
        };
        Ok(Particle {
            id: record.id,
            name: record.name.clone(),
            pdg_name: record.pdg_name.clone(),
            symbol: record.symbol.clone(),
            unicode: record.unicode.clone(),
            charge: record.charge(),
            spin_type: record.spin,
            particle_type: record.particle_type,
            angular_momentum: record
                .angular_momentum
                .map(AngularMomentum::from_value)
                .unwrap_or(AngularMomentum::Unknown),
            isospin: record
                .iso_spin
                .map(AngularMomentum::from_value)
                .unwrap_or(AngularMomentum::Unknown),
            mass: record.mass_measured(),
            lifetime: record.lifetime,
            decay_width: record.decay_width_measured(),
            parity: Parity::from_signum(record.parity),
            c_parity: Parity::from_signum(record.c_parity),
            self_conjugate: record.self_conjugate,
            antiparticle: record.antiparticle_id(),
            quarks,
            decay_modes: record.decay_modes.clone(),
        })
    }

    /// Returns whether the particle is a quark.
    pub fn is_quark<'a>(&self, ident: impl Into<Identifier<'a>>) -> Result<bool, Error> {
        Ok(self.particle_type(ident)? == ParticleType::Quark)
    }

    /// Returns whether the particle is a lepton.
    pub fn is_lepton<'a>(&self, ident: impl Into<Identifier<'a>>) -> Result<bool, Error> {
        Ok(self.particle_type(ident)? == ParticleType::Lepton)
    }

    /// Returns whether the particle is a boson.
    pub fn is_boson<'a>(&self, ident: impl Into<Identifier<'a>>) -> Result<bool, Error> {
        Ok(self.particle_type(ident)? == ParticleType::Boson)
    }

    /// Returns whether the particle is a meson.
    pub fn is_meson<'a>(&self, ident: impl Into<Identifier<'a>>) -> Result<bool, Error> {
        Ok(self.particle_type(ident)? == ParticleType::Meson)
    }

    /// Returns whether the particle is a baryon.
    pub fn is_baryon<'a>(&self, ident: impl Into<Identifier<'a>>) -> Result<bool, Error> {
        Ok(self.particle_type(ident)? == ParticleType::Baryon)
    }

    /// All canonical ids in catalog order.
    pub fn list_ids(&self) -> Vec<CanonicalId> {
        self.ids().collect()
    }

    /// All canonical names in catalog order.
    pub fn list_names(&self) -> Vec<&str> {
        self.records().map(|r| r.name.as_str()).collect()
    }

    /// All PDG display names in catalog order.
    pub fn list_pdg_names(&self) -> Vec<&str> {
        self.records().map(|r| r.pdg_name.as_str()).collect()
    }
}

/// Resolves an identifier against the shared catalog.
pub fn resolve<'a>(ident: impl Into<Identifier<'a>>) -> Result<CanonicalId, Error> {
    Catalog::shared().resolve(ident)
}

/// Returns the canonical name; the inverse of [`resolve`] for textual
/// output.
pub fn name<'a>(ident: impl Into<Identifier<'a>>) -> Result<&'static str, Error> {
    Catalog::shared().name(ident)
}

/// Returns the PDG display name.
pub fn pdg_name<'a>(ident: impl Into<Identifier<'a>>) -> Result<&'static str, Error> {
    Catalog::shared().pdg_name(ident)
}

/// Returns the canonical id of the antiparticle.
pub fn antiparticle<'a>(ident: impl Into<Identifier<'a>>) -> Result<CanonicalId, Error> {
    Catalog::shared().antiparticle(ident)
}

/// Returns the canonical name of the antiparticle.
pub fn antiparticle_name<'a>(ident: impl Into<Identifier<'a>>) -> Result<&'static str, Error> {
    Catalog::shared().antiparticle_name(ident)
}

/// Returns the typed electric charge.
pub fn charge<'a>(ident: impl Into<Identifier<'a>>) -> Result<Charge, Error> {
    Catalog::shared().charge(ident)
}

/// Returns the mass with its measurement errors.
pub fn mass<'a>(ident: impl Into<Identifier<'a>>) -> Result<Mass, Error> {
    Catalog::shared().mass(ident)
}

/// Returns the mean lifetime in seconds.
pub fn lifetime<'a>(ident: impl Into<Identifier<'a>>) -> Result<f64, Error> {
    Catalog::shared().lifetime(ident)
}

/// Returns the decay width with its measurement errors.
pub fn decay_width<'a>(ident: impl Into<Identifier<'a>>) -> Result<DecayWidth, Error> {
    Catalog::shared().decay_width(ident)
}

/// Returns the decay modes as listed in the catalog.
pub fn decay_modes<'a>(ident: impl Into<Identifier<'a>>) -> Result<&'static [String], Error> {
    Catalog::shared().decay_modes(ident)
}

/// Returns whether the particle carries integer or half-integer spin.
pub fn spin_type<'a>(ident: impl Into<Identifier<'a>>) -> Result<SpinType, Error> {
    Catalog::shared().spin_type(ident)
}

/// Returns the particle category.
pub fn particle_type<'a>(ident: impl Into<Identifier<'a>>) -> Result<ParticleType, Error> {
    Catalog::shared().particle_type(ident)
}

/// Returns the total angular momentum.
pub fn angular_momentum<'a>(
    ident: impl Into<Identifier<'a>>,
) -> Result<AngularMomentum, Error> {
    Catalog::shared().angular_momentum(ident)
}

/// Returns the isospin.
pub fn isospin<'a>(ident: impl Into<Identifier<'a>>) -> Result<AngularMomentum, Error> {
    Catalog::shared().isospin(ident)
}

/// Returns whether the particle is its own antiparticle.
pub fn is_self_conjugate<'a>(ident: impl Into<Identifier<'a>>) -> Result<bool, Error> {
    Catalog::shared().is_self_conjugate(ident)
}

/// Returns the structured quark content.
pub fn quark_content<'a>(ident: impl Into<Identifier<'a>>) -> Result<QuarkContent, Error> {
    Catalog::shared().quark_content(ident)
}

/// Parses raw quark-content notation against the shared catalog.
pub fn parse_quark_content(raw: &str) -> Result<QuarkContent, Error> {
    Catalog::shared().parse_quark_content(raw)
}

/// Returns the fully typed particle view.
pub fn particle<'a>(ident: impl Into<Identifier<'a>>) -> Result<Particle, Error> {
    Catalog::shared().particle(ident)
}

/// Returns whether the particle is a quark.
pub fn is_quark<'a>(ident: impl Into<Identifier<'a>>) -> Result<bool, Error> {
    Catalog::shared().is_quark(ident)
}

/// Returns whether the particle is a lepton.
pub fn is_lepton<'a>(ident: impl Into<Identifier<'a>>) -> Result<bool, Error> {
    Catalog::shared().is_lepton(ident)
}

/// Returns whether the particle is a boson.
pub fn is_boson<'a>(ident: impl Into<Identifier<'a>>) -> Result<bool, Error> {
    Catalog::shared().is_boson(ident)
}

/// Returns whether the particle is a meson.
pub fn is_meson<'a>(ident: impl Into<Identifier<'a>>) -> Result<bool, Error> {
    Catalog::shared().is_meson(ident)
}

/// Returns whether the particle is a baryon.
pub fn is_baryon<'a>(ident: impl Into<Identifier<'a>>) -> Result<bool, Error> {
    Catalog::shared().is_baryon(ident)
}

/// All canonical ids in the shared catalog.
pub fn list_ids() -> Vec<CanonicalId> {
    Catalog::shared().list_ids()
}

/// All canonical names in the shared catalog.
pub fn list_names() -> Vec<&'static str> {
    Catalog::shared().list_names()
}

/// All PDG display names in the shared catalog.
pub fn list_pdg_names() -> Vec<&'static str> {
    Catalog::shared().list_pdg_names()
}
