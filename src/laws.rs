//! Conservation-law checks for particle reactions.
//!
//! Each law compares a conserved quantity between the two sides of a
//! reaction. Charge, baryon number, and lepton number are summed in
//! exact integer thirds so that fractional quark charges never hit
//! floating-point comparison. Isospin is summed as written in the
//! catalog, with particles that carry no isospin assignment skipped;
//! it holds only for strong processes, so a failed isospin check flags
//! a reaction as isospin-violating rather than impossible.

use crate::catalog::Catalog;
use crate::error::Error;
use crate::model::types::ParticleType;
use crate::resolve::CanonicalId;

/// The verdict of a single conservation law applied to a reaction.
#[derive(Debug, Clone, PartialEq)]
pub struct ConservationCheck {
    /// Whether the law holds for the reaction.
    pub permitted: bool,
    /// A human-readable imbalance description when the law fails.
    pub reason: Option<String>,
}

impl ConservationCheck {
    fn holds() -> Self {
        Self {
            permitted: true,
            reason: None,
        }
    }

    fn violated(reason: String) -> Self {
        Self {
            permitted: false,
            reason: Some(reason),
        }
    }
}

/// All four laws applied to one decay, parent on the left and products
/// on the right.
#[derive(Debug, Clone, PartialEq)]
pub struct DecayAssessment {
    pub charge: ConservationCheck,
    pub baryon_number: ConservationCheck,
    pub lepton_number: ConservationCheck,
    pub isospin: ConservationCheck,
}

impl DecayAssessment {
    /// Whether every absolute law holds. Isospin is advisory and not
    /// counted here.
    pub fn permitted(&self) -> bool {
        self.charge.permitted && self.baryon_number.permitted && self.lepton_number.permitted
    }
}

impl Catalog {
    fn charge_thirds_sum(&self, ids: &[CanonicalId]) -> Result<i32, Error> {
        let mut sum = 0;
        for &id in ids {
            sum += self.record_or(id)?.charge().in_thirds().unwrap_or(0);
        }
        Ok(sum)
    }

    /// Baryon number in thirds: a quark counts one third, a diquark
    /// two, a baryon three, each negated for the antiparticle.
    fn baryon_thirds_sum(&self, ids: &[CanonicalId]) -> Result<i32, Error> {
        let mut sum = 0;
        for &id in ids {
            let per_particle = match self.record_or(id)?.particle_type {
                ParticleType::Quark => 1,
                ParticleType::DiQuark => 2,
                ParticleType::Baryon => 3,
                _ => 0,
            };
            sum += per_particle * id.signum();
        }
        Ok(sum)
    }

    fn lepton_number_sum(&self, ids: &[CanonicalId]) -> Result<i32, Error> {
        let mut sum = 0;
        for &id in ids {
            if self.record_or(id)?.particle_type == ParticleType::Lepton {
                sum += id.signum();
            }
        }
        Ok(sum)
    }

    fn isospin_sum(&self, ids: &[CanonicalId]) -> Result<f64, Error> {
        let mut sum = 0.0;
        for &id in ids {
            if let Some(iso) = self.record_or(id)?.iso_spin {
                sum += iso;
            }
        }
        Ok(sum)
    }

    /// Checks electric-charge conservation between the two sides.
    pub fn charge_conservation(
        &self,
        initial: &[CanonicalId],
        products: &[CanonicalId],
    ) -> Result<ConservationCheck, Error> {
        let before = self.charge_thirds_sum(initial)?;
        let after = self.charge_thirds_sum(products)?;
        if before == after {
            Ok(ConservationCheck::holds())
        } else {
            Ok(ConservationCheck::violated(format!(
                "charge changes from {before}/3 to {after}/3"
            )))
        }
    }

    /// Checks baryon-number conservation between the two sides.
    pub fn baryon_number_conservation(
        &self,
        initial: &[CanonicalId],
        products: &[CanonicalId],
    ) -> Result<ConservationCheck, Error> {
        let before = self.baryon_thirds_sum(initial)?;
        let after = self.baryon_thirds_sum(products)?;
        if before == after {
            Ok(ConservationCheck::holds())
        } else {
            Ok(ConservationCheck::violated(format!(
                "baryon number changes from {before}/3 to {after}/3"
            )))
        }
    }

    /// Checks lepton-number conservation between the two sides.
    pub fn lepton_number_conservation(
        &self,
        initial: &[CanonicalId],
        products: &[CanonicalId],
    ) -> Result<ConservationCheck, Error> {
        let before = self.lepton_number_sum(initial)?;
        let after = self.lepton_number_sum(products)?;
        if before == after {
            Ok(ConservationCheck::holds())
        } else {
            Ok(ConservationCheck::violated(format!(
                "lepton number changes from {before} to {after}"
            )))
        }
    }

    /// Checks isospin conservation between the two sides. Particles
    /// with no isospin assignment contribute nothing.
    pub fn isospin_conservation(
        &self,
        initial: &[CanonicalId],
        products: &[CanonicalId],
    ) -> Result<ConservationCheck, Error> {
        let before = self.isospin_sum(initial)?;
        let after = self.isospin_sum(products)?;
        if (before - after).abs() < 1e-9 {
            Ok(ConservationCheck::holds())
        } else {
            Ok(ConservationCheck::violated(format!(
                "isospin changes from {before} to {after}"
            )))
        }
    }

    /// Applies all four laws to a single-parent decay.
    pub fn check_decay(
        &self,
        parent: CanonicalId,
        products: &[CanonicalId],
    ) -> Result<DecayAssessment, Error> {
        let initial = [parent];
        Ok(DecayAssessment {
            charge: self.charge_conservation(&initial, products)?,
            baryon_number: self.baryon_number_conservation(&initial, products)?,
            lepton_number: self.lepton_number_conservation(&initial, products)?,
            isospin: self.isospin_conservation(&initial, products)?,
        })
    }
}

/// Checks electric-charge conservation against the shared catalog.
pub fn charge_conservation(
    initial: &[CanonicalId],
    products: &[CanonicalId],
) -> Result<ConservationCheck, Error> {
    Catalog::shared().charge_conservation(initial, products)
}

/// Checks baryon-number conservation against the shared catalog.
pub fn baryon_number_conservation(
    initial: &[CanonicalId],
    products: &[CanonicalId],
) -> Result<ConservationCheck, Error> {
    Catalog::shared().baryon_number_conservation(initial, products)
}

/// Checks lepton-number conservation against the shared catalog.
pub fn lepton_number_conservation(
    initial: &[CanonicalId],
    products: &[CanonicalId],
) -> Result<ConservationCheck, Error> {
    Catalog::shared().lepton_number_conservation(initial, products)
}

/// Checks isospin conservation against the shared catalog.
pub fn isospin_conservation(
    initial: &[CanonicalId],
    products: &[CanonicalId],
) -> Result<ConservationCheck, Error> {
    Catalog::shared().isospin_conservation(initial, products)
}

/// Applies all four laws to a single-parent decay against the shared
/// catalog.
pub fn check_decay(
    parent: CanonicalId,
    products: &[CanonicalId],
) -> Result<DecayAssessment, Error> {
    Catalog::shared().check_decay(parent, products)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> &'static Catalog {
        Catalog::shared()
    }

    fn id(name: &str) -> CanonicalId {
        catalog().resolve(name).unwrap()
    }

    #[test]
    fn neutron_beta_decay_is_permitted() {
        let assessment = catalog()
            .check_decay(id("n"), &[id("proton"), id("e-"), id("nu_e~")])
            .unwrap();
        assert!(assessment.charge.permitted);
        assert!(assessment.baryon_number.permitted);
        assert!(assessment.lepton_number.permitted);
        assert!(assessment.isospin.permitted);
        assert!(assessment.permitted());
    }

    #[test]
    fn charge_violation_is_reported() {
        // pi+ → pi0 would create net charge out of nothing
        let check = catalog()
            .charge_conservation(&[id("pi+")], &[id("pi0")])
            .unwrap();
        assert!(!check.permitted);
        assert_eq!(check.reason.as_deref(), Some("charge changes from 3/3 to 0/3"));
    }

    #[test]
    fn baryon_number_violation_is_reported() {
        // proton → pi+ pi0 conserves charge but not baryon number
        let check = catalog()
            .baryon_number_conservation(&[id("proton")], &[id("pi+"), id("pi0")])
            .unwrap();
        assert!(!check.permitted);
    }

    #[test]
    fn lepton_number_violation_is_reported() {
        // neutron → proton e- (without the antineutrino)
        let check = catalog()
            .lepton_number_conservation(&[id("n")], &[id("proton"), id("e-")])
            .unwrap();
        assert!(!check.permitted);
        assert_eq!(
            check.reason.as_deref(),
            Some("lepton number changes from 0 to 1")
        );
    }

    #[test]
    fn antiparticles_carry_negative_quantum_numbers() {
        // e+ e- annihilation to two photons
        let assessment = catalog()
            .charge_conservation(&[id("e-"), id("e+")], &[id("gamma"), id("gamma")])
            .unwrap();
        assert!(assessment.permitted);
        let lepton = catalog()
            .lepton_number_conservation(&[id("e-"), id("e+")], &[id("gamma"), id("gamma")])
            .unwrap();
        assert!(lepton.permitted);
    }

    #[test]
    fn quarks_carry_fractional_baryon_number() {
        // proton → u u d at the quark level
        let check = catalog()
            .baryon_number_conservation(&[id("proton")], &[id("u"), id("u"), id("d")])
            .unwrap();
        assert!(check.permitted);
    }

    #[test]
    fn unknown_ids_are_rejected() {
        assert!(matches!(
            catalog().charge_conservation(&[987654], &[]),
            Err(Error::UnknownId(987654))
        ));
    }
}
