//! Whole-catalog invariants over the embedded particle data, exercised
//! through the public API only.

use pdg_resolve::laws;
use pdg_resolve::{
    antiparticle, charge, is_self_conjugate, list_ids, list_names, name, parse_quark_content,
    particle_type, quark_content, resolve, Charge, Error, ParticleType, QuarkContent,
};

#[test]
fn every_canonical_name_resolves_back_to_its_id() {
    for id in list_ids() {
        let canonical = name(id).unwrap();
        assert_eq!(
            resolve(canonical).unwrap(),
            id,
            "canonical name {canonical:?} did not round-trip"
        );
    }
}

#[test]
fn canonical_names_are_unique() {
    let mut names = list_names();
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total);
}

#[test]
fn antiparticle_is_an_involution() {
    for id in list_ids() {
        let anti = antiparticle(id).unwrap();
        assert_eq!(
            antiparticle(anti).unwrap(),
            id,
            "antiparticle of antiparticle of {id} is not {id}"
        );
        if is_self_conjugate(id).unwrap() {
            assert_eq!(anti, id, "self-conjugate {id} must be its own antiparticle");
        } else {
            assert_eq!(anti, -id, "{id} must pair with its negation");
        }
    }
}

#[test]
fn every_spelling_of_the_positive_pion_agrees() {
    let id = resolve("pi+").unwrap();
    assert_eq!(id, 211);
    for spelling in ["Pi+", "PiPlus", "π⁺", "PION+", "211"] {
        assert_eq!(
            resolve(spelling).unwrap(),
            id,
            "spelling {spelling:?} diverged"
        );
    }
    assert_eq!(resolve(211).unwrap(), id);
    assert_eq!(resolve(211.0).unwrap(), id);
}

#[test]
fn numeric_and_textual_identifiers_agree() {
    assert_eq!(resolve("e-").unwrap(), resolve(11).unwrap());
    assert_eq!(resolve(211.0).unwrap(), resolve("211").unwrap());
    assert!(matches!(resolve(211.5), Err(Error::NonIntegerCode(_))));
}

#[test]
fn resolution_is_idempotent_on_canonical_ids() {
    for id in list_ids() {
        assert_eq!(resolve(id).unwrap(), id);
    }
}

#[test]
fn quark_content_charge_matches_the_declared_charge() {
    for id in list_ids() {
        match quark_content(id) {
            Ok(content) => {
                let declared = charge(id).unwrap().in_thirds().unwrap_or_else(|| {
                    panic!("particle {id} has quark content but unknown charge")
                });
                assert_eq!(
                    content.charge_thirds(),
                    Some(declared),
                    "constituent charge of {id} disagrees with its record"
                );
            }
            Err(Error::NotApplicable { .. }) => {
                let kind = particle_type(id).unwrap();
                assert!(
                    matches!(kind, ParticleType::Lepton | ParticleType::Boson),
                    "{id} of type {kind} should have quark content"
                );
            }
            Err(other) => panic!("quark content of {id} failed: {other}"),
        }
    }
}

#[test]
fn superposition_terms_all_carry_the_same_charge() {
    for id in list_ids() {
        if let Ok(QuarkContent::Superposition(sup)) = quark_content(id) {
            let charges: Vec<i32> = sup
                .terms()
                .iter()
                .map(|(_, tuple)| tuple.charge_thirds())
                .collect();
            assert!(
                charges.windows(2).all(|w| w[0] == w[1]),
                "mixture terms of {id} carry different charges: {charges:?}"
            );
        }
    }
}

#[test]
fn proton_is_an_ordered_three_quark_tuple() {
    match quark_content("proton").unwrap() {
        QuarkContent::Tuple(tuple) => {
            assert_eq!(tuple.len(), 3);
            assert_eq!(tuple.to_string(), "uud");
            assert_eq!(tuple.charge_thirds(), 3);
        }
        other => panic!("expected tuple, got {other}"),
    }
}

#[test]
fn neutral_pion_is_a_signed_mixture() {
    match quark_content("pi0").unwrap() {
        QuarkContent::Superposition(sup) => {
            assert_eq!(sup.len(), 2);
            assert!(!sup.terms()[0].0.is_negative());
            assert!(sup.terms()[1].0.is_negative());
        }
        other => panic!("expected superposition, got {other}"),
    }
}

#[test]
fn freestanding_notation_parses_like_catalog_notation() {
    let parsed = parse_quark_content("uud").unwrap();
    assert_eq!(parsed, quark_content("proton").unwrap());
}

#[test]
fn unknown_spellings_are_not_found() {
    match resolve("not-a-real-particle") {
        Err(Error::UnknownName(literal)) => assert_eq!(literal, "not-a-real-particle"),
        other => panic!("expected UnknownName, got {other:?}"),
    }
}

#[test]
fn charge_accessor_matches_known_particles() {
    assert_eq!(charge("proton").unwrap(), Charge::Positive);
    assert_eq!(charge("e-").unwrap(), Charge::Negative);
    assert_eq!(charge("n").unwrap(), Charge::Neutral);
    assert_eq!(charge("u").unwrap(), Charge::PlusTwoThirds);
    assert_eq!(charge("s").unwrap(), Charge::MinusOneThird);
}

#[test]
fn neutron_beta_decay_passes_every_law() {
    let parent = resolve("n").unwrap();
    let products = [
        resolve("p").unwrap(),
        resolve("e-").unwrap(),
        resolve("nu_e~").unwrap(),
    ];
    let assessment = laws::check_decay(parent, &products).unwrap();
    assert!(assessment.permitted(), "beta decay flagged: {assessment:?}");
}

#[test]
fn proton_decay_to_pions_violates_baryon_number() {
    let parent = resolve("p").unwrap();
    let products = [resolve("pi+").unwrap(), resolve("pi0").unwrap()];
    let assessment = laws::check_decay(parent, &products).unwrap();
    assert!(assessment.charge.permitted);
    assert!(!assessment.baryon_number.permitted);
    assert!(!assessment.permitted());
}

#[test]
fn muon_decay_conserves_lepton_number() {
    let parent = resolve("mu-").unwrap();
    let products = [
        resolve("e-").unwrap(),
        resolve("nu_e~").unwrap(),
        resolve("nu_mu").unwrap(),
    ];
    let check = laws::lepton_number_conservation(&[parent], &products).unwrap();
    assert!(check.permitted);
}
