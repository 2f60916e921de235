//! A pure Rust library for resolving human-entered subatomic particle
//! identifiers to canonical PDG Monte Carlo numbering codes, and for
//! parsing quark-content notation into structured, typed values. Any
//! spelling a physicist is likely to type — PDG names, program names,
//! unicode symbols, shorthand letters, numeric codes — lands on the
//! same canonical id, and every particle property comes back as a
//! typed value rather than a bare float or string.
//!
//! # Features
//!
//! - **Identifier resolution** — A fixed cascade from numeric codes
//!   through shorthand letters, compound codes, and exact PDG names
//!   down to an ordered fuzzy search over every naming convention
//! - **Quark-content parsing** — Simple tuples (`uud`), `√2` ratio
//!   superpositions (`(uU-dD)/√2`), and coefficient-prefixed
//!   superpositions (`a(uU+dD)+b(sS)`) parsed into typed terms
//! - **Typed properties** — Charge in exact thirds, masses and decay
//!   widths with asymmetric errors, spin and category enums
//! - **Conservation laws** — Charge, baryon-number, lepton-number, and
//!   isospin checks over whole reactions
//!
//! # Quick Start
//!
//! Every accessor takes anything convertible to an [`Identifier`]: an
//! integer code, an integer-valued decimal, or a name in any supported
//! convention.
//!
//! ```
//! use pdg_resolve::{resolve, name, charge, antiparticle, quark_content};
//! use pdg_resolve::{Charge, Error, QuarkContent};
//!
//! // All of these are the positive pion
//! assert_eq!(resolve("pi+")?, 211);
//! assert_eq!(resolve("π⁺")?, 211);
//! assert_eq!(resolve("PION+")?, 211);
//! assert_eq!(resolve(211.0)?, 211);
//!
//! assert_eq!(name(211)?, "PiPlus");
//! assert_eq!(charge("pi+")?, Charge::Positive);
//! assert_eq!(antiparticle("pi+")?, -211);
//!
//! // Composite particles expose structured quark content
//! match quark_content("proton")? {
//!     QuarkContent::Tuple(tuple) => assert_eq!(tuple.to_string(), "uud"),
//!     other => panic!("unexpected content: {other}"),
//! }
//!
//! // Unknown spellings are explicit errors, never panics
//! assert!(matches!(
//!     resolve("not-a-real-particle"),
//!     Err(Error::UnknownName(_))
//! ));
//! # Ok::<(), Error>(())
//! ```
//!
//! # Module Organization
//!
//! - Free accessor functions ([`resolve`], [`charge`], [`mass`], …)
//!   operate on the shared embedded catalog
//! - [`Catalog`] — the same API over user-supplied TOML data
//! - [`laws`] — conservation-law checks for reactions
//!
//! # Data Types
//!
//! ## Identity
//!
//! - [`CanonicalId`] — signed PDG code, negative for antiparticles
//! - [`Identifier`] — a raw identifier classified by shape
//! - [`Particle`] — fully typed view of one catalog entry
//! - [`ParticleRecord`] — the raw record as stored in the catalog
//!
//! ## Classification
//!
//! - [`Charge`] — electric charge including exact quark thirds
//! - [`ParticleType`] — quark, diquark, baryon, meson, lepton, boson
//! - [`SpinType`] — integer vs half-integer spin
//! - [`AngularMomentum`] — half-integer ladder for J and isospin
//! - [`Parity`] — intrinsic and C parity
//!
//! ## Quark Content
//!
//! - [`QuarkContent`] — a tuple or a superposition
//! - [`QuarkTuple`] — ordered quark symbols, e.g. `uud`
//! - [`QuarkSuperposition`] — coefficient-tagged terms
//! - [`QuarkSymbol`] / [`QuarkFlavor`] — one quark or antiquark
//! - [`Coefficient`] — `√2`, `-√2`, or an algebraic letter
//!
//! ## Measurements
//!
//! - [`Mass`] — MeV/c² with asymmetric errors
//! - [`DecayWidth`] — MeV with asymmetric errors

mod catalog;
mod error;
mod model;
mod notation;
mod query;
mod resolve;

pub mod laws;

pub use catalog::Catalog;
pub use error::Error;

pub use model::measure::{DecayWidth, Mass};
pub use model::quark::{
    Coefficient, QuarkContent, QuarkFlavor, QuarkSuperposition, QuarkSymbol, QuarkTuple,
};
pub use model::record::{Particle, ParticleRecord};
pub use model::types::{
    AngularMomentum, Charge, Parity, ParseParticleTypeError, ParticleType, SpinType,
};

pub use resolve::{CanonicalId, Identifier};

pub use query::{
    angular_momentum, antiparticle, antiparticle_name, charge, decay_modes, decay_width,
    is_baryon, is_boson, is_lepton, is_meson, is_quark, is_self_conjugate, isospin, lifetime,
    list_ids, list_names, list_pdg_names, mass, name, parse_quark_content, particle,
    particle_type, pdg_name, quark_content, resolve, spin_type,
};
