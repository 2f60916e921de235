//! Core data structures for particle identities and quark content.
//!
//! - [`types`] – Typed classifications (charge, spin, category, parity).
//! - [`measure`] – Measured quantities with asymmetric errors.
//! - [`quark`] – Quark flavors, tuples, and superpositions.
//! - [`record`] – Raw catalog records and the typed [`Particle`] view.
//!
//! [`Particle`]: record::Particle

pub mod measure;
pub mod quark;
pub mod record;
pub mod types;
