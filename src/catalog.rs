//! The canonical particle catalog.
//!
//! A [`Catalog`] owns the immutable record map plus the cross-reference
//! tables the identifier resolver probes: canonical name, PDG name
//! (including single-letter aliases), program name, compound code, and
//! symbol (including unicode glyphs). A merged table combining the name
//! tables is built exactly once at construction and is read-only for
//! the life of the catalog.
//!
//! The default catalog is embedded in the crate and parsed lazily on
//! first use; user-supplied data goes through [`Catalog::from_toml`].

use std::collections::HashMap;
use std::sync::OnceLock;

use log::debug;
use serde::Deserialize;

use crate::error::Error;
use crate::model::record::ParticleRecord;

const DEFAULT_CATALOG_TOML: &str = include_str!("../resources/particles.toml");

static SHARED_CATALOG: OnceLock<Catalog> = OnceLock::new();

#[derive(Debug, Deserialize)]
struct CatalogData {
    #[serde(rename = "particle")]
    particles: Vec<ParticleRecord>,
}

/// Immutable mapping from canonical id to particle record, with the
/// lookup tables used by identifier resolution.
#[derive(Debug)]
pub struct Catalog {
    records: HashMap<i32, ParticleRecord>,
    order: Vec<i32>,
    pub(crate) pdg_names: HashMap<String, i32>,
    pub(crate) names: HashMap<String, i32>,
    pub(crate) program_names: HashMap<String, i32>,
    pub(crate) codes: HashMap<String, i32>,
    pub(crate) symbols: HashMap<String, i32>,
    pub(crate) merged: HashMap<String, i32>,
}

impl Catalog {
    /// Builds a catalog from TOML data (an array of `[[particle]]`
    /// tables).
    ///
    /// Duplicate canonical ids are rejected so that no ambiguous
    /// partial state can be observed afterwards.
    pub fn from_toml(data: &str) -> Result<Self, Error> {
        let data: CatalogData = toml::from_str(data)?;

        let mut records = HashMap::with_capacity(data.particles.len());
        let mut order = Vec::with_capacity(data.particles.len());
        let mut pdg_names = HashMap::new();
        let mut names = HashMap::new();
        let mut program_names = HashMap::new();
        let mut codes = HashMap::new();
        let mut symbols = HashMap::new();

        for record in data.particles {
            let id = record.id;
            names.insert(record.name.clone(), id);
            pdg_names.insert(record.pdg_name.clone(), id);
            if let Some(letter) = record.letter {
                pdg_names.insert(letter.to_string(), id);
            }
            if let Some(program) = &record.program_name {
                program_names.insert(program.clone(), id);
            }
            if let Some(code) = &record.code {
                codes.insert(code.clone(), id);
            }
            if !record.symbol.is_empty() {
                symbols.insert(record.symbol.clone(), id);
            }
            if !record.unicode.is_empty() {
                symbols.insert(record.unicode.clone(), id);
            }
            if records.insert(id, record).is_some() {
                return Err(Error::DuplicateId(id));
            }
            order.push(id);
        }

        // Merge order matters: later tables win on key clashes.
        let mut merged = pdg_names.clone();
        merged.extend(names.iter().map(|(k, v)| (k.clone(), *v)));
        merged.extend(program_names.iter().map(|(k, v)| (k.clone(), *v)));
        merged.extend(symbols.iter().map(|(k, v)| (k.clone(), *v)));

        debug!(
            "particle catalog loaded: {} records, {} merged lookup keys",
            records.len(),
            merged.len()
        );

        Ok(Self {
            records,
            order,
            pdg_names,
            names,
            program_names,
            codes,
            symbols,
            merged,
        })
    }

    /// The default catalog, parsed from the embedded data on first use.
    pub fn shared() -> &'static Catalog {
        SHARED_CATALOG.get_or_init(|| {
            Catalog::from_toml(DEFAULT_CATALOG_TOML)
                .expect("Failed to parse embedded particle catalog. This is a library bug.")
        })
    }

    /// The record for a canonical id, if it exists.
    pub fn record(&self, id: i32) -> Option<&ParticleRecord> {
        self.records.get(&id)
    }

    pub(crate) fn record_or(&self, id: i32) -> Result<&ParticleRecord, Error> {
        self.records.get(&id).ok_or(Error::UnknownId(id))
    }

    pub(crate) fn contains_id(&self, id: i32) -> bool {
        self.records.contains_key(&id)
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Canonical ids in catalog data order.
    pub fn ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.order.iter().copied()
    }

    /// Records in catalog data order.
    pub fn records(&self) -> impl Iterator<Item = &ParticleRecord> {
        self.order.iter().filter_map(|id| self.records.get(id))
    }
}
