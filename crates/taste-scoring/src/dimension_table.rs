//! Raw taste-dimension label → canonical domain lookup.
//!
//! The enrichment pipeline labels place evidence with free-form dimension names
//! ("Scale & Intimacy", "Culture & Character", ...). Several labels collapse onto
//! one canonical [`Domain`]. Every canonical domain name also maps to itself.

use std::collections::BTreeMap;

use taste_core::Domain;

/// Default label aliases. Canonical names are added separately.
const DEFAULT_ALIASES: &[(&str, Domain)] = &[
    // Design
    ("Design & Aesthetics", Domain::Design),
    ("Architecture & Interiors", Domain::Design),
    ("Aesthetic Sensibility", Domain::Design),
    // Character
    ("Scale & Intimacy", Domain::Character),
    ("Culture & Character", Domain::Character),
    ("Atmosphere & Vibe", Domain::Character),
    ("Heritage & Story", Domain::Character),
    // Service
    ("Service & Hospitality", Domain::Service),
    ("Service Style", Domain::Service),
    ("Staff & Warmth", Domain::Service),
    // Food
    ("Food & Drink", Domain::Food),
    ("Culinary", Domain::Food),
    ("Dining Experience", Domain::Food),
    // Location
    ("Location & Setting", Domain::Location),
    ("Neighborhood", Domain::Location),
    ("Access & Connectivity", Domain::Location),
    // Wellness
    ("Wellness & Amenities", Domain::Wellness),
    ("Spa & Wellness", Domain::Wellness),
    ("Rest & Recovery", Domain::Wellness),
    // Rhythm
    ("Rhythm & Pace", Domain::Rhythm),
    ("Pace", Domain::Rhythm),
    // CulturalEngagement
    ("Cultural Engagement", Domain::CulturalEngagement),
    ("Arts & Culture", Domain::CulturalEngagement),
    ("Local Immersion", Domain::CulturalEngagement),
];

/// Explicit dimension vocabulary owned by the scorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionTable {
    entries: BTreeMap<String, Domain>,
}

impl DimensionTable {
    /// A table holding only the canonical domain names.
    pub fn canonical() -> Self {
        let entries = Domain::ALL
            .into_iter()
            .map(|d| (normalize(d.as_str()), d))
            .collect();
        Self { entries }
    }

    /// Add or replace an alias.
    pub fn with_alias(mut self, label: &str, domain: Domain) -> Self {
        self.entries.insert(normalize(label), domain);
        self
    }

    /// Resolve a raw label. Case and surrounding/duplicate whitespace are ignored.
    pub fn resolve(&self, dimension: &str) -> Option<Domain> {
        self.entries.get(&normalize(dimension)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DimensionTable {
    fn default() -> Self {
        DEFAULT_ALIASES
            .iter()
            .fold(Self::canonical(), |table, (label, domain)| {
                table.with_alias(label, *domain)
            })
    }
}

fn normalize(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
