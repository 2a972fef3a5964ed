//! Material identifier to treatment mapping produced by the resolver.

use crate::ResolvedTreatment;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from material identifier to its treatment, or `None` when no
/// treatment claims it.
///
/// A lookup for an identifier that is not a key behaves exactly like an
/// explicit `None` entry, so an empty mapping means "nothing resolved".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    entries: BTreeMap<String, Option<ResolvedTreatment>>,
    #[serde(default)]
    unavailable: bool,
}

impl Resolution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty mapping returned when the treatment store could not be read.
    pub fn unavailable() -> Self {
        Self {
            entries: BTreeMap::new(),
            unavailable: true,
        }
    }

    /// Builder form of [`Resolution::insert`].
    pub fn with(
        mut self,
        material_identifier: impl Into<String>,
        treatment: Option<ResolvedTreatment>,
    ) -> Self {
        self.insert(material_identifier, treatment);
        self
    }

    /// Set the entry for an identifier, returning whatever it replaced.
    pub fn insert(
        &mut self,
        material_identifier: impl Into<String>,
        treatment: Option<ResolvedTreatment>,
    ) -> Option<ResolvedTreatment> {
        self.entries
            .insert(material_identifier.into(), treatment)
            .flatten()
    }

    pub fn get(&self, material_identifier: &str) -> Option<&ResolvedTreatment> {
        self.entries
            .get(material_identifier)
            .and_then(Option::as_ref)
    }

    pub fn contains_key(&self, material_identifier: &str) -> bool {
        self.entries.contains_key(material_identifier)
    }

    pub fn is_resolved(&self, material_identifier: &str) -> bool {
        self.get(material_identifier).is_some()
    }

    /// True when the mapping stands in for a failed store read.
    pub fn is_unavailable(&self) -> bool {
        self.unavailable
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn resolved_count(&self) -> usize {
        self.entries.values().filter(|t| t.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&ResolvedTreatment>)> {
        self.entries
            .iter()
            .map(|(material, treatment)| (material.as_str(), treatment.as_ref()))
    }
}

impl<M: Into<String>> FromIterator<(M, Option<ResolvedTreatment>)> for Resolution {
    fn from_iter<I: IntoIterator<Item = (M, Option<ResolvedTreatment>)>>(iter: I) -> Self {
        let mut resolution = Self::new();
        for (material, treatment) in iter {
            resolution.insert(material, treatment);
        }
        resolution
    }
}
