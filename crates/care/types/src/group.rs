//! Treatment groups, the output unit of an aggregation pass.

use crate::phrase::describe_furniture;
use crate::ResolvedTreatment;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Heading used for furniture whose material matched no treatment.
pub const FALLBACK_LABEL: &str = "Care Instructions";

/// Grouping key. The unresolved sentinel never collides with a resolved
/// treatment, even one named like the fallback label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroupKey {
    Resolved(String),
    Unresolved,
}

/// Furniture sharing one treatment, with the materials that led there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatmentGroup {
    pub treatment_kind: String,
    pub reference_link: Option<String>,
    pub contributing_materials: BTreeSet<String>,
    pub furniture_types: Vec<String>,
    pub resolved: bool,
}

impl TreatmentGroup {
    pub fn for_treatment(treatment: &ResolvedTreatment) -> Self {
        Self {
            treatment_kind: treatment.treatment_kind.clone(),
            reference_link: treatment.reference_link.clone(),
            contributing_materials: BTreeSet::new(),
            furniture_types: Vec::new(),
            resolved: true,
        }
    }

    /// Fallback group for unrecognized materials. Never carries a link.
    pub fn unresolved(label: impl Into<String>) -> Self {
        Self {
            treatment_kind: label.into(),
            reference_link: None,
            contributing_materials: BTreeSet::new(),
            furniture_types: Vec::new(),
            resolved: false,
        }
    }

    pub fn key(&self) -> GroupKey {
        if self.resolved {
            GroupKey::Resolved(self.treatment_kind.clone())
        } else {
            GroupKey::Unresolved
        }
    }

    /// Add one physical item. Materials are deduplicated, furniture types are not.
    pub fn record_item(&mut self, material_identifier: &str, furniture_type: &str) {
        if !self.contributing_materials.contains(material_identifier) {
            self.contributing_materials
                .insert(material_identifier.to_string());
        }
        self.furniture_types.push(furniture_type.to_string());
    }

    pub fn item_count(&self) -> usize {
        self.furniture_types.len()
    }

    /// Natural-language furniture list, e.g. "sofa, loveseat and ottoman".
    pub fn description(&self) -> String {
        describe_furniture(&self.furniture_types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_item_dedups_materials_but_keeps_every_type() {
        let mut group = TreatmentGroup::for_treatment(&ResolvedTreatment::new(
            "Fabric Care",
            Some("https://example.com/fabric"),
        ));
        group.record_item("VendorB", "Chair");
        group.record_item("VendorB", "Chair");
        group.record_item("VendorC", "Stool");

        assert_eq!(group.contributing_materials.len(), 2);
        assert_eq!(group.furniture_types, ["Chair", "Chair", "Stool"]);
        assert_eq!(group.description(), "chair, chair and stool");
    }

    #[test]
    fn unresolved_group_is_keyed_apart_from_same_named_treatment() {
        let fallback = TreatmentGroup::unresolved(FALLBACK_LABEL);
        let named = TreatmentGroup::for_treatment(&ResolvedTreatment::new(FALLBACK_LABEL, None));

        assert_eq!(fallback.key(), GroupKey::Unresolved);
        assert_ne!(fallback.key(), named.key());
        assert!(fallback.reference_link.is_none());
    }
}
