//! Grouping of furniture by resolved treatment.

use crate::telemetry::{CareEvent, CareTelemetry, NoopTelemetry};
use care_types::{FurnitureItem, GroupKey, Resolution, TreatmentGroup, FALLBACK_LABEL};
use std::collections::HashMap;
use std::sync::Arc;

/// Group `items` with the default fallback label and no telemetry.
pub fn group_by_treatment(items: &[FurnitureItem], resolution: &Resolution) -> Vec<TreatmentGroup> {
    TreatmentAggregator::default().group(items, resolution)
}

/// Builds [`TreatmentGroup`]s from furniture and a [`Resolution`].
pub struct TreatmentAggregator {
    fallback_label: String,
    telemetry: Arc<dyn CareTelemetry>,
}

impl Default for TreatmentAggregator {
    fn default() -> Self {
        Self::new(FALLBACK_LABEL)
    }
}

impl TreatmentAggregator {
    pub fn new(fallback_label: impl Into<String>) -> Self {
        Self {
            fallback_label: fallback_label.into(),
            telemetry: Arc::new(NoopTelemetry),
        }
    }

    pub fn with_telemetry(mut self, telemetry: Arc<dyn CareTelemetry>) -> Self {
        self.telemetry = telemetry;
        self
    }

    pub fn fallback_label(&self) -> &str {
        &self.fallback_label
    }

    /// Group furniture by treatment.
    ///
    /// Items without a material are dropped. Items whose material did not
    /// resolve share one fallback group. Groups come out in the order their
    /// key is first seen scanning `items` left to right.
    pub fn group(&self, items: &[FurnitureItem], resolution: &Resolution) -> Vec<TreatmentGroup> {
        let mut groups: Vec<TreatmentGroup> = Vec::new();
        let mut positions: HashMap<GroupKey, usize> = HashMap::new();
        let mut excluded = 0;
        let mut unresolved_items = 0;

        for item in items {
            let Some(material) = item.material_identifier() else {
                excluded += 1;
                continue;
            };

            let treatment = resolution.get(material);
            let key = match treatment {
                Some(treatment) => GroupKey::Resolved(treatment.treatment_kind.clone()),
                None => {
                    unresolved_items += 1;
                    GroupKey::Unresolved
                }
            };

            let position = *positions.entry(key).or_insert_with(|| {
                groups.push(match treatment {
                    Some(treatment) => TreatmentGroup::for_treatment(treatment),
                    None => TreatmentGroup::unresolved(self.fallback_label.clone()),
                });
                groups.len() - 1
            });
            groups[position].record_item(material, item.furniture_type());
        }

        self.telemetry.record(CareEvent::GroupsBuilt {
            items: items.len(),
            excluded,
            groups: groups.len(),
            unresolved_items,
        });
        groups
    }
}
