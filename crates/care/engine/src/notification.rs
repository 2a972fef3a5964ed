//! Render-ready notification content for a completed order.
//!
//! Sections carry plain text only. Headings, links and layout are applied by
//! the email template that consumes them.

use care_types::{CompletedOrder, TreatmentGroup};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const NO_TREATMENTS_DESCRIPTION: &str =
    "No specific treatments apply to the furniture in this order.";

/// One block of the notification: heading, sentence, optional call to action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareSection {
    pub heading: String,
    pub description: String,
    pub link: Option<String>,
    pub materials: Vec<String>,
}

impl CareSection {
    pub fn from_group(group: &TreatmentGroup) -> Self {
        let subject = group.description();
        let verb = if group.item_count() == 1 { "is" } else { "are" };
        let description = if group.resolved {
            format!(
                "Your {} {} best cared for with {}.",
                subject, verb, group.treatment_kind
            )
        } else {
            format!("Follow these general care instructions for your {}.", subject)
        };

        Self {
            heading: group.treatment_kind.clone(),
            description,
            link: group.reference_link.clone(),
            materials: group.contributing_materials.iter().cloned().collect(),
        }
    }

    /// Section shown when nothing in the order carries a material.
    pub fn no_treatments(fallback_label: &str) -> Self {
        Self {
            heading: fallback_label.to_string(),
            description: NO_TREATMENTS_DESCRIPTION.to_string(),
            link: None,
            materials: Vec::new(),
        }
    }
}

/// Care-instruction notification for one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareNotification {
    pub order_id: String,
    pub customer_name: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
    pub subject: String,
    pub sections: Vec<CareSection>,
    /// False when `sections` holds only the "no treatments" fallback.
    pub has_treatments: bool,
}

impl CareNotification {
    /// Build the notification. Never produces zero sections.
    pub fn from_groups(
        order: &CompletedOrder,
        groups: &[TreatmentGroup],
        fallback_label: &str,
    ) -> Self {
        let has_treatments = !groups.is_empty();
        let sections = if has_treatments {
            groups.iter().map(CareSection::from_group).collect()
        } else {
            vec![CareSection::no_treatments(fallback_label)]
        };

        Self {
            order_id: order.order_id.clone(),
            customer_name: order.customer_name.clone(),
            completed_at: order.completed_at,
            subject: format!("Care instructions for order {}", order.order_id),
            sections,
            has_treatments,
        }
    }

    pub fn greeting(&self) -> String {
        match self.customer_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => format!("Hi {},", name),
            _ => "Hello,".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use care_types::{ResolvedTreatment, FALLBACK_LABEL};

    fn group(kind: Option<&str>, types: &[&str]) -> TreatmentGroup {
        let mut group = match kind {
            Some(kind) => TreatmentGroup::for_treatment(&ResolvedTreatment::new(
                kind,
                Some("https://example.com/care"),
            )),
            None => TreatmentGroup::unresolved(FALLBACK_LABEL),
        };
        for furniture_type in types {
            group.record_item("VendorA", furniture_type);
        }
        group
    }

    #[test]
    fn resolved_section_names_the_treatment() {
        let section = CareSection::from_group(&group(Some("Leather Care"), &["Sofa"]));
        assert_eq!(section.heading, "Leather Care");
        assert_eq!(section.description, "Your sofa is best cared for with Leather Care.");
        assert_eq!(section.link.as_deref(), Some("https://example.com/care"));
        assert_eq!(section.materials, ["VendorA"]);
    }

    #[test]
    fn plural_section_uses_are() {
        let section = CareSection::from_group(&group(Some("Fabric Care"), &["Chair", "Stool"]));
        assert_eq!(
            section.description,
            "Your chair and stool are best cared for with Fabric Care."
        );
    }

    #[test]
    fn fallback_section_has_no_link() {
        let section = CareSection::from_group(&group(None, &["Sofa"]));
        assert_eq!(section.heading, "Care Instructions");
        assert!(section.link.is_none());
        assert_eq!(
            section.description,
            "Follow these general care instructions for your sofa."
        );
    }

    #[test]
    fn empty_groups_render_no_treatments_section() {
        let mut order = CompletedOrder::new("ord-1");
        order.customer_name = Some("Dana".to_string());

        let notification = CareNotification::from_groups(&order, &[], FALLBACK_LABEL);

        assert!(!notification.has_treatments);
        assert_eq!(notification.sections.len(), 1);
        assert_eq!(notification.sections[0].description, NO_TREATMENTS_DESCRIPTION);
        assert_eq!(notification.subject, "Care instructions for order ord-1");
        assert_eq!(notification.greeting(), "Hi Dana,");
    }

    #[test]
    fn greeting_without_name() {
        let notification =
            CareNotification::from_groups(&CompletedOrder::new("ord-2"), &[], FALLBACK_LABEL);
        assert_eq!(notification.greeting(), "Hello,");
    }
}
