//! Furniture items and the order records they are validated from.

use crate::{CareError, CareResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Label prefix used when an order record carries no furniture type.
pub const PLACEHOLDER_PREFIX: &str = "Furniture Item";

/// Furniture record as supplied by the order layer.
///
/// Field presence is not guaranteed. The material field is accepted under
/// the names the order forms have used over time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFurnitureRecord {
    #[serde(default)]
    pub furniture_type: Option<String>,

    #[serde(
        default,
        alias = "material",
        alias = "vendor",
        alias = "fabricCompany"
    )]
    pub material_identifier: Option<String>,
}

impl OrderFurnitureRecord {
    pub fn new(furniture_type: impl Into<String>, material_identifier: impl Into<String>) -> Self {
        Self {
            furniture_type: Some(furniture_type.into()),
            material_identifier: Some(material_identifier.into()),
        }
    }
}

/// One physical piece in an order, with guaranteed-present fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FurnitureItem {
    furniture_type: String,
    material_identifier: Option<String>,
}

impl FurnitureItem {
    /// Item without a material. It will not contribute to any group.
    pub fn new(furniture_type: impl Into<String>) -> Self {
        Self {
            furniture_type: furniture_type.into(),
            material_identifier: None,
        }
    }

    /// Attach a material identifier. Blank identifiers are stored as absent.
    pub fn with_material(mut self, material_identifier: impl AsRef<str>) -> Self {
        self.material_identifier = normalize(Some(material_identifier.as_ref()));
        self
    }

    /// Validate an order record at `position` (zero-based) using the default
    /// placeholder prefix.
    pub fn from_record(position: usize, record: &OrderFurnitureRecord) -> Self {
        Self::from_record_with_prefix(position, record, PLACEHOLDER_PREFIX)
    }

    /// Validate an order record, labelling untyped items `"{prefix} {position + 1}"`.
    pub fn from_record_with_prefix(
        position: usize,
        record: &OrderFurnitureRecord,
        prefix: &str,
    ) -> Self {
        let furniture_type = normalize(record.furniture_type.as_deref())
            .unwrap_or_else(|| format!("{} {}", prefix, position + 1));
        Self {
            furniture_type,
            material_identifier: normalize(record.material_identifier.as_deref()),
        }
    }

    pub fn furniture_type(&self) -> &str {
        &self.furniture_type
    }

    /// Material identifier, `None` when absent or blank.
    pub fn material_identifier(&self) -> Option<&str> {
        self.material_identifier.as_deref()
    }
}

fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// An order that has just been marked complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedOrder {
    #[serde(alias = "id")]
    pub order_id: String,

    #[serde(default)]
    pub customer_name: Option<String>,

    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,

    #[serde(default, alias = "furnitureItems")]
    pub furniture: Vec<OrderFurnitureRecord>,
}

impl CompletedOrder {
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            customer_name: None,
            completed_at: None,
            furniture: Vec::new(),
        }
    }

    /// Decode an order document.
    pub fn from_json(value: Value) -> CareResult<Self> {
        serde_json::from_value(value).map_err(|e| CareError::InvalidRecord(format!("order: {}", e)))
    }

    /// Validated furniture items in input order.
    pub fn furniture_items(&self) -> Vec<FurnitureItem> {
        self.furniture_items_with_prefix(PLACEHOLDER_PREFIX)
    }

    pub fn furniture_items_with_prefix(&self, prefix: &str) -> Vec<FurnitureItem> {
        self.furniture
            .iter()
            .enumerate()
            .map(|(position, record)| FurnitureItem::from_record_with_prefix(position, record, prefix))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_type_gets_positional_placeholder() {
        let record = OrderFurnitureRecord {
            furniture_type: None,
            material_identifier: Some("VendorA".to_string()),
        };
        let item = FurnitureItem::from_record(2, &record);
        assert_eq!(item.furniture_type(), "Furniture Item 3");
        assert_eq!(item.material_identifier(), Some("VendorA"));
    }

    #[test]
    fn blank_type_and_material_are_normalized() {
        let record = OrderFurnitureRecord {
            furniture_type: Some("   ".to_string()),
            material_identifier: Some("  ".to_string()),
        };
        let item = FurnitureItem::from_record(0, &record);
        assert_eq!(item.furniture_type(), "Furniture Item 1");
        assert_eq!(item.material_identifier(), None);
    }

    #[test]
    fn with_material_trims_and_drops_empty() {
        assert_eq!(
            FurnitureItem::new("Sofa").with_material(" VendorA ").material_identifier(),
            Some("VendorA")
        );
        assert_eq!(FurnitureItem::new("Sofa").with_material("").material_identifier(), None);
    }

    #[test]
    fn order_accepts_material_aliases() {
        let order = CompletedOrder::from_json(serde_json::json!({
            "id": "ord-17",
            "customerName": "Dana",
            "furnitureItems": [
                {"furnitureType": "Sofa", "vendor": "VendorA"},
                {"furnitureType": "Chair", "fabricCompany": "VendorB"},
                {"material": "VendorC"},
                {"furnitureType": "Ottoman"}
            ]
        }))
        .unwrap();

        let items = order.furniture_items();
        assert_eq!(order.order_id, "ord-17");
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].material_identifier(), Some("VendorA"));
        assert_eq!(items[1].material_identifier(), Some("VendorB"));
        assert_eq!(items[2].furniture_type(), "Furniture Item 3");
        assert_eq!(items[3].material_identifier(), None);
    }

    #[test]
    fn order_without_id_is_rejected() {
        let result = CompletedOrder::from_json(serde_json::json!({"furniture": []}));
        assert!(matches!(result, Err(CareError::InvalidRecord(_))));
    }
}
