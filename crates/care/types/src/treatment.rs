//! Treatment definitions owned by the external treatment store.

use crate::{CareError, CareResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw treatment document as stored externally.
///
/// Older documents use `referenceLink` / `materialIdentifiers`. A document
/// carrying both spellings of a field decodes, preferring `urlPageLink` and
/// `materialCompanies`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TreatmentDocumentFields")]
pub struct TreatmentDocument {
    #[serde(rename = "treatmentKind")]
    pub treatment_kind: String,

    #[serde(rename = "urlPageLink")]
    pub reference_link: Option<String>,

    #[serde(rename = "materialCompanies")]
    pub material_identifiers: Vec<String>,
}

/// Every field name a treatment document has been written with.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TreatmentDocumentFields {
    treatment_kind: String,
    #[serde(default)]
    url_page_link: Option<String>,
    #[serde(default)]
    reference_link: Option<String>,
    #[serde(default)]
    material_companies: Option<Vec<String>>,
    #[serde(default)]
    material_identifiers: Option<Vec<String>>,
}

impl From<TreatmentDocumentFields> for TreatmentDocument {
    fn from(fields: TreatmentDocumentFields) -> Self {
        let reference_link = fields
            .url_page_link
            .filter(|link| !link.trim().is_empty())
            .or(fields.reference_link);
        Self {
            treatment_kind: fields.treatment_kind,
            reference_link,
            material_identifiers: fields
                .material_companies
                .or(fields.material_identifiers)
                .unwrap_or_default(),
        }
    }
}

/// Validated treatment definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatmentRecord {
    treatment_kind: String,
    reference_link: Option<String>,
    material_identifiers: Vec<String>,
}

impl TreatmentRecord {
    pub fn new<I, M>(
        treatment_kind: impl Into<String>,
        reference_link: Option<&str>,
        material_identifiers: I,
    ) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        let mut materials: Vec<String> = Vec::new();
        for material in material_identifiers {
            let material: String = material.into();
            let material = material.trim();
            if !material.is_empty() && !materials.iter().any(|m| m == material) {
                materials.push(material.to_string());
            }
        }
        let treatment_kind: String = treatment_kind.into();
        Self {
            treatment_kind: treatment_kind.trim().to_string(),
            reference_link: reference_link
                .map(str::trim)
                .filter(|link| !link.is_empty())
                .map(str::to_string),
            material_identifiers: materials,
        }
    }

    /// Validate a raw document. A blank treatment kind is rejected.
    pub fn from_document(document: TreatmentDocument) -> CareResult<Self> {
        if document.treatment_kind.trim().is_empty() {
            return Err(CareError::InvalidRecord(
                "treatment kind must not be empty".to_string(),
            ));
        }
        Ok(Self::new(
            document.treatment_kind,
            document.reference_link.as_deref(),
            document.material_identifiers,
        ))
    }

    /// Decode and validate a JSON treatment document.
    pub fn from_json(value: Value) -> CareResult<Self> {
        let document: TreatmentDocument = serde_json::from_value(value)
            .map_err(|e| CareError::InvalidRecord(format!("treatment: {}", e)))?;
        Self::from_document(document)
    }

    pub fn treatment_kind(&self) -> &str {
        &self.treatment_kind
    }

    pub fn reference_link(&self) -> Option<&str> {
        self.reference_link.as_deref()
    }

    /// Material identifiers in document order, without duplicates.
    pub fn material_identifiers(&self) -> &[String] {
        &self.material_identifiers
    }

    pub fn claims(&self, material_identifier: &str) -> bool {
        self.material_identifiers
            .iter()
            .any(|m| m == material_identifier)
    }

    pub fn resolved(&self) -> ResolvedTreatment {
        ResolvedTreatment {
            treatment_kind: self.treatment_kind.clone(),
            reference_link: self.reference_link.clone(),
        }
    }
}

/// The treatment a material identifier resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedTreatment {
    pub treatment_kind: String,
    pub reference_link: Option<String>,
}

impl ResolvedTreatment {
    pub fn new(treatment_kind: impl Into<String>, reference_link: Option<&str>) -> Self {
        Self {
            treatment_kind: treatment_kind.into(),
            reference_link: reference_link.map(str::to_string),
        }
    }
}
