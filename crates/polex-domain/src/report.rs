//! Validation outcome and the boundary response contract

use crate::document::Document;
use serde::{Deserialize, Serialize};

/// Result of validating a document against the policy schema.
///
/// Created once per validation call and immutable after construction.
/// The missing-field list is independent diagnostic data: because the
/// default-completion pass guarantees required-field presence, the list is
/// typically empty in the fully wired pipeline and only populates for
/// documents that bypassed completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Whether the document satisfied the structural schema
    pub is_valid: bool,

    /// Synthesized error strings, `"<dot-path-or-'root'>: <message>"`
    pub errors: Vec<String>,

    /// Dotted paths of required fields absent or null in the document
    pub missing_fields: Vec<String>,
}

impl ValidationReport {
    /// A report for a document that passed structural validation
    pub fn valid(missing_fields: Vec<String>) -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            missing_fields,
        }
    }

    /// A report carrying structural errors
    pub fn invalid(errors: Vec<String>, missing_fields: Vec<String>) -> Self {
        Self {
            is_valid: false,
            errors,
            missing_fields,
        }
    }
}

/// The boundary output contract consumed by the transport layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResponse {
    /// Whether a document was produced at all
    pub success: bool,

    /// The structurally complete extracted document
    pub data: Document,

    /// The validation report for `data`
    pub validation: ValidationReport,

    /// Human-readable caution attached when validation found problems
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<String>,
}

impl ExtractionResponse {
    /// Assemble the boundary response, attaching a warning when the
    /// validation report carries errors
    pub fn new(data: Document, validation: ValidationReport) -> Self {
        let warnings = if validation.is_valid {
            None
        } else {
            Some("Extracted data has validation errors. Please review.".to_string())
        };

        Self {
            success: true,
            data,
            validation,
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_report() {
        let report = ValidationReport::valid(vec![]);
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
        assert!(report.missing_fields.is_empty());
    }

    #[test]
    fn test_invalid_report_keeps_both_lists() {
        let report = ValidationReport::invalid(
            vec!["vehicle.yearOfManufacture: null is not of type integer".to_string()],
            vec!["vehicle.yearOfManufacture".to_string()],
        );
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.missing_fields, vec!["vehicle.yearOfManufacture"]);
    }

    #[test]
    fn test_response_serialization_shape() {
        let mut doc = Document::new();
        doc.set_path("policyholder.name", json!("Jane Tan"));

        let response = ExtractionResponse::new(doc, ValidationReport::valid(vec![]));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], json!(true));
        assert_eq!(value["data"]["policyholder"]["name"], json!("Jane Tan"));
        assert_eq!(value["validation"]["is_valid"], json!(true));
        assert!(value.get("warnings").is_none());
    }

    #[test]
    fn test_response_attaches_warning_when_invalid() {
        let report = ValidationReport::invalid(vec!["root: bad".to_string()], vec![]);
        let response = ExtractionResponse::new(Document::new(), report);
        assert!(response.warnings.is_some());
    }
}
