//! Schema validation logic

use crate::error::ValidateError;
use polex_domain::{Document, ValidationReport};
use serde_json::Value;
use std::path::Path;
use tracing::{error, warn};

/// Validates documents against an externally supplied JSON Schema.
///
/// The schema is loaded once and treated as read-only configuration.
pub struct SchemaValidator {
    schema: Value,
}

impl SchemaValidator {
    /// Create a validator over an already-parsed schema document
    pub fn new(schema: Value) -> Self {
        Self { schema }
    }

    /// Load the schema from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ValidateError> {
        let raw = std::fs::read_to_string(path)?;
        let schema = serde_json::from_str(&raw)?;
        Ok(Self::new(schema))
    }

    /// Borrow the underlying schema
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// Validate a document.
    ///
    /// Step 1 checks the document structurally against the schema; the
    /// first violation becomes a single synthesized error string and marks
    /// the report invalid, but processing continues. Step 2 independently
    /// scans the schema's required fields at every nesting level and
    /// records the dotted path of any that is absent or null, regardless
    /// of what step 1 concluded.
    ///
    /// Any unexpected failure of the validator itself (e.g. a malformed
    /// schema) is caught and reported as a generic error rather than
    /// propagated.
    pub fn validate(&self, document: &Document) -> ValidationReport {
        let instance = document.to_value();
        let mut errors = Vec::new();
        let mut missing_fields = Vec::new();

        let compiled = match jsonschema::validator_for(&self.schema) {
            Ok(compiled) => compiled,
            Err(e) => {
                let message = format!("Unexpected validation error: {}", e);
                error!("{}", message);
                return ValidationReport::invalid(vec![message], missing_fields);
            }
        };

        if let Err(violation) = compiled.validate(&instance) {
            let message = format!("{}: {}", dotted_path(&violation.instance_path), violation);
            warn!("Validation error: {}", message);
            errors.push(message);
        }

        collect_missing_fields(&self.schema, &instance, "", &mut missing_fields);

        if errors.is_empty() {
            ValidationReport::valid(missing_fields)
        } else {
            ValidationReport::invalid(errors, missing_fields)
        }
    }
}

/// Render a violation location as a dotted path, or "root" for the
/// document itself
fn dotted_path(location: &jsonschema::paths::Location) -> String {
    let pointer = location.as_str();
    if pointer.is_empty() {
        "root".to_string()
    } else {
        pointer.trim_start_matches('/').replace('/', ".")
    }
}

/// Recursively record required fields that are absent or explicitly null.
///
/// Object-typed fields are recursed into only when the schema declares
/// nested properties for them.
fn collect_missing_fields(schema: &Value, data: &Value, prefix: &str, out: &mut Vec<String>) {
    let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
        return;
    };

    let required: Vec<&str> = schema
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    for (name, prop_schema) in properties {
        let current_path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", prefix, name)
        };

        let field = data.get(name);

        if required.contains(&name.as_str()) && !matches!(field, Some(v) if !v.is_null()) {
            out.push(current_path.clone());
        }

        if let Some(child) = field {
            if child.is_object() && prop_schema.get("properties").is_some() {
                collect_missing_fields(prop_schema, child, &current_path, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vehicle_schema() -> Value {
        json!({
            "type": "object",
            "required": ["vehicle"],
            "properties": {
                "vehicle": {
                    "type": "object",
                    "required": ["registrationMark", "yearOfManufacture"],
                    "properties": {
                        "registrationMark": { "type": "string" },
                        "yearOfManufacture": { "type": "integer" }
                    }
                }
            }
        })
    }

    fn document(value: Value) -> Document {
        Document::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_document() {
        let validator = SchemaValidator::new(vehicle_schema());
        let doc = document(json!({
            "vehicle": { "registrationMark": "ABC123", "yearOfManufacture": 2020 }
        }));

        let report = validator.validate(&doc);
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
        assert!(report.missing_fields.is_empty());
    }

    #[test]
    fn test_missing_required_field_reported_both_ways() {
        let validator = SchemaValidator::new(vehicle_schema());
        let doc = document(json!({
            "vehicle": { "registrationMark": "ABC123" }
        }));

        let report = validator.validate(&doc);
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
        assert!(report
            .missing_fields
            .contains(&"vehicle.yearOfManufacture".to_string()));
    }

    #[test]
    fn test_explicit_null_counts_as_missing() {
        let validator = SchemaValidator::new(vehicle_schema());
        let doc = document(json!({
            "vehicle": { "registrationMark": "ABC123", "yearOfManufacture": null }
        }));

        let report = validator.validate(&doc);
        assert!(!report.is_valid);
        assert!(report
            .missing_fields
            .contains(&"vehicle.yearOfManufacture".to_string()));
    }

    #[test]
    fn test_type_violation_error_carries_dotted_path() {
        let validator = SchemaValidator::new(vehicle_schema());
        let doc = document(json!({
            "vehicle": { "registrationMark": "ABC123", "yearOfManufacture": "twenty-twenty" }
        }));

        let report = validator.validate(&doc);
        assert!(!report.is_valid);
        assert!(report.errors[0].starts_with("vehicle.yearOfManufacture: "));
        // A type violation is present but the field itself is not missing
        assert!(report.missing_fields.is_empty());
    }

    #[test]
    fn test_root_violation_labeled_root() {
        let validator = SchemaValidator::new(vehicle_schema());
        let report = validator.validate(&Document::new());

        assert!(!report.is_valid);
        assert!(report.errors[0].starts_with("root: "));
        assert_eq!(report.missing_fields, vec!["vehicle".to_string()]);
    }

    #[test]
    fn test_malformed_schema_never_panics() {
        let validator = SchemaValidator::new(json!({
            "$ref": "#/definitions/missing"
        }));

        let report = validator.validate(&Document::new());
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].starts_with("Unexpected validation error"));
    }

    #[test]
    fn test_recursion_only_into_declared_properties() {
        // An object-typed field without nested properties is not walked.
        let schema = json!({
            "type": "object",
            "required": ["levies"],
            "properties": {
                "levies": { "type": "object" }
            }
        });
        let validator = SchemaValidator::new(schema);
        let doc = document(json!({ "levies": { "anything": null } }));

        let report = validator.validate(&doc);
        assert!(report.is_valid);
        assert!(report.missing_fields.is_empty());
    }

    #[test]
    fn test_shipped_schema_parses_and_validates() {
        let path = concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../../schema/policy.schema.json"
        );
        let validator = SchemaValidator::from_file(Path::new(path)).unwrap();

        let doc = document(json!({
            "policyholder": {
                "name": "John Doe",
                "address": "123 Main St, Hong Kong",
                "occupation": "Engineer"
            },
            "vehicle": {
                "registrationMark": "ABC123",
                "makeAndModel": "Toyota Camry",
                "yearOfManufacture": 2020,
                "chassisNumber": "1234567890",
                "seatingCapacity": 5,
                "bodyType": "SALOON"
            },
            "coverage": {
                "typeOfCover": "COMPREHENSIVE",
                "liabilityLimits": {
                    "bodilyInjury": 100000000,
                    "propertyDamage": 2000000
                },
                "excess": {},
                "limitationsOnUse": "Social, domestic and pleasure",
                "authorizedDrivers": "Policyholder"
            },
            "premiumAndDiscounts": {
                "premiumAmount": 5000.0,
                "totalPayable": 5500.0,
                "noClaimDiscount": 60.0
            },
            "insurerAndPolicyDetails": {
                "insurerName": "Test Insurance Co",
                "policyNumber": "POL123456",
                "periodOfInsurance": {
                    "start": "01/01/2024",
                    "end": "31/12/2024"
                }
            }
        }));

        let report = validator.validate(&doc);
        assert!(report.is_valid, "errors: {:?}", report.errors);
        assert!(report.missing_fields.is_empty());
    }

    #[test]
    fn test_shipped_schema_flags_missing_year() {
        let path = concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../../schema/policy.schema.json"
        );
        let validator = SchemaValidator::from_file(Path::new(path)).unwrap();

        let doc = document(json!({
            "policyholder": {
                "name": "John Doe",
                "address": "123 Main St, Hong Kong",
                "occupation": "Engineer"
            },
            "vehicle": {
                "registrationMark": "ABC123",
                "makeAndModel": "Toyota Camry",
                "chassisNumber": "1234567890",
                "seatingCapacity": 5,
                "bodyType": "SALOON"
            },
            "coverage": {
                "typeOfCover": "COMPREHENSIVE",
                "liabilityLimits": {
                    "bodilyInjury": 100000000,
                    "propertyDamage": 2000000
                },
                "excess": {},
                "limitationsOnUse": "Social, domestic and pleasure",
                "authorizedDrivers": "Policyholder"
            },
            "premiumAndDiscounts": {
                "premiumAmount": 5000.0,
                "totalPayable": 5500.0,
                "noClaimDiscount": 60.0
            },
            "insurerAndPolicyDetails": {
                "insurerName": "Test Insurance Co",
                "policyNumber": "POL123456",
                "periodOfInsurance": {
                    "start": "01/01/2024",
                    "end": "31/12/2024"
                }
            }
        }));

        let report = validator.validate(&doc);
        assert!(!report.is_valid);
        assert!(report
            .missing_fields
            .contains(&"vehicle.yearOfManufacture".to_string()));
    }
}
