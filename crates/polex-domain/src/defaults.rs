//! Canonical defaults for required fields
//!
//! The default-completion pass injects these values wherever extraction
//! found nothing, guaranteeing that every required field is structurally
//! present even when semantically empty.

use crate::sentinel::{UNKNOWN, UNKNOWN_AUTHORIZED_DRIVERS, UNKNOWN_LIMITATIONS};
use serde_json::{json, Value};

/// Immutable table of required-field defaults, grouped by section.
///
/// Built once at startup and passed into the parser at construction so
/// multiple schema versions can coexist in tests.
#[derive(Debug, Clone)]
pub struct DefaultPolicy {
    entries: Vec<(String, Value)>,
    ensure_objects: Vec<String>,
}

impl DefaultPolicy {
    /// Build a policy from explicit `(path, default)` entries plus paths
    /// that must exist as (possibly empty) objects
    pub fn from_entries<I, J, S, T>(entries: I, ensure_objects: J) -> Self
    where
        I: IntoIterator<Item = (S, Value)>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(path, value)| (path.into(), value))
                .collect(),
            ensure_objects: ensure_objects.into_iter().map(Into::into).collect(),
        }
    }

    /// The standard car-insurance policy default table
    pub fn standard() -> Self {
        let entries = [
            // policyholder
            ("policyholder.name", json!(UNKNOWN)),
            ("policyholder.address", json!(UNKNOWN)),
            ("policyholder.occupation", json!(UNKNOWN)),
            // vehicle
            ("vehicle.registrationMark", json!(UNKNOWN)),
            ("vehicle.makeAndModel", json!(UNKNOWN)),
            ("vehicle.yearOfManufacture", json!(0)),
            ("vehicle.chassisNumber", json!(UNKNOWN)),
            ("vehicle.seatingCapacity", json!(0)),
            ("vehicle.bodyType", json!(UNKNOWN)),
            // coverage
            ("coverage.typeOfCover", json!(UNKNOWN)),
            ("coverage.limitationsOnUse", json!(UNKNOWN_LIMITATIONS)),
            ("coverage.authorizedDrivers", json!(UNKNOWN_AUTHORIZED_DRIVERS)),
            ("coverage.liabilityLimits.bodilyInjury", json!(0)),
            ("coverage.liabilityLimits.propertyDamage", json!(0)),
            // premium and discounts
            ("premiumAndDiscounts.premiumAmount", json!(0.0)),
            ("premiumAndDiscounts.totalPayable", json!(0.0)),
            ("premiumAndDiscounts.noClaimDiscount", json!(0.0)),
            // insurer and policy details
            ("insurerAndPolicyDetails.insurerName", json!(UNKNOWN)),
            ("insurerAndPolicyDetails.policyNumber", json!(UNKNOWN)),
            ("insurerAndPolicyDetails.periodOfInsurance.start", json!(UNKNOWN)),
            ("insurerAndPolicyDetails.periodOfInsurance.end", json!(UNKNOWN)),
        ];

        Self::from_entries(entries, ["coverage.excess"])
    }

    /// Iterate `(path, default)` pairs in declaration order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(path, value)| (path.as_str(), value))
    }

    /// Paths that must exist as objects after completion, even when empty
    pub fn ensure_objects(&self) -> impl Iterator<Item = &str> {
        self.ensure_objects.iter().map(String::as_str)
    }
}

impl Default for DefaultPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_defaults_cover_required_strings() {
        let policy = DefaultPolicy::standard();
        let lookup: std::collections::HashMap<&str, &Value> = policy.entries().collect();

        assert_eq!(lookup["policyholder.name"], &json!(UNKNOWN));
        assert_eq!(lookup["coverage.limitationsOnUse"], &json!(UNKNOWN_LIMITATIONS));
        assert_eq!(
            lookup["coverage.authorizedDrivers"],
            &json!(UNKNOWN_AUTHORIZED_DRIVERS)
        );
    }

    #[test]
    fn test_numeric_defaults_are_typed_zeros() {
        let policy = DefaultPolicy::standard();
        let lookup: std::collections::HashMap<&str, &Value> = policy.entries().collect();

        assert!(lookup["vehicle.yearOfManufacture"].is_i64());
        assert!(lookup["coverage.liabilityLimits.bodilyInjury"].is_i64());
        assert!(lookup["premiumAndDiscounts.premiumAmount"].is_f64());
        assert_eq!(
            lookup["premiumAndDiscounts.noClaimDiscount"].as_f64(),
            Some(0.0)
        );
    }

    #[test]
    fn test_excess_section_is_ensured() {
        let policy = DefaultPolicy::standard();
        let ensured: Vec<&str> = policy.ensure_objects().collect();
        assert_eq!(ensured, vec!["coverage.excess"]);
    }
}
