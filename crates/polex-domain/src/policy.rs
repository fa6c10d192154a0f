//! Field-coercion policy: dotted path → coercion kind
//!
//! The table is process-wide static configuration, built once at startup
//! and read-only afterwards. Keying by full dotted path (not bare leaf
//! name) removes the collision risk between parents sharing a leaf name.

use std::collections::HashMap;

/// How a raw field value is coerced into its typed form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Optional free-text string; "N/A" becomes null
    FreeText,

    /// Required string; bare sentinel tokens are normalized to uppercase,
    /// longer sentinel-prefixed messages are preserved verbatim
    RequiredText,

    /// Integer; absence, "N/A", or parse failure becomes null
    Integer,

    /// Monetary or numeric value; currency symbols, thousands separators
    /// and the currency-code token are stripped before parsing. Integral
    /// strings parse as integers, others as floats.
    Currency,

    /// Dual-typed levy: numeric like [`FieldKind::Currency`], but the
    /// literal token "INCLUDED" is preserved as a string
    Levy,

    /// Comma-separated list of strings; absence or "N/A" becomes an empty
    /// list
    StringList,
}

/// Immutable map from full dotted path to coercion kind.
///
/// Paths not present in the table fall back to [`FieldKind::FreeText`], so
/// unknown or deeply nested paths are still assigned generically rather
/// than rejected.
#[derive(Debug, Clone)]
pub struct FieldPolicy {
    kinds: HashMap<String, FieldKind>,
}

impl FieldPolicy {
    /// Build a policy from explicit entries
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, FieldKind)>,
        S: Into<String>,
    {
        Self {
            kinds: entries
                .into_iter()
                .map(|(path, kind)| (path.into(), kind))
                .collect(),
        }
    }

    /// The standard car-insurance policy field table
    pub fn standard() -> Self {
        use FieldKind::*;

        let entries: [(&str, FieldKind); 31] = [
            ("policyholder.name", RequiredText),
            ("policyholder.address", RequiredText),
            ("policyholder.occupation", RequiredText),
            ("policyholder.namedDrivers", StringList),
            ("vehicle.registrationMark", RequiredText),
            ("vehicle.makeAndModel", RequiredText),
            ("vehicle.yearOfManufacture", Integer),
            ("vehicle.chassisNumber", RequiredText),
            ("vehicle.engineNumber", FreeText),
            ("vehicle.cubicCapacity", Currency),
            ("vehicle.seatingCapacity", Integer),
            ("vehicle.bodyType", RequiredText),
            ("vehicle.estimatedValue", Currency),
            ("coverage.typeOfCover", RequiredText),
            ("coverage.liabilityLimits.bodilyInjury", Currency),
            ("coverage.liabilityLimits.propertyDamage", Currency),
            ("coverage.excess.thirdPartyProperty", Currency),
            ("coverage.excess.youngDriver", Currency),
            ("coverage.excess.inexperiencedDriver", Currency),
            ("coverage.excess.unnamedDriver", Currency),
            ("coverage.limitationsOnUse", RequiredText),
            ("coverage.authorizedDrivers", RequiredText),
            ("premiumAndDiscounts.premiumAmount", Currency),
            ("premiumAndDiscounts.totalPayable", Currency),
            ("premiumAndDiscounts.noClaimDiscount", Currency),
            ("premiumAndDiscounts.levies.mib", Currency),
            ("premiumAndDiscounts.levies.ia", Levy),
            ("insurerAndPolicyDetails.insurerName", RequiredText),
            ("insurerAndPolicyDetails.policyNumber", RequiredText),
            ("additionalEndorsements.endorsements", StringList),
            ("additionalEndorsements.hirePurchaseMortgagee", FreeText),
        ];

        Self::from_entries(entries)
    }

    /// Look up the coercion kind for a full dotted path
    pub fn kind_of(&self, path: &str) -> FieldKind {
        self.kinds
            .get(path)
            .copied()
            .unwrap_or(FieldKind::FreeText)
    }

    /// Number of explicitly configured paths
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Whether the table has no explicit entries
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl Default for FieldPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
