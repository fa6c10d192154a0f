//! Parse flat `dotted.path: value` model output into a typed document
//!
//! The parser is the bridge between the model's line-oriented response and
//! the nested record downstream consumers expect. It runs in a single
//! parse-and-fill pass: line-by-line coercion and nested assignment, then
//! the unconditional default-completion pass that guarantees structural
//! presence of every required field.

use polex_domain::sentinel::{self, NOT_AVAILABLE};
use polex_domain::{DefaultPolicy, Document, FieldKind, FieldPolicy};
use serde_json::Value;
use tracing::debug;

/// Parses generation responses into structurally complete documents.
///
/// Both policy tables are immutable configuration supplied at
/// construction, so multiple schema versions can coexist in tests.
#[derive(Debug, Clone)]
pub struct ResponseParser {
    fields: FieldPolicy,
    defaults: DefaultPolicy,
}

impl ResponseParser {
    /// Create a parser over explicit field and default policies
    pub fn new(fields: FieldPolicy, defaults: DefaultPolicy) -> Self {
        Self { fields, defaults }
    }

    /// A parser configured with the standard policy tables
    pub fn standard() -> Self {
        Self::new(FieldPolicy::standard(), DefaultPolicy::standard())
    }

    /// Parse a raw model response into a document.
    ///
    /// Lines without a colon, or with an empty value, are skipped. A plain
    /// `null` value is skipped unless the value text also carries a
    /// sentinel marker ("N/A", "UNKNOWN", "REDACTED") as a case-insensitive
    /// substring. Duplicate paths overwrite earlier assignments. Unknown
    /// paths are assigned with the generic optional-string rule rather
    /// than rejected.
    pub fn parse(&self, response: &str) -> Document {
        let mut document = self.seed_document();
        let mut assigned = 0usize;

        for line in response.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            if key.is_empty() || value.is_empty() {
                continue;
            }
            if value.eq_ignore_ascii_case("null") && !sentinel::contains_sentinel(value) {
                continue;
            }

            document.set_path(key, self.coerce(key, value));
            assigned += 1;
        }

        debug!("Assigned {} fields from model response", assigned);

        self.complete_defaults(&mut document);
        document
    }

    /// Inject canonical defaults for required fields that are absent or
    /// null, then tidy the levy sub-object.
    ///
    /// Idempotent: running it on an already-complete document changes
    /// nothing.
    pub fn complete_defaults(&self, document: &mut Document) {
        for (path, default) in self.defaults.entries() {
            if !document.has_value(path) {
                document.set_path(path, default.clone());
            }
        }

        for path in self.defaults.ensure_objects() {
            document.ensure_object(path);
        }

        self.tidy_levies(document);
    }

    /// Pre-create the section objects so a response with no usable lines
    /// still yields the full document skeleton
    fn seed_document(&self) -> Document {
        let mut document = Document::new();
        for section in [
            "policyholder",
            "vehicle",
            "coverage.liabilityLimits",
            "coverage.excess",
            "premiumAndDiscounts.levies",
            "insurerAndPolicyDetails.periodOfInsurance",
            "additionalEndorsements",
        ] {
            document.ensure_object(section);
        }
        document
    }

    fn coerce(&self, path: &str, value: &str) -> Value {
        match self.fields.kind_of(path) {
            FieldKind::StringList => coerce_list(value),
            FieldKind::Integer => coerce_integer(value),
            FieldKind::Currency => coerce_number(value),
            FieldKind::Levy => coerce_levy(value),
            FieldKind::RequiredText => coerce_required_text(value),
            FieldKind::FreeText => coerce_free_text(value),
        }
    }

    /// Backfill still-null levy members to zero; drop the levy object
    /// entirely when it carries no value at all
    fn tidy_levies(&self, document: &mut Document) {
        const LEVIES: &str = "premiumAndDiscounts.levies";

        let mut remove = false;
        if let Some(levies) = document.get_path_mut(LEVIES).and_then(Value::as_object_mut) {
            for member in ["mib", "ia"] {
                if matches!(levies.get(member), Some(v) if v.is_null()) {
                    levies.insert(member.to_string(), Value::from(0.0));
                }
            }

            remove = levies.is_empty()
                || (levies.get("mib").is_none_or(Value::is_null)
                    && levies.get("ia").is_none_or(Value::is_null));
        }

        if remove {
            document.remove_path(LEVIES);
        }
    }
}

impl Default for ResponseParser {
    fn default() -> Self {
        Self::standard()
    }
}

/// Strip currency symbols, thousands separators, and the currency-code
/// token before numeric parsing
fn strip_currency(value: &str) -> String {
    value
        .replace('$', "")
        .replace(',', "")
        .replace("HKD", "")
        .trim()
        .to_string()
}

fn coerce_number(value: &str) -> Value {
    let cleaned = strip_currency(value);
    if cleaned.is_empty() || cleaned == NOT_AVAILABLE {
        return Value::Null;
    }
    parse_number(&cleaned)
}

/// Integral strings parse as integers, everything else as floats; parse
/// failure yields null
fn parse_number(cleaned: &str) -> Value {
    if cleaned.contains('.') {
        cleaned
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    } else {
        cleaned
            .parse::<i64>()
            .map(|n| Value::Number(n.into()))
            .unwrap_or(Value::Null)
    }
}

fn coerce_integer(value: &str) -> Value {
    if value == NOT_AVAILABLE {
        return Value::Null;
    }
    value
        .parse::<i64>()
        .map(|n| Value::Number(n.into()))
        .unwrap_or(Value::Null)
}

/// Dual-typed levy: the literal token "INCLUDED" survives as a string
/// instead of being coerced to a number
fn coerce_levy(value: &str) -> Value {
    let cleaned = strip_currency(value);
    if cleaned.eq_ignore_ascii_case("INCLUDED") {
        return Value::String("INCLUDED".to_string());
    }
    if cleaned.is_empty() || cleaned == NOT_AVAILABLE {
        return Value::Null;
    }
    parse_number(&cleaned)
}

/// Bare sentinel tokens are normalized to uppercase; longer
/// sentinel-prefixed messages are preserved verbatim
fn coerce_required_text(value: &str) -> Value {
    if sentinel::is_sentinel_token(value) {
        Value::String(value.to_uppercase())
    } else {
        Value::String(value.to_string())
    }
}

fn coerce_free_text(value: &str) -> Value {
    if value == NOT_AVAILABLE {
        Value::Null
    } else {
        Value::String(value.to_string())
    }
}
