//! Sentinel values standing in for "not determinable" at the data level
//!
//! Sentinels are deliberately distinct from null/absent at the schema
//! level: a field holding "REDACTED" was seen but unreadable, while a null
//! field was never found at all.

/// Canonical marker for a value that could not be found
pub const UNKNOWN: &str = "UNKNOWN";

/// Canonical marker for a value masked out of the source document
pub const REDACTED: &str = "REDACTED";

/// Marker used by the generation capability for inapplicable fields
pub const NOT_AVAILABLE: &str = "N/A";

/// Richer canonical default for usage limitations, which every policy
/// carries at least as boilerplate
pub const UNKNOWN_LIMITATIONS: &str = "UNKNOWN - standard usage restrictions apply";

/// Richer canonical default for the authorized-driver clause
pub const UNKNOWN_AUTHORIZED_DRIVERS: &str = "UNKNOWN - standard driver authorization applies";

/// Whether the text contains any sentinel token as a case-insensitive
/// substring. Used to keep explicit sentinel markers that a naive
/// value-presence check would discard.
pub fn contains_sentinel(text: &str) -> bool {
    let upper = text.to_uppercase();
    upper.contains(NOT_AVAILABLE) || upper.contains(UNKNOWN) || upper.contains(REDACTED)
}

/// Whether the text is exactly one of the bare sentinel tokens,
/// case-insensitively
pub fn is_sentinel_token(text: &str) -> bool {
    let upper = text.to_uppercase();
    upper == NOT_AVAILABLE || upper == UNKNOWN || upper == REDACTED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_sentinel() {
        assert!(contains_sentinel("REDACTED"));
        assert!(contains_sentinel("redacted"));
        assert!(contains_sentinel("value is n/a here"));
        assert!(contains_sentinel("UNKNOWN - standard usage restrictions apply"));
        assert!(!contains_sentinel("Jane Tan"));
        assert!(!contains_sentinel(""));
    }

    #[test]
    fn test_is_sentinel_token() {
        assert!(is_sentinel_token("N/A"));
        assert!(is_sentinel_token("n/a"));
        assert!(is_sentinel_token("Unknown"));
        assert!(is_sentinel_token("REDACTED"));
        assert!(!is_sentinel_token("UNKNOWN - standard usage restrictions apply"));
        assert!(!is_sentinel_token("NA"));
    }
}
