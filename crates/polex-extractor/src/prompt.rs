//! Prompt assembly for policy extraction
//!
//! The prompt instructs the model to emit one `dotted.path: value`
//! assertion per line. Builder logic adapts the prompt to the document:
//! very long text is truncated, and detection notes are added for
//! Han-script and redacted content.

/// Default cap on document text included in the prompt
pub const DEFAULT_MAX_CHARS: usize = 20_000;

/// Builds extraction prompts for the generative model
pub struct PromptBuilder {
    text: String,
    max_chars: usize,
}

impl PromptBuilder {
    /// Create a builder over the acquired document text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            max_chars: DEFAULT_MAX_CHARS,
        }
    }

    /// Override the maximum document text included in the prompt
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let text = self.truncated_text();

        let mut prompt = String::new();

        // 1. Instructions and field inventory
        prompt.push_str(EXTRACTION_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 2. Document-specific detection notes
        if has_han_script(&text) {
            prompt.push_str(
                "NOTE: This document contains Chinese text. Extract information from \
                 both English and Chinese sections.\n",
            );
        }
        if has_redaction_markers(&text) {
            prompt.push_str(
                "NOTE: This document appears to contain REDACTED information. Use \
                 'REDACTED' as the value for any fields that are blacked out, masked, \
                 or show redaction markers.\n",
            );
        }

        // 3. The document text
        prompt.push_str("\nPolicy Document Text:\n---\n");
        prompt.push_str(&text);
        prompt.push_str("\n---\n\n");

        // 4. Output format reminder
        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }

    fn truncated_text(&self) -> String {
        if self.text.chars().count() <= self.max_chars {
            return self.text.clone();
        }
        let mut truncated: String = self.text.chars().take(self.max_chars).collect();
        truncated.push_str("\n\n[Text truncated due to length...]");
        truncated
    }
}

/// Whether the text contains characters from the CJK unified ideograph
/// block
pub fn has_han_script(text: &str) -> bool {
    text.chars().any(|c| ('\u{4e00}'..='\u{9fff}').contains(&c))
}

/// Whether the text carries visible redaction markers
pub fn has_redaction_markers(text: &str) -> bool {
    let upper = text.to_uppercase();
    ["REDACTED", "***", "BLACKED", "MASKED", "\u{2588}\u{2588}\u{2588}\u{2588}"]
        .iter()
        .any(|marker| upper.contains(marker))
}

const EXTRACTION_INSTRUCTIONS: &str = r#"You are an expert at extracting structured information from car insurance policy documents.
Extract all relevant information from the policy document text below and return it as KEY-VALUE PAIRS, one per line:

KEY: value

For nested fields use dot notation (e.g. "policyholder.name: John Doe", "coverage.liabilityLimits.bodilyInjury: 100000000").
For arrays use comma-separated values (e.g. "policyholder.namedDrivers: Driver1, Driver2").

Required fields that MUST be extracted (use "UNKNOWN" if truly not found):
- policyholder.name, policyholder.address, policyholder.occupation, policyholder.namedDrivers (optional)
- vehicle.registrationMark, vehicle.makeAndModel, vehicle.yearOfManufacture, vehicle.chassisNumber, vehicle.engineNumber (optional), vehicle.cubicCapacity (optional), vehicle.seatingCapacity, vehicle.bodyType, vehicle.estimatedValue (optional)
- coverage.typeOfCover, coverage.liabilityLimits.bodilyInjury, coverage.liabilityLimits.propertyDamage, coverage.excess.thirdPartyProperty (optional), coverage.excess.youngDriver (optional), coverage.excess.inexperiencedDriver (optional), coverage.excess.unnamedDriver (optional), coverage.limitationsOnUse, coverage.authorizedDrivers
- premiumAndDiscounts.premiumAmount, premiumAndDiscounts.totalPayable, premiumAndDiscounts.noClaimDiscount (as a number, e.g. 60 for 60%), premiumAndDiscounts.levies.mib (optional), premiumAndDiscounts.levies.ia (optional)
- insurerAndPolicyDetails.insurerName, insurerAndPolicyDetails.policyNumber, insurerAndPolicyDetails.periodOfInsurance.start, insurerAndPolicyDetails.periodOfInsurance.end, insurerAndPolicyDetails.dateOfIssue (optional)
- additionalEndorsements.endorsements (optional, comma-separated), additionalEndorsements.hirePurchaseMortgagee (optional)

Special instructions:
1. coverage.limitationsOnUse and coverage.authorizedDrivers are ALWAYS present, even as standard boilerplate ("social, domestic and pleasure", "any person driving with permission"). Extract the FULL sentence describing them. If truly not found use "UNKNOWN - standard usage restrictions apply" / "UNKNOWN - standard driver authorization applies".
2. insurerAndPolicyDetails.insurerName: search the ENTIRE document including headers and footers; the insurer name is always present somewhere.
3. Vehicle and policyholder details are often in tables, schedules, or structured sections; search every page.
4. For premium information look for premium tables, payment summaries, "NCD", "no claim discount".
5. If a field is REDACTED, BLACKED OUT, or shows as "***" or similar masking, use "REDACTED" as the value. Do NOT guess redacted values.
6. Documents may be bilingual; extract values from whichever language they appear in.
7. Dates in DD/MM/YYYY format. Monetary values as numbers only. Percentages as numbers (60, not "60%").
8. For required fields that cannot be found use "UNKNOWN" (not null, not empty). For missing optional fields, omit the line entirely."#;

const OUTPUT_FORMAT_REMINDER: &str = "Return ONLY the key-value pairs, one per line, \
using the exact key names above. No additional text or explanation.";
