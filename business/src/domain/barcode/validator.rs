use super::model::{Symbology, ValidationResult};

const UPC_E_PATTERN: &str = r"^[0-1]\d{5,7}$";

/// Keeps only the ASCII digits of a scanned or typed barcode.
fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn pad_left(digits: &str, width: usize) -> String {
    format!("{:0>width$}", digits, width = width)
}

/// Validates a raw barcode and returns its canonical form.
///
/// Business rules:
/// - Non-digit characters are ignored
/// - 13 digits -> EAN-13, 12 -> UPC-A, 8 -> EAN-8 (mod-10 checksum verified)
/// - 6 or 7 digits -> UPC-E (leading 0/1 pattern only, no checksum, padded to 8)
/// - Any other length is rejected with format `UNKNOWN`
pub fn validate_barcode(raw: &str) -> ValidationResult {
    let digits = digits_only(raw);

    if digits.is_empty() {
        return ValidationResult::invalid(None, "Barcode must contain numbers");
    }

    match Symbology::from_digit_count(digits.len()) {
        Symbology::UpcE => validate_upc_e(&digits),
        Symbology::Unknown => ValidationResult::invalid(
            Some(Symbology::Unknown),
            format!(
                "Invalid barcode length: {} digits. Expected 8, 12, or 13 digits.",
                digits.len()
            ),
        ),
        format => validate_checksummed(&digits, format),
    }
}

fn validate_checksummed(digits: &str, format: Symbology) -> ValidationResult {
    let expected_len = format.canonical_length().unwrap_or_default();
    if digits.len() != expected_len {
        return ValidationResult::invalid(
            Some(format),
            format!("{} must be exactly {} digits", format, expected_len),
        );
    }

    if verify_checksum(digits) {
        ValidationResult::valid(format, digits.to_string())
    } else {
        ValidationResult::invalid(Some(format), format!("Invalid {} checksum", format))
    }
}

fn validate_upc_e(digits: &str) -> ValidationResult {
    let matches = regex::Regex::new(UPC_E_PATTERN)
        .map(|re| re.is_match(digits))
        .unwrap_or(false);

    if matches {
        ValidationResult::valid(Symbology::UpcE, pad_left(digits, 8))
    } else {
        ValidationResult::invalid(Some(Symbology::UpcE), "Invalid UPC-E format")
    }
}

/// Computes the mod-10 check digit for a payload of digits.
///
/// Weights alternate 3, 1, 3, ... starting from the digit next to the check
/// digit, so UPC-A, EAN-8 and EAN-13 share one rule.
pub fn compute_check_digit(payload: &str) -> Option<u32> {
    let mut sum = 0;
    for (position, c) in payload.chars().rev().enumerate() {
        let digit = c.to_digit(10)?;
        let weight = if position % 2 == 0 { 3 } else { 1 };
        sum += digit * weight;
    }
    Some((10 - sum % 10) % 10)
}

fn verify_checksum(digits: &str) -> bool {
    let Some((payload, check)) = digits.split_at_checked(digits.len().saturating_sub(1)) else {
        return false;
    };
    match (compute_check_digit(payload), check.chars().next().and_then(|c| c.to_digit(10))) {
        (Some(expected), Some(actual)) => expected == actual,
        _ => false,
    }
}

/// Detects the symbology from the digit count, without validating.
pub fn detect_format(raw: &str) -> Symbology {
    Symbology::from_digit_count(digits_only(raw).len())
}

/// Strips noise and left-pads to the canonical length of the detected format.
///
/// The result is not guaranteed to carry a valid checksum.
pub fn normalize_barcode(raw: &str) -> String {
    let digits = digits_only(raw);
    match Symbology::from_digit_count(digits.len()).canonical_length() {
        Some(width) => pad_left(&digits, width),
        None => digits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_validate_ean13_when_checksum_matches() {
        let result = validate_barcode("5449000000996");

        assert!(result.is_valid);
        assert_eq!(result.format, Some(Symbology::Ean13));
        assert_eq!(result.normalized_barcode.as_deref(), Some("5449000000996"));
        assert!(result.error.is_none());
    }

    #[test]
    fn should_validate_known_retail_codes() {
        assert_eq!(validate_barcode("4006381333931").format, Some(Symbology::Ean13));
        assert!(validate_barcode("4006381333931").is_valid);
        assert!(validate_barcode("036000291452").is_valid);
        assert_eq!(validate_barcode("036000291452").format, Some(Symbology::UpcA));
        assert!(validate_barcode("96385074").is_valid);
        assert_eq!(validate_barcode("96385074").format, Some(Symbology::Ean8));
    }

    #[test]
    fn should_strip_noise_before_validating() {
        let result = validate_barcode(" 5449-0000-00996\n");

        assert!(result.is_valid);
        assert_eq!(result.normalized_barcode.as_deref(), Some("5449000000996"));
    }

    #[test]
    fn should_reject_when_checksum_mismatches() {
        let result = validate_barcode("5449000000997");

        assert!(!result.is_valid);
        assert_eq!(result.format, Some(Symbology::Ean13));
        assert_eq!(result.error.as_deref(), Some("Invalid EAN-13 checksum"));
        assert!(result.normalized_barcode.is_none());
    }

    #[test]
    fn should_name_format_in_checksum_error() {
        assert_eq!(
            validate_barcode("036000291453").error.as_deref(),
            Some("Invalid UPC-A checksum")
        );
        assert_eq!(
            validate_barcode("96385075").error.as_deref(),
            Some("Invalid EAN-8 checksum")
        );
    }

    #[test]
    fn should_reject_when_no_digits() {
        let result = validate_barcode("abc-def");

        assert!(!result.is_valid);
        assert_eq!(result.format, None);
        assert_eq!(result.error.as_deref(), Some("Barcode must contain numbers"));
    }

    #[test]
    fn should_reject_unknown_length() {
        let result = validate_barcode("1234567890");

        assert!(!result.is_valid);
        assert_eq!(result.format, Some(Symbology::Unknown));
        assert_eq!(
            result.error.as_deref(),
            Some("Invalid barcode length: 10 digits. Expected 8, 12, or 13 digits.")
        );
    }

    #[test]
    fn should_accept_upc_e_by_pattern_and_pad_to_eight() {
        let six = validate_barcode("123456");
        assert!(six.is_valid);
        assert_eq!(six.format, Some(Symbology::UpcE));
        assert_eq!(six.normalized_barcode.as_deref(), Some("00123456"));

        let seven = validate_barcode("0123457");
        assert!(seven.is_valid);
        assert_eq!(seven.normalized_barcode.as_deref(), Some("00123457"));
    }

    #[test]
    fn should_reject_upc_e_when_number_system_is_not_zero_or_one() {
        let result = validate_barcode("654321");

        assert!(!result.is_valid);
        assert_eq!(result.format, Some(Symbology::UpcE));
        assert_eq!(result.error.as_deref(), Some("Invalid UPC-E format"));
    }

    #[test]
    fn should_detect_format_without_validating() {
        assert_eq!(detect_format("5449000000997"), Symbology::Ean13);
        assert_eq!(detect_format("0360-0029-1452"), Symbology::UpcA);
        assert_eq!(detect_format("96385074"), Symbology::Ean8);
        assert_eq!(detect_format("654321"), Symbology::UpcE);
        assert_eq!(detect_format("12"), Symbology::Unknown);
    }

    #[test]
    fn should_normalize_without_checking_checksum() {
        assert_eq!(normalize_barcode("5449000000997"), "5449000000997");
        assert_eq!(normalize_barcode("654321"), "00654321");
        assert_eq!(normalize_barcode("12-34"), "1234");
        assert_eq!(normalize_barcode(""), "");
    }

    fn with_check_digit(payload: &str) -> String {
        let check = compute_check_digit(payload).unwrap();
        format!("{}{}", payload, check)
    }

    const GS1_REFERENCE_CODES: &[(&str, Symbology)] = &[
        ("4006381333931", Symbology::Ean13),
        ("9780306406157", Symbology::Ean13),
        ("5901234123457", Symbology::Ean13),
        ("5000112548167", Symbology::Ean13),
        ("036000291452", Symbology::UpcA),
        ("012345678905", Symbology::UpcA),
        ("042100005264", Symbology::UpcA),
        ("96385074", Symbology::Ean8),
        ("73513537", Symbology::Ean8),
        ("40123455", Symbology::Ean8),
        ("50184385", Symbology::Ean8),
    ];

    #[test]
    fn should_accept_published_reference_codes() {
        for (code, format) in GS1_REFERENCE_CODES {
            let result = validate_barcode(code);

            assert!(result.is_valid, "{} should be valid", code);
            assert_eq!(result.format, Some(*format), "{}", code);
            assert_eq!(result.normalized_barcode.as_deref(), Some(*code));
        }
    }

    #[test]
    fn should_reject_reference_codes_with_wrong_check_digit() {
        for (code, _) in GS1_REFERENCE_CODES {
            let (payload, check) = code.split_at(code.len() - 1);
            let check: u32 = check.parse().unwrap();
            let altered = format!("{}{}", payload, (check + 5) % 10);

            assert!(!validate_barcode(&altered).is_valid, "{} should be invalid", altered);
        }
    }

    proptest! {
        #[test]
        fn should_accept_any_correctly_built_barcode(payload in "[0-9]{12}|[0-9]{11}|[0-9]{7}") {
            let barcode = with_check_digit(&payload);
            let result = validate_barcode(&barcode);

            prop_assert!(result.is_valid);
            prop_assert_eq!(result.normalized_barcode, Some(barcode));
        }

        #[test]
        fn should_reject_altered_check_digit(payload in "[0-9]{12}|[0-9]{11}|[0-9]{7}", shift in 1u32..10) {
            let valid = with_check_digit(&payload);
            let check = compute_check_digit(&payload).unwrap();
            let altered = format!("{}{}", payload, (check + shift) % 10);

            prop_assert!(!validate_barcode(&altered).is_valid);
            prop_assert_eq!(detect_format(&altered), detect_format(&valid));
        }

        #[test]
        fn should_normalize_idempotently(raw in "\\PC{0,24}") {
            let once = normalize_barcode(&raw);
            prop_assert_eq!(normalize_barcode(&once), once);
        }
    }
}
