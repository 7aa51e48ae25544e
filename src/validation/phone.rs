//! Nigerian phone numbers: cleaning, canonical `+234` normalization,
//! shape validation and the rewrite applied while a user types.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::COUNTRY_CODE;

// 070, 071, 080, 081, 090, 091 mobile blocks, in local, plus-prefixed and
// bare country code form.
static PHONE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"^0[789][01]\d{8}$",
        r"^\+234[789][01]\d{8}$",
        r"^234[789][01]\d{8}$",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("phone pattern should compile"))
    .collect()
});

/// Removes every character that is not an ASCII digit.
pub fn digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Rewrites a phone number into `+234XXXXXXXXXX` when its digits have one of
/// the known shapes. Anything else comes back exactly as it was given.
pub fn normalize(raw: &str) -> String {
    let cleaned = digits(raw);

    match cleaned.len() {
        11 if cleaned.starts_with('0') => format!("+{}{}", COUNTRY_CODE, &cleaned[1..]),
        10 => format!("+{}{}", COUNTRY_CODE, cleaned),
        14 if cleaned.starts_with(COUNTRY_CODE) => format!("+{}", cleaned),
        _ => raw.to_string(),
    }
}

/// True when the digits of `raw` form a Nigerian mobile number.
pub fn is_valid(raw: &str) -> bool {
    let cleaned = digits(raw);
    PHONE_PATTERNS.iter().any(|pattern| pattern.is_match(&cleaned))
}

/// Value written back into a `tel` input after each keystroke.
pub fn format_as_typed(raw: &str) -> String {
    let cleaned = digits(raw);
    if cleaned.is_empty() {
        return cleaned;
    }

    if let Some(rest) = cleaned.strip_prefix('0') {
        format!("+{}{}", COUNTRY_CODE, rest)
    } else if cleaned.starts_with(COUNTRY_CODE) {
        format!("+{}", cleaned)
    } else if cleaned.len() == 10 {
        format!("+{}{}", COUNTRY_CODE, cleaned)
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_strips_formatting() {
        assert_eq!(digits("+234 (803) 123-4567"), "2348031234567");
        assert_eq!(digits("no digits"), "");
    }

    #[test]
    fn normalize_local_number_replaces_leading_zero() {
        for local in ["08031234567", "07011112222", "09100000000", "01234567890"] {
            assert_eq!(normalize(local), format!("+234{}", &local[1..]));
        }
        assert_eq!(normalize("0803 123 4567"), "+2348031234567");
    }

    #[test]
    fn normalize_ten_digits_prepends_country_code() {
        for ten in ["8031234567", "1234567890"] {
            assert_eq!(normalize(ten), format!("+234{}", ten));
        }
    }

    #[test]
    fn normalize_fourteen_digits_with_country_code_gets_plus() {
        assert_eq!(normalize("23408031234567"), "+23408031234567");
    }

    #[test]
    fn normalize_leaves_unknown_shapes_untouched() {
        assert_eq!(normalize("12345"), "12345");
        assert_eq!(normalize("call me maybe"), "call me maybe");
        // 11 digits not starting with 0
        assert_eq!(normalize("18031234567"), "18031234567");
        // 14 digits not starting with 234
        assert_eq!(normalize("12345678901234"), "12345678901234");
    }

    #[test]
    fn normalize_is_stable_on_its_own_output() {
        // Re-fed output cleans to 13 digits, which no rule matches.
        let once = normalize("08031234567");
        assert_eq!(once, "+2348031234567");
        assert_eq!(digits(&once).len(), 13);
        assert_eq!(normalize(&once), once);

        let once = normalize("8031234567");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn validates_known_prefixes() {
        assert!(is_valid("08031234567"));
        assert!(is_valid("08131234567"));
        assert!(is_valid("07011112222"));
        assert!(is_valid("09112345678"));
        assert!(is_valid("2348031234567"));
        assert!(is_valid("+2348031234567"));
        assert!(is_valid("+234 803 123 4567"));
        assert!(is_valid("0803-123-4567"));
    }

    #[test]
    fn rejects_unrecognized_shapes() {
        assert!(!is_valid("1234567890"));
        assert!(!is_valid("08231234567")); // third digit outside {0,1}
        assert!(!is_valid("06031234567")); // second digit outside {7,8,9}
        assert!(!is_valid("0803123456")); // too short
        assert!(!is_valid("080312345678")); // too long
        assert!(!is_valid(""));
    }

    #[test]
    fn formats_while_typing() {
        assert_eq!(format_as_typed(""), "");
        assert_eq!(format_as_typed("abc"), "");
        assert_eq!(format_as_typed("0"), "+234");
        assert_eq!(format_as_typed("0803"), "+234803");
        assert_eq!(format_as_typed("+2348031"), "+2348031");
        assert_eq!(format_as_typed("803"), "803");
        assert_eq!(format_as_typed("8031234567"), "+2348031234567");
    }

    #[test]
    fn typed_formatting_is_stable_across_keystrokes() {
        let mut value = String::new();
        for key in "08031234567".chars() {
            value.push(key);
            value = format_as_typed(&value);
        }
        assert_eq!(value, "+2348031234567");
        assert!(is_valid(&value));
    }
}
