//! Member ID normalization.

/// Number of digits in a phone-number style member ID.
const PHONE_DIGITS: usize = 11;

/// Normalize a phone-like member ID to the `###-####-####` layout.
///
/// Membership numbers and e-mail addresses are passed through unchanged.
/// An ID is treated as a phone number when it contains exactly 11 digits
/// once every non-digit character is ignored, so `01012345678`,
/// `010-1234-5678` and `010 1234 5678` all normalize the same way.
///
/// # Examples
///
/// ```
/// use seat_watch::domain::normalize_member_id;
///
/// assert_eq!(normalize_member_id("01012345678"), "010-1234-5678");
/// assert_eq!(normalize_member_id("someone@example.com"), "someone@example.com");
/// assert_eq!(normalize_member_id("1234567890"), "1234567890");
/// ```
pub fn normalize_member_id(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == PHONE_DIGITS {
        format!("{}-{}-{}", &digits[..3], &digits[3..7], &digits[7..])
    } else {
        raw.to_string()
    }
}
