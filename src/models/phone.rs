//! Phone number helpers
//!
//! Mainland mobile numbers are 11 ASCII digits, displayed masked as
//! `XXX****XXXX` once verified.

/// Number of digits in a valid phone number
pub const PHONE_DIGITS: usize = 11;

/// Number of digits in a verification code
pub const CODE_DIGITS: usize = 6;

const MASK: &str = "****";

/// Check that `phone` is exactly 11 ASCII digits
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == PHONE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit())
}

/// Mask the middle four digits of a phone number
///
/// Only a number matching the 3-4-4 digit grouping is masked; anything
/// else is returned unchanged.
pub fn mask_phone(phone: &str) -> String {
    if !is_valid_phone(phone) {
        return phone.to_string();
    }
    // All bytes are ASCII digits, so byte slicing is safe
    format!("{}{}{}", &phone[..3], MASK, &phone[7..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_phone() {
        assert!(is_valid_phone("12345678901"));
        assert!(!is_valid_phone("123"));
        assert!(!is_valid_phone("1234567890a"));
        assert!(!is_valid_phone("123456789012"));
        assert!(!is_valid_phone(""));
        // Full-width digits are not ASCII
        assert!(!is_valid_phone("１２３４５６７８９０１"));
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("13812345678"), "138****5678");
    }

    #[test]
    fn test_mask_falls_back_to_plain_text() {
        assert_eq!(mask_phone("555-0100"), "555-0100");
        assert_eq!(mask_phone(""), "");
        assert_eq!(mask_phone("1381234567"), "1381234567");
    }
}
