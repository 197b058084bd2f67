//! Client-side pre-validation helpers.
//!
//! These guard obviously-invalid input before a network round trip, purely
//! as a UX optimization. They are not a security boundary, and the backend
//! re-validates everything independently.

use compact_str::CompactString;
use rust_decimal::Decimal;

/// Per-transaction ceiling, in display-currency units.
pub const MAX_TRANSACTION_AMOUNT: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Country code accepted by the mobile-money provider (Kenya).
pub const COUNTRY_CODE: &str = "254";

/// Leading digit of local-format numbers.
pub const LOCAL_PREFIX: &str = "0";

const LOCAL_LEN: usize = 10;
const INTERNATIONAL_LEN: usize = 12;

/// Rejections produced by the pre-validation helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("amount must be greater than 0")]
    NonPositiveAmount,

    #[error("amount cannot exceed {limit}")]
    AmountAboveLimit { limit: Decimal },

    #[error("invalid phone format, use 07XXXXXXXX or 254XXXXXXXXX")]
    InvalidPhone,
}

/// Check a transfer/deposit amount: valid iff `0 < amount ≤`
/// [`MAX_TRANSACTION_AMOUNT`].
pub fn validate_amount(amount: Decimal) -> Result<(), ValidationError> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount);
    }
    if amount > MAX_TRANSACTION_AMOUNT {
        return Err(ValidationError::AmountAboveLimit {
            limit: MAX_TRANSACTION_AMOUNT,
        });
    }
    Ok(())
}

/// Normalize a Kenyan mobile number to the `254XXXXXXXXX` form.
///
/// Accepts `0XXXXXXXXX` (local), `254XXXXXXXXX` (international), and
/// `+254XXXXXXXXX`; spaces and dashes are stripped first. Deliberately a
/// single-country rule, not a general E.164 validator.
pub fn validate_phone(phone: &str) -> Result<CompactString, ValidationError> {
    let cleaned: CompactString = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-'))
        .collect();

    if let Some(rest) = cleaned.strip_prefix('+') {
        if rest.starts_with(COUNTRY_CODE) && rest.len() == INTERNATIONAL_LEN && all_digits(rest) {
            return Ok(CompactString::from(rest));
        }
        return Err(ValidationError::InvalidPhone);
    }
    if cleaned.starts_with(LOCAL_PREFIX) && cleaned.len() == LOCAL_LEN && all_digits(&cleaned) {
        let mut formatted = CompactString::from(COUNTRY_CODE);
        formatted.push_str(&cleaned[1..]);
        return Ok(formatted);
    }
    if cleaned.starts_with(COUNTRY_CODE)
        && cleaned.len() == INTERNATIONAL_LEN
        && all_digits(&cleaned)
    {
        return Ok(cleaned);
    }
    Err(ValidationError::InvalidPhone)
}

fn all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_boundaries() {
        assert!(validate_amount(Decimal::ZERO).is_err());
        assert!(validate_amount(Decimal::from(-5)).is_err());
        assert!(validate_amount(Decimal::new(1_000_001, 2)).is_err()); // 10000.01
        assert!(validate_amount(Decimal::from(1)).is_ok());
        assert!(validate_amount(Decimal::from(10_000)).is_ok());
        assert!(validate_amount(Decimal::new(1, 2)).is_ok()); // 0.01
    }

    #[test]
    fn amount_errors_name_the_limit() {
        let err = validate_amount(Decimal::from(20_000)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::AmountAboveLimit {
                limit: MAX_TRANSACTION_AMOUNT
            }
        );
    }

    #[test]
    fn local_phone_is_normalized() {
        assert_eq!(
            validate_phone("0712345678").unwrap(),
            CompactString::from("254712345678")
        );
    }

    #[test]
    fn international_phone_is_unchanged() {
        assert_eq!(
            validate_phone("254712345678").unwrap(),
            CompactString::from("254712345678")
        );
    }

    #[test]
    fn plus_prefix_is_stripped() {
        assert_eq!(
            validate_phone("+254712345678").unwrap(),
            CompactString::from("254712345678")
        );
    }

    #[test]
    fn separators_are_cleaned() {
        assert_eq!(
            validate_phone("0712 345-678").unwrap(),
            CompactString::from("254712345678")
        );
    }

    #[test]
    fn bad_shapes_are_rejected() {
        for phone in [
            "",
            "0712345",
            "07123456789",
            "255712345678",
            "25471234567",
            "2547123456789",
            "+255712345678",
            "0712a45678",
            "phone",
        ] {
            assert_eq!(
                validate_phone(phone).unwrap_err(),
                ValidationError::InvalidPhone,
                "accepted {phone:?}"
            );
        }
    }
}
