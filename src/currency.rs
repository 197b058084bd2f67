//! Display-only currency formatting.
//!
//! Presentation helpers only; nothing here is authoritative, the backend
//! ledger owns all balance arithmetic.

use rust_decimal::Decimal;

/// Render an amount with its currency symbol and two decimal places,
/// e.g. `KSh500.00`. Unknown codes fall back to printing the code itself.
pub fn format_currency(amount: Decimal, currency: &str) -> String {
    let symbol = match currency {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "KES" => "KSh",
        other => other,
    };
    format!("{symbol}{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_symbols() {
        assert_eq!(format_currency(Decimal::new(150_050, 2), "USD"), "$1500.50");
        assert_eq!(format_currency(Decimal::from(20), "KES"), "KSh20.00");
        assert_eq!(format_currency(Decimal::from(5), "EUR"), "€5.00");
        assert_eq!(format_currency(Decimal::from(5), "GBP"), "£5.00");
    }

    #[test]
    fn unknown_code_is_printed_verbatim() {
        assert_eq!(format_currency(Decimal::from(7), "TZS"), "TZS7.00");
    }
}
