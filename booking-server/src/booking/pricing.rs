//! Booking amount derivation
//!
//! The amount is always derived from catalog prices, never taken from the
//! client. Prices are stored as text in whole currency units.

/// Amount charged when no priced service is selected
pub const MINIMUM_AMOUNT: i64 = 100;

/// Minor units per whole currency unit
pub const MINOR_UNITS: i64 = 100;

/// Integer value of a price text; anything non-numeric counts as zero
pub fn price_units(text: &str) -> i64 {
    text.trim().parse::<i64>().unwrap_or(0)
}

/// Whether a price is acceptable on write: empty or a non-negative integer
pub fn is_valid_price(text: &str) -> bool {
    let text = text.trim();
    text.is_empty() || text.parse::<u64>().is_ok()
}

/// Hotel price plus catering price, with the minimum floor
pub fn booking_amount(hotel_price: Option<&str>, catering_price: Option<&str>) -> i64 {
    let total = hotel_price
        .map(price_units)
        .unwrap_or(0)
        .saturating_add(catering_price.map(price_units).unwrap_or(0));
    chargeable(total)
}

/// Apply the minimum floor to a stored amount
pub fn chargeable(amount: i64) -> i64 {
    if amount <= 0 { MINIMUM_AMOUNT } else { amount }
}

/// Convert whole units to the gateway's minor units
pub fn to_minor_units(amount: i64) -> i64 {
    chargeable(amount).saturating_mul(MINOR_UNITS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sums_hotel_and_catering() {
        assert_eq!(booking_amount(Some("5000"), Some("1500")), 6500);
        assert_eq!(booking_amount(None, Some("800")), 800);
        assert_eq!(booking_amount(Some(" 1200 "), None), 1200);
    }

    #[test]
    fn test_minimum_when_nothing_priced() {
        assert_eq!(booking_amount(None, None), MINIMUM_AMOUNT);
        assert_eq!(booking_amount(Some(""), Some("free")), MINIMUM_AMOUNT);
        assert_eq!(booking_amount(Some("0"), Some("0")), MINIMUM_AMOUNT);
    }

    #[test]
    fn test_non_numeric_counts_as_zero() {
        assert_eq!(price_units("12.50"), 0);
        assert_eq!(price_units("abc"), 0);
        assert_eq!(booking_amount(Some("abc"), Some("300")), 300);
    }

    #[test]
    fn test_price_validation() {
        assert!(is_valid_price(""));
        assert!(is_valid_price("0"));
        assert!(is_valid_price("4500"));
        assert!(!is_valid_price("-5"));
        assert!(!is_valid_price("45.00"));
        assert!(!is_valid_price("cheap"));
    }

    #[test]
    fn test_minor_units() {
        assert_eq!(to_minor_units(6500), 650_000);
        assert_eq!(to_minor_units(0), MINIMUM_AMOUNT * MINOR_UNITS);
    }
}
