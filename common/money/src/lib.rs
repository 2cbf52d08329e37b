use bigdecimal::{BigDecimal, ToPrimitive};

/// Normalize a monetary value to 2 decimal places (banker's rounding not applied; BigDecimal uses plain truncation when reducing scale)
pub fn normalize_scale(value: &BigDecimal) -> BigDecimal {
    // Set scale to 2 using with_scale, which truncates/extends with zeros.
    value.with_scale(2)
}

/// Convert a major-unit amount to integer minor units (cents) after
/// normalization. Returns None when the amount is negative or does not fit.
pub fn minor_units(value: &BigDecimal) -> Option<i64> {
    let cents = (normalize_scale(value) * BigDecimal::from(100)).with_scale(0);
    let cents = cents.to_i64()?;
    if cents < 0 {
        None
    } else {
        Some(cents)
    }
}
