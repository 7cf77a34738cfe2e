/// Interprets free-form numeric input the way a browser `parseInt` does:
/// leading whitespace and an optional sign, then as many digits as follow.
/// Input with no leading digits becomes 0. Out of range values saturate.
#[must_use]
pub fn coerce_numeric_input(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(10) else {
            break;
        };
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(i64::from(d));
    }

    if !seen_digit {
        return 0;
    }
    if negative { -value } else { value }
}

/// Stored par and score values are never negative.
#[must_use]
pub fn clamp_non_negative(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}
