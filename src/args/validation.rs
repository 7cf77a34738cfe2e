/// # Errors
///
/// Will return `Err` if the value is not a whole number of at least 1
pub fn check_hole_count(value: &str) -> Result<u32, String> {
    match value.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(format!("The hole count '{value}' must be a whole number of at least 1.")),
    }
}

/// Par is only required to be non-negative; the 1-6 range is a hint for the
/// input box, not a rule.
///
/// # Errors
///
/// Will return `Err` if the value is not a non-negative whole number
pub fn check_default_par(value: &str) -> Result<u32, String> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("The default par '{value}' must be a non-negative whole number."))
}
