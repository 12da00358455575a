/// Rounds half-up to `decimals` places, so `-0.5` goes to `0` and `0.5`
/// goes to `1`.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor + 0.5).floor() / factor
}

/// Ratio as a percentage, 0 when the denominator is empty.
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }

    part as f64 / whole as f64 * 100.0
}
