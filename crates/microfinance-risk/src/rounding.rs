/// Round a presentation value to two decimal places.
///
/// Only applied at output boundaries; intermediate arithmetic stays unrounded.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round2;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round2(12.3456), 12.35);
        assert_eq!(round2(0.004), 0.0);
        assert_eq!(round2(82.5), 82.5);
    }
}
