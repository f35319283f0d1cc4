/// Round to the nearest integer, halves away from zero (`2.5` -> `3`,
/// `-2.5` -> `-3`). Values outside the `i64` range saturate; NaN is `0`.
pub fn round_to_i64(v: f64) -> i64 {
    v.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves_away_from_zero() {
        assert_eq!(round_to_i64(2.5), 3);
        assert_eq!(round_to_i64(-2.5), -3);
        assert_eq!(round_to_i64(2.49), 2);
        assert_eq!(round_to_i64(-0.4), 0);
    }

    #[test]
    fn saturates() {
        assert_eq!(round_to_i64(1e300), i64::MAX);
        assert_eq!(round_to_i64(-1e300), i64::MIN);
        assert_eq!(round_to_i64(f64::NAN), 0);
    }
}
