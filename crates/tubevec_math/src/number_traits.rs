use std::cmp::Ordering;

/// Absolute tolerance shared by equality, normalization and formatting.
pub const TOLERANCE: f64 = 0.000_000_01;

pub trait IsZero {
    fn is_zero(&self) -> bool;
}

impl IsZero for f64 {
    fn is_zero(&self) -> bool {
        self.abs() < TOLERANCE
    }
}

/// Strictly positive but below the tolerance.
pub trait IsPositiveNoise {
    fn is_positive_noise(&self) -> bool;
}

impl IsPositiveNoise for f64 {
    fn is_positive_noise(&self) -> bool {
        *self > 0.0 && *self < TOLERANCE
    }
}

pub trait ApproxEq {
    fn approx_eq(&self, other: &Self) -> bool;
}

impl ApproxEq for f64 {
    // Only a difference known to exceed the tolerance counts, so NaN never does.
    fn approx_eq(&self, other: &Self) -> bool {
        !matches!(
            (self - other).abs().partial_cmp(&TOLERANCE),
            Some(Ordering::Greater)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_zero() {
        assert!(0.0_f64.is_zero());
        assert!((-0.000_000_009_f64).is_zero());
        assert!(!TOLERANCE.is_zero());
        assert!(!1.0_f64.is_zero());
    }

    #[test]
    fn is_positive_noise() {
        assert!(1e-9_f64.is_positive_noise());
        assert!(!(-1e-9_f64).is_positive_noise());
        assert!(!0.0_f64.is_positive_noise());
        assert!(!TOLERANCE.is_positive_noise());
    }

    #[test]
    fn approx_eq() {
        assert!(1.0_f64.approx_eq(&1.000_000_005));
        assert!(!1.0_f64.approx_eq(&1.000_000_1));
        assert!(f64::NAN.approx_eq(&1.0));
    }
}
