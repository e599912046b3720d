use std::fmt::{Display, Formatter};

/// Decimal exponent from which the scientific layout is used.
const SCIENTIFIC_FROM: i32 = 6;
/// Decimal exponent below which the scientific layout is used.
const SCIENTIFIC_BELOW: i32 = -4;

/// Shortest round-trip rendering of a scalar, switching to `1e-09` style
/// exponents for very small or large magnitudes.
pub(crate) struct ShortestScalar(pub f64);

impl Display for ShortestScalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("NaN");
        }
        if value.is_infinite() {
            return f.write_str(if value.is_sign_positive() { "+Inf" } else { "-Inf" });
        }
        if value.is_sign_negative() {
            f.write_str("-")?;
        }
        if value == 0.0 {
            return f.write_str("0");
        }

        let scientific = format!("{:e}", value.abs());
        let (mantissa, exponent) = scientific
            .split_once('e')
            .unwrap_or((scientific.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or_default();

        if !(SCIENTIFIC_BELOW..SCIENTIFIC_FROM).contains(&exponent) {
            let sign = if exponent < 0 { '-' } else { '+' };
            return write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs());
        }

        let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
        let integer_digits = exponent + 1;
        if integer_digits <= 0 {
            let leading_zeros = usize::try_from(-integer_digits).unwrap_or_default();
            return write!(f, "0.{}{digits}", "0".repeat(leading_zeros));
        }

        let integer_digits = usize::try_from(integer_digits).unwrap_or_default();
        if integer_digits >= digits.len() {
            write!(f, "{digits}{}", "0".repeat(integer_digits - digits.len()))
        } else {
            let (integer, fraction) = digits.split_at(integer_digits);
            write!(f, "{integer}.{fraction}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: f64) -> String {
        ShortestScalar(value).to_string()
    }

    #[test]
    fn integers() {
        assert_eq!(render(1.0), "1");
        assert_eq!(render(-3.0), "-3");
        assert_eq!(render(100.0), "100");
        assert_eq!(render(123_456.0), "123456");
    }

    #[test]
    fn fractions() {
        assert_eq!(render(0.5), "0.5");
        assert_eq!(render(12.5), "12.5");
        assert_eq!(render(-0.25), "-0.25");
        assert_eq!(render(0.0001), "0.0001");
        assert_eq!(render(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn small_exponents() {
        assert_eq!(render(1e-9), "1e-09");
        assert_eq!(render(-1e-9), "-1e-09");
        assert_eq!(render(0.000_01), "1e-05");
        assert_eq!(render(2.5e-120), "2.5e-120");
    }

    #[test]
    fn large_exponents() {
        assert_eq!(render(1e6), "1e+06");
        assert_eq!(render(1_234_567.0), "1.234567e+06");
        assert_eq!(render(1e21), "1e+21");
    }

    #[test]
    fn special_values() {
        assert_eq!(render(0.0), "0");
        assert_eq!(render(-0.0), "-0");
        assert_eq!(render(f64::NAN), "NaN");
        assert_eq!(render(f64::INFINITY), "+Inf");
        assert_eq!(render(f64::NEG_INFINITY), "-Inf");
    }
}
