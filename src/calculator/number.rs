//! Numeric text conversion.
//!
//! Operands are kept as text while they are typed, so every conversion between
//! text and `f64` goes through here. The rules follow the usual browser number
//! formatting: shortest round-trip digits, positional notation between `1e-7`
//! and `1e21`, and `NaN` for anything that is not a numeral.

/// Parse operand text into a number.
///
/// Empty text is `0`. Text that is not a decimal numeral yields `NaN` rather
/// than an error, so a malformed operand can never stop the calculator.
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // Rust also accepts "inf" and "nan" spellings, which are not numerals here.
    let body = trimmed.trim_start_matches(['+', '-']);
    if body.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Format a number the way it is shown as operand text.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        }
        .to_string();
    }
    if value == 0.0 {
        // Covers -0 as well.
        return "0".to_string();
    }

    let (digits, exponent) = shortest_digits(value.abs());
    let sign = if value < 0.0 { "-" } else { "" };
    let k = digits.len() as i32;
    // Decimal point position relative to the start of the digit string.
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let (lead, rest) = digits.split_at(1);
        let mantissa = if rest.is_empty() {
            lead.to_string()
        } else {
            format!("{}.{}", lead, rest)
        };
        format!("{}e{}", mantissa, signed_exponent(n - 1))
    };

    format!("{}{}", sign, body)
}

/// Format a number in exponential notation with a fixed number of fractional digits.
pub fn format_exponential(value: f64, fraction_digits: usize) -> String {
    if !value.is_finite() {
        return format_number(value);
    }

    let formatted = format!("{:.*e}", fraction_digits, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            format!("{}e{}", mantissa, signed_exponent(exponent))
        }
        None => formatted,
    }
}

/// Split a positive finite number into its shortest significant digits and
/// the decimal exponent of the first digit.
fn shortest_digits(value: f64) -> (String, i32) {
    let formatted = format!("{:e}", value);
    let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    (digits, exponent.parse().unwrap_or(0))
}

fn signed_exponent(exponent: i32) -> String {
    if exponent < 0 {
        exponent.to_string()
    } else {
        format!("+{}", exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_numerals() {
        assert_eq!(parse_number("0."), 0.0);
        assert_eq!(parse_number("5."), 5.0);
        assert_eq!(parse_number("-12.5"), -12.5);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("1e+21"), 1e21);
    }

    #[test]
    fn test_parse_non_numerals() {
        assert!(parse_number("NaN").is_nan());
        assert!(parse_number("inf").is_nan());
        assert!(parse_number("Infinity5").is_nan());
        assert_eq!(parse_number("Infinity"), f64::INFINITY);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_format_positional() {
        assert_eq!(format_number(20.0), "20");
        assert_eq!(format_number(0.3), "0.3");
        assert_eq!(format_number(-0.5), "-0.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(123456.789), "123456.789");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_format_exponential_range() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e21), "1.5e+21");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-2.5e-8), "-2.5e-8");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_fixed_exponential() {
        assert_eq!(
            format_exponential(1234567890123456789.0, 8),
            "1.23456789e+18"
        );
        assert_eq!(format_exponential(0.00012, 8), "1.20000000e-4");
        assert_eq!(format_exponential(f64::INFINITY, 8), "Infinity");
    }
}
