//! Formatting utilities for prices, holdings, and percentage changes.

/// Insert `,` between groups of three digits (e.g. "46376" -> "46,376").
///
/// `digits` must contain ASCII digits only.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Fraction digits needed to print any finite `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Round a non-negative decimal string to `decimals` places, halves away
/// from zero. Returns the integer and fraction digits.
fn round_digits(repr: &str, decimals: usize) -> (String, String) {
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr, ""));
    let frac = frac_part.as_bytes();

    let mut digits: Vec<u8> = int_part.bytes().collect();
    digits.extend((0..decimals).map(|i| frac.get(i).copied().unwrap_or(b'0')));

    if frac.get(decimals).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - decimals;
    let int_digits = digits[..split].iter().map(|&d| d as char).collect();
    let frac_digits = digits[split..].iter().map(|&d| d as char).collect();
    (int_digits, frac_digits)
}

/// Locale-style rounding: works on the shortest decimal that round-trips
/// to `magnitude`, so `1.005` reads as `1.005` and rounds up.
fn round_shortest(magnitude: f64, decimals: usize) -> (String, String) {
    round_digits(&magnitude.to_string(), decimals)
}

/// Fixed-point rounding on the exact binary value, so `1.005`
/// (really `1.00499…`) rounds down.
fn round_exact(magnitude: f64, decimals: usize) -> (String, String) {
    round_digits(&format!("{:.*}", EXACT_FRACTION_DIGITS, magnitude), decimals)
}

fn is_zero(int_part: &str, frac_part: &str) -> bool {
    int_part.bytes().chain(frac_part.bytes()).all(|d| d == b'0')
}

/// Format a USD amount with grouping and exactly two decimals (e.g. "$46,376.25").
pub fn format_usd(value: f64) -> String {
    let (int_part, frac_part) = round_shortest(value.abs(), 2);
    let sign = if value < 0.0 && !is_zero(&int_part, &frac_part) {
        "-"
    } else {
        ""
    };
    format!("{}${}.{}", sign, group_thousands(&int_part), frac_part)
}

/// Format a holding quantity with grouping and up to three decimals,
/// trailing zeros trimmed (e.g. "150.2", "12,345.679", "250").
pub fn format_amount(value: f64) -> String {
    let (int_part, frac_part) = round_shortest(value.abs(), 3);
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if value < 0.0 && !is_zero(&int_part, frac_part) {
        out.push('-');
    }
    out.push_str(&group_thousands(&int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Format a percentage change with an explicit sign for non-negative values
/// (e.g. "+2.35%", "-1.12%", "+0.00%").
pub fn format_signed_percent(value: f64) -> String {
    let (int_part, frac_part) = round_exact(value.abs(), 2);
    let sign = if value >= 0.0 { "+" } else { "-" };
    format!("{}{}.{}%", sign, int_part, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(46376.25), "$46,376.25");
        assert_eq!(format_usd(34782.19), "$34,782.19");
        assert_eq!(format_usd(70.0), "$70.00");
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_usd(-2410.06), "-$2,410.06");
    }

    #[test]
    fn test_format_usd_rounds_halves_up() {
        assert_eq!(format_usd(0.125), "$0.13");
        assert_eq!(format_usd(1.005), "$1.01");
        assert_eq!(format_usd(999.995), "$1,000.00");
        assert_eq!(format_usd(-0.125), "-$0.13");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.75), "0.75");
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(format_amount(150.2), "150.2");
        assert_eq!(format_amount(250.0), "250");
        assert_eq!(format_amount(12345.6789), "12,345.679");
        assert_eq!(format_amount(-1000.0), "-1,000");
        assert_eq!(format_amount(0.0), "0");
    }

    #[test]
    fn test_format_amount_rounds_halves_up() {
        assert_eq!(format_amount(12.0625), "12.063");
        assert_eq!(format_amount(0.0005), "0.001");
        assert_eq!(format_amount(9.9995), "10");
    }

    #[test]
    fn test_format_signed_percent() {
        assert_eq!(format_signed_percent(2.35), "+2.35%");
        assert_eq!(format_signed_percent(-1.12), "-1.12%");
        assert_eq!(format_signed_percent(5.01), "+5.01%");
        assert_eq!(format_signed_percent(-0.5), "-0.50%");
        assert_eq!(format_signed_percent(0.0), "+0.00%");
        assert_eq!(format_signed_percent(-0.0), "+0.00%");
    }

    #[test]
    fn test_format_signed_percent_rounds_exact_value() {
        assert_eq!(format_signed_percent(0.125), "+0.13%");
        assert_eq!(format_signed_percent(-0.125), "-0.13%");
        assert_eq!(format_signed_percent(12.0625), "+12.06%");
        // 1.005 is stored just below the half
        assert_eq!(format_signed_percent(1.005), "+1.00%");
        assert_eq!(format_signed_percent(-0.001), "-0.00%");
    }

    #[test]
    fn test_round_digits_carries() {
        assert_eq!(round_digits("9.995", 2), ("10".to_string(), "00".to_string()));
        assert_eq!(round_digits("0.5", 0), ("1".to_string(), String::new()));
        assert_eq!(round_digits("7", 2), ("7".to_string(), "00".to_string()));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("123456789"), "123,456,789");
    }
}
