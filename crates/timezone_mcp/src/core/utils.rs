/// Name advertised to MCP clients during initialization
pub const SERVER_NAME: &str = "Authless TimeZone Service";
/// Version advertised to MCP clients during initialization
pub const SERVER_VERSION: &str = "1.0.1";

/// Error string attached to unresolved lookups
pub const LOCATION_NOT_RECOGNIZED: &str = "Location not recognized.";

/// Format used for UTC offsets in the locations resource
pub const OFFSET_FORMAT: &str = "%:z";

/// Available resource URIs for the Timezone MCP Server
pub const AVAILABLE_RESOURCES: &[&str] = &[
    "timezone://status",
    "timezone://help",
    "timezone://locations",
];

/// Normalize free-text input into a lookup key
///
/// Surrounding whitespace is trimmed and the text is folded to lowercase.
pub fn normalize_location(location: &str) -> String {
    location.trim().to_lowercase()
}

/// Render a number the way ECMAScript `Number#toString` does
///
/// Uses the shortest round-trip digits. Positional notation applies for
/// decimal exponents `-6..=20`, exponent notation (`1e+21`, `1e-7`) otherwise.
/// Infinities are spelled out and `-0` renders as `0`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    // `{:e}` yields the shortest round-trip mantissa, e.g. "1.2345e-7"
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();

    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let (first, rest) = digits.split_at(1);
        let exp_sign = if n - 1 < 0 { '-' } else { '+' };
        if rest.is_empty() {
            format!("{}e{}{}", first, exp_sign, (n - 1).abs())
        } else {
            format!("{}.{}e{}{}", first, rest, exp_sign, (n - 1).abs())
        }
    };

    format!("{}{}", sign, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_location() {
        assert_eq!(normalize_location("  New York  "), "new york");
        assert_eq!(normalize_location("LONDON"), "london");
        assert_eq!(normalize_location("\tTokyo\n"), "tokyo");
        assert_eq!(normalize_location(""), "");
        assert_eq!(normalize_location("   "), "");
    }

    #[test]
    fn test_normalize_keeps_inner_whitespace() {
        assert_eq!(normalize_location("Los  Angeles"), "los  angeles");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_exponent_notation() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e21), "1.5e+21");
        assert_eq!(format_number(-2e30), "-2e+30");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.25e-10), "1.25e-10");
        assert_eq!(format_number(5e-324), "5e-324");
        assert_eq!(format_number(f64::MAX), "1.7976931348623157e+308");
    }

    #[test]
    fn test_format_positional_bounds() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(123456789012345680000.0), "123456789012345680000");
        assert_eq!(format_number(1e-6), "0.000001");
        assert_eq!(format_number(-0.00012), "-0.00012");
        assert_eq!(format_number(123.456), "123.456");
    }

    #[test]
    fn test_format_infinity() {
        assert_eq!(format_number(f64::MAX + f64::MAX), "Infinity");
        assert_eq!(format_number(-f64::MAX - f64::MAX), "-Infinity");
    }
}
