//! Number formatting for table cells

/// Insert a thousands separator (comma) into a run of digits
fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Formats an integer with thousands separators
///
/// # Examples
///
/// ```
/// use frontend::shared::components::table::format_number_int;
/// assert_eq!(format_number_int(1234567), "1,234,567");
/// ```
pub fn format_number_int(value: i64) -> String {
    let grouped = group_thousands(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Formats an amount in cents as dollars
///
/// # Examples
///
/// ```
/// use frontend::shared::components::table::format_money;
/// assert_eq!(format_money(124567), "$1,245.67");
/// ```
pub fn format_money(cents: i64) -> String {
    let abs = cents.unsigned_abs();
    let dollars = group_thousands(&(abs / 100).to_string());
    let sign = if cents < 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, dollars, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(124567), "$1,245.67");
        assert_eq!(format_money(375690), "$3,756.90");
        assert_eq!(format_money(1895), "$18.95");
        assert_eq!(format_money(0), "$0.00");
        assert_eq!(format_money(5), "$0.05");
        assert_eq!(format_money(-1250), "-$12.50");
        assert_eq!(format_money(123456789), "$1,234,567.89");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567), "1,234,567");
        assert_eq!(format_number_int(0), "0");
        assert_eq!(format_number_int(999), "999");
        assert_eq!(format_number_int(-1234), "-1,234");
    }
}
