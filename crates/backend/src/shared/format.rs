/// Formats an integer with comma thousands separators
///
/// # Examples
/// ```
/// use backend::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1,234,567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: usize) -> String {
    group_thousands(&n.to_string())
}

/// Formats an amount as `$1,234.56`
///
/// # Examples
/// ```
/// use backend::shared::format::format_money;
/// assert_eq!(format_money(1234.5), "$1,234.50");
/// assert_eq!(format_money(0.0), "$0.00");
/// ```
pub fn format_money(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(int_part), frac_part)
}

/// Mean ticket for display; an empty selection has no mean
pub fn format_optional_money(amount: Option<f64>) -> String {
    amount.map(format_money).unwrap_or_else(|| "N/A".to_string())
}

fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
