/// Format a float as a rupee amount with Indian digit grouping:
/// ₹12,34,567.89 (last three digits, then pairs).
pub fn money(val: f64) -> String {
    let negative = val < 0.0;
    let abs = val.abs();
    let cents = format!("{:.2}", abs);
    let parts: Vec<&str> = cents.split('.').collect();
    let int_part = parts[0];
    let dec_part = parts[1];

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i == 3 || (i > 3 && (i - 3) % 2 == 0) {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if negative {
        format!("-₹{grouped}.{dec_part}")
    } else {
        format!("₹{grouped}.{dec_part}")
    }
}

/// Scale a value against the series maximum into a text bar, for the
/// chart columns in the report tables. Non-zero values always get at
/// least one block.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let mut len = ((value / max) * width as f64).round() as usize;
    len = len.clamp(1, width);
    "█".repeat(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_indian_grouping() {
        assert_eq!(money(1234.56), "₹1,234.56");
        assert_eq!(money(123456.78), "₹1,23,456.78");
        assert_eq!(money(12345678.90), "₹1,23,45,678.90");
        assert_eq!(money(0.0), "₹0.00");
        assert_eq!(money(42.10), "₹42.10");
        assert_eq!(money(-500.00), "-₹500.00");
    }

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(10.0, 10.0, 20), "█".repeat(20));
        assert_eq!(bar(5.0, 10.0, 20), "█".repeat(10));
        assert_eq!(bar(0.0, 10.0, 20), "");
        assert_eq!(bar(10.0, 0.0, 20), "");
        // Tiny values still render one block.
        assert_eq!(bar(0.01, 1000.0, 20), "█");
    }
}
