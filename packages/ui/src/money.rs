//! Amount coercion and display helpers for the dashboard.

use api::ExpenseInfo;

/// Coerce the raw amount field into a number. Blank or unparseable input
/// becomes 0, mirroring how a numeric form field coerces its value.
pub fn parse_amount(input: &str) -> f64 {
    input.trim().parse().unwrap_or(0.0)
}

/// Sum of all amounts in the fetched list. Recomputed on every render; the
/// total is never persisted or computed server-side.
pub fn total_amount(expenses: &[ExpenseInfo]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Format an amount for the total card: thousands separators, at most two
/// fraction digits, none when the value is whole.
pub fn format_inr(amount: f64) -> String {
    let fixed = format!("{amount:.2}");
    let fixed = fixed.trim_end_matches('0').trim_end_matches('.');
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed),
    };
    let (whole, frac) = match digits.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: &str, amount: f64) -> ExpenseInfo {
        ExpenseInfo {
            id: id.to_string(),
            title: format!("expense {id}"),
            amount,
            category: "Misc".to_string(),
            user_id: "user-1".to_string(),
        }
    }

    #[test]
    fn test_parse_amount_coercion() {
        assert_eq!(parse_amount("50"), 50.0);
        assert_eq!(parse_amount(" 12.5 "), 12.5);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
    }

    #[test]
    fn test_total_is_a_plain_fold() {
        assert_eq!(total_amount(&[]), 0.0);

        let mut list = vec![expense("a", 120.0), expense("b", 30.5)];
        assert_eq!(total_amount(&list), 150.5);

        // Adding an expense of amount A raises the total by exactly A.
        list.push(expense("c", 49.5));
        assert_eq!(total_amount(&list), 200.0);

        // Removing it lowers the total by its amount.
        list.retain(|e| e.id != "c");
        assert_eq!(total_amount(&list), 150.5);
    }

    #[test]
    fn test_format_inr_whole_amounts() {
        assert_eq!(format_inr(0.0), "0");
        assert_eq!(format_inr(50.0), "50");
        assert_eq!(format_inr(1000.0), "1,000");
        assert_eq!(format_inr(1234567.0), "1,234,567");
    }

    #[test]
    fn test_format_inr_fractions() {
        assert_eq!(format_inr(1234.5), "1,234.5");
        assert_eq!(format_inr(99.99), "99.99");
    }

    #[test]
    fn test_format_inr_negative() {
        assert_eq!(format_inr(-1234.5), "-1,234.5");
    }
}
