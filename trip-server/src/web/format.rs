//! Display formatting for currency and dates.

use chrono::NaiveDate;

/// Currency symbol shown before amounts.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Format a whole-unit amount with Indian digit grouping.
///
/// The last three digits form one group and the rest are grouped in pairs.
///
/// # Examples
///
/// ```
/// use trip_server::web::format_currency;
///
/// assert_eq!(format_currency(4375), "₹4,375");
/// assert_eq!(format_currency(123456), "₹1,23,456");
/// ```
pub fn format_currency(amount: u64) -> String {
    format!("{CURRENCY_SYMBOL}{}", group_digits(amount))
}

fn group_digits(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Format a travel date in long form, e.g. "Monday, 3 March 2025".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%A, %-d %B %Y").to_string()
}
