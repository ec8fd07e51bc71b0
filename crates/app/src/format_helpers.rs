//! Display formatting shared by the hospital views.

use chrono::NaiveDate;

/// Format an amount in cents as US dollars, e.g. `1234567` → `"$12,345.67"`.
/// Negative amounts get a leading minus sign.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let dollars = (abs / 100).to_string();
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}.{:02}", abs % 100)
}

/// "Apr 2, 2024".
pub fn format_date_human(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Up to two uppercase initials, for avatar chips in lists.
pub fn initials_of(name: &str) -> String {
    name.split_whitespace()
        .filter(|w| !w.ends_with('.'))
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cents_are_grouped_and_padded() {
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(5), "$0.05");
        assert_eq!(format_cents(25000), "$250.00");
        assert_eq!(format_cents(1250000), "$12,500.00");
        assert_eq!(format_cents(123456789), "$1,234,567.89");
        assert_eq!(format_cents(-92575), "-$925.75");
    }

    #[test]
    fn dates_are_short_and_unpadded() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
        assert_eq!(format_date_human(date), "Apr 2, 2024");
    }

    #[test]
    fn initials_skip_titles() {
        assert_eq!(initials_of("Dr. Sarah Johnson"), "SJ");
        assert_eq!(initials_of("john smith"), "JS");
        assert_eq!(initials_of(""), "");
    }
}
