// Small helpers for parsing raw CSV fields and formatting numbers.
//
// Parsing helpers return `Option` so the loader can treat any failure as a
// skipped row without building error values it will never show.
use chrono::Month;
use num_format::{Locale, ToFormattedString};

/// Parse an integer field, tolerating surrounding whitespace.
pub fn parse_i64_safe(s: Option<&str>) -> Option<i64> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<i64>().ok()
}

pub fn parse_i32_safe(s: Option<&str>) -> Option<i32> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<i32>().ok()
}

/// Split a `YYYY-M` / `YYYY-MM` token on its first hyphen.
///
/// Everything after the first hyphen must be a single integer, so
/// `2019-04-01` is rejected. The month is not range checked.
pub fn parse_year_month(s: Option<&str>) -> Option<(i32, i32)> {
    let (year, month) = s?.split_once('-')?;
    Some((parse_i32_safe(Some(year))?, parse_i32_safe(Some(month))?))
}

/// Trim a text field, returning `None` when nothing is left.
pub fn non_blank(s: Option<&str>) -> Option<String> {
    let s = s?.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Round to two decimal places, halves away from zero.
pub fn round2(n: f64) -> f64 {
    (n * 100.0).round() / 100.0
}

pub fn format_rating(n: f64) -> String {
    format!("{:.2}", n)
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    n.to_formatted_string(&Locale::en)
}

/// English month name for 1..=12, the bare number otherwise.
pub fn month_label(month: i32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name().to_string())
        .unwrap_or_else(|| month.to_string())
}

pub fn year_month_label(year: i32, month: i32) -> String {
    format!("{:04}-{:02}", year, month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_month_accepts_one_or_two_digit_months() {
        assert_eq!(parse_year_month(Some("2019-4")), Some((2019, 4)));
        assert_eq!(parse_year_month(Some("2019-04")), Some((2019, 4)));
        assert_eq!(parse_year_month(Some(" 2019 - 12 ")), Some((2019, 12)));
    }

    #[test]
    fn year_month_rejects_malformed_tokens() {
        assert_eq!(parse_year_month(Some("missing")), None);
        assert_eq!(parse_year_month(Some("2019")), None);
        assert_eq!(parse_year_month(Some("2019-04-01")), None);
        assert_eq!(parse_year_month(Some("-4")), None);
        assert_eq!(parse_year_month(None), None);
    }

    #[test]
    fn year_month_keeps_out_of_range_months() {
        assert_eq!(parse_year_month(Some("2019-13")), Some((2019, 13)));
    }

    #[test]
    fn integers_tolerate_whitespace() {
        assert_eq!(parse_i64_safe(Some(" 670772142 ")), Some(670772142));
        assert_eq!(parse_i32_safe(Some("4")), Some(4));
        assert_eq!(parse_i32_safe(Some("4.5")), None);
        assert_eq!(parse_i32_safe(Some("   ")), None);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round2(4.0), 4.0);
        assert_eq!(round2(10.0 / 3.0), 3.33);
        assert_eq!(round2(3.125), 3.13);
        assert_eq!(round2(-3.125), -3.13);
    }

    #[test]
    fn month_labels() {
        assert_eq!(month_label(1), "January");
        assert_eq!(month_label(12), "December");
        assert_eq!(month_label(13), "13");
        assert_eq!(month_label(-1), "-1");
        assert_eq!(year_month_label(2019, 4), "2019-04");
    }

    #[test]
    fn counts_get_thousands_separators() {
        assert_eq!(format_int(42_656usize), "42,656");
        assert_eq!(format_rating(4.0), "4.00");
    }
}
