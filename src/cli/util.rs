use chrono::NaiveDate;
use rust_decimal::Decimal;

pub fn fmt_money(d: &Decimal) -> String {
    d.round_dp(2).to_string()
}

pub fn parse_money(s: &str) -> Option<Decimal> {
    Decimal::from_str_exact(s.trim()).ok()
}

/// Form boundary rule: anything that does not parse counts as zero.
pub fn parse_money_or_zero(s: &str) -> Decimal {
    parse_money(s).unwrap_or(Decimal::ZERO)
}

pub fn parse_date_any(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s.trim(), "%Y/%m/%d"))
        .unwrap_or_else(|_| today())
}

pub fn parse_date_opt(s: &str) -> Option<NaiveDate> {
    if s.trim().is_empty() {
        return None;
    }
    Some(parse_date_any(s))
}

/// "y", "yes", "true", "1" in any case count as set.
pub fn parse_flag(s: &str) -> bool {
    matches!(
        s.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "true" | "1"
    )
}

pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

pub fn iso(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_parsing_defaults_to_zero() {
        assert_eq!(parse_money_or_zero("12.50"), Decimal::new(1250, 2));
        assert_eq!(parse_money_or_zero("abc"), Decimal::ZERO);
        assert_eq!(parse_money_or_zero(""), Decimal::ZERO);
    }

    #[test]
    fn dates_accept_both_separators() {
        let expected = NaiveDate::from_ymd_opt(2026, 8, 8).unwrap();
        assert_eq!(parse_date_any("2026-08-08"), expected);
        assert_eq!(parse_date_any("2026/08/08"), expected);
    }

    #[test]
    fn flags_parse_leniently() {
        assert!(parse_flag("Y"));
        assert!(parse_flag("true"));
        assert!(!parse_flag("no"));
        assert!(!parse_flag(""));
    }
}
