use chrono::NaiveDate;

use super::Summary;
use crate::model::{HistoryPoint, UserRecord};

/// What happens to the net-worth series on persist. Earlier generations of
/// this application disagreed about it, so it is an explicit setting rather
/// than an inherited accident: `tracked` keeps one point per calendar day,
/// `frozen` never touches the stored series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    Tracked,
    Frozen,
}

impl Default for HistoryMode {
    fn default() -> Self {
        HistoryMode::Tracked
    }
}

impl HistoryMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tracked" => Some(Self::Tracked),
            "frozen" => Some(Self::Frozen),
            _ => None,
        }
    }

    /// Reads `FINANCAS_HISTORY_MODE`; unknown values fall back to the
    /// default with a warning.
    pub fn from_env() -> Self {
        match std::env::var("FINANCAS_HISTORY_MODE") {
            Ok(raw) => Self::parse(&raw).unwrap_or_else(|| {
                log::warn!("unknown FINANCAS_HISTORY_MODE {raw:?}, using tracked");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }
}

/// Folds today's net worth into the series. Same-day saves overwrite the
/// day's point instead of appending, so autosave does not grow the series.
pub fn update(record: &mut UserRecord, mode: HistoryMode, today: NaiveDate) {
    if mode == HistoryMode::Frozen {
        return;
    }
    let net_worth = Summary::compute(record).net_worth();
    match record.history.last_mut() {
        Some(last) if last.date == today => last.net_worth = net_worth,
        _ => record.history.push(HistoryPoint {
            date: today,
            net_worth,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entry;
    use rust_decimal::Decimal;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
    }

    fn income(amount: i64) -> Entry {
        Entry::new(String::new(), Decimal::new(amount, 0), String::new(), date(1))
    }

    #[test]
    fn tracked_mode_appends_one_point_per_day() {
        let mut record = UserRecord::for_user("u");
        record.incomes.push(income(100));

        update(&mut record, HistoryMode::Tracked, date(1));
        record.incomes.push(income(50));
        update(&mut record, HistoryMode::Tracked, date(1)); // same day: overwrite
        update(&mut record, HistoryMode::Tracked, date(2));

        assert_eq!(record.history.len(), 2);
        assert_eq!(record.history[0].net_worth, Decimal::new(150, 0));
        assert_eq!(record.history[1].date, date(2));
    }

    #[test]
    fn frozen_mode_never_touches_the_series() {
        let mut record = UserRecord::for_user("u");
        record.incomes.push(income(100));

        update(&mut record, HistoryMode::Frozen, date(1));
        assert!(record.history.is_empty());
    }

    #[test]
    fn mode_parses_leniently() {
        assert_eq!(HistoryMode::parse(" Tracked "), Some(HistoryMode::Tracked));
        assert_eq!(HistoryMode::parse("FROZEN"), Some(HistoryMode::Frozen));
        assert_eq!(HistoryMode::parse("demo"), None);
    }
}
