use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Category, Debt, Entry, Goal, Investment};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub theme: String,
    pub currency: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            theme: "light".into(),
            currency: "BRL".into(),
        }
    }
}

/// One point of the net-worth series. Whether the series grows is a
/// configuration choice, see `dashboard::history`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: NaiveDate,
    pub net_worth: Decimal,
}

/// The full per-user aggregate. This is the unit of persistence: both stores
/// read and write it whole, as one JSON document.
///
/// Every list defaults to empty so a record written by an older build (or a
/// partially damaged one) still deserializes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: String,
    #[serde(default)]
    pub incomes: Vec<Entry>,
    #[serde(default)]
    pub expenses: Vec<Entry>,
    #[serde(default)]
    pub investments: Vec<Investment>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub debts: Vec<Debt>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub settings: UserSettings,
    #[serde(default)]
    pub history: Vec<HistoryPoint>,
}

impl UserRecord {
    /// Fresh record for a user with no stored data anywhere.
    pub fn for_user(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            incomes: Vec::new(),
            expenses: Vec::new(),
            investments: Vec::new(),
            goals: Vec::new(),
            debts: Vec::new(),
            categories: Category::default_set(),
            settings: UserSettings::default(),
            history: Vec::new(),
        }
    }

    pub fn category_names(&self, kind: super::CategoryKind) -> Vec<String> {
        self.categories
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.name.clone())
            .collect()
    }
}
