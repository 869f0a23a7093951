use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Identified;

/// A single income or expense line. Which side of the ledger it sits on is
/// determined by the list holding it, not by a sign on the amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub category: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub recurring: bool,
}

impl Entry {
    pub fn new(description: String, amount: Decimal, category: String, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            description,
            amount,
            category,
            date,
            recurring: false,
        }
    }
}

impl Identified for Entry {
    fn id(&self) -> &str {
        &self.id
    }
}
