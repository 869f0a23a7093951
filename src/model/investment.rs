use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Identified;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub kind: String, // CDB / stocks / funds / ... free-form
    /// Annual yield in percent. Absent means no projection is computed.
    #[serde(default)]
    pub annual_yield: Option<Decimal>,
    pub date: NaiveDate,
}

impl Investment {
    pub fn new(
        description: String,
        amount: Decimal,
        kind: String,
        annual_yield: Option<Decimal>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            description,
            amount,
            kind,
            annual_yield,
            date,
        }
    }
}

impl Identified for Investment {
    fn id(&self) -> &str {
        &self.id
    }
}
