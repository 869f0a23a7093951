use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Identified;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DebtStatus {
    Pending,
    Paid,
}

impl Default for DebtStatus {
    fn default() -> Self {
        DebtStatus::Pending
    }
}

impl DebtStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub id: String,
    #[serde(default)]
    pub description: String,
    /// Full contracted amount, for reference only; totals use `installment`.
    #[serde(default)]
    pub total: Decimal,
    #[serde(default)]
    pub installment: Decimal,
    #[serde(default)]
    pub installments: u32,
    #[serde(default)]
    pub interest_rate: Option<Decimal>,
    #[serde(default)]
    pub status: DebtStatus,
}

impl Debt {
    pub fn new(
        description: String,
        total: Decimal,
        installment: Decimal,
        installments: u32,
        interest_rate: Option<Decimal>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            description,
            total,
            installment,
            installments,
            interest_rate,
            status: DebtStatus::Pending,
        }
    }

    pub fn toggle_paid(&mut self) {
        self.status = match self.status {
            DebtStatus::Pending => DebtStatus::Paid,
            DebtStatus::Paid => DebtStatus::Pending,
        };
    }
}

impl Identified for Debt {
    fn id(&self) -> &str {
        &self.id
    }
}
