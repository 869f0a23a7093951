//! Everything the overview screen shows: aggregate totals, yield
//! projection, advisory messages and the net-worth series.

pub mod advisor;
pub mod history;
pub mod projection;

pub use advisor::{advise, Advice, Tone};
pub use history::HistoryMode;

use rust_decimal::Decimal;

use crate::model::{DebtStatus, UserRecord};

/// Aggregate totals over one record. Recomputed whole on every mutation;
/// nothing here is cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub total_invested: Decimal,
    pub outstanding_debt: Decimal,
    pub balance: Decimal,
}

impl Summary {
    pub fn compute(record: &UserRecord) -> Self {
        let total_income: Decimal = record.incomes.iter().map(|e| e.amount).sum();
        let total_expense: Decimal = record.expenses.iter().map(|e| e.amount).sum();
        let total_invested: Decimal = record.investments.iter().map(|i| i.amount).sum();
        // paid debts drop out entirely, the rest count one installment each
        let outstanding_debt: Decimal = record
            .debts
            .iter()
            .filter(|d| d.status != DebtStatus::Paid)
            .map(|d| d.installment)
            .sum();
        let balance = total_income - total_expense - outstanding_debt;

        Self {
            total_income,
            total_expense,
            total_invested,
            outstanding_debt,
            balance,
        }
    }

    pub fn net_worth(&self) -> Decimal {
        self.total_income - self.total_expense + self.total_invested - self.outstanding_debt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Debt, Entry};
    use chrono::NaiveDate;

    fn entry(amount: i64) -> Entry {
        Entry::new(
            String::new(),
            Decimal::new(amount, 0),
            String::new(),
            NaiveDate::from_ymd_opt(2026, 8, 8).unwrap(),
        )
    }

    fn debt(installment: i64) -> Debt {
        Debt::new(
            String::new(),
            Decimal::new(installment * 10, 0),
            Decimal::new(installment, 0),
            10,
            None,
        )
    }

    #[test]
    fn totals_are_plain_sums() {
        let mut record = UserRecord::for_user("u");
        record.incomes.extend([entry(1000), entry(250)]);
        record.expenses.push(entry(400));

        let s = Summary::compute(&record);
        assert_eq!(s.total_income, Decimal::new(1250, 0));
        assert_eq!(s.total_expense, Decimal::new(400, 0));
        assert_eq!(s.balance, Decimal::new(850, 0));
    }

    #[test]
    fn empty_lists_produce_zero_totals() {
        let s = Summary::compute(&UserRecord::for_user("u"));
        assert_eq!(s.total_income, Decimal::ZERO);
        assert_eq!(s.total_expense, Decimal::ZERO);
        assert_eq!(s.total_invested, Decimal::ZERO);
        assert_eq!(s.outstanding_debt, Decimal::ZERO);
        assert_eq!(s.balance, Decimal::ZERO);
    }

    #[test]
    fn paid_debts_are_excluded_from_outstanding_total() {
        let mut record = UserRecord::for_user("u");
        record.incomes.push(entry(1000));
        record.debts.push(debt(200));
        let mut paid = debt(500);
        paid.toggle_paid();
        record.debts.push(paid);

        let s = Summary::compute(&record);
        assert_eq!(s.outstanding_debt, Decimal::new(200, 0));
        assert_eq!(s.balance, Decimal::new(800, 0));
    }

    #[test]
    fn net_worth_adds_investments_back() {
        let mut record = UserRecord::for_user("u");
        record.incomes.push(entry(1000));
        record.expenses.push(entry(400));
        record.investments.push(crate::model::Investment::new(
            String::new(),
            Decimal::new(300, 0),
            String::new(),
            None,
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        ));

        assert_eq!(Summary::compute(&record).net_worth(), Decimal::new(900, 0));
    }
}
