use rust_decimal::Decimal;

use super::Summary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Warning,
    Praise,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advice {
    pub tone: Tone,
    pub text: &'static str,
}

impl Advice {
    fn warning(text: &'static str) -> Self {
        Self {
            tone: Tone::Warning,
            text,
        }
    }
    fn praise(text: &'static str) -> Self {
        Self {
            tone: Tone::Praise,
            text,
        }
    }
    fn info(text: &'static str) -> Self {
        Self {
            tone: Tone::Info,
            text,
        }
    }
}

/// Rule list over the aggregate totals, evaluated in fixed priority order.
/// Negative balance and the savings praise are mutually exclusive; the debt
/// warning stacks with either. Falls back to a neutral message.
pub fn advise(summary: &Summary) -> Vec<Advice> {
    let mut out = Vec::new();

    let savings_floor = summary.total_income * Decimal::new(20, 2); // 20%
    let debt_ceiling = summary.total_income * Decimal::new(30, 2); // 30%

    if summary.balance < Decimal::ZERO {
        out.push(Advice::warning(
            "You are spending more than you earn. Consider cutting expenses.",
        ));
    } else if summary.total_income > Decimal::ZERO && summary.balance > savings_floor {
        out.push(Advice::praise(
            "Excellent! You are saving more than 20% of your income.",
        ));
    }

    if summary.total_income > Decimal::ZERO && summary.outstanding_debt > debt_ceiling {
        out.push(Advice::warning(
            "Debt installments take more than 30% of your income.",
        ));
    }

    if out.is_empty() {
        out.push(Advice::info(
            "Your finances are balanced. Keep tracking and investing.",
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(income: i64, expense: i64, debt: i64) -> Summary {
        let total_income = Decimal::new(income, 0);
        let total_expense = Decimal::new(expense, 0);
        let outstanding_debt = Decimal::new(debt, 0);
        Summary {
            total_income,
            total_expense,
            total_invested: Decimal::ZERO,
            outstanding_debt,
            balance: total_income - total_expense - outstanding_debt,
        }
    }

    #[test]
    fn healthy_savings_rate_earns_praise() {
        // income 1000, expense 400 -> balance 600, well past the 20% bar
        let advice = advise(&summary(1000, 400, 0));
        assert_eq!(advice.len(), 1);
        assert_eq!(advice[0].tone, Tone::Praise);
    }

    #[test]
    fn negative_balance_warns_and_suppresses_praise() {
        // income 500, expense 800 -> balance -300
        let advice = advise(&summary(500, 800, 0));
        assert_eq!(advice.len(), 1);
        assert_eq!(advice[0].tone, Tone::Warning);
        assert!(advice.iter().all(|a| a.tone != Tone::Praise));
    }

    #[test]
    fn heavy_debt_warns_even_alongside_praise() {
        // debt 400 of income 1000 breaks the 30% ceiling; balance 300 still
        // clears the savings bar (300 > 200)
        let advice = advise(&summary(1000, 300, 400));
        assert!(advice.iter().any(|a| a.tone == Tone::Warning));
        assert!(advice.iter().any(|a| a.tone == Tone::Praise));
    }

    #[test]
    fn quiet_rules_fall_back_to_neutral_message() {
        // balance 100 of income 1000: positive but under the 20% bar
        let advice = advise(&summary(1000, 900, 0));
        assert_eq!(advice.len(), 1);
        assert_eq!(advice[0].tone, Tone::Info);
    }

    #[test]
    fn empty_record_is_neutral() {
        let advice = advise(&summary(0, 0, 0));
        assert_eq!(advice.len(), 1);
        assert_eq!(advice[0].tone, Tone::Info);
    }
}
