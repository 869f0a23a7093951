use chrono::NaiveDate;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::model::Investment;

/// Projected accrued return by compound growth over elapsed wall-clock time:
/// `principal * ((1 + rate/100)^(days/365) - 1)`, floored at zero.
///
/// The fractional exponent forces a hop through f64; the result is display
/// data, not a booked amount, so that is acceptable.
pub fn accrued_return(
    principal: Decimal,
    annual_rate: Option<Decimal>,
    purchased: NaiveDate,
    at: NaiveDate,
) -> Decimal {
    let rate = match annual_rate {
        Some(r) if !r.is_zero() => r,
        _ => return Decimal::ZERO,
    };
    let elapsed_days = (at - purchased).num_days();
    if elapsed_days <= 0 {
        return Decimal::ZERO;
    }

    let principal_f = principal.to_f64().unwrap_or(0.0);
    let rate_f = rate.to_f64().unwrap_or(0.0);
    let growth = (1.0 + rate_f / 100.0).powf(elapsed_days as f64 / 365.0) - 1.0;
    let accrued = (principal_f * growth).max(0.0);

    Decimal::from_f64(accrued).unwrap_or(Decimal::ZERO)
}

/// Projection for one investment as of `at`. Recomputed on every refresh, so
/// the displayed value drifts forward as time passes.
pub fn projected_for(investment: &Investment, at: NaiveDate) -> Decimal {
    accrued_return(investment.amount, investment.annual_yield, investment.date, at)
}
