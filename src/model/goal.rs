use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Identified;

/// Outcome of one progress step, so callers know when to congratulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalUpdate {
    Advanced,
    /// Progress crossed the target on this step. Reported exactly once;
    /// further steps at the cap report `Advanced`.
    Reached,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub target: Decimal,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub progress: Decimal,
}

impl Goal {
    /// Fixed per-action progress increment, in currency units.
    pub const PROGRESS_STEP: Decimal = Decimal::ONE_HUNDRED;

    pub fn new(
        description: String,
        target: Decimal,
        category: String,
        due_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            description,
            target,
            category,
            due_date,
            progress: Decimal::ZERO,
        }
    }

    pub fn is_reached(&self) -> bool {
        self.progress >= self.target
    }

    /// Adds one step, clamped to the target.
    pub fn add_progress(&mut self) -> GoalUpdate {
        let reached_before = self.is_reached();
        self.progress = (self.progress + Self::PROGRESS_STEP).min(self.target);
        if !reached_before && self.is_reached() {
            GoalUpdate::Reached
        } else {
            GoalUpdate::Advanced
        }
    }

    /// Completion ratio in percent, capped at 100 for display.
    pub fn percent(&self) -> Decimal {
        if self.target.is_zero() {
            return Decimal::ZERO;
        }
        (self.progress / self.target * Decimal::ONE_HUNDRED).min(Decimal::ONE_HUNDRED)
    }
}

impl Identified for Goal {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(target: i64) -> Goal {
        Goal::new("trip".into(), Decimal::new(target, 0), "leisure".into(), None)
    }

    #[test]
    fn progress_accumulates_in_fixed_steps() {
        let mut g = goal(1000);
        assert_eq!(g.add_progress(), GoalUpdate::Advanced);
        assert_eq!(g.add_progress(), GoalUpdate::Advanced);
        assert_eq!(g.progress, Decimal::new(200, 0));
    }

    #[test]
    fn progress_clamps_to_target_and_reports_reached_once() {
        let mut g = goal(250);
        assert_eq!(g.add_progress(), GoalUpdate::Advanced); // 100
        assert_eq!(g.add_progress(), GoalUpdate::Advanced); // 200
        assert_eq!(g.add_progress(), GoalUpdate::Reached); // 250, clamped from 300
        assert_eq!(g.progress, Decimal::new(250, 0));

        // already at the cap: no re-notification
        assert_eq!(g.add_progress(), GoalUpdate::Advanced);
        assert_eq!(g.progress, Decimal::new(250, 0));
    }

    #[test]
    fn exact_multiple_of_step_reaches_on_final_increment() {
        let mut g = goal(200);
        assert_eq!(g.add_progress(), GoalUpdate::Advanced);
        assert_eq!(g.add_progress(), GoalUpdate::Reached);
    }

    #[test]
    fn percent_is_capped_and_zero_target_is_zero() {
        let mut g = goal(200);
        g.add_progress();
        assert_eq!(g.percent(), Decimal::new(50, 0));
        assert_eq!(goal(0).percent(), Decimal::ZERO);
    }
}
