//! Generation configuration for the itinerary planner.

use crate::domain::Budget;

/// Configuration parameters for itinerary generation.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Budget that buys one day of travel.
    pub budget_per_day: u64,

    /// Shortest trip ever planned (days).
    pub min_days: u32,

    /// Longest trip ever planned (days).
    pub max_days: u32,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(budget_per_day: u64, min_days: u32, max_days: u32) -> Self {
        Self {
            budget_per_day,
            min_days,
            max_days,
        }
    }

    /// Trip length for a budget: `clamp(floor(budget / budget_per_day), min, max)`.
    ///
    /// The travel date plays no part; only the budget decides the length.
    pub fn trip_days(&self, budget: Budget) -> u32 {
        let affordable = budget.get() / self.budget_per_day.max(1);
        let affordable = u32::try_from(affordable).unwrap_or(u32::MAX);
        affordable.clamp(self.min_days, self.max_days)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            budget_per_day: 8000,
            min_days: 3,
            max_days: 14,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget(amount: u64) -> Budget {
        Budget::new(amount).unwrap()
    }

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();

        assert_eq!(config.budget_per_day, 8000);
        assert_eq!(config.min_days, 3);
        assert_eq!(config.max_days, 14);
    }

    #[test]
    fn trip_days_examples() {
        let config = PlannerConfig::default();

        assert_eq!(config.trip_days(budget(5_000)), 3);
        assert_eq!(config.trip_days(budget(40_000)), 5);
        assert_eq!(config.trip_days(budget(64_000)), 8);
        assert_eq!(config.trip_days(budget(71_999)), 8);
        assert_eq!(config.trip_days(budget(1_000_000)), 14);
    }

    #[test]
    fn trip_days_clamps_huge_budgets() {
        let config = PlannerConfig::default();
        assert_eq!(config.trip_days(budget(u64::MAX)), 14);
    }

    #[test]
    fn custom_config() {
        let config = PlannerConfig::new(1000, 1, 30);

        assert_eq!(config.trip_days(budget(500)), 1);
        assert_eq!(config.trip_days(budget(12_500)), 12);
        assert_eq!(config.trip_days(budget(100_000)), 30);
    }
}
