//! Corporation Agent
//!
//! Corporations automate while the labor market is tight and augment their
//! workforce once employment slips below the threshold.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{CorporationRules, InitialRules};

/// Strategy a corporation took in its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Invested in automation; the shared automation level must rise
    Automate,
    /// Wanted to automate but could not afford it
    Hold,
    /// Invested in its people instead
    Augment,
}

/// Corporation state
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Corporation {
    pub automation_investment: f64,
    pub competitiveness: f64,
    pub profit: f64,
}

impl Corporation {
    pub fn spawn(initial: &InitialRules) -> Self {
        Self {
            automation_investment: initial.automation_investment,
            competitiveness: initial.competitiveness,
            profit: initial.profit,
        }
    }

    /// Run one turn given the live employed-worker count.
    ///
    /// The returned strategy tells the caller whether to raise the shared
    /// automation level; this method never touches shared state itself.
    pub fn step(&mut self, employed_workers: usize, num_workers: usize, rules: &CorporationRules) -> Strategy {
        let threshold = num_workers as f64 * rules.automation_employment_share;

        let strategy = if employed_workers as f64 > threshold {
            if self.profit > rules.automation_profit_floor {
                self.automation_investment += rules.automation_investment_step;
                self.profit -= rules.automation_cost;
                Strategy::Automate
            } else {
                Strategy::Hold
            }
        } else {
            self.automation_investment -= rules.augmentation_divestment;
            self.competitiveness += rules.augmentation_competitiveness_gain;
            Strategy::Augment
        };

        self.profit += self.competitiveness * rules.competitiveness_return
            - self.automation_investment * rules.investment_upkeep;

        strategy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_tight_market_automates() {
        let mut corp = Corporation::spawn(&InitialRules::default());
        let strategy = corp.step(80, 100, &CorporationRules::default());

        assert_eq!(strategy, Strategy::Automate);
        assert!(close(corp.automation_investment, 0.6));
        // 1.0 - 0.2 + 0.07 - 0.03
        assert!(close(corp.profit, 0.84));
    }

    #[test]
    fn test_poor_corporation_holds() {
        let mut corp = Corporation::spawn(&InitialRules::default());
        corp.profit = 0.8;
        let strategy = corp.step(80, 100, &CorporationRules::default());

        assert_eq!(strategy, Strategy::Hold);
        assert!(close(corp.automation_investment, 0.5));
        assert!(close(corp.profit, 0.8 + 0.07 - 0.025));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut corp = Corporation::spawn(&InitialRules::default());
        let strategy = corp.step(70, 100, &CorporationRules::default());
        assert_eq!(strategy, Strategy::Augment);
    }

    #[test]
    fn test_slack_market_augments() {
        let mut corp = Corporation::spawn(&InitialRules::default());
        let strategy = corp.step(50, 100, &CorporationRules::default());

        assert_eq!(strategy, Strategy::Augment);
        assert!(close(corp.automation_investment, 0.45));
        assert!(close(corp.competitiveness, 0.72));
        assert!(close(corp.profit, 1.0 + 0.072 - 0.0225));
    }
}
