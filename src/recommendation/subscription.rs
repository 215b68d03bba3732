// ABOUTME: Subscription plan offers derived from configured templates and the profile budget
// ABOUTME: Monthly price is the per-drink price times drinks per month, less the plan discount
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::config::SubscriptionTemplate;
use crate::models::{BudgetTier, HealthGoal};
use crate::nutrition::round_currency;

/// A priced subscription offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    /// Lowest budget tier the plan targets
    pub tier: BudgetTier,
    /// Plan name
    pub name: String,
    /// Drinks included per month
    pub drinks_per_month: u32,
    /// Discount applied to the per-drink price
    pub discount: f64,
    /// Monthly price after discount
    pub monthly_price: f64,
    /// Goals the plan's drinks focus on
    pub focus_goals: Vec<HealthGoal>,
}

/// Offer every template available at `budget`, priced from `per_drink_price`
#[must_use]
pub fn build_plans(
    templates: &[SubscriptionTemplate],
    budget: BudgetTier,
    per_drink_price: f64,
    focus_goals: &[HealthGoal],
) -> Vec<SubscriptionPlan> {
    templates
        .iter()
        .filter(|template| template.min_tier <= budget)
        .map(|template| SubscriptionPlan {
            tier: template.min_tier,
            name: template.name.clone(),
            drinks_per_month: template.drinks_per_month,
            discount: template.discount,
            monthly_price: round_currency(
                per_drink_price * f64::from(template.drinks_per_month) * (1.0 - template.discount),
            ),
            focus_goals: focus_goals.to_vec(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plans_filtered_by_budget() {
        let templates = SubscriptionTemplate::defaults();
        let basic = build_plans(&templates, BudgetTier::Basic, 8.0, &[HealthGoal::Longevity]);
        assert_eq!(basic.len(), 1);
        assert_eq!(basic[0].name, "Weekly Ritual");
        // 8.00 x 4 x 0.95
        assert!((basic[0].monthly_price - 30.4).abs() < 1e-9);

        let luxury = build_plans(&templates, BudgetTier::Luxury, 8.0, &[]);
        assert_eq!(luxury.len(), 3);
        // 8.00 x 30 x 0.75
        assert!((luxury[2].monthly_price - 180.0).abs() < 1e-9);
    }
}
