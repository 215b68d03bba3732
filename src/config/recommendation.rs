// ABOUTME: Profile recommendation engine configuration
// ABOUTME: Configures blended-score weights, budget bands, enhancement limits, and subscription plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation Engine Configuration
//!
//! Weights for the four menu-item fit terms, the price bands each budget tier accepts,
//! and the subscription plan templates offered per tier.

use serde::{Deserialize, Serialize};

use crate::models::BudgetTier;

/// Recommendation Engine Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Blended score weights
    pub weights: RecommendationWeights,
    /// Sub-score values for partial and neutral fits
    pub fit_scores: FitScores,
    /// Output limits
    pub limits: RecommendationLimits,
    /// Price band per budget tier
    pub budget_bands: BudgetBands,
    /// Subscription plan templates
    pub subscription_plans: Vec<SubscriptionTemplate>,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            weights: RecommendationWeights::default(),
            fit_scores: FitScores::default(),
            limits: RecommendationLimits::default(),
            budget_bands: BudgetBands::default(),
            subscription_plans: SubscriptionTemplate::defaults(),
        }
    }
}

/// Weights for the menu-item fit terms (sum to 1.0)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationWeights {
    /// Goal keyword alignment
    pub goal: f64,
    /// Price inside the budget band
    pub budget: f64,
    /// Time-of-day keyword alignment
    pub time_of_day: f64,
    /// Flavor profile alignment
    pub flavor: f64,
}

impl RecommendationWeights {
    /// Sum of all weights
    #[must_use]
    pub fn total(&self) -> f64 {
        self.goal + self.budget + self.time_of_day + self.flavor
    }
}

impl Default for RecommendationWeights {
    fn default() -> Self {
        Self {
            goal: 0.40,
            budget: 0.30,
            time_of_day: 0.20,
            flavor: 0.10,
        }
    }
}

/// Sub-score values used when a fit is partial or cannot be judged
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitScores {
    /// Used when a term has nothing to compare (no goals, no flavor keywords)
    pub neutral: f64,
    /// Item priced below the band
    pub below_budget: f64,
    /// Maximum budget fit for an item priced above the band
    pub above_budget_ceiling: f64,
    /// Time-of-day fit when no keyword matches
    pub time_mismatch: f64,
}

impl Default for FitScores {
    fn default() -> Self {
        Self {
            neutral: 0.5,
            below_budget: 0.7,
            above_budget_ceiling: 0.3,
            time_mismatch: 0.3,
        }
    }
}

/// Output limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationLimits {
    /// Shops returned
    pub max_shops: usize,
    /// Menu items kept per shop
    pub items_per_shop: usize,
    /// Flat health impact each recommended item adds to every profile goal
    pub baseline_item_impact: f64,
    /// Enhancements attached for basic budgets
    pub enhancements_basic: usize,
    /// Enhancements attached for premium budgets
    pub enhancements_premium: usize,
    /// Enhancements attached for luxury budgets
    pub enhancements_luxury: usize,
    /// Vendor matches attached to each recipe recommendation
    pub matches_per_recipe: usize,
}

impl RecommendationLimits {
    /// Enhancement limit for a budget tier
    #[must_use]
    pub const fn enhancements_for(&self, budget: BudgetTier) -> usize {
        match budget {
            BudgetTier::Basic => self.enhancements_basic,
            BudgetTier::Premium => self.enhancements_premium,
            BudgetTier::Luxury => self.enhancements_luxury,
        }
    }
}

impl Default for RecommendationLimits {
    fn default() -> Self {
        Self {
            max_shops: 5,
            items_per_shop: 3,
            baseline_item_impact: 10.0,
            enhancements_basic: 0,
            enhancements_premium: 2,
            enhancements_luxury: 3,
            matches_per_recipe: 3,
        }
    }
}

/// Inclusive price band
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PriceBand {
    /// Lowest price in band
    pub min: f64,
    /// Highest price in band
    pub max: f64,
}

impl PriceBand {
    /// Whether `price` falls inside the band
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        (self.min..=self.max).contains(&price)
    }
}

/// Price bands per budget tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetBands {
    /// Basic tier band
    pub basic: PriceBand,
    /// Premium tier band
    pub premium: PriceBand,
    /// Luxury tier band
    pub luxury: PriceBand,
}

impl BudgetBands {
    /// Band for a tier
    #[must_use]
    pub const fn band_for(&self, budget: BudgetTier) -> PriceBand {
        match budget {
            BudgetTier::Basic => self.basic,
            BudgetTier::Premium => self.premium,
            BudgetTier::Luxury => self.luxury,
        }
    }
}

impl Default for BudgetBands {
    fn default() -> Self {
        Self {
            basic: PriceBand { min: 0.0, max: 7.0 },
            premium: PriceBand {
                min: 7.0,
                max: 11.0,
            },
            luxury: PriceBand {
                min: 11.0,
                max: 18.0,
            },
        }
    }
}

/// Subscription plan template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionTemplate {
    /// Plan name
    pub name: String,
    /// Lowest budget tier the plan is offered to
    pub min_tier: BudgetTier,
    /// Drinks included per month
    pub drinks_per_month: u32,
    /// Discount on the per-drink price (0-1)
    pub discount: f64,
}

impl SubscriptionTemplate {
    fn new(name: &str, min_tier: BudgetTier, drinks_per_month: u32, discount: f64) -> Self {
        Self {
            name: name.to_owned(),
            min_tier,
            drinks_per_month,
            discount,
        }
    }

    /// Default plan catalog
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("Weekly Ritual", BudgetTier::Basic, 4, 0.05),
            Self::new("Daily Blend", BudgetTier::Premium, 20, 0.15),
            Self::new("Unlimited Wellness", BudgetTier::Luxury, 30, 0.25),
        ]
    }
}
