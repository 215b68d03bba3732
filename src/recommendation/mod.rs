// ABOUTME: Profile recommendation module: shops, generated recipes, and subscription offers
// ABOUTME: Result types shared by the engine and its callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Profile Recommendations
//!
//! Ranks vendors by how well their allergen-safe menu items fit a profile, attaches
//! paid enhancements, rolls up health impact and cost, and pairs each profile goal with
//! a generated recipe and the vendors able to make it.

/// Allergen inference for menu text
pub mod allergen;
/// Recommendation engine
mod engine;
/// Menu-item fit scoring
pub mod scoring;
/// Subscription plan offers
pub mod subscription;

pub use allergen::{AllergenDetector, KeywordAllergenDetector};
pub use engine::ProfileRecommendationEngine;
pub use scoring::FitBreakdown;
pub use subscription::SubscriptionPlan;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::composer::GeneratedRecipe;
use crate::matching::MatchResult;
use crate::models::{Enhancement, HealthGoal, MenuItem, Vendor};

/// Menu item with its fit to the profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredMenuItem {
    /// The menu item
    pub item: MenuItem,
    /// Per-term and blended fit
    pub fit: FitBreakdown,
}

/// One recommended shop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopRecommendation {
    /// Vendor id
    pub vendor_id: String,
    /// Vendor display name
    pub vendor_name: String,
    /// Mean blended fit of the kept items, 0-100
    pub score: f64,
    /// Best-fitting allergen-safe items
    pub items: Vec<ScoredMenuItem>,
    /// Attached allergen-safe enhancements
    pub enhancements: Vec<Enhancement>,
    /// Health impact per profile goal
    pub health_impact: BTreeMap<HealthGoal, f64>,
    /// Items plus enhancements
    pub total_cost: f64,
}

impl ShopRecommendation {
    /// Zero-score, zero-content entry for a vendor with nothing safe to offer
    #[must_use]
    pub fn empty(vendor: &Vendor) -> Self {
        Self {
            vendor_id: vendor.id.clone(),
            vendor_name: vendor.name.clone(),
            score: 0.0,
            items: Vec::new(),
            enhancements: Vec::new(),
            health_impact: BTreeMap::new(),
            total_cost: 0.0,
        }
    }
}

/// A generated recipe for one goal and the vendors that can make it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecommendation {
    /// Goal the recipe targets
    pub goal: HealthGoal,
    /// Generated recipe
    pub recipe: GeneratedRecipe,
    /// Best vendor matches, possibly empty
    pub matches: Vec<MatchResult>,
}

/// Complete recommendation output for one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSet {
    /// Ranked shops
    pub shop_recommendations: Vec<ShopRecommendation>,
    /// One recipe per composable goal
    pub recipe_recommendations: Vec<RecipeRecommendation>,
    /// Subscription offers for the profile's budget
    pub subscription_plans: Vec<SubscriptionPlan>,
    /// Goals whose recipe could not be composed without violating exclusions
    pub skipped_goals: Vec<HealthGoal>,
}

impl RecommendationSet {
    /// Whether any shop qualified
    #[must_use]
    pub fn has_matches(&self) -> bool {
        !self.shop_recommendations.is_empty()
    }
}
