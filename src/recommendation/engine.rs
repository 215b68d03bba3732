// ABOUTME: Profile recommendation engine: shop ranking, enhancements, recipes, and subscriptions
// ABOUTME: Generic over the allergen detector so the keyword heuristic can be swapped out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info, warn};

use super::allergen::{AllergenDetector, KeywordAllergenDetector};
use super::scoring::ItemScorer;
use super::subscription::build_plans;
use super::{
    RecipeRecommendation, RecommendationSet, ScoredMenuItem, ShopRecommendation,
};
use crate::composer::RecipeComposer;
use crate::config::{EngineConfig, RecommendationConfig};
use crate::errors::{EngineError, EngineResult};
use crate::matching::VendorCompatibilityScorer;
use crate::models::{AllergenTag, Enhancement, HealthGoal, Mood, UserProfile, Vendor};
use crate::nutrition::round_currency;

/// Recommendation engine over injected composer, scorer and allergen detector
pub struct ProfileRecommendationEngine<'a, D = KeywordAllergenDetector>
where
    D: AllergenDetector,
{
    composer: RecipeComposer<'a>,
    scorer: VendorCompatibilityScorer<'a>,
    detector: D,
    config: RecommendationConfig,
}

impl<'a, D: AllergenDetector> ProfileRecommendationEngine<'a, D> {
    /// Create an engine using the global recommendation configuration
    #[must_use]
    pub fn new(
        composer: RecipeComposer<'a>,
        scorer: VendorCompatibilityScorer<'a>,
        detector: D,
    ) -> Self {
        Self::with_config(
            composer,
            scorer,
            detector,
            EngineConfig::global().recommendation.clone(),
        )
    }

    /// Create an engine with explicit configuration
    #[must_use]
    pub const fn with_config(
        composer: RecipeComposer<'a>,
        scorer: VendorCompatibilityScorer<'a>,
        detector: D,
        config: RecommendationConfig,
    ) -> Self {
        Self {
            composer,
            scorer,
            detector,
            config,
        }
    }

    /// Build the full recommendation set for a profile
    ///
    /// Shops without an allergen-safe menu item are dropped; the rest are ranked by
    /// blended score and capped. One recipe is generated per effective goal; goals whose
    /// recipe cannot be composed safely are reported in `skipped_goals`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` for malformed vendor records; other composition failures
    /// than a constraint violation are propagated as well
    pub fn recommend(
        &self,
        profile: &UserProfile,
        vendors: &[Vendor],
    ) -> EngineResult<RecommendationSet> {
        for vendor in vendors {
            vendor.validate()?;
        }
        let goals = profile.effective_goals();

        let mut shops: Vec<ShopRecommendation> = vendors
            .iter()
            .map(|vendor| self.recommend_shop(profile, &goals, vendor))
            .filter(|shop| !shop.items.is_empty())
            .collect();
        shops.sort_by(|a, b| b.score.total_cmp(&a.score));
        shops.truncate(self.config.limits.max_shops);

        let mut recipe_recommendations = Vec::with_capacity(goals.len());
        let mut skipped_goals = Vec::new();
        for goal in &goals {
            match self.recommend_recipe(profile, *goal, vendors) {
                Ok(recommendation) => recipe_recommendations.push(recommendation),
                Err(EngineError::ConstraintViolation { slot, reason }) => {
                    warn!(goal = %goal, slot = %slot, reason = %reason, "Skipping goal");
                    skipped_goals.push(*goal);
                }
                Err(other) => return Err(other),
            }
        }

        let per_drink_price = mean_item_price(&shops)
            .unwrap_or(self.scorer.config().estimates.base_drink_price);
        let subscription_plans = build_plans(
            &self.config.subscription_plans,
            profile.budget,
            per_drink_price,
            &goals,
        );

        info!(
            shops = shops.len(),
            recipes = recipe_recommendations.len(),
            skipped = skipped_goals.len(),
            plans = subscription_plans.len(),
            "Built recommendation set"
        );

        Ok(RecommendationSet {
            shop_recommendations: shops,
            recipe_recommendations,
            subscription_plans,
            skipped_goals,
        })
    }

    /// Score one shop; a shop with no allergen-safe item gets an empty, zero-score entry
    #[must_use]
    pub fn recommend_shop(
        &self,
        profile: &UserProfile,
        goals: &[HealthGoal],
        vendor: &Vendor,
    ) -> ShopRecommendation {
        let excluded = profile.excluded_allergens();
        let scorer = ItemScorer::new(&self.config);

        let mut items: Vec<ScoredMenuItem> = vendor
            .menu
            .iter()
            .filter(|item| self.detector.is_safe(item, &excluded))
            .map(|item| ScoredMenuItem {
                item: item.clone(),
                fit: scorer.score(item, profile, goals),
            })
            .collect();

        if items.is_empty() {
            debug!(vendor = %vendor.id, "No allergen-safe menu items");
            return ShopRecommendation::empty(vendor);
        }

        items.sort_by(|a, b| b.fit.blended.total_cmp(&a.fit.blended));
        items.truncate(self.config.limits.items_per_shop);

        let enhancements = self.select_enhancements(vendor, &excluded, goals, profile);

        let baseline = self.config.limits.baseline_item_impact * items.len() as f64;
        let health_impact: BTreeMap<HealthGoal, f64> = goals
            .iter()
            .map(|goal| {
                let extra: f64 = enhancements.iter().map(|e| e.impact_on(*goal)).sum();
                (*goal, baseline + extra)
            })
            .collect();

        let total_cost = round_currency(
            items.iter().map(|i| i.item.price).sum::<f64>()
                + enhancements.iter().map(|e| e.cost).sum::<f64>(),
        );
        let mean_fit = items.iter().map(|i| i.fit.blended).sum::<f64>() / items.len() as f64;
        let score = (mean_fit * 1000.0).round() / 10.0;

        debug!(vendor = %vendor.id, score, items = items.len(), "Scored shop");

        ShopRecommendation {
            vendor_id: vendor.id.clone(),
            vendor_name: vendor.name.clone(),
            score,
            items,
            enhancements,
            health_impact,
            total_cost,
        }
    }

    /// Allergen-safe enhancements with the most impact on the profile goals
    fn select_enhancements(
        &self,
        vendor: &Vendor,
        excluded: &BTreeSet<AllergenTag>,
        goals: &[HealthGoal],
        profile: &UserProfile,
    ) -> Vec<Enhancement> {
        let limit = self.config.limits.enhancements_for(profile.budget);
        if limit == 0 {
            return Vec::new();
        }
        let impact = |e: &Enhancement| goals.iter().map(|g| e.impact_on(*g)).sum::<f64>();

        let mut eligible: Vec<&Enhancement> = vendor
            .enhancements
            .iter()
            .filter(|e| e.allergens.is_disjoint(excluded))
            .collect();
        eligible.sort_by(|a, b| {
            impact(b)
                .total_cmp(&impact(a))
                .then_with(|| a.cost.total_cmp(&b.cost))
        });
        eligible.into_iter().take(limit).cloned().collect()
    }

    fn recommend_recipe(
        &self,
        profile: &UserProfile,
        goal: HealthGoal,
        vendors: &[Vendor],
    ) -> EngineResult<RecipeRecommendation> {
        let recipe = self
            .composer
            .generate_recipe(profile, Mood::default(), goal)?;
        let avoid = self.composer.ruled_out_ids(profile);
        let mut matches = self
            .scorer
            .find_matches_avoiding(&recipe.formulation, vendors, None, &avoid)?
            .into_matches();
        matches.truncate(self.config.limits.matches_per_recipe);
        Ok(RecipeRecommendation {
            goal,
            recipe,
            matches,
        })
    }
}

fn mean_item_price(shops: &[ShopRecommendation]) -> Option<f64> {
    let prices: Vec<f64> = shops
        .iter()
        .flat_map(|shop| shop.items.iter().map(|i| i.item.price))
        .collect();
    if prices.is_empty() {
        None
    } else {
        Some(prices.iter().sum::<f64>() / prices.len() as f64)
    }
}
