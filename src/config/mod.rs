// ABOUTME: Engine configuration for composition, vendor matching, and profile recommendations
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `composition` - Slot amounts and generated-recipe prep time
//! - `matching` - Vendor compatibility weights, thresholds, estimates
//! - `recommendation` - Blended-score weights, budget bands, subscription plans
//!
//! Every engine takes an explicit `EngineConfig`; [`EngineConfig::global`] is a
//! convenience for embedding applications that configure through the environment.

pub mod composition;
pub mod error;
pub mod matching;
pub mod recommendation;

pub use composition::{CompositionConfig, RecipePrepTime, SlotAmounts};
pub use error::ConfigError;
pub use matching::{MatchEstimates, MatchThresholds, MatchWeights, MatchingConfig};
pub use recommendation::{
    BudgetBands, FitScores, PriceBand, RecommendationConfig, RecommendationLimits,
    RecommendationWeights, SubscriptionTemplate,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Main engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Configuration for recipe composition
    pub composition: CompositionConfig,
    /// Configuration for vendor compatibility scoring
    pub matching: MatchingConfig,
    /// Configuration for profile recommendations
    pub recommendation: RecommendationConfig,
}

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_composition()?;
        self.validate_matching()?;
        self.validate_recommendation()
    }

    fn validate_composition(&self) -> Result<(), ConfigError> {
        let amounts = &self.composition.amounts;
        let all_positive = [
            amounts.primary_fruit_g,
            amounts.secondary_fruit_g,
            amounts.liquid_ml,
            amounts.protein_sedentary_g,
            amounts.protein_moderate_g,
            amounts.protein_active_g,
            amounts.protein_athlete_g,
            amounts.superfood_default_g,
            amounts.sweetener_low_g,
            amounts.sweetener_medium_g,
            amounts.sweetener_high_g,
            amounts.flavor_g,
            amounts.foam_ml,
        ]
        .iter()
        .all(|v| v.is_finite() && *v > 0.0);
        if !all_positive {
            return Err(ConfigError::ValueOutOfRange(
                "Slot amounts must be positive and finite",
            ));
        }
        if amounts.primary_fruit_g <= amounts.secondary_fruit_g {
            return Err(ConfigError::InvalidRange(
                "primary_fruit_g must be > secondary_fruit_g",
            ));
        }
        let superfoods = [
            amounts.superfoods_basic,
            amounts.superfoods_premium,
            amounts.superfoods_luxury,
        ];
        if superfoods.iter().any(|n| !(1..=2).contains(n)) {
            return Err(ConfigError::ValueOutOfRange(
                "Superfood count must be 1 or 2",
            ));
        }
        let prep = &self.composition.prep_time;
        if prep.base_minutes < 0.0 || prep.per_ingredient_minutes < 0.0 || prep.layered_minutes < 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Prep time components must be non-negative",
            ));
        }
        Ok(())
    }

    fn validate_matching(&self) -> Result<(), ConfigError> {
        let weights = &self.matching.weights;
        if weights.exact <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("Exact weight must be positive"));
        }
        if weights.substitution < 0.0 || weights.substitution >= weights.exact {
            return Err(ConfigError::InvalidRange(
                "substitution weight must be in [0, exact)",
            ));
        }
        if weights.combination_bonus < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Combination bonus must be non-negative",
            ));
        }
        let thresholds = &self.matching.thresholds;
        if thresholds.min_score >= 100 || thresholds.partial_match_ceiling >= 100 {
            return Err(ConfigError::ValueOutOfRange(
                "min_score and partial_match_ceiling must be < 100",
            ));
        }
        if thresholds.min_score >= thresholds.partial_match_ceiling {
            return Err(ConfigError::InvalidRange(
                "min_score must be < partial_match_ceiling",
            ));
        }
        let estimates = &self.matching.estimates;
        if estimates.base_drink_price <= 0.0
            || estimates.missing_ingredient_minutes < 0.0
            || estimates.layered_minutes < 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Price base must be positive and prep penalties non-negative",
            ));
        }
        Ok(())
    }

    fn validate_recommendation(&self) -> Result<(), ConfigError> {
        let rec = &self.recommendation;
        let weights = &rec.weights;
        if [weights.goal, weights.budget, weights.time_of_day, weights.flavor]
            .iter()
            .any(|w| *w < 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Recommendation weights must be non-negative",
            ));
        }
        if (weights.total() - 1.0).abs() > 0.01 {
            return Err(ConfigError::InvalidWeights(
                "Recommendation weights must sum to 1.0",
            ));
        }

        let fit = &rec.fit_scores;
        if [
            fit.neutral,
            fit.below_budget,
            fit.above_budget_ceiling,
            fit.time_mismatch,
        ]
        .iter()
        .any(|v| !(0.0..=1.0).contains(v))
        {
            return Err(ConfigError::ValueOutOfRange("Fit scores must be in [0, 1]"));
        }

        if rec.limits.max_shops == 0 || rec.limits.items_per_shop == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_shops and items_per_shop must be at least 1",
            ));
        }

        let bands = &rec.budget_bands;
        for band in [bands.basic, bands.premium, bands.luxury] {
            if band.min < 0.0 || band.min > band.max {
                return Err(ConfigError::InvalidRange(
                    "Budget band min must be non-negative and <= max",
                ));
            }
        }
        if bands.basic.max > bands.premium.max || bands.premium.max > bands.luxury.max {
            return Err(ConfigError::InvalidRange(
                "Budget bands must be in ascending order",
            ));
        }

        if rec
            .subscription_plans
            .iter()
            .any(|p| p.drinks_per_month == 0 || !(0.0..1.0).contains(&p.discount))
        {
            return Err(ConfigError::ValueOutOfRange(
                "Subscription plans need at least one drink and a discount in [0, 1)",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Composition overrides
        Self::apply_env_var(
            "BLENDWISE_PRIMARY_FRUIT_G",
            &mut self.composition.amounts.primary_fruit_g,
        )?;
        Self::apply_env_var(
            "BLENDWISE_SECONDARY_FRUIT_G",
            &mut self.composition.amounts.secondary_fruit_g,
        )?;
        Self::apply_env_var("BLENDWISE_LIQUID_ML", &mut self.composition.amounts.liquid_ml)?;

        // Matching overrides
        Self::apply_env_var(
            "BLENDWISE_SUBSTITUTION_WEIGHT",
            &mut self.matching.weights.substitution,
        )?;
        Self::apply_env_var(
            "BLENDWISE_COMBINATION_BONUS",
            &mut self.matching.weights.combination_bonus,
        )?;
        Self::apply_env_var(
            "BLENDWISE_MIN_MATCH_SCORE",
            &mut self.matching.thresholds.min_score,
        )?;
        Self::apply_env_var(
            "BLENDWISE_BASE_DRINK_PRICE",
            &mut self.matching.estimates.base_drink_price,
        )?;

        // Recommendation overrides
        Self::apply_env_var(
            "BLENDWISE_WEIGHT_GOAL",
            &mut self.recommendation.weights.goal,
        )?;
        Self::apply_env_var(
            "BLENDWISE_WEIGHT_BUDGET",
            &mut self.recommendation.weights.budget,
        )?;
        Self::apply_env_var(
            "BLENDWISE_WEIGHT_TIME_OF_DAY",
            &mut self.recommendation.weights.time_of_day,
        )?;
        Self::apply_env_var(
            "BLENDWISE_WEIGHT_FLAVOR",
            &mut self.recommendation.weights.flavor,
        )?;
        Self::apply_env_var(
            "BLENDWISE_MAX_SHOPS",
            &mut self.recommendation.limits.max_shops,
        )?;

        Ok(self)
    }
}
