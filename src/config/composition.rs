// ABOUTME: Recipe composition configuration: slot amounts and generated-recipe prep model
// ABOUTME: Amounts vary by activity level, sweetness tolerance, and budget tier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::models::{ActivityLevel, BudgetTier, SweetnessTolerance};

/// Recipe composition configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompositionConfig {
    /// Fixed slot amounts
    pub amounts: SlotAmounts,
    /// Preparation time model for generated recipes
    pub prep_time: RecipePrepTime,
}

/// Per-slot amounts (grams or milliliters)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotAmounts {
    /// Primary base fruit (g)
    pub primary_fruit_g: f64,
    /// Secondary base fruit (g)
    pub secondary_fruit_g: f64,
    /// Liquid base (ml)
    pub liquid_ml: f64,
    /// Protein for sedentary profiles (g)
    pub protein_sedentary_g: f64,
    /// Protein for moderately active profiles (g)
    pub protein_moderate_g: f64,
    /// Protein for active profiles (g)
    pub protein_active_g: f64,
    /// Protein for athletes (g)
    pub protein_athlete_g: f64,
    /// Superfood amount when the ingredient has no specific serving (g)
    pub superfood_default_g: f64,
    /// Sweetener for low sweetness tolerance (g)
    pub sweetener_low_g: f64,
    /// Sweetener for medium sweetness tolerance (g)
    pub sweetener_medium_g: f64,
    /// Sweetener for high sweetness tolerance (g)
    pub sweetener_high_g: f64,
    /// Flavor enhancer (g)
    pub flavor_g: f64,
    /// Foam topping (ml)
    pub foam_ml: f64,
    /// Superfoods for basic budgets
    pub superfoods_basic: usize,
    /// Superfoods for premium budgets
    pub superfoods_premium: usize,
    /// Superfoods for luxury budgets
    pub superfoods_luxury: usize,
}

impl SlotAmounts {
    /// Protein amount for an activity level
    #[must_use]
    pub const fn protein_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.protein_sedentary_g,
            ActivityLevel::Moderate => self.protein_moderate_g,
            ActivityLevel::Active => self.protein_active_g,
            ActivityLevel::Athlete => self.protein_athlete_g,
        }
    }

    /// Sweetener amount for a sweetness tolerance
    #[must_use]
    pub const fn sweetener_for(&self, tolerance: SweetnessTolerance) -> f64 {
        match tolerance {
            SweetnessTolerance::Low => self.sweetener_low_g,
            SweetnessTolerance::Medium => self.sweetener_medium_g,
            SweetnessTolerance::High => self.sweetener_high_g,
        }
    }

    /// Number of superfood entries for a budget tier
    #[must_use]
    pub const fn superfoods_for(&self, budget: BudgetTier) -> usize {
        match budget {
            BudgetTier::Basic => self.superfoods_basic,
            BudgetTier::Premium => self.superfoods_premium,
            BudgetTier::Luxury => self.superfoods_luxury,
        }
    }
}

impl Default for SlotAmounts {
    fn default() -> Self {
        Self {
            primary_fruit_g: 120.0,
            secondary_fruit_g: 60.0,
            liquid_ml: 150.0,
            protein_sedentary_g: 15.0,
            protein_moderate_g: 20.0,
            protein_active_g: 25.0,
            protein_athlete_g: 30.0,
            superfood_default_g: 10.0,
            sweetener_low_g: 5.0,
            sweetener_medium_g: 10.0,
            sweetener_high_g: 15.0,
            flavor_g: 5.0,
            foam_ml: 30.0,
            superfoods_basic: 1,
            superfoods_premium: 2,
            superfoods_luxury: 2,
        }
    }
}

/// Preparation time model for a generated recipe (minutes)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipePrepTime {
    /// Fixed blending time
    pub base_minutes: f64,
    /// Added per formulation entry
    pub per_ingredient_minutes: f64,
    /// Added when the drink is layered
    pub layered_minutes: f64,
}

impl Default for RecipePrepTime {
    fn default() -> Self {
        Self {
            base_minutes: 2.0,
            per_ingredient_minutes: 0.5,
            layered_minutes: 2.0,
        }
    }
}
