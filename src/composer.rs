// ABOUTME: Recipe composition: fills purpose slots from the catalog under profile exclusions
// ABOUTME: Goal preference lists are tried in order, then catalog order; liquid is mandatory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Composer
//!
//! For each purpose slot the composer filters the catalog to ingredients of the slot's
//! category that are not excluded by the profile (allergies, intolerances, diet, dislikes),
//! tries the goal's preferred ids in order, and falls back to catalog order. An excluded
//! ingredient is never reintroduced: a mandatory slot without a safe candidate is a
//! `ConstraintViolation`, and optional slots are simply left out.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::catalog::{GoalPreferenceTable, IngredientCatalog};
use crate::config::{CompositionConfig, EngineConfig};
use crate::errors::{EngineError, EngineResult};
use crate::models::{
    AllergenTag, Formulation, FormulationEntry, HealthGoal, Ingredient, Mood, PurposeSlot,
    TexturePreference, UserProfile,
};
use crate::nutrition::{self, NutritionTotals};

/// A composed drink with its derived nutrition, cost and prep time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedRecipe {
    /// Unique id (not part of the recipe content)
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Mood the recipe was generated for
    pub mood: Mood,
    /// Goal the formulation targets
    pub goal: HealthGoal,
    /// Ingredients and amounts
    pub formulation: Formulation,
    /// Aggregated nutrition
    pub nutrition: NutritionTotals,
    /// Ingredient cost, rounded to cents
    pub cost: f64,
    /// Estimated preparation time in minutes
    pub prep_time_minutes: f64,
    /// Generation timestamp (not part of the recipe content)
    pub created_at: DateTime<Utc>,
}

impl GeneratedRecipe {
    /// Whether two recipes have identical content, ignoring id and timestamp
    #[must_use]
    pub fn same_content(&self, other: &Self) -> bool {
        self.name == other.name
            && self.description == other.description
            && self.mood == other.mood
            && self.goal == other.goal
            && self.formulation == other.formulation
            && self.nutrition == other.nutrition
            && (self.cost - other.cost).abs() < f64::EPSILON
            && (self.prep_time_minutes - other.prep_time_minutes).abs() < f64::EPSILON
    }
}

/// Per-request exclusion filter derived from a profile
struct Exclusions<'p> {
    profile: &'p UserProfile,
    allergens: BTreeSet<AllergenTag>,
}

impl<'p> Exclusions<'p> {
    fn for_profile(profile: &'p UserProfile) -> Self {
        Self {
            profile,
            allergens: profile.excluded_allergens(),
        }
    }

    fn permits(&self, ingredient: &Ingredient) -> bool {
        !ingredient.has_allergen_in(&self.allergens)
            && self.profile.diet.permits(ingredient)
            && !self.profile.dislikes_ingredient(ingredient)
    }
}

/// Composes formulations from an injected catalog and preference table
pub struct RecipeComposer<'a> {
    catalog: &'a IngredientCatalog,
    preferences: &'a GoalPreferenceTable,
    config: CompositionConfig,
}

impl<'a> RecipeComposer<'a> {
    /// Create a composer using the global configuration
    #[must_use]
    pub fn new(catalog: &'a IngredientCatalog, preferences: &'a GoalPreferenceTable) -> Self {
        Self::with_config(
            catalog,
            preferences,
            EngineConfig::global().composition.clone(),
        )
    }

    /// Create a composer with explicit configuration
    #[must_use]
    pub const fn with_config(
        catalog: &'a IngredientCatalog,
        preferences: &'a GoalPreferenceTable,
        config: CompositionConfig,
    ) -> Self {
        Self {
            catalog,
            preferences,
            config,
        }
    }

    /// Compose a formulation for a profile and goal
    ///
    /// # Errors
    ///
    /// Returns `ConstraintViolation` if the liquid slot has no compatible candidate
    pub fn compose(&self, profile: &UserProfile, goal: HealthGoal) -> EngineResult<Formulation> {
        let exclusions = Exclusions::for_profile(profile);
        let layered = profile.texture_preference == TexturePreference::Layered;
        let amounts = &self.config.amounts;

        let mut used: BTreeSet<&str> = BTreeSet::new();
        let mut entries = Vec::new();

        for slot in PurposeSlot::ORDER {
            if slot == PurposeSlot::Foam && !layered {
                continue;
            }
            let wanted = match slot {
                PurposeSlot::Superfood => amounts.superfoods_for(profile.budget),
                _ => 1,
            };

            let picks = self.select(slot, goal, wanted, &exclusions, &used);
            if picks.is_empty() {
                if slot.is_mandatory() {
                    return Err(EngineError::constraint(
                        slot,
                        format!(
                            "no {} is compatible with the profile's exclusions",
                            slot.category()
                        ),
                    ));
                }
                debug!(slot = %slot, goal = %goal, "No compatible candidate, slot left empty");
                continue;
            }

            for ingredient in picks {
                let amount = self.amount_for(slot, ingredient, profile);
                debug!(slot = %slot, ingredient = %ingredient.id, amount, "Slot filled");
                used.insert(ingredient.id.as_str());
                entries.push(FormulationEntry::new(ingredient.clone(), amount, slot)?);
            }
        }

        Formulation::new(entries, layered)
    }

    /// Compose a formulation and derive nutrition, cost, prep time and naming
    ///
    /// # Errors
    ///
    /// Returns `ConstraintViolation` if the liquid slot has no compatible candidate
    pub fn generate_recipe(
        &self,
        profile: &UserProfile,
        mood: Mood,
        goal: HealthGoal,
    ) -> EngineResult<GeneratedRecipe> {
        let formulation = self.compose(profile, goal)?;
        let nutrition = nutrition::aggregate(&formulation)?;
        let cost = nutrition::round_currency(nutrition::price(&formulation)?);
        let prep_time_minutes = self.prep_time(&formulation);

        let style = if formulation.is_layered() {
            "Layered Latte"
        } else {
            "Smoothie"
        };
        let name = format!("{} {} {style}", mood.title_word(), goal.label());
        let ingredient_lines: Vec<String> = formulation
            .entries()
            .iter()
            .map(|e| format!("{} {:.0}{}", e.ingredient.name, e.amount, e.unit.abbreviation()))
            .collect();
        let description = format!(
            "{} blend of {}.",
            goal.label(),
            ingredient_lines.join(", ")
        );

        info!(
            goal = %goal,
            ingredients = formulation.len(),
            cost,
            "Generated recipe"
        );

        Ok(GeneratedRecipe {
            id: Uuid::new_v4(),
            name,
            description,
            mood,
            goal,
            formulation,
            nutrition,
            cost,
            prep_time_minutes,
            created_at: Utc::now(),
        })
    }

    /// Generate a recipe for the goal that best answers `mood`
    ///
    /// # Errors
    ///
    /// Returns `ConstraintViolation` if the liquid slot has no compatible candidate
    pub fn generate_for_mood(
        &self,
        profile: &UserProfile,
        mood: Mood,
    ) -> EngineResult<GeneratedRecipe> {
        self.generate_recipe(profile, mood, mood.suggested_goal())
    }

    /// Preparation time for a formulation
    #[must_use]
    pub fn prep_time(&self, formulation: &Formulation) -> f64 {
        let prep = &self.config.prep_time;
        let layered = if formulation.is_layered() {
            prep.layered_minutes
        } else {
            0.0
        };
        (formulation.len() as f64).mul_add(prep.per_ingredient_minutes, prep.base_minutes) + layered
    }

    /// Catalog ids the profile rules out through allergies, intolerances, diet or dislikes
    #[must_use]
    pub fn ruled_out_ids(&self, profile: &UserProfile) -> BTreeSet<String> {
        let exclusions = Exclusions::for_profile(profile);
        self.catalog
            .iter()
            .filter(|ingredient| !exclusions.permits(ingredient))
            .map(|ingredient| ingredient.id.clone())
            .collect()
    }

    /// Pick up to `wanted` distinct candidates: preferred ids first, then catalog order
    fn select(
        &self,
        slot: PurposeSlot,
        goal: HealthGoal,
        wanted: usize,
        exclusions: &Exclusions<'_>,
        used: &BTreeSet<&str>,
    ) -> Vec<&'a Ingredient> {
        let category = slot.category();
        let usable = |ingredient: &Ingredient| {
            ingredient.category == category
                && !used.contains(ingredient.id.as_str())
                && exclusions.permits(ingredient)
        };

        let mut picks: Vec<&'a Ingredient> = Vec::with_capacity(wanted);
        for id in self.preferences.preferred(goal, slot) {
            if picks.len() == wanted {
                return picks;
            }
            match self.catalog.get(id) {
                Some(ingredient) if usable(ingredient) => {
                    if !picks.iter().any(|p| p.id == ingredient.id) {
                        picks.push(ingredient);
                    }
                }
                Some(_) => debug!(slot = %slot, ingredient = %id, "Preferred ingredient excluded"),
                None => debug!(slot = %slot, ingredient = %id, "Preferred ingredient not in catalog"),
            }
        }

        if picks.len() < wanted {
            let before = picks.len();
            for ingredient in self.catalog.by_category(category) {
                if picks.len() == wanted {
                    break;
                }
                if usable(ingredient) && !picks.iter().any(|p| p.id == ingredient.id) {
                    picks.push(ingredient);
                }
            }
            if before == 0 && !picks.is_empty() {
                warn!(
                    slot = %slot,
                    goal = %goal,
                    fallback = %picks[0].id,
                    "No preferred ingredient survived exclusions, using catalog fallback"
                );
            }
        }
        picks
    }

    fn amount_for(&self, slot: PurposeSlot, ingredient: &Ingredient, profile: &UserProfile) -> f64 {
        let amounts = &self.config.amounts;
        match slot {
            PurposeSlot::BaseFruitPrimary => amounts.primary_fruit_g,
            PurposeSlot::BaseFruitSecondary => amounts.secondary_fruit_g,
            PurposeSlot::Liquid => amounts.liquid_ml,
            PurposeSlot::Protein => amounts.protein_for(profile.activity_level),
            PurposeSlot::Superfood => ingredient
                .serving_amount
                .unwrap_or(amounts.superfood_default_g),
            PurposeSlot::Sweetener => amounts.sweetener_for(profile.sweetness_tolerance),
            PurposeSlot::FlavorEnhancer => amounts.flavor_g,
            PurposeSlot::Foam => amounts.foam_ml,
        }
    }
}
