// ABOUTME: Goal-driven preference tables mapping (health goal, purpose slot) to ordered ingredient ids
// ABOUTME: Bundled as data and loadable from JSON so selection order can change without code changes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::IngredientCatalog;
use crate::errors::{EngineError, EngineResult};
use crate::models::{HealthGoal, PurposeSlot};

static STANDARD_PREFERENCES: LazyLock<GoalPreferenceTable> =
    LazyLock::new(GoalPreferenceTable::bundled);

/// Ordered ingredient preferences per goal and slot
///
/// Serialized as `{ "energy-boost": { "liquid": ["oat-milk", ...], ... }, ... }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalPreferenceTable {
    goals: BTreeMap<HealthGoal, BTreeMap<PurposeSlot, Vec<String>>>,
}

impl GoalPreferenceTable {
    /// Empty table; every slot falls back to catalog order
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bundled table
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD_PREFERENCES
    }

    /// Parse a table from JSON
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the document does not match the table shape
    pub fn from_json(json: &str) -> EngineResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the table to JSON
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if encoding fails
    pub fn to_json(&self) -> EngineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Set the preference list for a goal and slot
    #[must_use]
    pub fn with_preferences(mut self, goal: HealthGoal, slot: PurposeSlot, ids: &[&str]) -> Self {
        self.goals
            .entry(goal)
            .or_default()
            .insert(slot, ids.iter().map(|id| (*id).to_owned()).collect());
        self
    }

    /// Preferred ids for a goal and slot, most preferred first
    #[must_use]
    pub fn preferred(&self, goal: HealthGoal, slot: PurposeSlot) -> &[String] {
        self.goals
            .get(&goal)
            .and_then(|slots| slots.get(&slot))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Check every referenced id against a catalog
    ///
    /// # Errors
    ///
    /// Returns `UnknownIngredient` for ids missing from the catalog, or `InvalidData`
    /// when an id is listed under a slot of a different category
    pub fn validate(&self, catalog: &IngredientCatalog) -> EngineResult<()> {
        for (goal, slots) in &self.goals {
            for (slot, ids) in slots {
                for id in ids {
                    let ingredient = catalog.require(id)?;
                    if ingredient.category != slot.category() {
                        return Err(EngineError::invalid_input(format!(
                            "'{id}' is {} but listed under {goal}/{slot}",
                            ingredient.category
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    fn bundled() -> Self {
        use HealthGoal::{
            BrainHealth, CalmStomach, EnergyBoost, GutHealth, ImmuneSupport, Longevity,
            MealReplacement,
        };
        use PurposeSlot::{
            BaseFruitPrimary, BaseFruitSecondary, FlavorEnhancer, Foam, Liquid, Protein,
            Superfood, Sweetener,
        };

        Self::new()
            // Energy boost
            .with_preferences(EnergyBoost, BaseFruitPrimary, &["banana", "mango", "pineapple"])
            .with_preferences(EnergyBoost, BaseFruitSecondary, &["mango", "pineapple", "strawberry"])
            .with_preferences(EnergyBoost, Liquid, &["oat-milk", "coconut-water", "almond-milk"])
            .with_preferences(EnergyBoost, Protein, &["whey-protein", "pea-protein"])
            .with_preferences(EnergyBoost, Superfood, &["brazil-nut", "maca-powder", "matcha"])
            .with_preferences(EnergyBoost, Sweetener, &["honey", "dates", "maple-syrup"])
            .with_preferences(EnergyBoost, FlavorEnhancer, &["cinnamon", "cacao-powder"])
            .with_preferences(EnergyBoost, Foam, &["oat-foam", "milk-foam"])
            // Calm stomach
            .with_preferences(CalmStomach, BaseFruitPrimary, &["papaya", "banana"])
            .with_preferences(CalmStomach, BaseFruitSecondary, &["banana", "mango"])
            .with_preferences(CalmStomach, Liquid, &["coconut-water", "oat-milk", "almond-milk"])
            .with_preferences(CalmStomach, Protein, &["greek-yogurt", "coconut-yogurt"])
            .with_preferences(CalmStomach, Superfood, &["turmeric", "chia-seeds"])
            .with_preferences(CalmStomach, Sweetener, &["honey", "maple-syrup"])
            .with_preferences(CalmStomach, FlavorEnhancer, &["ginger", "mint", "cardamom"])
            .with_preferences(CalmStomach, Foam, &["oat-foam"])
            // Meal replacement
            .with_preferences(MealReplacement, BaseFruitPrimary, &["banana", "avocado"])
            .with_preferences(MealReplacement, BaseFruitSecondary, &["blueberry", "mango", "strawberry"])
            .with_preferences(MealReplacement, Liquid, &["whole-milk", "oat-milk", "soy-milk"])
            .with_preferences(MealReplacement, Protein, &["whey-protein", "pea-protein", "peanut-butter"])
            .with_preferences(MealReplacement, Superfood, &["chia-seeds", "flax-seeds"])
            .with_preferences(MealReplacement, Sweetener, &["dates", "honey"])
            .with_preferences(MealReplacement, FlavorEnhancer, &["cacao-powder", "cinnamon", "vanilla"])
            .with_preferences(MealReplacement, Foam, &["milk-foam", "oat-foam"])
            // Longevity
            .with_preferences(Longevity, BaseFruitPrimary, &["blueberry", "acai", "strawberry"])
            .with_preferences(Longevity, BaseFruitSecondary, &["strawberry", "raspberry", "blueberry"])
            .with_preferences(Longevity, Liquid, &["almond-milk", "green-tea", "oat-milk"])
            .with_preferences(Longevity, Protein, &["collagen-peptides", "pea-protein", "hemp-protein"])
            .with_preferences(Longevity, Superfood, &["kale", "turmeric", "matcha", "spirulina"])
            .with_preferences(Longevity, Sweetener, &["monk-fruit", "maple-syrup"])
            .with_preferences(Longevity, FlavorEnhancer, &["cinnamon", "cacao-powder"])
            .with_preferences(Longevity, Foam, &["coconut-foam", "oat-foam"])
            // Gut health
            .with_preferences(GutHealth, BaseFruitPrimary, &["papaya", "banana"])
            .with_preferences(GutHealth, BaseFruitSecondary, &["raspberry", "blueberry"])
            .with_preferences(GutHealth, Liquid, &["oat-milk", "soy-milk", "coconut-milk"])
            .with_preferences(GutHealth, Protein, &["greek-yogurt", "coconut-yogurt"])
            .with_preferences(GutHealth, Superfood, &["inulin", "flax-seeds", "chia-seeds"])
            .with_preferences(GutHealth, Sweetener, &["honey", "maple-syrup"])
            .with_preferences(GutHealth, FlavorEnhancer, &["ginger", "cinnamon"])
            .with_preferences(GutHealth, Foam, &["oat-foam"])
            // Brain health
            .with_preferences(BrainHealth, BaseFruitPrimary, &["blueberry", "avocado"])
            .with_preferences(BrainHealth, BaseFruitSecondary, &["strawberry", "raspberry"])
            .with_preferences(BrainHealth, Liquid, &["almond-milk", "oat-milk"])
            .with_preferences(BrainHealth, Protein, &["hemp-protein", "whey-protein"])
            .with_preferences(BrainHealth, Superfood, &["lions-mane", "matcha", "flax-seeds"])
            .with_preferences(BrainHealth, Sweetener, &["maple-syrup", "honey"])
            .with_preferences(BrainHealth, FlavorEnhancer, &["cacao-powder", "vanilla"])
            .with_preferences(BrainHealth, Foam, &["coconut-foam"])
            // Immune support
            .with_preferences(ImmuneSupport, BaseFruitPrimary, &["pineapple", "mango", "strawberry"])
            .with_preferences(ImmuneSupport, BaseFruitSecondary, &["strawberry", "raspberry"])
            .with_preferences(ImmuneSupport, Liquid, &["coconut-water", "oat-milk"])
            .with_preferences(ImmuneSupport, Protein, &["greek-yogurt", "pea-protein"])
            .with_preferences(ImmuneSupport, Superfood, &["moringa", "spirulina", "turmeric"])
            .with_preferences(ImmuneSupport, Sweetener, &["honey", "agave"])
            .with_preferences(ImmuneSupport, FlavorEnhancer, &["ginger", "mint"])
            .with_preferences(ImmuneSupport, Foam, &["oat-foam"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_references_catalog() {
        GoalPreferenceTable::standard()
            .validate(IngredientCatalog::standard())
            .unwrap();
    }

    #[test]
    fn test_every_goal_has_a_liquid_preference() {
        let table = GoalPreferenceTable::standard();
        for goal in HealthGoal::ALL {
            assert!(!table.preferred(goal, PurposeSlot::Liquid).is_empty());
        }
    }

    #[test]
    fn test_json_round_trip_keeps_order() {
        let json = r#"{ "energy-boost": { "superfood": ["maca-powder", "chia-seeds"] } }"#;
        let table = GoalPreferenceTable::from_json(json).unwrap();
        assert_eq!(
            table.preferred(HealthGoal::EnergyBoost, PurposeSlot::Superfood),
            ["maca-powder", "chia-seeds"]
        );
        assert!(table
            .preferred(HealthGoal::EnergyBoost, PurposeSlot::Liquid)
            .is_empty());

        let reparsed = GoalPreferenceTable::from_json(&table.to_json().unwrap()).unwrap();
        assert_eq!(reparsed, table);
    }

    #[test]
    fn test_validate_rejects_unknown_and_miscategorized_ids() {
        let catalog = IngredientCatalog::standard();
        let unknown = GoalPreferenceTable::new().with_preferences(
            HealthGoal::Longevity,
            PurposeSlot::Liquid,
            &["dragon-milk"],
        );
        assert!(matches!(
            unknown.validate(catalog),
            Err(EngineError::UnknownIngredient(_))
        ));

        let miscategorized = GoalPreferenceTable::new().with_preferences(
            HealthGoal::Longevity,
            PurposeSlot::Liquid,
            &["banana"],
        );
        assert!(matches!(
            miscategorized.validate(catalog),
            Err(EngineError::InvalidData(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let result = GoalPreferenceTable::from_json(r#"{ "energy-boost": ["banana"] }"#);
        assert!(matches!(result, Err(EngineError::Serialization(_))));
    }
}
