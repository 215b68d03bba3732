// ABOUTME: Consumer dietary profile, health goals, and momentary mood
// ABOUTME: Defines UserProfile and the closed enums the engine branches on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use super::ingredient::{AllergenTag, DietMarker, Ingredient};

/// Health goal a drink is formulated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HealthGoal {
    /// Sustained energy
    EnergyBoost,
    /// Gentle on digestion
    CalmStomach,
    /// Replaces a full meal
    MealReplacement,
    /// Antioxidant and polyphenol rich
    Longevity,
    /// Prebiotic and probiotic support
    GutHealth,
    /// Focus and cognition
    BrainHealth,
    /// Immune system support
    ImmuneSupport,
}

impl HealthGoal {
    /// All goals in canonical order
    pub const ALL: [Self; 7] = [
        Self::EnergyBoost,
        Self::CalmStomach,
        Self::MealReplacement,
        Self::Longevity,
        Self::GutHealth,
        Self::BrainHealth,
        Self::ImmuneSupport,
    ];

    /// Canonical kebab-case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EnergyBoost => "energy-boost",
            Self::CalmStomach => "calm-stomach",
            Self::MealReplacement => "meal-replacement",
            Self::Longevity => "longevity",
            Self::GutHealth => "gut-health",
            Self::BrainHealth => "brain-health",
            Self::ImmuneSupport => "immune-support",
        }
    }

    /// Human-readable label used in recipe titles
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::EnergyBoost => "Energy Boost",
            Self::CalmStomach => "Calm Stomach",
            Self::MealReplacement => "Meal Replacement",
            Self::Longevity => "Longevity",
            Self::GutHealth => "Gut Health",
            Self::BrainHealth => "Brain Health",
            Self::ImmuneSupport => "Immune Support",
        }
    }
}

impl Display for HealthGoal {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Declared diet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Diet {
    /// No animal products
    Vegan,
    /// No meat or animal tissue
    Vegetarian,
    /// No milk products
    DairyFree,
    /// No gluten
    GlutenFree,
    /// Paleo-compliant
    Paleo,
    /// Ketogenic
    Keto,
    /// No declared diet
    #[default]
    None,
}

impl Diet {
    /// Diet markers this diet rules out
    #[must_use]
    pub const fn excluded_markers(&self) -> &'static [DietMarker] {
        match self {
            Self::Vegan => &[
                DietMarker::AnimalDerived,
                DietMarker::Dairy,
                DietMarker::BeeProduct,
            ],
            Self::Vegetarian => &[DietMarker::AnimalDerived],
            Self::DairyFree => &[DietMarker::Dairy],
            Self::GlutenFree => &[DietMarker::Gluten],
            Self::Paleo => &[
                DietMarker::Dairy,
                DietMarker::Grain,
                DietMarker::Legume,
                DietMarker::RefinedSugar,
            ],
            Self::Keto => &[DietMarker::HighSugar, DietMarker::Grain],
            Self::None => &[],
        }
    }

    /// Whether the diet permits this ingredient
    #[must_use]
    pub fn permits(&self, ingredient: &Ingredient) -> bool {
        !self
            .excluded_markers()
            .iter()
            .any(|marker| ingredient.diet_markers.contains(marker))
    }
}

/// Tolerance for sweetness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SweetnessTolerance {
    /// Barely sweet
    Low,
    /// Balanced
    #[default]
    Medium,
    /// Dessert-like
    High,
}

/// Preferred drink texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TexturePreference {
    /// Distinct layers with a foam topping
    Layered,
    /// One homogeneous blend
    #[default]
    SingleBlend,
}

/// Spending tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BudgetTier {
    /// Price-conscious
    #[default]
    Basic,
    /// Mid-range
    Premium,
    /// No practical price ceiling
    Luxury,
}

/// Time of day the drink is consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    /// Before noon
    #[default]
    Morning,
    /// Midday
    Lunch,
    /// Mid to late afternoon
    Afternoon,
    /// After work
    Evening,
}

/// Physical activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Exercise a few times a week
    #[default]
    Moderate,
    /// Exercise most days
    Active,
    /// Structured training
    Athlete,
}

impl ActivityLevel {
    /// Goal used when a profile has not declared any
    #[must_use]
    pub const fn default_goal(&self) -> HealthGoal {
        match self {
            Self::Sedentary => HealthGoal::GutHealth,
            Self::Moderate => HealthGoal::ImmuneSupport,
            Self::Active => HealthGoal::EnergyBoost,
            Self::Athlete => HealthGoal::MealReplacement,
        }
    }
}

/// Flavor preference vector, each axis 0-10
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorPreferences {
    /// Preference for sweet
    pub sweet: u8,
    /// Preference for sour
    pub sour: u8,
    /// Preference for bitter
    pub bitter: u8,
    /// Preference for umami
    pub umami: u8,
}

impl Default for FlavorPreferences {
    fn default() -> Self {
        Self {
            sweet: 5,
            sour: 5,
            bitter: 5,
            umami: 5,
        }
    }
}

impl FlavorPreferences {
    /// Preferences as fractions in `[0, 1]` (sweet, sour, bitter, umami)
    #[must_use]
    pub fn normalized(&self) -> [f64; 4] {
        [self.sweet, self.sour, self.bitter, self.umami].map(|v| f64::from(v.min(10)) / 10.0)
    }
}

/// Consumer dietary profile (read-only to the engine)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    /// Declared allergies
    #[serde(default)]
    pub allergies: BTreeSet<AllergenTag>,
    /// Declared intolerances
    #[serde(default)]
    pub intolerances: BTreeSet<AllergenTag>,
    /// Declared diet
    #[serde(default)]
    pub diet: Diet,
    /// Health goals
    #[serde(default)]
    pub goals: Vec<HealthGoal>,
    /// Disliked ingredient names or ids
    #[serde(default)]
    pub dislikes: Vec<String>,
    /// Sweetness tolerance
    #[serde(default)]
    pub sweetness_tolerance: SweetnessTolerance,
    /// Texture preference
    #[serde(default)]
    pub texture_preference: TexturePreference,
    /// Budget tier
    #[serde(default)]
    pub budget: BudgetTier,
    /// Time of day
    #[serde(default)]
    pub time_of_day: TimeOfDay,
    /// Activity level
    #[serde(default)]
    pub activity_level: ActivityLevel,
    /// Flavor preferences
    #[serde(default)]
    pub flavor_preferences: FlavorPreferences,
}

impl UserProfile {
    /// Add allergies (normalized)
    #[must_use]
    pub fn with_allergies(mut self, allergies: &[&str]) -> Self {
        self.allergies
            .extend(allergies.iter().map(|a| AllergenTag::normalize(a)));
        self
    }

    /// Add intolerances (normalized)
    #[must_use]
    pub fn with_intolerances(mut self, intolerances: &[&str]) -> Self {
        self.intolerances
            .extend(intolerances.iter().map(|a| AllergenTag::normalize(a)));
        self
    }

    /// Set diet
    #[must_use]
    pub const fn with_diet(mut self, diet: Diet) -> Self {
        self.diet = diet;
        self
    }

    /// Set goals
    #[must_use]
    pub fn with_goals(mut self, goals: &[HealthGoal]) -> Self {
        self.goals = goals.to_vec();
        self
    }

    /// Add disliked ingredients
    #[must_use]
    pub fn with_dislikes(mut self, dislikes: &[&str]) -> Self {
        self.dislikes
            .extend(dislikes.iter().map(|d| (*d).to_owned()));
        self
    }

    /// Set budget tier
    #[must_use]
    pub const fn with_budget(mut self, budget: BudgetTier) -> Self {
        self.budget = budget;
        self
    }

    /// Set texture preference
    #[must_use]
    pub const fn with_texture(mut self, texture: TexturePreference) -> Self {
        self.texture_preference = texture;
        self
    }

    /// Set time of day
    #[must_use]
    pub const fn with_time_of_day(mut self, time_of_day: TimeOfDay) -> Self {
        self.time_of_day = time_of_day;
        self
    }

    /// Set activity level
    #[must_use]
    pub const fn with_activity(mut self, activity_level: ActivityLevel) -> Self {
        self.activity_level = activity_level;
        self
    }

    /// Set sweetness tolerance
    #[must_use]
    pub const fn with_sweetness(mut self, tolerance: SweetnessTolerance) -> Self {
        self.sweetness_tolerance = tolerance;
        self
    }

    /// Set flavor preferences
    #[must_use]
    pub const fn with_flavors(mut self, flavors: FlavorPreferences) -> Self {
        self.flavor_preferences = flavors;
        self
    }

    /// Union of allergies and intolerances
    #[must_use]
    pub fn excluded_allergens(&self) -> BTreeSet<AllergenTag> {
        self.allergies.union(&self.intolerances).cloned().collect()
    }

    /// Whether the profile dislikes this ingredient (by id or name, case-insensitive)
    #[must_use]
    pub fn dislikes_ingredient(&self, ingredient: &Ingredient) -> bool {
        self.dislikes.iter().any(|d| {
            let d = d.trim();
            d.eq_ignore_ascii_case(&ingredient.id) || d.eq_ignore_ascii_case(&ingredient.name)
        })
    }

    /// Goals to formulate for, falling back to the activity-level default
    #[must_use]
    pub fn effective_goals(&self) -> Vec<HealthGoal> {
        if self.goals.is_empty() {
            vec![self.activity_level.default_goal()]
        } else {
            let mut seen = BTreeSet::new();
            self.goals.iter().copied().filter(|g| seen.insert(*g)).collect()
        }
    }
}

/// Momentary mood selected by the consumer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Mood {
    /// Ready to go
    Energized,
    /// Low on energy
    Tired,
    /// Tense or anxious
    Stressed,
    /// Uncomfortable digestion
    Bloated,
    /// Skipped a meal
    Hungry,
    /// Hard to concentrate
    Foggy,
    /// Feeling under the weather
    RunDown,
    /// Nothing in particular
    #[default]
    Balanced,
}

impl Mood {
    /// Goal that best answers this mood
    #[must_use]
    pub const fn suggested_goal(&self) -> HealthGoal {
        match self {
            Self::Energized | Self::Balanced => HealthGoal::Longevity,
            Self::Tired => HealthGoal::EnergyBoost,
            Self::Stressed | Self::Bloated => HealthGoal::CalmStomach,
            Self::Hungry => HealthGoal::MealReplacement,
            Self::Foggy => HealthGoal::BrainHealth,
            Self::RunDown => HealthGoal::ImmuneSupport,
        }
    }

    /// Title word used when naming a generated recipe
    #[must_use]
    pub const fn title_word(&self) -> &'static str {
        match self {
            Self::Energized => "Momentum",
            Self::Tired => "Wake-Up",
            Self::Stressed => "Unwind",
            Self::Bloated => "Soothing",
            Self::Hungry => "Fuel",
            Self::Foggy => "Clarity",
            Self::RunDown => "Recharge",
            Self::Balanced => "Daily",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IngredientCategory;

    #[test]
    fn test_diet_permits() {
        let whey = Ingredient::new("whey-protein", "Whey Protein", IngredientCategory::Protein)
            .with_markers(&[DietMarker::Dairy, DietMarker::AnimalDerived]);
        assert!(!Diet::Vegan.permits(&whey));
        assert!(!Diet::DairyFree.permits(&whey));
        assert!(Diet::GlutenFree.permits(&whey));
        assert!(Diet::None.permits(&whey));
    }

    #[test]
    fn test_dislikes_match_id_or_name() {
        let profile = UserProfile::default().with_dislikes(&["Kale", "oat-milk"]);
        let kale = Ingredient::new("kale", "Kale", IngredientCategory::Superfood);
        let oat = Ingredient::new("oat-milk", "Oat Milk", IngredientCategory::Liquid);
        let mango = Ingredient::new("mango", "Mango", IngredientCategory::BaseFruit);
        assert!(profile.dislikes_ingredient(&kale));
        assert!(profile.dislikes_ingredient(&oat));
        assert!(!profile.dislikes_ingredient(&mango));
    }

    #[test]
    fn test_effective_goals() {
        let profile = UserProfile::default().with_activity(ActivityLevel::Athlete);
        assert_eq!(profile.effective_goals(), vec![HealthGoal::MealReplacement]);

        let profile = profile.with_goals(&[
            HealthGoal::Longevity,
            HealthGoal::GutHealth,
            HealthGoal::Longevity,
        ]);
        assert_eq!(
            profile.effective_goals(),
            vec![HealthGoal::Longevity, HealthGoal::GutHealth]
        );
    }

    #[test]
    fn test_profile_deserializes_with_defaults() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"allergies": ["Nuts"], "goals": ["energy-boost"]}"#).unwrap();
        assert_eq!(profile.excluded_allergens().len(), 1);
        assert_eq!(profile.goals, vec![HealthGoal::EnergyBoost]);
        assert_eq!(profile.budget, BudgetTier::Basic);
    }
}
