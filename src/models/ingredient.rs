// ABOUTME: Ingredient reference data model with nutrition, cost, allergen, and diet tags
// ABOUTME: Defines Ingredient, IngredientCategory, IngredientUnit, AllergenTag, and DietMarker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Structural category an ingredient belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IngredientCategory {
    /// Fruit forming the body of the drink
    BaseFruit,
    /// Milk, juice or water base
    Liquid,
    /// Protein powder, yogurt, nut butter
    Protein,
    /// Concentrated functional ingredient (seeds, powders, adaptogens)
    Superfood,
    /// Honey, syrups, dates
    Sweetener,
    /// Spices, extracts, citrus zest
    Flavor,
    /// Foamed topping for layered drinks
    Foam,
}

impl IngredientCategory {
    /// All categories in canonical order
    pub const ALL: [Self; 7] = [
        Self::BaseFruit,
        Self::Liquid,
        Self::Protein,
        Self::Superfood,
        Self::Sweetener,
        Self::Flavor,
        Self::Foam,
    ];

    /// Canonical kebab-case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BaseFruit => "base-fruit",
            Self::Liquid => "liquid",
            Self::Protein => "protein",
            Self::Superfood => "superfood",
            Self::Sweetener => "sweetener",
            Self::Flavor => "flavor",
            Self::Foam => "foam",
        }
    }
}

impl Display for IngredientCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Measurement unit for formulation amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IngredientUnit {
    /// Weight in grams (base unit)
    #[default]
    Grams,
    /// Volume in milliliters
    Milliliters,
}

impl IngredientUnit {
    /// Get the abbreviation for display
    #[must_use]
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            Self::Grams => "g",
            Self::Milliliters => "ml",
        }
    }
}

/// Sourcing quality tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QualityTier {
    /// Commodity ingredient
    #[default]
    Standard,
    /// Organic or specialty sourced
    Premium,
    /// Rare or ceremonial grade
    Luxury,
}

/// Dietary marker used to derive diet-based exclusions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietMarker {
    /// Derived from animal tissue
    AnimalDerived,
    /// Honey, pollen and other bee products
    BeeProduct,
    /// Contains milk products
    Dairy,
    /// Contains gluten
    Gluten,
    /// Grain-based
    Grain,
    /// Legume-based
    Legume,
    /// Refined or processed sugar
    RefinedSugar,
    /// High sugar load, incompatible with ketogenic diets
    HighSugar,
}

/// Normalized allergen tag
///
/// Tags compare case-insensitively and fold common aliases, so a profile listing
/// `"Nuts"` excludes an ingredient tagged `"tree-nuts"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct AllergenTag(String);

impl AllergenTag {
    /// Normalize free-form allergen text into a canonical tag
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        let lowered = raw.trim().to_lowercase().replace(['_', ' '], "-");
        let canonical = match lowered.as_str() {
            "nut" | "nuts" | "tree-nut" | "tree-nuts" | "treenuts" => "tree-nuts",
            "peanut" | "peanuts" | "groundnut" | "groundnuts" => "peanuts",
            "milk" | "lactose" | "dairy" | "dairy-products" => "dairy",
            "wheat" | "gluten" | "barley" | "rye" => "gluten",
            "egg" | "eggs" => "egg",
            "soy" | "soya" | "soybean" | "soybeans" => "soy",
            "sesame" | "sesame-seeds" => "sesame",
            "coconut" | "coconuts" => "coconut",
            "shellfish" | "crustacean" | "crustaceans" => "shellfish",
            other => other,
        };
        Self(canonical.to_owned())
    }

    /// Canonical tag text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for AllergenTag {
    fn from(raw: String) -> Self {
        Self::normalize(&raw)
    }
}

impl From<&str> for AllergenTag {
    fn from(raw: &str) -> Self {
        Self::normalize(raw)
    }
}

impl From<AllergenTag> for String {
    fn from(tag: AllergenTag) -> Self {
        tag.0
    }
}

impl Display for AllergenTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// Nutrition per 100 units (grams or milliliters) of an ingredient
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionProfile {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
    /// Fiber in grams
    pub fiber_g: f64,
    /// Sugar in grams
    pub sugar_g: f64,
    /// Named longevity compounds (polyphenols, omega-3, ...)
    #[serde(default)]
    pub longevity_compounds: Vec<String>,
}

impl NutritionProfile {
    /// Macro-only profile
    #[must_use]
    pub const fn macros(
        calories: f64,
        protein_g: f64,
        carbs_g: f64,
        fat_g: f64,
        fiber_g: f64,
        sugar_g: f64,
    ) -> Self {
        Self {
            calories,
            protein_g,
            carbs_g,
            fat_g,
            fiber_g,
            sugar_g,
            longevity_compounds: Vec::new(),
        }
    }

    /// Attach longevity compound names
    #[must_use]
    pub fn with_compounds(mut self, compounds: &[&str]) -> Self {
        self.longevity_compounds = compounds.iter().map(|c| (*c).to_owned()).collect();
        self
    }
}

/// Immutable ingredient reference record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Canonical id (kebab-case, e.g. `oat-milk`)
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Structural category
    pub category: IngredientCategory,
    /// Nutrition per 100 units
    pub nutrition: NutritionProfile,
    /// Cost per 100 units
    pub unit_cost: f64,
    /// Allergen tags
    #[serde(default)]
    pub allergens: BTreeSet<AllergenTag>,
    /// Diet markers
    #[serde(default)]
    pub diet_markers: BTreeSet<DietMarker>,
    /// Sourcing tier
    #[serde(default)]
    pub quality_tier: QualityTier,
    /// Ingredient-specific serving, overriding the slot default
    #[serde(default)]
    pub serving_amount: Option<f64>,
}

impl Ingredient {
    /// Create an ingredient with empty nutrition and zero cost
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: IngredientCategory) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            nutrition: NutritionProfile::default(),
            unit_cost: 0.0,
            allergens: BTreeSet::new(),
            diet_markers: BTreeSet::new(),
            quality_tier: QualityTier::Standard,
            serving_amount: None,
        }
    }

    /// Set nutrition per 100 units
    #[must_use]
    pub fn with_nutrition(mut self, nutrition: NutritionProfile) -> Self {
        self.nutrition = nutrition;
        self
    }

    /// Set cost per 100 units
    #[must_use]
    pub const fn with_cost(mut self, unit_cost: f64) -> Self {
        self.unit_cost = unit_cost;
        self
    }

    /// Add allergen tags (normalized)
    #[must_use]
    pub fn with_allergens(mut self, allergens: &[&str]) -> Self {
        self.allergens
            .extend(allergens.iter().map(|a| AllergenTag::normalize(a)));
        self
    }

    /// Add diet markers
    #[must_use]
    pub fn with_markers(mut self, markers: &[DietMarker]) -> Self {
        self.diet_markers.extend(markers.iter().copied());
        self
    }

    /// Set quality tier
    #[must_use]
    pub const fn with_tier(mut self, tier: QualityTier) -> Self {
        self.quality_tier = tier;
        self
    }

    /// Set ingredient-specific serving amount
    #[must_use]
    pub const fn with_serving(mut self, amount: f64) -> Self {
        self.serving_amount = Some(amount);
        self
    }

    /// Whether any allergen tag appears in `excluded`
    #[must_use]
    pub fn has_allergen_in(&self, excluded: &BTreeSet<AllergenTag>) -> bool {
        !self.allergens.is_disjoint(excluded)
    }
}
