// ABOUTME: Ingredient reference data: catalog, goal preference tables, substitutions, capability tags
// ABOUTME: Immutable lookup structures injected into the composer and the vendor scorer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Reference Data
//!
//! Everything the engines look up but never mutate. Each structure has a bundled
//! `standard()` instance and a constructor for fixture data, so callers and tests pass
//! exactly the data they want the engine to see.

/// Vendor capability tags per ingredient
pub mod capability;
/// Goal-driven ingredient preference lists
pub mod preferences;
/// Bundled ingredient records
mod standard;
/// Interchangeable ingredient pairs
pub mod substitution;

pub use capability::CapabilityMap;
pub use preferences::GoalPreferenceTable;
pub use substitution::SubstitutionGraph;

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::errors::{EngineError, EngineResult};
use crate::models::{Ingredient, IngredientCategory};

static STANDARD_CATALOG: LazyLock<IngredientCatalog> =
    LazyLock::new(|| IngredientCatalog::indexed(standard::ingredients()));

/// Ordered, immutable ingredient catalog
#[derive(Debug, Clone)]
pub struct IngredientCatalog {
    ingredients: Vec<Ingredient>,
    index: HashMap<String, usize>,
}

impl IngredientCatalog {
    /// Build a catalog from fixture records
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` if two records share an id or a cost is negative or non-finite
    pub fn new(ingredients: Vec<Ingredient>) -> EngineResult<Self> {
        let mut seen = HashSet::with_capacity(ingredients.len());
        for ingredient in &ingredients {
            if !seen.insert(ingredient.id.as_str()) {
                return Err(EngineError::invalid_input(format!(
                    "duplicate ingredient id '{}'",
                    ingredient.id
                )));
            }
            if !ingredient.unit_cost.is_finite() || ingredient.unit_cost < 0.0 {
                return Err(EngineError::invalid_input(format!(
                    "ingredient '{}' has invalid cost {}",
                    ingredient.id, ingredient.unit_cost
                )));
            }
        }
        Ok(Self::indexed(ingredients))
    }

    fn indexed(ingredients: Vec<Ingredient>) -> Self {
        let index = ingredients
            .iter()
            .enumerate()
            .map(|(i, ingredient)| (ingredient.id.clone(), i))
            .collect();
        Self { ingredients, index }
    }

    /// Bundled catalog
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD_CATALOG
    }

    /// Look up an ingredient by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Ingredient> {
        self.index.get(id).map(|&i| &self.ingredients[i])
    }

    /// Look up an ingredient that must exist
    ///
    /// # Errors
    ///
    /// Returns `UnknownIngredient` if the id is not in the catalog
    pub fn require(&self, id: &str) -> EngineResult<&Ingredient> {
        self.get(id)
            .ok_or_else(|| EngineError::UnknownIngredient(id.to_owned()))
    }

    /// Whether the catalog has an ingredient with this id
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All ingredients in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.iter()
    }

    /// Ingredients of one category in catalog order
    pub fn by_category(&self, category: IngredientCategory) -> impl Iterator<Item = &Ingredient> {
        self.ingredients
            .iter()
            .filter(move |ingredient| ingredient.category == category)
    }

    /// Number of ingredients
    #[must_use]
    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}
