// ABOUTME: Nutrition aggregation and ingredient cost for composed formulations
// ABOUTME: Linear sums over per-100-unit values, with longevity compounds unioned
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Aggregation Module
//!
//! Both functions are linear in the formulation amounts: every field of
//! `aggregate(f.scaled(k))` and `price(f.scaled(k))` is `k` times the unscaled value.
//! Amounts are rechecked at this boundary so a formulation assembled through serde
//! cannot smuggle a zero, negative or non-finite amount into the totals.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, EngineResult};
use crate::models::Formulation;

/// Aggregated nutrition for a whole formulation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionTotals {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Fiber (g)
    pub fiber_g: f64,
    /// Sugar (g)
    pub sugar_g: f64,
    /// Deduplicated longevity compounds across all ingredients
    pub longevity_compounds: BTreeSet<String>,
}

impl NutritionTotals {
    /// Macro fields in declaration order
    #[must_use]
    pub const fn macros(&self) -> [f64; 6] {
        [
            self.calories,
            self.protein_g,
            self.carbs_g,
            self.fat_g,
            self.fiber_g,
            self.sugar_g,
        ]
    }
}

/// Sum nutrition over every entry
///
/// `total[field] = Σ ingredient.nutrition[field] × amount / 100`
///
/// # Errors
///
/// Returns `InvalidQuantity` if any entry amount is zero, negative or non-finite
pub fn aggregate(formulation: &Formulation) -> EngineResult<NutritionTotals> {
    let mut totals = NutritionTotals::default();
    for entry in formulation.entries() {
        let amount = EngineError::check_amount(&entry.ingredient.id, entry.amount)?;
        let factor = amount / 100.0;
        let n = &entry.ingredient.nutrition;

        totals.calories += n.calories * factor;
        totals.protein_g += n.protein_g * factor;
        totals.carbs_g += n.carbs_g * factor;
        totals.fat_g += n.fat_g * factor;
        totals.fiber_g += n.fiber_g * factor;
        totals.sugar_g += n.sugar_g * factor;
        totals
            .longevity_compounds
            .extend(n.longevity_compounds.iter().cloned());
    }
    Ok(totals)
}

/// Ingredient cost of a formulation
///
/// `cost = Σ ingredient.unit_cost × amount / 100`
///
/// # Errors
///
/// Returns `InvalidQuantity` if any entry amount is zero, negative or non-finite
pub fn price(formulation: &Formulation) -> EngineResult<f64> {
    formulation.entries().iter().try_fold(0.0, |total, entry| {
        let amount = EngineError::check_amount(&entry.ingredient.id, entry.amount)?;
        Ok(entry.ingredient.unit_cost.mul_add(amount / 100.0, total))
    })
}

/// Round to two decimal places for display
#[must_use]
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
