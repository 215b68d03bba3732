// ABOUTME: Formulation model: ordered ingredient entries assigned to purpose slots
// ABOUTME: Enforces positive finite amounts and supports linear scaling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use super::ingredient::{Ingredient, IngredientCategory, IngredientUnit};
use crate::errors::{EngineError, EngineResult};

/// Structural role an entry plays in a formulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PurposeSlot {
    /// Main fruit, larger share
    BaseFruitPrimary,
    /// Supporting fruit, smaller share
    BaseFruitSecondary,
    /// Liquid base (mandatory)
    Liquid,
    /// Protein source
    Protein,
    /// Functional superfood (one or two per drink)
    Superfood,
    /// Sweetener
    Sweetener,
    /// Flavor enhancer
    FlavorEnhancer,
    /// Foam topping for layered drinks
    Foam,
}

impl PurposeSlot {
    /// Slots in composition order
    pub const ORDER: [Self; 8] = [
        Self::BaseFruitPrimary,
        Self::BaseFruitSecondary,
        Self::Liquid,
        Self::Protein,
        Self::Superfood,
        Self::Sweetener,
        Self::FlavorEnhancer,
        Self::Foam,
    ];

    /// Ingredient category a slot draws from
    #[must_use]
    pub const fn category(&self) -> IngredientCategory {
        match self {
            Self::BaseFruitPrimary | Self::BaseFruitSecondary => IngredientCategory::BaseFruit,
            Self::Liquid => IngredientCategory::Liquid,
            Self::Protein => IngredientCategory::Protein,
            Self::Superfood => IngredientCategory::Superfood,
            Self::Sweetener => IngredientCategory::Sweetener,
            Self::FlavorEnhancer => IngredientCategory::Flavor,
            Self::Foam => IngredientCategory::Foam,
        }
    }

    /// Whether composition must fail when the slot cannot be filled
    #[must_use]
    pub const fn is_mandatory(&self) -> bool {
        matches!(self, Self::Liquid)
    }

    /// Unit amounts for this slot are expressed in
    #[must_use]
    pub const fn unit(&self) -> IngredientUnit {
        match self {
            Self::Liquid | Self::Foam => IngredientUnit::Milliliters,
            _ => IngredientUnit::Grams,
        }
    }

    /// Canonical kebab-case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BaseFruitPrimary => "base-fruit-primary",
            Self::BaseFruitSecondary => "base-fruit-secondary",
            Self::Liquid => "liquid",
            Self::Protein => "protein",
            Self::Superfood => "superfood",
            Self::Sweetener => "sweetener",
            Self::FlavorEnhancer => "flavor-enhancer",
            Self::Foam => "foam",
        }
    }
}

impl Display for PurposeSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Single ingredient line in a formulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulationEntry {
    /// Ingredient reference record
    pub ingredient: Ingredient,
    /// Amount in `unit`
    pub amount: f64,
    /// Measurement unit
    pub unit: IngredientUnit,
    /// Slot this entry fills
    pub slot: PurposeSlot,
}

impl FormulationEntry {
    /// Create an entry, validating the amount
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuantity` if `amount` is not strictly positive and finite
    pub fn new(ingredient: Ingredient, amount: f64, slot: PurposeSlot) -> EngineResult<Self> {
        EngineError::check_amount(&ingredient.id, amount)?;
        Ok(Self {
            ingredient,
            amount,
            unit: slot.unit(),
            slot,
        })
    }
}

/// Ordered set of entries describing one beverage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formulation {
    entries: Vec<FormulationEntry>,
    layered: bool,
}

impl Formulation {
    /// Build a formulation from validated entries
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuantity` if any entry amount is not strictly positive and finite
    pub fn new(entries: Vec<FormulationEntry>, layered: bool) -> EngineResult<Self> {
        for entry in &entries {
            EngineError::check_amount(&entry.ingredient.id, entry.amount)?;
        }
        Ok(Self { entries, layered })
    }

    /// Entries in composition order
    #[must_use]
    pub fn entries(&self) -> &[FormulationEntry] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the formulation has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the drink is built from multiple layered components
    #[must_use]
    pub const fn is_layered(&self) -> bool {
        self.layered
    }

    /// Ingredient ids in order
    pub fn ingredient_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.ingredient.id.as_str())
    }

    /// Entry filling a slot (first one for repeated slots)
    #[must_use]
    pub fn entry_for(&self, slot: PurposeSlot) -> Option<&FormulationEntry> {
        self.entries.iter().find(|e| e.slot == slot)
    }

    /// Copy with every amount multiplied by `factor`
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuantity` if `factor` is not strictly positive and finite
    pub fn scaled(&self, factor: f64) -> EngineResult<Self> {
        EngineError::check_amount("scale factor", factor)?;
        let entries = self
            .entries
            .iter()
            .map(|e| FormulationEntry {
                ingredient: e.ingredient.clone(),
                amount: e.amount * factor,
                unit: e.unit,
                slot: e.slot,
            })
            .collect();
        Self::new(entries, self.layered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banana() -> Ingredient {
        Ingredient::new("banana", "Banana", IngredientCategory::BaseFruit)
    }

    #[test]
    fn test_entry_rejects_bad_amounts() {
        assert!(FormulationEntry::new(banana(), 0.0, PurposeSlot::BaseFruitPrimary).is_err());
        assert!(FormulationEntry::new(banana(), -5.0, PurposeSlot::BaseFruitPrimary).is_err());
        assert!(FormulationEntry::new(banana(), f64::NAN, PurposeSlot::BaseFruitPrimary).is_err());
    }

    #[test]
    fn test_slot_units() {
        assert_eq!(PurposeSlot::Liquid.unit(), IngredientUnit::Milliliters);
        assert_eq!(PurposeSlot::Superfood.unit(), IngredientUnit::Grams);
        assert!(PurposeSlot::Liquid.is_mandatory());
        assert!(!PurposeSlot::Sweetener.is_mandatory());
    }

    #[test]
    fn test_scaled() {
        let entry = FormulationEntry::new(banana(), 120.0, PurposeSlot::BaseFruitPrimary).unwrap();
        let formulation = Formulation::new(vec![entry], false).unwrap();
        let doubled = formulation.scaled(2.0).unwrap();
        assert!((doubled.entries()[0].amount - 240.0).abs() < f64::EPSILON);
        assert!(formulation.scaled(0.0).is_err());
    }
}
