// ABOUTME: Core data models for ingredients, profiles, formulations, and vendors
// ABOUTME: Re-exports the value types every engine component reads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Value objects shared by the composer, the aggregators, and the matchers. Everything here
//! is immutable reference data or a per-request result; nothing is persisted.
//!
//! - `Ingredient`: catalog record with nutrition, cost, allergens, diet markers
//! - `UserProfile`: allergies, diet, goals, preferences (read-only to the engine)
//! - `Formulation`: ordered ingredient entries assigned to purpose slots
//! - `Vendor`: capability sets, menu, enhancements, pricing

/// Ingredient reference records
pub mod ingredient;
/// Formulations and purpose slots
pub mod formulation;
/// Consumer profile and mood
pub mod profile;
/// Vendors, menus, and enhancements
pub mod vendor;

pub use formulation::{Formulation, FormulationEntry, PurposeSlot};
pub use ingredient::{
    AllergenTag, DietMarker, Ingredient, IngredientCategory, IngredientUnit, NutritionProfile,
    QualityTier,
};
pub use profile::{
    ActivityLevel, BudgetTier, Diet, FlavorPreferences, HealthGoal, Mood, SweetnessTolerance,
    TexturePreference, TimeOfDay, UserProfile,
};
pub use vendor::{Enhancement, GeoPoint, MenuItem, Vendor};
