// ABOUTME: Main library entry point for the blendwise beverage formulation engine
// ABOUTME: Recipe composition, nutrition and pricing, vendor matching, and recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Blendwise
//!
//! A personalization engine for functional drinks. Given a consumer profile it
//! composes a drink slot by slot from an ingredient catalog, aggregates nutrition and
//! cost, scores how well each vendor in a directory can prepare it, and assembles
//! shop, recipe and subscription recommendations.
//!
//! ## Architecture
//!
//! - **Catalog**: ingredient records, goal preferences, substitutions, capability aliases
//! - **Composer**: deterministic slot-by-slot formulation honoring allergens and diet
//! - **Nutrition**: additive nutrition totals and ingredient cost
//! - **Matching**: vendor compatibility scores, substitutions, ranking by score and distance
//! - **Recommendation**: shop ranking, enhancements, per-goal recipes, subscriptions
//! - **Config**: tunable weights and limits with environment overrides
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use blendwise::catalog::{CapabilityMap, GoalPreferenceTable, IngredientCatalog, SubstitutionGraph};
//! use blendwise::composer::RecipeComposer;
//! use blendwise::errors::EngineResult;
//! use blendwise::matching::VendorCompatibilityScorer;
//! use blendwise::models::{HealthGoal, IngredientCategory, UserProfile, Vendor};
//!
//! fn main() -> EngineResult<()> {
//!     blendwise::logging::init_from_env()?;
//!
//!     let composer = RecipeComposer::new(IngredientCatalog::standard(), GoalPreferenceTable::standard());
//!     let profile = UserProfile::default().with_allergies(&["nuts"]);
//!     let formulation = composer.compose(&profile, HealthGoal::EnergyBoost)?;
//!
//!     let vendor = Vendor::new("corner", "Corner Juice")
//!         .with_capability(IngredientCategory::BaseFruit, &["banana", "mango"]);
//!     let scorer = VendorCompatibilityScorer::new(SubstitutionGraph::standard(), CapabilityMap::standard());
//!     let outcome = scorer.find_matches(&formulation, &[vendor], None)?;
//!     println!("{} vendors qualified", outcome.matches().len());
//!     Ok(())
//! }
//! ```

/// Ingredient catalog and reference tables
pub mod catalog;

/// Formulation and recipe generation
pub mod composer;

/// Engine configuration
pub mod config;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Vendor compatibility matching
pub mod matching;

/// Domain data models
pub mod models;

/// Nutrition aggregation and pricing
pub mod nutrition;

/// Profile recommendations
pub mod recommendation;

pub use composer::{GeneratedRecipe, RecipeComposer};
pub use errors::{EngineError, EngineResult};
pub use matching::{MatchOutcome, MatchResult, VendorCompatibilityScorer};
pub use recommendation::{ProfileRecommendationEngine, RecommendationSet};
