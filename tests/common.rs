// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, engines over bundled data, and fixture vendors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `blendwise`
//!
//! Engines here are built with default configuration instead of the global one, so
//! environment overrides set by other tests in the same process never leak in.

use std::sync::Once;

use blendwise::catalog::{
    CapabilityMap, GoalPreferenceTable, IngredientCatalog, SubstitutionGraph,
};
use blendwise::composer::RecipeComposer;
use blendwise::config::{CompositionConfig, MatchingConfig, RecommendationConfig};
use blendwise::matching::VendorCompatibilityScorer;
use blendwise::models::{Enhancement, GeoPoint, HealthGoal, IngredientCategory, MenuItem, Vendor};
use blendwise::recommendation::{KeywordAllergenDetector, ProfileRecommendationEngine};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls verbosity; quiet by default
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Composer over the bundled catalog and preferences
pub fn standard_composer() -> RecipeComposer<'static> {
    RecipeComposer::with_config(
        IngredientCatalog::standard(),
        GoalPreferenceTable::standard(),
        CompositionConfig::default(),
    )
}

/// Scorer over the bundled substitution graph and capability map
pub fn standard_scorer() -> VendorCompatibilityScorer<'static> {
    VendorCompatibilityScorer::with_config(
        SubstitutionGraph::standard(),
        CapabilityMap::standard(),
        MatchingConfig::default(),
    )
}

/// Recommendation engine over bundled data with the keyword allergen detector
pub fn standard_engine() -> ProfileRecommendationEngine<'static> {
    ProfileRecommendationEngine::with_config(
        standard_composer(),
        standard_scorer(),
        KeywordAllergenDetector::standard(),
        RecommendationConfig::default(),
    )
}

/// Smoothie bar that stocks most of the bundled catalog
pub fn full_service_bar() -> Vendor {
    Vendor::new("full-bar", "Full Service Smoothie Bar")
        .with_capability(
            IngredientCategory::BaseFruit,
            &["banana", "mango", "blueberry", "strawberry", "pineapple", "papaya"],
        )
        .with_capability(
            IngredientCategory::Liquid,
            &["oat-milk", "almond-milk", "whole-milk", "coconut-water"],
        )
        .with_capability(
            IngredientCategory::Protein,
            &["whey", "pea-protein", "yogurt"],
        )
        .with_capability(
            IngredientCategory::Superfood,
            &["maca", "chia-seeds", "spinach", "turmeric"],
        )
        .with_capability(IngredientCategory::Sweetener, &["honey", "dates"])
        .with_capability(IngredientCategory::Flavor, &["cinnamon", "ginger", "cocoa"])
        .with_capability(IngredientCategory::Foam, &["oat-foam", "microfoam"])
        .with_combination(true)
        .with_prep_minutes(4.0)
        .with_menu_item(MenuItem::new(
            "Morning Energy Smoothie",
            &["banana", "oat milk", "maca"],
            6.5,
        ))
        .with_menu_item(MenuItem::new(
            "Peanut Power Bowl",
            &["banana", "peanut butter", "granola"],
            9.0,
        ))
        .with_menu_item(MenuItem::new(
            "Ginger Calm Tonic",
            &["ginger", "coconut water", "mint"],
            5.5,
        ))
        .with_enhancement(
            Enhancement::new("maca-shot", "Maca Shot", 1.5)
                .with_impact(HealthGoal::EnergyBoost, 15.0),
        )
        .with_enhancement(
            Enhancement::new("almond-crunch", "Almond Crunch", 1.0)
                .with_allergens(&["tree-nuts"])
                .with_impact(HealthGoal::EnergyBoost, 20.0),
        )
        .with_enhancement(
            Enhancement::new("probiotic", "Probiotic Boost", 2.0)
                .with_impact(HealthGoal::GutHealth, 25.0),
        )
}

/// Tea house that stocks only tea and mint
pub fn tea_house() -> Vendor {
    Vendor::new("tea-house", "Quiet Tea House")
        .with_capability(IngredientCategory::Liquid, &["green-tea"])
        .with_capability(IngredientCategory::Flavor, &["mint"])
        .with_prep_minutes(3.0)
        .with_menu_item(MenuItem::new(
            "Afternoon Matcha",
            &["matcha", "oat milk"],
            5.0,
        ))
}

/// Nut bar whose whole menu is built on tree nuts
pub fn nut_bar() -> Vendor {
    Vendor::new("nut-bar", "Nut Butter Bar")
        .with_capability(IngredientCategory::Protein, &["almond-butter", "peanut-butter"])
        .with_menu_item(MenuItem::new(
            "Almond Dream",
            &["almond butter", "almond milk", "dates"],
            7.5,
        ))
        .with_menu_item(MenuItem::new(
            "Cashew Cream Shake",
            &["cashew", "banana"],
            8.0,
        ))
}

/// Location in downtown Montreal
pub fn montreal() -> GeoPoint {
    GeoPoint {
        latitude: 45.5017,
        longitude: -73.5673,
    }
}
