// ABOUTME: Criterion benchmarks for composition, vendor matching, and recommendations
// ABOUTME: Measures scoring throughput over synthetic vendor directories of increasing size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the formulation and matching pipeline.
//!
//! Measures recipe composition per goal, directory-wide vendor ranking, and the full
//! recommendation pipeline.

#![allow(clippy::missing_docs_in_private_items, clippy::panic, missing_docs)]

use blendwise::catalog::{CapabilityMap, GoalPreferenceTable, IngredientCatalog, SubstitutionGraph};
use blendwise::composer::RecipeComposer;
use blendwise::config::{CompositionConfig, MatchingConfig, RecommendationConfig};
use blendwise::matching::VendorCompatibilityScorer;
use blendwise::models::{
    BudgetTier, Enhancement, GeoPoint, HealthGoal, IngredientCategory, MenuItem, UserProfile,
    Vendor,
};
use blendwise::recommendation::{KeywordAllergenDetector, ProfileRecommendationEngine};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Largest synthetic directory
const LARGE_DIRECTORY_SIZE: usize = 2000;

const FRUITS: [&str; 6] = ["banana", "mango", "blueberry", "strawberry", "pineapple", "papaya"];
const LIQUIDS: [&str; 5] = ["oat-milk", "almond-milk", "coconut-milk", "whole-milk", "green-tea"];
const PROTEINS: [&str; 4] = ["whey", "pea-protein", "yogurt", "hemp-protein"];
const SUPERFOODS: [&str; 5] = ["maca", "chia-seeds", "spinach", "turmeric", "matcha"];

/// Generate a directory of vendors with rotating capabilities and menus
#[allow(clippy::cast_precision_loss)]
fn generate_vendors(count: usize) -> Vec<Vendor> {
    (0..count)
        .map(|index| {
            let pick = |pool: &[&'static str], stride: usize| -> Vec<&'static str> {
                pool.iter()
                    .enumerate()
                    .filter(|(i, _)| (index + i) % stride != 0)
                    .map(|(_, id)| *id)
                    .collect()
            };
            Vendor::new(format!("vendor-{index}"), format!("Vendor {index}"))
                .with_capability(IngredientCategory::BaseFruit, &pick(&FRUITS, 3))
                .with_capability(IngredientCategory::Liquid, &pick(&LIQUIDS, 2))
                .with_capability(IngredientCategory::Protein, &pick(&PROTEINS, 4))
                .with_capability(IngredientCategory::Superfood, &pick(&SUPERFOODS, 2))
                .with_capability(IngredientCategory::Sweetener, &["honey"])
                .with_combination(index % 2 == 0)
                .with_prep_minutes(3.0 + (index % 5) as f64)
                .with_location(GeoPoint {
                    latitude: 45.0 + (index % 100) as f64 / 100.0,
                    longitude: -73.0 - (index % 50) as f64 / 50.0,
                })
                .with_menu_item(MenuItem::new(
                    format!("Energy Blend {index}"),
                    &["banana", "oat milk", "maca"],
                    5.0 + (index % 8) as f64,
                ))
                .with_menu_item(MenuItem::new(
                    "Almond Protein Shake",
                    &["almond milk", "whey", "dates"],
                    8.5,
                ))
                .with_enhancement(
                    Enhancement::new("collagen", "Collagen Scoop", 2.0)
                        .with_impact(HealthGoal::Longevity, 12.0),
                )
        })
        .collect()
}

fn composer() -> RecipeComposer<'static> {
    RecipeComposer::with_config(
        IngredientCatalog::standard(),
        GoalPreferenceTable::standard(),
        CompositionConfig::default(),
    )
}

fn scorer() -> VendorCompatibilityScorer<'static> {
    VendorCompatibilityScorer::with_config(
        SubstitutionGraph::standard(),
        CapabilityMap::standard(),
        MatchingConfig::default(),
    )
}

/// Benchmark composing one formulation per goal
fn bench_composition(c: &mut Criterion) {
    let mut group = c.benchmark_group("composition");
    let composer = composer();
    let profile = UserProfile::default()
        .with_allergies(&["nuts", "dairy"])
        .with_budget(BudgetTier::Luxury);

    for goal in HealthGoal::ALL {
        group.bench_with_input(BenchmarkId::new("compose", goal), &goal, |b, goal| {
            b.iter(|| composer.compose(black_box(&profile), black_box(*goal)));
        });
    }

    group.finish();
}

/// Benchmark ranking directories of increasing size
fn bench_find_matches(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_matches");
    let formulation = composer()
        .compose(&UserProfile::default(), HealthGoal::EnergyBoost)
        .unwrap_or_else(|e| panic!("benchmark formulation: {e}"));
    let scorer = scorer();
    let origin = GeoPoint {
        latitude: 45.5017,
        longitude: -73.5673,
    };

    for count in [10, 200, LARGE_DIRECTORY_SIZE] {
        let vendors = generate_vendors(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("score_directory", count),
            &vendors,
            |b, vendors| {
                b.iter(|| {
                    scorer.find_matches(
                        black_box(&formulation),
                        black_box(vendors),
                        black_box(Some(origin)),
                    )
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the full recommendation pipeline
fn bench_recommendation_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommendation");
    let engine = ProfileRecommendationEngine::with_config(
        composer(),
        scorer(),
        KeywordAllergenDetector::standard(),
        RecommendationConfig::default(),
    );
    let profile = UserProfile::default()
        .with_allergies(&["nuts"])
        .with_goals(&[HealthGoal::EnergyBoost, HealthGoal::Longevity])
        .with_budget(BudgetTier::Premium);

    for count in [10, 200] {
        let vendors = generate_vendors(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("recommend", count), &vendors, |b, vendors| {
            b.iter(|| engine.recommend(black_box(&profile), black_box(vendors)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_composition,
    bench_find_matches,
    bench_recommendation_pipeline,
);

criterion_main!(benches);
