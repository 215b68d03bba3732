// ABOUTME: Integration tests for recipe composition over the bundled catalog
// ABOUTME: Covers allergen safety, diet filtering, fallbacks, determinism, and recipe metadata
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Tests for the recipe composer including:
//! - Allergen and diet exclusions across every goal
//! - Preferred-ingredient fallback order
//! - Deterministic output for equal inputs
//! - Generated recipe naming, cost and prep time

mod common;

use blendwise::catalog::{GoalPreferenceTable, IngredientCatalog};
use blendwise::composer::RecipeComposer;
use blendwise::config::CompositionConfig;
use blendwise::errors::EngineError;
use blendwise::models::{
    ActivityLevel, BudgetTier, Diet, HealthGoal, Ingredient, IngredientCategory, Mood,
    PurposeSlot, TexturePreference, UserProfile,
};
use blendwise::nutrition;
use common::{init_test_logging, standard_composer};

// ============================================================================
// Exclusion Tests
// ============================================================================

#[test]
fn test_nut_allergy_replaces_brazil_nut_with_maca() {
    init_test_logging();
    let composer = standard_composer();
    let profile = UserProfile::default().with_allergies(&["Nuts"]);

    let formulation = composer.compose(&profile, HealthGoal::EnergyBoost).unwrap();

    let ids: Vec<&str> = formulation.ingredient_ids().collect();
    assert!(!ids.contains(&"brazil-nut"));
    assert!(!ids.contains(&"almond-milk"));
    assert_eq!(
        formulation
            .entry_for(PurposeSlot::Superfood)
            .unwrap()
            .ingredient
            .id,
        "maca-powder"
    );
    for entry in formulation.entries() {
        assert!(
            !entry.ingredient.allergens.iter().any(|a| a.as_str() == "tree-nuts"),
            "{} carries tree-nuts",
            entry.ingredient.id
        );
    }
}

#[test]
fn test_formulations_never_contain_excluded_allergens() {
    init_test_logging();
    let composer = standard_composer();
    let allergy_sets: [&[&str]; 5] = [
        &[],
        &["nuts"],
        &["Milk"],
        &["coconut", "soy"],
        &["tree nuts", "dairy", "peanut", "coconut", "soy"],
    ];
    let diets = [Diet::None, Diet::Vegan, Diet::Keto, Diet::Paleo, Diet::DairyFree];

    for allergies in allergy_sets {
        for diet in diets {
            for budget in [BudgetTier::Basic, BudgetTier::Luxury] {
                let profile = UserProfile::default()
                    .with_allergies(allergies)
                    .with_diet(diet)
                    .with_budget(budget)
                    .with_texture(TexturePreference::Layered);
                let excluded = profile.excluded_allergens();

                for goal in HealthGoal::ALL {
                    match composer.compose(&profile, goal) {
                        Ok(formulation) => {
                            for entry in formulation.entries() {
                                assert!(
                                    entry.ingredient.allergens.is_disjoint(&excluded),
                                    "{goal} with {allergies:?} picked {}",
                                    entry.ingredient.id
                                );
                                assert!(
                                    diet.permits(&entry.ingredient),
                                    "{goal} with {diet:?} picked {}",
                                    entry.ingredient.id
                                );
                            }
                        }
                        Err(EngineError::ConstraintViolation { .. }) => {}
                        Err(other) => panic!("unexpected error for {goal}: {other}"),
                    }
                }
            }
        }
    }
}

#[test]
fn test_vegan_profile_gets_plant_protein_and_no_honey() {
    init_test_logging();
    let composer = standard_composer();
    let profile = UserProfile::default().with_diet(Diet::Vegan);

    let formulation = composer
        .compose(&profile, HealthGoal::MealReplacement)
        .unwrap();

    let ids: Vec<&str> = formulation.ingredient_ids().collect();
    assert!(!ids.contains(&"whole-milk"));
    assert!(!ids.contains(&"whey-protein"));
    assert!(!ids.contains(&"honey"));
    assert_eq!(
        formulation.entry_for(PurposeSlot::Protein).unwrap().ingredient.id,
        "pea-protein"
    );
}

#[test]
fn test_dislikes_are_skipped_by_id_or_name() {
    init_test_logging();
    let composer = standard_composer();
    let profile = UserProfile::default().with_dislikes(&["banana", "Mango"]);

    let formulation = composer.compose(&profile, HealthGoal::EnergyBoost).unwrap();

    assert_eq!(
        formulation
            .entry_for(PurposeSlot::BaseFruitPrimary)
            .unwrap()
            .ingredient
            .id,
        "pineapple"
    );
    let ids: Vec<&str> = formulation.ingredient_ids().collect();
    assert!(!ids.contains(&"banana"));
    assert!(!ids.contains(&"mango"));
}

#[test]
fn test_missing_liquid_is_a_constraint_violation() {
    init_test_logging();
    let catalog = IngredientCatalog::new(vec![
        Ingredient::new("banana", "Banana", IngredientCategory::BaseFruit),
        Ingredient::new("almond-milk", "Almond Milk", IngredientCategory::Liquid)
            .with_allergens(&["tree-nuts"]),
    ])
    .unwrap();
    let preferences = GoalPreferenceTable::new();
    let composer =
        RecipeComposer::with_config(&catalog, &preferences, CompositionConfig::default());
    let profile = UserProfile::default().with_allergies(&["nuts"]);

    let error = composer
        .compose(&profile, HealthGoal::Longevity)
        .unwrap_err();

    match error {
        EngineError::ConstraintViolation { slot, .. } => assert_eq!(slot, PurposeSlot::Liquid),
        other => panic!("expected constraint violation, got {other}"),
    }
}

#[test]
fn test_optional_slots_left_empty_without_candidates() {
    init_test_logging();
    let catalog = IngredientCatalog::new(vec![
        Ingredient::new("banana", "Banana", IngredientCategory::BaseFruit),
        Ingredient::new("oat-milk", "Oat Milk", IngredientCategory::Liquid),
    ])
    .unwrap();
    let preferences = GoalPreferenceTable::new();
    let composer =
        RecipeComposer::with_config(&catalog, &preferences, CompositionConfig::default());

    let formulation = composer
        .compose(&UserProfile::default(), HealthGoal::GutHealth)
        .unwrap();

    let ids: Vec<&str> = formulation.ingredient_ids().collect();
    assert_eq!(ids, ["banana", "oat-milk"]);
}

// ============================================================================
// Amount and Slot Tests
// ============================================================================

#[test]
fn test_amounts_follow_profile() {
    init_test_logging();
    let composer = standard_composer();
    let athlete = UserProfile::default()
        .with_activity(ActivityLevel::Athlete)
        .with_budget(BudgetTier::Premium);

    let formulation = composer.compose(&athlete, HealthGoal::EnergyBoost).unwrap();

    let protein = formulation.entry_for(PurposeSlot::Protein).unwrap();
    assert!((protein.amount - 30.0).abs() < f64::EPSILON);
    let liquid = formulation.entry_for(PurposeSlot::Liquid).unwrap();
    assert!((liquid.amount - 150.0).abs() < f64::EPSILON);

    let superfoods: Vec<&str> = formulation
        .entries()
        .iter()
        .filter(|e| e.slot == PurposeSlot::Superfood)
        .map(|e| e.ingredient.id.as_str())
        .collect();
    assert_eq!(superfoods, ["brazil-nut", "maca-powder"]);
}

#[test]
fn test_foam_only_for_layered_texture() {
    init_test_logging();
    let composer = standard_composer();
    let blended = composer
        .compose(&UserProfile::default(), HealthGoal::CalmStomach)
        .unwrap();
    assert!(blended.entry_for(PurposeSlot::Foam).is_none());
    assert!(!blended.is_layered());

    let layered_profile = UserProfile::default().with_texture(TexturePreference::Layered);
    let layered = composer
        .compose(&layered_profile, HealthGoal::CalmStomach)
        .unwrap();
    assert_eq!(
        layered.entry_for(PurposeSlot::Foam).unwrap().ingredient.id,
        "oat-foam"
    );
    assert!(layered.is_layered());
}

#[test]
fn test_no_ingredient_used_twice() {
    init_test_logging();
    let composer = standard_composer();
    let profile = UserProfile::default()
        .with_budget(BudgetTier::Luxury)
        .with_texture(TexturePreference::Layered);

    for goal in HealthGoal::ALL {
        let formulation = composer.compose(&profile, goal).unwrap();
        let mut ids: Vec<&str> = formulation.ingredient_ids().collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total, "{goal} repeats an ingredient");
    }
}

// ============================================================================
// Determinism and Recipe Tests
// ============================================================================

#[test]
fn test_composition_is_deterministic() {
    init_test_logging();
    let composer = standard_composer();
    let profile = UserProfile::default()
        .with_allergies(&["dairy"])
        .with_goals(&[HealthGoal::BrainHealth]);

    let first = composer.compose(&profile, HealthGoal::BrainHealth).unwrap();
    let second = composer.compose(&profile, HealthGoal::BrainHealth).unwrap();
    assert_eq!(first, second);

    let recipe_a = composer
        .generate_recipe(&profile, Mood::Foggy, HealthGoal::BrainHealth)
        .unwrap();
    let recipe_b = composer
        .generate_recipe(&profile, Mood::Foggy, HealthGoal::BrainHealth)
        .unwrap();
    assert!(recipe_a.same_content(&recipe_b));
    assert_ne!(recipe_a.id, recipe_b.id);
}

#[test]
fn test_generated_recipe_metadata() {
    init_test_logging();
    let composer = standard_composer();
    let profile = UserProfile::default();

    let recipe = composer
        .generate_recipe(&profile, Mood::Tired, HealthGoal::EnergyBoost)
        .unwrap();

    assert!(recipe.name.starts_with("Wake-Up "));
    assert!(recipe.name.ends_with("Smoothie"));
    assert!(recipe.description.contains("Banana 120g"));
    assert!(recipe.description.contains("Oat Milk 150ml"));
    assert_eq!(recipe.goal, HealthGoal::EnergyBoost);
    assert_eq!(recipe.mood, Mood::Tired);

    let expected_cost = nutrition::round_currency(nutrition::price(&recipe.formulation).unwrap());
    assert!((recipe.cost - expected_cost).abs() < 1e-9);
    assert_eq!(
        recipe.nutrition,
        nutrition::aggregate(&recipe.formulation).unwrap()
    );
    let expected_prep = (recipe.formulation.len() as f64).mul_add(0.5, 2.0);
    assert!((recipe.prep_time_minutes - expected_prep).abs() < f64::EPSILON);
}

#[test]
fn test_layered_recipe_name_and_prep_time() {
    init_test_logging();
    let composer = standard_composer();
    let profile = UserProfile::default().with_texture(TexturePreference::Layered);

    let recipe = composer
        .generate_recipe(&profile, Mood::Balanced, HealthGoal::Longevity)
        .unwrap();

    assert!(recipe.name.ends_with("Layered Latte"));
    let expected_prep = (recipe.formulation.len() as f64).mul_add(0.5, 2.0) + 2.0;
    assert!((recipe.prep_time_minutes - expected_prep).abs() < f64::EPSILON);
}

#[test]
fn test_mood_selects_goal() {
    init_test_logging();
    let composer = standard_composer();
    let profile = UserProfile::default();

    let recipe = composer.generate_for_mood(&profile, Mood::Foggy).unwrap();

    assert_eq!(recipe.goal, HealthGoal::BrainHealth);
    assert_eq!(recipe.mood, Mood::Foggy);
    assert_eq!(Mood::Tired.suggested_goal(), HealthGoal::EnergyBoost);
    assert_eq!(Mood::Bloated.suggested_goal(), HealthGoal::CalmStomach);
    assert_eq!(Mood::RunDown.suggested_goal(), HealthGoal::ImmuneSupport);
    let explicit = composer
        .generate_recipe(&profile, Mood::Foggy, HealthGoal::BrainHealth)
        .unwrap();
    assert!(recipe.same_content(&explicit));
}
