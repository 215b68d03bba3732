// ABOUTME: Menu-item fit scoring: goal keywords, budget band, time-of-day keywords, flavor profile
// ABOUTME: Each term is in [0, 1]; the blended score uses the configured weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::allergen::normalize_text;
use crate::config::RecommendationConfig;
use crate::models::{HealthGoal, MenuItem, TimeOfDay, UserProfile};

/// Keywords signalling a goal in a menu item's name or ingredients
const fn goal_keywords(goal: HealthGoal) -> &'static [&'static str] {
    match goal {
        HealthGoal::EnergyBoost => &[
            "energy", "boost", "power", "matcha", "espresso", "coffee", "maca", "charge",
        ],
        HealthGoal::CalmStomach => &["ginger", "calm", "sooth", "mint", "papaya", "chamomile"],
        HealthGoal::MealReplacement => &["protein", "meal", "oat", "peanut", "bowl", "hearty"],
        HealthGoal::Longevity => &["berry", "acai", "antioxidant", "green", "turmeric", "longevity"],
        HealthGoal::GutHealth => &["kefir", "probiotic", "gut", "fiber", "yogurt", "kombucha"],
        HealthGoal::BrainHealth => &["brain", "focus", "blueberry", "lion", "omega", "walnut"],
        HealthGoal::ImmuneSupport => &[
            "immune", "citrus", "orange", "ginger", "turmeric", "vitamin", "elderberry",
        ],
    }
}

/// Keywords signalling a time of day
const fn time_keywords(time: TimeOfDay) -> &'static [&'static str] {
    match time {
        TimeOfDay::Morning => &[
            "morning", "breakfast", "coffee", "espresso", "latte", "oat", "sunrise", "wake",
        ],
        TimeOfDay::Lunch => &["bowl", "protein", "meal", "green", "lunch"],
        TimeOfDay::Afternoon => &["iced", "tea", "refresh", "matcha", "afternoon", "cold"],
        TimeOfDay::Evening => &["calm", "chamomile", "golden", "night", "evening", "decaf"],
    }
}

/// Keywords per flavor axis, in `FlavorPreferences::normalized` order
const FLAVOR_KEYWORDS: [&[&str]; 4] = [
    // sweet
    &[
        "honey", "date", "banana", "mango", "vanilla", "caramel", "chocolate", "maple", "sweet",
    ],
    // sour
    &[
        "lemon", "lime", "citrus", "kombucha", "kefir", "tart", "passion", "sour", "orange",
    ],
    // bitter
    &["matcha", "espresso", "coffee", "cacao", "kale", "turmeric", "bitter"],
    // umami
    &["miso", "mushroom", "tahini", "sesame", "savory", "tomato", "broth"],
];

/// Fit of one menu item to a profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitBreakdown {
    /// Goal keyword alignment
    pub goal: f64,
    /// Price against the budget band
    pub budget: f64,
    /// Time-of-day keyword alignment
    pub time_of_day: f64,
    /// Flavor profile alignment
    pub flavor: f64,
    /// Weighted blend of the four terms
    pub blended: f64,
}

/// Scores menu items against a profile
pub(crate) struct ItemScorer<'c> {
    config: &'c RecommendationConfig,
}

impl<'c> ItemScorer<'c> {
    pub(crate) const fn new(config: &'c RecommendationConfig) -> Self {
        Self { config }
    }

    /// Score an item against `goals`, normally the profile's effective goals
    pub(crate) fn score(
        &self,
        item: &MenuItem,
        profile: &UserProfile,
        goals: &[HealthGoal],
    ) -> FitBreakdown {
        let text = item_text(item);
        let goal = self.goal_fit(&text, goals);
        let budget = self.budget_fit(item.price, profile);
        let time_of_day = self.time_fit(&text, profile.time_of_day);
        let flavor = self.flavor_fit(&text, profile);

        let w = &self.config.weights;
        let blended = w.goal.mul_add(
            goal,
            w.budget
                .mul_add(budget, w.time_of_day.mul_add(time_of_day, w.flavor * flavor)),
        );

        FitBreakdown {
            goal,
            budget,
            time_of_day,
            flavor,
            blended,
        }
    }

    /// Share of profile goals with at least one keyword hit
    fn goal_fit(&self, text: &str, goals: &[HealthGoal]) -> f64 {
        if goals.is_empty() {
            return self.config.fit_scores.neutral;
        }
        let hits = goals
            .iter()
            .filter(|goal| contains_any(text, goal_keywords(**goal)))
            .count();
        hits as f64 / goals.len() as f64
    }

    /// 1.0 inside the band, a fixed partial score below it, decaying above it
    fn budget_fit(&self, price: f64, profile: &UserProfile) -> f64 {
        let band = self.config.budget_bands.band_for(profile.budget);
        let fit = &self.config.fit_scores;
        if band.contains(price) {
            1.0
        } else if price < band.min {
            fit.below_budget
        } else {
            fit.above_budget_ceiling * band.max / price
        }
    }

    fn time_fit(&self, text: &str, time: TimeOfDay) -> f64 {
        if contains_any(text, time_keywords(time)) {
            1.0
        } else {
            self.config.fit_scores.time_mismatch
        }
    }

    /// Mean preference over the flavor axes the item shows; neutral when it shows none
    fn flavor_fit(&self, text: &str, profile: &UserProfile) -> f64 {
        let preferences = profile.flavor_preferences.normalized();
        let (sum, count) = FLAVOR_KEYWORDS
            .iter()
            .zip(preferences)
            .filter(|(keywords, _)| contains_any(text, keywords))
            .fold((0.0, 0usize), |(sum, count), (_, preference)| {
                (sum + preference, count + 1)
            });
        if count == 0 {
            self.config.fit_scores.neutral
        } else {
            sum / count as f64
        }
    }
}

fn item_text(item: &MenuItem) -> String {
    let mut text = normalize_text(&item.name);
    for ingredient in &item.ingredients {
        text.push(' ');
        text.push_str(&normalize_text(ingredient));
    }
    text
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}
