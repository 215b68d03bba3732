// ABOUTME: Allergen inference for free-text menu ingredients behind a replaceable trait
// ABOUTME: Keyword detector maps substrings to allergen tags, with plant-based exceptions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;

use crate::models::{AllergenTag, MenuItem};

/// Infers allergen tags from menu ingredient text
///
/// Scoring only depends on this trait, so a real ingredient-to-allergen lookup can
/// replace the keyword heuristic without touching the recommendation engine.
pub trait AllergenDetector {
    /// Allergen tags inferred from one ingredient description
    fn detect(&self, ingredient_text: &str) -> BTreeSet<AllergenTag>;

    /// Whether no ingredient of `item` carries an excluded allergen
    fn is_safe(&self, item: &MenuItem, excluded: &BTreeSet<AllergenTag>) -> bool {
        excluded.is_empty()
            || item
                .ingredients
                .iter()
                .all(|text| self.detect(text).is_disjoint(excluded))
    }
}

/// One keyword rule
#[derive(Debug, Clone)]
struct KeywordRule {
    keyword: String,
    allergen: AllergenTag,
    unless: Vec<String>,
}

/// Substring-based allergen detector
#[derive(Debug, Clone, Default)]
pub struct KeywordAllergenDetector {
    rules: Vec<KeywordRule>,
}

impl KeywordAllergenDetector {
    /// Detector with no rules
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bundled keyword map
    #[must_use]
    pub fn standard() -> Self {
        const PLANT_MILKS: &[&str] = &[
            "oat milk",
            "almond milk",
            "soy milk",
            "coconut milk",
            "rice milk",
            "hemp milk",
            "cashew milk",
        ];
        const NUT_BUTTERS: &[&str] = &[
            "peanut butter",
            "almond butter",
            "cashew butter",
            "cocoa butter",
            "sunflower butter",
        ];
        const PLANT_YOGURTS: &[&str] = &["coconut yogurt", "soy yogurt", "oat yogurt"];

        let mut detector = Self::new();
        for nut in [
            "almond", "cashew", "walnut", "pecan", "hazelnut", "pistachio", "brazil",
        ] {
            detector = detector.with_keyword(nut, "tree-nuts");
        }
        detector = detector
            .with_keyword("peanut", "peanuts")
            .with_keyword_unless("milk", "dairy", PLANT_MILKS)
            .with_keyword("whey", "dairy")
            .with_keyword_unless("yogurt", "dairy", PLANT_YOGURTS)
            .with_keyword_unless("cream", "dairy", &["coconut cream"])
            .with_keyword("cheese", "dairy")
            .with_keyword_unless("butter", "dairy", NUT_BUTTERS);
        for grain in ["wheat", "barley", "rye", "granola"] {
            detector = detector.with_keyword(grain, "gluten");
        }
        for soy in ["soy", "tofu", "edamame"] {
            detector = detector.with_keyword(soy, "soy");
        }
        detector
            .with_keyword("egg", "egg")
            .with_keyword("sesame", "sesame")
            .with_keyword("tahini", "sesame")
            .with_keyword("coconut", "coconut")
    }

    /// Add a keyword rule
    #[must_use]
    pub fn with_keyword(self, keyword: &str, allergen: &str) -> Self {
        self.with_keyword_unless(keyword, allergen, &[])
    }

    /// Add a keyword rule whose occurrences inside an `unless` phrase are ignored
    #[must_use]
    pub fn with_keyword_unless(mut self, keyword: &str, allergen: &str, unless: &[&str]) -> Self {
        self.rules.push(KeywordRule {
            keyword: normalize_text(keyword),
            allergen: AllergenTag::normalize(allergen),
            unless: unless.iter().map(|u| normalize_text(u)).collect(),
        });
        self
    }
}

impl AllergenDetector for KeywordAllergenDetector {
    fn detect(&self, ingredient_text: &str) -> BTreeSet<AllergenTag> {
        let text = normalize_text(ingredient_text);
        self.rules
            .iter()
            .filter(|rule| rule.matches(&text))
            .map(|rule| rule.allergen.clone())
            .collect()
    }
}

impl KeywordRule {
    /// Whether the keyword appears outside every exception phrase
    fn matches(&self, text: &str) -> bool {
        if !text.contains(&self.keyword) {
            return false;
        }
        let remaining = self
            .unless
            .iter()
            .fold(text.to_owned(), |acc, phrase| acc.replace(phrase.as_str(), " "));
        remaining.contains(&self.keyword)
    }
}

/// Lowercase with hyphens and underscores folded to spaces
pub(crate) fn normalize_text(text: &str) -> String {
    text.trim().to_lowercase().replace(['-', '_'], " ")
}
