// ABOUTME: Vendor compatibility scoring configuration
// ABOUTME: Configures match weights, score threshold, pricing base, and prep-time penalties
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Vendor compatibility scoring configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Per-ingredient match weights
    pub weights: MatchWeights,
    /// Ranking thresholds
    pub thresholds: MatchThresholds,
    /// Price and prep-time estimation
    pub estimates: MatchEstimates,
}

/// Weight each ingredient contributes to the match score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchWeights {
    /// Vendor stocks the exact ingredient
    pub exact: f64,
    /// Vendor stocks a known substitute
    pub substitution: f64,
    /// Bonus for multi-ingredient drinks at vendors that combine components
    pub combination_bonus: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            exact: 1.0,
            substitution: 0.7,
            combination_bonus: 0.5,
        }
    }
}

/// Thresholds applied when ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchThresholds {
    /// Vendors scoring at or below this are excluded
    pub min_score: u8,
    /// Ceiling for formulations that are not fully exact-matched
    pub partial_match_ceiling: u8,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            min_score: 30,
            partial_match_ceiling: 99,
        }
    }
}

/// Price and prep-time estimation constants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEstimates {
    /// Base drink price before the vendor multiplier
    pub base_drink_price: f64,
    /// Minutes added per missing ingredient
    pub missing_ingredient_minutes: f64,
    /// Minutes added for layered formulations
    pub layered_minutes: f64,
}

impl Default for MatchEstimates {
    fn default() -> Self {
        Self {
            base_drink_price: 8.99,
            missing_ingredient_minutes: 0.5,
            layered_minutes: 2.0,
        }
    }
}
