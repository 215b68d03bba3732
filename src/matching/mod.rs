// ABOUTME: Vendor compatibility matching: per-vendor scores, substitutions, and ranked results
// ABOUTME: Distinguishes a legitimate empty result from errors via MatchOutcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Vendor Matching
//!
//! [`VendorCompatibilityScorer::score`] rates one vendor against a formulation;
//! [`VendorCompatibilityScorer::find_matches`] scores a whole directory, drops vendors at
//! or below the threshold and ranks the rest. An empty ranking is reported as
//! [`MatchOutcome::NoCompatibleVendor`], which is a normal result and never an error.

/// Great-circle distance helpers
pub mod geo;
/// Per-vendor scoring and ranking
mod scorer;

pub use scorer::VendorCompatibilityScorer;

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Suggested replacement for a formulation ingredient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionSuggestion {
    /// Ingredient id in the formulation
    pub original: String,
    /// Interchangeable ingredient id from the substitution graph
    pub substitute: String,
    /// Whether the vendor stocks the substitute
    pub available: bool,
}

impl Display for SubstitutionSuggestion {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} → {}", self.original, self.substitute)
    }
}

/// Compatibility of one vendor with one formulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Vendor id
    pub vendor_id: String,
    /// Vendor display name
    pub vendor_name: String,
    /// Compatibility score in `[0, 100]`
    pub score: u8,
    /// Display names of ingredients the vendor can supply neither exactly nor by substitute
    pub missing: Vec<String>,
    /// Substitutions used or suggested, in formulation order
    pub substitutions: Vec<SubstitutionSuggestion>,
    /// Ingredients covered by a stocked substitute
    pub substituted: usize,
    /// Estimated drink price at this vendor
    pub estimated_price: f64,
    /// Estimated preparation time in minutes
    pub estimated_prep_minutes: f64,
    /// Distance from the caller's location, when both locations are known
    pub distance_km: Option<f64>,
}

/// Result of ranking a vendor directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchOutcome {
    /// Vendors above the threshold, best first
    Ranked {
        /// Ranked matches
        matches: Vec<MatchResult>,
    },
    /// Every vendor scored at or below the threshold
    NoCompatibleVendor {
        /// Number of vendors that were scored
        vendors_considered: usize,
    },
}

impl MatchOutcome {
    /// Ranked matches, empty when no vendor qualified
    #[must_use]
    pub fn matches(&self) -> &[MatchResult] {
        match self {
            Self::Ranked { matches } => matches,
            Self::NoCompatibleVendor { .. } => &[],
        }
    }

    /// Whether any vendor qualified
    #[must_use]
    pub const fn has_matches(&self) -> bool {
        matches!(self, Self::Ranked { .. })
    }

    /// Consume into the ranked matches
    #[must_use]
    pub fn into_matches(self) -> Vec<MatchResult> {
        match self {
            Self::Ranked { matches } => matches,
            Self::NoCompatibleVendor { .. } => Vec::new(),
        }
    }
}
