// ABOUTME: Scores a formulation against vendor capability sets and ranks a vendor directory
// ABOUTME: Exact matches, graph substitutions, combination bonus, price and prep estimates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::cmp::Ordering;
use std::collections::BTreeSet;

use tracing::{debug, info};

use super::geo::haversine_km;
use super::{MatchOutcome, MatchResult, SubstitutionSuggestion};
use crate::catalog::{CapabilityMap, SubstitutionGraph};
use crate::config::{EngineConfig, MatchingConfig};
use crate::errors::EngineResult;
use crate::models::{Formulation, FormulationEntry, GeoPoint, Vendor};
use crate::nutrition::round_currency;

/// How a vendor covers one formulation entry
enum Coverage<'g> {
    Exact,
    Substitute(&'g str),
    Missing(Option<&'g str>),
}

/// Scores formulations against vendors using injected substitution and capability data
pub struct VendorCompatibilityScorer<'a> {
    substitutions: &'a SubstitutionGraph,
    capabilities: &'a CapabilityMap,
    config: MatchingConfig,
}

impl<'a> VendorCompatibilityScorer<'a> {
    /// Create a scorer using the global configuration
    #[must_use]
    pub fn new(substitutions: &'a SubstitutionGraph, capabilities: &'a CapabilityMap) -> Self {
        Self::with_config(
            substitutions,
            capabilities,
            EngineConfig::global().matching.clone(),
        )
    }

    /// Create a scorer with explicit configuration
    #[must_use]
    pub const fn with_config(
        substitutions: &'a SubstitutionGraph,
        capabilities: &'a CapabilityMap,
        config: MatchingConfig,
    ) -> Self {
        Self {
            substitutions,
            capabilities,
            config,
        }
    }

    /// Matching configuration in use
    #[must_use]
    pub const fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Score one vendor
    ///
    /// The score is `round(100 × matched / (n × exact))`, where exact matches weigh
    /// `exact` and stocked substitutes weigh `substitution`. Vendors that combine
    /// components earn the combination bonus on multi-ingredient drinks they can at least
    /// partly supply. A drink that is not fully exact-matched never reaches 100, and one
    /// with any coverage never drops to 0.
    #[must_use]
    pub fn score(&self, formulation: &Formulation, vendor: &Vendor) -> MatchResult {
        self.score_avoiding(formulation, vendor, &BTreeSet::new())
    }

    /// Score one vendor without substituting any ingredient id in `avoid`
    ///
    /// An entry whose only stocked substitutes are avoided counts as missing, and avoided
    /// ids are never suggested.
    #[must_use]
    pub fn score_avoiding(
        &self,
        formulation: &Formulation,
        vendor: &Vendor,
        avoid: &BTreeSet<String>,
    ) -> MatchResult {
        let weights = &self.config.weights;
        let mut exact = 0usize;
        let mut substituted = 0usize;
        let mut missing = Vec::new();
        let mut substitutions = Vec::new();

        for entry in formulation.entries() {
            match self.coverage(entry, vendor, avoid) {
                Coverage::Exact => exact += 1,
                Coverage::Substitute(substitute) => {
                    substituted += 1;
                    substitutions.push(SubstitutionSuggestion {
                        original: entry.ingredient.id.clone(),
                        substitute: substitute.to_owned(),
                        available: true,
                    });
                }
                Coverage::Missing(suggestion) => {
                    missing.push(entry.ingredient.name.clone());
                    if let Some(substitute) = suggestion {
                        substitutions.push(SubstitutionSuggestion {
                            original: entry.ingredient.id.clone(),
                            substitute: substitute.to_owned(),
                            available: false,
                        });
                    }
                }
            }
        }

        let total = formulation.len();
        let mut matched =
            (exact as f64).mul_add(weights.exact, substituted as f64 * weights.substitution);
        if matched > 0.0 && total > 1 && vendor.can_combine {
            matched += weights.combination_bonus;
        }
        let score = self.normalize_score(matched, total, exact == total);

        let layered_minutes = if formulation.is_layered() {
            self.config.estimates.layered_minutes
        } else {
            0.0
        };
        let estimated_prep_minutes = (missing.len() as f64).mul_add(
            self.config.estimates.missing_ingredient_minutes,
            vendor.base_prep_minutes,
        ) + layered_minutes;
        let base_price = vendor
            .base_price
            .unwrap_or(self.config.estimates.base_drink_price);

        debug!(
            vendor = %vendor.id,
            score,
            exact,
            substituted,
            missing = missing.len(),
            "Scored vendor"
        );

        MatchResult {
            vendor_id: vendor.id.clone(),
            vendor_name: vendor.name.clone(),
            score,
            missing,
            substitutions,
            substituted,
            estimated_price: round_currency(base_price * vendor.price_multiplier),
            estimated_prep_minutes,
            distance_km: None,
        }
    }

    /// Score every vendor, drop those at or below the threshold, and rank the rest
    ///
    /// Ranking is by descending score; ties go to the nearer vendor when `location` is
    /// given (vendors without a location sort last), otherwise directory order is kept.
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` if `location` or any vendor record is malformed
    pub fn find_matches(
        &self,
        formulation: &Formulation,
        vendors: &[Vendor],
        location: Option<GeoPoint>,
    ) -> EngineResult<MatchOutcome> {
        self.find_matches_avoiding(formulation, vendors, location, &BTreeSet::new())
    }

    /// [`Self::find_matches`] with substitutes restricted as in [`Self::score_avoiding`]
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` if `location` or any vendor record is malformed
    pub fn find_matches_avoiding(
        &self,
        formulation: &Formulation,
        vendors: &[Vendor],
        location: Option<GeoPoint>,
        avoid: &BTreeSet<String>,
    ) -> EngineResult<MatchOutcome> {
        if let Some(origin) = &location {
            origin.validate()?;
        }
        for vendor in vendors {
            vendor.validate()?;
        }

        let threshold = self.config.thresholds.min_score;
        let mut ranked: Vec<MatchResult> = vendors
            .iter()
            .map(|vendor| {
                let mut result = self.score_avoiding(formulation, vendor, avoid);
                result.distance_km = location
                    .as_ref()
                    .zip(vendor.location.as_ref())
                    .map(|(origin, shop)| haversine_km(origin, shop));
                result
            })
            .filter(|result| result.score > threshold)
            .collect();

        ranked.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| by_distance(a, b)));

        info!(
            vendors = vendors.len(),
            qualified = ranked.len(),
            "Ranked vendor matches"
        );

        if ranked.is_empty() {
            Ok(MatchOutcome::NoCompatibleVendor {
                vendors_considered: vendors.len(),
            })
        } else {
            Ok(MatchOutcome::Ranked { matches: ranked })
        }
    }

    fn coverage(
        &self,
        entry: &FormulationEntry,
        vendor: &Vendor,
        avoid: &BTreeSet<String>,
    ) -> Coverage<'a> {
        let category = entry.ingredient.category;
        let id = entry.ingredient.id.as_str();
        if vendor.stocks_any(category, &self.capabilities.tags_for(id)) {
            return Coverage::Exact;
        }

        let mut suggestion = None;
        for substitute in self
            .substitutions
            .substitutes(id)
            .filter(|substitute| !avoid.contains(*substitute))
        {
            if vendor.stocks_any(category, &self.capabilities.tags_for(substitute)) {
                return Coverage::Substitute(substitute);
            }
            suggestion.get_or_insert(substitute);
        }
        Coverage::Missing(suggestion)
    }

    fn normalize_score(&self, matched: f64, total: usize, all_exact: bool) -> u8 {
        if total == 0 || matched <= 0.0 {
            return 0;
        }
        if all_exact {
            return 100;
        }
        let raw = (100.0 * matched / (total as f64 * self.config.weights.exact)).round();
        let ceiling = f64::from(self.config.thresholds.partial_match_ceiling);
        raw.clamp(1.0, ceiling) as u8
    }
}

/// Nearer first; unknown distances after known ones; equal keeps input order
fn by_distance(a: &MatchResult, b: &MatchResult) -> Ordering {
    match (a.distance_km, b.distance_km) {
        (Some(da), Some(db)) => da.total_cmp(&db),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
