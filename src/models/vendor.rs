// ABOUTME: Vendor (shop) model with capability sets, menu items, and paid enhancements
// ABOUTME: Capability membership is by explicit tag, never by substring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::ingredient::{AllergenTag, IngredientCategory};
use super::profile::HealthGoal;
use crate::errors::{EngineError, EngineResult};

/// WGS84 coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a validated coordinate
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` if latitude is outside [-90, 90] or longitude outside [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> EngineResult<Self> {
        let point = Self {
            latitude,
            longitude,
        };
        point.validate()?;
        Ok(point)
    }

    /// Validate coordinate ranges
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` if either component is out of range or non-finite
    pub fn validate(&self) -> EngineResult<()> {
        if !(-90.0..=90.0).contains(&self.latitude) || !(-180.0..=180.0).contains(&self.longitude)
        {
            return Err(EngineError::invalid_input(format!(
                "coordinate out of range: ({}, {})",
                self.latitude, self.longitude
            )));
        }
        Ok(())
    }
}

/// Item on a vendor's menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Display name
    pub name: String,
    /// Free-text ingredient list
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Retail price
    pub price: f64,
}

impl MenuItem {
    /// Create a menu item
    #[must_use]
    pub fn new(name: impl Into<String>, ingredients: &[&str], price: f64) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.iter().map(|i| (*i).to_owned()).collect(),
            price,
        }
    }
}

/// Optional paid add-on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enhancement {
    /// Enhancement id
    pub id: String,
    /// Display name
    pub name: String,
    /// Add-on price
    pub cost: f64,
    /// Allergen tags
    #[serde(default)]
    pub allergens: BTreeSet<AllergenTag>,
    /// Impact on each goal
    #[serde(default)]
    pub health_impact: BTreeMap<HealthGoal, f64>,
}

impl Enhancement {
    /// Create an enhancement
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, cost: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cost,
            allergens: BTreeSet::new(),
            health_impact: BTreeMap::new(),
        }
    }

    /// Add allergen tags
    #[must_use]
    pub fn with_allergens(mut self, allergens: &[&str]) -> Self {
        self.allergens
            .extend(allergens.iter().map(|a| AllergenTag::normalize(a)));
        self
    }

    /// Set the impact on a goal
    #[must_use]
    pub fn with_impact(mut self, goal: HealthGoal, impact: f64) -> Self {
        self.health_impact.insert(goal, impact);
        self
    }

    /// Impact on a goal (0 when unspecified)
    #[must_use]
    pub fn impact_on(&self, goal: HealthGoal) -> f64 {
        self.health_impact.get(&goal).copied().unwrap_or(0.0)
    }
}

/// Third-party shop able to prepare drinks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    /// Vendor id
    pub id: String,
    /// Display name
    pub name: String,
    /// Capability tags stocked, per category
    #[serde(default)]
    pub capabilities: BTreeMap<IngredientCategory, BTreeSet<String>>,
    /// Can prepare combined / layered drinks
    #[serde(default)]
    pub can_combine: bool,
    /// Base preparation time in minutes
    pub base_prep_minutes: f64,
    /// Price multiplier applied to the base drink price
    pub price_multiplier: f64,
    /// Vendor-specific base drink price
    #[serde(default)]
    pub base_price: Option<f64>,
    /// Shop location
    #[serde(default)]
    pub location: Option<GeoPoint>,
    /// Menu items
    #[serde(default)]
    pub menu: Vec<MenuItem>,
    /// Paid add-ons
    #[serde(default)]
    pub enhancements: Vec<Enhancement>,
}

impl Vendor {
    /// Create a vendor with no capabilities, 5 minute prep and neutral pricing
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capabilities: BTreeMap::new(),
            can_combine: false,
            base_prep_minutes: 5.0,
            price_multiplier: 1.0,
            base_price: None,
            location: None,
            menu: Vec::new(),
            enhancements: Vec::new(),
        }
    }

    /// Declare stocked capability tags for a category
    #[must_use]
    pub fn with_capability(mut self, category: IngredientCategory, tags: &[&str]) -> Self {
        self.capabilities
            .entry(category)
            .or_default()
            .extend(tags.iter().map(|t| (*t).to_owned()));
        self
    }

    /// Set combined-preparation support
    #[must_use]
    pub const fn with_combination(mut self, can_combine: bool) -> Self {
        self.can_combine = can_combine;
        self
    }

    /// Set base prep time
    #[must_use]
    pub const fn with_prep_minutes(mut self, minutes: f64) -> Self {
        self.base_prep_minutes = minutes;
        self
    }

    /// Set price multiplier
    #[must_use]
    pub const fn with_price_multiplier(mut self, multiplier: f64) -> Self {
        self.price_multiplier = multiplier;
        self
    }

    /// Override the base drink price
    #[must_use]
    pub const fn with_base_price(mut self, price: f64) -> Self {
        self.base_price = Some(price);
        self
    }

    /// Set location
    #[must_use]
    pub const fn with_location(mut self, location: GeoPoint) -> Self {
        self.location = Some(location);
        self
    }

    /// Add a menu item
    #[must_use]
    pub fn with_menu_item(mut self, item: MenuItem) -> Self {
        self.menu.push(item);
        self
    }

    /// Add an enhancement
    #[must_use]
    pub fn with_enhancement(mut self, enhancement: Enhancement) -> Self {
        self.enhancements.push(enhancement);
        self
    }

    /// Whether any of `tags` is stocked in `category`
    #[must_use]
    pub fn stocks_any(&self, category: IngredientCategory, tags: &BTreeSet<String>) -> bool {
        self.capabilities
            .get(&category)
            .is_some_and(|stocked| !stocked.is_disjoint(tags))
    }

    /// Validate numeric fields
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` for negative or non-finite prep time, multiplier, prices or
    /// costs, or an out-of-range location
    pub fn validate(&self) -> EngineResult<()> {
        let non_negative = |value: f64| value.is_finite() && value >= 0.0;
        if !non_negative(self.base_prep_minutes) {
            return Err(EngineError::invalid_input(format!(
                "vendor '{}' has invalid prep time {}",
                self.id, self.base_prep_minutes
            )));
        }
        if !non_negative(self.price_multiplier) || !self.base_price.is_none_or(non_negative) {
            return Err(EngineError::invalid_input(format!(
                "vendor '{}' has invalid pricing",
                self.id
            )));
        }
        if let Some(item) = self.menu.iter().find(|item| !non_negative(item.price)) {
            return Err(EngineError::invalid_input(format!(
                "vendor '{}' lists '{}' at invalid price {}",
                self.id, item.name, item.price
            )));
        }
        if let Some(extra) = self.enhancements.iter().find(|e| !non_negative(e.cost)) {
            return Err(EngineError::invalid_input(format!(
                "vendor '{}' offers '{}' at invalid cost {}",
                self.id, extra.id, extra.cost
            )));
        }
        if let Some(location) = &self.location {
            location.validate()?;
        }
        Ok(())
    }
}
