// ABOUTME: Maps canonical ingredient ids to the vendor capability tags that satisfy them
// ABOUTME: Set membership replaces fragile substring matching on ingredient names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

static STANDARD_CAPABILITIES: LazyLock<CapabilityMap> = LazyLock::new(|| {
    CapabilityMap::new()
        .with_tags("whole-milk", &["dairy-milk"])
        .with_tags("greek-yogurt", &["yogurt"])
        .with_tags("coconut-yogurt", &["dairy-free-yogurt"])
        .with_tags("whey-protein", &["whey"])
        .with_tags("maca-powder", &["maca"])
        .with_tags("lions-mane", &["mushroom-blend"])
        .with_tags("cacao-powder", &["cocoa"])
        .with_tags("milk-foam", &["microfoam"])
        .with_tags("acai", &["acai-bowl-base"])
});

/// Canonical ingredient id to vendor capability tags
///
/// An id always satisfies itself; extra tags cover the names vendors commonly
/// declare for the same ingredient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityMap {
    tags: BTreeMap<String, BTreeSet<String>>,
}

impl CapabilityMap {
    /// Map where every id is satisfied only by itself
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bundled map
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD_CAPABILITIES
    }

    /// Add alias tags for an id
    #[must_use]
    pub fn with_tags(mut self, id: &str, tags: &[&str]) -> Self {
        self.tags
            .entry(id.to_owned())
            .or_default()
            .extend(tags.iter().map(|t| (*t).to_owned()));
        self
    }

    /// Capability tags that satisfy `id`, always including `id` itself
    #[must_use]
    pub fn tags_for(&self, id: &str) -> BTreeSet<String> {
        let mut tags = self.tags.get(id).cloned().unwrap_or_default();
        tags.insert(id.to_owned());
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_satisfies_itself() {
        let tags = CapabilityMap::new().tags_for("oat-milk");
        assert_eq!(tags.len(), 1);
        assert!(tags.contains("oat-milk"));
    }

    #[test]
    fn test_aliases_extend_id() {
        let tags = CapabilityMap::standard().tags_for("whole-milk");
        assert!(tags.contains("whole-milk"));
        assert!(tags.contains("dairy-milk"));
    }
}
