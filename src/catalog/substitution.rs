// ABOUTME: Symmetric substitution graph between interchangeable ingredient ids
// ABOUTME: Consulted by the vendor scorer when an exact capability match is missing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

static STANDARD_GRAPH: LazyLock<SubstitutionGraph> = LazyLock::new(|| {
    SubstitutionGraph::new()
        .with_group(&["oat-milk", "almond-milk", "coconut-milk"])
        .with_group(&["honey", "maple-syrup", "agave"])
        .with_pair("chia-seeds", "flax-seeds")
        .with_pair("whey-protein", "pea-protein")
        .with_pair("banana", "mango")
        .with_pair("blueberry", "strawberry")
        .with_pair("spinach", "kale")
        .with_pair("greek-yogurt", "coconut-yogurt")
});

/// Undirected graph of interchangeable ingredients
///
/// Every edge is stored in both directions, so `are_substitutes(a, b)` always equals
/// `are_substitutes(b, a)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionGraph {
    edges: BTreeMap<String, BTreeSet<String>>,
}

impl SubstitutionGraph {
    /// Empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bundled graph
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD_GRAPH
    }

    /// Add a symmetric pair; self-pairs are ignored
    #[must_use]
    pub fn with_pair(mut self, a: &str, b: &str) -> Self {
        if a != b {
            self.edges
                .entry(a.to_owned())
                .or_default()
                .insert(b.to_owned());
            self.edges
                .entry(b.to_owned())
                .or_default()
                .insert(a.to_owned());
        }
        self
    }

    /// Make every member of `ids` a substitute for every other member
    #[must_use]
    pub fn with_group(self, ids: &[&str]) -> Self {
        ids.iter().enumerate().fold(self, |graph, (i, a)| {
            ids.iter().skip(i + 1).fold(graph, |g, b| g.with_pair(a, b))
        })
    }

    /// Substitutes for `id` in lexical order
    pub fn substitutes<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a str> {
        self.edges
            .get(id)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Whether `a` and `b` are directly interchangeable
    #[must_use]
    pub fn are_substitutes(&self, a: &str, b: &str) -> bool {
        self.edges.get(a).is_some_and(|set| set.contains(b))
    }

    /// Every edge once, as `(smaller, larger)` id pairs
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.edges.iter().flat_map(|(a, set)| {
            set.iter()
                .filter(move |b| a.as_str() < b.as_str())
                .map(move |b| (a.as_str(), b.as_str()))
        })
    }
}
