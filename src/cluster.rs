//! Theme clustering of the filtered verse set.
//!
//! A verse joins one cluster per theme it carries, so the sum of cluster
//! sizes is at least the verse count. Verses with no theme at all land in a
//! default cluster instead of being dropped.

use std::collections::HashMap;

use crate::models::{Cluster, Verse};

/// Cluster for verses that carry no theme tags.
pub const DEFAULT_THEME: &str = "General Wisdom";

/// Group verses by theme. Cluster relevance is the max relevance of its
/// members; clusters come back sorted by relevance, strongest first.
pub fn cluster_verses(verses: &[Verse]) -> Vec<Cluster> {
    let mut by_theme: HashMap<String, Cluster> = HashMap::new();

    for verse in verses {
        let names: Vec<String> = if verse.themes.is_empty() {
            vec![DEFAULT_THEME.to_string()]
        } else {
            verse.themes.iter().map(|t| t.name.clone()).collect()
        };

        for name in names {
            let cluster = by_theme.entry(name.clone()).or_insert_with(|| Cluster {
                theme: name,
                relevance: 0.0,
                verses: Vec::new(),
            });
            cluster.relevance = cluster.relevance.max(verse.relevance);
            cluster.verses.push(verse.clone());
        }
    }

    let mut clusters: Vec<Cluster> = by_theme.into_values().collect();
    clusters.sort_by(|a, b| {
        b.relevance
            .partial_cmp(&a.relevance)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.theme.cmp(&b.theme))
    });

    tracing::debug!("Clustered {} verses into {} themes", verses.len(), clusters.len());
    clusters
}
