//! Entrance-animation bookkeeping.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Class added to an element the first time it scrolls into view.
pub const APPEARED_CLASS: &str = "fade-in-up";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    /// Margin applied to the viewport before intersecting (CSS syntax).
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

/// Remembers which elements already played their animation during this
/// page view.
#[derive(Debug, Default, Clone)]
pub struct RevealTracker {
    appeared: HashSet<String>,
}

impl RevealTracker {
    /// Returns `true` exactly once per id: the caller should animate and
    /// stop observing.
    pub fn mark_visible(&mut self, id: &str) -> bool {
        self.appeared.insert(id.to_string())
    }

    pub fn has_appeared(&self, id: &str) -> bool {
        self.appeared.contains(id)
    }
}
