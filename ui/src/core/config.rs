//! Site-wide tunables. Every timing or threshold the components rely on lives
//! here so a launcher can override them in one place.

use serde::{Deserialize, Serialize};

use crate::catalog::CarouselConfig;
use crate::core::reveal::RevealConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Vertical scroll offset (px) past which the navbar gets `navbar-scrolled`.
    pub navbar_scroll_threshold: f64,
    /// Delay of the simulated contact submission.
    pub submit_delay_ms: u64,
    /// Lifetime of a notification banner that nobody dismissed.
    pub notification_ttl_ms: u64,
    /// Settle time before a burst of resize events recomputes the carousel.
    pub resize_debounce_ms: u64,
    pub reveal: RevealConfig,
    pub carousel: CarouselConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            navbar_scroll_threshold: 50.0,
            submit_delay_ms: 2_000,
            notification_ttl_ms: 5_000,
            resize_debounce_ms: 250,
            reveal: RevealConfig::default(),
            carousel: CarouselConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse overrides from JSON; omitted fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let cfg = SiteConfig::from_json("{}").unwrap();
        assert_eq!(cfg, SiteConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_fields() {
        let cfg = SiteConfig::from_json(r#"{ "submit_delay_ms": 10, "reveal": { "threshold": 0.5 } }"#)
            .unwrap();
        assert_eq!(cfg.submit_delay_ms, 10);
        assert_eq!(cfg.notification_ttl_ms, 5_000);
        assert_eq!(cfg.reveal.threshold, 0.5);
        assert_eq!(cfg.reveal.root_margin, "0px 0px -50px 0px");
        assert_eq!(cfg.carousel.autoplay.delay_ms, 6_000);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SiteConfig::from_json("{ not json").is_err());
    }
}
