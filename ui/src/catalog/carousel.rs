//! The slide carousel behind the services page.
//!
//! [`SlideWidget`] is the narrow surface the catalog controller drives;
//! [`CarouselState`] is the widget itself: position, looping, per-view
//! layout and breakpoints. Rendering lives in the catalog view.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// What the catalog controller needs from a carousel.
pub trait SlideWidget {
    /// Recompute internal layout for the slides currently visible
    /// (indices into the full slide collection, in order).
    fn update(&mut self, visible: &[usize]);
    /// Adjust per-view layout to a new viewport width.
    fn resize(&mut self, viewport_width: f64);
    /// Jump to the `position`-th visible slide.
    fn slide_to(&mut self, position: usize);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoplayConfig {
    pub enabled: bool,
    pub delay_ms: u64,
    /// When `false`, user navigation does not stop autoplay.
    pub disable_on_interaction: bool,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            delay_ms: 6_000,
            disable_on_interaction: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub enabled: bool,
    pub clickable: bool,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            clickable: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakpointConfig {
    pub slides_per_view: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub navigation: bool,
    pub pagination: PaginationConfig,
    pub autoplay: AutoplayConfig,
    #[serde(rename = "loop")]
    pub looped: bool,
    pub slides_per_view: u32,
    /// Gap between slides in px.
    pub space_between: u32,
    /// Overrides keyed by minimum viewport width (px).
    pub breakpoints: BTreeMap<u32, BreakpointConfig>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        let one = BreakpointConfig { slides_per_view: 1 };
        Self {
            navigation: true,
            pagination: PaginationConfig::default(),
            autoplay: AutoplayConfig::default(),
            looped: true,
            slides_per_view: 1,
            space_between: 30,
            breakpoints: BTreeMap::from([(768, one), (1024, one)]),
        }
    }
}

impl CarouselConfig {
    /// Slides per view at `width`: the largest breakpoint not above it wins.
    pub fn slides_per_view_at(&self, width: f64) -> u32 {
        self.breakpoints
            .iter()
            .filter(|(min, _)| f64::from(**min) <= width)
            .map(|(_, bp)| bp.slides_per_view)
            .last()
            .unwrap_or(self.slides_per_view)
            .max(1)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    config: CarouselConfig,
    visible: Vec<usize>,
    position: usize,
    slides_per_view: u32,
    autoplay_running: bool,
    layout_passes: u32,
}

impl CarouselState {
    pub fn new(config: CarouselConfig) -> Self {
        let slides_per_view = config.slides_per_view.max(1);
        let autoplay_running = config.autoplay.enabled;
        Self {
            config,
            visible: Vec::new(),
            position: 0,
            slides_per_view,
            autoplay_running,
            layout_passes: 0,
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    pub fn is_visible(&self, slide: usize) -> bool {
        self.visible.contains(&slide)
    }

    /// Position among the visible slides.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Index (into the full collection) of the slide in front.
    pub fn current_slide(&self) -> Option<usize> {
        self.visible.get(self.position).copied()
    }

    pub fn slides_per_view(&self) -> u32 {
        self.slides_per_view
    }

    /// How many times layout was recomputed.
    pub fn layout_passes(&self) -> u32 {
        self.layout_passes
    }

    pub fn autoplay_running(&self) -> bool {
        self.autoplay_running
    }

    /// Percentage part of the track offset. One step is
    /// `(100% + space_between) / slides_per_view`.
    pub fn track_offset_percent(&self) -> f64 {
        self.position as f64 * 100.0 / f64::from(self.slides_per_view)
    }

    /// Pixel part of the track offset: the gaps in front of the current slide.
    pub fn track_offset_px(&self) -> f64 {
        self.position as f64 * f64::from(self.config.space_between)
            / f64::from(self.slides_per_view)
    }

    /// `transform` value that puts the current slide at the left edge.
    pub fn track_transform(&self) -> String {
        format!(
            "translateX(calc(-{}% - {}px))",
            self.track_offset_percent(),
            self.track_offset_px()
        )
    }

    /// `flex-basis` of one slide so that `slides_per_view` slides and the gaps
    /// between them fill the viewport exactly.
    pub fn slide_basis(&self) -> String {
        let spv = self.slides_per_view;
        let gaps = (spv - 1) * self.config.space_between;
        format!("calc((100% - {gaps}px) / {spv})")
    }

    /// Timer-driven advance; ignored once autoplay was stopped.
    pub fn autoplay_tick(&mut self) {
        if self.autoplay_running {
            self.step_forward();
        }
    }

    /// User-driven "next" arrow.
    pub fn next(&mut self) {
        self.note_interaction();
        self.step_forward();
    }

    /// User-driven "previous" arrow.
    pub fn prev(&mut self) {
        self.note_interaction();
        let count = self.visible.len();
        if count == 0 {
            return;
        }
        self.position = match self.position {
            0 if self.config.looped => count - 1,
            0 => 0,
            p => p - 1,
        };
    }

    /// User clicked a pagination bullet.
    pub fn select(&mut self, position: usize) {
        if !self.config.pagination.clickable {
            return;
        }
        self.note_interaction();
        self.slide_to(position);
    }

    fn step_forward(&mut self) {
        let count = self.visible.len();
        if count == 0 {
            return;
        }
        self.position = if self.position + 1 < count {
            self.position + 1
        } else if self.config.looped {
            0
        } else {
            self.position
        };
    }

    fn note_interaction(&mut self) {
        if self.config.autoplay.disable_on_interaction {
            self.autoplay_running = false;
        }
    }
}

impl SlideWidget for CarouselState {
    fn update(&mut self, visible: &[usize]) {
        self.visible = visible.to_vec();
        if self.position >= self.visible.len() {
            self.position = 0;
        }
        self.layout_passes = self.layout_passes.saturating_add(1);
    }

    fn resize(&mut self, viewport_width: f64) {
        self.slides_per_view = self.config.slides_per_view_at(viewport_width);
    }

    fn slide_to(&mut self, position: usize) {
        if position < self.visible.len() {
            self.position = position;
        }
    }
}
