//! Tunable constants for every controller.
//!
//! [`PortfolioConfig::default`] carries the values the page was designed
//! around; a JSON document may override any subset of them.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};
use crate::section::SectionId;

/// Behavior configuration shared by all controllers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    /// Height of the fixed header subtracted from link scroll targets (px)
    pub header_offset: f64,
    /// How far above its top a section already counts as current (px)
    pub active_link_lead: f64,
    /// Scroll offset past which the navbar switches preset (px)
    pub navbar_scroll_threshold: f64,
    /// Distance above the viewport bottom a section must reach to reveal (px)
    pub reveal_margin: f64,
    /// Delay between revealing consecutive children of a section
    pub reveal_stagger_ms: u64,
    /// Hero translation per scrolled pixel
    pub parallax_speed: f64,
    /// Scroll coalescing window
    pub scroll_throttle_ms: u64,
    /// Degrees of rotation per element-size of pointer offset
    pub tilt_intensity: f64,
    /// Pointer is considered idle after this long without movement
    pub pointer_idle_ms: u64,
    /// Duration of the whole-page theme transition
    pub theme_transition_ms: u64,
    /// Viewports wider than this close the mobile menu (px)
    pub mobile_breakpoint: f64,
    /// Sections in document order
    pub sections: Vec<SectionId>,
    /// Visible ratio at which a section counts as intersecting
    pub intersection_threshold: f64,
    /// Root margin handed to the intersection observer
    pub intersection_root_margin: String,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            active_link_lead: 200.0,
            navbar_scroll_threshold: 100.0,
            reveal_margin: 100.0,
            reveal_stagger_ms: 100,
            parallax_speed: 0.5,
            scroll_throttle_ms: 16,
            tilt_intensity: 5.0,
            pointer_idle_ms: 100,
            theme_transition_ms: 500,
            mobile_breakpoint: 768.0,
            sections: SectionId::ALL.to_vec(),
            intersection_threshold: 0.1,
            intersection_root_margin: "-50px 0px".to_string(),
        }
    }
}

impl PortfolioConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json_str(json: &str) -> FolioResult<Self> {
        let config: PortfolioConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the controllers cannot work with.
    pub fn validate(&self) -> FolioResult<()> {
        if self.sections.is_empty() {
            return Err(FolioError::InvalidConfig("section list is empty".into()));
        }
        let mut seen = HashSet::new();
        for section in &self.sections {
            if !seen.insert(section) {
                return Err(FolioError::InvalidConfig(format!(
                    "section '{}' listed twice",
                    section
                )));
            }
        }
        if self.scroll_throttle_ms == 0 {
            return Err(FolioError::InvalidConfig(
                "scroll_throttle_ms must be positive".into(),
            ));
        }
        for (name, value) in [
            ("header_offset", self.header_offset),
            ("active_link_lead", self.active_link_lead),
            ("navbar_scroll_threshold", self.navbar_scroll_threshold),
            ("reveal_margin", self.reveal_margin),
            ("parallax_speed", self.parallax_speed),
            ("tilt_intensity", self.tilt_intensity),
            ("mobile_breakpoint", self.mobile_breakpoint),
            ("intersection_threshold", self.intersection_threshold),
        ] {
            if !value.is_finite() {
                return Err(FolioError::InvalidConfig(format!("{} must be finite", name)));
            }
        }
        Ok(())
    }
}
