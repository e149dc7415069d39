#![forbid(unsafe_code)]

//! Tuning knobs for the navigation controller.
//!
//! Defaults match the page as it ships: an 80px fixed nav bar, a 20px
//! sampling lookahead, and the 768px `md` breakpoint separating the mobile
//! layout from the desktop one. Hosts may override any field from JSON;
//! missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// Navigation controller configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Height of the fixed navigation bar, in CSS pixels.
    ///
    /// Subtracted from scroll destinations so a section's heading is not
    /// hidden under the bar, and added to the sampling probe.
    pub nav_height: f64,

    /// Extra lookahead added to the probe offset when sampling.
    pub probe_lookahead: f64,

    /// Viewport width at or above which the layout is wide (desktop).
    pub wide_breakpoint: f64,

    /// Maximum `tracing` level emitted by the host logger.
    pub log_level: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            nav_height: 80.0,
            probe_lookahead: 20.0,
            wide_breakpoint: 768.0,
            log_level: "info".to_owned(),
        }
    }
}

impl NavConfig {
    /// Parse a JSON object, filling omitted fields with defaults, and validate it.
    pub fn from_json(json: &str) -> Result<Self, NavError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| NavError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_nav_height(mut self, nav_height: f64) -> Self {
        self.nav_height = nav_height;
        self
    }

    #[must_use]
    pub fn with_probe_lookahead(mut self, probe_lookahead: f64) -> Self {
        self.probe_lookahead = probe_lookahead;
        self
    }

    #[must_use]
    pub fn with_wide_breakpoint(mut self, wide_breakpoint: f64) -> Self {
        self.wide_breakpoint = wide_breakpoint;
        self
    }

    #[must_use]
    pub fn with_log_level(mut self, log_level: impl Into<String>) -> Self {
        self.log_level = log_level.into();
        self
    }

    /// Check ranges: offsets finite and non-negative, breakpoint positive,
    /// log level one `tracing` understands.
    pub fn validate(&self) -> Result<(), NavError> {
        non_negative("nav_height", self.nav_height)?;
        non_negative("probe_lookahead", self.probe_lookahead)?;
        if !(self.wide_breakpoint.is_finite() && self.wide_breakpoint > 0.0) {
            return Err(NavError::InvalidConfig(format!(
                "wide_breakpoint must be positive, got {}",
                self.wide_breakpoint
            )));
        }
        self.level().map(|_| ())
    }

    /// The configured log level as a `tracing` level.
    pub fn level(&self) -> Result<tracing::Level, NavError> {
        self.log_level
            .parse()
            .map_err(|_| NavError::InvalidConfig(format!("unknown log level {:?}", self.log_level)))
    }

    /// Classify a viewport width.
    #[must_use]
    pub fn layout_class(&self, viewport_width: f64) -> LayoutClass {
        if viewport_width >= self.wide_breakpoint {
            LayoutClass::Wide
        } else {
            LayoutClass::Narrow
        }
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), NavError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(NavError::InvalidConfig(format!(
            "{field} must be a non-negative number, got {value}"
        )))
    }
}

/// Responsive layout class of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutClass {
    /// Mobile layout: nav links live in the overlay menu.
    Narrow,
    /// Desktop layout: nav links are inline, the overlay menu never shows.
    Wide,
}
