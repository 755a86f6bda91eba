#![forbid(unsafe_code)]

//! Policy-as-data configuration for the list engine.
//!
//! Every tunable number the engine uses lives in [`ListPolicy`], so a host
//! can ship a different frame budget or scrollbar look without recompiling.
//!
//! # Loading
//!
//! ```toml
//! # infinilist.toml
//! [layout]
//! default_item_height = 48.0
//!
//! [budget]
//! min_fps = 24.0
//! sample_window_ms = 250
//! ```
//!
//! ```rust,ignore
//! let policy = ListPolicy::from_toml_file("infinilist.toml")?;
//! let policy = ListPolicy::from_json_str(json)?;
//! ```
//!
//! Loaders validate before returning; a policy that fails
//! [`ListPolicy::validate`] is reported as [`PolicyError::Validation`].
//!
//! # Defaults
//!
//! `ListPolicy::default()` reproduces the stock behavior: 40px rows, a
//! 30/60 fps budget sampled every 200ms, a 2px scrollbar with a 10px minimum
//! thumb, and `"Loading..."` placeholders.

#[cfg(feature = "policy-config")]
use std::path::Path;

#[cfg(feature = "policy-config")]
use serde::{Deserialize, Serialize};

use infinilist_core::{Dimension, ElementStyle, FrameMeterConfig, Position};
use web_time::Duration;

/// Type identifier reserved for the trailing load-more row.
pub const LOAD_MORE_TYPE: &str = "$LoadMore";

// ---------------------------------------------------------------------------
// Top-level ListPolicy
// ---------------------------------------------------------------------------

/// All tunables of an [`InfiniteList`](crate::InfiniteList).
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct ListPolicy {
    /// Row sizing.
    pub layout: LayoutPolicy,
    /// Frame budget and degradation thresholds.
    pub budget: BudgetPolicy,
    /// Scrollbar appearance.
    pub scrollbar: ScrollbarPolicy,
    /// Trailing load-more row and placeholder content.
    pub load_more: LoadMorePolicy,
}

impl ListPolicy {
    /// Load from a TOML string.
    #[cfg(feature = "policy-config")]
    pub fn from_toml_str(s: &str) -> Result<Self, PolicyError> {
        let policy: Self = toml::from_str(s).map_err(PolicyError::Toml)?;
        policy.checked()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "policy-config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(PolicyError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "policy-config")]
    pub fn from_json_str(s: &str) -> Result<Self, PolicyError> {
        let policy: Self = serde_json::from_str(s).map_err(PolicyError::Json)?;
        policy.checked()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "policy-config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(PolicyError::Io)?;
        Self::from_json_str(&content)
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the policy
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !(self.layout.default_item_height.is_finite() && self.layout.default_item_height > 0.0)
        {
            errors.push(format!(
                "layout.default_item_height must be a positive number, got {}",
                self.layout.default_item_height
            ));
        }

        let b = &self.budget;
        if !(b.min_fps.is_finite() && b.min_fps >= 0.0) {
            errors.push(format!("budget.min_fps must be >= 0, got {}", b.min_fps));
        }
        if !(b.max_fps.is_finite() && b.max_fps > 0.0) {
            errors.push(format!("budget.max_fps must be > 0, got {}", b.max_fps));
        }
        if b.min_fps > b.max_fps {
            errors.push(format!(
                "budget.min_fps ({}) must not exceed budget.max_fps ({})",
                b.min_fps, b.max_fps
            ));
        }
        if b.sample_window_ms == 0 {
            errors.push("budget.sample_window_ms must be > 0".into());
        }

        let s = &self.scrollbar;
        for (name, value) in [
            ("scrollbar.min_thumb_px", s.min_thumb_px),
            ("scrollbar.width_px", s.width_px),
            ("scrollbar.inset_px", s.inset_px),
            ("scrollbar.border_radius_px", s.border_radius_px),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                errors.push(format!("{name} must be >= 0, got {value}"));
            }
        }
        if !(0.0..=1.0).contains(&s.opacity) {
            errors.push(format!("scrollbar.opacity must be in [0, 1], got {}", s.opacity));
        }

        if self.load_more.type_id.is_empty() {
            errors.push("load_more.type_id must not be empty".into());
        }

        errors
    }

    /// Frame meter parameters derived from the budget section.
    #[must_use]
    pub fn to_frame_meter_config(&self) -> FrameMeterConfig {
        FrameMeterConfig {
            sample_window: Duration::from_millis(self.budget.sample_window_ms),
            min_fps: self.budget.min_fps,
            max_fps: self.budget.max_fps,
        }
    }

    /// Static scrollbar style (everything except the per-render height and
    /// transform).
    #[must_use]
    pub fn scrollbar_base_style(&self) -> ElementStyle {
        let s = &self.scrollbar;
        ElementStyle::new()
            .position(Position::Absolute)
            .top(Dimension::Px(0.0))
            .right(Dimension::Px(0.0))
            .margin_right(Dimension::Px(s.inset_px))
            .opacity(s.opacity)
            .width(Dimension::Px(s.width_px))
            .background_color(s.color.clone())
            .border_radius(Dimension::Px(s.border_radius_px))
    }

    #[cfg(feature = "policy-config")]
    fn checked(self) -> Result<Self, PolicyError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(PolicyError::Validation(errors))
        }
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Row sizing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct LayoutPolicy {
    /// Height used when the caller supplies no height callback, and the
    /// extra scroll room reserved for the load-more row. Default: 40.
    pub default_item_height: f64,
}

impl Default for LayoutPolicy {
    fn default() -> Self {
        Self {
            default_item_height: 40.0,
        }
    }
}

/// Frame budget.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct BudgetPolicy {
    /// Below this rate newly revealed rows get placeholders. Default: 30.
    pub min_fps: f64,
    /// Cap on the measured rate. Default: 60.
    pub max_fps: f64,
    /// Sampling window in milliseconds. Default: 200.
    pub sample_window_ms: u64,
}

impl Default for BudgetPolicy {
    fn default() -> Self {
        Self {
            min_fps: 30.0,
            max_fps: 60.0,
            sample_window_ms: 200,
        }
    }
}

/// Scrollbar appearance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct ScrollbarPolicy {
    /// Minimum thumb height. Default: 10.
    pub min_thumb_px: f64,
    /// Thumb width. Default: 2.
    pub width_px: f64,
    /// Gap to the right edge of the viewport. Default: 3.
    pub inset_px: f64,
    /// Default: 0.3.
    pub opacity: f64,
    /// CSS color. Default: `#333`.
    pub color: String,
    /// Default: 50.
    pub border_radius_px: f64,
}

impl Default for ScrollbarPolicy {
    fn default() -> Self {
        Self {
            min_thumb_px: 10.0,
            width_px: 2.0,
            inset_px: 3.0,
            opacity: 0.3,
            color: "#333".into(),
            border_radius_px: 50.0,
        }
    }
}

/// Load-more row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct LoadMorePolicy {
    /// Type identifier of the load-more row. Default: `$LoadMore`.
    pub type_id: String,
    /// Text painted by the default load-more and busy renderers.
    /// Default: `Loading...`.
    pub placeholder_text: String,
}

impl Default for LoadMorePolicy {
    fn default() -> Self {
        Self {
            type_id: LOAD_MORE_TYPE.into(),
            placeholder_text: "Loading...".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors from loading a [`ListPolicy`].
#[derive(Debug)]
pub enum PolicyError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "policy-config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "policy-config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for PolicyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "policy-config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "policy-config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for PolicyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "policy-config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "policy-config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}
