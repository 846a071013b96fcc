// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::{Deserialize, Serialize};
use seatmap_event_state::drag::DEFAULT_SLOP;
use seatmap_venue::LayoutMetrics;
use seatmap_view::ZoomToggle;

/// Engine configuration.
///
/// Every field has a default, so a partial JSON object is enough:
///
/// ```rust
/// use seatmap::{SeatMapConfig, ZoomToggle};
///
/// let config = SeatMapConfig::from_json(r#"{"zoom_toggle": "one_way", "metrics": {"seat_pitch": 20}}"#)?;
/// assert_eq!(config.zoom_toggle, ZoomToggle::OneWay);
/// assert_eq!(config.metrics.seat_pitch, 20.0);
/// assert_eq!(config.metrics.row_pitch, 15.0);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatMapConfig {
    /// Seat and section spacing.
    pub metrics: LayoutMetrics,
    /// Whether a second double tap zooms back out.
    pub zoom_toggle: ZoomToggle,
    /// Pointer travel, in view units, before a press becomes a drag.
    pub drag_slop: f64,
}

impl Default for SeatMapConfig {
    fn default() -> Self {
        Self {
            metrics: LayoutMetrics::default(),
            zoom_toggle: ZoomToggle::default(),
            drag_slop: DEFAULT_SLOP,
        }
    }
}

impl SeatMapConfig {
    /// Parses a configuration from JSON, filling in defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
