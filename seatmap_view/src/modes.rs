// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The two zoom levels a seat map viewport supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ZoomLevel {
    /// Scale equals [`crate::Viewport::scale_to_fit`] and tracks it across resizes.
    #[default]
    Fitted,
    /// Scale is `1.0`: content is drawn at its natural size.
    Full,
}

/// How [`crate::Viewport::toggle_zoom`] behaves once the view is at
/// [`ZoomLevel::Full`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ZoomToggle {
    /// Toggling alternates between fitted and full zoom.
    #[default]
    Symmetric,
    /// Toggling only zooms in. Once at full zoom, further toggles are no-ops
    /// and the view stays zoomed until the host resets it.
    OneWay,
}
