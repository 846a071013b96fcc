// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::modes::{ZoomLevel, ZoomToggle};

/// Returns the rectangle of offsets a drag may move content to.
///
/// - Horizontally the offset lies in
///   `[container.width / 2 - content_width * scale, container.width / 2]`, so
///   the content's right edge can reach the middle of the view but never pass it.
/// - Vertically the offset lies in `[-container.height / 2, container.height / 2]`.
///
/// The rectangle's `x0`/`y0` are the lower bounds and `x1`/`y1` the upper ones.
#[must_use]
pub fn offset_bounds(scale: f64, container: Size, content_width: f64) -> Rect {
    let half_w = container.width / 2.0;
    let half_h = container.height / 2.0;
    Rect::new(
        half_w - content_width * scale,
        -half_h,
        half_w,
        half_h,
    )
}

/// Clamps a proposed drag offset into [`offset_bounds`].
///
/// Pure function of its inputs: offsets already inside the bounds come back
/// unchanged, anything else is pulled onto the nearest edge. A NaN component
/// lands on the lower bound.
#[must_use]
pub fn clamp_offset(proposed: Vec2, scale: f64, container: Size, content_width: f64) -> Vec2 {
    let bounds = offset_bounds(scale, container, content_width);
    Vec2::new(
        proposed.x.max(bounds.x0).min(bounds.x1),
        proposed.y.max(bounds.y0).min(bounds.y1),
    )
}

/// Viewport over a laid-out seat map.
///
/// `Viewport` owns the measured container size, the content width at scale
/// 1, and the derived scale-to-fit. It is a two-state machine over
/// [`ZoomLevel`]: at [`ZoomLevel::Fitted`] the scale follows
/// `scale_to_fit`, at [`ZoomLevel::Full`] it is pinned to `1.0`.
///
/// The fit matches the content **width** to the container **height**, so a
/// wide map fills the height of the view and is panned horizontally.
///
/// Mapping between spaces is `view = world * scale + offset`.
#[derive(Clone, Debug)]
pub struct Viewport {
    container: Size,
    content_width: f64,
    scale_to_fit: f64,
    level: ZoomLevel,
    toggle: ZoomToggle,
    offset: Vec2,
    world_to_view: Affine,
    view_to_world: Affine,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Creates an unmeasured viewport.
    ///
    /// - Container size and content width are zero, so no fit is computed yet.
    /// - `scale_to_fit` starts at `1.0` and the level is [`ZoomLevel::Fitted`].
    /// - The toggle policy is [`ZoomToggle::Symmetric`].
    #[must_use]
    pub fn new() -> Self {
        let mut vp = Self {
            container: Size::ZERO,
            content_width: 0.0,
            scale_to_fit: 1.0,
            level: ZoomLevel::Fitted,
            toggle: ZoomToggle::default(),
            offset: Vec2::ZERO,
            world_to_view: Affine::IDENTITY,
            view_to_world: Affine::IDENTITY,
        };
        vp.rebuild_transforms();
        vp
    }

    /// Returns a viewport using the given toggle policy.
    #[must_use]
    pub fn with_zoom_toggle(mut self, toggle: ZoomToggle) -> Self {
        self.toggle = toggle;
        self
    }

    /// Returns the measured container size.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container
    }

    /// Records a new container size and refits.
    ///
    /// Returns `false` without recomputing anything if the size is unchanged.
    pub fn set_container_size(&mut self, size: Size) -> bool {
        if self.container == size {
            return false;
        }
        self.container = size;
        self.refit();
        true
    }

    /// Returns the bounding width of the content at scale 1.
    #[must_use]
    pub fn content_width(&self) -> f64 {
        self.content_width
    }

    /// Records the bounding width of the laid-out content and refits.
    ///
    /// Returns `false` if the width is unchanged.
    pub fn set_content_width(&mut self, width: f64) -> bool {
        if self.content_width == width {
            return false;
        }
        self.content_width = width;
        self.refit();
        true
    }

    /// Returns the most recently computed scale-to-fit.
    ///
    /// While the container or content is unmeasured this keeps its last valid
    /// value (initially `1.0`).
    #[must_use]
    pub fn scale_to_fit(&self) -> f64 {
        self.scale_to_fit
    }

    /// Returns the scale currently applied to the content.
    #[must_use]
    pub fn scale(&self) -> f64 {
        match self.level {
            ZoomLevel::Fitted => self.scale_to_fit,
            ZoomLevel::Full => 1.0,
        }
    }

    /// Returns the current zoom level.
    #[must_use]
    pub fn level(&self) -> ZoomLevel {
        self.level
    }

    /// Returns the toggle policy.
    #[must_use]
    pub fn zoom_toggle(&self) -> ZoomToggle {
        self.toggle
    }

    /// Sets the toggle policy.
    pub fn set_zoom_toggle(&mut self, toggle: ZoomToggle) {
        self.toggle = toggle;
    }

    /// Moves to `level`, re-clamping the offset for the new scale.
    pub fn set_level(&mut self, level: ZoomLevel) {
        if self.level == level {
            return;
        }
        self.level = level;
        self.reclamp();
    }

    /// Handles a double click or double tap.
    ///
    /// Fitted always goes to full. Full goes back to fitted under
    /// [`ZoomToggle::Symmetric`] and stays put under [`ZoomToggle::OneWay`].
    /// Returns `true` if the level changed.
    pub fn toggle_zoom(&mut self) -> bool {
        let next = match (self.level, self.toggle) {
            (ZoomLevel::Fitted, _) => ZoomLevel::Full,
            (ZoomLevel::Full, ZoomToggle::Symmetric) => ZoomLevel::Fitted,
            (ZoomLevel::Full, ZoomToggle::OneWay) => return false,
        };
        self.set_level(next);
        true
    }

    /// Returns the current drag offset in view coordinates.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns the allowed offset range for the current scale and container.
    #[must_use]
    pub fn offset_bounds(&self) -> Rect {
        offset_bounds(self.scale(), self.container, self.content_width)
    }

    /// Moves the content to `proposed`, clamped into [`Viewport::offset_bounds`].
    ///
    /// Returns the offset actually applied.
    pub fn drag_to(&mut self, proposed: Vec2) -> Vec2 {
        let clamped = clamp_offset(proposed, self.scale(), self.container, self.content_width);
        if clamped != self.offset {
            self.offset = clamped;
            self.rebuild_transforms();
        }
        clamped
    }

    /// Converts a world-space point into view coordinates.
    #[must_use]
    pub fn world_to_view(&self, pt: Point) -> Point {
        self.world_to_view * pt
    }

    /// Converts a view-space point into world coordinates.
    #[must_use]
    pub fn view_to_world(&self, pt: Point) -> Point {
        self.view_to_world * pt
    }

    /// Returns the world-space rectangle currently visible in the container.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        let p0 = self.view_to_world(Point::ZERO);
        let p1 = self.view_to_world(Point::new(self.container.width, self.container.height));
        Rect::from_points(p0, p1)
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            container: self.container,
            content_width: self.content_width,
            scale_to_fit: self.scale_to_fit,
            scale: self.scale(),
            level: self.level,
            toggle: self.toggle,
            offset: self.offset,
            offset_bounds: self.offset_bounds(),
        }
    }

    /// Recomputes `scale_to_fit` from the current measurements, then
    /// re-clamps the offset.
    ///
    /// The fit keeps its last valid value while either the container height
    /// or the content width is not a positive finite number.
    fn refit(&mut self) {
        let height = self.container.height;
        let width = self.content_width;
        if height.is_finite() && width.is_finite() && height > 0.0 && width > 0.0 {
            let fit = height / width;
            if fit.is_finite() && fit > 0.0 {
                self.scale_to_fit = fit;
            }
        }
        self.reclamp();
    }

    fn reclamp(&mut self) {
        self.offset = clamp_offset(self.offset, self.scale(), self.container, self.content_width);
        self.rebuild_transforms();
    }

    fn rebuild_transforms(&mut self) {
        self.world_to_view = Affine::translate(self.offset) * Affine::scale(self.scale());
        self.view_to_world = self.world_to_view.inverse();
    }
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Measured container size.
    pub container: Size,
    /// Content width at scale 1.
    pub content_width: f64,
    /// Last valid scale-to-fit.
    pub scale_to_fit: f64,
    /// Scale currently applied.
    pub scale: f64,
    /// Current zoom level.
    pub level: ZoomLevel,
    /// Toggle policy.
    pub toggle: ZoomToggle,
    /// Current drag offset.
    pub offset: Vec2,
    /// Allowed offset range.
    pub offset_bounds: Rect,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::{Viewport, ZoomLevel, ZoomToggle, clamp_offset};

    fn within(offset: Vec2, bounds: Rect) -> bool {
        (bounds.x0..=bounds.x1).contains(&offset.x) && (bounds.y0..=bounds.y1).contains(&offset.y)
    }

    fn measured(container: Size, content_width: f64) -> Viewport {
        let mut vp = Viewport::new();
        vp.set_content_width(content_width);
        vp.set_container_size(container);
        vp
    }

    #[test]
    fn fit_matches_content_width_to_container_height() {
        let vp = measured(Size::new(500.0, 500.0), 1000.0);
        assert_eq!(vp.scale_to_fit(), 0.5);
        assert_eq!(vp.scale(), 0.5);
        assert_eq!(vp.level(), ZoomLevel::Fitted);
    }

    #[test]
    fn toggle_goes_full_then_back_when_symmetric() {
        let mut vp = measured(Size::new(500.0, 500.0), 1000.0);
        assert!(vp.toggle_zoom());
        assert_eq!(vp.scale(), 1.0);
        assert!(vp.toggle_zoom());
        assert_eq!(vp.scale(), 0.5);
    }

    #[test]
    fn one_way_toggle_stays_at_full() {
        let mut vp =
            measured(Size::new(500.0, 500.0), 1000.0).with_zoom_toggle(ZoomToggle::OneWay);
        assert!(vp.toggle_zoom());
        assert!(!vp.toggle_zoom());
        assert_eq!(vp.level(), ZoomLevel::Full);
        assert_eq!(vp.scale(), 1.0);
    }

    #[test]
    fn resize_tracks_fit_only_while_fitted() {
        let mut vp = measured(Size::new(500.0, 500.0), 1000.0);
        vp.set_container_size(Size::new(500.0, 800.0));
        assert_eq!(vp.scale(), 0.8);

        vp.toggle_zoom();
        vp.set_container_size(Size::new(500.0, 300.0));
        assert_eq!(vp.scale_to_fit(), 0.3);
        assert_eq!(vp.scale(), 1.0);
    }

    #[test]
    fn unmeasured_inputs_defer_the_fit() {
        let mut vp = Viewport::new();
        vp.set_container_size(Size::new(500.0, 500.0));
        assert_eq!(vp.scale_to_fit(), 1.0);

        let mut vp = measured(Size::new(500.0, 500.0), 1000.0);
        vp.set_container_size(Size::new(500.0, 0.0));
        assert_eq!(vp.scale_to_fit(), 0.5);
        vp.set_content_width(0.0);
        assert_eq!(vp.scale_to_fit(), 0.5);
        vp.set_content_width(f64::INFINITY);
        assert!(vp.scale().is_finite());
    }

    #[test]
    fn unchanged_measurements_report_no_change() {
        let mut vp = measured(Size::new(400.0, 300.0), 600.0);
        assert!(!vp.set_container_size(Size::new(400.0, 300.0)));
        assert!(!vp.set_content_width(600.0));
    }

    #[test]
    fn clamp_offset_pins_each_axis() {
        let container = Size::new(500.0, 500.0);
        let clamped = clamp_offset(Vec2::new(1_000.0, -1_000.0), 0.5, container, 1000.0);
        assert_eq!(clamped, Vec2::new(250.0, -250.0));

        let clamped = clamp_offset(Vec2::new(-1_000.0, 1_000.0), 0.5, container, 1000.0);
        assert_eq!(clamped, Vec2::new(-250.0, 250.0));
    }

    #[test]
    fn zooming_in_widens_the_horizontal_range_and_zooming_out_reclamps() {
        let mut vp = measured(Size::new(500.0, 500.0), 1000.0);
        vp.toggle_zoom();
        assert_eq!(vp.drag_to(Vec2::new(-600.0, 0.0)), Vec2::new(-600.0, 0.0));

        // Back at 0.5 the lower bound is 250 - 500 = -250.
        vp.toggle_zoom();
        assert_eq!(vp.offset(), Vec2::new(-250.0, 0.0));
    }

    #[test]
    fn world_view_roundtrip_uses_offset_and_scale() {
        let mut vp = measured(Size::new(500.0, 500.0), 1000.0);
        vp.drag_to(Vec2::new(10.0, 20.0));

        let world = Point::new(100.0, 40.0);
        let view = vp.world_to_view(world);
        assert_eq!(view, Point::new(60.0, 40.0));
        let back = vp.view_to_world(view);
        assert!((back.x - world.x).abs() < 1e-9);
        assert!((back.y - world.y).abs() < 1e-9);

        // View origin maps to (-10 / 0.5, -20 / 0.5); the 500 x 500 container
        // spans 1000 world units.
        let visible = vp.visible_world_rect();
        assert_eq!(visible, Rect::new(-20.0, -40.0, 980.0, 960.0));
    }

    #[test]
    fn deferred_fit_still_reclamps_the_offset() {
        let mut vp = measured(Size::new(500.0, 500.0), 1000.0);
        assert_eq!(vp.drag_to(Vec2::new(-1_000.0, 1_000.0)), Vec2::new(-250.0, 250.0));

        vp.set_container_size(Size::new(500.0, 0.0));
        assert_eq!(vp.scale_to_fit(), 0.5);
        assert!(within(vp.offset(), vp.offset_bounds()));
        assert_eq!(vp.offset(), Vec2::new(-250.0, 0.0));

        vp.set_content_width(0.0);
        assert_eq!(vp.scale_to_fit(), 0.5);
        assert!(within(vp.offset(), vp.offset_bounds()));
        assert_eq!(vp.offset(), Vec2::new(250.0, 0.0));
    }

    #[test]
    fn debug_info_reflects_state() {
        let mut vp = measured(Size::new(500.0, 500.0), 1000.0);
        vp.toggle_zoom();
        let info = vp.debug_info();
        assert_eq!(info.level, ZoomLevel::Full);
        assert_eq!(info.scale, 1.0);
        assert_eq!(info.scale_to_fit, 0.5);
        assert!(info.offset_bounds.x0 <= info.offset_bounds.x1);
    }
}
