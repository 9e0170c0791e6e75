// Copyright 2025 the Scalable View Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

/// Viewport and content dimensions, in device pixels.
///
/// Geometry is *resolved* only when all four dimensions are positive and
/// finite. Hosts commonly report a zero-sized viewport before layout has
/// completed; that is not an error, it just means nothing can be computed yet.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportGeometry {
    /// Size of the viewport the content is drawn into.
    pub viewport: Size,
    /// Native size of the content (bitmap).
    pub content: Size,
}

impl ViewportGeometry {
    /// Creates geometry from a viewport and content size.
    #[must_use]
    pub fn new(viewport: Size, content: Size) -> Self {
        Self { viewport, content }
    }

    /// Returns `true` when every dimension is positive and finite.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        is_positive(self.viewport) && is_positive(self.content)
    }
}

fn is_positive(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}

/// Scale anchors and centering derived from a [`ViewportGeometry`].
///
/// The content is positioned at its native size, centered in the viewport by
/// [`Layout::center_offset`], and the whole scene is then scaled about the
/// viewport center. Keeping those two steps apart means the centering never
/// depends on the current zoom level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    geometry: ViewportGeometry,
    fit_scale: f64,
    magnified_scale: f64,
    center_offset: Vec2,
}

impl Layout {
    /// Computes the layout for `geometry`, magnifying by `magnify_factor`.
    ///
    /// The axis whose aspect ratio constrains the fit decides both anchors:
    /// - Content wider than the viewport ratio fits by width, and magnifies
    ///   until its height covers the viewport, times `magnify_factor`.
    /// - Otherwise it fits by height and magnifies against the width.
    ///
    /// Returns `None` while the geometry is unresolved.
    #[must_use]
    pub fn compute(geometry: ViewportGeometry, magnify_factor: f64) -> Option<Self> {
        if !geometry.is_resolved() {
            return None;
        }
        let ViewportGeometry { viewport, content } = geometry;
        let content_ratio = content.width / content.height;
        let viewport_ratio = viewport.width / viewport.height;

        let (fit_scale, magnified_scale) = if content_ratio > viewport_ratio {
            (
                viewport.width / content.width,
                viewport.height / content.height * magnify_factor,
            )
        } else {
            (
                viewport.height / content.height,
                viewport.width / content.width * magnify_factor,
            )
        };

        let center_offset = Vec2::new(
            (viewport.width - content.width) / 2.0,
            (viewport.height - content.height) / 2.0,
        );

        Some(Self {
            geometry,
            fit_scale,
            magnified_scale,
            center_offset,
        })
    }

    /// The geometry this layout was computed from.
    #[must_use]
    pub fn geometry(&self) -> ViewportGeometry {
        self.geometry
    }

    /// Scale at which the content exactly fits its constraining axis.
    #[must_use]
    pub fn fit_scale(&self) -> f64 {
        self.fit_scale
    }

    /// The "zoomed in" scale reached by a double-tap.
    #[must_use]
    pub fn magnified_scale(&self) -> f64 {
        self.magnified_scale
    }

    /// Offset that centers the unscaled content in the viewport.
    #[must_use]
    pub fn center_offset(&self) -> Vec2 {
        self.center_offset
    }

    /// Center of the viewport; the pivot for all scaling.
    #[must_use]
    pub fn viewport_center(&self) -> Point {
        let viewport = self.geometry.viewport;
        Point::new(viewport.width / 2.0, viewport.height / 2.0)
    }

    /// Interpolates between the fit and magnified scales.
    ///
    /// `progress` is clamped into `[0, 1]`.
    #[must_use]
    pub fn scale_at(&self, progress: f64) -> f64 {
        let t = progress.clamp(0.0, 1.0);
        self.fit_scale + (self.magnified_scale - self.fit_scale) * t
    }

    /// Largest pan offset magnitude allowed on each axis at `scale`.
    ///
    /// This is half of the amount by which the scaled content overflows the
    /// viewport. An axis that does not overflow has a limit of exactly zero.
    #[must_use]
    pub fn pan_limit(&self, scale: f64) -> Vec2 {
        let ViewportGeometry { viewport, content } = self.geometry;
        Vec2::new(
            ((content.width * scale - viewport.width) / 2.0).max(0.0),
            ((content.height * scale - viewport.height) / 2.0).max(0.0),
        )
    }

    /// Inclusive pan bounds at the magnified scale.
    #[must_use]
    pub fn magnified_pan_bounds(&self) -> Rect {
        let limit = self.pan_limit(self.magnified_scale);
        Rect::new(-limit.x, -limit.y, limit.x, limit.y)
    }
}

/// Clamps `offset` into `[-limit, limit]` on each axis.
pub(crate) fn clamp_pan(offset: Vec2, limit: Vec2) -> Vec2 {
    Vec2::new(
        offset.x.clamp(-limit.x, limit.x),
        offset.y.clamp(-limit.y, limit.y),
    )
}
