// Copyright 2025 the Scalable View Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::{Affine, Size, Vec2};

use crate::animation::ScaleAnimation;
use crate::config::{ConfigError, ZoomConfig};
use crate::gesture::GestureEvent;
use crate::layout::{Layout, ViewportGeometry, clamp_pan};
use crate::momentum::Momentum;

/// Coarse state of a [`ScalableView`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewPhase {
    /// Settled at the fit scale.
    Fit,
    /// Settled at the magnified scale.
    Magnified,
    /// Scale progress is moving toward the target of
    /// [`ScalableView::is_magnified`].
    Animating,
}

/// Interaction engine for a zoomable image.
///
/// `ScalableView` owns the scale progress, pan offset and magnified flag of a
/// single piece of content shown in a viewport. The host feeds it gesture
/// signals, calls [`advance`](Self::advance) once per frame while it reports
/// activity, and paints the content with [`current_transform`](Self::current_transform).
///
/// The pan offset is clamped to the overflow of the content at the *live*
/// scale. Once magnified this is the magnified overflow; while zooming out the
/// limit shrinks with the scale, so the content recenters smoothly and the
/// offset is exactly zero when the fit scale is reached.
///
/// Nothing is computed until both the viewport and the content have positive
/// dimensions; until then gestures are ignored and the transform is the
/// identity.
#[derive(Clone, Debug)]
pub struct ScalableView {
    config: ZoomConfig,
    geometry: ViewportGeometry,
    layout: Option<Layout>,
    animation: ScaleAnimation,
    is_magnified: bool,
    pan: Vec2,
    fling: Option<Momentum>,
    revision: u64,
    needs_redraw: bool,
}

impl Default for ScalableView {
    fn default() -> Self {
        Self::new()
    }
}

impl ScalableView {
    /// Creates a view with the default [`ZoomConfig`].
    #[must_use]
    pub fn new() -> Self {
        Self::from_valid_config(ZoomConfig::default())
    }

    /// Creates a view with `config`, rejecting unusable values.
    pub fn with_config(config: ZoomConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: ZoomConfig) -> Self {
        Self {
            config,
            geometry: ViewportGeometry::default(),
            layout: None,
            animation: ScaleAnimation::default(),
            is_magnified: false,
            pan: Vec2::ZERO,
            fling: None,
            revision: 0,
            needs_redraw: false,
        }
    }

    /// The configuration this view was built with.
    #[must_use]
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Binds content of the given native size, starting over at the fit scale.
    pub fn attach(&mut self, content: Size) {
        tracing::debug!(width = content.width, height = content.height, "attach content");
        self.reset_interaction();
        self.geometry.content = content;
        self.relayout();
    }

    /// Unbinds the content and returns to the initial state.
    ///
    /// The viewport size is kept, so a later [`attach`](Self::attach) can lay
    /// out immediately.
    pub fn detach(&mut self) {
        tracing::debug!("detach content");
        self.reset_interaction();
        self.geometry.content = Size::ZERO;
        self.relayout();
    }

    /// Sets the viewport size, recomputing the layout.
    ///
    /// An in-flight fling is dropped, since its bounds no longer apply. A
    /// scale animation survives a collapse to an unresolved size, but
    /// [`advance`](Self::advance) reports no motion until the size resolves
    /// again. Hosts should check [`is_active`](Self::is_active) after a resize
    /// and restart their frame loop if it returns `true`.
    pub fn set_viewport_size(&mut self, size: Size) {
        if self.geometry.viewport == size {
            return;
        }
        self.geometry.viewport = size;
        self.relayout();
    }

    /// Replaces the content size without resetting the zoom state.
    ///
    /// The pan offset is re-clamped to the new layout. As with
    /// [`set_viewport_size`](Self::set_viewport_size), check
    /// [`is_active`](Self::is_active) afterwards.
    pub fn set_content(&mut self, content: Size) {
        if self.geometry.content == content {
            return;
        }
        self.geometry.content = content;
        self.relayout();
    }

    fn reset_interaction(&mut self) {
        self.animation.reset();
        self.is_magnified = false;
        self.pan = Vec2::ZERO;
        self.fling = None;
    }

    fn relayout(&mut self) {
        self.cancel_fling();
        self.layout = Layout::compute(self.geometry, self.config.magnify_factor);
        match self.layout {
            Some(layout) => {
                tracing::debug!(
                    fit_scale = layout.fit_scale(),
                    magnified_scale = layout.magnified_scale(),
                    "layout resolved"
                );
                self.pan = clamp_pan(self.pan, layout.pan_limit(self.live_scale(&layout)));
            }
            None => tracing::debug!(geometry = ?self.geometry, "layout deferred"),
        }
        self.mark_dirty();
    }

    /// Dispatches a gesture event, returning whether it was handled.
    ///
    /// [`GestureEvent::Resize`] is always handled; whether it needs frames
    /// is reported by [`is_active`](Self::is_active).
    pub fn handle(&mut self, event: GestureEvent) -> bool {
        match event {
            GestureEvent::Down => self.on_down(),
            GestureEvent::DoubleTap => self.on_double_tap(),
            GestureEvent::DragDelta(delta) => self.on_drag_delta(delta),
            GestureEvent::FlingRelease(velocity) => self.on_fling_release(velocity),
            GestureEvent::Resize(size) => {
                self.set_viewport_size(size);
                true
            }
        }
    }

    /// A pointer went down: stop any fling so the content can be grabbed.
    pub fn on_down(&mut self) -> bool {
        self.cancel_fling();
        true
    }

    /// Toggles between fit and magnified.
    ///
    /// The animation starts from the current scale progress, so a double-tap
    /// during a transition reverses it without a jump. Returns `false` while
    /// the layout is unresolved.
    pub fn on_double_tap(&mut self) -> bool {
        if self.layout.is_none() {
            return false;
        }
        self.cancel_fling();
        self.is_magnified = !self.is_magnified;
        self.animation.retarget(self.is_magnified);
        tracing::debug!(
            magnified = self.is_magnified,
            progress = self.scale_progress(),
            "double tap"
        );
        self.mark_dirty();
        true
    }

    /// Pans by a scroll distance (previous minus current pointer position).
    ///
    /// Only handled while magnified; the result is clamped to the content
    /// overflow at the live scale. A delta with a non-finite component is
    /// ignored.
    pub fn on_drag_delta(&mut self, delta: Vec2) -> bool {
        if !delta.is_finite() {
            return false;
        }
        let Some(layout) = self.layout else {
            return false;
        };
        if !self.is_magnified {
            return false;
        }
        self.cancel_fling();
        let limit = layout.pan_limit(self.live_scale(&layout));
        self.set_pan(clamp_pan(self.pan - delta, limit));
        true
    }

    /// Starts momentum from the release `velocity` (px/s).
    ///
    /// Only handled while magnified. A release slower than
    /// [`FlingConfig::stop_velocity`](crate::FlingConfig::stop_velocity) on
    /// both axes is handled but starts no fling. A velocity with a
    /// non-finite component is ignored.
    pub fn on_fling_release(&mut self, velocity: Vec2) -> bool {
        if !velocity.is_finite() {
            return false;
        }
        let Some(layout) = self.layout else {
            return false;
        };
        if !self.is_magnified {
            return false;
        }
        self.cancel_fling();
        let Ok(momentum) = Momentum::new(
            self.pan.to_point(),
            velocity,
            layout.magnified_pan_bounds(),
            self.config.fling,
        ) else {
            return false;
        };
        if momentum.is_settled() {
            return true;
        }
        tracing::debug!(vx = momentum.velocity().x, vy = momentum.velocity().y, "fling start");
        self.fling = Some(momentum);
        self.mark_dirty();
        true
    }

    fn cancel_fling(&mut self) {
        if self.fling.take().is_some() {
            tracing::debug!("fling preempted");
        }
    }

    /// Steps the scale animation and any fling by `dt`.
    ///
    /// Returns `true` while there is still motion to drive, in which case the
    /// host should call this again on the next frame. Calling it while idle is
    /// a no-op that returns `false`.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(layout) = self.layout else {
            return false;
        };
        let progress_before = self.scale_progress();

        self.animation.advance(dt, self.config.animation_duration);

        let mut pan = self.pan;
        if let Some(fling) = &mut self.fling {
            let in_flight = fling.step(dt.as_secs_f64());
            pan = fling.position().to_vec2();
            if !in_flight {
                tracing::debug!(x = pan.x, y = pan.y, "fling settled");
                self.fling = None;
            }
        }
        pan = if self.phase() == ViewPhase::Fit {
            Vec2::ZERO
        } else {
            clamp_pan(pan, layout.pan_limit(self.live_scale(&layout)))
        };
        self.set_pan(pan);

        if self.scale_progress() != progress_before {
            tracing::trace!(progress = self.scale_progress(), "scale step");
            self.mark_dirty();
        }
        self.is_active()
    }

    /// Returns `true` while an animation or fling needs [`advance`](Self::advance).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.layout.is_some() && (self.animation.is_running() || self.fling.is_some())
    }

    /// Transform mapping content-local pixels to viewport pixels.
    ///
    /// Translates by the pan offset, scales about the viewport center by the
    /// live scale, and positions the content by its centering offset. This
    /// does not mutate anything. Returns [`Affine::IDENTITY`] while the layout
    /// is unresolved.
    #[must_use]
    pub fn current_transform(&self) -> Affine {
        let Some(layout) = self.layout else {
            return Affine::IDENTITY;
        };
        let center = layout.viewport_center().to_vec2();
        Affine::translate(self.pan)
            * Affine::translate(center)
            * Affine::scale(self.live_scale(&layout))
            * Affine::translate(-center)
            * Affine::translate(layout.center_offset())
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> ViewPhase {
        if self.animation.is_running() {
            ViewPhase::Animating
        } else if self.is_magnified {
            ViewPhase::Magnified
        } else {
            ViewPhase::Fit
        }
    }

    /// Logical target state; flips immediately on double-tap.
    #[must_use]
    pub fn is_magnified(&self) -> bool {
        self.is_magnified
    }

    /// Normalized position between fit (`0.0`) and magnified (`1.0`).
    #[must_use]
    pub fn scale_progress(&self) -> f64 {
        self.animation.progress(self.config.easing)
    }

    /// Live scale factor, if the layout is resolved.
    #[must_use]
    pub fn current_scale(&self) -> Option<f64> {
        self.layout.as_ref().map(|layout| self.live_scale(layout))
    }

    fn live_scale(&self, layout: &Layout) -> f64 {
        layout.scale_at(self.scale_progress())
    }

    /// Current pan offset in viewport pixels.
    #[must_use]
    pub fn pan_offset(&self) -> Vec2 {
        self.pan
    }

    /// Current geometry, resolved or not.
    #[must_use]
    pub fn geometry(&self) -> ViewportGeometry {
        self.geometry
    }

    /// Current layout, if the geometry is resolved.
    #[must_use]
    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// Returns `true` while the scale is transitioning.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }

    /// Returns `true` while a fling is in flight.
    #[must_use]
    pub fn is_flinging(&self) -> bool {
        self.fling.is_some()
    }

    /// Counter bumped on every visible change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` if something changed since the last [`take_redraw`](Self::take_redraw).
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Returns and clears the pending redraw request.
    pub fn take_redraw(&mut self) -> bool {
        core::mem::take(&mut self.needs_redraw)
    }

    fn set_pan(&mut self, pan: Vec2) {
        if pan != self.pan {
            self.pan = pan;
            self.mark_dirty();
        }
    }

    fn mark_dirty(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        self.needs_redraw = true;
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ScalableViewDebugInfo {
        ScalableViewDebugInfo {
            geometry: self.geometry,
            layout: self.layout,
            phase: self.phase(),
            is_magnified: self.is_magnified,
            animation_clock: self.animation.clock(),
            scale_progress: self.scale_progress(),
            scale: self.current_scale(),
            pan_offset: self.pan,
            fling_velocity: self.fling.map(|fling| fling.velocity()),
            revision: self.revision,
        }
    }
}

/// Debug snapshot of a [`ScalableView`] state.
#[derive(Clone, Copy, Debug)]
pub struct ScalableViewDebugInfo {
    /// Viewport and content dimensions.
    pub geometry: ViewportGeometry,
    /// Derived layout, if resolved.
    pub layout: Option<Layout>,
    /// Coarse phase.
    pub phase: ViewPhase,
    /// Logical target state.
    pub is_magnified: bool,
    /// Linear animation clock, before easing.
    pub animation_clock: f64,
    /// Eased scale progress.
    pub scale_progress: f64,
    /// Live scale factor, if resolved.
    pub scale: Option<f64>,
    /// Current pan offset.
    pub pan_offset: Vec2,
    /// Velocity of the fling in flight, if any.
    pub fling_velocity: Option<Vec2>,
    /// Redraw revision counter.
    pub revision: u64,
}
