// Copyright 2025 the Scalable View Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalable View: a headless interaction engine for a zoomable image.
//!
//! A single piece of content (typically a bitmap) is shown in a rectangular
//! viewport. The user can:
//! - Double-tap to toggle between a *fit* scale and a *magnified* scale, with
//!   an animated transition that can be reversed mid-flight.
//! - Drag to pan while magnified, clamped so the content never leaves a gap at
//!   the viewport edge.
//! - Fling to continue panning with decaying momentum.
//!
//! This crate only models that state. It does **not** decode images,
//! recognize gestures from raw pointer events, paint, or schedule frames.
//! Callers are expected to:
//! - Report the viewport size and content size.
//! - Translate their toolkit's input into [`GestureEvent`]s.
//! - Call [`ScalableView::advance`] once per frame while it returns `true`.
//! - Paint the content with [`ScalableView::current_transform`].
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Size, Vec2};
//! use scalable_view::{GestureEvent, ScalableView, ViewPhase};
//!
//! let mut view = ScalableView::new();
//! view.handle(GestureEvent::Resize(Size::new(1080.0, 1920.0)));
//! view.attach(Size::new(1200.0, 1200.0));
//!
//! // Zoom in and let the animation run to completion.
//! view.handle(GestureEvent::DoubleTap);
//! while view.advance(Duration::from_millis(16)) {}
//! assert_eq!(view.phase(), ViewPhase::Magnified);
//!
//! // Drag: the pointer moved 40px left, so the scroll distance is +40.
//! assert!(view.handle(GestureEvent::DragDelta(Vec2::new(40.0, 0.0))));
//! assert_eq!(view.pan_offset(), Vec2::new(-40.0, 0.0));
//!
//! // Paint with the live transform.
//! let transform = view.current_transform();
//! let [scale, ..] = transform.as_coeffs();
//! assert!((scale - 2.4).abs() < 1e-9);
//! ```
//!
//! ## Layout
//!
//! [`Layout`] derives everything from the viewport and content sizes: the fit
//! scale on the constraining axis, the magnified scale (by default 1.5x the
//! scale that fills the other axis), the offset that centers the unscaled
//! content, and the pan limits at any scale.
//!
//! ## Redraw requests
//!
//! Every visible change bumps [`ScalableView::revision`] and raises a flag
//! drained by [`ScalableView::take_redraw`]. Hosts that repaint on demand
//! can poll that flag after feeding events.
//!
//! ## Logging
//!
//! State transitions are reported through `tracing` at `debug` level and
//! animation steps at `trace` level. No subscriber is installed.
//!
//! This crate is `no_std`.

#![no_std]

mod animation;
mod config;
mod gesture;
mod layout;
mod momentum;
mod view;

pub use config::{ConfigError, Easing, FlingConfig, ZoomConfig};
pub use gesture::GestureEvent;
pub use layout::{Layout, ViewportGeometry};
pub use momentum::Momentum;
pub use view::{ScalableView, ScalableViewDebugInfo, ViewPhase};
