// Copyright 2025 the Scalable View Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

/// Discrete gesture signals a host feeds into a [`ScalableView`](crate::ScalableView).
///
/// Recognizing these from raw pointer events is left to the host toolkit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// A pointer went down on the view. Stops any fling in flight.
    Down,
    /// Toggle between fit and magnified.
    DoubleTap,
    /// Scroll distance since the previous drag event: previous pointer
    /// position minus current pointer position.
    DragDelta(Vec2),
    /// Pointer velocity at release, in px/s.
    FlingRelease(Vec2),
    /// The viewport changed size.
    Resize(Size),
}
