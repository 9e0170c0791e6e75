// Copyright 2025 the Scalable View Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Externally stepped fit/magnified animation clock.

use core::time::Duration;

use crate::config::Easing;

/// Normalized animation clock that moves toward one of its two ends.
///
/// The clock is linear in time; [`Easing`] maps it to scale progress. Retargeting
/// keeps the clock where it is, so a reversal mid-flight resumes from the
/// current progress instead of restarting from either end.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct ScaleAnimation {
    clock: f64,
    toward_magnified: bool,
}

impl ScaleAnimation {
    /// Points the clock at the magnified end (`true`) or the fit end.
    pub(crate) fn retarget(&mut self, toward_magnified: bool) {
        self.toward_magnified = toward_magnified;
    }

    fn target(&self) -> f64 {
        if self.toward_magnified { 1.0 } else { 0.0 }
    }

    /// Returns `true` while the clock has not reached its target.
    pub(crate) fn is_running(&self) -> bool {
        self.clock != self.target()
    }

    /// Current clock position in `[0, 1]`.
    pub(crate) fn clock(&self) -> f64 {
        self.clock
    }

    /// Scale progress under `easing`.
    pub(crate) fn progress(&self, easing: Easing) -> f64 {
        easing.apply(self.clock)
    }

    /// Moves the clock toward its target by `dt` of a `duration`-long transition.
    ///
    /// Returns `true` while the animation is still running afterwards.
    pub(crate) fn advance(&mut self, dt: Duration, duration: Duration) -> bool {
        if !self.is_running() {
            return false;
        }
        let target = self.target();
        let total = duration.as_secs_f64();
        if total <= 0.0 {
            self.clock = target;
            return false;
        }
        let step = dt.as_secs_f64() / total;
        self.clock = if target > self.clock {
            (self.clock + step).min(target)
        } else {
            (self.clock - step).max(target)
        };
        self.is_running()
    }

    /// Jumps to the fit end and stops.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
