// Copyright 2025 the Scalable View Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-stepped fling momentum.
//!
//! ## Usage
//!
//! 1) Create a [`Momentum`] from the release offset, velocity and bounds.
//! 2) Call [`Momentum::step`] once per frame and read [`Momentum::position`].
//! 3) Drop it once `step` returns `false`, or earlier if the user interrupts.
//!
//! Stepping instead of solving the trajectory up front keeps a fling trivially
//! interruptible: the owner simply stops stepping.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect, Vec2};
//! use scalable_view::{FlingConfig, Momentum};
//!
//! let bounds = Rect::new(-100.0, -100.0, 100.0, 100.0);
//! let mut fling = Momentum::new(Point::ZERO, Vec2::new(600.0, 0.0), bounds, FlingConfig::default())?;
//!
//! let mut frames = 0;
//! while fling.step(1.0 / 60.0) {
//!     frames += 1;
//! }
//! assert!(frames > 0);
//! assert!(fling.position().x <= 100.0);
//! # Ok::<(), scalable_view::ConfigError>(())
//! ```

use kurbo::{Point, Rect, Vec2};

use crate::config::{ConfigError, FlingConfig};

/// Decaying motion of a pan offset after a fling.
///
/// Each axis is integrated independently. Velocity shrinks every step by
/// `1 / (1 + friction * dt)`; an axis that reaches a bound stops there with
/// zero velocity rather than overshooting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Momentum {
    position: Point,
    velocity: Vec2,
    bounds: Rect,
    config: FlingConfig,
}

impl Momentum {
    /// Starts a fling at `position` with `velocity` (px/s) inside `bounds`.
    ///
    /// `position` is clamped into `bounds`, and `velocity` is clamped per axis to
    /// [`FlingConfig::max_fling_velocity`]. Non-finite velocity components are
    /// treated as zero, and a non-finite position component starts at the
    /// middle of its bound. Non-finite `bounds` collapse to the origin.
    ///
    /// Returns an error if `config` fails [`FlingConfig::validate`].
    pub fn new(
        position: Point,
        velocity: Vec2,
        bounds: Rect,
        config: FlingConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let bounds = if bounds.is_finite() {
            bounds.abs()
        } else {
            Rect::ZERO
        };
        let max = config.max_fling_velocity;
        Ok(Self {
            position: Point::new(
                start_axis(position.x, bounds.x0, bounds.x1),
                start_axis(position.y, bounds.y0, bounds.y1),
            ),
            velocity: Vec2::new(cap_axis(velocity.x, max), cap_axis(velocity.y, max)),
            bounds,
            config,
        })
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Current velocity in px/s.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Bounds the position is confined to.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Returns `true` once both axes have fallen below the stop velocity.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        let stop = self.config.stop_velocity;
        self.velocity.x.abs() < stop && self.velocity.y.abs() < stop
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// Returns `true` if the position moved and the fling is still in flight.
    /// A non-positive `dt` leaves the state untouched. Once settled the
    /// velocity is zeroed and every further call returns `false`.
    pub fn step(&mut self, dt: f64) -> bool {
        if self.is_settled() {
            self.velocity = Vec2::ZERO;
            return false;
        }
        if dt.is_nan() || dt <= 0.0 {
            return true;
        }
        let decay = 1.0 / (1.0 + self.config.friction * dt);
        let (x, vx) = step_axis(
            self.position.x,
            self.velocity.x * decay,
            self.bounds.x0,
            self.bounds.x1,
            dt,
        );
        let (y, vy) = step_axis(
            self.position.y,
            self.velocity.y * decay,
            self.bounds.y0,
            self.bounds.y1,
            dt,
        );
        self.position = Point::new(x, y);
        self.velocity = Vec2::new(vx, vy);

        if self.is_settled() {
            self.velocity = Vec2::ZERO;
            return false;
        }
        true
    }
}

fn start_axis(position: f64, min: f64, max: f64) -> f64 {
    if position.is_finite() {
        position.clamp(min, max)
    } else {
        (min + max) * 0.5
    }
}

fn cap_axis(velocity: f64, max: f64) -> f64 {
    if velocity.is_finite() {
        velocity.clamp(-max, max)
    } else {
        0.0
    }
}

fn step_axis(position: f64, velocity: f64, min: f64, max: f64, dt: f64) -> (f64, f64) {
    let next = position + velocity * dt;
    if next > max {
        (max, 0.0)
    } else if next < min {
        (min, 0.0)
    } else {
        (next, velocity)
    }
}
