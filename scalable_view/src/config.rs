// Copyright 2025 the Scalable View Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::time::Duration;

/// Curve applied to the scale animation's clock.
///
/// Reversing an animation mid-flight keeps the clock position, and the curve
/// is a pure function of it, so reversal never jumps for any variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    /// Progress follows the clock directly.
    Linear,
    /// Slow start and slow finish (smoothstep).
    #[default]
    EaseInOut,
}

impl Easing {
    /// Maps a clock value in `[0, 1]` to scale progress in `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// Tuning for fling momentum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlingConfig {
    /// Velocity decay rate, per second.
    ///
    /// Each step divides velocity by `1 + friction * dt`.
    pub friction: f64,
    /// Speed (px/s) below which an axis is considered at rest.
    pub stop_velocity: f64,
    /// Release speeds are clamped to this magnitude (px/s) per axis.
    pub max_fling_velocity: f64,
}

impl Default for FlingConfig {
    fn default() -> Self {
        Self {
            friction: 4.0,
            stop_velocity: 10.0,
            max_fling_velocity: 8_000.0,
        }
    }
}

/// Configuration for a [`ScalableView`](crate::ScalableView).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Multiplier applied to the non-constraining axis' fit scale to obtain
    /// the magnified scale. Must be greater than `1.0`.
    pub magnify_factor: f64,
    /// Duration of a full fit/magnified transition.
    pub animation_duration: Duration,
    /// Curve applied to the scale animation.
    pub easing: Easing,
    /// Momentum tuning.
    pub fling: FlingConfig,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            magnify_factor: 1.5,
            animation_duration: Duration::from_millis(500),
            easing: Easing::default(),
            fling: FlingConfig::default(),
        }
    }
}

impl ZoomConfig {
    /// Checks that every value is usable.
    ///
    /// A zero `animation_duration` is allowed and makes toggles settle on the
    /// next [`advance`](crate::ScalableView::advance).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.magnify_factor.is_finite() && self.magnify_factor > 1.0) {
            return Err(ConfigError::MagnifyFactor(self.magnify_factor));
        }
        self.fling.validate()
    }
}

impl FlingConfig {
    /// Checks that every value is finite and positive.
    ///
    /// [`Momentum::new`](crate::Momentum::new) refuses a config that fails
    /// this check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.friction.is_finite() && self.friction > 0.0) {
            return Err(ConfigError::Friction(self.friction));
        }
        if !(self.stop_velocity.is_finite() && self.stop_velocity > 0.0) {
            return Err(ConfigError::StopVelocity(self.stop_velocity));
        }
        if !(self.max_fling_velocity.is_finite() && self.max_fling_velocity > 0.0) {
            return Err(ConfigError::MaxFlingVelocity(self.max_fling_velocity));
        }
        Ok(())
    }
}

/// Error returned when a [`ZoomConfig`] holds an unusable value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The magnify factor was not a finite value greater than one.
    MagnifyFactor(f64),
    /// Fling friction was not a finite positive value.
    Friction(f64),
    /// Stop velocity was not a finite positive value.
    StopVelocity(f64),
    /// Maximum fling velocity was not a finite positive value.
    MaxFlingVelocity(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MagnifyFactor(v) => {
                write!(f, "magnify factor must be finite and greater than 1, got {v}")
            }
            Self::Friction(v) => write!(f, "fling friction must be finite and positive, got {v}"),
            Self::StopVelocity(v) => {
                write!(f, "stop velocity must be finite and positive, got {v}")
            }
            Self::MaxFlingVelocity(v) => {
                write!(f, "max fling velocity must be finite and positive, got {v}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
