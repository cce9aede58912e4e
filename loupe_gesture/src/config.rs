// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Tunables for gesture interpretation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Minimum `|1 - factor|` a pinch sample must exceed before it is allowed
    /// to zoom.
    ///
    /// Touch sensors report small distance changes even when fingers hold
    /// still; samples at or below this deviation are dropped. The rolling
    /// pinch baseline still advances on dropped samples, so an eventual
    /// accepted sample measures against the latest distance rather than
    /// jumping over the accumulated drift.
    pub jitter_threshold: f64,
    /// Zoom-in factor applied per wheel notch; zoom-out uses its reciprocal.
    pub wheel_step: f64,
}

impl GestureConfig {
    /// Default pinch jitter threshold.
    pub const DEFAULT_JITTER_THRESHOLD: f64 = 0.01;
    /// Default wheel zoom step.
    pub const DEFAULT_WHEEL_STEP: f64 = 1.1;
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            jitter_threshold: Self::DEFAULT_JITTER_THRESHOLD,
            wheel_step: Self::DEFAULT_WHEEL_STEP,
        }
    }
}
