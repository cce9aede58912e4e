// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::config::GestureConfig;
use crate::sample::PointerSample;

/// Transform intent produced by one input sample.
///
/// Actions describe what the user asked for without touching the transform;
/// the session applies them to the
/// [`ViewTransform`](loupe_view::ViewTransform) it owns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureAction {
    /// Translate by a screen-space delta.
    Pan(Vec2),
    /// Scale by `factor` around the screen-space `anchor`.
    ScaleAt {
        /// Fixed point of the zoom, in viewport-local coordinates.
        anchor: Point,
        /// Multiplicative scale factor, always positive.
        factor: f64,
    },
}

/// Interaction phase of the gesture state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    /// No pointer is down.
    #[default]
    Idle,
    /// Exactly one pointer is down: moves pan the view.
    Panning,
    /// Two or more touch points are down: moves pinch-zoom the view.
    /// Always takes precedence over panning while a second contact exists.
    Pinching,
}

/// Normalizes mouse and multi-touch samples into [`GestureAction`]s.
///
/// Mouse handlers feed the `pointer_*` methods; touch handlers pass the full
/// set of currently-down points to the `touch_*` methods; wheel handlers call
/// [`wheel`](Self::wheel). Both input families reduce to the same internal
/// one-or-two-point sample, so pan deltas and pinch geometry share their math.
///
/// Pinch zooming keeps a rolling baseline distance: it is established the
/// moment a second contact lands, re-measured against every move sample
/// (accepted or rejected by the jitter filter), and cleared when fewer than
/// two contacts remain.
#[derive(Clone, Debug, Default)]
pub struct GestureController {
    config: GestureConfig,
    current: PointerSample,
    baseline: Option<f64>,
}

impl GestureController {
    /// Creates a controller with the given tunables.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            current: PointerSample::EMPTY,
            baseline: None,
        }
    }

    /// Returns the configured tunables.
    #[must_use]
    pub fn config(&self) -> GestureConfig {
        self.config
    }

    /// Returns the current interaction phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.current.len() {
            0 => Phase::Idle,
            1 => Phase::Panning,
            _ => Phase::Pinching,
        }
    }

    /// A mouse button was pressed at `position`: begin panning.
    pub fn pointer_down(&mut self, position: Point) {
        self.current = PointerSample::one(position);
        self.baseline = None;
    }

    /// The mouse moved to `position`.
    ///
    /// Emits a pan delta while the button is held; hover moves are ignored.
    pub fn pointer_move(&mut self, position: Point) -> Option<GestureAction> {
        if self.phase() != Phase::Panning {
            return None;
        }
        let previous = self.current.first()?;
        self.current = PointerSample::one(position);
        Some(GestureAction::Pan(position - previous))
    }

    /// The mouse button was released: back to idle.
    pub fn pointer_up(&mut self) {
        self.release_all();
    }

    /// The pointer left the viewport, which ends any pan in progress.
    pub fn pointer_leave(&mut self) {
        self.release_all();
    }

    /// Wheel rotation at `position` with the scroll delta's y component.
    ///
    /// Always an anchored zoom at the cursor, independent of the touch phase:
    /// a negative delta (roll away) zooms in by the configured wheel step, a
    /// positive delta zooms out by its reciprocal. A zero delta emits nothing.
    pub fn wheel(&self, position: Point, delta_y: f64) -> Option<GestureAction> {
        if delta_y == 0.0 {
            return None;
        }
        let factor = if delta_y < 0.0 {
            self.config.wheel_step
        } else {
            self.config.wheel_step.recip()
        };
        Some(GestureAction::ScaleAt {
            anchor: position,
            factor,
        })
    }

    /// A touch contact landed; `points` is the full set now down.
    ///
    /// A second contact switches to pinching and establishes the baseline
    /// distance immediately, so the first pinch move measures against the
    /// contact positions rather than a stale value.
    pub fn touch_start(&mut self, points: &[Point]) {
        self.current = PointerSample::from_points(points);
        self.baseline = self.current.span();
    }

    /// Touch contacts moved; `points` is the full set currently down.
    pub fn touch_move(&mut self, points: &[Point]) -> Option<GestureAction> {
        // No touch-start seen (or everything was cancelled): ignore the
        // stream until a new contact lands.
        if self.phase() == Phase::Idle {
            return None;
        }
        let next = PointerSample::from_points(points);
        let previous = core::mem::replace(&mut self.current, next);

        if next.len() >= 2 {
            return self.pinch_sample(next);
        }
        self.baseline = None;
        if next.len() == 1 && previous.len() == 1 {
            return Some(GestureAction::Pan(next.first()? - previous.first()?));
        }
        None
    }

    /// Touch contacts lifted; `points` is the set that remains down.
    ///
    /// With fewer than two contacts left the pinch baseline is cleared; with
    /// two still down it is re-measured from the surviving pair so the next
    /// move does not see a distance jump.
    pub fn touch_end(&mut self, points: &[Point]) {
        self.current = PointerSample::from_points(points);
        self.baseline = self.current.span();
    }

    /// The platform cancelled the touch sequence; `points` is the set that
    /// remains down (usually empty).
    pub fn touch_cancel(&mut self, points: &[Point]) {
        self.touch_end(points);
    }

    /// Forgets all tracked pointers and the pinch baseline.
    pub fn reset(&mut self) {
        self.release_all();
    }

    fn release_all(&mut self) {
        self.current = PointerSample::EMPTY;
        self.baseline = None;
    }

    /// One pinch sample: measure the contact distance against the rolling
    /// baseline and emit an anchored zoom when the change clears the jitter
    /// threshold.
    fn pinch_sample(&mut self, next: PointerSample) -> Option<GestureAction> {
        let current = next.span()?;
        // The baseline advances whether or not this sample is accepted.
        let previous = self.baseline.replace(current);
        let previous = previous.filter(|span| *span > 0.0)?;
        if current <= 0.0 {
            return None;
        }
        let factor = current / previous;
        if (1.0 - factor).abs() <= self.config.jitter_threshold {
            return None;
        }
        Some(GestureAction::ScaleAt {
            anchor: next.midpoint()?,
            factor,
        })
    }
}
