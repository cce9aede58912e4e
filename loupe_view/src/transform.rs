// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

use kurbo::{Affine, Point, Vec2};

/// Uniform pan+zoom transform over a single presented content element.
///
/// `ViewTransform` tracks a positive uniform scale and a screen-space
/// translation, and derives the 2x3 affine matrix `[s, 0, 0, s, x, y]` from
/// them on demand. Mutating operations only mark the matrix stale; every read
/// path ([`matrix`](Self::matrix), [`coefficients`](Self::coefficients),
/// [`materialize`](Self::materialize)) refreshes it first, so a stale matrix
/// is never observable.
///
/// One instance is exclusively owned by one viewing session at a time. The
/// gesture layer is the sole source of incremental mutations; the fit
/// calculation uses the absolute setters instead.
#[derive(Clone, Debug)]
pub struct ViewTransform {
    scale: f64,
    origin: Vec2,
    matrix: Affine,
    stale: bool,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewTransform {
    /// Creates an identity transform: scale 1, origin at (0, 0).
    #[must_use]
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            origin: Vec2::ZERO,
            matrix: Affine::IDENTITY,
            stale: false,
        }
    }

    /// Returns the current uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the current translation of the content origin, in screen space.
    #[must_use]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Translates the view by a screen-space delta.
    ///
    /// Deltas are unconstrained; the view may be panned arbitrarily far
    /// out of bounds.
    pub fn pan(&mut self, delta: Vec2) {
        self.origin += delta;
        self.stale = true;
    }

    /// Scales by `factor` around a screen-space anchor point.
    ///
    /// The content point currently under `anchor` maps to the same screen
    /// position after the operation, for any prior scale and origin. A factor
    /// of 1 leaves the transform unchanged.
    ///
    /// `factor` must be positive. The gesture layer's jitter filter never
    /// emits a factor <= 0; other callers carry the same obligation.
    pub fn scale_at(&mut self, anchor: Point, factor: f64) {
        debug_assert!(factor > 0.0, "scale factor must be positive");
        self.scale *= factor;
        self.origin.x = anchor.x - (anchor.x - self.origin.x) * factor;
        self.origin.y = anchor.y - (anchor.y - self.origin.y) * factor;
        self.stale = true;
    }

    /// Overwrites the scale, leaving the origin untouched.
    ///
    /// Used by the fit calculation to establish an absolute starting state;
    /// incremental gestures go through [`scale_at`](Self::scale_at) instead.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
        self.stale = true;
    }

    /// Overwrites the origin translation, leaving the scale untouched.
    ///
    /// Like [`set_scale`](Self::set_scale), this is the absolute counterpart
    /// to [`pan`](Self::pan) and is reserved for the fit calculation.
    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
        self.stale = true;
    }

    /// Restores scale 1 and origin (0, 0).
    ///
    /// Unlike the other mutations this refreshes the matrix immediately, so
    /// the reset state is visible to the next read even when no apply call
    /// follows.
    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.origin = Vec2::ZERO;
        self.refresh();
    }

    /// Returns the affine matrix, refreshing it first if stale.
    pub fn matrix(&mut self) -> Affine {
        if self.stale {
            self.refresh();
        }
        self.matrix
    }

    /// Returns the `[a, b, c, d, e, f]` coefficient array, refreshing first
    /// if stale.
    ///
    /// For this uniform model `a == d == scale`, `b == c == 0`, and `(e, f)`
    /// is the origin translation.
    pub fn coefficients(&mut self) -> [f64; 6] {
        self.matrix().as_coeffs()
    }

    /// Refreshes the matrix if stale and hands it to `sink`.
    ///
    /// The sink is the single visual target of the active session; applying
    /// the transform anywhere else is the host's responsibility to avoid.
    pub fn materialize(&mut self, sink: &mut impl TransformSink) {
        let matrix = self.matrix();
        sink.apply_transform(matrix);
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewTransformDebugInfo {
        ViewTransformDebugInfo {
            scale: self.scale,
            origin: self.origin,
            stale: self.stale,
        }
    }

    fn refresh(&mut self) {
        self.matrix = Affine::new([
            self.scale,
            0.0,
            0.0,
            self.scale,
            self.origin.x,
            self.origin.y,
        ]);
        self.stale = false;
    }
}

/// Receiver for the refreshed view matrix.
///
/// This is the output seam between the headless transform model and the
/// visual element the host manages. A DOM-backed implementation typically
/// writes [`css_matrix`] of the received matrix to the element's `transform`
/// style; tests use a recording implementation.
pub trait TransformSink {
    /// Applies the given matrix as the target's visual transform.
    fn apply_transform(&mut self, matrix: Affine);
}

/// Formats an affine matrix as a CSS `matrix(a,b,c,d,e,f)` transform string.
///
/// ```rust
/// use kurbo::Affine;
/// use loupe_view::css_matrix;
///
/// assert_eq!(css_matrix(Affine::IDENTITY), "matrix(1,0,0,1,0,0)");
/// ```
#[must_use]
pub fn css_matrix(matrix: Affine) -> String {
    let [a, b, c, d, e, f] = matrix.as_coeffs();
    format!("matrix({a},{b},{c},{d},{e},{f})")
}

/// Debug snapshot of a [`ViewTransform`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewTransformDebugInfo {
    /// Current uniform scale factor.
    pub scale: f64,
    /// Current translation of the content origin, in screen space.
    pub origin: Vec2,
    /// Whether the derived matrix is currently outdated. Any read path
    /// clears this before returning data.
    pub stale: bool,
}
