// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe View: the viewport transform model behind a zoomed, pannable image.
//!
//! This crate provides a small, headless model of a uniform pan+zoom view over
//! a single piece of content. It focuses on:
//! - Scale + translation state with a lazily derived 2x3 affine matrix.
//! - Anchor-preserving zoom: the screen point under the cursor (or pinch
//!   midpoint) stays put while the content scales around it.
//! - Fit-to-viewport: the largest scale at which content is fully contained,
//!   with centering offsets.
//! - An output seam ([`TransformSink`]) through which the refreshed matrix
//!   reaches whatever visual element the host manages.
//!
//! It does **not** own any DOM node, scene graph, or rendering backend.
//! Callers are expected to:
//! - Deliver pan deltas and zoom factors from their input layer (for example
//!   the `loupe_gesture` controller).
//! - Implement [`TransformSink`] for their visual target, typically by writing
//!   the CSS string produced by [`css_matrix`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use loupe_view::{ViewTransform, fit_contain};
//!
//! let mut view = ViewTransform::new();
//!
//! // Present an 800x600 image inside a 400x300 viewport.
//! let fit = fit_contain(Size::new(800.0, 600.0), Size::new(400.0, 300.0)).unwrap();
//! view.set_scale(fit.scale);
//! view.set_origin(fit.offset);
//!
//! // Zoom in around a cursor position, then drag.
//! view.scale_at(Point::new(200.0, 150.0), 1.1);
//! view.pan(Vec2::new(-12.0, 4.0));
//!
//! // Reading the matrix always reflects the latest state.
//! let [a, _, _, d, _, _] = view.coefficients();
//! assert_eq!(a, d);
//! ```
//!
//! ## Coordinate space
//!
//! All positions (zoom anchors, pan deltas, fit offsets, the matrix
//! translation) are in viewport-local logical coordinates: the space whose
//! origin is the top-left corner of the viewport the target lives in. Hosts
//! must deliver pointer positions already translated into that space; mixing
//! spaces breaks the anchor-invariance guarantee of [`ViewTransform::scale_at`].
//!
//! ## Design notes
//!
//! - The zoom factor is **uniform**; rotation and skew are intentionally out
//!   of scope, so the matrix is always `[s, 0, 0, s, x, y]`.
//! - The matrix is recomputed lazily: mutations mark it stale, and every read
//!   path refreshes first. [`ViewTransform::reset`] is the one eager
//!   exception, so a freshly reset view is observable without a further apply.
//! - Panning deliberately has no bounds clamping; the interaction layer above
//!   decides whether runaway pans are acceptable.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod fit;
mod transform;

pub use fit::{FittedView, fit_contain};
pub use transform::{TransformSink, ViewTransform, ViewTransformDebugInfo, css_matrix};
