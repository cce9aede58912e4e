// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The unified pointer sample: one or two tracked screen points.
//!
//! Mouse and touch input reduce to the same shape here, so the pan and pinch
//! paths share their coordinate math instead of duplicating it.

use kurbo::Point;

/// An ordered set of up to two screen-space points from one input sample.
///
/// A mouse drag contributes a single point; a touch sample contributes the
/// first two currently-down contacts. Additional contacts are ignored beyond
/// bumping the count to two, matching the pinch model that only ever measures
/// the earliest pair.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct PointerSample {
    points: [Point; 2],
    len: u8,
}

impl PointerSample {
    pub(crate) const EMPTY: Self = Self {
        points: [Point::ZERO; 2],
        len: 0,
    };

    /// A single-point sample, as produced by mouse input.
    pub(crate) fn one(point: Point) -> Self {
        Self {
            points: [point, Point::ZERO],
            len: 1,
        }
    }

    /// Builds a sample from the full set of currently-down touch points.
    pub(crate) fn from_points(points: &[Point]) -> Self {
        match points {
            [] => Self::EMPTY,
            [a] => Self::one(*a),
            [a, b, ..] => Self {
                points: [*a, *b],
                len: 2,
            },
        }
    }

    /// Number of tracked points (0, 1, or 2).
    pub(crate) fn len(&self) -> usize {
        usize::from(self.len)
    }

    /// The first tracked point, if any.
    pub(crate) fn first(&self) -> Option<Point> {
        (self.len >= 1).then_some(self.points[0])
    }

    /// Both tracked points when two are present.
    pub(crate) fn pair(&self) -> Option<(Point, Point)> {
        (self.len >= 2).then_some((self.points[0], self.points[1]))
    }

    /// Euclidean distance between the two tracked points.
    pub(crate) fn span(&self) -> Option<f64> {
        self.pair().map(|(a, b)| a.distance(b))
    }

    /// Midpoint of the two tracked points, the anchor for pinch zooming.
    pub(crate) fn midpoint(&self) -> Option<Point> {
        self.pair().map(|(a, b)| a.midpoint(b))
    }
}
