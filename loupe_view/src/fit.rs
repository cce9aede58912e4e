// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

/// Scale and centering offset that fit content inside a viewport.
///
/// Produced by [`fit_contain`] and applied to a
/// [`ViewTransform`](crate::ViewTransform) through the absolute setters
/// (`set_scale` + `set_origin`), never through the incremental gesture
/// operations: fitting establishes a starting state, it does not accumulate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FittedView {
    /// Uniform scale making the content as large as possible while fully
    /// contained in the viewport.
    pub scale: f64,
    /// Screen-space translation that centers the scaled content.
    pub offset: Vec2,
}

/// Computes the aspect-preserving contain fit of `content` inside `viewport`.
///
/// The chosen scale is `min(viewport.width / content.width,
/// viewport.height / content.height)`; the offset centers the scaled content
/// along whichever axis has slack.
///
/// Returns `None` when any dimension is zero or negative, which callers treat
/// as "content not ready yet": the fit is deferred until real dimensions
/// arrive, and no transform is applied in the meantime.
///
/// ```rust
/// use kurbo::{Size, Vec2};
/// use loupe_view::fit_contain;
///
/// let fit = fit_contain(Size::new(100.0, 200.0), Size::new(400.0, 400.0)).unwrap();
/// assert_eq!(fit.scale, 2.0);
/// assert_eq!(fit.offset, Vec2::new(100.0, 0.0));
/// ```
#[must_use]
pub fn fit_contain(content: Size, viewport: Size) -> Option<FittedView> {
    if content.width <= 0.0 || content.height <= 0.0 {
        return None;
    }
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return None;
    }

    let scale = (viewport.width / content.width).min(viewport.height / content.height);
    let offset = Vec2::new(
        (viewport.width - content.width * scale) / 2.0,
        (viewport.height - content.height * scale) / 2.0,
    );
    Some(FittedView { scale, offset })
}

#[cfg(test)]
mod tests {
    use kurbo::{Size, Vec2};

    use super::fit_contain;

    #[test]
    fn exact_aspect_match_has_no_slack() {
        let fit = fit_contain(Size::new(800.0, 600.0), Size::new(400.0, 300.0)).unwrap();
        assert_eq!(fit.scale, 0.5);
        assert_eq!(fit.offset, Vec2::ZERO);
    }

    #[test]
    fn centers_along_the_slack_axis() {
        // Tall content in a square viewport: height limits the scale and the
        // leftover width is split evenly.
        let fit = fit_contain(Size::new(100.0, 200.0), Size::new(400.0, 400.0)).unwrap();
        assert_eq!(fit.scale, 2.0);
        assert_eq!(fit.offset, Vec2::new(100.0, 0.0));

        // Wide content: width limits the scale instead.
        let fit = fit_contain(Size::new(200.0, 100.0), Size::new(400.0, 400.0)).unwrap();
        assert_eq!(fit.scale, 2.0);
        assert_eq!(fit.offset, Vec2::new(0.0, 100.0));
    }

    #[test]
    fn small_content_is_scaled_up() {
        let fit = fit_contain(Size::new(10.0, 10.0), Size::new(100.0, 200.0)).unwrap();
        assert_eq!(fit.scale, 10.0);
        assert_eq!(fit.offset, Vec2::new(0.0, 50.0));
    }

    #[test]
    fn degenerate_dimensions_defer_the_fit() {
        let viewport = Size::new(400.0, 300.0);
        assert!(fit_contain(Size::new(0.0, 600.0), viewport).is_none());
        assert!(fit_contain(Size::new(800.0, 0.0), viewport).is_none());
        assert!(fit_contain(Size::ZERO, viewport).is_none());
        assert!(fit_contain(Size::new(800.0, 600.0), Size::new(0.0, 300.0)).is_none());
        assert!(fit_contain(Size::new(800.0, 600.0), Size::new(400.0, 0.0)).is_none());
    }
}
