// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use loupe_view::{TransformSink, ViewTransform, fit_contain};

use crate::config::GestureConfig;
use crate::controller::{GestureAction, GestureController, Phase};

/// One active viewing session: a single zoom target, its view transform, and
/// the gesture state driving it.
///
/// The session is the ownership boundary the rest of the system sees. It
/// replaces any module-wide "currently zoomed element" state: a target is
/// adopted by [`start`](Self::start), exclusively held while the session is
/// active, and handed back by [`stop`](Self::stop). Every input route and
/// every command short-circuits while no target is held, so callbacks that
/// race a teardown degrade to silent no-ops.
///
/// All methods run synchronously on the host's event loop; the session never
/// suspends, and samples are consumed strictly in delivery order.
///
/// ```rust
/// use kurbo::{Affine, Point, Size};
/// use loupe_gesture::ZoomSession;
/// use loupe_view::TransformSink;
///
/// #[derive(Debug, Default)]
/// struct Styled(Option<Affine>);
///
/// impl TransformSink for Styled {
///     fn apply_transform(&mut self, matrix: Affine) {
///         self.0 = Some(matrix);
///     }
/// }
///
/// let mut session = ZoomSession::new(Size::new(400.0, 300.0));
/// session.start(Styled::default());
///
/// // The image reports its natural size: the initial fit is applied.
/// session.content_ready(Size::new(800.0, 600.0));
/// assert_eq!(session.view().scale(), 0.5);
///
/// // Wheel zoom at the cursor, then tear down.
/// session.wheel(Point::new(200.0, 150.0), -1.0);
/// let styled = session.stop().unwrap();
/// assert!(styled.0.is_some());
/// ```
#[derive(Debug)]
pub struct ZoomSession<S> {
    view: ViewTransform,
    gestures: GestureController,
    target: Option<S>,
    viewport: Size,
    content: Option<Size>,
}

impl<S: TransformSink> ZoomSession<S> {
    /// Creates an inactive session for a viewport of the given size.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self::with_config(GestureConfig::default(), viewport)
    }

    /// Creates an inactive session with custom gesture tunables.
    #[must_use]
    pub fn with_config(config: GestureConfig, viewport: Size) -> Self {
        Self {
            view: ViewTransform::new(),
            gestures: GestureController::new(config),
            target: None,
            viewport,
            content: None,
        }
    }

    /// Whether a target is currently held.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    /// The held target, if any.
    #[must_use]
    pub fn target(&self) -> Option<&S> {
        self.target.as_ref()
    }

    /// Read access to the view transform state.
    ///
    /// The transform is mutated exclusively through this session; there is no
    /// mutable accessor.
    #[must_use]
    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    /// Current phase of the gesture state machine.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.gestures.phase()
    }

    /// Adopts `target` and activates the session.
    ///
    /// The view starts from identity. If the content dimensions are already
    /// known (a cached image), the initial fit is applied immediately;
    /// otherwise it waits for [`content_ready`](Self::content_ready).
    pub fn start(&mut self, target: S) {
        self.view.reset();
        self.gestures.reset();
        self.target = Some(target);
        self.refit();
    }

    /// Deactivates the session and returns the detached target.
    ///
    /// The view transform is reset to its initial state and all gesture
    /// tracking is dropped. By the time this returns, no queued-up input can
    /// mutate anything: every entry point checks for a held target first.
    pub fn stop(&mut self) -> Option<S> {
        self.gestures.reset();
        self.view.reset();
        self.content = None;
        self.target.take()
    }

    /// Updates the viewport dimensions used by subsequent fits.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Readiness signal: the content's natural dimensions became available.
    ///
    /// Records the size and applies the fit. Zero dimensions mean the content
    /// still is not ready, so the fit stays deferred.
    pub fn content_ready(&mut self, natural: Size) {
        self.content = Some(natural);
        self.refit();
    }

    /// Recomputes and applies the fit-to-viewport placement.
    ///
    /// A no-op while the session is inactive or the content dimensions are
    /// unknown or degenerate. The fit overwrites scale and origin wholesale;
    /// it never accumulates onto gesture state.
    pub fn refit(&mut self) {
        let Some(target) = self.target.as_mut() else {
            return;
        };
        let Some(content) = self.content else {
            return;
        };
        let Some(fit) = fit_contain(content, self.viewport) else {
            return;
        };
        self.view.set_scale(fit.scale);
        self.view.set_origin(fit.offset);
        self.view.materialize(target);
    }

    /// Pans the view by a screen-space delta and applies the result.
    pub fn pan_by(&mut self, delta: Vec2) {
        if self.is_active() {
            self.apply(GestureAction::Pan(delta));
        }
    }

    /// Zooms by `factor` around `anchor` and applies the result.
    ///
    /// Non-positive factors are ignored.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64) {
        if self.is_active() && factor > 0.0 {
            self.apply(GestureAction::ScaleAt { anchor, factor });
        }
    }

    /// Resets the view to identity and applies the result.
    pub fn reset(&mut self) {
        let Some(target) = self.target.as_mut() else {
            return;
        };
        self.view.reset();
        self.view.materialize(target);
    }

    /// Mouse button pressed at `position`.
    pub fn pointer_down(&mut self, position: Point) {
        if self.is_active() {
            self.gestures.pointer_down(position);
        }
    }

    /// Mouse moved to `position`.
    pub fn pointer_move(&mut self, position: Point) {
        if !self.is_active() {
            return;
        }
        if let Some(action) = self.gestures.pointer_move(position) {
            self.apply(action);
        }
    }

    /// Mouse button released.
    pub fn pointer_up(&mut self) {
        if self.is_active() {
            self.gestures.pointer_up();
        }
    }

    /// Mouse left the viewport.
    pub fn pointer_leave(&mut self) {
        if self.is_active() {
            self.gestures.pointer_leave();
        }
    }

    /// Wheel rotation at `position` with the scroll delta's y component.
    pub fn wheel(&mut self, position: Point, delta_y: f64) {
        if !self.is_active() {
            return;
        }
        if let Some(action) = self.gestures.wheel(position, delta_y) {
            self.apply(action);
        }
    }

    /// Touch contacts landed; `points` is the full set now down.
    pub fn touch_start(&mut self, points: &[Point]) {
        if self.is_active() {
            self.gestures.touch_start(points);
        }
    }

    /// Touch contacts moved; `points` is the full set currently down.
    pub fn touch_move(&mut self, points: &[Point]) {
        if !self.is_active() {
            return;
        }
        if let Some(action) = self.gestures.touch_move(points) {
            self.apply(action);
        }
    }

    /// Touch contacts lifted; `points` is the set that remains down.
    pub fn touch_end(&mut self, points: &[Point]) {
        if self.is_active() {
            self.gestures.touch_end(points);
        }
    }

    /// The platform cancelled the touch sequence.
    pub fn touch_cancel(&mut self, points: &[Point]) {
        if self.is_active() {
            self.gestures.touch_cancel(points);
        }
    }

    fn apply(&mut self, action: GestureAction) {
        let Some(target) = self.target.as_mut() else {
            return;
        };
        match action {
            GestureAction::Pan(delta) => self.view.pan(delta),
            GestureAction::ScaleAt { anchor, factor } => self.view.scale_at(anchor, factor),
        }
        self.view.materialize(target);
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point, Size, Vec2};

    use loupe_view::TransformSink;

    use super::ZoomSession;
    use crate::controller::Phase;

    #[derive(Debug, Default)]
    struct Recorder {
        last: Option<Affine>,
        writes: usize,
    }

    impl TransformSink for Recorder {
        fn apply_transform(&mut self, matrix: Affine) {
            self.last = Some(matrix);
            self.writes += 1;
        }
    }

    fn approx(a: [f64; 6], b: [f64; 6]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-9)
    }

    #[test]
    fn start_with_known_content_applies_the_fit() {
        let mut session = ZoomSession::new(Size::new(400.0, 300.0));
        session.content_ready(Size::new(800.0, 600.0));
        // Not active yet: nothing to apply to.
        assert!(!session.is_active());

        session.start(Recorder::default());
        assert_eq!(session.view().scale(), 0.5);
        assert_eq!(session.view().origin(), Vec2::ZERO);

        let target = session.target().unwrap();
        assert_eq!(target.writes, 1);
        assert_eq!(target.last, Some(Affine::new([0.5, 0.0, 0.0, 0.5, 0.0, 0.0])));
    }

    #[test]
    fn fit_is_deferred_until_content_is_ready() {
        let mut session = ZoomSession::new(Size::new(400.0, 400.0));
        session.start(Recorder::default());
        assert_eq!(session.target().unwrap().writes, 0);

        // Zero dimensions: still not ready.
        session.content_ready(Size::new(0.0, 200.0));
        assert_eq!(session.target().unwrap().writes, 0);
        assert_eq!(session.view().scale(), 1.0);

        session.content_ready(Size::new(100.0, 200.0));
        assert_eq!(session.target().unwrap().writes, 1);
        assert_eq!(session.view().scale(), 2.0);
        assert_eq!(session.view().origin(), Vec2::new(100.0, 0.0));
    }

    #[test]
    fn inactive_session_ignores_all_input() {
        let mut session = ZoomSession::<Recorder>::new(Size::new(400.0, 300.0));

        session.pointer_down(Point::new(10.0, 10.0));
        session.pointer_move(Point::new(20.0, 20.0));
        session.wheel(Point::new(30.0, 30.0), -1.0);
        session.touch_start(&[Point::new(0.0, 0.0), Point::new(50.0, 0.0)]);
        session.touch_move(&[Point::new(0.0, 0.0), Point::new(80.0, 0.0)]);
        session.pan_by(Vec2::new(5.0, 5.0));
        session.zoom_at(Point::new(1.0, 1.0), 2.0);

        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.view().scale(), 1.0);
        assert_eq!(session.view().origin(), Vec2::ZERO);
    }

    #[test]
    fn mouse_drag_pans_and_materializes() {
        let mut session = ZoomSession::new(Size::new(400.0, 300.0));
        session.start(Recorder::default());

        session.pointer_down(Point::new(10.0, 10.0));
        session.pointer_move(Point::new(15.0, 12.0));

        assert_eq!(session.view().origin(), Vec2::new(5.0, 2.0));
        let target = session.target().unwrap();
        assert_eq!(target.writes, 1);
        assert_eq!(target.last, Some(Affine::new([1.0, 0.0, 0.0, 1.0, 5.0, 2.0])));
    }

    #[test]
    fn wheel_zoom_is_anchored_at_the_cursor() {
        let mut session = ZoomSession::new(Size::new(400.0, 300.0));
        session.start(Recorder::default());

        session.wheel(Point::new(40.0, 30.0), -1.0);

        let coeffs = session.target().unwrap().last.unwrap().as_coeffs();
        assert!(approx(coeffs, [1.1, 0.0, 0.0, 1.1, -4.0, -3.0]));
    }

    #[test]
    fn pinch_drives_the_transform() {
        let mut session = ZoomSession::new(Size::new(400.0, 300.0));
        session.start(Recorder::default());

        session.touch_start(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
        assert_eq!(session.phase(), Phase::Pinching);
        session.touch_move(&[Point::new(0.0, 0.0), Point::new(110.0, 0.0)]);

        assert!((session.view().scale() - 1.1).abs() < 1e-12);
        assert_eq!(session.target().unwrap().writes, 1);
    }

    #[test]
    fn commands_apply_immediately() {
        let mut session = ZoomSession::new(Size::new(400.0, 300.0));
        session.start(Recorder::default());

        session.pan_by(Vec2::new(7.0, -3.0));
        assert_eq!(session.view().origin(), Vec2::new(7.0, -3.0));

        session.zoom_at(Point::new(0.0, 0.0), 2.0);
        assert_eq!(session.view().scale(), 2.0);

        // Invalid factors are dropped before they reach the transform.
        session.zoom_at(Point::new(0.0, 0.0), 0.0);
        assert_eq!(session.view().scale(), 2.0);

        let writes = session.target().unwrap().writes;
        session.reset();
        assert_eq!(session.view().scale(), 1.0);
        assert_eq!(session.target().unwrap().writes, writes + 1);
    }

    #[test]
    fn refit_uses_the_latest_viewport() {
        let mut session = ZoomSession::new(Size::new(400.0, 300.0));
        session.content_ready(Size::new(800.0, 600.0));
        session.start(Recorder::default());
        assert_eq!(session.view().scale(), 0.5);

        session.set_viewport(Size::new(800.0, 600.0));
        session.refit();
        assert_eq!(session.view().scale(), 1.0);
        assert_eq!(session.target().unwrap().writes, 2);
    }

    #[test]
    fn stop_detaches_resets_and_silences_input() {
        let mut session = ZoomSession::new(Size::new(400.0, 300.0));
        session.content_ready(Size::new(800.0, 600.0));
        session.start(Recorder::default());
        session.wheel(Point::new(10.0, 10.0), -1.0);

        let target = session.stop().expect("a target was held");
        assert_eq!(target.writes, 2);
        assert!(!session.is_active());
        assert_eq!(session.view().scale(), 1.0);
        assert_eq!(session.view().origin(), Vec2::ZERO);

        // Anything arriving after stop leaves no trace.
        session.pointer_down(Point::new(5.0, 5.0));
        session.pointer_move(Point::new(25.0, 25.0));
        session.touch_start(&[Point::new(0.0, 0.0), Point::new(40.0, 0.0)]);
        session.touch_move(&[Point::new(0.0, 0.0), Point::new(80.0, 0.0)]);
        session.wheel(Point::new(5.0, 5.0), -1.0);
        session.pan_by(Vec2::new(9.0, 9.0));
        assert_eq!(session.view().scale(), 1.0);
        assert_eq!(session.view().origin(), Vec2::ZERO);
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.stop().is_none());
    }

    #[test]
    fn restart_presents_a_fresh_view() {
        let mut session = ZoomSession::new(Size::new(400.0, 300.0));
        session.content_ready(Size::new(800.0, 600.0));
        session.start(Recorder::default());
        session.stop();

        // The previous image's dimensions do not leak into the next session.
        session.start(Recorder::default());
        assert_eq!(session.target().unwrap().writes, 0);
        assert_eq!(session.view().scale(), 1.0);

        session.content_ready(Size::new(200.0, 150.0));
        assert_eq!(session.view().scale(), 2.0);
        assert_eq!(session.target().unwrap().writes, 1);
    }
}
