//! Deferred-mount lifecycle state machine (pure core).
//!
//! [`LazyLoader`] withholds mounting of expensive card content until the
//! tracked element is near the visible viewport or a configured delay has
//! elapsed, and reports the element's measured dimensions to whatever gets
//! mounted.
//!
//! The loader is framework-agnostic by construction:
//!
//! - element access goes through the [`ElementProbe`] trait, so tests run
//!   against a plain struct instead of a rendering environment;
//! - timers are explicit deadlines fired by [`LazyLoader::poll`];
//! - animation-frame work is modelled by [`LazyLoader::on_frame`], which the
//!   host calls once per render pass.
//!
//! Nothing in here can fail: "not started", "not visible" and "not measured"
//! are normal transient states that all resolve to rendering a placeholder.

use std::time::{Duration, Instant};

use super::geometry::{is_near_viewport, BoundingRect, Dimensions, Viewport};
use super::throttle::Throttle;

/// Default throttle window for scroll/resize bursts.
pub const THROTTLE_WINDOW: Duration = Duration::from_millis(200);

/// Default settle wait after start before the first visibility check.
pub const RENDER_WAIT: Duration = Duration::from_millis(100);

/// Default safety margin (cells) around the viewport for lazy loading.
pub const NEAR_VIEWPORT_MARGIN: u16 = 50;

/// Access to the tracked element's current geometry.
///
/// Implementations report `None` / [`Dimensions::ZERO`] while the element is
/// detached (before layout or after teardown); the loader treats that as
/// "not ready yet", never as an error.
pub trait ElementProbe {
    /// Bounding rect relative to the viewport top, `None` when detached.
    fn bounding_rect(&self) -> Option<BoundingRect>;

    /// Current rendered size, `{0, 0}` when detached.
    fn client_size(&self) -> Dimensions;
}

/// Caller-supplied wrap-time options. Unset means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LazyOptions {
    /// Upper bound on placeholder width.
    pub max_width: Option<u16>,
    /// Upper bound on placeholder height.
    pub max_height: Option<u16>,
    /// Force an eventual load this long after start even if the element
    /// never becomes visible, and opt into continuous re-measurement during
    /// scrolling for smoother perceived loading.
    pub load_after_initial_rendering: Option<Duration>,
}

/// Runtime tuning knobs, separate from per-wrap [`LazyOptions`] so the host
/// can apply them globally from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazyTuning {
    /// Throttle window for viewport event bursts.
    pub throttle_window: Duration,
    /// Settle wait before the initial visibility check.
    pub render_wait: Duration,
    /// Safety margin used by scroll/resize evaluations.
    pub near_viewport_margin: u16,
}

impl Default for LazyTuning {
    fn default() -> Self {
        Self {
            throttle_window: THROTTLE_WINDOW,
            render_wait: RENDER_WAIT,
            near_viewport_margin: NEAR_VIEWPORT_MARGIN,
        }
    }
}

/// Sizing policy for the placeholder that occupies the element's box while
/// the content is unmounted, so geometry measurement remains possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderSizing {
    /// Stretch edge-to-edge over the positioned ancestor.
    FillParent,
    /// Fill 100% of the parent, bounded by the configured maxima.
    Bounded {
        /// Width bound, if configured.
        max_width: Option<u16>,
        /// Height bound, if configured.
        max_height: Option<u16>,
    },
}

/// Pure rendering decision produced by the mount gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountDecision {
    /// Mount the wrapped content with the measured dimensions injected.
    Mount(Dimensions),
    /// Keep rendering the placeholder.
    Placeholder(PlaceholderSizing),
}

/// Two-state (started/stopped) lazy-load lifecycle for one tracked element.
///
/// Each instance owns its state exclusively; nothing is shared across
/// tracked elements.
#[derive(Debug, Clone)]
pub struct LazyLoader {
    options: LazyOptions,
    tuning: LazyTuning,
    throttle: Throttle,
    started: bool,
    /// One-shot deadline for the initial visibility check.
    initial_check_at: Option<Instant>,
    /// One-shot deadline for the configured after-initial-render load.
    /// At most one is pending at a time; re-arming overwrites.
    deferred_load_at: Option<Instant>,
    /// A measurement was requested for the next frame.
    frame_requested: bool,
    dimensions: Dimensions,
}

impl LazyLoader {
    /// Create a stopped loader with default tuning.
    pub fn new(options: LazyOptions) -> Self {
        Self::with_tuning(options, LazyTuning::default())
    }

    /// Create a stopped loader with explicit tuning.
    pub fn with_tuning(options: LazyOptions, tuning: LazyTuning) -> Self {
        let throttle = Throttle::new(tuning.throttle_window);
        Self {
            options,
            tuning,
            throttle,
            started: false,
            initial_check_at: None,
            deferred_load_at: None,
            frame_requested: false,
            dimensions: Dimensions::ZERO,
        }
    }

    /// Whether the lifecycle is currently started.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Last-measured dimensions, `{0, 0}` until the first measurement.
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// The wrap-time options this loader was created with.
    pub fn options(&self) -> &LazyOptions {
        &self.options
    }

    /// Transition to started: reset state and arm the initial check to fire
    /// `render_wait` after `now`. Restarting a started loader re-arms from
    /// scratch.
    pub fn start(&mut self, now: Instant) {
        self.throttle.reset();
        self.deferred_load_at = None;
        self.frame_requested = false;
        self.dimensions = Dimensions::ZERO;
        self.initial_check_at = Some(now + self.tuning.render_wait);
        self.started = true;
    }

    /// Transition to stopped: cancel both deadlines and any pending frame
    /// request unconditionally. Cancelling a timer that never started or
    /// already fired is a no-op.
    pub fn stop(&mut self) {
        self.started = false;
        self.initial_check_at = None;
        self.deferred_load_at = None;
        self.frame_requested = false;
        self.throttle.reset();
    }

    /// Fire any due deadlines and release a pending throttled evaluation.
    ///
    /// The host calls this once per event-loop tick. Does nothing while
    /// stopped.
    pub fn poll(&mut self, now: Instant, probe: &dyn ElementProbe, viewport: Viewport) {
        if !self.started {
            return;
        }

        if self.initial_check_at.is_some_and(|at| now >= at) {
            self.initial_check_at = None;
            if self.is_near(probe, viewport, 0) {
                self.measure(probe);
            } else if let Some(delay) = self.options.load_after_initial_rendering {
                self.deferred_load_at = Some(now + delay);
            }
            // Otherwise stay unmeasured until a real viewport event.
        }

        if self.deferred_load_at.is_some_and(|at| now >= at) {
            self.deferred_load_at = None;
            self.frame_requested = true;
        }

        if self.throttle.release(now) {
            self.evaluate(probe, viewport);
        }
    }

    /// Handle a scroll, resize or orientation-change event at `now`.
    ///
    /// Throttled to one evaluation per window; bursts coalesce into a
    /// leading run plus one trailing run released by [`LazyLoader::poll`].
    pub fn handle_viewport_event(
        &mut self,
        now: Instant,
        probe: &dyn ElementProbe,
        viewport: Viewport,
    ) {
        if !self.started {
            return;
        }
        if self.throttle.record(now) {
            self.evaluate(probe, viewport);
        }
    }

    /// Run deferred frame work: execute a requested measurement.
    ///
    /// The host calls this once per render pass, mirroring an
    /// animation-frame callback.
    pub fn on_frame(&mut self, probe: &dyn ElementProbe) {
        if self.started && self.frame_requested {
            self.frame_requested = false;
            self.measure(probe);
        }
    }

    /// The mount gate: mount the wrapped content only once both dimensions
    /// are nonzero, otherwise keep the placeholder with its sizing policy.
    pub fn mount_decision(&self) -> MountDecision {
        if self.dimensions.is_measured() {
            MountDecision::Mount(self.dimensions)
        } else if self.options.max_width.is_some() || self.options.max_height.is_some() {
            MountDecision::Placeholder(PlaceholderSizing::Bounded {
                max_width: self.options.max_width,
                max_height: self.options.max_height,
            })
        } else {
            MountDecision::Placeholder(PlaceholderSizing::FillParent)
        }
    }

    /// Throttled evaluation body: request a re-measurement on the next frame
    /// if the element is near the viewport, or unconditionally when a
    /// deferred load is configured (continuous re-measurement opt-in).
    fn evaluate(&mut self, probe: &dyn ElementProbe, viewport: Viewport) {
        let load_to_improve_scrolling = self.options.load_after_initial_rendering.is_some();
        if self.is_near(probe, viewport, self.tuning.near_viewport_margin)
            || load_to_improve_scrolling
        {
            self.frame_requested = true;
        }
    }

    /// Overwrite dimensions with the element's current client size.
    fn measure(&mut self, probe: &dyn ElementProbe) {
        self.dimensions = probe.client_size();
    }

    fn is_near(&self, probe: &dyn ElementProbe, viewport: Viewport, margin: u16) -> bool {
        match probe.bounding_rect() {
            Some(rect) => is_near_viewport(rect, viewport.height(), margin),
            // No element attached: a "not ready yet" signal, not an error.
            None => false,
        }
    }
}
