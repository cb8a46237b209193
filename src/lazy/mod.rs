//! Framework-agnostic lazy loading with dimension reporting.
//!
//! Defers mounting of expensive card content until the tracked element is
//! near or inside the visible viewport, and injects the element's measured
//! dimensions into whatever gets mounted. The core is split into:
//!
//! - [`geometry`] — bounding rects, dimensions, the near-viewport predicate
//! - [`throttle`] — generic fixed-window throttle for event bursts
//! - [`lazy_load`] — the two-state lifecycle driving timers, throttled
//!   viewport events and frame-deferred measurement
//!
//! None of it touches a terminal or a clock directly; hosts inject
//! `Instant`s and implement [`ElementProbe`].

pub mod geometry;
pub mod lazy_load;
pub mod throttle;

pub use geometry::{is_near_viewport, BoundingRect, Dimensions, Viewport};
pub use lazy_load::{
    ElementProbe, LazyLoader, LazyOptions, LazyTuning, MountDecision, PlaceholderSizing,
    NEAR_VIEWPORT_MARGIN, RENDER_WAIT, THROTTLE_WINDOW,
};
pub use throttle::Throttle;
