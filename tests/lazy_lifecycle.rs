//! End-to-end lifecycle scenarios for the lazy-load core, driven entirely
//! through the public API with injected clocks and a fake element probe.

use icv::lazy::{
    BoundingRect, Dimensions, ElementProbe, LazyLoader, LazyOptions, LazyTuning, MountDecision,
    Viewport,
};
use std::time::{Duration, Instant};

struct FakeElement {
    rect: Option<BoundingRect>,
    size: Dimensions,
}

impl ElementProbe for FakeElement {
    fn bounding_rect(&self) -> Option<BoundingRect> {
        self.rect
    }

    fn client_size(&self) -> Dimensions {
        self.size
    }
}

fn on_screen() -> FakeElement {
    FakeElement {
        rect: Some(BoundingRect::new(10, 50)),
        size: Dimensions::new(80, 40),
    }
}

fn far_below() -> FakeElement {
    FakeElement {
        rect: Some(BoundingRect::new(2000, 2100)),
        size: Dimensions::new(80, 40),
    }
}

fn viewport() -> Viewport {
    Viewport::fixed(800)
}

fn at(base: Instant, ms: u64) -> Instant {
    base + Duration::from_millis(ms)
}

fn mounted(loader: &LazyLoader) -> bool {
    matches!(loader.mount_decision(), MountDecision::Mount(_))
}

/// Drive one tick: fire due timers, then run the frame callback.
fn tick(loader: &mut LazyLoader, now: Instant, element: &FakeElement) {
    loader.poll(now, element, viewport());
    loader.on_frame(element);
}

#[test]
fn on_screen_element_mounts_after_the_settle_wait() {
    let mut loader = LazyLoader::new(LazyOptions::default());
    let element = on_screen();
    let base = Instant::now();

    loader.start(base);
    tick(&mut loader, at(base, 99), &element);
    assert!(!mounted(&loader));

    tick(&mut loader, at(base, 100), &element);
    assert!(mounted(&loader));
    assert_eq!(loader.dimensions(), Dimensions::new(80, 40));
}

#[test]
fn off_screen_element_without_delay_never_mounts() {
    let mut loader = LazyLoader::new(LazyOptions::default());
    let element = far_below();
    let base = Instant::now();

    loader.start(base);
    for ms in [100u64, 500, 5_000, 60_000, 600_000] {
        tick(&mut loader, at(base, ms), &element);
        assert!(!mounted(&loader), "mounted spuriously at {ms}ms");
    }
}

#[test]
fn off_screen_element_mounts_once_scrolled_near() {
    let mut loader = LazyLoader::new(LazyOptions::default());
    let base = Instant::now();

    loader.start(base);
    tick(&mut loader, at(base, 100), &far_below());
    assert!(!mounted(&loader));

    // The user scrolls the element to within the safety margin below the
    // viewport (top edge 830 <= 800 + 50).
    let near = FakeElement {
        rect: Some(BoundingRect::new(830, 930)),
        size: Dimensions::new(80, 40),
    };
    loader.handle_viewport_event(at(base, 400), &near, viewport());
    loader.on_frame(&near);
    assert!(mounted(&loader));
}

#[test]
fn configured_delay_mounts_no_earlier_than_the_delay() {
    let delay = Duration::from_millis(2_000);
    let mut loader = LazyLoader::new(LazyOptions {
        load_after_initial_rendering: Some(delay),
        ..LazyOptions::default()
    });
    let element = far_below();
    let base = Instant::now();

    loader.start(base);
    // The delay is armed at the initial check (100ms in), so the load can
    // never land before start + delay.
    for ms in [100u64, 500, 1_000, 1_999] {
        tick(&mut loader, at(base, ms), &element);
        assert!(!mounted(&loader), "mounted too early at {ms}ms");
    }

    tick(&mut loader, at(base, 2_200), &element);
    assert!(mounted(&loader));
    assert_eq!(loader.dimensions(), Dimensions::new(80, 40));
}

#[test]
fn stop_after_start_cancels_everything() {
    let mut loader = LazyLoader::new(LazyOptions {
        load_after_initial_rendering: Some(Duration::from_millis(100)),
        ..LazyOptions::default()
    });
    let element = on_screen();
    let base = Instant::now();

    loader.start(base);
    loader.handle_viewport_event(at(base, 10), &element, viewport());
    loader.stop();

    // Every pending timer, frame request and throttle window is gone.
    tick(&mut loader, at(base, 60_000), &element);
    assert!(!mounted(&loader));
    assert!(!loader.is_started());
}

#[test]
fn stop_then_restart_runs_a_fresh_lifecycle() {
    let mut loader = LazyLoader::new(LazyOptions::default());
    let element = on_screen();
    let base = Instant::now();

    loader.start(base);
    tick(&mut loader, at(base, 100), &element);
    assert!(mounted(&loader));

    loader.stop();
    loader.start(at(base, 1_000));
    assert!(!mounted(&loader));

    // The settle wait applies again from the restart.
    tick(&mut loader, at(base, 1_050), &element);
    assert!(!mounted(&loader));
    tick(&mut loader, at(base, 1_100), &element);
    assert!(mounted(&loader));
}

#[test]
fn events_before_start_are_ignored() {
    let mut loader = LazyLoader::new(LazyOptions::default());
    let element = on_screen();
    let base = Instant::now();

    loader.handle_viewport_event(base, &element, viewport());
    loader.on_frame(&element);
    tick(&mut loader, at(base, 10_000), &element);
    assert!(!mounted(&loader));
}

#[test]
fn custom_tuning_changes_the_settle_wait_and_margin() {
    let tuning = LazyTuning {
        render_wait: Duration::from_millis(500),
        near_viewport_margin: 300,
        ..LazyTuning::default()
    };
    let mut loader = LazyLoader::with_tuning(LazyOptions::default(), tuning);
    let base = Instant::now();

    // Top edge at 1000 is outside the default margin but inside 300.
    let widened = FakeElement {
        rect: Some(BoundingRect::new(1_000, 1_100)),
        size: Dimensions::new(80, 40),
    };

    loader.start(base);
    tick(&mut loader, at(base, 100), &widened);
    assert!(!mounted(&loader), "initial check fired before render_wait");

    // Initial check uses no margin, so a scroll event does the mounting.
    tick(&mut loader, at(base, 500), &widened);
    assert!(!mounted(&loader));
    loader.handle_viewport_event(at(base, 600), &widened, viewport());
    loader.on_frame(&widened);
    assert!(mounted(&loader));
}

#[test]
fn scroll_burst_coalesces_to_leading_plus_trailing() {
    let mut loader = LazyLoader::new(LazyOptions::default());
    let base = Instant::now();
    let mut element = on_screen();

    loader.start(base);
    loader.handle_viewport_event(at(base, 0), &element, viewport());
    loader.on_frame(&element);
    assert_eq!(loader.dimensions(), Dimensions::new(80, 40));

    // Ten more events inside the window while the element keeps growing.
    for ms in 1..=10 {
        element.size = Dimensions::new(80, 40 + ms as u16);
        loader.handle_viewport_event(at(base, ms * 15), &element, viewport());
        loader.on_frame(&element);
    }
    // None of them re-measured.
    assert_eq!(loader.dimensions(), Dimensions::new(80, 40));

    // The single trailing run picks up the final size.
    tick(&mut loader, at(base, 400), &element);
    assert_eq!(loader.dimensions(), Dimensions::new(80, 50));
}
