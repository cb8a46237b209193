//! Viewport geometry primitives (pure).
//!
//! Everything in this module is a value type plus pure queries: no element
//! handles, no timers, no side effects. The near-viewport predicate is the
//! single geometric decision the lazy loader is built on.

/// Bounding rectangle of a tracked element, relative to the viewport top.
///
/// `top` and `bottom` are signed: an element scrolled partially (or fully)
/// above the viewport has a negative `top`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingRect {
    /// Distance from the viewport top to the element's top edge.
    pub top: i32,
    /// Distance from the viewport top to the element's bottom edge.
    pub bottom: i32,
}

impl BoundingRect {
    /// Create a new bounding rect.
    pub fn new(top: i32, bottom: i32) -> Self {
        Self { top, bottom }
    }

    /// Rendered height of the element, zero if the rect is degenerate.
    pub fn height(&self) -> i32 {
        (self.bottom - self.top).max(0)
    }
}

/// Last-measured element size. `{0, 0}` means "not measured yet or detached".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimensions {
    /// Measured width in cells.
    pub width: u16,
    /// Measured height in cells.
    pub height: u16,
}

impl Dimensions {
    /// The unmeasured sentinel.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Create new dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// True once both width and height are nonzero.
    ///
    /// The mount gate keys off this: wrapped content is never instantiated
    /// while either extent is zero.
    pub fn is_measured(&self) -> bool {
        self.width != 0 && self.height != 0
    }
}

/// Visible viewport height source.
///
/// Prefers the inner height and falls back to the document root height when
/// the inner height is unavailable (e.g. the host cannot report it yet).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    inner_height: Option<i32>,
    document_height: i32,
}

impl Viewport {
    /// Create a viewport with an optional inner height and a fallback.
    pub fn new(inner_height: Option<i32>, document_height: i32) -> Self {
        Self {
            inner_height,
            document_height,
        }
    }

    /// Create a viewport with a known, fixed height.
    pub fn fixed(height: i32) -> Self {
        Self {
            inner_height: Some(height),
            document_height: height,
        }
    }

    /// Effective viewport height: inner height, or the document fallback.
    pub fn height(&self) -> i32 {
        self.inner_height.unwrap_or(self.document_height)
    }
}

/// Near-viewport predicate.
///
/// True if the element's top edge lies within `[0, viewport_height + margin]`
/// or its bottom edge lies within `[-margin, viewport_height]`.
///
/// The margin is deliberately asymmetric: it extends the top-edge test past
/// the bottom of the viewport and the bottom-edge test above the top of the
/// viewport, and nothing else. Do not symmetrize.
pub fn is_near_viewport(rect: BoundingRect, viewport_height: i32, margin: u16) -> bool {
    let margin = i32::from(margin);
    (rect.top >= 0 && rect.top <= viewport_height + margin)
        || (rect.bottom >= -margin && rect.bottom <= viewport_height)
}
