use std::sync::Arc;

use drift_motion::ElementBounds;
use drift_unit::Px;
use parking_lot::Mutex;

/// Reader of the host viewport's current scroll geometry.
///
/// The host environment (web view, native window, test harness) implements this and is the
/// only side that mutates scroll position, samplers are read-only consumers of it. All
/// methods report the values at call time, implementations must not cache across frames.
pub trait ViewportSource: Send + Sync + 'static {
    /// Vertical scroll distance from the document top.
    fn scroll_offset(&self) -> Px;

    /// Height of the visible viewport.
    fn viewport_height(&self) -> Px;

    /// Full height of the scrollable document.
    fn document_height(&self) -> Px;

    /// Current bounds of the tracked element, viewport relative.
    ///
    /// `None` tracks the whole document instead of one element.
    fn element_bounds(&self) -> Option<ElementBounds> {
        None
    }
}

#[derive(Debug)]
struct HeadlessData {
    scroll_offset: Px,
    viewport_height: Px,
    document_height: Px,
    element: Option<ElementBounds>,
}

/// In-memory [`ViewportSource`] for tests and headless use.
///
/// Clones share the same data, keep one clone to drive the values while a sampler reads
/// another.
#[derive(Debug, Clone)]
pub struct HeadlessViewport(Arc<Mutex<HeadlessData>>);
impl HeadlessViewport {
    /// New with zero scroll offset and no tracked element.
    pub fn new(viewport_height: Px, document_height: Px) -> Self {
        HeadlessViewport(Arc::new(Mutex::new(HeadlessData {
            scroll_offset: Px::ZERO,
            viewport_height,
            document_height,
            element: None,
        })))
    }

    /// Set the scroll offset.
    pub fn set_scroll_offset(&self, offset: Px) {
        self.0.lock().scroll_offset = offset;
    }

    /// Set the viewport height, as a host resize would.
    pub fn set_viewport_height(&self, height: Px) {
        self.0.lock().viewport_height = height;
    }

    /// Set the document height.
    pub fn set_document_height(&self, height: Px) {
        self.0.lock().document_height = height;
    }

    /// Set or clear the tracked element bounds.
    pub fn set_element(&self, bounds: Option<ElementBounds>) {
        self.0.lock().element = bounds;
    }
}
impl ViewportSource for HeadlessViewport {
    fn scroll_offset(&self) -> Px {
        self.0.lock().scroll_offset
    }

    fn viewport_height(&self) -> Px {
        self.0.lock().viewport_height
    }

    fn document_height(&self) -> Px {
        self.0.lock().document_height
    }

    fn element_bounds(&self) -> Option<ElementBounds> {
        self.0.lock().element
    }
}
