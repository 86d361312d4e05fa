use drift_unit::{FactorPercent, FactorUnits, Px};

/// Document geometry at the time of one scroll sample.
///
/// Captured fresh on every scroll or resize notification, never retained across samples.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DocumentMetrics {
    /// Vertical scroll distance from the document top.
    pub scroll_offset: Px,
    /// Height of the visible viewport.
    pub viewport_height: Px,
    /// Full height of the scrollable document.
    pub document_height: Px,
}
impl DocumentMetrics {
    /// New from the current host values.
    pub fn new(scroll_offset: Px, viewport_height: Px, document_height: Px) -> Self {
        DocumentMetrics {
            scroll_offset,
            viewport_height,
            document_height,
        }
    }

    /// Height the document can scroll, `document_height - viewport_height`.
    ///
    /// Zero or negative for pages that fit in one screen.
    pub fn scrollable_height(&self) -> Px {
        self.document_height - self.viewport_height
    }
}

/// Progress of the scroll offset over the whole document.
///
/// The returned progress is clamped to `[0%, 100%]` and is monotonically non-decreasing in
/// the scroll offset. Documents that fit in one screen have no scrollable height, for those
/// the progress is always zero.
pub fn document_progress(metrics: &DocumentMetrics) -> FactorPercent {
    let scrollable = metrics.scrollable_height();
    if scrollable <= Px::ZERO {
        return 0.pct();
    }
    (metrics.scroll_offset / scrollable).clamp_range().as_percent()
}

/// Position of a tracked element, relative to the viewport at sample time.
///
/// Recomputed every sample, the element moves in viewport space as the user scrolls.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementBounds {
    /// Distance from the viewport top to the element top, negative once the element
    /// top has scrolled past the viewport top.
    pub top: Px,
    /// Element height.
    pub height: Px,
}
impl ElementBounds {
    /// New from viewport relative top and element height.
    pub fn new(top: Px, height: Px) -> Self {
        ElementBounds { top, height }
    }

    /// Distance from the viewport top to the element bottom.
    pub fn bottom(&self) -> Px {
        self.top + self.height
    }

    /// Position of the element top in document space.
    pub fn absolute_top(&self, scroll_offset: Px) -> Px {
        self.top + scroll_offset
    }

    /// If the element box overlaps the viewport vertically.
    pub fn is_in_view(&self, viewport_height: Px) -> bool {
        self.top < viewport_height && self.bottom() > Px::ZERO
    }
}

/// Tuning offsets that stretch or shrink an element's scroll progress window.
///
/// Both default to zero, the window then spans from the element entering the viewport
/// bottom to its full height having scrolled in.
#[derive(Debug, Default, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ElementRange {
    /// Added to the window start.
    pub offset_top: Px,
    /// Added to the window end.
    pub offset_bottom: Px,
}
impl ElementRange {
    /// New with both offsets.
    pub fn new(offset_top: Px, offset_bottom: Px) -> Self {
        ElementRange { offset_top, offset_bottom }
    }

    /// Scroll offset where the element progress leaves zero.
    ///
    /// Never negative, elements near the document top start partially visible.
    pub fn scroll_start(&self, metrics: &DocumentMetrics, bounds: &ElementBounds) -> Px {
        let top_abs = bounds.absolute_top(metrics.scroll_offset);
        (top_abs - metrics.viewport_height + self.offset_top).max(Px::ZERO)
    }

    /// Scroll offset where the element progress reaches 100%.
    pub fn scroll_end(&self, metrics: &DocumentMetrics, bounds: &ElementBounds) -> Px {
        bounds.absolute_top(metrics.scroll_offset) + bounds.height + self.offset_bottom
    }
}

/// Progress of the scroll offset over one element's entry/exit window.
///
/// Zero before [`scroll_start`], 100% after [`scroll_end`], linear in between. A degenerate
/// window (`scroll_end <= scroll_start`) is a step function at the start offset.
///
/// [`scroll_start`]: ElementRange::scroll_start
/// [`scroll_end`]: ElementRange::scroll_end
pub fn element_progress(metrics: &DocumentMetrics, bounds: &ElementBounds, range: &ElementRange) -> FactorPercent {
    let start = range.scroll_start(metrics, bounds);
    let end = range.scroll_end(metrics, bounds);

    if end <= start {
        return if metrics.scroll_offset >= start { 100.pct() } else { 0.pct() };
    }

    ((metrics.scroll_offset - start) / (end - start)).clamp_range().as_percent()
}
