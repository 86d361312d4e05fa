use drift_motion::{AnimationRanges, ArcConfig, ElementRange};

/// Full sampler configuration.
///
/// Supplied to [`ScrollAnimation::new`] and immutable for the sampler lifetime. The
/// defaults match the recognized options table: `[0º, 360º]` rotation, `[0.8, 1]` scale,
/// `[0.3, 1]` opacity, zero element offsets and a 10 item `[-90º, 90º]` arc.
///
/// [`ScrollAnimation::new`]: crate::ScrollAnimation::new
#[derive(Debug, Default, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScrollAnimationConfig {
    /// Output ranges for rotation, scale and opacity.
    pub ranges: AnimationRanges,
    /// Entry/exit window tuning for element tracking mode.
    pub element_range: ElementRange,
    /// Arc layout used by [`ScrollAnimation::arc_items`].
    ///
    /// [`ScrollAnimation::arc_items`]: crate::ScrollAnimation::arc_items
    pub arc: ArcConfig,
}
