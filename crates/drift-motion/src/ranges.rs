use drift_unit::{AngleDegree, AngleUnits, Factor, FactorPercent, FactorUnits, Px, PxUnits};

/// Configured `[min, max]` output ranges for the three mapped parameters.
///
/// Supplied once at setup time and immutable for the lifetime of a sampler. Each range is
/// interpolated independently, no mapped field depends on another.
///
/// Rotation tracks the progress input while scale and opacity track the absolute scroll
/// offset with their own saturation thresholds. The asymmetry is deliberate, rotation
/// follows an element through its entry/exit window while scale and opacity settle within
/// the first few hundred pixels of page scroll.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimationRanges {
    /// Rotation at 0% and 100% progress.
    pub rotation: [AngleDegree; 2],
    /// Scale at zero offset and at the saturation offset.
    pub scale: [Factor; 2],
    /// Opacity at zero offset and at the saturation offset.
    pub opacity: [Factor; 2],
    /// Scroll offset past which the scale stays at its range end.
    pub scale_saturation: Px,
    /// Scroll offset past which the opacity stays at its range end.
    pub opacity_saturation: Px,
}
impl Default for AnimationRanges {
    /// Full turn rotation, `[0.8, 1]` scale, `[0.3, 1]` opacity, `500px`/`300px` saturation.
    fn default() -> Self {
        AnimationRanges {
            rotation: [0.deg(), 360.deg()],
            scale: [0.8.fct(), 1.fct()],
            opacity: [0.3.fct(), 1.fct()],
            scale_saturation: 500.px(),
            opacity_saturation: 300.px(),
        }
    }
}
impl AnimationRanges {
    /// Derive the animation state for one scroll sample.
    ///
    /// The `progress` and the offset ratios are clamped before interpolating, so every
    /// output lies within its configured range. Same inputs always produce the same state.
    pub fn sample(&self, progress: FactorPercent, scroll_offset: Px, is_in_view: bool) -> AnimationState {
        let progress = progress.clamp_range();

        let rotation = self.rotation[0].lerp(self.rotation[1], progress.as_normal());
        let scale = self.scale[0].lerp(self.scale[1], (scroll_offset / self.scale_saturation).clamp_range());
        let opacity = self.opacity[0].lerp(self.opacity[1], (scroll_offset / self.opacity_saturation).clamp_range());

        AnimationState {
            scroll_offset,
            progress,
            rotation,
            scale,
            opacity,
            is_in_view,
        }
    }
}

/// Derived visual parameters for one scroll sample.
///
/// Fully determined by the sample and the configured [`AnimationRanges`], there is no
/// hidden state. The rendering layer reads this and applies the transforms, this crate
/// never renders anything itself.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationState {
    /// The raw scroll offset the state was derived from.
    pub scroll_offset: Px,
    /// Normalized progress through the configured range, `[0%, 100%]`.
    pub progress: FactorPercent,
    /// Interpolated rotation.
    pub rotation: AngleDegree,
    /// Interpolated scale.
    pub scale: Factor,
    /// Interpolated opacity.
    pub opacity: Factor,
    /// If the tracked element overlaps the viewport. Always `true` in whole-document mode.
    pub is_in_view: bool,
}
impl Default for AnimationState {
    /// State before the first sample, identity transform fully visible.
    fn default() -> Self {
        AnimationState {
            scroll_offset: Px::ZERO,
            progress: 0.pct(),
            rotation: 0.deg(),
            scale: 1.fct(),
            opacity: 1.fct(),
            is_in_view: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn zero_offset_rests_at_range_start() {
        let r = AnimationRanges::default();
        let s = r.sample(0.pct(), Px::ZERO, true);

        assert_eq!(0.pct(), s.progress);
        assert_eq!(0.deg(), s.rotation);
        assert_eq!(0.8.fct(), s.scale);
        assert_eq!(0.3.fct(), s.opacity);
    }

    #[test]
    pub fn scale_saturates_at_500px() {
        let r = AnimationRanges::default();

        assert_eq!(0.9.fct(), r.sample(0.pct(), 250.px(), true).scale);
        assert_eq!(1.fct(), r.sample(0.pct(), 500.px(), true).scale);
        assert_eq!(1.fct(), r.sample(0.pct(), 5000.px(), true).scale);
    }

    #[test]
    pub fn opacity_saturates_at_300px() {
        let r = AnimationRanges::default();

        assert_eq!(0.65.fct(), r.sample(0.pct(), 150.px(), true).opacity);
        assert_eq!(1.fct(), r.sample(0.pct(), 300.px(), true).opacity);
        assert_eq!(1.fct(), r.sample(0.pct(), 2000.px(), true).opacity);
    }

    #[test]
    pub fn saturation_ignores_rotation_range() {
        let mut r = AnimationRanges::default();
        r.rotation = [90.deg(), 270.deg()];

        assert_eq!(1.fct(), r.sample(0.pct(), 500.px(), true).scale);
        assert_eq!(1.fct(), r.sample(0.pct(), 300.px(), true).opacity);
    }

    #[test]
    pub fn rotation_tracks_progress() {
        let r = AnimationRanges::default();

        assert_eq!(0.deg(), r.sample(0.pct(), Px::ZERO, true).rotation);
        assert_eq!(180.deg(), r.sample(50.pct(), Px::ZERO, true).rotation);
        assert_eq!(360.deg(), r.sample(100.pct(), Px::ZERO, true).rotation);
    }

    #[test]
    pub fn progress_overflow_clamped() {
        let r = AnimationRanges::default();
        let s = r.sample(250.pct(), Px::ZERO, true);

        assert_eq!(100.pct(), s.progress);
        assert_eq!(360.deg(), s.rotation);
    }

    #[test]
    pub fn outputs_stay_in_custom_ranges() {
        let r = AnimationRanges {
            rotation: [(-15.0).deg(), 15.deg()],
            scale: [0.5.fct(), 0.6.fct()],
            opacity: [0.fct(), 0.4.fct()],
            ..Default::default()
        };

        for offset in [0.0, 10.0, 299.0, 300.0, 450.0, 500.0, 10_000.0] {
            let s = r.sample(document_like(offset), offset.px(), true);
            assert!(((-15.0).deg()..=15.deg()).contains(&s.rotation));
            assert!((0.5.fct()..=0.6.fct()).contains(&s.scale));
            assert!((0.fct()..=0.4.fct()).contains(&s.opacity));
        }
    }

    #[test]
    pub fn pure_function() {
        let r = AnimationRanges::default();
        let a = r.sample(33.3.pct(), 123.4.px(), true);
        let b = r.sample(33.3.pct(), 123.4.px(), true);

        assert_eq!(a, b);
        assert_eq!(a.rotation.0.to_bits(), b.rotation.0.to_bits());
        assert_eq!(a.scale.0.to_bits(), b.scale.0.to_bits());
        assert_eq!(a.opacity.0.to_bits(), b.opacity.0.to_bits());
    }

    fn document_like(offset: f32) -> FactorPercent {
        (offset / 2000.0 * 100.0).pct().clamp_range()
    }
}
