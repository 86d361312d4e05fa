use drift_unit::{AngleDegree, AngleRadian, AngleUnits, Factor, FactorUnits, Px, PxUnits, PxVector};

use crate::AnimationState;

/// Static arc layout configuration.
///
/// Items are evenly distributed across the fixed angular span regardless of scroll state,
/// scrolling only adds a shared rotation offset on top of each item's base angle.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArcConfig {
    /// Arc radius.
    pub radius: Px,
    /// Number of items placed along the arc.
    pub item_count: usize,
    /// Angle of the first item.
    pub start_angle: AngleDegree,
    /// Angle of the last item.
    pub end_angle: AngleDegree,
    /// Damping applied to the scroll-driven rotation before it offsets the arc.
    pub rotation_speed: Factor,
}
impl Default for ArcConfig {
    /// `200px` radius, 10 items over `[-90º, 90º]`, `0.3` rotation damping.
    fn default() -> Self {
        ArcConfig {
            radius: 200.px(),
            item_count: 10,
            start_angle: (-90.0).deg(),
            end_angle: 90.deg(),
            rotation_speed: 0.3.fct(),
        }
    }
}
impl ArcConfig {
    /// Angular spacing between adjacent items.
    ///
    /// Zero for zero or one item, the sole item sits at [`start_angle`].
    ///
    /// [`start_angle`]: Self::start_angle
    pub fn angle_step(&self) -> AngleDegree {
        if self.item_count <= 1 {
            0.deg()
        } else {
            (self.end_angle - self.start_angle) / (self.item_count - 1) as f32
        }
    }

    /// Base angle of the item at `index`, before any scroll-driven rotation.
    pub fn base_angle(&self, index: usize) -> AngleDegree {
        self.start_angle + self.angle_step() * index as f32
    }

    /// Placement of the item at `index` for the current animation state.
    ///
    /// Scale and opacity pass through from the state unchanged, the whole arc fades and
    /// scales together, only position and facing differ per item.
    pub fn item(&self, index: usize, state: &AnimationState) -> ArcItem {
        let animated = self.base_angle(index) + state.rotation * self.rotation_speed;
        let rad = AngleRadian::from(animated);

        ArcItem {
            index,
            offset: PxVector::new(self.radius.0 * rad.cos(), self.radius.0 * rad.sin()),
            // items face outward, tangent to the arc
            rotation: animated + 90.deg(),
            scale: state.scale,
            opacity: state.opacity,
        }
    }

    /// Placement of every item for the current animation state.
    pub fn items<'a>(&'a self, state: &'a AnimationState) -> impl Iterator<Item = ArcItem> + 'a {
        (0..self.item_count).map(move |i| self.item(i, state))
    }
}

/// One item's placement along the arc.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArcItem {
    /// Item index in the arc.
    pub index: usize,
    /// 2D offset from the arc center.
    pub offset: PxVector,
    /// Facing rotation.
    pub rotation: AngleDegree,
    /// Scale, shared by all items of the arc.
    pub scale: Factor,
    /// Opacity, shared by all items of the arc.
    pub opacity: Factor,
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_unit::about_eq;

    fn state(rotation: AngleDegree) -> AnimationState {
        AnimationState {
            rotation,
            ..Default::default()
        }
    }

    #[test]
    pub fn four_items_over_half_circle() {
        let config = ArcConfig {
            item_count: 4,
            ..Default::default()
        };

        assert_eq!(60.deg(), config.angle_step());
        assert_eq!((-90.0).deg(), config.base_angle(0));
        assert_eq!((-30.0).deg(), config.base_angle(1));
        assert_eq!(30.deg(), config.base_angle(2));
        assert_eq!(90.deg(), config.base_angle(3));
    }

    #[test]
    pub fn first_and_last_item_positions() {
        let config = ArcConfig {
            item_count: 4,
            ..Default::default()
        };
        let state = state(0.deg());

        // -90º is straight up in y-down screen space
        let first = config.item(0, &state);
        assert!(about_eq(first.offset.x, 0.0, 0.001));
        assert!(about_eq(first.offset.y, -200.0, 0.001));

        let last = config.item(3, &state);
        assert!(about_eq(last.offset.x, 0.0, 0.001));
        assert!(about_eq(last.offset.y, 200.0, 0.001));
    }

    #[test]
    pub fn items_face_outward() {
        let config = ArcConfig::default();
        let state = state(0.deg());

        assert_eq!(0.deg(), config.item(0, &state).rotation);
    }

    #[test]
    pub fn rotation_offset_is_damped() {
        let config = ArcConfig::default();
        let state = state(100.deg());

        // 100º of scroll rotation moves the arc by 30º at the default 0.3 speed
        assert_eq!((-60.0).deg(), config.base_angle(0) + state.rotation * config.rotation_speed);
        assert_eq!(30.deg(), config.item(0, &state).rotation);
    }

    #[test]
    pub fn single_item_sits_at_start_angle() {
        let config = ArcConfig {
            item_count: 1,
            ..Default::default()
        };
        let state = state(0.deg());

        let item = config.item(0, &state);
        assert_eq!((-90.0).deg() + 90.deg(), item.rotation);
        assert!(item.offset.x.is_finite());
        assert!(item.offset.y.is_finite());
        assert!(about_eq(item.offset.y, -200.0, 0.001));
    }

    #[test]
    pub fn items_share_state_scale_and_opacity() {
        let config = ArcConfig::default();
        let state = AnimationState {
            scale: 0.9.fct(),
            opacity: 0.5.fct(),
            ..Default::default()
        };

        for item in config.items(&state) {
            assert_eq!(0.9.fct(), item.scale);
            assert_eq!(0.5.fct(), item.opacity);
        }
    }

    #[test]
    pub fn items_yields_item_count() {
        let config = ArcConfig::default();
        let state = state(0.deg());

        assert_eq!(10, config.items(&state).count());
    }
}
