use super::{EQ_GRANULARITY_100, Factor, about_eq, about_eq_hash, about_eq_ord};

use std::{fmt, ops};

/// Fractional device pixels.
///
/// Scroll offsets, viewport dimensions and layout radii are all measured in this unit. Values
/// are `f32` so sub-pixel offsets reported by the host survive the derivation unchanged.
///
/// See [`PxUnits`] for more details.
///
/// # Equality
///
/// Equality is determined using [`about_eq`] with `0.001` granularity.
#[derive(Copy, Clone, Default, serde::Serialize, serde::Deserialize, bytemuck::Pod, bytemuck::Zeroable)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Px(pub f32);
impl Px {
    /// Zero pixels.
    pub const ZERO: Px = Px(0.0);

    /// Returns the maximum of two pixel values.
    pub fn max(self, other: Px) -> Px {
        Px(self.0.max(other.0))
    }

    /// Returns the minimum of two pixel values.
    pub fn min(self, other: Px) -> Px {
        Px(self.0.min(other.0))
    }

    /// Computes the absolute value of self.
    pub fn abs(self) -> Px {
        Px(self.0.abs())
    }
}
impl ops::Add for Px {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}
impl ops::AddAssign for Px {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}
impl ops::Sub for Px {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}
impl ops::SubAssign for Px {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}
impl ops::Neg for Px {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}
impl ops::Mul<f32> for Px {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self(self.0 * rhs)
    }
}
impl ops::Div<f32> for Px {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        Self(self.0 / rhs)
    }
}
impl ops::Mul<Factor> for Px {
    type Output = Px;

    fn mul(self, rhs: Factor) -> Px {
        Px(self.0 * rhs.0)
    }
}
impl ops::Div for Px {
    /// Pixel ratios are dimensionless factors.
    type Output = Factor;

    fn div(self, rhs: Self) -> Factor {
        Factor(self.0 / rhs.0)
    }
}
impl PartialEq for Px {
    fn eq(&self, other: &Self) -> bool {
        about_eq(self.0, other.0, EQ_GRANULARITY_100)
    }
}
impl Eq for Px {}
impl std::hash::Hash for Px {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        about_eq_hash(self.0, EQ_GRANULARITY_100, state);
    }
}
impl PartialOrd for Px {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Px {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        about_eq_ord(self.0, other.0, EQ_GRANULARITY_100)
    }
}
impl From<f32> for Px {
    fn from(px: f32) -> Self {
        Px(px)
    }
}
impl From<i32> for Px {
    fn from(px: i32) -> Self {
        Px(px as f32)
    }
}
impl fmt::Debug for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_tuple("Px").field(&self.0).finish()
        } else {
            write!(f, "{}.px()", self.0)
        }
    }
}
impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// A point in [`Px`] space.
pub type PxPoint = euclid::Point2D<f32, Px>;

/// A 2D offset in [`Px`] space.
pub type PxVector = euclid::Vector2D<f32, Px>;

/// Extension methods for initializing pixel units.
///
/// This trait is implemented for [`f32`] and [`i32`] allowing initialization of pixel unit types
/// using the `<number>.<unit>()` syntax.
///
/// # Examples
///
/// ```
/// # use drift_unit::*;
/// let offset = 500.px();
/// let radius = 200.5.px();
/// ```
pub trait PxUnits {
    /// Pixels.
    fn px(self) -> Px;
}
impl PxUnits for f32 {
    fn px(self) -> Px {
        Px(self)
    }
}
impl PxUnits for i32 {
    fn px(self) -> Px {
        Px(self as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FactorUnits;

    #[test]
    pub fn ratio() {
        assert_eq!(0.5.fct(), 250.px() / 500.px());
    }

    #[test]
    pub fn ratio_saturates_on_clamp() {
        assert_eq!(1.fct(), (750.px() / 500.px()).clamp_range());
    }

    #[test]
    pub fn zero_denominator_ratio_clamps_to_zero() {
        // 0/0 is NaN, clamp_range resolves it to the range start
        assert_eq!(0.fct(), (0.px() / 0.px()).clamp_range());
    }

    #[test]
    pub fn ordering() {
        assert!(1.px() < 2.px());
        assert_eq!(10.px(), 10.0001.px());
    }
}
