use super::{EQ_GRANULARITY, EQ_GRANULARITY_100, Factor, about_eq, about_eq_hash, about_eq_ord, lerp};

use std::{
    f32::consts::TAU,
    fmt, ops,
};

/// Angle in radians.
///
/// See [`AngleUnits`] for more details.
///
/// # Equality
///
/// Equality is determined using [`about_eq`] with `0.00001` granularity.
#[derive(Copy, Clone, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct AngleRadian(pub f32);
impl AngleRadian {
    /// Radians in `[0.0 ..= TAU]`.
    pub fn modulo(self) -> Self {
        AngleRadian(self.0.rem_euclid(TAU))
    }

    /// Linear interpolation.
    pub fn lerp(self, to: Self, factor: Factor) -> Self {
        Self(lerp(self.0, to.0, factor))
    }

    /// Cosine of the angle.
    pub fn cos(self) -> f32 {
        self.0.cos()
    }

    /// Sine of the angle.
    pub fn sin(self) -> f32 {
        self.0.sin()
    }
}
impl ops::Add for AngleRadian {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}
impl ops::AddAssign for AngleRadian {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}
impl ops::Sub for AngleRadian {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}
impl ops::SubAssign for AngleRadian {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}
impl ops::Neg for AngleRadian {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}
impl PartialEq for AngleRadian {
    fn eq(&self, other: &Self) -> bool {
        about_eq(self.0, other.0, EQ_GRANULARITY)
    }
}
impl Eq for AngleRadian {}
impl std::hash::Hash for AngleRadian {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        about_eq_hash(self.0, EQ_GRANULARITY, state);
    }
}
impl From<AngleDegree> for AngleRadian {
    fn from(deg: AngleDegree) -> Self {
        AngleRadian(deg.0.to_radians())
    }
}
impl From<AngleRadian> for euclid::Angle<f32> {
    fn from(rad: AngleRadian) -> Self {
        euclid::Angle::radians(rad.0)
    }
}
impl fmt::Debug for AngleRadian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_tuple("AngleRadian").field(&self.0).finish()
        } else {
            write!(f, "{}.rad()", self.0)
        }
    }
}
impl fmt::Display for AngleRadian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rad", self.0)
    }
}

/// Angle in degrees.
///
/// See [`AngleUnits`] for more details.
///
/// # Equality
///
/// Equality is determined using [`about_eq`] with `0.001` granularity.
#[derive(Copy, Clone, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct AngleDegree(pub f32);
impl AngleDegree {
    /// Degrees in `[0.0 ..= 360.0]`.
    pub fn modulo(self) -> Self {
        AngleDegree(self.0.rem_euclid(360.0))
    }

    /// Linear interpolation.
    pub fn lerp(self, to: Self, factor: Factor) -> Self {
        Self(lerp(self.0, to.0, factor))
    }
}
impl ops::Add for AngleDegree {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}
impl ops::AddAssign for AngleDegree {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}
impl ops::Sub for AngleDegree {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}
impl ops::SubAssign for AngleDegree {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}
impl ops::Neg for AngleDegree {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}
impl ops::Mul<f32> for AngleDegree {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self(self.0 * rhs)
    }
}
impl ops::Div<f32> for AngleDegree {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        Self(self.0 / rhs)
    }
}
impl ops::Mul<Factor> for AngleDegree {
    type Output = Self;

    fn mul(self, rhs: Factor) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}
impl PartialEq for AngleDegree {
    fn eq(&self, other: &Self) -> bool {
        about_eq(self.0, other.0, EQ_GRANULARITY_100)
    }
}
impl Eq for AngleDegree {}
impl std::hash::Hash for AngleDegree {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        about_eq_hash(self.0, EQ_GRANULARITY_100, state);
    }
}
impl PartialOrd for AngleDegree {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for AngleDegree {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        about_eq_ord(self.0, other.0, EQ_GRANULARITY_100)
    }
}
impl From<AngleRadian> for AngleDegree {
    fn from(rad: AngleRadian) -> Self {
        AngleDegree(rad.0.to_degrees())
    }
}
impl fmt::Debug for AngleDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_tuple("AngleDegree").field(&self.0).finish()
        } else {
            write!(f, "{}.deg()", self.0)
        }
    }
}
impl fmt::Display for AngleDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}º", self.0)
    }
}

/// Extension methods for initializing angle units.
///
/// This trait is implemented for [`f32`] and [`i32`] allowing initialization of angle unit types
/// using the `<number>.<unit>()` syntax.
///
/// # Examples
///
/// ```
/// # use drift_unit::*;
/// let radians = 6.28318.rad();
/// let degrees = 360.deg();
/// ```
pub trait AngleUnits {
    /// Radians.
    fn rad(self) -> AngleRadian;
    /// Degrees.
    fn deg(self) -> AngleDegree;
}
impl AngleUnits for f32 {
    fn rad(self) -> AngleRadian {
        AngleRadian(self)
    }

    fn deg(self) -> AngleDegree {
        AngleDegree(self)
    }
}
impl AngleUnits for i32 {
    fn rad(self) -> AngleRadian {
        AngleRadian(self as f32)
    }

    fn deg(self) -> AngleDegree {
        AngleDegree(self as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FactorUnits;
    use std::f32::consts::PI;

    #[test]
    pub fn zero() {
        assert_eq!(0.rad(), AngleRadian::from(0.deg()));
        assert_eq!(0.deg(), AngleDegree::from(0.rad()));
    }

    #[test]
    pub fn half_circle() {
        assert_eq!(PI.rad(), AngleRadian::from(180.deg()));
        assert_eq!(180.deg(), AngleDegree::from(PI.rad()));
    }

    #[test]
    pub fn full_circle() {
        assert_eq!(TAU.rad(), AngleRadian::from(360.deg()));
        assert_eq!(360.deg(), AngleDegree::from(TAU.rad()));
    }

    #[test]
    pub fn modulo_rad() {
        assert_eq!(PI.rad(), (TAU + PI).rad().modulo());
    }

    #[test]
    pub fn modulo_deg() {
        assert_eq!(180.deg(), 540.deg().modulo());
    }

    #[test]
    pub fn lerp_deg() {
        assert_eq!(180.deg(), 0.deg().lerp(360.deg(), 0.5.fct()));
    }
}
