use super::{EQ_GRANULARITY, EQ_GRANULARITY_100, about_eq, about_eq_hash, about_eq_ord, lerp};

use std::{fmt, ops};

/// Multiplication factor in percentage (0%-100%).
///
/// See [`FactorUnits`] for more details.
///
/// # Equality
///
/// Equality is determined using [`about_eq`] with `0.001` granularity.
#[derive(Copy, Clone, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct FactorPercent(pub f32);
impl FactorPercent {
    /// Clamp factor to `[0.0..=100.0]` range.
    pub fn clamp_range(self) -> Self {
        FactorPercent(self.0.max(0.0).min(100.0))
    }

    /// Convert to [`Factor`].
    pub fn as_normal(self) -> Factor {
        self.into()
    }
}
impl ops::Add for FactorPercent {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}
impl ops::AddAssign for FactorPercent {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}
impl ops::Sub for FactorPercent {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}
impl ops::SubAssign for FactorPercent {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}
impl ops::Neg for FactorPercent {
    type Output = Self;

    fn neg(self) -> Self::Output {
        FactorPercent(-self.0)
    }
}
impl PartialEq for FactorPercent {
    fn eq(&self, other: &Self) -> bool {
        about_eq(self.0, other.0, EQ_GRANULARITY_100)
    }
}
impl Eq for FactorPercent {}
impl std::hash::Hash for FactorPercent {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        about_eq_hash(self.0, EQ_GRANULARITY_100, state);
    }
}
impl PartialOrd for FactorPercent {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for FactorPercent {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        about_eq_ord(self.0, other.0, EQ_GRANULARITY_100)
    }
}
impl From<Factor> for FactorPercent {
    fn from(n: Factor) -> Self {
        FactorPercent(n.0 * 100.0)
    }
}
impl fmt::Debug for FactorPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_tuple("FactorPercent").field(&self.0).finish()
        } else {
            write!(f, "{}.pct()", self.0)
        }
    }
}
impl fmt::Display for FactorPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Normalized multiplication factor.
///
/// Values of this type are normalized to generally be in between `0.0` and `1.0` to indicate a fraction
/// of a unit. However, values are not clamped to this range, `Factor(2.0)` is a valid value and so are
/// negative values.
///
/// You can use the *suffix method* `1.0.fct()` to init a factor, see [`FactorUnits`] for more details.
///
/// # Equality
///
/// Equality is determined using [`about_eq`] with `0.00001` granularity.
#[derive(Copy, Clone, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Factor(pub f32);
impl Factor {
    /// Clamp factor to `[0.0..=1.0]` range.
    pub fn clamp_range(self) -> Self {
        Factor(self.0.max(0.0).min(1.0))
    }

    /// Returns the maximum of two factors.
    pub fn max(self, other: impl Into<Factor>) -> Factor {
        Factor(self.0.max(other.into().0))
    }

    /// Returns the minimum of two factors.
    pub fn min(self, other: impl Into<Factor>) -> Factor {
        Factor(self.0.min(other.into().0))
    }

    /// Returns `self` if `min <= self <= max`, returns `min` if `self < min` or returns `max` if `self > max`.
    pub fn clamp(self, min: impl Into<Factor>, max: impl Into<Factor>) -> Factor {
        self.min(max).max(min)
    }

    /// Computes the absolute value of self.
    pub fn abs(self) -> Factor {
        Factor(self.0.abs())
    }

    /// Flip factor, returns `1.0 - self`.
    pub fn flip(self) -> Factor {
        Factor(1.0 - self.0)
    }

    /// Linear interpolation between `self` and `to` by `factor`.
    pub fn lerp(self, to: Self, factor: Factor) -> Self {
        Self(lerp(self.0, to.0, factor))
    }

    /// Convert to [`FactorPercent`].
    pub fn as_percent(self) -> FactorPercent {
        self.into()
    }
}
impl ops::Add for Factor {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}
impl ops::AddAssign for Factor {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}
impl ops::Sub for Factor {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}
impl ops::SubAssign for Factor {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}
impl ops::Mul for Factor {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Factor(self.0 * rhs.0)
    }
}
impl ops::MulAssign for Factor {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
impl ops::Div for Factor {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Factor(self.0 / rhs.0)
    }
}
impl ops::DivAssign for Factor {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}
impl ops::Neg for Factor {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Factor(-self.0)
    }
}
impl PartialEq for Factor {
    fn eq(&self, other: &Self) -> bool {
        about_eq(self.0, other.0, EQ_GRANULARITY)
    }
}
impl Eq for Factor {}
impl std::hash::Hash for Factor {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        about_eq_hash(self.0, EQ_GRANULARITY, state);
    }
}
impl PartialOrd for Factor {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Factor {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        about_eq_ord(self.0, other.0, EQ_GRANULARITY)
    }
}
impl From<FactorPercent> for Factor {
    fn from(percent: FactorPercent) -> Self {
        Factor(percent.0 / 100.0)
    }
}
impl From<f32> for Factor {
    fn from(f: f32) -> Self {
        Factor(f)
    }
}
impl From<f64> for Factor {
    fn from(f: f64) -> Self {
        Factor(f as f32)
    }
}
impl From<bool> for Factor {
    fn from(b: bool) -> Self {
        Factor(if b { 1.0 } else { 0.0 })
    }
}
impl fmt::Debug for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_tuple("Factor").field(&self.0).finish()
        } else {
            write!(f, "{}.fct()", self.0)
        }
    }
}
impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Extension methods for initializing factor units.
///
/// This trait is implemented for [`f32`] and [`i32`] allowing initialization of factor unit types
/// using the `<number>.<unit>()` syntax.
///
/// # Examples
///
/// ```
/// # use drift_unit::*;
/// let percent = 100.pct();
/// let factor = 1.0.fct();
/// ```
pub trait FactorUnits {
    /// Percent factor.
    fn pct(self) -> FactorPercent;

    /// Normalized factor.
    ///
    /// # Note
    ///
    /// [`Factor`] implements `From<f32>`.
    fn fct(self) -> Factor;
}
impl FactorUnits for f32 {
    fn pct(self) -> FactorPercent {
        FactorPercent(self)
    }

    fn fct(self) -> Factor {
        self.into()
    }
}
impl FactorUnits for i32 {
    fn pct(self) -> FactorPercent {
        FactorPercent(self as f32)
    }

    fn fct(self) -> Factor {
        Factor(self as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn clamp_range() {
        assert_eq!(1.fct(), 1.5.fct().clamp_range());
        assert_eq!(0.fct(), (-0.5).fct().clamp_range());
        assert_eq!(0.5.fct(), 0.5.fct().clamp_range());
    }

    #[test]
    pub fn clamp_range_nan() {
        assert_eq!(0.fct(), Factor(f32::NAN).clamp_range());
    }

    #[test]
    pub fn percent_normal_roundtrip() {
        assert_eq!(0.5.fct(), 50.pct().as_normal());
        assert_eq!(50.pct(), 0.5.fct().as_percent());
    }

    #[test]
    pub fn lerp() {
        assert_eq!(0.8.fct(), 0.8.fct().lerp(1.fct(), 0.fct()));
        assert_eq!(1.fct(), 0.8.fct().lerp(1.fct(), 1.fct()));
        assert_eq!(0.9.fct(), 0.8.fct().lerp(1.fct(), 0.5.fct()));
    }
}
