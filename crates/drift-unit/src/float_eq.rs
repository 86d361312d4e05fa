/// Minimal difference between values in around the 0.0..=1.0 scale.
pub const EQ_GRANULARITY: f32 = 0.00001;
/// Minimal difference between values in around the 1.0..=100.0 scale.
pub const EQ_GRANULARITY_100: f32 = 0.001;

/// [`f32`] equality used by the unit types.
///
/// * [`NaN`](f32::is_nan) values are equal.
/// * [`INFINITY`](f32::INFINITY) values are equal.
/// * [`NEG_INFINITY`](f32::NEG_INFINITY) values are equal.
/// * Finite values are equal if the difference is less than `granularity`.
pub fn about_eq(a: f32, b: f32, granularity: f32) -> bool {
    if a.is_nan() {
        b.is_nan()
    } else if a.is_infinite() {
        b.is_infinite() && a.is_sign_positive() == b.is_sign_positive()
    } else {
        (a - b).abs() < granularity
    }
}

/// [`f32`] hash compatible with [`about_eq`] equality.
pub fn about_eq_hash<H: std::hash::Hasher>(f: f32, granularity: f32, state: &mut H) {
    let (kind, group) = if f.is_nan() {
        (0u8, 0i64)
    } else if f.is_infinite() {
        (1, if f.is_sign_positive() { 1 } else { -1 })
    } else {
        (2, (f / granularity).round() as i64)
    };

    use std::hash::Hash;
    kind.hash(state);
    group.hash(state);
}

/// [`f32`] ordering compatible with [`about_eq`] equality.
pub fn about_eq_ord(a: f32, b: f32, granularity: f32) -> std::cmp::Ordering {
    if about_eq(a, b, granularity) {
        std::cmp::Ordering::Equal
    } else if a < b {
        std::cmp::Ordering::Less
    } else {
        std::cmp::Ordering::Greater
    }
}
