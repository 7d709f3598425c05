//! Math utility functions.

use num_traits::Float;

/// Returns true if the value is close enough to zero to be treated as zero.
pub fn almost_zero<T: Float>(value: T) -> bool {
    value.abs() <= T::epsilon()
}

/// Replace a NaN (missing) value with zero.
pub fn normalize<T: Float>(value: T) -> T {
    if value.is_nan() {
        T::zero()
    } else {
        value
    }
}

/// Wrap a hue in degrees into [0, 360). A missing hue becomes zero.
pub fn normalize_hue<T: Float>(hue: T) -> T {
    let full = T::from(360.0).unwrap_or_else(T::zero);
    let hue = normalize(hue) % full;
    if hue < T::zero() {
        hue + full
    } else {
        hue
    }
}

/// Round a value in [0, 1] to the nearest 8-bit channel value. Values outside
/// the range are clamped first.
pub fn to_u8<T: Float>(value: T) -> u8 {
    let max = T::from(255.0).unwrap_or_else(T::one);
    (normalize(value).max(T::zero()).min(T::one()) * max)
        .round()
        .to_u8()
        .unwrap_or(0)
}

/// Convert an 8-bit channel value to a value in [0, 1].
pub fn from_u8<T: Float>(value: u8) -> T {
    let max = T::from(255.0).unwrap_or_else(T::one);
    T::from(value).unwrap_or_else(T::zero) / max
}
