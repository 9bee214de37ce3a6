use crate::{CoreError, CoreResult};

/// Floating point type used throughout the workspace.
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> CoreResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// `sum / count`, unguarded: an empty collection yields NaN.
#[inline]
pub fn mean(sum: Real, count: usize) -> Real {
    sum / count as Real
}

/// `part / whole` as a fraction, unguarded: `0 / 0` yields NaN.
#[inline]
pub fn fraction(part: usize, whole: usize) -> Real {
    part as Real / whole as Real
}
