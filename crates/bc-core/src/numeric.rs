use crate::BcError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, BcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(BcError::NonFinite { what, value: v })
    }
}

/// Guarded ratio: `num / den` when the denominator is strictly positive,
/// 0.0 otherwise. The guard is on sign only; a vanishingly small positive
/// denominator still divides and can overflow.
pub fn ratio_or_zero(num: Real, den: Real) -> Real {
    if den > 0.0 { num / den } else { 0.0 }
}

/// max(0, v): negative work contributions clamp to zero.
pub fn positive_part(v: Real) -> Real {
    v.max(0.0)
}
