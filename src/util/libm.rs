/*!
A no-std module for the few floating point operations this crate needs.

`f64::trunc`, `f64::fract`, `f64::round` and `f64::abs` live in `std`, not
`core`. Amounts in a `Duration` are `f64`, and splitting an amount into a
whole number of calendar steps and a fractional carry needs truncation. So
when `std` isn't enabled, we provide them here.
*/

pub(crate) trait Float {
    fn trunc(self) -> Self;
    fn fract(self) -> Self;
    fn round(self) -> Self;
    fn abs(self) -> Self;
}

/// 2^52. Every `f64` with a magnitude at least this big is already an
/// integer.
const INTEGRAL_THRESHOLD: f64 = 4503599627370496.0;

impl Float for f64 {
    fn trunc(self) -> f64 {
        // NaN and infinities fail this comparison and pass through.
        if !(self.abs() < INTEGRAL_THRESHOLD) {
            return self;
        }
        // The magnitude is below 2^52, so the cast is exact and can't
        // saturate. Restore the sign so that, e.g., -0.5 truncates to -0.0.
        let truncated = (self as i64) as f64;
        f64::from_bits(truncated.to_bits() | (self.to_bits() & SIGN_BIT))
    }

    fn fract(self) -> f64 {
        self - self.trunc()
    }

    /// Rounds half away from zero.
    fn round(self) -> f64 {
        let t = Float::trunc(self);
        if Float::abs(self - t) >= 0.5 {
            t + f64::from_bits(1f64.to_bits() | (self.to_bits() & SIGN_BIT))
        } else {
            t
        }
    }

    fn abs(self) -> f64 {
        f64::from_bits(self.to_bits() & !SIGN_BIT)
    }
}

const SIGN_BIT: u64 = 1 << 63;
