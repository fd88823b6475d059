//! Decomposition of an f64 into integral and fractional parts.
//!
//! Works directly on the bit pattern: the significand bits below the
//! binary point implied by the exponent are masked off to form the
//! integral part, and the fractional part is the exact floating-point
//! remainder. This stays correct for magnitudes far beyond any integer
//! type, where a cast-and-subtract approach would overflow or lose bits.

use super::{f64_from_bits, f64_to_bits, get_exp_bits};

const SIGN_MASK: u64 = 0x8000_0000_0000_0000u64;
const MANT_MASK: u64 = 0x000f_ffff_ffff_ffffu64;

/// Splits `x` into `(integral, fractional)` parts.
///
/// Both parts carry the sign of `x`; the integral part is `x` truncated
/// toward zero and the fractional part satisfies `integral + fractional == x`
/// exactly, with magnitude strictly below 1. Total over all bit patterns:
/// NaN yields `(NaN, NaN)`, ±infinity yields `(±inf, ±0.0)`, and signed
/// zeros are preserved in both outputs.
#[inline(always)]
pub fn modf(x: f64) -> (f64, f64) {
    let ux = f64_to_bits(x);
    let e = get_exp_bits(ux);
    let signed_zero = f64_from_bits(ux & SIGN_MASK);

    if e == 0x7ff {
        if (ux & MANT_MASK) != 0 {
            return (f64::NAN, f64::NAN);
        }
        return (x, signed_zero);
    }

    // |x| < 1: the whole value is fractional (covers ±0 and subnormals).
    if e < 1023 {
        return (signed_zero, x);
    }

    // No significand bits below the binary point remain representable.
    if e >= 1023 + 52 {
        return (x, signed_zero);
    }

    let mask = (1u64 << (52 - (e - 1023) as u32)) - 1;
    if (ux & mask) == 0 {
        return (x, signed_zero);
    }
    let int = f64_from_bits(ux & !mask);
    (int, x - int)
}

/// Splits `x` and writes the parts into caller-owned storage:
/// the integral part at `out[offset]` and the fractional part at
/// `out[offset + stride]` (`stride` may be negative).
///
/// No allocation is performed; `out` must already hold both slots, and
/// out-of-range placement panics like any slice index.
#[inline]
pub fn modf_assign(x: f64, out: &mut [f64], stride: isize, offset: usize) {
    let (int, frac) = modf(x);
    out[offset] = int;
    out[(offset as isize + stride) as usize] = frac;
}
