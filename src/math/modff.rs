//! Single-precision decomposition, same semantics as [`modf`](super::modf)
//! on the f32 layout (1 sign bit, 8 exponent bits, 23 significand bits).

const SIGN_MASK: u32 = 0x8000_0000u32;
const MANT_MASK: u32 = 0x007f_ffffu32;

/// Splits `x` into `(integral, fractional)` parts.
#[inline(always)]
pub fn modff(x: f32) -> (f32, f32) {
    let ux = x.to_bits();
    let e = ((ux >> 23) & 0xff) as i32;
    let signed_zero = f32::from_bits(ux & SIGN_MASK);

    if e == 0xff {
        if (ux & MANT_MASK) != 0 {
            return (f32::NAN, f32::NAN);
        }
        return (x, signed_zero);
    }

    if e < 127 {
        return (signed_zero, x);
    }

    if e >= 127 + 23 {
        return (x, signed_zero);
    }

    let mask = (1u32 << (23 - (e - 127) as u32)) - 1;
    if (ux & mask) == 0 {
        return (x, signed_zero);
    }
    let int = f32::from_bits(ux & !mask);
    (int, x - int)
}
