//! Module declarations, public re-exports, and shared bit helpers.
//!
//! Everything here operates on the raw IEEE-754 encoding (1 sign bit,
//! 11 exponent bits, 52 significand bits for f64) so the routines stay
//! exact for all magnitudes and need no libm or std support.

#![allow(clippy::unusual_byte_groupings)]

mod classify;
mod copysign;
mod modf;
mod modff;

pub use classify::{isinf, isnan, signbit};
pub use copysign::{copysign, fabs};
pub use modf::{modf, modf_assign};
pub use modff::modff;

// ========= bit helpers =========

#[inline(always)]
fn f64_from_bits(u: u64) -> f64 {
    f64::from_bits(u)
}
#[inline(always)]
fn f64_to_bits(x: f64) -> u64 {
    x.to_bits()
}

#[inline(always)]
fn get_exp_bits(u: u64) -> i32 {
    ((u >> 52) & 0x7ff) as i32
}
