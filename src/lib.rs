#![no_std]

#[cfg(test)]
extern crate std;

pub mod math;

pub use math::{copysign, fabs, isinf, isnan, modf, modf_assign, modff, signbit};
