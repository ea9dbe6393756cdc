// src/fixed/math.rs
//! Scalar and complex fixed-point arithmetic.
//!
//! These are the only places where raw bits are combined; the operator
//! traits on [`Fixed`] and [`ComplexFixed`] delegate here. All functions
//! are pure and bit-exact:
//!
//! - `add`/`sub` wrap on overflow (two's complement), they do not saturate.
//! - `mul` forms the full 64-bit product and drops the low `FRAC` bits with an
//!   arithmetic shift, i.e. it truncates toward negative infinity instead of
//!   rounding, then wraps to 32 bits. Rounding would be more accurate but
//!   would no longer reproduce the reference hardware output bit-for-bit.

use super::types::{ComplexFixed, Fixed};

#[inline]
pub const fn add<const FRAC: u32>(a: Fixed<FRAC>, b: Fixed<FRAC>) -> Fixed<FRAC> {
    Fixed::from_bits(a.to_bits().wrapping_add(b.to_bits()))
}

#[inline]
pub const fn sub<const FRAC: u32>(a: Fixed<FRAC>, b: Fixed<FRAC>) -> Fixed<FRAC> {
    Fixed::from_bits(a.to_bits().wrapping_sub(b.to_bits()))
}

#[inline]
pub const fn mul<const FRAC: u32>(a: Fixed<FRAC>, b: Fixed<FRAC>) -> Fixed<FRAC> {
    let product = a.to_bits() as i64 * b.to_bits() as i64;
    Fixed::from_bits((product >> FRAC) as i32)
}

#[inline]
pub const fn cadd<const FRAC: u32>(a: ComplexFixed<FRAC>, b: ComplexFixed<FRAC>) -> ComplexFixed<FRAC> {
    ComplexFixed::new(add(a.re, b.re), add(a.im, b.im))
}

#[inline]
pub const fn csub<const FRAC: u32>(a: ComplexFixed<FRAC>, b: ComplexFixed<FRAC>) -> ComplexFixed<FRAC> {
    ComplexFixed::new(sub(a.re, b.re), sub(a.im, b.im))
}

/// `(br + j*bi) * (wr + j*wi) = (br*wr - bi*wi) + j(br*wi + bi*wr)`.
///
/// Each of the four partial products is truncated on its own before the
/// sum/difference, as the reference datapath does.
#[inline]
pub const fn cmul<const FRAC: u32>(b: ComplexFixed<FRAC>, w: ComplexFixed<FRAC>) -> ComplexFixed<FRAC> {
    ComplexFixed::new(
        sub(mul(b.re, w.re), mul(b.im, w.im)),
        add(mul(b.re, w.im), mul(b.im, w.re)),
    )
}
