// src/fixed/types/fixed.rs
/// Generic fixed-point structure based on the number of fractional bits (FRAC).
/// The internal value is stored as a signed 32-bit integer in two's complement.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Fixed<const FRAC: u32>(i32);

impl<const FRAC: u32> Fixed<FRAC> {
    pub const ZERO: Self = Self(0);

    /// Creates a Fixed from the raw integer value (without shift).
    #[inline]
    pub const fn from_bits(bits: i32) -> Self {
        Self(bits)
    }

    /// Returns the stored raw value.
    #[inline]
    pub const fn to_bits(self) -> i32 {
        self.0
    }

    /// Creates a Fixed from an integer, applying the necessary shift.
    /// E.g.: Fixed::<16>::from_int(1) will result in internal value 65536.
    /// Integers outside the representable range wrap.
    #[inline]
    pub const fn from_int(value: i32) -> Self {
        Self(value.wrapping_shl(FRAC))
    }

    /// Converts an f64 to Fixed, rounding to the nearest representable value.
    /// Out-of-range inputs saturate.
    pub fn from_f64(value: f64) -> Self {
        Self(libm::round(value * Self::scale()) as i32)
    }

    /// Converts an f64 to Fixed by truncating toward negative infinity,
    /// the quantization a plain cast to a fixed-point type performs.
    pub fn from_f64_truncated(value: f64) -> Self {
        Self(libm::floor(value * Self::scale()) as i32)
    }

    /// Real value represented: raw / 2^FRAC.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::scale()
    }

    #[inline]
    fn scale() -> f64 {
        (1u64 << FRAC) as f64
    }
}

use super::super::math;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

impl<const FRAC: u32> Add for Fixed<FRAC> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        math::add(self, rhs)
    }
}

impl<const FRAC: u32> AddAssign for Fixed<FRAC> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = math::add(*self, rhs);
    }
}

impl<const FRAC: u32> Sub for Fixed<FRAC> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        math::sub(self, rhs)
    }
}

impl<const FRAC: u32> SubAssign for Fixed<FRAC> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = math::sub(*self, rhs);
    }
}

impl<const FRAC: u32> Mul for Fixed<FRAC> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        math::mul(self, rhs)
    }
}

impl<const FRAC: u32> Neg for Fixed<FRAC> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }
}

use core::fmt;

impl<const FRAC: u32> fmt::Display for Fixed<FRAC> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.to_f64())
    }
}

impl<const FRAC: u32> fmt::Debug for Fixed<FRAC> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // In Debug, show both the decimal value and the raw value in parentheses
        write!(f, "{:.6} (raw: {})", self.to_f64(), self.0)
    }
}
