use super::fixed::Fixed;
use super::super::math;
use num_complex::Complex64;

/// Complex fixed-point value. Real and imaginary parts always travel together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct ComplexFixed<const FRAC: u32> {
    pub re: Fixed<FRAC>,
    pub im: Fixed<FRAC>,
}

impl<const FRAC: u32> ComplexFixed<FRAC> {
    pub const ZERO: Self = Self {
        re: Fixed::ZERO,
        im: Fixed::ZERO,
    };

    pub const fn new(re: Fixed<FRAC>, im: Fixed<FRAC>) -> Self {
        Self { re, im }
    }

    /// Quantizes a float complex value, rounding each part to nearest.
    pub fn from_complex64(value: Complex64) -> Self {
        Self::new(Fixed::from_f64(value.re), Fixed::from_f64(value.im))
    }

    #[inline]
    pub fn to_complex64(self) -> Complex64 {
        Complex64::new(self.re.to_f64(), self.im.to_f64())
    }

    /// Squared magnitude, evaluated in f64 so it cannot overflow.
    #[inline]
    pub fn norm_sqr(self) -> f64 {
        let (re, im) = (self.re.to_f64(), self.im.to_f64());
        re * re + im * im
    }

    #[inline]
    pub fn magnitude(self) -> f64 {
        libm::sqrt(self.norm_sqr())
    }
}

impl<const FRAC: u32> From<ComplexFixed<FRAC>> for Complex64 {
    fn from(value: ComplexFixed<FRAC>) -> Self {
        value.to_complex64()
    }
}

use core::ops::{Add, AddAssign, Mul, Sub, SubAssign};

impl<const FRAC: u32> Add for ComplexFixed<FRAC> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        math::cadd(self, rhs)
    }
}

impl<const FRAC: u32> AddAssign for ComplexFixed<FRAC> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = math::cadd(*self, rhs);
    }
}

impl<const FRAC: u32> Sub for ComplexFixed<FRAC> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        math::csub(self, rhs)
    }
}

impl<const FRAC: u32> SubAssign for ComplexFixed<FRAC> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = math::csub(*self, rhs);
    }
}

impl<const FRAC: u32> Mul for ComplexFixed<FRAC> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        math::cmul(self, rhs)
    }
}

/// Scaling by a real fixed-point scalar.
impl<const FRAC: u32> Mul<Fixed<FRAC>> for ComplexFixed<FRAC> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Fixed<FRAC>) -> Self {
        Self::new(math::mul(self.re, rhs), math::mul(self.im, rhs))
    }
}
