mod fixed;
mod fixed_complex;

pub use fixed::Fixed;
pub use fixed_complex::ComplexFixed;

use crate::common::FRAC_BITS;

/// Q16.16 scalar: 16 integer bits including sign, 16 fractional bits.
pub type Q16 = Fixed<FRAC_BITS>;

/// Complex Q16.16 sample as carried through the transform.
pub type Sample = ComplexFixed<FRAC_BITS>;
