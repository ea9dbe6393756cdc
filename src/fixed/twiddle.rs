//! Twiddle factor ROM for the 256-point transform.
//!
//! `W^k = cos(-2*pi*k/256) + j*sin(-2*pi*k/256)` for k in 0..128, stored as
//! raw Q16.16 bits. The values are the reference hardware's decimal twiddle
//! constants quantized by truncation toward negative infinity, so that
//! outputs stay bit-identical with it; every entry is within one LSB of the
//! exact value. The table is immutable and shared by every transform.

use super::types::{ComplexFixed, Fixed, Q16, Sample};
use crate::common::FFT_SIZE;

/// Number of stored coefficients (N/2).
pub const TWIDDLE_COUNT: usize = FFT_SIZE / 2;

#[rustfmt::skip]
static TW_RE: [i32; TWIDDLE_COUNT] = [
    65536, 65516, 65457, 65358, 65220, 65043, 64826, 64571,
    64276, 63943, 63571, 63162, 62714, 62228, 61705, 61144,
    60547, 59913, 59243, 58538, 57797, 57022, 56212, 55368,
    54491, 53581, 52639, 51665, 50660, 49624, 48558, 47464,
    46340, 45189, 44011, 42806, 41575, 40319, 39039, 37736,
    36409, 35061, 33692, 32302, 30893, 29465, 28020, 26557,
    25079, 23586, 22078, 20557, 19024, 17479, 15923, 14359,
    12785, 11204, 9616, 8022, 6423, 4821, 3215, 1608,
    0, -1609, -3216, -4822, -6424, -8023, -9617, -11205,
    -12786, -14360, -15924, -17480, -19025, -20558, -22079, -23587,
    -25080, -26558, -28021, -29466, -30894, -32303, -33693, -35062,
    -36410, -37737, -39040, -40320, -41576, -42807, -44012, -45190,
    -46341, -47465, -48559, -49625, -50661, -51666, -52640, -53582,
    -54492, -55369, -56213, -57023, -57798, -58539, -59244, -59914,
    -60548, -61145, -61706, -62229, -62715, -63163, -63572, -63944,
    -64277, -64572, -64827, -65044, -65221, -65359, -65458, -65517,
];

#[rustfmt::skip]
static TW_IM: [i32; TWIDDLE_COUNT] = [
    0, -1609, -3216, -4822, -6424, -8023, -9617, -11205,
    -12786, -14360, -15924, -17480, -19025, -20558, -22079, -23587,
    -25080, -26558, -28021, -29466, -30894, -32303, -33693, -35062,
    -36410, -37737, -39040, -40320, -41576, -42807, -44012, -45190,
    -46341, -47465, -48559, -49625, -50661, -51666, -52640, -53582,
    -54492, -55369, -56213, -57023, -57798, -58539, -59244, -59914,
    -60548, -61145, -61706, -62229, -62715, -63163, -63572, -63944,
    -64277, -64572, -64827, -65044, -65221, -65359, -65458, -65517,
    -65536, -65517, -65458, -65359, -65221, -65044, -64827, -64572,
    -64277, -63944, -63572, -63163, -62715, -62229, -61706, -61145,
    -60548, -59914, -59244, -58539, -57798, -57023, -56213, -55369,
    -54492, -53582, -52640, -51666, -50661, -49625, -48559, -47465,
    -46341, -45190, -44012, -42807, -41576, -40320, -39040, -37737,
    -36410, -35062, -33693, -32303, -30894, -29466, -28021, -26558,
    -25080, -23587, -22079, -20558, -19025, -17480, -15924, -14360,
    -12786, -11205, -9617, -8023, -6424, -4822, -3216, -1609,
];

/// Read-only view over the twiddle ROM.
pub struct TwiddleTable {
    re: &'static [i32; TWIDDLE_COUNT],
    im: &'static [i32; TWIDDLE_COUNT],
}

/// The single twiddle table, safe to read from any thread.
pub static TWIDDLES: TwiddleTable = TwiddleTable {
    re: &TW_RE,
    im: &TW_IM,
};

impl TwiddleTable {
    /// cos(-2*pi*k/256). Panics if `k >= 128`.
    #[inline]
    pub fn real_part(&self, k: usize) -> Q16 {
        Fixed::from_bits(self.re[k])
    }

    /// sin(-2*pi*k/256). Panics if `k >= 128`.
    #[inline]
    pub fn imag_part(&self, k: usize) -> Q16 {
        Fixed::from_bits(self.im[k])
    }

    #[inline]
    pub fn get(&self, k: usize) -> Sample {
        ComplexFixed::new(self.real_part(k), self.imag_part(k))
    }

    pub const fn len(&self) -> usize {
        TWIDDLE_COUNT
    }

    pub const fn is_empty(&self) -> bool {
        false
    }
}
