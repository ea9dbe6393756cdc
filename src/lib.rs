#![no_std]

// Tests and the threaded pipeline need the standard library;
// the transform itself runs without it.
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod common;
pub mod fixed;
pub mod stream;

#[cfg(feature = "std")]
pub mod pipeline;

pub use common::{FftError, FftProcess, Frame, FFT_SIZE, FRAC_BITS, LOG2_FFT_SIZE};
pub use fixed::{magnitude_spectrum, reverse_bits_8, ComplexFixed, Fft256, Fixed, Sample, Q16};
pub use stream::{FrameReader, StreamWord};
