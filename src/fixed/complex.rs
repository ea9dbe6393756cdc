use crate::common::{FftError, FftProcess, Frame, FFT_SIZE};
use super::core::{bit_reverse_permute, butterfly_stages};
use super::twiddle::{TwiddleTable, TWIDDLES};
use super::types::Sample;

/// 256-point forward FFT over Q16.16 complex samples.
///
/// The structure only borrows the shared twiddle ROM; it holds no per-frame
/// state, so one instance can serve any number of frames and threads.
/// Outputs are unscaled: bin 0 of a constant input `c` is `256 * c`, so inputs
/// must leave 8 bits of headroom to stay clear of wrap-around.
#[derive(Clone, Copy)]
pub struct Fft256 {
    twiddles: &'static TwiddleTable,
}

impl Default for Fft256 {
    fn default() -> Self {
        Self::new()
    }
}

impl Fft256 {
    pub fn new() -> Self {
        Self { twiddles: &TWIDDLES }
    }

    /// Transforms one frame in natural order into its spectrum in natural order.
    ///
    /// The input is left untouched; the butterflies run on a fresh working
    /// frame that becomes the result.
    pub fn transform(&self, input: &Frame) -> Frame {
        let mut work = self.bit_reverse(input);
        self.transform_bit_reversed(&mut work);
        work
    }

    /// Returns `input` in bit-reversed index order.
    pub fn bit_reverse(&self, input: &Frame) -> Frame {
        let mut out = [Sample::ZERO; FFT_SIZE];
        bit_reverse_permute(input, &mut out);
        out
    }

    /// Runs the butterfly network alone over a frame that is already in
    /// bit-reversed order.
    pub fn transform_bit_reversed(&self, work: &mut Frame) {
        butterfly_stages(work, self.twiddles);
    }

    /// Executes the FFT in-place on a slice holding exactly one frame.
    pub fn process(&self, buffer: &mut [Sample]) -> Result<(), FftError> {
        let len = buffer.len();
        let frame: &mut Frame = buffer
            .try_into()
            .map_err(|_| FftError::SizeMismatch { len })?;
        *frame = self.transform(frame);
        Ok(())
    }
}

impl FftProcess<Sample> for Fft256 {
    fn process(&self, buffer: &mut [Sample]) -> Result<(), FftError> {
        Fft256::process(self, buffer)
    }
}

/// Magnitude of every bin, in f64.
pub fn magnitude_spectrum(frame: &Frame) -> [f64; FFT_SIZE] {
    let mut out = [0.0; FFT_SIZE];
    for (dst, bin) in out.iter_mut().zip(frame.iter()) {
        *dst = bin.magnitude();
    }
    out
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
