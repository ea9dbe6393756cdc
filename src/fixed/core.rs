// src/fixed/core.rs

use super::twiddle::TwiddleTable;
use super::types::Sample;
use crate::common::{FFT_SIZE, LOG2_FFT_SIZE};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// 8-bit bit reversal of an index in `0..256`.
///
/// This is an involution, so the same function maps natural order to
/// bit-reversed order and back.
#[inline]
pub fn reverse_bits_8(index: usize) -> usize {
    debug_assert!(index < FFT_SIZE);
    (index as u8).reverse_bits() as usize
}

/// Out-of-place bit-reversal permutation: `output[reverse_bits_8(i)] = input[i]`.
///
/// Both slices must hold `FFT_SIZE` samples. Every destination slot is
/// written exactly once, so whatever `output` held before is discarded.
pub(crate) fn bit_reverse_permute(input: &[Sample], output: &mut [Sample]) {
    debug_assert_eq!(input.len(), FFT_SIZE);
    debug_assert_eq!(output.len(), FFT_SIZE);

    for (i, &sample) in input.iter().enumerate() {
        output[reverse_bits_8(i)] = sample;
    }
}

/// Radix-2 Decimation-in-Time butterfly network over a bit-reversed frame.
///
/// Runs `LOG2_FFT_SIZE` stages in order. Stage `s` splits the buffer into
/// groups of `2^(s+1)` samples; within a group, the top half is paired with
/// the bottom half and the bottom operand is rotated by twiddle
/// `j * (FFT_SIZE >> (s + 1))`. On return the buffer holds the spectrum in
/// natural order.
pub(crate) fn butterfly_stages(buffer: &mut [Sample], twiddles: &TwiddleTable) {
    debug_assert_eq!(buffer.len(), FFT_SIZE);

    for stage in 0..LOG2_FFT_SIZE {
        run_stage(buffer, stage, twiddles);
    }
}

/// One stage of the network. All butterflies of a stage are independent;
/// the caller must not start the next stage before this returns.
pub(crate) fn run_stage(buffer: &mut [Sample], stage: u32, twiddles: &TwiddleTable) {
    let group_size = 1usize << (stage + 1);
    let twiddle_stride = FFT_SIZE / group_size;

    #[cfg(feature = "parallel")]
    buffer
        .par_chunks_mut(group_size)
        .for_each(|group| butterfly_group(group, twiddle_stride, twiddles));

    #[cfg(not(feature = "parallel"))]
    buffer
        .chunks_mut(group_size)
        .for_each(|group| butterfly_group(group, twiddle_stride, twiddles));
}

#[inline]
fn butterfly_group(group: &mut [Sample], twiddle_stride: usize, twiddles: &TwiddleTable) {
    let half = group.len() / 2;
    let (top, bottom) = group.split_at_mut(half);

    for (j, (a, b)) in top.iter_mut().zip(bottom.iter_mut()).enumerate() {
        let w = twiddles.get(j * twiddle_stride);

        // Both outputs come from the pre-update top value.
        let t = *b * w;
        let old_top = *a;
        *a = old_top + t;
        *b = old_top - t;
    }
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
