// src/common.rs

use crate::fixed::Sample;

/// Number of complex samples in one frame.
pub const FFT_SIZE: usize = 256;

/// Number of butterfly stages, log2(FFT_SIZE).
pub const LOG2_FFT_SIZE: u32 = 8;

/// Fractional bits of the sample format (Q16.16).
pub const FRAC_BITS: u32 = 16;

/// One frame of complex samples, indexed 0..FFT_SIZE.
pub type Frame = [Sample; FFT_SIZE];

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FftError {
    /// A slice handed to the transform does not hold exactly `FFT_SIZE` samples.
    SizeMismatch { len: usize },
    /// The input stream ended before the frame was complete.
    TruncatedFrame { received: usize },
    /// End-of-frame was asserted before the last sample.
    EarlyEndOfFrame { index: usize },
    /// The last sample of a frame arrived without end-of-frame.
    MissingEndOfFrame,
    /// A stream word did not carry a full sample.
    MalformedSample { index: usize },
    /// A pipeline worker hung up.
    PipelineClosed,
    /// A pipeline worker thread could not be started.
    PipelineSpawn,
}

use core::fmt;

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::SizeMismatch { len } => {
                write!(f, "Buffer holds {} samples, expected {}", len, FFT_SIZE)
            }
            FftError::TruncatedFrame { received } => write!(
                f,
                "Stream ended after {} of {} samples",
                received, FFT_SIZE
            ),
            FftError::EarlyEndOfFrame { index } => {
                write!(f, "End-of-frame asserted on sample {}", index)
            }
            FftError::MissingEndOfFrame => {
                write!(f, "End-of-frame not asserted on sample {}", FFT_SIZE - 1)
            }
            FftError::MalformedSample { index } => {
                write!(f, "Sample {} does not carry all 8 data bytes", index)
            }
            FftError::PipelineClosed => write!(f, "Pipeline stage disconnected"),
            FftError::PipelineSpawn => write!(f, "Failed to start pipeline worker"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// In-place transform of a complete frame held in a slice.
pub trait FftProcess<T> {
    fn process(&self, buffer: &mut [T]) -> Result<(), FftError>;
}
