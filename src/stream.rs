// src/stream.rs
//! Boundary between the packed sample stream and the transform.
//!
//! A stream word carries one complex sample in 64 bits: the real part's raw
//! Q16.16 bits in bits 63..32 and the imaginary part's in bits 31..0. `keep`
//! flags which of the 8 data bytes are valid and `last` marks the final
//! sample of a frame.
//!
//! Framing is checked here, before the core sees any data. A frame that is
//! short, long, or carries a partial sample is rejected whole; nothing is
//! padded or cut to size.

use crate::common::{FftError, Frame, FFT_SIZE};
use crate::fixed::{Fft256, Fixed, Sample};
use log::{trace, warn};

/// `keep` value of a word whose 8 data bytes are all valid.
pub const KEEP_ALL: u8 = 0xFF;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StreamWord {
    pub data: u64,
    pub keep: u8,
    pub last: bool,
}

impl StreamWord {
    /// A word with all data bytes valid.
    pub const fn new(data: u64, last: bool) -> Self {
        Self {
            data,
            keep: KEEP_ALL,
            last,
        }
    }

    pub const fn from_sample(sample: Sample, last: bool) -> Self {
        Self::new(pack(sample), last)
    }

    pub const fn sample(&self) -> Sample {
        unpack(self.data)
    }
}

/// Packs a sample: real part in the upper 32 bits, imaginary part in the lower 32.
#[inline]
pub const fn pack(sample: Sample) -> u64 {
    ((sample.re.to_bits() as u32 as u64) << 32) | (sample.im.to_bits() as u32 as u64)
}

#[inline]
pub const fn unpack(data: u64) -> Sample {
    Sample::new(
        Fixed::from_bits((data >> 32) as u32 as i32),
        Fixed::from_bits(data as u32 as i32),
    )
}

/// Encodes a frame in index order, with `last` set on the final word only.
pub fn encode_frame(frame: &Frame) -> [StreamWord; FFT_SIZE] {
    let mut words = [StreamWord::new(0, false); FFT_SIZE];
    for (i, (word, sample)) in words.iter_mut().zip(frame.iter()).enumerate() {
        *word = StreamWord::from_sample(*sample, i == FFT_SIZE - 1);
    }
    trace!("encoded frame of {} words", FFT_SIZE);
    words
}

/// Splits a word stream into frames.
///
/// Yields `None` once the stream ends on a frame boundary. After a rejected
/// frame the reader continues with the word following that frame's
/// end-of-frame marker, so one bad frame does not corrupt the next.
pub struct FrameReader<I> {
    words: I,
}

impl<I> FrameReader<I>
where
    I: Iterator<Item = StreamWord>,
{
    pub fn new(words: I) -> Self {
        Self { words }
    }

    pub fn into_inner(self) -> I {
        self.words
    }

    pub fn read_frame(&mut self) -> Option<Result<Frame, FftError>> {
        let mut frame = [Sample::ZERO; FFT_SIZE];

        for (index, slot) in frame.iter_mut().enumerate() {
            let word = match self.words.next() {
                Some(word) => word,
                None if index == 0 => return None,
                None => {
                    warn!("stream ended after {} samples, dropping partial frame", index);
                    return Some(Err(FftError::TruncatedFrame { received: index }));
                }
            };

            let is_last = index == FFT_SIZE - 1;

            if word.keep != KEEP_ALL {
                warn!("sample {} has keep mask {:#04x}, dropping frame", index, word.keep);
                if !word.last {
                    self.skip_to_boundary();
                }
                return Some(Err(FftError::MalformedSample { index }));
            }
            if word.last && !is_last {
                warn!("end-of-frame on sample {}, dropping short frame", index);
                return Some(Err(FftError::EarlyEndOfFrame { index }));
            }
            if !word.last && is_last {
                let extra = self.skip_to_boundary();
                warn!("frame overran by at least {} samples, dropping it", extra + 1);
                return Some(Err(FftError::MissingEndOfFrame));
            }

            *slot = word.sample();
        }

        trace!("decoded frame of {} samples", FFT_SIZE);
        Some(Ok(frame))
    }

    /// Discards words up to and including the next end-of-frame marker.
    fn skip_to_boundary(&mut self) -> usize {
        let mut skipped = 0;
        for word in self.words.by_ref() {
            skipped += 1;
            if word.last {
                break;
            }
        }
        skipped
    }
}

impl<I> Iterator for FrameReader<I>
where
    I: Iterator<Item = StreamWord>,
{
    type Item = Result<Frame, FftError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_frame()
    }
}

impl Fft256 {
    /// Reads one frame of words from `input`, transforms it and appends the
    /// 256 output words to `output`.
    ///
    /// On error nothing is written; `input` has been advanced past the
    /// rejected frame.
    pub fn process_stream<I, O>(&self, input: &mut I, output: &mut O) -> Result<(), FftError>
    where
        I: Iterator<Item = StreamWord>,
        O: Extend<StreamWord>,
    {
        let frame = FrameReader::new(&mut *input)
            .read_frame()
            .unwrap_or(Err(FftError::TruncatedFrame { received: 0 }))?;
        output.extend(encode_frame(&self.transform(&frame)));
        Ok(())
    }
}

#[cfg(test)]
#[path = "stream_tests.rs"]
mod tests;
