// src/pipeline.rs
//! Threaded dataflow version of the stream transform.
//!
//! Four workers run concurrently, connected by bounded channels:
//!
//! ```text
//! words ──► unpack ──► permute ──► butterflies ──► pack ──► output frames
//! ```
//!
//! Each channel between workers holds up to `PipelineConfig::depth` frames,
//! so while one frame is in the butterfly network the next can already be
//! unpacked. Every frame passes through all 8 butterfly stages inside a
//! single worker; frames never share buffers.
//!
//! Rejected frames travel down the pipeline as `Err` in stream order. Dropping
//! the [`PipelineInput`] ends the stream: a frame that was only partly pushed
//! comes out as [`FftError::TruncatedFrame`] and is never transformed.

use crate::common::{FftError, Frame, FFT_SIZE};
use crate::fixed::Fft256;
use crate::stream::{encode_frame, FrameReader, StreamWord};
use log::debug;
use std::string::String;
use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::thread::{self, JoinHandle};
use std::vec::Vec;

/// One transformed frame as stream words, `last` set on index 255 only.
pub type OutputFrame = [StreamWord; FFT_SIZE];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Frames each inter-stage channel can buffer. Values below 1 are treated as 1.
    pub depth: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { depth: 1 }
    }
}

/// Producer half: feeds stream words into the pipeline.
pub struct PipelineInput {
    tx: SyncSender<StreamWord>,
}

impl PipelineInput {
    /// Blocks while the input buffer is full.
    pub fn push(&self, word: StreamWord) -> Result<(), FftError> {
        self.tx.send(word).map_err(|_| FftError::PipelineClosed)
    }

    pub fn push_all<I>(&self, words: I) -> Result<(), FftError>
    where
        I: IntoIterator<Item = StreamWord>,
    {
        for word in words {
            self.push(word)?;
        }
        Ok(())
    }
}

/// Consumer half: yields one result per input frame, in input order.
pub struct PipelineOutput {
    rx: Receiver<Result<OutputFrame, FftError>>,
    workers: Vec<JoinHandle<()>>,
}

impl Iterator for PipelineOutput {
    type Item = Result<OutputFrame, FftError>;

    /// Blocks until the next frame is ready; `None` once the input half is
    /// dropped and every frame has been delivered.
    fn next(&mut self) -> Option<Self::Item> {
        self.rx.recv().ok()
    }
}

impl PipelineOutput {
    /// Discards undelivered results and waits for the workers to exit.
    ///
    /// The input half must already be dropped, otherwise the unpack worker
    /// keeps waiting for words and this call does not return.
    pub fn join(self) -> Result<(), FftError> {
        let Self { rx, workers } = self;
        drop(rx);
        for handle in workers {
            handle.join().map_err(|_| FftError::PipelineClosed)?;
        }
        Ok(())
    }
}

/// Starts the four workers.
pub fn spawn(config: PipelineConfig) -> Result<(PipelineInput, PipelineOutput), FftError> {
    let depth = config.depth.max(1);
    let fft = Fft256::new();

    let (word_tx, word_rx) = sync_channel::<StreamWord>(depth * FFT_SIZE);
    let (unpacked_tx, unpacked_rx) = sync_channel::<Result<Frame, FftError>>(depth);
    let (permuted_tx, permuted_rx) = sync_channel::<Result<Frame, FftError>>(depth);
    let (spectrum_tx, spectrum_rx) = sync_channel::<Result<Frame, FftError>>(depth);
    let (out_tx, out_rx) = sync_channel::<Result<OutputFrame, FftError>>(depth);

    let mut workers = Vec::with_capacity(4);

    spawn_worker("fft-unpack", &mut workers, move || {
        for frame in FrameReader::new(word_rx.into_iter()) {
            if unpacked_tx.send(frame).is_err() {
                break;
            }
        }
    })?;
    spawn_worker("fft-permute", &mut workers, move || {
        forward(unpacked_rx, permuted_tx, |frame| fft.bit_reverse(&frame));
    })?;
    spawn_worker("fft-butterfly", &mut workers, move || {
        forward(permuted_rx, spectrum_tx, |mut frame| {
            fft.transform_bit_reversed(&mut frame);
            frame
        });
    })?;
    spawn_worker("fft-pack", &mut workers, move || {
        forward(spectrum_rx, out_tx, |frame| encode_frame(&frame));
    })?;

    debug!("fft pipeline started with depth {}", depth);
    Ok((PipelineInput { tx: word_tx }, PipelineOutput { rx: out_rx, workers }))
}

/// Applies `f` to every successful item, passing errors through unchanged.
/// Returns when either neighbour hangs up.
fn forward<T, U, F>(rx: Receiver<Result<T, FftError>>, tx: SyncSender<Result<U, FftError>>, mut f: F)
where
    F: FnMut(T) -> U,
{
    for item in rx {
        if tx.send(item.map(&mut f)).is_err() {
            break;
        }
    }
}

fn spawn_worker<F>(name: &str, workers: &mut Vec<JoinHandle<()>>, body: F) -> Result<(), FftError>
where
    F: FnOnce() + Send + 'static,
{
    let label = String::from(name);
    let handle = thread::Builder::new()
        .name(String::from(name))
        .spawn(move || {
            debug!("{} worker started", label);
            body();
            debug!("{} worker stopped", label);
        })
        .map_err(|_| FftError::PipelineSpawn)?;
    workers.push(handle);
    Ok(())
}
