//! Streams a dual-tone frame (bins 10 and 30) through the transform and
//! prints the magnitude of the first half of the spectrum.
//!
//! Run with `RUST_LOG=trace cargo run --example dual_tone` to see the stream
//! adapter's frame logging.

use rs_stream_fft::stream::encode_frame;
use rs_stream_fft::{magnitude_spectrum, Fft256, Frame, Sample, FFT_SIZE, Q16};
use std::f64::consts::PI;

const TONE1: usize = 10;
const TONE2: usize = 30;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut input = [Sample::ZERO; FFT_SIZE];
    for (n, s) in input.iter_mut().enumerate() {
        let t = n as f64 / FFT_SIZE as f64;
        let x = (2.0 * PI * TONE1 as f64 * t).sin() + (2.0 * PI * TONE2 as f64 * t).sin();
        *s = Sample::new(Q16::from_f64_truncated(x), Q16::ZERO);
    }

    let fft = Fft256::new();
    let mut words = Vec::with_capacity(FFT_SIZE);
    fft.process_stream(&mut encode_frame(&input).into_iter(), &mut words)?;

    let mut spectrum: Frame = [Sample::ZERO; FFT_SIZE];
    for (bin, word) in spectrum.iter_mut().zip(&words) {
        *bin = word.sample();
    }
    let magnitude = magnitude_spectrum(&spectrum);

    println!("{:<6}  {:<14}", "Bin", "Magnitude");
    for (k, m) in magnitude.iter().enumerate().take(FFT_SIZE / 2) {
        let marker = if k == TONE1 || k == TONE2 { "  <-- tone" } else { "" };
        println!("[{:3}]   {:12.4}{}", k, m, marker);
    }

    let peak = magnitude.iter().cloned().fold(0.0, f64::max);
    let threshold = 0.3 * peak;
    let peaks: Vec<usize> = (0..FFT_SIZE).filter(|&k| magnitude[k] > threshold).collect();
    println!("\npeak {:.4}, bins above 30%: {:?}", peak, peaks);
    println!(
        "end-of-frame on index: {:?}",
        words.iter().position(|w| w.last)
    );
    Ok(())
}
