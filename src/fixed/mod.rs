pub mod types;
pub mod math;
pub mod twiddle;
mod core;
pub mod complex;

pub use self::core::reverse_bits_8;
pub use complex::{magnitude_spectrum, Fft256};
pub use twiddle::{TwiddleTable, TWIDDLES};
pub use types::{ComplexFixed, Fixed, Sample, Q16};
