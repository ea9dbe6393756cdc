use super::*;
use super::super::twiddle::TWIDDLES;
use super::super::types::{Q16, Sample};
use std::vec;
use std::vec::Vec;

fn zeros() -> Vec<Sample> {
    vec![Sample::ZERO; FFT_SIZE]
}

#[test]
fn test_reverse_bits_8() {
    assert_eq!(reverse_bits_8(0), 0);
    assert_eq!(reverse_bits_8(1), 128);
    assert_eq!(reverse_bits_8(2), 64);
    assert_eq!(reverse_bits_8(3), 192);
    assert_eq!(reverse_bits_8(0b0000_1101), 0b1011_0000);
    assert_eq!(reverse_bits_8(255), 255);
}

#[test]
fn test_reverse_bits_8_is_an_involution() {
    for i in 0..FFT_SIZE {
        assert_eq!(reverse_bits_8(reverse_bits_8(i)), i, "index {}", i);
    }
}

#[test]
fn test_reverse_bits_8_fixed_points_are_palindromes() {
    let fixed: Vec<usize> = (0..FFT_SIZE).filter(|&i| reverse_bits_8(i) == i).collect();
    assert!(fixed.contains(&0));
    assert!(fixed.contains(&255));
    // An 8-bit pattern is its own reverse iff its low nibble mirrors its high nibble.
    assert_eq!(fixed.len(), 16);
    assert!(fixed.contains(&0b1000_0001));
    assert!(fixed.contains(&0b0001_1000));
}

#[test]
fn test_bit_reverse_permute_is_a_bijection() {
    let input: Vec<Sample> = (0..FFT_SIZE as i32)
        .map(|i| Sample::new(Q16::from_int(i), Q16::from_int(-i)))
        .collect();
    let mut output = zeros();
    bit_reverse_permute(&input, &mut output);

    let mut seen = [false; FFT_SIZE];
    for (dst, sample) in output.iter().enumerate() {
        let src = sample.re.to_bits() >> 16;
        assert_eq!(sample.im.to_bits() >> 16, -src, "pairing broken at {}", dst);
        let src = src as usize;
        assert_eq!(reverse_bits_8(src), dst);
        assert!(!seen[src], "source {} used twice", src);
        seen[src] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn test_bit_reverse_permute_twice_restores_order() {
    let input: Vec<Sample> = (0..FFT_SIZE as i32)
        .map(|i| Sample::new(Q16::from_bits(i * 3), Q16::from_bits(7 - i)))
        .collect();
    let mut once = zeros();
    let mut twice = zeros();
    bit_reverse_permute(&input, &mut once);
    bit_reverse_permute(&once, &mut twice);
    assert_eq!(input, twice);
}

#[test]
fn test_bit_reverse_permute_overwrites_stale_output() {
    let input = zeros();
    let mut output = vec![Sample::new(Q16::from_int(9), Q16::from_int(9)); FFT_SIZE];
    bit_reverse_permute(&input, &mut output);
    assert!(output.iter().all(|s| *s == Sample::ZERO));
}

#[test]
fn test_butterfly_stages_impulse_is_flat() {
    // A unit impulse is its own bit-reversal; its spectrum is all ones.
    let mut buffer = zeros();
    buffer[0] = Sample::new(Q16::from_int(1), Q16::ZERO);
    butterfly_stages(&mut buffer, &TWIDDLES);

    let one = Sample::new(Q16::from_int(1), Q16::ZERO);
    for (k, val) in buffer.iter().enumerate() {
        assert_eq!(*val, one, "bin {}", k);
    }
}

#[test]
fn test_first_stage_pairs_neighbours() {
    let mut buffer = zeros();
    buffer[0] = Sample::new(Q16::from_int(3), Q16::from_int(1));
    buffer[1] = Sample::new(Q16::from_int(1), Q16::from_int(2));
    run_stage(&mut buffer, 0, &TWIDDLES);

    // Stage 0 only uses W^0 = 1: (a + b, a - b)
    assert_eq!(buffer[0], Sample::new(Q16::from_int(4), Q16::from_int(3)));
    assert_eq!(buffer[1], Sample::new(Q16::from_int(2), Q16::from_int(-1)));
    assert!(buffer[2..].iter().all(|s| *s == Sample::ZERO));
}

#[test]
fn test_second_stage_rotates_by_minus_j() {
    // Group of four, j = 1 uses W^64 = -j on the bottom operand at index 3.
    let mut buffer = zeros();
    buffer[1] = Sample::new(Q16::from_int(5), Q16::ZERO);
    buffer[3] = Sample::new(Q16::from_int(2), Q16::ZERO);
    run_stage(&mut buffer, 1, &TWIDDLES);

    // t = 2 * -j = -2j; top = 5 - 2j, bottom = 5 + 2j
    assert_eq!(buffer[1], Sample::new(Q16::from_int(5), Q16::from_int(-2)));
    assert_eq!(buffer[3], Sample::new(Q16::from_int(5), Q16::from_int(2)));
    assert_eq!(buffer[0], Sample::ZERO);
    assert_eq!(buffer[2], Sample::ZERO);
}

#[test]
fn test_last_stage_spans_whole_frame() {
    // Stage 7 pairs i with i + 128; at j = 0 the twiddle is 1.
    let mut buffer = zeros();
    buffer[0] = Sample::new(Q16::from_int(1), Q16::ZERO);
    buffer[128] = Sample::new(Q16::from_int(1), Q16::ZERO);
    run_stage(&mut buffer, 7, &TWIDDLES);

    assert_eq!(buffer[0], Sample::new(Q16::from_int(2), Q16::ZERO));
    assert_eq!(buffer[128], Sample::ZERO);
}
