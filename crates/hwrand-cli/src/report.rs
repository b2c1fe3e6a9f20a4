//! The user-facing output lines.
//!
//! stdout carries exactly one success line per invocation; the fixed failure
//! message goes to stderr. Diagnostics flow through `tracing` instead so the
//! result line stays machine-consumable.

use hwrand::hex;

/// Printed to stderr when the selected source cannot produce a value.
pub const FAILURE_MESSAGE: &str = "Failed to generate random number";

/// Renders the success line: a bit-width label and the sample as lowercase
/// hex pairs with no separator.
pub fn success_line(sample: &[u8]) -> String {
    format!("Random {}-bit number: {}", sample.len() * 8, hex::encode(sample))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_the_default_sample_as_64_bit() {
        let line = success_line(&0x0123_4567_89ab_cdef_u64.to_be_bytes());
        assert_eq!(line, "Random 64-bit number: 0123456789abcdef");
    }

    #[test]
    fn hex_digits_are_zero_padded_and_lowercase() {
        let line = success_line(&[0x00, 0x0f, 0xa0]);
        assert_eq!(line, "Random 24-bit number: 000fa0");
    }

    #[test]
    fn digit_count_is_twice_the_byte_count() {
        let sample = [0u8; 32];
        let line = success_line(&sample);
        let digits = line.rsplit(' ').next().unwrap();
        assert_eq!(digits.len(), 64);
        assert!(digits.bytes().all(|b| b.is_ascii_hexdigit()));
    }

    #[test]
    fn failure_message_is_fixed() {
        assert_eq!(FAILURE_MESSAGE, "Failed to generate random number");
    }
}
