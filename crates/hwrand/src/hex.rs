//! Lowercase hex rendering of acquired samples.

const ALPHABET: &[u8; 16] = b"0123456789abcdef";

/// Encodes a byte slice as lowercase hex, two digits per byte, no separator.
///
/// The output length is exactly twice the input length.
pub fn encode(input: &[u8]) -> String {
    let mut out = String::with_capacity(input.len() * 2);
    for &b in input {
        out.push(ALPHABET[usize::from(b >> 4)] as char);
        out.push(ALPHABET[usize::from(b & 0x0F)] as char);
    }
    out
}

/// Encodes a 64-bit word as 16 zero-padded lowercase hex digits.
pub fn encode_u64(word: u64) -> String {
    encode(&word.to_be_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_known_vectors() {
        assert_eq!(encode(&[]), "");
        assert_eq!(encode(&[0x00]), "00");
        assert_eq!(encode(&[0xff, 0x01]), "ff01");
        assert_eq!(encode(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
    }

    #[test]
    fn encodes_words_zero_padded() {
        assert_eq!(encode_u64(0x0123_4567_89ab_cdef), "0123456789abcdef");
        assert_eq!(encode_u64(0), "0000000000000000");
        assert_eq!(encode_u64(0xf), "000000000000000f");
    }

    #[test]
    fn output_is_twice_input_and_lowercase_hex_only() {
        let all: Vec<u8> = (0..=255).collect();
        let rendered = encode(&all);
        assert_eq!(rendered.len(), all.len() * 2);
        assert!(rendered.bytes().all(|b| ALPHABET.contains(&b)));
    }
}
