//! hexadecimal encoding and decoding

use std::{error, fmt, result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// a symbol that is not part of the hexadecimal alphabet was
    /// found in the input, the parameter is its byte position.
    UnknownSymbol(usize),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &Error::UnknownSymbol(idx) => write!(f, "Unknown symbol at byte index {}", idx),
        }
    }
}
impl error::Error for Error {}

pub type Result<T> = result::Result<T, Error>;

const ALPHABET: &'static [u8] = b"0123456789abcdef";

/// encode the given bytes in lowercase hexadecimal
pub fn encode(input: &[u8]) -> String {
    let mut v = Vec::with_capacity(input.len() * 2);
    for &byte in input.iter() {
        v.push(ALPHABET[(byte >> 4) as usize]);
        v.push(ALPHABET[(byte & 0xf) as usize]);
    }
    unsafe { String::from_utf8_unchecked(v) }
}

/// decode the given hexadecimal string, both cases are accepted as
/// well as interleaved whitespace
pub fn decode(input: &str) -> Result<Vec<u8>> {
    let mut b = Vec::with_capacity(input.len() / 2);
    let mut modulus = 0;
    let mut buf = 0;

    for (index, byte) in input.bytes().enumerate() {
        buf <<= 4;
        match byte {
            b'A'..=b'F' => buf |= byte - b'A' + 10,
            b'a'..=b'f' => buf |= byte - b'a' + 10,
            b'0'..=b'9' => buf |= byte - b'0',
            b' ' | b'\r' | b'\n' | b'\t' => {
                buf >>= 4;
                continue;
            }
            _ => return Err(Error::UnknownSymbol(index)),
        }
        modulus += 1;
        if modulus == 2 {
            modulus = 0;
            b.push(buf);
        }
    }

    Ok(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_vec(input: &[u8], expected: &str) {
        let encoded = encode(input);
        assert_eq!(encoded, expected);
    }

    fn decode_vec(input: &str, expected: &[u8]) {
        let decoded = decode(input).unwrap();
        assert_eq!(decoded, expected);
    }

    #[test]
    fn test_vector_1() {
        encode_vec(&[1, 2, 3, 4], "01020304");
        decode_vec("01020304", &[1, 2, 3, 4]);
    }

    #[test]
    fn test_vector_2() {
        encode_vec(&[0xff, 0x0f, 0xf0], "ff0ff0");
        decode_vec("ff0ff0", &[0xff, 0x0f, 0xf0]);
    }

    #[test]
    fn decode_mixed_case() {
        decode_vec("FF0fF0", &[0xff, 0x0f, 0xf0]);
    }

    #[test]
    fn decode_with_whitespace() {
        decode_vec("ff 0f\nf0", &[0xff, 0x0f, 0xf0]);
    }

    #[test]
    fn decode_unknown_symbol() {
        assert_eq!(decode("00zz"), Err(Error::UnknownSymbol(2)));
    }

    quickcheck! {
        fn encode_decode(xs: Vec<u8>) -> bool {
            decode(&encode(&xs)) == Ok(xs)
        }
    }
}
