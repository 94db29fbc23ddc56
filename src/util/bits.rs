//! bit packing by groups of 11 bits
//!
//! BIP39 alignment between entropy bytes and mnemonic words works on
//! groups of 11 bits, most significant bit first. `BitWriterBy11`
//! packs a sequence of 11 bit values into bytes, zero padding the
//! last byte, and `BitReaderBy11` reads the values back.

const NUM_BITS_PER_BLOCK: usize = 11;

pub struct BitWriterBy11 {
    buffer: Vec<u8>,
    acc: u32,
    pending: usize,
}

impl BitWriterBy11 {
    pub fn new() -> Self {
        BitWriterBy11 {
            buffer: Vec::new(),
            acc: 0,
            pending: 0,
        }
    }

    /// append the 11 low bits of the given value, most significant
    /// bit first.
    pub fn write(&mut self, e: u16) {
        assert!(e < 2048);
        self.acc = (self.acc << NUM_BITS_PER_BLOCK) | e as u32;
        self.pending += NUM_BITS_PER_BLOCK;
        while self.pending >= 8 {
            self.pending -= 8;
            self.buffer.push((self.acc >> self.pending) as u8);
        }
    }

    /// flush the pending bits, zero padded to a full byte, and
    /// return the buffer.
    pub fn to_bytes(mut self) -> Vec<u8> {
        if self.pending > 0 {
            self.buffer.push((self.acc << (8 - self.pending)) as u8);
        }
        self.buffer
    }
}

pub struct BitReaderBy11<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> BitReaderBy11<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        BitReaderBy11 {
            buffer: bytes,
            position: 0,
        }
    }

    /// number of whole 11 bit values left to read
    pub fn size(&self) -> usize {
        (self.buffer.len() * 8 - self.position) / NUM_BITS_PER_BLOCK
    }

    /// read the next 11 bit value, most significant bit first
    pub fn read(&mut self) -> u16 {
        assert!(self.size() >= 1);
        let mut value: u16 = 0;
        for _ in 0..NUM_BITS_PER_BLOCK {
            let byte = self.buffer[self.position / 8];
            let bit = (byte >> (7 - self.position % 8)) & 1;
            value = (value << 1) | bit as u16;
            self.position += 1;
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BYTES: &'static [u8] = &[
        0b1000_1010,
        0b1011_0110,
        0b1110_0110,
        0b0111_0110,
        0b0011_1110,
    ];

    #[test]
    fn read_by_11() {
        let mut reader = BitReaderBy11::new(BYTES);
        assert_eq!(reader.size(), 3);
        assert_eq!(reader.read(), 0b100_0101_0101);
        assert_eq!(reader.size(), 2);
        assert_eq!(reader.read(), 0b101_1011_1001);
        assert_eq!(reader.size(), 1);
        assert_eq!(reader.read(), 0b100_1110_1100);
        assert_eq!(reader.size(), 0);
    }

    #[test]
    fn write_by_11() {
        let mut writer = BitWriterBy11::new();
        writer.write(0b100_0101_0101);
        writer.write(0b101_1011_1001);
        writer.write(0b100_1110_1100);
        // the 7 bits of padding come out zeroed
        assert_eq!(
            writer.to_bytes(),
            &[
                0b1000_1010,
                0b1011_0110,
                0b1110_0110,
                0b0111_0110,
                0b0000_0000,
            ]
        );
    }

    #[test]
    fn write_nothing() {
        let writer = BitWriterBy11::new();
        assert!(writer.to_bytes().is_empty());
    }

    quickcheck! {
        fn write_read(values: Vec<u16>) -> bool {
            let values: Vec<u16> = values.iter().map(|v| v % 2048).collect();
            let mut writer = BitWriterBy11::new();
            for &value in values.iter() {
                writer.write(value);
            }
            let bytes = writer.to_bytes();
            let mut reader = BitReaderBy11::new(&bytes);
            let mut read = Vec::with_capacity(values.len());
            while reader.size() > 0 {
                read.push(reader.read());
            }
            read == values
        }
    }
}
