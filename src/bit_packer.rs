//! Packs encoded bits into bytes for file output
//!
//! Bits go most-significant first. A trailing partial byte is padded with
//! zeros; the padding is reported alongside the bytes but is not written
//! into them, so a reader needs `bit_len` to tell padding from data.

use bitstream_io::{BigEndian, BitWrite, BitWriter};

use crate::error::Result;
use crate::huffman::EncodedBits;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBits {
    pub bytes: Vec<u8>,
    pub bit_len: usize,
    pub padding_bits: u8,
}

pub fn pack(bits: &EncodedBits) -> Result<PackedBits> {
    let mut writer = BitWriter::endian(Vec::with_capacity(bits.len().div_ceil(8)), BigEndian);
    for &bit in bits.as_slice() {
        writer.write_bit(bit)?;
    }
    writer.byte_align()?;

    let bytes = writer.into_writer();
    let padding_bits = (bytes.len() * 8 - bits.len()) as u8;
    Ok(PackedBits {
        bytes,
        bit_len: bits.len(),
        padding_bits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::{encode, symbols_from_text};

    #[test]
    fn test_pack_partial_byte() {
        // "aab" codes to 110
        let coding = encode(&symbols_from_text("aab")).unwrap();
        let packed = pack(&coding.bits).unwrap();
        assert_eq!(packed.bytes, vec![0b1100_0000]);
        assert_eq!(packed.bit_len, 3);
        assert_eq!(packed.padding_bits, 5);
    }

    #[test]
    fn test_pack_whole_bytes() {
        let coding = encode(&symbols_from_text("aaaaaaaaaaaaaaab")).unwrap();
        let packed = pack(&coding.bits).unwrap();
        // fifteen 1s then a single 0
        assert_eq!(packed.bytes, vec![0xFF, 0xFE]);
        assert_eq!(packed.padding_bits, 0);
    }

    #[test]
    fn test_pack_empty() {
        let packed = pack(&EncodedBits::default()).unwrap();
        assert!(packed.bytes.is_empty());
        assert_eq!(packed.bit_len, 0);
        assert_eq!(packed.padding_bits, 0);
    }
}
