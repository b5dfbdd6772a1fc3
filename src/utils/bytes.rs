use byteorder::{ByteOrder, LittleEndian};
use itertools::Itertools;

pub fn bytes_to_hex(buf: &[u8]) -> String {
    let result = buf.iter().format("");

    format!("{:02x}", result)
}

pub fn words_to_le_bytes(words: &[u32]) -> Vec<u8> {
    let mut bytes = vec![0u8; words.len() * 4];
    LittleEndian::write_u32_into(words, &mut bytes[..]);

    bytes
}
