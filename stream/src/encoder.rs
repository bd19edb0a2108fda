use std::io::{self, Write};

use super::WORD_BYTES;

pub struct Encoder {}

impl Encoder {
    #[inline]
    pub fn encode(&self, word: u32) -> [u8; WORD_BYTES] {
        word.to_le_bytes()
    }

    pub fn write<W: Write>(&self, writer: &mut W, word: u32) -> io::Result<()> {
        writer.write_all(&self.encode(word))
    }
}
