use std::io::{self, ErrorKind, Read};

use super::WORD_BYTES;

pub struct Decoder;

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    pub fn decode(&self, bytes: [u8; WORD_BYTES]) -> u32 {
        u32::from_le_bytes(bytes)
    }

    /// Reads a frame of exactly `len` words.
    ///
    /// Returns `Ok(None)` when the input is already exhausted at the frame
    /// boundary. Input ending inside the frame is an `UnexpectedEof` error.
    pub fn read_frame<R: Read>(&self, reader: &mut R, len: usize) -> io::Result<Option<Vec<u32>>> {
        let mut buf = vec![0u8; len * WORD_BYTES];
        let mut filled = 0;

        while filled < buf.len() {
            match reader.read(&mut buf[filled..]) {
                Ok(0) if filled == 0 => return Ok(None),
                Ok(0) => {
                    return Err(io::Error::new(
                        ErrorKind::UnexpectedEof,
                        format!(
                            "Input ended inside a frame: got {} of {} words ({} stray bytes)",
                            filled / WORD_BYTES,
                            len,
                            filled % WORD_BYTES
                        ),
                    ))
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        Ok(Some(self.decode_all(&buf)))
    }

    /// Reads every word until end of input, e.g. a payload or image file.
    pub fn read_all<R: Read>(&self, mut reader: R) -> io::Result<Vec<u32>> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;

        if buf.len() % WORD_BYTES != 0 {
            return Err(io::Error::new(
                ErrorKind::InvalidData,
                format!(
                    "Input length {} is not a multiple of {} bytes",
                    buf.len(),
                    WORD_BYTES
                ),
            ));
        }

        Ok(self.decode_all(&buf))
    }

    fn decode_all(&self, bytes: &[u8]) -> Vec<u32> {
        bytes
            .chunks_exact(WORD_BYTES)
            .map(|chunk| self.decode([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect()
    }
}
