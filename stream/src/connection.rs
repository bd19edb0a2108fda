use super::decoder::Decoder;
use super::encoder::Encoder;
use log::debug;
use std::error::Error;
use std::io::{self, Read, StdinLock, StdoutLock, Write};

/// Consumer of the frames arriving on a word channel.
pub trait FrameHandler {
    /// Number of words the next frame carries.
    fn frame_len(&self) -> usize;

    /// Handles one complete frame, optionally replying with a single word.
    fn handle(&mut self, words: &[u32]) -> Result<Option<u32>, Box<dyn Error>>;
}

/// Sequential word channel over a byte reader and writer.
pub struct WordConnection<R, W> {
    reader: R,
    writer: W,
    decoder: Decoder,
    encoder: Encoder,
}

impl WordConnection<StdinLock<'static>, StdoutLock<'static>> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout().lock())
    }
}

impl<R: Read, W: Write> WordConnection<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            decoder: Decoder::new(),
            encoder: Encoder {},
        }
    }

    /// Feeds frames to the handler until the input ends on a frame boundary.
    ///
    /// Every reply is flushed immediately so the peer can read it before
    /// sending the next frame. Returns the number of frames handled.
    pub fn listen<H: FrameHandler>(&mut self, handler: &mut H) -> Result<usize, Box<dyn Error>> {
        let mut frames = 0;

        loop {
            let len = handler.frame_len();
            let Some(words) = self.decoder.read_frame(&mut self.reader, len)? else {
                debug!("Input closed after {} frames", frames);
                break;
            };
            debug!("Input: frame of {} words", words.len());

            if let Some(reply) = handler.handle(&words)? {
                debug!("Output: {}", reply);
                self.encoder.write(&mut self.writer, reply)?;
                self.writer.flush()?;
            }

            frames += 1;
        }

        Ok(frames)
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Expects one 3-word header frame, then 2-word frames it sums.
    struct Summer {
        seen_header: bool,
    }

    impl FrameHandler for Summer {
        fn frame_len(&self) -> usize {
            if self.seen_header {
                2
            } else {
                3
            }
        }

        fn handle(&mut self, words: &[u32]) -> Result<Option<u32>, Box<dyn Error>> {
            if !self.seen_header {
                self.seen_header = true;
                return Ok(None);
            }
            if words[0] == u32::MAX {
                return Err("poison frame".into());
            }
            Ok(Some(words.iter().sum()))
        }
    }

    fn bytes(words: &[u32]) -> Vec<u8> {
        words.iter().flat_map(|w| w.to_le_bytes()).collect()
    }

    fn words(bytes: &[u8]) -> Vec<u32> {
        bytes
            .chunks_exact(4)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect()
    }

    #[test]
    fn test_listen_frames_by_handler_state() {
        let input = bytes(&[9, 9, 9, 1, 2, 10, 20, 100, 200]);
        let mut connection = WordConnection::new(Cursor::new(input), Vec::new());
        let mut handler = Summer { seen_header: false };

        let frames = connection.listen(&mut handler).unwrap();

        assert_eq!(frames, 4);
        assert_eq!(words(&connection.into_writer()), vec![3, 30, 300]);
    }

    #[test]
    fn test_listen_on_empty_input() {
        let mut connection = WordConnection::new(Cursor::new(Vec::new()), Vec::new());
        let mut handler = Summer { seen_header: false };

        assert_eq!(connection.listen(&mut handler).unwrap(), 0);
        assert!(connection.into_writer().is_empty());
    }

    #[test]
    fn test_listen_stops_on_truncated_frame() {
        let input = bytes(&[0, 0, 0, 5, 6, 7]);
        let mut connection = WordConnection::new(Cursor::new(input), Vec::new());
        let mut handler = Summer { seen_header: false };

        let err = connection.listen(&mut handler).unwrap_err();
        assert!(err.to_string().contains("got 1 of 2 words"));
        assert_eq!(words(&connection.into_writer()), vec![11]);
    }

    #[test]
    fn test_listen_propagates_handler_errors() {
        let input = bytes(&[0, 0, 0, u32::MAX, 1, 2, 3]);
        let mut connection = WordConnection::new(Cursor::new(input), Vec::new());
        let mut handler = Summer { seen_header: false };

        let err = connection.listen(&mut handler).unwrap_err();
        assert_eq!(err.to_string(), "poison frame");
        assert!(connection.into_writer().is_empty());
    }
}
