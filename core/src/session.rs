use std::error::Error;

use log::debug;
use network::{Engine, Invocation, Scales};
use stream::FrameHandler;

/// Binds one engine instance to a word channel.
pub struct Session {
    engine: Engine,
}

impl Session {
    pub fn new(scales: Scales) -> Self {
        Self {
            engine: Engine::new(scales),
        }
    }
}

impl FrameHandler for Session {
    fn frame_len(&self) -> usize {
        self.engine.frame_len()
    }

    fn handle(&mut self, words: &[u32]) -> Result<Option<u32>, Box<dyn Error>> {
        let outcome = self.engine.invoke(words)?;
        if let Invocation::Loaded = outcome {
            debug!("Switching channel to {}-word image frames", self.engine.frame_len());
        }
        Ok(outcome.reply())
    }
}
