use log::{debug, info};

use crate::config::Scales;
use crate::error::{NetworkError, Result};
use crate::network::{ClassIndex, Network, INPUT_SIZE, PAYLOAD_WORDS};
use crate::params::ParameterSet;

/// Where the engine is in its load-once, infer-forever lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderState {
    AwaitingParameters,
    Ready,
}

/// What a single invocation of the engine did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    /// The parameter payload was stored. Nothing is written back.
    Loaded,
    /// One image was classified.
    Classified(ClassIndex),
}

impl Invocation {
    /// Word to send back on the output channel, if any.
    pub fn reply(&self) -> Option<u32> {
        match self {
            Invocation::Loaded => None,
            Invocation::Classified(class) => Some(class.to_word()),
        }
    }
}

/// The classifier engine behind the word channel.
///
/// The first invocation loads the parameters, every later one classifies an
/// image. There is no way back to the loading state.
pub struct Engine {
    scales: Scales,
    network: Option<Network>,
}

impl Engine {
    pub fn new(scales: Scales) -> Self {
        Self {
            scales,
            network: None,
        }
    }

    pub fn state(&self) -> LoaderState {
        match self.network {
            None => LoaderState::AwaitingParameters,
            Some(_) => LoaderState::Ready,
        }
    }

    /// Number of words the next invocation consumes.
    pub fn frame_len(&self) -> usize {
        match self.state() {
            LoaderState::AwaitingParameters => PAYLOAD_WORDS,
            LoaderState::Ready => INPUT_SIZE,
        }
    }

    /// The loaded parameters, once there are any.
    pub fn parameters(&self) -> Option<&ParameterSet> {
        self.network.as_ref().map(Network::parameters)
    }

    /// Main entry point: routes the words by the current state.
    ///
    /// A rejected payload leaves the engine awaiting parameters.
    pub fn invoke(&mut self, words: &[u32]) -> Result<Invocation> {
        match self.state() {
            LoaderState::AwaitingParameters => {
                self.load(words)?;
                Ok(Invocation::Loaded)
            }
            LoaderState::Ready => Ok(Invocation::Classified(self.classify(words)?)),
        }
    }

    pub fn load(&mut self, words: &[u32]) -> Result<()> {
        if self.network.is_some() {
            return Err(NetworkError::AlreadyLoaded);
        }

        let params = ParameterSet::from_words(words, self.scales)?;
        self.network = Some(Network::new(params));

        info!("Parameters loaded, engine ready");
        Ok(())
    }

    pub fn classify(&self, words: &[u32]) -> Result<ClassIndex> {
        let network = self.network.as_ref().ok_or(NetworkError::NotLoaded)?;
        let class = network.classify(words)?;

        debug!("Classified input as {}", class);
        Ok(class)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Scales::default())
    }
}
