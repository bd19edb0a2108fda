use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use network::config::{DEFAULT_SCALE_0, DEFAULT_SCALE_1};

#[derive(Parser, Debug)]
#[command(name = "quantnet")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Log channel traffic and engine events to a file for debugging.
    #[arg(short, long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Log level for `evaluate` progress messages on stderr.
    #[arg(long, global = true, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,

    /// Threads used to evaluate layer rows. Defaults to the number of CPUs.
    #[arg(long, global = true)]
    pub threads: Option<usize>,

    /// Activation scale applied to layer 0 accumulators.
    #[arg(long, global = true, default_value_t = DEFAULT_SCALE_0)]
    pub scale0: f32,

    /// Activation scale applied to layer 1 accumulators.
    #[arg(long, global = true, default_value_t = DEFAULT_SCALE_1)]
    pub scale1: f32,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Serve the word channel on stdin/stdout (the default).
    Serve,

    /// Run a labelled test set through the engine and report its accuracy.
    Evaluate {
        /// Parameter payload, little-endian 32-bit words.
        #[arg(long)]
        payload: PathBuf,

        /// Test images, 784 little-endian f32 words each.
        #[arg(long)]
        images: PathBuf,

        /// One little-endian u32 label per image.
        #[arg(long)]
        labels: PathBuf,

        /// Only evaluate the first N images.
        #[arg(long)]
        limit: Option<usize>,
    },
}
