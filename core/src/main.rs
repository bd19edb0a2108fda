mod args;
mod evaluate;
mod session;

#[cfg(test)]
mod fixtures;

use args::{Args, Command};
use clap::Parser;
use log::{debug, info, LevelFilter};
use network::Scales;
use session::Session;
use simplelog::{Config, WriteLogger};
use std::error::Error;
use std::fs::File;
use std::io;
use stream::WordConnection;

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;
    let scales = Scales::new(args.scale0, args.scale1)?;

    match args.command.clone().unwrap_or(Command::Serve) {
        Command::Serve => {
            let mut session = Session::new(scales);
            let mut connection = WordConnection::stdio();

            let frames = connection.listen(&mut session)?;
            info!("Channel closed after {} invocations", frames);
        }
        Command::Evaluate {
            payload,
            images,
            labels,
            limit,
        } => {
            let report = evaluate::run(&payload, &images, &labels, limit, scales)?;
            report.print_summary();
        }
    }

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    // stdout carries the word channel when serving and the summary when evaluating.
    if let Some(log_file) = &args.log_file {
        WriteLogger::init(
            LevelFilter::Debug,
            Config::default(),
            File::create(log_file)?,
        )?;
    } else if matches!(args.command, Some(Command::Evaluate { .. })) {
        WriteLogger::init(args.log_level, Config::default(), io::stderr())?;
    }

    let threads = args.threads.unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()?;
    debug!("Using {} worker threads", threads);

    Ok(args)
}
