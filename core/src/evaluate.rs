//! Accuracy driver: streams a payload and a labelled test set through the
//! engine exactly like a channel peer would, and counts correct predictions.

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use network::{Engine, Scales, INPUT_SIZE};
use stream::Decoder;

#[derive(Debug)]
pub struct Report {
    pub total: usize,
    pub correct: usize,
    pub elapsed: Duration,
}

impl Report {
    /// Percentage of correctly classified images.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64 * 100.0
    }

    pub fn print_summary(&self) {
        println!("\n=== Evaluation Summary ===");
        println!("Images: {}", self.total);
        println!("Correct: {}", self.correct);
        println!("Accuracy = {:.2}%", self.accuracy());
        println!("Time: {} ms", self.elapsed.as_millis());
    }
}

pub fn run(
    payload: &Path,
    images: &Path,
    labels: &Path,
    limit: Option<usize>,
    scales: Scales,
) -> Result<Report, Box<dyn Error>> {
    let payload = read_words(payload)?;
    let images = read_words(images)?;
    let labels = read_words(labels)?;
    info!(
        "Read {} payload words, {} image words, {} labels",
        payload.len(),
        images.len(),
        labels.len()
    );

    evaluate(&payload, &images, &labels, limit, scales, true)
}

pub fn evaluate(
    payload: &[u32],
    images: &[u32],
    labels: &[u32],
    limit: Option<usize>,
    scales: Scales,
    show_progress: bool,
) -> Result<Report, Box<dyn Error>> {
    if images.len() % INPUT_SIZE != 0 {
        return Err(format!(
            "Image data holds {} words, not a multiple of {}",
            images.len(),
            INPUT_SIZE
        )
        .into());
    }

    let count = images.len() / INPUT_SIZE;
    if count != labels.len() {
        return Err(format!("Found {} images but {} labels", count, labels.len()).into());
    }
    let count = limit.map_or(count, |limit| limit.min(count));

    let start = Instant::now();
    let mut engine = Engine::new(scales);
    engine.invoke(payload)?;

    let bar = progress_bar(count, show_progress)?;
    let mut correct = 0;

    for (image, &label) in images.chunks_exact(INPUT_SIZE).zip(labels).take(count) {
        if engine.invoke(image)?.reply() == Some(label) {
            correct += 1;
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    Ok(Report {
        total: count,
        correct,
        elapsed: start.elapsed(),
    })
}

fn read_words(path: &Path) -> Result<Vec<u32>, Box<dyn Error>> {
    let file = File::open(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    Ok(Decoder::new().read_all(BufReader::new(file))?)
}

fn progress_bar(len: usize, visible: bool) -> Result<ProgressBar, Box<dyn Error>> {
    if !visible {
        return Ok(ProgressBar::hidden());
    }

    let bar = ProgressBar::new(len as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} {pos}/{len} [{wide_bar:.cyan/blue}] {eta_precise}")?,
    );
    Ok(bar)
}
