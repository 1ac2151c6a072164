//! Orchestration: probe once, partition once, fan out one task per range,
//! then wait for every task to reach a terminal state.
use std::fs::File;
use std::sync::Arc;

use futures_util::future::join_all;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::error::{ConfigError, DownloadError};
use crate::observer::{ConsoleObserver, NullObserver, ProgressObserver};
use crate::probe;
use crate::range::{self, ByteRange};
use crate::utils;
use crate::worker;

/// Explicit configuration for one download run; no process-wide globals.
#[derive(Debug, Clone)]
pub struct DownloadConfig {
    /// Remote URL of the resource.
    pub url: String,
    /// Number of concurrent chunk tasks; one partition per worker.
    pub workers: u64,
    /// Overrides the filename derived from the URL.
    pub output: Option<String>,
    /// Draw per-chunk progress bars on the console.
    pub show_progress: bool,
}

/// Outcome of one run.
///
/// Chunk failures are collected here instead of aborting the run; the
/// caller decides what exit status they deserve. A report with failures
/// means the output file is missing those byte ranges.
#[derive(Debug)]
pub struct DownloadReport {
    /// Total size of the resource in bytes.
    pub total: u64,
    /// Path of the output file.
    pub output: String,
    /// Number of chunks launched.
    pub chunks: usize,
    /// Ranges whose fetch or write failed, with the reason.
    pub failed: Vec<(ByteRange, String)>,
}

impl DownloadReport {
    /// True when every chunk fetched and wrote successfully.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Coordinates a whole download run over a shared HTTP client.
pub struct Downloader {
    config: DownloadConfig,
    client: reqwest::Client,
}

impl Downloader {
    pub fn new(config: DownloadConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    /// Runs the download: validate, probe, partition, create the output
    /// file, then fetch-and-write every range concurrently.
    ///
    /// Fails fast (before any chunk work starts) on configuration, probe,
    /// or file-creation errors. Once the fan-out begins there is no
    /// cancellation: a failing chunk is recorded in the report while its
    /// siblings run to completion.
    pub async fn run(&self) -> Result<DownloadReport, DownloadError> {
        let url = self.config.url.trim();
        if url.is_empty() {
            return Err(ConfigError::EmptyUrl.into());
        }
        if self.config.workers == 0 {
            return Err(ConfigError::ZeroWorkers.into());
        }

        let descriptor = probe::probe(&self.client, url).await?;
        let ranges = range::partition(descriptor.total, self.config.workers)?;

        let output = match &self.config.output {
            Some(name) => name.clone(),
            None => utils::filename_from_url(url),
        };

        // Created fresh (truncated) and pre-sized before any fetch starts,
        // so failed chunks leave zero-filled holes rather than a short file.
        let file = File::create(&output).map_err(DownloadError::FileCreate)?;
        file.set_len(descriptor.total)
            .map_err(DownloadError::FileCreate)?;
        let file = Arc::new(file);

        let progress = self.config.show_progress.then(MultiProgress::new);
        let style = ProgressStyle::with_template(
            "{msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})",
        )
        .unwrap()
        .progress_chars("=>-");

        let mut tasks = Vec::with_capacity(ranges.len());
        for (i, r) in ranges.iter().copied().enumerate() {
            let observer: Arc<dyn ProgressObserver> = match &progress {
                Some(mp) => {
                    let pb = mp.add(ProgressBar::new(r.len()));
                    pb.set_style(style.clone());
                    pb.set_message(format!("Part {}", i + 1));
                    Arc::new(ConsoleObserver { pb })
                }
                None => Arc::new(NullObserver),
            };

            let client = self.client.clone();
            let url = url.to_string();
            let file = Arc::clone(&file);

            tasks.push(tokio::spawn(async move {
                worker::download_chunk(client, url, r, file, observer).await
            }));
        }

        // Completion barrier: return only after every task is terminal.
        let mut failed = Vec::new();
        for (r, joined) in ranges.iter().copied().zip(join_all(tasks).await) {
            let outcome = match joined {
                Ok(outcome) => outcome.map_err(|e| e.to_string()),
                Err(join_err) => Err(format!("worker task panicked: {join_err}")),
            };
            if let Err(reason) = outcome {
                eprintln!("mget: range {r} failed: {reason}");
                failed.push((r, reason));
            }
        }

        Ok(DownloadReport {
            total: descriptor.total,
            output,
            chunks: ranges.len(),
            failed,
        })
    }
}
