use anyhow::{Result, anyhow};
use clap::Parser;

use mget::args::Args;
use mget::downloader::{DownloadConfig, Downloader};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let client = reqwest::Client::builder()
        .user_agent(concat!("mget/", env!("CARGO_PKG_VERSION")))
        .build()?;

    println!("Downloading: {}", args.url);

    let downloader = Downloader::new(
        DownloadConfig {
            url: args.url,
            workers: args.workers,
            output: args.output,
            show_progress: true,
        },
        client,
    );

    let report = downloader.run().await?;

    if report.is_complete() {
        println!(
            "Download completed: {} ({} bytes, {} chunks)",
            report.output, report.total, report.chunks
        );
        Ok(())
    } else {
        Err(anyhow!(
            "{} of {} chunks failed; {} is incomplete",
            report.failed.len(),
            report.chunks,
            report.output
        ))
    }
}
