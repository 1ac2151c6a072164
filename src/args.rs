use clap::Parser;

/// A concurrent, range-based file downloader.
///
/// Splits the remote resource into contiguous byte ranges and downloads
/// them in parallel, writing each range at its absolute offset in a single
/// output file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The URL of the file to download.
    #[arg(short, long)]
    pub url: String,

    /// The name of the output file. Defaults to the last path segment of the URL.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Number of concurrent download workers.
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub workers: u64,
}
