//! Typed errors for the download pipeline.
//!
//! Configuration and probe errors are fatal to the whole run; fetch and
//! write errors are scoped to a single chunk and never cancel siblings.
use thiserror::Error;

use crate::range::ByteRange;

/// Invalid input before any network or file work starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("remote URL must not be empty")]
    EmptyUrl,
    #[error("worker count must be at least 1")]
    ZeroWorkers,
    #[error("resource size must be greater than zero")]
    ZeroTotal,
    #[error("cannot split {total} bytes into {workers} non-empty ranges")]
    TooManyWorkers { workers: u64, total: u64 },
}

/// The capability probe could not produce a usable descriptor.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("capability request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server does not support ranged retrieval (status {0})")]
    NotPartialContent(reqwest::StatusCode),
    #[error("response carries no Content-Range header")]
    MissingContentRange,
    #[error("malformed Content-Range header: {0:?}")]
    MalformedContentRange(String),
    #[error("range unit {0:?} is not byte-based")]
    UnsupportedUnit(String),
    #[error("server reports a zero-byte resource")]
    EmptyResource,
}

/// A single chunk's ranged GET went wrong.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("range request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("expected 206 Partial Content for range {range}, got {status}")]
    NotPartialContent {
        range: ByteRange,
        status: reqwest::StatusCode,
    },
    #[error("range {range}: expected {expected} bytes, server sent {got}")]
    LengthMismatch {
        range: ByteRange,
        expected: u64,
        got: u64,
    },
}

/// A positional write did not land the whole buffer.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("short write: {written} of {expected} bytes reached the file")]
    Short { written: usize, expected: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Terminal outcome of one chunk's fetch-then-write task.
#[derive(Debug, Error)]
pub enum ChunkError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Run-level failure: everything that aborts the download before the
/// per-chunk fan-out begins.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("probe failed: {0}")]
    Probe(#[from] ProbeError),
    #[error("cannot create output file: {0}")]
    FileCreate(#[source] std::io::Error),
}
