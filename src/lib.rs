//! # mget
//!
//! A concurrent, range-based file downloader.
//!
//! Given a single remote URL, `mget` probes the server for byte-range
//! support and the resource's total size, partitions the byte space into
//! contiguous chunks, fetches each chunk concurrently with HTTP `Range`
//! requests, and writes each chunk at its absolute offset of one
//! pre-sized output file. Because every chunk owns a disjoint byte range,
//! the writers need no locking and the reassembled file is byte-identical
//! to the remote resource.
//!
//! The library is primarily driven by the `mget` binary, but the pieces
//! are exposed for custom callers:
//!
//! - [`probe`]: the range-capability probe (HEAD + `Content-Range`)
//! - [`range`]: byte ranges and the partitioner
//! - [`worker`]: per-chunk fetch-then-write tasks
//! - [`writer`]: positional file writes
//! - [`downloader`]: the coordinator tying it all together

pub mod args;
pub mod downloader;
pub mod error;
pub mod observer;
pub mod probe;
pub mod range;
pub mod utils;
pub mod worker;
pub mod writer;

pub use downloader::{DownloadConfig, DownloadReport, Downloader};
pub use error::DownloadError;
pub use range::{ByteRange, partition};
