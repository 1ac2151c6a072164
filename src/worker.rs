//! Per-chunk worker: one ranged GET followed by one positional write.
use std::fs::File;
use std::io;
use std::sync::Arc;

use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::RANGE;

use crate::error::{ChunkError, FetchError, WriteError};
use crate::observer::ProgressObserver;
use crate::range::ByteRange;
use crate::writer;

/// Fetches the bytes for `range` with a single ranged GET.
///
/// The server must answer 206 Partial Content and the body must be exactly
/// as long as the range; anything else is a [`FetchError`]. The body is
/// returned verbatim, with no retry and no decompression.
pub async fn fetch_range(
    client: &reqwest::Client,
    url: &str,
    range: ByteRange,
) -> Result<Bytes, FetchError> {
    let response = client
        .get(url)
        .header(RANGE, range.to_header_value())
        .send()
        .await?;

    let status = response.status();
    if status != StatusCode::PARTIAL_CONTENT {
        return Err(FetchError::NotPartialContent { range, status });
    }

    let body = response.bytes().await?;
    if body.len() as u64 != range.len() {
        return Err(FetchError::LengthMismatch {
            range,
            expected: range.len(),
            got: body.len() as u64,
        });
    }

    Ok(body)
}

/// Downloads one chunk and writes it at its absolute offset in the shared
/// output file.
///
/// A failure here is scoped to this chunk: the caller records it, and
/// sibling chunks keep running either way.
pub async fn download_chunk(
    client: reqwest::Client,
    url: String,
    range: ByteRange,
    file: Arc<File>,
    observer: Arc<dyn ProgressObserver>,
) -> Result<(), ChunkError> {
    let body = fetch_range(&client, &url, range).await?;
    observer.inc(body.len() as u64);

    tokio::task::spawn_blocking(move || writer::write_full_at(file.as_ref(), &body, range.start))
        .await
        .map_err(|e| WriteError::Io(io::Error::other(e)))??;

    observer.finish();
    Ok(())
}
