//! Range-capability probe: one HEAD request that discovers whether the
//! server honours byte ranges and how large the resource is.
use reqwest::StatusCode;
use reqwest::header::{CONTENT_RANGE, RANGE};

use crate::error::ProbeError;

/// What the server declared about the resource, parsed from its
/// `Content-Range` reply. Produced once per run and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Range unit the server accepted; always `bytes` for a valid descriptor.
    pub unit: String,
    /// Authoritative total size of the resource in bytes.
    pub total: u64,
}

/// Parses a `Content-Range` header of the form `<unit> <start>-<end>/<total>`,
/// e.g. `"bytes 0-2341451775/2341451776"`.
///
/// Returns the unit plus the three numeric fields. Only `total` feeds the
/// partitioner; `start`/`end` describe the probe response itself.
pub fn parse_content_range(raw: &str) -> Result<(String, u64, u64, u64), ProbeError> {
    let malformed = || ProbeError::MalformedContentRange(raw.to_string());

    let (unit, rest) = raw.split_once(' ').ok_or_else(malformed)?;
    let (pair, total) = rest.split_once('/').ok_or_else(malformed)?;
    let (start, end) = pair.split_once('-').ok_or_else(malformed)?;

    let start = start.parse::<u64>().map_err(|_| malformed())?;
    let end = end.parse::<u64>().map_err(|_| malformed())?;
    let total = total.parse::<u64>().map_err(|_| malformed())?;

    Ok((unit.to_string(), start, end, total))
}

/// Builds a valid descriptor from a raw `Content-Range` value, rejecting
/// non-byte units and zero-byte resources.
pub fn descriptor_from_header(raw: &str) -> Result<ResourceDescriptor, ProbeError> {
    let (unit, _start, _end, total) = parse_content_range(raw)?;
    if unit != "bytes" {
        return Err(ProbeError::UnsupportedUnit(unit));
    }
    if total == 0 {
        return Err(ProbeError::EmptyResource);
    }
    Ok(ResourceDescriptor { unit, total })
}

/// Issues the capability probe: a HEAD request with `Range: bytes=0-`.
///
/// The server must answer 206 Partial Content; anything else means it
/// rejects or ignores byte-range semantics for this resource, and there is
/// no fallback to a single-stream download.
///
/// # Errors
///
/// Returns a [`ProbeError`] if the request fails, the status is not 206,
/// or the `Content-Range` header is missing or malformed.
pub async fn probe(
    client: &reqwest::Client,
    url: &str,
) -> Result<ResourceDescriptor, ProbeError> {
    let response = client.head(url).header(RANGE, "bytes=0-").send().await?;

    if response.status() != StatusCode::PARTIAL_CONTENT {
        return Err(ProbeError::NotPartialContent(response.status()));
    }

    let value = response
        .headers()
        .get(CONTENT_RANGE)
        .ok_or(ProbeError::MissingContentRange)?;
    let raw = value.to_str().map_err(|_| {
        ProbeError::MalformedContentRange(String::from_utf8_lossy(value.as_bytes()).into_owned())
    })?;

    descriptor_from_header(raw)
}
