//! Byte ranges and the partitioning of a resource across workers.
use std::fmt;

use crate::error::ConfigError;

/// An inclusive byte range `[start, end]` within the remote resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    /// The starting byte index (0-based).
    pub start: u64,
    /// The ending byte index, included in the range.
    pub end: u64,
}

impl ByteRange {
    /// Number of bytes covered by this range.
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    /// Formats the range as an HTTP `Range` header value.
    pub fn to_header_value(&self) -> String {
        format!("bytes={}-{}", self.start, self.end)
    }
}

impl fmt::Display for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Splits `total` bytes into exactly `workers` contiguous ranges.
///
/// The first range runs from 0 through the floored average; every later
/// range picks up one past its predecessor's end, and the last range
/// absorbs any remainder so coverage always ends at `total - 1`.
///
/// # Errors
///
/// Returns a [`ConfigError`] when `workers` or `total` is zero, or when
/// the split would produce an empty range (`workers >= total` for more
/// than one worker).
pub fn partition(total: u64, workers: u64) -> Result<Vec<ByteRange>, ConfigError> {
    if workers == 0 {
        return Err(ConfigError::ZeroWorkers);
    }
    if total == 0 {
        return Err(ConfigError::ZeroTotal);
    }
    if workers > 1 && workers >= total {
        return Err(ConfigError::TooManyWorkers { workers, total });
    }

    let avg = total / workers;
    let mut ranges = Vec::with_capacity(workers as usize);

    for i in 1..=workers {
        let (start, mut end) = if i == 1 {
            (0, avg)
        } else {
            ((i - 1) * avg + 1, i * avg)
        };
        if i == workers {
            end = total - 1;
        }
        ranges.push(ByteRange { start, end });
    }

    Ok(ranges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_ten_bytes_across_three_workers() {
        let ranges = partition(10, 3).unwrap();
        assert_eq!(
            ranges,
            vec![
                ByteRange { start: 0, end: 3 },
                ByteRange { start: 4, end: 6 },
                ByteRange { start: 7, end: 9 },
            ]
        );
    }

    #[test]
    fn last_range_absorbs_the_remainder() {
        let ranges = partition(11, 3).unwrap();
        assert_eq!(
            ranges,
            vec![
                ByteRange { start: 0, end: 3 },
                ByteRange { start: 4, end: 7 },
                ByteRange { start: 8, end: 10 },
            ]
        );
    }

    #[test]
    fn single_worker_gets_the_whole_resource() {
        assert_eq!(
            partition(100, 1).unwrap(),
            vec![ByteRange { start: 0, end: 99 }]
        );
        assert_eq!(partition(1, 1).unwrap(), vec![ByteRange { start: 0, end: 0 }]);
    }

    #[test]
    fn coverage_is_gap_free_and_exact() {
        let totals = [5u64, 10, 11, 64, 1000, 999_983, 1_000_000];
        let workers = [1u64, 2, 3, 4, 7, 8, 33];

        for &total in &totals {
            for &n in &workers {
                if n > 1 && n >= total {
                    continue;
                }
                let ranges = partition(total, n).unwrap();
                assert_eq!(ranges.len(), n as usize, "total={total} n={n}");
                assert_eq!(ranges[0].start, 0);
                assert_eq!(ranges.last().unwrap().end, total - 1);
                for pair in ranges.windows(2) {
                    assert_eq!(pair[1].start, pair[0].end + 1, "total={total} n={n}");
                }
                for r in &ranges {
                    assert!(r.start <= r.end, "degenerate range {r} at total={total} n={n}");
                }
                let covered: u64 = ranges.iter().map(ByteRange::len).sum();
                assert_eq!(covered, total);
            }
        }
    }

    #[test]
    fn rejects_zero_workers_and_zero_total() {
        assert!(matches!(partition(10, 0), Err(ConfigError::ZeroWorkers)));
        assert!(matches!(partition(0, 3), Err(ConfigError::ZeroTotal)));
    }

    #[test]
    fn rejects_splits_that_would_leave_empty_ranges() {
        assert!(matches!(
            partition(5, 10),
            Err(ConfigError::TooManyWorkers { workers: 10, total: 5 })
        ));
        // n == total: the first range's extra byte starves the last one.
        assert!(matches!(
            partition(10, 10),
            Err(ConfigError::TooManyWorkers { .. })
        ));
        // One worker fewer is fine again.
        assert!(partition(10, 9).is_ok());
    }

    #[test]
    fn formats_as_range_header_value() {
        let r = ByteRange { start: 0, end: 499 };
        assert_eq!(r.to_header_value(), "bytes=0-499");
        assert_eq!(r.len(), 500);
    }
}
