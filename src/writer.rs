//! Positional file writes: every chunk lands at an absolute offset, so
//! concurrent writers never share a cursor.
use std::fs::File;
use std::io;

use crate::error::WriteError;

/// One raw positional write, addressed by absolute offset.
///
/// Implemented for [`std::fs::File`] via the platform's offset-write call;
/// test doubles can simulate short writes.
pub trait PositionalWrite {
    fn write_at(&self, buf: &[u8], offset: u64) -> io::Result<usize>;
}

impl PositionalWrite for File {
    #[cfg(unix)]
    fn write_at(&self, buf: &[u8], offset: u64) -> io::Result<usize> {
        std::os::unix::fs::FileExt::write_at(self, buf, offset)
    }

    #[cfg(windows)]
    fn write_at(&self, buf: &[u8], offset: u64) -> io::Result<usize> {
        std::os::windows::fs::FileExt::seek_write(self, buf, offset)
    }
}

/// Writes the whole buffer at `offset`, or fails.
///
/// A raw write that lands fewer bytes than `data.len()` surfaces as
/// [`WriteError::Short`] even when the call itself reported success.
pub fn write_full_at<W: PositionalWrite + ?Sized>(
    file: &W,
    data: &[u8],
    offset: u64,
) -> Result<(), WriteError> {
    let written = file.write_at(data, offset)?;
    if written < data.len() {
        return Err(WriteError::Short {
            written,
            expected: data.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::partition;
    use std::io::{Read, Seek};
    use tempfile::tempfile;

    /// Reports at most 80 bytes written, whatever it is given.
    struct ShortFile;

    impl PositionalWrite for ShortFile {
        fn write_at(&self, buf: &[u8], _offset: u64) -> io::Result<usize> {
            Ok(buf.len().min(80))
        }
    }

    #[test]
    fn short_write_is_surfaced_even_without_an_io_error() {
        let err = write_full_at(&ShortFile, &[0u8; 100], 0).unwrap_err();
        assert!(matches!(
            err,
            WriteError::Short {
                written: 80,
                expected: 100
            }
        ));
    }

    #[test]
    fn writes_land_at_their_absolute_offsets() {
        let mut file = tempfile().unwrap();
        write_full_at(&file, b"World", 5).unwrap();
        write_full_at(&file, b"Hello", 0).unwrap();

        let mut content = String::new();
        file.rewind().unwrap();
        file.read_to_string(&mut content).unwrap();
        assert_eq!(content, "HelloWorld");
    }

    #[test]
    fn reverse_completion_order_yields_an_identical_file() {
        let total = 1_000_000u64;
        let expected: Vec<u8> = (0..total).map(|i| (i % 251) as u8).collect();
        let ranges = partition(total, 7).unwrap();

        let mut forward = tempfile().unwrap();
        for r in &ranges {
            let slice = &expected[r.start as usize..=r.end as usize];
            write_full_at(&forward, slice, r.start).unwrap();
        }

        let mut reverse = tempfile().unwrap();
        for r in ranges.iter().rev() {
            let slice = &expected[r.start as usize..=r.end as usize];
            write_full_at(&reverse, slice, r.start).unwrap();
        }

        let mut a = Vec::new();
        forward.rewind().unwrap();
        forward.read_to_end(&mut a).unwrap();
        let mut b = Vec::new();
        reverse.rewind().unwrap();
        reverse.read_to_end(&mut b).unwrap();

        assert_eq!(a, expected);
        assert_eq!(a, b);
    }
}
