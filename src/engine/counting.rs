//! Byte counting for a single file.

use memmap2::Mmap;
use std::fs::{self, File};
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::histogram::Histogram;
use crate::utils::config::ReadConsts;

/// How reading one file ended.
#[derive(Debug)]
pub enum FileOutcome {
    /// Read to end of stream.
    Complete { bytes: u64 },
    /// Target is a directory, FIFO, socket or device node; never opened.
    NotRegular,
    /// Could not be opened; nothing counted.
    OpenFailed(std::io::Error),
    /// Stopped on an I/O error after `bytes` were counted (those stay counted).
    ReadFailed { bytes: u64, err: std::io::Error },
}

/// Count every byte of the file at `path` into `histogram`.
///
/// Only regular files are opened (symlinks are resolved first); opening a FIFO with no writer
/// would block the worker forever. The file handle lives only for this call.
/// Files at or above [`ReadConsts::MMAP_THRESHOLD`] are mapped; if mapping fails they are read in chunks.
pub fn count_file(path: &Path, histogram: &mut Histogram) -> FileOutcome {
    let meta = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) => return FileOutcome::OpenFailed(e),
    };
    if !meta.is_file() {
        return FileOutcome::NotRegular;
    }

    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => return FileOutcome::OpenFailed(e),
    };

    if meta.len() >= ReadConsts::MMAP_THRESHOLD
        && let Some(bytes) = count_mapped(&file, histogram)
    {
        return FileOutcome::Complete { bytes };
    }

    count_reader(file, histogram)
}

/// Map `file` read-only and count the whole mapping. `None` if the map fails; `histogram` is then untouched.
pub fn count_mapped(file: &File, histogram: &mut Histogram) -> Option<u64> {
    // Safety: read-only map, dropped before returning. Unlinking the file keeps the pages valid;
    // only a concurrent truncation can fault (SIGBUS) on pages past the new end.
    let mmap = unsafe { Mmap::map(file) }.ok()?;
    histogram.add_bytes(&mmap);
    Some(mmap.len() as u64)
}

/// Chunked sequential read of `reader` into `histogram`. Retries on `Interrupted`.
pub fn count_reader<R: Read>(mut reader: R, histogram: &mut Histogram) -> FileOutcome {
    let mut buffer = vec![0u8; ReadConsts::READ_CHUNK_SIZE];
    let mut bytes = 0_u64;
    loop {
        match reader.read(&mut buffer) {
            Ok(0) => return FileOutcome::Complete { bytes },
            Ok(n) => {
                histogram.add_bytes(&buffer[..n]);
                bytes += n as u64;
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return FileOutcome::ReadFailed { bytes, err },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Yields its data once, then fails.
    struct FailAfter {
        data: Cursor<Vec<u8>>,
        interrupted_once: bool,
    }

    impl Read for FailAfter {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if !self.interrupted_once {
                self.interrupted_once = true;
                return Err(std::io::Error::from(ErrorKind::Interrupted));
            }
            match self.data.read(buf)? {
                0 => Err(std::io::Error::other("device went away")),
                n => Ok(n),
            }
        }
    }

    #[test]
    fn read_error_keeps_counted_bytes() {
        let mut h = Histogram::new();
        let reader = FailAfter {
            data: Cursor::new(b"abca".to_vec()),
            interrupted_once: false,
        };
        match count_reader(reader, &mut h) {
            FileOutcome::ReadFailed { bytes, .. } => assert_eq!(bytes, 4),
            other => panic!("expected ReadFailed, got {other:?}"),
        }
        assert_eq!(h.get(b'a'), 2);
        assert_eq!(h.total(), 4);
    }

    #[test]
    fn missing_file_is_open_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut h = Histogram::new();
        assert!(matches!(
            count_file(&dir.path().join("gone"), &mut h),
            FileOutcome::OpenFailed(_)
        ));
        assert!(h.is_empty());
    }

    #[test]
    fn directory_is_not_regular() {
        let dir = tempfile::tempdir().unwrap();
        let mut h = Histogram::new();
        assert!(matches!(
            count_file(dir.path(), &mut h),
            FileOutcome::NotRegular
        ));
        assert!(h.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn fifo_is_skipped_without_opening() {
        let dir = tempfile::tempdir().unwrap();
        let fifo = dir.path().join("pipe");
        let status = std::process::Command::new("mkfifo")
            .arg(&fifo)
            .status()
            .unwrap();
        assert!(status.success());

        // No writer exists; an open would block here.
        let mut h = Histogram::new();
        assert!(matches!(count_file(&fifo, &mut h), FileOutcome::NotRegular));
        assert!(h.is_empty());
    }

    #[test]
    fn mapped_count_matches_chunked_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.bin");
        let data: Vec<u8> = (0..=255u8).cycle().take(ReadConsts::READ_CHUNK_SIZE + 17).collect();
        std::fs::write(&path, &data).unwrap();

        let mut mapped = Histogram::new();
        let file = File::open(&path).unwrap();
        assert_eq!(count_mapped(&file, &mut mapped), Some(data.len() as u64));

        let mut chunked = Histogram::new();
        assert!(matches!(
            count_reader(File::open(&path).unwrap(), &mut chunked),
            FileOutcome::Complete { .. }
        ));
        assert_eq!(mapped, chunked);
        assert_eq!(mapped.get(16), (data.len() / 256 + 1) as u64);
    }

    #[test]
    fn counts_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f.bin");
        let data: Vec<u8> = (0..=255u8).cycle().take(ReadConsts::READ_CHUNK_SIZE * 2 + 3).collect();
        std::fs::write(&path, &data).unwrap();

        let mut h = Histogram::new();
        match count_file(&path, &mut h) {
            FileOutcome::Complete { bytes } => assert_eq!(bytes, data.len() as u64),
            other => panic!("expected Complete, got {other:?}"),
        }
        assert_eq!(h.total(), data.len() as u64);
        assert_eq!(h.get(0), 513);
        assert_eq!(h.get(3), 512);
    }
}
