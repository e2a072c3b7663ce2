use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::display::build_log_for_display;
use crate::error::{LogError, LogResult};

/// Bytes kept from the end of the log unless configured otherwise
pub const DEFAULT_TAIL_BYTES: usize = 2000;

/// Last `max` bytes of `data`, or all of it when shorter.
pub fn tail_bytes(data: &[u8], max: usize) -> &[u8] {
    &data[data.len().saturating_sub(max)..]
}

/// Decode the kept tail. A cut through a multi-byte character becomes U+FFFD.
fn decode_tail(data: &[u8], max_bytes: Option<usize>) -> String {
    let kept = match max_bytes {
        Some(max) => tail_bytes(data, max),
        None => data,
    };
    String::from_utf8_lossy(kept).into_owned()
}

/// Read a log file, keeping at most `max_bytes` from its end (`None` keeps all).
pub fn read_log(path: &Path, max_bytes: Option<usize>) -> LogResult<String> {
    let data = std::fs::read(path).map_err(|source| LogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = data.len(), "read log file");
    Ok(decode_tail(&data, max_bytes))
}

/// Read log text from any reader, e.g. stdin.
pub fn read_log_from<R: Read>(mut reader: R, max_bytes: Option<usize>) -> LogResult<String> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(LogError::Stdin)?;
    debug!(bytes = data.len(), "read log from stream");
    Ok(decode_tail(&data, max_bytes))
}

/// Read a log file and format it newest first.
pub fn read_log_for_display(path: &Path, max_bytes: Option<usize>) -> LogResult<String> {
    let raw = read_log(path, max_bytes)?;
    Ok(build_log_for_display(Some(&raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_tail_bytes_shorter_than_max() {
        assert_eq!(tail_bytes(b"abc", 10), b"abc");
        assert_eq!(tail_bytes(b"", 10), b"");
    }

    #[test]
    fn test_tail_bytes_keeps_end() {
        assert_eq!(tail_bytes(b"abcdef", 2), b"ef");
        assert_eq!(tail_bytes(b"abcdef", 0), b"");
    }

    #[test]
    fn test_read_log_full_and_tail() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "one\ntwo\nthree\n").unwrap();

        assert_eq!(read_log(file.path(), None).unwrap(), "one\ntwo\nthree\n");
        assert_eq!(read_log(file.path(), Some(6)).unwrap(), "three\n");
    }

    #[test]
    fn test_read_log_split_multibyte_is_lossy() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all("é!".as_bytes()).unwrap();

        // "é" is two bytes; keeping two bytes cuts it in half
        assert_eq!(read_log(file.path(), Some(2)).unwrap(), "\u{FFFD}!");
    }

    #[test]
    fn test_read_log_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.log");

        let err = read_log(&path, None).unwrap_err();
        assert!(matches!(err, LogError::Read { .. }));
        assert!(err.to_string().starts_with("Could not read log: "));
        assert!(err.to_string().contains("missing.log"));
    }

    #[test]
    fn test_read_log_from_reader() {
        let input = "a\nb\nc".as_bytes();
        assert_eq!(read_log_from(input, Some(3)).unwrap(), "b\nc");
    }

    #[test]
    fn test_read_log_for_display() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "2024-01-01 10:00:00: started\n2024-01-01 10:00:05: tick\n").unwrap();

        assert_eq!(
            read_log_for_display(file.path(), None).unwrap(),
            "2024-01-01 10:00:05: tick\n2024-01-01 10:00:00: started"
        );
    }

    #[test]
    fn test_read_log_for_display_tail_cuts_oldest() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "old\nnew\n").unwrap();

        // the tail starts mid-line, so the oldest line is partial
        assert_eq!(read_log_for_display(file.path(), Some(6)).unwrap(), "new\nd");
    }
}
