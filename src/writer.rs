//! Line-oriented output file writing.

use crate::error::{CliError, CliResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Write one address per line to `path`, creating or truncating the file.
///
/// The handle is buffered and flushed before returning; it is closed on every
/// exit path when the writer drops. Failures carry the destination path and
/// the underlying I/O error.
pub fn write_list(list: &[String], path: &Path) -> CliResult<()> {
    let io_err = |source: std::io::Error| CliError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);

    for addr in list {
        writeln!(out, "{}", addr).map_err(io_err)?;
    }
    out.flush().map_err(io_err)?;

    debug!(path = %path.display(), count = list.len(), "wrote address list");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_writes_one_address_per_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let list = vec!["10.0.0.1".to_string(), "10.0.0.2".to_string()];

        write_list(&list, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "10.0.0.1\n10.0.0.2\n");
    }

    #[test]
    fn test_empty_list_produces_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");

        write_list(&[], &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_truncates_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "stale contents\n").unwrap();

        write_list(&["10.0.0.1".to_string()], &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "10.0.0.1\n");
    }

    #[test]
    fn test_unwritable_destination_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");

        let err = write_list(&["10.0.0.1".to_string()], &path).unwrap_err();
        assert!(err.to_string().contains("out.txt"));
    }
}
