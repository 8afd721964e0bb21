//! Exception token resolution.
//!
//! Each command-line exception token is tried as a file first. A readable
//! file contributes its non-blank lines verbatim; a missing path falls back
//! to treating the token as a literal address, which must validate. Invalid
//! literals and unreadable files are warned about and skipped, never fatal.

use crate::output;
use crate::types;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind};
use tracing::{debug, warn};

/// Resolve exception tokens into a deduplicated set of address strings.
pub fn resolve(tokens: &[String]) -> HashSet<String> {
    let mut set = HashSet::new();

    for token in tokens {
        match File::open(token) {
            Ok(file) => match read_entries(file) {
                Ok(entries) => {
                    debug!(file = %token, count = entries.len(), "loaded exception file");
                    set.extend(entries);
                }
                Err(e) => {
                    warn!(file = %token, error = %e, "failed to read exception file");
                    output::print_warning(&format!(
                        "error reading exception file {}: {}",
                        token, e
                    ));
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                if types::is_valid(token) {
                    set.insert(token.clone());
                } else {
                    warn!(token = %token, "exception token is neither a file nor an address");
                    output::print_warning(&format!("invalid IP address in exceptions: {}", token));
                }
            }
            Err(e) => {
                warn!(file = %token, error = %e, "failed to open exception file");
                output::print_warning(&format!("error reading exception file {}: {}", token, e));
            }
        }
    }

    set
}

/// Read exception entries from an open file: one per line, trimmed, blanks
/// skipped. No address validation is applied to file-sourced entries.
fn read_entries(file: File) -> io::Result<Vec<String>> {
    let reader = BufReader::new(file);
    let mut entries = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            entries.push(trimmed.to_string());
        }
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_file_token_reads_lines_and_skips_blanks() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "10.0.0.5\n10.0.0.6\n\n").unwrap();

        let set = resolve(&tokens(&[file.path().to_str().unwrap()]));
        assert_eq!(set.len(), 2);
        assert!(set.contains("10.0.0.5"));
        assert!(set.contains("10.0.0.6"));
    }

    #[test]
    fn test_file_entries_are_trimmed() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "  10.0.0.7  \n\t10.0.0.8\n").unwrap();

        let set = resolve(&tokens(&[file.path().to_str().unwrap()]));
        assert!(set.contains("10.0.0.7"));
        assert!(set.contains("10.0.0.8"));
    }

    #[test]
    fn test_missing_path_falls_back_to_literal() {
        let set = resolve(&tokens(&["10.0.0.9"]));
        assert_eq!(set.len(), 1);
        assert!(set.contains("10.0.0.9"));
    }

    #[test]
    fn test_invalid_literal_is_skipped() {
        let set = resolve(&tokens(&["not-an-ip"]));
        assert!(set.is_empty());
    }

    #[test]
    fn test_mixed_tokens_are_unioned_and_deduplicated() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "10.0.0.5\n10.0.0.6\n").unwrap();

        let set = resolve(&tokens(&[
            file.path().to_str().unwrap(),
            "10.0.0.5",
            "10.0.0.10",
            "bogus",
        ]));
        assert_eq!(set.len(), 3);
        assert!(set.contains("10.0.0.5"));
        assert!(set.contains("10.0.0.6"));
        assert!(set.contains("10.0.0.10"));
    }

    #[test]
    fn test_file_entries_skip_validation() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "definitely-not-an-ip\n").unwrap();

        let set = resolve(&tokens(&[file.path().to_str().unwrap()]));
        assert!(set.contains("definitely-not-an-ip"));
    }
}
