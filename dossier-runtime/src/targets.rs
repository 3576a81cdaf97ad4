//! Input target parsing
//!
//! Accepts exactly one source: a file with one IP per line, or an inline
//! list. Surfaced before any probe runs; the CLI's argument group already
//! enforces exclusivity, this is the library-level contract.

use std::fs;
use std::path::Path;

use thiserror::Error;

/// Errors from resolving the input IP list
#[derive(Debug, Error)]
pub enum InputError {
    #[error("no input source given; provide an IP file or an inline list")]
    MissingSource,

    #[error("both an IP file and an inline list given; choose one")]
    ConflictingSources,

    #[error("could not read IP file {path}: {source}")]
    UnreadableFile {
        path: String,
        source: std::io::Error,
    },

    #[error("input source is empty")]
    Empty,
}

/// Read one IP per line, trimming whitespace and skipping blank lines
pub fn from_file(path: &Path) -> Result<Vec<String>, InputError> {
    let contents = fs::read_to_string(path).map_err(|source| InputError::UnreadableFile {
        path: path.display().to_string(),
        source,
    })?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Resolve the effective IP list from the two mutually exclusive sources
pub fn resolve(file: Option<&Path>, inline: &[String]) -> Result<Vec<String>, InputError> {
    let ips = match (file, inline.is_empty()) {
        (Some(_), false) => return Err(InputError::ConflictingSources),
        (Some(path), true) => from_file(path)?,
        (None, false) => inline.to_vec(),
        (None, true) => return Err(InputError::MissingSource),
    };
    if ips.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(ips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_ip_file(stem: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "dossier-targets-{}-{}.txt",
            std::process::id(),
            stem
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_file_lines_trimmed_and_blanks_skipped() {
        let path = temp_ip_file("lines", "1.1.1.1\n\n  8.8.8.8  \n\n");
        let ips = from_file(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(ips, vec!["1.1.1.1", "8.8.8.8"]);
    }

    #[test]
    fn test_unreadable_file_is_surfaced() {
        let result = from_file(Path::new("/nonexistent/ips.txt"));
        assert!(matches!(result, Err(InputError::UnreadableFile { .. })));
    }

    #[test]
    fn test_resolve_requires_exactly_one_source() {
        assert!(matches!(resolve(None, &[]), Err(InputError::MissingSource)));
        let inline = vec!["1.1.1.1".to_string()];
        assert!(matches!(
            resolve(Some(Path::new("ips.txt")), &inline),
            Err(InputError::ConflictingSources)
        ));
        assert_eq!(resolve(None, &inline).unwrap(), inline);
    }

    #[test]
    fn test_blank_only_file_is_empty() {
        let path = temp_ip_file("blank", "\n   \n");
        let result = resolve(Some(&path), &[]);
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(InputError::Empty)));
    }
}
