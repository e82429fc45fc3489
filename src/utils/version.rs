use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use super::error::SyncError;

/// A `major.minor.patch` version where `patch` carries the pull request number.
///
/// `major` and `minor` are kept as the digits found in the file so a rewrite
/// never changes them, leading zeros included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    major: String,
    minor: String,
    patch: u64,
}

impl Version {
    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn minor(&self) -> &str {
        &self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn with_patch(&self, patch: u64) -> Self {
        Self {
            major: self.major.clone(),
            minor: self.minor.clone(),
            patch,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

fn malformed(content: &str, reason: &str) -> SyncError {
    SyncError::MalformedVersion {
        content: content.to_string(),
        reason: reason.to_string(),
    }
}

fn is_numeric(field: &str) -> bool {
    !field.is_empty() && field.chars().all(|c| c.is_ascii_digit())
}

impl FromStr for Version {
    type Err = SyncError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let line = match lines.as_slice() {
            [line] => *line,
            [] => return Err(malformed(content, "version file is empty")),
            _ => return Err(malformed(content, "expected a single line")),
        };
        let fields: Vec<&str> = line.split('.').collect();
        if fields.len() != 3 {
            return Err(malformed(
                content,
                &format!("expected 3 dot-separated fields, found {}", fields.len()),
            ));
        }
        if !is_numeric(fields[0]) || !is_numeric(fields[1]) {
            return Err(malformed(content, "major and minor must be numeric"));
        }
        if !is_numeric(fields[2]) {
            return Err(malformed(content, "patch must be numeric"));
        }
        let patch = fields[2]
            .parse::<u64>()
            .map_err(|e| malformed(content, &format!("patch out of range: {e}")))?;
        Ok(Self {
            major: fields[0].to_string(),
            minor: fields[1].to_string(),
            patch,
        })
    }
}

pub fn read_version_file(path: &Path) -> Result<Version, SyncError> {
    let content = fs::read_to_string(path).map_err(|source| SyncError::VersionIo {
        path: path.to_path_buf(),
        source,
    })?;
    let version = content.parse::<Version>()?;
    log::debug!("[read_version_file] {:?} = {}", path, &version);
    Ok(version)
}

pub fn write_version_file(path: &Path, version: &Version) -> Result<(), SyncError> {
    fs::write(path, format!("{version}\n")).map_err(|source| SyncError::VersionIo {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_line_with_trailing_newline() {
        let version: Version = "1.2.41\n".parse().unwrap();
        assert_eq!(version.major(), "1");
        assert_eq!(version.minor(), "2");
        assert_eq!(version.patch(), 41);
    }

    #[test]
    fn with_patch_keeps_major_and_minor_verbatim() {
        let version: Version = "0.07.3".parse().unwrap();
        assert_eq!(version.with_patch(57).to_string(), "0.07.57");
    }

    #[test]
    fn rejects_wrong_field_count() {
        for content in ["1.2", "1.2.3.4", "123"] {
            let err = content.parse::<Version>().unwrap_err();
            assert!(matches!(err, SyncError::MalformedVersion { .. }), "{content}");
        }
    }

    #[test]
    fn rejects_non_numeric_fields() {
        for content in ["1.2.x", "a.2.3", "1..3", "1.2.-3"] {
            assert!(content.parse::<Version>().is_err(), "{content}");
        }
    }

    #[test]
    fn rejects_empty_and_multi_line_files() {
        assert!("".parse::<Version>().is_err());
        assert!("  \n\n".parse::<Version>().is_err());
        assert!("1.2.3\n1.2.4\n".parse::<Version>().is_err());
    }

    #[test]
    fn write_then_read_version_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("VERSION");
        let version: Version = "3.1.9".parse().unwrap();
        write_version_file(&path, &version).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "3.1.9\n");
        assert_eq!(read_version_file(&path).unwrap(), version);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_version_file(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, SyncError::VersionIo { .. }));
    }
}
