use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;

use crate::ScrapeError;

/// Writes `contents` to `dir/file_name`, replacing any file already there.
pub fn save(dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf, ScrapeError> {
    let path = dir.join(file_name);
    fs::write(&path, contents).map_err(|source| ScrapeError::Io {
        path: path.clone(),
        source,
    })?;
    info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_then_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = save(dir.path(), "9-3-2020_covid19QC.csv", "old,run").unwrap();
        assert_eq!(path, dir.path().join("9-3-2020_covid19QC.csv"));

        save(dir.path(), "9-3-2020_covid19QC.csv", "Date,Cases").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Date,Cases");
    }

    #[test]
    fn empty_contents_give_zero_byte_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = save(dir.path(), "empty.csv", "").unwrap();
        assert_eq!(fs::metadata(path).unwrap().len(), 0);
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = save(&dir.path().join("nope"), "x.csv", "a").unwrap_err();
        assert!(matches!(err, ScrapeError::Io { .. }));
    }
}
