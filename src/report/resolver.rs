use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::errors::ScoreError;

pub const INDEX_FILE: &str = "index.html";

/// Finds the summary `index.html` of a PIT report folder.
///
/// A top level `index.html` wins. Otherwise the lexically last
/// subdirectory is used, which is the newest one when PIT writes
/// timestamped report folders.
pub fn resolve_summary_document(report_root: &Path) -> Result<PathBuf, ScoreError> {
    if !report_root.is_dir() {
        return Err(ScoreError::RootNotFound(report_root.to_path_buf()));
    }

    let index_path = report_root.join(INDEX_FILE);
    if index_path.exists() {
        debug!("Using summary document {}", index_path.display());
        return Ok(index_path);
    }

    let latest_report = latest_report_dir(report_root)?
        .ok_or_else(|| ScoreError::NoReportGenerated(report_root.to_path_buf()))?;
    debug!("Falling back to report folder {}", latest_report.display());

    let index_path = latest_report.join(INDEX_FILE);
    if !index_path.exists() {
        return Err(ScoreError::IndexMissing(index_path));
    }
    debug!("Using summary document {}", index_path.display());
    Ok(index_path)
}

fn latest_report_dir(report_root: &Path) -> Result<Option<PathBuf>, ScoreError> {
    let mut latest = None;
    for entry in WalkDir::new(report_root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_dir() {
            latest = Some(entry.into_path());
        }
    }
    Ok(latest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn prefers_top_level_index() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join(INDEX_FILE), "<html></html>").unwrap();
        fs::create_dir(root.path().join("202401011200")).unwrap();

        let resolved = resolve_summary_document(root.path()).unwrap();
        assert_eq!(resolved, root.path().join(INDEX_FILE));
    }

    #[test]
    fn selects_lexically_last_report_folder() {
        let root = tempfile::tempdir().unwrap();
        for name in ["2023-06-01", "2023-01-01"] {
            let dir = root.path().join(name);
            fs::create_dir(&dir).unwrap();
            fs::write(dir.join(INDEX_FILE), name).unwrap();
        }
        fs::write(root.path().join("zzz.txt"), "not a folder").unwrap();

        let resolved = resolve_summary_document(root.path()).unwrap();
        assert_eq!(resolved, root.path().join("2023-06-01").join(INDEX_FILE));
    }

    #[test]
    fn empty_root_has_no_reports() {
        let root = tempfile::tempdir().unwrap();

        let err = resolve_summary_document(root.path()).unwrap_err();
        assert!(matches!(err, ScoreError::NoReportGenerated(_)));
    }

    #[test]
    fn latest_folder_without_index() {
        let root = tempfile::tempdir().unwrap();
        let old = root.path().join("2023-01-01");
        fs::create_dir(&old).unwrap();
        fs::write(old.join(INDEX_FILE), "old").unwrap();
        fs::create_dir(root.path().join("2023-06-01")).unwrap();

        let err = resolve_summary_document(root.path()).unwrap_err();
        match err {
            ScoreError::IndexMissing(path) => {
                assert_eq!(path, root.path().join("2023-06-01").join(INDEX_FILE))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_root() {
        let root = tempfile::tempdir().unwrap();
        let missing = root.path().join("pit-reports");

        let err = resolve_summary_document(&missing).unwrap_err();
        assert!(matches!(err, ScoreError::RootNotFound(path) if path == missing));
    }

    #[test]
    fn file_is_not_a_root() {
        let file = tempfile::NamedTempFile::new().unwrap();

        let err = resolve_summary_document(file.path()).unwrap_err();
        assert!(matches!(err, ScoreError::RootNotFound(_)));
    }
}
