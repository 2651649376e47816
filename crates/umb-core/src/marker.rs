//! Server path marker publication
//!
//! The bridge records the resolved companion-server path in a small text
//! file that other tooling can read back:
//! `<data root>/../Unity MCP Bridge/serverpath.txt`. The folder name is
//! deliberately human-legible (it contains a space) so the marker is easy
//! to spot next to the project's data directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::MarkerError;
use crate::types::ServerPath;

/// Display folder holding the marker, created as a sibling of the data root
pub const MARKER_DIR_NAME: &str = "Unity MCP Bridge";

/// File inside the marker directory holding the recorded server path
pub const MARKER_FILE_NAME: &str = "serverpath.txt";

/// Directory the marker lives in for the given project data root
pub fn marker_dir(data_root: &Path) -> PathBuf {
    // A rootless data root ("Assets") resolves relative to the working
    // directory, which is still its sibling.
    data_root
        .parent()
        .unwrap_or(data_root)
        .join(MARKER_DIR_NAME)
}

/// Full marker file path for the given project data root
pub fn marker_path(data_root: &Path) -> PathBuf {
    marker_dir(data_root).join(MARKER_FILE_NAME)
}

/// Create the marker directory if needed and overwrite the marker file
/// with exactly the server path string
///
/// The write is a plain truncate-and-write; the marker is advisory, so
/// there is no atomic rename and no concurrent-writer guard. On failure
/// any previous content is left in place.
pub fn publish(data_root: &Path, server_path: &ServerPath) -> Result<PathBuf, MarkerError> {
    let dir = marker_dir(data_root);
    fs::create_dir_all(&dir).map_err(|source| MarkerError::CreateDir {
        path: dir.clone(),
        source,
    })?;

    let file = dir.join(MARKER_FILE_NAME);
    fs::write(&file, server_path.as_str()).map_err(|source| MarkerError::Write {
        path: file.clone(),
        source,
    })?;

    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_marker_dir_is_sibling_of_data_root() {
        let dir = marker_dir(Path::new("/proj/Assets"));
        assert_eq!(dir, PathBuf::from("/proj/Unity MCP Bridge"));
    }

    #[test]
    fn test_marker_dir_for_rootless_data_root() {
        let dir = marker_dir(Path::new("Assets"));
        assert_eq!(dir, PathBuf::from("Unity MCP Bridge"));
    }

    #[test]
    fn test_marker_path_layout() {
        let path = marker_path(Path::new("/proj/Assets"));
        assert_eq!(path, PathBuf::from("/proj/Unity MCP Bridge/serverpath.txt"));
    }

    #[test]
    fn test_publish_writes_exact_content() {
        let dir = TempDir::new().unwrap();
        let data_root = dir.path().join("Assets");

        let server_path = ServerPath::new("/home/user/.local/UnityMcpServer/src");
        let file = publish(&data_root, &server_path).unwrap();

        assert_eq!(file, dir.path().join("Unity MCP Bridge/serverpath.txt"));
        let content = fs::read_to_string(&file).unwrap();
        assert_eq!(content, "/home/user/.local/UnityMcpServer/src");
    }

    #[test]
    fn test_publish_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let data_root = dir.path().join("Assets");

        publish(&data_root, &ServerPath::new("/a/very/long/previous/path")).unwrap();
        let file = publish(&data_root, &ServerPath::new("/short")).unwrap();

        // Whole-file overwrite, no remnants of the longer old content
        assert_eq!(fs::read_to_string(&file).unwrap(), "/short");
    }

    #[test]
    fn test_publish_empty_path_verbatim() {
        let dir = TempDir::new().unwrap();
        let data_root = dir.path().join("Assets");

        let file = publish(&data_root, &ServerPath::from("")).unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "");
    }

    #[test]
    fn test_publish_does_not_require_data_root_to_exist() {
        let dir = TempDir::new().unwrap();
        // "Assets" itself is never created
        let data_root = dir.path().join("Assets");

        publish(&data_root, &ServerPath::new("/srv")).unwrap();
        assert!(!data_root.exists());
        assert!(marker_path(&data_root).exists());
    }

    #[test]
    fn test_publish_create_dir_failure() {
        let dir = TempDir::new().unwrap();
        let data_root = dir.path().join("Assets");

        // Occupy the marker directory's path with a plain file
        fs::write(dir.path().join(MARKER_DIR_NAME), "in the way").unwrap();

        let err = publish(&data_root, &ServerPath::new("/srv")).unwrap_err();
        match &err {
            MarkerError::CreateDir { path, .. } => {
                assert_eq!(path, &dir.path().join(MARKER_DIR_NAME));
            }
            other => panic!("expected CreateDir error, got {:?}", other),
        }
        assert_eq!(err.path(), dir.path().join(MARKER_DIR_NAME));
    }

    #[test]
    fn test_publish_write_failure() {
        let dir = TempDir::new().unwrap();
        let data_root = dir.path().join("Assets");

        // Occupy the marker file's path with a directory
        fs::create_dir_all(marker_path(&data_root)).unwrap();

        let err = publish(&data_root, &ServerPath::new("/srv")).unwrap_err();
        match &err {
            MarkerError::Write { path, .. } => {
                assert_eq!(path, &marker_path(&data_root));
            }
            other => panic!("expected Write error, got {:?}", other),
        }
    }
}
