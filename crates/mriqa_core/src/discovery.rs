//! Folder discovery for uploads.
//!
//! Scans the selected directory recursively and stages every file it finds,
//! keeping the path relative to the selected root as the upload filename so
//! the backend can mirror the folder structure. No filtering happens here:
//! the backend decides what counts as a DICOM file.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::models::UploadEntry;

/// Collect every file under `root` as an upload entry.
///
/// Entries are ordered name-sorted per directory, files before
/// subdirectories, so repeated scans of the same folder stage the same
/// sequence.
pub fn scan_folder(root: &Path) -> io::Result<Vec<UploadEntry>> {
    let mut entries = Vec::new();
    scan_into(root, root, &mut entries)?;
    debug!(count = entries.len(), root = %root.display(), "scanned folder");
    Ok(entries)
}

fn scan_into(root: &Path, dir: &Path, out: &mut Vec<UploadEntry>) -> io::Result<()> {
    // file_type() does not follow symlinks; a link back into the tree must
    // not send the scan into a cycle.
    let mut children = Vec::new();
    for child in fs::read_dir(dir)? {
        let child = child?;
        let is_dir = child.file_type()?.is_dir();
        children.push((is_dir, child.file_name(), child.path()));
    }
    children.sort();

    for (is_dir, _, path) in children {
        if is_dir {
            scan_into(root, &path, out)?;
        } else {
            let relative = path
                .strip_prefix(root)
                .unwrap_or(&path)
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            out.push(UploadEntry::new(path, relative));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Write;

    use super::*;

    fn touch(path: &Path, content: &str) {
        let mut f = File::create(path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn scan_preserves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("b.dcm"), "b");
        touch(&dir.path().join("a.dcm"), "a");
        fs::create_dir(dir.path().join("series2")).unwrap();
        touch(&dir.path().join("series2").join("c.dcm"), "c");

        let entries = scan_folder(dir.path()).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.relative_name.as_str()).collect();

        assert_eq!(names, vec!["a.dcm", "b.dcm", "series2/c.dcm"]);
    }

    #[test]
    fn scan_of_empty_folder_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan_folder(dir.path()).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn scan_does_not_follow_symlink_cycles() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("slice.dcm"), "x");
        std::os::unix::fs::symlink(dir.path(), dir.path().join("loop")).unwrap();

        let entries = scan_folder(dir.path()).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.relative_name.as_str()).collect();

        assert!(names.contains(&"slice.dcm"));
        assert!(!names.iter().any(|n| n.starts_with("loop/")));
    }

    #[test]
    fn rescan_replaces_nothing_and_matches() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("slice.dcm"), "x");

        let first = scan_folder(dir.path()).unwrap();
        let second = scan_folder(dir.path()).unwrap();
        assert_eq!(first, second);
    }
}
