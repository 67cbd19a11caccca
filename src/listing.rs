use crate::metadata::{stat_entry, FileRecord};
use crate::{FsMetaError, Result};
use std::path::PathBuf;

/// Enumerate the immediate entries of `directory`, best-effort.
///
/// Entries whose name starts with '.' are skipped before any stat. Entries
/// that fail to stat (removed mid-enumeration, permission edge cases) are
/// omitted from the result without being reported. Only the directory open
/// itself can fail the whole listing.
pub fn list_directory(directory: &str) -> Result<Vec<FileRecord>> {
    let dir = match std::fs::read_dir(directory) {
        Ok(d) => d,
        Err(_) => return Err(FsMetaError::DirectoryOpen(PathBuf::from(directory))),
    };

    let mut records = Vec::new();
    for entry in dir {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        let path = join_entry_path(directory, &name);
        match stat_entry(&name, &path) {
            Ok(record) => records.push(record),
            Err(_) => continue,
        }
    }
    Ok(records)
}

// A "." directory argument degenerates to the bare entry name so that
// consumers never see a "./" prefix.
fn join_entry_path(directory: &str, name: &str) -> String {
    if directory == "." {
        name.to_string()
    } else {
        format!("{}/{}", directory, name)
    }
}
