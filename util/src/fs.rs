//! Filesystem helpers.

use std::fs;
use std::io;
use std::path::Path;

/// Returns whether a directory exists at `path`. Symbolic links are
/// followed.
pub fn is_dir(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).map(|meta| meta.is_dir()).unwrap_or(false)
}

/// Returns the sorted names of the files in `dir`.
///
/// Symbolic links are followed, so a link to a file counts as a file;
/// directories and entries that cannot be resolved are excluded.
pub fn files_in_dir(dir: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        // fs::metadata follows links, DirEntry::metadata does not
        if let Ok(meta) = fs::metadata(entry.path()) {
            if meta.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
    }

    names.sort();
    Ok(names)
}
