//! File access for snapshots and reports, built on `cap-std` and `camino`.

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// Open a UTF-8 file path for reading using ambient authority.
pub(crate) fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Return whether `path` exists and is a regular file.
///
/// Inspects through the same ambient open used for reading, so symlinks
/// resolve exactly as they will when the file is loaded.
pub(crate) fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    match open_utf8_file(path) {
        Ok(file) => file.metadata().map(|meta| meta.is_file()),
        Err(_) if fs_utf8::Dir::open_ambient_dir(path, ambient_authority()).is_ok() => Ok(false),
        Err(err) => Err(err),
    }
}

/// Create (or truncate) `path`, creating missing parent directories first.
pub(crate) fn create_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_str().is_empty()) {
        fs_utf8::Dir::create_ambient_dir_all(parent, ambient_authority())?;
    }
    let (dir, name) = open_parent_dir(path)?;
    dir.create(name)
}

fn open_parent_dir(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, &str)> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}
