// src/file.rs

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

/// Write `contents` to `<dir>/<file_name>`, creating `dir` if needed.
/// Any existing file is truncated and overwritten. Returns the final path.
pub fn write_output(dir: &Path, file_name: &str, contents: &[u8]) -> io::Result<PathBuf> {
    if !dir.as_os_str().is_empty() {
        ensure_directory(dir)?;
    }
    let path = dir.join(file_name);
    fs::write(&path, contents)?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
