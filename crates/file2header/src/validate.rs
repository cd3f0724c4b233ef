//! Path validation run before any byte is read or written.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Directory that will hold `output`.
///
/// Falls back to `output` itself when it has no parent (a filesystem root).
pub fn output_dir(output: &Path) -> PathBuf {
    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => output.to_path_buf(),
    }
}

/// Check that `input` exists and the current process may read it.
pub fn check_input(input: &Path) -> Result<()> {
    if !input.exists() {
        return Err(Error::InputNotFound(input.to_path_buf()));
    }
    if !access::readable(input) {
        return Err(Error::InputNotReadable(input.to_path_buf()));
    }
    Ok(())
}

/// Check that the directory holding `output` exists and the current process may write to it.
pub fn check_output_dir(output: &Path) -> Result<()> {
    let dir = output_dir(output);
    if !dir.exists() {
        return Err(Error::OutputDirNotFound(dir));
    }
    if !access::writable(&dir) {
        return Err(Error::OutputDirNotWritable(dir));
    }
    Ok(())
}

/// Validate both ends of a conversion. Input checks run first; the first
/// failure is returned.
pub fn validate_paths(input: &Path, output: &Path) -> Result<()> {
    check_input(input)?;
    check_output_dir(output)?;
    log::debug!("validated {} -> {}", input.display(), output.display());
    Ok(())
}

/// Permission checks against the effective credentials of this process.
#[cfg(unix)]
mod access {
    use std::path::Path;

    use nix::unistd::{access, AccessFlags};

    pub fn readable(path: &Path) -> bool {
        access(path, AccessFlags::R_OK).is_ok()
    }

    pub fn writable(path: &Path) -> bool {
        access(path, AccessFlags::W_OK).is_ok()
    }
}

#[cfg(not(unix))]
mod access {
    use std::fs::{self, File};
    use std::path::Path;

    pub fn readable(path: &Path) -> bool {
        File::open(path).is_ok()
    }

    pub fn writable(path: &Path) -> bool {
        fs::metadata(path)
            .map(|meta| !meta.permissions().readonly())
            .unwrap_or(false)
    }
}
