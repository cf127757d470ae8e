use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};

#[cfg(unix)]
fn make_writable_recursive(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let Ok(metadata) = fs::symlink_metadata(path) else {
        return Ok(());
    };
    if metadata.file_type().is_symlink() {
        return Ok(());
    }
    if metadata.is_dir() {
        let perms = fs::Permissions::from_mode(0o755);
        let _ = fs::set_permissions(path, perms);
        if let Ok(entries) = fs::read_dir(path) {
            for entry in entries.flatten() {
                make_writable_recursive(&entry.path())?;
            }
        }
    } else {
        let perms = fs::Permissions::from_mode(0o644);
        let _ = fs::set_permissions(path, perms);
    }
    Ok(())
}

#[cfg(not(unix))]
fn make_writable_recursive(path: &Path) -> Result<()> {
    let Ok(metadata) = fs::symlink_metadata(path) else {
        return Ok(());
    };
    let mut perms = metadata.permissions();
    perms.set_readonly(false);
    let _ = fs::set_permissions(path, perms);
    if metadata.is_dir() {
        if let Ok(entries) = fs::read_dir(path) {
            for entry in entries.flatten() {
                make_writable_recursive(&entry.path())?;
            }
        }
    }
    Ok(())
}

/// Removes a file, symlink, or directory tree, clearing read-only bits first.
///
/// An absent path is not an error; a symlink is unlinked without following it.
pub(crate) fn remove_path_all_writable(path: &Path) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to stat {}", path.display()));
        }
    };
    if metadata.file_type().is_symlink() {
        fs::remove_file(path)
            .with_context(|| format!("failed to remove symlink {}", path.display()))?;
        return Ok(());
    }
    if metadata.is_file() {
        fs::remove_file(path).with_context(|| format!("failed to remove {}", path.display()))?;
        return Ok(());
    }
    make_writable_recursive(path)?;
    fs::remove_dir_all(path).with_context(|| format!("failed to remove {}", path.display()))
}
