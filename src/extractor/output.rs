use crate::error::Result;
use crate::models::BoundsRecord;
use std::fs::{self, Permissions};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Write `record` to `path` as pretty JSON, replacing any existing file.
///
/// Missing parent directories are created. A regular target is replaced by
/// renaming a temporary file from the same directory over it, so readers see
/// either the old file or the complete new one; the old file's permissions
/// carry over, and a new file gets 0644 on unix.
///
/// A symlinked target is written through in place so the link survives. When
/// the rename fails (a single-file bind mount refuses it with `EBUSY`) the
/// file is rewritten in place instead, which is not atomic.
pub fn write_bounds(path: &Path, record: &BoundsRecord) -> Result<()> {
    let json = record.to_pretty_json()?;

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let is_symlink = fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false);
    if is_symlink {
        debug!(path = %path.display(), "bounds file is a symlink, writing through it");
        return write_in_place(path, &json);
    }

    let mut temp = NamedTempFile::new_in(parent)?;
    temp.write_all(json.as_bytes())?;
    temp.as_file().sync_all()?;

    if let Some(permissions) = target_permissions(path) {
        temp.as_file().set_permissions(permissions)?;
    }

    if let Err(err) = temp.persist(path) {
        warn!(
            path = %path.display(),
            error = %err.error,
            "could not replace bounds file atomically, rewriting it in place"
        );
        drop(err.file);
        return write_in_place(path, &json);
    }

    debug!(path = %path.display(), bytes = json.len(), "wrote bounds file");
    Ok(())
}

/// Permissions the replacement file should carry.
fn target_permissions(path: &Path) -> Option<Permissions> {
    match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}

fn write_in_place(path: &Path, json: &str) -> Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(json.as_bytes())?;
    file.sync_all()?;
    debug!(path = %path.display(), bytes = json.len(), "rewrote bounds file in place");
    Ok(())
}
