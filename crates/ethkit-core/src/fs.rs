//! Filesystem helpers.

use std::path::Path;

/// Writes `contents` to `path`, restricting the file to its owner.
///
/// On Unix the file is opened with mode 0600 before any bytes land in it,
/// so the config never exists in a group-readable state. Elsewhere this is
/// a plain write.
pub fn write_secure(path: &Path, contents: impl AsRef<[u8]>) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use std::io::Write;
        use std::os::unix::fs::OpenOptionsExt;

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)?;
        file.write_all(contents.as_ref())
    }

    #[cfg(not(unix))]
    {
        std::fs::write(path, contents)
    }
}
