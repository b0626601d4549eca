/*!
 * Filesystem Helpers
 *
 * Directory listing for fixture discovery and an RAII closer for raw file
 * descriptors handed around by socket-level tests.
 */

use crate::core::errors::{UtilityError, UtilityResult};
use std::fs;
use std::path::Path;
use tracing::debug;

/// List files under `path`
///
/// Subdirectories are descended into only when `recursive` is set; directory
/// entries themselves are never returned. Paths are `path` joined with the
/// entry name, sorted.
pub fn list_files(path: impl AsRef<Path>, recursive: bool) -> UtilityResult<Vec<String>> {
    let path = path.as_ref();
    let mut files = Vec::new();
    collect_files(path, recursive, &mut files)?;
    files.sort();

    debug!(path = %path.display(), recursive, count = files.len(), "listed files");
    Ok(files)
}

fn collect_files(dir: &Path, recursive: bool, out: &mut Vec<String>) -> UtilityResult<()> {
    let entries = fs::read_dir(dir).map_err(|e| UtilityError::io(dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| UtilityError::io(dir, e))?;
        let entry_path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|e| UtilityError::io(&entry_path, e))?;

        if file_type.is_dir() {
            if recursive {
                collect_files(&entry_path, recursive, out)?;
            }
        } else {
            out.push(entry_path.to_string_lossy().into_owned());
        }
    }

    Ok(())
}

#[cfg(unix)]
pub use self::unix::ScopedFdCloser;

#[cfg(unix)]
mod unix {
    use std::os::fd::{AsRawFd, FromRawFd, IntoRawFd, OwnedFd, RawFd};
    use tracing::trace;

    /// Closes a raw file descriptor when dropped
    #[derive(Debug)]
    pub struct ScopedFdCloser {
        fd: Option<OwnedFd>,
    }

    impl ScopedFdCloser {
        /// Take ownership of a raw descriptor
        ///
        /// # Safety
        ///
        /// `fd` must be open and must not be closed by anyone else.
        pub unsafe fn new(fd: RawFd) -> Self {
            Self {
                fd: Some(OwnedFd::from_raw_fd(fd)),
            }
        }

        /// Wrap an already-owned descriptor
        pub fn from_owned(fd: OwnedFd) -> Self {
            Self { fd: Some(fd) }
        }

        /// The wrapped descriptor number
        pub fn fd(&self) -> RawFd {
            self.fd.as_ref().map(AsRawFd::as_raw_fd).unwrap_or(-1)
        }

        /// Give up ownership without closing
        pub fn release(mut self) -> RawFd {
            self.fd.take().map(IntoRawFd::into_raw_fd).unwrap_or(-1)
        }
    }

    impl Drop for ScopedFdCloser {
        fn drop(&mut self) {
            if let Some(fd) = self.fd.take() {
                trace!(fd = fd.as_raw_fd(), "closing descriptor");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.yaml"), b"a").unwrap();
        fs::write(dir.path().join("b.json"), b"b").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("c.pb"), b"c").unwrap();
        dir
    }

    #[test]
    fn test_list_flat() {
        let dir = fixture();
        let files = list_files(dir.path(), false).unwrap();
        let root = dir.path().to_string_lossy().into_owned();
        assert_eq!(
            files,
            vec![format!("{root}/a.yaml"), format!("{root}/b.json")]
        );
    }

    #[test]
    fn test_list_recursive() {
        let dir = fixture();
        let files = list_files(dir.path(), true).unwrap();
        assert_eq!(files.len(), 3);
        assert!(files.iter().any(|f| f.ends_with("nested/c.pb")));
        assert!(!files.iter().any(|f| f.ends_with("nested")));
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone");
        assert!(matches!(
            list_files(&missing, true),
            Err(UtilityError::Io { path, .. }) if path == missing
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_fd_release_keeps_descriptor_open() {
        use std::io::Write;
        use std::os::fd::{FromRawFd, IntoRawFd};

        let dir = TempDir::new().unwrap();
        let file = File::create(dir.path().join("fd")).unwrap();
        let raw = file.into_raw_fd();

        let closer = unsafe { ScopedFdCloser::new(raw) };
        assert_eq!(closer.fd(), raw);

        let released = closer.release();
        let mut file = unsafe { File::from_raw_fd(released) };
        file.write_all(b"still open").unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_fd_closed_on_drop() {
        let dir = TempDir::new().unwrap();
        let file = File::create(dir.path().join("fd")).unwrap();
        let closer = ScopedFdCloser::from_owned(file.into());
        assert!(closer.fd() >= 0);
        drop(closer);
    }
}
