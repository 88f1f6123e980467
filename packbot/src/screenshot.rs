use std::{
    fs,
    io,
    path::{
        Path,
        PathBuf,
    },
};

/// Handle to one transient screenshot capture on disk.
///
/// The capture file is removed when the handle is dropped, so captures never
/// accumulate over a long scan, even when recognition fails partway through a
/// page.
#[derive(Debug)]
pub struct Screenshot {
    path: PathBuf,
}

impl Screenshot {
    /// Creates a handle to the capture stored at the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the capture file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for Screenshot {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => (),
            Err(err) if err.kind() == io::ErrorKind::NotFound => (),
            Err(err) => log::warn!(
                "failed to remove screenshot {}: {err}",
                self.path.display()
            ),
        }
    }
}

#[cfg(test)]
mod screenshot_test {
    use std::fs;

    use crate::Screenshot;

    #[test]
    fn removes_capture_file_on_drop() {
        let path = std::env::temp_dir().join("packbot-screenshot-drop-test.png");
        fs::write(&path, []).unwrap();
        assert!(path.exists());

        let screenshot = Screenshot::new(&path);
        assert_eq!(screenshot.path(), path);
        drop(screenshot);

        assert!(!path.exists());
    }

    #[test]
    fn tolerates_missing_capture_file() {
        let path = std::env::temp_dir().join("packbot-screenshot-missing-test.png");
        let screenshot = Screenshot::new(&path);
        drop(screenshot);
    }
}
