//! Boot counter persistence.
//!
//! A tiny counter file: read the stored count at startup, write back
//! count + 1. Not part of the HTTP core; logged once at boot.

use std::io;
use std::path::PathBuf;

/// File-backed boot counter.
pub struct BootCounter {
    path: PathBuf,
}

impl BootCounter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Current boot number, starting at 1 for a missing or unreadable
    /// file. The incremented count is written back before returning.
    pub fn increment(&self) -> io::Result<u32> {
        let count = match std::fs::read_to_string(&self.path) {
            Ok(text) => text.trim().parse::<u32>().unwrap_or(1),
            Err(err) if err.kind() == io::ErrorKind::NotFound => 1,
            Err(err) => return Err(err),
        };

        std::fs::write(&self.path, (count + 1).to_string())?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("picodiag-boot-{}-{}", tag, std::process::id()))
    }

    #[test]
    fn test_first_boot_is_one() {
        let path = temp_path("first");
        let _ = std::fs::remove_file(&path);

        let counter = BootCounter::new(&path);
        assert_eq!(counter.increment().unwrap(), 1);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_count_advances_across_boots() {
        let path = temp_path("advance");
        let _ = std::fs::remove_file(&path);

        let counter = BootCounter::new(&path);
        assert_eq!(counter.increment().unwrap(), 1);
        assert_eq!(counter.increment().unwrap(), 2);
        assert_eq!(counter.increment().unwrap(), 3);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_corrupt_file_restarts_at_one() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "not a number").unwrap();

        let counter = BootCounter::new(&path);
        assert_eq!(counter.increment().unwrap(), 1);
        assert_eq!(counter.increment().unwrap(), 2);

        std::fs::remove_file(&path).unwrap();
    }
}
