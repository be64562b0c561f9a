#[cfg(test)]
mod tests {
    use std::fs::{File, OpenOptions};
    use std::io::Write;
    use std::path::Path;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;
    use traq::libs::freshness::{is_recently_modified, DEFAULT_WINDOW_SECS};

    fn create(dir: &TempDir, name: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        writeln!(file, "content").unwrap();
        path
    }

    fn age(path: &Path, seconds: u64) {
        let file = OpenOptions::new().write(true).open(path).unwrap();
        file.set_modified(SystemTime::now() - Duration::from_secs(seconds)).unwrap();
    }

    #[test]
    fn test_missing_file_is_stale() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!is_recently_modified(&dir.path().join("gone.indd"), DEFAULT_WINDOW_SECS));
    }

    #[test]
    fn test_just_written_file_is_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = create(&dir, "job.indd");
        assert!(is_recently_modified(&path, DEFAULT_WINDOW_SECS));
    }

    #[test]
    fn test_old_file_is_stale() {
        let dir = tempfile::tempdir().unwrap();
        let path = create(&dir, "job.indd");
        age(&path, 300);
        assert!(!is_recently_modified(&path, DEFAULT_WINDOW_SECS));
    }

    #[test]
    fn test_fresh_same_stem_sibling_counts() {
        let dir = tempfile::tempdir().unwrap();
        let path = create(&dir, "job.indd");
        age(&path, 300);
        // An export with the same stem was just written.
        create(&dir, "job.pdf");
        assert!(is_recently_modified(&path, DEFAULT_WINDOW_SECS));
    }

    #[test]
    fn test_unrelated_sibling_does_not_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = create(&dir, "job.indd");
        age(&path, 300);
        create(&dir, "other.pdf");
        assert!(!is_recently_modified(&path, DEFAULT_WINDOW_SECS));
    }

    #[test]
    fn test_window_is_configurable() {
        let dir = tempfile::tempdir().unwrap();
        let path = create(&dir, "job.indd");
        age(&path, 120);
        assert!(!is_recently_modified(&path, 60));
        assert!(is_recently_modified(&path, 600));
    }
}
