// test_utils.rs

#[cfg(test)]
pub mod test_utils {
    use std::env;
    use std::path::{Path, PathBuf};

    /// A scratch directory for tests. Removed on drop unless
    /// `KEEP_TEST_OUTPUT` is set, in which case output lands under
    /// `test_output/<prefix>` for inspection.
    pub struct TestDir {
        dir: PathBuf,
        // held only so the directory outlives the test
        _temp_dir: Option<tempfile::TempDir>,
    }

    impl TestDir {
        pub fn new(prefix: &str) -> std::io::Result<Self> {
            if env::var("KEEP_TEST_OUTPUT").is_ok() {
                let output_dir = env::current_dir()?.join("test_output").join(prefix);
                std::fs::create_dir_all(&output_dir)?;
                return Ok(TestDir {
                    dir: output_dir,
                    _temp_dir: None,
                });
            }
            let temp_dir = tempfile::Builder::new().prefix(prefix).tempdir()?;
            Ok(TestDir {
                dir: temp_dir.path().to_path_buf(),
                _temp_dir: Some(temp_dir),
            })
        }

        pub fn path(&self) -> &Path {
            &self.dir
        }
    }
}
