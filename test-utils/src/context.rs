use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::TestError;

/// Name of the opt-in file inside the test directory.
const OPT_IN_FILE_NAME: &str = "opt_in.json";

/// Test context owning an isolated temporary directory for on-disk state.
///
/// The directory, and the opt-in file inside it, is removed when the context
/// is dropped, so each test works against its own file.
pub struct TestContext {
    /// Temporary directory holding the opt-in file.
    pub dir: TempDir,
}

impl TestContext {
    /// Creates a new test context with an empty temporary directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with a fresh directory and no opt-in file
    /// - `Err(TestError::Io)` - Failed to create the temporary directory
    pub fn new() -> Result<Self, TestError> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Path of the opt-in file inside the test directory.
    ///
    /// The file only exists if the builder seeded it or the code under test
    /// created it.
    pub fn opt_in_path(&self) -> PathBuf {
        self.dir.path().join(OPT_IN_FILE_NAME)
    }

    /// Root of the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Reads the raw contents of the opt-in file.
    ///
    /// # Returns
    /// - `Ok(String)` - Current file contents
    /// - `Err(TestError::Io)` - The file does not exist or could not be read
    pub fn read_opt_in_file(&self) -> Result<String, TestError> {
        Ok(std::fs::read_to_string(self.opt_in_path())?)
    }

    /// Writes raw contents to the opt-in file, replacing whatever is there.
    pub fn write_opt_in_file(&self, contents: &str) -> Result<(), TestError> {
        std::fs::write(self.opt_in_path(), contents)?;
        Ok(())
    }
}
