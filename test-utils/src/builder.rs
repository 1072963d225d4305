use crate::{context::TestContext, error::TestError};

/// Initial state of the opt-in file for a test.
enum SeededFile {
    /// Leave the file absent.
    Absent,
    /// Write a JSON array of the given user ids.
    Users(Vec<String>),
    /// Write the given contents verbatim.
    Raw(String),
}

/// Builder for creating test contexts with a pre-seeded opt-in file.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_opted_in_users(["1001"])
///     .build()?;
/// ```
pub struct TestBuilder {
    file: SeededFile,
}

impl TestBuilder {
    /// Creates a new test builder that leaves the opt-in file absent.
    pub fn new() -> Self {
        Self {
            file: SeededFile::Absent,
        }
    }

    /// Seeds the opt-in file with a JSON array of the provided user ids.
    ///
    /// # Arguments
    /// - `users` - User ids written in the order given
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_opted_in_users<I, S>(mut self, users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file = SeededFile::Users(users.into_iter().map(Into::into).collect());
        self
    }

    /// Seeds the opt-in file with arbitrary contents, valid JSON or not.
    ///
    /// Use this to exercise malformed or `null` files.
    pub fn with_raw_opt_in_file(mut self, contents: impl Into<String>) -> Self {
        self.file = SeededFile::Raw(contents.into());
        self
    }

    /// Builds the test context and writes the seeded opt-in file, if any.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with the opt-in file in the configured state
    /// - `Err(TestError)` - Failed to create the directory or write the file
    pub fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new()?;

        match self.file {
            SeededFile::Absent => {}
            SeededFile::Users(users) => {
                context.write_opt_in_file(&serde_json::to_string(&users)?)?;
            }
            SeededFile::Raw(contents) => context.write_opt_in_file(&contents)?,
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
