//! Test file and directory detection for filtering during scans.
//!
//! Used by the CLI walker to skip Go test sources and fixture trees unless
//! the scan asks for them.

/// Directory names the Go toolchain ignores as test data.
const TEST_DIRS: &[&str] = &["testdata"];

/// Returns `true` if `dir_name` is a test data directory.
///
/// # Examples
///
/// ```
/// use godmt_parser::is_test_dir;
/// assert!(is_test_dir("testdata"));
/// assert!(!is_test_dir("models"));
/// ```
#[must_use]
pub fn is_test_dir(dir_name: &str) -> bool {
    TEST_DIRS.contains(&dir_name)
}

/// Returns `true` if `file_name` is a Go test source (`*_test.go`).
///
/// Comparison is case-insensitive for the file name.
///
/// # Examples
///
/// ```
/// use godmt_parser::is_test_file;
/// assert!(is_test_file("user_test.go"));
/// assert!(!is_test_file("user.go"));
/// ```
#[must_use]
pub fn is_test_file(file_name: &str) -> bool {
    file_name.to_lowercase().ends_with("_test.go")
}
