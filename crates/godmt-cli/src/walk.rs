//! Go source walker.
//!
//! Uses the `ignore` crate for gitignore-aware walking with a custom
//! `.godmtignore` file and exclude globs from config and flags.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;

/// Build a walker over `root`.
///
/// `exclude` globs are gitignore-style patterns relative to `root`; each
/// is negated into an override. Unless `include_tests` is set, `*_test.go`
/// files and `testdata/` directories are skipped.
pub fn build_walker(
    root: &Path,
    include_tests: bool,
    exclude: &[String],
) -> Result<ignore::Walk, ignore::Error> {
    let mut builder = WalkBuilder::new(root);
    builder.hidden(false);
    builder.add_custom_ignore_filename(".godmtignore");

    let mut overrides = OverrideBuilder::new(root);
    for glob in exclude {
        overrides.add(&format!("!{glob}"))?;
    }
    builder.overrides(overrides.build()?);

    builder.filter_entry(move |entry| {
        let file_name = entry.file_name().to_string_lossy();
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        if is_dir && (file_name == ".git" || file_name == ".godmt") {
            return false;
        }
        if include_tests {
            return true;
        }
        if is_dir {
            !godmt_parser::is_test_dir(&file_name)
        } else {
            !godmt_parser::is_test_file(&file_name)
        }
    });

    Ok(builder.build())
}

/// All Go source files under `root`, sorted. Unreadable entries are logged
/// and skipped.
pub fn go_files(
    root: &Path,
    include_tests: bool,
    exclude: &[String],
) -> Result<Vec<PathBuf>, ignore::Error> {
    let mut files = Vec::new();
    for entry in build_walker(root, include_tests, exclude)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                tracing::warn!(%error, "skipping unreadable entry");
                continue;
            }
        };
        if entry.file_type().is_some_and(|ft| ft.is_file())
            && godmt_parser::is_go_source(entry.path())
        {
            files.push(entry.into_path());
        }
    }
    files.sort();
    tracing::debug!(root = %root.display(), files = files.len(), "walked go sources");
    Ok(files)
}
