//! Scan pipeline: extract -> render -> write, one file per rayon task.
//!
//! Files are independent; a failure on one is logged and counted without
//! stopping the others.

use std::path::{Path, PathBuf};

use godmt_parser::{ExtractOptions, ScannedFile, extract_path};
use rayon::prelude::*;
use serde::Serialize;

use crate::output::{render, result_format};
use crate::writer::write_result;

/// Settings for one scan run.
pub struct ScanPipeline {
    root: PathBuf,
    out: PathBuf,
    options: ExtractOptions,
    pretty: bool,
}

/// A file that could not be extracted or written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    pub path: String,
    pub error: String,
}

/// Run summary printed by `godmt scan`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub files: usize,
    pub written: usize,
    pub structs: usize,
    pub types: usize,
    pub omissions: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<FileFailure>,
}

enum FileOutcome {
    Written(ScannedFile),
    Failed(FileFailure),
}

impl ScanPipeline {
    pub const fn new(root: PathBuf, out: PathBuf, options: ExtractOptions, pretty: bool) -> Self {
        Self {
            root,
            out,
            options,
            pretty,
        }
    }

    /// Process `files` in parallel; the summary keeps input order for failures.
    pub fn run(&self, files: &[PathBuf]) -> ScanSummary {
        let outcomes: Vec<FileOutcome> = files.par_iter().map(|path| self.process(path)).collect();

        let mut summary = ScanSummary {
            files: files.len(),
            ..ScanSummary::default()
        };
        for outcome in outcomes {
            match outcome {
                FileOutcome::Written(scanned) => {
                    summary.written += 1;
                    summary.structs += scanned.structs.len();
                    summary.types += scanned.types.len();
                    summary.omissions += scanned.omissions.len();
                }
                FileOutcome::Failed(failure) => summary.failures.push(failure),
            }
        }
        tracing::info!(
            files = summary.files,
            written = summary.written,
            failed = summary.failures.len(),
            "scan finished"
        );
        summary
    }

    fn process(&self, path: &Path) -> FileOutcome {
        let failed = |error: String| {
            tracing::warn!(path = %path.display(), %error, "skipping go file");
            FileOutcome::Failed(FileFailure {
                path: path.display().to_string(),
                error,
            })
        };

        let scanned = match extract_path(path, self.options) {
            Ok(scanned) => scanned,
            Err(error) => return failed(error.to_string()),
        };
        let rendered = match render(&scanned, result_format(self.pretty)) {
            Ok(rendered) => rendered,
            Err(error) => return failed(format!("{error:#}")),
        };

        let relative = relative_source(&self.root, path);
        let segments: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        match write_result(&self.out, &rendered, &relative.with_extension("json"), &segments) {
            Ok(written) => {
                tracing::debug!(source = %path.display(), result = %written.display(), "extracted");
                FileOutcome::Written(scanned)
            }
            Err(error) => failed(error.to_string()),
        }
    }
}

/// `path` relative to the scan root; a root that is itself the file maps
/// to its file name.
fn relative_source(root: &Path, path: &Path) -> PathBuf {
    match path.strip_prefix(root) {
        Ok(relative) if !relative.as_os_str().is_empty() => relative.to_path_buf(),
        _ => path
            .file_name()
            .map_or_else(|| path.to_path_buf(), PathBuf::from),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    const USER: &str = "package models\n\ntype User struct {\n\tID int\n\tTags *map[string]int\n}\n\nconst Version = \"1\"\n";

    #[test]
    fn relative_source_handles_file_roots() {
        assert_eq!(
            relative_source(Path::new("src"), Path::new("src/models/user.go")),
            PathBuf::from("models/user.go")
        );
        assert_eq!(
            relative_source(Path::new("src/main.go"), Path::new("src/main.go")),
            PathBuf::from("main.go")
        );
    }

    #[test]
    fn run_writes_one_result_per_file() {
        let src = tempfile::tempdir().expect("src");
        let out = tempfile::tempdir().expect("out");
        fs::create_dir_all(src.path().join("models")).expect("mkdir");
        let user = src.path().join("models/user.go");
        fs::write(&user, USER).expect("write user");

        let pipeline = ScanPipeline::new(
            src.path().to_path_buf(),
            out.path().to_path_buf(),
            ExtractOptions { diagnostics: true },
            false,
        );
        let summary = pipeline.run(&[user]);

        assert_eq!(summary.files, 1);
        assert_eq!(summary.written, 1);
        assert_eq!(summary.structs, 1);
        assert_eq!(summary.types, 1);
        assert_eq!(summary.omissions, 1);

        let written = fs::read_to_string(out.path().join("models/user.json")).expect("result");
        let scanned: ScannedFile = serde_json::from_str(&written).expect("parse result");
        assert_eq!(scanned.package, "models");
        assert_eq!(scanned.structs[0].fields.len(), 1);
        assert!(!written.contains('\n'));
    }

    #[test]
    fn failures_do_not_stop_the_run() {
        let src = tempfile::tempdir().expect("src");
        let out = tempfile::tempdir().expect("out");
        let good = src.path().join("good.go");
        let bad = src.path().join("bad.go");
        fs::write(&good, USER).expect("write good");
        fs::write(&bad, "// no package clause\n").expect("write bad");

        let pipeline = ScanPipeline::new(
            src.path().to_path_buf(),
            out.path().to_path_buf(),
            ExtractOptions::default(),
            true,
        );
        let summary = pipeline.run(&[bad.clone(), good]);

        assert_eq!(summary.written, 1);
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].path, bad.display().to_string());
        assert!(out.path().join("good.json").is_file());
    }
}
