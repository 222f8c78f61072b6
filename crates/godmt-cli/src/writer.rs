//! Result writer: one rendered model per source file under the results root.
//!
//! Write failures are returned to the caller, which logs them and keeps
//! going with the remaining files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("failed to create result folder '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write result file '{}': {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Create the results root once per run. An existing folder is reused.
pub fn create_result_folder(root: &Path) -> Result<(), WriteError> {
    if root.is_dir() {
        tracing::info!(path = %root.display(), "skipping folder creation since folder existed");
        return Ok(());
    }
    fs::create_dir_all(root).map_err(|source| WriteError::CreateDir {
        path: root.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %root.display(), "created result folder");
    Ok(())
}

/// Write `rendered` to `root/filename`, creating the package subfolder first.
///
/// `package_segments` are the components of the source path relative to the
/// scan root, file last. With more than one segment, `root/<all but last>`
/// is created so results mirror the package layout.
pub fn write_result(
    root: &Path,
    rendered: &str,
    filename: &Path,
    package_segments: &[String],
) -> Result<PathBuf, WriteError> {
    if let Some((_, dirs)) = package_segments.split_last()
        && !dirs.is_empty()
    {
        let mut folder = root.to_path_buf();
        folder.extend(dirs);
        ensure_folder(&folder)?;
    }

    let path = root.join(filename);
    fs::write(&path, rendered).map_err(|source| WriteError::WriteFile {
        path: path.clone(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = rendered.len(), "wrote result file");
    Ok(path)
}

fn ensure_folder(folder: &Path) -> Result<(), WriteError> {
    match fs::create_dir_all(folder) {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(source) => Err(WriteError::CreateDir {
            path: folder.to_path_buf(),
            source,
        }),
    }
}
