use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the output root
    fn relative_path(&self) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    fs::write(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// A rendered file waiting to be committed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with a path relative to the output root
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Render a generated file into memory
    pub fn from_generated(file: &dyn GeneratedFile) -> Self {
        Self::new(file.relative_path(), file.render())
    }

    /// Get the relative file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Write every file under `base`, or none of them.
///
/// Files are first written into a staging directory created inside `base`
/// (same filesystem, so the final moves are renames). Once all writes have
/// succeeded, each file is moved into place. If a move fails, the files
/// already moved are removed again before the error is returned. The staging
/// directory is always cleaned up.
pub fn commit_all(base: &Path, files: &[File]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(base)
        .wrap_err_with(|| format!("failed to create output root '{}'", base.display()))?;

    let staging = tempfile::Builder::new()
        .prefix(".resmap-staging")
        .tempdir_in(base)
        .wrap_err("failed to create staging directory")?;

    for file in files {
        write_file(&staging.path().join(file.path()), file.content())?;
    }

    let mut committed: Vec<PathBuf> = Vec::with_capacity(files.len());
    for file in files {
        let from = staging.path().join(file.path());
        let to = base.join(file.path());

        if let Err(err) = move_into_place(&from, &to) {
            for done in &committed {
                if let Err(rollback) = fs::remove_file(done) {
                    tracing::warn!(path = %done.display(), error = %rollback, "rollback failed");
                }
            }
            return Err(err);
        }
        committed.push(to);
    }

    tracing::debug!(count = committed.len(), root = %base.display(), "committed files");
    Ok(committed)
}

fn move_into_place(from: &Path, to: &Path) -> Result<()> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    fs::rename(from, to).wrap_err_with(|| format!("failed to move '{}' into place", to.display()))
}
