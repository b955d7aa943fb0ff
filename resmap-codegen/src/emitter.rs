use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use resmap_core::{File, GeneratedFile, commit_all};
use resmap_resolve::ResolutionMap;

use crate::files::{ModuleMapDts, ModuleMapJs};

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from the output root
    pub path: String,
    /// File content
    pub content: String,
}

/// Renders a resolution map into the module map artifacts.
pub struct Emitter<'a> {
    map: &'a ResolutionMap,
}

impl<'a> Emitter<'a> {
    pub fn new(map: &'a ResolutionMap) -> Self {
        Self { map }
    }

    /// Render both artifacts in memory, declarations first.
    pub fn files(&self) -> Vec<File> {
        let dts = ModuleMapDts::new(self.map);
        let js = ModuleMapJs::new(self.map);
        vec![File::from_generated(&dts), File::from_generated(&js)]
    }

    /// Preview generated files without writing to disk
    pub fn preview(&self) -> Vec<PreviewFile> {
        self.files()
            .into_iter()
            .map(|file| PreviewFile {
                path: file.path().to_string_lossy().replace('\\', "/"),
                content: file.content().to_string(),
            })
            .collect()
    }

    /// Write both artifacts under `output`, or neither.
    pub fn generate(&self, output: &Path) -> Result<Vec<PathBuf>> {
        let files = self.files();
        let written = commit_all(output, &files)
            .wrap_err_with(|| format!("failed to emit module map into '{}'", output.display()))?;

        tracing::info!(
            specifiers = self.map.len(),
            output = %output.display(),
            "module map written"
        );
        Ok(written)
    }
}
