//! Build operation - run the builder and summarise what it produced.

use std::path::Path;

use resmap::{BuildOutcome, ResolutionMapBuilder, Result};

use crate::reports::{BuildReport, BuildResult};

/// Options for the build operation.
pub struct BuildOptions<'a> {
    /// Output root; artifacts land under `config/`.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the build operation.
pub fn build(builder: &mut ResolutionMapBuilder, opts: BuildOptions) -> Result<BuildReport> {
    let (outcome, result) = if opts.dry_run {
        let (outcome, files) = builder.preview()?;
        (outcome, BuildResult::Preview(files))
    } else {
        let outcome = builder.build(opts.output_dir)?;
        let written = outcome.written.clone();
        (outcome, BuildResult::Written(written))
    };

    let BuildOutcome {
        source,
        module_prefix,
        map,
        ..
    } = outcome;

    Ok(BuildReport {
        source,
        module_prefix,
        specifier_count: map.len(),
        unresolved_collections: map.unresolved_collections().iter().cloned().collect(),
        result,
    })
}
