//! Build command report data structures.

use std::path::PathBuf;

use resmap::{ConfigSource, PreviewFile};

use super::output::{Output, Report};

/// Report data from a build.
#[derive(Debug)]
pub struct BuildReport {
    /// Where the grammar came from.
    pub source: ConfigSource,

    pub module_prefix: String,

    /// Number of specifiers in the map.
    pub specifier_count: usize,

    /// Unresolvable collections the walk entered.
    pub unresolved_collections: Vec<String>,

    pub result: BuildResult,
}

/// Result of artifact generation.
#[derive(Debug)]
pub enum BuildResult {
    /// Files were written to disk.
    Written(Vec<PathBuf>),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

impl Report for BuildReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            BuildResult::Written(written) => self.render_written(out, written),
            BuildResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl BuildReport {
    fn render_written(&self, out: &mut dyn Output, written: &[PathBuf]) {
        out.key_value("Config", &describe_source(&self.source));
        out.key_value("Module prefix", &self.module_prefix);
        out.key_value("Specifiers", &self.specifier_count.to_string());
        if !self.unresolved_collections.is_empty() {
            out.key_value("Unresolved", &self.unresolved_collections.join(", "));
        }
        out.newline();

        out.section("Generated");
        for path in written {
            out.added_item(&path.display().to_string());
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} files would be generated ({} specifiers)",
            files.len(),
            self.specifier_count
        ));
    }
}

pub(crate) fn describe_source(source: &ConfigSource) -> String {
    match source {
        ConfigSource::File(path) => path.display().to_string(),
        ConfigSource::Defaults => "defaults".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    fn report(result: BuildResult) -> BuildReport {
        BuildReport {
            source: ConfigSource::Defaults,
            module_prefix: "my-app".into(),
            specifier_count: 7,
            unresolved_collections: vec!["utils".into()],
            result,
        }
    }

    #[test]
    fn test_written_summary() {
        let mut out = BufferOutput::default();
        report(BuildResult::Written(vec![PathBuf::from("out/config/module-map.js")]))
            .render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "Config: defaults",
                "Module prefix: my-app",
                "Specifiers: 7",
                "Unresolved: utils",
                "",
                "Generated:",
                "  + out/config/module-map.js",
            ]
        );
    }

    #[test]
    fn test_preview_summary() {
        let mut out = BufferOutput::default();
        report(BuildResult::Preview(vec![PreviewFile {
            path: "config/module-map.js".into(),
            content: "export default {};".into(),
        }]))
        .render(&mut out);

        assert_eq!(out.lines[0], "── config/module-map.js ──");
        assert_eq!(
            out.lines.last().map(String::as_str),
            Some("1 files would be generated (7 specifiers)")
        );
    }
}
