//! Check command report data structures.

use resmap::ConfigSource;

use super::{
    build::describe_source,
    output::{Output, Report},
};

/// Report data from grammar validation and resolution.
#[derive(Debug)]
pub struct CheckReport {
    pub source: ConfigSource,
    pub module_prefix: String,
    pub types: Vec<String>,
    /// Collection names, prefixed by their group if any.
    pub collections: Vec<String>,
    pub specifier_count: usize,
    pub unresolved_collections: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        if matches!(self.source, ConfigSource::Defaults) {
            out.warning("config file not found, using default module configuration");
        }

        out.preformatted(&format!("✓ {} is valid", describe_source(&self.source)));
        out.newline();
        out.key_value("Module prefix", &self.module_prefix);
        out.key_value("Types", &self.types.join(", "));
        out.key_value("Collections", &self.collections.join(", "));
        out.key_value("Specifiers", &self.specifier_count.to_string());

        if !self.unresolved_collections.is_empty() {
            out.newline();
            out.section("Unresolvable collections entered");
            for name in &self.unresolved_collections {
                out.list_item(name);
            }
        }
    }
}
