use super::output::{Output, Report};

/// Specifier table, sorted by specifier.
#[derive(Debug)]
pub struct ListReport {
    pub entries: Vec<(String, String)>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.entries.is_empty() {
            out.preformatted("No specifiers resolved");
            return;
        }

        let width = self.entries.iter().map(|(s, _)| s.len()).max().unwrap_or(0);
        for (specifier, module) in &self.entries {
            out.preformatted(&format!("{:width$}  {}", specifier, module, width = width));
        }
    }
}
