//! Shared on-disk fixture: a component tree and its environment config.

use std::{fs, path::Path};

use resmap::ModuleConfiguration;
use tempfile::TempDir;

pub const ENVIRONMENT_JSON: &str = r#"{
  "modulePrefix": "my-app",
  "moduleConfiguration": {
    "types": {
      "application": { "definitiveCollection": "main" },
      "component": { "definitiveCollection": "components" },
      "renderer": { "definitiveCollection": "main" },
      "template": { "definitiveCollection": "components" },
      "util": { "definitiveCollection": "utils" }
    },
    "collections": {
      "main": { "types": ["application", "renderer"] },
      "components": {
        "group": "ui",
        "types": ["component", "template"],
        "defaultType": "component",
        "privateCollections": ["utils"]
      },
      "utils": { "unresolvable": true }
    }
  }
}"#;

const SOURCE_TREE: &[(&str, &str)] = &[
    ("src/ui/components/my-app/README.md", "## My-App Component\n"),
    ("src/ui/components/my-app/component.ts", ""),
    ("src/ui/components/my-app/page-banner/-utils/ignore-me.ts", ""),
    ("src/ui/components/my-app/page-banner/component.ts", ""),
    ("src/ui/components/my-app/page-banner/ignore-me.d.ts", ""),
    ("src/ui/components/my-app/page-banner/template.hbs", ""),
    ("src/ui/components/my-app/page-banner/titleize.ts", ""),
    ("src/ui/components/my-app/template.hbs", ""),
    ("src/ui/components/text-editor.hbs", ""),
    ("src/ui/components/text-editor.ts", ""),
    (
        "src/ui/index.html",
        "<html>\n    <head></head>\n    <body></body>\n</html>\n",
    ),
];

pub const EXPECTED_SPECIFIERS: &[&str] = &[
    "component:/my-app/components/my-app",
    "component:/my-app/components/my-app/page-banner",
    "component:/my-app/components/my-app/page-banner/titleize",
    "component:/my-app/components/text-editor",
    "template:/my-app/components/my-app",
    "template:/my-app/components/my-app/page-banner",
    "template:/my-app/components/text-editor",
];

/// Source tree, config directory and output directory of one test.
pub struct Fixture {
    pub src: TempDir,
    pub config: TempDir,
    pub output: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let src = TempDir::new().unwrap();
        for (path, content) in SOURCE_TREE {
            write(src.path(), path, content);
        }

        let config = TempDir::new().unwrap();
        write(config.path(), "environment.json", ENVIRONMENT_JSON);

        Self {
            src,
            config,
            output: TempDir::new().unwrap(),
        }
    }

    pub fn module_configuration() -> ModuleConfiguration {
        let value: serde_json::Value = serde_json::from_str(ENVIRONMENT_JSON).unwrap();
        serde_json::from_value(value["moduleConfiguration"].clone()).unwrap()
    }
}

pub fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Every file under `root`, relative and `/`-separated, sorted.
pub fn walk_files(root: &Path) -> Vec<String> {
    fn visit(root: &Path, dir: &Path, out: &mut Vec<String>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                visit(root, &path, out);
            } else {
                let rel = path.strip_prefix(root).unwrap();
                let parts: Vec<String> = rel
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect();
                out.push(parts.join("/"));
            }
        }
    }

    let mut out = Vec::new();
    visit(root, root, &mut out);
    out.sort();
    out
}
