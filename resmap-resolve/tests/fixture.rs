use std::{fs, path::Path};

use resmap_grammar::{Grammar, ModuleConfiguration};
use resmap_resolve::{Error, Resolver, Walker, resolve_tree};
use tempfile::TempDir;

const CONFIG: &str = r#"{
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
}"#;

const FILES: &[&str] = &[
    "src/ui/components/my-app/README.md",
    "src/ui/components/my-app/component.ts",
    "src/ui/components/my-app/template.hbs",
    "src/ui/components/my-app/page-banner/-utils/ignore-me.ts",
    "src/ui/components/my-app/page-banner/component.ts",
    "src/ui/components/my-app/page-banner/ignore-me.d.ts",
    "src/ui/components/my-app/page-banner/template.hbs",
    "src/ui/components/my-app/page-banner/titleize.ts",
    "src/ui/components/text-editor.hbs",
    "src/ui/components/text-editor.ts",
    "src/ui/index.html",
];

fn grammar() -> Grammar {
    let config: ModuleConfiguration = serde_json::from_str(CONFIG).unwrap();
    Grammar::new("my-app", config).unwrap()
}

fn write_tree(root: &Path, files: &[&str]) {
    for file in files {
        let path = root.join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "").unwrap();
    }
}

#[test]
fn test_fixture_specifiers() {
    let grammar = grammar();
    let temp = TempDir::new().unwrap();
    write_tree(temp.path(), FILES);

    let map = resolve_tree(&grammar, &temp.path().join("src"), None).unwrap();
    let specifiers: Vec<&str> = map.specifiers().into_iter().map(|s| s.as_str()).collect();

    assert_eq!(
        specifiers,
        vec![
            "component:/my-app/components/my-app",
            "component:/my-app/components/my-app/page-banner",
            "component:/my-app/components/my-app/page-banner/titleize",
            "component:/my-app/components/text-editor",
            "template:/my-app/components/my-app",
            "template:/my-app/components/my-app/page-banner",
            "template:/my-app/components/text-editor",
        ]
    );

    let module = |s: &str| map.get(s).unwrap().as_str().to_string();
    assert_eq!(
        module("component:/my-app/components/my-app"),
        "ui/components/my-app/component"
    );
    assert_eq!(
        module("template:/my-app/components/text-editor"),
        "ui/components/text-editor.hbs"
    );
    assert_eq!(
        module("component:/my-app/components/my-app/page-banner/titleize"),
        "ui/components/my-app/page-banner/titleize"
    );
}

#[test]
fn test_base_dir_keeps_specifiers_and_prefixes_modules() {
    let grammar = grammar();
    let temp = TempDir::new().unwrap();
    write_tree(temp.path(), FILES);

    let with_base = resolve_tree(&grammar, temp.path(), Some(Path::new("src"))).unwrap();
    let without = resolve_tree(&grammar, &temp.path().join("src"), None).unwrap();

    assert_eq!(with_base.specifiers(), without.specifiers());
    assert_eq!(
        with_base
            .get("component:/my-app/components/text-editor")
            .unwrap()
            .as_str(),
        "src/ui/components/text-editor"
    );
}

#[test]
fn test_unresolvable_nesting() {
    let grammar = grammar();
    let temp = TempDir::new().unwrap();
    write_tree(
        temp.path(),
        &[
            "ui/components/my-app/component.ts",
            "ui/components/my-app/utils/format.ts",
            "ui/components/my-app/utils/format/nested.ts",
            "ui/components/my-app/utils/format/components/badge.ts",
        ],
    );

    let map = resolve_tree(&grammar, temp.path(), None).unwrap();
    let specifiers: Vec<&str> = map.specifiers().into_iter().map(|s| s.as_str()).collect();

    assert_eq!(
        specifiers,
        vec![
            "component:/my-app/components/my-app",
            "component:/my-app/components/my-app/components/badge",
        ]
    );
    // Addressed from my-app, the nearest resolvable ancestor.
    assert_eq!(
        map.get("component:/my-app/components/my-app/components/badge")
            .unwrap()
            .as_str(),
        "ui/components/my-app/utils/format/components/badge"
    );
    assert!(map.unresolved_collections().contains("utils"));
}

#[test]
fn test_walk_is_idempotent() {
    let grammar = grammar();
    let temp = TempDir::new().unwrap();
    write_tree(temp.path(), FILES);

    let root = temp.path().join("src");
    let first = resolve_tree(&grammar, &root, None).unwrap();
    let second = resolve_tree(&grammar, &root, None).unwrap();
    assert_eq!(first.sorted_entries(), second.sorted_entries());
}

#[test]
fn test_conflicting_modules_fail() {
    let grammar = grammar();
    let temp = TempDir::new().unwrap();
    // Both claim component:/my-app/components/widget.
    write_tree(
        temp.path(),
        &["ui/components/widget.ts", "ui/components/widget/component.ts"],
    );

    let walk = Walker::new(&grammar, temp.path()).walk().unwrap();
    let err = Resolver::new(&grammar).resolve(walk).unwrap_err();

    match err {
        Error::SpecifierConflict {
            specifier,
            first,
            second,
        } => {
            assert_eq!(specifier.as_str(), "component:/my-app/components/widget");
            // `widget` sorts before `widget.ts`, but files of a directory
            // are yielded before its subdirectories are read.
            assert_eq!(first.as_str(), "ui/components/widget");
            assert_eq!(second.as_str(), "ui/components/widget/component");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_same_module_twice_is_deduplicated() {
    let grammar = grammar();
    let temp = TempDir::new().unwrap();
    // `.js` and `.ts` of the same stem resolve to the same module path.
    write_tree(temp.path(), &["ui/components/widget.ts", "ui/components/widget.js"]);

    let map = resolve_tree(&grammar, temp.path(), None).unwrap();
    assert_eq!(map.len(), 1);
}
