//! Shared string helpers for code generation.

/// Convert a module path into a JavaScript identifier
/// (e.g. "ui/components/my-app/component" -> "__ui_components_my_app_component__")
pub fn to_js_identifier(path: &str) -> String {
    let mut ident = String::from("__");
    for c in path.chars() {
        if c.is_ascii_alphanumeric() {
            ident.push(c);
        } else {
            ident.push('_');
        }
    }
    ident.push_str("__");
    ident
}

/// Quote a string as a JavaScript/TypeScript string literal
pub fn quote(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_js_identifier() {
        assert_eq!(
            to_js_identifier("ui/components/my-app/component"),
            "__ui_components_my_app_component__"
        );
        assert_eq!(
            to_js_identifier("ui/components/text-editor.hbs"),
            "__ui_components_text_editor_hbs__"
        );
        assert_eq!(to_js_identifier(""), "____");
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("component:/a/b"), "\"component:/a/b\"");
        assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
    }
}
