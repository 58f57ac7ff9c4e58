//! Playground synthesis: rewrite a raw snippet into an importable module

/// Module the framework import line pulls from
const FRAMEWORK_MODULE: &str = "react";
/// Module the component import line pulls from
const LIBRARY_MODULE: &str = "../src";

/// Wrap trimmed example code into a self-contained playground module.
///
/// Snippets that already declare a function are exported as-is and keep
/// their declared name; bare markup is wrapped in an exported `Playground`
/// function that returns it. Import lines for the inferred scope are
/// prepended: the framework import always, the component import only when
/// tags were detected.
pub fn synthesize(code: &str, components: &[String], library_scope: &[String]) -> String {
    let is_function = code.contains("function");

    let framework_import = if library_scope.is_empty() {
        format!("import React from '{FRAMEWORK_MODULE}';\n")
    } else {
        format!(
            "import React, {{{}}} from '{FRAMEWORK_MODULE}';\n",
            library_scope.join(", ")
        )
    };

    let component_import = if components.is_empty() {
        String::new()
    } else {
        format!(
            "import {{{}}} from '{LIBRARY_MODULE}';\n\n",
            components.join(", ")
        )
    };

    let playground = if is_function {
        format!("export {code}")
    } else {
        format!("export function Playground() {{\n  return (\n    {code}\n  );\n}}")
    };

    format!("{framework_import}{component_import}{playground}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn wraps_bare_markup_in_a_playground_function() {
        let body = synthesize("<Badge>Fulfilled</Badge>", &strings(&["Badge"]), &[]);
        assert_eq!(
            body,
            "import React from 'react';\n\
             import {Badge} from '../src';\n\n\
             export function Playground() {\n  return (\n    <Badge>Fulfilled</Badge>\n  );\n}"
        );
    }

    #[test]
    fn exports_function_snippets_under_their_declared_name() {
        let code = "function FormExample() {\n  return <Form />;\n}";
        let body = synthesize(code, &strings(&["Form"]), &[]);
        assert!(body.ends_with(
            "import {Form} from '../src';\n\n\
             export function FormExample() {\n  return <Form />;\n}"
        ));
        assert!(!body.contains("function Playground"));
    }

    #[test]
    fn named_imports_for_the_detected_react_scope() {
        let body = synthesize(
            "<Badge>Hi</Badge>",
            &strings(&["Badge"]),
            &strings(&["useState", "useCallback"]),
        );
        assert!(body.starts_with("import React, {useState, useCallback} from 'react';\n"));
    }

    #[test]
    fn no_component_import_line_without_tags() {
        let body = synthesize("<div>plain</div>", &[], &[]);
        // No tags also means no blank line before the wrapped code.
        assert!(body.starts_with("import React from 'react';\nexport function Playground()"));
        assert!(!body.contains("../src"));
    }
}
