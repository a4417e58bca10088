//! Java source rendering for [`ClassSpec`]s.

use crate::ir::{ClassSpec, Member, Method};

const INDENT: &str = "    ";

/// Render a class as Java source.
pub fn render_class(spec: &ClassSpec) -> String {
    let mut code = String::new();

    code.push_str(&format!("package {};\n\n", spec.package));

    if !spec.imports.is_empty() {
        for import in &spec.imports {
            code.push_str(&format!("import {};\n", import));
        }
        code.push('\n');
    }

    push_docs(&mut code, &spec.docs, "");
    code.push_str(&format!(
        "public class {} extends {} {{\n",
        spec.name, spec.base_class
    ));

    for member in &spec.members {
        code.push('\n');
        push_member(&mut code, member);
    }

    // Constructor
    code.push_str(&format!("\n{INDENT}public {}() {{\n", spec.name));
    for statement in &spec.constructor {
        for line in statement.lines() {
            code.push_str(&format!("{INDENT}{INDENT}{line}\n"));
        }
    }
    code.push_str(&format!("{INDENT}}}\n"));

    for method in &spec.methods {
        code.push('\n');
        push_method(&mut code, method);
    }

    code.push_str("}\n");

    code
}

fn push_member(code: &mut String, member: &Member) {
    push_docs(code, &member.docs, INDENT);
    code.push_str(&format!(
        "{INDENT}private {} {} = {};\n",
        member.java_type, member.name, member.initializer
    ));
}

fn push_method(code: &mut String, method: &Method) {
    push_docs(code, &method.docs, INDENT);
    if method.is_override {
        code.push_str(&format!("{INDENT}@Override\n"));
    }

    let params = method
        .params
        .iter()
        .map(|(ty, name)| format!("{ty} {name}"))
        .collect::<Vec<_>>()
        .join(", ");
    code.push_str(&format!(
        "{INDENT}public {} {}({}) {{\n",
        method.return_type, method.name, params
    ));

    for line in &method.body {
        code.push_str(&format!("{INDENT}{INDENT}{line}\n"));
    }
    code.push_str(&format!("{INDENT}}}\n"));
}

fn push_docs(code: &mut String, docs: &[String], indent: &str) {
    if docs.is_empty() {
        return;
    }
    code.push_str(&format!("{indent}/**\n"));
    for doc in docs {
        if doc.is_empty() {
            code.push_str(&format!("{indent} *\n"));
            continue;
        }
        // A stray "*/" would end the comment early.
        let doc = doc.replace("*/", "*&#47;");
        code.push_str(&format!("{indent} * {doc}\n"));
    }
    code.push_str(&format!("{indent} */\n"));
}

#[cfg(test)]
#[path = "render/render_tests.rs"]
mod render_tests;
