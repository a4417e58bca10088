#![allow(non_snake_case)]

use super::*;

fn ping_spec() -> ClassSpec {
    let mut spec = ClassSpec::new("org.example.ping", "PingRequest", "AbstractRequest");
    spec.import("org.example.AbstractRequest");
    spec.import("java.util.List");
    spec.docs.push("A ping.".to_string());
    spec.members.push(Member {
        name: "timeoutMs".to_string(),
        java_type: "int".to_string(),
        initializer: "0".to_string(),
        docs: vec!["How long to wait.".to_string()],
    });
    spec.constructor
        .push("registerField(ProtocolField.of(\"timeoutMs\", \"int32\")\n    .versions(0, 1, 2));".to_string());
    spec.methods.push(
        Method::new("setTimeoutMs", "void")
            .with_param("int", "timeoutMs")
            .with_body("this.timeoutMs = timeoutMs;"),
    );
    spec.methods
        .push(Method::returning("getRequestApiKey", "int", "18").overriding());
    spec
}

#[test]
fn render_class___emits_package_and_sorted_imports() {
    let code = render_class(&ping_spec());

    assert!(code.starts_with("package org.example.ping;\n\n"));
    let java_util = code.find("import java.util.List;").unwrap();
    let runtime = code.find("import org.example.AbstractRequest;").unwrap();
    assert!(java_util < runtime);
}

#[test]
fn render_class___emits_class_declaration_with_docs() {
    let code = render_class(&ping_spec());

    assert!(code.contains("/**\n * A ping.\n */\npublic class PingRequest extends AbstractRequest {\n"));
    assert!(code.ends_with("}\n"));
}

#[test]
fn render_class___emits_member_with_initializer() {
    let code = render_class(&ping_spec());

    assert!(code.contains("    /**\n     * How long to wait.\n     */\n    private int timeoutMs = 0;\n"));
}

#[test]
fn render_class___indents_multiline_constructor_statements() {
    let code = render_class(&ping_spec());

    assert!(code.contains(
        "    public PingRequest() {\n        registerField(ProtocolField.of(\"timeoutMs\", \"int32\")\n            .versions(0, 1, 2));\n    }\n"
    ));
}

#[test]
fn render_class___emits_methods_with_params_and_override() {
    let code = render_class(&ping_spec());

    assert!(code.contains("    public void setTimeoutMs(int timeoutMs) {\n        this.timeoutMs = timeoutMs;\n    }\n"));
    assert!(code.contains("    @Override\n    public int getRequestApiKey() {\n        return 18;\n    }\n"));
}

#[test]
fn render_class___empty_class_has_constructor_only() {
    let spec = ClassSpec::new("a.b", "Empty", "AbstractStruct");

    let code = render_class(&spec);

    assert_eq!(
        code,
        "package a.b;\n\npublic class Empty extends AbstractStruct {\n\n    public Empty() {\n    }\n}\n"
    );
}

#[test]
fn render_class___neutralizes_comment_terminator_in_docs() {
    let mut spec = ClassSpec::new("a", "B", "C");
    spec.docs.push("ends */ early".to_string());

    let code = render_class(&spec);

    assert!(!code.contains("ends */"));
}
