#![allow(non_snake_case)]

use super::*;
use serde_json::json;
use std::path::PathBuf;

fn ctx() -> EmitContext {
    EmitContext {
        package: "org.example.fetch".to_string(),
        runtime_package: "org.example".to_string(),
        class_dir: PathBuf::from("org/example/fetch"),
        extension: "java".to_string(),
        source_name: "FetchRequest".to_string(),
        valid_versions: VersionSet::range(0, 4),
        flexible_versions: VersionSet::range(3, 4),
    }
}

fn fields(value: serde_json::Value) -> Vec<FieldDef> {
    serde_json::from_value(value).unwrap()
}

fn file(name: &str) -> GeneratedFile {
    GeneratedFile::new(PathBuf::from(format!("{name}.java")), name, String::new())
}

// GeneratedTypeRegistry tests

#[test]
fn GeneratedTypeRegistry___new___is_empty() {
    let registry = GeneratedTypeRegistry::new();

    assert!(registry.is_empty());
    assert!(!registry.has_generated("FetchTopic"));
}

#[test]
fn GeneratedTypeRegistry___record___rejects_duplicate_name() {
    let mut registry = GeneratedTypeRegistry::new();

    assert!(registry.record("FetchTopic", file("FetchTopic")));
    assert!(!registry.record("FetchTopic", file("FetchTopic")));

    assert_eq!(registry.len(), 1);
}

#[test]
fn GeneratedTypeRegistry___check_references___passes_once_emitted() {
    let mut registry = GeneratedTypeRegistry::new();
    registry.require("Shared", "First");
    registry.require("Shared", "Second");

    assert!(matches!(
        registry.check_references(),
        Err(GeneratorError::UnknownStruct { field, .. }) if field == "First"
    ));

    registry.record("Shared", file("Shared"));

    assert!(registry.check_references().is_ok());
}

// StructEmitter tests

#[test]
fn StructEmitter___emit___renders_struct_class() {
    let ctx = ctx();
    let emitter = StructEmitter::new(&ctx);
    let mut registry = GeneratedTypeRegistry::new();
    let defs = fields(json!([
        {"name": "Topic", "type": "string", "versions": "0+", "about": "The topic name."},
        {"name": "Partitions", "type": "[]int32", "versions": "0+"}
    ]));

    emitter
        .emit(&mut registry, "FetchTopic", &defs, &VersionSet::range(0, 4))
        .unwrap();

    let files = registry.into_files();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, PathBuf::from("org/example/fetch/FetchTopic.java"));
    let code = &files[0].contents;
    assert!(code.contains("package org.example.fetch;"));
    assert!(code.contains("import org.example.AbstractStruct;"));
    assert!(code.contains("import org.example.ProtocolField;"));
    assert!(code.contains("public class FetchTopic extends AbstractStruct {"));
    assert!(code.contains("private String topic = \"\";"));
    assert!(code.contains("private List<Integer> partitions = new ArrayList<>();"));
    assert!(code.contains("public List<Integer> getPartitions()"));
}

#[test]
fn StructEmitter___emit___same_name_twice_emits_once() {
    let ctx = ctx();
    let emitter = StructEmitter::new(&ctx);
    let mut registry = GeneratedTypeRegistry::new();
    let defs = fields(json!([{"name": "Id", "type": "int32"}]));
    let versions = VersionSet::range(0, 4);

    emitter.emit(&mut registry, "Shared", &defs, &versions).unwrap();
    emitter.emit(&mut registry, "Shared", &defs, &versions).unwrap();

    assert_eq!(registry.len(), 1);
}

#[test]
fn StructEmitter___emit___nested_structs_come_first() {
    let ctx = ctx();
    let emitter = StructEmitter::new(&ctx);
    let mut registry = GeneratedTypeRegistry::new();
    let defs = fields(json!([
        {"name": "Partitions", "type": "[]FetchPartition", "versions": "0+", "fields": [
            {"name": "Replicas", "type": "[]Replica", "versions": "0+", "fields": [
                {"name": "Id", "type": "int32", "versions": "0+"}
            ]}
        ]}
    ]));

    emitter
        .emit(&mut registry, "FetchTopic", &defs, &VersionSet::range(0, 4))
        .unwrap();

    let files = registry.into_files();
    let names: Vec<_> = files.iter().map(|f| f.class_name.as_str()).collect();
    assert_eq!(names, vec!["Replica", "FetchPartition", "FetchTopic"]);
}

#[test]
fn StructEmitter___emit___separate_runs_do_not_share_registry() {
    let ctx = ctx();
    let emitter = StructEmitter::new(&ctx);
    let defs = fields(json!([{"name": "Id", "type": "int32"}]));
    let versions = VersionSet::range(0, 4);

    let mut first = GeneratedTypeRegistry::new();
    let mut second = GeneratedTypeRegistry::new();
    emitter.emit(&mut first, "Shared", &defs, &versions).unwrap();
    emitter.emit(&mut second, "Shared", &defs, &versions).unwrap();

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
}

#[test]
fn StructEmitter___emit_common___documents_resolved_versions() {
    let ctx = ctx();
    let emitter = StructEmitter::new(&ctx);
    let mut registry = GeneratedTypeRegistry::new();
    let def: StructDef = serde_json::from_value(json!({
        "name": "Principal", "versions": "2+",
        "fields": [{"name": "Name", "type": "string", "versions": "2+"}]
    }))
    .unwrap();

    emitter.emit_common(&mut registry, &def).unwrap();

    let files = registry.into_files();
    assert!(files[0].contents.contains("Principal structure, versions 2+."));
    assert!(!files[0].contents.contains("Only encoded in versions"));
}

#[test]
fn StructEmitter___emit_common___malformed_versions_is_error() {
    let ctx = ctx();
    let emitter = StructEmitter::new(&ctx);
    let mut registry = GeneratedTypeRegistry::new();
    let def: StructDef =
        serde_json::from_value(json!({"name": "Principal", "versions": "x", "fields": []}))
            .unwrap();

    let result = emitter.emit_common(&mut registry, &def);

    assert!(matches!(result, Err(GeneratorError::MalformedRange { .. })));
    assert!(registry.is_empty());
}

#[test]
fn StructEmitter___emit___accessor_shadowing_get_class_is_error() {
    let ctx = ctx();
    let emitter = StructEmitter::new(&ctx);
    let mut registry = GeneratedTypeRegistry::new();
    let defs = fields(json!([{"name": "Class", "type": "int8", "versions": "0+"}]));

    let result = emitter.emit(&mut registry, "Acl", &defs, &VersionSet::range(0, 4));

    assert!(matches!(
        result,
        Err(GeneratorError::MethodConflict { class, method }) if class == "Acl" && method == "getClass"
    ));
    assert!(registry.is_empty());
}
