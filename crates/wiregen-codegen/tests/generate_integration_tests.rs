//! Integration tests for generating classes from schema files on disk.

#![allow(non_snake_case)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiregen_codegen::MessageGenerator;
use wiregen_core::{GeneratorConfig, GeneratorError};

const FETCH_REQUEST: &str = r#"// Fetch request, trimmed down.
{
  "apiKey": 1,
  "type": "request",
  "name": "FetchRequest",
  // Version 3 adds tagged fields.
  "validVersions": "0-3",
  "flexibleVersions": "3+",
  "fields": [
    { "name": "ReplicaId", "type": "int32", "versions": "0+", "default": "-1",
      "about": "The broker ID of the follower, or -1 for consumers." },
    { "name": "ClusterId", "type": "string", "versions": "3+", "nullableVersions": "3+",
      "taggedVersions": "3+", "tag": 0, "default": "null",
      "about": "The cluster ID // not a comment." },
    { "name": "Topics", "type": "[]FetchTopic", "versions": "0+", "fields": [
      { "name": "Topic", "type": "string", "versions": "0+" },
      { "name": "Partitions", "type": "[]FetchPartition", "versions": "0+", "fields": [
        { "name": "Partition", "type": "int32", "versions": "0+" },
        { "name": "FetchOffset", "type": "int64", "versions": "0+" }
      ]}
    ]}
  ]
}
"#;

/// Helper to write a schema file into the temp dir.
fn write_schema(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn count_files(root: &Path) -> usize {
    if !root.exists() {
        return 0;
    }
    fs::read_dir(root)
        .unwrap()
        .map(|entry| {
            let path = entry.unwrap().path();
            if path.is_dir() { count_files(&path) } else { 1 }
        })
        .sum()
}

// =============================================================================
// Successful Generation
// =============================================================================

mod generate {
    use super::*;

    #[test]
    fn generate_into___commented_schema___writes_message_and_structs() {
        let dir = TempDir::new().unwrap();
        let schema = write_schema(&dir, "FetchRequest.json", FETCH_REQUEST);
        let out = dir.path().join("out");

        let generator = MessageGenerator::from_path(&schema, GeneratorConfig::default()).unwrap();
        let written = generator.generate_into(&out).unwrap();

        let package_dir = out.join("org/wiregen/protocol/fetch");
        assert_eq!(written.len(), 3);
        assert!(package_dir.join("FetchRequest.java").is_file());
        assert!(package_dir.join("FetchTopic.java").is_file());
        assert!(package_dir.join("FetchPartition.java").is_file());
        assert_eq!(generator.source_path(), Some(schema.as_path()));
    }

    #[test]
    fn generate_into___message_class___carries_runtime_metadata() {
        let dir = TempDir::new().unwrap();
        let schema = write_schema(&dir, "FetchRequest.json", FETCH_REQUEST);
        let out = dir.path().join("out");

        MessageGenerator::from_path(&schema, GeneratorConfig::default())
            .unwrap()
            .generate_into(&out)
            .unwrap();

        let code = fs::read_to_string(out.join("org/wiregen/protocol/fetch/FetchRequest.java"))
            .unwrap();
        assert!(code.contains("public class FetchRequest extends AbstractRequest {"));
        assert!(code.contains("private int replicaId = -1;"));
        assert!(code.contains("private String clusterId = null;"));
        assert!(code.contains("private List<FetchTopic> topics = new ArrayList<>();"));
        assert!(code.contains("return 1;"));
        assert!(code.contains("return 3;"));
        assert!(code.contains("return List.of(3);"));
        assert!(code.contains("The cluster ID // not a comment."));
    }

    #[test]
    fn generate_into___custom_package___changes_directory() {
        let dir = TempDir::new().unwrap();
        let schema = write_schema(&dir, "FetchRequest.json", FETCH_REQUEST);
        let out = dir.path().join("out");
        let config = GeneratorConfig::default().with_base_package("com.acme.kafka");

        MessageGenerator::from_path(&schema, config)
            .unwrap()
            .generate_into(&out)
            .unwrap();

        let code =
            fs::read_to_string(out.join("com/acme/kafka/fetch/FetchTopic.java")).unwrap();
        assert!(code.starts_with("package com.acme.kafka.fetch;"));
        assert!(code.contains("import com.acme.kafka.AbstractStruct;"));
    }

    #[test]
    fn generate_into___existing_files___are_overwritten() {
        let dir = TempDir::new().unwrap();
        let schema = write_schema(&dir, "FetchRequest.json", FETCH_REQUEST);
        let out = dir.path().join("out");
        let target = out.join("org/wiregen/protocol/fetch/FetchRequest.java");
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(&target, "stale").unwrap();

        MessageGenerator::from_path(&schema, GeneratorConfig::default())
            .unwrap()
            .generate_into(&out)
            .unwrap();

        let code = fs::read_to_string(&target).unwrap();
        assert!(code.starts_with("package org.wiregen.protocol.fetch;"));
    }

    #[test]
    fn generate_into___run_twice___produces_identical_files() {
        let dir = TempDir::new().unwrap();
        let schema = write_schema(&dir, "FetchRequest.json", FETCH_REQUEST);
        let out = dir.path().join("out");
        let generator = MessageGenerator::from_path(&schema, GeneratorConfig::default()).unwrap();

        generator.generate_into(&out).unwrap();
        let first = fs::read_to_string(out.join("org/wiregen/protocol/fetch/FetchTopic.java"))
            .unwrap();
        generator.generate_into(&out).unwrap();
        let second = fs::read_to_string(out.join("org/wiregen/protocol/fetch/FetchTopic.java"))
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(count_files(&out), 3);
    }
}

// =============================================================================
// Error Paths
// =============================================================================

mod errors {
    use super::*;

    #[test]
    fn from_path___missing_file___returns_io_error() {
        let dir = TempDir::new().unwrap();

        let result =
            MessageGenerator::from_path(dir.path().join("nope.json"), GeneratorConfig::default());

        assert!(matches!(result, Err(GeneratorError::Io { .. })));
    }

    #[test]
    fn from_path___invalid_json___returns_schema_error() {
        let dir = TempDir::new().unwrap();
        let schema = write_schema(&dir, "Broken.json", "{ \"name\": ");

        let result = MessageGenerator::from_path(&schema, GeneratorConfig::default());

        match result {
            Err(GeneratorError::Schema { path, .. }) => assert_eq!(path, schema),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn generate_into___unknown_struct___writes_nothing() {
        let dir = TempDir::new().unwrap();
        let schema = write_schema(
            &dir,
            "ListGroupsResponse.json",
            r#"{
                "name": "ListGroupsResponse", "type": "response", "apiKey": 16,
                "validVersions": "0-4",
                "commonStructs": [{ "name": "Defined", "fields": [] }],
                "fields": [{ "name": "Groups", "type": "[]ListedGroup", "versions": "0+" }]
            }"#,
        );
        let out = dir.path().join("out");

        let result = MessageGenerator::from_path(&schema, GeneratorConfig::default())
            .unwrap()
            .generate_into(&out);

        assert!(matches!(result, Err(GeneratorError::UnknownStruct { .. })));
        assert_eq!(count_files(&out), 0);
    }

    #[test]
    fn generate_into___bad_default___writes_nothing() {
        let dir = TempDir::new().unwrap();
        let schema = write_schema(
            &dir,
            "ProduceRequest.json",
            r#"{
                "name": "ProduceRequest", "type": "request", "apiKey": 0,
                "validVersions": "0-2",
                "fields": [{ "name": "Acks", "type": "int16", "versions": "0+", "default": "loud" }]
            }"#,
        );
        let out = dir.path().join("out");

        let result = MessageGenerator::from_path(&schema, GeneratorConfig::default())
            .unwrap()
            .generate_into(&out);

        assert!(matches!(result, Err(GeneratorError::InvalidDefault { .. })));
        assert!(!out.exists());
    }

    #[test]
    fn generate_into___unwritable_message_path___writes_no_structs() {
        let dir = TempDir::new().unwrap();
        let schema = write_schema(&dir, "FetchRequest.json", FETCH_REQUEST);
        let out = dir.path().join("out");
        let blocked = out.join("org/wiregen/protocol/fetch/FetchRequest.java");
        fs::create_dir_all(&blocked).unwrap();

        let result = MessageGenerator::from_path(&schema, GeneratorConfig::default())
            .unwrap()
            .generate_into(&out);

        match result {
            Err(GeneratorError::Io { path, .. }) => assert_eq!(path, blocked),
            other => panic!("expected io error, got {other:?}"),
        }
        assert_eq!(count_files(&out), 0);
    }
}
