//! Per-document settings shared by every emitted class.

use std::path::PathBuf;
use wiregen_core::VersionSet;

/// Where and how one document's classes are emitted.
///
/// Built by [`MessageGenerator`](crate::MessageGenerator) after names and
/// versions are resolved; structures and the message itself share it.
#[derive(Debug, Clone)]
pub struct EmitContext {
    /// Package of every class generated for the document.
    pub package: String,

    /// Package holding the runtime base classes.
    pub runtime_package: String,

    /// Directory, relative to the output root, classes are written to.
    pub class_dir: PathBuf,

    /// Extension of generated files.
    pub extension: String,

    /// Name of the message the classes are generated for.
    pub source_name: String,

    pub valid_versions: VersionSet,

    pub flexible_versions: VersionSet,
}

impl EmitContext {
    /// Highest valid version; the ceiling for open-ended field ranges.
    pub fn max_version(&self) -> u16 {
        self.valid_versions.max().unwrap_or(0)
    }

    /// Relative path of the file for `class_name`.
    pub fn file_path(&self, class_name: &str) -> PathBuf {
        self.class_dir
            .join(format!("{}.{}", class_name, self.extension))
    }

    /// Fully qualified name of a runtime class.
    pub fn runtime_class(&self, class_name: &str) -> String {
        format!("{}.{}", self.runtime_package, class_name)
    }

    /// Documentation placed on every generated class.
    pub fn class_docs(&self, summary: String) -> Vec<String> {
        vec![
            summary,
            String::new(),
            format!(
                "Generated by wiregen from the {} schema. Do not edit.",
                self.source_name
            ),
        ]
    }
}
