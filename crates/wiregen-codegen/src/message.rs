//! Message class generation.
//!
//! [`MessageGenerator`] drives generation for one schema document:
//!
//! ```text
//! load → resolve names/versions → common structs → fields → assemble → persist
//! ```
//!
//! Everything that can be wrong with the input is detected by
//! [`MessageGenerator::new`] or while the classes are built in memory, so a
//! bad document never leaves files behind.

use crate::context::EmitContext;
use crate::fields::{check_methods, emit_fields};
use crate::ir::{ClassSpec, Method};
use crate::output::{GeneratedFile, GenerationOutput};
use crate::render::render_class;
use crate::structs::{GeneratedTypeRegistry, StructEmitter};
use std::path::{Path, PathBuf};
use tracing::debug;
use wiregen_core::naming::to_package_segment;
use wiregen_core::{
    GeneratorConfig, GeneratorResult, MessageKind, SchemaDocument, VersionSet, versions,
};

/// Generates the class for one message schema.
#[derive(Debug, Clone)]
pub struct MessageGenerator {
    document: SchemaDocument,
    config: GeneratorConfig,
    source_path: Option<PathBuf>,
    kind: MessageKind,
    family: String,
    is_header: bool,
    valid_versions: VersionSet,
    max_supported_version: u16,
    flexible_versions: VersionSet,
    api_key: i16,
}

impl MessageGenerator {
    /// Resolve a loaded schema document.
    pub fn new(document: SchemaDocument, config: GeneratorConfig) -> GeneratorResult<Self> {
        config.validate()?;

        let (kind, resolved) = MessageKind::resolve(&document.name, &document.message_type)?;
        let valid_versions = versions::resolve(&document.valid_versions, None)?;
        let max_supported_version = valid_versions.max().unwrap_or(0);
        let flexible_versions = match &document.flexible_versions {
            Some(expr) => versions::resolve_flexible(expr, &valid_versions)?,
            None => VersionSet::empty(),
        };
        let api_key = document.api_key;

        debug!(
            message = %document.name,
            family = %resolved.family,
            %kind,
            valid = %valid_versions,
            flexible = %flexible_versions,
            api_key,
            "resolved schema"
        );

        Ok(Self {
            family: resolved.family,
            is_header: resolved.is_header,
            document,
            config,
            source_path: None,
            kind,
            valid_versions,
            max_supported_version,
            flexible_versions,
            api_key,
        })
    }

    /// Load and resolve the schema document at `path`.
    pub fn from_path(path: impl AsRef<Path>, config: GeneratorConfig) -> GeneratorResult<Self> {
        let path = path.as_ref();
        let document = SchemaDocument::from_file(path)?;
        let mut generator = Self::new(document, config)?;
        generator.source_path = Some(path.to_path_buf());
        Ok(generator)
    }

    pub fn document(&self) -> &SchemaDocument {
        &self.document
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Schema file the document was loaded from, if any.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Family the message belongs to, e.g. `Fetch` for `FetchRequest`.
    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn is_header(&self) -> bool {
        self.is_header
    }

    pub fn valid_versions(&self) -> &VersionSet {
        &self.valid_versions
    }

    pub fn max_supported_version(&self) -> u16 {
        self.max_supported_version
    }

    pub fn flexible_versions(&self) -> &VersionSet {
        &self.flexible_versions
    }

    /// Declared API key, -1 when the schema has none.
    pub fn api_key(&self) -> i16 {
        self.api_key
    }

    /// Package of the generated classes.
    pub fn package(&self) -> String {
        format!(
            "{}.{}",
            self.config.base_package,
            to_package_segment(&self.family)
        )
    }

    /// Directory of the family, relative to the output root.
    pub fn family_dir(&self) -> PathBuf {
        self.package().split('.').collect()
    }

    /// Path of the message file, relative to the output root.
    pub fn save_path(&self) -> PathBuf {
        self.family_dir().join(format!(
            "{}.{}",
            self.document.name, self.config.file_extension
        ))
    }

    /// Generate the message class and every structure it uses.
    pub fn generate(&self) -> GeneratorResult<GenerationOutput> {
        let ctx = self.emit_context();
        let mut registry = GeneratedTypeRegistry::new();

        let spec = self.build_class(&ctx, &mut registry)?;
        let message = GeneratedFile::new(
            self.save_path(),
            &self.document.name,
            render_class(&spec),
        );

        debug!(
            message = %self.document.name,
            structures = registry.len(),
            "generated message"
        );

        Ok(GenerationOutput {
            message,
            structs: registry.into_files(),
        })
    }

    /// Generate and write everything under `root`.
    pub fn generate_into(&self, root: &Path) -> GeneratorResult<Vec<PathBuf>> {
        self.generate()?.persist(root)
    }

    /// Build the message class, emitting structures into `registry`.
    pub fn build_class(
        &self,
        ctx: &EmitContext,
        registry: &mut GeneratedTypeRegistry,
    ) -> GeneratorResult<ClassSpec> {
        let emitter = StructEmitter::new(ctx);

        for common in &self.document.common_structs {
            emitter.emit_common(registry, common)?;
        }

        let base_class = self.kind.base_class();
        let mut spec = ClassSpec::new(ctx.package.clone(), &self.document.name, base_class);
        spec.docs = ctx.class_docs(format!(
            "{} {}, versions {}.",
            self.document.name,
            self.kind,
            self.valid_versions.describe(self.max_supported_version)
        ));
        spec.import(ctx.runtime_class(base_class));
        spec.import("java.util.List");

        emit_fields(
            &emitter,
            registry,
            &self.document.fields,
            &self.valid_versions,
            &mut spec,
        )?;
        registry.check_references()?;

        spec.methods.extend(self.supplemental_methods());
        check_methods(&spec)?;
        Ok(spec)
    }

    /// Kind-specific methods describing the message to the runtime.
    pub fn supplemental_methods(&self) -> Vec<Method> {
        let api_key = || {
            Method::returning("getRequestApiKey", "int", self.api_key.to_string()).overriding()
        };
        let flexible = Method::returning(
            "getFlexibleVersions",
            "List<Integer>",
            list_literal(&self.flexible_versions),
        )
        .overriding();

        match self.kind {
            MessageKind::Request => vec![
                api_key(),
                Method::returning(
                    "getMaxSupportedVersion",
                    "int",
                    self.max_supported_version.to_string(),
                )
                .overriding(),
                flexible,
            ],
            MessageKind::Response => vec![api_key(), flexible],
            MessageKind::RequestHeader | MessageKind::ResponseHeader => vec![flexible],
        }
    }

    /// Settings shared by the message and its structures.
    pub fn emit_context(&self) -> EmitContext {
        EmitContext {
            package: self.package(),
            runtime_package: self.config.runtime_package().to_string(),
            class_dir: self.family_dir(),
            extension: self.config.file_extension.clone(),
            source_name: self.document.name.clone(),
            valid_versions: self.valid_versions.clone(),
            flexible_versions: self.flexible_versions.clone(),
        }
    }
}

fn list_literal(versions: &VersionSet) -> String {
    let items = versions
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("List.of({items})")
}
