//! Structure class emission.
//!
//! Structures are emitted once per generation run no matter how many fields
//! refer to them. The [`GeneratedTypeRegistry`] records what a run has
//! emitted and is passed by `&mut` through every recursive call; it is
//! created fresh for each document, so two documents declaring a structure
//! with the same name each get their own copy.

use crate::context::EmitContext;
use crate::fields::{check_methods, emit_fields};
use crate::ir::ClassSpec;
use crate::output::GeneratedFile;
use crate::render::render_class;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, trace};
use wiregen_core::{FieldDef, GeneratorError, GeneratorResult, StructDef, VersionSet, versions};

/// Runtime base class of every structure.
pub const STRUCT_BASE_CLASS: &str = "AbstractStruct";

/// Structures emitted during one generation run.
#[derive(Debug, Default)]
pub struct GeneratedTypeRegistry {
    emitted: HashSet<String>,
    files: Vec<GeneratedFile>,
    /// Referenced structure name to the first field referencing it.
    required: BTreeMap<String, String>,
}

impl GeneratedTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_generated(&self, type_name: &str) -> bool {
        self.emitted.contains(type_name)
    }

    /// Record an emitted structure. Returns `false`, dropping `file`, if the
    /// name was already recorded.
    pub fn record(&mut self, type_name: &str, file: GeneratedFile) -> bool {
        if !self.emitted.insert(type_name.to_string()) {
            return false;
        }
        self.files.push(file);
        true
    }

    /// Note that `field` refers to the structure `type_name` without defining it.
    pub fn require(&mut self, type_name: &str, field: &str) {
        self.required
            .entry(type_name.to_string())
            .or_insert_with(|| field.to_string());
    }

    /// Fail if a referenced structure was never emitted.
    pub fn check_references(&self) -> GeneratorResult<()> {
        match self
            .required
            .iter()
            .find(|(name, _)| !self.has_generated(name))
        {
            Some((name, field)) => Err(GeneratorError::UnknownStruct {
                field: field.clone(),
                name: name.clone(),
            }),
            None => Ok(()),
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn into_files(self) -> Vec<GeneratedFile> {
        self.files
    }
}

/// Emits structure classes for one document.
#[derive(Debug, Clone, Copy)]
pub struct StructEmitter<'a> {
    ctx: &'a EmitContext,
}

impl<'a> StructEmitter<'a> {
    pub fn new(ctx: &'a EmitContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &'a EmitContext {
        self.ctx
    }

    /// Emit a `commonStructs` entry.
    pub fn emit_common(
        &self,
        registry: &mut GeneratedTypeRegistry,
        def: &StructDef,
    ) -> GeneratorResult<()> {
        let versions = versions::resolve(&def.versions, Some(self.ctx.max_version()))?
            .intersection(&self.ctx.valid_versions);
        self.emit(registry, &def.name, &def.fields, &versions)
    }

    /// Emit the class for structure `type_name` unless this run already has.
    ///
    /// Nested structures are emitted before the structure referencing them,
    /// and `type_name` is recorded only once its class is complete.
    pub fn emit(
        &self,
        registry: &mut GeneratedTypeRegistry,
        type_name: &str,
        fields: &[FieldDef],
        versions: &VersionSet,
    ) -> GeneratorResult<()> {
        if registry.has_generated(type_name) {
            trace!(structure = type_name, "structure already emitted, skipping");
            return Ok(());
        }

        let mut spec = ClassSpec::new(&self.ctx.package, type_name, STRUCT_BASE_CLASS);
        spec.docs = self.ctx.class_docs(format!(
            "{} structure, versions {}.",
            type_name,
            versions.describe(self.ctx.max_version())
        ));
        spec.import(self.ctx.runtime_class(STRUCT_BASE_CLASS));

        emit_fields(self, registry, fields, versions, &mut spec)?;
        check_methods(&spec)?;

        let file = GeneratedFile::new(
            self.ctx.file_path(type_name),
            type_name,
            render_class(&spec),
        );
        if registry.record(type_name, file) {
            debug!(structure = type_name, fields = fields.len(), "emitted structure");
        } else {
            debug!(structure = type_name, "structure defined within itself, keeping first");
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "structs/structs_tests.rs"]
mod structs_tests;
