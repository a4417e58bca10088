//! Field-level code generation.
//!
//! Each schema field becomes a private member, a `ProtocolField`
//! registration in the constructor and a getter/setter pair. The runtime
//! reads and writes fields through those registrations, so the versions a
//! field exists in, is nullable in, or is tagged in are passed along there.

use crate::context::EmitContext;
use crate::ir::{ClassSpec, Member, Method};
use crate::java_types::{initializer, map_field_type, required_imports, safe_identifier};
use crate::structs::{GeneratedTypeRegistry, StructEmitter};
use std::collections::HashSet;
use wiregen_core::naming::{capitalize, to_camel_case};
use wiregen_core::{FieldDef, FieldType, GeneratorError, GeneratorResult, VersionSet, versions};

/// Runtime class describing one field to the encoder.
pub const PROTOCOL_FIELD_CLASS: &str = "ProtocolField";

/// Final methods of `java.lang.Object` an accessor could collide with.
const FINAL_OBJECT_METHODS: [&str; 1] = ["getClass"];

/// A schema field with its type and version ranges resolved.
#[derive(Debug, Clone)]
pub struct ResolvedField<'a> {
    pub def: &'a FieldDef,

    /// Java member name.
    pub member: String,

    pub ty: FieldType,

    /// Declared Java type, boxed when the field is ever nullable.
    pub java_type: String,

    pub versions: VersionSet,
    pub nullable_versions: VersionSet,
    pub tagged_versions: VersionSet,

    pub initializer: String,
}

impl<'a> ResolvedField<'a> {
    /// Resolve a field against a document's valid and flexible versions.
    pub fn resolve(def: &'a FieldDef, ctx: &EmitContext) -> GeneratorResult<Self> {
        let ceiling = Some(ctx.max_version());
        let ty = def.field_type()?;

        let versions = versions::resolve(&def.versions, ceiling)?.intersection(&ctx.valid_versions);
        let nullable_versions = match &def.nullable_versions {
            Some(expr) => versions::resolve(expr, ceiling)?.intersection(&versions),
            None => VersionSet::empty(),
        };
        let tagged_versions = match &def.tagged_versions {
            Some(expr) => {
                let tagged = versions::resolve(expr, ceiling)?.intersection(&versions);
                if !tagged.is_subset_of(&ctx.flexible_versions) {
                    return Err(GeneratorError::malformed_range(
                        expr.as_str(),
                        format!(
                            "tagged versions of {} must be flexible versions ({})",
                            def.name, ctx.flexible_versions
                        ),
                    ));
                }
                tagged
            }
            None => VersionSet::empty(),
        };

        let nullable = !nullable_versions.is_empty();
        let java_type = map_field_type(&ty).declared(nullable).to_string();
        let initializer = initializer(&def.name, &ty, nullable, def.default.as_ref())?;

        Ok(Self {
            def,
            member: safe_identifier(&to_camel_case(&def.name)),
            ty,
            java_type,
            versions,
            nullable_versions,
            tagged_versions,
            initializer,
        })
    }

    /// Whether the field is missing from some of the versions in `scope`.
    pub fn is_version_conditional(&self, scope: &VersionSet) -> bool {
        !scope.is_subset_of(&self.versions)
    }

    /// Constructor statement registering the field with the runtime.
    pub fn registration(&self) -> String {
        let mut lines = vec![format!(
            "registerField({}.of(\"{}\", \"{}\")",
            PROTOCOL_FIELD_CLASS,
            self.member,
            self.ty.wire_name()
        )];

        lines.push(format!("    .versions({})", version_args(&self.versions)));
        if !self.nullable_versions.is_empty() {
            lines.push(format!(
                "    .nullableVersions({})",
                version_args(&self.nullable_versions)
            ));
        }
        if !self.tagged_versions.is_empty() {
            lines.push(format!(
                "    .taggedVersions({})",
                version_args(&self.tagged_versions)
            ));
        }
        if let Some(tag) = self.def.tag {
            lines.push(format!("    .tag({tag})"));
        }
        if let Some(name) = self.ty.struct_name() {
            lines.push(format!("    .structType({name}.class)"));
        }
        if self.def.ignorable {
            lines.push("    .ignorable()".to_string());
        }
        if self.def.map_key {
            lines.push("    .mapKey()".to_string());
        }

        let mut statement = lines.join("\n");
        statement.push_str(");");
        statement
    }

    /// Member declaration, documented with the field's version ranges.
    pub fn member_decl(&self, scope: &VersionSet, ceiling: u16) -> Member {
        let mut docs: Vec<String> = self
            .def
            .about
            .iter()
            .flat_map(|about| about.lines())
            .map(str::to_string)
            .collect();

        if self.is_version_conditional(scope) {
            docs.push(format!("Versions: {}", self.versions.describe(ceiling)));
        }
        if !self.nullable_versions.is_empty() {
            docs.push(format!(
                "Nullable versions: {}",
                self.nullable_versions.describe(ceiling)
            ));
        }
        if !self.tagged_versions.is_empty() {
            docs.push(format!(
                "Tagged versions: {}",
                self.tagged_versions.describe(ceiling)
            ));
        }

        Member {
            name: self.member.clone(),
            java_type: self.java_type.clone(),
            initializer: self.initializer.clone(),
            docs,
        }
    }

    /// Getter and setter.
    pub fn accessors(&self, scope: &VersionSet, ceiling: u16) -> [Method; 2] {
        let suffix = capitalize(&to_camel_case(&self.def.name));
        let docs = if self.is_version_conditional(scope) {
            vec![format!(
                "Only encoded in versions {}.",
                self.versions.describe(ceiling)
            )]
        } else {
            Vec::new()
        };

        let getter = Method::returning(format!("get{suffix}"), &self.java_type, &self.member)
            .with_docs(docs.clone());
        let setter = Method::new(format!("set{suffix}"), "void")
            .with_param(&self.java_type, &self.member)
            .with_body(format!("this.{0} = {0};", self.member))
            .with_docs(docs);

        [getter, setter]
    }
}

fn version_args(versions: &VersionSet) -> String {
    versions
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Generate members, registrations and accessors for `fields` into `spec`.
///
/// `scope` is the set of versions the enclosing class exists in. Inline
/// structures are emitted through `emitter` before the field that holds them.
pub(crate) fn emit_fields(
    emitter: &StructEmitter<'_>,
    registry: &mut GeneratedTypeRegistry,
    fields: &[FieldDef],
    scope: &VersionSet,
    spec: &mut ClassSpec,
) -> GeneratorResult<()> {
    let ctx = emitter.context();
    let ceiling = ctx.max_version();

    for def in fields {
        let field = ResolvedField::resolve(def, ctx)?;

        match (def.struct_fields(), field.ty.struct_name()) {
            (Some(sub_fields), Some(name)) => {
                emitter.emit(registry, name, sub_fields, &field.versions)?;
            }
            (Some(_), None) => {
                return Err(GeneratorError::UnsupportedType {
                    field: def.name.clone(),
                    ty: def.ty.clone(),
                });
            }
            (None, Some(name)) => registry.require(name, &def.name),
            (None, None) => {}
        }

        for import in required_imports(&field.ty) {
            spec.import(import);
        }
        spec.members.push(field.member_decl(scope, ceiling));
        spec.constructor.push(field.registration());
        spec.methods.extend(field.accessors(scope, ceiling));
    }

    if !fields.is_empty() {
        spec.import(ctx.runtime_class(PROTOCOL_FIELD_CLASS));
    }

    Ok(())
}

/// Fail if a method of `spec` is declared twice or redeclares a final
/// `Object` method.
///
/// Runs once the class is complete, so accessors are checked against each
/// other and against the supplemental methods of the message kind.
pub(crate) fn check_methods(spec: &ClassSpec) -> GeneratorResult<()> {
    let mut seen = HashSet::new();

    for method in &spec.methods {
        let name = method.name.as_str();
        if FINAL_OBJECT_METHODS.contains(&name) || !seen.insert(name) {
            return Err(GeneratorError::MethodConflict {
                class: spec.name.clone(),
                method: method.name.clone(),
            });
        }
    }

    Ok(())
}
