//! wiregen-core - Schema model, version ranges, and naming conventions
//!
//! This crate provides everything the generator needs before it emits code:
//! - [`SchemaDocument`] and its field/structure definitions
//! - [`versions`] for resolving version-range expressions into [`VersionSet`]s
//! - [`naming`] for family names and identifier case conversion
//! - [`MessageKind`] for selecting the generated class hierarchy
//! - [`GeneratorError`] for error handling
//! - [`GeneratorConfig`] for generator configuration

mod config;
mod error;
mod kind;
pub mod naming;
pub mod schema;
pub mod versions;

pub use config::GeneratorConfig;
pub use error::{GeneratorError, GeneratorResult};
pub use kind::MessageKind;
pub use naming::ResolvedName;
pub use schema::{FieldDef, FieldType, PrimitiveType, SchemaDocument, StructDef};
pub use versions::VersionSet;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        FieldDef, FieldType, GeneratorConfig, GeneratorError, GeneratorResult, MessageKind,
        PrimitiveType, SchemaDocument, StructDef, VersionSet,
    };
}
