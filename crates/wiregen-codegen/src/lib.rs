//! wiregen-codegen - Java message classes from protocol message schemas
//!
//! Turns one [`SchemaDocument`](wiregen_core::SchemaDocument) into a Java
//! class extending the runtime base type for its kind, plus one class per
//! structure it declares.
//!
//! # Architecture
//!
//! ```text
//! schema.json
//!     ↓
//!  [MessageGenerator::new]   names, versions, api key
//!     ↓
//!  [StructEmitter]           common and nested structures, once per run
//!     ↓
//!  [emit_fields]             members, ProtocolField registrations, accessors
//!     ↓
//!    IR (ClassSpec)
//!     ↓
//!  [render_class] → *.java
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use wiregen_codegen::MessageGenerator;
//! use wiregen_core::GeneratorConfig;
//! use std::path::Path;
//!
//! let generator =
//!     MessageGenerator::from_path("schemas/FetchRequest.json", GeneratorConfig::default()).unwrap();
//! let written = generator.generate_into(Path::new("src/main/java")).unwrap();
//! println!("wrote {} files", written.len());
//! ```

pub mod context;
mod fields;
pub mod ir;
pub mod java_types;
pub mod message;
pub mod output;
pub mod render;
pub mod structs;

pub use context::EmitContext;
pub use fields::{PROTOCOL_FIELD_CLASS, ResolvedField};
pub use ir::{ClassSpec, Member, Method};
pub use message::MessageGenerator;
pub use output::{GeneratedFile, GenerationOutput};
pub use render::render_class;
pub use structs::{GeneratedTypeRegistry, STRUCT_BASE_CLASS, StructEmitter};
