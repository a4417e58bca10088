//! Message schema documents.
//!
//! A schema describes one protocol message: its name, kind, the versions it
//! exists in, and an ordered list of fields. Fields may define structures
//! inline (a `fields` array under the field), and structures used from more
//! than one place are declared once in `commonStructs`:
//!
//! ```json
//! // Licensed to the Apache Software Foundation (ASF) ...
//! {
//!   "apiKey": 18,
//!   "type": "request",
//!   "name": "ApiVersionsRequest",
//!   "validVersions": "0-3",
//!   "flexibleVersions": "3+",
//!   "fields": [
//!     { "name": "ClientSoftwareName", "type": "string", "versions": "3+",
//!       "about": "The name of the client." }
//!   ]
//! }
//! ```
//!
//! Documents may carry `//` line comments (license headers); they are removed
//! before the JSON is parsed.

use crate::error::{GeneratorError, GeneratorResult};
use crate::naming::is_java_identifier;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// One parsed schema document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDocument {
    /// Message name, e.g. `FetchRequest` or `RequestHeader`
    pub name: String,

    /// Declared message type: `request`, `response` or `header`
    #[serde(rename = "type")]
    pub message_type: String,

    /// API key; -1 when the message has none
    #[serde(default = "default_api_key")]
    pub api_key: i16,

    pub valid_versions: String,

    #[serde(default)]
    pub flexible_versions: Option<String>,

    #[serde(default)]
    pub common_structs: Vec<StructDef>,

    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

/// A structure shared by several fields of one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructDef {
    pub name: String,

    #[serde(default = "default_versions")]
    pub versions: String,

    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

/// A single field of a message or structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    pub name: String,

    /// Declared type, e.g. `int32`, `[]string`, `[]FetchTopic`
    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default = "default_versions")]
    pub versions: String,

    #[serde(default)]
    pub nullable_versions: Option<String>,

    #[serde(default)]
    pub tagged_versions: Option<String>,

    #[serde(default)]
    pub tag: Option<i32>,

    /// Default value; numbers, booleans and strings are accepted
    #[serde(default)]
    pub default: Option<serde_json::Value>,

    /// Documentation for the field
    #[serde(default)]
    pub about: Option<String>,

    #[serde(default)]
    pub ignorable: bool,

    #[serde(default)]
    pub map_key: bool,

    #[serde(default)]
    pub entity_type: Option<String>,

    /// Sub-fields when the field defines a structure inline
    #[serde(default)]
    pub fields: Option<Vec<FieldDef>>,
}

fn default_api_key() -> i16 {
    -1
}

fn default_versions() -> String {
    "0+".to_string()
}

impl SchemaDocument {
    /// Load a schema document from a file
    pub fn from_file(path: impl AsRef<Path>) -> GeneratorResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| GeneratorError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let document = Self::parse(&content).map_err(|source| GeneratorError::Schema {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), message = %document.name, "loaded schema");
        Ok(document)
    }

    /// Parse a schema document, ignoring `//` line comments
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(&strip_line_comments(content))
    }
}

impl FieldDef {
    /// Parse the declared type.
    pub fn field_type(&self) -> GeneratorResult<FieldType> {
        FieldType::parse(&self.name, &self.ty)
    }

    /// Sub-fields of an inline structure definition.
    pub fn struct_fields(&self) -> Option<&[FieldDef]> {
        self.fields.as_deref()
    }
}

/// Scalar wire types understood by the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Bool,
    Int8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Float64,
    String,
    Bytes,
    Records,
    Uuid,
}

impl PrimitiveType {
    pub fn from_name(name: &str) -> Option<Self> {
        let ty = match name {
            "bool" => PrimitiveType::Bool,
            "int8" => PrimitiveType::Int8,
            "int16" => PrimitiveType::Int16,
            "uint16" => PrimitiveType::Uint16,
            "int32" => PrimitiveType::Int32,
            "uint32" => PrimitiveType::Uint32,
            "int64" => PrimitiveType::Int64,
            "float64" => PrimitiveType::Float64,
            "string" => PrimitiveType::String,
            "bytes" => PrimitiveType::Bytes,
            "records" => PrimitiveType::Records,
            "uuid" => PrimitiveType::Uuid,
            _ => return None,
        };
        Some(ty)
    }

    /// Name as written in schemas and passed to the runtime.
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveType::Bool => "bool",
            PrimitiveType::Int8 => "int8",
            PrimitiveType::Int16 => "int16",
            PrimitiveType::Uint16 => "uint16",
            PrimitiveType::Int32 => "int32",
            PrimitiveType::Uint32 => "uint32",
            PrimitiveType::Int64 => "int64",
            PrimitiveType::Float64 => "float64",
            PrimitiveType::String => "string",
            PrimitiveType::Bytes => "bytes",
            PrimitiveType::Records => "records",
            PrimitiveType::Uuid => "uuid",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            PrimitiveType::Int8
                | PrimitiveType::Int16
                | PrimitiveType::Uint16
                | PrimitiveType::Int32
                | PrimitiveType::Uint32
                | PrimitiveType::Int64
                | PrimitiveType::Float64
        )
    }
}

/// Parsed form of a field's declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Primitive(PrimitiveType),
    Struct(String),
    Array(Box<FieldType>),
}

impl FieldType {
    /// Parse a declared type such as `int32`, `[]string` or `[]FetchTopic`.
    pub fn parse(field: &str, ty: &str) -> GeneratorResult<Self> {
        let unsupported = || GeneratorError::UnsupportedType {
            field: field.to_string(),
            ty: ty.to_string(),
        };

        if let Some(element) = ty.strip_prefix("[]") {
            if element.is_empty() {
                return Err(unsupported());
            }
            return Ok(FieldType::Array(Box::new(Self::parse(field, element)?)));
        }

        if let Some(primitive) = PrimitiveType::from_name(ty) {
            return Ok(FieldType::Primitive(primitive));
        }

        let starts_upper = ty.chars().next().is_some_and(|c| c.is_ascii_uppercase());
        if starts_upper && is_java_identifier(ty) {
            Ok(FieldType::Struct(ty.to_string()))
        } else {
            Err(unsupported())
        }
    }

    /// Structure named by this type, looking through arrays.
    pub fn struct_name(&self) -> Option<&str> {
        match self {
            FieldType::Primitive(_) => None,
            FieldType::Struct(name) => Some(name),
            FieldType::Array(inner) => inner.struct_name(),
        }
    }

    /// Type string handed to the runtime, e.g. `[]int32`.
    pub fn wire_name(&self) -> String {
        match self {
            FieldType::Primitive(p) => p.name().to_string(),
            FieldType::Struct(name) => name.clone(),
            FieldType::Array(inner) => format!("[]{}", inner.wire_name()),
        }
    }
}

/// Remove `//` comments that are not inside a JSON string.
pub fn strip_line_comments(content: &str) -> String {
    let mut out = String::with_capacity(content.len());

    for line in content.lines() {
        let mut in_string = false;
        let mut escaped = false;
        let mut cut = line.len();
        let bytes = line.as_bytes();

        for (i, &b) in bytes.iter().enumerate() {
            if in_string {
                match b {
                    _ if escaped => escaped = false,
                    b'\\' => escaped = true,
                    b'"' => in_string = false,
                    _ => {}
                }
            } else if b == b'"' {
                in_string = true;
            } else if b == b'/' && bytes.get(i + 1) == Some(&b'/') {
                cut = i;
                break;
            }
        }

        out.push_str(&line[..cut]);
        out.push('\n');
    }

    out
}
