//! Java type mappings for protocol field types.
//!
//! # Type Mappings
//!
//! | Schema | Java | Java (nullable) |
//! |--------|------|-----------------|
//! | `bool` | `boolean` | `Boolean` |
//! | `int8` | `byte` | `Byte` |
//! | `int16` | `short` | `Short` |
//! | `uint16`, `int32` | `int` | `Integer` |
//! | `uint32`, `int64` | `long` | `Long` |
//! | `float64` | `double` | `Double` |
//! | `string` | `String` | `String` |
//! | `bytes`, `records` | `byte[]` | `byte[]` |
//! | `uuid` | `UUID` | `UUID` |
//! | `[]T` | `List<T>` | `List<T>` |
//! | struct `S` | `S` | `S` |

use serde_json::Value;
use wiregen_core::{FieldType, GeneratorError, GeneratorResult, PrimitiveType};

/// A Java type with both primitive and boxed forms.
#[derive(Debug, Clone, PartialEq)]
pub struct JavaType {
    /// The primitive type name (e.g., "int") or reference type name.
    pub primitive: String,
    /// The boxed type name (e.g., "Integer").
    pub boxed: String,
    /// Whether this type is a primitive.
    pub is_primitive: bool,
}

impl JavaType {
    /// A reference type: same name in both forms.
    pub fn reference(name: &str) -> Self {
        Self {
            primitive: name.to_string(),
            boxed: name.to_string(),
            is_primitive: false,
        }
    }

    pub fn primitive(primitive: &str, boxed: &str) -> Self {
        Self {
            primitive: primitive.to_string(),
            boxed: boxed.to_string(),
            is_primitive: true,
        }
    }

    /// Type to declare a field with.
    ///
    /// Nullable fields need the boxed type so they can hold `null`.
    pub fn declared(&self, nullable: bool) -> &str {
        if nullable && self.is_primitive {
            &self.boxed
        } else {
            &self.primitive
        }
    }
}

/// Map a schema field type to a Java type.
pub fn map_field_type(ty: &FieldType) -> JavaType {
    match ty {
        FieldType::Primitive(p) => map_primitive(*p),
        FieldType::Array(inner) => {
            let inner_type = map_field_type(inner);
            // List elements must always be boxed
            JavaType::reference(&format!("List<{}>", inner_type.boxed))
        }
        FieldType::Struct(name) => JavaType::reference(name),
    }
}

fn map_primitive(p: PrimitiveType) -> JavaType {
    match p {
        PrimitiveType::Bool => JavaType::primitive("boolean", "Boolean"),
        PrimitiveType::Int8 => JavaType::primitive("byte", "Byte"),
        PrimitiveType::Int16 => JavaType::primitive("short", "Short"),
        PrimitiveType::Uint16 | PrimitiveType::Int32 => JavaType::primitive("int", "Integer"),
        PrimitiveType::Uint32 | PrimitiveType::Int64 => JavaType::primitive("long", "Long"),
        PrimitiveType::Float64 => JavaType::primitive("double", "Double"),
        PrimitiveType::String => JavaType::reference("String"),
        PrimitiveType::Bytes | PrimitiveType::Records => JavaType::reference("byte[]"),
        PrimitiveType::Uuid => JavaType::reference("UUID"),
    }
}

/// Imports a field of this type needs.
pub fn required_imports(ty: &FieldType) -> Vec<&'static str> {
    match ty {
        FieldType::Array(inner) => {
            let mut imports = vec!["java.util.ArrayList", "java.util.List"];
            imports.extend(required_imports(inner));
            imports
        }
        FieldType::Primitive(PrimitiveType::Uuid) => vec!["java.util.UUID"],
        FieldType::Primitive(_) | FieldType::Struct(_) => Vec::new(),
    }
}

/// Java expression a field is initialized with.
///
/// Uses the schema `default` when present, otherwise the zero value of the
/// type (`null` for nullable fields).
pub fn initializer(
    field: &str,
    ty: &FieldType,
    nullable: bool,
    default: Option<&Value>,
) -> GeneratorResult<String> {
    match default {
        Some(value) => default_literal(field, ty, nullable, value),
        None if nullable => Ok("null".to_string()),
        None => Ok(zero_value(ty)),
    }
}

fn zero_value(ty: &FieldType) -> String {
    match ty {
        FieldType::Primitive(p) => match p {
            PrimitiveType::Bool => "false".to_string(),
            PrimitiveType::Int8 => "(byte) 0".to_string(),
            PrimitiveType::Int16 => "(short) 0".to_string(),
            PrimitiveType::Uint16 | PrimitiveType::Int32 => "0".to_string(),
            PrimitiveType::Uint32 | PrimitiveType::Int64 => "0L".to_string(),
            PrimitiveType::Float64 => "0.0".to_string(),
            PrimitiveType::String => "\"\"".to_string(),
            PrimitiveType::Bytes | PrimitiveType::Records => "new byte[0]".to_string(),
            PrimitiveType::Uuid => "new UUID(0L, 0L)".to_string(),
        },
        FieldType::Array(_) => "new ArrayList<>()".to_string(),
        FieldType::Struct(name) => format!("new {name}()"),
    }
}

fn default_literal(
    field: &str,
    ty: &FieldType,
    nullable: bool,
    value: &Value,
) -> GeneratorResult<String> {
    let invalid = || GeneratorError::InvalidDefault {
        field: field.to_string(),
        value: value.to_string(),
    };

    // Schemas write most defaults as strings: "-1", "true", "null".
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(_) | Value::Object(_) => return Err(invalid()),
    };

    if text == "null" {
        return if nullable { Ok(text) } else { Err(invalid()) };
    }

    let FieldType::Primitive(p) = ty else {
        return Err(invalid());
    };

    match p {
        PrimitiveType::Bool => match text.as_str() {
            "true" | "false" => Ok(text),
            _ => Err(invalid()),
        },
        PrimitiveType::Float64 => {
            let v: f64 = text.parse().map_err(|_| invalid())?;
            // Java has no NaN or infinity literals.
            if !v.is_finite() {
                return Err(invalid());
            }
            Ok(format!("{v:?}"))
        }
        PrimitiveType::String => {
            if matches!(value, Value::String(_)) {
                Ok(format!("\"{}\"", escape_java(&text)))
            } else {
                Err(invalid())
            }
        }
        p if p.is_numeric() => {
            let v = parse_integer(&text).ok_or_else(invalid)?;
            let (min, max) = integer_bounds(*p);
            if v < min || v > max {
                return Err(invalid());
            }
            Ok(match p {
                PrimitiveType::Int8 => format!("(byte) {v}"),
                PrimitiveType::Int16 => format!("(short) {v}"),
                PrimitiveType::Uint32 | PrimitiveType::Int64 => format!("{v}L"),
                _ => v.to_string(),
            })
        }
        _ => Err(invalid()),
    }
}

fn parse_integer(text: &str) -> Option<i64> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    // The radix parsers accept a sign of their own.
    if digits.starts_with(['+', '-']) {
        return None;
    }
    let magnitude = match digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        Some(hex) if !hex.starts_with(['+', '-']) => i128::from_str_radix(hex, 16).ok()?,
        Some(_) => return None,
        None => digits.parse::<i128>().ok()?,
    };
    let value = if negative { magnitude.checked_neg()? } else { magnitude };
    i64::try_from(value).ok()
}

fn integer_bounds(p: PrimitiveType) -> (i64, i64) {
    match p {
        PrimitiveType::Int8 => (i8::MIN.into(), i8::MAX.into()),
        PrimitiveType::Int16 => (i16::MIN.into(), i16::MAX.into()),
        PrimitiveType::Uint16 => (0, u16::MAX.into()),
        PrimitiveType::Int32 => (i32::MIN.into(), i32::MAX.into()),
        PrimitiveType::Uint32 => (0, u32::MAX.into()),
        _ => (i64::MIN, i64::MAX),
    }
}

/// Escape a string for use inside a Java string literal.
pub fn escape_java(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "true", "false", "null",
];

/// Make an identifier safe to declare, suffixing reserved words with `_`.
pub fn safe_identifier(name: &str) -> String {
    if JAVA_KEYWORDS.contains(&name) {
        format!("{name}_")
    } else {
        name.to_string()
    }
}
