//! Message name conventions and identifier case conversion.
//!
//! Every message name ends in `Request`, `Response` or `Header`. The part in
//! front of the suffix is the *family*: the protocol call shared by a request
//! and its response, used for the output package and directory. Header
//! messages keep the suffix so that `RequestHeader` and `ResponseHeader` get
//! families of their own.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `FetchRequest` | [`resolve_name`] | family `Fetch` |
//! | `RequestHeader` | [`resolve_name`] | family `RequestHeader`, header |
//! | `TimeoutMs` / `timeout_ms` | [`to_camel_case`] | `timeoutMs` |
//! | `word` | [`capitalize`] | `Word` |
//! | `RequestHeader` | [`to_package_segment`] | `requestheader` |

use crate::error::{GeneratorError, GeneratorResult};

const HEADER_SUFFIX: &str = "Header";
const NAME_SUFFIXES: [&str; 3] = ["Request", "Response", HEADER_SUFFIX];

/// Family name and header flag derived from a message name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    pub family: String,
    pub is_header: bool,
}

/// Split a declared message name into its family and header flag.
///
/// # Examples
///
/// ```
/// use wiregen_core::naming::resolve_name;
///
/// let fetch = resolve_name("FetchRequest").unwrap();
/// assert_eq!(fetch.family, "Fetch");
/// assert!(!fetch.is_header);
///
/// let header = resolve_name("RequestHeader").unwrap();
/// assert_eq!(header.family, "RequestHeader");
/// assert!(header.is_header);
///
/// assert!(resolve_name("Widget").is_err());
/// ```
pub fn resolve_name(declared: &str) -> GeneratorResult<ResolvedName> {
    for suffix in NAME_SUFFIXES {
        let Some(prefix) = declared.strip_suffix(suffix) else {
            continue;
        };
        if prefix.is_empty() {
            break;
        }

        let is_header = suffix == HEADER_SUFFIX;
        let family = if is_header {
            format!("{prefix}{HEADER_SUFFIX}")
        } else {
            prefix.to_string()
        };
        return Ok(ResolvedName { family, is_header });
    }

    Err(GeneratorError::InvalidName(declared.to_string()))
}

/// Convert a schema field name to a camelCase Java identifier.
///
/// Accepts PascalCase (`TimeoutMs`), snake_case (`timeout_ms`) and input that
/// is already camelCase.
///
/// # Examples
///
/// ```
/// use wiregen_core::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("TimeoutMs"), "timeoutMs");
/// assert_eq!(to_camel_case("timeout_ms"), "timeoutMs");
/// assert_eq!(to_camel_case("already"), "already");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = false;

    for c in s.chars() {
        if c == '_' {
            capitalize_next = !result.is_empty();
        } else if result.is_empty() {
            result.extend(c.to_lowercase());
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Capitalize the first letter of a string.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Package segment for a family: Java packages are lower case.
pub fn to_package_segment(family: &str) -> String {
    family.to_ascii_lowercase()
}

/// Whether `s` is usable as a Java identifier.
pub fn is_java_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}
