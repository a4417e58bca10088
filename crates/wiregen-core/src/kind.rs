//! Message kinds

use crate::error::{GeneratorError, GeneratorResult};
use crate::naming::{ResolvedName, resolve_name};
use std::fmt;

/// The four kinds of protocol message a schema can describe.
///
/// Derived once from the declared name and `type`; everything downstream
/// matches on this instead of comparing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Request,
    Response,
    RequestHeader,
    ResponseHeader,
}

impl MessageKind {
    /// Resolve the kind and family of a message from its schema `name` and `type`.
    pub fn resolve(name: &str, declared_type: &str) -> GeneratorResult<(MessageKind, ResolvedName)> {
        let resolved = resolve_name(name)?;

        let kind = match declared_type {
            "request" => MessageKind::Request,
            "response" => MessageKind::Response,
            "header" => match name {
                "RequestHeader" => MessageKind::RequestHeader,
                "ResponseHeader" => MessageKind::ResponseHeader,
                _ => return Err(GeneratorError::InvalidName(name.to_string())),
            },
            other => return Err(GeneratorError::UnknownMessageKind(other.to_string())),
        };

        Ok((kind, resolved))
    }

    /// Runtime base class the generated message extends.
    pub fn base_class(&self) -> &'static str {
        match self {
            MessageKind::Request => "AbstractRequest",
            MessageKind::Response => "AbstractResponse",
            MessageKind::RequestHeader => "AbstractRequestHeader",
            MessageKind::ResponseHeader => "AbstractResponseHeader",
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, MessageKind::RequestHeader | MessageKind::ResponseHeader)
    }

    /// Whether messages of this kind carry an API key.
    pub fn has_api_key(&self) -> bool {
        matches!(self, MessageKind::Request | MessageKind::Response)
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::Request => write!(f, "request"),
            MessageKind::Response => write!(f, "response"),
            MessageKind::RequestHeader => write!(f, "request header"),
            MessageKind::ResponseHeader => write!(f, "response header"),
        }
    }
}
