//! Intermediate representation for generated classes.
//!
//! Generators build a [`ClassSpec`] describing *what* a class contains:
//! members, constructor statements and methods as data. The [`render`]
//! module turns it into source text in one pass, so nothing that resolves
//! versions or names ever concatenates Java.
//!
//! # Structure
//!
//! - [`ClassSpec`]: one output class with its package, base class and imports
//! - [`Member`]: a field declaration with an initializer
//! - [`Method`]: a method signature and body
//!
//! [`render`]: crate::render

use std::collections::BTreeSet;

/// A class to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassSpec {
    /// Package the class lives in.
    pub package: String,

    /// Simple class name.
    pub name: String,

    /// Simple name of the class this one extends.
    pub base_class: String,

    /// Fully qualified imports, kept sorted.
    pub imports: BTreeSet<String>,

    /// Class documentation lines.
    pub docs: Vec<String>,

    /// Field declarations in schema order.
    pub members: Vec<Member>,

    /// Statements of the no-argument constructor.
    ///
    /// A statement may span several lines; each line is indented on render.
    pub constructor: Vec<String>,

    /// Accessors followed by supplemental methods.
    pub methods: Vec<Method>,
}

/// A field declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub name: String,
    pub java_type: String,
    pub initializer: String,
    pub docs: Vec<String>,
}

/// A method declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    pub name: String,

    /// Return type, `void` for none.
    pub return_type: String,

    /// Parameters as `(type, name)` pairs.
    pub params: Vec<(String, String)>,

    /// Body lines without indentation.
    pub body: Vec<String>,

    pub docs: Vec<String>,

    /// Whether the method overrides a base class method.
    pub is_override: bool,
}

impl ClassSpec {
    /// Create an empty class extending `base_class`.
    pub fn new(
        package: impl Into<String>,
        name: impl Into<String>,
        base_class: impl Into<String>,
    ) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
            base_class: base_class.into(),
            imports: BTreeSet::new(),
            docs: Vec::new(),
            members: Vec::new(),
            constructor: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn import(&mut self, path: impl Into<String>) {
        self.imports.insert(path.into());
    }

    /// Find a method by name.
    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Find a member by name.
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name == name)
    }
}

impl Method {
    /// A method without parameters.
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            params: Vec::new(),
            body: Vec::new(),
            docs: Vec::new(),
            is_override: false,
        }
    }

    /// A method whose body is a single `return` statement.
    pub fn returning(
        name: impl Into<String>,
        return_type: impl Into<String>,
        expression: impl AsRef<str>,
    ) -> Self {
        Self::new(name, return_type).with_body(format!("return {};", expression.as_ref()))
    }

    pub fn with_param(mut self, ty: impl Into<String>, name: impl Into<String>) -> Self {
        self.params.push((ty.into(), name.into()));
        self
    }

    pub fn with_body(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    pub fn with_docs(mut self, docs: Vec<String>) -> Self {
        self.docs = docs;
        self
    }

    pub fn overriding(mut self) -> Self {
        self.is_override = true;
        self
    }
}
