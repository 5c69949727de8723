//! Member metadata: modifiers, fields, constructors, and methods.

use std::fmt;

use crate::annotation::AnnotationSpec;
use crate::types::TypeReference;

/// A Java member modifier keyword.
///
/// Modifier lists render space-joined in the order the caller supplied them;
/// an empty list contributes nothing to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Static,
    Final,
    Synchronized,
    Transient,
    Volatile,
    Native,
}

impl Modifier {
    /// The source-text keyword for this modifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Abstract => "abstract",
            Modifier::Static => "static",
            Modifier::Final => "final",
            Modifier::Synchronized => "synchronized",
            Modifier::Transient => "transient",
            Modifier::Volatile => "volatile",
            Modifier::Native => "native",
        }
    }

    /// Join a modifier list into source text, empty for an empty list.
    pub fn join(modifiers: &[Modifier]) -> String {
        modifiers
            .iter()
            .map(Modifier::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field to introduce into the target type.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub modifiers: Vec<Modifier>,
    pub ty: TypeReference,
    pub name: String,
    pub initializer: Option<String>,
    pub annotations: Vec<AnnotationSpec>,
}

impl FieldSpec {
    /// Create a field with no modifiers, initializer, or annotations.
    pub fn new(ty: TypeReference, name: impl Into<String>) -> Self {
        Self {
            modifiers: Vec::new(),
            ty,
            name: name.into(),
            initializer: None,
            annotations: Vec::new(),
        }
    }

    /// Append a modifier.
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Set the initializer expression text.
    pub fn initializer(mut self, text: impl Into<String>) -> Self {
        self.initializer = Some(text.into());
        self
    }

    /// Append an annotation.
    pub fn annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// A constructor or method parameter: annotations, type, and name together.
///
/// Pairing the type and name in one record keeps the two in lockstep by
/// construction, so no separate length check is needed before emission.
#[derive(Debug, Clone)]
pub struct ParameterSpec {
    pub annotations: Vec<AnnotationSpec>,
    pub ty: TypeReference,
    pub name: String,
}

impl ParameterSpec {
    /// Create an unannotated parameter.
    pub fn new(ty: TypeReference, name: impl Into<String>) -> Self {
        Self {
            annotations: Vec::new(),
            ty,
            name: name.into(),
        }
    }

    /// Append an annotation.
    pub fn annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// A constructor to introduce into the target type.
#[derive(Debug, Clone, Default)]
pub struct ConstructorSpec {
    pub modifiers: Vec<Modifier>,
    pub parameters: Vec<ParameterSpec>,
    pub annotations: Vec<AnnotationSpec>,
    /// Body text appended verbatim between the braces.
    pub body: String,
}

impl ConstructorSpec {
    /// Create an empty constructor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a modifier.
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Append a parameter.
    pub fn parameter(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Append an annotation.
    pub fn annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Set the body text.
    pub fn body(mut self, text: impl Into<String>) -> Self {
        self.body = text.into();
        self
    }
}

/// A method to introduce into the target type.
#[derive(Debug, Clone)]
pub struct MethodSpec {
    pub modifiers: Vec<Modifier>,
    pub return_type: TypeReference,
    pub name: String,
    pub parameters: Vec<ParameterSpec>,
    pub throws: Vec<TypeReference>,
    pub annotations: Vec<AnnotationSpec>,
    /// Body text appended verbatim between the braces.
    pub body: String,
}

impl MethodSpec {
    /// Create a method with no modifiers, parameters, or body.
    pub fn new(return_type: TypeReference, name: impl Into<String>) -> Self {
        Self {
            modifiers: Vec::new(),
            return_type,
            name: name.into(),
            parameters: Vec::new(),
            throws: Vec::new(),
            annotations: Vec::new(),
            body: String::new(),
        }
    }

    /// Append a modifier.
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Append a parameter.
    pub fn parameter(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Append a thrown exception type.
    pub fn throws(mut self, ty: TypeReference) -> Self {
        self.throws.push(ty);
        self
    }

    /// Append an annotation.
    pub fn annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Set the body text.
    pub fn body(mut self, text: impl Into<String>) -> Self {
        self.body = text.into();
        self
    }
}

/// The descriptor of an existing method, as used by `declare @method`.
#[derive(Debug, Clone)]
pub struct MethodSignature {
    pub modifiers: Vec<Modifier>,
    pub return_type: TypeReference,
    pub name: String,
    pub parameter_types: Vec<TypeReference>,
}

impl MethodSignature {
    /// Create a signature with no modifiers or parameters.
    pub fn new(return_type: TypeReference, name: impl Into<String>) -> Self {
        Self {
            modifiers: Vec::new(),
            return_type,
            name: name.into(),
            parameter_types: Vec::new(),
        }
    }

    /// Append a modifier.
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Append a parameter type.
    pub fn parameter_type(mut self, ty: TypeReference) -> Self {
        self.parameter_types.push(ty);
        self
    }
}
