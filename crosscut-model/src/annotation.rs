//! Annotation payloads and the records that target existing members.
//!
//! Attribute values are carried as pre-rendered source text; anything more
//! structured than a flat name/value list is rendered by the caller before it
//! reaches this model.

use crate::members::MethodSignature;
use crate::types::TypeReference;

/// One `name = value` attribute of an annotation, value as source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationAttribute {
    pub name: String,
    pub value: String,
}

impl AnnotationAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An annotation payload: the annotation type plus a flat attribute list.
///
/// # Example
///
/// ```
/// use crosscut_model::{AnnotationSpec, TypeReference};
///
/// let annotation = AnnotationSpec::new(TypeReference::new("javax.persistence.Column"))
///     .attribute("name", "\"widget_id\"");
/// assert_eq!(annotation.attributes.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct AnnotationSpec {
    pub ty: TypeReference,
    pub attributes: Vec<AnnotationAttribute>,
}

impl AnnotationSpec {
    /// Create an annotation with no attributes.
    pub fn new(ty: TypeReference) -> Self {
        Self {
            ty,
            attributes: Vec::new(),
        }
    }

    /// Append an attribute with a pre-rendered value.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(AnnotationAttribute::new(name, value));
        self
    }
}

/// An annotation declared onto an existing field of the target type.
#[derive(Debug, Clone)]
pub struct FieldAnnotation {
    /// Name of the field receiving the annotation.
    pub field: String,
    pub annotation: AnnotationSpec,
}

impl FieldAnnotation {
    pub fn new(field: impl Into<String>, annotation: AnnotationSpec) -> Self {
        Self {
            field: field.into(),
            annotation,
        }
    }
}

/// An annotation declared onto an existing method of the target type.
#[derive(Debug, Clone)]
pub struct MethodAnnotation {
    pub method: MethodSignature,
    pub annotation: AnnotationSpec,
}

impl MethodAnnotation {
    pub fn new(method: MethodSignature, annotation: AnnotationSpec) -> Self {
        Self { method, annotation }
    }
}
