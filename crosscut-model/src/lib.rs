//! Metadata model for inter-type declarations.
//!
//! This crate describes the members an aspect introduces into a target type:
//! type references, fields, constructors, methods, annotation payloads, and
//! the [`IntroductionSpec`] aggregate that ties one ITD unit together.
//!
//! The model is pure data. Rendering it to AspectJ source text is the job of
//! the `crosscut-compose` crate.

pub mod annotation;
pub mod introduction;
pub mod members;
pub mod types;

pub use annotation::{AnnotationAttribute, AnnotationSpec, FieldAnnotation, MethodAnnotation};
pub use introduction::IntroductionSpec;
pub use members::{
    ConstructorSpec, FieldSpec, MethodSignature, MethodSpec, Modifier, ParameterSpec,
};
pub use types::{TypeParseError, TypeReference};
