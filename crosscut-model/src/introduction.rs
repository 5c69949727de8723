//! The aggregate description of one inter-type declaration unit.

use crate::annotation::{AnnotationSpec, FieldAnnotation, MethodAnnotation};
use crate::members::{ConstructorSpec, FieldSpec, MethodSpec};
use crate::types::TypeReference;

/// Everything one aspect introduces into one target type.
///
/// Built fluently and then handed, read-only, to the composer. All member
/// sequences preserve insertion order; that order is the emission order.
///
/// # Panics
///
/// [`IntroductionSpec::new`] panics when the target and aspect are not in the
/// same package. The composer depends on that identity: the target is always
/// written by simple name.
///
/// # Example
///
/// ```
/// use crosscut_model::{FieldSpec, IntroductionSpec, Modifier, TypeReference};
///
/// let spec = IntroductionSpec::new(
///     TypeReference::new("com.acme.Widget"),
///     TypeReference::new("com.acme.Widget_Roo_Jpa"),
/// )
/// .field(
///     FieldSpec::new(TypeReference::new("java.lang.Long"), "id").modifier(Modifier::Private),
/// );
/// assert_eq!(spec.fields.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct IntroductionSpec {
    /// The type receiving the introduced members.
    pub target: TypeReference,
    /// The aspect declaring them.
    pub aspect: TypeReference,
    pub privileged: bool,
    /// Imports seeded into the resolver before emission, applied only when
    /// legally addable.
    pub registered_imports: Vec<TypeReference>,
    pub extends_types: Vec<TypeReference>,
    pub implements_types: Vec<TypeReference>,
    pub type_annotations: Vec<AnnotationSpec>,
    pub field_annotations: Vec<FieldAnnotation>,
    pub method_annotations: Vec<MethodAnnotation>,
    pub fields: Vec<FieldSpec>,
    pub constructors: Vec<ConstructorSpec>,
    pub methods: Vec<MethodSpec>,
}

impl IntroductionSpec {
    /// Create an empty introduction for `target`, declared by `aspect`.
    pub fn new(target: TypeReference, aspect: TypeReference) -> Self {
        assert_eq!(
            target.package(),
            aspect.package(),
            "aspect and introduction target must be in identical packages"
        );
        Self {
            target,
            aspect,
            privileged: false,
            registered_imports: Vec::new(),
            extends_types: Vec::new(),
            implements_types: Vec::new(),
            type_annotations: Vec::new(),
            field_annotations: Vec::new(),
            method_annotations: Vec::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Mark the aspect as privileged.
    pub fn privileged(mut self) -> Self {
        self.privileged = true;
        self
    }

    /// Pre-register an import.
    pub fn register_import(mut self, ty: TypeReference) -> Self {
        self.registered_imports.push(ty);
        self
    }

    /// Declare a supertype via `declare parents: ... extends`.
    pub fn extend(mut self, ty: TypeReference) -> Self {
        self.extends_types.push(ty);
        self
    }

    /// Declare an interface via `declare parents: ... implements`.
    pub fn implement(mut self, ty: TypeReference) -> Self {
        self.implements_types.push(ty);
        self
    }

    /// Declare an annotation on the target type itself.
    pub fn type_annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.type_annotations.push(annotation);
        self
    }

    /// Declare an annotation on an existing field of the target.
    pub fn field_annotation(mut self, annotation: FieldAnnotation) -> Self {
        self.field_annotations.push(annotation);
        self
    }

    /// Declare an annotation on an existing method of the target.
    pub fn method_annotation(mut self, annotation: MethodAnnotation) -> Self {
        self.method_annotations.push(annotation);
        self
    }

    /// Introduce a field.
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Introduce a constructor.
    pub fn constructor(mut self, constructor: ConstructorSpec) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Introduce a method.
    pub fn method(mut self, method: MethodSpec) -> Self {
        self.methods.push(method);
        self
    }
}
