//! Rendering annotation payloads to declaration source text.

use crosscut_model::AnnotationSpec;

use crate::imports::ImportResolver;

/// Render an annotation to its declaration form: `@Name` or
/// `@Name(attr = value, ...)`.
///
/// With a resolver, the annotation type is qualification-aware and may
/// register an import; without one it prints fully qualified. Attribute
/// values are emitted verbatim — they arrive as pre-rendered source text.
pub fn annotation_source(
    annotation: &AnnotationSpec,
    resolver: Option<&mut ImportResolver>,
) -> String {
    let name = match resolver {
        Some(resolver) => resolver.render_type(&annotation.ty),
        None => annotation.ty.fully_qualified_with_parameters(),
    };
    let mut rendered = format!("@{}", name);
    if !annotation.attributes.is_empty() {
        let attributes: Vec<String> = annotation
            .attributes
            .iter()
            .map(|attribute| format!("{} = {}", attribute.name, attribute.value))
            .collect();
        rendered.push('(');
        rendered.push_str(&attributes.join(", "));
        rendered.push(')');
    }
    rendered
}
