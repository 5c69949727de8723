//! The fixed emission pipeline that renders one [`IntroductionSpec`] to
//! inter-type declaration source text.

use crosscut_model::{IntroductionSpec, Modifier, ParameterSpec, TypeReference};

use crate::annotation::annotation_source;
use crate::buffer::EmissionBuffer;
use crate::imports::ImportResolver;
use crate::indent::Indent;

/// Renders an [`IntroductionSpec`] into AspectJ inter-type declaration text.
///
/// Construction performs the entire emission: a single forward pass over the
/// member lists appends the body while the resolver accumulates the import
/// list, and the package/import header is spliced in front of the body last,
/// from the final resolver state. There is no separate run step.
///
/// # Panics
///
/// Construction panics on input-contract violations: target and aspect in
/// different packages, or the body ending at an indent depth other than one.
/// These indicate upstream bugs in an already-validated object graph and are
/// not recoverable.
///
/// # Example
///
/// ```
/// use crosscut_compose::ItdComposer;
/// use crosscut_model::{FieldSpec, IntroductionSpec, Modifier, TypeReference};
///
/// let spec = IntroductionSpec::new(
///     TypeReference::new("com.acme.Widget"),
///     TypeReference::new("com.acme.Widget_Roo_Jpa"),
/// )
/// .field(FieldSpec::new(TypeReference::new("java.lang.Long"), "id").modifier(Modifier::Private));
///
/// let composer = ItdComposer::new(&spec);
/// assert!(composer.has_content());
/// assert!(composer.output().contains("private Long Widget.id;"));
/// ```
#[derive(Debug)]
pub struct ItdComposer {
    output: String,
    content: bool,
}

impl ItdComposer {
    /// Compose the full source text for `spec`.
    pub fn new(spec: &IntroductionSpec) -> Self {
        let mut emission = Emission {
            spec,
            buffer: EmissionBuffer::new(Indent::ASPECTJ),
            resolver: ImportResolver::new(spec.aspect.package()),
            content: false,
        };
        emission.run();

        let Emission {
            buffer,
            resolver,
            content,
            ..
        } = emission;
        let output = splice_header(&spec.aspect, &resolver, &buffer.build());
        Self { output, content }
    }

    /// The complete source text: package statement, sorted imports, body.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Consume the composer and return the source text.
    pub fn into_output(self) -> String {
        self.output
    }

    /// True when at least one member, annotation, or supertype section
    /// produced output. The declaration shell and closing brace never count:
    /// callers use this to discard ITDs that would be no-op shells.
    pub fn has_content(&self) -> bool {
        self.content
    }
}

/// Per-emission working state: the spec slice being read, the buffer and
/// resolver being written, and the phase-scoped content flag.
struct Emission<'a> {
    spec: &'a IntroductionSpec,
    buffer: EmissionBuffer,
    resolver: ImportResolver,
    content: bool,
}

impl Emission<'_> {
    fn run(&mut self) {
        self.seed_imports();
        self.type_declaration();
        self.parent_declarations();
        self.type_annotation_declarations();
        self.field_annotation_declarations();
        self.method_annotation_declarations();
        self.field_declarations();
        self.constructor_declarations();
        self.method_declarations();
        self.terminator();
    }

    /// Apply pre-registered imports, skipping any that would collide or that
    /// need no import at all.
    fn seed_imports(&mut self) {
        let spec = self.spec;
        for import in &spec.registered_imports {
            if self.resolver.is_addition_legal(import) {
                self.resolver.add_import(import);
            }
        }
    }

    fn type_declaration(&mut self) {
        let spec = self.spec;
        assert_eq!(
            spec.target.package(),
            spec.aspect.package(),
            "aspect and introduction target must be in identical packages"
        );

        let keyword = if spec.privileged { "privileged " } else { "" };
        self.buffer
            .line(&format!("{}aspect {} {{", keyword, spec.aspect.simple_name()));
        self.buffer.indent();
        self.buffer.blank();
    }

    fn parent_declarations(&mut self) {
        let spec = self.spec;
        self.parents("extends", &spec.extends_types);
        self.parents("implements", &spec.implements_types);
    }

    fn parents(&mut self, relation: &str, types: &[TypeReference]) {
        if types.is_empty() {
            return;
        }
        self.content = true;

        let target = self.spec.target.simple_name();
        for ty in types {
            let rendered = self.resolver.render_type(ty);
            self.buffer
                .line(&format!("declare parents: {} {} {};", target, relation, rendered));
            self.buffer.blank();
        }
    }

    fn type_annotation_declarations(&mut self) {
        let spec = self.spec;
        if spec.type_annotations.is_empty() {
            return;
        }
        self.content = true;

        for annotation in &spec.type_annotations {
            let rendered = annotation_source(annotation, Some(&mut self.resolver));
            self.buffer.line(&format!(
                "declare @type: {}: {};",
                spec.target.simple_name(),
                rendered
            ));
            self.buffer.blank();
        }
    }

    fn field_annotation_declarations(&mut self) {
        let spec = self.spec;
        if spec.field_annotations.is_empty() {
            return;
        }
        self.content = true;

        for declared in &spec.field_annotations {
            let rendered = annotation_source(&declared.annotation, Some(&mut self.resolver));
            self.buffer.line(&format!(
                "declare @field: * {}.{}: {};",
                spec.target.simple_name(),
                declared.field,
                rendered
            ));
            self.buffer.blank();
        }
    }

    fn method_annotation_declarations(&mut self) {
        let spec = self.spec;
        if spec.method_annotations.is_empty() {
            return;
        }
        self.content = true;

        for declared in &spec.method_annotations {
            let signature = &declared.method;
            let mut line = String::from("declare @method: ");
            if !signature.modifiers.is_empty() {
                line.push_str(&Modifier::join(&signature.modifiers));
                line.push(' ');
            }
            line.push_str(&self.resolver.render_type(&signature.return_type));
            line.push(' ');
            line.push_str(spec.target.simple_name());
            line.push('.');
            line.push_str(&signature.name);
            line.push('(');
            let parameter_types: Vec<String> = signature
                .parameter_types
                .iter()
                .map(|ty| self.resolver.render_type(ty))
                .collect();
            line.push_str(&parameter_types.join(","));
            line.push_str("): ");
            line.push_str(&annotation_source(&declared.annotation, Some(&mut self.resolver)));
            line.push(';');

            self.buffer.line(&line);
            self.buffer.blank();
        }
    }

    fn field_declarations(&mut self) {
        let spec = self.spec;
        if spec.fields.is_empty() {
            return;
        }
        self.content = true;

        for field in &spec.fields {
            for annotation in &field.annotations {
                let rendered = annotation_source(annotation, Some(&mut self.resolver));
                self.buffer.line(&rendered);
            }

            let mut line = String::new();
            if !field.modifiers.is_empty() {
                line.push_str(&Modifier::join(&field.modifiers));
                line.push(' ');
            }
            line.push_str(&self.resolver.render_type(&field.ty));
            line.push(' ');
            line.push_str(spec.target.simple_name());
            line.push('.');
            line.push_str(&field.name);
            if let Some(initializer) = &field.initializer {
                line.push_str(" = ");
                line.push_str(initializer);
            }
            line.push(';');

            self.buffer.line(&line);
            self.buffer.blank();
        }
    }

    fn constructor_declarations(&mut self) {
        let spec = self.spec;
        if spec.constructors.is_empty() {
            return;
        }
        self.content = true;

        for constructor in &spec.constructors {
            for annotation in &constructor.annotations {
                let rendered = annotation_source(annotation, Some(&mut self.resolver));
                self.buffer.line(&rendered);
            }

            let mut line = String::new();
            if !constructor.modifiers.is_empty() {
                line.push_str(&Modifier::join(&constructor.modifiers));
                line.push(' ');
            }
            line.push_str(spec.target.simple_name());
            line.push_str(".new(");
            line.push_str(&self.parameter_list(&constructor.parameters));
            line.push_str(") {");

            self.buffer.line(&line);
            self.buffer.indent();
            self.buffer.append(&constructor.body);
            self.buffer.dedent();
            self.buffer.line("}");
            self.buffer.blank();
        }
    }

    fn method_declarations(&mut self) {
        let spec = self.spec;
        if spec.methods.is_empty() {
            return;
        }
        self.content = true;

        for method in &spec.methods {
            for annotation in &method.annotations {
                let rendered = annotation_source(annotation, Some(&mut self.resolver));
                self.buffer.line(&rendered);
            }

            let mut line = String::new();
            if !method.modifiers.is_empty() {
                line.push_str(&Modifier::join(&method.modifiers));
                line.push(' ');
            }
            line.push_str(&self.resolver.render_type(&method.return_type));
            line.push(' ');
            line.push_str(spec.target.simple_name());
            line.push('.');
            line.push_str(&method.name);
            line.push('(');
            line.push_str(&self.parameter_list(&method.parameters));
            if method.throws.is_empty() {
                line.push_str(") {");
            } else {
                line.push_str(") throws ");
                let thrown: Vec<String> = method
                    .throws
                    .iter()
                    .map(|ty| self.resolver.render_type(ty))
                    .collect();
                line.push_str(&thrown.join(", "));
                line.push_str(" {");
            }

            self.buffer.line(&line);
            self.buffer.indent();
            self.buffer.append(&method.body);
            self.buffer.dedent();
            self.buffer.line("}");
            self.buffer.blank();
        }
    }

    /// Render `[@Anno ]Type name` parameters, comma-space separated.
    /// Parameter annotations are resolver-aware and may register imports.
    fn parameter_list(&mut self, parameters: &[ParameterSpec]) -> String {
        let mut parts = Vec::with_capacity(parameters.len());
        for parameter in parameters {
            let mut part = String::new();
            for annotation in &parameter.annotations {
                part.push_str(&annotation_source(annotation, Some(&mut self.resolver)));
                part.push(' ');
            }
            part.push_str(&self.resolver.render_type(&parameter.ty));
            part.push(' ');
            part.push_str(&parameter.name);
            parts.push(part);
        }
        parts.join(", ")
    }

    fn terminator(&mut self) {
        assert_eq!(
            self.buffer.depth(),
            1,
            "indent depth must be 1 to conclude the aspect body"
        );
        self.buffer.dedent();
        self.buffer.line("}");
    }
}

/// Build the package/import header from the final resolver state and place it
/// in front of the body. The header must be built after the body: imports are
/// discovered while the body is written.
fn splice_header(aspect: &TypeReference, resolver: &ImportResolver, body: &str) -> String {
    let mut output = String::new();
    if !aspect.package().is_empty() {
        output.push_str("package ");
        output.push_str(aspect.package());
        output.push_str(";\n\n");
    }

    let imports = resolver.sorted_imports();
    if !imports.is_empty() {
        for import in &imports {
            output.push_str("import ");
            output.push_str(import.fully_qualified_name());
            output.push_str(";\n");
        }
        output.push('\n');
    }

    output.push_str(body);
    output
}
