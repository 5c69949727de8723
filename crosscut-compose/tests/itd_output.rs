//! Whole-file output tests for the ITD composer.
//!
//! Byte-for-byte stability is part of the output contract, so these tests
//! pin complete files. Run `cargo insta review` after intentional changes.

use crosscut_compose::ItdComposer;
use crosscut_model::{
    AnnotationSpec, ConstructorSpec, FieldSpec, IntroductionSpec, MethodSpec, Modifier,
    ParameterSpec, TypeReference,
};

#[test]
fn jpa_style_entity_itd() {
    let spec = IntroductionSpec::new(
        TypeReference::new("com.acme.Widget"),
        TypeReference::new("com.acme.Widget_Roo_Jpa"),
    )
    .privileged()
    .implement(TypeReference::new("java.io.Serializable"))
    .type_annotation(AnnotationSpec::new(TypeReference::new(
        "javax.persistence.Entity",
    )))
    .field(
        FieldSpec::new(TypeReference::new("java.lang.Long"), "id")
            .modifier(Modifier::Private)
            .annotation(AnnotationSpec::new(TypeReference::new(
                "javax.persistence.Id",
            )))
            .annotation(
                AnnotationSpec::new(TypeReference::new("javax.persistence.GeneratedValue"))
                    .attribute("strategy", "GenerationType.AUTO"),
            ),
    )
    .method(
        MethodSpec::new(TypeReference::new("java.lang.Long"), "getId")
            .modifier(Modifier::Public)
            .body("        return this.id;\n"),
    );

    let composer = ItdComposer::new(&spec);
    assert!(composer.has_content());
    insta::assert_snapshot!(composer.output(), @r"
    package com.acme;

    import java.io.Serializable;
    import javax.persistence.Entity;
    import javax.persistence.GeneratedValue;
    import javax.persistence.Id;

    privileged aspect Widget_Roo_Jpa {

        declare parents: Widget implements Serializable;

        declare @type: Widget: @Entity;

        @Id
        @GeneratedValue(strategy = GenerationType.AUTO)
        private Long Widget.id;

        public Long Widget.getId() {
            return this.id;
        }

    }
    ");
}

#[test]
fn simple_name_collision_prints_fully_qualified() {
    let spec = IntroductionSpec::new(
        TypeReference::new("com.acme.Report"),
        TypeReference::new("com.acme.Report_Roo_Dates"),
    )
    .field(FieldSpec::new(TypeReference::new("java.util.Date"), "created").modifier(Modifier::Private))
    .field(FieldSpec::new(TypeReference::new("java.sql.Date"), "imported").modifier(Modifier::Private))
    .method(
        MethodSpec::new(TypeReference::new("void"), "reset")
            .modifier(Modifier::Public)
            .parameter(ParameterSpec::new(TypeReference::new("java.util.Date"), "when"))
            .body("        this.created = when;\n"),
    );

    let composer = ItdComposer::new(&spec);
    insta::assert_snapshot!(composer.output(), @r"
    package com.acme;

    import java.util.Date;

    aspect Report_Roo_Dates {

        private Date Report.created;

        private java.sql.Date Report.imported;

        public void Report.reset(Date when) {
            this.created = when;
        }

    }
    ");
}

#[test]
fn constructor_with_annotated_parameters() {
    let spec = IntroductionSpec::new(
        TypeReference::new("com.acme.Order"),
        TypeReference::new("com.acme.Order_Roo_Constructor"),
    )
    .constructor(
        ConstructorSpec::new()
            .modifier(Modifier::Public)
            .parameter(
                ParameterSpec::new(TypeReference::new("java.lang.String"), "code").annotation(
                    AnnotationSpec::new(TypeReference::new(
                        "javax.validation.constraints.NotNull",
                    )),
                ),
            )
            .parameter(ParameterSpec::new(
                TypeReference::new("java.math.BigDecimal"),
                "total",
            ))
            .body("        this.code = code;\n        this.total = total;\n"),
    );

    let composer = ItdComposer::new(&spec);
    insta::assert_snapshot!(composer.output(), @r"
    package com.acme;

    import java.math.BigDecimal;
    import javax.validation.constraints.NotNull;

    aspect Order_Roo_Constructor {

        public Order.new(@NotNull String code, BigDecimal total) {
            this.code = code;
            this.total = total;
        }

    }
    ");
}

#[test]
fn empty_introduction_has_no_content() {
    let spec = IntroductionSpec::new(
        TypeReference::new("com.acme.Widget"),
        TypeReference::new("com.acme.Widget_Roo_Jpa"),
    );
    let composer = ItdComposer::new(&spec);

    assert_eq!(
        composer.output(),
        "package com.acme;\n\naspect Widget_Roo_Jpa {\n\n}\n"
    );
    assert!(!composer.has_content());
}

#[test]
fn emitting_twice_is_byte_identical() {
    let spec = IntroductionSpec::new(
        TypeReference::new("com.acme.Widget"),
        TypeReference::new("com.acme.Widget_Roo_Jpa"),
    )
    .extend(TypeReference::new("com.acme.Base"))
    .field(FieldSpec::new(TypeReference::new("java.util.Date"), "created"))
    .method(
        MethodSpec::new(TypeReference::new("java.util.Date"), "getCreated")
            .modifier(Modifier::Public)
            .body("        return this.created;\n"),
    );

    assert_eq!(
        ItdComposer::new(&spec).output(),
        ItdComposer::new(&spec).output()
    );
}

#[test]
fn generic_field_types_register_all_imports() {
    let spec = IntroductionSpec::new(
        TypeReference::new("com.acme.Widget"),
        TypeReference::new("com.acme.Widget_Roo_Children"),
    )
    .field(FieldSpec::new(
        TypeReference::parameterized(
            "java.util.Map",
            [
                TypeReference::new("java.lang.String"),
                TypeReference::parameterized(
                    "java.util.List",
                    [TypeReference::new("com.acme.Widget")],
                ),
            ],
        ),
        "children",
    ))
    .method(
        MethodSpec::new(TypeReference::new("void"), "clear")
            .body("        this.children.clear();\n"),
    );

    let composer = ItdComposer::new(&spec);
    insta::assert_snapshot!(composer.output(), @r"
    package com.acme;

    import java.util.List;
    import java.util.Map;

    aspect Widget_Roo_Children {

        Map<String, List<Widget>> Widget.children;

        void Widget.clear() {
            this.children.clear();
        }

    }
    ");
}
