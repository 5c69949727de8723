//! Composer for AspectJ inter-type declaration source files.
//!
//! Takes an already-validated [`crosscut_model::IntroductionSpec`] and renders
//! it to the textual ITD syntax a downstream weaver consumes. Output is
//! deterministic byte-for-byte: callers diff and cache generated files.
//!
//! # Module Organization
//!
//! - [`imports`] - Import registration and name-qualification decisions
//! - [`buffer`] - Append-only output buffer with indent tracking
//! - [`annotation`] - Annotation-to-source rendering
//! - [`composer`] - The fixed emission pipeline
//!
//! # Example
//!
//! ```
//! use crosscut_compose::ItdComposer;
//! use crosscut_model::{FieldSpec, IntroductionSpec, Modifier, TypeReference};
//!
//! let spec = IntroductionSpec::new(
//!     TypeReference::new("com.acme.Widget"),
//!     TypeReference::new("com.acme.Widget_Roo_Jpa"),
//! )
//! .field(FieldSpec::new(TypeReference::new("java.lang.Long"), "id").modifier(Modifier::Private));
//!
//! let composer = ItdComposer::new(&spec);
//! assert!(composer.has_content());
//! ```

pub mod annotation;
pub mod buffer;
pub mod composer;
pub mod imports;
pub mod indent;

pub use annotation::annotation_source;
pub use buffer::EmissionBuffer;
pub use composer::ItdComposer;
pub use imports::ImportResolver;
pub use indent::Indent;
