//! extdoc: extract extension component metadata and serialize it for
//! documentation tooling.
//!
//! A host materializes each component's declared metadata as an
//! [`ExtensionComponent`](model::ExtensionComponent) snapshot.
//! [`write_document`](traversal::write_document) walks that snapshot in a
//! fixed section order and hands each section to a
//! [`DocumentationWriter`](traversal::DocumentationWriter); the XML renderer
//! produces the canonical `<extension>` document.

pub mod category;
pub mod error;
pub mod model;
pub mod render;
pub mod traversal;

pub use category::{classify, Category};
pub use error::{DocError, Result};
pub use render::{create_renderer, render_to_vec, Format, RenderOptions};
pub use traversal::{write_document, write_request, DocumentRequest, DocumentationWriter, PropertyServices};
