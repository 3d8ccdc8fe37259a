//! Host-boundary layer for Sharpgen.
//!
//! `sharpgen-emit` produces finished source text; this crate carries it
//! across the host boundary:
//!
//! - [`registry`] - registration of finished text blobs under hint
//!   names, with JSON preview and on-disk materialization
//! - [`templates`] - attribute-template bundles retrieved from embedded
//!   resources
//! - [`query`] - the incremental-query adapter: attribute identity +
//!   node-shape predicate + transform over a compilation snapshot

pub mod query;
pub mod registry;
pub mod templates;

pub use query::{AttributeQuery, CancellationToken, SymbolSource};
pub use registry::{GeneratedSource, RegistryError, SourceRegistry};
pub use templates::{AttributeTemplate, TemplateStore};
