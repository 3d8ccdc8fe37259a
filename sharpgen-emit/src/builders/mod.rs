//! Declaration builders.
//!
//! A chain of single-use, forward-only builders over the shared
//! [`SourceWriter`](crate::writer::SourceWriter):
//!
//! type header → inheritance list → member list → property / method
//! signature → parameter list → body.
//!
//! Builders are constructed only by their parent builder's factory
//! method (the chain starts at
//! [`SourceWriter::declare`](crate::writer::SourceWriter::declare)).
//! Configuration methods consume and return the builder; the terminal
//! method consumes it for good and either emits text or hands back the
//! next builder in the chain. Reuse after the terminal call is ruled out
//! by move semantics.

mod body;
mod inheritance;
mod members;
mod method;
mod modifiers;
mod params;
mod property;
mod type_header;

pub use body::MethodBodyBuilder;
pub use inheritance::InheritanceBuilder;
pub use members::TypeBuilder;
pub use method::MethodBuilder;
pub use modifiers::{Accessibility, TypeKind, Virtuality};
pub use params::{DefaultArg, MethodParamsBuilder, ParamSpec, RefKind};
pub use property::{PropertyBuilder, SetterKind};
pub use type_header::TypeHeaderBuilder;
