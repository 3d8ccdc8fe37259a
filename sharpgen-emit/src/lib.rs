//! Structured C# source-text emission engine.
//!
//! `sharpgen-emit` assembles syntactically valid, consistently indented
//! C# source for types, properties, methods, parameters and bodies,
//! resolving fully-qualified names for declared symbols: namespaces,
//! generics, nullability and keyword aliases for the built-in
//! primitives.
//!
//! The engine is a chain of single-use builders over one shared
//! [`SourceWriter`] per emitted file:
//!
//! ```
//! use sharpgen_emit::{Accessibility, SourceWriter, TypeKind, TypeRef};
//!
//! let mut writer = SourceWriter::csharp();
//! let mut body = writer
//!     .declare("Point")
//!     .accessibility(Accessibility::Public)
//!     .kind(TypeKind::Class)
//!     .commit()
//!     .open_body();
//!
//! body.property(TypeRef::int(), "X")
//!     .accessibility(Accessibility::Public)
//!     .with_getter()
//!     .with_init_setter()
//!     .commit();
//!
//! let mut add = body
//!     .method("Translate")
//!     .accessibility(Accessibility::Public)
//!     .open_parameters()
//!     .with_param(TypeRef::int(), "dx")
//!     .open_body();
//! add = add.line("X += dx;");
//! add.close();
//!
//! body.close();
//! let text = writer.finish();
//! assert!(text.contains("public int X { get; init; }"));
//! assert!(text.contains("public void Translate(int dx)"));
//! ```

mod attribute;
mod indent;
mod types;
mod writer;

pub mod builders;

pub use attribute::AttributeSpec;
pub use builders::{
    Accessibility, DefaultArg, InheritanceBuilder, MethodBodyBuilder, MethodBuilder,
    MethodParamsBuilder, ParamSpec, PropertyBuilder, RefKind, SetterKind, TypeBuilder,
    TypeHeaderBuilder, TypeKind, Virtuality,
};
pub use indent::Indent;
pub use types::{Keyword, NamedType, RenderOptions, TypeRef};
pub use writer::SourceWriter;
