//! Modifier keywords shared across the declaration builders.

use serde::Serialize;

/// Declared accessibility of a type or member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Accessibility {
    Public,
    Internal,
    Protected,
    Private,
    ProtectedInternal,
    PrivateProtected,
}

impl Accessibility {
    /// The keyword sequence for this accessibility.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Internal => "internal",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::ProtectedInternal => "protected internal",
            Self::PrivateProtected => "private protected",
        }
    }
}

/// Declared kind of a type.
///
/// Every kind maps to a fixed keyword sequence; being an exhaustive enum,
/// there is no unrecognized-kind failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TypeKind {
    Class,
    Interface,
    Struct,
    Record,
    RecordStruct,
}

impl TypeKind {
    /// The keyword sequence for this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Struct => "struct",
            Self::Record => "record",
            Self::RecordStruct => "record struct",
        }
    }
}

/// The mutually exclusive virtual/abstract/override member modifiers.
///
/// Modeled as one tagged field; switching is last-write-wins and
/// clearing is explicit via the builders' `clear_virtuality`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Virtuality {
    #[default]
    None,
    Virtual,
    Abstract,
    Override,
}

impl Virtuality {
    /// The keyword for this modifier, if any.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Virtual => Some("virtual"),
            Self::Abstract => Some("abstract"),
            Self::Override => Some("override"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessibility_keywords() {
        assert_eq!(Accessibility::Public.keyword(), "public");
        assert_eq!(
            Accessibility::ProtectedInternal.keyword(),
            "protected internal"
        );
        assert_eq!(
            Accessibility::PrivateProtected.keyword(),
            "private protected"
        );
    }

    #[test]
    fn test_type_kind_keywords() {
        assert_eq!(TypeKind::Class.keyword(), "class");
        assert_eq!(TypeKind::RecordStruct.keyword(), "record struct");
    }

    #[test]
    fn test_virtuality_keywords() {
        assert_eq!(Virtuality::None.keyword(), None);
        assert_eq!(Virtuality::Override.keyword(), Some("override"));
        assert_eq!(Virtuality::default(), Virtuality::None);
    }
}
