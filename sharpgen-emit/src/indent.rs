//! Indentation configuration for emitted source.

/// Indentation style for emitted source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation, the C# convention.
    pub const CSHARP: Self = Self::Spaces(4);

    /// 2-space indentation.
    pub const COMPACT: Self = Self::Spaces(2);

    /// Append one indent level's worth of whitespace to `out`.
    pub fn write_to(&self, out: &mut String) {
        match self {
            Self::Spaces(width) => {
                for _ in 0..*width {
                    out.push(' ');
                }
            }
            Self::Tab => out.push('\t'),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::CSHARP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(indent: Indent) -> String {
        let mut out = String::new();
        indent.write_to(&mut out);
        out
    }

    #[test]
    fn test_indent_unit() {
        assert_eq!(unit(Indent::Spaces(2)), "  ");
        assert_eq!(unit(Indent::Spaces(4)), "    ");
        assert_eq!(unit(Indent::Tab), "\t");
    }

    #[test]
    fn test_indent_unit_matches_any_width() {
        assert_eq!(unit(Indent::Spaces(3)), "   ");
        assert_eq!(unit(Indent::Spaces(8)), "        ");
        assert_eq!(unit(Indent::Spaces(0)), "");
    }

    #[test]
    fn test_default_is_csharp() {
        assert_eq!(Indent::default(), Indent::CSHARP);
        assert_eq!(Indent::CSHARP, Indent::Spaces(4));
    }
}
