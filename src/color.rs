use core::fmt;

/// Red-Black tree node colors used to maintain tree balance properties.
///
/// Red-Black trees maintain balance by ensuring:
/// - Red nodes have black children
/// - All paths from a node to its sentinel leaves have equal black node counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Red node - must have black children, cannot be adjacent to other red nodes
    Red,
    /// Black node - can have children of any color, contributes to black height
    Black,
}

impl Color {
    /// Returns the upper-case name of the color, `"RED"` or `"BLACK"`.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Black => "BLACK",
        }
    }

    /// Returns `true` for [`Color::Red`]
    #[inline]
    pub const fn is_red(self) -> bool {
        matches!(self, Color::Red)
    }

    /// Returns `true` for [`Color::Black`]
    #[inline]
    pub const fn is_black(self) -> bool {
        matches!(self, Color::Black)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Color;
    use alloc::string::ToString;

    #[test]
    fn test_color_names() {
        assert_eq!(Color::Red.as_str(), "RED");
        assert_eq!(Color::Black.as_str(), "BLACK");
        assert_eq!(Color::Red.to_string(), "RED");
        assert_eq!(Color::Black.to_string(), "BLACK");
    }

    #[test]
    fn test_color_predicates() {
        assert!(Color::Red.is_red());
        assert!(!Color::Red.is_black());
        assert!(Color::Black.is_black());
        assert!(!Color::Black.is_red());
    }
}
