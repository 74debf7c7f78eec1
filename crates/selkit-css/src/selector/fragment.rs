//! Fragment kinds and their canonical order.

use strum_macros::{Display, EnumIter};

/// The kind of a fragment inside a compound selector.
///
/// Variants are declared in canonical order, so the derived `Ord` is the
/// order fragments must be added in. [`FragmentKind::None`] is the state of
/// a compound selector before anything has been added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum FragmentKind {
    /// Nothing added yet.
    #[default]
    None = 0,
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors), e.g. `div`
    Element = 1,
    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors), e.g. `#main`
    Id = 2,
    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html), e.g. `.nav`
    Class = 3,
    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors), e.g. `[href]`
    Attribute = 4,
    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes), e.g. `:hover`
    PseudoClass = 5,
    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements), e.g. `::before`
    PseudoElement = 6,
}

impl FragmentKind {
    /// Whether a compound selector may hold this kind at most once.
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// The glyph that introduces this fragment in selector text.
    ///
    /// Elements have no prefix; attributes open with `[` and are closed
    /// by the writer.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::None | Self::Element => "",
            Self::Id => "#",
            Self::Class => ".",
            Self::Attribute => "[",
            Self::PseudoClass => ":",
            Self::PseudoElement => "::",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_declaration_order_is_canonical_order() {
        let kinds: Vec<FragmentKind> = FragmentKind::iter().collect();
        let mut sorted = kinds.clone();
        sorted.sort();
        assert_eq!(kinds, sorted);
        assert_eq!(kinds.len(), 7);
    }

    #[test]
    fn test_display_is_kebab_case() {
        assert_eq!(FragmentKind::PseudoClass.to_string(), "pseudo-class");
        assert_eq!(FragmentKind::PseudoElement.to_string(), "pseudo-element");
        assert_eq!(FragmentKind::Id.to_string(), "id");
    }

    #[test]
    fn test_discriminants() {
        assert_eq!(FragmentKind::None as u8, 0);
        assert_eq!(FragmentKind::Attribute as u8, 4);
        assert_eq!(FragmentKind::PseudoElement as u8, 6);
    }
}
