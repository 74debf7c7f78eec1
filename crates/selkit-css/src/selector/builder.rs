//! Entry points for building selectors.
//!
//! Each fragment function starts a new [`CompoundSelector`] holding that
//! fragment; further fragments are chained on the returned value.
//! [`combine`] joins two finished selectors.
//!
//! ```
//! use selkit_css::builder::{combine, element, id};
//! use selkit_css::{Combinator, Selector};
//!
//! # fn main() -> Result<(), selkit_css::SelectorError> {
//! let main = id("main").class("container")?.class("editable")?;
//! assert_eq!(main.stringify(), "#main.container.editable");
//!
//! let link = element("a").attr(r#"href$=".png""#)?.pseudo_class("focus")?;
//! assert_eq!(link.stringify(), r#"a[href$=".png"]:focus"#);
//!
//! let both = combine(main, Combinator::Descendant, link);
//! assert_eq!(both.stringify(), r#"#main.container.editable   a[href$=".png"]:focus"#);
//! # Ok(())
//! # }
//! ```

use super::{CombinedSelector, Combinator, CompoundSelector, FragmentKind, Selector, SelectorError};

/// A compound selector holding the type selector `value`.
#[must_use]
pub fn element(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector::single(FragmentKind::Element, value.into())
}

/// A compound selector holding the ID `#value`.
#[must_use]
pub fn id(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector::single(FragmentKind::Id, value.into())
}

/// A compound selector holding the class `.value`.
#[must_use]
pub fn class(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector::single(FragmentKind::Class, value.into())
}

/// A compound selector holding the attribute condition `[value]`.
#[must_use]
pub fn attr(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector::single(FragmentKind::Attribute, value.into())
}

/// A compound selector holding the pseudo-class `:value`.
#[must_use]
pub fn pseudo_class(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector::single(FragmentKind::PseudoClass, value.into())
}

/// A compound selector holding the pseudo-element `::value`.
#[must_use]
pub fn pseudo_element(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector::single(FragmentKind::PseudoElement, value.into())
}

/// Join two selectors with a combinator.
///
/// Both operands are moved into the result; either may be a compound or an
/// already combined selector.
#[must_use]
pub fn combine<L, R>(left: L, combinator: Combinator, right: R) -> CombinedSelector
where
    L: Selector + 'static,
    R: Selector + 'static,
{
    CombinedSelector::new(Box::new(left), combinator, Box::new(right))
}

/// Join two selectors with a combinator given as text, e.g. `"+"`.
///
/// # Errors
///
/// [`SelectorError::InvalidCombinator`] if `symbol` is not one of
/// `' '`, `'>'`, `'+'` or `'~'` (see [`Combinator`]'s `FromStr`).
pub fn combine_symbol<L, R>(left: L, symbol: &str, right: R) -> Result<CombinedSelector, SelectorError>
where
    L: Selector + 'static,
    R: Selector + 'static,
{
    let combinator = symbol.parse()?;
    Ok(combine(left, combinator, right))
}
