//! CSS selector building
//!
//! A [`CompoundSelector`] collects the fragments of one element condition
//! and rejects fragments that would break the canonical order
//! `element #id .class [attr] :pseudo-class ::pseudo-element`.
//! [`CombinedSelector`] joins two selectors with a [`Combinator`].
//! The free functions in [`builder`] are the usual entry points.
//!
//! ```
//! use selkit_css::builder::{combine, element};
//! use selkit_css::{Combinator, Selector};
//!
//! # fn main() -> Result<(), selkit_css::SelectorError> {
//! let list = element("ul").class("nav")?;
//! let item = element("li").pseudo_class("first-child")?;
//! let selector = combine(list, Combinator::Child, item);
//! assert_eq!(selector.stringify(), "ul.nav > li:first-child");
//! # Ok(())
//! # }
//! ```

pub mod builder;
mod combined;
mod compound;
mod error;
mod fragment;

use std::fmt;

pub use combined::{CombinedSelector, Combinator};
pub use compound::CompoundSelector;
pub use error::SelectorError;
pub use fragment::FragmentKind;

/// Anything that can be written out as selector text.
///
/// Both [`CompoundSelector`] and [`CombinedSelector`] implement this, so
/// either can be an operand of [`builder::combine`].
pub trait Selector: fmt::Debug + Send + Sync {
    /// Append this selector's text to `out`.
    fn write_to(&self, out: &mut String);

    /// The canonical selector text.
    fn stringify(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    /// The operands and combinator, if this selector joins two others.
    ///
    /// Lets trees of any depth be walked with an explicit stack instead of
    /// recursion.
    fn operands(&self) -> Option<(&dyn Selector, Combinator, &dyn Selector)> {
        None
    }

    /// Move both operands out, leaving empty placeholders behind.
    ///
    /// Only callable from this crate; used to drop deep trees in a loop.
    #[doc(hidden)]
    fn detach_operands(
        &mut self,
        _token: sealed::Token,
    ) -> Option<(Box<dyn Selector>, Box<dyn Selector>)> {
        None
    }
}

impl<S: Selector + ?Sized> Selector for Box<S> {
    fn write_to(&self, out: &mut String) {
        (**self).write_to(out);
    }

    fn operands(&self) -> Option<(&dyn Selector, Combinator, &dyn Selector)> {
        (**self).operands()
    }

    fn detach_operands(
        &mut self,
        token: sealed::Token,
    ) -> Option<(Box<dyn Selector>, Box<dyn Selector>)> {
        (**self).detach_operands(token)
    }
}

mod sealed {
    /// Only code inside the `selector` module can construct this.
    #[derive(Debug)]
    pub struct Token(pub(in crate::selector) ());
}
