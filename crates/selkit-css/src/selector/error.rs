//! Errors raised while assembling a selector.

use thiserror::Error;

use super::FragmentKind;

/// A selector was assembled in a way CSS does not allow.
///
/// Both fragment errors are raised by the call that breaks the rule, and
/// the compound selector being built is consumed by that call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// An element, ID or pseudo-element was set a second time.
    #[error(
        "Element, id and pseudo-element should not occur more then one time inside the selector (duplicate {kind})"
    )]
    DuplicateFragment {
        /// The fragment that was repeated.
        kind: FragmentKind,
    },

    /// A fragment was added after a fragment that must follow it.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element ({kind} after {after})"
    )]
    OutOfOrder {
        /// The fragment being added.
        kind: FragmentKind,
        /// The latest fragment kind already present.
        after: FragmentKind,
    },

    /// A combinator symbol other than `' '`, `>`, `+` or `~`.
    #[error("invalid combinator {0:?}: expected ' ', '>', '+' or '~'")]
    InvalidCombinator(String),
}
