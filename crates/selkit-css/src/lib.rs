//! CSS selector construction for selkit.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, ID, class, attribute, pseudo-class and pseudo-element fragments
//!   - Canonical fragment order enforced as each fragment is added
//!   - Element, ID and pseudo-element allowed at most once
//!
//! - **Combinators** ([§ 16](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Descendant, child, next-sibling and subsequent-sibling
//!   - Arbitrarily nested binary trees of combined selectors
//!
//! # Not Implemented
//!
//! - Parsing selector text
//! - Matching selectors against a document
//! - Specificity
//! - Validation of attribute or pseudo-class contents (passed through verbatim)

/// CSS selector building per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;

// Re-exports for convenience
pub use selector::{
    CombinedSelector, Combinator, CompoundSelector, FragmentKind, Selector, SelectorError,
    builder,
};
