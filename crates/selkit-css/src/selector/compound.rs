//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)

use std::fmt;

use selkit_common::warning::warn_once;

use super::{FragmentKind, Selector, SelectorError};

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator, and represents a set of simultaneous
/// conditions on a single element."
///
/// Fragments are added through consuming methods that check two rules at
/// the call site:
/// - the element, ID and pseudo-element are each set at most once
/// - no fragment is added after a fragment that must follow it
///
/// Classes, attributes and pseudo-classes repeat freely and keep insertion
/// order. Attribute and pseudo-class values are emitted verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundSelector {
    element: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
    last_applied: FragmentKind,
}

impl CompoundSelector {
    /// An empty compound selector. Its text is the empty string.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the type selector, e.g. `div`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateFragment`] if an element is already set,
    /// otherwise [`SelectorError::OutOfOrder`] if any later fragment kind
    /// has been added.
    pub fn element(mut self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.admit(FragmentKind::Element, value.into())?;
        Ok(self)
    }

    /// Set the ID, rendered as `#value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateFragment`] if an ID is already set,
    /// otherwise [`SelectorError::OutOfOrder`] if a class, attribute,
    /// pseudo-class or pseudo-element has been added.
    pub fn id(mut self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.admit(FragmentKind::Id, value.into())?;
        Ok(self)
    }

    /// Append a class, rendered as `.value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if an attribute, pseudo-class or
    /// pseudo-element has been added.
    pub fn class(mut self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.admit(FragmentKind::Class, value.into())?;
        Ok(self)
    }

    /// Append an attribute condition, rendered as `[value]`.
    ///
    /// `value` is the raw text between the brackets, e.g. `href$=".png"`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if a pseudo-class or pseudo-element
    /// has been added.
    pub fn attr(mut self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.admit(FragmentKind::Attribute, value.into())?;
        Ok(self)
    }

    /// Append a pseudo-class, rendered as `:value`.
    ///
    /// Functional pseudo-classes carry their arguments in `value`, e.g.
    /// `nth-of-type(even)`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if a pseudo-element has been added.
    pub fn pseudo_class(mut self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.admit(FragmentKind::PseudoClass, value.into())?;
        Ok(self)
    }

    /// Set the pseudo-element, rendered as `::value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateFragment`] if a pseudo-element is already
    /// set. Nothing sorts after a pseudo-element, so this never reports
    /// [`SelectorError::OutOfOrder`].
    pub fn pseudo_element(mut self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.admit(FragmentKind::PseudoElement, value.into())?;
        Ok(self)
    }

    /// A compound selector holding a single fragment.
    ///
    /// The first fragment on an empty selector can break neither rule, so
    /// this cannot fail.
    pub(crate) fn single(kind: FragmentKind, value: String) -> Self {
        let mut selector = Self::new();
        selector.store(kind, value);
        selector
    }

    /// Check uniqueness, then ordering, then store the fragment.
    fn admit(&mut self, kind: FragmentKind, value: String) -> Result<(), SelectorError> {
        if kind.is_unique() && self.has(kind) {
            return Err(SelectorError::DuplicateFragment { kind });
        }
        if kind < self.last_applied {
            return Err(SelectorError::OutOfOrder {
                kind,
                after: self.last_applied,
            });
        }
        self.store(kind, value);
        Ok(())
    }

    /// `kind` is never [`FragmentKind::None`]: every caller passes the kind
    /// of a real fragment.
    fn store(&mut self, kind: FragmentKind, value: String) {
        debug_assert_ne!(kind, FragmentKind::None, "no fragment has kind none");
        if value.is_empty() {
            let _ = warn_once("CSS", &format!("empty {kind} added to selector"));
        }
        match kind {
            // unreachable, see the assertion above
            FragmentKind::None => return,
            FragmentKind::Element => self.element = Some(value),
            FragmentKind::Id => self.id = Some(value),
            FragmentKind::Class => self.classes.push(value),
            FragmentKind::Attribute => self.attributes.push(value),
            FragmentKind::PseudoClass => self.pseudo_classes.push(value),
            FragmentKind::PseudoElement => self.pseudo_element = Some(value),
        }
        self.last_applied = self.last_applied.max(kind);
    }

    fn has(&self, kind: FragmentKind) -> bool {
        match kind {
            FragmentKind::None => false,
            FragmentKind::Element => self.element.is_some(),
            FragmentKind::Id => self.id.is_some(),
            FragmentKind::Class => !self.classes.is_empty(),
            FragmentKind::Attribute => !self.attributes.is_empty(),
            FragmentKind::PseudoClass => !self.pseudo_classes.is_empty(),
            FragmentKind::PseudoElement => self.pseudo_element.is_some(),
        }
    }

    /// The type selector, if set.
    #[must_use]
    pub fn element_name(&self) -> Option<&str> {
        self.element.as_deref()
    }

    /// The ID, if set (without `#`).
    #[must_use]
    pub fn id_value(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Classes in insertion order (without `.`).
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Raw attribute conditions in insertion order (without brackets).
    #[must_use]
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Pseudo-classes in insertion order (without `:`).
    #[must_use]
    pub fn pseudo_classes(&self) -> &[String] {
        &self.pseudo_classes
    }

    /// The pseudo-element, if set (without `::`).
    #[must_use]
    pub fn pseudo_element_name(&self) -> Option<&str> {
        self.pseudo_element.as_deref()
    }

    /// The latest fragment kind added so far, or [`FragmentKind::None`].
    #[must_use]
    pub const fn last_applied(&self) -> FragmentKind {
        self.last_applied
    }

    /// Whether no fragment has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.last_applied == FragmentKind::None
    }
}

impl Selector for CompoundSelector {
    fn write_to(&self, out: &mut String) {
        if let Some(element) = &self.element {
            out.push_str(element);
        }
        if let Some(id) = &self.id {
            out.push_str(FragmentKind::Id.prefix());
            out.push_str(id);
        }
        for class in &self.classes {
            out.push_str(FragmentKind::Class.prefix());
            out.push_str(class);
        }
        for attribute in &self.attributes {
            out.push_str(FragmentKind::Attribute.prefix());
            out.push_str(attribute);
            out.push(']');
        }
        for pseudo_class in &self.pseudo_classes {
            out.push_str(FragmentKind::PseudoClass.prefix());
            out.push_str(pseudo_class);
        }
        if let Some(pseudo_element) = &self.pseudo_element {
            out.push_str(FragmentKind::PseudoElement.prefix());
            out.push_str(pseudo_element);
        }
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stringify())
    }
}
