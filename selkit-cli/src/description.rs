//! JSON descriptions of selectors.
//!
//! A compound selector is a list of single-key fragment objects applied in
//! list order; a combined selector is an object with `left`, `combinator`
//! and `right`:
//!
//! ```json
//! {
//!   "left": [{"element": "ul"}, {"class": "nav"}],
//!   "combinator": ">",
//!   "right": [{"element": "li"}, {"pseudo-class": "first-child"}]
//! }
//! ```

use std::fmt;

use anyhow::{Context, Result};
use selkit_css::builder::combine_symbol;
use selkit_css::{CompoundSelector, Selector, SelectorError};
use serde::Deserialize;

/// One fragment of a compound selector.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Fragment {
    /// `{"element": "div"}`
    Element(String),
    /// `{"id": "main"}`
    Id(String),
    /// `{"class": "nav"}`
    Class(String),
    /// `{"attr": "href^=https"}`
    Attr(String),
    /// `{"pseudo-class": "hover"}`
    PseudoClass(String),
    /// `{"pseudo-element": "before"}`
    PseudoElement(String),
}

impl Fragment {
    fn apply(&self, selector: CompoundSelector) -> Result<CompoundSelector, SelectorError> {
        match self {
            Self::Element(value) => selector.element(value.as_str()),
            Self::Id(value) => selector.id(value.as_str()),
            Self::Class(value) => selector.class(value.as_str()),
            Self::Attr(value) => selector.attr(value.as_str()),
            Self::PseudoClass(value) => selector.pseudo_class(value.as_str()),
            Self::PseudoElement(value) => selector.pseudo_element(value.as_str()),
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(value) => write!(f, "element {value:?}"),
            Self::Id(value) => write!(f, "id {value:?}"),
            Self::Class(value) => write!(f, "class {value:?}"),
            Self::Attr(value) => write!(f, "attr {value:?}"),
            Self::PseudoClass(value) => write!(f, "pseudo-class {value:?}"),
            Self::PseudoElement(value) => write!(f, "pseudo-element {value:?}"),
        }
    }
}

/// A selector as read from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Description {
    /// Fragments of one compound selector, in the order they are added.
    Compound(Vec<Fragment>),
    /// Two descriptions joined by a combinator symbol.
    Combined {
        /// Left operand.
        left: Box<Description>,
        /// One of `" "`, `">"`, `"+"`, `"~"`.
        combinator: String,
        /// Right operand.
        right: Box<Description>,
    },
}

impl Description {
    /// Read a description from JSON text.
    ///
    /// # Errors
    ///
    /// Fails if `text` is not JSON or does not match the description shape.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid selector description")
    }

    /// Build the selector, reporting the first fragment or combinator that
    /// breaks a selector rule.
    ///
    /// # Errors
    ///
    /// The selector error, with context naming the operand and fragment.
    pub fn build(&self) -> Result<Box<dyn Selector>> {
        match self {
            Self::Compound(fragments) => Ok(Box::new(build_compound(fragments)?)),
            Self::Combined {
                left,
                combinator,
                right,
            } => {
                let left = left.build().context("in left operand")?;
                let right = right.build().context("in right operand")?;
                let combined = combine_symbol(left, combinator, right)?;
                Ok(Box::new(combined))
            }
        }
    }
}

fn build_compound(fragments: &[Fragment]) -> Result<CompoundSelector> {
    fragments
        .iter()
        .enumerate()
        .try_fold(CompoundSelector::new(), |selector, (index, fragment)| {
            fragment
                .apply(selector)
                .with_context(|| format!("fragment {} ({fragment})", index + 1))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_from_json() {
        let description = Description::from_json(
            r#"[{"element": "a"}, {"attr": "href$=\".png\""}, {"pseudo-class": "focus"}]"#,
        )
        .unwrap();
        assert_eq!(
            description.build().unwrap().stringify(),
            r#"a[href$=".png"]:focus"#
        );
    }

    #[test]
    fn test_nested_combined_from_json() {
        let description = Description::from_json(
            r#"{
                "left": [{"element": "div"}, {"id": "main"}, {"class": "container"}, {"class": "draggable"}],
                "combinator": "+",
                "right": {
                    "left": [{"element": "table"}, {"id": "data"}],
                    "combinator": "~",
                    "right": {
                        "left": [{"element": "tr"}, {"pseudo-class": "nth-of-type(even)"}],
                        "combinator": " ",
                        "right": [{"element": "td"}, {"pseudo-class": "nth-of-type(even)"}]
                    }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(
            description.build().unwrap().stringify(),
            "div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)"
        );
    }

    #[test]
    fn test_empty_compound_builds_empty_text() {
        let description = Description::from_json("[]").unwrap();
        assert_eq!(description, Description::Compound(Vec::new()));
        assert_eq!(description.build().unwrap().stringify(), "");
    }

    #[test]
    fn test_out_of_order_fragment_is_reported_with_position() {
        let description =
            Description::from_json(r#"[{"element": "a"}, {"attr": "href"}, {"class": "x"}]"#)
                .unwrap();
        let err = description.build().unwrap_err();
        assert_eq!(err.to_string(), r#"fragment 3 (class "x")"#);
        assert!(
            err.root_cause()
                .to_string()
                .ends_with("(class after attribute)")
        );
    }

    #[test]
    fn test_invalid_combinator_is_reported() {
        let description = Description::from_json(
            r#"{"left": [{"element": "a"}], "combinator": "|", "right": [{"element": "b"}]}"#,
        )
        .unwrap();
        let err = description.build().unwrap_err();
        assert!(err.to_string().starts_with("invalid combinator"));
    }

    #[test]
    fn test_error_in_nested_operand_names_the_side() {
        let description = Description::from_json(
            r#"{"left": [{"id": "a"}, {"id": "b"}], "combinator": ">", "right": [{"element": "b"}]}"#,
        )
        .unwrap();
        let err = description.build().unwrap_err();
        assert_eq!(err.to_string(), "in left operand");
    }

    #[test]
    fn test_unknown_fragment_kind_is_rejected() {
        assert!(Description::from_json(r#"[{"tag": "a"}]"#).is_err());
    }
}
