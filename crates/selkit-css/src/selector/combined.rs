//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)

use std::fmt;
use std::mem;
use std::str::FromStr;

use strum_macros::{Display, EnumIter};

use super::sealed::Token;
use super::{Selector, SelectorError};

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// `Display` writes the combinator's symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    #[strum(to_string = " ")]
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    #[strum(to_string = ">")]
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    #[strum(to_string = "+")]
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    #[strum(to_string = "~")]
    SubsequentSibling,
}

impl Combinator {
    /// The single character written between the two operands.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Descendant => ' ',
            Self::Child => '>',
            Self::NextSibling => '+',
            Self::SubsequentSibling => '~',
        }
    }
}

impl TryFrom<char> for Combinator {
    type Error = SelectorError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            c if c.is_whitespace() => Ok(Self::Descendant),
            '>' => Ok(Self::Child),
            '+' => Ok(Self::NextSibling),
            '~' => Ok(Self::SubsequentSibling),
            other => Err(SelectorError::InvalidCombinator(other.to_string())),
        }
    }
}

impl FromStr for Combinator {
    type Err = SelectorError;

    /// Accepts `">"`, `"+"`, `"~"` with optional surrounding whitespace, and
    /// any non-empty run of whitespace as the descendant combinator, the
    /// same rule `TryFrom<char>` applies to a single character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return if s.is_empty() {
                Err(SelectorError::InvalidCombinator(String::new()))
            } else {
                Ok(Self::Descendant)
            };
        }

        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Self::try_from(symbol)
                .map_err(|_| SelectorError::InvalidCombinator(s.to_string())),
            _ => Err(SelectorError::InvalidCombinator(s.to_string())),
        }
    }
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// Two selectors joined by a combinator. Either operand may itself be a
/// `CombinedSelector`, so these form a binary tree of any depth.
///
/// Built with [`builder::combine`](super::builder::combine); immutable
/// afterwards. Operands are owned, so a compound selector cannot be changed
/// once it is part of a tree.
///
/// Writing and dropping walk the tree with an explicit stack, so depth is
/// bounded only by memory.
pub struct CombinedSelector {
    left: Box<dyn Selector>,
    combinator: Combinator,
    right: Box<dyn Selector>,
}

impl CombinedSelector {
    pub(crate) fn new(
        left: Box<dyn Selector>,
        combinator: Combinator,
        right: Box<dyn Selector>,
    ) -> Self {
        Self {
            left,
            combinator,
            right,
        }
    }

    /// The left operand.
    #[must_use]
    pub fn left(&self) -> &dyn Selector {
        self.left.as_ref()
    }

    /// The combinator joining the operands.
    #[must_use]
    pub const fn combinator(&self) -> Combinator {
        self.combinator
    }

    /// The right operand.
    #[must_use]
    pub fn right(&self) -> &dyn Selector {
        self.right.as_ref()
    }

    fn detach(&mut self) -> (Box<dyn Selector>, Box<dyn Selector>) {
        (
            mem::replace(&mut self.left, Box::new(Detached)),
            mem::replace(&mut self.right, Box::new(Detached)),
        )
    }
}

impl Selector for CombinedSelector {
    /// `left SP symbol SP right`. The descendant symbol is itself a space,
    /// so it renders as three spaces.
    fn write_to(&self, out: &mut String) {
        write_tree(self, out);
    }

    fn operands(&self) -> Option<(&dyn Selector, Combinator, &dyn Selector)> {
        Some((self.left.as_ref(), self.combinator, self.right.as_ref()))
    }

    fn detach_operands(&mut self, _token: Token) -> Option<(Box<dyn Selector>, Box<dyn Selector>)> {
        Some(self.detach())
    }
}

impl Drop for CombinedSelector {
    fn drop(&mut self) {
        let (left, right) = self.detach();
        let mut pending = vec![left, right];
        while let Some(mut node) = pending.pop() {
            if let Some((left, right)) = node.detach_operands(Token(())) {
                pending.push(left);
                pending.push(right);
            }
            // `node` now holds only placeholders
        }
    }
}

impl fmt::Debug for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CombinedSelector")
            .field("combinator", &self.combinator)
            .field("text", &self.stringify())
            .finish()
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stringify())
    }
}

/// Stand-in left behind by [`CombinedSelector::detach`].
#[derive(Debug)]
struct Detached;

impl Selector for Detached {
    fn write_to(&self, _out: &mut String) {}
}

enum Pending<'a> {
    Node(&'a dyn Selector),
    Combinator(Combinator),
}

/// Write `root` left to right without recursing into combined operands.
fn write_tree(root: &dyn Selector, out: &mut String) {
    let mut pending = vec![Pending::Node(root)];
    while let Some(next) = pending.pop() {
        match next {
            Pending::Combinator(combinator) => {
                out.push(' ');
                out.push(combinator.symbol());
                out.push(' ');
            }
            Pending::Node(node) => match node.operands() {
                Some((left, combinator, right)) => pending.extend([
                    Pending::Node(right),
                    Pending::Combinator(combinator),
                    Pending::Node(left),
                ]),
                None => node.write_to(out),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_symbol_round_trips_through_char() {
        for combinator in Combinator::iter() {
            assert_eq!(Combinator::try_from(combinator.symbol()), Ok(combinator));
            assert_eq!(combinator.to_string(), combinator.symbol().to_string());
        }
    }

    #[test]
    fn test_from_str_trims_whitespace() {
        assert_eq!(" > ".parse::<Combinator>(), Ok(Combinator::Child));
        assert_eq!("+".parse::<Combinator>(), Ok(Combinator::NextSibling));
        assert_eq!(" ".parse::<Combinator>(), Ok(Combinator::Descendant));
        assert_eq!("   ".parse::<Combinator>(), Ok(Combinator::Descendant));
    }

    #[test]
    fn test_any_whitespace_is_descendant() {
        for symbol in [' ', '\t', '\n'] {
            assert_eq!(Combinator::try_from(symbol), Ok(Combinator::Descendant));
            assert_eq!(
                symbol.to_string().parse::<Combinator>(),
                Ok(Combinator::Descendant)
            );
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert_eq!(
            "".parse::<Combinator>(),
            Err(SelectorError::InvalidCombinator(String::new()))
        );
        assert_eq!(
            ">>".parse::<Combinator>(),
            Err(SelectorError::InvalidCombinator(">>".to_string()))
        );
        assert_eq!(
            "|".parse::<Combinator>(),
            Err(SelectorError::InvalidCombinator("|".to_string()))
        );
    }
}
