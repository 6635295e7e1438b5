/*!
Sentences of propositional logic.

A [Sentence] is one of a closed collection of variants:

| Variant         | Children                        | Value                                            |
|-----------------|---------------------------------|--------------------------------------------------|
| `Symbol`        | ---                             | The value of the atom in a model                 |
| `Not`           | one operand                     | The negation of the operand                      |
| `And`           | an ordered sequence of conjuncts| True if every conjunct is true (so, empty is ⊤)  |
| `Or`            | an ordered sequence of disjuncts| True if some disjunct is true (so, empty is ⊥)   |
| `Implication`   | an antecedent and a consequent  | False only if antecedent is true and consequent false |
| `Biconditional` | a left and a right side         | True if both sides have the same value           |

Each node owns its children, and a sentence given to a constructor is moved into the new sentence.

# Mutation

A sentence is immutable after construction, with one exception: conjunctions and disjunctions may be extended in place by [add](Sentence::add).
This is the (only) way a knowledge base grows over time, and as the method requires a mutable borrow no query can be in progress over a sentence while it is extended.

# Equality

Equality is structural, including for biconditionals.[^biconditional]
Order matters for conjunctions and disjunctions, so `And(p, q)` is not equal to `And(q, p)`, though the two always have the same value.

[^biconditional]: Comparing only one side of a biconditional against the other is not reflexive, and so is not a (Rust) equality.

# Example

```rust
# use otter_logic::structures::sentence::Sentence;
# use std::collections::HashMap;
let p = Sentence::symbol("p").unwrap();
let q = Sentence::symbol("q").unwrap();

let mut knowledge = Sentence::and([p.clone()]);
knowledge.add(p.clone().implies(q.clone())).unwrap();

assert_eq!(knowledge.formula(), "p ∧ (p => q)");

let model = HashMap::from([("p", true), ("q", false)]);
assert_eq!(knowledge.evaluate(&model), Ok(false));
```
*/

mod evaluate;
mod formula;

pub use formula::{is_balanced, parenthesize};

use crate::{
    structures::atom::Symbol,
    types::err::{self, OperandError},
};

/// A sentence of propositional logic.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Sentence {
    /// A bare atom.
    Symbol(Symbol),

    /// The negation of the operand.
    Not(Box<Sentence>),

    /// The conjunction of each conjunct.
    And(Vec<Sentence>),

    /// The disjunction of each disjunct.
    Or(Vec<Sentence>),

    /// The antecedent implies the consequent.
    Implication(Box<Sentence>, Box<Sentence>),

    /// The left side has the same value as the right side.
    Biconditional(Box<Sentence>, Box<Sentence>),
}

impl Sentence {
    /// A symbol with the given name, if the name is valid (see [atom](crate::structures::atom)).
    pub fn symbol(name: impl Into<String>) -> Result<Self, err::ErrorKind> {
        Ok(Sentence::Symbol(Symbol::new(name)?))
    }

    /// The negation of `operand`.
    #[allow(clippy::should_implement_trait)]
    pub fn not(operand: Sentence) -> Self {
        Sentence::Not(Box::new(operand))
    }

    /// The conjunction of `conjuncts`, in order.
    pub fn and(conjuncts: impl IntoIterator<Item = Sentence>) -> Self {
        Sentence::And(conjuncts.into_iter().collect())
    }

    /// The disjunction of `disjuncts`, in order.
    pub fn or(disjuncts: impl IntoIterator<Item = Sentence>) -> Self {
        Sentence::Or(disjuncts.into_iter().collect())
    }

    /// The implication from `antecedent` to `consequent`.
    pub fn implication(antecedent: Sentence, consequent: Sentence) -> Self {
        Sentence::Implication(Box::new(antecedent), Box::new(consequent))
    }

    /// The biconditional between `left` and `right`.
    pub fn biconditional(left: Sentence, right: Sentence) -> Self {
        Sentence::Biconditional(Box::new(left), Box::new(right))
    }

    /// The implication from `self` to `consequent`.
    pub fn implies(self, consequent: Sentence) -> Self {
        Sentence::implication(self, consequent)
    }

    /// The biconditional between `self` and `other`.
    pub fn iff(self, other: Sentence) -> Self {
        Sentence::biconditional(self, other)
    }

    /// Appends `sentence` to the conjuncts of a conjunction or the disjuncts of a disjunction.
    ///
    /// Any other sentence is left unchanged and [NotExtendable](OperandError::NotExtendable) is returned.
    pub fn add(&mut self, sentence: Sentence) -> Result<(), err::ErrorKind> {
        match self {
            Sentence::And(sentences) | Sentence::Or(sentences) => {
                sentences.push(sentence);
                Ok(())
            }

            _ => Err(OperandError::NotExtendable.into()),
        }
    }

    /// The immediate children of the sentence, in order.
    pub fn children(&self) -> Vec<&Sentence> {
        match self {
            Sentence::Symbol(_) => Vec::default(),
            Sentence::Not(operand) => vec![operand.as_ref()],
            Sentence::And(sentences) | Sentence::Or(sentences) => sentences.iter().collect(),
            Sentence::Implication(left, right) | Sentence::Biconditional(left, right) => {
                vec![left.as_ref(), right.as_ref()]
            }
        }
    }
}

impl From<Symbol> for Sentence {
    fn from(symbol: Symbol) -> Self {
        Sentence::Symbol(symbol)
    }
}

impl std::ops::Not for Sentence {
    type Output = Sentence;

    fn not(self) -> Self::Output {
        Sentence::not(self)
    }
}

impl std::ops::BitAnd for Sentence {
    type Output = Sentence;

    fn bitand(self, other: Self) -> Self::Output {
        Sentence::And(vec![self, other])
    }
}

impl std::ops::BitOr for Sentence {
    type Output = Sentence;

    fn bitor(self, other: Self) -> Self::Output {
        Sentence::Or(vec![self, other])
    }
}

/// Debug output follows the structure of the sentence, e.g. `And(p, Or(q, Not(r)))`.
impl std::fmt::Debug for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn list(f: &mut std::fmt::Formatter<'_>, sentences: &[Sentence]) -> std::fmt::Result {
            for (index, sentence) in sentences.iter().enumerate() {
                if index > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{sentence:?}")?;
            }
            Ok(())
        }

        match self {
            Sentence::Symbol(symbol) => write!(f, "{symbol}"),

            Sentence::Not(operand) => write!(f, "Not({operand:?})"),

            Sentence::And(conjuncts) => {
                write!(f, "And(")?;
                list(f, conjuncts)?;
                write!(f, ")")
            }

            Sentence::Or(disjuncts) => {
                write!(f, "Or(")?;
                list(f, disjuncts)?;
                write!(f, ")")
            }

            Sentence::Implication(antecedent, consequent) => {
                write!(f, "Implication({antecedent:?}, {consequent:?})")
            }

            Sentence::Biconditional(left, right) => {
                write!(f, "Biconditional({left:?}, {right:?})")
            }
        }
    }
}

/// Display is the [formula](Sentence::formula) of a sentence.
impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formula())
    }
}
