//! The (string) formula of a sentence.
//!
//! Negation, conjunction, and disjunction are written with `¬`, `∧`, and `∨`, while implication and the biconditional are written with `=>` and `<=>`.
//!
//! The formula of each immediate child is wrapped in parentheses unless the formula is already *bare*:
//! - The name of an atom.
//! - A negation of some bare formula.
//! - A single parenthesised group, e.g. `(p ∧ q)` but not `(p) ∧ (q)`.
//!
//! A conjunction (or disjunction) of a single sentence is written as the formula of that sentence, and an empty conjunction (or disjunction) is written as the empty string.
//!
//! ```rust
//! # use otter_logic::structures::sentence::Sentence;
//! let [a, b, c] = ["a", "b", "c"].map(|name| Sentence::symbol(name).unwrap());
//! let sentence = Sentence::and([a, Sentence::or([b, Sentence::not(c)])]);
//!
//! assert_eq!(sentence.formula(), "a ∧ (b ∨ ¬c)");
//! ```

use crate::structures::atom::is_name;

use super::Sentence;

impl Sentence {
    /// The formula of the sentence.
    pub fn formula(&self) -> String {
        match self {
            Sentence::Symbol(symbol) => symbol.name().to_string(),

            Sentence::Not(operand) => format!("¬{}", parenthesize(&operand.formula())),

            Sentence::And(conjuncts) => junction(conjuncts, " ∧ "),

            Sentence::Or(disjuncts) => junction(disjuncts, " ∨ "),

            Sentence::Implication(antecedent, consequent) => format!(
                "{} => {}",
                parenthesize(&antecedent.formula()),
                parenthesize(&consequent.formula())
            ),

            Sentence::Biconditional(left, right) => format!(
                "{} <=> {}",
                parenthesize(&left.formula()),
                parenthesize(&right.formula())
            ),
        }
    }
}

fn junction(sentences: &[Sentence], connective: &str) -> String {
    match sentences {
        [sentence] => sentence.formula(),

        _ => sentences
            .iter()
            .map(|sentence| parenthesize(&sentence.formula()))
            .collect::<Vec<_>>()
            .join(connective),
    }
}

/// `formula` wrapped in parentheses, unless the formula is bare.
pub fn parenthesize(formula: &str) -> String {
    match is_bare(formula) {
        true => formula.to_string(),
        false => format!("({formula})"),
    }
}

/// Whether the parenthesis of `formula` are balanced.
///
/// That is, the depth of nesting never goes below zero when read left to right, and is zero at the end.
pub fn is_balanced(formula: &str) -> bool {
    let mut depth: usize = 0;

    for character in formula.chars() {
        match character {
            '(' => depth += 1,

            ')' => match depth.checked_sub(1) {
                Some(lower) => depth = lower,
                None => return false,
            },

            _ => {}
        }
    }

    depth == 0
}

fn is_bare(formula: &str) -> bool {
    if formula.is_empty() || is_name(formula) || is_group(formula) {
        return true;
    }

    match formula.strip_prefix('¬') {
        Some(operand) => is_bare(operand),
        None => false,
    }
}

fn is_group(formula: &str) -> bool {
    match formula
        .strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
    {
        Some(inner) => is_balanced(inner),
        None => false,
    }
}
