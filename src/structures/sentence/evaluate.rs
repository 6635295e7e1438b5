//! Evaluation of a sentence on a valuation, and the symbols of a sentence.

use std::collections::BTreeSet;

use crate::{
    structures::{atom::Atom, valuation::Valuation},
    types::err::{self, EvaluationError},
};

use super::Sentence;

impl Sentence {
    /// The value of the sentence on `model`.
    ///
    /// Conjunctions, disjunctions, and implications stop evaluation as soon as the value is known, so a symbol without a value may be passed over.
    /// Otherwise, a symbol without a value in `model` is an [UnboundVariable](EvaluationError::UnboundVariable) error.
    pub fn evaluate<V: Valuation + ?Sized>(&self, model: &V) -> Result<bool, err::ErrorKind> {
        match self {
            Sentence::Symbol(symbol) => match model.value_of(symbol.name()) {
                Some(value) => Ok(value),
                None => Err(EvaluationError::UnboundVariable(symbol.name().to_string()).into()),
            },

            Sentence::Not(operand) => Ok(!operand.evaluate(model)?),

            Sentence::And(conjuncts) => {
                for conjunct in conjuncts {
                    if !conjunct.evaluate(model)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }

            Sentence::Or(disjuncts) => {
                for disjunct in disjuncts {
                    if disjunct.evaluate(model)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }

            Sentence::Implication(antecedent, consequent) => match antecedent.evaluate(model)? {
                true => consequent.evaluate(model),
                false => Ok(true),
            },

            Sentence::Biconditional(left, right) => {
                let left_value = left.evaluate(model)?;
                let right_value = right.evaluate(model)?;
                Ok(left_value == right_value)
            }
        }
    }

    /// The names of every atom in the sentence.
    pub fn symbols(&self) -> BTreeSet<Atom> {
        let mut symbols = BTreeSet::default();
        self.extend_symbols(&mut symbols);
        symbols
    }

    /// Adds the names of every atom in the sentence to `symbols`.
    pub fn extend_symbols(&self, symbols: &mut BTreeSet<Atom>) {
        match self {
            Sentence::Symbol(symbol) => {
                if !symbols.contains(symbol.name()) {
                    symbols.insert(symbol.name().to_string());
                }
            }

            Sentence::Not(operand) => operand.extend_symbols(symbols),

            Sentence::And(sentences) | Sentence::Or(sentences) => {
                for sentence in sentences {
                    sentence.extend_symbols(symbols);
                }
            }

            Sentence::Implication(left, right) | Sentence::Biconditional(left, right) => {
                left.extend_symbols(symbols);
                right.extend_symbols(symbols);
            }
        }
    }
}

#[cfg(test)]
mod evaluate_tests {
    use std::collections::HashMap;

    use super::*;

    fn symbols<const N: usize>(names: [&str; N]) -> [Sentence; N] {
        names.map(|name| Sentence::symbol(name).unwrap())
    }

    fn all_models(names: [&'static str; 2]) -> Vec<HashMap<&'static str, bool>> {
        let mut models = Vec::default();
        for first in [true, false] {
            for second in [true, false] {
                models.push(HashMap::from([(names[0], first), (names[1], second)]));
            }
        }
        models
    }

    #[test]
    fn truth_tables() {
        let [p, q] = symbols(["p", "q"]);

        for model in all_models(["p", "q"]) {
            let (vp, vq) = (model["p"], model["q"]);

            assert_eq!(p.evaluate(&model), Ok(vp));
            assert_eq!((!p.clone()).evaluate(&model), Ok(!vp));
            assert_eq!((p.clone() & q.clone()).evaluate(&model), Ok(vp && vq));
            assert_eq!((p.clone() | q.clone()).evaluate(&model), Ok(vp || vq));
            assert_eq!(p.clone().implies(q.clone()).evaluate(&model), Ok(!vp || vq));
            assert_eq!(p.clone().iff(q.clone()).evaluate(&model), Ok(vp == vq));
        }
    }

    #[test]
    fn vacuous_junctions() {
        let empty: HashMap<&str, bool> = HashMap::default();
        assert_eq!(Sentence::and([]).evaluate(&empty), Ok(true));
        assert_eq!(Sentence::or([]).evaluate(&empty), Ok(false));

        let model = HashMap::from([("p", false)]);
        assert_eq!(Sentence::and([]).evaluate(&model), Ok(true));
        assert_eq!(Sentence::or([]).evaluate(&model), Ok(false));
    }

    #[test]
    fn unbound_variable() {
        let [p, q] = symbols(["p", "q"]);
        let model = HashMap::from([("p", true)]);

        assert_eq!(
            q.evaluate(&model),
            Err(err::ErrorKind::Evaluation(EvaluationError::UnboundVariable(
                "q".to_string()
            )))
        );

        // The unbound variable is never read.
        assert_eq!((p.clone() | q.clone()).evaluate(&model), Ok(true));
        // The unbound variable is read.
        assert!((p.clone() & q.clone()).evaluate(&model).is_err());
        assert!(p.iff(q).evaluate(&model).is_err());
    }

    #[test]
    fn symbols_of_symbol() {
        let [p] = symbols(["p"]);
        assert_eq!(p.symbols(), BTreeSet::from(["p".to_string()]));
    }

    #[test]
    fn symbols_of_empty_junctions() {
        assert!(Sentence::and([]).symbols().is_empty());
        assert!(Sentence::or([]).symbols().is_empty());
        assert!(Sentence::and([Sentence::or([]), Sentence::and([])])
            .symbols()
            .is_empty());
    }

    #[test]
    fn symbols_of_composites() {
        let [p, q, r] = symbols(["p", "q", "r"]);
        let sentence = Sentence::and([
            p.clone().iff(q.clone()),
            !r.clone(),
            q.clone().implies(p.clone()),
        ]);

        let expected = ["p", "q", "r"]
            .map(|name| name.to_string())
            .into_iter()
            .collect::<BTreeSet<_>>();
        assert_eq!(sentence.symbols(), expected);

        // Both sides of a biconditional contribute.
        assert_eq!(p.iff(r).symbols().len(), 2);
    }
}
