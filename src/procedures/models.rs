/*!
A procedure to find every model of some knowledge.

Each valuation of the symbols of the knowledge is examined, as with [entailment](super::entails), and every valuation on which the knowledge is true is returned.
Models are returned in the order found, valuing each symbol (in lexicographic order) true before false.

```rust
# use otter_logic::procedures::models::models;
# use otter_logic::structures::sentence::Sentence;
let [p, q] = ["p", "q"].map(|name| Sentence::symbol(name).unwrap());

let found = models(&(p | q)).unwrap();
assert_eq!(found.len(), 3);
```
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        sentence::Sentence,
        valuation::{valuation_string, Model},
    },
    types::err::{self},
};

/// Every model of `knowledge`, as a total valuation of the symbols of `knowledge`.
pub fn models(knowledge: &Sentence) -> Result<Vec<Model>, err::ErrorKind> {
    let order = knowledge.symbols().into_iter().collect::<Vec<_>>();

    let mut found = Vec::default();
    collect_models(knowledge, &order, Model::default(), &mut found)?;
    Ok(found)
}

fn collect_models(
    knowledge: &Sentence,
    remaining: &[Atom],
    model: Model,
    found: &mut Vec<Model>,
) -> Result<(), err::ErrorKind> {
    let Some((atom, remaining)) = remaining.split_first() else {
        if knowledge.evaluate(&model)? {
            log::trace!(target: targets::ENTAILMENT, "Model: {}", valuation_string(&model));
            found.push(model);
        }
        return Ok(());
    };

    let mut model_true = model.clone();
    model_true.insert(atom.clone(), true);
    collect_models(knowledge, remaining, model_true, found)?;

    let mut model_false = model;
    model_false.insert(atom.clone(), false);
    collect_models(knowledge, remaining, model_false, found)
}

impl Context {
    /// Every model of the knowledge of the context.
    pub fn models(&self) -> Result<Vec<Model>, err::ErrorKind> {
        models(&self.knowledge)
    }
}

#[cfg(test)]
mod models_tests {
    use crate::structures::valuation::Valuation;

    use super::*;

    fn symbols<const N: usize>(names: [&str; N]) -> [Sentence; N] {
        names.map(|name| Sentence::symbol(name).unwrap())
    }

    #[test]
    fn all_valuations() {
        // The empty conjunction is true on every valuation of every symbol, but has no symbols.
        assert_eq!(models(&Sentence::and([])).unwrap(), vec![Model::default()]);
        assert!(models(&Sentence::or([])).unwrap().is_empty());

        let [a, b, c] = symbols(["a", "b", "c"]);
        let tautology = Sentence::and([a.clone() | !a, b.clone() | !b, c.clone() | !c]);
        assert_eq!(models(&tautology).unwrap().len(), 8);
    }

    #[test]
    fn models_satisfy() {
        let [p, q, r] = symbols(["p", "q", "r"]);
        let knowledge = Sentence::and([p.clone().iff(q.clone()), q.clone() | r.clone()]);

        let found = models(&knowledge).unwrap();
        assert_eq!(found.len(), 3);
        for model in &found {
            assert_eq!(model.atom_count(), 3);
            assert_eq!(knowledge.evaluate(model), Ok(true));
        }

        assert_eq!(found[0].value_of("p"), Some(true));
        assert_eq!(found[2].value_of("p"), Some(false));
    }
}
