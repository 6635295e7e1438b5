/*!
A procedure to determine whether some knowledge entails some query.

Knowledge 𝐊 *entails* a query 𝐐 if and only if 𝐐 is true on every valuation on which 𝐊 is true.

# Overview

The procedure is model checking by exhaustive enumeration:
- The symbols 𝐒 of 𝐊 and 𝐐 are collected, and ordered (see [SymbolOrder](crate::config::SymbolOrder)).
- Starting from the empty valuation, the first unvalued symbol is split on: the check is made once with the symbol valued true and once with the symbol valued false, and the entailment holds only if both checks hold.
- When every symbol has a value (a *leaf*), the check holds if 𝐊 is false, or if both 𝐊 and 𝐐 are true.

So, for an entailment which holds, each of the 2^|𝐒| valuations of 𝐒 is examined.
For an entailment which does not hold, the check stops at the first valuation on which 𝐊 is true and 𝐐 is false (a counter-model), with the exception of branches examined in parallel, which run to completion.

The procedure is exponential in the count of symbols, and no attempt is made to do better.
In particular, neither the knowledge nor the query is simplified, and no valuation is skipped.

# Parallel checks

If [parallel](crate::config::Config::parallel), the two branches of each of the first [parallel_depth](crate::config::Config::parallel_depth) splits are examined on separate (scoped) threads.
Each branch owns its own copy of the partial valuation, and the only shared state is a count of leaves examined.

```rust
# use otter_logic::procedures::entails::entails;
# use otter_logic::structures::sentence::Sentence;
let [p, q] = ["p", "q"].map(|name| Sentence::symbol(name).unwrap());

let knowledge = Sentence::and([p.clone().implies(q.clone()), p.clone()]);
assert_eq!(entails(&knowledge, &q), Ok(true));
assert_eq!(entails(&knowledge, &!q.clone()), Ok(false));
assert_eq!(entails(&(p | q.clone()), &q), Ok(false));
```
*/

use std::{
    collections::{BTreeSet, HashMap},
    sync::atomic::{AtomicUsize, Ordering},
    time::Instant,
};

use rand::seq::SliceRandom;

use crate::{
    config::{Config, SymbolOrder},
    context::Context,
    generic::random::MinimalPCG32,
    misc::log::targets::{self},
    structures::{atom::Atom, sentence::Sentence},
    types::err::{self, EntailmentError},
};

/// A partial valuation, borrowing names from the ordered symbols of a check.
type PartialModel<'o> = HashMap<&'o str, bool>;

/// The result of a model check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModelCheckReport {
    /// Whether the knowledge entails the query.
    pub entailed: bool,

    /// The count of (total) valuations examined.
    pub leaves: usize,
}

/// Whether `knowledge` entails `query`, using the default configuration.
pub fn entails(knowledge: &Sentence, query: &Sentence) -> Result<bool, err::ErrorKind> {
    Ok(model_check(knowledge, query, &Config::default())?.entailed)
}

/// Whether `knowledge` has some model, using the default configuration.
///
/// Knowledge is unsatisfiable exactly when it entails the empty disjunction, and this is checked by the same enumeration as any other entailment.
pub fn satisfiable(knowledge: &Sentence) -> Result<bool, err::ErrorKind> {
    Ok(!entails(knowledge, &Sentence::or([]))?)
}

/// Checks whether `knowledge` entails `query`, with respect to `config`.
pub fn model_check(
    knowledge: &Sentence,
    query: &Sentence,
    config: &Config,
) -> Result<ModelCheckReport, err::ErrorKind> {
    let mut symbols = knowledge.symbols();
    query.extend_symbols(&mut symbols);
    let order = case_split_order(symbols, config);

    log::debug!(target: targets::ENTAILMENT, "Checking {query} on 2^{} valuations", order.len());

    let check = ModelCheck {
        knowledge,
        query,
        leaves: AtomicUsize::new(0),
    };

    let entailed = check.check_all(
        &order,
        PartialModel::with_capacity(order.len()),
        config.fork_depth(),
    )?;
    let leaves = check.leaves.into_inner();

    log::debug!(target: targets::ENTAILMENT, "Entailed: {entailed} after {leaves} valuations");

    Ok(ModelCheckReport { entailed, leaves })
}

/// The order in which `symbols` are split on.
pub fn case_split_order(symbols: BTreeSet<Atom>, config: &Config) -> Vec<Atom> {
    let mut order = symbols.into_iter().collect::<Vec<_>>();

    match config.symbol_order.value {
        SymbolOrder::Lexicographic => {}

        SymbolOrder::Shuffled => {
            let mut rng = MinimalPCG32::from_u64_seed(config.seed.value);
            order.shuffle(&mut rng);
        }
    }

    order
}

struct ModelCheck<'s> {
    knowledge: &'s Sentence,
    query: &'s Sentence,
    leaves: AtomicUsize,
}

impl ModelCheck<'_> {
    fn check_all<'o>(
        &self,
        remaining: &'o [Atom],
        model: PartialModel<'o>,
        fork_depth: usize,
    ) -> Result<bool, err::ErrorKind> {
        let Some((atom, remaining)) = remaining.split_first() else {
            return self.check_leaf(&model);
        };

        let mut model_true = model.clone();
        model_true.insert(atom.as_str(), true);

        let mut model_false = model;
        model_false.insert(atom.as_str(), false);

        match fork_depth {
            0 => Ok(self.check_all(remaining, model_true, 0)?
                && self.check_all(remaining, model_false, 0)?),

            _ => {
                let (true_branch, false_branch) = crossbeam::scope(|scope| {
                    let handle =
                        scope.spawn(move |_| self.check_all(remaining, model_true, fork_depth - 1));
                    let false_branch = self.check_all(remaining, model_false, fork_depth - 1);
                    (handle.join(), false_branch)
                })
                .map_err(|_| EntailmentError::WorkerPanic)?;

                let true_branch = true_branch.map_err(|_| EntailmentError::WorkerPanic)?;
                Ok(true_branch? && false_branch?)
            }
        }
    }

    fn check_leaf(&self, model: &PartialModel) -> Result<bool, err::ErrorKind> {
        self.leaves.fetch_add(1, Ordering::Relaxed);

        match self.knowledge.evaluate(model)? {
            true => {
                let holds = self.query.evaluate(model)?;
                if !holds {
                    log::trace!(target: targets::ENTAILMENT, "Counter-model: {model:?}");
                }
                Ok(holds)
            }

            false => Ok(true),
        }
    }
}

impl Context {
    /// Whether the knowledge of the context entails `query`.
    ///
    /// Counters are updated with the count of valuations examined.
    pub fn entails(&mut self, query: &Sentence) -> Result<bool, err::ErrorKind> {
        let start = Instant::now();
        let report = model_check(&self.knowledge, query, &self.config)?;

        self.counters.total_queries += 1;
        self.counters.last_leaves = report.leaves;
        self.counters.total_leaves += report.leaves;
        self.counters.time += start.elapsed();

        Ok(report.entailed)
    }

    /// Whether the knowledge of the context has some model.
    pub fn satisfiable(&mut self) -> Result<bool, err::ErrorKind> {
        Ok(!self.entails(&Sentence::or([]))?)
    }
}

#[cfg(test)]
mod entails_tests {
    use super::*;

    fn symbols<const N: usize>(names: [&str; N]) -> [Sentence; N] {
        names.map(|name| Sentence::symbol(name).unwrap())
    }

    #[test]
    fn modus_ponens() {
        let [p, q] = symbols(["p", "q"]);
        let knowledge = Sentence::and([p.clone().implies(q.clone()), p.clone()]);

        assert_eq!(entails(&knowledge, &q), Ok(true));
        assert_eq!(entails(&knowledge, &p), Ok(true));
        assert_eq!(entails(&knowledge, &!q), Ok(false));
    }

    #[test]
    fn no_symbols() {
        let empty = Sentence::and([]);
        assert_eq!(entails(&empty, &Sentence::and([])), Ok(true));
        assert_eq!(entails(&empty, &Sentence::or([])), Ok(false));

        let report = model_check(&empty, &Sentence::and([]), &Config::default()).unwrap();
        assert_eq!(report.leaves, 1);
    }

    #[test]
    fn query_symbols_are_valued() {
        // The query mentions a symbol the knowledge does not.
        let [p, q] = symbols(["p", "q"]);
        assert_eq!(entails(&p, &(q.clone() | !q.clone())), Ok(true));
        assert_eq!(entails(&p, &q), Ok(false));
    }

    #[test]
    fn every_valuation_is_examined() {
        let [p, q, r, s] = symbols(["p", "q", "r", "s"]);
        let knowledge = Sentence::and([p.clone(), q.clone().implies(r.clone()), s.clone() | !s]);
        let query = p.clone() | r.clone();

        let report = model_check(&knowledge, &query, &Config::default()).unwrap();
        assert!(report.entailed);
        assert_eq!(report.leaves, 16);
    }

    #[test]
    fn counter_model_stops_the_check() {
        let [p, q, r] = symbols(["p", "q", "r"]);
        let knowledge = p.clone() | q.clone() | r;

        let report = model_check(&knowledge, &p, &Config::default()).unwrap();
        assert!(!report.entailed);
        assert!(report.leaves < 8);
    }

    #[test]
    fn unsatisfiable_knowledge() {
        let [p, q] = symbols(["p", "q"]);
        let contradiction = p.clone() & !p.clone();

        assert_eq!(satisfiable(&contradiction), Ok(false));
        assert_eq!(entails(&contradiction, &q), Ok(true));
        assert_eq!(entails(&contradiction, &!q), Ok(true));

        assert_eq!(satisfiable(&p), Ok(true));
        assert_eq!(satisfiable(&Sentence::or([])), Ok(false));
        assert_eq!(satisfiable(&Sentence::and([])), Ok(true));
    }

    #[test]
    fn shuffled_order_is_reproducible() {
        let mut config = Config::default();
        config.symbol_order.value = SymbolOrder::Shuffled;
        config.seed.value = 97;

        let symbols = (0..12).map(|i| format!("p{i}")).collect::<BTreeSet<_>>();

        let first = case_split_order(symbols.clone(), &config);
        let second = case_split_order(symbols.clone(), &config);
        assert_eq!(first, second);

        let mut sorted = first.clone();
        sorted.sort();
        assert_eq!(sorted, symbols.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn configuration_does_not_change_results() {
        let [p, q, r, s] = symbols(["p", "q", "r", "s"]);
        let knowledge = Sentence::and([
            p.clone().iff(q.clone()),
            q.clone().implies(r.clone() | s.clone()),
            !s.clone(),
        ]);
        let queries = [p.clone().implies(r.clone()), r.clone(), !s, p | r];

        let mut configs = Vec::default();
        for parallel in [false, true] {
            for order in [SymbolOrder::Lexicographic, SymbolOrder::Shuffled] {
                let mut config = Config::default();
                config.parallel.value = parallel;
                config.parallel_depth.value = 2;
                config.symbol_order.value = order;
                config.seed.value = 3;
                configs.push(config);
            }
        }

        for query in &queries {
            let expected = entails(&knowledge, query).unwrap();
            for config in &configs {
                let report = model_check(&knowledge, query, config).unwrap();
                assert_eq!(report.entailed, expected, "{query} with {config:?}");
                if expected {
                    assert_eq!(report.leaves, 16);
                }
            }
        }
    }

    #[test]
    fn context_counters() {
        let [p, q] = symbols(["p", "q"]);
        let mut the_context = Context::from_knowledge(Config::default(), p.clone());

        assert_eq!(the_context.entails(&(p.clone() | q.clone())), Ok(true));
        assert_eq!(the_context.counters.last_leaves, 4);

        assert_eq!(the_context.entails(&p), Ok(true));
        assert_eq!(the_context.counters.last_leaves, 2);

        assert_eq!(the_context.counters.total_queries, 2);
        assert_eq!(the_context.counters.total_leaves, 6);

        assert_eq!(the_context.satisfiable(), Ok(true));
        assert!(the_context.add(!p).is_ok());
        assert_eq!(the_context.satisfiable(), Ok(false));
    }
}
