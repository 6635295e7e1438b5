/*!
The context --- to which knowledge is added and within which queries take place, etc.

A context holds:
- A knowledge base, as a conjunction which grows as sentences are [added](Context::add).
- A [configuration](crate::config), which determines how queries are checked.
- [Counters] of the work done by queries.

Queries are checked from scratch each time, and so any addition to the knowledge base is reflected in the next query. \
As additions require a mutable borrow of the context, no query may be in progress while knowledge is added.

# Example
```rust
# use otter_logic::context::Context;
# use otter_logic::config::Config;
# use otter_logic::reports::Report;
# use otter_logic::structures::sentence::Sentence;
let mut the_context = Context::from_config(Config::default());

let p = Sentence::symbol("p").unwrap();
let q = Sentence::symbol("q").unwrap();

assert!(the_context.add(p.clone() | q.clone()).is_ok());
assert_eq!(the_context.classify(&q), Ok(Report::Undetermined));

assert!(the_context.add(!p.clone()).is_ok());
assert_eq!(the_context.classify(&p), Ok(Report::Absent));
assert_eq!(the_context.classify(&q), Ok(Report::Present));
```
*/

mod counters;
pub use counters::Counters;

use std::collections::BTreeSet;

use crate::{
    config::Config,
    misc::log::targets::{self},
    structures::{atom::Atom, sentence::Sentence},
    types::err::{self},
};

/// A knowledge base, together with configuration and counters for queries on the knowledge base.
pub struct Context {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to queries.
    pub counters: Counters,

    /// The knowledge base, which is always a conjunction.
    pub(crate) knowledge: Sentence,
}

impl Context {
    /// Creates a context with empty knowledge from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self::from_knowledge(config, Sentence::and([]))
    }

    /// Creates a context from some given configuration and knowledge.
    ///
    /// A conjunction is used as the knowledge base as is, while any other sentence becomes the sole conjunct of the knowledge base.
    pub fn from_knowledge(config: Config, knowledge: Sentence) -> Self {
        let knowledge = match knowledge {
            Sentence::And(_) => knowledge,
            other => Sentence::and([other]),
        };

        Context {
            config,
            counters: Counters::default(),
            knowledge,
        }
    }

    /// Adds `sentence` as a conjunct of the knowledge base.
    pub fn add(&mut self, sentence: Sentence) -> Result<(), err::ErrorKind> {
        log::trace!(target: targets::KNOWLEDGE, "Adding: {sentence}");
        self.knowledge.add(sentence)
    }

    /// The knowledge base, as a conjunction.
    pub fn knowledge(&self) -> &Sentence {
        &self.knowledge
    }

    /// The knowledge base, consuming the context.
    pub fn into_knowledge(self) -> Sentence {
        self.knowledge
    }

    /// The symbols of the knowledge base.
    pub fn symbols(&self) -> BTreeSet<Atom> {
        self.knowledge.symbols()
    }
}

#[cfg(test)]
mod context_tests {
    use super::*;

    #[test]
    fn knowledge_is_a_conjunction() {
        let p = Sentence::symbol("p").unwrap();

        let the_context = Context::from_knowledge(Config::default(), p.clone());
        assert_eq!(the_context.knowledge(), &Sentence::and([p.clone()]));

        let the_context = Context::from_knowledge(Config::default(), Sentence::and([p.clone()]));
        assert_eq!(the_context.knowledge(), &Sentence::and([p]));
    }

    #[test]
    fn additions() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.symbols().is_empty());

        let [p, q] = ["p", "q"].map(|name| Sentence::symbol(name).unwrap());
        assert!(the_context.add(p.clone()).is_ok());
        assert!(the_context.add(p.clone().implies(q.clone())).is_ok());

        assert_eq!(the_context.symbols().len(), 2);
        assert_eq!(the_context.knowledge().formula(), "p ∧ (p => q)");
        assert_eq!(the_context.into_knowledge(), Sentence::and([p.clone(), p.implies(q)]));
    }
}
