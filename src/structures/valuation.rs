/*!
A (partial) function from atoms to truth values, aka. a 'model'.

If all atoms of interest are assigned a value the valuation is 'total', otherwise the valuation is 'partial'.

The canonical representation of a valuation is a map from atom names to booleans, where an atom without an entry has no value.
The trait is implemented for the standard maps, keyed by anything which borrows as a string.

```rust
# use std::collections::HashMap;
# use otter_logic::structures::valuation::Valuation;
let mut valuation = HashMap::new();
valuation.insert("p", true);
valuation.insert("q", false);

assert_eq!(valuation.value_of("p"), Some(true));
assert_eq!(valuation.value_of("r"), None);
assert_eq!(valuation.atom_count(), 2);
```

Valuations are never stored by the library.
During an [entailment check](crate::procedures::entails) each branch of the enumeration owns its own copy of a partial valuation, which is total at each leaf of the enumeration.
*/

use std::{
    borrow::Borrow,
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

use super::atom::Atom;

/// The canonical representation of a valuation.
pub type Model = BTreeMap<Atom, bool>;

/// A valuation is something which stores some value of an atom and/or perhaps the information that the atom has no value.
pub trait Valuation {
    /// Some value of an atom under the valuation, or otherwise nothing.
    fn value_of(&self, atom: &str) -> Option<bool>;

    /// A count of all the atoms which have a value.
    fn atom_count(&self) -> usize;
}

impl<K, S> Valuation for HashMap<K, bool, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    fn value_of(&self, atom: &str) -> Option<bool> {
        self.get(atom).copied()
    }

    fn atom_count(&self) -> usize {
        self.len()
    }
}

impl<K> Valuation for BTreeMap<K, bool>
where
    K: Borrow<str> + Ord,
{
    fn value_of(&self, atom: &str) -> Option<bool> {
        self.get(atom).copied()
    }

    fn atom_count(&self) -> usize {
        self.len()
    }
}

/// A string representation of a valuation, with each atom listed by name and prefixed with '-' if valued false.
pub fn valuation_string<K: Borrow<str> + Ord>(model: &BTreeMap<K, bool>) -> String {
    model
        .iter()
        .map(|(atom, value)| match value {
            true => atom.borrow().to_string(),
            false => format!("-{}", atom.borrow()),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
