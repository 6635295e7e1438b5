/*!
Atoms (aka. 'variables'), and the symbols which name them.

An atom is a name to which assigning a (boolean) value (true or false) is of interest.
Names are strings of characters which:
- Are non-empty.
- Contain no whitespace.
- Contain no parentheses or operator glyphs (`¬`, `∧`, `∨`, `=`, `<`, `>`).
- Contain no `-`, which marks a false atom in the [string](crate::structures::valuation::valuation_string) of a valuation.

Examples: `p`, `ColMustard`, `atom_one`, `96`.

These restrictions ensure the [formula](crate::structures::sentence::Sentence::formula) of a sentence, and the string of a valuation, are unambiguous, as any rendering free of the reserved characters is the name of a single atom.

```rust
# use otter_logic::structures::atom::Symbol;
let p = Symbol::new("p").unwrap();
assert_eq!(p.name(), "p");

assert!(Symbol::new("").is_err());
assert!(Symbol::new("p q").is_err());
assert!(Symbol::new("(p)").is_err());
```

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

use crate::types::err::{self, OperandError};

/// An atom, aka. a 'variable', identified by name.
pub type Atom = String;

/// Characters which may not appear in the name of an atom.
pub const RESERVED: [char; 9] = ['(', ')', '¬', '∧', '∨', '=', '<', '>', '-'];

/// A symbol, the leaf of a sentence.
///
/// The name of a symbol is checked on creation, and there is no way to revise the name after.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    name: Atom,
}

impl Symbol {
    /// A symbol with the given name, if the name is valid.
    pub fn new(name: impl Into<Atom>) -> Result<Self, err::ErrorKind> {
        let name = name.into();
        check_name(&name)?;
        Ok(Symbol { name })
    }

    /// The name of the symbol.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl std::fmt::Debug for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Ok if `name` may be used as the name of an atom.
pub fn check_name(name: &str) -> Result<(), OperandError> {
    if name.is_empty() {
        return Err(OperandError::EmptyName);
    }

    match name
        .chars()
        .find(|c| c.is_whitespace() || RESERVED.contains(c))
    {
        Some(c) => Err(OperandError::ReservedCharacter(c)),
        None => Ok(()),
    }
}

/// Whether `name` may be used as the name of an atom.
pub fn is_name(name: &str) -> bool {
    check_name(name).is_ok()
}
