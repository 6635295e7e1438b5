/// The order in which symbols are valued during an entailment check.
///
/// The order has no effect on the result of a check, or on the count of valuations examined for an entailment which holds.
/// Though, for an entailment which fails the order may change how soon a counter-model is found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SymbolOrder {
    /// Value symbols in lexicographic order of their names.
    Lexicographic = 0,

    /// Value symbols in a (pseudo)random order, fixed by the seed of the configuration.
    Shuffled,
}

impl std::fmt::Display for SymbolOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexicographic => write!(f, "Lexicographic"),
            Self::Shuffled => write!(f, "Shuffled"),
        }
    }
}

impl SymbolOrder {
    /// The minimum SymbolOrder type.
    pub const MIN: SymbolOrder = SymbolOrder::Lexicographic;

    /// The maximum SymbolOrder type.
    pub const MAX: SymbolOrder = SymbolOrder::Shuffled;
}
