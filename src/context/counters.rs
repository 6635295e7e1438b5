use std::time::Duration;

/// Counts for various things which count.
///
/// A *leaf* is a total valuation of the symbols of a query on which the knowledge (and perhaps the query) was evaluated.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of every entailment check made.
    pub total_queries: usize,

    /// A count of every leaf examined.
    pub total_leaves: usize,

    /// A count of leaves examined by the most recent entailment check.
    pub last_leaves: usize,

    /// The time taken by all entailment checks.
    pub time: Duration,
}
