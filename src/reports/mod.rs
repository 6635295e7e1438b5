/*!
Reports for the context.

A [Report] classifies a query relative to some knowledge:

| Report         | Knowledge entails the query | Knowledge entails the negation of the query |
|----------------|-----------------------------|---------------------------------------------|
| `Present`      | yes                         | no                                          |
| `Absent`       | no                          | yes                                         |
| `Undetermined` | no                          | no                                          |
| `Inconsistent` | yes                         | yes                                         |

The final case happens only when the knowledge is unsatisfiable, as then every query (and its negation) is entailed.
*/

/// High-level reports regarding a query.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Report {
    /// The query is true on every model of the knowledge.
    Present,

    /// The query is false on every model of the knowledge.
    Absent,

    /// The query is true on some model of the knowledge, and false on some other.
    Undetermined,

    /// The knowledge has no model.
    Inconsistent,
}

impl Report {
    /// The report, given whether the query and the negation of the query are entailed.
    pub fn from_entailments(query: bool, negation: bool) -> Self {
        match (query, negation) {
            (true, false) => Self::Present,
            (false, true) => Self::Absent,
            (false, false) => Self::Undetermined,
            (true, true) => Self::Inconsistent,
        }
    }

    /// Whether the value of the query is fixed by the knowledge (and the knowledge is consistent).
    pub fn is_determined(&self) -> bool {
        matches!(self, Self::Present | Self::Absent)
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Present => write!(f, "YES"),
            Self::Absent => write!(f, "NO"),
            Self::Undetermined => write!(f, "MAYBE"),
            Self::Inconsistent => write!(f, "INCONSISTENT"),
        }
    }
}
