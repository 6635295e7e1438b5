/*!
A procedure to classify a query relative to some knowledge.

The query is checked for entailment, and so is the negation of the query.
The pair of results is then a [Report]:
- If only the query is entailed the query is *present*.
- If only the negation is entailed the query is *absent*.
- If neither is entailed the query is *undetermined*.
- If both are entailed, the knowledge is *inconsistent*.

A knowledge base which is inconsistent entails every query, and so the final case is reported in place of some arbitrary choice between present or absent.

```rust
# use otter_logic::procedures::classify::classify;
# use otter_logic::reports::Report;
# use otter_logic::structures::sentence::Sentence;
let [p, q] = ["p", "q"].map(|name| Sentence::symbol(name).unwrap());

let knowledge = Sentence::and([p.clone() | q.clone(), !p.clone()]);
assert_eq!(classify(&knowledge, &q), Ok(Report::Present));
assert_eq!(classify(&knowledge, &p), Ok(Report::Absent));

let contradiction = Sentence::and([p.clone(), !p]);
assert_eq!(classify(&contradiction, &q), Ok(Report::Inconsistent));
```
*/

use crate::{
    config::Config,
    context::Context,
    misc::log::targets::{self},
    reports::Report,
    structures::sentence::Sentence,
    types::err::{self},
};

use super::entails::model_check;

/// The report on `query` relative to `knowledge`, using the default configuration.
pub fn classify(knowledge: &Sentence, query: &Sentence) -> Result<Report, err::ErrorKind> {
    let config = Config::default();
    let query_entailed = model_check(knowledge, query, &config)?.entailed;
    let negation_entailed = model_check(knowledge, &Sentence::not(query.clone()), &config)?.entailed;

    Ok(Report::from_entailments(query_entailed, negation_entailed))
}

impl Context {
    /// The report on `query` relative to the knowledge of the context.
    pub fn classify(&mut self, query: &Sentence) -> Result<Report, err::ErrorKind> {
        let query_entailed = self.entails(query)?;
        let negation_entailed = self.entails(&Sentence::not(query.clone()))?;

        let report = Report::from_entailments(query_entailed, negation_entailed);
        log::info!(target: targets::CLASSIFICATION, "{query}: {report}");

        Ok(report)
    }

    /// A report on each query relative to the knowledge of the context, in the order given.
    pub fn classify_all<'q>(
        &mut self,
        queries: impl IntoIterator<Item = &'q Sentence>,
    ) -> Result<Vec<(&'q Sentence, Report)>, err::ErrorKind> {
        let mut reports = Vec::default();
        for query in queries {
            reports.push((query, self.classify(query)?));
        }
        Ok(reports)
    }
}
