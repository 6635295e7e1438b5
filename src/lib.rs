//! A library for representing sentences of propositional logic and determining what follows from them.
//!
//! otter_logic represents sentences as trees of symbols, negations, conjunctions, disjunctions, implications, and biconditionals.
//! Sentences may be evaluated on a valuation, printed as formulas, and used as knowledge to answer queries: does the knowledge force some query to be true, false, or neither?
//!
//! Queries are answered by model checking: every valuation of every symbol mentioned by the knowledge and the query is examined.
//! This is exponential in the count of symbols, deliberately so.
//! The library is intended for small knowledge bases, such as those of logic puzzles, where the simplicity of the procedure is worth more than speed.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a [configuration](crate::config) and hold a knowledge base, which grows as sentences are [added](crate::context::Context::add).
//! Queries on the knowledge base are made through [entails](crate::context::Context::entails) and [classify](crate::context::Context::classify).
//!
//! Useful starting points, then, may be:
//! - The [sentence](crate::structures::sentence) structure, to see how sentences are built, evaluated, and printed.
//! - The [entailment procedure](crate::procedures::entails), to see how queries are answered.
//! - The [reports](crate::reports), to see how queries are classified.
//!
//! # Examples
//!
//! + Determine who committed a crime.
//!
//! ```rust
//! # use otter_logic::config::Config;
//! # use otter_logic::context::Context;
//! # use otter_logic::reports::Report;
//! # use otter_logic::structures::sentence::Sentence;
//! let [mustard, plum, scarlet] =
//!     ["ColMustard", "ProfPlum", "MsScarlet"].map(|name| Sentence::symbol(name).unwrap());
//!
//! let mut the_context = Context::from_config(Config::default());
//! the_context.add(Sentence::or([mustard.clone(), plum.clone(), scarlet.clone()]));
//! assert_eq!(the_context.classify(&plum), Ok(Report::Undetermined));
//!
//! the_context.add(!plum.clone());
//! the_context.add(!scarlet.clone());
//!
//! assert_eq!(the_context.classify(&mustard), Ok(Report::Present));
//! assert_eq!(the_context.classify(&plum), Ok(Report::Absent));
//! ```
//!
//! + Print a formula.
//!
//! ```rust
//! # use otter_logic::structures::sentence::Sentence;
//! let [rain, hagrid, dumbledore] =
//!     ["rain", "hagrid", "dumbledore"].map(|name| Sentence::symbol(name).unwrap());
//!
//! let knowledge = Sentence::and([
//!     (!rain.clone()).implies(hagrid.clone()),
//!     hagrid.clone() | dumbledore.clone(),
//!     !(hagrid & dumbledore),
//! ]);
//!
//! assert_eq!(knowledge.formula(), "(¬rain => hagrid) ∧ (hagrid ∨ dumbledore) ∧ ¬(hagrid ∧ dumbledore)");
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made during queries, with targets listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - The result of each classification can be found with `RUST_LOG=classification=info …`
//! - Counter-models found during entailment checks can be found with `RUST_LOG=entailment=trace …`

#![allow(mixed_script_confusables)]
#![allow(unused_must_use)]
#![allow(clippy::single_match)]

pub mod procedures;

pub mod config;
pub mod context;
pub mod reports;
pub mod structures;
pub mod types;

pub mod generic;

pub mod misc;
