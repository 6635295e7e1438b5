//! Key structures, such as symbols, sentences, and valuations.
//!
//! # Sentences
//!
//! A [sentence](sentence::Sentence) is a tree whose leaves are symbols and whose internal nodes are negations, conjunctions, disjunctions, implications, and biconditionals.
//! Each node owns its children, and so a sentence is always a tree (no sharing, no cycles).
//!
//! ## Languages
//! A *language* 𝓛 is some set of [atoms](atom), closed under the connectives above. \
//! Every sentence is expressed in the language of the symbols it mentions, given by [symbols](sentence::Sentence::symbols).
//!
//! ## (Boolean) values
//!
//! A (boolean) value is one of two things, identified as [true] and [false].
//! A [valuation] (or *model*) maps atoms to values, and a sentence is evaluated relative to some valuation.

pub mod atom;
pub mod sentence;
pub mod valuation;
