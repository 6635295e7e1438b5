//! Procedures on knowledge and queries.
//!
//! Each procedure is available as a function over sentences, and as a method on a [context](crate::context), which applies the configuration of the context.
//!
//! - [entails] --- whether some knowledge entails some query.
//! - [classify] --- whether a query is present, absent, or undetermined, relative to some knowledge.
//! - [models] --- every model of some knowledge.

pub mod classify;
pub mod entails;
pub mod models;
