/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [entailment](crate::procedures::entails)
    pub const ENTAILMENT: &str = "entailment";

    /// Logs related to the knowledge base of a [context](crate::context)
    pub const KNOWLEDGE: &str = "knowledge";

    /// Logs related to [classification](crate::procedures::classify)
    pub const CLASSIFICATION: &str = "classification";
}
