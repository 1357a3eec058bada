// File: rusty-rules/src/error.rs
// Purpose: Error type for the strict dispatch surface

/// Errors produced by the catalogue-checked lookup ([`RuleBuilder::try_rule`]).
///
/// The default builder surface is permissive and never fails; this type only
/// appears when a caller opts into strict dispatch.
///
/// [`RuleBuilder::try_rule`]: crate::RuleBuilder::try_rule
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// The requested name matched no known rule after normalization.
    #[error("Unknown rule: {0}")]
    UnknownRule(String),
}
