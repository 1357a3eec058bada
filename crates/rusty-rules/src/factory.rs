// File: rusty-rules/src/factory.rs
// Purpose: Entry point handed to registration glue; mints empty builders

use crate::builder::RuleBuilder;
use crate::params::IntoParams;

/// Mints new [`RuleBuilder`]s.
///
/// This is the only capability surrounding registration machinery needs: a
/// zero-argument way to start a fresh, empty rule chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleFactory;

impl RuleFactory {
    /// Create a factory.
    pub fn new() -> Self {
        Self
    }

    /// Start a new, empty rule chain.
    pub fn rule(&self) -> RuleBuilder {
        RuleBuilder::new()
    }

    /// Start a new chain with one named rule already applied, through the
    /// same permissive dispatch as [`RuleBuilder::rule`].
    pub fn make(&self, name: impl AsRef<str>, params: impl IntoParams) -> RuleBuilder {
        RuleBuilder::new().rule(name, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_mints_empty_builders() {
        let factory = RuleFactory::new();
        assert!(factory.rule().is_empty());
    }

    #[test]
    fn test_make_forwards_through_dispatch() {
        let factory = RuleFactory::new();
        assert_eq!(factory.make("required", ()).render(), "required");
        assert_eq!(factory.make("anything", ()).render(), "anything");
    }
}
