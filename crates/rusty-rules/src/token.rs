// File: rusty-rules/src/token.rs
// Purpose: Single validation-rule token (name + string-coerced parameters)

use serde::{Deserialize, Serialize};

/// One named, optionally-parameterized validation directive.
///
/// The canonical string form is what the external validation engine
/// consumes: `name` when there are no parameters, otherwise
/// `name:param1,param2,...`. The `Display` impl produces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleToken {
    name: String,
    params: Vec<String>,
}

impl RuleToken {
    /// Create a token from a rule name and already-normalized parameters.
    pub fn new(name: impl Into<String>, params: Vec<String>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// Rule name, used verbatim as the token prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordered parameters; empty means a bare token.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Canonical `name` or `name:p1,p2` form.
    ///
    /// Deduplication inside the builder is keyed on this string, not on the
    /// name alone, so the same rule with different parameters is kept.
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for RuleToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.params.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}:{}", self.name, self.params.join(","))
        }
    }
}
