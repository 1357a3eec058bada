// File: rusty-rules/src/dispatch.rs
// Purpose: Normalized-name lookup over the static rule catalogue

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// How a catalogue entry handles forwarded parameters.
#[derive(Debug, Clone, Copy)]
pub(crate) enum KnownRule {
    /// Emit a token with this canonical name and the forwarded parameters.
    Emit(&'static str),
    /// Chain starter; appends nothing.
    Start,
}

// Canonical token names, exactly as the validation engine expects them.
static KNOWN_RULES: Lazy<HashMap<String, KnownRule>> = Lazy::new(|| {
    let mut rules = HashMap::new();
    rules.insert(normalize("string"), KnownRule::Start);
    for name in [
        "required",
        "requiredWith",
        "confirmed",
        "same",
        "different",
        "accepted",
        "numeric",
        "integer",
        "digits",
        "digitsBetween",
        "size",
        "between",
        "min",
        "max",
        "in",
        "notIn",
        "unique",
        "exists",
        "ip",
        "email",
        "url",
        "activeUrl",
        "image",
        "mimes",
        "alpha",
        "alphaNum",
        "alphaDash",
        "regex",
        "date",
        "dateFormat",
        "before",
        "after",
    ] {
        rules.insert(normalize(name), KnownRule::Emit(name));
    }
    rules
});

/// Normalize an invocation name for catalogue lookup.
///
/// Case- and separator-insensitive: `digitsBetween`, `digits_between` and
/// `DIGITS-BETWEEN` all collapse to `digitsbetween`.
pub(crate) fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Look up a requested name in the catalogue; `None` means the name belongs
/// to the caller's own rule vocabulary.
pub(crate) fn lookup(name: &str) -> Option<KnownRule> {
    KNOWN_RULES.get(normalize(name).as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_case_and_separators() {
        assert_eq!(normalize("digitsBetween"), "digitsbetween");
        assert_eq!(normalize("digits_between"), "digitsbetween");
        assert_eq!(normalize("DIGITS-BETWEEN"), "digitsbetween");
        assert_eq!(normalize("required"), "required");
    }

    #[test]
    fn test_catalogue_is_complete() {
        let names = [
            "string",
            "required",
            "requiredWith",
            "confirmed",
            "same",
            "different",
            "accepted",
            "numeric",
            "integer",
            "digits",
            "digitsBetween",
            "size",
            "between",
            "min",
            "max",
            "in",
            "notIn",
            "unique",
            "exists",
            "ip",
            "email",
            "url",
            "activeUrl",
            "image",
            "mimes",
            "alpha",
            "alphaNum",
            "alphaDash",
            "regex",
            "date",
            "dateFormat",
            "before",
            "after",
        ];
        for name in names {
            assert!(lookup(name).is_some(), "missing catalogue entry: {}", name);
        }
        assert!(lookup("bogus").is_none());
    }

    #[test]
    fn test_emitted_names_keep_camel_case() {
        match lookup("digits_between") {
            Some(KnownRule::Emit(name)) => assert_eq!(name, "digitsBetween"),
            other => panic!("digits_between should emit, got {:?}", other),
        }
        match lookup("ACTIVE_URL") {
            Some(KnownRule::Emit(name)) => assert_eq!(name, "activeUrl"),
            other => panic!("ACTIVE_URL should emit, got {:?}", other),
        }
    }

    #[test]
    fn test_string_is_a_chain_starter() {
        assert!(matches!(lookup("string"), Some(KnownRule::Start)));
    }
}
