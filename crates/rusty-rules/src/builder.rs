// File: rusty-rules/src/builder.rs
// Purpose: Fluent builder that accumulates rule tokens and renders the
// pipe-delimited rule string

use std::fmt::{self, Display};

use serde::Serialize;

use crate::dispatch::{lookup, KnownRule};
use crate::error::RuleError;
use crate::params::IntoParams;
use crate::token::RuleToken;

/// Ordered, deduplicated collection of validation rule tokens.
///
/// Every operation consumes and returns the builder, so rules chain:
///
/// ```
/// use rusty_rules::RuleBuilder;
///
/// let rules = RuleBuilder::new().required().email().max(255);
/// assert_eq!(rules.render(), "required|email|max:255");
/// ```
///
/// Tokens are deduplicated on their canonical string form, so appending the
/// same rule with the same parameters twice is a no-op, while the same rule
/// with different parameters is kept. Insertion order is preserved.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RuleBuilder {
    tokens: Vec<RuleToken>,
}

impl RuleBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    // Append a token unless an identical canonical form is already held.
    fn push(&mut self, name: &str, params: Vec<String>) {
        let token = RuleToken::new(name, params);
        let canonical = token.canonical();
        if self.tokens.iter().any(|t| t.canonical() == canonical) {
            tracing::debug!("Dropping duplicate rule token: {}", canonical);
            return;
        }
        tracing::trace!("Appending rule token: {}", canonical);
        self.tokens.push(token);
    }

    fn with(mut self, name: &str, params: Vec<String>) -> Self {
        self.push(name, params);
        self
    }

    /// Append a token with an arbitrary name.
    ///
    /// The name is used verbatim; parameters are normalized through
    /// [`IntoParams`] and an empty sequence yields a bare token. Inputs are
    /// never second-guessed: the builder formats what it is given.
    pub fn append_token(self, name: impl Into<String>, params: impl IntoParams) -> Self {
        let name = name.into();
        self.with(&name, params.into_params())
    }

    /// Add a rule by name.
    ///
    /// Known names (matched case- and separator-insensitively, so
    /// `"digits_between"` and `"digitsBetween"` are the same rule) emit
    /// their canonical token. Anything else is kept verbatim as a custom
    /// rule, which is how callers extend the vocabulary:
    ///
    /// ```
    /// use rusty_rules::RuleBuilder;
    ///
    /// let rules = RuleBuilder::new().rule("customWithExtra", ("param1", "param2"));
    /// assert_eq!(rules.render(), "customWithExtra:param1,param2");
    /// ```
    pub fn rule(self, name: impl AsRef<str>, params: impl IntoParams) -> Self {
        let name = name.as_ref();
        match lookup(name) {
            Some(KnownRule::Emit(canonical)) => self.with(canonical, params.into_params()),
            Some(KnownRule::Start) => self,
            None => self.with(name, params.into_params()),
        }
    }

    /// Catalogue-checked variant of [`rule`](Self::rule).
    ///
    /// Returns [`RuleError::UnknownRule`] instead of falling through to the
    /// custom-rule path. Opt in when a misspelled rule name should fail
    /// loudly rather than reach the validation engine.
    pub fn try_rule(
        self,
        name: impl AsRef<str>,
        params: impl IntoParams,
    ) -> Result<Self, RuleError> {
        let name = name.as_ref();
        match lookup(name) {
            Some(KnownRule::Emit(canonical)) => Ok(self.with(canonical, params.into_params())),
            Some(KnownRule::Start) => Ok(self),
            None => Err(RuleError::UnknownRule(name.to_string())),
        }
    }

    // ========================================================================
    // Named convenience operations
    // ========================================================================

    /// Start a chain without adding anything.
    pub fn string(self) -> Self {
        self
    }

    /// Require the attribute to be present.
    pub fn required(self) -> Self {
        self.with("required", Vec::new())
    }

    /// Require the attribute when any of the given attributes are present.
    pub fn required_with(self, fields: impl IntoParams) -> Self {
        self.with("requiredWith", fields.into_params())
    }

    /// Require a matching `*_confirmation` attribute.
    pub fn confirmed(self) -> Self {
        self.with("confirmed", Vec::new())
    }

    /// Require the attribute to match another attribute.
    pub fn same(self, field: impl Display) -> Self {
        self.with("same", vec![field.to_string()])
    }

    /// Require the attribute to differ from another attribute.
    pub fn different(self, field: impl Display) -> Self {
        self.with("different", vec![field.to_string()])
    }

    /// Require the attribute to be "accepted" (yes/on/1/true).
    pub fn accepted(self) -> Self {
        self.with("accepted", Vec::new())
    }

    /// Require a numeric value.
    pub fn numeric(self) -> Self {
        self.with("numeric", Vec::new())
    }

    /// Require an integer value.
    pub fn integer(self) -> Self {
        self.with("integer", Vec::new())
    }

    /// Require an exact number of digits.
    pub fn digits(self, length: impl Display) -> Self {
        self.with("digits", vec![length.to_string()])
    }

    /// Require a digit count within the given bounds.
    pub fn digits_between(self, min: impl Display, max: impl Display) -> Self {
        self.with("digitsBetween", vec![min.to_string(), max.to_string()])
    }

    /// Require an exact size.
    pub fn size(self, value: impl Display) -> Self {
        self.with("size", vec![value.to_string()])
    }

    /// Require a size within the given bounds.
    pub fn between(self, min: impl Display, max: impl Display) -> Self {
        self.with("between", vec![min.to_string(), max.to_string()])
    }

    /// Require at least the given size.
    pub fn min(self, value: impl Display) -> Self {
        self.with("min", vec![value.to_string()])
    }

    /// Require at most the given size.
    pub fn max(self, value: impl Display) -> Self {
        self.with("max", vec![value.to_string()])
    }

    /// Require the value to be one of the given values.
    ///
    /// Named `is_in` because `in` is a keyword; the emitted token is still
    /// `in`.
    pub fn is_in(self, values: impl IntoParams) -> Self {
        self.with("in", values.into_params())
    }

    /// Require the value to be none of the given values.
    pub fn not_in(self, values: impl IntoParams) -> Self {
        self.with("notIn", values.into_params())
    }

    /// Require the value to be unique on a database table.
    ///
    /// Arguments are forwarded positionally: table, then optionally column,
    /// except-id and id-column. Trailing arguments that are left off never
    /// appear in the rendered token.
    pub fn unique(self, args: impl IntoParams) -> Self {
        self.with("unique", args.into_params())
    }

    /// Require the value to exist on a database table, positionally:
    /// table, then optionally column.
    pub fn exists(self, args: impl IntoParams) -> Self {
        self.with("exists", args.into_params())
    }

    /// Require a valid IP address.
    pub fn ip(self) -> Self {
        self.with("ip", Vec::new())
    }

    /// Require a valid e-mail address.
    pub fn email(self) -> Self {
        self.with("email", Vec::new())
    }

    /// Require a valid URL.
    pub fn url(self) -> Self {
        self.with("url", Vec::new())
    }

    /// Require a URL with an active DNS record.
    pub fn active_url(self) -> Self {
        self.with("activeUrl", Vec::new())
    }

    /// Require an image upload.
    pub fn image(self) -> Self {
        self.with("image", Vec::new())
    }

    /// Require the upload's MIME type to be one of the given types.
    pub fn mimes(self, values: impl IntoParams) -> Self {
        self.with("mimes", values.into_params())
    }

    /// Require alphabetic characters only.
    pub fn alpha(self) -> Self {
        self.with("alpha", Vec::new())
    }

    /// Require alpha-numeric characters only.
    pub fn alpha_num(self) -> Self {
        self.with("alphaNum", Vec::new())
    }

    /// Require alpha-numeric characters, dashes and underscores only.
    pub fn alpha_dash(self) -> Self {
        self.with("alphaDash", Vec::new())
    }

    /// Require the value to match a regular expression.
    pub fn regex(self, pattern: impl Display) -> Self {
        self.with("regex", vec![pattern.to_string()])
    }

    /// Require a valid date.
    pub fn date(self) -> Self {
        self.with("date", Vec::new())
    }

    /// Require a date matching the given format.
    pub fn date_format(self, format: impl Display) -> Self {
        self.with("dateFormat", vec![format.to_string()])
    }

    /// Require a date before the given reference.
    pub fn before(self, time: impl Display) -> Self {
        self.with("before", vec![time.to_string()])
    }

    /// Require a date after the given reference.
    pub fn after(self, time: impl Display) -> Self {
        self.with("after", vec![time.to_string()])
    }

    // ========================================================================
    // Rendering & introspection
    // ========================================================================

    /// Render the accumulated rules as the pipe-delimited string the
    /// validation engine consumes. An empty builder renders `""`.
    pub fn render(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.canonical())
            .collect::<Vec<_>>()
            .join("|")
    }

    /// Number of distinct rule tokens held.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when no rules have been added.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over tokens in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, RuleToken> {
        self.tokens.iter()
    }

    /// The tokens in insertion order.
    pub fn tokens(&self) -> &[RuleToken] {
        &self.tokens
    }
}

impl Display for RuleBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl<'a> IntoIterator for &'a RuleBuilder {
    type Item = &'a RuleToken;
    type IntoIter = std::slice::Iter<'a, RuleToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
