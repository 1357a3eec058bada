//! # rusty-rules
//!
//! A fluent builder for pipe-delimited validation rule strings.
//!
//! Rules accumulate as named tokens (`required`, `between:6,9`,
//! `unique:users,email`) and render as a single `a|b:1,2` string for an
//! external validation engine to parse. The builder never validates data
//! itself and attaches no meaning to individual rule names beyond
//! formatting their parameters.
//!
//! ## Quick Start
//!
//! ```
//! use rusty_rules::RuleBuilder;
//!
//! let rules = RuleBuilder::new()
//!     .required()
//!     .url()
//!     .not_in(("one", "two"))
//!     .unique(("users", "url", 20, "some_id"));
//!
//! assert_eq!(
//!     rules.render(),
//!     "required|url|notIn:one,two|unique:users,url,20,some_id"
//! );
//! assert_eq!(rules.len(), 4);
//! ```
//!
//! ## Custom rules
//!
//! Names the catalogue does not know pass through verbatim, so the rule
//! vocabulary stays open without touching this crate:
//!
//! ```
//! use rusty_rules::RuleBuilder;
//!
//! let rules = RuleBuilder::new().rule("customWithExtra", ("param1", "param2"));
//! assert_eq!(rules.render(), "customWithExtra:param1,param2");
//! ```
//!
//! Callers who would rather catch a typo than ship it use
//! [`RuleBuilder::try_rule`], which rejects names outside the catalogue.
//!
//! ## Architecture
//!
//! - **`builder`** - the [`RuleBuilder`] chain: convenience operations,
//!   dispatch-by-name, rendering and iteration
//! - **`token`** - [`RuleToken`], one rule in canonical `name:p1,p2` form
//! - **`params`** - [`IntoParams`], the single normalization boundary for
//!   scalar / sequence / tuple arguments
//! - **`dispatch`** - the static catalogue behind name lookup
//! - **`factory`** - [`RuleFactory`], the empty-builder capability handed
//!   to registration glue
//! - **`error`** - [`RuleError`] for the strict dispatch surface

mod builder;
mod dispatch;
mod error;
mod factory;
mod params;
mod token;

pub use builder::RuleBuilder;
pub use error::RuleError;
pub use factory::RuleFactory;
pub use params::IntoParams;
pub use token::RuleToken;
