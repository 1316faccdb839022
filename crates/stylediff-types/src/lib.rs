//! Stylesheet tree model for stylediff.
//!
//! These are the already-parsed trees the differ consumes and produces. A
//! CSS/LESS front end builds them (usually by emitting the CSS AST JSON shape
//! that [`Stylesheet::from_json`] reads); a serializer consumes them again.
//!
//! # Key Types
//!
//! - [`Stylesheet`] — Root container holding an ordered list of rules
//! - [`Rule`] — Tagged union of rule sets, media blocks, comments and opaque at-rules
//! - [`RuleKind`] — Discriminant used to align rules by type
//! - [`Declaration`] / [`DeclarationNode`] — `property: value` pairs inside a rule set

pub mod declaration;
pub mod error;
pub mod rule;
pub mod stylesheet;

pub use declaration::{Declaration, DeclarationNode};
pub use error::{TypeError, TypeResult};
pub use rule::{Comment, MediaBlock, OpaqueRule, Rule, RuleKind, RuleSet};
pub use stylesheet::Stylesheet;
