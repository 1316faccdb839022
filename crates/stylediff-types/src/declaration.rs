use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rule::Comment;

/// A single `property: value` pair.
///
/// A declaration has no identity of its own; it is addressed by its position
/// within the owning rule set.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.value)
    }
}

/// An entry in a rule set's declaration list.
///
/// Front ends keep comments that appear between declarations, so a slot is
/// either a real declaration or a comment.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DeclarationNode {
    Declaration(Declaration),
    Comment(Comment),
}

impl DeclarationNode {
    /// The declaration in this slot, if it is not a comment.
    pub fn as_declaration(&self) -> Option<&Declaration> {
        match self {
            Self::Declaration(decl) => Some(decl),
            Self::Comment(_) => None,
        }
    }
}

impl From<Declaration> for DeclarationNode {
    fn from(decl: Declaration) -> Self {
        Self::Declaration(decl)
    }
}

impl From<Comment> for DeclarationNode {
    fn from(comment: Comment) -> Self {
        Self::Comment(comment)
    }
}
