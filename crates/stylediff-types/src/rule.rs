//! Rule nodes: the children of a stylesheet or media block.
//!
//! [`Rule`] is a closed enum. The differ matches on it exhaustively, so a new
//! rule kind accepted by the front end shows up as a compile error there
//! rather than being silently ignored.

use std::fmt;

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::declaration::DeclarationNode;
use crate::error::{TypeError, TypeResult};

/// A selector block: `selectors { declarations }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleSet {
    /// Selector parts as written, e.g. `[".a", ".b > span"]` for `.a, .b > span`.
    #[serde(default)]
    pub selectors: Vec<String>,
    #[serde(default)]
    pub declarations: Vec<DeclarationNode>,
}

impl RuleSet {
    pub fn new<S, D>(selectors: impl IntoIterator<Item = S>, declarations: D) -> Self
    where
        S: Into<String>,
        D: IntoIterator,
        D::Item: Into<DeclarationNode>,
    {
        Self {
            selectors: selectors.into_iter().map(Into::into).collect(),
            declarations: declarations.into_iter().map(Into::into).collect(),
        }
    }

    /// Selector text as it would appear in CSS.
    pub fn selector_text(&self) -> String {
        self.selectors.join(", ")
    }

    /// Two selector lists are equal iff they have the same length and every
    /// part is byte-identical. No whitespace or case normalization.
    pub fn same_selectors(&self, other: &RuleSet) -> bool {
        self.selectors == other.selectors
    }
}

/// An `@media` block with nested rules.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaBlock {
    /// The media query text, e.g. `screen and (max-width: 600px)`.
    #[serde(default)]
    pub media: String,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl MediaBlock {
    pub fn new(media: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            media: media.into(),
            rules,
        }
    }
}

/// A `/* ... */` comment. The payload excludes the delimiters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub comment: String,
}

impl Comment {
    pub fn new(comment: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
        }
    }
}

/// Any node kind the differ does not interpret (`font-face`, `keyframes`,
/// `import`, `charset`, ...). The fields are kept verbatim so the node can be
/// written back out unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OpaqueRule {
    pub kind: String,
    pub fields: Map<String, Value>,
}

impl OpaqueRule {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            fields: Map::new(),
        }
    }

    /// Builder-style field setter.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }
}

/// A node in a stylesheet's rule list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rule {
    RuleSet(RuleSet),
    Media(MediaBlock),
    Comment(Comment),
    Other(OpaqueRule),
}

/// The type discriminant of a [`Rule`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RuleKind {
    RuleSet,
    Media,
    Comment,
    /// Opaque kinds align only with the same kind name.
    Other(String),
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RuleSet => f.write_str("rule"),
            Self::Media => f.write_str("media"),
            Self::Comment => f.write_str("comment"),
            Self::Other(kind) => f.write_str(kind),
        }
    }
}

impl Rule {
    pub fn kind(&self) -> RuleKind {
        match self {
            Self::RuleSet(_) => RuleKind::RuleSet,
            Self::Media(_) => RuleKind::Media,
            Self::Comment(_) => RuleKind::Comment,
            Self::Other(opaque) => RuleKind::Other(opaque.kind.clone()),
        }
    }

    /// A short human-readable description used in logs and error messages.
    pub fn describe(&self) -> String {
        match self {
            Self::RuleSet(rule) => format!("rule `{}`", rule.selector_text()),
            Self::Media(media) => format!("@media {}", media.media),
            Self::Comment(comment) => format!("comment `{}`", comment.comment.trim()),
            Self::Other(opaque) => format!("@{}", opaque.kind),
        }
    }

    /// Build a rule from one node of the CSS AST JSON shape.
    pub fn from_value(value: Value) -> TypeResult<Self> {
        let kind = match value.get("type") {
            Some(Value::String(kind)) => kind.clone(),
            Some(other) => {
                return Err(TypeError::InvalidNode {
                    kind: other.to_string(),
                    reason: "`type` must be a string".into(),
                })
            }
            None => return Err(TypeError::MissingType(truncate(&value.to_string()))),
        };

        match kind.as_str() {
            "rule" | "media" | "comment" => serde_json::from_value::<KnownRule>(value)
                .map(Rule::from)
                .map_err(|e| TypeError::InvalidNode {
                    kind,
                    reason: e.to_string(),
                }),
            _ => match value {
                Value::Object(mut fields) => {
                    fields.remove("type");
                    Ok(Rule::Other(OpaqueRule { kind, fields }))
                }
                other => Err(TypeError::InvalidNode {
                    kind,
                    reason: format!("expected an object, got {}", truncate(&other.to_string())),
                }),
            },
        }
    }
}

impl From<RuleSet> for Rule {
    fn from(rule: RuleSet) -> Self {
        Self::RuleSet(rule)
    }
}

impl From<MediaBlock> for Rule {
    fn from(media: MediaBlock) -> Self {
        Self::Media(media)
    }
}

impl From<Comment> for Rule {
    fn from(comment: Comment) -> Self {
        Self::Comment(comment)
    }
}

impl From<OpaqueRule> for Rule {
    fn from(opaque: OpaqueRule) -> Self {
        Self::Other(opaque)
    }
}

// ---------------------------------------------------------------
// Serde
// ---------------------------------------------------------------

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum KnownRule {
    Rule(RuleSet),
    Media(MediaBlock),
    Comment(Comment),
}

impl From<KnownRule> for Rule {
    fn from(known: KnownRule) -> Self {
        match known {
            KnownRule::Rule(rule) => Self::RuleSet(rule),
            KnownRule::Media(media) => Self::Media(media),
            KnownRule::Comment(comment) => Self::Comment(comment),
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum KnownRuleRef<'a> {
    Rule(&'a RuleSet),
    Media(&'a MediaBlock),
    Comment(&'a Comment),
}

impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::RuleSet(rule) => KnownRuleRef::Rule(rule).serialize(serializer),
            Self::Media(media) => KnownRuleRef::Media(media).serialize(serializer),
            Self::Comment(comment) => KnownRuleRef::Comment(comment).serialize(serializer),
            Self::Other(opaque) => {
                let mut map = serializer.serialize_map(Some(opaque.fields.len() + 1))?;
                map.serialize_entry("type", &opaque.kind)?;
                for (key, value) in opaque.fields.iter().filter(|(key, _)| *key != "type") {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Rule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Rule::from_value(value).map_err(D::Error::custom)
    }
}

fn truncate(s: &str) -> String {
    const MAX: usize = 60;
    match s.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}
