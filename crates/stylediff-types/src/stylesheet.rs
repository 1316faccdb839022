use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeResult;
use crate::rule::Rule;

/// The root of a stylesheet tree: an ordered list of rules.
///
/// Serializes to the CSS AST document shape
/// `{"type": "stylesheet", "stylesheet": {"rules": [...]}}`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
}

impl Stylesheet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// A stylesheet with no rules.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of top-level rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if there are no top-level rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn push(&mut self, rule: impl Into<Rule>) {
        self.rules.push(rule.into());
    }

    /// Parse a CSS AST JSON document.
    pub fn from_json(json: &str) -> TypeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> TypeResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> TypeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl FromIterator<Rule> for Stylesheet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Stylesheet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum Document<R> {
    Stylesheet { stylesheet: Body<R> },
}

#[derive(Serialize, Deserialize)]
struct Body<R> {
    #[serde(default = "Vec::new")]
    rules: Vec<R>,
}

impl Serialize for Stylesheet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Document::Stylesheet {
            stylesheet: Body {
                rules: self.rules.iter().collect::<Vec<&Rule>>(),
            },
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Stylesheet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Document::Stylesheet { stylesheet } = Document::<Rule>::deserialize(deserializer)?;
        Ok(Self::new(stylesheet.rules))
    }
}
