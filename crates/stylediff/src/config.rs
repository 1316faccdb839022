use serde::{Deserialize, Serialize};

/// Where leftovers found inside `@media` blocks end up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StackScope {
    /// Nested leftovers are appended to the single stack, in encounter order.
    #[default]
    Merged,
    /// Only leftovers from the top-level rule list are kept.
    TopLevel,
}

/// How declarations of two aligned rule sets are paired up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeclarationPairing {
    /// The Nth base declaration pairs with the Nth compare declaration.
    #[default]
    Positional,
    /// A compare declaration pairs with the base declaration of the same
    /// property name and the same occurrence count of that name, so repeated
    /// fallbacks (`color: red; color: rgba(...)`) line up even when the
    /// surrounding order differs.
    ByProperty,
}

/// Configuration for a [`Differ`](crate::Differ).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Whether leftovers from nested media blocks reach the stack.
    pub stack_scope: StackScope,
    /// Declaration pairing strategy for aligned rule sets.
    pub pairing: DeclarationPairing,
    /// Emit color-bearing declarations even when their value is unchanged.
    pub always_include_color: bool,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            stack_scope: StackScope::Merged,
            pairing: DeclarationPairing::Positional,
            always_include_color: true,
        }
    }
}

impl DiffConfig {
    /// The classic behavior of the RTL override builder: positional pairing,
    /// and leftovers inside media blocks are not reported.
    pub fn reference() -> Self {
        Self {
            stack_scope: StackScope::TopLevel,
            ..Default::default()
        }
    }
}
