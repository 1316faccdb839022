//! Error types for the differ.

/// Errors that can occur while diffing two stylesheet trees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiffError {
    /// A base rule has no counterpart in the rest of the compare sequence.
    ///
    /// The base tree must be an order-preserving subsequence of the compare
    /// tree; this is raised when that does not hold.
    #[error("no counterpart found in compare tree for base {rule}{}", format_path(.path))]
    NoCounterpart {
        /// Description of the unmatched base rule.
        rule: String,
        /// Media queries enclosing the rule, outermost first.
        path: Vec<String>,
    },
}

fn format_path(path: &[String]) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!(" (inside @media {})", path.join(" > @media "))
    }
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
