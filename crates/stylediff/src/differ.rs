//! The rule-sequence walk.
//!
//! Base and compare rule lists are walked with two cursors. The base cursor
//! moves one rule at a time; the compare cursor skips over compare rules that
//! do not line up with the current base rule, pushing each skipped rule onto
//! the stack. Aligned pairs are then compared:
//!
//! - comments: the compare comment is emitted if its text differs;
//! - rule sets (aligned on exact selector equality): a fresh rule set holding
//!   only the compare declarations whose value changed, or which are
//!   color-bearing, is emitted if non-empty;
//! - media blocks: the nested rules are walked recursively and a fresh block
//!   with the compare query is emitted if the nested diff is non-empty;
//! - opaque at-rules of the same kind: aligned, never emitted.
//!
//! Compare rules left over once the base list is exhausted go to the stack.
//!
//! # Invariants
//!
//! - Inputs are only borrowed. Every rule placed in the diff or the stack is
//!   a fresh copy.
//! - The base list must be an order-preserving subsequence of the compare
//!   list, otherwise [`DiffError::NoCounterpart`] is returned.

use std::collections::HashMap;

use tracing::{debug, trace};

use stylediff_types::{Comment, Declaration, DeclarationNode, MediaBlock, Rule, RuleSet, Stylesheet};

use crate::color::is_color_property;
use crate::config::{DeclarationPairing, DiffConfig, StackScope};
use crate::error::{DiffError, DiffResult};

/// The two trees produced by a diff.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiffOutcome {
    /// Compare-side content that differs from the base.
    pub diff: Stylesheet,
    /// Compare-side rules that could not be aligned with any base rule.
    pub stack: Stylesheet,
    pub stats: DiffStats,
}

impl DiffOutcome {
    /// Returns `true` if the diff holds no rules, i.e. no override is needed.
    pub fn is_empty(&self) -> bool {
        self.diff.is_empty()
    }

    /// Returns `true` if any compare rule ended up on the stack.
    pub fn has_leftovers(&self) -> bool {
        !self.stack.is_empty()
    }
}

/// Counters collected during a diff.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiffStats {
    /// Base rules aligned with a compare rule, at any depth.
    pub aligned: usize,
    /// Rules emitted into the diff, at any depth.
    pub emitted: usize,
    /// Rules recorded on the stack.
    pub leftovers: usize,
}

/// Diff two stylesheets with the default configuration.
pub fn diff(base: &Stylesheet, compare: &Stylesheet) -> DiffResult<DiffOutcome> {
    Differ::default().run(base, compare)
}

/// Diff two stylesheets with an explicit configuration.
pub fn diff_with_config(
    base: &Stylesheet,
    compare: &Stylesheet,
    config: &DiffConfig,
) -> DiffResult<DiffOutcome> {
    Differ::new(config.clone()).run(base, compare)
}

/// A reusable stylesheet differ.
///
/// Holds only its configuration; each [`run`](Differ::run) is independent.
#[derive(Clone, Debug, Default)]
pub struct Differ {
    config: DiffConfig,
}

impl Differ {
    pub fn new(config: DiffConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Diff `compare` against `base`.
    pub fn run(&self, base: &Stylesheet, compare: &Stylesheet) -> DiffResult<DiffOutcome> {
        let mut walk = Walk::new(&self.config);
        let rules = walk.diff_rules(&base.rules, &compare.rules)?;

        debug!(
            aligned = walk.stats.aligned,
            emitted = walk.stats.emitted,
            leftovers = walk.stats.leftovers,
            "stylesheet diff complete"
        );

        Ok(DiffOutcome {
            diff: Stylesheet::new(rules),
            stack: Stylesheet::new(walk.stack),
            stats: walk.stats,
        })
    }
}

/// State of a single diff call.
struct Walk<'a> {
    config: &'a DiffConfig,
    stack: Vec<Rule>,
    stats: DiffStats,
    /// Media queries of the blocks currently being walked, outermost first.
    path: Vec<String>,
}

impl<'a> Walk<'a> {
    fn new(config: &'a DiffConfig) -> Self {
        Self {
            config,
            stack: Vec::new(),
            stats: DiffStats::default(),
            path: Vec::new(),
        }
    }

    fn diff_rules(&mut self, base: &[Rule], compare: &[Rule]) -> DiffResult<Vec<Rule>> {
        let mut diff = Vec::new();
        let mut j = 0;

        for base_rule in base {
            let emitted = match base_rule {
                Rule::Comment(b) => {
                    let c = self.align(compare, &mut j, base_rule, as_comment)?;
                    diff_comment(b, c).map(Rule::Comment)
                }
                Rule::RuleSet(b) => {
                    let c = self.align(compare, &mut j, base_rule, |rule| match rule {
                        Rule::RuleSet(c) if c.same_selectors(b) => Some(c),
                        _ => None,
                    })?;
                    self.diff_rule_set(b, c).map(Rule::RuleSet)
                }
                Rule::Media(b) => {
                    let c = self.align(compare, &mut j, base_rule, as_media)?;
                    self.diff_media(b, c)?.map(Rule::Media)
                }
                Rule::Other(b) => {
                    self.align(compare, &mut j, base_rule, |rule| match rule {
                        Rule::Other(c) if c.kind == b.kind => Some(()),
                        _ => None,
                    })?;
                    None
                }
            };

            self.stats.aligned += 1;
            j += 1;

            if let Some(rule) = emitted {
                debug!(rule = %rule.describe(), depth = self.path.len(), "emitting diff rule");
                self.stats.emitted += 1;
                diff.push(rule);
            }
        }

        for leftover in compare.iter().skip(j) {
            self.push_leftover(leftover, "trailing");
        }

        Ok(diff)
    }

    /// Advance `j` to the first compare rule accepted by `pick`, pushing every
    /// rule passed over onto the stack.
    ///
    /// A rule set is only accepted when its selectors match, so compare rules
    /// of another kind and rule sets with other selectors are both skipped.
    fn align<'c, T>(
        &mut self,
        compare: &'c [Rule],
        j: &mut usize,
        base_rule: &Rule,
        pick: impl Fn(&'c Rule) -> Option<T>,
    ) -> DiffResult<T> {
        loop {
            let Some(candidate) = compare.get(*j) else {
                return Err(DiffError::NoCounterpart {
                    rule: base_rule.describe(),
                    path: self.path.clone(),
                });
            };
            if let Some(found) = pick(candidate) {
                return Ok(found);
            }
            self.push_leftover(candidate, "unaligned");
            *j += 1;
        }
    }

    fn push_leftover(&mut self, rule: &Rule, reason: &'static str) {
        let depth = self.path.len();
        if depth > 0 && self.config.stack_scope == StackScope::TopLevel {
            trace!(rule = %rule.describe(), reason, depth, "dropping nested leftover");
            return;
        }
        trace!(kind = %rule.kind(), rule = %rule.describe(), reason, depth, "pushing leftover");
        self.stats.leftovers += 1;
        self.stack.push(rule.clone());
    }

    fn diff_rule_set(&self, base: &RuleSet, compare: &RuleSet) -> Option<RuleSet> {
        let declarations: Vec<DeclarationNode> = match self.config.pairing {
            DeclarationPairing::Positional => base
                .declarations
                .iter()
                .zip(&compare.declarations)
                .filter_map(|(b, c)| match (b.as_declaration(), c.as_declaration()) {
                    (Some(b), Some(c)) if b.property == c.property => self.changed(b, c),
                    _ => None,
                })
                .collect(),
            DeclarationPairing::ByProperty => {
                let mut by_property: HashMap<&str, Vec<&Declaration>> = HashMap::new();
                for decl in base.declarations.iter().filter_map(DeclarationNode::as_declaration) {
                    by_property.entry(decl.property.as_str()).or_default().push(decl);
                }

                let mut seen: HashMap<&str, usize> = HashMap::new();
                compare
                    .declarations
                    .iter()
                    .filter_map(DeclarationNode::as_declaration)
                    .filter_map(|c| {
                        let occurrence = seen.entry(c.property.as_str()).or_insert(0);
                        let b = by_property
                            .get(c.property.as_str())
                            .and_then(|decls| decls.get(*occurrence));
                        *occurrence += 1;
                        b.and_then(|b| self.changed(b, c))
                    })
                    .collect()
            }
        };

        if declarations.is_empty() {
            return None;
        }

        Some(RuleSet {
            selectors: compare.selectors.clone(),
            declarations,
        })
    }

    /// The compare declaration, if it belongs in the diff.
    fn changed(&self, base: &Declaration, compare: &Declaration) -> Option<DeclarationNode> {
        let keep = base.value != compare.value
            || (self.config.always_include_color && is_color_property(&compare.property));
        keep.then(|| DeclarationNode::Declaration(compare.clone()))
    }

    fn diff_media(
        &mut self,
        base: &MediaBlock,
        compare: &MediaBlock,
    ) -> DiffResult<Option<MediaBlock>> {
        debug!(media = %compare.media, depth = self.path.len(), "descending into media block");

        self.path.push(compare.media.clone());
        let nested = self.diff_rules(&base.rules, &compare.rules);
        self.path.pop();
        let nested = nested?;

        if nested.is_empty() {
            return Ok(None);
        }

        Ok(Some(MediaBlock {
            media: compare.media.clone(),
            rules: nested,
        }))
    }
}

fn diff_comment(base: &Comment, compare: &Comment) -> Option<Comment> {
    (base.comment != compare.comment).then(|| compare.clone())
}

fn as_comment(rule: &Rule) -> Option<&Comment> {
    match rule {
        Rule::Comment(c) => Some(c),
        _ => None,
    }
}

fn as_media(rule: &Rule) -> Option<&MediaBlock> {
    match rule {
        Rule::Media(m) => Some(m),
        _ => None,
    }
}
