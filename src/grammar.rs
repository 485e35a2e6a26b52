//! Parallel string rewriting for the plant grammar.
//!
//! Digits in the working string are rule references. Every pass replaces each
//! referenced digit with its rule's replacement and copies everything else
//! through unchanged. Replacements are only rewritten on the *next* pass, so
//! each pass terminates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from rule index (a decimal digit) to its replacement string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleTable {
    rules: BTreeMap<u8, String>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The branching-plant rules: `0 -> 1[[\0]/0][[+0]-0]`, `1 -> 11.`.
    pub fn reference() -> Self {
        Self::new()
            .with_rule(0, "1[[\\0]/0][[+0]-0]")
            .with_rule(1, "11.")
    }

    /// Adds or replaces a rule (builder pattern).
    pub fn with_rule(mut self, index: u8, replacement: impl Into<String>) -> Self {
        self.insert(index, replacement);
        self
    }

    pub fn insert(&mut self, index: u8, replacement: impl Into<String>) {
        self.rules.insert(index, replacement.into());
    }

    pub fn get(&self, index: u8) -> Option<&str> {
        self.rules.get(&index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Replacement for symbol `c`, if it is a digit with a rule.
    fn production(&self, c: char) -> Option<&str> {
        let digit = c.to_digit(10)?;
        self.get(digit as u8)
    }
}

/// Axiom, rules and iteration count. Expansion is a pure function of these.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrammarConfig {
    pub axiom: String,
    pub rules: RuleTable,
    /// Output grows geometrically with this; the reference plant uses 5.
    pub iterations: u32,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            axiom: "0".to_string(),
            rules: RuleTable::reference(),
            iterations: 5,
        }
    }
}

impl GrammarConfig {
    pub fn expand(&self) -> String {
        expand(&self.axiom, &self.rules, self.iterations)
    }
}

/// Rewrites `axiom` with `rules` for `iterations` passes.
///
/// A digit without a rule is copied through unexpanded.
pub fn expand(axiom: &str, rules: &RuleTable, iterations: u32) -> String {
    let mut current = axiom.to_string();

    for pass in 0..iterations {
        let mut next = String::with_capacity(current.len() * 2);
        for c in current.chars() {
            match rules.production(c) {
                Some(replacement) => next.push_str(replacement),
                None => next.push(c),
            }
        }
        current = next;
        tracing::debug!(pass = pass + 1, len = current.len(), "grammar pass");
    }

    current
}
