//! Compiling configured rules into matchers.

use crate::config::Rule;
use regex::{Regex, RegexBuilder};

/// A rule with its pattern compiled.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub rule: Rule,
    pub regex: Regex,
}

impl CompiledRule {
    /// Compile a rule case-insensitively. Returns `None` for an invalid
    /// pattern; such rules never match and never block.
    pub fn compile(rule: &Rule) -> Option<Self> {
        match RegexBuilder::new(&rule.pattern).case_insensitive(true).build() {
            Ok(regex) => Some(Self {
                rule: rule.clone(),
                regex,
            }),
            Err(e) => {
                tracing::debug!("skipping rule '{}' with invalid pattern: {}", rule.name, e);
                None
            }
        }
    }

    /// True if either the raw or the normalized command matches.
    pub fn matches(&self, raw: &str, normalized: &str) -> bool {
        self.regex.is_match(raw) || self.regex.is_match(normalized)
    }

    /// The configured reason, or a default naming the rule and the command.
    pub fn reason_for(&self, command: &str) -> String {
        self.rule.reason.clone().unwrap_or_else(|| {
            format!(
                "Command blocked by safety rule \"{}\": {}",
                self.rule.name, command
            )
        })
    }
}

/// Compile rules in order, dropping any that fail to compile.
pub fn compile_rules<'a>(rules: impl IntoIterator<Item = &'a Rule>) -> Vec<CompiledRule> {
    rules.into_iter().filter_map(CompiledRule::compile).collect()
}
