//! Dangerous command rule engine.

mod builtin;
mod custom;

pub use builtin::builtin_rules;
pub use custom::{CompiledRule, compile_rules};

use crate::config::SafetyConfig;
use crate::decision::Decision;
use crate::normalize::normalize_shell_command;

/// Ordered rule list compiled once from configuration. First match wins.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: Vec<CompiledRule>,
}

impl RuleEngine {
    /// Compile built-ins (unless disabled) followed by custom rules.
    pub fn new(config: &SafetyConfig) -> Self {
        let builtins = if config.builtin_rules {
            builtin_rules()
        } else {
            vec![]
        };
        let rules = compile_rules(builtins.iter().chain(config.rules.iter()));
        Self { rules }
    }

    /// Rules that compiled, in precedence order.
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Check a command against every rule, on its raw and normalized forms.
    pub fn check(&self, command: &str) -> Decision {
        let normalized = normalize_shell_command(command);

        for compiled in &self.rules {
            if compiled.matches(command, &normalized) {
                return Decision::block(&compiled.rule.name, compiled.reason_for(command));
            }
        }

        Decision::allow()
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(&SafetyConfig::default())
    }
}

/// Check a command against the rules of `config` (built-ins when `None`).
pub fn check_command(command: &str, config: Option<&SafetyConfig>) -> Decision {
    match config {
        Some(config) => RuleEngine::new(config).check(command),
        None => RuleEngine::default().check(command),
    }
}
