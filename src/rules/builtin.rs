//! Built-in rules against dangerous automated commands.

use crate::config::Rule;

/// (name, pattern, reason), in match precedence order. Word boundaries
/// are ASCII-only, so `ordercliä` still counts as `ordercli`.
const BUILTIN_RULES: &[(&str, &str, &str)] = &[
    (
        "ordercli-confirm",
        r"ordercli(?-u:\b).*--confirm",
        "Blocked: ordercli --confirm requires explicit user approval. \
         The agent cannot auto-confirm food orders.",
    ),
    (
        "ordercli-pay",
        r"ordercli(?-u:\b).*--pay",
        "Blocked: ordercli --pay requires explicit user approval. \
         The agent cannot auto-pay for orders.",
    ),
    (
        "rm-rf-root",
        r"rm\s+-[rR]f\s+/(?:\s|\*|$)",
        "Blocked: recursive delete from root is not allowed.",
    ),
];

/// The built-in rules, active unless `builtin_rules = false`.
pub fn builtin_rules() -> Vec<Rule> {
    BUILTIN_RULES
        .iter()
        .map(|(name, pattern, reason)| Rule::new(*name, *pattern).with_reason(*reason))
        .collect()
}
