//! Decision types for guard checks and hook responses.

use serde::Serialize;

/// The result of checking a command against the guard rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Allow the tool to proceed.
    Allow,
    /// Block the tool with a reason.
    Block(BlockInfo),
}

/// Information about why a command was blocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockInfo {
    /// Human-readable reason for blocking.
    pub reason: String,
    /// The rule that triggered the block.
    #[serde(rename = "ruleName")]
    pub rule: String,
}

impl BlockInfo {
    pub fn new(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            reason: reason.into(),
        }
    }
}

impl Decision {
    /// Create an allow decision.
    pub fn allow() -> Self {
        Decision::Allow
    }

    /// Create a block decision.
    pub fn block(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Decision::Block(BlockInfo::new(rule, reason))
    }

    /// Check if this is a block decision.
    pub fn is_blocked(&self) -> bool {
        matches!(self, Decision::Block(_))
    }

    /// Get the block info if blocked.
    pub fn block_info(&self) -> Option<&BlockInfo> {
        match self {
            Decision::Block(info) => Some(info),
            Decision::Allow => None,
        }
    }

    /// Name of the rule that blocked, if any.
    pub fn rule_name(&self) -> Option<&str> {
        self.block_info().map(|info| info.rule.as_str())
    }

    /// Block reason, if any.
    pub fn reason(&self) -> Option<&str> {
        self.block_info().map(|info| info.reason.as_str())
    }
}

/// What a `before_tool_call` hook hands back to the host to veto a call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockResult {
    pub block: bool,
    pub block_reason: String,
}

impl BlockResult {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            block: true,
            block_reason: reason.into(),
        }
    }
}
