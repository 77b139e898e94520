//! Agent Tool Guard - defensive hooks around an agent's tool calls.
//!
//! Screens shell commands against named regex rules (after undoing common
//! quoting and substitution tricks) and watches the stream of tool calls for
//! runaway behavior: repeat loops, bursts, excessive browser navigation and
//! error loops. Blocks and anomalies are written to an append-only JSONL
//! audit log. Everything here is advisory and fails open.

pub mod anomaly;
pub mod audit;
pub mod config;
pub mod decision;
pub mod hooks;
pub mod input;
pub mod normalize;
pub mod rules;

pub use anomaly::{AnomalyBlock, AnomalyDetector, AnomalyEvent, AnomalyKind, ToolCallRecord};
pub use audit::{AuditEntry, AuditEvent, AuditSink};
pub use config::{AnomalyAction, AnomalyConfig, Config, Rule, SafetyConfig};
pub use decision::{BlockResult, Decision};
pub use hooks::{GuardHooks, HookRunner, ToolHook};
pub use input::{AfterToolCallEvent, BeforeToolCallEvent, HookContext};
pub use normalize::normalize_shell_command;
pub use rules::{RuleEngine, check_command};
