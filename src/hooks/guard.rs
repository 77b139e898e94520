//! Built-in guard hooks: dangerous command rules plus anomaly enforcement.

use crate::anomaly::{AnomalyBlock, AnomalyDetector, ToolCallRecord};
use crate::audit::{AuditEvent, AuditSink};
use crate::config::Config;
use crate::decision::{BlockResult, Decision};
use crate::hooks::ToolHook;
use crate::input::{AfterToolCallEvent, BeforeToolCallEvent, HookContext};
use crate::rules::RuleEngine;

/// Guard hooks built once per agent configuration.
///
/// Anomaly blocking lags detection by one call: an anomaly raised in
/// `after_tool_call` for call N blocks call N+1 onward.
#[derive(Debug)]
pub struct GuardHooks {
    rules: RuleEngine,
    detector: Option<AnomalyDetector>,
    audit: AuditSink,
}

impl GuardHooks {
    /// Build hooks writing audit entries under the configured state dir.
    pub fn new(config: &Config) -> Self {
        let audit = AuditSink::for_state_dir(config.audit.state_dir.as_deref());
        Self::with_audit(config, audit)
    }

    /// Build hooks writing audit entries to `audit`.
    pub fn with_audit(config: &Config, audit: AuditSink) -> Self {
        let detector = config
            .anomaly_detection
            .enabled
            .then(|| AnomalyDetector::new(config.anomaly_detection.clone(), audit.clone()));

        Self {
            rules: RuleEngine::new(&config.safety),
            detector,
            audit,
        }
    }

    pub fn anomaly_detector(&self) -> Option<&AnomalyDetector> {
        self.detector.as_ref()
    }

    pub fn audit(&self) -> &AuditSink {
        &self.audit
    }

    /// Veto a call if its command matches a rule or a recorded anomaly
    /// requires aborting. `None` lets the call proceed.
    pub fn before_tool_call(
        &self,
        event: &BeforeToolCallEvent,
        ctx: &HookContext,
    ) -> Option<BlockResult> {
        if let Some(command) = event.command()
            && let Decision::Block(info) = self.rules.check(&command)
        {
            tracing::warn!(
                tool = %event.tool_name,
                rule = %info.rule,
                session = ctx.session_key.as_deref().unwrap_or("-"),
                "Blocked dangerous command"
            );
            self.audit.record(AuditEvent::CommandBlocked {
                tool_name: event.tool_name.clone(),
                command,
                rule_name: info.rule,
                reason: info.reason.clone(),
            });
            return Some(BlockResult::new(info.reason));
        }

        if let Some(detector) = &self.detector
            && let AnomalyBlock::Block { reason } = detector.should_block()
        {
            self.audit.record(AuditEvent::AnomalyDetected {
                tool_name: event.tool_name.clone(),
                anomaly_type: None,
                reason: reason.clone(),
            });
            return Some(BlockResult::new(reason));
        }

        None
    }

    /// Feed a finished call into the anomaly detector, if one is enabled.
    pub fn after_tool_call(&mut self, event: &AfterToolCallEvent, _ctx: &HookContext) {
        let Some(detector) = self.detector.as_mut() else {
            return;
        };

        let mut call = ToolCallRecord::new(&event.tool_name, &event.params);
        if let Some(error) = event.error.as_deref() {
            call = call.with_error(error);
        }
        if detector.record_tool_call(call).is_some() {
            tracing::debug!(
                tool = %event.tool_name,
                duration_ms = event.duration_ms,
                "Anomaly recorded after tool call"
            );
        }
    }
}

impl ToolHook for GuardHooks {
    fn name(&self) -> &str {
        "builtin-guards"
    }

    fn before_tool_call(
        &mut self,
        event: &BeforeToolCallEvent,
        ctx: &HookContext,
    ) -> Option<BlockResult> {
        GuardHooks::before_tool_call(self, event, ctx)
    }

    fn after_tool_call(&mut self, event: &AfterToolCallEvent, ctx: &HookContext) {
        GuardHooks::after_tool_call(self, event, ctx)
    }
}
