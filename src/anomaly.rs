//! Tool-call anomaly detection.
//!
//! A detector watches the stream of tool calls made by one agent
//! configuration and flags four behaviors: the same call repeated back to
//! back, too many calls inside a sliding window, too many browser
//! navigations over the detector's lifetime, and the same error repeated
//! back to back. At most one signal fires per call, checked in that order.
//!
//! The detector is single-owner state: calls must be fed in the order the
//! host delivers them. One instance shared across sessions sees their calls
//! as a single interleaved stream.

use chrono::Utc;
use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;

use crate::audit::{AuditEvent, AuditSink};
use crate::config::{AnomalyAction, AnomalyConfig};

/// Kind of anomaly raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnomalyKind {
    RepeatLoop,
    Burst,
    ExcessiveNavigation,
    ErrorLoop,
}

impl AnomalyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnomalyKind::RepeatLoop => "repeat-loop",
            AnomalyKind::Burst => "burst",
            AnomalyKind::ExcessiveNavigation => "excessive-navigation",
            AnomalyKind::ErrorLoop => "error-loop",
        }
    }
}

impl fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A detected anomaly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnomalyEvent {
    #[serde(rename = "type")]
    pub kind: AnomalyKind,
    /// Human-readable description including the count that tripped it.
    pub message: String,
    pub tool_name: String,
}

/// One completed tool call as seen by the detector.
#[derive(Debug, Clone, Copy)]
pub struct ToolCallRecord<'a> {
    pub tool_name: &'a str,
    pub params: &'a serde_json::Value,
    pub error: Option<&'a str>,
}

impl<'a> ToolCallRecord<'a> {
    pub fn new(tool_name: &'a str, params: &'a serde_json::Value) -> Self {
        Self {
            tool_name,
            params,
            error: None,
        }
    }

    pub fn with_error(mut self, error: &'a str) -> Self {
        self.error = Some(error);
        self
    }
}

/// Whether execution should be halted because of a recorded anomaly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnomalyBlock {
    Allow,
    Block { reason: String },
}

impl AnomalyBlock {
    pub fn is_blocked(&self) -> bool {
        matches!(self, AnomalyBlock::Block { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            AnomalyBlock::Block { reason } => Some(reason),
            AnomalyBlock::Allow => None,
        }
    }
}

/// Stateful multi-signal detector over a sequence of tool calls.
#[derive(Debug)]
pub struct AnomalyDetector {
    config: AnomalyConfig,
    audit: AuditSink,

    last_tool_key: String,
    repeat_count: u32,
    browser_nav_count: u32,
    last_error_key: String,
    error_repeat_count: u32,
    call_timestamps: VecDeque<i64>,
    anomalies: Vec<AnomalyEvent>,
}

impl AnomalyDetector {
    /// Create a detector. Anomalies in `warn`/`abort` mode are written to `audit`.
    pub fn new(config: AnomalyConfig, audit: AuditSink) -> Self {
        Self {
            config,
            audit,
            last_tool_key: String::new(),
            repeat_count: 0,
            browser_nav_count: 0,
            last_error_key: String::new(),
            error_repeat_count: 0,
            call_timestamps: VecDeque::new(),
            anomalies: Vec::new(),
        }
    }

    /// Record a tool call at the current wall-clock time.
    pub fn record_tool_call(&mut self, call: ToolCallRecord<'_>) -> Option<AnomalyEvent> {
        self.record_tool_call_at(call, Utc::now().timestamp_millis())
    }

    /// Record a tool call observed at `now_ms` (epoch milliseconds).
    pub fn record_tool_call_at(
        &mut self,
        call: ToolCallRecord<'_>,
        now_ms: i64,
    ) -> Option<AnomalyEvent> {
        if let Some(event) = self.check_repeat(&call) {
            return Some(self.emit(event));
        }
        if let Some(event) = self.check_burst(&call, now_ms) {
            return Some(self.emit(event));
        }
        if let Some(event) = self.check_navigation(&call) {
            return Some(self.emit(event));
        }
        if let Some(event) = self.check_error_loop(&call) {
            return Some(self.emit(event));
        }
        None
    }

    /// All anomalies recorded so far, in emission order.
    pub fn anomalies(&self) -> Vec<AnomalyEvent> {
        self.anomalies.clone()
    }

    /// Block only in `abort` mode once any anomaly exists. The reason names
    /// the most recent anomaly and stays until a newer one replaces it.
    pub fn should_block(&self) -> AnomalyBlock {
        if self.config.action != AnomalyAction::Abort {
            return AnomalyBlock::Allow;
        }
        match self.anomalies.last() {
            Some(latest) => AnomalyBlock::Block {
                reason: format!("Anomaly abort [{}]: {}", latest.kind, latest.message),
            },
            None => AnomalyBlock::Allow,
        }
    }

    fn check_repeat(&mut self, call: &ToolCallRecord<'_>) -> Option<AnomalyEvent> {
        let key = tool_key(call.tool_name, call.params);
        if key != self.last_tool_key {
            self.last_tool_key = key;
            self.repeat_count = 1;
            return None;
        }

        self.repeat_count += 1;
        if self.repeat_count < self.config.max_repeat_calls {
            return None;
        }
        let event = AnomalyEvent {
            kind: AnomalyKind::RepeatLoop,
            message: format!(
                "Tool \"{}\" called {} times with identical params",
                call.tool_name, self.repeat_count
            ),
            tool_name: call.tool_name.to_string(),
        };
        self.repeat_count = 0;
        Some(event)
    }

    fn check_burst(&mut self, call: &ToolCallRecord<'_>, now_ms: i64) -> Option<AnomalyEvent> {
        let window = i64::try_from(self.config.burst_window_ms).unwrap_or(i64::MAX);
        let cutoff = now_ms.saturating_sub(window);

        self.call_timestamps.push_back(now_ms);
        while self.call_timestamps.front().is_some_and(|&ts| ts < cutoff) {
            self.call_timestamps.pop_front();
        }

        if self.call_timestamps.len() < self.config.max_burst_calls {
            return None;
        }
        let event = AnomalyEvent {
            kind: AnomalyKind::Burst,
            message: format!(
                "{} tool calls in {}ms window",
                self.call_timestamps.len(),
                self.config.burst_window_ms
            ),
            tool_name: call.tool_name.to_string(),
        };
        self.call_timestamps.clear();
        Some(event)
    }

    fn check_navigation(&mut self, call: &ToolCallRecord<'_>) -> Option<AnomalyEvent> {
        let navigating = call.tool_name == "browser"
            && browser_action(call.params).as_deref() == Some("navigate");
        if !navigating {
            return None;
        }

        self.browser_nav_count += 1;
        if self.browser_nav_count < self.config.max_browser_navigations {
            return None;
        }
        let event = AnomalyEvent {
            kind: AnomalyKind::ExcessiveNavigation,
            message: format!("Browser navigate called {} times", self.browser_nav_count),
            tool_name: call.tool_name.to_string(),
        };
        self.browser_nav_count = 0;
        Some(event)
    }

    fn check_error_loop(&mut self, call: &ToolCallRecord<'_>) -> Option<AnomalyEvent> {
        let Some(error) = call.error.filter(|e| !e.is_empty()) else {
            self.last_error_key.clear();
            self.error_repeat_count = 0;
            return None;
        };

        let key = format!("{}:{}", call.tool_name, error);
        if key != self.last_error_key {
            self.last_error_key = key;
            self.error_repeat_count = 1;
            return None;
        }

        self.error_repeat_count += 1;
        if self.error_repeat_count < self.config.max_repeat_calls {
            return None;
        }
        let event = AnomalyEvent {
            kind: AnomalyKind::ErrorLoop,
            message: format!(
                "Tool \"{}\" failed {} times with same error",
                call.tool_name, self.error_repeat_count
            ),
            tool_name: call.tool_name.to_string(),
        };
        self.error_repeat_count = 0;
        Some(event)
    }

    fn emit(&mut self, event: AnomalyEvent) -> AnomalyEvent {
        self.anomalies.push(event.clone());
        match self.config.action {
            AnomalyAction::Log => {
                tracing::debug!("Anomaly detected [{}]: {}", event.kind, event.message);
            }
            AnomalyAction::Warn | AnomalyAction::Abort => {
                tracing::warn!("Anomaly detected [{}]: {}", event.kind, event.message);
                self.audit.record(AuditEvent::AnomalyDetected {
                    tool_name: event.tool_name.clone(),
                    anomaly_type: Some(event.kind),
                    reason: event.message.clone(),
                });
            }
        }
        event
    }
}

/// Dedup key: tool name plus compact JSON params.
///
/// Object keys come out sorted as long as serde_json's `preserve_order`
/// feature stays off. Rendering a `Value` cannot fail, so there is no
/// coarser fallback key.
fn tool_key(tool_name: &str, params: &serde_json::Value) -> String {
    format!("{tool_name}:{params}")
}

fn browser_action(params: &serde_json::Value) -> Option<String> {
    params
        .get("action")
        .and_then(|v| v.as_str())
        .map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn detector(config: AnomalyConfig) -> (AnomalyDetector, TempDir) {
        let dir = TempDir::new().unwrap();
        let audit = AuditSink::for_state_dir(Some(dir.path()));
        (AnomalyDetector::new(config, audit), dir)
    }

    fn config() -> AnomalyConfig {
        AnomalyConfig {
            enabled: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_repeat_loop_fires_on_nth_call() {
        let (mut d, _dir) = detector(AnomalyConfig {
            max_repeat_calls: 3,
            ..config()
        });
        let params = json!({"command": "ls"});
        let call = ToolCallRecord::new("exec", &params);

        assert!(d.record_tool_call_at(call, 0).is_none());
        assert!(d.record_tool_call_at(call, 1).is_none());
        let event = d.record_tool_call_at(call, 2).unwrap();
        assert_eq!(event.kind, AnomalyKind::RepeatLoop);
        assert_eq!(event.tool_name, "exec");
        assert!(event.message.contains("3 times"));
    }

    #[test]
    fn test_repeat_counter_resets_after_emission() {
        let (mut d, _dir) = detector(AnomalyConfig {
            max_repeat_calls: 2,
            ..config()
        });
        let params = json!({"command": "ls"});
        let call = ToolCallRecord::new("exec", &params);

        let fired: Vec<bool> = (0..5)
            .map(|i| d.record_tool_call_at(call, i).is_some())
            .collect();
        // Counter drops to 0 on emission, so the next hit needs two more calls.
        assert_eq!(fired, vec![false, true, false, true, false]);
    }

    #[test]
    fn test_different_call_resets_repeat() {
        let (mut d, _dir) = detector(AnomalyConfig {
            max_repeat_calls: 3,
            ..config()
        });
        let a = json!({"command": "ls"});
        let b = json!({"command": "pwd"});

        d.record_tool_call_at(ToolCallRecord::new("exec", &a), 0);
        d.record_tool_call_at(ToolCallRecord::new("exec", &a), 1);
        d.record_tool_call_at(ToolCallRecord::new("exec", &b), 2);
        assert!(d.record_tool_call_at(ToolCallRecord::new("exec", &a), 3).is_none());
        assert!(d.record_tool_call_at(ToolCallRecord::new("exec", &a), 4).is_none());
        assert!(d.anomalies().is_empty());
    }

    #[test]
    fn test_key_ignores_param_order() {
        let (mut d, _dir) = detector(AnomalyConfig {
            max_repeat_calls: 2,
            ..config()
        });
        let a: serde_json::Value = serde_json::from_str(r#"{"a":1,"b":2}"#).unwrap();
        let b: serde_json::Value = serde_json::from_str(r#"{"b":2,"a":1}"#).unwrap();

        d.record_tool_call_at(ToolCallRecord::new("t", &a), 0);
        let event = d.record_tool_call_at(ToolCallRecord::new("t", &b), 1);
        assert_eq!(event.map(|e| e.kind), Some(AnomalyKind::RepeatLoop));
    }

    #[test]
    fn test_burst_within_window() {
        let (mut d, _dir) = detector(AnomalyConfig {
            max_burst_calls: 5,
            burst_window_ms: 60_000,
            max_repeat_calls: 1000,
            ..config()
        });

        for i in 0..4 {
            let params = json!({"q": format!("q{i}")});
            assert!(d.record_tool_call_at(ToolCallRecord::new("search", &params), i * 10).is_none());
        }
        let params = json!({"q": "q4"});
        let event = d.record_tool_call_at(ToolCallRecord::new("search", &params), 40).unwrap();
        assert_eq!(event.kind, AnomalyKind::Burst);
        assert_eq!(event.message, "5 tool calls in 60000ms window");
    }

    #[test]
    fn test_burst_window_clears_after_emission() {
        let (mut d, _dir) = detector(AnomalyConfig {
            max_burst_calls: 3,
            burst_window_ms: 1_000,
            max_repeat_calls: 1000,
            ..config()
        });
        let mut fired = 0;
        for i in 0..6 {
            let params = json!({"i": i});
            if d.record_tool_call_at(ToolCallRecord::new("t", &params), i).is_some() {
                fired += 1;
            }
        }
        assert_eq!(fired, 2);
    }

    #[test]
    fn test_burst_does_not_span_window_boundary() {
        let (mut d, _dir) = detector(AnomalyConfig {
            max_burst_calls: 3,
            burst_window_ms: 1_000,
            max_repeat_calls: 1000,
            ..config()
        });
        // Calls spaced wider than the window never accumulate.
        for i in 0..10 {
            let params = json!({"i": i});
            assert!(d.record_tool_call_at(ToolCallRecord::new("t", &params), i * 1_001).is_none());
        }
    }

    #[test]
    fn test_burst_keeps_entry_at_window_edge() {
        let (mut d, _dir) = detector(AnomalyConfig {
            max_burst_calls: 2,
            burst_window_ms: 1_000,
            max_repeat_calls: 1000,
            ..config()
        });
        let a = json!({"i": 0});
        let b = json!({"i": 1});
        d.record_tool_call_at(ToolCallRecord::new("t", &a), 0);
        // Exactly `window` apart is still inside.
        let event = d.record_tool_call_at(ToolCallRecord::new("t", &b), 1_000);
        assert_eq!(event.map(|e| e.kind), Some(AnomalyKind::Burst));
    }

    #[test]
    fn test_excessive_navigation() {
        let (mut d, _dir) = detector(AnomalyConfig {
            max_browser_navigations: 3,
            max_repeat_calls: 1000,
            max_burst_calls: 1000,
            ..config()
        });
        let urls = ["https://a.com", "https://b.com", "https://c.com"];
        let mut last = None;
        for (i, url) in urls.iter().enumerate() {
            let params = json!({"action": "navigate", "url": url});
            last = d.record_tool_call_at(ToolCallRecord::new("browser", &params), i as i64);
        }
        let event = last.unwrap();
        assert_eq!(event.kind, AnomalyKind::ExcessiveNavigation);
        assert!(event.message.contains("3 times"));
    }

    #[test]
    fn test_navigation_action_case_folded() {
        let (mut d, _dir) = detector(AnomalyConfig {
            max_browser_navigations: 2,
            max_repeat_calls: 1000,
            max_burst_calls: 1000,
            ..config()
        });
        let a = json!({"action": "Navigate", "url": "a"});
        let b = json!({"action": "NAVIGATE", "url": "b"});
        d.record_tool_call_at(ToolCallRecord::new("browser", &a), 0);
        let event = d.record_tool_call_at(ToolCallRecord::new("browser", &b), 1);
        assert_eq!(event.map(|e| e.kind), Some(AnomalyKind::ExcessiveNavigation));
    }

    #[test]
    fn test_non_navigate_actions_not_counted() {
        let (mut d, _dir) = detector(AnomalyConfig {
            max_browser_navigations: 2,
            max_repeat_calls: 1000,
            max_burst_calls: 1000,
            ..config()
        });
        let snapshot = json!({"action": "snapshot"});
        let click = json!({"action": "click", "selector": "#btn"});
        let other_tool = json!({"action": "navigate"});
        d.record_tool_call_at(ToolCallRecord::new("browser", &snapshot), 0);
        d.record_tool_call_at(ToolCallRecord::new("browser", &click), 1);
        d.record_tool_call_at(ToolCallRecord::new("web", &other_tool), 2);
        d.record_tool_call_at(ToolCallRecord::new("browser", &json!({"action": 7})), 3);
        assert!(d.anomalies().is_empty());
    }

    #[test]
    fn test_navigation_is_not_windowed() {
        let (mut d, _dir) = detector(AnomalyConfig {
            max_browser_navigations: 3,
            burst_window_ms: 10,
            max_repeat_calls: 1000,
            max_burst_calls: 1000,
            ..config()
        });
        let mut last = None;
        for i in 0..3 {
            let params = json!({"action": "navigate", "url": i});
            last = d.record_tool_call_at(ToolCallRecord::new("browser", &params), i * 1_000_000);
        }
        assert_eq!(last.map(|e| e.kind), Some(AnomalyKind::ExcessiveNavigation));
    }

    #[test]
    fn test_error_loop() {
        let (mut d, _dir) = detector(AnomalyConfig {
            max_repeat_calls: 3,
            ..config()
        });
        let mut last = None;
        for i in 0..3 {
            let params = json!({"command": format!("bad-{i}")});
            let call = ToolCallRecord::new("exec", &params).with_error("ENOENT");
            last = d.record_tool_call_at(call, i);
        }
        let event = last.unwrap();
        assert_eq!(event.kind, AnomalyKind::ErrorLoop);
        assert!(event.message.contains("3 times"));
    }

    #[test]
    fn test_success_resets_error_loop() {
        let (mut d, _dir) = detector(AnomalyConfig {
            max_repeat_calls: 3,
            max_burst_calls: 1000,
            ..config()
        });
        let a = json!({"command": "a"});
        let b = json!({"command": "b"});
        let c = json!({"command": "c"});
        let e = json!({"command": "e"});
        let f = json!({"command": "f"});
        d.record_tool_call_at(ToolCallRecord::new("exec", &a).with_error("FAIL"), 0);
        d.record_tool_call_at(ToolCallRecord::new("exec", &b).with_error("FAIL"), 1);
        d.record_tool_call_at(ToolCallRecord::new("exec", &c), 2);
        assert!(d.record_tool_call_at(ToolCallRecord::new("exec", &e).with_error("FAIL"), 3).is_none());
        assert!(d.record_tool_call_at(ToolCallRecord::new("exec", &f).with_error("FAIL"), 4).is_none());
        assert!(d.anomalies().is_empty());
    }

    #[test]
    fn test_different_error_restarts_streak() {
        let (mut d, _dir) = detector(AnomalyConfig {
            max_repeat_calls: 2,
            max_burst_calls: 1000,
            ..config()
        });
        let a = json!({"n": 1});
        let b = json!({"n": 2});
        d.record_tool_call_at(ToolCallRecord::new("exec", &a).with_error("E1"), 0);
        assert!(d.record_tool_call_at(ToolCallRecord::new("exec", &b).with_error("E2"), 1).is_none());
    }

    #[test]
    fn test_one_signal_per_call() {
        // Repeat-loop and burst both trip on the same call; only repeat fires.
        let (mut d, _dir) = detector(AnomalyConfig {
            max_repeat_calls: 2,
            max_burst_calls: 2,
            ..config()
        });
        let params = json!({"x": 1});
        let call = ToolCallRecord::new("t", &params);
        d.record_tool_call_at(call, 0);
        let event = d.record_tool_call_at(call, 1).unwrap();
        assert_eq!(event.kind, AnomalyKind::RepeatLoop);
        assert_eq!(d.anomalies().len(), 1);

        // Burst window was not consumed by the short-circuit, so it fires next.
        let other = json!({"x": 2});
        let event = d.record_tool_call_at(ToolCallRecord::new("t", &other), 2).unwrap();
        assert_eq!(event.kind, AnomalyKind::Burst);
    }

    #[test]
    fn test_anomalies_snapshot_in_order() {
        let (mut d, _dir) = detector(AnomalyConfig {
            max_repeat_calls: 2,
            ..config()
        });
        let params = json!({"command": "ls"});
        let call = ToolCallRecord::new("exec", &params);
        d.record_tool_call_at(call, 0);
        d.record_tool_call_at(call, 1);

        let mut snapshot = d.anomalies();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].kind, AnomalyKind::RepeatLoop);
        snapshot.clear();
        assert_eq!(d.anomalies().len(), 1);
    }

    #[test]
    fn test_should_block_log_and_warn_never_block() {
        for action in [AnomalyAction::Log, AnomalyAction::Warn] {
            let (mut d, _dir) = detector(AnomalyConfig {
                max_repeat_calls: 2,
                action,
                ..config()
            });
            let params = json!({"command": "ls"});
            let call = ToolCallRecord::new("exec", &params);
            d.record_tool_call_at(call, 0);
            d.record_tool_call_at(call, 1);
            assert_eq!(d.anomalies().len(), 1);
            assert_eq!(d.should_block(), AnomalyBlock::Allow);
        }
    }

    #[test]
    fn test_should_block_abort() {
        let (mut d, _dir) = detector(AnomalyConfig {
            max_repeat_calls: 2,
            action: AnomalyAction::Abort,
            ..config()
        });
        assert!(!d.should_block().is_blocked());

        let params = json!({"command": "ls"});
        let call = ToolCallRecord::new("exec", &params);
        d.record_tool_call_at(call, 0);
        d.record_tool_call_at(call, 1);

        let block = d.should_block();
        assert!(block.is_blocked());
        assert_eq!(
            block.reason(),
            Some("Anomaly abort [repeat-loop]: Tool \"exec\" called 2 times with identical params")
        );

        // Sticky: a clean call does not lift the block.
        let other = json!({"command": "pwd"});
        d.record_tool_call_at(ToolCallRecord::new("exec", &other), 2);
        assert!(d.should_block().is_blocked());
    }

    #[test]
    fn test_block_reason_follows_latest_anomaly() {
        let (mut d, _dir) = detector(AnomalyConfig {
            max_repeat_calls: 2,
            max_browser_navigations: 1,
            max_burst_calls: 1000,
            action: AnomalyAction::Abort,
            ..config()
        });
        let params = json!({"command": "ls"});
        let call = ToolCallRecord::new("exec", &params);
        d.record_tool_call_at(call, 0);
        d.record_tool_call_at(call, 1);
        assert!(d.should_block().reason().unwrap().contains("repeat-loop"));

        let nav = json!({"action": "navigate"});
        d.record_tool_call_at(ToolCallRecord::new("browser", &nav), 2);
        assert!(d.should_block().reason().unwrap().contains("excessive-navigation"));
    }

    #[test]
    fn test_audit_written_in_warn_mode_only() {
        let params = json!({"command": "ls"});
        let call = ToolCallRecord::new("exec", &params);

        let (mut d, dir) = detector(AnomalyConfig {
            max_repeat_calls: 2,
            action: AnomalyAction::Warn,
            ..config()
        });
        d.record_tool_call_at(call, 0);
        d.record_tool_call_at(call, 1);
        let path = crate::audit::resolve_audit_log_path(Some(dir.path()));
        let content = std::fs::read_to_string(&path).unwrap();
        let entry: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
        assert_eq!(entry["event"], "anomaly_detected");
        assert_eq!(entry["anomalyType"], "repeat-loop");
        assert_eq!(entry["toolName"], "exec");

        let (mut d, dir) = detector(AnomalyConfig {
            max_repeat_calls: 2,
            action: AnomalyAction::Log,
            ..config()
        });
        d.record_tool_call_at(call, 0);
        d.record_tool_call_at(call, 1);
        assert!(!crate::audit::resolve_audit_log_path(Some(dir.path())).exists());
    }

    #[test]
    fn test_event_wire_shape() {
        let event = AnomalyEvent {
            kind: AnomalyKind::ExcessiveNavigation,
            message: "m".to_string(),
            tool_name: "browser".to_string(),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "excessive-navigation");
        assert_eq!(value["toolName"], "browser");
    }
}
