//! Audit logging for security events.
//!
//! Entries go to `<state dir>/security/audit.jsonl`, one compact JSON object
//! per line. Writes never fail from the caller's point of view: any I/O
//! error is logged and dropped so auditing cannot abort a tool call.

use chrono::Utc;
use serde::Serialize;
use std::fs::{DirBuilder, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::anomaly::AnomalyKind;

/// An audit log entry.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEntry {
    /// Milliseconds since the Unix epoch.
    pub ts: i64,
    #[serde(flatten)]
    pub event: AuditEvent,
}

/// Event-specific payload, tagged by `event`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum AuditEvent {
    CommandBlocked {
        tool_name: String,
        command: String,
        rule_name: String,
        reason: String,
    },
    AnomalyDetected {
        tool_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        anomaly_type: Option<AnomalyKind>,
        reason: String,
    },
    CostLimitExceeded {
        #[serde(skip_serializing_if = "Option::is_none")]
        session_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
}

impl AuditEntry {
    /// Stamp an event with the current time.
    pub fn now(event: AuditEvent) -> Self {
        Self {
            ts: Utc::now().timestamp_millis(),
            event,
        }
    }
}

/// Resolve the process-wide state directory.
///
/// `AGENT_TOOL_GUARD_STATE_DIR` wins, then `~/.agent-tool-guard`, then the
/// OS temp dir when no home directory is known.
pub fn resolve_state_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("AGENT_TOOL_GUARD_STATE_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .map(|h| h.join(".agent-tool-guard"))
        .unwrap_or_else(std::env::temp_dir)
}

/// Resolve the audit log file path under `state_dir` (or the default).
pub fn resolve_audit_log_path(state_dir: Option<&Path>) -> PathBuf {
    let dir = state_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(resolve_state_dir);
    dir.join("security").join("audit.jsonl")
}

/// Append-only JSONL sink. Cheap to clone; every clone writes the same file.
#[derive(Debug, Clone)]
pub struct AuditSink {
    path: PathBuf,
}

impl AuditSink {
    /// Sink writing to an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Sink writing to `security/audit.jsonl` under the given state dir.
    pub fn for_state_dir(state_dir: Option<&Path>) -> Self {
        Self::new(resolve_audit_log_path(state_dir))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append an entry. Never fails; errors are logged and discarded.
    pub fn append(&self, entry: &AuditEntry) {
        if let Err(e) = self.try_append(entry) {
            tracing::warn!("Failed to write audit entry to {}: {}", self.path.display(), e);
        }
    }

    /// Stamp `event` with the current time and append it.
    pub fn record(&self, event: AuditEvent) {
        self.append(&AuditEntry::now(event));
    }

    fn try_append(&self, entry: &AuditEntry) -> std::io::Result<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            create_private_dir(dir)?;
        }

        // One buffer, one write: concurrent appenders interleave per line.
        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');

        let mut file = open_private_append(&self.path)?;
        file.write_all(&line)
    }
}

#[cfg(unix)]
fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    DirBuilder::new().recursive(true).mode(0o700).create(dir)
}

#[cfg(not(unix))]
fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    DirBuilder::new().recursive(true).create(dir)
}

#[cfg(unix)]
fn open_private_append(path: &Path) -> std::io::Result<std::fs::File> {
    use std::os::unix::fs::OpenOptionsExt;
    OpenOptions::new()
        .create(true)
        .append(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn open_private_append(path: &Path) -> std::io::Result<std::fs::File> {
    OpenOptions::new().create(true).append(true).open(path)
}
