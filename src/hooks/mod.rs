//! Hook seam between the host runtime and guard logic.

mod guard;

pub use guard::GuardHooks;

use crate::decision::BlockResult;
use crate::input::{AfterToolCallEvent, BeforeToolCallEvent, HookContext};

/// A handler pair the host invokes around every tool call.
pub trait ToolHook {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Return `Some` to veto the call.
    fn before_tool_call(
        &mut self,
        event: &BeforeToolCallEvent,
        ctx: &HookContext,
    ) -> Option<BlockResult>;

    fn after_tool_call(&mut self, event: &AfterToolCallEvent, ctx: &HookContext);
}

/// Registered hooks, dispatched in descending priority.
#[derive(Default)]
pub struct HookRunner {
    hooks: Vec<(i32, Box<dyn ToolHook>)>,
}

impl HookRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook. Equal priorities keep registration order.
    pub fn register(&mut self, priority: i32, hook: Box<dyn ToolHook>) {
        let pos = self.hooks.partition_point(|(p, _)| *p >= priority);
        self.hooks.insert(pos, (priority, hook));
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Run `before_tool_call` hooks until one blocks.
    pub fn before_tool_call(
        &mut self,
        event: &BeforeToolCallEvent,
        ctx: &HookContext,
    ) -> Option<BlockResult> {
        for (_, hook) in &mut self.hooks {
            if let Some(result) = hook.before_tool_call(event, ctx) {
                tracing::debug!(hook = hook.name(), tool = %event.tool_name, "Tool call blocked");
                return Some(result);
            }
        }
        None
    }

    /// Run every `after_tool_call` hook.
    pub fn after_tool_call(&mut self, event: &AfterToolCallEvent, ctx: &HookContext) {
        for (_, hook) in &mut self.hooks {
            hook.after_tool_call(event, ctx);
        }
    }
}
