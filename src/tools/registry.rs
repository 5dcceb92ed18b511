use super::traits::{Tool, ToolResult, ToolSpec};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Named tool instances shared by every staff agent.
#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. Replaces any existing tool with the same name.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Sorted list of registered tool names.
    pub fn tool_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Specs for the named subset, in the order given. Unknown names are skipped.
    pub fn specs_for(&self, names: &[&str]) -> Vec<ToolSpec> {
        names
            .iter()
            .filter_map(|name| self.tools.get(*name))
            .map(|tool| tool.spec())
            .collect()
    }

    /// Run a tool by name. An unknown tool is reported to the model as a
    /// failed result rather than aborting the turn.
    pub async fn execute(&self, name: &str, args: Value) -> anyhow::Result<ToolResult> {
        let Some(tool) = self.tools.get(name) else {
            return Ok(ToolResult::failed(format!("Tool not found: {name}")));
        };
        tracing::debug!(tool = name, "Executing tool");
        tool.execute(args).await
    }
}
